//! Extraction-to-writer pipeline for generated components and hooks.

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use ai_terminal_rs::scaffold::{extract_code_blocks, write_component, write_hook};

const COMPONENT_RESPONSE: &str = r#"Here is the component you asked for:

```tsx
import styles from './index.module.scss';

export const Pagination = () => <nav className={styles.root} />;
```

And the styles:

```scss
.root {
  display: flex;
}
```

Let me know if you need anything else!
"#;

#[test]
fn component_response_lands_as_two_files() {
    let dir = TempDir::new().unwrap();
    let blocks = extract_code_blocks(COMPONENT_RESPONSE);
    assert_eq!(blocks.len(), 2);

    let files = write_component(
        dir.path(),
        "Pagination",
        None,
        "React",
        "TypeScript",
        "scss",
        &blocks,
    )
    .unwrap();

    let component = std::fs::read_to_string(&files.component).unwrap();
    assert!(component.contains("export const Pagination"));
    assert!(!component.contains("```"));

    let style = std::fs::read_to_string(files.style.unwrap()).unwrap();
    assert!(style.contains("display: flex;"));
    assert!(!style.contains("Let me know"));
}

#[test]
fn hook_response_split_across_fences_is_joined() {
    let dir = TempDir::new().unwrap();
    let response = "```ts\nimport { useState } from 'react';\n```\n\
Some narration in between.\n\
```ts\nexport function useCounter() {\n  return useState(0);\n}\n```\n";

    let blocks = extract_code_blocks(response);
    let path = write_hook(dir.path(), "useCounter", "TypeScript", &blocks).unwrap();

    let hook = std::fs::read_to_string(path).unwrap();
    assert!(hook.contains("import { useState }"));
    assert!(hook.contains("export function useCounter"));
    assert!(!hook.contains("narration"));
}

#[test]
fn response_without_code_is_an_error() {
    let dir = TempDir::new().unwrap();
    let blocks = extract_code_blocks("Sorry, I cannot help with that.");
    assert!(write_hook(dir.path(), "useNothing", "TypeScript", &blocks).is_err());
}
