//! Writes generated component and hook code to the project tree.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::error::{AiTermError, Result};
use crate::scaffold::extract::CodeBlock;

/// Paths written for one generated component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentFiles {
    pub component: PathBuf,
    /// Absent when the response carried no style block.
    pub style: Option<PathBuf>,
}

fn name_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^[A-Za-z0-9_-]+$").unwrap_or_else(|e| panic!("invalid name regex: {e}"))
    })
}

/// Rejects names that would escape the target directory or produce odd
/// file names.
pub fn validate_name(name: &str) -> Result<()> {
    if name_regex().is_match(name) {
        Ok(())
    } else {
        Err(AiTermError::InvalidInput(format!(
            "invalid name '{name}': only letters, digits, '-' and '_' are allowed"
        )))
    }
}

/// Eager validation for the component flow: bad names and missing target
/// directories are rejected before the model is ever called.
pub fn validate_name_and_path(root: &Path, name: &str, custom_path: Option<&str>) -> Result<()> {
    validate_name(name)?;
    if let Some(path) = custom_path {
        let dir = root.join("src").join(path);
        if !dir.is_dir() {
            return Err(AiTermError::InvalidInput(format!(
                "target directory '{}' does not exist",
                dir.display()
            )));
        }
    }
    Ok(())
}

fn component_extension(framework: &str, language: &str) -> &'static str {
    if framework.eq_ignore_ascii_case("vue") {
        "vue"
    } else if language.eq_ignore_ascii_case("typescript") {
        "tsx"
    } else {
        "jsx"
    }
}

fn hook_extension(language: &str) -> &'static str {
    if language.eq_ignore_ascii_case("typescript") {
        "ts"
    } else {
        "js"
    }
}

fn style_languages() -> &'static [&'static str] {
    &["css", "less", "scss", "sass"]
}

fn is_style_block(block: &CodeBlock) -> bool {
    style_languages().contains(&block.language.as_str())
}

/// Writes a component under `<root>/src/<target>/<name>/`.
///
/// The component source lands in `index.<ext>` and any style block in
/// `index.module.<css_flavor>`. `target` defaults to `components` when
/// no custom path was given; a custom path must already exist under
/// `<root>/src`.
pub fn write_component(
    root: &Path,
    name: &str,
    custom_path: Option<&str>,
    framework: &str,
    language: &str,
    css_flavor: &str,
    blocks: &[CodeBlock],
) -> Result<ComponentFiles> {
    validate_name_and_path(root, name, custom_path)?;

    let src_dir = root.join("src");
    let target_dir = match custom_path {
        Some(path) => src_dir.join(path),
        None => src_dir.join("components"),
    };

    let (code_blocks, style_blocks): (Vec<_>, Vec<_>) =
        blocks.iter().partition(|b| !is_style_block(b));

    let code = code_blocks
        .first()
        .ok_or_else(|| AiTermError::Other("the response contained no code block".to_string()))?;

    let component_dir = target_dir.join(name);
    fs::create_dir_all(&component_dir)?;

    let component_path =
        component_dir.join(format!("index.{}", component_extension(framework, language)));
    fs::write(&component_path, &code.content)?;
    debug!(path = %component_path.display(), "wrote component");

    let style = match style_blocks.first() {
        Some(block) => {
            let style_path = component_dir.join(format!("index.module.{css_flavor}"));
            fs::write(&style_path, &block.content)?;
            debug!(path = %style_path.display(), "wrote styles");
            Some(style_path)
        }
        None => None,
    };

    Ok(ComponentFiles {
        component: component_path,
        style,
    })
}

/// Writes a hook to `<root>/src/hooks/<name>.<ts|js>`.
pub fn write_hook(root: &Path, name: &str, language: &str, blocks: &[CodeBlock]) -> Result<PathBuf> {
    validate_name(name)?;

    let code = blocks
        .iter()
        .find(|b| !is_style_block(b))
        .ok_or_else(|| AiTermError::Other("the response contained no code block".to_string()))?;

    let hooks_dir = root.join("src").join("hooks");
    fs::create_dir_all(&hooks_dir)?;

    let hook_path = hooks_dir.join(format!("{name}.{}", hook_extension(language)));
    fs::write(&hook_path, &code.content)?;
    debug!(path = %hook_path.display(), "wrote hook");

    Ok(hook_path)
}
