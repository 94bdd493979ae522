//! Code scaffolding: fenced-block extraction and file writers for
//! generated components and hooks.

pub mod extract;
pub mod writer;

pub use extract::{extract_code_blocks, strip_emphasis, CodeBlock};
pub use writer::{validate_name_and_path, write_component, write_hook, ComponentFiles};
