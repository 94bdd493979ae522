//! Command implementations behind the CLI subcommands.

pub mod commit;
pub mod component;
pub mod config;
pub mod hooks;
pub mod init;
pub mod list;
pub mod review;

/// Flags shared by the commit flow.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommitOptions {
    /// Skip confirmation and commit directly.
    pub yes: bool,
    /// Generate and print the message without committing.
    pub dry_run: bool,
}
