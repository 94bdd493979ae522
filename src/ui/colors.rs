use colored::Colorize;

use crate::git::DiffStats;

/// Success message (green ✓)
pub fn success(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "✓".green().bold(), msg.green());
    } else {
        println!("✓ {}", msg);
    }
}

/// Error message (red ✗)
pub fn error(msg: &str, colored: bool) {
    if colored {
        eprintln!("{} {}", "✗".red().bold(), msg.red());
    } else {
        eprintln!("✗ {}", msg);
    }
}

/// Warning message (yellow ⚠)
pub fn warning(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "⚠".yellow().bold(), msg.yellow());
    } else {
        println!("⚠ {}", msg);
    }
}

/// Info message (blue ℹ)
pub fn info(msg: &str, colored: bool) {
    if colored {
        println!("{} {}", "ℹ".blue().bold(), msg.blue());
    } else {
        println!("ℹ {}", msg);
    }
}

/// Step hint (grey)
pub fn step(step: &str, msg: &str, colored: bool) {
    if colored {
        println!(
            "{} {}",
            format!("[{}]", step).bright_black().bold(),
            msg.bright_black()
        );
    } else {
        println!("[{}] {}", step, msg);
    }
}

/// Formats diff statistics in git's own shortstat style.
pub fn format_diff_stats(stats: &DiffStats, colored: bool) -> String {
    let files_str = if stats.files_changed.len() == 1 {
        "1 file".to_string()
    } else {
        format!("{} files", stats.files_changed.len())
    };

    let insertions_str = if stats.insertions == 1 {
        "1 insertion(+)".to_string()
    } else {
        format!("{} insertions(+)", stats.insertions)
    };

    let deletions_str = if stats.deletions == 1 {
        "1 deletion(-)".to_string()
    } else {
        format!("{} deletions(-)", stats.deletions)
    };

    if colored {
        format!(
            "{} changed, {}, {}",
            files_str.bold(),
            insertions_str.green(),
            deletions_str.red()
        )
    } else {
        format!(
            "{} changed, {}, {}",
            files_str, insertions_str, deletions_str
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_diff_stats_plural() {
        let stats = DiffStats {
            files_changed: vec!["a.rs".to_string(), "b.rs".to_string()],
            insertions: 3,
            deletions: 1,
        };
        assert_eq!(
            format_diff_stats(&stats, false),
            "2 files changed, 3 insertions(+), 1 deletion(-)"
        );
    }

    #[test]
    fn test_format_diff_stats_singular() {
        let stats = DiffStats {
            files_changed: vec!["a.rs".to_string()],
            insertions: 1,
            deletions: 0,
        };
        assert_eq!(
            format_diff_stats(&stats, false),
            "1 file changed, 1 insertion(+), 0 deletions(-)"
        );
    }
}
