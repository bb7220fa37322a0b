//! Console and JSON rendering of warnings.

use crate::types::WarningRecord;
use anyhow::{Context, Result};
use colored::Colorize;

/// Prints warnings in analyzer order, then a one-line summary.
pub fn print_warnings(warnings: &[WarningRecord]) {
    for w in warnings {
        println!("{}", format_warning(w));
    }
    println!("{}", summary(warnings.len()));
}

/// Prints warnings as a JSON array.
///
/// # Errors
/// Returns error if serialization fails.
pub fn print_json(warnings: &[WarningRecord]) -> Result<()> {
    let text = serde_json::to_string_pretty(warnings).context("Failed to serialize warnings")?;
    println!("{text}");
    Ok(())
}

fn format_warning(w: &WarningRecord) -> String {
    let location = format!("{}:{}", w.file_path, w.line);
    let context = w
        .context
        .as_deref()
        .map(|c| format!("{c} "))
        .unwrap_or_default();
    format!(
        "{} {} {}{}",
        location.blue(),
        format!("[{}]", w.smell_type).yellow(),
        context,
        w.message
    )
}

fn summary(count: usize) -> String {
    if count == 0 {
        return "[OK] No smells detected.".green().bold().to_string();
    }
    let noun = if count == 1 { "smell" } else { "smells" };
    format!("{count} {noun} detected.").yellow().bold().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_includes_location_type_and_context() {
        colored::control::set_override(false);
        let mut w = WarningRecord::new("app/user.rb", 4, "has approx 8 statements", "TooManyStatements");
        w.context = Some("User#save".into());
        assert_eq!(
            format_warning(&w),
            "app/user.rb:4 [TooManyStatements] User#save has approx 8 statements"
        );
    }

    #[test]
    fn summary_pluralizes() {
        colored::control::set_override(false);
        assert_eq!(summary(1), "1 smell detected.");
        assert_eq!(summary(3), "3 smells detected.");
        assert_eq!(summary(0), "[OK] No smells detected.");
    }
}
