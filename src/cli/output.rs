//! Report layout and progress spinner for CLI

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

const REPORT_WIDTH: usize = 44;

/// Create a ticking spinner; the search blocks this thread, so the spinner
/// redraws from its own.
pub fn create_spinner(message: &str) -> crate::Result<ProgressBar> {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg} [{elapsed}]")
            .map_err(|e| crate::Error::ProgressBarTemplate {
                message: e.to_string(),
            })?,
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(Duration::from_millis(100));
    Ok(pb)
}

/// Title framed by rules the width of the report table
pub fn print_banner(title: &str) {
    let rule = "=".repeat(REPORT_WIDTH);
    println!("{rule}\n{title}\n{rule}");
}

/// One row of the two-engine table; numbers are right-aligned under the headers
pub fn table_row(label: &str, minimax: &str, alpha_beta: &str) -> String {
    format!("{label:<16}{minimax:>14}{alpha_beta:>14}")
}

/// A labelled value outside the table
pub fn print_field(label: &str, value: &str) {
    println!("{:<16}{value}", format!("{label}:"));
}

/// Group digits in threes: 549954 -> "549,954"
pub fn format_number(n: u64) -> String {
    let digits = n.to_string();
    digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|group| std::str::from_utf8(group).unwrap_or_default())
        .collect::<Vec<_>>()
        .join(",")
}
