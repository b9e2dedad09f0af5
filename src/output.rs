use owo_colors::OwoColorize;

use crate::collector::RunSummary;

/// Prefix for all status output
const TALLY: &str = "🔢";

/// Print a status message (cyan)
pub fn status(message: &str) {
    println!("{} {}", TALLY, message.cyan());
}

/// Print an info message (white/default)
pub fn info(message: &str) {
    println!("{} {}", TALLY, message);
}

/// Print a success message (green)
pub fn success(message: &str) {
    println!("{} {}", TALLY, message.green());
}

/// Print a warning (yellow)
pub fn warn(message: &str) {
    println!("{} {}", TALLY, message.yellow());
}

/// Print an error (red, to stderr)
pub fn error(message: &str) {
    eprintln!("{} {}", TALLY, message.red());
}

/// Print a startup banner
pub fn banner() {
    println!();
    println!("{}", "═".repeat(50).bright_cyan());
    println!(
        "{}  {} {}",
        TALLY,
        "GUESS TALLY".bright_cyan().bold(),
        format!("v{}", env!("CARGO_PKG_VERSION")).bright_white()
    );
    println!("{}", "═".repeat(50).bright_cyan());
    println!();
}

/// Print a section header
pub fn section(title: &str) {
    println!();
    println!(
        "{}  {}",
        "─".repeat(3).bright_white().dimmed(),
        title.bright_white().bold()
    );
}

/// Print configuration info
pub fn config_item(key: &str, value: &str) {
    println!(
        "{} {} {}",
        TALLY,
        format!("{}:", key).bright_white(),
        value.bright_cyan()
    );
}

/// Explain which credentials are needed and which are missing
pub fn missing_credentials(required: &[&str], missing: &[&str]) {
    eprintln!(
        "{}",
        "Please make sure you have the following environment variables set:".red()
    );
    for name in required {
        if missing.contains(name) {
            eprintln!(" - {} {}", name.bold(), "(missing)".red());
        } else {
            eprintln!(" - {}", name);
        }
    }
    eprintln!();
}

/// Print the end-of-run totals in a box
pub fn run_summary(summary: &RunSummary) {
    println!();
    println!("{}", "┌─────────────────────────────────────────┐".green());
    println!(
        "{}  📄 Wrote {}",
        "│".green(),
        summary.output.display().to_string().green().bold()
    );
    println!(
        "{}  Statuses scanned: {}",
        "│".green(),
        summary.scanned.to_string().bright_white().bold()
    );
    println!(
        "{}  Replies to target: {}",
        "│".green(),
        summary.replies.to_string().bright_white().bold()
    );
    println!(
        "{}  Parsed automatically: {}",
        "│".green(),
        summary.automatic.to_string().bright_white().bold()
    );
    println!(
        "{}  Entered by hand: {}",
        "│".green(),
        summary.manual.to_string().bright_white().bold()
    );
    println!(
        "{}  Skipped: {}",
        "│".green(),
        summary.skipped.to_string().bright_white().bold()
    );
    println!(
        "{}  Distinct guessers: {}",
        "│".green(),
        summary.guessers.to_string().bright_white().bold()
    );
    println!("{}", "└─────────────────────────────────────────┘".green());
    println!();
}
