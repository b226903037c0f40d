use colored::Colorize;

use crate::core::models::target::Target;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "ok".green().bold(), msg);
}

/// Print a warning message.
pub fn warning(msg: &str) {
    println!("{} {}", "--".yellow().bold(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "error:".red().bold(), msg);
}

/// Print a section header.
pub fn header(msg: &str) {
    println!("\n{}", msg.bold());
}

/// Closing line for a completed push.
pub fn pushed(target: &Target) {
    println!(
        "{} configuration pushed to {}",
        "ok".green().bold(),
        target.to_string().bold()
    );
}

/// Closing line for a run the operator declined. Cancellation is a
/// normal outcome; this goes to stdout and the exit code stays zero.
pub fn cancelled(reason: &str) {
    println!("{} cancelled: {reason}", "--".yellow().bold());
}
