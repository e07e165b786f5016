//! Terminal output for ado-gov

use colored::*;

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green(), message);
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow(), message);
}

/// Print the request line a command would send
pub fn print_request(method: &str, url: &str) {
    println!("{} {}", method.bold(), url);
}

/// Print an API response body under an error line, indented
pub fn print_body(body: &str) {
    for line in body.lines().filter(|line| !line.trim().is_empty()) {
        eprintln!("  {}", line.dimmed());
    }
}
