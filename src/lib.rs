//! Zoho CRM Proxy Service Library
//!
//! This library provides a thin HTTP facade over a handful of Zoho CRM
//! operations. It handles the OAuth2 authorization-code flow (login redirect
//! and callback token exchange) and proxies contact listing and creation to
//! the Zoho CRM REST API, relaying upstream responses and errors to the
//! caller. The service holds no state between requests; callers supply their
//! own access token on every contacts call.
//!
//! # Modules
//!
//! - `api` - HTTP API endpoints exposed by the proxy server
//! - `config` - Configuration loaded from environment variables
//! - `error` - Upstream and API error types and response mapping
//! - `server` - HTTP server setup and routing
//! - `types` - Data structures and type definitions
//! - `zoho` - Zoho accounts and CRM API client implementation

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod types;
pub mod zoho;

/// Prints an informational message with a blue bullet point.
///
/// Creates a formatted output line with a distinctive blue "o" indicator
/// followed by the provided message. Used for general information and
/// status updates throughout the application.
///
/// # Example
///
/// ```
/// info!("Listening on http://localhost:{}", port);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// Creates a formatted output line with a green "✓" indicator to signify
/// successful completion of operations.
///
/// # Example
///
/// ```
/// success!("Token exchange completed");
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Used for unrecoverable startup errors (bad configuration, failure to bind
/// the listening socket) where continuing makes no sense. Request-level
/// failures use the `warning!` macro instead so the server keeps serving.
///
/// # Behavior
///
/// This macro will cause the program to exit immediately after printing
/// the error message.
///
/// # Example
///
/// ```
/// error!("Missing required environment variable: {}", var_name);
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// Creates a formatted output line with a yellow "!" indicator to highlight
/// issues that don't require program termination, such as a failed upstream
/// call while handling a single request.
///
/// # Example
///
/// ```
/// warning!("Token exchange failed: {}", err);
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
