//! Spotify Token Relay Library
//!
//! A small backend that performs the OAuth 2.0 authorization-code exchange
//! with Spotify on behalf of a browser frontend. It redirects the user to
//! Spotify's consent page, swaps the returned code for an access token, keeps
//! that token in memory for the frontend to fetch, and resolves shared track
//! links to playable track URIs.
//!
//! # Modules
//!
//! - `api` - HTTP route handlers
//! - `config` - Configuration management and environment variables
//! - `management` - In-memory session holding the token and pending logins
//! - `server` - Router assembly and the HTTP listener
//! - `spotify` - Outbound calls to the Spotify accounts service and Web API
//! - `types` - Data structures and type definitions
//! - `utils` - Utility functions and helpers
//!
//! # Example
//!
//! ```ignore
//! use spotrelay::{config, server};
//!
//! #[tokio::main]
//! async fn main() -> spotrelay::Res<()> {
//!     config::load_env()?;
//!     let state = server::AppState::new(config::Config::from_env());
//!     server::start_api_server(state).await
//! }
//! ```

pub mod api;
pub mod config;
pub mod management;
pub mod server;
pub mod spotify;
pub mod types;
pub mod utils;

/// Boxed-error result used by startup plumbing (config, listener, serve).
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints a status line prefixed with a blue `o`.
///
/// Accepts the same arguments as `println!`.
///
/// ```ignore
/// info!("Listening on http://{}", addr);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a line prefixed with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a red `!` line and terminates the process with exit code 1.
///
/// Reserved for startup failures the relay cannot run without. Request
/// handlers never call it.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a line prefixed with a yellow `!` for recoverable problems, such as
/// a rejected callback or a failed upstream call.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
