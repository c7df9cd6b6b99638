//! # Turo Register Library
//!
//! Core library for the Turo POS terminal register.
//! This is the entry point that loads configuration and runs the session.
//!
//! ## Module Organization
//! ```text
//! turo_register/
//! ├── lib.rs          ◄─── You are here (startup & session wiring)
//! ├── config.rs       ◄─── Store settings + menu (TOML, env overrides)
//! ├── register.rs     ◄─── Register commands (add, clear, checkout)
//! ├── view.rs         ◄─── Serializable views of core types
//! ├── terminal.rs     ◄─── Interactive session loop & rendering
//! └── error.rs        ◄─── Register error type
//! ```
//!
//! ## Layering
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Turo POS Register                                │
//! │                                                                         │
//! │  terminal.rs ──► reads operator input, renders menu/cart/summary        │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  register.rs ──► one command per operator action, returns views         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  turo-core ────► Catalog, Cart, Money (pure, no I/O)                    │
//! │                                                                         │
//! │  All terminal and filesystem I/O stays in this crate. turo-core         │
//! │  never prints, reads files, or looks at the clock.                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod config;
pub mod error;
pub mod register;
pub mod terminal;
pub mod view;

use tracing::info;
use tracing_subscriber::EnvFilter;

pub use config::RegisterConfig;
pub use error::{RegisterError, RegisterResult};
pub use register::Register;

/// Runs the register: load config, build the catalog, start the session.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Register Startup                                  │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, writing to stderr             │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • TOML file from the platform config directory (if present)         │
/// │     • TURO_* env overrides, then validation                             │
/// │     • Falls back to the built-in menu on any load failure               │
/// │                                                                         │
/// │  3. Build the Catalog ────────────────────────────────────────────────► │
/// │     • Menu entries become immutable catalog items                       │
/// │                                                                         │
/// │  4. Run the Session ──────────────────────────────────────────────────► │
/// │     • Interactive loop on stdin/stdout until quit or end of input       │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> RegisterResult<()> {
    init_tracing();

    info!("Starting Turo POS register");

    let config = RegisterConfig::load_or_default(None);
    let catalog = config.catalog()?;
    info!(items = catalog.len(), store = %config.store.name, "Menu loaded");

    let mut register = Register::new(catalog, config.store);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    terminal::run_session(&mut register, stdin.lock(), &mut out)
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr; stdout is the register screen.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=turo=trace` - Show trace for turo crates only
/// - Default: INFO level
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,turo=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
