//! # Turo Register Entry Point
//!
//! Binary entry point for the terminal register.
//!
//! ## Application Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Turo POS Register                               │
//! │                                                                         │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                        Terminal (stdin/stdout)                    │  │
//! │  │   > Burger                 • menu + cart rendering                │  │
//! │  │   > checkout               • purchase summary                     │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                    turo-register (this crate)                     │  │
//! │  │                                                                  │  │
//! │  │  main.rs ────► Runs the register, reports fatal errors           │  │
//! │  │  lib.rs ─────► Logging, config load, session wiring              │  │
//! │  │  register.rs ► add_to_cart, clear_cart, checkout                 │  │
//! │  └──────────────────────────────┬───────────────────────────────────┘  │
//! │                                 ▼                                       │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │                           turo-core                               │  │
//! │  │  Catalog, Cart, Money (pure domain logic, no I/O)                 │  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

fn main() {
    // The actual setup is in lib.rs for better testability
    if let Err(err) = turo_register::run() {
        eprintln!("turo-register: {err}");
        std::process::exit(1);
    }
}
