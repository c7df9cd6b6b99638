//! # Terminal Session
//!
//! The interactive register screen: a read-eval-render loop on stdin/stdout.
//!
//! ## Session Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Terminal Session                                   │
//! │                                                                         │
//! │   banner + menu + empty cart                                            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │   "> " ──► read line ──► parse_action ──► register command              │
//! │        ▲                                       │                        │
//! │        │                                       ▼                        │
//! │        └────────────── re-render cart / summary / notice                │
//! │                                                                         │
//! │   Sample screen:                                                        │
//! │                                                                         │
//! │     Item              Qty      Price   Subtotal                         │
//! │     ------------------------------------------------                    │
//! │     Burger              2     ₱80.00    ₱160.00                         │
//! │     Coke                1     ₱30.00     ₱30.00                         │
//! │     ------------------------------------------------                    │
//! │     Subtotal:                           ₱190.00                         │
//! │     Tax (12%):                           ₱22.80                         │
//! │     Total:                              ₱212.80                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Testability
//! `run_session` is generic over `BufRead` and `Write`, so tests drive it
//! with an in-memory script and assert on the captured output. `run()`
//! wires it to the real stdin/stdout.

use std::io::{self, BufRead, Write};

use turo_core::{Money, VAT_RATE};

use crate::config::StoreSettings;
use crate::error::RegisterResult;
use crate::register::Register;
use crate::view::{CartView, PurchaseSummary};

// =============================================================================
// Actions
// =============================================================================

/// One parsed line of operator input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Ring up an item by name or menu number.
    AddItem(String),
    /// Present the purchase summary.
    Checkout,
    /// Empty the cart.
    ClearCart,
    /// Reprint the menu.
    ShowMenu,
    /// Show the command list.
    Help,
    /// Close the register.
    Quit,
}

/// Parses an input line into an action.
///
/// Command words are matched case-insensitively. Anything that is not a
/// command is treated as an item to ring up, so the common case (typing
/// a menu item) needs no prefix. Returns `None` for blank lines.
pub fn parse_action(input: &str) -> Option<Action> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    match input.to_lowercase().as_str() {
        "checkout" | "co" => Some(Action::Checkout),
        "clear" => Some(Action::ClearCart),
        "menu" => Some(Action::ShowMenu),
        "help" | "?" => Some(Action::Help),
        "quit" | "exit" | "q" => Some(Action::Quit),
        _ => Some(Action::AddItem(input.to_string())),
    }
}

/// Maps a menu number to its item name; anything else passes through.
///
/// Out-of-range numbers pass through unchanged and fail item lookup,
/// which produces the same notice as a misspelled name.
fn resolve_item_name(register: &Register, token: &str) -> String {
    if let Ok(number) = token.parse::<usize>() {
        if let Some(item) = number
            .checked_sub(1)
            .and_then(|idx| register.catalog().items().get(idx))
        {
            return item.name.clone();
        }
    }

    token.to_string()
}

// =============================================================================
// Rendering
// =============================================================================

fn render_banner<W: Write>(out: &mut W, store: &StoreSettings) -> io::Result<()> {
    writeln!(out, "{}", store.name)?;
    writeln!(out, "{}", "=".repeat(store.name.chars().count()))?;
    writeln!(out, "Type a menu item (or its number) to ring it up.")?;
    writeln!(out, "Commands: checkout, clear, menu, help, quit")?;
    writeln!(out)
}

fn render_menu<W: Write>(out: &mut W, register: &Register) -> io::Result<()> {
    let store = register.store();

    writeln!(out, "Menu")?;
    writeln!(out, "{}", "-".repeat(42))?;
    for (idx, item) in register.catalog().items().iter().enumerate() {
        writeln!(
            out,
            "{:>3}) {:<16} {:>10}   {}",
            idx + 1,
            item.name,
            store.format_currency(item.unit_price),
            item.category
        )?;
    }
    writeln!(out, "{}", "-".repeat(42))?;
    writeln!(out)
}

fn render_cart<W: Write>(out: &mut W, view: &CartView, store: &StoreSettings) -> io::Result<()> {
    if view.is_empty() {
        writeln!(out, "  (cart is empty)")?;
        return writeln!(out);
    }

    writeln!(out, "{:<16} {:>4} {:>10} {:>10}", "Item", "Qty", "Price", "Subtotal")?;
    writeln!(out, "{}", "-".repeat(46))?;
    for line in &view.lines {
        writeln!(
            out,
            "{:<16} {:>4} {:>10} {:>10}",
            line.name,
            line.quantity,
            store.format_currency(Money::from_centavos(line.unit_price_centavos)),
            store.format_currency(Money::from_centavos(line.subtotal_centavos)),
        )?;
    }
    writeln!(out, "{}", "-".repeat(46))?;
    render_totals(out, view, store)?;
    writeln!(out)
}

fn render_totals<W: Write>(out: &mut W, view: &CartView, store: &StoreSettings) -> io::Result<()> {
    let label_width = 16 + 1 + 4 + 1 + 10;
    writeln!(
        out,
        "{:<label_width$} {:>10}",
        "Subtotal:",
        store.format_currency(Money::from_centavos(view.totals.subtotal_centavos)),
    )?;
    writeln!(
        out,
        "{:<label_width$} {:>10}",
        format!("Tax ({}%):", VAT_RATE.percentage()),
        store.format_currency(Money::from_centavos(view.totals.tax_centavos)),
    )?;
    writeln!(
        out,
        "{:<label_width$} {:>10}",
        "Total:",
        store.format_currency(Money::from_centavos(view.totals.total_centavos)),
    )
}

fn render_summary<W: Write>(
    out: &mut W,
    summary: &PurchaseSummary,
    store: &StoreSettings,
) -> io::Result<()> {
    writeln!(out, "===== Purchase Summary =====")?;
    writeln!(out, "{}", summary.store_name)?;
    writeln!(out, "{}", summary.issued_at.format("%Y-%m-%d %H:%M"))?;
    writeln!(out)?;
    for line in &summary.lines {
        writeln!(
            out,
            "{:<20} {:>10}",
            format!("{} x{}", line.name, line.quantity),
            store.format_currency(Money::from_centavos(line.subtotal_centavos)),
        )?;
    }
    writeln!(out)?;
    writeln!(
        out,
        "{:<20} {:>10}",
        "Subtotal:",
        store.format_currency(Money::from_centavos(summary.totals.subtotal_centavos)),
    )?;
    writeln!(
        out,
        "{:<20} {:>10}",
        format!("Tax ({}%):", VAT_RATE.percentage()),
        store.format_currency(Money::from_centavos(summary.totals.tax_centavos)),
    )?;
    writeln!(
        out,
        "{:<20} {:>10}",
        "Total:",
        store.format_currency(Money::from_centavos(summary.totals.total_centavos)),
    )?;
    writeln!(out, "============================")?;
    writeln!(out)
}

fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Commands:")?;
    writeln!(out, "  <item>      Ring up one unit by name or menu number")?;
    writeln!(out, "  checkout    Show the purchase summary")?;
    writeln!(out, "  clear       Empty the cart")?;
    writeln!(out, "  menu        Reprint the menu")?;
    writeln!(out, "  help        Show this help")?;
    writeln!(out, "  quit        Close the register")?;
    writeln!(out)
}

fn prompt<W: Write>(out: &mut W) -> io::Result<()> {
    write!(out, "> ")?;
    out.flush()
}

// =============================================================================
// Session Loop
// =============================================================================

/// Runs an interactive register session until `quit` or end of input.
///
/// ## Error Handling
/// Operator notices ("Cart is empty!", unknown items) are printed and
/// the loop continues. I/O failures end the session with an error.
pub fn run_session<R: BufRead, W: Write>(
    register: &mut Register,
    input: R,
    out: &mut W,
) -> RegisterResult<()> {
    render_banner(out, register.store())?;
    render_menu(out, register)?;
    render_cart(out, &register.cart_view(), register.store())?;
    prompt(out)?;

    for line in input.lines() {
        let line = line?;

        match parse_action(&line) {
            None => {}
            Some(Action::Quit) => {
                writeln!(out, "Goodbye.")?;
                return Ok(());
            }
            Some(Action::Help) => render_help(out)?,
            Some(Action::ShowMenu) => render_menu(out, register)?,
            Some(Action::ClearCart) => {
                let view = register.clear_cart();
                writeln!(out, "Cart cleared.")?;
                render_cart(out, &view, register.store())?;
            }
            Some(Action::Checkout) => match register.checkout() {
                Ok(summary) => render_summary(out, &summary, register.store())?,
                Err(err) if err.is_notice() => writeln!(out, "{}", err)?,
                Err(err) => return Err(err),
            },
            Some(Action::AddItem(token)) => {
                let name = resolve_item_name(register, &token);
                match register.add_to_cart(&name) {
                    Ok(view) => render_cart(out, &view, register.store())?,
                    Err(err) if err.is_notice() => writeln!(out, "{}", err)?,
                    Err(err) => return Err(err),
                }
            }
        }

        prompt(out)?;
    }

    // End of input without an explicit quit (piped sessions)
    writeln!(out)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegisterConfig;
    use std::io::Cursor;

    fn run_script(script: &str) -> String {
        let config = RegisterConfig::default();
        let mut register = Register::new(config.catalog().unwrap(), config.store);

        let mut out = Vec::new();
        run_session(&mut register, Cursor::new(script.as_bytes()), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_action_commands() {
        assert_eq!(parse_action("checkout"), Some(Action::Checkout));
        assert_eq!(parse_action("CHECKOUT"), Some(Action::Checkout));
        assert_eq!(parse_action("co"), Some(Action::Checkout));
        assert_eq!(parse_action("clear"), Some(Action::ClearCart));
        assert_eq!(parse_action("menu"), Some(Action::ShowMenu));
        assert_eq!(parse_action("help"), Some(Action::Help));
        assert_eq!(parse_action("?"), Some(Action::Help));
        assert_eq!(parse_action("quit"), Some(Action::Quit));
        assert_eq!(parse_action("exit"), Some(Action::Quit));
        assert_eq!(parse_action("q"), Some(Action::Quit));
    }

    #[test]
    fn test_parse_action_items_and_blanks() {
        assert_eq!(
            parse_action("Burger"),
            Some(Action::AddItem("Burger".to_string()))
        );
        assert_eq!(
            parse_action("  IcedTea  "),
            Some(Action::AddItem("IcedTea".to_string()))
        );
        assert_eq!(parse_action("3"), Some(Action::AddItem("3".to_string())));

        assert_eq!(parse_action(""), None);
        assert_eq!(parse_action("   "), None);
    }

    #[test]
    fn test_session_shows_banner_and_menu() {
        let output = run_script("quit\n");

        assert!(output.contains("Turo POS"));
        assert!(output.contains("Menu"));
        for name in ["Burger", "Fries", "Pizza", "Coke", "IcedTea", "Water"] {
            assert!(output.contains(name), "menu should list {}", name);
        }
        assert!(output.contains("(cart is empty)"));
        assert!(output.contains("Goodbye."));
    }

    #[test]
    fn test_session_rings_up_and_checks_out() {
        // Burger by number, Coke by name, Burger again by name
        let output = run_script("1\nCoke\nburger\ncheckout\nquit\n");

        assert!(output.contains("===== Purchase Summary ====="));
        assert!(output.contains("Burger x2"));
        assert!(output.contains("Coke x1"));
        assert!(output.contains("₱190.00"));
        assert!(output.contains("₱22.80"));
        assert!(output.contains("₱212.80"));
        assert!(output.contains("Tax (12%):"));
    }

    #[test]
    fn test_session_checkout_empty_cart_notice() {
        let output = run_script("checkout\nquit\n");

        assert!(output.contains("Cart is empty!"));
        assert!(!output.contains("Purchase Summary"));
    }

    #[test]
    fn test_session_unknown_item_notice() {
        let output = run_script("Sushi\ncheckout\nquit\n");

        assert!(output.contains("Unknown menu item: Sushi"));
        // Nothing was added, so checkout still reports an empty cart
        assert!(output.contains("Cart is empty!"));
    }

    #[test]
    fn test_session_menu_number_out_of_range() {
        let output = run_script("9\nquit\n");

        assert!(output.contains("Unknown menu item: 9"));
    }

    #[test]
    fn test_session_clear_cart() {
        let output = run_script("Pizza\nclear\ncheckout\nquit\n");

        assert!(output.contains("Cart cleared."));
        assert!(output.contains("Cart is empty!"));
    }

    #[test]
    fn test_checkout_keeps_cart_for_repeat_summary() {
        let output = run_script("Water\ncheckout\ncheckout\nquit\n");

        assert_eq!(output.matches("===== Purchase Summary =====").count(), 2);
        assert_eq!(output.matches("Water x1").count(), 2);
    }

    #[test]
    fn test_session_ends_cleanly_on_eof() {
        // No quit command; input simply runs out
        let output = run_script("Fries\n");

        assert!(output.contains("Fries"));
        assert!(!output.contains("Goodbye."));
    }
}
