//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  In a register that prices with floats:                                 │
//! │    ₱80.00 × 12% tax, summed per line, drifts from the aggregate        │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Centavos                                         │
//! │    ₱80.00 is stored as 8000 centavos                                    │
//! │    Every add, multiply and tax step stays exact                         │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use turo_core::money::Money;
//!
//! // Create from centavos (preferred)
//! let price = Money::from_centavos(8000); // ₱80.00
//!
//! // Arithmetic operations
//! let doubled = price * 2;                       // ₱160.00
//! let total = price + Money::from_centavos(3000); // ₱110.00
//!
//! // NEVER do this:
//! // let bad = Money::from_float(80.0); // NO SUCH METHOD EXISTS!
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (centavos).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic identities hold even for intermediate values
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Derives**: Full serde support for view serialization
///
/// ## User Workflow Context
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                    Where Money is Used                                  │
/// │                                                                         │
/// │  Item.unit_price ──┬──► CartLine.subtotal() ──► Cart.subtotal()         │
/// │                    │                                                    │
/// │                    └──► Displayed as "₱80.00" at the terminal           │
/// │                                                                         │
/// │  Cart.subtotal() ──► Tax Calculation ──► Cart.total()                  │
/// │                                                                         │
/// │  EVERY monetary value in the system flows through this type            │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from centavos (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use turo_core::money::Money;
    ///
    /// let price = Money::from_centavos(8000); // Represents ₱80.00
    /// assert_eq!(price.centavos(), 8000);
    /// ```
    ///
    /// ## Why Centavos?
    /// Using the smallest unit eliminates all floating-point concerns.
    /// The catalog, the cart and all totals use centavos.
    /// Only the presentation layer converts to pesos for display.
    #[inline]
    pub const fn from_centavos(centavos: i64) -> Self {
        Money(centavos)
    }

    /// Creates a Money value from whole pesos.
    ///
    /// Menu prices are commonly round peso amounts, so this keeps
    /// call sites readable.
    ///
    /// ## Example
    /// ```rust
    /// use turo_core::money::Money;
    ///
    /// let price = Money::from_pesos(80); // ₱80.00
    /// assert_eq!(price.centavos(), 8000);
    /// ```
    #[inline]
    pub const fn from_pesos(pesos: i64) -> Self {
        Money(pesos * 100)
    }

    /// Returns the value in centavos (smallest currency unit).
    #[inline]
    pub const fn centavos(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (pesos) portion.
    ///
    /// ## Example
    /// ```rust
    /// use turo_core::money::Money;
    ///
    /// let price = Money::from_centavos(2280);
    /// assert_eq!(price.pesos(), 22);
    /// ```
    #[inline]
    pub const fn pesos(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (centavos) portion (always 0-99).
    ///
    /// ## Example
    /// ```rust
    /// use turo_core::money::Money;
    ///
    /// let price = Money::from_centavos(2280);
    /// assert_eq!(price.centavo_part(), 80);
    /// ```
    #[inline]
    pub const fn centavo_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates tax on this amount, rounding half up.
    ///
    /// ## Implementation
    /// Integer math: `(amount * rate + 5000) / 10000`
    /// The +5000 provides rounding (5000/10000 = 0.5)
    ///
    /// ## Example
    /// ```rust
    /// use turo_core::money::{Money, TaxRate};
    ///
    /// let subtotal = Money::from_centavos(19000); // ₱190.00
    /// let rate = TaxRate::from_bps(1200);         // 12% VAT
    ///
    /// let tax = subtotal.calculate_tax(rate);
    /// // ₱190.00 × 12% = ₱22.80 exactly
    /// assert_eq!(tax.centavos(), 2280);
    /// ```
    ///
    /// ## User Workflow
    /// ```text
    /// Cart Subtotal: ₱190.00
    ///      │
    ///      ▼
    /// calculate_tax(12%) ← THIS FUNCTION
    ///      │
    ///      ▼
    /// Tax: ₱22.80
    ///      │
    ///      ▼
    /// Grand Total: ₱212.80
    /// ```
    pub fn calculate_tax(&self, rate: TaxRate) -> Money {
        // Use i128 to prevent overflow on large amounts
        // rate.bps() is basis points: 1200 = 12%
        // Formula: amount_centavos * bps / 10000
        // With rounding: (amount_centavos * bps + 5000) / 10000
        let tax_centavos = (self.0 as i128 * rate.bps() as i128 + 5000) / 10000;
        Money::from_centavos(tax_centavos as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a human-readable format.
///
/// ## Note
/// This is for debugging. The register formats amounts through its store
/// settings so the currency symbol stays configurable.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}₱{}.{:02}",
            sign,
            self.pesos().abs(),
            self.centavo_part()
        )
    }
}

/// Default money is zero.
impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

/// Addition of two Money values.
impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Subtraction of two Money values.
impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Subtraction assignment (-=).
impl SubAssign for Money {
    #[inline]
    fn sub_assign(&mut self, other: Self) {
        self.0 -= other.0;
    }
}

/// Multiplication by quantity.
impl Mul<i64> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: i64) -> Self {
        Money(self.0 * qty)
    }
}

/// Summation over line subtotals.
impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, amount| acc + amount)
    }
}

// =============================================================================
// Tax Rate
// =============================================================================

/// Tax rate represented in basis points (bps).
///
/// ## Why Basis Points?
/// 1 basis point = 0.01% = 1/10000
/// 1200 bps = 12% (Philippine VAT)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxRate(u32);

impl TaxRate {
    /// Creates a tax rate from basis points.
    #[inline]
    pub const fn from_bps(bps: u32) -> Self {
        TaxRate(bps)
    }

    /// Returns the rate in basis points.
    #[inline]
    pub const fn bps(&self) -> u32 {
        self.0
    }

    /// Returns the rate as a percentage (for display only).
    #[inline]
    pub fn percentage(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Zero tax rate.
    #[inline]
    pub const fn zero() -> Self {
        TaxRate(0)
    }

    /// Checks if tax rate is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Default for TaxRate {
    fn default() -> Self {
        TaxRate::zero()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_centavos() {
        let money = Money::from_centavos(2280);
        assert_eq!(money.centavos(), 2280);
        assert_eq!(money.pesos(), 22);
        assert_eq!(money.centavo_part(), 80);
    }

    #[test]
    fn test_from_pesos() {
        let money = Money::from_pesos(80);
        assert_eq!(money.centavos(), 8000);

        let zero = Money::from_pesos(0);
        assert!(zero.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_centavos(8000)), "₱80.00");
        assert_eq!(format!("{}", Money::from_centavos(2280)), "₱22.80");
        assert_eq!(format!("{}", Money::from_centavos(-550)), "-₱5.50");
        assert_eq!(format!("{}", Money::from_centavos(0)), "₱0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_centavos(8000);
        let b = Money::from_centavos(3000);

        assert_eq!((a + b).centavos(), 11000);
        assert_eq!((a - b).centavos(), 5000);
        let result: Money = a * 3;
        assert_eq!(result.centavos(), 24000);

        let mut running = Money::zero();
        running += a;
        running += b;
        assert_eq!(running.centavos(), 11000);
        running -= b;
        assert_eq!(running, a);
    }

    #[test]
    fn test_sum() {
        let lines = [
            Money::from_centavos(16000),
            Money::from_centavos(3000),
        ];
        let subtotal: Money = lines.iter().copied().sum();
        assert_eq!(subtotal.centavos(), 19000);

        let empty: Money = std::iter::empty::<Money>().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_vat_is_exact_on_whole_peso_amounts() {
        // ₱190.00 at 12% = ₱22.80 with no rounding involved
        let subtotal = Money::from_centavos(19000);
        let tax = subtotal.calculate_tax(TaxRate::from_bps(1200));
        assert_eq!(tax.centavos(), 2280);
    }

    #[test]
    fn test_tax_rounds_half_up() {
        // ₱10.99 at 12% = ₱1.3188 → ₱1.32
        let amount = Money::from_centavos(1099);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(1200)).centavos(), 132);

        // ₱1.25 at 10% = ₱0.125 → ₱0.13 (half rounds up)
        let amount = Money::from_centavos(125);
        assert_eq!(amount.calculate_tax(TaxRate::from_bps(1000)).centavos(), 13);
    }

    #[test]
    fn test_tax_on_zero_is_zero() {
        let tax = Money::zero().calculate_tax(TaxRate::from_bps(1200));
        assert!(tax.is_zero());
    }

    #[test]
    fn test_zero_and_checks() {
        let zero = Money::zero();
        assert!(zero.is_zero());
        assert!(!zero.is_negative());

        let negative = Money::from_centavos(-100);
        assert!(!negative.is_zero());
        assert!(negative.is_negative());

        assert_eq!(Money::default(), Money::zero());
    }

    #[test]
    fn test_tax_rate() {
        let vat = TaxRate::from_bps(1200);
        assert_eq!(vat.bps(), 1200);
        assert_eq!(vat.percentage(), 12.0);
        assert!(!vat.is_zero());

        assert!(TaxRate::default().is_zero());
        assert!(TaxRate::zero().is_zero());
    }
}
