//! Option direction and payoff style.

use std::fmt;

/// Direction of an option contract.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// assert_eq!(OptionType::Call.direction(), 1.0);
/// assert_eq!(OptionType::Put.direction(), -1.0);
/// assert_eq!(OptionType::Put.to_string(), "Put");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionType {
    /// Right to buy at the strike.
    Call,
    /// Right to sell at the strike.
    Put,
}

impl OptionType {
    /// Both directions, calls first.
    pub const ALL: [OptionType; 2] = [OptionType::Call, OptionType::Put];

    /// Sign applied to `S - K`: `+1` for calls, `-1` for puts.
    #[inline]
    pub fn direction(&self) -> f64 {
        match self {
            OptionType::Call => 1.0,
            OptionType::Put => -1.0,
        }
    }

    /// Returns whether `underlying_price` is strictly in the money against `strike`.
    #[inline]
    pub fn is_in_the_money(&self, underlying_price: f64, strike: f64) -> bool {
        match self {
            OptionType::Call => underlying_price > strike,
            OptionType::Put => underlying_price < strike,
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

/// Payoff style of a European option.
///
/// Selects the [`EquityOption`](super::EquityOption) variant to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum OptionStyle {
    /// `max(direction * (S - K), 0)` at maturity.
    Vanilla,
    /// Pays one unit of cash when the option ends in the money.
    Binary,
}

impl OptionStyle {
    /// All styles, in display order.
    pub const ALL: [OptionStyle; 2] = [OptionStyle::Vanilla, OptionStyle::Binary];
}

impl fmt::Display for OptionStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionStyle::Vanilla => write!(f, "Vanilla"),
            OptionStyle::Binary => write!(f, "Binary"),
        }
    }
}
