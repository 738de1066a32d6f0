//! Currency rounding for split calculations.
//!
//! Every amount that leaves the calculator is quantized to the currency's
//! atomic unit (one cent at scale 2). Rounding is performed on decimals,
//! so exact midpoints such as `1.005` round the same way they read.

use crate::{error::SplitError, model::Money};
use rust_decimal::{Decimal, RoundingStrategy};

/// Largest number of decimal places a currency unit may have.
pub const MAX_CURRENCY_SCALE: u32 = 8;

/// Rounding mode for currency quantization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round half away from zero (e.g., 0.005 -> 0.01, -0.005 -> -0.01).
    #[default]
    HalfUp,
    /// Round half to nearest even number (banker's rounding).
    HalfEven,
}

impl RoundingMode {
    pub(crate) fn strategy(self) -> RoundingStrategy {
        match self {
            RoundingMode::HalfUp => RoundingStrategy::MidpointAwayFromZero,
            RoundingMode::HalfEven => RoundingStrategy::MidpointNearestEven,
        }
    }
}

/// Context for split calculation.
///
/// # Example
/// ```
/// use potluck_domain::{Money, services::{RoundingMode, SplitContext}};
///
/// let ctx = SplitContext::currency_default();
/// assert_eq!(ctx.scale, 2);
/// assert_eq!(ctx.rounding_mode, RoundingMode::HalfUp);
/// assert_eq!(ctx.round(Money::new(1005, 3)), Money::new(101, 2));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SplitContext {
    /// Number of decimal places of the atomic unit (2 for cents, 0 for JPY).
    pub scale: u32,
    pub rounding_mode: RoundingMode,
}

impl SplitContext {
    pub fn currency_default() -> Self {
        Self {
            scale: 2,
            rounding_mode: RoundingMode::HalfUp,
        }
    }

    pub fn with_scale(scale: u32) -> Result<Self, SplitError> {
        if scale > MAX_CURRENCY_SCALE {
            return Err(SplitError::UnsupportedScale {
                scale,
                max_supported: MAX_CURRENCY_SCALE,
            });
        }
        Ok(Self {
            scale,
            ..Self::currency_default()
        })
    }

    /// Smallest representable amount, e.g. 0.01 at scale 2.
    pub fn atomic_unit(self) -> Money {
        Money::from_decimal(Decimal::new(1, self.scale))
    }

    /// A remaining balance below this magnitude counts as settled.
    pub fn settle_tolerance(self) -> Money {
        self.atomic_unit()
    }

    pub fn round(self, amount: Money) -> Money {
        amount.round_to(self.scale, self.rounding_mode)
    }
}

impl Default for SplitContext {
    fn default() -> Self {
        Self::currency_default()
    }
}
