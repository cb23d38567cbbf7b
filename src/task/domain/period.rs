//! Trailing period window derived from a user-facing unit and amount.

use super::TaskDomainError;
use std::fmt;

/// User-facing period unit for aggregation windows.
///
/// Month and year use fixed multipliers (30 and 365 days); the window is a
/// plain day count, not calendar arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Period {
    /// One day per unit of amount.
    Day,
    /// Seven days per unit of amount.
    Week,
    /// Thirty days per unit of amount.
    Month,
    /// Three hundred and sixty-five days per unit of amount.
    Year,
}

impl Period {
    /// Returns the canonical query-parameter representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
        }
    }

    const fn day_multiplier(self) -> i64 {
        match self {
            Self::Day => 1,
            Self::Week => 7,
            Self::Month => 30,
            Self::Year => 365,
        }
    }

    /// Converts an amount of this unit into a trailing window size in days.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::InvalidPeriodAmount`] when the amount is
    /// zero or the resulting day count overflows.
    pub fn window_days(self, amount: u32) -> Result<i64, TaskDomainError> {
        if amount == 0 {
            return Err(TaskDomainError::InvalidPeriodAmount(amount));
        }
        i64::from(amount)
            .checked_mul(self.day_multiplier())
            .ok_or(TaskDomainError::InvalidPeriodAmount(amount))
    }
}

impl TryFrom<&str> for Period {
    type Error = TaskDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "day" => Ok(Self::Day),
            "week" => Ok(Self::Week),
            "month" => Ok(Self::Month),
            "year" => Ok(Self::Year),
            _ => Err(TaskDomainError::InvalidPeriod(value.trim().to_owned())),
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
