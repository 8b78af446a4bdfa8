//! Human-readable byte sizes
//!
//! Converts raw byte counts into strings such as `"500 B"`, `"2.00 KB"` or
//! `"5.00 MB"` using binary multiples (1 KB = 1024 bytes). Counts below one
//! kilobyte are shown as-is; everything else is shown with two decimals in
//! the largest unit that keeps the magnitude below 1024, capped at `TB`.
//!
//! Missing (`None`) and NaN inputs render as `"0 B"` instead of failing.
//!
//! ```
//! use app_utils::format::format_size;
//!
//! assert_eq!(format_size(500u32), "500 B");
//! assert_eq!(format_size(2048u64), "2.00 KB");
//! assert_eq!(format_size(5_242_880u64), "5.00 MB");
//! assert_eq!(format_size(None::<u64>), "0 B");
//! ```

pub mod unit;

pub use unit::{ByteUnit, UNIT_STEP};

use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

const ZERO_BYTES: &str = "0 B";

/// A value that may carry a byte count.
///
/// `None` means the count is absent. Floating point NaN is passed through
/// and treated as absent by [`format_size`].
pub trait ByteCount {
    fn byte_count(&self) -> Option<f64>;
}

macro_rules! impl_byte_count {
    ($($t:ty),* $(,)?) => {
        $(
            impl ByteCount for $t {
                fn byte_count(&self) -> Option<f64> {
                    Some(*self as f64)
                }
            }
        )*
    };
}

impl_byte_count!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

impl<T: ByteCount> ByteCount for Option<T> {
    fn byte_count(&self) -> Option<f64> {
        self.as_ref().and_then(|bytes| bytes.byte_count())
    }
}

impl<T: ByteCount + ?Sized> ByteCount for &T {
    fn byte_count(&self) -> Option<f64> {
        (**self).byte_count()
    }
}

/// A byte count expressed in a chosen unit, before rounding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaledSize {
    pub value: f64,
    pub unit: ByteUnit,
}

impl fmt::Display for ScaledSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            // -0.0 would otherwise print as "-0"
            ByteUnit::B if self.value == 0.0 => f.write_str(ZERO_BYTES),
            ByteUnit::B => write!(f, "{} {}", self.value, self.unit),
            unit => write!(f, "{:.2} {}", round_half_up(self.value), unit),
        }
    }
}

/// Pick the unit for `bytes` and scale the value into it.
///
/// Values below 1024 stay in bytes. Larger values are divided by 1024 until
/// they drop below 1024 or the unit reaches `TB`. Returns `None` for NaN.
pub fn scale_size(bytes: f64) -> Option<ScaledSize> {
    if bytes.is_nan() {
        return None;
    }

    if bytes < UNIT_STEP {
        return Some(ScaledSize {
            value: bytes,
            unit: ByteUnit::B,
        });
    }

    let mut value = bytes / UNIT_STEP;
    let mut unit = ByteUnit::KB;

    while value >= UNIT_STEP {
        match unit.next() {
            Some(next) => {
                value /= UNIT_STEP;
                unit = next;
            }
            None => break,
        }
    }

    Some(ScaledSize { value, unit })
}

/// Format a byte count as a human-readable string.
///
/// Accepts any primitive number, or an `Option` of one for counts that may
/// be missing. Never fails: missing and NaN inputs yield `"0 B"`.
pub fn format_size<B: ByteCount>(bytes: B) -> String {
    match bytes.byte_count().and_then(scale_size) {
        Some(scaled) => scaled.to_string(),
        None => {
            trace!("No usable byte count, rendering {ZERO_BYTES:?}");
            ZERO_BYTES.to_string()
        }
    }
}

/// Round to two decimals with exact ties going away from zero.
///
/// The `{:.2}` formatter alone rounds ties to even, which would render
/// 1152 bytes as "1.12 KB" rather than "1.13 KB".
fn round_half_up(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// A byte count that displays itself in human-readable form.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ByteSize(pub u64);

impl ByteSize {
    pub fn as_u64(self) -> u64 {
        self.0
    }

    /// Scaled form of this size
    pub fn scaled(self) -> ScaledSize {
        // A u64 is never NaN
        scale_size(self.0 as f64).unwrap_or(ScaledSize {
            value: 0.0,
            unit: ByteUnit::B,
        })
    }
}

impl From<u64> for ByteSize {
    fn from(bytes: u64) -> Self {
        Self(bytes)
    }
}

impl fmt::Display for ByteSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.scaled(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_and_nan_render_zero() {
        assert_eq!(format_size(None::<u64>), "0 B");
        assert_eq!(format_size(None::<f64>), "0 B");
        assert_eq!(format_size(f64::NAN), "0 B");
        assert_eq!(format_size(f32::NAN), "0 B");
        assert_eq!(format_size(Some(f64::NAN)), "0 B");
    }

    #[test]
    fn test_bytes_below_one_kilobyte() {
        assert_eq!(format_size(0u64), "0 B");
        assert_eq!(format_size(500u64), "500 B");
        assert_eq!(format_size(1023u64), "1023 B");
        assert_eq!(format_size(1023.0f64), "1023 B");
    }

    #[test]
    fn test_negative_counts_render_raw() {
        assert_eq!(format_size(-5i64), "-5 B");
        assert_eq!(format_size(-4096i32), "-4096 B");
        assert_eq!(format_size(-0.0f64), "0 B");
    }

    #[test]
    fn test_fractional_bytes_keep_natural_form() {
        assert_eq!(format_size(500.5f64), "500.5 B");
    }

    #[test]
    fn test_kilobytes_and_up() {
        assert_eq!(format_size(1024u64), "1.00 KB");
        assert_eq!(format_size(2048u64), "2.00 KB");
        assert_eq!(format_size(1536u64), "1.50 KB");
        assert_eq!(format_size(5_242_880u64), "5.00 MB");
        assert_eq!(format_size(3 * 1024u64.pow(3)), "3.00 GB");
        assert_eq!(format_size(1024u64.pow(4)), "1.00 TB");
    }

    #[test]
    fn test_terabyte_cap() {
        assert_eq!(format_size(1024u64.pow(5)), "1024.00 TB");
        assert_eq!(format_size(1024u128.pow(6)), "1048576.00 TB");
    }

    #[test]
    fn test_exact_ties_round_up() {
        // 1152 / 1024 == 1.125 exactly
        assert_eq!(format_size(1152u64), "1.13 KB");
        // 1.375 KB
        assert_eq!(format_size(1408u64), "1.38 KB");
    }

    #[test]
    fn test_just_below_next_unit_rounds_to_1024() {
        assert_eq!(format_size(1024u64 * 1024 - 1), "1024.00 KB");
    }

    #[test]
    fn test_references_and_options() {
        let bytes = 2048u64;
        assert_eq!(format_size(&bytes), "2.00 KB");
        assert_eq!(format_size(Some(2048u32)), "2.00 KB");
        assert_eq!(format_size(Some(&bytes)), "2.00 KB");
    }

    #[test]
    fn test_scale_size_picks_unit() {
        let scaled = scale_size(5_242_880.0).unwrap();
        assert_eq!(scaled.unit, ByteUnit::MB);
        assert_eq!(scaled.value, 5.0);

        let scaled = scale_size(100.0).unwrap();
        assert_eq!(scaled.unit, ByteUnit::B);
        assert_eq!(scaled.value, 100.0);

        assert!(scale_size(f64::NAN).is_none());
    }

    #[test]
    fn test_infinity_saturates_at_terabytes() {
        let scaled = scale_size(f64::INFINITY).unwrap();
        assert_eq!(scaled.unit, ByteUnit::TB);
        assert_eq!(format_size(f64::INFINITY), "inf TB");
        assert_eq!(format_size(f64::NEG_INFINITY), "-inf B");
    }

    #[test]
    fn test_byte_size_display_matches_format_size() {
        for bytes in [0u64, 1, 1023, 1024, 1152, 5_242_880, 1 << 40, 1 << 50] {
            assert_eq!(ByteSize(bytes).to_string(), format_size(bytes));
        }
    }

    #[test]
    fn test_byte_size_serializes_as_number() {
        let size = ByteSize::from(2048);
        assert_eq!(serde_json::to_string(&size).unwrap(), "2048");

        let parsed: ByteSize = serde_json::from_str("5242880").unwrap();
        assert_eq!(parsed.as_u64(), 5_242_880);
        assert_eq!(parsed.to_string(), "5.00 MB");
    }
}
