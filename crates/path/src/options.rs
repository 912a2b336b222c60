use crate::format::format_number;

/// Number of digits printed after the decimal point in path commands.
///
/// The precision of a builder is fixed when the builder is created.
///
/// Default value: `Precision::DEFAULT` (3 digits).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Precision {
    digits: u8,
}

impl Precision {
    /// Default amount of digits after the decimal point.
    pub const DEFAULT_DIGITS: u8 = 3;
    /// Maximum amount of digits after the decimal point.
    pub const MAX_DIGITS: u8 = 20;

    pub const DEFAULT: Self = Precision {
        digits: Self::DEFAULT_DIGITS,
    };

    pub const MAX: Self = Precision {
        digits: Self::MAX_DIGITS,
    };

    /// Clamps `value` to `[0, 20]` and rounds it to the nearest integer.
    ///
    /// `NaN` is treated as `0`.
    pub fn new(value: f64) -> Self {
        let clamped = if value.is_nan() {
            0.0
        } else {
            value.max(0.0).min(Self::MAX_DIGITS as f64)
        };

        Precision {
            digits: clamped.round() as u8,
        }
    }

    /// Creates a precision from an amount of digits, clamped to `Precision::MAX_DIGITS`.
    #[inline]
    pub fn digits(digits: u8) -> Self {
        Precision {
            digits: digits.min(Self::MAX_DIGITS),
        }
    }

    #[inline]
    pub fn get(&self) -> u8 {
        self.digits
    }

    /// Formats a number the way it appears in path commands.
    pub fn format(&self, value: f64) -> String {
        format_number(value, self.digits)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[test]
fn precision_clamping() {
    assert_eq!(Precision::default().get(), 3);
    assert_eq!(Precision::new(-4.0).get(), 0);
    assert_eq!(Precision::new(25.0).get(), 20);
    assert_eq!(Precision::new(2.4).get(), 2);
    assert_eq!(Precision::new(2.5).get(), 3);
    assert_eq!(Precision::new(f64::NAN).get(), 0);
    assert_eq!(Precision::new(f64::INFINITY), Precision::MAX);
    assert_eq!(Precision::digits(42).get(), 20);
    assert_eq!(Precision::digits(1).format(3.14159), "3.1");
}
