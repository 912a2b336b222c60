use crate::scalar::Scalar;

/// An angle in degrees along with its precomputed sine and cosine.
///
/// Angles are immutable: the trigonometric values are computed once when
/// the angle is created. The value in degrees is not normalized, use
/// [`normalize_angle`] to bring it into `[0, 360)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Angle<S> {
    degrees: S,
    sin: S,
    cos: S,
}

impl<S: Scalar> Angle<S> {
    /// Creates an angle from a value in degrees.
    pub fn degrees(degrees: S) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();
        Angle { degrees, sin, cos }
    }

    /// Creates an angle from a value in radians.
    #[inline]
    pub fn radians(radians: S) -> Self {
        Self::degrees(radians.to_degrees())
    }

    #[inline]
    pub fn zero() -> Self {
        Angle {
            degrees: S::ZERO,
            sin: S::ZERO,
            cos: S::ONE,
        }
    }

    #[inline]
    pub fn in_degrees(&self) -> S {
        self.degrees
    }

    #[inline]
    pub fn in_radians(&self) -> S {
        self.degrees.to_radians()
    }

    #[inline]
    pub fn sin(&self) -> S {
        self.sin
    }

    #[inline]
    pub fn cos(&self) -> S {
        self.cos
    }

    /// Returns an angle equal to this one plus `degrees`.
    #[inline]
    pub fn add_degrees(&self, degrees: S) -> Self {
        Self::degrees(self.degrees + degrees)
    }

    /// Returns the equivalent angle in `[0, 360)`.
    #[inline]
    pub fn normalized(&self) -> Self {
        Self::degrees(normalize_angle(self.degrees))
    }
}

impl<S: Scalar> Default for Angle<S> {
    fn default() -> Self {
        Self::zero()
    }
}

/// Reduces an angle in degrees to the `[0, 360)` range.
///
/// `-0` is normalized to `0`.
pub fn normalize_angle<S: Scalar>(degrees: S) -> S {
    let full_turn = S::value(360.0);
    let mut angle = degrees % full_turn;
    if angle == S::ZERO {
        // Also turns -0 into 0.
        return S::ZERO;
    }

    if angle < S::ZERO {
        angle += full_turn;
        // Tiny negative values round up to a full turn.
        if angle >= full_turn {
            return S::ZERO;
        }
    }

    angle
}

#[cfg(test)]
fn fuzzy_eq(a: f64, b: f64) -> bool {
    f64::abs(a - b) <= 1e-12
}

#[test]
fn angle_trigonometry() {
    let a = Angle::degrees(30.0f64);
    assert!(fuzzy_eq(a.sin(), 0.5));
    assert!(fuzzy_eq(a.cos(), f64::sqrt(3.0) / 2.0));
    assert_eq!(a.in_degrees(), 30.0);
    assert!(fuzzy_eq(a.in_radians(), core::f64::consts::PI / 6.0));

    let b = Angle::radians(core::f64::consts::PI);
    assert!(fuzzy_eq(b.in_degrees(), 180.0));
    assert!(fuzzy_eq(b.cos(), -1.0));

    let z: Angle<f64> = Angle::default();
    assert_eq!(z.cos(), 1.0);
    assert_eq!(z.sin(), 0.0);
}

#[test]
fn angle_keeps_unnormalized_degrees() {
    let a = Angle::degrees(-450.0f64);
    assert_eq!(a.in_degrees(), -450.0);
    assert!(fuzzy_eq(a.sin(), -1.0));
    assert!(fuzzy_eq(a.normalized().in_degrees(), 270.0));
    assert!(fuzzy_eq(a.add_degrees(90.0).in_degrees(), -360.0));
}

#[test]
fn normalize_angle_range() {
    assert_eq!(normalize_angle(0.0f64), 0.0);
    assert_eq!(normalize_angle(360.0f64), 0.0);
    assert_eq!(normalize_angle(370.0f64), 10.0);
    assert_eq!(normalize_angle(-90.0f64), 270.0);
    assert_eq!(normalize_angle(-720.0f64), 0.0);
    assert_eq!(normalize_angle(-1e-20f64), 0.0);

    let negative_zero = normalize_angle(-0.0f64);
    assert_eq!(negative_zero, 0.0);
    assert!(negative_zero.is_sign_positive());
}

#[test]
fn normalize_angle_idempotent() {
    let mut a = -1000.0f64;
    while a < 1000.0 {
        let n = normalize_angle(a);
        assert!(n >= 0.0 && n < 360.0, "{} -> {}", a, n);
        assert_eq!(normalize_angle(n), n);
        a += 13.7;
    }
}
