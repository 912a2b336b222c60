//! Helpers to query and change the direction of vectors.
//!
//! Magnitude, cross and dot products are provided by euclid
//! (`Vector::length`, `Vector::square_length`, `Vector::cross`, `Vector::dot`).
//! The functions in this module complement them with direction-related
//! operations expressed in degrees. They all take their arguments by value
//! and return a new vector.

use crate::scalar::Scalar;
use crate::{vector, Vector};

/// Returns the length of the vector.
#[inline]
pub fn magnitude<S: Scalar>(v: Vector<S>) -> S {
    v.length()
}

/// Returns the squared length of the vector.
#[inline]
pub fn magnitude_sq<S: Scalar>(v: Vector<S>) -> S {
    v.square_length()
}

/// Returns the direction of the vector in degrees, computed as `atan2(y, x)`.
///
/// The result is in `(-180, 180]`.
#[inline]
pub fn angle_of<S: Scalar>(v: Vector<S>) -> S {
    v.y.atan2(v.x).to_degrees()
}

/// Returns a unit vector pointing in the provided direction.
#[inline]
pub fn from_angle<S: Scalar>(degrees: S) -> Vector<S> {
    let (sin, cos) = degrees.to_radians().sin_cos();
    vector(cos, sin)
}

/// Returns a vector with the same magnitude as `v` pointing in the provided direction.
///
/// Zero vectors are returned unchanged.
pub fn with_angle<S: Scalar>(v: Vector<S>, degrees: S) -> Vector<S> {
    let length = v.length();
    if length == S::ZERO {
        return v;
    }

    from_angle(degrees) * length
}

/// Returns the unit vector with the direction of `v`.
///
/// Zero vectors are returned unchanged.
pub fn normalized<S: Scalar>(v: Vector<S>) -> Vector<S> {
    let length = v.length();
    if length == S::ZERO {
        return v;
    }

    v / length
}

/// Mirrors the vector across the y axis (negates `x`).
#[inline]
pub fn mirror_x<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(-v.x, v.y)
}

/// Mirrors the vector across the x axis (negates `y`).
#[inline]
pub fn mirror_y<S: Scalar>(v: Vector<S>) -> Vector<S> {
    vector(v.x, -v.y)
}

#[cfg(test)]
fn fuzzy_eq_vector(a: Vector<f64>, b: Vector<f64>) -> bool {
    f64::abs(a.x - b.x) <= 1e-12 && f64::abs(a.y - b.y) <= 1e-12
}

#[test]
fn vector_angles() {
    let check = |v: Vector<f64>, expected: f64| f64::abs(angle_of(v) - expected) <= 1e-12;
    assert!(check(vector(1.0, 0.0), 0.0));
    assert!(check(vector(0.0, 1.0), 90.0));
    assert!(check(vector(-1.0, 0.0), 180.0));
    assert!(check(vector(0.0, -1.0), -90.0));
    assert!(check(vector(0.0, 0.0), 0.0));
    assert!(check(vector(1.0, 1.0), 45.0));
}

#[test]
fn vector_with_angle() {
    let v = with_angle(vector(3.0f64, 4.0), 90.0);
    assert!(fuzzy_eq_vector(v, vector(0.0, 5.0)));

    let v = with_angle(vector(-2.0f64, 0.0), 180.0);
    assert!(fuzzy_eq_vector(v, vector(-2.0, 0.0)));

    let zero = with_angle(vector(0.0f64, 0.0), 45.0);
    assert_eq!(zero, vector(0.0, 0.0));

    assert!(fuzzy_eq_vector(from_angle(270.0f64), vector(0.0, -1.0)));
}

#[test]
fn vector_normalize_and_mirror() {
    let v = normalized(vector(3.0f64, 4.0));
    assert!(fuzzy_eq_vector(v, vector(0.6, 0.8)));
    assert_eq!(normalized(vector(0.0f64, 0.0)), vector(0.0, 0.0));

    assert_eq!(mirror_x(vector(1.0f64, 2.0)), vector(-1.0, 2.0));
    assert_eq!(mirror_y(vector(1.0f64, 2.0)), vector(1.0, -2.0));

    assert_eq!(magnitude(vector(3.0f64, 4.0)), 5.0);
    assert_eq!(magnitude_sq(vector(3.0f64, 4.0)), 25.0);
}
