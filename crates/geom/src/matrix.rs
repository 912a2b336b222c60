use crate::angle::Angle;
use crate::scalar::Scalar;
use crate::{vector, Vector};

/// A 2x2 matrix.
///
/// ```text
/// | m11 m12 |
/// | m21 m22 |
/// ```
///
/// Vectors are treated as columns: `transform_vector` computes `M * v`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Matrix2<S> {
    pub m11: S,
    pub m12: S,
    pub m21: S,
    pub m22: S,
}

impl<S: Scalar> Matrix2<S> {
    #[inline]
    pub fn new(m11: S, m12: S, m21: S, m22: S) -> Self {
        Matrix2 { m11, m12, m21, m22 }
    }

    #[inline]
    pub fn identity() -> Self {
        Matrix2::new(S::ONE, S::ZERO, S::ZERO, S::ONE)
    }

    #[inline]
    pub fn from_rows(top: Vector<S>, bottom: Vector<S>) -> Self {
        Matrix2::new(top.x, top.y, bottom.x, bottom.y)
    }

    /// The matrix that maps vectors into a frame rotated by `angle`.
    ///
    /// ```text
    /// |  cos  sin |
    /// | -sin  cos |
    /// ```
    ///
    /// Its transpose maps vectors back out of that frame.
    #[inline]
    pub fn rotation(angle: &Angle<S>) -> Self {
        Matrix2::new(angle.cos(), angle.sin(), -angle.sin(), angle.cos())
    }

    #[inline]
    pub fn determinant(&self) -> S {
        self.m11 * self.m22 - self.m12 * self.m21
    }

    /// Returns the inverse matrix, or `None` if the matrix is singular.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == S::ZERO {
            return None;
        }

        let inv_det = S::ONE / det;
        Some(Matrix2::new(
            self.m22 * inv_det,
            -self.m12 * inv_det,
            -self.m21 * inv_det,
            self.m11 * inv_det,
        ))
    }

    #[inline]
    pub fn transpose(&self) -> Self {
        Matrix2::new(self.m11, self.m21, self.m12, self.m22)
    }

    /// Returns the product `self * other`.
    pub fn then(&self, other: &Self) -> Self {
        Matrix2::new(
            self.m11 * other.m11 + self.m12 * other.m21,
            self.m11 * other.m12 + self.m12 * other.m22,
            self.m21 * other.m11 + self.m22 * other.m21,
            self.m21 * other.m12 + self.m22 * other.m22,
        )
    }

    #[inline]
    pub fn scale(&self, factor: S) -> Self {
        Matrix2::new(
            self.m11 * factor,
            self.m12 * factor,
            self.m21 * factor,
            self.m22 * factor,
        )
    }

    /// Returns `self * v`.
    #[inline]
    pub fn transform_vector(&self, v: Vector<S>) -> Vector<S> {
        vector(
            self.m11 * v.x + self.m12 * v.y,
            self.m21 * v.x + self.m22 * v.y,
        )
    }
}

impl<S: Scalar> Default for Matrix2<S> {
    fn default() -> Self {
        Self::identity()
    }
}

#[test]
fn matrix_inverse() {
    let m = Matrix2::new(4.0f64, 7.0, 2.0, 6.0);
    assert_eq!(m.determinant(), 10.0);

    let inv = m.inverse().unwrap();
    let id = m.then(&inv);
    assert!(f64::abs(id.m11 - 1.0) <= 1e-12);
    assert!(f64::abs(id.m12) <= 1e-12);
    assert!(f64::abs(id.m21) <= 1e-12);
    assert!(f64::abs(id.m22 - 1.0) <= 1e-12);

    assert!(Matrix2::new(1.0f64, 2.0, 2.0, 4.0).inverse().is_none());
}

#[test]
fn matrix_products() {
    let a = Matrix2::new(1.0f64, 2.0, 3.0, 4.0);
    let b = Matrix2::new(5.0f64, 6.0, 7.0, 8.0);
    assert_eq!(a.then(&b), Matrix2::new(19.0, 22.0, 43.0, 50.0));
    assert_eq!(a.transpose(), Matrix2::new(1.0, 3.0, 2.0, 4.0));
    assert_eq!(a.scale(2.0), Matrix2::new(2.0, 4.0, 6.0, 8.0));
    assert_eq!(a.transform_vector(vector(1.0, 1.0)), vector(3.0, 7.0));
    assert_eq!(Matrix2::identity().then(&a), a);
    assert_eq!(
        Matrix2::from_rows(vector(1.0f64, 2.0), vector(3.0, 4.0)),
        a
    );
}

#[test]
fn matrix_rotation_round_trip() {
    let r = Matrix2::rotation(&Angle::degrees(30.0f64));
    let v = vector(3.0f64, -2.0);
    let back = r.transpose().transform_vector(r.transform_vector(v));
    assert!(f64::abs(back.x - v.x) <= 1e-12);
    assert!(f64::abs(back.y - v.y) <= 1e-12);

    let quarter = Matrix2::rotation(&Angle::degrees(90.0f64));
    let x = quarter.transform_vector(vector(1.0, 0.0));
    assert!(f64::abs(x.x) <= 1e-12);
    assert!(f64::abs(x.y + 1.0) <= 1e-12);
}
