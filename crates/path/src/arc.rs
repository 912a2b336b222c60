//! Elliptic arc nodes and their endpoint to centre parameterization.

use crate::geom::vector::{angle_of, normalized};
use crate::geom::{ArcFlags, Matrix2};
use crate::math::{vector, Angle, Point, Vector};

/// The two SVG arc flags packed in a single value.
///
/// The numeric value of each variant has the large-arc flag in its lowest bit
/// and the sweep flag above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum ArcStyle {
    /// Arc spanning less than 180 degrees, drawn in the negative-angle direction.
    Small = 0,
    /// Arc spanning more than 180 degrees, drawn in the negative-angle direction.
    Large = 1,
    /// Arc spanning less than 180 degrees, drawn in the positive-angle direction.
    SmallSweep = 2,
    /// Arc spanning more than 180 degrees, drawn in the positive-angle direction.
    LargeSweep = 3,
}

impl ArcStyle {
    /// Values outside of `0..=3` fall back to `ArcStyle::Small`.
    pub fn from_bits(bits: u8) -> Self {
        match bits {
            1 => ArcStyle::Large,
            2 => ArcStyle::SmallSweep,
            3 => ArcStyle::LargeSweep,
            _ => ArcStyle::Small,
        }
    }

    #[inline]
    pub fn to_bits(self) -> u8 {
        self as u8
    }

    pub fn from_flags(flags: ArcFlags) -> Self {
        ArcStyle::from_bits(flags.large_arc as u8 | (flags.sweep as u8) << 1)
    }

    #[inline]
    pub fn flags(self) -> ArcFlags {
        ArcFlags {
            large_arc: self.large_arc(),
            sweep: self.sweep(),
        }
    }

    #[inline]
    pub fn large_arc(self) -> bool {
        self.to_bits() & 1 == 1
    }

    #[inline]
    pub fn sweep(self) -> bool {
        self.to_bits() > 1
    }
}

impl Default for ArcStyle {
    fn default() -> Self {
        ArcStyle::Small
    }
}

impl From<ArcFlags> for ArcStyle {
    fn from(flags: ArcFlags) -> Self {
        ArcStyle::from_flags(flags)
    }
}

impl From<ArcStyle> for ArcFlags {
    fn from(style: ArcStyle) -> Self {
        style.flags()
    }
}

/// The payload of an arc node, in the SVG notation.
///
/// The start of the arc is the endpoint of the previous node, which is why
/// the geometric queries take it as a parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct ArcSegment {
    /// Semi axes of the ellipse. The sign is ignored.
    pub radii: Vector,
    /// Rotation of the ellipse's x axis in degrees.
    pub x_rotation: f64,
    pub style: ArcStyle,
    pub to: Point,
}

impl ArcSegment {
    /// An arc without radii or with coinciding endpoints is drawn as a straight line.
    pub fn is_degenerate(&self, from: Point) -> bool {
        self.radii.x == 0.0 || self.radii.y == 0.0 || self.to == from
    }

    /// Centre of the ellipse the arc is drawn on.
    pub fn centre(&self, from: Point) -> Point {
        if self.is_degenerate(from) {
            return from.lerp(self.to, 0.5);
        }

        self.centre_and_radii(from).0
    }

    /// Direction of the arc at its endpoint, in degrees.
    ///
    /// The tangent is derived from the real foci of the ellipse. For
    /// non-circular arcs it differs from the cheaper estimate that puts the two
    /// reference points one unit away from the centre along the x rotation
    /// axis, and so do the rounded corners and after-corner lines that follow
    /// such an arc.
    pub fn end_angle_in_degrees(&self, from: Point) -> f64 {
        if self.is_degenerate(from) {
            return angle_of(self.to - from);
        }

        let (centre, radii) = self.centre_and_radii(from);
        let rotation = Angle::degrees(self.x_rotation);
        let major_axis = if radii.x >= radii.y {
            vector(rotation.cos(), rotation.sin())
        } else {
            vector(-rotation.sin(), rotation.cos())
        };
        let focal_distance = (radii.x * radii.x - radii.y * radii.y).abs().sqrt();
        let f1 = centre + major_axis * focal_distance;
        let f2 = centre - major_axis * focal_distance;

        // The normal of an ellipse bisects the angle between the focal radii.
        let mut normal = normalized(f1 - self.to) + normalized(f2 - self.to);
        if normal.square_length() == 0.0 {
            normal = centre - self.to;
        }

        let quarter_turn = if self.style.sweep() { -90.0 } else { 90.0 };
        angle_of(normal) + quarter_turn
    }

    /// Computes the centre and the radii after scaling them up if they are too
    /// small to join both endpoints.
    fn centre_and_radii(&self, from: Point) -> (Point, Vector) {
        let rotation = Matrix2::rotation(&Angle::degrees(self.x_rotation));
        let vp = rotation.transform_vector((from - self.to) * 0.5);

        let mut rx = self.radii.x.abs();
        let mut ry = self.radii.y.abs();

        let lambda = (vp.x * vp.x) / (rx * rx) + (vp.y * vp.y) / (ry * ry);
        if lambda > 1.0 {
            let scale = lambda.sqrt();
            rx *= scale;
            ry *= scale;
        }

        let rx_sq = rx * rx;
        let ry_sq = ry * ry;
        let vpx_sq = vp.x * vp.x;
        let vpy_sq = vp.y * vp.y;

        let numerator = (rx_sq * ry_sq - rx_sq * vpy_sq - ry_sq * vpx_sq).max(0.0);
        let denominator = rx_sq * vpy_sq + ry_sq * vpx_sq;
        let sign = if self.style.large_arc() == self.style.sweep() {
            -1.0
        } else {
            1.0
        };
        let coef = sign * (numerator / denominator).sqrt();
        let centre_in_frame = vector(coef * rx * vp.y / ry, -coef * ry * vp.x / rx);

        let centre = from.lerp(self.to, 0.5) + rotation.transpose().transform_vector(centre_in_frame);

        (centre, vector(rx, ry))
    }
}

#[cfg(test)]
use crate::math::point;

#[cfg(test)]
fn fuzzy_eq_point(a: Point, b: Point, epsilon: f64) -> bool {
    f64::abs(a.x - b.x) <= epsilon && f64::abs(a.y - b.y) <= epsilon
}

#[cfg(test)]
fn fuzzy_eq_angle(a: f64, b: f64, epsilon: f64) -> bool {
    let d = crate::geom::normalize_angle(a - b);
    d <= epsilon || 360.0 - d <= epsilon
}

#[test]
fn arc_style_flags() {
    assert_eq!(ArcStyle::Small.flags(), ArcFlags { large_arc: false, sweep: false });
    assert_eq!(ArcStyle::Large.flags(), ArcFlags { large_arc: true, sweep: false });
    assert_eq!(ArcStyle::SmallSweep.flags(), ArcFlags { large_arc: false, sweep: true });
    assert_eq!(ArcStyle::LargeSweep.flags(), ArcFlags { large_arc: true, sweep: true });

    for bits in 0..4u8 {
        let style = ArcStyle::from_bits(bits);
        assert_eq!(style.to_bits(), bits);
        assert_eq!(ArcStyle::from(style.flags()), style);
    }

    assert_eq!(ArcStyle::from_bits(7), ArcStyle::Small);
    assert_eq!(ArcStyle::default(), ArcStyle::Small);
}

#[test]
fn half_circle_centre() {
    let arc = ArcSegment {
        radii: vector(5.0, 5.0),
        x_rotation: 0.0,
        style: ArcStyle::SmallSweep,
        to: point(5.0, 0.0),
    };
    let from = point(-5.0, 0.0);
    assert!(fuzzy_eq_point(arc.centre(from), point(0.0, 0.0), 1e-6));
    // Going clockwise on screen through the top, the arc ends heading down.
    assert!(fuzzy_eq_angle(arc.end_angle_in_degrees(from), 90.0, 1e-6));
}

#[test]
fn quarter_circle_centre() {
    let from = point(0.0, -5.0);
    let small = ArcSegment {
        radii: vector(5.0, 5.0),
        x_rotation: 0.0,
        style: ArcStyle::SmallSweep,
        to: point(5.0, 0.0),
    };
    assert!(fuzzy_eq_point(small.centre(from), point(0.0, 0.0), 1e-9));
    assert!(fuzzy_eq_angle(small.end_angle_in_degrees(from), 90.0, 1e-6));

    let large = ArcSegment {
        style: ArcStyle::LargeSweep,
        ..small
    };
    assert!(fuzzy_eq_point(large.centre(from), point(5.0, -5.0), 1e-9));
    assert!(fuzzy_eq_angle(large.end_angle_in_degrees(from), 180.0, 1e-6));

    let counter = ArcSegment {
        style: ArcStyle::Small,
        ..small
    };
    assert!(fuzzy_eq_point(counter.centre(from), point(5.0, -5.0), 1e-9));
    assert!(fuzzy_eq_angle(counter.end_angle_in_degrees(from), 0.0, 1e-6));
}

#[test]
fn radii_too_small() {
    // Radii are scaled up until the ellipse joins both endpoints.
    let arc = ArcSegment {
        radii: vector(1.0, 1.0),
        x_rotation: 0.0,
        style: ArcStyle::Small,
        to: point(10.0, 0.0),
    };
    assert!(fuzzy_eq_point(arc.centre(point(0.0, 0.0)), point(5.0, 0.0), 1e-9));
}

#[test]
fn rotated_ellipse_centre() {
    // Ellipse centred at the origin with rx = 10, ry = 5 rotated by 90 degrees:
    // its x axis points down. Walk from its top to its bottom.
    let arc = ArcSegment {
        radii: vector(10.0, 5.0),
        x_rotation: 90.0,
        style: ArcStyle::SmallSweep,
        to: point(0.0, 10.0),
    };
    let from = point(0.0, -10.0);
    assert!(fuzzy_eq_point(arc.centre(from), point(0.0, 0.0), 1e-9));
    // With the sweep flag the arc goes through the right side and ends heading left.
    assert!(fuzzy_eq_angle(arc.end_angle_in_degrees(from), 180.0, 1e-6));
}

#[test]
fn ellipse_tangent() {
    // Axis aligned ellipse rx = 10, ry = 5 centred at the origin, from its top
    // point (0, -5) to its right point (10, 0) clockwise on screen.
    let arc = ArcSegment {
        radii: vector(10.0, 5.0),
        x_rotation: 0.0,
        style: ArcStyle::SmallSweep,
        to: point(10.0, 0.0),
    };
    let from = point(0.0, -5.0);
    assert!(fuzzy_eq_point(arc.centre(from), point(0.0, 0.0), 1e-9));
    assert!(fuzzy_eq_angle(arc.end_angle_in_degrees(from), 90.0, 1e-6));

    // Stopping at a point where the tangent is not axis aligned.
    let t: f64 = 30.0f64.to_radians();
    let to = point(10.0 * t.cos(), 5.0 * t.sin());
    let arc = ArcSegment { to, ..arc };
    let expected = angle_of(vector(-10.0 * t.sin(), 5.0 * t.cos()));
    let from = point(10.0, 0.0);
    assert!(fuzzy_eq_point(arc.centre(from), point(0.0, 0.0), 1e-9));
    assert!(fuzzy_eq_angle(arc.end_angle_in_degrees(from), expected, 1e-6));
}

#[test]
fn degenerate_arcs() {
    let from = point(0.0, 0.0);
    let flat = ArcSegment {
        radii: vector(0.0, 5.0),
        x_rotation: 0.0,
        style: ArcStyle::Large,
        to: point(0.0, 10.0),
    };
    assert!(flat.is_degenerate(from));
    assert_eq!(flat.centre(from), point(0.0, 5.0));
    assert_eq!(flat.end_angle_in_degrees(from), 90.0);

    let closed = ArcSegment {
        radii: vector(5.0, 5.0),
        to: from,
        ..flat
    };
    assert!(closed.is_degenerate(from));
    assert_eq!(closed.centre(from), from);
}
