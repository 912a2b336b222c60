//! Common shapes drawn with path commands.
//!
//! Every shape is made of complete sub-paths: drawing one doesn't require
//! an open sub-path and, except for rings, leaves none open.
//!
//! # Examples
//!
//! ```
//! # extern crate quill_path;
//! # fn main() -> Result<(), quill_path::BuilderError> {
//! use quill_path::{Precision, SvgPathBuilder};
//! use quill_path::math::point;
//!
//! let mut builder = SvgPathBuilder::with_precision(Precision::digits(0));
//! builder.with_geometry().add_circle(point(10.0, 10.0), 5.0)?;
//!
//! assert_eq!(builder.build(), "M 5 10 A 5 5 0 1 1 15 10 A 5 5 0 1 1 5 10 Z");
//! # Ok(())
//! # }
//! ```

use crate::arc::ArcStyle;
use crate::builder::SvgPathBuilder;
use crate::geom::normalize_angle;
use crate::geom::vector::{mirror_y, with_angle};
use crate::math::{point, vector, Angle, Point, Size, Vector};
use crate::BuilderError;

use std::fmt;

/// The radius of each corner of a rectangle.
///
/// A radius of zero makes a sharp corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct CornerRadii {
    pub top_left: f64,
    pub top_right: f64,
    pub bottom_left: f64,
    pub bottom_right: f64,
}

impl CornerRadii {
    pub const ZERO: Self = CornerRadii {
        top_left: 0.0,
        top_right: 0.0,
        bottom_left: 0.0,
        bottom_right: 0.0,
    };

    /// The same radius for every corner.
    pub fn new(radius: f64) -> Self {
        CornerRadii {
            top_left: radius,
            top_right: radius,
            bottom_left: radius,
            bottom_right: radius,
        }
    }

    #[inline]
    pub fn with_top_left(mut self, radius: f64) -> Self {
        self.top_left = radius;
        self
    }

    #[inline]
    pub fn with_top_right(mut self, radius: f64) -> Self {
        self.top_right = radius;
        self
    }

    #[inline]
    pub fn with_bottom_left(mut self, radius: f64) -> Self {
        self.bottom_left = radius;
        self
    }

    #[inline]
    pub fn with_bottom_right(mut self, radius: f64) -> Self {
        self.bottom_right = radius;
        self
    }
}

impl Default for CornerRadii {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for CornerRadii {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Clockwise from the top left corner, like CSS.
        write!(
            f,
            "CornerRadii({}, {}, {}, {})",
            self.top_left, self.top_right, self.bottom_right, self.bottom_left
        )
    }
}

/// Parameters for the rectangles of `SvgGeometryBuilder`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
#[non_exhaustive]
pub struct RectangleOptions {
    /// Rotation of the rectangle around its top left corner, in degrees.
    ///
    /// Default value: `RectangleOptions::DEFAULT_ANGLE`.
    pub angle: f64,

    /// Default value: `CornerRadii::ZERO`.
    pub corner_radii: CornerRadii,
}

impl RectangleOptions {
    pub const DEFAULT_ANGLE: f64 = 0.0;

    pub const DEFAULT: Self = RectangleOptions {
        angle: Self::DEFAULT_ANGLE,
        corner_radii: CornerRadii::ZERO,
    };

    #[inline]
    pub fn angle(angle: f64) -> Self {
        Self::DEFAULT.with_angle(angle)
    }

    #[inline]
    pub fn corner_radii(radii: CornerRadii) -> Self {
        Self::DEFAULT.with_corner_radii(radii)
    }

    #[inline]
    pub const fn with_angle(mut self, angle: f64) -> Self {
        self.angle = angle;
        self
    }

    #[inline]
    pub const fn with_corner_radii(mut self, radii: CornerRadii) -> Self {
        self.corner_radii = radii;
        self
    }
}

impl Default for RectangleOptions {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Draws shapes on top of a path builder.
///
/// Created with [`SvgPathBuilder::with_geometry`].
pub struct SvgGeometryBuilder<'l> {
    builder: &'l mut SvgPathBuilder,
}

impl<'l> SvgGeometryBuilder<'l> {
    pub fn new(builder: &'l mut SvgPathBuilder) -> Self {
        SvgGeometryBuilder { builder }
    }

    pub fn builder(&mut self) -> &mut SvgPathBuilder {
        self.builder
    }

    pub fn build(&self) -> String {
        self.builder.build()
    }

    /// A circle made of two half circles, starting from its leftmost point.
    pub fn add_circle(&mut self, centre: Point, radius: f64) -> Result<&mut Self, BuilderError> {
        let left = point(centre.x - radius, centre.y);
        let right = point(centre.x + radius, centre.y);
        let radii = vector(radius, radius);
        self.builder
            .move_to_with_angle(left, -90.0)
            .arc_to(radii, 0.0, ArcStyle::LargeSweep, right)?
            .arc_to(radii, 0.0, ArcStyle::LargeSweep, left)?
            .close()?;

        Ok(self)
    }

    /// An ellipse rotated by `angle` degrees around its centre.
    pub fn add_ellipse(
        &mut self,
        centre: Point,
        radii: Vector,
        angle: f64,
    ) -> Result<&mut Self, BuilderError> {
        let delta = mirror_y(with_angle(vector(-radii.x, 0.0), -angle));
        let start = centre - delta;
        let end = centre + delta;
        self.builder
            .move_to_with_angle(start, angle - 90.0)
            .arc_to(radii, angle, ArcStyle::LargeSweep, end)?
            .arc_to(radii, angle, ArcStyle::LargeSweep, start)?
            .close()?;

        Ok(self)
    }

    /// Two concentric circles, the inner one going the other way around.
    ///
    /// The outer circle is left open, the inner one is closed.
    pub fn add_ring(
        &mut self,
        centre: Point,
        inner_radius: f64,
        width: f64,
    ) -> Result<&mut Self, BuilderError> {
        let radius = inner_radius + width;
        let left = point(centre.x - radius, centre.y);
        let right = point(centre.x + radius, centre.y);
        let inner_left = point(centre.x - inner_radius, centre.y);
        let inner_right = point(centre.x + inner_radius, centre.y);
        let radii = vector(radius, radius);
        let inner_radii = vector(inner_radius, inner_radius);
        self.builder
            .move_to_with_angle(left, -90.0)
            .arc_to(radii, 0.0, ArcStyle::LargeSweep, right)?
            .arc_to(radii, 0.0, ArcStyle::LargeSweep, left)?
            .move_to_with_angle(inner_left, 90.0)
            .arc_to(inner_radii, 0.0, ArcStyle::Large, inner_right)?
            .arc_to(inner_radii, 0.0, ArcStyle::Large, inner_left)?
            .close()?;

        Ok(self)
    }

    pub fn add_square(
        &mut self,
        top_left: Point,
        size: f64,
        options: &RectangleOptions,
    ) -> Result<&mut Self, BuilderError> {
        self.add_rectangle(top_left, Size::new(size, size), options)
    }

    /// A rectangle rotated around its top left corner, with optionally rounded
    /// corners.
    ///
    /// Rounded corners are quadratic curves, edges are relative lines.
    pub fn add_rectangle(
        &mut self,
        top_left: Point,
        size: Size,
        options: &RectangleOptions,
    ) -> Result<&mut Self, BuilderError> {
        let angle = options.angle;
        let radii = &options.corner_radii;

        if radii.top_left == 0.0 {
            self.builder.move_to_with_angle(top_left, 270.0 + angle);
        } else {
            let delta = with_angle(vector(radii.top_left, 0.0), 90.0 - angle);
            self.builder
                .move_to_with_angle(
                    point(top_left.x - delta.x, top_left.y + delta.y),
                    270.0 + angle,
                )
                .quadratic_bezier_to(
                    top_left,
                    point(top_left.x + delta.y, top_left.y + delta.x),
                )?;
        }

        self.builder
            .add_line(size.width - radii.top_left - radii.top_right, angle)?;
        self.add_rectangle_corner(radii.top_right, -angle)?;
        self.builder
            .add_line(size.height - radii.top_right - radii.bottom_right, 90.0 + angle)?;
        self.add_rectangle_corner(radii.bottom_right, 270.0 - angle)?;
        self.builder
            .add_line(size.width - radii.bottom_right - radii.bottom_left, 180.0 + angle)?;
        self.add_rectangle_corner(radii.bottom_left, 180.0 - angle)?;
        self.builder.close()?;

        Ok(self)
    }

    fn add_rectangle_corner(&mut self, radius: f64, angle: f64) -> Result<(), BuilderError> {
        if radius > 0.0 {
            let delta = with_angle(vector(radius, 0.0), angle);
            let current = self.builder.current_position().unwrap_or_else(Point::origin);
            let corner = point(current.x + delta.x, current.y - delta.y);
            self.builder
                .quadratic_bezier_to(corner, point(corner.x + delta.y, corner.y + delta.x))?;
        }

        Ok(())
    }

    /// A closed polygon. Does nothing if `points` is empty.
    pub fn add_polygon(&mut self, points: &[Point]) -> Result<&mut Self, BuilderError> {
        if let Some((first, rest)) = points.split_first() {
            self.builder.move_to(*first);
            for &p in rest {
                self.builder.line_to(p)?;
            }
            self.builder.close()?;
        }

        Ok(self)
    }

    /// A circular sector from `start_angle` to `end_angle`, in degrees.
    ///
    /// An angle of 0 points up and angles grow clockwise on screen. If both
    /// angles are the same once normalized, a full circle is drawn.
    pub fn add_pie(
        &mut self,
        centre: Point,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<&mut Self, BuilderError> {
        let (start_angle, end_angle) = match pie_angles(start_angle, end_angle) {
            Some(angles) => angles,
            None => return self.add_circle(centre, radius),
        };

        let start = Angle::degrees(start_angle - 90.0);
        let end = Angle::degrees(end_angle - 90.0);
        let style = if end_angle - start_angle > 180.0 {
            ArcStyle::LargeSweep
        } else {
            ArcStyle::SmallSweep
        };

        self.builder
            .move_to_with_angle(on_circle(centre, radius, &start), start_angle)
            .arc_to(vector(radius, radius), 0.0, style, on_circle(centre, radius, &end))?
            .line_to(centre)?
            .close()?;

        Ok(self)
    }

    /// A sector of a ring from `start_angle` to `end_angle`, in degrees.
    ///
    /// Angles follow the same convention as `add_pie`. If both angles are the
    /// same once normalized, a full ring is drawn.
    pub fn add_ring_pie(
        &mut self,
        centre: Point,
        inner_radius: f64,
        width: f64,
        start_angle: f64,
        end_angle: f64,
    ) -> Result<&mut Self, BuilderError> {
        let (start_angle, end_angle) = match pie_angles(start_angle, end_angle) {
            Some(angles) => angles,
            None => return self.add_ring(centre, inner_radius, width),
        };

        let radius = inner_radius + width;
        let start = Angle::degrees(start_angle - 90.0);
        let end = Angle::degrees(end_angle - 90.0);
        let (outer_style, inner_style) = if end_angle - start_angle > 180.0 {
            (ArcStyle::LargeSweep, ArcStyle::Large)
        } else {
            (ArcStyle::SmallSweep, ArcStyle::Small)
        };

        self.builder
            .move_to_with_angle(on_circle(centre, radius, &start), start_angle)
            .arc_to(
                vector(radius, radius),
                0.0,
                outer_style,
                on_circle(centre, radius, &end),
            )?
            .line_to(on_circle(centre, inner_radius, &end))?
            .arc_to(
                vector(inner_radius, inner_radius),
                0.0,
                inner_style,
                on_circle(centre, inner_radius, &start),
            )?
            .close()?;

        Ok(self)
    }
}

/// Normalizes the angles of a sector so that `start <= end < start + 360`.
///
/// Returns `None` for full turns.
fn pie_angles(start_angle: f64, end_angle: f64) -> Option<(f64, f64)> {
    let start_angle = normalize_angle(start_angle);
    let mut end_angle = normalize_angle(end_angle);
    if start_angle == end_angle {
        return None;
    }

    if end_angle < start_angle {
        end_angle += 360.0;
    }

    Some((start_angle, end_angle))
}

fn on_circle(centre: Point, radius: f64, angle: &Angle) -> Point {
    point(centre.x + angle.cos() * radius, centre.y + angle.sin() * radius)
}

#[test]
fn corner_radii() {
    let radii = CornerRadii::new(2.0).with_bottom_left(0.0);
    assert_eq!(radii.top_left, 2.0);
    assert_eq!(radii.bottom_left, 0.0);
    assert_eq!(radii.to_string(), "CornerRadii(2, 2, 2, 0)");
    assert_eq!(CornerRadii::default(), CornerRadii::ZERO);

    let options = RectangleOptions::angle(30.0).with_corner_radii(radii);
    assert_eq!(options.angle, 30.0);
    assert_eq!(options.corner_radii, radii);
    assert_eq!(RectangleOptions::default(), RectangleOptions::DEFAULT);
}

#[test]
fn sector_angles() {
    assert_eq!(pie_angles(0.0, 90.0), Some((0.0, 90.0)));
    assert_eq!(pie_angles(270.0, 90.0), Some((270.0, 450.0)));
    assert_eq!(pie_angles(-90.0, 0.0), Some((270.0, 360.0)));
    assert_eq!(pie_angles(10.0, 370.0), None);
}
