//! Fluent construction of SVG path data.
//!
//! # Sub-paths
//!
//! Every drawing operation appends a node to the path and requires an open
//! sub-path: one has to be started with `move_to` or `move_by` first, and
//! `close` ends it. Moving while a sub-path is open starts a new one.
//!
//! ```text
//!            move_to / move_by
//!  (no sub-path) ---------------> (open) --+ line_to, arc_to, move_to, ...
//!        ^                          |  ^    |
//!        +---------- close ---------+  +----+
//! ```
//!
//! Operations that fail return an error and leave the path unchanged.
//!
//! # Coordinates
//!
//! The y axis points down and angles are measured in degrees from the x axis
//! towards the y axis, like in SVG documents: an angle of 90 points down.
//!
//! # Examples
//!
//! ```
//! # extern crate quill_path;
//! # fn main() -> Result<(), quill_path::BuilderError> {
//! use quill_path::{Precision, SvgPathBuilder};
//! use quill_path::math::{point, vector};
//!
//! let mut builder = SvgPathBuilder::with_precision(Precision::digits(0));
//! builder
//!     .move_to(point(0.0, 0.0))
//!     .line_by(vector(10.0, 0.0))?
//!     .add_rounded_corner_to(point(20.0, 10.0), 90.0)?
//!     .add_line(10.0)?
//!     .close()?;
//!
//! assert_eq!(builder.build(), "M 0 0 h 10 Q 20 0 20 10 v 10 Z");
//! # Ok(())
//! # }
//! ```

use crate::arc::{ArcSegment, ArcStyle};
use crate::geometry::SvgGeometryBuilder;
use crate::geom::vector::from_angle;
use crate::math::{point, Angle, Line, Point, Vector};
use crate::node::PathNode;
use crate::nodes::{NodeRef, PathNodes};
use crate::{BuilderError, NodeId, Precision};

use std::fmt;

/// Builds SVG path data one command at a time.
///
/// Operations return `&mut Self` (wrapped in a `Result` when they can fail)
/// so that they can be chained.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SvgPathBuilder {
    nodes: PathNodes,
    open_start: Option<NodeId>,
    precision: Precision,
}

impl SvgPathBuilder {
    /// Creates a builder using the default precision.
    pub fn new() -> Self {
        Self::with_precision(Precision::DEFAULT)
    }

    pub fn with_precision(precision: Precision) -> Self {
        SvgPathBuilder {
            nodes: PathNodes::new(),
            open_start: None,
            precision,
        }
    }

    /// Starts a new sub-path at `to`, heading in the direction of the x axis.
    pub fn move_to(&mut self, to: Point) -> &mut Self {
        self.move_to_with_angle(to, 0.0)
    }

    /// Starts a new sub-path at `to` with an initial direction in degrees.
    pub fn move_to_with_angle(&mut self, to: Point, angle: f64) -> &mut Self {
        let id = self.nodes.push_start(to, angle);
        self.open_start = Some(id);
        self
    }

    /// Starts a new sub-path at the current point moved by `by`.
    ///
    /// The new sub-path keeps the direction of the last node. Without any node,
    /// the sub-path starts at `by`.
    pub fn move_by(&mut self, by: Vector) -> &mut Self {
        let angle = self.current_angle_in_degrees().unwrap_or(0.0);
        self.move_by_with_angle(by, angle)
    }

    /// Starts a new sub-path at the current point moved by `by`, with an initial
    /// direction in degrees.
    pub fn move_by_with_angle(&mut self, by: Vector, angle: f64) -> &mut Self {
        let origin = self.current_position().unwrap_or_else(Point::origin);
        self.move_to_with_angle(origin + by, angle)
    }

    pub fn line_to(&mut self, to: Point) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::Line { to })
    }

    /// Horizontal line to `x`.
    pub fn line_to_x(&mut self, x: f64) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.push(PathNode::Line {
            to: point(x, current.y),
        })
    }

    /// Vertical line to `y`.
    pub fn line_to_y(&mut self, y: f64) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.push(PathNode::Line {
            to: point(current.x, y),
        })
    }

    /// Line relative to the current point.
    pub fn line_by(&mut self, by: Vector) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.push(PathNode::Offset { to: current + by })
    }

    pub fn line_by_x(&mut self, dx: f64) -> Result<&mut Self, BuilderError> {
        self.line_by(Vector::new(dx, 0.0))
    }

    pub fn line_by_y(&mut self, dy: f64) -> Result<&mut Self, BuilderError> {
        self.line_by(Vector::new(0.0, dy))
    }

    /// Line from the current point in the direction of `angle` (in degrees) up
    /// to the vertical line at `x`.
    ///
    /// Fails if the direction doesn't lead to that vertical line.
    pub fn angled_line_to_x(&mut self, x: f64, angle: f64) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        if x == current.x {
            return self.line_to(point(x, current.y));
        }

        let ray = Line::new(current, angle);
        let vertical = Line::new(point(x, 0.0), 90.0);
        match ray.ray_intersection(&vertical) {
            Some(intersection) => self.line_to(point(x, intersection.y)),
            None => {
                tracing::debug!(x, angle, "angled line doesn't reach the vertical line");
                Err(BuilderError::NoVerticalIntersection {
                    x,
                    from_x: current.x,
                    from_y: current.y,
                    angle,
                })
            }
        }
    }

    /// Line from the current point in the direction of `angle` (in degrees) up
    /// to the horizontal line at `y`.
    ///
    /// Fails if the direction doesn't lead to that horizontal line.
    pub fn angled_line_to_y(&mut self, y: f64, angle: f64) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        if y == current.y {
            return self.line_to(point(current.x, y));
        }

        let ray = Line::new(current, angle);
        let horizontal = Line::new(point(0.0, y), 0.0);
        match ray.ray_intersection(&horizontal) {
            Some(intersection) => self.line_to(point(intersection.x, y)),
            None => {
                tracing::debug!(y, angle, "angled line doesn't reach the horizontal line");
                Err(BuilderError::NoHorizontalIntersection {
                    y,
                    from_x: current.x,
                    from_y: current.y,
                    angle,
                })
            }
        }
    }

    /// Relative line of a given length in the direction of `angle` (in degrees).
    ///
    /// A negative length draws the line in the opposite direction.
    pub fn add_line(&mut self, length: f64, angle: f64) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        let (length, angle) = if length < 0.0 {
            (-length, angle + 180.0)
        } else {
            (length, angle)
        };

        self.line_by(from_angle(angle) * length)
    }

    /// Quadratic bézier curve when `ctrl2` is `None`, cubic otherwise.
    pub fn curve_to(
        &mut self,
        ctrl1: Point,
        ctrl2: Option<Point>,
        to: Point,
    ) -> Result<&mut Self, BuilderError> {
        match ctrl2 {
            Some(ctrl2) => self.cubic_bezier_to(ctrl1, ctrl2, to),
            None => self.quadratic_bezier_to(ctrl1, to),
        }
    }

    pub fn quadratic_bezier_to(&mut self, ctrl: Point, to: Point) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::Quadratic { ctrl, to })
    }

    pub fn cubic_bezier_to(
        &mut self,
        ctrl1: Point,
        ctrl2: Point,
        to: Point,
    ) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::Cubic { ctrl1, ctrl2, to })
    }

    /// Same as `curve_to` with every point relative to the current point.
    ///
    /// The curve is stored in absolute coordinates.
    pub fn curve_by(
        &mut self,
        ctrl1: Vector,
        ctrl2: Option<Vector>,
        to: Vector,
    ) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.curve_to(current + ctrl1, ctrl2.map(|v| current + v), current + to)
    }

    /// Smooth quadratic bézier curve when `ctrl2` is `None`, smooth cubic
    /// otherwise.
    ///
    /// The first control point is the reflection of the previous curve's last
    /// control point.
    pub fn smooth_curve_to(
        &mut self,
        ctrl2: Option<Point>,
        to: Point,
    ) -> Result<&mut Self, BuilderError> {
        match ctrl2 {
            Some(ctrl2) => self.smooth_cubic_bezier_to(ctrl2, to),
            None => self.smooth_quadratic_bezier_to(to),
        }
    }

    pub fn smooth_quadratic_bezier_to(&mut self, to: Point) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::SmoothQuadratic { to })
    }

    pub fn smooth_cubic_bezier_to(&mut self, ctrl2: Point, to: Point) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::SmoothCubic { ctrl2, to })
    }

    pub fn smooth_curve_by(
        &mut self,
        ctrl2: Option<Vector>,
        to: Vector,
    ) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.smooth_curve_to(ctrl2.map(|v| current + v), current + to)
    }

    /// Elliptic arc to `to`.
    ///
    /// `x_rotation` is the rotation of the ellipse in degrees.
    pub fn arc_to(
        &mut self,
        radii: Vector,
        x_rotation: f64,
        style: ArcStyle,
        to: Point,
    ) -> Result<&mut Self, BuilderError> {
        self.current_position_in_sub_path()?;
        self.push(PathNode::Arc(ArcSegment {
            radii,
            x_rotation,
            style,
            to,
        }))
    }

    pub fn arc_by(
        &mut self,
        radii: Vector,
        x_rotation: f64,
        style: ArcStyle,
        by: Vector,
    ) -> Result<&mut Self, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        self.arc_to(radii, x_rotation, style, current + by)
    }

    /// Turns from the current direction to `next_angle` (in degrees) with a
    /// quadratic curve ending at `to`.
    ///
    /// The control point is the intersection of the line going through the
    /// current point in the current direction and the line going through `to`
    /// in the direction of `next_angle`. When these lines are parallel, a
    /// straight line is drawn instead.
    pub fn add_rounded_corner_to(
        &mut self,
        to: Point,
        next_angle: f64,
    ) -> Result<AfterCornerBuilder, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        match self.corner_ctrl(current, to, next_angle) {
            Some(ctrl) => self.quadratic_bezier_to(ctrl, to)?,
            None => self.line_to(to)?,
        };

        Ok(AfterCornerBuilder { builder: self })
    }

    /// Same as `add_rounded_corner_to` with the endpoint relative to the current
    /// point. Falls back to a relative line.
    pub fn add_rounded_corner_by(
        &mut self,
        by: Vector,
        next_angle: f64,
    ) -> Result<AfterCornerBuilder, BuilderError> {
        let current = self.current_position_in_sub_path()?;
        let to = current + by;
        match self.corner_ctrl(current, to, next_angle) {
            Some(ctrl) => self.quadratic_bezier_to(ctrl, to)?,
            None => self.line_by(by)?,
        };

        Ok(AfterCornerBuilder { builder: self })
    }

    fn corner_ctrl(&self, current: Point, to: Point, next_angle: f64) -> Option<Point> {
        let angle = self.current_angle_in_degrees().unwrap_or(0.0);
        let ctrl = Line::new(current, angle).intersection(&Line::new(to, next_angle));
        if ctrl.is_none() {
            tracing::debug!(angle, next_angle, "parallel corner directions, falling back to a line");
        }

        ctrl
    }

    /// Appends a copy of a node, which may belong to another path.
    ///
    /// The copy follows the current last node: relative lines keep their offset
    /// and close nodes close the current sub-path. Start nodes open a new
    /// sub-path, other nodes require an open one.
    pub fn add_node(&mut self, node: NodeRef) -> Result<&mut Self, BuilderError> {
        if node.node().is_start() {
            let copy = self.nodes.copy_node(node)?;
            let id = self.nodes.push(copy)?;
            self.open_start = Some(id);
            return Ok(self);
        }

        self.current_position_in_sub_path()?;
        let copy = self.nodes.copy_node(node)?;
        self.nodes.push(copy)?;
        if let PathNode::Close { .. } = copy {
            self.open_start = None;
        }

        Ok(self)
    }

    /// Ends the current sub-path by going back to its start.
    pub fn close(&mut self) -> Result<&mut Self, BuilderError> {
        let start = self.open_start.ok_or_else(no_open_sub_path)?;
        self.nodes.push(PathNode::Close { start })?;
        self.open_start = None;
        Ok(self)
    }

    /// Scales the path around `origin`.
    pub fn scale(&mut self, origin: Point, factor: f64) -> &mut Self {
        self.nodes.scale(origin, factor);
        self
    }

    pub fn translate(&mut self, by: Vector) -> &mut Self {
        self.nodes.translate(by);
        self
    }

    /// Rotates the path around `origin` by `degrees`.
    ///
    /// Positive angles turn the y axis towards the x axis (counter-clockwise on
    /// screen). Every direction along the path decreases by `degrees`.
    pub fn rotate(&mut self, origin: Point, degrees: f64) -> &mut Self {
        self.nodes.rotate(origin, &Angle::degrees(degrees));
        self
    }

    /// Moves the endpoint of a node.
    ///
    /// Moving a close node moves the start of its sub-path.
    ///
    /// # Panics
    ///
    /// If `id` doesn't belong to this path.
    pub fn set_position(&mut self, id: NodeId, to: Point) -> &mut Self {
        self.nodes.set_position(id, to);
        self
    }

    /// Moves the first control point of a curve node.
    ///
    /// See [`PathNodes::set_ctrl`].
    pub fn set_ctrl(&mut self, id: NodeId, ctrl: Point) -> Result<&mut Self, BuilderError> {
        self.nodes.set_ctrl(id, ctrl)?;
        Ok(self)
    }

    /// Moves the second control point of a cubic curve node.
    pub fn set_ctrl2(&mut self, id: NodeId, ctrl: Point) -> Result<&mut Self, BuilderError> {
        self.nodes.set_ctrl2(id, ctrl)?;
        Ok(self)
    }

    /// Returns the path data: the command of every node, separated by spaces.
    pub fn build(&self) -> String {
        let mut out = String::new();
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            node.write_svg_command(&mut out, self.precision);
        }

        out
    }

    /// Draws shapes on this path.
    pub fn with_geometry(&mut self) -> SvgGeometryBuilder {
        SvgGeometryBuilder::new(self)
    }

    #[inline]
    pub fn nodes(&self) -> &PathNodes {
        &self.nodes
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> Option<NodeRef> {
        self.nodes.first()
    }

    pub fn last(&self) -> Option<NodeRef> {
        self.nodes.last()
    }

    /// The start node of the open sub-path.
    pub fn last_start(&self) -> Option<NodeRef> {
        self.open_start.and_then(|id| self.nodes.get(id))
    }

    /// Whether a sub-path is open.
    #[inline]
    pub fn is_open(&self) -> bool {
        self.open_start.is_some()
    }

    /// Endpoint of the last node.
    pub fn current_position(&self) -> Option<Point> {
        self.nodes.last().map(|node| node.position())
    }

    /// Direction of the path at the end of the last node, in degrees.
    pub fn current_angle_in_degrees(&self) -> Option<f64> {
        self.nodes.last().map(|node| node.angle_in_degrees())
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    fn current_position_in_sub_path(&self) -> Result<Point, BuilderError> {
        if self.open_start.is_none() {
            return Err(no_open_sub_path());
        }

        self.current_position().ok_or_else(no_open_sub_path)
    }

    fn push(&mut self, node: PathNode) -> Result<&mut Self, BuilderError> {
        self.nodes.push(node)?;
        Ok(self)
    }
}

fn no_open_sub_path() -> BuilderError {
    tracing::debug!("no open sub-path");
    BuilderError::NoOpenSubPath
}

impl fmt::Display for SvgPathBuilder {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(&self.build())
    }
}

/// Continues a path right after a rounded corner.
///
/// Lines added through this builder keep the direction the corner ends with.
pub struct AfterCornerBuilder<'l> {
    builder: &'l mut SvgPathBuilder,
}

impl<'l> AfterCornerBuilder<'l> {
    pub fn builder(self) -> &'l mut SvgPathBuilder {
        self.builder
    }

    /// Relative line of a given length in the direction the corner ends with.
    pub fn add_line(self, length: f64) -> Result<&'l mut SvgPathBuilder, BuilderError> {
        let angle = self.angle();
        let builder = self.builder;
        builder.add_line(length, angle)
    }

    /// Line in the direction the corner ends with, up to the vertical line at `x`.
    pub fn line_to_x(self, x: f64) -> Result<&'l mut SvgPathBuilder, BuilderError> {
        let angle = self.angle();
        let builder = self.builder;
        builder.angled_line_to_x(x, angle)
    }

    /// Line in the direction the corner ends with, up to the horizontal line at `y`.
    pub fn line_to_y(self, y: f64) -> Result<&'l mut SvgPathBuilder, BuilderError> {
        let angle = self.angle();
        let builder = self.builder;
        builder.angled_line_to_y(y, angle)
    }

    pub fn add_rounded_corner_to(
        self,
        to: Point,
        next_angle: f64,
    ) -> Result<AfterCornerBuilder<'l>, BuilderError> {
        let builder = self.builder;
        builder.add_rounded_corner_to(to, next_angle)
    }

    pub fn add_rounded_corner_by(
        self,
        by: Vector,
        next_angle: f64,
    ) -> Result<AfterCornerBuilder<'l>, BuilderError> {
        let builder = self.builder;
        builder.add_rounded_corner_by(by, next_angle)
    }

    pub fn close(self) -> Result<&'l mut SvgPathBuilder, BuilderError> {
        let builder = self.builder;
        builder.close()
    }

    pub fn build(&self) -> String {
        self.builder.build()
    }

    fn angle(&self) -> f64 {
        self.builder.current_angle_in_degrees().unwrap_or(0.0)
    }
}

/// Creates path builders sharing the same precision.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct SvgPathStarter {
    precision: Precision,
}

impl SvgPathStarter {
    pub fn new(precision: Precision) -> Self {
        SvgPathStarter { precision }
    }

    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Returns an empty builder.
    pub fn start(&self) -> SvgPathBuilder {
        SvgPathBuilder::with_precision(self.precision)
    }

    /// Returns a builder with a sub-path started at `to`.
    pub fn start_at(&self, to: Point, angle: f64) -> SvgPathBuilder {
        let mut builder = self.start();
        builder.move_to_with_angle(to, angle);
        builder
    }
}
