use crate::arc::ArcSegment;
use crate::geom::Matrix2;
use crate::math::{Angle, Point, Vector};
use crate::NodeId;

/// The kind of a path node, one per SVG command.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum NodeType {
    Start,
    Line,
    Offset,
    Quadratic,
    SmoothQuadratic,
    Cubic,
    SmoothCubic,
    Arc,
    Close,
}

/// A path command along with the data it owns.
///
/// All coordinates are absolute, including the ones of `Offset` nodes which
/// are rendered relative to their predecessor. Everything a node derives from
/// its predecessor (its direction, the implicit control point of smooth curves,
/// the centre of arcs) is computed by [`PathNodes`](crate::PathNodes).
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub enum PathNode {
    /// Starts a sub-path (`M`). The angle is the initial direction in degrees.
    Start { to: Point, angle: f64 },
    /// Line in absolute coordinates (`L`, `H` or `V`).
    Line { to: Point },
    /// Line relative to the previous endpoint (`l`, `h` or `v`).
    Offset { to: Point },
    /// `Q`
    Quadratic { ctrl: Point, to: Point },
    /// `T`: the control point is the reflection of the previous one.
    SmoothQuadratic { to: Point },
    /// `C`
    Cubic { ctrl1: Point, ctrl2: Point, to: Point },
    /// `S`: the first control point is the reflection of the previous one.
    SmoothCubic { ctrl2: Point, to: Point },
    /// `A`
    Arc(ArcSegment),
    /// `Z`: goes back to the start of the sub-path.
    Close { start: NodeId },
}

impl PathNode {
    pub fn node_type(&self) -> NodeType {
        match *self {
            PathNode::Start { .. } => NodeType::Start,
            PathNode::Line { .. } => NodeType::Line,
            PathNode::Offset { .. } => NodeType::Offset,
            PathNode::Quadratic { .. } => NodeType::Quadratic,
            PathNode::SmoothQuadratic { .. } => NodeType::SmoothQuadratic,
            PathNode::Cubic { .. } => NodeType::Cubic,
            PathNode::SmoothCubic { .. } => NodeType::SmoothCubic,
            PathNode::Arc(..) => NodeType::Arc,
            PathNode::Close { .. } => NodeType::Close,
        }
    }

    /// The stored endpoint.
    ///
    /// Close nodes don't store one, their endpoint is the position of their start.
    pub fn to(&self) -> Option<Point> {
        match *self {
            PathNode::Start { to, .. }
            | PathNode::Line { to }
            | PathNode::Offset { to }
            | PathNode::Quadratic { to, .. }
            | PathNode::SmoothQuadratic { to }
            | PathNode::Cubic { to, .. }
            | PathNode::SmoothCubic { to, .. } => Some(to),
            PathNode::Arc(ref arc) => Some(arc.to),
            PathNode::Close { .. } => None,
        }
    }

    pub fn is_start(&self) -> bool {
        match *self {
            PathNode::Start { .. } => true,
            _ => false,
        }
    }

    pub(crate) fn set_to(&mut self, position: Point) {
        match self {
            PathNode::Start { to, .. }
            | PathNode::Line { to }
            | PathNode::Offset { to }
            | PathNode::Quadratic { to, .. }
            | PathNode::SmoothQuadratic { to }
            | PathNode::Cubic { to, .. }
            | PathNode::SmoothCubic { to, .. } => *to = position,
            PathNode::Arc(arc) => arc.to = position,
            PathNode::Close { .. } => {}
        }
    }

    fn for_each_point_mut(&mut self, mut callback: impl FnMut(&mut Point)) {
        match self {
            PathNode::Start { to, .. }
            | PathNode::Line { to }
            | PathNode::Offset { to }
            | PathNode::SmoothQuadratic { to } => callback(to),
            PathNode::Quadratic { ctrl, to } => {
                callback(ctrl);
                callback(to);
            }
            PathNode::Cubic { ctrl1, ctrl2, to } => {
                callback(ctrl1);
                callback(ctrl2);
                callback(to);
            }
            PathNode::SmoothCubic { ctrl2, to } => {
                callback(ctrl2);
                callback(to);
            }
            PathNode::Arc(arc) => callback(&mut arc.to),
            PathNode::Close { .. } => {}
        }
    }

    /// Scales the stored points around `origin`. Arc radii are scaled as well.
    pub(crate) fn scale(&mut self, origin: Point, factor: f64) {
        self.for_each_point_mut(|p| *p = origin + (*p - origin) * factor);
        if let PathNode::Arc(arc) = self {
            arc.radii = arc.radii * factor;
        }
    }

    pub(crate) fn translate(&mut self, by: Vector) {
        self.for_each_point_mut(|p| *p += by);
    }

    /// Rotates the stored points around `origin` by `angle`, from the y axis
    /// towards the x axis (counter-clockwise on screen).
    ///
    /// A direction of `a` degrees becomes `a - angle`, so the angle of start
    /// nodes and the rotation of arcs decrease by `angle`.
    pub(crate) fn rotate(&mut self, origin: Point, angle: &Angle) {
        let rotation = Matrix2::rotation(angle);
        self.for_each_point_mut(|p| *p = origin + rotation.transform_vector(*p - origin));
        match self {
            PathNode::Start { angle: start_angle, .. } => *start_angle -= angle.in_degrees(),
            PathNode::Arc(arc) => arc.x_rotation -= angle.in_degrees(),
            _ => {}
        }
    }
}

#[cfg(test)]
use crate::arc::ArcStyle;
#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn fuzzy_eq_point(a: Point, b: Point) -> bool {
    f64::abs(a.x - b.x) <= 1e-9 && f64::abs(a.y - b.y) <= 1e-9
}

#[test]
fn node_types() {
    let to = point(1.0, 2.0);
    assert_eq!(PathNode::Start { to, angle: 0.0 }.node_type(), NodeType::Start);
    assert_eq!(PathNode::SmoothQuadratic { to }.node_type(), NodeType::SmoothQuadratic);
    assert_eq!(PathNode::Close { start: NodeId(0) }.node_type(), NodeType::Close);
    assert_eq!(PathNode::Close { start: NodeId(0) }.to(), None);
    assert_eq!(PathNode::Cubic { ctrl1: to, ctrl2: to, to }.to(), Some(to));
    assert!(PathNode::Start { to, angle: 0.0 }.is_start());
    assert!(!PathNode::Line { to }.is_start());
}

#[test]
fn scale_node() {
    let mut node = PathNode::Cubic {
        ctrl1: point(2.0, 2.0),
        ctrl2: point(3.0, 1.0),
        to: point(4.0, 0.0),
    };
    node.scale(point(1.0, 1.0), 2.0);
    assert_eq!(
        node,
        PathNode::Cubic {
            ctrl1: point(3.0, 3.0),
            ctrl2: point(5.0, 1.0),
            to: point(7.0, -1.0),
        }
    );

    let mut arc = PathNode::Arc(ArcSegment {
        radii: vector(2.0, 3.0),
        x_rotation: 10.0,
        style: ArcStyle::Large,
        to: point(1.0, 0.0),
    });
    arc.scale(point(0.0, 0.0), -2.0);
    match arc {
        PathNode::Arc(arc) => {
            assert_eq!(arc.radii, vector(-4.0, -6.0));
            assert_eq!(arc.to, point(-2.0, 0.0));
            assert_eq!(arc.x_rotation, 10.0);
        }
        _ => panic!(),
    }
}

#[test]
fn translate_node() {
    let mut node = PathNode::SmoothCubic {
        ctrl2: point(1.0, 1.0),
        to: point(2.0, 0.0),
    };
    node.translate(vector(10.0, -5.0));
    assert_eq!(
        node,
        PathNode::SmoothCubic {
            ctrl2: point(11.0, -4.0),
            to: point(12.0, -5.0),
        }
    );

    let mut close = PathNode::Close { start: NodeId(3) };
    close.translate(vector(1.0, 1.0));
    assert_eq!(close, PathNode::Close { start: NodeId(3) });
}

#[test]
fn rotate_node() {
    let mut start = PathNode::Start {
        to: point(10.0, 0.0),
        angle: 30.0,
    };
    start.rotate(point(0.0, 0.0), &Angle::degrees(90.0));
    match start {
        PathNode::Start { to, angle } => {
            assert!(fuzzy_eq_point(to, point(0.0, -10.0)));
            assert_eq!(angle, -60.0);
        }
        _ => panic!(),
    }

    let mut start = PathNode::Start {
        to: point(10.0, -20.0),
        angle: 30.0,
    };
    start.rotate(point(5.0, -5.0), &Angle::degrees(100.0));
    assert!(f64::abs(start.to().unwrap().x - -10.640357183) <= 1e-8);
    assert!(f64::abs(start.to().unwrap().y - -7.3193161) <= 1e-7);

    let mut start = PathNode::Start {
        to: point(7.7, 0.0),
        angle: 200.0,
    };
    start.rotate(point(0.0, 0.0), &Angle::degrees(67.24));
    assert!(f64::abs(start.to().unwrap().x - 2.978913708) <= 1e-8);
    assert!(f64::abs(start.to().unwrap().y - -7.100427671) <= 1e-8);

    let mut line = PathNode::Line { to: point(6.0, 1.0) };
    line.rotate(point(5.0, 1.0), &Angle::degrees(180.0));
    assert!(fuzzy_eq_point(line.to().unwrap(), point(4.0, 1.0)));

    let mut arc = PathNode::Arc(ArcSegment {
        radii: vector(2.0, 3.0),
        x_rotation: 13.0,
        style: ArcStyle::SmallSweep,
        to: point(1.0, 0.0),
    });
    arc.rotate(point(0.0, 0.0), &Angle::degrees(100.0));
    match arc {
        PathNode::Arc(arc) => {
            assert_eq!(arc.x_rotation, -87.0);
            assert_eq!(arc.radii, vector(2.0, 3.0));
        }
        _ => panic!(),
    }
}
