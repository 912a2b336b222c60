//! Storage for the nodes of a path.

use crate::format::{write_arc_command, write_command};
use crate::geom::vector::angle_of;
use crate::math::{Angle, Point, Vector};
use crate::node::{NodeType, PathNode};
use crate::{BuilderError, NodeId, Precision};

use std::fmt;
use std::ops::Index;

/// An ordered sequence of path nodes.
///
/// The predecessor of a node is the node stored right before it. Nodes never
/// refer to each other by reference: close nodes store the id of the start node
/// of their sub-path and everything else is looked up by position. Cloning a
/// `PathNodes` therefore produces an independent copy with the same links.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct PathNodes {
    nodes: Vec<PathNode>,
}

impl PathNodes {
    pub fn new() -> Self {
        PathNodes { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        PathNodes {
            nodes: Vec::with_capacity(capacity),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[PathNode] {
        &self.nodes
    }

    pub fn get(&self, id: NodeId) -> Option<NodeRef> {
        if id.to_usize() < self.nodes.len() {
            Some(NodeRef { nodes: self, id })
        } else {
            None
        }
    }

    pub fn first(&self) -> Option<NodeRef> {
        self.get(NodeId(0))
    }

    pub fn last(&self) -> Option<NodeRef> {
        self.last_id().map(|id| NodeRef { nodes: self, id })
    }

    pub fn last_id(&self) -> Option<NodeId> {
        self.nodes.len().checked_sub(1).map(NodeId::from_usize)
    }

    pub fn iter(&self) -> Nodes {
        Nodes {
            nodes: self,
            next: 0,
        }
    }

    /// Appends a start node. Start nodes can be added anywhere.
    pub fn push_start(&mut self, to: Point, angle: f64) -> NodeId {
        let id = NodeId::from_usize(self.nodes.len());
        tracing::trace!(?id, x = to.x, y = to.y, angle, "start sub-path");
        self.nodes.push(PathNode::Start { to, angle });
        id
    }

    /// Appends a node.
    ///
    /// Fails if the node needs a predecessor and the sequence is empty, or if
    /// a close node doesn't refer to a start node placed before it.
    pub fn push(&mut self, node: PathNode) -> Result<NodeId, BuilderError> {
        match node {
            PathNode::Start { to, angle } => return Ok(self.push_start(to, angle)),
            PathNode::Close { start } => {
                if self.is_empty() {
                    return Err(BuilderError::MissingPredecessor {
                        node_type: NodeType::Close,
                    });
                }
                match self.nodes.get(start.to_usize()) {
                    Some(PathNode::Start { .. }) => {}
                    _ => return Err(BuilderError::MissingStart),
                }
            }
            _ => {
                if self.is_empty() {
                    return Err(BuilderError::MissingPredecessor {
                        node_type: node.node_type(),
                    });
                }
            }
        }

        let id = NodeId::from_usize(self.nodes.len());
        tracing::trace!(?id, node_type = ?node.node_type(), "push node");
        self.nodes.push(node);

        Ok(id)
    }

    /// Returns the closest start node at or before `id`.
    pub fn find_start(&self, id: NodeId) -> Option<NodeId> {
        let end = (id.to_usize() + 1).min(self.nodes.len());
        self.nodes[..end]
            .iter()
            .rposition(PathNode::is_start)
            .map(NodeId::from_usize)
    }

    /// Creates a copy of `node`, which may belong to another sequence, that can
    /// be appended to this one.
    ///
    /// Offsets keep their offset relative to the new predecessor and close nodes
    /// refer to the closest start node of this sequence.
    pub fn copy_node(&self, node: NodeRef) -> Result<PathNode, BuilderError> {
        let copy = *node.node();
        if copy.is_start() {
            return Ok(copy);
        }

        let last = self.last_id().ok_or(BuilderError::MissingPredecessor {
            node_type: copy.node_type(),
        })?;

        Ok(match copy {
            PathNode::Offset { .. } => PathNode::Offset {
                to: self.position(last) + node.delta(),
            },
            PathNode::Close { .. } => PathNode::Close {
                start: self.find_start(last).ok_or(BuilderError::MissingStart)?,
            },
            other => other,
        })
    }

    /// Endpoint of a node. The endpoint of a close node is the one of its start.
    ///
    /// # Panics
    ///
    /// If `id` is out of bounds.
    pub fn position(&self, id: NodeId) -> Point {
        match self.nodes[id.to_usize()] {
            PathNode::Close { start } => self
                .nodes
                .get(start.to_usize())
                .and_then(PathNode::to)
                .unwrap_or_else(Point::origin),
            ref node => node.to().unwrap_or_else(Point::origin),
        }
    }

    /// Endpoint of the predecessor of a node, or the node's own endpoint for the
    /// first node.
    fn prev_position(&self, id: NodeId) -> Point {
        match id.prev() {
            Some(prev) => self.position(prev),
            None => self.position(id),
        }
    }

    /// Direction of the path at the endpoint of a node, in degrees.
    pub fn angle_in_degrees(&self, id: NodeId) -> f64 {
        let here = self.position(id);
        match self.nodes[id.to_usize()] {
            PathNode::Start { angle, .. } => angle,
            PathNode::Line { .. } | PathNode::Offset { .. } | PathNode::Close { .. } => {
                angle_of(here - self.prev_position(id))
            }
            PathNode::Quadratic { ctrl, to } => angle_of(to - ctrl),
            PathNode::Cubic { ctrl2, to, .. } | PathNode::SmoothCubic { ctrl2, to } => {
                angle_of(to - ctrl2)
            }
            PathNode::SmoothQuadratic { to } => angle_of(to - self.smooth_quadratic_ctrl(id)),
            PathNode::Arc(ref arc) => arc.end_angle_in_degrees(self.prev_position(id)),
        }
    }

    /// The first control point of a curve node.
    ///
    /// For smooth curves this is the reflection of the previous control point
    /// through the previous endpoint, or the previous endpoint if the previous
    /// node isn't a curve of the same degree.
    pub fn ctrl(&self, id: NodeId) -> Option<Point> {
        match self.nodes[id.to_usize()] {
            PathNode::Quadratic { ctrl, .. } => Some(ctrl),
            PathNode::Cubic { ctrl1, .. } => Some(ctrl1),
            PathNode::SmoothQuadratic { .. } => Some(self.smooth_quadratic_ctrl(id)),
            PathNode::SmoothCubic { .. } => Some(self.smooth_cubic_ctrl1(id)),
            _ => None,
        }
    }

    /// The second control point of a cubic curve node.
    pub fn ctrl2(&self, id: NodeId) -> Option<Point> {
        match self.nodes[id.to_usize()] {
            PathNode::Cubic { ctrl2, .. } | PathNode::SmoothCubic { ctrl2, .. } => Some(ctrl2),
            _ => None,
        }
    }

    fn smooth_quadratic_ctrl(&self, id: NodeId) -> Point {
        // Walk back to the first node of the run of smooth quadratic curves,
        // then reflect forward.
        let end = id.to_usize();
        let mut first = end;
        while first > 0 && self.nodes[first - 1].node_type() == NodeType::SmoothQuadratic {
            first -= 1;
        }

        let mut ctrl = match first.checked_sub(1) {
            Some(prev) => {
                let prev_to = self.position(NodeId::from_usize(prev));
                match self.nodes[prev] {
                    PathNode::Quadratic { ctrl, .. } => reflect(ctrl, prev_to),
                    _ => prev_to,
                }
            }
            None => self.position(NodeId(0)),
        };
        for i in first + 1..=end {
            ctrl = reflect(ctrl, self.position(NodeId::from_usize(i - 1)));
        }

        ctrl
    }

    fn smooth_cubic_ctrl1(&self, id: NodeId) -> Point {
        let prev = match id.prev() {
            Some(prev) => prev,
            None => return self.position(id),
        };
        let prev_to = self.position(prev);
        match self.nodes[prev.to_usize()] {
            PathNode::Cubic { ctrl2, .. } | PathNode::SmoothCubic { ctrl2, .. } => {
                reflect(ctrl2, prev_to)
            }
            _ => prev_to,
        }
    }

    /// Centre of the ellipse of an arc node.
    pub fn centre(&self, id: NodeId) -> Option<Point> {
        match self.nodes[id.to_usize()] {
            PathNode::Arc(ref arc) => Some(arc.centre(self.prev_position(id))),
            _ => None,
        }
    }

    /// Moves the endpoint of a node. Moving a close node moves its start.
    pub fn set_position(&mut self, id: NodeId, to: Point) {
        let target = match self.nodes[id.to_usize()] {
            PathNode::Close { start } => start,
            _ => id,
        };
        if let Some(node) = self.nodes.get_mut(target.to_usize()) {
            node.set_to(to);
        }
    }

    /// Sets the first control point of a curve node.
    ///
    /// Smooth curves don't store their first control point: setting it updates
    /// the previous node so that its reflection lands on `ctrl`. If the previous
    /// node isn't a curve of the same degree, its endpoint is moved to `ctrl`.
    pub fn set_ctrl(&mut self, id: NodeId, ctrl: Point) -> Result<(), BuilderError> {
        let node_type = self.nodes[id.to_usize()].node_type();
        if let NodeType::SmoothQuadratic | NodeType::SmoothCubic = node_type {
            return self.set_effective_ctrl(id, node_type, ctrl);
        }

        match &mut self.nodes[id.to_usize()] {
            PathNode::Quadratic { ctrl: c, .. } => *c = ctrl,
            PathNode::Cubic { ctrl1, .. } => *ctrl1 = ctrl,
            _ => return Err(BuilderError::NoControlPoint { node_type }),
        }

        Ok(())
    }

    /// Sets the second control point of a cubic curve node.
    pub fn set_ctrl2(&mut self, id: NodeId, ctrl: Point) -> Result<(), BuilderError> {
        match &mut self.nodes[id.to_usize()] {
            PathNode::Cubic { ctrl2, .. } | PathNode::SmoothCubic { ctrl2, .. } => {
                *ctrl2 = ctrl;
                Ok(())
            }
            node => Err(BuilderError::NoControlPoint {
                node_type: node.node_type(),
            }),
        }
    }

    fn set_effective_ctrl(
        &mut self,
        mut id: NodeId,
        mut node_type: NodeType,
        mut ctrl: Point,
    ) -> Result<(), BuilderError> {
        loop {
            let prev = id
                .prev()
                .ok_or(BuilderError::MissingPredecessor { node_type })?;
            let reflected = reflect(ctrl, self.position(prev));
            let prev_type = self.nodes[prev.to_usize()].node_type();

            match (node_type, prev_type) {
                (NodeType::SmoothQuadratic, NodeType::Quadratic) => {
                    return self.set_ctrl(prev, reflected);
                }
                (NodeType::SmoothQuadratic, NodeType::SmoothQuadratic) => {
                    id = prev;
                    node_type = prev_type;
                    ctrl = reflected;
                }
                (NodeType::SmoothCubic, NodeType::Cubic)
                | (NodeType::SmoothCubic, NodeType::SmoothCubic) => {
                    return self.set_ctrl2(prev, reflected);
                }
                _ => {
                    self.set_position(prev, ctrl);
                    return Ok(());
                }
            }
        }
    }

    /// Scales every node around `origin`.
    pub fn scale(&mut self, origin: Point, factor: f64) {
        for node in &mut self.nodes {
            node.scale(origin, factor);
        }
    }

    /// Moves every node by `by`.
    pub fn translate(&mut self, by: Vector) {
        for node in &mut self.nodes {
            node.translate(by);
        }
    }

    /// Rotates every node around `origin`.
    pub fn rotate(&mut self, origin: Point, angle: &Angle) {
        for node in &mut self.nodes {
            node.rotate(origin, angle);
        }
    }
}

impl Index<NodeId> for PathNodes {
    type Output = PathNode;

    fn index(&self, id: NodeId) -> &PathNode {
        &self.nodes[id.to_usize()]
    }
}

impl<'l> IntoIterator for &'l PathNodes {
    type Item = NodeRef<'l>;
    type IntoIter = Nodes<'l>;

    fn into_iter(self) -> Nodes<'l> {
        self.iter()
    }
}

fn reflect(p: Point, about: Point) -> Point {
    about + (about - p)
}

/// A node along with the sequence it belongs to.
///
/// Gives access to the values a node derives from its predecessor.
#[derive(Copy, Clone)]
pub struct NodeRef<'l> {
    nodes: &'l PathNodes,
    id: NodeId,
}

impl<'l> NodeRef<'l> {
    #[inline]
    pub fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    pub fn node(&self) -> &'l PathNode {
        &self.nodes.nodes[self.id.to_usize()]
    }

    #[inline]
    pub fn node_type(&self) -> NodeType {
        self.node().node_type()
    }

    pub fn prev(&self) -> Option<NodeRef<'l>> {
        self.id.prev().map(|id| NodeRef {
            nodes: self.nodes,
            id,
        })
    }

    /// The start node of a close node.
    pub fn start(&self) -> Option<NodeRef<'l>> {
        match *self.node() {
            PathNode::Close { start } => self.nodes.get(start),
            _ => None,
        }
    }

    #[inline]
    pub fn position(&self) -> Point {
        self.nodes.position(self.id)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.position().x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.position().y
    }

    /// Endpoint minus the endpoint of the predecessor.
    pub fn delta(&self) -> Vector {
        self.position() - self.nodes.prev_position(self.id)
    }

    /// Distance from the endpoint of the predecessor.
    pub fn length(&self) -> f64 {
        self.delta().length()
    }

    #[inline]
    pub fn angle_in_degrees(&self) -> f64 {
        self.nodes.angle_in_degrees(self.id)
    }

    #[inline]
    pub fn ctrl(&self) -> Option<Point> {
        self.nodes.ctrl(self.id)
    }

    #[inline]
    pub fn ctrl2(&self) -> Option<Point> {
        self.nodes.ctrl2(self.id)
    }

    #[inline]
    pub fn centre(&self) -> Option<Point> {
        self.nodes.centre(self.id)
    }

    /// Renders the node as an SVG path command.
    pub fn svg_command(&self, precision: Precision) -> String {
        let mut out = String::new();
        self.write_svg_command(&mut out, precision);
        out
    }

    /// Appends the SVG path command of the node to `out`.
    ///
    /// Zero length lines produce nothing, lines along an axis use the shorter
    /// `H` and `V` forms.
    pub fn write_svg_command(&self, out: &mut String, precision: Precision) {
        let digits = precision.get();
        match *self.node() {
            PathNode::Start { to, .. } => write_command(out, "M", &[to.x, to.y], digits),
            PathNode::Line { to } => {
                write_line_command(out, self.delta(), to.to_vector(), ["H", "V", "L"], precision)
            }
            PathNode::Offset { .. } => {
                let delta = self.delta();
                write_line_command(out, delta, delta, ["h", "v", "l"], precision)
            }
            PathNode::Quadratic { ctrl, to } => {
                write_command(out, "Q", &[ctrl.x, ctrl.y, to.x, to.y], digits)
            }
            PathNode::SmoothQuadratic { to } => write_command(out, "T", &[to.x, to.y], digits),
            PathNode::Cubic { ctrl1, ctrl2, to } => write_command(
                out,
                "C",
                &[ctrl1.x, ctrl1.y, ctrl2.x, ctrl2.y, to.x, to.y],
                digits,
            ),
            PathNode::SmoothCubic { ctrl2, to } => {
                write_command(out, "S", &[ctrl2.x, ctrl2.y, to.x, to.y], digits)
            }
            PathNode::Arc(ref arc) => write_arc_command(
                out,
                (arc.radii.x, arc.radii.y),
                arc.x_rotation,
                (arc.style.large_arc(), arc.style.sweep()),
                (arc.to.x, arc.to.y),
                digits,
            ),
            PathNode::Close { .. } => out.push('Z'),
        }
    }
}

fn write_line_command(
    out: &mut String,
    delta: Vector,
    values: Vector,
    commands: [&str; 3],
    precision: Precision,
) {
    let zero = precision.format(0.0);
    let no_dx = precision.format(delta.x) == zero;
    let no_dy = precision.format(delta.y) == zero;
    let digits = precision.get();
    match (no_dx, no_dy) {
        (true, true) => {}
        (false, true) => write_command(out, commands[0], &[values.x], digits),
        (true, false) => write_command(out, commands[1], &[values.y], digits),
        (false, false) => write_command(out, commands[2], &[values.x, values.y], digits),
    }
}

impl<'l> fmt::Debug for NodeRef<'l> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:?} {:?}", self.id, self.node())
    }
}

/// An iterator over the nodes of a path.
#[derive(Clone)]
pub struct Nodes<'l> {
    nodes: &'l PathNodes,
    next: usize,
}

impl<'l> Iterator for Nodes<'l> {
    type Item = NodeRef<'l>;

    fn next(&mut self) -> Option<NodeRef<'l>> {
        let node = self.nodes.get(NodeId::from_usize(self.next))?;
        self.next += 1;
        Some(node)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.nodes.len().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl<'l> ExactSizeIterator for Nodes<'l> {}

#[cfg(test)]
use crate::arc::{ArcSegment, ArcStyle};
#[cfg(test)]
use crate::math::{point, vector};

#[cfg(test)]
fn fuzzy_eq(a: f64, b: f64) -> bool {
    f64::abs(a - b) <= 1e-9
}

#[test]
fn push_requires_predecessor() {
    let mut nodes = PathNodes::new();
    assert_eq!(
        nodes.push(PathNode::Line { to: point(1.0, 1.0) }),
        Err(BuilderError::MissingPredecessor {
            node_type: NodeType::Line
        })
    );
    assert_eq!(
        nodes.push(PathNode::Close { start: NodeId(0) }),
        Err(BuilderError::MissingPredecessor {
            node_type: NodeType::Close
        })
    );
    assert!(nodes.is_empty());

    let start = nodes.push(PathNode::Start {
        to: point(0.0, 0.0),
        angle: 0.0,
    });
    assert_eq!(start, Ok(NodeId(0)));
    assert_eq!(nodes.push(PathNode::Line { to: point(1.0, 1.0) }), Ok(NodeId(1)));
    // Close nodes must refer to a start node.
    assert_eq!(
        nodes.push(PathNode::Close { start: NodeId(1) }),
        Err(BuilderError::MissingStart)
    );
    assert_eq!(
        nodes.push(PathNode::Close { start: NodeId(5) }),
        Err(BuilderError::MissingStart)
    );
    assert_eq!(nodes.len(), 2);
    assert_eq!(nodes.push(PathNode::Close { start: NodeId(0) }), Ok(NodeId(2)));
}

#[test]
fn line_like_angles() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 45.0);
    nodes.push(PathNode::Line { to: point(0.0, 10.0) }).unwrap();
    nodes.push(PathNode::Offset { to: point(-10.0, 10.0) }).unwrap();
    nodes.push(PathNode::Close { start: NodeId(0) }).unwrap();

    assert_eq!(nodes.angle_in_degrees(NodeId(0)), 45.0);
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(1)), 90.0));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(2)), 180.0));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(3)), -45.0));

    let close = nodes.get(NodeId(3)).unwrap();
    assert_eq!(close.position(), point(0.0, 0.0));
    assert_eq!(close.start().unwrap().id(), NodeId(0));
    assert_eq!(close.delta(), vector(10.0, -10.0));

    let offset = nodes.get(NodeId(2)).unwrap();
    assert_eq!(offset.delta(), vector(-10.0, 0.0));
    assert_eq!(offset.length(), 10.0);
    assert_eq!(offset.prev().unwrap().id(), NodeId(1));
}

#[test]
fn curve_angles() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes
        .push(PathNode::Quadratic {
            ctrl: point(10.0, 0.0),
            to: point(10.0, 10.0),
        })
        .unwrap();
    nodes
        .push(PathNode::Cubic {
            ctrl1: point(10.0, 20.0),
            ctrl2: point(0.0, 20.0),
            to: point(20.0, 20.0),
        })
        .unwrap();

    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(1)), 90.0));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(2)), 0.0));
    assert_eq!(nodes.ctrl(NodeId(1)), Some(point(10.0, 0.0)));
    assert_eq!(nodes.ctrl2(NodeId(1)), None);
    assert_eq!(nodes.ctrl(NodeId(2)), Some(point(10.0, 20.0)));
    assert_eq!(nodes.ctrl2(NodeId(2)), Some(point(0.0, 20.0)));
    assert_eq!(nodes.ctrl(NodeId(0)), None);
}

#[test]
fn smooth_quadratic_reflection() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes
        .push(PathNode::Quadratic {
            ctrl: point(5.0, -5.0),
            to: point(10.0, 0.0),
        })
        .unwrap();
    nodes.push(PathNode::SmoothQuadratic { to: point(20.0, 0.0) }).unwrap();
    nodes.push(PathNode::SmoothQuadratic { to: point(30.0, 0.0) }).unwrap();

    assert_eq!(nodes.ctrl(NodeId(2)), Some(point(15.0, 5.0)));
    assert_eq!(nodes.ctrl(NodeId(3)), Some(point(25.0, -5.0)));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(2)), -45.0));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(3)), 45.0));

    // Without a quadratic predecessor the control point is the previous endpoint.
    let mut straight = PathNodes::new();
    straight.push_start(point(0.0, 0.0), 0.0);
    straight.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    straight.push(PathNode::SmoothQuadratic { to: point(20.0, 10.0) }).unwrap();
    assert_eq!(straight.ctrl(NodeId(2)), Some(point(10.0, 0.0)));
}

#[test]
fn smooth_quadratic_write_through() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes
        .push(PathNode::Quadratic {
            ctrl: point(5.0, -5.0),
            to: point(10.0, 0.0),
        })
        .unwrap();
    nodes.push(PathNode::SmoothQuadratic { to: point(20.0, 0.0) }).unwrap();
    nodes.push(PathNode::SmoothQuadratic { to: point(30.0, 0.0) }).unwrap();

    nodes.set_ctrl(NodeId(3), point(25.0, -8.0)).unwrap();
    assert_eq!(nodes.ctrl(NodeId(3)), Some(point(25.0, -8.0)));
    assert_eq!(nodes.ctrl(NodeId(2)), Some(point(15.0, 8.0)));
    assert_eq!(nodes[NodeId(1)], PathNode::Quadratic {
        ctrl: point(5.0, -8.0),
        to: point(10.0, 0.0),
    });

    // Without a curve predecessor, the predecessor's endpoint moves.
    let mut straight = PathNodes::new();
    straight.push_start(point(0.0, 0.0), 0.0);
    straight.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    straight.push(PathNode::SmoothQuadratic { to: point(20.0, 10.0) }).unwrap();
    straight.set_ctrl(NodeId(2), point(12.0, 3.0)).unwrap();
    assert_eq!(straight.position(NodeId(1)), point(12.0, 3.0));
    assert_eq!(straight.ctrl(NodeId(2)), Some(point(12.0, 3.0)));
}

#[test]
fn long_smooth_quadratic_run() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes
        .push(PathNode::Quadratic {
            ctrl: point(5.0, 5.0),
            to: point(10.0, 0.0),
        })
        .unwrap();
    for i in 1..=100_000 {
        let x = 10.0 * (i + 1) as f64;
        nodes.push(PathNode::SmoothQuadratic { to: point(x, 0.0) }).unwrap();
    }

    let last = nodes.last_id().unwrap();
    assert_eq!(nodes.ctrl(last), Some(point(1_000_005.0, 5.0)));
    assert!(fuzzy_eq(nodes.angle_in_degrees(last), -45.0));

    nodes.set_ctrl(last, point(1_000_005.0, -5.0)).unwrap();
    assert_eq!(nodes[NodeId(1)], PathNode::Quadratic {
        ctrl: point(5.0, -5.0),
        to: point(10.0, 0.0),
    });
    assert!(fuzzy_eq(nodes.angle_in_degrees(last), 45.0));
}

#[test]
fn smooth_cubic_write_through() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes
        .push(PathNode::Cubic {
            ctrl1: point(0.0, -5.0),
            ctrl2: point(5.0, -5.0),
            to: point(10.0, 0.0),
        })
        .unwrap();
    nodes
        .push(PathNode::SmoothCubic {
            ctrl2: point(15.0, 5.0),
            to: point(20.0, 0.0),
        })
        .unwrap();

    assert_eq!(nodes.ctrl(NodeId(2)), Some(point(15.0, 5.0)));
    assert_eq!(nodes.ctrl2(NodeId(2)), Some(point(15.0, 5.0)));

    nodes.set_ctrl(NodeId(2), point(12.0, 2.0)).unwrap();
    assert_eq!(nodes.ctrl2(NodeId(1)), Some(point(8.0, -2.0)));
    assert_eq!(nodes.ctrl(NodeId(2)), Some(point(12.0, 2.0)));

    nodes.set_ctrl2(NodeId(2), point(18.0, 3.0)).unwrap();
    assert_eq!(nodes.ctrl2(NodeId(2)), Some(point(18.0, 3.0)));

    // Smooth cubic after a close: the start of the sub-path moves.
    let mut closed = PathNodes::new();
    closed.push_start(point(0.0, 0.0), 0.0);
    closed.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    closed.push(PathNode::Close { start: NodeId(0) }).unwrap();
    closed
        .push(PathNode::SmoothCubic {
            ctrl2: point(5.0, 5.0),
            to: point(10.0, 10.0),
        })
        .unwrap();
    closed.set_ctrl(NodeId(3), point(1.0, 1.0)).unwrap();
    assert_eq!(closed.position(NodeId(0)), point(1.0, 1.0));
    assert_eq!(closed.position(NodeId(2)), point(1.0, 1.0));
}

#[test]
fn control_points_of_other_nodes() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    assert_eq!(
        nodes.set_ctrl(NodeId(1), point(1.0, 1.0)),
        Err(BuilderError::NoControlPoint {
            node_type: NodeType::Line
        })
    );
    assert_eq!(
        nodes.set_ctrl2(NodeId(0), point(1.0, 1.0)),
        Err(BuilderError::NoControlPoint {
            node_type: NodeType::Start
        })
    );
}

#[test]
fn close_position_follows_start() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    nodes.push(PathNode::Close { start: NodeId(0) }).unwrap();

    nodes.set_position(NodeId(2), point(-1.0, -2.0));
    assert_eq!(nodes.position(NodeId(0)), point(-1.0, -2.0));
    assert_eq!(nodes.position(NodeId(2)), point(-1.0, -2.0));

    nodes.translate(vector(1.0, 2.0));
    assert_eq!(nodes.position(NodeId(2)), point(0.0, 0.0));
}

#[test]
fn find_start_walks_back() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(0.0, 0.0), 0.0);
    nodes.push(PathNode::Line { to: point(10.0, 0.0) }).unwrap();
    nodes.push_start(point(20.0, 0.0), 0.0);
    nodes.push(PathNode::Line { to: point(30.0, 0.0) }).unwrap();

    assert_eq!(nodes.find_start(NodeId(1)), Some(NodeId(0)));
    assert_eq!(nodes.find_start(NodeId(2)), Some(NodeId(2)));
    assert_eq!(nodes.find_start(NodeId(3)), Some(NodeId(2)));
    assert_eq!(PathNodes::new().find_start(NodeId(0)), None);
}

#[test]
fn copy_node_between_sequences() {
    let mut source = PathNodes::new();
    source.push_start(point(0.0, 0.0), 0.0);
    source.push(PathNode::Offset { to: point(3.0, 4.0) }).unwrap();
    source.push(PathNode::Close { start: NodeId(0) }).unwrap();

    let mut target = PathNodes::new();
    assert_eq!(
        target.copy_node(source.get(NodeId(1)).unwrap()),
        Err(BuilderError::MissingPredecessor {
            node_type: NodeType::Offset
        })
    );

    let start = target.copy_node(source.get(NodeId(0)).unwrap()).unwrap();
    assert_eq!(start, PathNode::Start { to: point(0.0, 0.0), angle: 0.0 });
    target.push_start(point(100.0, 100.0), 0.0);

    // Offsets keep their offset.
    let offset = target.copy_node(source.get(NodeId(1)).unwrap()).unwrap();
    assert_eq!(offset, PathNode::Offset { to: point(103.0, 104.0) });
    target.push(offset).unwrap();

    // Close nodes refer to the local start.
    let close = target.copy_node(source.get(NodeId(2)).unwrap()).unwrap();
    assert_eq!(close, PathNode::Close { start: NodeId(0) });
}

#[test]
fn arc_queries() {
    let mut nodes = PathNodes::new();
    nodes.push_start(point(-5.0, 0.0), 0.0);
    nodes
        .push(PathNode::Arc(ArcSegment {
            radii: vector(5.0, 5.0),
            x_rotation: 0.0,
            style: ArcStyle::SmallSweep,
            to: point(5.0, 0.0),
        }))
        .unwrap();

    let centre = nodes.centre(NodeId(1)).unwrap();
    assert!(fuzzy_eq(centre.x, 0.0) && fuzzy_eq(centre.y, 0.0));
    assert!(fuzzy_eq(nodes.angle_in_degrees(NodeId(1)), 90.0));
    assert_eq!(nodes.centre(NodeId(0)), None);
}

#[test]
fn svg_commands() {
    let precision = Precision::digits(1);
    let mut nodes = PathNodes::new();
    nodes.push_start(point(1.0, 2.0), 0.0);
    nodes.push(PathNode::Line { to: point(5.0, 2.0) }).unwrap();
    nodes.push(PathNode::Line { to: point(5.0, 7.0) }).unwrap();
    nodes.push(PathNode::Line { to: point(5.02, 7.0) }).unwrap();
    nodes.push(PathNode::Line { to: point(6.0, 8.0) }).unwrap();
    nodes.push(PathNode::Offset { to: point(8.0, 8.0) }).unwrap();
    nodes.push(PathNode::Offset { to: point(8.0, 5.0) }).unwrap();
    nodes.push(PathNode::Offset { to: point(9.0, 6.0) }).unwrap();
    nodes
        .push(PathNode::Quadratic {
            ctrl: point(1.0, 1.0),
            to: point(2.0, 2.0),
        })
        .unwrap();
    nodes.push(PathNode::SmoothQuadratic { to: point(3.0, 3.0) }).unwrap();
    nodes
        .push(PathNode::Cubic {
            ctrl1: point(1.0, 1.0),
            ctrl2: point(2.0, 2.0),
            to: point(3.0, 3.0),
        })
        .unwrap();
    nodes
        .push(PathNode::SmoothCubic {
            ctrl2: point(4.0, 4.0),
            to: point(5.0, 5.0),
        })
        .unwrap();
    nodes
        .push(PathNode::Arc(ArcSegment {
            radii: vector(-2.0, 3.0),
            x_rotation: 15.0,
            style: ArcStyle::Large,
            to: point(7.0, 5.0),
        }))
        .unwrap();
    nodes.push(PathNode::Close { start: NodeId(0) }).unwrap();

    let commands: Vec<String> = nodes.iter().map(|node| node.svg_command(precision)).collect();
    assert_eq!(
        commands,
        vec![
            "M 1.0 2.0",
            "H 5.0",
            "V 7.0",
            "",
            "L 6.0 8.0",
            "h 2.0",
            "v -3.0",
            "l 1.0 1.0",
            "Q 1.0 1.0 2.0 2.0",
            "T 3.0 3.0",
            "C 1.0 1.0 2.0 2.0 3.0 3.0",
            "S 4.0 4.0 5.0 5.0",
            "A -2.0 3.0 15.0 1 0 7.0 5.0",
            "Z",
        ]
    );
    assert_eq!(nodes.iter().len(), 14);
}
