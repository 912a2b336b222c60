use crate::NodeType;
use thiserror::Error;

/// An error that can happen while building a path.
///
/// A builder operation that returns an error leaves the path unchanged.
#[non_exhaustive]
#[derive(Error, Clone, Debug, PartialEq)]
pub enum BuilderError {
    #[error("the path must be started first: use move_to or move_by")]
    NoOpenSubPath,
    #[error("{node_type:?} node lacks a predecessor node")]
    MissingPredecessor { node_type: NodeType },
    #[error("failed to locate the start node of the sub-path to close")]
    MissingStart,
    #[error(
        "failed to create an angled line to x = {x}: the ray starting from ({from_x}, {from_y}) \
         at a {angle} degrees angle doesn't intersect with the vertical line x = {x}"
    )]
    NoVerticalIntersection {
        x: f64,
        from_x: f64,
        from_y: f64,
        angle: f64,
    },
    #[error(
        "failed to create an angled line to y = {y}: the ray starting from ({from_x}, {from_y}) \
         at a {angle} degrees angle doesn't intersect with the horizontal line y = {y}"
    )]
    NoHorizontalIntersection {
        y: f64,
        from_x: f64,
        from_y: f64,
        angle: f64,
    },
    #[error("{node_type:?} node has no control point")]
    NoControlPoint { node_type: NodeType },
}

#[test]
fn error_messages() {
    let err = BuilderError::NoVerticalIntersection {
        x: 10.0,
        from_x: 0.0,
        from_y: 5.0,
        angle: 90.0,
    };
    assert_eq!(
        err.to_string(),
        "failed to create an angled line to x = 10: the ray starting from (0, 5) \
         at a 90 degrees angle doesn't intersect with the vertical line x = 10"
    );

    let err = BuilderError::MissingPredecessor {
        node_type: NodeType::Line,
    };
    assert_eq!(err.to_string(), "Line node lacks a predecessor node");
}
