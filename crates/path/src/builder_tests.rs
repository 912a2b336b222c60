use crate::geom::euclid::approxeq::ApproxEq;
use crate::math::{point, size, vector, Point};
use crate::{
    ArcSegment, ArcStyle, BuilderError, CornerRadii, NodeId, NodeType, PathNode, Precision,
    RectangleOptions, SvgPathBuilder, SvgPathStarter,
};

fn builder() -> SvgPathBuilder {
    SvgPathBuilder::with_precision(Precision::digits(0))
}

fn fuzzy_eq(a: f64, b: f64) -> bool {
    f64::abs(a - b) <= 1e-9
}

fn fuzzy_eq_point(a: Point, b: Point) -> bool {
    a.approx_eq_eps(&b, &point(1e-9, 1e-9))
}

#[test]
fn simple_path() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .unwrap()
        .line_to(point(10.0, 10.0))
        .unwrap()
        .close()
        .unwrap();

    assert_eq!(path.build(), "M 0 0 H 10 V 10 Z");
    assert_eq!(path.to_string(), path.build());
    assert_eq!(path.len(), 4);
    assert!(!path.is_open());
}

#[test]
fn default_precision() {
    let mut path = SvgPathBuilder::new();
    path.move_to(point(1.5, -2.0)).close().unwrap();

    assert_eq!(path.precision(), Precision::DEFAULT);
    assert_eq!(path.build(), "M 1.500 -2.000 Z");
    assert!(!path.is_open());
    assert!(path.last_start().is_none());
}

#[test]
fn sub_path_must_be_open() {
    let mut path = builder();
    assert_eq!(path.line_to(point(1.0, 1.0)).err(), Some(BuilderError::NoOpenSubPath));
    assert_eq!(path.line_by_x(1.0).err(), Some(BuilderError::NoOpenSubPath));
    assert_eq!(
        path.curve_to(point(1.0, 1.0), None, point(2.0, 2.0)).err(),
        Some(BuilderError::NoOpenSubPath)
    );
    assert_eq!(
        path.arc_to(vector(1.0, 1.0), 0.0, ArcStyle::Small, point(2.0, 2.0)).err(),
        Some(BuilderError::NoOpenSubPath)
    );
    assert_eq!(
        path.smooth_curve_by(None, vector(1.0, 1.0)).err(),
        Some(BuilderError::NoOpenSubPath)
    );
    assert_eq!(path.add_line(1.0, 0.0).err(), Some(BuilderError::NoOpenSubPath));
    assert_eq!(
        path.angled_line_to_x(1.0, 0.0).err(),
        Some(BuilderError::NoOpenSubPath)
    );
    assert!(path.add_rounded_corner_to(point(1.0, 1.0), 0.0).is_err());
    assert_eq!(path.close().err(), Some(BuilderError::NoOpenSubPath));
    assert_eq!(path.len(), 0);
    assert!(path.is_empty());

    // Closing ends the sub-path.
    path.move_to(point(0.0, 0.0)).close().unwrap();
    assert_eq!(path.line_to(point(1.0, 1.0)).err(), Some(BuilderError::NoOpenSubPath));
    assert_eq!(path.len(), 2);
}

#[test]
fn clone_builds_the_same_path() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .quadratic_bezier_to(point(5.0, -5.0), point(10.0, 0.0))
        .unwrap()
        .smooth_quadratic_bezier_to(point(20.0, 0.0))
        .unwrap()
        .line_by(vector(0.0, 10.0))
        .unwrap()
        .close()
        .unwrap();
    path.move_to(point(30.0, 30.0))
        .line_to(point(40.0, 40.0))
        .unwrap();

    let copy = path.clone();
    assert_eq!(copy.build(), path.build());
    assert_eq!(copy.is_open(), path.is_open());
    assert_eq!(copy.last_start().unwrap().id(), NodeId(5));

    // The copy is independent.
    let mut copy = copy;
    copy.translate(vector(1.0, 1.0));
    assert_ne!(copy.build(), path.build());
}

#[test]
fn move_by() {
    let mut path = builder();
    path.move_by(vector(3.0, 4.0));
    assert_eq!(path.current_position(), Some(point(3.0, 4.0)));

    path.line_to(point(3.0, 14.0)).unwrap().move_by(vector(5.0, 0.0));
    assert_eq!(path.build(), "M 3 4 V 14 M 8 14");
    // The new sub-path keeps the direction of the previous line.
    assert!(fuzzy_eq(path.last_start().unwrap().angle_in_degrees(), 90.0));

    path.move_by_with_angle(vector(1.0, 1.0), 30.0);
    assert_eq!(path.current_angle_in_degrees(), Some(30.0));
    assert_eq!(path.current_position(), Some(point(9.0, 15.0)));
}

#[test]
fn lines() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_to_x(10.0)
        .unwrap()
        .line_to_y(5.0)
        .unwrap()
        .line_by_x(-3.0)
        .unwrap()
        .line_by_y(-2.0)
        .unwrap()
        .line_by(vector(1.0, 1.0))
        .unwrap()
        .line_by(vector(0.0, 0.0))
        .unwrap();

    // The empty command of the zero length line is kept.
    assert_eq!(path.build(), "M 0 0 H 10 V 5 h -3 v -2 l 1 1 ");
    assert_eq!(path.current_position(), Some(point(8.0, 4.0)));
}

#[test]
fn add_line() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .add_line(10.0, 0.0)
        .unwrap()
        .add_line(5.0, 90.0)
        .unwrap()
        .add_line(-10.0, 0.0)
        .unwrap();

    assert_eq!(path.build(), "M 0 0 h 10 v 5 h -10");
    assert!(fuzzy_eq_point(path.current_position().unwrap(), point(0.0, 5.0)));
    assert_eq!(path.last().unwrap().node_type(), NodeType::Offset);
}

#[test]
fn angled_lines() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .angled_line_to_x(10.0, 45.0)
        .unwrap();
    assert!(fuzzy_eq_point(path.current_position().unwrap(), point(10.0, 10.0)));

    path.angled_line_to_y(20.0, 90.0).unwrap();
    assert!(fuzzy_eq_point(path.current_position().unwrap(), point(10.0, 20.0)));

    // Already on the target line.
    path.angled_line_to_x(10.0, 33.0).unwrap();
    assert_eq!(path.current_position(), Some(point(10.0, 20.0)));
    path.angled_line_to_y(20.0, 33.0).unwrap();
    assert_eq!(path.current_position(), Some(point(10.0, 20.0)));

    assert_eq!(path.build(), "M 0 0 L 10 10 V 20  ");
    assert_eq!(path.len(), 5);
}

#[test]
fn angled_lines_without_intersection() {
    let mut path = builder();
    path.move_to(point(0.0, 5.0));

    // Parallel to the target line.
    assert_eq!(
        path.angled_line_to_x(10.0, 90.0).err(),
        Some(BuilderError::NoVerticalIntersection {
            x: 10.0,
            from_x: 0.0,
            from_y: 5.0,
            angle: 90.0,
        })
    );
    // Heading away from the target line.
    assert_eq!(
        path.angled_line_to_x(-10.0, 0.0).err(),
        Some(BuilderError::NoVerticalIntersection {
            x: -10.0,
            from_x: 0.0,
            from_y: 5.0,
            angle: 0.0,
        })
    );
    assert_eq!(
        path.angled_line_to_y(10.0, 180.0).err(),
        Some(BuilderError::NoHorizontalIntersection {
            y: 10.0,
            from_x: 0.0,
            from_y: 5.0,
            angle: 180.0,
        })
    );
    assert!(path.angled_line_to_y(10.0, -90.0).is_err());
    assert_eq!(path.len(), 1);
}

#[test]
fn curves() {
    let mut path = builder();
    path.move_to(point(10.0, 10.0))
        .curve_by(vector(1.0, 1.0), Some(vector(2.0, 2.0)), vector(3.0, 3.0))
        .unwrap()
        .smooth_curve_by(Some(vector(1.0, 0.0)), vector(2.0, 0.0))
        .unwrap()
        .curve_by(vector(0.0, 5.0), None, vector(5.0, 5.0))
        .unwrap()
        .smooth_curve_to(None, point(25.0, 25.0))
        .unwrap()
        .curve_to(point(1.0, 2.0), Some(point(3.0, 4.0)), point(5.0, 6.0))
        .unwrap()
        .smooth_curve_to(Some(point(7.0, 8.0)), point(9.0, 10.0))
        .unwrap();

    assert_eq!(
        path.build(),
        "M 10 10 C 11 11 12 12 13 13 S 14 13 15 13 Q 15 18 20 18 T 25 25 C 1 2 3 4 5 6 S 7 8 9 10"
    );

    // Effective control points.
    let nodes = path.nodes();
    assert_eq!(nodes.get(NodeId(2)).unwrap().ctrl(), Some(point(14.0, 14.0)));
    assert_eq!(nodes.get(NodeId(4)).unwrap().ctrl(), Some(point(25.0, 18.0)));
    assert_eq!(nodes.get(NodeId(6)).unwrap().ctrl(), Some(point(7.0, 8.0)));
}

#[test]
fn many_smooth_quadratic_curves() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .quadratic_bezier_to(point(5.0, 5.0), point(10.0, 0.0))
        .unwrap();
    for i in 1..=100_000 {
        path.smooth_quadratic_bezier_to(point(10.0 * (i + 1) as f64, 0.0))
            .unwrap();
    }

    assert!(fuzzy_eq(path.current_angle_in_degrees().unwrap(), -45.0));
    path.add_rounded_corner_to(point(1_000_020.0, 10.0), 90.0)
        .unwrap()
        .add_line(5.0)
        .unwrap();
    assert!(path.build().ends_with("T 1000010 0 Q 1000020 -10 1000020 10 v 5"));
}

#[test]
fn smooth_control_point_write_through() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .quadratic_bezier_to(point(5.0, -5.0), point(10.0, 0.0))
        .unwrap()
        .smooth_quadratic_bezier_to(point(20.0, 0.0))
        .unwrap();

    assert_eq!(path.last().unwrap().ctrl(), Some(point(15.0, 5.0)));
    assert!(fuzzy_eq(path.current_angle_in_degrees().unwrap(), -45.0));

    path.set_ctrl(NodeId(2), point(15.0, 8.0)).unwrap();
    assert_eq!(path.last().unwrap().ctrl(), Some(point(15.0, 8.0)));
    assert_eq!(path.build(), "M 0 0 Q 5 -8 10 0 T 20 0");

    assert_eq!(
        path.set_ctrl(NodeId(0), point(1.0, 1.0)).err(),
        Some(BuilderError::NoControlPoint {
            node_type: NodeType::Start
        })
    );

    path.set_position(NodeId(2), point(20.0, 2.0));
    assert_eq!(path.build(), "M 0 0 Q 5 -8 10 0 T 20 2");
}

#[test]
fn arcs() {
    let mut path = builder();
    path.move_to(point(-5.0, 0.0))
        .arc_to(vector(5.0, 5.0), 0.0, ArcStyle::SmallSweep, point(5.0, 0.0))
        .unwrap()
        .arc_by(vector(5.0, 5.0), 0.0, ArcStyle::Large, vector(-10.0, 0.0))
        .unwrap();

    assert_eq!(path.build(), "M -5 0 A 5 5 0 0 1 5 0 A 5 5 0 1 0 -5 0");

    let arc = path.nodes().get(NodeId(1)).unwrap();
    assert!(fuzzy_eq_point(arc.centre().unwrap(), point(0.0, 0.0)));
    assert!(fuzzy_eq(arc.angle_in_degrees(), 90.0));
}

#[test]
fn rounded_corners() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_by(vector(10.0, 0.0))
        .unwrap()
        .add_rounded_corner_to(point(20.0, 10.0), 90.0)
        .unwrap()
        .line_to_y(30.0)
        .unwrap();

    assert_eq!(path.build(), "M 0 0 h 10 Q 20 0 20 10 V 30");

    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_by(vector(10.0, 0.0))
        .unwrap()
        .add_rounded_corner_by(vector(10.0, 10.0), 90.0)
        .unwrap()
        .add_rounded_corner_by(vector(-10.0, 10.0), 180.0)
        .unwrap()
        .close()
        .unwrap();

    assert_eq!(path.build(), "M 0 0 h 10 Q 20 0 20 10 Q 20 20 10 20 Z");
}

#[test]
fn rounded_corner_falls_back_to_a_line() {
    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_to(point(10.0, 0.0))
        .unwrap()
        .add_rounded_corner_to(point(20.0, 5.0), 180.0)
        .unwrap()
        .add_line(5.0)
        .unwrap();

    assert_eq!(path.build(), "M 0 0 H 10 L 20 5 l 4 2");

    let mut path = builder();
    path.move_to(point(0.0, 0.0))
        .line_by(vector(10.0, 0.0))
        .unwrap()
        .add_rounded_corner_by(vector(10.0, 5.0), 0.0)
        .unwrap();

    assert_eq!(path.build(), "M 0 0 h 10 l 10 5");
    assert_eq!(path.len(), 3);
}

#[test]
fn transforms() {
    let mut path = builder();
    path.move_to(point(1.0, 1.0))
        .line_by(vector(2.0, 0.0))
        .unwrap()
        .arc_to(vector(1.0, 2.0), 10.0, ArcStyle::Small, point(3.0, 3.0))
        .unwrap();

    path.scale(point(0.0, 0.0), 2.0);
    assert_eq!(path.build(), "M 2 2 h 4 A 2 4 10 0 0 6 6");

    path.translate(vector(-2.0, 1.0));
    assert_eq!(path.build(), "M 0 3 h 4 A 2 4 10 0 0 4 7");

    let mut path = builder();
    path.move_to_with_angle(point(0.0, 0.0), 10.0)
        .line_to(point(10.0, 0.0))
        .unwrap()
        .line_to(point(10.0, 10.0))
        .unwrap();
    let angles: Vec<f64> = path.nodes().iter().map(|node| node.angle_in_degrees()).collect();

    path.rotate(point(0.0, 0.0), 90.0);
    assert!(fuzzy_eq_point(path.nodes().position(NodeId(1)), point(0.0, -10.0)));
    assert!(fuzzy_eq_point(path.nodes().position(NodeId(2)), point(10.0, -10.0)));
    for (node, angle) in path.nodes().iter().zip(angles) {
        assert!(fuzzy_eq(node.angle_in_degrees(), angle - 90.0));
    }

    let mut path = builder();
    path.move_to_with_angle(point(10.0, -20.0), 30.0)
        .rotate(point(5.0, -5.0), 100.0);
    let start = path.first().unwrap();
    assert!(f64::abs(start.x() - -10.640357183) <= 1e-8);
    assert!(f64::abs(start.y() - -7.3193161) <= 1e-7);
    assert!(fuzzy_eq(start.angle_in_degrees(), -70.0));
    assert_eq!(path.build(), "M -11 -7");
}

#[test]
fn add_node_from_another_path() {
    let mut source = builder();
    source
        .move_to(point(0.0, 0.0))
        .line_by(vector(3.0, 4.0))
        .unwrap()
        .close()
        .unwrap();

    let mut target = builder();
    assert_eq!(
        target.add_node(source.nodes().get(NodeId(1)).unwrap()).err(),
        Some(BuilderError::NoOpenSubPath)
    );

    target.move_to(point(100.0, 100.0));
    for node in source.nodes().iter().skip(1) {
        target.add_node(node).unwrap();
    }

    assert_eq!(target.build(), "M 100 100 l 3 4 Z");
    assert!(!target.is_open());
    assert_eq!(target.nodes()[NodeId(2)], PathNode::Close { start: NodeId(0) });

    target.add_node(source.first().unwrap()).unwrap();
    assert!(target.is_open());
    assert_eq!(target.last_start().unwrap().id(), NodeId(3));
    assert_eq!(target.build(), "M 100 100 l 3 4 Z M 0 0");
}

#[test]
fn path_starter() {
    let starter = SvgPathStarter::new(Precision::digits(1));
    assert_eq!(starter.precision().get(), 1);
    assert!(starter.start().is_empty());

    let path = starter.start_at(point(1.0, 2.0), 45.0);
    assert!(path.is_open());
    assert_eq!(path.build(), "M 1.0 2.0");
    assert_eq!(path.current_angle_in_degrees(), Some(45.0));
    assert_eq!(SvgPathStarter::default().start().precision(), Precision::DEFAULT);
}

#[test]
fn circle() {
    let mut path = builder();
    path.with_geometry().add_circle(point(0.0, 0.0), 5.0).unwrap();

    let radii = vector(5.0, 5.0);
    assert_eq!(
        path.nodes().as_slice(),
        &[
            PathNode::Start {
                to: point(-5.0, 0.0),
                angle: -90.0,
            },
            PathNode::Arc(ArcSegment {
                radii,
                x_rotation: 0.0,
                style: ArcStyle::LargeSweep,
                to: point(5.0, 0.0),
            }),
            PathNode::Arc(ArcSegment {
                radii,
                x_rotation: 0.0,
                style: ArcStyle::LargeSweep,
                to: point(-5.0, 0.0),
            }),
            PathNode::Close { start: NodeId(0) },
        ][..]
    );
    assert_eq!(path.build(), "M -5 0 A 5 5 0 1 1 5 0 A 5 5 0 1 1 -5 0 Z");
    assert!(!path.is_open());
}

#[test]
fn ellipse_and_ring() {
    let mut path = builder();
    path.with_geometry()
        .add_ellipse(point(0.0, 0.0), vector(10.0, 5.0), 0.0)
        .unwrap();
    assert_eq!(path.build(), "M -10 0 A 10 5 0 1 1 10 0 A 10 5 0 1 1 -10 0 Z");
    assert_eq!(path.first().unwrap().angle_in_degrees(), -90.0);

    let mut path = builder();
    path.with_geometry().add_ring(point(0.0, 0.0), 5.0, 5.0).unwrap();
    assert_eq!(
        path.build(),
        "M -10 0 A 10 10 0 1 1 10 0 A 10 10 0 1 1 -10 0 M -5 0 A 5 5 0 1 0 5 0 A 5 5 0 1 0 -5 0 Z"
    );
    assert!(!path.is_open());
}

#[test]
fn rectangles() {
    let mut path = builder();
    path.with_geometry()
        .add_rectangle(point(0.0, 0.0), size(10.0, 5.0), &RectangleOptions::DEFAULT)
        .unwrap()
        .add_square(point(20.0, 20.0), 4.0, &RectangleOptions::DEFAULT)
        .unwrap();
    assert_eq!(
        path.build(),
        "M 0 0 h 10 v 5 h -10 Z M 20 20 h 4 v 4 h -4 Z"
    );

    let mut path = builder();
    let radii = CornerRadii::ZERO.with_top_right(2.0).with_bottom_right(2.0);
    path.with_geometry()
        .add_rectangle(
            point(0.0, 0.0),
            size(10.0, 5.0),
            &RectangleOptions::corner_radii(radii),
        )
        .unwrap();
    assert_eq!(path.build(), "M 0 0 h 8 Q 10 0 10 2 v 1 Q 10 5 8 5 h -8 Z");

    let mut path = builder();
    path.with_geometry()
        .add_rectangle(
            point(1.0, 1.0),
            size(10.0, 5.0),
            &RectangleOptions::corner_radii(CornerRadii::new(2.0)),
        )
        .unwrap();
    let corners = [
        point(1.0, 3.0),
        point(3.0, 1.0),
        point(9.0, 1.0),
        point(11.0, 3.0),
        point(11.0, 4.0),
        point(9.0, 6.0),
        point(3.0, 6.0),
        point(1.0, 4.0),
    ];
    assert_eq!(path.len(), corners.len() + 1);
    for (node, expected) in path.nodes().iter().zip(corners.iter()) {
        assert!(fuzzy_eq_point(node.position(), *expected));
    }

    // Rotated around the top left corner.
    let mut path = builder();
    path.with_geometry()
        .add_rectangle(point(0.0, 0.0), size(10.0, 5.0), &RectangleOptions::angle(90.0))
        .unwrap();
    let corners = [
        point(0.0, 0.0),
        point(0.0, 10.0),
        point(-5.0, 10.0),
        point(-5.0, 0.0),
    ];
    for (node, expected) in path.nodes().iter().zip(corners.iter()) {
        assert!(fuzzy_eq_point(node.position(), *expected));
    }
}

#[test]
fn polygons() {
    let mut path = builder();
    path.with_geometry().add_polygon(&[]).unwrap();
    assert!(path.is_empty());

    path.with_geometry()
        .add_polygon(&[point(0.0, 0.0), point(10.0, 0.0), point(5.0, 5.0)])
        .unwrap();
    assert_eq!(path.build(), "M 0 0 H 10 L 5 5 Z");
}

#[test]
fn pies() {
    let mut path = builder();
    path.with_geometry()
        .add_pie(point(0.0, 0.0), 10.0, 0.0, 90.0)
        .unwrap();
    assert_eq!(path.build(), "M 0 -10 A 10 10 0 0 1 10 0 H 0 Z");

    let mut path = builder();
    path.with_geometry()
        .add_pie(point(20.0, 20.0), 10.0, 180.0, 90.0)
        .unwrap();
    assert_eq!(path.build(), "M 20 30 A 10 10 0 1 1 30 20 H 20 Z");

    // Same angles: full circle.
    let mut path = builder();
    path.with_geometry()
        .add_pie(point(0.0, 0.0), 5.0, 30.0, 390.0)
        .unwrap();
    assert_eq!(path.build(), "M -5 0 A 5 5 0 1 1 5 0 A 5 5 0 1 1 -5 0 Z");

    let mut path = builder();
    path.with_geometry()
        .add_ring_pie(point(20.0, 20.0), 5.0, 5.0, 0.0, 90.0)
        .unwrap();
    assert_eq!(
        path.build(),
        "M 20 10 A 10 10 0 0 1 30 20 H 25 A 5 5 0 0 0 20 15 Z"
    );

    let mut path = builder();
    path.with_geometry()
        .add_ring_pie(point(0.0, 0.0), 5.0, 5.0, 45.0, 45.0)
        .unwrap();
    assert_eq!(path.len(), 7);
}
