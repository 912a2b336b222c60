use crate::angle::normalize_angle;
use crate::scalar::Scalar;
use crate::vector::from_angle;
use crate::{Point, Vector};

/// An infinite line defined by a point and a direction in degrees.
///
/// Lines are scratch geometry used to find intersections, for example to
/// compute the control point of a rounded corner.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct Line<S> {
    pub point: Point<S>,
    /// Direction of the line in degrees.
    pub angle: S,
}

/// The parameters at which two lines meet.
///
/// `point == first.point_at(t) == second.point_at(u)`.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct LineIntersection<S> {
    pub t: S,
    pub u: S,
    pub point: Point<S>,
}

impl<S: Scalar> Line<S> {
    #[inline]
    pub fn new(point: Point<S>, angle: S) -> Self {
        Line { point, angle }
    }

    /// Unit vector pointing in the direction of the line.
    #[inline]
    pub fn direction(&self) -> Vector<S> {
        from_angle(self.angle)
    }

    /// Returns the point at the signed distance `t` from `self.point` along the line.
    #[inline]
    pub fn point_at(&self, t: S) -> Point<S> {
        self.point + self.direction() * t
    }

    /// Returns true if the directions of the two lines differ by a multiple of 180 degrees.
    ///
    /// The comparison is exact: lines that are only nearly parallel are not
    /// considered parallel.
    #[inline]
    pub fn is_parallel_to(&self, other: &Self) -> bool {
        (self.angle - other.angle) % S::value(180.0) == S::ZERO
    }

    /// Solves `self.point_at(t) == other.point_at(u)`.
    ///
    /// Returns `None` if the lines are parallel (including when they are the same line).
    pub fn intersection_solution(&self, other: &Self) -> Option<LineIntersection<S>> {
        if self.is_parallel_to(other) {
            return None;
        }

        let d1 = self.direction();
        let d2 = other.direction();
        let cross = d1.cross(d2);
        let s = other.point - self.point;
        let t = s.cross(d2) / cross;
        let u = s.cross(d1) / cross;

        Some(LineIntersection {
            t,
            u,
            point: self.point + d1 * t,
        })
    }

    /// Returns the point where the two lines meet, if they are not parallel.
    #[inline]
    pub fn intersection(&self, other: &Self) -> Option<Point<S>> {
        self.intersection_solution(other)
            .map(|solution| solution.point)
    }

    /// Considers `self` as a ray starting at `self.point` and returns the point where
    /// it meets `line`, if any.
    pub fn ray_intersection(&self, line: &Self) -> Option<Point<S>> {
        match self.intersection_solution(line) {
            Some(solution) if solution.t >= S::ZERO => Some(solution.point),
            _ => None,
        }
    }

    /// Returns the same line with its angle in `[0, 360)`.
    #[inline]
    pub fn normalized(&self) -> Self {
        Line {
            point: self.point,
            angle: normalize_angle(self.angle),
        }
    }

    /// Mirrors the line across the y axis.
    #[inline]
    pub fn mirror_x(&self) -> Self {
        Line {
            point: Point::new(-self.point.x, self.point.y),
            angle: S::value(180.0) - self.angle,
        }
    }

    /// Mirrors the line across the x axis.
    #[inline]
    pub fn mirror_y(&self) -> Self {
        Line {
            point: Point::new(self.point.x, -self.point.y),
            angle: -self.angle,
        }
    }
}

#[cfg(test)]
use crate::point;

#[cfg(test)]
fn fuzzy_eq_point(a: Point<f64>, b: Point<f64>, epsilon: f64) -> bool {
    f64::abs(a.x - b.x) <= epsilon && f64::abs(a.y - b.y) <= epsilon
}

#[test]
fn point_on_line() {
    let l = Line::new(point(1.0f64, 2.0), 90.0);
    assert!(fuzzy_eq_point(l.point_at(3.0), point(1.0, 5.0), 1e-12));
    assert!(fuzzy_eq_point(l.point_at(-3.0), point(1.0, -1.0), 1e-12));
}

#[test]
fn parallel_lines_do_not_intersect() {
    let angles = [-540.0f64, -180.0, -90.0, 0.0, 30.0, 45.0, 90.0, 135.0, 180.0, 270.0, 360.0];
    for &a1 in &angles {
        for &a2 in &angles {
            let l1 = Line::new(point(0.0f64, 0.0), a1);
            let l2 = Line::new(point(3.0f64, -7.0), a2);
            if l1.is_parallel_to(&l2) {
                assert!(l1.intersection(&l2).is_none());
            } else {
                let p = l1.intersection(&l2).unwrap();
                // The point must lie on both lines.
                let d1 = l1.direction();
                let d2 = l2.direction();
                assert!(f64::abs(d1.cross(p - l1.point)) <= 1e-8, "{} {}", a1, a2);
                assert!(f64::abs(d2.cross(p - l2.point)) <= 1e-8, "{} {}", a1, a2);
            }
        }
    }
}

#[test]
fn same_line_is_parallel() {
    let l = Line::new(point(1.0f64, 1.0), 37.0);
    assert!(l.intersection_solution(&l).is_none());
    assert!(l.is_parallel_to(&Line::new(point(5.0, 2.0), 217.0)));
    assert!(l.is_parallel_to(&Line::new(point(5.0, 2.0), -143.0)));
}

#[test]
fn intersection_parameters() {
    let l1 = Line::new(point(0.0f64, 0.0), 0.0);
    let l2 = Line::new(point(5.0f64, 5.0), 90.0);
    let solution = l1.intersection_solution(&l2).unwrap();
    assert!(f64::abs(solution.t - 5.0) <= 1e-12);
    assert!(f64::abs(solution.u + 5.0) <= 1e-12);
    assert!(fuzzy_eq_point(solution.point, point(5.0, 0.0), 1e-12));
}

#[test]
fn ray_intersection_is_one_sided() {
    let vertical = Line::new(point(10.0f64, 0.0), 90.0);

    let ray = Line::new(point(0.0f64, 0.0), 45.0);
    let p = ray.ray_intersection(&vertical).unwrap();
    assert!(fuzzy_eq_point(p, point(10.0, 10.0), 1e-9));

    let backwards = Line::new(point(0.0f64, 0.0), 225.0);
    assert!(backwards.ray_intersection(&vertical).is_none());
    assert!(backwards.intersection(&vertical).is_some());

    let parallel = Line::new(point(0.0f64, 0.0), -90.0);
    assert!(parallel.ray_intersection(&vertical).is_none());
}

#[test]
fn mirrored_lines() {
    let l = Line::new(point(2.0f64, 3.0), 30.0);
    assert_eq!(l.mirror_x(), Line::new(point(-2.0, 3.0), 150.0));
    assert_eq!(l.mirror_y(), Line::new(point(2.0, -3.0), -30.0));
    assert_eq!(l.mirror_y().normalized().angle, 330.0);
}
