use std::fmt;

use super::{Angle, Distance, Heading, trig};
use crate::BaseValueMath;


/// A point on the horizontal plane.
///
/// Headings are measured from the positive x axis towards the positive y axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Point2D {
    pub x: Distance,
    pub y: Distance,
}

impl Point2D {
    pub const ZERO: Self = Self { x: Distance::ZERO, y: Distance::ZERO };

    #[must_use]
    pub const fn new(x: Distance, y: Distance) -> Self { Self { x, y } }

    /// Moves the point by `distance` in the direction of `heading`.
    #[must_use]
    pub fn translated(self, heading: Heading, distance: Distance) -> Self {
        Self { x: self.x + distance * heading.cos(), y: self.y + distance * heading.sin() }
    }

    #[must_use]
    pub fn distance_to(self, other: Self) -> Distance {
        Distance::new(trig::hypot((self.x - other.x).0, (self.y - other.y).0))
    }

    /// Distance between the two points, projected onto the direction of `heading`.
    ///
    /// With points `(0, 0)` and `(0, 1)`, this is 0 for a heading of 0° and 1 for 90°.
    #[must_use]
    pub fn abs_distance_parallel_to_heading(self, other: Self, heading: Heading) -> Distance {
        (self - other).cross(heading + Angle::RIGHT).abs()
    }

    /// Distance between the two points, projected onto the normal of `heading`.
    ///
    /// With points `(0, 0)` and `(0, 1)`, this is 1 for a heading of 0° and 0 for 90°.
    #[must_use]
    pub fn abs_distance_orthogonal_to_heading(self, other: Self, heading: Heading) -> Distance {
        (self - other).cross(heading).abs()
    }

    /// Component of the displacement `self` perpendicular to the unit vector of `heading`.
    fn cross(self, heading: Heading) -> Distance {
        self.y * heading.cos() - self.x * heading.sin()
    }

    /// Returns the heading from `self` towards `other`.
    #[must_use]
    pub fn heading_to(self, other: Self) -> Heading {
        Heading::from_distances(other.y - self.y, other.x - self.x)
    }

    /// Whether `other` is at most a right angle away from `current_heading` as seen from `self`.
    #[must_use]
    pub fn is_in_front_hemisphere(self, other: Self, current_heading: Heading) -> bool {
        let delta = self.heading_to(other) - current_heading;
        delta.into_radians().abs() <= Angle::RIGHT.0
    }
}

impl std::ops::Sub for Point2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self { Self { x: self.x - other.x, y: self.y - other.y } }
}

impl fmt::Display for Point2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "x: {} y: {}", self.x, self.y)
    }
}

/// A point in space, with `z` pointing upwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, serde::Serialize, serde::Deserialize)]
pub struct Point3D {
    pub x: Distance,
    pub y: Distance,
    pub z: Distance,
}

impl Point3D {
    #[must_use]
    pub const fn new(x: Distance, y: Distance, z: Distance) -> Self { Self { x, y, z } }

    /// Projects the point onto the horizontal plane.
    #[must_use]
    pub const fn xy(self) -> Point2D { Point2D { x: self.x, y: self.y } }
}
