#![deny(bare_trait_objects)]
#![deny(unconditional_recursion)]
#![allow(clippy::match_like_matches_macro)]

//! Data structures and a fluent builder to produce SVG path data (the `d`
//! attribute of `<path>` elements).
//!
//! A path is stored as a sequence of nodes, one per SVG command. Each node
//! knows its predecessor (the previous node in the sequence) which supplies
//! the current point for relative coordinates, line directions and smooth
//! curve reflections. See the [builder](builder/index.html) module to build
//! paths and the [geometry](geometry/index.html) module for common shapes.
//!
//! This crate is reexported in [quill](https://docs.rs/quill/).
//!
//! # Feature flags
//!
//! * `std` (default): forwarded to `quill_geom`, which then uses the float
//!   functions of the standard library instead of `libm`. This crate needs the
//!   standard library either way.
//! * `serialization`: serde support for the node types and options.
//!
//! # Examples
//!
//! ```
//! # extern crate quill_path;
//! # fn main() -> Result<(), quill_path::BuilderError> {
//! use quill_path::SvgPathBuilder;
//! use quill_path::math::point;
//!
//! let mut builder = SvgPathBuilder::new();
//! builder
//!     .move_to(point(0.0, 0.0))
//!     .line_to(point(10.0, 0.0))?
//!     .line_to(point(10.0, 10.0))?
//!     .close()?;
//!
//! assert_eq!(builder.build(), "M 0.000 0.000 H 10.000 V 10.000 Z");
//! # Ok(())
//! # }
//! ```
//!

pub use quill_geom as geom;

#[cfg(feature = "serialization")]
#[macro_use]
pub extern crate serde;

mod arc;
pub mod builder;
mod error;
mod format;
pub mod geometry;
mod node;
mod nodes;
mod options;

#[cfg(test)]
mod builder_tests;

#[doc(inline)]
pub use crate::arc::{ArcSegment, ArcStyle};
#[doc(inline)]
pub use crate::builder::{AfterCornerBuilder, SvgPathBuilder, SvgPathStarter};
#[doc(inline)]
pub use crate::error::BuilderError;
pub use crate::geom::ArcFlags;
#[doc(inline)]
pub use crate::geometry::{CornerRadii, RectangleOptions, SvgGeometryBuilder};
#[doc(inline)]
pub use crate::node::{NodeType, PathNode};
#[doc(inline)]
pub use crate::nodes::{NodeRef, Nodes, PathNodes};
#[doc(inline)]
pub use crate::options::Precision;

use std::fmt;

pub mod math {
    //! f64 version of the quill_geom types used everywhere.

    use crate::geom::euclid;

    /// Alias for ```euclid::default::Point2D<f64>```.
    pub type Point = euclid::default::Point2D<f64>;

    /// Alias for ```euclid::default::Vector2D<f64>```.
    pub type Vector = euclid::default::Vector2D<f64>;

    /// Alias for ```euclid::default::Size2D<f64>```.
    pub type Size = euclid::default::Size2D<f64>;

    /// An angle in degrees with cached sine and cosine (f64).
    pub type Angle = crate::geom::Angle<f64>;

    /// An infinite line through a point at an angle in degrees (f64).
    pub type Line = crate::geom::Line<f64>;

    /// Shorthand for `Vector::new(x, y)`.
    #[inline]
    pub fn vector(x: f64, y: f64) -> Vector {
        Vector::new(x, y)
    }

    /// Shorthand for `Point::new(x, y)`.
    #[inline]
    pub fn point(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    /// Shorthand for `Size::new(x, y)`.
    #[inline]
    pub fn size(w: f64, h: f64) -> Size {
        Size::new(w, h)
    }
}

/// Index of a node in a path.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serialization", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    pub fn to_usize(self) -> usize {
        self.0 as usize
    }
    pub fn from_usize(val: usize) -> Self {
        NodeId(val as u32)
    }
    /// The id of the node preceding this one, if any.
    pub fn prev(self) -> Option<Self> {
        self.0.checked_sub(1).map(NodeId)
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
