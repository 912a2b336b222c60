#![deny(bare_trait_objects)]

//! Build the `d` attribute of SVG `<path>` elements with a fluent API.
//!
//! # Crates
//!
//! This meta-crate (`quill`) reexports the following sub-crates for convenience:
//!
//! * **quill_path** - Path nodes, the path builder and common shapes.
//! * **quill_geom** - Angles, lines and small matrices on top of euclid.
//!
//! Each `quill_<name>` crate is reexported as a `<name>` module in `quill`. For example:
//!
//! ```ignore
//! extern crate quill_path;
//! use quill_path::SvgPathBuilder;
//! ```
//!
//! Is equivalent to:
//!
//! ```ignore
//! extern crate quill;
//! use quill::path::SvgPathBuilder;
//! ```
//!
//! # Feature flags
//!
//! serialization using serde can be enabled on each crate using the
//! `serialization` feature flag (disabled by default).
//!
//! # Logging
//!
//! The builders emit [tracing](https://docs.rs/tracing) events: `trace` for
//! every node added to a path, `debug` when an operation is rejected or when a
//! rounded corner degrades into a straight line. Nothing is printed unless the
//! application installs a subscriber.
//!
//! # Examples
//!
//! ## Building a path
//!
//! ```
//! use quill::math::{point, vector};
//! use quill::path::{ArcStyle, BuilderError, Precision, SvgPathBuilder};
//!
//! fn main() -> Result<(), BuilderError> {
//!     let mut builder = SvgPathBuilder::with_precision(Precision::digits(1));
//!     builder
//!         .move_to(point(0.0, 0.0))
//!         .line_to(point(10.0, 0.0))?
//!         .arc_by(vector(5.0, 5.0), 0.0, ArcStyle::SmallSweep, vector(0.0, 10.0))?
//!         .line_by(vector(-10.0, 0.0))?
//!         .close()?;
//!
//!     assert_eq!(
//!         builder.build(),
//!         "M 0.0 0.0 H 10.0 A 5.0 5.0 0.0 0 1 10.0 10.0 h -10.0 Z"
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Drawing shapes
//!
//! ```
//! use quill::math::{point, size};
//! use quill::path::{CornerRadii, Precision, RectangleOptions, SvgPathBuilder};
//!
//! fn main() -> Result<(), quill::path::BuilderError> {
//!     let mut builder = SvgPathBuilder::with_precision(Precision::digits(0));
//!     builder
//!         .with_geometry()
//!         .add_rectangle(
//!             point(0.0, 0.0),
//!             size(10.0, 5.0),
//!             &RectangleOptions::corner_radii(CornerRadii::ZERO.with_top_right(2.0)),
//!         )?
//!         .add_circle(point(20.0, 2.0), 2.0)?;
//!
//!     assert_eq!(
//!         builder.build(),
//!         "M 0 0 h 8 Q 10 0 10 2 v 3 h -10 Z M 18 2 A 2 2 0 1 1 22 2 A 2 2 0 1 1 18 2 Z"
//!     );
//!
//!     Ok(())
//! }
//! ```

pub extern crate quill_path;

pub use quill_path as path;
pub use path::geom;

pub use path::math;
