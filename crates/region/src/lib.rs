//! # region
//!
//! Scores how well two image regions agree by rasterizing them onto a shared pixel grid and
//! computing their intersection over union (IoU).
//!
//! A region is a [`Shape`]: an axis-aligned [`Rectangle`], a [`Polygon`], a binary [`Mask`]
//! placed at an offset, or [`Shape::Empty`]. Overlaps can be restricted to the pixels of an image
//! [`Frame`], and an optional ignore region removes pixels from both the intersection and the
//! union.
//!
//! ## Example
//!
//! ```rust
//! use region::{Frame, Polygon, Rectangle, Shape, overlap};
//!
//! let truth: Shape = Rectangle::new(0.0, 0.0, 10.0, 10.0).into();
//! let prediction: Shape = Rectangle::new(5.0, 5.0, 10.0, 10.0).into();
//!
//! // 25 shared pixels out of 175 covered ones
//! let iou = overlap(&truth, &prediction, None, None);
//! assert!((iou - 25.0 / 175.0).abs() < 1e-6);
//!
//! // Two empty regions are identical
//! assert_eq!(overlap(&Shape::Empty, &Shape::Empty, None, None), 1.0);
//!
//! // Only the visible part of a region is scored
//! let partly_visible: Shape =
//!     Polygon::new(vec![(-5.0, 0.0), (4.0, 0.0), (4.0, 9.0), (-5.0, 9.0)]).into();
//! let visible: Shape = Rectangle::new(0.0, 0.0, 5.0, 10.0).into();
//! assert_eq!(overlap(&partly_visible, &visible, Some(Frame::new(64, 64)), None), 1.0);
//! ```

pub mod bounds;
pub mod config;
pub mod overlap;
pub mod raster;
pub mod shape;

mod error;

pub use bounds::{Bounds, Frame, mask_bounds};
pub use config::OverlapConfig;
pub use error::{Error, Result};
pub use overlap::{OverlapEngine, overlap, overlaps};
pub use raster::Raster;
pub use shape::{Mask, Polygon, Rectangle, Region, Shape};
