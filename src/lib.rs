//! Shapeprop turns animated spline shapes into Lottie shape keyframes.
//!
//! The host describes a spline as control points whose tangent handles are
//! stored in polar form (radius, angle), with per-point flags deciding whether
//! the second handle shares the first one's radius and angle. Lottie expects
//! explicit Cartesian vertex and tangent arrays at every keyframe. This crate
//! bridges the two by sampling every integer frame of the animation.
//!
//! # Pipeline overview
//!
//! 1. **Window discovery**: scan the document channels for the first and last
//!    animated frame ([`discover_window`]).
//! 2. **Normalization**: make every channel uniformly sample-able
//!    ([`normalize`] -> [`Normalized`] carrying a [`BakedPath`]).
//! 3. **Tangent resolution**: apply split-flag inheritance per frame and
//!    convert the handles to Cartesian offsets ([`resolve_tangents`]).
//! 4. **Sampling**: emit one start/end [`ShapeKeyframe`] per frame plus a
//!    terminal sentinel ([`sample_shape`]).
//!
//! [`export_shape`] runs the whole pipeline; [`Document`] parses the JSON form
//! of a host shape and [`ShapeProperty`] encodes the result as Lottie JSON.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod foundation;
mod shape;

/// Export options.
pub mod config;
/// JSON form of host shapes.
pub mod document;
pub mod lottie;

pub use animation::bake::BakedPath;
pub use animation::channel::{Animation, Channel, ChannelValue, Lerp, ValueKind, Waypoint};
pub use animation::ease::Interpolation;
pub use animation::normalize::{Normalized, normalize, normalize_to_animated};
pub use config::{EndTangentFrame, ExportConfig};
pub use document::Document;
pub use foundation::core::{Fps, FrameIndex, Vec2};
pub use foundation::error::{ExportError, ExportResult};
pub use foundation::math::{polar_to_cartesian, to_lottie_tangents};
pub use lottie::{ShapeProperty, shape_property_json};
pub use shape::model::{
    ControlPoint, NormalizedHandle, NormalizedPoint, PointList, Shape, Spline, TangentHandle,
};
pub use shape::pipeline::{export_dynamic_list, export_shape, export_spline};
pub use shape::sampler::{
    Easing, ShapeKeyframe, ShapeSegment, ShapeValue, ShapeVertex, VertexSource, sample_shape,
};
pub use shape::tangent::{Polar, resolve_polar, resolve_tangents};
pub use shape::window::{Window, discover_window, point_list_window, spline_window};
