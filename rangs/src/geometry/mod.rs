//! Output geometry: projection, shape assembly and the render sink.
//!
//! Decoded points flow through a [`Projection`] into a [`GeometryBuffer`],
//! which hands completed fill rings and shore polylines to a
//! [`RenderSink`]. Rasterization is left to the sink.

mod buffer;
mod class;
mod sink;
mod transform;

pub use buffer::{EmitCounts, GeometryBuffer, Layer, DEFAULT_BUFFER_CAPACITY};
pub use class::{FeatureClass, Palette, Rgb};
pub use sink::{OwnedShape, RenderSink, Shape, ShapeCollector, ShapeKind};
pub use transform::{Geographic, Insets, Projection, ScreenPoint, ViewTransform};
