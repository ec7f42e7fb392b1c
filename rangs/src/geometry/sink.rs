//! The boundary between the decoder and whatever draws its output.

use super::{FeatureClass, ScreenPoint};

/// Kind of an emitted shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    /// Closed polygon ring to be filled
    Ring,
    /// Open polyline to be stroked
    Line,
}

/// A completed shape handed to a [`RenderSink`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape<'a> {
    pub kind: ShapeKind,
    pub class: FeatureClass,
    pub points: &'a [ScreenPoint],
}

/// Consumer of completed rings and polylines.
///
/// Implemented for closures, so `|shape: Shape<'_>| { ... }` can be passed
/// directly.
pub trait RenderSink {
    fn emit(&mut self, shape: Shape<'_>);
}

impl<F> RenderSink for F
where
    F: FnMut(Shape<'_>),
{
    fn emit(&mut self, shape: Shape<'_>) {
        self(shape)
    }
}

/// An owned copy of an emitted shape.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnedShape {
    pub kind: ShapeKind,
    pub class: FeatureClass,
    pub points: Vec<ScreenPoint>,
}

/// Sink that keeps every shape it receives.
#[derive(Debug, Clone, Default)]
pub struct ShapeCollector {
    pub shapes: Vec<OwnedShape>,
}

impl ShapeCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collected fill rings, in emission order.
    pub fn rings(&self) -> impl Iterator<Item = &OwnedShape> {
        self.shapes.iter().filter(|s| s.kind == ShapeKind::Ring)
    }

    /// Collected shore lines, in emission order.
    pub fn lines(&self) -> impl Iterator<Item = &OwnedShape> {
        self.shapes.iter().filter(|s| s.kind == ShapeKind::Line)
    }
}

impl RenderSink for ShapeCollector {
    fn emit(&mut self, shape: Shape<'_>) {
        self.shapes.push(OwnedShape {
            kind: shape.kind,
            class: shape.class,
            points: shape.points.to_vec(),
        });
    }
}
