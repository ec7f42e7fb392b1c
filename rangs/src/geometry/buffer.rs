//! Accumulates projected points into fill rings and shore polylines.

use super::{FeatureClass, Projection, RenderSink, ScreenPoint, Shape, ShapeKind};

/// Default maximum number of points held per layer before a forced flush.
pub const DEFAULT_BUFFER_CAPACITY: usize = 16_384;

/// Smallest usable capacity: a seed point plus one appended point.
const MIN_BUFFER_CAPACITY: usize = 2;

/// The two output layers of the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Fill,
    Shore,
}

impl Layer {
    fn kind(&self) -> ShapeKind {
        match self {
            Layer::Fill => ShapeKind::Ring,
            Layer::Shore => ShapeKind::Line,
        }
    }

    fn class_for(&self, flg: u8) -> FeatureClass {
        match self {
            Layer::Fill => FeatureClass::fill_for(flg),
            Layer::Shore => FeatureClass::shore_for(flg),
        }
    }
}

/// Counts of what a buffer has handed to its sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EmitCounts {
    pub rings: usize,
    pub lines: usize,
    pub points: usize,
}

/// Drawing state of one layer.
#[derive(Debug)]
struct Track {
    /// `points[0]` is the seed; anything after it is pending output
    points: Vec<ScreenPoint>,
    /// True until the first point of the current shape arrives
    first: bool,
    /// Geographic position of the current shape's first point
    origin: (f64, f64),
    class: FeatureClass,
}

impl Track {
    fn new() -> Self {
        Self {
            points: Vec::new(),
            first: true,
            origin: (0.0, 0.0),
            class: FeatureClass::Unknown,
        }
    }

    fn has_pending(&self) -> bool {
        self.points.len() > 1
    }
}

/// Explicit drawing state threaded through one decode pass.
///
/// Each layer holds a seed point followed by the points appended since.
/// [`restart`](Self::restart) emits the pending sequence and re-seeds it,
/// so a shape that is flushed and continued stays contiguous.
pub struct GeometryBuffer<'a> {
    projection: &'a dyn Projection,
    sink: &'a mut dyn RenderSink,
    fill: Track,
    shore: Track,
    capacity: usize,
    counts: EmitCounts,
}

impl<'a> GeometryBuffer<'a> {
    /// Create a buffer that projects with `projection` and emits to `sink`.
    pub fn new(projection: &'a dyn Projection, sink: &'a mut dyn RenderSink) -> Self {
        Self::with_capacity(projection, sink, DEFAULT_BUFFER_CAPACITY)
    }

    /// Create a buffer that flushes once a layer holds `capacity` points.
    pub fn with_capacity(
        projection: &'a dyn Projection,
        sink: &'a mut dyn RenderSink,
        capacity: usize,
    ) -> Self {
        Self {
            projection,
            sink,
            fill: Track::new(),
            shore: Track::new(),
            capacity: capacity.max(MIN_BUFFER_CAPACITY),
            counts: EmitCounts::default(),
        }
    }

    /// What has been emitted so far.
    pub fn counts(&self) -> EmitCounts {
        self.counts
    }

    /// Mark both layers as waiting for the first point of a new shape.
    pub fn begin_polygon(&mut self) {
        self.fill.first = true;
        self.shore.first = true;
    }

    /// Add a point to `layer`, starting a new shape if none is open.
    ///
    /// The class of a new shape is derived from `flg`.
    pub fn add_point(&mut self, layer: Layer, lon: f64, lat: f64, flg: u8) {
        let track = self.track_mut(layer);
        if track.first {
            track.class = layer.class_for(flg);
            track.first = false;
            track.origin = (lon, lat);
            self.restart(layer, lon, lat);
        } else {
            self.append(layer, lon, lat);
        }
    }

    /// Append a point to the current sequence of `layer`.
    ///
    /// Reaching capacity forces a flush re-seeded at this point.
    pub fn append(&mut self, layer: Layer, lon: f64, lat: f64) {
        let point = self.projection.project(lon, lat);
        let capacity = self.capacity;
        let track = self.track_mut(layer);
        track.points.push(point);
        if track.points.len() >= capacity {
            self.restart(layer, lon, lat);
        }
    }

    /// Emit the pending sequence of `layer` and re-seed it at `(lon, lat)`.
    ///
    /// A layer holding only its seed emits nothing.
    pub fn restart(&mut self, layer: Layer, lon: f64, lat: f64) {
        self.emit_pending(layer);
        let point = self.projection.project(lon, lat);
        let track = self.track_mut(layer);
        track.points.clear();
        track.points.push(point);
    }

    /// Close the open shape of `layer`, if any, back to its origin.
    pub fn close_shape(&mut self, layer: Layer) {
        let track = self.track_mut(layer);
        if track.first {
            return;
        }
        let (lon, lat) = track.origin;
        track.first = true;
        self.append(layer, lon, lat);
        self.restart(layer, lon, lat);
    }

    /// Emit anything pending on both layers and drop the seeds.
    pub fn flush_empty(&mut self) {
        for layer in [Layer::Fill, Layer::Shore] {
            self.emit_pending(layer);
            self.track_mut(layer).points.clear();
        }
    }

    fn emit_pending(&mut self, layer: Layer) {
        let track = match layer {
            Layer::Fill => &self.fill,
            Layer::Shore => &self.shore,
        };
        if !track.has_pending() {
            return;
        }
        self.sink.emit(Shape {
            kind: layer.kind(),
            class: track.class,
            points: &track.points,
        });
        match layer {
            Layer::Fill => self.counts.rings += 1,
            Layer::Shore => self.counts.lines += 1,
        }
        self.counts.points += track.points.len();
    }

    fn track_mut(&mut self, layer: Layer) -> &mut Track {
        match layer {
            Layer::Fill => &mut self.fill,
            Layer::Shore => &mut self.shore,
        }
    }
}
