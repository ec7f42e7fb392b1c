//! Projection of decoded geographic points into renderer space.

use crate::coord::ViewBox;

/// A point in the renderer's coordinate space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Maps longitude/latitude in degrees to renderer coordinates.
pub trait Projection {
    fn project(&self, lon: f64, lat: f64) -> ScreenPoint;
}

/// Passes geographic coordinates through unchanged (`x = lon`, `y = lat`).
#[derive(Debug, Clone, Copy, Default)]
pub struct Geographic;

impl Projection for Geographic {
    #[inline]
    fn project(&self, lon: f64, lat: f64) -> ScreenPoint {
        ScreenPoint::new(lon, lat)
    }
}

/// Margins around the drawable area, in renderer units.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

/// Linear map from a view box onto a viewport.
///
/// Screen y grows downward while latitude grows upward, so the latitude
/// axis is inverted. The view box must be non-degenerate; use
/// [`ViewBox::normalized`] first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    view: ViewBox,
    width: f64,
    height: f64,
    insets: Insets,
}

impl ViewTransform {
    /// Map `view` onto a `width` × `height` viewport.
    pub fn new(view: ViewBox, width: f64, height: f64) -> Self {
        Self {
            view,
            width,
            height,
            insets: Insets::default(),
        }
    }

    /// Reserve margins around the drawable area.
    pub fn with_insets(mut self, insets: Insets) -> Self {
        self.insets = insets;
        self
    }

    /// The mapped view box.
    pub fn view(&self) -> &ViewBox {
        &self.view
    }
}

impl Projection for ViewTransform {
    fn project(&self, lon: f64, lat: f64) -> ScreenPoint {
        let v = &self.view;
        let i = &self.insets;
        let x_scale = (self.width - i.left - i.right) / (v.east - v.west + 1.0);
        let y_scale = (self.height - i.top - i.bottom) / (v.south - v.north - 1.0);
        ScreenPoint {
            x: i.left + (lon - v.west) * x_scale,
            y: i.top + (lat - v.north - 1.0) * y_scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_geographic_passthrough() {
        assert_eq!(Geographic.project(-5.5, 51.0), ScreenPoint::new(-5.5, 51.0));
    }

    #[test]
    fn test_view_transform_west_edge() {
        let view = ViewBox::new(10.0, 0.0, 0.0, 9.0);
        let t = ViewTransform::new(view, 100.0, 110.0);
        // x scale = 100 / (9 - 0 + 1) = 10
        let p = t.project(0.0, 10.0);
        assert!(approx(p.x, 0.0));
        // y scale = 110 / (0 - 10 - 1) = -10
        assert!(approx(p.y, 10.0));
    }

    #[test]
    fn test_view_transform_inverts_latitude() {
        let view = ViewBox::new(10.0, 0.0, 0.0, 9.0);
        let t = ViewTransform::new(view, 100.0, 110.0);
        let north = t.project(5.0, 10.0);
        let south = t.project(5.0, 0.0);
        assert!(south.y > north.y);
        assert!(approx(south.y, 110.0));
        assert!(approx(north.x, 50.0));
    }

    #[test]
    fn test_view_transform_insets() {
        let view = ViewBox::new(10.0, 0.0, 0.0, 9.0);
        let t = ViewTransform::new(view, 120.0, 110.0).with_insets(Insets {
            top: 5.0,
            left: 10.0,
            bottom: 0.0,
            right: 10.0,
        });
        let p = t.project(1.0, 10.0);
        assert!(approx(p.x, 20.0));
        assert!(approx(p.y, 5.0 + 105.0 / 11.0));
        assert_eq!(t.view().north, 10.0);
    }
}
