/// Axis-aligned rectangle in surface coordinates.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Strict-inequality overlap test: touching edges do not count.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Target rendering coordinate space.
///
/// Invariant: `width > 0` and `height > 0`.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SurfaceRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl SurfaceRect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        debug_assert!(width > 0.0);
        debug_assert!(height > 0.0);
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// Measured footprint of a rendered label.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LabelSize {
    pub width: f64,
    pub height: f64,
}

impl LabelSize {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Projected marker position on the rendering surface.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AnchorPosition {
    pub x: f64,
    pub y: f64,
}

impl AnchorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
