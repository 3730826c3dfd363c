use super::{Point2, Vector2};

/// Axis-aligned bounds in room space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds2 {
    pub min: Point2,
    pub max: Point2,
}

impl Bounds2 {
    /// Creates bounds from two corners.
    #[must_use]
    pub fn new(min: Point2, max: Point2) -> Self {
        Self { min, max }
    }

    /// Grows the bounds to contain `p`.
    pub fn include(&mut self, p: &Point2) {
        self.min.x = self.min.x.min(p.x);
        self.min.y = self.min.y.min(p.y);
        self.max.x = self.max.x.max(p.x);
        self.max.y = self.max.y.max(p.y);
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }
}

/// Affine pixel ↔ room-space transform: `screen = room * scale + offset`.
///
/// The editing core always works in room-space centimeters; pointer input
/// arrives in screen pixels and must go through [`ViewTransform::to_room`]
/// before any geometry runs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewTransform {
    pub offset: Vector2,
    pub scale: f64,
}

impl Default for ViewTransform {
    fn default() -> Self {
        Self {
            offset: Vector2::zeros(),
            scale: 1.0,
        }
    }
}

impl ViewTransform {
    #[must_use]
    pub fn new(offset: Vector2, scale: f64) -> Self {
        Self { offset, scale }
    }

    /// Fits `bounds` into a `stage_width × stage_height` pixel area with
    /// `padding` on every side, centered, never zooming past `max_scale`.
    #[must_use]
    pub fn fit(
        stage_width: f64,
        stage_height: f64,
        bounds: &Bounds2,
        padding: f64,
        max_scale: f64,
    ) -> Self {
        let bw = bounds.width().max(1.0);
        let bh = bounds.height().max(1.0);
        let sx = (stage_width - padding * 2.0) / bw;
        let sy = (stage_height - padding * 2.0) / bh;
        let scale = sx.min(sy).min(max_scale);

        let offset = Vector2::new(
            (stage_width - bw * scale) / 2.0 - bounds.min.x * scale,
            (stage_height - bh * scale) / 2.0 - bounds.min.y * scale,
        );
        Self { offset, scale }
    }

    /// Converts a screen-space pixel position to room space.
    #[must_use]
    pub fn to_room(&self, screen: &Point2) -> Point2 {
        Point2::from((screen.coords - self.offset) / self.scale)
    }

    /// Converts a room-space position to screen pixels.
    #[must_use]
    pub fn to_screen(&self, room: &Point2) -> Point2 {
        Point2::from(room.coords * self.scale + self.offset)
    }

    /// Room-space distance that covers `radius_px` on screen at the current zoom.
    #[must_use]
    pub fn snap_threshold_cm(&self, radius_px: f64) -> f64 {
        radius_px / self.scale
    }
}
