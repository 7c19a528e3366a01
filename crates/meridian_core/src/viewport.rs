use glam::Vec2;

/// Area of the window the globe occupies, in physical pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Largest centred square that fits the window.
    ///
    /// The globe is drawn square; fitting to the smaller dimension keeps the
    /// full sphere visible instead of cropping its poles or limb.
    pub fn square_fit(window_width: u32, window_height: u32) -> Self {
        let side = window_width.min(window_height);
        Self {
            x: (window_width - side) / 2,
            y: (window_height - side) / 2,
            width: side,
            height: side,
        }
    }

    /// Maps a window-space pixel position into the viewport's normalized
    /// [0,1]² space. Returns `None` outside the viewport or when the
    /// viewport is degenerate.
    pub fn normalize(&self, px: f32, py: f32) -> Option<Vec2> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let nx = (px - self.x as f32) / self.width as f32;
        let ny = (py - self.y as f32) / self.height as f32;
        if (0.0..=1.0).contains(&nx) && (0.0..=1.0).contains(&ny) {
            Some(Vec2::new(nx, ny))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_fit_centres_on_the_wide_axis() {
        let vp = Viewport::square_fit(1280, 720);
        assert_eq!(vp, Viewport::new(280, 0, 720, 720));
    }

    #[test]
    fn normalize_maps_corners_and_rejects_outside() {
        let vp = Viewport::new(100, 0, 200, 200);
        assert_eq!(vp.normalize(100.0, 0.0), Some(Vec2::new(0.0, 0.0)));
        assert_eq!(vp.normalize(300.0, 200.0), Some(Vec2::new(1.0, 1.0)));
        assert_eq!(vp.normalize(200.0, 100.0), Some(Vec2::new(0.5, 0.5)));
        assert_eq!(vp.normalize(50.0, 50.0), None);
    }

    #[test]
    fn degenerate_viewport_normalizes_to_none() {
        assert_eq!(Viewport::new(0, 0, 0, 0).normalize(0.0, 0.0), None);
    }
}
