//! Canvas viewport math for the resize path.
//!
//! The browser reports the canvas's layout rectangle in CSS pixels; the
//! backing buffer has to be scaled by the device pixel ratio so the
//! module renders at native resolution. The computation is kept here,
//! pure, so it can be tested without a DOM.

/// On-screen layout rectangle of the canvas, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutRect {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

/// Backing-buffer pixel size for a layout rectangle at the given device
/// pixel ratio. A missing or nonsensical ratio falls back to 1.0, the
/// same fallback the page applies when `devicePixelRatio` is unset.
pub fn backing_size(rect: &LayoutRect, dpr: f64) -> (u32, u32) {
    let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
    ((rect.width * dpr) as u32, (rect.height * dpr) as u32)
}

/// The six-value geometry tuple forwarded to the module's
/// `on_window_resize` export, in its exact argument order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeArgs {
    pub inner_width: f64,
    pub inner_height: f64,
    pub layout_width: f64,
    pub layout_height: f64,
    pub layout_left: f64,
    pub layout_top: f64,
}

impl ResizeArgs {
    pub fn new(inner_width: f64, inner_height: f64, rect: &LayoutRect) -> Self {
        Self {
            inner_width,
            inner_height,
            layout_width: rect.width,
            layout_height: rect.height,
            layout_left: rect.left,
            layout_top: rect.top,
        }
    }

    /// Argument order of the module export.
    pub fn values(&self) -> [f64; 6] {
        [
            self.inner_width,
            self.inner_height,
            self.layout_width,
            self.layout_height,
            self.layout_left,
            self.layout_top,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backing_buffer_scales_by_pixel_ratio() {
        let rect = LayoutRect {
            width: 800.0,
            height: 600.0,
            left: 10.0,
            top: 20.0,
        };
        assert_eq!(backing_size(&rect, 2.0), (1600, 1200));
        assert_eq!(backing_size(&rect, 1.0), (800, 600));
    }

    #[test]
    fn degenerate_pixel_ratio_falls_back_to_one() {
        let rect = LayoutRect {
            width: 640.0,
            height: 480.0,
            left: 0.0,
            top: 0.0,
        };
        assert_eq!(backing_size(&rect, 0.0), (640, 480));
        assert_eq!(backing_size(&rect, f64::NAN), (640, 480));
        assert_eq!(backing_size(&rect, -2.0), (640, 480));
    }

    #[test]
    fn resize_args_match_export_argument_order() {
        let rect = LayoutRect {
            width: 800.0,
            height: 600.0,
            left: 12.0,
            top: 34.0,
        };
        let args = ResizeArgs::new(1920.0, 1080.0, &rect);
        assert_eq!(args.values(), [1920.0, 1080.0, 800.0, 600.0, 12.0, 34.0]);
    }

    #[test]
    fn identical_layout_produces_identical_args() {
        let rect = LayoutRect {
            width: 300.5,
            height: 150.25,
            left: 8.0,
            top: 16.0,
        };
        let first = ResizeArgs::new(1024.0, 768.0, &rect);
        let second = ResizeArgs::new(1024.0, 768.0, &rect);
        assert_eq!(first, second);
        assert_eq!(backing_size(&rect, 1.5), backing_size(&rect, 1.5));
    }
}
