use crate::foundation::error::{FolioError, FolioResult};

pub use kurbo::{Point, Vec2};

/// Size of the browser viewport the background is painted for.
///
/// Lengths are CSS pixels; the backing surface is `css * device_pixel_ratio` device pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    /// Width in CSS pixels.
    pub css_width: u32,
    /// Height in CSS pixels.
    pub css_height: u32,
    /// Device pixels per CSS pixel.
    #[serde(default = "default_dpr")]
    pub device_pixel_ratio: f64,
}

fn default_dpr() -> f64 {
    1.0
}

impl Viewport {
    /// Create a validated viewport.
    ///
    /// A missing or nonsensical ratio (zero, negative, NaN) falls back to `1.0`.
    pub fn new(css_width: u32, css_height: u32, device_pixel_ratio: f64) -> FolioResult<Self> {
        if css_width == 0 || css_height == 0 {
            return Err(FolioError::validation("viewport width/height must be > 0"));
        }
        let device_pixel_ratio = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
            device_pixel_ratio
        } else {
            1.0
        };
        Ok(Self {
            css_width,
            css_height,
            device_pixel_ratio,
        })
    }

    /// Width of the backing surface in device pixels.
    pub fn pixel_width(self) -> u32 {
        scale_len(self.css_width, self.device_pixel_ratio)
    }

    /// Height of the backing surface in device pixels.
    pub fn pixel_height(self) -> u32 {
        scale_len(self.css_height, self.device_pixel_ratio)
    }

    pub fn css_width_f64(self) -> f64 {
        f64::from(self.css_width)
    }

    pub fn css_height_f64(self) -> f64 {
        f64::from(self.css_height)
    }

    /// Map a normalized `[0,1]` viewport position to CSS pixels.
    pub fn to_css(self, normalized: Point) -> Point {
        Point::new(
            normalized.x * self.css_width_f64(),
            normalized.y * self.css_height_f64(),
        )
    }
}

fn scale_len(css: u32, dpr: f64) -> u32 {
    ((f64::from(css) * dpr).round().max(1.0)) as u32
}

/// Straight-alpha color as written in scene files: 8-bit channels plus a `0..=1` alpha.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Alpha as an 8-bit channel after scaling by `alpha_scale` (both clamped to `0..=1`).
    pub fn alpha_u8(self, alpha_scale: f64) -> u8 {
        (self.a.clamp(0.0, 1.0) * alpha_scale.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    /// The rasterizer's paint color, with alpha scaled by `alpha_scale`.
    pub fn to_paint(self, alpha_scale: f64) -> vello_cpu::peniko::Color {
        vello_cpu::peniko::Color::from_rgba8(self.r, self.g, self.b, self.alpha_u8(alpha_scale))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
