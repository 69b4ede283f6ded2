use vello_cpu::kurbo::{BezPath, Circle, Shape};

use crate::{
    foundation::core::{Color, Point},
    render::surface::Surface,
};

/// Record a radial gradient from `color` at `center` to transparent at `fade_radius`, with
/// the color's alpha scaled by `opacity`. Coordinates are device pixels; nothing outside the
/// fade radius is painted.
pub fn fill_radial_fade(
    surface: &mut Surface,
    center: Point,
    fade_radius: f64,
    color: Color,
    opacity: f64,
) {
    if !drawable(center, fade_radius) || color.alpha_u8(opacity) == 0 {
        return;
    }
    let inner = color.to_paint(opacity);
    let gradient = vello_cpu::peniko::Gradient::new_radial((center.x, center.y), fade_radius as f32)
        .with_stops([(0.0, inner), (1.0, inner.with_alpha(0.0))]);

    let ctx = surface.ctx_mut();
    ctx.set_paint(gradient);
    ctx.fill_path(&circle_path(center, fade_radius));
}

/// Record an anti-aliased solid disc of `radius` device pixels, with the color's alpha scaled
/// by `opacity`.
pub fn fill_disc(surface: &mut Surface, center: Point, radius: f64, color: Color, opacity: f64) {
    if !drawable(center, radius) || color.alpha_u8(opacity) == 0 {
        return;
    }
    let ctx = surface.ctx_mut();
    ctx.set_paint(color.to_paint(opacity));
    ctx.fill_path(&circle_path(center, radius));
}

fn drawable(center: Point, radius: f64) -> bool {
    center.x.is_finite() && center.y.is_finite() && radius.is_finite() && radius > 0.0
}

fn circle_path(center: Point, radius: f64) -> BezPath {
    let mut path = BezPath::new();
    for el in Circle::new((center.x, center.y), radius).path_elements(0.1) {
        path.push(el);
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/render/raster.rs"]
mod tests;
