use crate::{
    foundation::{
        core::{Color, Viewport},
        error::{FolioError, FolioResult},
    },
    render::frame::FrameRGBA,
};

/// Device-pixel backing store for one viewport, plus the render context that draws into it.
///
/// Pixels are premultiplied RGBA8, row-major. Drawing is recorded between
/// [`Surface::begin_frame`] and [`Surface::end_frame`]; only `end_frame` touches the pixels,
/// replacing all of them. The viewport recorded here is the one drawing reads; it is replaced
/// on every resize.
pub struct Surface {
    viewport: Viewport,
    width: u16,
    height: u16,
    pixmap: vello_cpu::Pixmap,
    ctx: vello_cpu::RenderContext,
}

impl Surface {
    pub fn new(viewport: Viewport) -> FolioResult<Self> {
        let (width, height) = pixel_dims(viewport)?;
        Ok(Self {
            viewport,
            width,
            height,
            pixmap: vello_cpu::Pixmap::new(width, height),
            ctx: vello_cpu::RenderContext::new(width, height),
        })
    }

    /// Track a new viewport. The pixel buffer and render context are reallocated only when the
    /// device-pixel size changes.
    pub fn resize(&mut self, viewport: Viewport) -> FolioResult<()> {
        let (width, height) = pixel_dims(viewport)?;
        if width != self.width || height != self.height {
            self.pixmap = vello_cpu::Pixmap::new(width, height);
            self.ctx = vello_cpu::RenderContext::new(width, height);
            self.width = width;
            self.height = height;
        }
        self.viewport = viewport;
        Ok(())
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Start recording a frame. A visible `background` is laid down first over the whole
    /// surface; otherwise the frame starts transparent.
    pub fn begin_frame(&mut self, background: Option<Color>) {
        self.ctx.reset();
        if let Some(bg) = background.filter(|c| c.alpha_u8(1.0) > 0) {
            self.ctx.set_paint(bg.to_paint(1.0));
            self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
                0.0,
                0.0,
                f64::from(self.width),
                f64::from(self.height),
            ));
        }
    }

    /// Rasterize everything recorded since [`Surface::begin_frame`] into the pixels.
    pub fn end_frame(&mut self) {
        self.ctx.flush();
        self.ctx.render_to_pixmap(&mut self.pixmap);
    }

    pub(crate) fn ctx_mut(&mut self) -> &mut vello_cpu::RenderContext {
        &mut self.ctx
    }

    pub fn data(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let idx = ((y as usize) * (self.width() as usize) + (x as usize)) * 4;
        let px = self.data().get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Copy out the current pixels.
    pub fn snapshot(&self) -> FrameRGBA {
        FrameRGBA {
            width: self.width(),
            height: self.height(),
            data: self.data().to_vec(),
            premultiplied: true,
        }
    }
}

fn pixel_dims(viewport: Viewport) -> FolioResult<(u16, u16)> {
    let width: u16 = viewport
        .pixel_width()
        .try_into()
        .map_err(|_| FolioError::render("surface width exceeds u16"))?;
    let height: u16 = viewport
        .pixel_height()
        .try_into()
        .map_err(|_| FolioError::render("surface height exceeds u16"))?;
    Ok((width, height))
}

#[cfg(test)]
#[path = "../../tests/unit/render/surface.rs"]
mod tests;
