use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::foundation::error::{FolioError, FolioResult};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether `data` is premultiplied alpha.
    pub premultiplied: bool,
}

impl FrameRGBA {
    /// Straight-alpha copy of the pixel data, as image files expect.
    pub fn to_straight_rgba8(&self) -> Vec<u8> {
        if !self.premultiplied {
            return self.data.clone();
        }
        let mut out = Vec::with_capacity(self.data.len());
        for px in self.data.chunks_exact(4) {
            let a = px[3];
            if a == 0 {
                out.extend_from_slice(&[0, 0, 0, 0]);
                continue;
            }
            let unpremul = |c: u8| -> u8 {
                ((u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a)).min(255) as u8
            };
            out.extend_from_slice(&[unpremul(px[0]), unpremul(px[1]), unpremul(px[2]), a]);
        }
        out
    }

    pub fn save_png(&self, path: &Path) -> FolioResult<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        image::save_buffer_with_format(
            path,
            &self.to_straight_rgba8(),
            self.width,
            self.height,
            image::ColorType::Rgba8,
            image::ImageFormat::Png,
        )
        .map_err(|e| FolioError::render(format!("write png '{}': {e}", path.display())))
    }
}

/// Frames buffered before a batch is encoded.
const DEFAULT_PNG_BATCH: usize = 8;

/// Writes numbered `frame_NNNNN.png` files into one directory.
///
/// Frames are buffered and each full batch is encoded in parallel; call
/// [`PngSequenceWriter::finish`] to write the remainder.
pub struct PngSequenceWriter {
    dir: PathBuf,
    batch: usize,
    pending: Vec<(u64, FrameRGBA)>,
    next_index: u64,
}

impl PngSequenceWriter {
    pub fn new(dir: impl Into<PathBuf>) -> FolioResult<Self> {
        Self::with_batch(dir, DEFAULT_PNG_BATCH)
    }

    pub fn with_batch(dir: impl Into<PathBuf>, batch: usize) -> FolioResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        Ok(Self {
            dir,
            batch: batch.max(1),
            pending: Vec::new(),
            next_index: 0,
        })
    }

    pub fn path_for(&self, index: u64) -> PathBuf {
        self.dir.join(format!("frame_{index:05}.png"))
    }

    pub fn push(&mut self, frame: FrameRGBA) -> FolioResult<()> {
        self.pending.push((self.next_index, frame));
        self.next_index += 1;
        if self.pending.len() >= self.batch {
            self.flush()?;
        }
        Ok(())
    }

    /// Write what is still buffered and return the number of frames written in total.
    pub fn finish(mut self) -> FolioResult<u64> {
        self.flush()?;
        Ok(self.next_index)
    }

    fn flush(&mut self) -> FolioResult<()> {
        let pending = std::mem::take(&mut self.pending);
        pending
            .par_iter()
            .try_for_each(|(index, frame)| frame.save_png(&self.path_for(*index)))?;
        tracing::debug!(frames = pending.len(), dir = %self.dir.display(), "wrote png batch");
        Ok(())
    }
}
