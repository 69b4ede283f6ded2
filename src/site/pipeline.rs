use std::path::{Path, PathBuf};

use crate::{
    foundation::error::{FolioError, FolioResult},
    site::{
        canvas_host::CanvasHostInjector, config::SiteConfig, inject::ExperienceInjector,
        transform::DocumentTransform,
    },
};

/// Ordered document transforms applied to the site entry page.
#[derive(Default)]
pub struct SitePipeline {
    transforms: Vec<Box<dyn DocumentTransform>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildReport {
    pub output: PathBuf,
    pub bytes: usize,
    pub public_files_copied: usize,
}

impl SitePipeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Experience injection followed by the canvas host.
    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self::new()
            .with(ExperienceInjector::new(cfg.data_path()).with_placeholder(&cfg.placeholder))
            .with(CanvasHostInjector::new(&cfg.canvas_id, &cfg.hero_class))
    }

    pub fn with<T: DocumentTransform + 'static>(mut self, transform: T) -> Self {
        self.transforms.push(Box::new(transform));
        self
    }

    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }

    /// Run every transform in order. A failing transform is logged and skipped.
    pub fn apply(&self, html: &str) -> String {
        let mut doc = html.to_owned();
        for t in &self.transforms {
            match t.transform(&doc) {
                Ok(next) => {
                    tracing::debug!(transform = t.name(), "applied transform");
                    doc = next;
                }
                Err(err) => {
                    tracing::error!(
                        transform = t.name(),
                        error = %err,
                        "transform failed; document left unchanged"
                    );
                }
            }
        }
        doc
    }

    /// Transform the entry document of `cfg` and write it into the output directory.
    #[tracing::instrument(skip_all, fields(entry = %cfg.entry_path().display()))]
    pub fn build(&self, cfg: &SiteConfig) -> FolioResult<BuildReport> {
        cfg.validate()?;
        let entry = cfg.entry_path();
        let html = std::fs::read_to_string(&entry).map_err(|e| {
            FolioError::markup(format!("read entry document '{}': {e}", entry.display()))
        })?;

        let out_dir = cfg.out_path();
        std::fs::create_dir_all(&out_dir)?;

        let public = cfg.public_path();
        let public_files_copied = if cfg.copy_public && public.is_dir() {
            copy_tree(&public, &out_dir)?
        } else {
            0
        };

        let doc = self.apply(&html);
        let output = cfg.output_entry_path();
        std::fs::write(&output, doc.as_bytes())?;

        tracing::info!(
            output = %output.display(),
            bytes = doc.len(),
            public_files_copied,
            "site built"
        );
        Ok(BuildReport {
            output,
            bytes: doc.len(),
            public_files_copied,
        })
    }
}

/// Recursively copy the contents of `from` into `to`, returning the number of files copied.
fn copy_tree(from: &Path, to: &Path) -> FolioResult<usize> {
    let mut copied = 0usize;
    for entry in std::fs::read_dir(from)? {
        let entry = entry?;
        let src = entry.path();
        let dst = to.join(entry.file_name());
        if entry.file_type()?.is_dir() {
            std::fs::create_dir_all(&dst)?;
            copied += copy_tree(&src, &dst)?;
        } else {
            std::fs::copy(&src, &dst)?;
            copied += 1;
        }
    }
    Ok(copied)
}

#[cfg(test)]
#[path = "../../tests/unit/site/pipeline.rs"]
mod tests;
