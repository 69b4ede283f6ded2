use std::path::{Path, PathBuf};

use crate::{
    content::{experience::records_or_empty, render::render_experiences},
    foundation::error::FolioResult,
    site::transform::DocumentTransform,
};

pub const EXPERIENCES_PLACEHOLDER: &str = "{{EXPERIENCES}}";

/// Replaces the experiences placeholder in the entry document with rendered records read from
/// a JSON file. Any problem with the data leaves the document as it was.
#[derive(Clone, Debug)]
pub struct ExperienceInjector {
    data_path: PathBuf,
    placeholder: String,
}

impl ExperienceInjector {
    pub fn new(data_path: impl Into<PathBuf>) -> Self {
        Self {
            data_path: data_path.into(),
            placeholder: EXPERIENCES_PLACEHOLDER.to_owned(),
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn inject(&self, html: &str) -> String {
        if self.placeholder.is_empty() || !html.contains(&self.placeholder) {
            tracing::debug!(placeholder = %self.placeholder, "no placeholder in document");
            return html.to_owned();
        }

        let json = match std::fs::read_to_string(&self.data_path) {
            Ok(json) => json,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::warn!(path = %self.data_path.display(), "experience data not found");
                return html.to_owned();
            }
            Err(err) => {
                tracing::error!(
                    path = %self.data_path.display(),
                    error = %err,
                    "failed to read experience data"
                );
                return html.to_owned();
            }
        };

        let records = records_or_empty(&json);
        if records.is_empty() {
            tracing::warn!(path = %self.data_path.display(), "no experience records to inject");
            return html.to_owned();
        }

        let fragment = render_experiences(&records);
        tracing::info!(records = records.len(), "injected experiences");
        html.replace(&self.placeholder, &fragment)
    }
}

impl DocumentTransform for ExperienceInjector {
    fn name(&self) -> &str {
        "experiences"
    }

    fn transform(&self, html: &str) -> FolioResult<String> {
        Ok(self.inject(html))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/inject.rs"]
mod tests;
