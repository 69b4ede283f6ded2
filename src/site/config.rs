use std::path::{Component, Path, PathBuf};

use crate::{
    foundation::error::{FolioError, FolioResult},
    site::{
        canvas_host::{DEFAULT_CANVAS_ID, DEFAULT_HERO_CLASS},
        hydrate::TIMELINE_CLASS,
        inject::EXPERIENCES_PLACEHOLDER,
    },
};

/// Prefix of the environment variables that override [`SiteConfig`] fields.
pub const ENV_PREFIX: &str = "FOLIO_";

/// Layout of the site sources and the build output.
///
/// Relative paths resolve against `root`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    pub root: PathBuf,
    pub public_dir: PathBuf,
    pub out_dir: PathBuf,
    pub entry: PathBuf,
    /// Location of the experience data inside `public_dir`; also its URL path.
    pub experiences_data: String,
    pub placeholder: String,
    pub timeline_class: String,
    pub canvas_id: String,
    pub hero_class: String,
    /// Copy `public_dir` into `out_dir` before writing the entry document. `out_dir` must then
    /// lie outside `public_dir`.
    pub copy_public: bool,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            public_dir: PathBuf::from("public"),
            out_dir: PathBuf::from("dist"),
            entry: PathBuf::from("index.html"),
            experiences_data: "api/experiences.json".to_owned(),
            placeholder: EXPERIENCES_PLACEHOLDER.to_owned(),
            timeline_class: TIMELINE_CLASS.to_owned(),
            canvas_id: DEFAULT_CANVAS_ID.to_owned(),
            hero_class: DEFAULT_HERO_CLASS.to_owned(),
            copy_public: true,
        }
    }
}

impl SiteConfig {
    pub fn from_json_str(s: &str) -> FolioResult<Self> {
        let cfg: Self = serde_json::from_str(s)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_path(path: &Path) -> FolioResult<Self> {
        let s = std::fs::read_to_string(path)?;
        Self::from_json_str(&s)
    }

    /// Defaults, or the file at `path`, with `FOLIO_*` environment overrides applied.
    pub fn load(path: Option<&Path>) -> FolioResult<Self> {
        let mut cfg = match path {
            Some(p) => Self::from_path(p)?,
            None => Self::default(),
        };
        cfg.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(cfg)
    }

    /// Apply overrides looked up by full variable name (e.g. `FOLIO_OUT_DIR`).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> FolioResult<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(&format!("{ENV_PREFIX}{name}"));

        if let Some(v) = var("ROOT") {
            self.root = PathBuf::from(v);
        }
        if let Some(v) = var("PUBLIC_DIR") {
            self.public_dir = PathBuf::from(v);
        }
        if let Some(v) = var("OUT_DIR") {
            self.out_dir = PathBuf::from(v);
        }
        if let Some(v) = var("ENTRY") {
            self.entry = PathBuf::from(v);
        }
        if let Some(v) = var("EXPERIENCES_DATA") {
            self.experiences_data = v;
        }
        self.validate()
    }

    pub fn validate(&self) -> FolioResult<()> {
        if self.entry.as_os_str().is_empty() {
            return Err(FolioError::validation("entry must not be empty"));
        }
        if self.out_dir.as_os_str().is_empty() {
            return Err(FolioError::validation("out_dir must not be empty"));
        }
        if self.experiences_data.trim().is_empty() {
            return Err(FolioError::validation("experiences_data must not be empty"));
        }
        if self.placeholder.is_empty() {
            return Err(FolioError::validation("placeholder must not be empty"));
        }
        if self.timeline_class.split_ascii_whitespace().count() != 1 {
            return Err(FolioError::validation(
                "timeline_class must be a single class name",
            ));
        }
        if self.hero_class.split_ascii_whitespace().count() != 1 {
            return Err(FolioError::validation("hero_class must be a single class name"));
        }
        if self.canvas_id.trim().is_empty() {
            return Err(FolioError::validation("canvas_id must not be empty"));
        }
        if self.copy_public
            && lexical(&self.out_path()).starts_with(lexical(&self.public_path()))
        {
            return Err(FolioError::validation(format!(
                "out_dir '{}' must not be inside public_dir '{}' when copy_public is set",
                self.out_dir.display(),
                self.public_dir.display()
            )));
        }
        Ok(())
    }

    pub fn entry_path(&self) -> PathBuf {
        self.root.join(&self.entry)
    }

    pub fn public_path(&self) -> PathBuf {
        self.root.join(&self.public_dir)
    }

    pub fn out_path(&self) -> PathBuf {
        self.root.join(&self.out_dir)
    }

    pub fn data_path(&self) -> PathBuf {
        self.public_path().join(self.experiences_data.trim_start_matches('/'))
    }

    /// Output file for the transformed entry document.
    pub fn output_entry_path(&self) -> PathBuf {
        let name = self
            .entry
            .file_name()
            .map_or_else(|| PathBuf::from("index.html"), PathBuf::from);
        self.out_path().join(name)
    }

    /// URL path of the experience data, with a leading slash.
    pub fn data_url_path(&self) -> String {
        format!("/{}", self.experiences_data.trim_start_matches('/'))
    }
}

/// Resolve `.` and `..` without touching the filesystem.
fn lexical(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for c in path.components() {
        match c {
            Component::CurDir => {}
            Component::ParentDir if out.file_name().is_some() => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/site/config.rs"]
mod tests;
