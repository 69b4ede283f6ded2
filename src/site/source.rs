use std::{
    path::{Path, PathBuf},
    time::Duration,
};

use crate::foundation::error::{FolioError, FolioResult};

/// Well-known location of the experience data relative to the site root.
pub const EXPERIENCES_URL_PATH: &str = "/api/experiences.json";

const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Where the runtime path reads experience JSON from.
///
/// `Ok(None)` means the data does not exist; `Err` is a transport or read failure.
pub trait DataSource {
    fn describe(&self) -> String;

    fn fetch(&self) -> FolioResult<Option<String>>;
}

#[derive(Clone, Debug)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DataSource for FileSource {
    fn describe(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> FolioResult<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(body) => Ok(Some(body)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Fetches experience data over HTTP with a blocking client.
#[derive(Clone, Debug)]
pub struct HttpSource {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpSource {
    /// Source for the well-known data path under `base_url`.
    pub fn new(base_url: &str) -> FolioResult<Self> {
        Self::with_path(base_url, EXPERIENCES_URL_PATH)
    }

    pub fn with_path(base_url: &str, path: &str) -> FolioResult<Self> {
        let base = base_url.trim();
        if base.is_empty() {
            return Err(FolioError::validation("base url must not be empty"));
        }
        let url = join_url(base, path);
        let client = reqwest::blocking::Client::builder()
            .timeout(FETCH_TIMEOUT)
            .build()
            .map_err(|e| FolioError::data(format!("http client: {e}")))?;
        Ok(Self { url, client })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl DataSource for HttpSource {
    fn describe(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> FolioResult<Option<String>> {
        let resp = self
            .client
            .get(&self.url)
            .send()
            .map_err(|e| FolioError::data(format!("GET {}: {e}", self.url)))?;
        if resp.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let resp = resp
            .error_for_status()
            .map_err(|e| FolioError::data(format!("GET {}: {e}", self.url)))?;
        let body = resp
            .text()
            .map_err(|e| FolioError::data(format!("GET {}: reading body: {e}", self.url)))?;
        Ok(Some(body))
    }
}

pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
