use crate::foundation::error::{FolioError, FolioResult};

/// One entry of the experience timeline, as stored in `experiences.json`.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ExperienceRecord {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    /// `"YYYY-MM"` or `"present"`.
    pub start: String,
    /// `"YYYY-MM"` or `"present"`.
    pub end: String,
    pub bullets: Vec<String>,
    pub tags: Vec<String>,
    /// Font Awesome class, e.g. `fa-code`.
    pub icon: Option<String>,
}

/// Parse the experience data file. The top level must be an array.
pub fn parse_records(json: &str) -> FolioResult<Vec<ExperienceRecord>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let serde_json::Value::Array(items) = value else {
        return Err(FolioError::data("experience data must be a JSON array"));
    };
    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| {
            serde_json::from_value(item)
                .map_err(|e| FolioError::data(format!("experience {i}: {e}")))
        })
        .collect()
}

/// [`parse_records`], degrading malformed data to an empty list.
pub fn records_or_empty(json: &str) -> Vec<ExperienceRecord> {
    match parse_records(json) {
        Ok(records) => records,
        Err(err) => {
            tracing::warn!(error = %err, "ignoring malformed experience data");
            Vec::new()
        }
    }
}
