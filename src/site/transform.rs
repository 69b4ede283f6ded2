use crate::foundation::error::FolioResult;

/// One step of the build-time document pipeline.
///
/// Implementations receive the whole entry document and return its replacement. An `Err` is
/// logged by [`crate::SitePipeline`] and the document passes through unchanged.
pub trait DocumentTransform {
    fn name(&self) -> &str;

    fn transform(&self, html: &str) -> FolioResult<String>;
}
