use crate::{
    content::{experience::records_or_empty, render::render_experiences},
    site::{markup, source::DataSource},
};

pub const TIMELINE_CLASS: &str = "experience-timeline";

/// The element whose content hydration replaces.
pub trait Container {
    fn is_present(&self) -> bool;

    fn set_inner_html(&mut self, html: &str);
}

/// A saved page plus the class of its timeline container.
#[derive(Clone, Debug)]
pub struct HtmlPage {
    html: String,
    container_class: String,
}

impl HtmlPage {
    pub fn new(html: impl Into<String>) -> Self {
        Self::with_container_class(html, TIMELINE_CLASS)
    }

    pub fn with_container_class(html: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            html: html.into(),
            container_class: class.into(),
        }
    }

    pub fn html(&self) -> &str {
        &self.html
    }

    pub fn into_html(self) -> String {
        self.html
    }

    /// Current content of the container, if the page has one.
    pub fn container_html(&self) -> Option<&str> {
        markup::find_by_class(&self.html, &self.container_class).map(|s| s.inner(&self.html))
    }
}

impl Container for HtmlPage {
    fn is_present(&self) -> bool {
        markup::find_by_class(&self.html, &self.container_class).is_some()
    }

    fn set_inner_html(&mut self, inner: &str) {
        if let Some(span) = markup::find_by_class(&self.html, &self.container_class) {
            self.html = markup::replace_inner(&self.html, span, inner);
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HydrateOutcome {
    Rendered(usize),
    NoContainer,
    DataMissing,
    FetchFailed,
    Empty,
}

/// Fetch experience data once and render it into `container`.
///
/// Anything short of a non-empty record list leaves the container untouched.
pub fn hydrate<C, D>(container: &mut C, source: &D) -> HydrateOutcome
where
    C: Container + ?Sized,
    D: DataSource + ?Sized,
{
    if !container.is_present() {
        tracing::debug!("no timeline container; skipping hydration");
        return HydrateOutcome::NoContainer;
    }

    let json = match source.fetch() {
        Ok(Some(json)) => json,
        Ok(None) => {
            tracing::warn!(source = %source.describe(), "experience data not found");
            return HydrateOutcome::DataMissing;
        }
        Err(err) => {
            tracing::warn!(source = %source.describe(), error = %err, "failed to load experiences");
            return HydrateOutcome::FetchFailed;
        }
    };

    let records = records_or_empty(&json);
    if records.is_empty() {
        return HydrateOutcome::Empty;
    }
    container.set_inner_html(&render_experiences(&records));
    tracing::debug!(records = records.len(), "hydrated timeline");
    HydrateOutcome::Rendered(records.len())
}

#[cfg(test)]
#[path = "../../tests/unit/site/hydrate.rs"]
mod tests;
