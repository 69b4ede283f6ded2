use crate::{
    content::escape::escape_html,
    foundation::error::FolioResult,
    site::{markup, transform::DocumentTransform},
};

pub const DEFAULT_CANVAS_ID: &str = "background-canvas";
pub const DEFAULT_HERO_CLASS: &str = "hero";

/// Makes sure the page carries the canvas the background animation paints into.
#[derive(Clone, Debug)]
pub struct CanvasHostInjector {
    canvas_id: String,
    hero_class: String,
}

impl Default for CanvasHostInjector {
    fn default() -> Self {
        Self::new(DEFAULT_CANVAS_ID, DEFAULT_HERO_CLASS)
    }
}

impl CanvasHostInjector {
    pub fn new(canvas_id: impl Into<String>, hero_class: impl Into<String>) -> Self {
        Self {
            canvas_id: canvas_id.into(),
            hero_class: hero_class.into(),
        }
    }

    pub fn canvas_id(&self) -> &str {
        &self.canvas_id
    }

    /// Inserts the canvas as first child of the hero section, falling back to `<body>`.
    pub fn inject(&self, html: &str) -> String {
        if markup::find_by_id(html, &self.canvas_id).is_some() {
            return html.to_owned();
        }
        let host = markup::find_by_class(html, &self.hero_class)
            .or_else(|| markup::find_by_tag(html, "body"));
        let Some(host) = host else {
            tracing::warn!(
                hero_class = %self.hero_class,
                "no hero section or body to host the background canvas"
            );
            return html.to_owned();
        };

        let canvas = format!(r#"<canvas id="{}"></canvas>"#, escape_html(&self.canvas_id));
        markup::insert_first_child(html, host, &canvas)
    }
}

impl DocumentTransform for CanvasHostInjector {
    fn name(&self) -> &str {
        "canvas-host"
    }

    fn transform(&self, html: &str) -> FolioResult<String> {
        Ok(self.inject(html))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/site/canvas_host.rs"]
mod tests;
