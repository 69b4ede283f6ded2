use std::fmt::Write as _;

use crate::content::{date::format_date_range, escape::escape_html, experience::ExperienceRecord};

/// Icon used when a record names none.
pub const DEFAULT_ICON: &str = "fa-briefcase";

/// HTML for the whole timeline: one `<article role="listitem">` per record, in input order,
/// joined by newlines. Every record-derived string is escaped. No records, no output.
pub fn render_experiences(records: &[ExperienceRecord]) -> String {
    records
        .iter()
        .map(render_experience)
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_experience(e: &ExperienceRecord) -> String {
    let mut bullets = String::new();
    for b in &e.bullets {
        let _ = write!(bullets, "<li>{}</li>", escape_html(b));
    }
    let mut tags = String::new();
    for t in &e.tags {
        let _ = write!(tags, r#"<span class="exp-tag">{}</span>"#, escape_html(t));
    }
    let icon = e
        .icon
        .as_deref()
        .filter(|i| !i.trim().is_empty())
        .unwrap_or(DEFAULT_ICON);
    let date_range = format_date_range(&e.start, &e.end);

    format!(
        r#"<article class="experience-item" role="listitem">
  <div class="experience-marker" aria-hidden="true">
    <i class="fas {icon}"></i>
  </div>

  <div class="experience-card">
    <div class="experience-top">
      <div class="experience-title">
        <h3>{title}</h3>
        <p class="experience-meta"><strong>{company}</strong> • {location}</p>
      </div>
      <div class="experience-dates" aria-label="Experience date range">{dates}</div>
    </div>

    <ul class="experience-bullets">{bullets}</ul>
    <div class="experience-tags" aria-label="Experience tags">{tags}</div>
  </div>
</article>"#,
        icon = escape_html(icon),
        title = escape_html(&e.title),
        company = escape_html(&e.company),
        location = escape_html(e.location.as_deref().unwrap_or_default()),
        dates = escape_html(&date_range),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/content/render.rs"]
mod tests;
