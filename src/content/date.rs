use std::fmt;

pub const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// English abbreviation for a 1-based month.
pub fn month_abbrev(month: u8) -> Option<&'static str> {
    MONTH_ABBREVIATIONS
        .get(usize::from(month).checked_sub(1)?)
        .copied()
}

/// One end of an experience's date range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBound {
    Month { year: u32, month: u8 },
    Present,
}

impl DateBound {
    /// Parse `"YYYY-MM"` or `"present"` (any case).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.eq_ignore_ascii_case("present") {
            return Some(Self::Present);
        }
        let (year, month) = raw.split_once('-')?;
        if year.is_empty() || !year.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let year: u32 = year.parse().ok()?;
        let month: u8 = month.parse().ok()?;
        month_abbrev(month)?;
        Some(Self::Month { year, month })
    }
}

impl fmt::Display for DateBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Present => f.write_str("Present"),
            Self::Month { year, month } => {
                let name = month_abbrev(month).ok_or(fmt::Error)?;
                write!(f, "{name} {year}")
            }
        }
    }
}

/// Display text for one bound: empty input stays empty, unparseable input is shown as is.
pub fn format_bound(raw: &str) -> String {
    if raw.trim().is_empty() {
        return String::new();
    }
    match DateBound::parse(raw) {
        Some(bound) => bound.to_string(),
        None => raw.trim().to_owned(),
    }
}

/// `"Mar 2022 — Present"` style range.
pub fn format_date_range(start: &str, end: &str) -> String {
    format!("{} — {}", format_bound(start), format_bound(end))
}

#[cfg(test)]
#[path = "../../tests/unit/content/date.rs"]
mod tests;
