//! Element lookup by class, id or tag name, and splicing into the source text.
//!
//! Documents are parsed with `tl`; spans are byte offsets into the original string, so an edit
//! leaves every byte outside the element untouched.

const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// Byte offsets of one element inside a document.
///
/// `open_start..inner_start` is the start tag, `inner_start..inner_end` the content and
/// `inner_end..close_end` the end tag (empty for void or self-closing elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ElementSpan {
    pub open_start: usize,
    pub inner_start: usize,
    pub inner_end: usize,
    pub close_end: usize,
}

impl ElementSpan {
    pub fn inner<'a>(&self, html: &'a str) -> &'a str {
        &html[self.inner_start..self.inner_end]
    }
}

/// First element, in document order, whose tag satisfies `pred`.
///
/// Returns `None` when no tag matches, the document does not parse, or the matching element
/// is never closed.
fn find_element<P>(html: &str, mut pred: P) -> Option<ElementSpan>
where
    P: FnMut(&tl::HTMLTag<'_>) -> bool,
{
    let dom = tl::parse(html, tl::ParserOptions::default()).ok()?;
    let (open_start, tag) = dom
        .nodes()
        .iter()
        .filter_map(tl::Node::as_tag)
        .filter(|tag| pred(*tag))
        .filter_map(|tag| Some((source_offset(html, tag.raw().as_bytes())?, tag)))
        .min_by_key(|(at, _)| *at)?;

    let raw = html.get(open_start..open_start + tag.raw().as_bytes().len())?;
    let inner_start = open_start + start_tag_len(raw.as_bytes())?;
    let name = tag.name().as_utf8_str();

    if is_void(&name) || html[open_start..inner_start].ends_with("/>") {
        return Some(ElementSpan {
            open_start,
            inner_start,
            inner_end: inner_start,
            close_end: inner_start,
        });
    }
    let close = end_tag_start(raw, &name)?;
    let inner_end = open_start + close;
    (inner_end >= inner_start).then_some(ElementSpan {
        open_start,
        inner_start,
        inner_end,
        close_end: open_start + raw.len(),
    })
}

/// Position of `raw` inside `html`, when `raw` borrows from it.
fn source_offset(html: &str, raw: &[u8]) -> Option<usize> {
    let at = (raw.as_ptr() as usize).checked_sub(html.as_ptr() as usize)?;
    (at + raw.len() <= html.len() && html.is_char_boundary(at)).then_some(at)
}

/// Length of the start tag at the beginning of `tag`, through its `>`.
///
/// Quotes only delimit a value directly after `=`, so apostrophes inside unquoted values are
/// plain text.
fn start_tag_len(tag: &[u8]) -> Option<usize> {
    let mut quote = None;
    let mut after_eq = false;
    for (i, &b) in tag.iter().enumerate().skip(1) {
        match quote {
            Some(q) if b == q => quote = None,
            Some(_) => continue,
            None => match b {
                b'"' | b'\'' if after_eq => {
                    quote = Some(b);
                    continue;
                }
                b'>' => return Some(i + 1),
                _ => {}
            },
        }
        if !b.is_ascii_whitespace() {
            after_eq = b == b'=';
        }
    }
    None
}

/// Offset of the `</name>` that ends `raw`, if the element was closed.
fn end_tag_start(raw: &str, name: &str) -> Option<usize> {
    let body = raw.strip_suffix('>')?;
    let close = body.rfind("</")?;
    body[close + 2..]
        .trim_end()
        .eq_ignore_ascii_case(name)
        .then_some(close)
}

fn is_void(name: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(name))
}

fn attr(tag: &tl::HTMLTag<'_>, name: &'static str) -> Option<String> {
    tag.attributes()
        .get(name)
        .flatten()
        .map(|v| v.as_utf8_str().into_owned())
}

pub fn find_by_class(html: &str, class: &str) -> Option<ElementSpan> {
    find_element(html, |t| {
        attr(t, "class").is_some_and(|v| v.split_ascii_whitespace().any(|c| c == class))
    })
}

pub fn find_by_id(html: &str, id: &str) -> Option<ElementSpan> {
    find_element(html, |t| attr(t, "id").as_deref() == Some(id))
}

pub fn find_by_tag(html: &str, name: &str) -> Option<ElementSpan> {
    find_element(html, |t| t.name().as_utf8_str().eq_ignore_ascii_case(name))
}

/// Copy of `html` with the content of `span` replaced by `inner`.
pub fn replace_inner(html: &str, span: ElementSpan, inner: &str) -> String {
    let mut out = String::with_capacity(html.len() + inner.len());
    out.push_str(&html[..span.inner_start]);
    out.push_str(inner);
    out.push_str(&html[span.inner_end..]);
    out
}

/// Copy of `html` with `child` inserted right after the start tag of `span`.
pub fn insert_first_child(html: &str, span: ElementSpan, child: &str) -> String {
    let mut out = String::with_capacity(html.len() + child.len());
    out.push_str(&html[..span.inner_start]);
    out.push_str(child);
    out.push_str(&html[span.inner_start..]);
    out
}

#[cfg(test)]
#[path = "../../tests/unit/site/markup.rs"]
mod tests;
