use super::*;

const PAGE: &str = r#"<!doctype html>
<html>
<body class="page">
  <!-- <section class="hero">commented out</section> -->
  <section class="hero intro" id="top">
    <div><div>nested</div></div>
    <img src="me.png" alt="a > b">
  </section>
  <script>console.log("ready")</script>
  <div class='experience-timeline'>old</div>
</body>
</html>"#;

#[test]
fn class_lookup_skips_comments_and_matches_token() {
    let span = find_by_class(PAGE, "hero").unwrap();
    let open = &PAGE[span.open_start..span.inner_start];
    assert!(open.starts_with(r#"<section class="hero intro""#));
    assert!(span.inner(PAGE).contains("nested"));
    assert_eq!(&PAGE[span.inner_end..span.close_end], "</section>");

    assert!(find_by_class(PAGE, "her").is_none());
}

#[test]
fn nested_same_name_elements_close_correctly() {
    let html = "<div class=\"a\"><div>x</div><div>y</div></div><div>z</div>";
    let span = find_by_class(html, "a").unwrap();
    assert_eq!(span.inner(html), "<div>x</div><div>y</div>");
    assert_eq!(span.close_end, html.find("<div>z").unwrap());
}

#[test]
fn id_and_tag_lookups() {
    let span = find_by_id(PAGE, "top").unwrap();
    assert_eq!(span, find_by_class(PAGE, "intro").unwrap());

    let body = find_by_tag(PAGE, "BODY").unwrap();
    assert!(body.inner(PAGE).contains("experience-timeline"));

    let img = find_by_tag(PAGE, "img").unwrap();
    assert_eq!(img.inner_start, img.inner_end);
    assert!(PAGE[img.open_start..img.inner_start].ends_with("alt=\"a > b\">"));
}

#[test]
fn single_quoted_and_unquoted_attributes() {
    let span = find_by_class(PAGE, "experience-timeline").unwrap();
    assert_eq!(span.inner(PAGE), "old");

    let html = "<p id=plain data-x>t</p>";
    assert_eq!(find_by_id(html, "plain").unwrap().inner(html), "t");
}

#[test]
fn apostrophe_in_unquoted_attribute_does_not_swallow_the_page() {
    let html = r#"<body><img alt=Rod's-photo><section class="hero"></section><div class="experience-timeline"></div></body>"#;

    let hero = find_by_class(html, "hero").unwrap();
    assert_eq!(&html[hero.open_start..hero.inner_start], r#"<section class="hero">"#);
    assert_eq!(hero.inner(html), "");

    let timeline = find_by_class(html, "experience-timeline").unwrap();
    assert_eq!(&html[timeline.inner_end..timeline.close_end], "</div>");

    let body = find_by_tag(html, "body").unwrap();
    assert_eq!(body.open_start, 0);
    assert_eq!(body.close_end, html.len());

    let img = find_by_tag(html, "img").unwrap();
    assert_eq!(&html[img.open_start..img.inner_start], "<img alt=Rod's-photo>");
}

#[test]
fn start_tag_length_respects_quoted_values_only() {
    assert_eq!(start_tag_len(br#"<a title="x > y">"#), Some(17));
    assert_eq!(start_tag_len(b"<a title='it''s'>"), Some(17));
    assert_eq!(start_tag_len(b"<img alt=Rod's>"), Some(15));
    assert_eq!(start_tag_len(b"<a href = 'x>y' >t"), Some(17));
    assert_eq!(start_tag_len(b"<a title=\"open"), None);
}

#[test]
fn self_closing_element_has_empty_content() {
    let html = r#"<div><span class="dot"/><p>after</p></div>"#;
    let dot = find_by_class(html, "dot").unwrap();
    assert_eq!(dot.inner_start, dot.inner_end);
    assert_eq!(&html[dot.open_start..dot.close_end], r#"<span class="dot"/>"#);
}

#[test]
fn unclosed_element_is_not_found() {
    assert!(find_by_class("<div class=\"a\">never closed", "a").is_none());
}

#[test]
fn splicing_helpers() {
    let html = "<div class=\"t\">old</div>";
    let span = find_by_class(html, "t").unwrap();
    assert_eq!(replace_inner(html, span, "new"), "<div class=\"t\">new</div>");
    assert_eq!(
        insert_first_child(html, span, "<b></b>"),
        "<div class=\"t\"><b></b>old</div>"
    );
}
