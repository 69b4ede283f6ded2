use super::*;

fn record() -> ExperienceRecord {
    ExperienceRecord {
        title: "Backend Engineer".to_owned(),
        company: "Acme".to_owned(),
        location: Some("Lyon".to_owned()),
        start: "2022-03".to_owned(),
        end: "present".to_owned(),
        bullets: vec!["Shipped the billing service".to_owned()],
        tags: vec!["Rust".to_owned(), "Postgres".to_owned()],
        icon: Some("fa-code".to_owned()),
    }
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_experiences(&[]), "");
}

#[test]
fn renders_fields_in_place() {
    let html = render_experience(&record());
    assert!(html.starts_with(r#"<article class="experience-item" role="listitem">"#));
    assert!(html.ends_with("</article>"));
    assert!(html.contains(r#"<i class="fas fa-code"></i>"#));
    assert!(html.contains("<h3>Backend Engineer</h3>"));
    assert!(html.contains("<strong>Acme</strong> • Lyon"));
    assert!(html.contains("Mar 2022 — Present"));
    assert!(html.contains("<li>Shipped the billing service</li>"));
    assert!(html.contains(
        r#"<span class="exp-tag">Rust</span><span class="exp-tag">Postgres</span>"#
    ));
}

#[test]
fn records_keep_input_order() {
    let mut second = record();
    second.title = "Second".to_owned();
    let html = render_experiences(&[record(), second]);
    let first_at = html.find("Backend Engineer").unwrap();
    let second_at = html.find("Second").unwrap();
    assert!(first_at < second_at);
    assert_eq!(html.matches(r#"role="listitem""#).count(), 2);
    assert!(html.contains("</article>\n<article"));
}

#[test]
fn missing_icon_and_location_use_defaults() {
    let mut r = record();
    r.icon = None;
    r.location = None;
    let html = render_experience(&r);
    assert!(html.contains(r#"<i class="fas fa-briefcase"></i>"#));
    assert!(html.contains("<strong>Acme</strong> • </p>"));
}

#[test]
fn every_user_string_is_escaped() {
    let evil = r#"<img src=x onerror="alert('x')"> & more"#;
    let r = ExperienceRecord {
        title: evil.to_owned(),
        company: evil.to_owned(),
        location: Some(evil.to_owned()),
        start: evil.to_owned(),
        end: "present".to_owned(),
        bullets: vec![evil.to_owned()],
        tags: vec![evil.to_owned()],
        icon: Some(r#"fa-x" onclick="steal()"#.to_owned()),
    };
    let html = render_experience(&r);
    assert!(!html.contains("<img"));
    assert!(!html.contains("onerror=\""));
    assert!(!html.contains("onclick=\""));
    assert!(!html.contains("'x'"));
    assert!(!html.contains(" & more"));
    assert!(html.contains("&lt;img src=x onerror=&quot;alert(&#39;x&#39;)&quot;&gt; &amp; more"));
}
