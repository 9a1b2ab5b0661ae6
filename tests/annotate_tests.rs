//! Annotation tests
//!
//! These tests run whole documents through the annotator and inspect the
//! re-parsed output.

use algoviz_seo::annotate::{annotate, DocumentAnnotator, JSON_LD_TYPE};
use algoviz_seo::error::{AnnotationError, Error};
use algoviz_seo::SiteConfig;
use pretty_assertions::assert_eq;
use scraper::{ElementRef, Html, Selector};

const MERGE_SORT: &str = "<html><head><title>Merge Sort</title></head><body></body></html>";

fn select_all<'a>(doc: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    let selector = Selector::parse(css).unwrap();
    doc.select(&selector).collect()
}

/// Head children as `tag` or `tag:name/property/rel`
fn head_outline(doc: &Html) -> Vec<String> {
    let head = select_all(doc, "head").remove(0);
    head.children()
        .filter_map(ElementRef::wrap)
        .map(|el| {
            let v = el.value();
            match v
                .attr("name")
                .or_else(|| v.attr("property"))
                .or_else(|| v.attr("rel"))
                .or_else(|| v.attr("type"))
            {
                Some(key) => format!("{}:{}", v.name(), key),
                None => v.name().to_string(),
            }
        })
        .collect()
}

#[test]
fn test_merge_sort_end_to_end() {
    let config = SiteConfig::default();
    let out = annotate(MERGE_SORT, "merge_sort.html", &config).unwrap();
    let doc = Html::parse_document(&out);

    assert_eq!(
        head_outline(&doc),
        vec![
            "meta:description",
            "meta:keywords",
            "title",
            "meta:og:title",
            "meta:og:description",
            "meta:og:type",
            "meta:og:url",
            "meta:og:site_name",
            "meta:twitter:card",
            "meta:twitter:title",
            "meta:twitter:description",
            "meta:twitter:site",
            "link:canonical",
            "script:application/ld+json",
        ]
    );

    let desc = select_all(&doc, r#"meta[name="description"]"#);
    assert_eq!(
        desc[0].value().attr("content"),
        Some("Learn about sorting algorithms and their implementations with interactive visualizations")
    );

    let og_title = select_all(&doc, r#"meta[property="og:title"]"#);
    assert_eq!(og_title[0].value().attr("content"), Some("Merge Sort"));

    let canonical = select_all(&doc, r#"link[rel="canonical"]"#);
    assert_eq!(canonical.len(), 1);
    assert_eq!(
        canonical[0].value().attr("href"),
        Some("https://sgkandale.github.io/merge_sort.html")
    );

    let html = select_all(&doc, "html");
    assert_eq!(html[0].value().attr("lang"), Some("en"));
}

#[test]
fn test_json_ld_is_valid() {
    let config = SiteConfig::default();
    let out = annotate(MERGE_SORT, "merge_sort.html", &config).unwrap();
    let doc = Html::parse_document(&out);

    let scripts = select_all(&doc, &format!(r#"script[type="{}"]"#, JSON_LD_TYPE));
    assert_eq!(scripts.len(), 1);

    let text: String = scripts[0].text().collect();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    for key in [
        "@context",
        "@type",
        "headline",
        "description",
        "author",
        "publisher",
        "mainEntityOfPage",
    ] {
        assert!(value.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["headline"], "Merge Sort");
}

#[test]
fn test_existing_description_is_kept() {
    let config = SiteConfig::default();
    let src = r#"<html><head><meta name="description" content="X"><title>T</title></head><body></body></html>"#;
    let out = annotate(src, "bubble_sort.html", &config).unwrap();
    let doc = Html::parse_document(&out);

    let desc = select_all(&doc, r#"meta[name="description"]"#);
    assert_eq!(desc.len(), 1);
    assert_eq!(desc[0].value().attr("content"), Some("X"));

    // keywords still lands at position 1, after the existing description
    assert_eq!(&head_outline(&doc)[..3], &["meta:description", "meta:keywords", "title"]);
}

#[test]
fn test_lang_attribute() {
    let config = SiteConfig::default();

    let out = annotate(MERGE_SORT, "a.html", &config).unwrap();
    assert!(out.contains(r#"<html lang="en">"#), "{out}");

    let src = r#"<html lang="fr"><head></head><body></body></html>"#;
    let out = annotate(src, "a.html", &config).unwrap();
    let doc = Html::parse_document(&out);
    assert_eq!(select_all(&doc, "html")[0].value().attr("lang"), Some("fr"));
}

#[test]
fn test_missing_title_uses_default() {
    let config = SiteConfig::default();
    let out = annotate(
        "<html><head></head><body></body></html>",
        "unknown_topic.html",
        &config,
    )
    .unwrap();
    let doc = Html::parse_document(&out);

    let tw_title = select_all(&doc, r#"meta[name="twitter:title"]"#);
    assert_eq!(
        tw_title[0].value().attr("content"),
        Some("Algorithm Visualization")
    );
    let desc = select_all(&doc, r#"meta[name="description"]"#);
    assert_eq!(
        desc[0].value().attr("content"),
        Some("Interactive algorithm visualization platform for learning computer science concepts")
    );
}

#[test]
fn test_idempotent() {
    let config = SiteConfig::default();
    let sources = [
        MERGE_SORT,
        "<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"utf-8\">\n  <title>Raft</title>\n</head>\n<body>\n  <h1>Raft</h1>\n</body>\n</html>\n",
        r#"<html lang="de"><head><link rel="canonical" href="/x"></head><body><p>a &amp; b</p></body></html>"#,
        "<html><head><title>The <head> element</title></head><body><script>document.write('<body class=x>');</script></body></html>",
    ];

    for src in sources {
        let once = annotate(src, "raft_consensus.html", &config).unwrap();
        let (twice, report) = DocumentAnnotator::new(&config)
            .annotate_with_report(&once, "raft_consensus.html")
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(once, twice);
    }
}

#[test]
fn test_tag_like_text_is_not_structure() {
    let config = SiteConfig::default();
    let sources = [
        "<html><head><title>The &lt;head&gt; element</title></head><body></body></html>",
        "<html><head><title><html/ and <head></title></head><body></body></html>",
        "<html><head></head><body><script>el.innerHTML = '<body class=x>';</script></body></html>",
        r#"<html><head><meta name="note" content="<head>"></head><body><textarea><body></textarea></body></html>"#,
    ];

    for src in sources {
        let once = annotate(src, "dom_basics.html", &config).unwrap();
        let twice = annotate(&once, "dom_basics.html", &config).unwrap();
        assert_eq!(once, twice);
        let doc = Html::parse_document(&once);
        assert_eq!(select_all(&doc, r#"meta[property="og:title"]"#).len(), 1);
    }
}

#[test]
fn test_custom_site_config() {
    let config = SiteConfig::builder()
        .base_url("https://example.org/viz/")
        .site_name("Example Viz")
        .twitter_handle("@example")
        .author("Ada Lovelace")
        .lang("en-GB")
        .build();
    let out = annotate(MERGE_SORT, "heap_sort.html", &config).unwrap();
    let doc = Html::parse_document(&out);

    let og_url = select_all(&doc, r#"meta[property="og:url"]"#);
    assert_eq!(
        og_url[0].value().attr("content"),
        Some("https://example.org/viz/heap_sort.html")
    );
    let site = select_all(&doc, r#"meta[name="twitter:site"]"#);
    assert_eq!(site[0].value().attr("content"), Some("@example"));
    assert!(out.contains("Ada Lovelace"));
    assert_eq!(select_all(&doc, "html")[0].value().attr("lang"), Some("en-GB"));
}

#[test]
fn test_malformed_documents() {
    let config = SiteConfig::default();

    let err = annotate("<html><body></body></html>", "a.html", &config).unwrap_err();
    assert!(matches!(
        err,
        Error::Annotation(AnnotationError::MissingElement("head"))
    ));

    let err = annotate(
        "<html><head></head><body></body></html><html></html>",
        "a.html",
        &config,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        Error::Annotation(AnnotationError::DuplicateElement { tag: "html", .. })
    ));
}
