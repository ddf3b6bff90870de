use pagelens::extractor;
use pagelens::models::{ScrapedPage, SeoMetadata};
use pagelens::reporter::Reporter;
use url::Url;

fn empty_page() -> ScrapedPage {
    ScrapedPage {
        title: String::new(),
        html_content: String::new(),
        css_content: Default::default(),
        js_content: Default::default(),
        links: Vec::new(),
        seo_metadata: SeoMetadata::default(),
    }
}

#[test]
fn test_report_renders_for_empty_page() {
    let report = Reporter::render_seo_report(&empty_page(), "https://example.com/");

    assert!(report.contains("SEO Analysis Report for: https://example.com/"));
    assert!(report.contains("Title: No title found"));
    assert!(report.contains("Canonical URL: Not found"));
    assert!(report.contains("Language: Not specified"));
    assert!(report.contains("Word Count: 0"));
    assert!(report.contains("Alt Text Coverage: 0.0%"));
}

#[test]
fn test_report_mandatory_sections_always_present() {
    let report = Reporter::render_seo_report(&empty_page(), "https://example.com/");

    for section in [
        "BASIC SEO INFORMATION",
        "META TAGS",
        "HEADINGS STRUCTURE",
        "IMAGES ANALYSIS",
        "LINKS ANALYSIS",
        "CONTENT ANALYSIS",
        "PAGE SPEED INDICATORS",
    ] {
        assert!(report.contains(section), "missing section: {}", section);
    }

    // Conditional sections are omitted when there is nothing to show
    assert!(!report.contains("OPEN GRAPH TAGS"));
    assert!(!report.contains("TWITTER CARD TAGS"));
    assert!(!report.contains("STRUCTURED DATA"));
    assert!(!report.contains("RSS FEEDS"));
}

#[test]
fn test_report_conditional_sections() {
    let html = r#"<html><head>
        <title>Acme Widgets</title>
        <meta property="og:title" content="Acme">
        <meta name="twitter:card" content="summary">
        <link rel="alternate" type="application/rss+xml" title="Feed" href="/feed.xml">
        <script type="application/ld+json">{"@type": "Organization"}</script>
    </head><body>
        <h1>Acme Widgets</h1>
        <p>Quality widgets since forever.</p>
    </body></html>"#;
    let url = Url::parse("https://example.com/").expect("Failed to parse base URL");
    let page = extractor::extract_page(html, &url);
    let report = Reporter::render_seo_report(&page, url.as_str());

    assert!(report.contains("Title: Acme Widgets"));
    assert!(report.contains("OPEN GRAPH TAGS"));
    assert!(report.contains("og:title: Acme"));
    assert!(report.contains("TWITTER CARD TAGS"));
    assert!(report.contains("H1 Headings (1):"));
    assert!(report.contains("Found 1 structured data blocks"));
    assert!(report.contains("Block 1: object"));
    assert!(report.contains("RSS FEEDS"));
    assert!(report.contains("URL: /feed.xml"));
}

#[test]
fn test_report_keyword_ranking_capped_at_ten() {
    let words: String = (0..15usize)
        .map(|i| format!("keyword{} ", i).repeat(15 - i))
        .collect();
    let html = format!("<html><body><p>{}</p></body></html>", words);
    let url = Url::parse("https://example.com/").expect("Failed to parse base URL");
    let page = extractor::extract_page(&html, &url);
    let report = Reporter::render_seo_report(&page, url.as_str());

    assert!(report.contains("Top Keywords (by frequency):"));
    assert!(report.contains("1. keyword0: 15 times"));
    assert!(report.contains("10. keyword9: 6 times"));
    assert!(!report.contains("11. keyword10"));
}

#[test]
fn test_display_title_fallback() {
    let mut page = empty_page();
    assert_eq!(Reporter::display_title(&page), "No title found");

    page.title = "Real title".to_string();
    assert_eq!(Reporter::display_title(&page), "Real title");
}
