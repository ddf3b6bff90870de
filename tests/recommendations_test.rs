use pagelens::analyzer;
use pagelens::models::{LinkInfo, Priority, ScrapedPage, SeoMetadata};
use pagelens::recommendations;

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
fn test_thin_content_fires_both_rules() {
    let mut page = empty_page();
    page.seo_metadata.word_count = 250;

    let analysis = analyzer::analyze_page(&page);
    let recs = &analysis.recommendations;

    // Low word count and low richness are separate rules; both fire
    assert!(recs.contains(
        &"Add more content - aim for at least 300 words for better SEO".to_string()
    ));
    assert!(recs.contains(&"Enhance content depth with more detailed information".to_string()));
}

#[test]
fn test_external_heavy_link_profile() {
    let mut page = empty_page();
    for _ in 0..5 {
        page.seo_metadata.internal_links.push(LinkInfo::default());
    }
    for _ in 0..10 {
        page.seo_metadata.external_links.push(LinkInfo::default());
    }

    let analysis = analyzer::analyze_page(&page);
    assert!(analysis.recommendations.contains(
        &"Balance internal vs external links - prioritize internal linking".to_string()
    ));
}

#[test]
fn test_internal_heavy_link_profile_passes() {
    let mut page = empty_page();
    for _ in 0..10 {
        page.seo_metadata.internal_links.push(LinkInfo::default());
    }
    for _ in 0..5 {
        page.seo_metadata.external_links.push(LinkInfo::default());
    }

    let analysis = analyzer::analyze_page(&page);
    assert!(!analysis.recommendations.contains(
        &"Balance internal vs external links - prioritize internal linking".to_string()
    ));
}

#[test]
fn test_missing_hierarchy_recommendation() {
    let page = empty_page();
    let analysis = analyzer::analyze_page(&page);

    assert!(analysis.recommendations.contains(
        &"Optimize heading hierarchy - use one H1 and proper H2-H6 structure".to_string()
    ));
    assert!(analysis
        .recommendations
        .contains(&"Add social media links for better engagement".to_string()));
}

#[test]
fn test_page_recommendations_for_problem_page() {
    let mut page = empty_page();
    page.seo_metadata.word_count = 100;
    for _ in 0..2 {
        page.seo_metadata.images.push(Default::default());
    }

    let recs = recommendations::page_recommendations("https://example.com/", &page);
    assert_eq!(recs.len(), 4);

    assert_eq!(recs[0].issue, "Missing meta description");
    assert_eq!(recs[0].priority, Priority::High);
    assert_eq!(recs[0].impact_score, 85);
    assert_eq!(recs[0].category, "technical_seo");

    assert_eq!(recs[1].issue, "Missing page title");
    assert_eq!(recs[1].priority, Priority::High);
    assert_eq!(recs[1].impact_score, 90);

    assert_eq!(recs[2].issue, "2 image(s) missing alt text");
    assert_eq!(recs[2].priority, Priority::Medium);
    assert_eq!(recs[2].impact_score, 70);
    assert_eq!(recs[2].category, "content_seo");

    assert_eq!(recs[3].issue, "Low word count (100 words)");
    assert_eq!(recs[3].priority, Priority::Medium);
    assert_eq!(recs[3].impact_score, 75);

    for rec in &recs {
        assert_eq!(rec.page_url, "https://example.com/");
        assert!(!rec.guidelines.is_empty());
    }
}

#[test]
fn test_page_recommendations_for_healthy_page() {
    let mut page = empty_page();
    page.title = "A descriptive title".to_string();
    page.seo_metadata
        .meta_tags
        .insert("description".to_string(), "A proper description".to_string());
    page.seo_metadata.word_count = 800;

    let recs = recommendations::page_recommendations("https://example.com/", &page);
    assert!(recs.is_empty());
}

#[test]
fn test_empty_meta_description_triggers_recommendation() {
    let mut page = empty_page();
    page.title = "Title".to_string();
    page.seo_metadata
        .meta_tags
        .insert("description".to_string(), String::new());
    page.seo_metadata.word_count = 800;

    let recs = recommendations::page_recommendations("https://example.com/", &page);
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].issue, "Missing meta description");
}
