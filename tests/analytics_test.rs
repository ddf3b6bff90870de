use pagelens::extractor;
use pagelens::models::{AnalyticsData, TrackingIntensity};
use url::Url;

fn analytics_for(html: &str) -> AnalyticsData {
    let url = Url::parse("https://example.com/").expect("Failed to parse base URL");
    extractor::extract_page(html, &url)
        .seo_metadata
        .detailed_analytics
}

#[test]
fn test_ga4_gtag_config() {
    let html = r#"<html><head>
        <script>
            window.dataLayer = window.dataLayer || [];
            function gtag(){dataLayer.push(arguments);}
            gtag('js', new Date());
            gtag('config', 'G-ABCD123456');
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.google_analytics.len(), 1);
    let ga = &data.google_analytics[0];
    assert_eq!(ga.version, "GA4");
    assert_eq!(ga.measurement_id.as_deref(), Some("G-ABCD123456"));
    assert_eq!(ga.tracking_id, None);
    assert!(data.analytics_summary.has_google_analytics);
    assert_eq!(data.analytics_summary.total_tracking_tools, 1);
    assert_eq!(
        data.analytics_summary.tracking_intensity,
        TrackingIntensity::Light
    );
}

#[test]
fn test_universal_analytics() {
    let html = r#"<html><head>
        <script>
            ga('create', 'UA-12345-6', 'auto');
            ga('send', 'pageview');
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.google_analytics.len(), 1);
    let ga = &data.google_analytics[0];
    assert_eq!(ga.version, "Universal Analytics");
    assert_eq!(ga.tracking_id.as_deref(), Some("UA-12345-6"));
    assert_eq!(ga.measurement_id, None);
}

#[test]
fn test_triggered_script_without_id_yields_no_record() {
    let html = r#"<html><head>
        <script>gtag('event', 'click', {value: 1});</script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert!(data.google_analytics.is_empty());
    assert_eq!(data.analytics_summary.total_tracking_tools, 0);
    assert_eq!(
        data.analytics_summary.tracking_intensity,
        TrackingIntensity::None
    );
}

#[test]
fn test_google_tag_manager() {
    let html = r#"<html><head>
        <script>
            window.dataLayer = window.dataLayer || [];
            var src = 'https://www.googletagmanager.com/gtm.js?id=GTM-ABC1234';
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.google_tag_manager.len(), 1);
    assert_eq!(data.google_tag_manager[0].container_id, "GTM-ABC1234");
    assert!(data.analytics_summary.has_gtm);
}

#[test]
fn test_first_match_wins_for_combined_snippet() {
    // A script mentioning both gtag and googletagmanager only lands in the
    // Google Analytics bucket
    let html = r#"<html><head>
        <script>
            var s = 'https://www.googletagmanager.com/gtag/js?id=G-ABCD123456';
            gtag('config', 'G-ABCD123456');
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.google_analytics.len(), 1);
    assert!(data.google_tag_manager.is_empty());
}

#[test]
fn test_facebook_pixel() {
    let html = r#"<html><head>
        <script>
            fbq('init', '123456789012');
            fbq('track', 'PageView');
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.facebook_pixel.len(), 1);
    assert_eq!(data.facebook_pixel[0].pixel_id, "123456789012");
    assert!(data.analytics_summary.has_facebook_pixel);
}

#[test]
fn test_hotjar() {
    let html = r#"<html><head>
        <script>
            h._hjSettings = {hjid: 1234567, hjsv: 6};
            var src = 'https://static.hotjar.com/c/hotjar-';
        </script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.hotjar.len(), 1);
    assert_eq!(data.hotjar[0].site_id, "1234567");
}

#[test]
fn test_mixpanel() {
    let html = r#"<html><head>
        <script>mixpanel.init('abcdef1234567890abcdef1234567890');</script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.mixpanel.len(), 1);
    assert_eq!(
        data.mixpanel[0].project_token,
        "abcdef1234567890abcdef1234567890"
    );
}

#[test]
fn test_other_tracking_recorded_without_id() {
    let html = r#"<html><head>
        <script>window.clarity = window.clarity || function(){};</script>
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.other_tracking.len(), 1);
    assert_eq!(data.analytics_summary.total_tracking_tools, 1);
}

#[test]
fn test_social_meta_tags_do_not_count_as_tools() {
    let html = r#"<html><head>
        <meta property="fb:app_id" content="1234567890">
        <meta name="twitter:site" content="@acme">
    </head><body></body></html>"#;
    let data = analytics_for(html);

    assert_eq!(data.social_media_tracking.len(), 2);
    assert_eq!(data.social_media_tracking[0].tag_type, "facebook_meta");
    assert_eq!(data.social_media_tracking[1].tag_type, "twitter_meta");
    assert!(data.analytics_summary.has_social_tracking);
    assert_eq!(data.analytics_summary.total_tracking_tools, 0);
}

#[test]
fn test_tracking_intensity_thresholds() {
    assert_eq!(TrackingIntensity::from_total_tools(0), TrackingIntensity::None);
    assert_eq!(TrackingIntensity::from_total_tools(1), TrackingIntensity::Light);
    assert_eq!(
        TrackingIntensity::from_total_tools(2),
        TrackingIntensity::Moderate
    );
    assert_eq!(
        TrackingIntensity::from_total_tools(3),
        TrackingIntensity::Moderate
    );
    assert_eq!(TrackingIntensity::from_total_tools(4), TrackingIntensity::Heavy);
    assert_eq!(TrackingIntensity::from_total_tools(5), TrackingIntensity::Heavy);
    assert_eq!(
        TrackingIntensity::from_total_tools(6),
        TrackingIntensity::VeryHeavy
    );
    assert_eq!(TrackingIntensity::VeryHeavy.to_string(), "Very Heavy");
}

#[test]
fn test_preview_truncation() {
    let filler = "z".repeat(300);
    let html = format!(
        r#"<html><head><script>mixpanel.init('abcdef1234567890abcdef1234567890'); // {}</script></head><body></body></html>"#,
        filler
    );
    let data = analytics_for(&html);

    assert_eq!(data.mixpanel.len(), 1);
    let preview = &data.mixpanel[0].content_preview;
    assert!(preview.ends_with("..."));
    assert_eq!(preview.chars().count(), 203);
}

#[test]
fn test_script_hints_first_pattern_wins() {
    let html = r#"<html><head>
        <script src="https://www.google-analytics.com/analytics.js"></script>
        <script>gtag('config', 'G-ABCD123456');</script>
        <script>var plain = true;</script>
    </head><body></body></html>"#;
    let url = Url::parse("https://example.com/").expect("Failed to parse base URL");
    let page = extractor::extract_page(html, &url);
    let hints = &page.seo_metadata.analytics;

    // One hint per matching script, first listed pattern wins
    assert_eq!(hints.len(), 2);
    assert_eq!(hints[0].pattern, "google-analytics");
    assert_eq!(hints[0].src, "https://www.google-analytics.com/analytics.js");
    assert_eq!(hints[1].pattern, "gtag");
}
