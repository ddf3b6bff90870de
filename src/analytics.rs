use crate::models::{
    AnalyticsData, AnalyticsHint, AnalyticsSummary, FacebookPixelTag, GoogleAnalyticsTag, GtmTag,
    HotjarTag, MixpanelTag, OtherTrackingTag, SocialMetaTag, TrackingIntensity,
};
use once_cell::sync::Lazy;
use regex::Regex;
use scraper::{Html, Selector};

/// Maximum length of the stored script content preview
const PREVIEW_LEN: usize = 200;

static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("script selector should be valid"));
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector should be valid"));

// ID extraction patterns. The anchor and character-class shapes matter:
// loosening them produces false positives on unrelated inline scripts.
static GA4_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"G-[A-Z0-9]{10}").expect("GA4 pattern should be valid"));
static UA_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"UA-[0-9]+-[0-9]+").expect("UA pattern should be valid"));
static GTAG_CONFIG: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"gtag\(['"](config|js)['"],\s*['"](G-[A-Z0-9]{10}|UA-[0-9]+-[0-9]+)['"]"#)
        .expect("gtag config pattern should be valid")
});
static GTM_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"GTM-[A-Z0-9]{7}").expect("GTM pattern should be valid"));
static FB_PIXEL_ID: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"fbq\(['"]init['"],\s*['"]([0-9]{9,15})['"]"#)
        .expect("Facebook Pixel pattern should be valid")
});
static HOTJAR_ID: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"hjid:\s*([0-9]+)").expect("Hotjar pattern should be valid"));
static MIXPANEL_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"mixpanel\.init\(['"]([a-zA-Z0-9]{32})['"]"#)
        .expect("Mixpanel pattern should be valid")
});

/// Tools detected by presence alone, without ID extraction
const OTHER_TRACKING_TOOLS: [&str; 5] = ["clarity", "crazyegg", "optimizely", "vwo", "abtasty"];

/// Coarse script patterns for the lightweight `analytics` hint list
const HINT_PATTERNS: [&str; 9] = [
    "google-analytics",
    "gtag",
    "ga(",
    "googletagmanager",
    "facebook",
    "fbq",
    "pixel",
    "hotjar",
    "mixpanel",
];

/// Scans every script element and fingerprints known tracking tools.
///
/// Each script runs through an ordered classification chain and lands in at
/// most one tool bucket. A tool record is only kept when its identifying
/// token could be extracted, except for the "other" bucket which is kept on
/// presence alone.
pub fn extract_analytics(document: &Html) -> AnalyticsData {
    let mut data = AnalyticsData::default();

    for script in document.select(&SCRIPT_SELECTOR) {
        let content: String = script.text().collect();
        let src = script.value().attr("src").unwrap_or_default().to_string();

        if matches_any(&content, &src, &["gtag", "ga(", "google-analytics"]) {
            if let Some(tag) = google_analytics_tag(&content, &src) {
                data.google_analytics.push(tag);
            }
        } else if matches_any(&content, &src, &["googletagmanager"]) {
            if let Some(id) = GTM_ID.find(&content) {
                data.google_tag_manager.push(GtmTag {
                    tag_type: "google_tag_manager".to_string(),
                    container_id: id.as_str().to_string(),
                    content_preview: preview(&content),
                    src: src.clone(),
                });
            }
        } else if content.contains("fbq") || src.contains("facebook") {
            if let Some(captures) = FB_PIXEL_ID.captures(&content) {
                data.facebook_pixel.push(FacebookPixelTag {
                    tag_type: "facebook_pixel".to_string(),
                    pixel_id: captures[1].to_string(),
                    content_preview: preview(&content),
                    src: src.clone(),
                });
            }
        } else if content.contains("hotjar") || src.contains("hotjar") {
            if let Some(captures) = HOTJAR_ID.captures(&content) {
                data.hotjar.push(HotjarTag {
                    tag_type: "hotjar".to_string(),
                    site_id: captures[1].to_string(),
                    content_preview: preview(&content),
                    src: src.clone(),
                });
            }
        } else if content.contains("mixpanel") || src.contains("mixpanel") {
            if let Some(captures) = MIXPANEL_TOKEN.captures(&content) {
                data.mixpanel.push(MixpanelTag {
                    tag_type: "mixpanel".to_string(),
                    project_token: captures[1].to_string(),
                    content_preview: preview(&content),
                    src: src.clone(),
                });
            }
        } else {
            let lowered = content.to_lowercase();
            if OTHER_TRACKING_TOOLS
                .iter()
                .any(|tool| lowered.contains(tool))
            {
                data.other_tracking.push(OtherTrackingTag {
                    tag_type: "other_tracking".to_string(),
                    content_preview: preview(&content),
                    src: src.clone(),
                });
            }
        }
    }

    // Social-platform meta tags are collected independently of the script
    // chain and do not count toward the tool total
    for meta in document.select(&META_SELECTOR) {
        let name = meta
            .value()
            .attr("name")
            .or_else(|| meta.value().attr("property"))
            .unwrap_or_default();
        let content = meta.value().attr("content").unwrap_or_default();
        let lowered = name.to_lowercase();

        if lowered.contains("facebook") || lowered.contains("fb:") {
            data.social_media_tracking.push(SocialMetaTag {
                tag_type: "facebook_meta".to_string(),
                name: name.to_string(),
                content: content.to_string(),
            });
        } else if lowered.contains("twitter") {
            data.social_media_tracking.push(SocialMetaTag {
                tag_type: "twitter_meta".to_string(),
                name: name.to_string(),
                content: content.to_string(),
            });
        }
    }

    let total = data.google_analytics.len()
        + data.facebook_pixel.len()
        + data.google_tag_manager.len()
        + data.hotjar.len()
        + data.mixpanel.len()
        + data.other_tracking.len();

    data.analytics_summary = AnalyticsSummary {
        total_tracking_tools: total,
        has_google_analytics: !data.google_analytics.is_empty(),
        has_facebook_pixel: !data.facebook_pixel.is_empty(),
        has_gtm: !data.google_tag_manager.is_empty(),
        has_hotjar: !data.hotjar.is_empty(),
        has_mixpanel: !data.mixpanel.is_empty(),
        has_social_tracking: !data.social_media_tracking.is_empty(),
        tracking_intensity: TrackingIntensity::from_total_tools(total),
    };

    data
}

/// Collects the lightweight analytics hint list: per script, the first coarse
/// pattern matching the lower-cased inline text or src.
pub fn script_hints(document: &Html) -> Vec<AnalyticsHint> {
    let mut hints = Vec::new();

    for script in document.select(&SCRIPT_SELECTOR) {
        let content: String = script.text().collect();
        let src = script.value().attr("src").unwrap_or_default().to_string();
        let content_lower = content.to_lowercase();
        let src_lower = src.to_lowercase();

        for pattern in HINT_PATTERNS {
            if content_lower.contains(pattern) || src_lower.contains(pattern) {
                hints.push(AnalyticsHint {
                    pattern: pattern.to_string(),
                    src: src.clone(),
                    content_preview: preview(&content),
                });
                break;
            }
        }
    }

    hints
}

fn matches_any(content: &str, src: &str, needles: &[&str]) -> bool {
    needles
        .iter()
        .any(|needle| content.contains(needle) || src.contains(needle))
}

fn google_analytics_tag(content: &str, src: &str) -> Option<GoogleAnalyticsTag> {
    let mut version = "unknown";
    let mut measurement_id = None;
    let mut tracking_id = None;

    if let Some(id) = GA4_ID.find(content) {
        measurement_id = Some(id.as_str().to_string());
        version = "GA4";
    }
    if let Some(id) = UA_ID.find(content) {
        tracking_id = Some(id.as_str().to_string());
        version = "Universal Analytics";
    }

    // Fall back to the ID inside a gtag('config'|'js', ...) call
    if measurement_id.is_none()
        && tracking_id.is_none()
        && let Some(captures) = GTAG_CONFIG.captures(content)
    {
        let id = captures[2].to_string();
        if id.starts_with("G-") {
            measurement_id = Some(id);
            version = "GA4";
        } else {
            tracking_id = Some(id);
            version = "Universal Analytics";
        }
    }

    // A triggered script without an extractable ID produces no record
    if measurement_id.is_none() && tracking_id.is_none() {
        return None;
    }

    Some(GoogleAnalyticsTag {
        tag_type: "google_analytics".to_string(),
        version: version.to_string(),
        tracking_id,
        measurement_id,
        content_preview: preview(content),
        src: src.to_string(),
    })
}

fn preview(content: &str) -> String {
    if content.chars().count() > PREVIEW_LEN {
        let truncated: String = content.chars().take(PREVIEW_LEN).collect();
        format!("{}...", truncated)
    } else {
        content.to_string()
    }
}
