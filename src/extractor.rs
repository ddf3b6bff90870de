use crate::analytics;
use crate::keywords;
use crate::models::{
    CssContent, FeedInfo, ImageInfo, JsContent, LinkInfo, PageSpeedIndicators, ScrapedPage,
    SeoMetadata,
};
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use url::Url;

// Cached selectors to avoid repeated parsing and eliminate unwrap() calls
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("title selector should be valid"));
static META_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("meta").expect("meta selector should be valid"));
static LINK_TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("link").expect("link selector should be valid"));
static JSON_LD_SELECTOR: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"script[type="application/ld+json"]"#)
        .expect("JSON-LD selector should be valid")
});
static IMG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img").expect("img selector should be valid"));
static ANCHOR_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a[href]").expect("anchor selector should be valid"));
static SCRIPT_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("script").expect("script selector should be valid"));
static STYLE_TAG_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("style").expect("style selector should be valid"));
static STYLED_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[style]").expect("style attribute selector should be valid"));
static HEADING_SELECTORS: Lazy<Vec<Selector>> = Lazy::new(|| {
    (1..=6)
        .map(|level| {
            Selector::parse(&format!("h{}", level)).expect("heading selector should be valid")
        })
        .collect()
});

/// Hosts matched by substring to flag a link as pointing at a social platform
const SOCIAL_DOMAINS: [&str; 8] = [
    "facebook.com",
    "twitter.com",
    "instagram.com",
    "linkedin.com",
    "youtube.com",
    "tiktok.com",
    "pinterest.com",
    "reddit.com",
];

/// Parses the fetched HTML and builds the full scraped-page record: raw
/// content inventories plus structured SEO metadata.
pub fn extract_page(html: &str, url: &Url) -> ScrapedPage {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE_SELECTOR)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .unwrap_or_default();

    let css_content = extract_css_content(&document);
    let js_content = extract_js_content(&document);

    let links = document
        .select(&ANCHOR_SELECTOR)
        .filter_map(|el| el.value().attr("href"))
        .map(str::to_string)
        .collect();

    let seo_metadata = extract_seo_metadata(&document, url);

    ScrapedPage {
        title,
        html_content: html.to_string(),
        css_content,
        js_content,
        links,
        seo_metadata,
    }
}

/// Extracts the structured SEO metadata from a parsed document.
///
/// Malformed per-element data (such as invalid JSON-LD) is skipped at element
/// granularity; the result is always structurally complete.
pub fn extract_seo_metadata(document: &Html, url: &Url) -> SeoMetadata {
    let mut seo = SeoMetadata::default();

    extract_meta_tags(document, &mut seo);
    extract_link_tags(document, &mut seo);
    extract_structured_data(document, &mut seo);
    extract_headings(document, &mut seo);
    extract_images(document, &mut seo);
    extract_links(document, url, &mut seo);

    seo.analytics = analytics::script_hints(document);
    seo.detailed_analytics = analytics::extract_analytics(document);

    let text: String = document.root_element().text().collect();
    let stats = keywords::analyze(&text);
    seo.word_count = stats.word_count;
    seo.keyword_density = stats.keyword_density;

    seo.page_speed_indicators = PageSpeedIndicators {
        total_images: seo.images.len(),
        images_without_alt: seo.images.iter().filter(|img| img.alt.is_empty()).count(),
        total_scripts: document.select(&SCRIPT_SELECTOR).count(),
        total_stylesheets: document
            .select(&LINK_TAG_SELECTOR)
            .filter(|el| rel_contains(el, "stylesheet"))
            .count(),
        inline_styles: document.select(&STYLED_SELECTOR).count(),
        total_links: seo.internal_links.len() + seo.external_links.len(),
    };

    seo
}

fn extract_meta_tags(document: &Html, seo: &mut SeoMetadata) {
    for meta in document.select(&META_SELECTOR) {
        // Candidate key attributes in priority order
        let name = meta
            .value()
            .attr("name")
            .or_else(|| meta.value().attr("property"))
            .unwrap_or_default();
        let content = meta.value().attr("content").unwrap_or_default();

        if name.is_empty() {
            continue;
        }

        // Insert-or-replace: a later duplicate key overwrites the earlier
        // content but keeps its original position
        seo.meta_tags.insert(name.to_string(), content.to_string());

        if name.starts_with("og:") {
            seo.open_graph.insert(name.to_string(), content.to_string());
        } else if name.starts_with("twitter:") {
            seo.twitter_cards
                .insert(name.to_string(), content.to_string());
        } else if name == "robots" {
            seo.robots_directive = Some(content.to_string());
        } else if name == "viewport" {
            seo.viewport = Some(content.to_string());
        } else if name == "charset" {
            seo.charset = Some(content.to_string());
        } else if name == "language" {
            seo.language = Some(content.to_string());
        }
    }
}

fn extract_link_tags(document: &Html, seo: &mut SeoMetadata) {
    for link in document.select(&LINK_TAG_SELECTOR) {
        let rel = link.value().attr("rel").unwrap_or_default();
        let href = link.value().attr("href").map(str::to_string);

        if seo.canonical_url.is_none() && rel_contains(&link, "canonical") {
            seo.canonical_url = href.clone();
        }
        if seo.favicon.is_none() && rel == "icon" {
            seo.favicon = href.clone();
        }
        if seo.sitemap.is_none() && rel_contains(&link, "sitemap") {
            seo.sitemap = href.clone();
        }

        if rel_contains(&link, "alternate") {
            let feed_type = link.value().attr("type").unwrap_or_default();
            if feed_type == "application/rss+xml" || feed_type == "application/atom+xml" {
                seo.rss_feeds.push(FeedInfo {
                    href: href.clone().unwrap_or_default(),
                    title: link.value().attr("title").map(str::to_string),
                    feed_type: feed_type.to_string(),
                });
            }
        }
    }

    // Legacy favicon declaration, only consulted when no rel="icon" exists
    if seo.favicon.is_none() {
        seo.favicon = document
            .select(&LINK_TAG_SELECTOR)
            .find(|el| el.value().attr("rel") == Some("shortcut icon"))
            .and_then(|el| el.value().attr("href"))
            .map(str::to_string);
    }
}

fn extract_structured_data(document: &Html, seo: &mut SeoMetadata) {
    for script in document.select(&JSON_LD_SELECTOR) {
        let raw: String = script.text().collect();
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => seo.structured_data.push(value),
            Err(error) => {
                tracing::debug!(error = %error, "Skipping invalid JSON-LD block");
            }
        }
    }
}

fn extract_headings(document: &Html, seo: &mut SeoMetadata) {
    for (index, selector) in HEADING_SELECTORS.iter().enumerate() {
        let texts: Vec<String> = document
            .select(selector)
            .map(|el| el.text().collect::<String>().trim().to_string())
            .collect();
        seo.headings.insert(format!("h{}", index + 1), texts);
    }
}

fn extract_images(document: &Html, seo: &mut SeoMetadata) {
    for img in document.select(&IMG_SELECTOR) {
        let attr = |name: &str| img.value().attr(name).unwrap_or_default().to_string();
        seo.images.push(ImageInfo {
            src: attr("src"),
            alt: attr("alt"),
            title: attr("title"),
            width: img.value().attr("width").map(str::to_string),
            height: img.value().attr("height").map(str::to_string),
            loading: attr("loading"),
            decoding: attr("decoding"),
        });
    }
}

fn extract_links(document: &Html, url: &Url, seo: &mut SeoMetadata) {
    for anchor in document.select(&ANCHOR_SELECTOR) {
        let Some(href) = anchor.value().attr("href") else {
            continue;
        };

        let resolved_url = resolve_href(url, href);

        let link = LinkInfo {
            href: href.to_string(),
            resolved_url: resolved_url.clone(),
            text: anchor.text().collect::<String>().trim().to_string(),
            rel: anchor
                .value()
                .attr("rel")
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect(),
            target: anchor.value().attr("target").unwrap_or_default().to_string(),
        };

        let host = Url::parse(&resolved_url)
            .ok()
            .and_then(|u| u.host_str().map(str::to_string));

        if host.as_deref() == url.host_str() {
            seo.internal_links.push(link);
        } else {
            // Substring containment deliberately also matches subdomains
            // like www.facebook.com or m.youtube.com
            let is_social = host
                .as_deref()
                .is_some_and(|h| SOCIAL_DOMAINS.iter().any(|domain| h.contains(domain)));
            if is_social {
                seo.social_links.push(link.clone());
            }
            seo.external_links.push(link);
        }
    }
}

/// Resolves an href against the page URL, with dedicated paths for
/// root-relative and already-absolute values.
fn resolve_href(base: &Url, href: &str) -> String {
    if href.starts_with('/') {
        base.join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    } else if href.starts_with("http") {
        href.to_string()
    } else {
        base.join(href)
            .map(|u| u.to_string())
            .unwrap_or_else(|_| href.to_string())
    }
}

fn extract_css_content(document: &Html) -> CssContent {
    CssContent {
        inline_styles: document
            .select(&STYLED_SELECTOR)
            .filter_map(|el| el.value().attr("style"))
            .map(str::to_string)
            .collect(),
        internal_stylesheets: document
            .select(&STYLE_TAG_SELECTOR)
            .map(|el| el.text().collect::<String>())
            .filter(|text| !text.is_empty())
            .collect(),
        external_stylesheets: document
            .select(&LINK_TAG_SELECTOR)
            .filter(|el| rel_contains(el, "stylesheet"))
            .filter_map(|el| el.value().attr("href"))
            .map(str::to_string)
            .collect(),
    }
}

fn extract_js_content(document: &Html) -> JsContent {
    let mut inline_scripts = Vec::new();
    let mut external_scripts = Vec::new();

    for script in document.select(&SCRIPT_SELECTOR) {
        let text: String = script.text().collect();
        if !text.is_empty() {
            inline_scripts.push(text);
        }
        if let Some(src) = script.value().attr("src") {
            external_scripts.push(src.to_string());
        }
    }

    JsContent {
        inline_scripts,
        external_scripts,
    }
}

/// Word-match on the space-separated rel attribute
fn rel_contains(element: &ElementRef, value: &str) -> bool {
    element
        .value()
        .attr("rel")
        .is_some_and(|rel| rel.split_whitespace().any(|token| token == value))
}
