use crate::models::{
    ContentAnalysis, ContentCategorization, ContentDepth, ContentOverview, ContentType,
    LinkAnalysis, LinkCategories, LinkDistribution, LinkInfo, LinkQuality, MediaAnalysis,
    PageSpeedIndicators, PerformanceInsights, RichnessLevel, ScrapedPage, SeoAnalysis,
    SeoMetadata, TechnicalAnalysis,
};
use crate::recommendations;
use indexmap::IndexMap;

/// Link text patterns that mark a navigation link
const NAVIGATION_WORDS: [&str; 5] = ["home", "menu", "about", "contact", "services"];
/// Link text patterns that mark a call to action
const CTA_WORDS: [&str; 4] = ["read more", "learn more", "click here", "view"];
/// Href patterns that mark a social link in the category breakdown
const SOCIAL_HREF_WORDS: [&str; 5] = ["facebook", "twitter", "instagram", "linkedin", "youtube"];

/// Runs the full content-quality analysis over one scraped page.
pub fn analyze_page(page: &ScrapedPage) -> ContentAnalysis {
    let seo = &page.seo_metadata;

    let content_overview = build_content_overview(page);
    let seo_analysis = build_seo_analysis(seo);
    let technical_analysis = build_technical_analysis(page);
    let content_categorization = build_content_categorization(seo);
    let link_analysis = build_link_analysis(seo);
    let media_analysis = build_media_analysis(seo);

    let indicators = &seo.page_speed_indicators;
    let performance_insights = PerformanceInsights {
        total_scripts: indicators.total_scripts,
        total_stylesheets: indicators.total_stylesheets,
        inline_styles: indicators.inline_styles,
        total_images: indicators.total_images,
        images_without_alt: indicators.images_without_alt,
        performance_score: performance_score(indicators),
        optimization_opportunities: optimization_opportunities(indicators, seo),
    };

    let recommendations = recommendations::report_recommendations(
        &seo_analysis,
        &media_analysis,
        &performance_insights,
        &content_categorization,
        &link_analysis,
    );

    ContentAnalysis {
        content_overview,
        seo_analysis,
        technical_analysis,
        content_categorization,
        link_analysis,
        media_analysis,
        performance_insights,
        recommendations,
    }
}

/// Technical performance score derived purely from the page-speed indicator
/// counts, clamped to [0, 100].
pub fn performance_score(indicators: &PageSpeedIndicators) -> u32 {
    let mut score: i64 = 100;

    if indicators.total_scripts > 20 {
        score -= 20;
    } else if indicators.total_scripts > 10 {
        score -= 10;
    }

    if indicators.inline_styles > 50 {
        score -= 15;
    } else if indicators.inline_styles > 20 {
        score -= 7;
    }

    if indicators.images_without_alt > 0 {
        score -= 10;
    }

    score.clamp(0, 100) as u32
}

/// Broader page health score with its own deduction formula. Kept separate
/// from `performance_score` on purpose: the two serve different consumers.
pub fn health_score(page: &ScrapedPage) -> u32 {
    let mut score: i64 = 100;
    let seo = &page.seo_metadata;

    if page.title.is_empty() {
        score -= 15;
    }
    if seo
        .meta_tags
        .get("description")
        .is_none_or(|d| d.is_empty())
    {
        score -= 10;
    }
    if seo.canonical_url.is_none() {
        score -= 5;
    }

    let images_without_alt = seo.images.iter().filter(|img| img.alt.is_empty()).count();
    if images_without_alt > 0 {
        score -= (images_without_alt as i64 * 2).min(10);
    }

    if seo.word_count < 300 {
        score -= 10;
    } else if seo.word_count < 500 {
        score -= 5;
    }

    if seo.analytics.len() > 5 {
        score -= 5;
    }

    score.clamp(0, 100) as u32
}

pub fn optimization_opportunities(
    indicators: &PageSpeedIndicators,
    seo: &SeoMetadata,
) -> Vec<String> {
    let mut opportunities = Vec::new();

    if indicators.total_scripts > 15 {
        opportunities.push("Consider reducing the number of scripts".to_string());
    }
    if indicators.inline_styles > 30 {
        opportunities.push("Move inline styles to external stylesheets".to_string());
    }
    if indicators.images_without_alt > 0 {
        opportunities.push("Add alt text to all images for better SEO".to_string());
    }
    if seo.word_count < 300 {
        opportunities.push("Consider adding more content for better SEO".to_string());
    }
    if seo.canonical_url.is_none() {
        opportunities.push("Add canonical URL to prevent duplicate content issues".to_string());
    }
    if seo.sitemap.is_none() {
        opportunities
            .push("Consider adding a sitemap for better search engine indexing".to_string());
    }

    opportunities
}

fn build_content_overview(page: &ScrapedPage) -> ContentOverview {
    let title_length = page.title.chars().count();
    ContentOverview {
        total_characters: page.html_content.chars().count(),
        total_words: page.html_content.split_whitespace().count(),
        content_size_mb: page.html_content.len() as f64 / (1024.0 * 1024.0),
        title: page.title.clone(),
        has_title: !page.title.is_empty(),
        title_length,
        title_optimal: (50..=60).contains(&title_length),
    }
}

fn build_seo_analysis(seo: &SeoMetadata) -> SeoAnalysis {
    SeoAnalysis {
        meta_tags_count: seo.meta_tags.len(),
        open_graph_tags: seo.open_graph.len(),
        twitter_cards: seo.twitter_cards.len(),
        structured_data_blocks: seo.structured_data.len(),
        canonical_url: seo.canonical_url.is_some(),
        robots_directive: seo.robots_directive.is_some(),
        favicon: seo.favicon.is_some(),
        sitemap: seo.sitemap.is_some(),
        word_count: seo.word_count,
        content_richness: if seo.word_count > 1000 {
            RichnessLevel::High
        } else if seo.word_count > 300 {
            RichnessLevel::Medium
        } else {
            RichnessLevel::Low
        },
    }
}

fn build_technical_analysis(page: &ScrapedPage) -> TechnicalAnalysis {
    let css = &page.css_content;
    let js = &page.js_content;
    TechnicalAnalysis {
        inline_styles: css.inline_styles.len(),
        internal_stylesheets: css.internal_stylesheets.len(),
        external_stylesheets: css.external_stylesheets.len(),
        inline_scripts: js.inline_scripts.len(),
        external_scripts: js.external_scripts.len(),
        total_scripts: js.inline_scripts.len() + js.external_scripts.len(),
        total_styles: css.inline_styles.len()
            + css.internal_stylesheets.len()
            + css.external_stylesheets.len(),
        uses_external_resources: !css.external_stylesheets.is_empty()
            || !js.external_scripts.is_empty(),
        has_inline_code: !css.inline_styles.is_empty() || !js.inline_scripts.is_empty(),
    }
}

fn build_content_categorization(seo: &SeoMetadata) -> ContentCategorization {
    let heading_count =
        |level: &str| seo.headings.get(level).map(|h| h.len()).unwrap_or_default();

    let total_headings: usize = seo.headings.values().map(|h| h.len()).sum();
    let h1_count = heading_count("h1");
    let h2_count = heading_count("h2");
    let h3_count = heading_count("h3");

    let mut heading_structure = IndexMap::new();
    for level in 1..=6 {
        let count = heading_count(&format!("h{}", level));
        if count > 0 {
            heading_structure.insert(format!("H{}", level), count);
        }
    }

    // Ordered classification: the first matching shape wins
    let content_type = if total_headings == 0 {
        ContentType::SimplePage
    } else if h1_count == 1 && total_headings <= 5 {
        ContentType::LandingPage
    } else if total_headings > 10 {
        ContentType::ContentRichPage
    } else if h2_count > 3 {
        ContentType::ArticleBlogPost
    } else if h3_count > 5 {
        ContentType::ProductServicePage
    } else {
        ContentType::Unknown
    };

    ContentCategorization {
        content_type,
        heading_structure,
        total_headings,
        has_h1: h1_count > 0,
        has_h2: h2_count > 0,
        has_h3: h3_count > 0,
        heading_hierarchy_optimal: h1_count == 1 && h2_count > 0,
        content_depth: if total_headings > 15 {
            ContentDepth::Deep
        } else if total_headings > 5 {
            ContentDepth::Medium
        } else {
            ContentDepth::Shallow
        },
    }
}

fn build_link_analysis(seo: &SeoMetadata) -> LinkAnalysis {
    let internal = seo.internal_links.len();
    let external = seo.external_links.len();
    let social = seo.social_links.len();
    let total = internal + external;
    let denominator = total.max(1) as f64;

    let mut categories = LinkCategories::default();
    let categorize = |link: &LinkInfo, is_external: bool, categories: &mut LinkCategories| {
        let text = link.text.to_lowercase();
        let href = link.href.to_lowercase();

        if NAVIGATION_WORDS.iter().any(|word| text.contains(word)) {
            categories.navigation += 1;
        } else if CTA_WORDS.iter().any(|word| text.contains(word)) {
            categories.calls_to_action += 1;
        } else if SOCIAL_HREF_WORDS.iter().any(|word| href.contains(word)) {
            categories.social += 1;
        } else if is_external {
            categories.external_references += 1;
        } else {
            categories.content += 1;
        }
    };
    for link in &seo.internal_links {
        categorize(link, false, &mut categories);
    }
    for link in &seo.external_links {
        categorize(link, true, &mut categories);
    }

    LinkAnalysis {
        total_links: total,
        internal_links: internal,
        external_links: external,
        social_links: social,
        link_categories: categories,
        link_distribution: LinkDistribution {
            internal_ratio: internal as f64 / denominator,
            external_ratio: external as f64 / denominator,
            social_ratio: social as f64 / denominator,
        },
        has_social_presence: social > 0,
        link_quality: if internal > external {
            LinkQuality::Good
        } else {
            LinkQuality::NeedsImprovement
        },
    }
}

fn build_media_analysis(seo: &SeoMetadata) -> MediaAnalysis {
    let total = seo.images.len();
    let with_alt = seo.images.iter().filter(|img| !img.alt.is_empty()).count();
    let without_alt = total - with_alt;

    // Coverage is defined as 0 for pages with no images at all
    let (coverage, optimized) = if total > 0 {
        (
            with_alt as f64 / total as f64 * 100.0,
            with_alt as f64 / total as f64,
        )
    } else {
        (0.0, 0.0)
    };

    MediaAnalysis {
        total_images: total,
        images_with_alt: with_alt,
        images_without_alt: without_alt,
        alt_text_coverage: coverage,
        lazy_loading_images: seo
            .images
            .iter()
            .filter(|img| img.loading == "lazy")
            .count(),
        responsive_images: seo
            .images
            .iter()
            .filter(|img| {
                img.width.as_deref().is_some_and(|w| !w.is_empty())
                    && img.height.as_deref().is_some_and(|h| !h.is_empty())
            })
            .count(),
        media_richness: if total > 10 {
            RichnessLevel::High
        } else if total > 3 {
            RichnessLevel::Medium
        } else {
            RichnessLevel::Low
        },
        seo_optimized_images: optimized,
    }
}
