use crate::models::{
    ContentCategorization, LinkAnalysis, MediaAnalysis, PerformanceInsights, Priority,
    Recommendation, RichnessLevel, ScrapedPage, SeoAnalysis,
};

/// Builds the report-level recommendation list. Every rule is evaluated
/// independently; all applicable rules fire.
pub fn report_recommendations(
    seo: &SeoAnalysis,
    media: &MediaAnalysis,
    performance: &PerformanceInsights,
    content: &ContentCategorization,
    links: &LinkAnalysis,
) -> Vec<String> {
    let mut recommendations = Vec::new();

    if seo.word_count < 300 {
        recommendations
            .push("Add more content - aim for at least 300 words for better SEO".to_string());
    }
    if !seo.canonical_url {
        recommendations.push("Add canonical URL to prevent duplicate content issues".to_string());
    }
    if media.alt_text_coverage < 80.0 {
        recommendations.push("Improve image alt text coverage - aim for 100%".to_string());
    }
    if !seo.favicon {
        recommendations.push("Add a favicon for better brand recognition".to_string());
    }
    if performance.total_scripts > 15 {
        recommendations.push("Reduce number of scripts to improve page load speed".to_string());
    }
    if performance.inline_styles > 30 {
        recommendations.push("Move inline styles to external stylesheets".to_string());
    }
    if !content.heading_hierarchy_optimal {
        recommendations.push(
            "Optimize heading hierarchy - use one H1 and proper H2-H6 structure".to_string(),
        );
    }
    if links.link_distribution.external_ratio > 0.5 {
        recommendations
            .push("Balance internal vs external links - prioritize internal linking".to_string());
    }
    // Deliberately overlaps the low-word-count rule above; both fire for
    // thin pages
    if seo.content_richness == RichnessLevel::Low {
        recommendations.push("Enhance content depth with more detailed information".to_string());
    }
    if !links.has_social_presence {
        recommendations.push("Add social media links for better engagement".to_string());
    }

    recommendations
}

/// Builds the structured, persistable per-page recommendations consumed by
/// downstream storage. Independent of `report_recommendations` and not
/// reconciled with it.
pub fn page_recommendations(url: &str, page: &ScrapedPage) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();
    let seo = &page.seo_metadata;

    if seo
        .meta_tags
        .get("description")
        .is_none_or(|d| d.is_empty())
    {
        recommendations.push(Recommendation {
            page_url: url.to_string(),
            category: "technical_seo".to_string(),
            issue: "Missing meta description".to_string(),
            recommendation: "Add a compelling meta description to improve search engine \
                             visibility and click-through rates."
                .to_string(),
            priority: Priority::High,
            impact_score: 85,
            guidelines: vec![
                "Keep meta description between 150-160 characters".to_string(),
                "Include primary keywords naturally".to_string(),
                "Make it compelling and action-oriented".to_string(),
            ],
        });
    }

    if page.title.is_empty() {
        recommendations.push(Recommendation {
            page_url: url.to_string(),
            category: "technical_seo".to_string(),
            issue: "Missing page title".to_string(),
            recommendation: "Add a clear, descriptive title tag to improve search rankings \
                             and click-through rates."
                .to_string(),
            priority: Priority::High,
            impact_score: 90,
            guidelines: vec![
                "Keep the title between 50-60 characters".to_string(),
                "Place primary keywords near the beginning".to_string(),
                "Write a unique title for every page".to_string(),
            ],
        });
    }

    let images_without_alt = seo.images.iter().filter(|img| img.alt.is_empty()).count();
    if images_without_alt > 0 {
        recommendations.push(Recommendation {
            page_url: url.to_string(),
            category: "content_seo".to_string(),
            issue: format!("{} image(s) missing alt text", images_without_alt),
            recommendation: "Add descriptive alt text to all images for accessibility and \
                             image search visibility."
                .to_string(),
            priority: Priority::Medium,
            impact_score: 70,
            guidelines: vec![
                "Describe the image content concisely".to_string(),
                "Include keywords only where they fit naturally".to_string(),
                "Leave alt empty only for purely decorative images".to_string(),
            ],
        });
    }

    if seo.word_count < 300 {
        recommendations.push(Recommendation {
            page_url: url.to_string(),
            category: "content_seo".to_string(),
            issue: format!("Low word count ({} words)", seo.word_count),
            recommendation: "Expand content to provide more value and improve search rankings."
                .to_string(),
            priority: Priority::Medium,
            impact_score: 75,
            guidelines: vec![
                "Aim for at least 300-500 words".to_string(),
                "Include relevant keywords naturally".to_string(),
                "Provide comprehensive information".to_string(),
            ],
        });
    }

    recommendations
}
