use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Everything extracted from a single fetched page: raw content inventories
/// plus the structured SEO metadata. Field names are part of the persisted
/// JSON format and must not change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrapedPage {
    /// Page title text, empty when the document has no usable title tag
    pub title: String,
    pub html_content: String,
    pub css_content: CssContent,
    pub js_content: JsContent,
    /// Raw href values of every anchor, in document order
    pub links: Vec<String>,
    pub seo_metadata: SeoMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CssContent {
    pub inline_styles: Vec<String>,
    pub internal_stylesheets: Vec<String>,
    pub external_stylesheets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JsContent {
    pub inline_scripts: Vec<String>,
    pub external_scripts: Vec<String>,
}

/// Structured SEO metadata for one document.
///
/// Every field has a defined default, so a failed extraction can always
/// degrade to `SeoMetadata::default()` without breaking consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoMetadata {
    /// All meta tags keyed by name (falling back to property); later
    /// occurrences of the same key overwrite earlier ones
    pub meta_tags: IndexMap<String, String>,
    pub open_graph: IndexMap<String, String>,
    pub twitter_cards: IndexMap<String, String>,
    /// Parsed JSON-LD blocks in document order; invalid blocks are skipped
    pub structured_data: Vec<serde_json::Value>,
    /// Always contains the keys h1 through h6, each in document order
    pub headings: BTreeMap<String, Vec<String>>,
    pub images: Vec<ImageInfo>,
    pub internal_links: Vec<LinkInfo>,
    pub external_links: Vec<LinkInfo>,
    pub social_links: Vec<LinkInfo>,
    pub canonical_url: Option<String>,
    pub robots_directive: Option<String>,
    pub language: Option<String>,
    pub charset: Option<String>,
    pub viewport: Option<String>,
    pub favicon: Option<String>,
    pub sitemap: Option<String>,
    pub rss_feeds: Vec<FeedInfo>,
    /// Coarse per-script tracking hints (first matching pattern wins)
    pub analytics: Vec<AnalyticsHint>,
    pub word_count: usize,
    /// Top keywords by frequency, at most 20 entries, descending with
    /// first-seen tie order
    pub keyword_density: IndexMap<String, usize>,
    pub page_speed_indicators: PageSpeedIndicators,
    pub detailed_analytics: AnalyticsData,
}

impl Default for SeoMetadata {
    fn default() -> Self {
        let mut headings = BTreeMap::new();
        for level in 1..=6 {
            headings.insert(format!("h{}", level), Vec::new());
        }
        Self {
            meta_tags: IndexMap::new(),
            open_graph: IndexMap::new(),
            twitter_cards: IndexMap::new(),
            structured_data: Vec::new(),
            headings,
            images: Vec::new(),
            internal_links: Vec::new(),
            external_links: Vec::new(),
            social_links: Vec::new(),
            canonical_url: None,
            robots_directive: None,
            language: None,
            charset: None,
            viewport: None,
            favicon: None,
            sitemap: None,
            rss_feeds: Vec::new(),
            analytics: Vec::new(),
            word_count: 0,
            keyword_density: IndexMap::new(),
            page_speed_indicators: PageSpeedIndicators::default(),
            detailed_analytics: AnalyticsData::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ImageInfo {
    pub src: String,
    pub alt: String,
    pub title: String,
    pub width: Option<String>,
    pub height: Option<String>,
    pub loading: String,
    pub decoding: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkInfo {
    pub href: String,
    pub resolved_url: String,
    pub text: String,
    pub rel: Vec<String>,
    pub target: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeedInfo {
    pub href: String,
    pub title: Option<String>,
    #[serde(rename = "type")]
    pub feed_type: String,
}

/// A coarse tracking-script hint: which known pattern matched the script
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyticsHint {
    #[serde(rename = "type")]
    pub pattern: String,
    pub src: String,
    pub content_preview: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageSpeedIndicators {
    pub total_images: usize,
    pub images_without_alt: usize,
    pub total_scripts: usize,
    pub total_stylesheets: usize,
    pub inline_styles: usize,
    pub total_links: usize,
}

/// Fingerprinted third-party tracking tools, one list per known tool,
/// each in document order, plus an aggregate summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsData {
    pub google_analytics: Vec<GoogleAnalyticsTag>,
    pub facebook_pixel: Vec<FacebookPixelTag>,
    pub google_tag_manager: Vec<GtmTag>,
    pub hotjar: Vec<HotjarTag>,
    pub mixpanel: Vec<MixpanelTag>,
    pub other_tracking: Vec<OtherTrackingTag>,
    pub social_media_tracking: Vec<SocialMetaTag>,
    pub analytics_summary: AnalyticsSummary,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoogleAnalyticsTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub version: String,
    pub tracking_id: Option<String>,
    pub measurement_id: Option<String>,
    pub content_preview: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtmTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub container_id: String,
    pub content_preview: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacebookPixelTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub pixel_id: String,
    pub content_preview: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HotjarTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub site_id: String,
    pub content_preview: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MixpanelTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub project_token: String,
    pub content_preview: String,
    pub src: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OtherTrackingTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub content_preview: String,
    pub src: String,
}

/// A meta tag that configures social-platform tracking or embeds
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialMetaTag {
    #[serde(rename = "type")]
    pub tag_type: String,
    pub name: String,
    pub content: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyticsSummary {
    pub total_tracking_tools: usize,
    pub has_google_analytics: bool,
    pub has_facebook_pixel: bool,
    pub has_gtm: bool,
    pub has_hotjar: bool,
    pub has_mixpanel: bool,
    pub has_social_tracking: bool,
    pub tracking_intensity: TrackingIntensity,
}

/// Ordinal classification of how many distinct tracking tools a page embeds
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingIntensity {
    #[default]
    None,
    Light,
    Moderate,
    Heavy,
    #[serde(rename = "Very Heavy")]
    VeryHeavy,
}

impl TrackingIntensity {
    /// Fixed thresholds on the number of detected tools
    pub fn from_total_tools(total: usize) -> Self {
        match total {
            0 => TrackingIntensity::None,
            1 => TrackingIntensity::Light,
            2..=3 => TrackingIntensity::Moderate,
            4..=5 => TrackingIntensity::Heavy,
            _ => TrackingIntensity::VeryHeavy,
        }
    }
}

impl fmt::Display for TrackingIntensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TrackingIntensity::None => "None",
            TrackingIntensity::Light => "Light",
            TrackingIntensity::Moderate => "Moderate",
            TrackingIntensity::Heavy => "Heavy",
            TrackingIntensity::VeryHeavy => "Very Heavy",
        };
        write!(f, "{}", s)
    }
}

/// The full content-quality analysis derived from one `ScrapedPage`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentAnalysis {
    pub content_overview: ContentOverview,
    pub seo_analysis: SeoAnalysis,
    pub technical_analysis: TechnicalAnalysis,
    pub content_categorization: ContentCategorization,
    pub link_analysis: LinkAnalysis,
    pub media_analysis: MediaAnalysis,
    pub performance_insights: PerformanceInsights,
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentOverview {
    pub total_characters: usize,
    pub total_words: usize,
    pub content_size_mb: f64,
    pub title: String,
    pub has_title: bool,
    pub title_length: usize,
    pub title_optimal: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeoAnalysis {
    pub meta_tags_count: usize,
    pub open_graph_tags: usize,
    pub twitter_cards: usize,
    pub structured_data_blocks: usize,
    pub canonical_url: bool,
    pub robots_directive: bool,
    pub favicon: bool,
    pub sitemap: bool,
    pub word_count: usize,
    pub content_richness: RichnessLevel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechnicalAnalysis {
    pub inline_styles: usize,
    pub internal_stylesheets: usize,
    pub external_stylesheets: usize,
    pub inline_scripts: usize,
    pub external_scripts: usize,
    pub total_scripts: usize,
    pub total_styles: usize,
    pub uses_external_resources: bool,
    pub has_inline_code: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentCategorization {
    pub content_type: ContentType,
    /// Heading levels with at least one occurrence, keyed H1..H6 in order
    pub heading_structure: IndexMap<String, usize>,
    pub total_headings: usize,
    pub has_h1: bool,
    pub has_h2: bool,
    pub has_h3: bool,
    /// Exactly one H1 and at least one H2
    pub heading_hierarchy_optimal: bool,
    pub content_depth: ContentDepth,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkAnalysis {
    pub total_links: usize,
    pub internal_links: usize,
    pub external_links: usize,
    pub social_links: usize,
    pub link_categories: LinkCategories,
    pub link_distribution: LinkDistribution,
    pub has_social_presence: bool,
    pub link_quality: LinkQuality,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkCategories {
    pub navigation: usize,
    pub content: usize,
    pub social: usize,
    pub external_references: usize,
    pub calls_to_action: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LinkDistribution {
    pub internal_ratio: f64,
    pub external_ratio: f64,
    pub social_ratio: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaAnalysis {
    pub total_images: usize,
    pub images_with_alt: usize,
    pub images_without_alt: usize,
    /// Percentage in [0, 100]; defined as 0 when the page has no images
    pub alt_text_coverage: f64,
    pub lazy_loading_images: usize,
    pub responsive_images: usize,
    pub media_richness: RichnessLevel,
    pub seo_optimized_images: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PerformanceInsights {
    pub total_scripts: usize,
    pub total_stylesheets: usize,
    pub inline_styles: usize,
    pub total_images: usize,
    pub images_without_alt: usize,
    /// Heuristic score clamped to [0, 100]
    pub performance_score: u32,
    pub optimization_opportunities: Vec<String>,
}

/// Ordinal classification based on fixed count thresholds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RichnessLevel {
    High,
    Medium,
    Low,
}

impl fmt::Display for RichnessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RichnessLevel::High => "High",
            RichnessLevel::Medium => "Medium",
            RichnessLevel::Low => "Low",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentDepth {
    Deep,
    Medium,
    Shallow,
}

impl fmt::Display for ContentDepth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentDepth::Deep => "Deep",
            ContentDepth::Medium => "Medium",
            ContentDepth::Shallow => "Shallow",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContentType {
    Unknown,
    #[serde(rename = "Simple Page")]
    SimplePage,
    #[serde(rename = "Landing Page")]
    LandingPage,
    #[serde(rename = "Content-Rich Page")]
    ContentRichPage,
    #[serde(rename = "Article/Blog Post")]
    ArticleBlogPost,
    #[serde(rename = "Product/Service Page")]
    ProductServicePage,
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ContentType::Unknown => "Unknown",
            ContentType::SimplePage => "Simple Page",
            ContentType::LandingPage => "Landing Page",
            ContentType::ContentRichPage => "Content-Rich Page",
            ContentType::ArticleBlogPost => "Article/Blog Post",
            ContentType::ProductServicePage => "Product/Service Page",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LinkQuality {
    Good,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl fmt::Display for LinkQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LinkQuality::Good => "Good",
            LinkQuality::NeedsImprovement => "Needs Improvement",
        };
        write!(f, "{}", s)
    }
}

/// A structured, persistable improvement recommendation for one page
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Recommendation {
    pub page_url: String,
    pub category: String,
    pub issue: String,
    pub recommendation: String,
    pub priority: Priority,
    /// Estimated impact in [0, 100]
    pub impact_score: u32,
    pub guidelines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
            Priority::Critical => "critical",
        };
        write!(f, "{}", s)
    }
}

/// Top-level record written to `metadata.json`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageMetadata {
    pub original_url: String,
    pub scraped_at: String,
    pub title: String,
    pub stats: ScrapeStats,
    pub seo_metadata: SeoMetadata,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScrapeStats {
    pub links_count: usize,
    pub inline_styles_count: usize,
    pub internal_stylesheets_count: usize,
    pub external_stylesheets_count: usize,
    pub inline_scripts_count: usize,
    pub external_scripts_count: usize,
}

/// Full analysis result for one invocation, used for JSON output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub analyzed_at: String,
    pub page: ScrapedPage,
    pub content_analysis: ContentAnalysis,
    /// Broader page health score, distinct from the technical performance score
    pub health_score: u32,
    pub page_recommendations: Vec<Recommendation>,
}
