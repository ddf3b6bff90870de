use crate::models::{AnalysisReport, AnalyticsData, ContentAnalysis, ScrapedPage};
use anyhow::Result;
use colored::*;
use std::fmt::Write as _;
use std::fs::File;
use std::io::Write as _;

/// Fallback strings for absent optional metadata
const NOT_FOUND: &str = "Not found";
const NOT_SPECIFIED: &str = "Not specified";

pub struct Reporter;

impl Reporter {
    /// Renders the plain-text SEO report written to `seo_report.txt`.
    ///
    /// Pure assembly: renders gracefully when upstream data is partial and
    /// never fails on missing optional fields.
    pub fn render_seo_report(page: &ScrapedPage, url: &str) -> String {
        let seo = &page.seo_metadata;
        let mut out = String::new();

        let _ = writeln!(out, "SEO Analysis Report for: {}", url);
        let _ = writeln!(
            out,
            "Generated on: {}",
            chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
        );
        let _ = writeln!(out, "{}\n", "=".repeat(80));

        let _ = writeln!(out, "BASIC SEO INFORMATION");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Title: {}", Self::display_title(page));
        let _ = writeln!(
            out,
            "Canonical URL: {}",
            seo.canonical_url.as_deref().unwrap_or(NOT_FOUND)
        );
        let _ = writeln!(
            out,
            "Robots Directive: {}",
            seo.robots_directive.as_deref().unwrap_or(NOT_FOUND)
        );
        let _ = writeln!(
            out,
            "Language: {}",
            seo.language.as_deref().unwrap_or(NOT_SPECIFIED)
        );
        let _ = writeln!(
            out,
            "Charset: {}",
            seo.charset.as_deref().unwrap_or(NOT_SPECIFIED)
        );
        let _ = writeln!(
            out,
            "Viewport: {}",
            seo.viewport.as_deref().unwrap_or(NOT_SPECIFIED)
        );
        let _ = writeln!(
            out,
            "Favicon: {}",
            seo.favicon.as_deref().unwrap_or(NOT_FOUND)
        );
        let _ = writeln!(
            out,
            "Sitemap: {}\n",
            seo.sitemap.as_deref().unwrap_or(NOT_FOUND)
        );

        let _ = writeln!(out, "META TAGS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        for (name, content) in &seo.meta_tags {
            let _ = writeln!(out, "{}: {}", name, content);
        }
        let _ = writeln!(out);

        if !seo.open_graph.is_empty() {
            let _ = writeln!(out, "OPEN GRAPH TAGS");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for (name, content) in &seo.open_graph {
                let _ = writeln!(out, "{}: {}", name, content);
            }
            let _ = writeln!(out);
        }

        if !seo.twitter_cards.is_empty() {
            let _ = writeln!(out, "TWITTER CARD TAGS");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for (name, content) in &seo.twitter_cards {
                let _ = writeln!(out, "{}: {}", name, content);
            }
            let _ = writeln!(out);
        }

        let _ = writeln!(out, "HEADINGS STRUCTURE");
        let _ = writeln!(out, "{}", "-".repeat(40));
        for level in 1..=6 {
            let key = format!("h{}", level);
            if let Some(headings) = seo.headings.get(&key)
                && !headings.is_empty()
            {
                let _ = writeln!(out, "H{} Headings ({}):", level, headings.len());
                for (index, heading) in headings.iter().enumerate() {
                    let _ = writeln!(out, "  {}. {}", index + 1, heading);
                }
                let _ = writeln!(out);
            }
        }

        let _ = writeln!(out, "IMAGES ANALYSIS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let total_images = seo.images.len();
        let images_without_alt = seo.images.iter().filter(|img| img.alt.is_empty()).count();
        let coverage = if total_images > 0 {
            (total_images - images_without_alt) as f64 / total_images as f64 * 100.0
        } else {
            0.0
        };
        let _ = writeln!(out, "Total Images: {}", total_images);
        let _ = writeln!(out, "Images without Alt Text: {}", images_without_alt);
        let _ = writeln!(out, "Alt Text Coverage: {:.1}%\n", coverage);

        let _ = writeln!(out, "LINKS ANALYSIS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Internal Links: {}", seo.internal_links.len());
        let _ = writeln!(out, "External Links: {}", seo.external_links.len());
        let _ = writeln!(out, "Social Media Links: {}", seo.social_links.len());
        let _ = writeln!(
            out,
            "Total Links: {}\n",
            seo.internal_links.len() + seo.external_links.len()
        );

        let _ = writeln!(out, "CONTENT ANALYSIS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Word Count: {}", seo.word_count);
        if !seo.keyword_density.is_empty() {
            let _ = writeln!(out, "Top Keywords (by frequency):");
            for (index, (word, count)) in seo.keyword_density.iter().take(10).enumerate() {
                let _ = writeln!(out, "  {}. {}: {} times", index + 1, word, count);
            }
        }
        let _ = writeln!(out);

        if !seo.analytics.is_empty() {
            let _ = writeln!(out, "ANALYTICS & TRACKING");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for hint in &seo.analytics {
                let _ = writeln!(out, "Type: {}", hint.pattern);
                if !hint.src.is_empty() {
                    let _ = writeln!(out, "Source: {}", hint.src);
                }
                let _ = writeln!(out);
            }
        }

        let indicators = &seo.page_speed_indicators;
        let _ = writeln!(out, "PAGE SPEED INDICATORS");
        let _ = writeln!(out, "{}", "-".repeat(40));
        let _ = writeln!(out, "Total Scripts: {}", indicators.total_scripts);
        let _ = writeln!(out, "Total Stylesheets: {}", indicators.total_stylesheets);
        let _ = writeln!(out, "Inline Styles: {}", indicators.inline_styles);
        let _ = writeln!(out, "Total Links: {}", indicators.total_links);
        let _ = writeln!(out, "Total Images: {}", indicators.total_images);
        let _ = writeln!(
            out,
            "Images without Alt: {}\n",
            indicators.images_without_alt
        );

        if !seo.structured_data.is_empty() {
            let _ = writeln!(out, "STRUCTURED DATA");
            let _ = writeln!(out, "{}", "-".repeat(40));
            let _ = writeln!(
                out,
                "Found {} structured data blocks",
                seo.structured_data.len()
            );
            for (index, block) in seo.structured_data.iter().enumerate() {
                let _ = writeln!(out, "Block {}: {}", index + 1, Self::json_kind(block));
            }
            let _ = writeln!(out);
        }

        if !seo.rss_feeds.is_empty() {
            let _ = writeln!(out, "RSS FEEDS");
            let _ = writeln!(out, "{}", "-".repeat(40));
            for feed in &seo.rss_feeds {
                let _ = writeln!(out, "Type: {}", feed.feed_type);
                let _ = writeln!(out, "Title: {}", feed.title.as_deref().unwrap_or(NOT_FOUND));
                let _ = writeln!(out, "URL: {}\n", feed.href);
            }
        }

        out
    }

    pub fn print_analysis(analysis: &ContentAnalysis) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!(
            "{}",
            "Detailed Content Analysis & Categorization"
                .bright_cyan()
                .bold()
        );
        println!("{}", "=".repeat(80).bright_blue());

        let overview = &analysis.content_overview;
        println!("\n{}", "Content Overview".bright_yellow().bold().underline());
        println!("  Content Size:     {:.2} MB", overview.content_size_mb);
        println!("  Total Characters: {}", overview.total_characters);
        println!("  Total Words:      {}", overview.total_words);
        println!(
            "  Title:            '{}' ({} chars)",
            overview.title, overview.title_length
        );
        println!(
            "  Title Optimal:    {}",
            Self::check(overview.title_optimal)
        );

        let seo = &analysis.seo_analysis;
        println!("\n{}", "SEO Analysis".bright_yellow().bold().underline());
        println!("  Content Richness: {}", seo.content_richness);
        println!("  Word Count:       {}", seo.word_count);
        println!("  Meta Tags:        {}", seo.meta_tags_count);
        println!("  Open Graph Tags:  {}", seo.open_graph_tags);
        println!("  Twitter Cards:    {}", seo.twitter_cards);
        println!("  Structured Data:  {} blocks", seo.structured_data_blocks);
        println!("  Canonical URL:    {}", Self::check(seo.canonical_url));
        println!("  Robots Directive: {}", Self::check(seo.robots_directive));
        println!("  Favicon:          {}", Self::check(seo.favicon));
        println!("  Sitemap:          {}", Self::check(seo.sitemap));

        let content = &analysis.content_categorization;
        println!(
            "\n{}",
            "Content Categorization".bright_yellow().bold().underline()
        );
        println!("  Content Type:   {}", content.content_type);
        println!("  Content Depth:  {}", content.content_depth);
        println!("  Total Headings: {}", content.total_headings);
        if !content.heading_structure.is_empty() {
            println!("  Heading Structure:");
            for (level, count) in &content.heading_structure {
                println!("    - {}: {}", level, count);
            }
        }
        println!("  Has H1:         {}", Self::check(content.has_h1));
        println!("  Has H2:         {}", Self::check(content.has_h2));
        println!("  Has H3:         {}", Self::check(content.has_h3));
        println!(
            "  Hierarchy Optimal: {}",
            Self::check(content.heading_hierarchy_optimal)
        );

        let links = &analysis.link_analysis;
        println!("\n{}", "Link Analysis".bright_yellow().bold().underline());
        println!("  Total Links:    {}", links.total_links);
        println!("  Internal Links: {}", links.internal_links);
        println!("  External Links: {}", links.external_links);
        println!("  Social Links:   {}", links.social_links);
        println!("  Link Quality:   {}", links.link_quality);
        println!(
            "  Social Presence: {}",
            Self::check(links.has_social_presence)
        );
        println!("  Link Categories:");
        println!("    - Navigation:          {}", links.link_categories.navigation);
        println!("    - Content:             {}", links.link_categories.content);
        println!("    - Social:              {}", links.link_categories.social);
        println!(
            "    - External References: {}",
            links.link_categories.external_references
        );
        println!(
            "    - Calls To Action:     {}",
            links.link_categories.calls_to_action
        );

        let media = &analysis.media_analysis;
        println!("\n{}", "Media Analysis".bright_yellow().bold().underline());
        println!("  Total Images:          {}", media.total_images);
        println!("  Images with Alt Text:  {}", media.images_with_alt);
        println!("  Images without Alt:    {}", media.images_without_alt);
        println!("  Alt Text Coverage:     {:.1}%", media.alt_text_coverage);
        println!("  Lazy Loading Images:   {}", media.lazy_loading_images);
        println!("  Responsive Images:     {}", media.responsive_images);
        println!("  Media Richness:        {}", media.media_richness);

        let tech = &analysis.technical_analysis;
        println!(
            "\n{}",
            "Technical Analysis".bright_yellow().bold().underline()
        );
        println!("  Total Scripts:        {}", tech.total_scripts);
        println!("  Total Styles:         {}", tech.total_styles);
        println!("  External Stylesheets: {}", tech.external_stylesheets);
        println!("  External Scripts:     {}", tech.external_scripts);
        println!(
            "  External Resources:   {}",
            Self::check(tech.uses_external_resources)
        );
        println!("  Inline Code:          {}", Self::check(tech.has_inline_code));

        let perf = &analysis.performance_insights;
        println!(
            "\n{}",
            "Performance Insights".bright_yellow().bold().underline()
        );
        let score_str = format!("{}/100", perf.performance_score);
        println!(
            "  Performance Score: {}",
            if perf.performance_score >= 80 {
                score_str.bright_green()
            } else if perf.performance_score >= 50 {
                score_str.yellow()
            } else {
                score_str.bright_red()
            }
        );
        println!("  Total Scripts:     {}", perf.total_scripts);
        println!("  Total Stylesheets: {}", perf.total_stylesheets);
        println!("  Inline Styles:     {}", perf.inline_styles);
        println!("  Images without Alt: {}", perf.images_without_alt);
        if !perf.optimization_opportunities.is_empty() {
            println!("  Optimization Opportunities:");
            for opportunity in &perf.optimization_opportunities {
                println!("    - {}", opportunity);
            }
        }

        println!("\n{}", "Recommendations".bright_yellow().bold().underline());
        if analysis.recommendations.is_empty() {
            println!(
                "  {}",
                "No major issues found! The page appears to be well-optimized.".bright_green()
            );
        } else {
            for (index, recommendation) in analysis.recommendations.iter().enumerate() {
                println!("  {}. {}", index + 1, recommendation);
            }
        }

        println!("\n{}", "=".repeat(80).bright_blue());
    }

    pub fn print_analytics(data: &AnalyticsData) {
        println!("\n{}", "=".repeat(80).bright_blue());
        println!("{}", "Analytics & Tracking Analysis".bright_cyan().bold());
        println!("{}", "=".repeat(80).bright_blue());

        let summary = &data.analytics_summary;
        println!("\n{}", "Tracking Overview".bright_yellow().bold().underline());
        println!("  Total Tracking Tools: {}", summary.total_tracking_tools);
        println!("  Tracking Intensity:   {}", summary.tracking_intensity);
        println!(
            "  Google Analytics:   {}",
            Self::check(summary.has_google_analytics)
        );
        println!(
            "  Facebook Pixel:     {}",
            Self::check(summary.has_facebook_pixel)
        );
        println!("  Google Tag Manager: {}", Self::check(summary.has_gtm));
        println!("  Hotjar:             {}", Self::check(summary.has_hotjar));
        println!("  Mixpanel:           {}", Self::check(summary.has_mixpanel));
        println!(
            "  Social Tracking:    {}",
            Self::check(summary.has_social_tracking)
        );

        for (index, ga) in data.google_analytics.iter().enumerate() {
            println!(
                "\n{} {}",
                "Google Analytics Instance".bright_white().bold(),
                index + 1
            );
            println!("  Version: {}", ga.version);
            if let Some(tracking_id) = &ga.tracking_id {
                println!("  Tracking ID: {}", tracking_id);
            }
            if let Some(measurement_id) = &ga.measurement_id {
                println!("  Measurement ID: {}", measurement_id);
            }
            println!("  Source: {}", Self::script_source(&ga.src));
        }

        for (index, pixel) in data.facebook_pixel.iter().enumerate() {
            println!("\n{} {}", "Facebook Pixel".bright_white().bold(), index + 1);
            println!("  Pixel ID: {}", pixel.pixel_id);
            println!("  Source: {}", Self::script_source(&pixel.src));
        }

        for (index, gtm) in data.google_tag_manager.iter().enumerate() {
            println!(
                "\n{} {}",
                "Google Tag Manager".bright_white().bold(),
                index + 1
            );
            println!("  Container ID: {}", gtm.container_id);
            println!("  Source: {}", Self::script_source(&gtm.src));
        }

        for (index, hotjar) in data.hotjar.iter().enumerate() {
            println!("\n{} {}", "Hotjar".bright_white().bold(), index + 1);
            println!("  Site ID: {}", hotjar.site_id);
            println!("  Source: {}", Self::script_source(&hotjar.src));
        }

        for (index, mixpanel) in data.mixpanel.iter().enumerate() {
            println!("\n{} {}", "Mixpanel".bright_white().bold(), index + 1);
            println!("  Project Token: {}", mixpanel.project_token);
            println!("  Source: {}", Self::script_source(&mixpanel.src));
        }

        if !data.social_media_tracking.is_empty() {
            println!(
                "\n{}",
                "Social Media Tracking".bright_yellow().bold().underline()
            );
            for tracking in &data.social_media_tracking {
                println!("  [{}] {}: {}", tracking.tag_type, tracking.name, tracking.content);
            }
        }

        if !data.other_tracking.is_empty() {
            println!(
                "\n{}",
                "Other Tracking Tools".bright_yellow().bold().underline()
            );
            for (index, other) in data.other_tracking.iter().enumerate() {
                if other.src.is_empty() {
                    println!("  Tool {}: inline script", index + 1);
                } else {
                    println!("  Tool {}: {}", index + 1, other.src);
                }
            }
        }

        println!("\n{}", "=".repeat(80).bright_blue());
    }

    pub fn print_summary(report: &AnalysisReport) {
        let analysis = &report.content_analysis;
        println!("\n{}", "Quick Summary".bright_yellow().bold().underline());
        println!(
            "  Content Type:        {}",
            analysis.content_categorization.content_type
        );
        println!(
            "  Word Count:          {}",
            analysis.seo_analysis.word_count
        );
        println!(
            "  Performance Score:   {}/100",
            analysis.performance_insights.performance_score
        );
        println!("  Health Score:        {}/100", report.health_score);
        println!(
            "  Recommendations:     {}",
            analysis.recommendations.len()
        );
        println!(
            "  Alt Text Coverage:   {:.1}%",
            analysis.media_analysis.alt_text_coverage
        );
        println!(
            "  Link Quality:        {}",
            analysis.link_analysis.link_quality
        );
        let summary = &report.page.seo_metadata.detailed_analytics.analytics_summary;
        println!(
            "  Tracking Tools:      {} ({})",
            summary.total_tracking_tools, summary.tracking_intensity
        );
    }

    pub fn save_json_report(report: &AnalysisReport, filename: &str) -> Result<()> {
        let json = serde_json::to_string_pretty(report)?;
        let mut file = File::create(filename)?;
        file.write_all(json.as_bytes())?;
        println!("Report saved to: {}", filename.bright_green());
        Ok(())
    }

    /// Title shown in reports when the document has none
    pub fn display_title(page: &ScrapedPage) -> &str {
        if page.title.is_empty() {
            "No title found"
        } else {
            &page.title
        }
    }

    fn check(value: bool) -> ColoredString {
        if value {
            "Yes".bright_green()
        } else {
            "No".bright_red()
        }
    }

    fn script_source(src: &str) -> &'static str {
        if src.is_empty() {
            "Inline Script"
        } else {
            "External Script"
        }
    }

    fn json_kind(value: &serde_json::Value) -> &'static str {
        match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "bool",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}
