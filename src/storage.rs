use crate::models::{ContentAnalysis, PageMetadata, ScrapedPage, ScrapeStats};
use crate::reporter::Reporter;
use anyhow::{Context, Result};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

/// Derives a filesystem-safe directory name from the page URL, suffixed with
/// a timestamp to keep repeated exports of the same page apart.
pub fn safe_dir_name(url: &Url) -> String {
    let domain = url
        .host_str()
        .unwrap_or_default()
        .replace("www.", "")
        .replace('.', "_");

    let mut path = url.path().replace(['/', '\\'], "_");
    if path.is_empty() || path == "_" {
        path = "home".to_string();
    } else {
        path = path.trim_start_matches('_').to_string();
    }

    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
    format!("{}_{}_{}", domain, path, timestamp)
}

/// Writes every export artifact for one analyzed page under
/// `base_dir/<safe name>/` and returns the created directory.
pub fn save_page(
    page: &ScrapedPage,
    analysis: &ContentAnalysis,
    url: &Url,
    base_dir: &Path,
) -> Result<PathBuf> {
    let site_dir = base_dir.join(safe_dir_name(url));
    fs::create_dir_all(&site_dir)
        .with_context(|| format!("Failed to create export directory: {}", site_dir.display()))?;

    write_file(&site_dir, "index.html", &page.html_content)?;
    write_file(&site_dir, "styles.css", &render_css(page))?;
    write_file(&site_dir, "scripts.js", &render_js(page))?;
    write_file(&site_dir, "links.txt", &render_links(page, url))?;

    let metadata = PageMetadata {
        original_url: url.to_string(),
        scraped_at: chrono::Utc::now().to_rfc3339(),
        title: page.title.clone(),
        stats: ScrapeStats {
            links_count: page.links.len(),
            inline_styles_count: page.css_content.inline_styles.len(),
            internal_stylesheets_count: page.css_content.internal_stylesheets.len(),
            external_stylesheets_count: page.css_content.external_stylesheets.len(),
            inline_scripts_count: page.js_content.inline_scripts.len(),
            external_scripts_count: page.js_content.external_scripts.len(),
        },
        seo_metadata: page.seo_metadata.clone(),
    };
    write_file(&site_dir, "metadata.json", &to_pretty_json(&metadata)?)?;
    write_file(
        &site_dir,
        "content_analysis.json",
        &to_pretty_json(analysis)?,
    )?;
    write_file(
        &site_dir,
        "analytics_data.json",
        &to_pretty_json(&page.seo_metadata.detailed_analytics)?,
    )?;
    write_file(
        &site_dir,
        "seo_report.txt",
        &Reporter::render_seo_report(page, url.as_str()),
    )?;

    tracing::info!(directory = %site_dir.display(), "Export complete");
    Ok(site_dir)
}

fn write_file(dir: &Path, name: &str, contents: &str) -> Result<()> {
    let path = dir.join(name);
    fs::write(&path, contents).with_context(|| format!("Failed to write {}", path.display()))
}

fn to_pretty_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize export artifact")
}

fn render_css(page: &ScrapedPage) -> String {
    let css = &page.css_content;
    let mut out = String::from("/* === INLINE STYLES === */\n");
    for (index, style) in css.inline_styles.iter().enumerate() {
        let _ = writeln!(out, "\n/* --- Inline Style {} --- */\n{}", index + 1, style);
    }

    out.push_str("\n\n/* === INTERNAL STYLESHEETS === */\n");
    for (index, style) in css.internal_stylesheets.iter().enumerate() {
        let _ = writeln!(
            out,
            "\n/* --- Internal Stylesheet {} --- */\n{}",
            index + 1,
            style
        );
    }

    out.push_str("\n\n/* === EXTERNAL STYLESHEETS === */\n");
    for (index, href) in css.external_stylesheets.iter().enumerate() {
        let _ = writeln!(out, "/* {}. {} */", index + 1, href);
    }

    out
}

fn render_js(page: &ScrapedPage) -> String {
    let js = &page.js_content;
    let mut out = String::from("// === INLINE SCRIPTS ===\n");
    for (index, script) in js.inline_scripts.iter().enumerate() {
        let _ = writeln!(out, "\n// --- Inline Script {} ---\n{}", index + 1, script);
    }

    out.push_str("\n\n// === EXTERNAL SCRIPTS ===\n");
    for (index, src) in js.external_scripts.iter().enumerate() {
        let _ = writeln!(out, "// {}. {}", index + 1, src);
    }

    out
}

fn render_links(page: &ScrapedPage, url: &Url) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Links found on: {}", url);
    let _ = writeln!(
        out,
        "Scraped on: {}",
        chrono::Utc::now().format("%Y-%m-%d %H:%M:%S")
    );
    let _ = writeln!(out, "{}\n", "=".repeat(50));
    for (index, link) in page.links.iter().enumerate() {
        let _ = writeln!(out, "{}. {}", index + 1, link);
    }
    out
}
