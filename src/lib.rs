pub mod analytics;
pub mod analyzer;
pub mod cli;
pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod http_client;
pub mod keywords;
pub mod models;
pub mod recommendations;
pub mod reporter;
pub mod storage;

use anyhow::{Context, Result};
use cli::Cli;
use colored::*;
use http_client::build_http_client;
use models::AnalysisReport;
use reporter::Reporter;
use std::path::Path;
use url::Url;

pub async fn run(args: Cli) -> Result<()> {
    // Layer file configuration under CLI flags, CLI always wins.
    let file_config = match &args.config {
        Some(path) => Some(config::Config::from_file(Path::new(path))?),
        None => config::Config::from_default_paths()?,
    };
    let args = match file_config {
        Some(cfg) => cfg.merge_with_cli(&args),
        None => args,
    };

    println!(
        "{}",
        "Pagelens - Single-Page SEO & Site-Health Analyzer"
            .bright_cyan()
            .bold()
    );
    println!("{}", "=".repeat(50).bright_blue());
    println!();

    // Validate URL
    if !args.url.starts_with("http://") && !args.url.starts_with("https://") {
        anyhow::bail!("URL must start with http:// or https://");
    }
    let url = Url::parse(&args.url).context("Invalid URL")?;

    println!("{} {}", "Analyzing:".bright_white().bold(), args.url);
    println!();

    let client = build_http_client(args.timeout)?;
    let html = fetcher::fetch_page(&client, &url).await?;

    if args.verbose {
        println!("{}", "Page fetched, running analysis...".bright_yellow());
    }

    let report = analyze_html(&html, &url);

    if args.verbose {
        println!("{}", "Analysis complete".bright_green());
    }

    // Output report
    match args.output.as_str() {
        "json" => {
            let json = serde_json::to_string_pretty(&report)?;
            println!("{}", json);
        }
        _ => {
            Reporter::print_analysis(&report.content_analysis);
            Reporter::print_analytics(&report.page.seo_metadata.detailed_analytics);
            Reporter::print_summary(&report);
        }
    }

    // Save to file if requested
    if let Some(filename) = &args.save {
        Reporter::save_json_report(&report, filename)?;
    }

    // Export all page artifacts if requested
    if let Some(export_dir) = &args.export {
        let site_dir = storage::save_page(
            &report.page,
            &report.content_analysis,
            &url,
            Path::new(export_dir),
        )?;
        println!(
            "{} {}",
            "All files saved to:".bright_white().bold(),
            site_dir.display().to_string().bright_green()
        );
    }

    Ok(())
}

/// Runs the full pure analysis pipeline over already-fetched markup.
///
/// This is the library entry point: no I/O, no shared state, safe to call
/// concurrently for different documents.
pub fn analyze_html(html: &str, url: &Url) -> AnalysisReport {
    let page = extractor::extract_page(html, url);
    let content_analysis = analyzer::analyze_page(&page);
    let health_score = analyzer::health_score(&page);
    let page_recommendations = recommendations::page_recommendations(url.as_str(), &page);

    AnalysisReport {
        url: url.to_string(),
        analyzed_at: chrono::Utc::now().to_rfc3339(),
        page,
        content_analysis,
        health_score,
        page_recommendations,
    }
}
