use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use url::Url;

/// Fetches the page body for analysis.
///
/// All transport concerns live here; the analysis pipeline itself never
/// performs I/O and is handed the already-fetched markup.
pub async fn fetch_page(client: &Client, url: &Url) -> Result<String> {
    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(anyhow!(
                "Invalid URL scheme '{}': only http and https are supported",
                scheme
            ));
        }
    }

    tracing::info!(url = %url, "Fetching page");

    let response = client
        .get(url.as_str())
        .send()
        .await
        .with_context(|| format!("Failed to fetch {}", url))?;

    let status = response.status();
    if !status.is_success() {
        return Err(anyhow!("HTTP {} while fetching {}", status.as_u16(), url));
    }

    if let Some(content_type) = response
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
    {
        let lowered = content_type.to_lowercase();
        if !lowered.contains("text/html") && !lowered.contains("application/xhtml") {
            tracing::warn!(
                url = %url,
                content_type = %content_type,
                "Non-HTML content type detected, analysis may be incomplete"
            );
        }
    }

    response
        .text()
        .await
        .with_context(|| format!("Failed to read response body from {}", url))
}
