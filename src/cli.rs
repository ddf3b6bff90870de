use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "pagelens")]
#[command(about = "A CLI single-page SEO and site-health analyzer", long_about = None)]
pub struct Cli {
    /// The URL of the page to analyze
    #[arg(value_name = "URL")]
    pub url: String,

    /// Output format: text or json
    #[arg(short, long, default_value = "text")]
    pub output: String,

    /// Save the full analysis report to a JSON file
    #[arg(short, long)]
    pub save: Option<String>,

    /// Export all page artifacts (HTML, CSS, JS, reports) to this directory
    #[arg(short, long)]
    pub export: Option<String>,

    /// HTTP request timeout in seconds (default: 30)
    #[arg(short, long, default_value_t = 30)]
    pub timeout: u64,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Path to configuration file (JSON, TOML, or YAML)
    #[arg(long)]
    pub config: Option<String>,
}
