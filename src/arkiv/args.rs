use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "arkiv", version = get_version())]
#[command(about = "Search, filter, and page through a local catalog", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to a catalog JSON file (bundled sample catalog if omitted)
    #[arg(short, long, global = true)]
    pub catalog: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Browse one page of the catalog
    #[command(alias = "b")]
    Browse {
        /// Search term matched against item names
        #[arg(short, long)]
        search: Option<String>,

        /// Filter by year, or "all"
        #[arg(short, long)]
        year: Option<String>,

        /// Filter by media kind (case-insensitive substring), or "all"
        #[arg(short, long)]
        media: Option<String>,

        /// Sort order: recent, oldest, or name
        #[arg(long)]
        sort: Option<String>,

        /// Page to open (applied after filters)
        #[arg(short, long)]
        page: Option<usize>,

        /// Starting location query string, e.g. "page=3&ref=mail"
        #[arg(short, long, default_value = "")]
        query: String,

        /// Show items flagged for viewer discretion
        #[arg(long)]
        reveal: bool,

        /// Skip the artificial reveal pause
        #[arg(long)]
        no_delay: bool,
    },

    /// List the filterable years and media kinds
    Facets,

    /// Get or set configuration
    Config {
        /// Configuration key (page-size, max-buttons, reveal-delay-ms)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
