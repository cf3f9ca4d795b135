use anyhow::Result;
use clap::Parser;
use release_selector::asset::Platform;
use release_selector::commands;
use release_selector::config::{Config, Settings};
use std::path::PathBuf;

/// release-selector - download page for mobile app releases
///
/// Fetches the GitHub releases of a repository, picks the Android and iOS
/// builds of each release and renders them as a static download page.
///
/// Examples:
///   release-selector render --output index.html
///   release-selector --repo owner/app list --json
///   release-selector select --platform ios --index 1
#[derive(Parser, Debug)]
#[command(author, version = env!("RELEASE_SELECTOR_VERSION"), about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// GitHub repository in the format "owner/repo"
    #[arg(
        long,
        env = "RELEASE_SELECTOR_REPO",
        value_name = "OWNER/REPO",
        global = true
    )]
    pub repo: Option<String>,

    /// GitHub API URL (defaults to https://api.github.com)
    #[arg(long = "api-url", value_name = "URL", global = true)]
    pub api_url: Option<String>,

    /// Location of site-info.json, a URL or a local path
    #[arg(
        long = "site-info",
        env = "RELEASE_SELECTOR_SITE_INFO",
        value_name = "URL|PATH",
        global = true
    )]
    pub site_info: Option<String>,

    /// File offered for Android when releases cannot be loaded
    #[arg(long = "android-fallback", value_name = "NAME", global = true)]
    pub android_fallback: Option<String>,

    /// File offered for iOS when releases cannot be loaded
    #[arg(long = "ios-fallback", value_name = "NAME", global = true)]
    pub ios_fallback: Option<String>,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Render the download page as HTML
    Render(RenderArgs),

    /// List the Android and iOS releases, newest first
    List(ListArgs),

    /// Select a release of one platform and show its download link
    Select(SelectArgs),
}

#[derive(clap::Args, Debug)]
pub struct RenderArgs {
    /// Write the page to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Page title
    #[arg(long)]
    pub title: Option<String>,
}

#[derive(clap::Args, Debug)]
pub struct ListArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}

#[derive(clap::Args, Debug)]
pub struct SelectArgs {
    #[arg(long, short = 'p', value_enum)]
    pub platform: Platform,

    /// Position in the list, 0 is the latest release
    #[arg(long, short = 'i', default_value_t = 0)]
    pub index: usize,
}

impl Cli {
    fn settings(&self) -> Settings {
        let title = match &self.command {
            Commands::Render(args) => args.title.clone(),
            _ => None,
        };

        Settings {
            repo: self.repo.clone(),
            api_url: self.api_url.clone(),
            site_info: self.site_info.clone(),
            android_fallback: self.android_fallback.clone(),
            ios_fallback: self.ios_fallback.clone(),
            title,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    let config = Config::new(cli.settings())?;

    match cli.command {
        Commands::Render(args) => commands::render(&config, args.output).await?,
        Commands::List(args) => commands::list(&config, args.json).await?,
        Commands::Select(args) => commands::select(&config, args.platform, args.index).await?,
    }
    Ok(())
}
