use clap::Parser;
use naukri_scout::ScraperConfig;
use naukri_scout::shell;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => match ScraperConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                ::log::error!("Failed to load config {}: {}", path.display(), e);
                return;
            }
        },
        None => ScraperConfig::default(),
    };

    if let Some(webdriver_url) = args.webdriver_url {
        config.webdriver_url = webdriver_url;
    }
    if args.headed {
        config.headless = false;
    }

    println!("Note: scraping requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL or pass --webdriver-url if not using the default {}",
        config.webdriver_url
    );

    ::log::info!("Starting shell on {}", args.bind);

    if let Err(e) = shell::serve(&args.bind, config).await {
        ::log::error!("Shell server failed: {}", e);
    }
}
