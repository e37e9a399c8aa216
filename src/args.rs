use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "naukri-scout")]
#[command(about = "Scrapes Naukri job listings through a WebDriver-driven browser")]
#[command(version)]
pub struct Args {
    /// Address the interactive shell binds to
    #[arg(short, long, default_value = "127.0.0.1:8080")]
    pub bind: String,

    /// WebDriver server URL (overrides the config file)
    #[arg(short, long)]
    pub webdriver_url: Option<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    pub headed: bool,
}
