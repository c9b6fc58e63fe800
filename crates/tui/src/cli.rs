use chanview_api::client::Config;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "chanview", version, about = "Browse 4chan boards and catalogs in the terminal")]
pub struct Args {
    /// Talk to the API over plain HTTP
    #[arg(long)]
    pub http: bool,

    /// API base URL, overrides the default host
    #[arg(long, value_name = "URL")]
    pub base_url: Option<String>,

    /// Request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    /// Where to write the log [default: chanview.log in the temp dir]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Args {
    pub fn config(&self) -> Config {
        Config::new(Some(!self.http), self.base_url.clone(), self.timeout)
    }

    pub fn log_file(&self) -> PathBuf {
        self.log_file
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("chanview.log"))
    }
}
