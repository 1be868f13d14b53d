use std::path::PathBuf;

use clap::Parser;
use visionchef_core::domain::{common::ClientConfig, state::entities::STORAGE_KEY};

#[derive(Debug, Clone, Parser)]
#[command(name = "visionchef", version, about = "Recipe suggestions from what is in your kitchen")]
pub struct Args {
    /// Endpoint of the prompt proxy.
    #[arg(
        long = "proxy-url",
        env = "VISIONCHEF_PROXY_URL",
        default_value = "http://localhost:3333/api/prompt"
    )]
    pub proxy_url: String,

    /// Directory holding the saved profile and history.
    #[arg(long = "data-dir", env = "VISIONCHEF_DATA_DIR", default_value = ".visionchef")]
    pub data_dir: PathBuf,

    #[arg(long = "storage-key", env = "VISIONCHEF_STORAGE_KEY", default_value = STORAGE_KEY)]
    pub storage_key: String,

    /// Used when `RUST_LOG` is not set.
    #[arg(long = "log-filter", env = "LOG_FILTER", default_value = "warn")]
    pub log_filter: String,
}

impl From<Args> for ClientConfig {
    fn from(args: Args) -> Self {
        Self {
            proxy_url: args.proxy_url,
            data_dir: args.data_dir,
            storage_key: args.storage_key,
        }
    }
}
