use std::path::PathBuf;

use clap::Parser;

/// Lotaya creative-generation gateway
#[derive(Debug, Parser)]
#[command(name = "lotaya", about = "AI gateway for image and video generation")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "lotaya.toml", env = "LOTAYA_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "LOTAYA_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
