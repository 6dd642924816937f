//! # dnslookup
//!
//! Look up A, CNAME, MX, NS, PTR and TXT records for one domain

mod bootstrap;
mod di;
mod lookup;
mod output;
mod search;

use clap::Parser;
use dnslookup_domain::{CliOverrides, UpstreamProvider};
use search::{LookupRequest, USAGE};
use tracing::info;

#[derive(Parser)]
#[command(name = "dnslookup")]
#[command(version = "0.1.0")]
#[command(about = "Look up and cache DNS records for a domain")]
struct Cli {
    /// Domain to look up
    #[arg(long)]
    domain: Option<String>,

    /// Record kind: a, cname, mx, ns, ptr, txt or all
    #[arg(short = 's', long = "search-type")]
    search_type: Option<String>,

    /// Path to configuration file
    #[arg(short = 'c', long)]
    config: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Upstream resolver: system, google, cloudflare, quad9
    #[arg(long)]
    upstream: Option<UpstreamProvider>,

    /// Per-query timeout in milliseconds
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// Print results as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let request =
        match LookupRequest::from_args(cli.domain.as_deref(), cli.search_type.as_deref()) {
            Ok(request) => request,
            Err(_) => {
                println!("{USAGE}");
                return Ok(());
            }
        };

    let overrides = CliOverrides {
        log_level: cli.log_level,
        upstream: cli.upstream,
        timeout_ms: cli.timeout_ms,
    };
    let config = bootstrap::load_config(cli.config.as_deref(), overrides)?;
    bootstrap::init_logging(&config);
    bootstrap::config::log_config(&config, cli.config.as_deref());

    let services = di::LookupServices::new(&config)?;
    let cache = services.cache_for(&request.domain);
    info!(domain = %request.domain, search = ?request.search, "Starting lookup");

    let rendered = lookup::render_lookup(&cache, request.search, cli.json).await?;
    if !rendered.is_empty() {
        println!("{rendered}");
    }

    Ok(())
}
