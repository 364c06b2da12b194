//! # dnsconf
//!
//! Validates a DNS configuration file and emits the normalized resolver configuration.

use clap::Parser;
use dnsconf_domain::CliOverrides;
use tracing::{error, info};

mod bootstrap;

#[derive(Parser)]
#[command(name = "dnsconf")]
#[command(version)]
#[command(about = "Normalize a DNS configuration for the resolver")]
struct Cli {
    /// Configuration file path (TOML, or JSON with a .json extension)
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Write the normalized configuration to FILE instead of stdout
    #[arg(short = 'o', long, value_name = "FILE")]
    output: Option<String>,

    /// Emit single-line JSON
    #[arg(long)]
    compact: bool,

    /// Only validate, print nothing on success
    #[arg(long)]
    check: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        log_level: cli.log_level.clone(),
        pretty: cli.compact.then_some(false),
    };

    let loaded = match bootstrap::load_config(cli.config.as_deref(), cli_overrides) {
        Ok(loaded) => loaded,
        Err(e) => {
            bootstrap::init_logging(bootstrap::fallback_level(cli.log_level.as_deref()));
            error!(error = %e, "Failed to load configuration");
            return Err(e);
        }
    };
    let config = loaded.config;

    bootstrap::init_logging(&config.logging.level);

    info!(
        config_file = loaded.source.as_deref().unwrap_or("default"),
        servers = config.dns.servers.len(),
        hosts = config.dns.hosts.as_ref().map_or(0, |h| h.len()),
        "Configuration loaded"
    );

    let normalized = match config.validate().and_then(|()| config.build_dns()) {
        Ok(normalized) => normalized,
        Err(e) => {
            error!(error = %e, "Configuration rejected");
            return Err(e.into());
        }
    };

    info!(
        name_servers = normalized.name_servers.len(),
        static_hosts = normalized.static_hosts.len(),
        client_ip = normalized.client_ip.is_some(),
        "DNS configuration built"
    );

    if cli.check {
        info!("Configuration is valid");
        return Ok(());
    }

    bootstrap::write_output(&normalized, config.output.pretty, cli.output.as_deref())?;

    Ok(())
}
