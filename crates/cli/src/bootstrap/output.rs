use std::io::Write;

use anyhow::Context;
use dnsconf_domain::NormalizedDnsConfig;
use tracing::info;

pub fn render(config: &NormalizedDnsConfig, pretty: bool) -> anyhow::Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(config)
    } else {
        serde_json::to_string(config)
    };
    rendered.context("Failed to serialize DNS configuration")
}

pub fn write_output(
    config: &NormalizedDnsConfig,
    pretty: bool,
    path: Option<&str>,
) -> anyhow::Result<()> {
    let rendered = render(config, pretty)?;

    match path {
        Some(path) => {
            std::fs::write(path, format!("{}\n", rendered))
                .with_context(|| format!("Failed to write output file {}", path))?;
            info!(path, bytes = rendered.len(), "DNS configuration written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{}", rendered).context("Failed to write to stdout")?;
        }
    }

    Ok(())
}
