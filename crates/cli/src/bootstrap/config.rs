use dnsconf_domain::{CliOverrides, Config};

pub struct LoadedConfig {
    pub config: Config,
    pub source: Option<String>,
}

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<LoadedConfig> {
    let source = config_path
        .map(str::to_string)
        .or_else(Config::get_config_path);

    let config = Config::load(source.as_deref(), cli_overrides)?;

    Ok(LoadedConfig { config, source })
}
