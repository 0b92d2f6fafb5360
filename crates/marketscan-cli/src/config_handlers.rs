//! Handler functions for `marketscan config` commands.

use std::path::Path;

use marketscan_core::{Error, Result};

use crate::cli::ConfigAction;
use crate::config::{ConfigSource, MarketscanConfig, PROJECT_NAME, default_config_path};

/// Handle a config subcommand.
pub fn handle_config_command(source: &ConfigSource, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Path => cmd_config_path(source),
        ConfigAction::Init { file, force } => cmd_config_init(file.as_deref(), force),
        ConfigAction::Show => {
            let config = MarketscanConfig::load(source)?;
            cmd_config_show(&config)
        }
        ConfigAction::Get { key } => {
            let config = MarketscanConfig::load(source)?;
            cmd_config_get(&config, &key)
        }
    }
}

/// Show the resolved config file path.
pub fn cmd_config_path(source: &ConfigSource) -> Result<()> {
    let path = source.path().ok_or_else(|| {
        Error::config("Could not determine config directory for this platform")
    })?;
    println!("{}", path.display());
    if !path.exists() {
        eprintln!("(file does not exist; run `{PROJECT_NAME} config init` to create it)");
    }
    Ok(())
}

/// Create a config file with default values.
pub fn cmd_config_init(file: Option<&Path>, force: bool) -> Result<()> {
    let path = match file {
        Some(p) => p.to_path_buf(),
        None => default_config_path()
            .ok_or_else(|| Error::config("Could not determine config directory"))?,
    };

    if path.exists() && !force {
        return Err(Error::config(format!(
            "Config file already exists at {}. Use --force to overwrite.",
            path.display()
        )));
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(e, parent))?;
    }

    let toml_str = MarketscanConfig::default().to_toml_string()?;
    std::fs::write(&path, toml_str).map_err(|e| Error::io(e, &path))?;

    println!("Config file created at {}", path.display());
    Ok(())
}

/// Print the effective configuration.
pub fn cmd_config_show(config: &MarketscanConfig) -> Result<()> {
    print!("{}", config.to_toml_string()?);
    Ok(())
}

/// Print one configuration value by dotted key.
pub fn cmd_config_get(config: &MarketscanConfig, key: &str) -> Result<()> {
    println!("{}", config_value(config, key)?);
    Ok(())
}

/// Look up a dotted key in the serialized configuration.
pub fn config_value(config: &MarketscanConfig, key: &str) -> Result<String> {
    let value = toml::Value::try_from(config).map_err(|e| Error::config(e.to_string()))?;
    get_nested_value(&value, key)
        .map(format_toml_value)
        .ok_or_else(|| Error::config(format!("Key '{key}' not found in configuration")))
}

/// Navigate a dotted key path in a TOML value tree.
pub fn get_nested_value<'a>(value: &'a toml::Value, key: &str) -> Option<&'a toml::Value> {
    key.split('.')
        .try_fold(value, |current, part| current.as_table()?.get(part))
}

/// Format a TOML value for display on stdout.
pub fn format_toml_value(value: &toml::Value) -> String {
    match value {
        toml::Value::String(s) => s.clone(),
        toml::Value::Integer(i) => i.to_string(),
        toml::Value::Float(f) => f.to_string(),
        toml::Value::Boolean(b) => b.to_string(),
        toml::Value::Datetime(dt) => dt.to_string(),
        toml::Value::Array(items) => items
            .iter()
            .map(format_toml_value)
            .collect::<Vec<_>>()
            .join("\n"),
        toml::Value::Table(_) => {
            toml::to_string_pretty(value).unwrap_or_else(|_| format!("{value:?}"))
        }
    }
}
