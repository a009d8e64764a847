use anyhow::Context;
use log::info;
use rocket::figment::Figment;
use serde::Deserialize;
use std::path::PathBuf;

/// App config, loaded from Rocket config (`Rocket.toml` and `ROCKET_*` env
/// vars). Every field has a default, so an empty config is valid.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// File the external handler writes the selected metric to
    pub settings_path: PathBuf,
    #[serde(flatten)]
    pub page: PageConfig,
}

/// Everything the page needs besides the selection itself
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Where the form submits to. Handled outside this app.
    pub form_action: String,
    #[serde(rename = "page_title")]
    pub title: String,
    /// Optional stylesheet URL, linked for handheld media
    pub stylesheet: Option<String>,
}

impl Config {
    /// Pull our section out of the Rocket figment
    pub fn load(figment: &Figment) -> anyhow::Result<Self> {
        let config: Self = figment
            .extract()
            .context("Error parsing config from Rocket config")?;
        info!("Loaded config: {config:?}");
        Ok(config)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            settings_path: "/var/www/setting.txt".into(),
            page: PageConfig::default(),
        }
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            form_action: "write_setting.php".into(),
            title: "Weather Clock mode control".into(),
            stylesheet: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rocket::figment::providers::Serialized;

    #[test]
    fn test_defaults() {
        let figment = Figment::new();
        assert_eq!(Config::load(&figment).unwrap(), Config::default());
    }

    #[test]
    fn test_overrides() {
        let figment = Figment::new()
            .merge(Serialized::default("settings_path", "/tmp/setting.txt"))
            .merge(Serialized::default("form_action", "/write"))
            .merge(Serialized::default("stylesheet", "/mobile.css"));
        let config = Config::load(&figment).unwrap();
        assert_eq!(config.settings_path, PathBuf::from("/tmp/setting.txt"));
        assert_eq!(config.page.form_action, "/write");
        assert_eq!(config.page.title, "Weather Clock mode control");
        assert_eq!(config.page.stylesheet.as_deref(), Some("/mobile.css"));
    }
}
