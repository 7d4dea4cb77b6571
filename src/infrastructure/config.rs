use crate::presentation::config::keybindings;
use crate::presentation::config::styles;

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use config::ConfigError;
use serde::{de::Deserializer, Deserialize};

use crate::{domain::calendar::parse_date, utils};

const CONFIG: &str = include_str!("../../.config/config.json5");

#[derive(Clone, Debug, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub _data_dir: PathBuf,
    #[serde(default)]
    pub _config_dir: PathBuf,
}

/// Who the dashboard is for.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct CoupleConfig {
    #[serde(default = "default_start_date", deserialize_with = "deserialize_date")]
    pub start_date: NaiveDate,
    #[serde(default = "default_app_name")]
    pub app_name: String,
    #[serde(default = "default_subtitle")]
    pub subtitle: String,
}

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2022, 6, 15).unwrap_or_default()
}

fn default_app_name() -> String {
    "LovAi".to_string()
}

fn default_subtitle() -> String {
    "Together Forever".to_string()
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).map_err(serde::de::Error::custom)
}

impl Default for CoupleConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            app_name: default_app_name(),
            subtitle: default_subtitle(),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize)]
pub struct Config {
    #[serde(default, flatten)]
    pub config: AppConfig,
    #[serde(default)]
    pub keybindings: keybindings::KeyBindings,
    #[serde(default)]
    pub styles: styles::Styles,
    #[serde(default)]
    pub couple: CoupleConfig,
}

impl Config {
    /// Loads the user's config from the platform config directory.
    pub fn new() -> Result<Self, ConfigError> {
        Self::load_from(&utils::get_config_dir())
    }

    /// Loads config files from `config_dir`, filling anything missing from
    /// the embedded defaults. A directory without config files yields the
    /// defaults.
    pub fn load_from(config_dir: &Path) -> Result<Self, ConfigError> {
        let default_config = Self::embedded_default()?;
        let data_dir = utils::get_data_dir();
        let mut builder = config::Config::builder()
            .set_default("_data_dir", data_dir.to_string_lossy().as_ref())?
            .set_default("_config_dir", config_dir.to_string_lossy().as_ref())?;

        let config_files = [
            ("config.json5", config::FileFormat::Json5),
            ("config.json", config::FileFormat::Json),
            ("config.yaml", config::FileFormat::Yaml),
            ("config.toml", config::FileFormat::Toml),
            ("config.ini", config::FileFormat::Ini),
        ];
        let mut found_config = false;
        for (file, format) in &config_files {
            builder = builder.add_source(
                config::File::from(config_dir.join(file))
                    .format(*format)
                    .required(false),
            );
            if config_dir.join(file).exists() {
                found_config = true
            }
        }
        if !found_config {
            log::info!(
                "No configuration file found in {}, using defaults",
                config_dir.display()
            );
        }

        let mut cfg: Self = builder.build()?.try_deserialize()?;
        if !found_config {
            cfg.couple = default_config.couple.clone();
        }
        cfg.merge_defaults(&default_config);

        Ok(cfg)
    }

    /// The configuration shipped inside the binary.
    pub fn embedded_default() -> Result<Self, ConfigError> {
        json5::from_str(CONFIG)
            .map_err(|e| ConfigError::Message(format!("Failed to load default config: {e}")))
    }

    fn merge_defaults(&mut self, default_config: &Config) {
        for (keyseq, action) in default_config.keybindings.iter() {
            self.keybindings
                .entry(keyseq.clone())
                .or_insert_with(|| *action);
        }
        for (style_key, style) in default_config.styles.iter() {
            self.styles
                .entry(style_key.clone())
                .or_insert_with(|| *style);
        }
    }

    /// Applies command-line overrides on top of file configuration.
    pub fn with_start_date(mut self, start_date: Option<NaiveDate>) -> Self {
        if let Some(start_date) = start_date {
            self.couple.start_date = start_date;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::presentation::config::Action;

    #[test]
    fn test_embedded_default() -> Result<(), ConfigError> {
        let cfg = Config::embedded_default()?;

        assert_eq!(cfg.couple, CoupleConfig::default());
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::empty())),
            Some(Action::Quit)
        );
        assert!(cfg.styles.contains_key("accent"));
        Ok(())
    }

    #[test]
    fn test_missing_directory_yields_defaults() -> Result<(), ConfigError> {
        let dir = std::env::temp_dir().join("lovai-config-test-does-not-exist");
        let cfg = Config::load_from(&dir)?;

        assert_eq!(cfg.couple.app_name, "LovAi");
        assert_eq!(cfg.couple.subtitle, "Together Forever");
        assert_eq!(
            cfg.keybindings
                .action_for(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::empty())),
            Some(Action::RefreshWeather)
        );
        Ok(())
    }

    #[test]
    fn test_couple_config_rejects_invalid_date() {
        let parsed: Result<CoupleConfig, _> = json5::from_str(r#"{ "start_date": "2022-02-30" }"#);
        assert!(parsed.is_err());
    }

    #[test]
    fn test_couple_config_partial() -> Result<(), json5::Error> {
        let parsed: CoupleConfig = json5::from_str(r#"{ "start_date": "2020-01-01" }"#)?;
        assert_eq!(
            parsed.start_date,
            NaiveDate::from_ymd_opt(2020, 1, 1).expect("valid date")
        );
        assert_eq!(parsed.app_name, "LovAi");
        Ok(())
    }

    #[test]
    fn test_start_date_override() {
        let date = NaiveDate::from_ymd_opt(2021, 2, 14).expect("valid date");
        let cfg = Config::default().with_start_date(Some(date));
        assert_eq!(cfg.couple.start_date, date);

        let cfg = Config::default().with_start_date(None);
        assert_eq!(cfg.couple.start_date, default_start_date());
    }
}
