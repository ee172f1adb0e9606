use crate::data::persistence::{FileFormat, Persistable};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct PanelSettings {
    /// Date the panel opens on when no `--value` is given. Absent means today.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<NaiveDate>,
    #[serde(default = "default_show_footer")]
    pub show_footer: bool,
}

fn default_show_footer() -> bool {
    true
}

impl Default for PanelSettings {
    fn default() -> Self {
        PanelSettings {
            default_value: None,
            show_footer: default_show_footer(),
        }
    }
}

/// Wrapper for the `settings` key of config.yaml.
#[derive(Serialize, Deserialize, Default, Debug)]
struct SettingsWrapper {
    #[serde(default)]
    settings: PanelSettings,
}

impl Persistable for SettingsWrapper {
    fn filename() -> &'static str {
        "config.yaml"
    }
    fn format() -> FileFormat {
        FileFormat::Yaml
    }
}

impl PanelSettings {
    pub fn load() -> Result<Self> {
        Ok(SettingsWrapper::load()?.settings)
    }

    pub fn load_from(dir: &Path) -> Result<Self> {
        Ok(SettingsWrapper::load_from(dir)?.settings)
    }

    pub fn save_to(&self, dir: &Path) -> Result<()> {
        let wrapper = SettingsWrapper {
            settings: self.clone(),
        };
        wrapper.save_to(dir)
    }

    /// The configured default date, or `today` when none is set.
    pub fn default_date(&self, today: NaiveDate) -> NaiveDate {
        self.default_value.unwrap_or(today)
    }
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT)
        .with_context(|| format!("'{}' is not a date in YYYY-MM-DD form", raw))
}
