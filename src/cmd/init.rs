use crate::data::persistence::{get_data_dir, Persistable};
use crate::data::PanelSettings;
use crate::panel::PanelLocale;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

pub fn run() -> Result<()> {
    let dir = get_data_dir()?;
    run_in_dir(&dir)?;
    println!("Data files initialized successfully.");
    Ok(())
}

/// Writes config.yaml and locale.json with default contents into `dir`.
pub(crate) fn run_in_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create dir {}", dir.display()))?;
    PanelSettings::default().save_to(dir)?;
    PanelLocale::default().save_to(dir)?;
    info!(dir = %dir.display(), "data files initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_run_in_dir_writes_both_files() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(tmp.path().join("config.yaml").exists());
        assert!(tmp.path().join("locale.json").exists());
    }

    #[test]
    fn test_run_in_dir_files_load_back_as_defaults() {
        let tmp = TempDir::new().unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert_eq!(PanelSettings::load_from(tmp.path()).unwrap(), PanelSettings::default());
        assert_eq!(PanelLocale::load_from(tmp.path()).unwrap(), PanelLocale::default());
    }

    #[test]
    fn test_run_in_dir_creates_missing_dir() {
        let tmp = TempDir::new().unwrap();
        let nested = tmp.path().join("nested").join("config");
        run_in_dir(&nested).unwrap();
        assert!(nested.join("config.yaml").exists());
    }

    #[test]
    fn test_run_in_dir_overwrites_existing_settings() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join("config.yaml"), "settings:\n  show_footer: false\n").unwrap();
        run_in_dir(tmp.path()).unwrap();
        assert!(PanelSettings::load_from(tmp.path()).unwrap().show_footer);
    }
}
