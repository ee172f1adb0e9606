use crate::data::persistence::{FileFormat, Persistable};
use crate::panel::PanelLocale;

/// locale.json holds the header titles, e.g.
/// `{ "previousDecade": "...", "nextDecade": "...", "decadeSelect": "..." }`.
impl Persistable for PanelLocale {
    fn filename() -> &'static str {
        "locale.json"
    }
    fn format() -> FileFormat {
        FileFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_locale_missing_file_is_english() {
        let tmp = TempDir::new().unwrap();
        let locale = PanelLocale::load_from(tmp.path()).unwrap();
        assert_eq!(locale.previous_decade, "Last decade");
        assert_eq!(locale.next_decade, "Next decade");
        assert_eq!(locale.decade_select, "Choose a decade");
    }

    #[test]
    fn test_locale_reads_camel_case_keys() {
        let tmp = TempDir::new().unwrap();
        std::fs::write(
            tmp.path().join("locale.json"),
            r#"{"previousDecade":"Vorheriges Jahrzehnt","nextDecade":"Nächstes Jahrzehnt","decadeSelect":"Jahrzehnt wählen"}"#,
        )
        .unwrap();
        let locale = PanelLocale::load_from(tmp.path()).unwrap();
        assert_eq!(locale.previous_decade, "Vorheriges Jahrzehnt");
        assert_eq!(locale.decade_select, "Jahrzehnt wählen");
    }

    #[test]
    fn test_locale_save_to_writes_camel_case() {
        let tmp = TempDir::new().unwrap();
        PanelLocale::default().save_to(tmp.path()).unwrap();
        let raw = std::fs::read_to_string(tmp.path().join("locale.json")).unwrap();
        assert!(raw.contains("\"previousDecade\""));
        assert!(raw.contains("\"decadeSelect\""));
    }
}
