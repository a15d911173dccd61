use anyhow::{Context, Result};
use gloo::utils::document;
use shared::AppConfig;

/// Id of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "calendar-config";

/// Read the page configuration once at start-up. No element means defaults.
pub fn load_config() -> Result<AppConfig> {
    match document().get_element_by_id(CONFIG_ELEMENT_ID) {
        Some(element) => {
            let json = element.text_content().unwrap_or_default();
            parse_config(&json)
        }
        None => Ok(AppConfig::default()),
    }
}

/// Blank content counts as "no overrides".
pub fn parse_config(json: &str) -> Result<AppConfig> {
    if json.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    AppConfig::from_json(json).with_context(|| format!("invalid JSON in #{}", CONFIG_ELEMENT_ID))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_config_uses_defaults() {
        assert_eq!(parse_config("  \n").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_error_names_the_element() {
        let error = parse_config("{oops").unwrap_err();
        assert!(error.to_string().contains("calendar-config"));
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_reads_config_element() {
        let doc = document();
        let script = doc.create_element("script").unwrap();
        script.set_id(CONFIG_ELEMENT_ID);
        script.set_attribute("type", "application/json").unwrap();
        script.set_text_content(Some(r#"{"logFilter":"debug"}"#));
        doc.body().unwrap().append_child(&script).unwrap();

        let config = load_config().unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.filter_storage_key, "calendarFilterPrefs");

        script.remove();
        assert_eq!(load_config().unwrap(), AppConfig::default());
    }
}
