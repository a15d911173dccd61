//! Thin wrappers over window navigation and the native dialogs.

use gloo::utils::window;
use tracing::{error, info};

pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}

pub fn navigate(path: &str) {
    info!(path, "navigating");
    if let Err(e) = window().location().set_href(path) {
        error!(path, error = ?e, "navigation failed");
    }
}

pub fn reload() {
    if let Err(e) = window().location().reload() {
        error!(error = ?e, "reload failed");
    }
}

pub fn alert(message: &str) {
    gloo::dialogs::alert(message);
}

pub fn confirm(message: &str) -> bool {
    gloo::dialogs::confirm(message)
}
