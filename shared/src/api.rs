use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::warn;

use crate::special_dates::SpecialDateKind;

/// Failure talking to the calendar backend. `Display` is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),
    #[error("{message}")]
    Server { status: u16, message: String },
    #[error("Failed to parse response: {0}")]
    Decode(String),
    #[error("Failed to serialize request: {0}")]
    Encode(String),
}

/// Error body the backend sends with non-2xx responses
#[derive(Debug, Clone, Default, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
}

impl ApiError {
    /// Build the error for a non-2xx response, preferring the server's own
    /// `message`, then `error`, then the bare status.
    pub fn from_response(status: u16, body: &str) -> Self {
        let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| format!("HTTP error! status: {}", status));
        ApiError::Server { status, message }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

/// Success body of the move-day endpoint. The server may answer a 2xx with
/// any JSON or with nothing at all; only a string `message` is read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveDayResponse {
    pub message: Option<String>,
}

impl MoveDayResponse {
    /// Never fails: the move has already been saved once the status is 2xx.
    pub fn from_body(body: &str) -> Self {
        if body.trim().is_empty() {
            return Self::default();
        }
        let value = match serde_json::from_str::<Value>(body) {
            Ok(value) => value,
            Err(error) => {
                warn!(%error, "move-day response is not JSON");
                return Self::default();
            }
        };
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(str::to_string);
        Self { message }
    }
}

/// URL builder for every backend route the UI calls.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    /// An empty base URL means same-origin relative paths.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn projects(&self) -> String {
        format!("{}/api/projects", self.base_url)
    }

    pub fn calendar(&self, project_id: &str) -> String {
        format!("{}/api/projects/{}/calendar", self.base_url, project_id)
    }

    pub fn move_day(&self, project_id: &str) -> String {
        format!("{}/move-day", self.calendar(project_id))
    }

    pub fn generate_calendar(&self, project_id: &str) -> String {
        format!("{}/generate", self.calendar(project_id))
    }

    pub fn special_dates(&self, project_id: &str, kind: SpecialDateKind) -> String {
        format!("{}/api/projects/{}/{}", self.base_url, project_id, kind.path_segment())
    }

    pub fn special_date(&self, project_id: &str, kind: SpecialDateKind, id: &str) -> String {
        format!("{}/{}", self.special_dates(project_id, kind), id)
    }
}

/// Browser page paths (not API routes)
pub mod pages {
    use chrono::NaiveDate;

    pub fn admin_day(project_id: &str, date: NaiveDate) -> String {
        format!("/admin/day/{}/{}", project_id, date.format("%Y-%m-%d"))
    }

    pub fn special_dates(project_id: Option<&str>) -> String {
        match project_id {
            Some(id) if !id.is_empty() => format!("/admin/dates/{}", id),
            _ => "/admin/dates".to_string(),
        }
    }
}
