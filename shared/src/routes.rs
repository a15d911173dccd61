use thiserror::Error;

/// Pages served by the single-page frontend
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/admin/calendar/{projectId}`: editable calendar
    AdminCalendar(String),
    /// `/viewer/{projectId}`: read-only calendar
    Viewer(String),
    /// `/admin/dates` or `/admin/dates/{projectId}`
    SpecialDates(Option<String>),
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("No project ID found in URL")]
    MissingProjectId,
}

impl Route {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .split('/')
            .filter(|s| !s.is_empty())
            .collect();

        match segments.as_slice() {
            ["admin", "calendar", id] => Route::AdminCalendar(id.to_string()),
            ["viewer", id] => Route::Viewer(id.to_string()),
            ["admin", "dates"] => Route::SpecialDates(None),
            ["admin", "dates", id] => Route::SpecialDates(Some(id.to_string())),
            _ => Route::NotFound,
        }
    }

    /// A calendar path without its project id (`/admin/calendar/`,
    /// `/viewer`) is reported rather than treated as an unknown page.
    pub fn require_project(path: &str) -> Result<(), RouteError> {
        let route_path = path.split(['?', '#']).next().unwrap_or_default();
        let segments: Vec<&str> = route_path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["admin", "calendar"] | ["viewer"] => Err(RouteError::MissingProjectId),
            _ => Ok(()),
        }
    }
}
