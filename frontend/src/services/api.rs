use gloo::net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use shared::{
    ApiError, CalendarData, Endpoints, MoveDayResponse, MoveRequest, ProjectSummary, SpecialDate,
};
use tracing::{info, warn};

/// API client for the calendar backend
#[derive(Clone, PartialEq)]
pub struct ApiClient {
    endpoints: Endpoints,
}

impl ApiClient {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// Get the calendar document for a project
    pub async fn get_calendar(&self, project_id: &str) -> Result<CalendarData, ApiError> {
        let url = self.endpoints.calendar(project_id);
        info!(%url, "fetching calendar");
        let response = Request::get(&url).send().await.map_err(network_error)?;
        read_json(response).await
    }

    /// Move or swap a shoot day. Any 2xx is a success whatever its body holds.
    pub async fn move_day(&self, project_id: &str, request: &MoveRequest) -> Result<MoveDayResponse, ApiError> {
        let url = self.endpoints.move_day(project_id);
        info!(from = %request.from_date, to = %request.to_date, mode = %request.mode, "moving shoot day");

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        let body = body_text(&response).await?;
        if !response.ok() {
            return Err(ApiError::from_response(response.status(), &body));
        }
        Ok(MoveDayResponse::from_body(&body))
    }

    pub async fn list_projects(&self) -> Result<Vec<ProjectSummary>, ApiError> {
        let response = Request::get(&self.endpoints.projects())
            .send()
            .await
            .map_err(network_error)?;
        read_json(response).await
    }

    /// Ask the server to rebuild the calendar from the special dates
    pub async fn regenerate_calendar(&self, project_id: &str) -> Result<(), ApiError> {
        let url = self.endpoints.generate_calendar(project_id);
        info!(%url, "regenerating calendar");
        let response = Request::post(&url).send().await.map_err(network_error)?;
        expect_success(response).await
    }

    /// List one kind of special date, already in display order. A 404 means
    /// the project has none yet.
    pub async fn list_special_dates<T: SpecialDate>(&self, project_id: &str) -> Result<Vec<T>, ApiError> {
        let url = self.endpoints.special_dates(project_id, T::KIND);
        let response = Request::get(&url).send().await.map_err(network_error)?;
        let mut items: Vec<T> = match read_json(response).await {
            Ok(items) => items,
            Err(error) if error.is_not_found() => {
                info!(kind = T::KIND.noun(), "none found (404)");
                Vec::new()
            }
            Err(error) => return Err(error),
        };
        T::sort_for_display(&mut items);
        Ok(items)
    }

    /// Create when `id` is `None`, otherwise update that record.
    pub async fn save_special_date<T: SpecialDate, R: Serialize>(
        &self,
        project_id: &str,
        id: Option<&str>,
        request: &R,
    ) -> Result<(), ApiError> {
        let builder = match id {
            Some(id) => Request::put(&self.endpoints.special_date(project_id, T::KIND, id)),
            None => Request::post(&self.endpoints.special_dates(project_id, T::KIND)),
        };
        let response = builder
            .json(request)
            .map_err(|e| ApiError::Encode(e.to_string()))?
            .send()
            .await
            .map_err(network_error)?;
        expect_success(response).await
    }

    pub async fn delete_special_date<T: SpecialDate>(&self, project_id: &str, id: &str) -> Result<(), ApiError> {
        let url = self.endpoints.special_date(project_id, T::KIND, id);
        let response = Request::delete(&url).send().await.map_err(network_error)?;
        expect_success(response).await
    }
}

fn network_error(error: gloo::net::Error) -> ApiError {
    warn!(%error, "request failed");
    ApiError::Network(error.to_string())
}

async fn body_text(response: &Response) -> Result<String, ApiError> {
    response.text().await.map_err(|e| ApiError::Network(e.to_string()))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let body = body_text(&response).await?;
    if !response.ok() {
        return Err(ApiError::from_response(response.status(), &body));
    }
    serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))
}

async fn expect_success(response: Response) -> Result<(), ApiError> {
    if response.ok() {
        return Ok(());
    }
    let body = body_text(&response).await.unwrap_or_default();
    Err(ApiError::from_response(response.status(), &body))
}
