use yew::prelude::*;
use shared::CalendarData;
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;

#[derive(Clone, PartialEq)]
pub struct CalendarState {
    pub calendar: Option<CalendarData>,
    pub loading: bool,
    pub error: Option<String>,
}

pub struct UseCalendarResult {
    pub state: CalendarState,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub refresh_calendar: Callback<()>,
}

#[hook]
pub fn use_calendar(api_client: &ApiClient, project_id: &str) -> UseCalendarResult {
    let calendar = use_state(|| Option::<CalendarData>::None);
    let loading = use_state(|| true);
    let error_message = use_state(|| Option::<String>::None);

    let refresh_calendar = {
        let api_client = api_client.clone();
        let calendar = calendar.clone();
        let loading = loading.clone();
        let error_message = error_message.clone();

        use_callback(project_id.to_string(), move |_, project_id: &String| {
            let api_client = api_client.clone();
            let calendar = calendar.clone();
            let loading = loading.clone();
            let error_message = error_message.clone();
            let project_id = project_id.clone();

            spawn_local(async move {
                loading.set(true);

                match api_client.get_calendar(&project_id).await {
                    Ok(data) => {
                        info!(%project_id, days = data.days.len(), "calendar loaded");
                        error_message.set(None);
                        calendar.set(Some(data));
                    }
                    Err(e) => {
                        error!(%project_id, error = %e, "failed to fetch calendar");
                        error_message.set(Some(format!("Error loading calendar: {}", e)));
                    }
                }

                loading.set(false);
            });
        })
    };

    // Load once per project
    {
        let refresh_calendar = refresh_calendar.clone();
        use_effect_with(project_id.to_string(), move |_| {
            refresh_calendar.emit(());
            || ()
        });
    }

    UseCalendarResult {
        state: CalendarState {
            calendar: (*calendar).clone(),
            loading: *loading,
            error: (*error_message).clone(),
        },
        actions: UseCalendarActions { refresh_calendar },
    }
}
