use shared::{AppConfig, Route};
use tracing::{error, info, warn};
use yew::prelude::*;

mod components;
mod hooks;
mod services;

use components::calendar_view::CalendarView;
use components::header::{ActivePage, Header};
use components::special_dates::page::SpecialDatesPage;
use services::api::ApiClient;
use services::browser;

#[derive(Properties, PartialEq)]
struct AppProps {
    config: AppConfig,
}

#[function_component(App)]
fn app(props: &AppProps) -> Html {
    let api_client = use_memo(props.config.api_base_url.clone(), |_| {
        ApiClient::new(props.config.endpoints())
    });
    let path = use_memo((), |_| browser::current_path());
    let route = Route::from_path(&path);

    match route {
        Route::AdminCalendar(project_id) => html! {
            <CalendarView api_client={(*api_client).clone()} config={props.config.clone()} {project_id} admin=true />
        },
        Route::Viewer(project_id) => html! {
            <CalendarView api_client={(*api_client).clone()} config={props.config.clone()} {project_id} admin=false />
        },
        Route::SpecialDates(project_id) => html! {
            <SpecialDatesPage api_client={(*api_client).clone()} config={props.config.clone()} {project_id} />
        },
        Route::NotFound => {
            let message = match Route::require_project(&path) {
                Err(e) => {
                    error!(path = %*path, "{}", e);
                    e.to_string()
                }
                Ok(()) => {
                    warn!(path = %*path, "no page for this path");
                    "Page not found".to_string()
                }
            };
            html! {
                <>
                    <Header title="Shoot Calendar" project_id={Option::<String>::None} active={ActivePage::Calendar} />
                    <main class="container">
                        <div class="error-message">{message}</div>
                    </main>
                </>
            }
        }
    }
}

fn main() {
    let (config, config_error) = match services::config::load_config() {
        Ok(config) => (config, None),
        Err(e) => (AppConfig::default(), Some(e)),
    };

    if let Err(e) = services::logging::init(&config.log_filter) {
        gloo::console::error!(format!("Failed to initialise logging: {:#}", e));
    }
    if let Some(e) = config_error {
        warn!("{:#}; using defaults", e);
    }

    info!(api_base_url = %config.api_base_url, "starting shoot calendar");
    yew::Renderer::<App>::with_props(AppProps { config }).render();
}
