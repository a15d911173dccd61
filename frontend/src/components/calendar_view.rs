use gloo::events::EventListener;
use gloo::utils::window;
use shared::zoom::is_scrollable;
use shared::{AppConfig, ZoomState};
use web_sys::Element;
use yew::prelude::*;

use super::calendar_table::{CalendarTable, DragProps};
use super::filter_panel::FilterPanel;
use super::header::{ActivePage, Header};
use super::loading_overlay::LoadingOverlay;
use super::location_legend::LocationLegend;
use super::zoom_controls::ZoomControls;
use crate::hooks::use_calendar::use_calendar;
use crate::hooks::use_drag_drop::use_drag_drop;
use crate::hooks::use_filters::use_filters;
use crate::services::api::ApiClient;
use crate::services::preferences::FilterStore;

#[derive(Properties, PartialEq)]
pub struct CalendarViewProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
    pub project_id: String,
    /// Admin pages can drag shoot days and open a day's detail page
    pub admin: bool,
}

#[function_component(CalendarView)]
pub fn calendar_view(props: &CalendarViewProps) -> Html {
    let calendar = use_calendar(&props.api_client, &props.project_id);
    let store = FilterStore::new(props.config.filter_storage_key.clone());
    let filters = use_filters(&store);
    let drag = use_drag_drop(&props.api_client, &props.project_id);
    let zoom = use_state(ZoomState::default);
    let scrollable = use_state_eq(|| false);
    let wrapper_ref = use_node_ref();

    let check_scrollable = {
        let wrapper_ref = wrapper_ref.clone();
        let scrollable = scrollable.clone();
        Callback::from(move |_: ()| {
            if let Some(wrapper) = wrapper_ref.cast::<Element>() {
                scrollable.set(is_scrollable(wrapper.scroll_width(), wrapper.client_width()));
            }
        })
    };

    // Recheck after anything that changes the table's width
    {
        let check_scrollable = check_scrollable.clone();
        let day_count = calendar.state.calendar.as_ref().map_or(0, |c| c.days.len());
        use_effect_with((*zoom, filters.state, day_count), move |_| {
            check_scrollable.emit(());
            || ()
        });
    }

    {
        let check_scrollable = check_scrollable.clone();
        use_effect_with((), move |_| {
            let listener = EventListener::new(&window(), "resize", move |_| check_scrollable.emit(()));
            move || drop(listener)
        });
    }

    let on_zoom_change = {
        let zoom = zoom.clone();
        Callback::from(move |next: ZoomState| zoom.set(next))
    };

    let (days, areas) = calendar
        .state
        .calendar
        .as_ref()
        .map(|c| (c.days.clone(), c.location_areas.clone()))
        .unwrap_or_default();
    let stats = filters.state.stats(&days);

    let drag_props = props.admin.then(|| DragProps {
        controller: drag.state.clone(),
        actions: drag.actions.clone(),
    });

    let (title, active) = if props.admin {
        ("Shoot Calendar", ActivePage::Calendar)
    } else {
        ("Shoot Calendar (view only)", ActivePage::Viewer)
    };

    html! {
        <>
            <Header title={title} project_id={Some(props.project_id.clone())} {active} />
            <main class="container calendar-page">
                <div class="calendar-toolbar">
                    <FilterPanel prefs={filters.state} {stats} actions={filters.actions.clone()} />
                    <ZoomControls zoom={*zoom} on_change={on_zoom_change} />
                </div>
                <LocationLegend days={days.clone()} areas={areas.clone()} />

                {if let Some(error) = calendar.state.error.clone() {
                    html! { <div class="error-message">{error}</div> }
                } else {
                    html! {}
                }}

                {if calendar.state.loading && calendar.state.calendar.is_none() {
                    html! { <div class="loading">{"Loading calendar..."}</div> }
                } else {
                    html! {}
                }}

                <div
                    ref={wrapper_ref}
                    class={classes!("calendar-table-wrapper", zoom.wrapper_classes(), (*scrollable).then_some("scrollable"))}
                >
                    <CalendarTable
                        project_id={props.project_id.clone()}
                        {days}
                        {areas}
                        prefs={filters.state}
                        palette={props.config.department_palette()}
                        drag={drag_props}
                    />
                </div>
            </main>
            <LoadingOverlay visible={drag.state.is_pending()} />
        </>
    }
}
