use shared::api::pages;
use shared::{
    AppConfig, BankHoliday, HiatusPeriod, NotificationKind, ProjectSummary, SpecialDate,
    SpecialDateKind, WorkingWeekend,
};
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlSelectElement, MouseEvent};
use yew::prelude::*;

use super::date_list::DateListSection;
use super::hiatus_modal::HiatusModal;
use super::holiday_modal::HolidayModal;
use super::weekend_modal::WeekendModal;
use crate::components::header::{ActivePage, Header};
use crate::components::loading_overlay::LoadingOverlay;
use crate::components::notification::NotificationToast;
use crate::hooks::use_notification::use_notification;
use crate::hooks::use_special_dates::{use_special_dates, UseSpecialDatesResult};
use crate::services::api::ApiClient;
use crate::services::browser;

const REGENERATE_CONFIRMATION: &str =
    "Are you sure you want to regenerate the calendar? This will update all shoot day numbers based on special dates.";

#[derive(Properties, PartialEq)]
pub struct SpecialDatesPageProps {
    pub api_client: ApiClient,
    pub config: AppConfig,
    pub project_id: Option<String>,
}

/// Which modal is open, with the record being edited if any
#[derive(Clone, PartialEq)]
enum OpenModal {
    Closed,
    Weekend(Option<WorkingWeekend>),
    Holiday(Option<BankHoliday>),
    Hiatus(Option<HiatusPeriod>),
}

fn find_by_id<T: SpecialDate>(items: &[T], id: &str) -> Option<T> {
    items.iter().find(|item| item.id() == id).cloned()
}

#[function_component(SpecialDatesPage)]
pub fn special_dates_page(props: &SpecialDatesPageProps) -> Html {
    let projects = use_state(Vec::<ProjectSummary>::new);
    let modal = use_state(|| OpenModal::Closed);
    let busy = use_state(|| false);
    let notification = use_notification(props.config.notification_duration_ms);
    let notify = notification.actions.show.clone();

    let set_busy = {
        let busy = busy.clone();
        Callback::from(move |value: bool| busy.set(value))
    };

    let weekends: UseSpecialDatesResult<WorkingWeekend> =
        use_special_dates(&props.api_client, props.project_id.clone(), notify.clone(), set_busy.clone());
    let holidays: UseSpecialDatesResult<BankHoliday> =
        use_special_dates(&props.api_client, props.project_id.clone(), notify.clone(), set_busy.clone());
    let hiatus: UseSpecialDatesResult<HiatusPeriod> =
        use_special_dates(&props.api_client, props.project_id.clone(), notify.clone(), set_busy.clone());

    // Project list for the selector
    {
        let api_client = props.api_client.clone();
        let projects = projects.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                match api_client.list_projects().await {
                    Ok(list) => {
                        info!(count = list.len(), "projects loaded");
                        projects.set(list);
                    }
                    Err(e) => error!(error = %e, "failed to load projects"),
                }
            });
            || ()
        });
    }

    let on_project_change = Callback::from(|e: Event| {
        let select: HtmlSelectElement = e.target_unchecked_into();
        let value = select.value();
        browser::navigate(&pages::special_dates(Some(value.as_str())));
    });

    let on_regenerate = {
        let api_client = props.api_client.clone();
        let project_id = props.project_id.clone();
        let notify = notify.clone();
        let set_busy = set_busy.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(project_id) = project_id.clone() else {
                browser::alert("Please select a project first");
                return;
            };
            if !browser::confirm(REGENERATE_CONFIRMATION) {
                return;
            }
            let api_client = api_client.clone();
            let notify = notify.clone();
            let set_busy = set_busy.clone();
            spawn_local(async move {
                set_busy.emit(true);
                let result = api_client.regenerate_calendar(&project_id).await;
                set_busy.emit(false);
                match result {
                    Ok(()) => notify.emit((
                        NotificationKind::Success,
                        "Calendar has been regenerated successfully!".to_string(),
                    )),
                    Err(e) => {
                        error!(error = %e, "regenerate failed");
                        browser::alert(&format!("Error regenerating calendar: {}", e));
                    }
                }
            });
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |_| modal.set(OpenModal::Closed))
    };

    // Close the modal, refresh the list it edited and confirm
    let on_saved = |kind: SpecialDateKind, reload: Callback<()>| {
        let modal = modal.clone();
        let notify = notify.clone();
        Callback::from(move |editing: bool| {
            modal.set(OpenModal::Closed);
            reload.emit(());
            notify.emit((NotificationKind::Success, kind.saved_message(editing)));
        })
    };

    let open = |target: OpenModal| {
        let modal = modal.clone();
        Callback::from(move |_: ()| modal.set(target.clone()))
    };

    let on_edit_weekend = {
        let modal = modal.clone();
        let items = weekends.state.items.clone();
        Callback::from(move |id: String| modal.set(OpenModal::Weekend(find_by_id(&items, &id))))
    };
    let on_edit_holiday = {
        let modal = modal.clone();
        let items = holidays.state.items.clone();
        Callback::from(move |id: String| modal.set(OpenModal::Holiday(find_by_id(&items, &id))))
    };
    let on_edit_hiatus = {
        let modal = modal.clone();
        let items = hiatus.state.items.clone();
        Callback::from(move |id: String| modal.set(OpenModal::Hiatus(find_by_id(&items, &id))))
    };

    let enabled = props.project_id.is_some();
    let selected = props.project_id.clone().unwrap_or_default();
    let project_options = projects.iter().map(|project| {
        html! {
            <option
                key={project.id.clone()}
                value={project.id.clone()}
                selected={project.id == selected}
            >
                {project.display_name().to_string()}
            </option>
        }
    });

    let (weekend_open, weekend_editing) = match &*modal {
        OpenModal::Weekend(editing) => (true, editing.clone()),
        _ => (false, None),
    };
    let (holiday_open, holiday_editing) = match &*modal {
        OpenModal::Holiday(editing) => (true, editing.clone()),
        _ => (false, None),
    };
    let (hiatus_open, hiatus_editing) = match &*modal {
        OpenModal::Hiatus(editing) => (true, editing.clone()),
        _ => (false, None),
    };

    html! {
        <>
            <Header title="Special Dates" project_id={props.project_id.clone()} active={ActivePage::SpecialDates} />
            <main class="container special-dates-page">
                <div class="project-controls">
                    <label for="project-select">{"Project"}</label>
                    <select id="project-select" onchange={on_project_change}>
                        <option value="" selected={selected.is_empty()}>{"Select a project"}</option>
                        {for project_options}
                    </select>
                    <button
                        type="button"
                        id="regenerate-calendar"
                        class="btn btn-warning"
                        disabled={!enabled}
                        onclick={on_regenerate}
                    >
                        {"Regenerate Calendar"}
                    </button>
                </div>

                <DateListSection
                    kind={SpecialDateKind::WorkingWeekend}
                    items={weekends.state.items.iter().map(SpecialDate::list_item).collect::<Vec<_>>()}
                    loading={weekends.state.loading}
                    {enabled}
                    on_add={open(OpenModal::Weekend(None))}
                    on_edit={on_edit_weekend}
                    on_delete={weekends.actions.delete.clone()}
                />
                <DateListSection
                    kind={SpecialDateKind::BankHoliday}
                    items={holidays.state.items.iter().map(SpecialDate::list_item).collect::<Vec<_>>()}
                    loading={holidays.state.loading}
                    {enabled}
                    on_add={open(OpenModal::Holiday(None))}
                    on_edit={on_edit_holiday}
                    on_delete={holidays.actions.delete.clone()}
                />
                <DateListSection
                    kind={SpecialDateKind::Hiatus}
                    items={hiatus.state.items.iter().map(SpecialDate::list_item).collect::<Vec<_>>()}
                    loading={hiatus.state.loading}
                    {enabled}
                    on_add={open(OpenModal::Hiatus(None))}
                    on_edit={on_edit_hiatus}
                    on_delete={hiatus.actions.delete.clone()}
                />
            </main>

            <WeekendModal
                is_open={weekend_open}
                api_client={props.api_client.clone()}
                project_id={props.project_id.clone()}
                editing={weekend_editing}
                on_success={on_saved(SpecialDateKind::WorkingWeekend, weekends.actions.reload.clone())}
                on_close={close_modal.clone()}
                on_busy={set_busy.clone()}
            />
            <HolidayModal
                is_open={holiday_open}
                api_client={props.api_client.clone()}
                project_id={props.project_id.clone()}
                editing={holiday_editing}
                on_success={on_saved(SpecialDateKind::BankHoliday, holidays.actions.reload.clone())}
                on_close={close_modal.clone()}
                on_busy={set_busy.clone()}
            />
            <HiatusModal
                is_open={hiatus_open}
                api_client={props.api_client.clone()}
                project_id={props.project_id.clone()}
                editing={hiatus_editing}
                on_success={on_saved(SpecialDateKind::Hiatus, hiatus.actions.reload.clone())}
                on_close={close_modal}
                on_busy={set_busy}
            />

            <LoadingOverlay visible={*busy} message="Saving..." />
            <NotificationToast
                notification={notification.state.clone()}
                on_dismiss={notification.actions.dismiss.clone()}
            />
        </>
    }
}
