use shared::calendar::{format_input_date, parse_input_date};
use shared::{SpecialDateKind, WorkingWeekend, WorkingWeekendForm};
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::modal::{ModalButtons, ModalFrame, SaveContext};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct WeekendModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub project_id: Option<String>,
    /// Record being edited; `None` adds a new one
    pub editing: Option<WorkingWeekend>,
    /// Emits whether an existing record was updated
    pub on_success: Callback<bool>,
    pub on_close: Callback<()>,
    pub on_busy: Callback<bool>,
}

#[function_component(WeekendModal)]
pub fn weekend_modal(props: &WeekendModalProps) -> Html {
    let form = use_state(WorkingWeekendForm::default);
    let submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    // Reset state when modal opens
    use_effect_with((props.is_open, props.editing.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        move |(is_open, editing): &(bool, Option<WorkingWeekend>)| {
            if *is_open {
                form.set(match editing {
                    Some(weekend) => WorkingWeekendForm::from_record(weekend),
                    None => WorkingWeekendForm::new(today()),
                });
                submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    let on_date_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.date = parse_input_date(&input.value());
            form.set(next);
        })
    };

    let on_description_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.description = input.value();
            form.set(next);
        })
    };

    let on_shoot_day_change = {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            next.is_shoot_day = input.checked();
            form.set(next);
        })
    };

    let on_submit = {
        let form = form.clone();
        let ctx = SaveContext {
            api_client: props.api_client.clone(),
            project_id: props.project_id.clone(),
            submitting: submitting.clone(),
            error: error_message.clone(),
            on_success: props.on_success.clone(),
            on_busy: props.on_busy.clone(),
        };
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let validated = form.validate().map(|request| (request.id.clone(), request));
            ctx.save::<WorkingWeekend, _>(validated);
        })
    };

    if !props.is_open {
        return html! {};
    }

    let kind = SpecialDateKind::WorkingWeekend;
    let date_value = form.date.map(format_input_date).unwrap_or_default();

    html! {
        <ModalFrame
            title={kind.modal_title(form.is_editing())}
            error={(*error_message).clone()}
            on_close={props.on_close.clone()}
        >
            <form class="special-date-form" id="weekend-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="weekend-date">{"Date"}</label>
                    <input
                        id="weekend-date"
                        type="date"
                        value={date_value}
                        onchange={on_date_change}
                        disabled={*submitting}
                        required=true
                    />
                    <small class="form-hint">{"Must be a Saturday or Sunday"}</small>
                </div>
                <div class="form-group">
                    <label for="weekend-description">{"Description"}</label>
                    <input
                        id="weekend-description"
                        type="text"
                        placeholder="e.g. Pickup shots"
                        value={form.description.clone()}
                        onchange={on_description_change}
                        disabled={*submitting}
                    />
                </div>
                <div class="form-group checkbox-group">
                    <label>
                        <input
                            id="weekend-is-shoot-day"
                            type="checkbox"
                            checked={form.is_shoot_day}
                            onchange={on_shoot_day_change}
                            disabled={*submitting}
                        />
                        {"Counts as a shoot day"}
                    </label>
                </div>
                <ModalButtons submitting={*submitting} on_cancel={props.on_close.clone()} />
            </form>
        </ModalFrame>
    }
}
