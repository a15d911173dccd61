use shared::calendar::{format_input_date, parse_input_date};
use shared::{BankHoliday, BankHolidayForm, SpecialDateKind};
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::modal::{ModalButtons, ModalFrame, SaveContext};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct HolidayModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub project_id: Option<String>,
    pub editing: Option<BankHoliday>,
    pub on_success: Callback<bool>,
    pub on_close: Callback<()>,
    pub on_busy: Callback<bool>,
}

#[function_component(HolidayModal)]
pub fn holiday_modal(props: &HolidayModalProps) -> Html {
    let form = use_state(BankHolidayForm::default);
    let submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with((props.is_open, props.editing.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        move |(is_open, editing): &(bool, Option<BankHoliday>)| {
            if *is_open {
                form.set(match editing {
                    Some(holiday) => BankHolidayForm::from_record(holiday),
                    None => BankHolidayForm::new(today()),
                });
                submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    // Applies one edit from an input event to a copy of the form
    let edit = |apply: fn(&mut BankHolidayForm, &HtmlInputElement)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, &input);
            form.set(next);
        })
    };

    let on_date_change = edit(|f, input| f.date = parse_input_date(&input.value()));
    let on_name_change = edit(|f, input| f.name = input.value());
    let on_working_change = edit(|f, input| f.set_working(input.checked()));
    let on_shoot_day_change = edit(|f, input| f.set_shoot_day(input.checked()));

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
            ctx.save::<BankHoliday, _>(validated);
        })
    };

    if !props.is_open {
        return html! {};
    }

    let kind = SpecialDateKind::BankHoliday;
    let date_value = form.date.map(format_input_date).unwrap_or_default();

    html! {
        <ModalFrame
            title={kind.modal_title(form.is_editing())}
            error={(*error_message).clone()}
            on_close={props.on_close.clone()}
        >
            <form class="special-date-form" id="holiday-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="holiday-date">{"Date"}</label>
                    <input
                        id="holiday-date"
                        type="date"
                        value={date_value}
                        onchange={on_date_change}
                        disabled={*submitting}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="holiday-name">{"Name"}</label>
                    <input
                        id="holiday-name"
                        type="text"
                        placeholder="e.g. Easter Monday"
                        value={form.name.clone()}
                        onchange={on_name_change}
                        disabled={*submitting}
                        required=true
                    />
                </div>
                <div class="form-group checkbox-group">
                    <label>
                        <input
                            id="holiday-is-working"
                            type="checkbox"
                            checked={form.is_working}
                            onchange={on_working_change}
                            disabled={*submitting}
                        />
                        {"Working day"}
                    </label>
                </div>
                <div class={classes!("form-group", "checkbox-group", (!form.shoot_day_enabled()).then_some("disabled"))}>
                    <label>
                        <input
                            id="holiday-is-shoot-day"
                            type="checkbox"
                            checked={form.is_shoot_day}
                            onchange={on_shoot_day_change}
                            disabled={*submitting || !form.shoot_day_enabled()}
                        />
                        {"Counts as a shoot day"}
                    </label>
                </div>
                <ModalButtons submitting={*submitting} on_cancel={props.on_close.clone()} />
            </form>
        </ModalFrame>
    }
}
