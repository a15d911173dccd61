use shared::calendar::{format_input_date, parse_input_date};
use shared::{HiatusForm, HiatusPeriod, SpecialDateKind};
use web_sys::{HtmlInputElement, SubmitEvent};
use yew::prelude::*;

use super::modal::{ModalButtons, ModalFrame, SaveContext};
use crate::services::api::ApiClient;
use crate::services::date_utils::today;

#[derive(Properties, PartialEq)]
pub struct HiatusModalProps {
    pub is_open: bool,
    pub api_client: ApiClient,
    pub project_id: Option<String>,
    pub editing: Option<HiatusPeriod>,
    pub on_success: Callback<bool>,
    pub on_close: Callback<()>,
    pub on_busy: Callback<bool>,
}

#[function_component(HiatusModal)]
pub fn hiatus_modal(props: &HiatusModalProps) -> Html {
    let form = use_state(HiatusForm::default);
    let submitting = use_state(|| false);
    let error_message = use_state(|| Option::<String>::None);

    use_effect_with((props.is_open, props.editing.clone()), {
        let form = form.clone();
        let submitting = submitting.clone();
        let error_message = error_message.clone();
        move |(is_open, editing): &(bool, Option<HiatusPeriod>)| {
            if *is_open {
                form.set(match editing {
                    Some(hiatus) => HiatusForm::from_record(hiatus),
                    None => HiatusForm::new(today()),
                });
                submitting.set(false);
                error_message.set(None);
            }
            || ()
        }
    });

    let edit = |apply: fn(&mut HiatusForm, &HtmlInputElement)| {
        let form = form.clone();
        Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*form).clone();
            apply(&mut next, &input);
            form.set(next);
        })
    };

    let on_start_change = edit(|f, input| f.start_date = parse_input_date(&input.value()));
    let on_end_change = edit(|f, input| f.end_date = parse_input_date(&input.value()));
    let on_description_change = edit(|f, input| f.description = input.value());

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
            ctx.save::<HiatusPeriod, _>(validated);
        })
    };

    if !props.is_open {
        return html! {};
    }

    let kind = SpecialDateKind::Hiatus;
    let start_value = form.start_date.map(format_input_date).unwrap_or_default();
    let end_value = form.end_date.map(format_input_date).unwrap_or_default();

    html! {
        <ModalFrame
            title={kind.modal_title(form.is_editing())}
            error={(*error_message).clone()}
            on_close={props.on_close.clone()}
        >
            <form class="special-date-form" id="hiatus-form" onsubmit={on_submit}>
                <div class="form-group">
                    <label for="hiatus-start">{"Start date"}</label>
                    <input
                        id="hiatus-start"
                        type="date"
                        value={start_value.clone()}
                        onchange={on_start_change}
                        disabled={*submitting}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="hiatus-end">{"End date"}</label>
                    <input
                        id="hiatus-end"
                        type="date"
                        min={start_value}
                        value={end_value}
                        onchange={on_end_change}
                        disabled={*submitting}
                        required=true
                    />
                </div>
                <div class="form-group">
                    <label for="hiatus-description">{"Description"}</label>
                    <input
                        id="hiatus-description"
                        type="text"
                        placeholder="e.g. Christmas break"
                        value={form.description.clone()}
                        onchange={on_description_change}
                        disabled={*submitting}
                    />
                </div>
                <ModalButtons submitting={*submitting} on_cancel={props.on_close.clone()} />
            </form>
        </ModalFrame>
    }
}
