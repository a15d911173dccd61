use serde::Serialize;
use shared::{SpecialDate, ValidationError};
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser;

#[derive(Properties, PartialEq)]
pub struct ModalFrameProps {
    pub title: AttrValue,
    pub error: Option<String>,
    pub on_close: Callback<()>,
    pub children: Html,
}

/// Backdrop, dialog box, title and error line shared by the special-date
/// modals. Clicking the backdrop closes; clicks inside the dialog do not.
#[function_component(ModalFrame)]
pub fn modal_frame(props: &ModalFrameProps) -> Html {
    let on_backdrop_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |e: MouseEvent| {
            e.stop_propagation();
            on_close.emit(());
        })
    };

    let on_modal_click = Callback::from(|e: MouseEvent| {
        e.stop_propagation();
    });

    let on_close_click = {
        let on_close = props.on_close.clone();
        Callback::from(move |_: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="modal-backdrop active" onclick={on_backdrop_click}>
            <div class="modal" role="dialog" onclick={on_modal_click}>
                <div class="modal-header">
                    <h3 class="modal-title">{props.title.clone()}</h3>
                    <button type="button" class="modal-close" aria-label="Close" onclick={on_close_click}>{"×"}</button>
                </div>
                {if let Some(error) = props.error.clone() {
                    html! { <div class="modal-error">{error}</div> }
                } else {
                    html! {}
                }}
                <div class="modal-content">
                    {props.children.clone()}
                </div>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ModalButtonsProps {
    pub submitting: bool,
    pub on_cancel: Callback<()>,
}

#[function_component(ModalButtons)]
pub fn modal_buttons(props: &ModalButtonsProps) -> Html {
    let on_cancel = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |_: MouseEvent| on_cancel.emit(()))
    };

    html! {
        <div class="modal-buttons">
            <button type="submit" class="btn btn-primary" disabled={props.submitting}>
                {if props.submitting { "Saving..." } else { "Save" }}
            </button>
            <button type="button" class="btn btn-secondary" onclick={on_cancel} disabled={props.submitting}>
                {"Cancel"}
            </button>
        </div>
    }
}

/// Everything a modal needs to send its validated form to the server
#[derive(Clone)]
pub struct SaveContext {
    pub api_client: ApiClient,
    pub project_id: Option<String>,
    pub submitting: UseStateHandle<bool>,
    pub error: UseStateHandle<Option<String>>,
    pub on_success: Callback<bool>,
    pub on_busy: Callback<bool>,
}

impl SaveContext {
    /// Create or update a record. Validation failures stay in the modal;
    /// server failures are alerted and the modal stays open.
    pub fn save<T, R>(&self, validated: Result<(Option<String>, R), ValidationError>)
    where
        T: SpecialDate,
        R: Serialize + 'static,
    {
        let Some(project_id) = self.project_id.clone() else {
            self.error.set(Some(ValidationError::NoProject.to_string()));
            return;
        };
        let (id, request) = match validated {
            Ok(valid) => valid,
            Err(e) => {
                self.error.set(Some(e.to_string()));
                return;
            }
        };

        let kind = T::KIND;
        let editing = id.is_some();
        let ctx = self.clone();
        ctx.error.set(None);
        ctx.submitting.set(true);
        ctx.on_busy.emit(true);

        spawn_local(async move {
            let result = ctx
                .api_client
                .save_special_date::<T, R>(&project_id, id.as_deref(), &request)
                .await;
            ctx.submitting.set(false);
            ctx.on_busy.emit(false);

            match result {
                Ok(()) => {
                    info!(kind = kind.noun(), editing, "saved");
                    ctx.on_success.emit(editing);
                }
                Err(e) => {
                    error!(kind = kind.noun(), editing, error = %e, "save failed");
                    browser::alert(&kind.save_error(editing, &e.to_string()));
                }
            }
        });
    }
}
