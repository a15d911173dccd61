use chrono::NaiveDate;
use shared::calendar::format_input_date;
use shared::drag::DRAG_PAYLOAD_FORMAT;
use shared::{DayRow, DragController, DropOutcome, MoveResolution};
use tracing::{debug, error, info, warn};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{DragEvent, EventTarget, Node};
use yew::prelude::*;

use crate::services::api::ApiClient;
use crate::services::browser;

pub struct UseDragDropResult {
    /// Snapshot taken at render time
    pub state: DragController,
    pub actions: UseDragDropActions,
}

#[derive(Clone, PartialEq)]
pub struct UseDragDropActions {
    pub on_drag_start: Callback<(DragEvent, DayRow)>,
    pub on_drag_over: Callback<(DragEvent, NaiveDate)>,
    pub on_drag_leave: Callback<(DragEvent, NaiveDate)>,
    pub on_drag_end: Callback<DragEvent>,
    pub on_drop: Callback<(DragEvent, DayRow)>,
}

/// True when the pointer moved from `row` into one of its own descendants.
fn stays_within(row: Option<EventTarget>, related: Option<EventTarget>) -> bool {
    let row = row.and_then(|target| target.dyn_into::<Node>().ok());
    let related = related.and_then(|target| target.dyn_into::<Node>().ok());
    match (row, related) {
        (Some(row), Some(related)) => row.contains(Some(&related)),
        _ => false,
    }
}

/// Drag-and-drop wiring for the admin calendar. The controller is owned here
/// for the lifetime of the view; every transition re-renders the table.
#[hook]
pub fn use_drag_drop(api_client: &ApiClient, project_id: &str) -> UseDragDropResult {
    let controller = use_mut_ref(DragController::new);
    let force_update = use_force_update();

    let on_drag_start = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |(event, row): (DragEvent, DayRow), _| {
            let started = controller.borrow_mut().drag_start(&row);
            match started {
                Ok(session) => {
                    if let Some(transfer) = event.data_transfer() {
                        transfer.set_effect_allowed("move");
                        let payload = format_input_date(session.source_date);
                        if let Err(e) = transfer.set_data(DRAG_PAYLOAD_FORMAT, &payload) {
                            warn!(error = ?e, "could not attach drag payload");
                        }
                    }
                    force_update.force_update();
                }
                Err(refusal) => {
                    debug!(date = %row.date, ?refusal, "drag refused");
                    event.prevent_default();
                }
            }
        })
    };

    let on_drag_over = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |(event, date): (DragEvent, NaiveDate), _| {
            let before = controller.borrow().row_state(date);
            let accepted = controller.borrow_mut().drag_over(date);
            if !accepted {
                return;
            }
            // Accept the drop
            event.prevent_default();
            if let Some(transfer) = event.data_transfer() {
                transfer.set_drop_effect("move");
            }
            if controller.borrow().row_state(date) != before {
                force_update.force_update();
            }
        })
    };

    let on_drag_leave = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |(event, date): (DragEvent, NaiveDate), _| {
            // Leave events bubble up from the cells as the pointer crosses them
            if stays_within(event.current_target(), event.related_target()) {
                return;
            }
            let before = controller.borrow().row_state(date);
            controller.borrow_mut().drag_leave(date);
            if controller.borrow().row_state(date) != before {
                force_update.force_update();
            }
        })
    };

    let on_drag_end = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        use_callback((), move |_: DragEvent, _| {
            controller.borrow_mut().drag_end();
            force_update.force_update();
        })
    };

    let on_drop = {
        let controller = controller.clone();
        let force_update = force_update.clone();
        let api_client = api_client.clone();

        use_callback(project_id.to_string(), move |(event, target): (DragEvent, DayRow), project_id: &String| {
            event.prevent_default();
            let payload = event
                .data_transfer()
                .and_then(|transfer| transfer.get_data(DRAG_PAYLOAD_FORMAT).ok());

            let outcome = controller.borrow_mut().drop_on(&target, payload.as_deref());
            force_update.force_update();

            let request = match outcome {
                DropOutcome::Submit(request) => request,
                DropOutcome::Ignored(reason) => {
                    debug!(date = %target.date, ?reason, "drop ignored");
                    return;
                }
            };

            let controller = controller.clone();
            let force_update = force_update.clone();
            let api_client = api_client.clone();
            let project_id = project_id.clone();

            spawn_local(async move {
                let result = api_client.move_day(&project_id, &request).await;
                match &result {
                    Ok(response) => info!(
                        server_message = response.message.as_deref().unwrap_or("Day moved successfully"),
                        "shoot day moved"
                    ),
                    Err(e) => error!(error = %e, "move request failed"),
                }

                let resolution = controller.borrow_mut().finish_request(result);
                force_update.force_update();

                match resolution {
                    MoveResolution::Reload => browser::reload(),
                    MoveResolution::ShowError(message) => browser::alert(&message),
                }
            });
        })
    };

    let state = controller.borrow().clone();

    UseDragDropResult {
        state,
        actions: UseDragDropActions {
            on_drag_start,
            on_drag_over,
            on_drag_leave,
            on_drag_end,
            on_drop,
        },
    }
}

#[cfg(test)]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn element(tag: &str) -> web_sys::Element {
        gloo::utils::document().create_element(tag).unwrap()
    }

    #[wasm_bindgen_test]
    fn test_moving_between_cells_stays_within_row() {
        let row = element("tr");
        let first = element("td");
        let second = element("td");
        row.append_child(&first).unwrap();
        row.append_child(&second).unwrap();

        let row_target: EventTarget = row.clone().into();
        assert!(stays_within(Some(row_target.clone()), Some(second.into())));
        assert!(stays_within(Some(row_target), Some(first.into())));
    }

    #[wasm_bindgen_test]
    fn test_leaving_for_another_row_or_nowhere() {
        let row = element("tr");
        let other = element("tr");
        other.append_child(&element("td")).unwrap();

        let row_target: EventTarget = row.into();
        assert!(!stays_within(Some(row_target.clone()), Some(other.into())));
        assert!(!stays_within(Some(row_target), None));
        assert!(!stays_within(None, None));
    }
}
