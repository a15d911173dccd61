use yew::prelude::*;
use shared::{NotificationKind, SpecialDate};
use tracing::{error, info};
use wasm_bindgen_futures::spawn_local;
use crate::services::api::ApiClient;
use crate::services::browser;

#[derive(Clone, PartialEq)]
pub struct SpecialDatesState<T> {
    /// Already in display order
    pub items: Vec<T>,
    pub loading: bool,
}

pub struct UseSpecialDatesResult<T> {
    pub state: SpecialDatesState<T>,
    pub actions: UseSpecialDatesActions,
}

#[derive(Clone, PartialEq)]
pub struct UseSpecialDatesActions {
    pub reload: Callback<()>,
    /// Asks for confirmation, then deletes the record with this id
    pub delete: Callback<String>,
}

/// List state for one kind of special date. Shared by the weekend, holiday
/// and hiatus sections, which differ only in record type.
#[hook]
pub fn use_special_dates<T>(
    api_client: &ApiClient,
    project_id: Option<String>,
    notify: Callback<(NotificationKind, String)>,
    set_busy: Callback<bool>,
) -> UseSpecialDatesResult<T>
where
    T: SpecialDate,
{
    let items = use_state(Vec::<T>::new);
    let loading = use_state(|| false);
    let kind = T::KIND;

    let reload = {
        let api_client = api_client.clone();
        let items = items.clone();
        let loading = loading.clone();
        let notify = notify.clone();

        use_callback(project_id.clone(), move |_, project_id: &Option<String>| {
            let Some(project_id) = project_id.clone() else {
                items.set(Vec::new());
                return;
            };
            let api_client = api_client.clone();
            let items = items.clone();
            let loading = loading.clone();
            let notify = notify.clone();

            spawn_local(async move {
                loading.set(true);
                match api_client.list_special_dates::<T>(&project_id).await {
                    Ok(list) => {
                        info!(kind = kind.noun(), count = list.len(), "special dates loaded");
                        items.set(list);
                    }
                    Err(e) => {
                        error!(kind = kind.noun(), error = %e, "failed to load special dates");
                        items.set(Vec::new());
                        notify.emit((NotificationKind::Error, kind.load_error(&e.to_string())));
                    }
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with(project_id.clone(), move |_| {
            reload.emit(());
            || ()
        });
    }

    let delete = {
        let api_client = api_client.clone();
        let reload = reload.clone();

        use_callback(project_id, move |id: String, project_id: &Option<String>| {
            let Some(project_id) = project_id.clone() else {
                return;
            };
            if !browser::confirm(&kind.delete_confirmation()) {
                return;
            }
            let api_client = api_client.clone();
            let reload = reload.clone();
            let notify = notify.clone();
            let set_busy = set_busy.clone();

            spawn_local(async move {
                set_busy.emit(true);
                let result = api_client.delete_special_date::<T>(&project_id, &id).await;
                set_busy.emit(false);
                match result {
                    Ok(()) => {
                        info!(kind = kind.noun(), %id, "deleted");
                        reload.emit(());
                        notify.emit((NotificationKind::Success, kind.deleted_message()));
                    }
                    Err(e) => {
                        error!(kind = kind.noun(), %id, error = %e, "delete failed");
                        browser::alert(&kind.delete_error(&e.to_string()));
                    }
                }
            });
        })
    };

    UseSpecialDatesResult {
        state: SpecialDatesState {
            items: (*items).clone(),
            loading: *loading,
        },
        actions: UseSpecialDatesActions { reload, delete },
    }
}
