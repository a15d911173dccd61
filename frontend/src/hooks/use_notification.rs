use gloo::timers::future::TimeoutFuture;
use shared::{Notification, NotificationKind};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

pub struct UseNotificationResult {
    pub state: Option<Notification>,
    pub actions: UseNotificationActions,
}

#[derive(Clone, PartialEq)]
pub struct UseNotificationActions {
    pub show: Callback<(NotificationKind, String)>,
    pub dismiss: Callback<()>,
}

/// One toast at a time; showing a new one replaces the old.
#[hook]
pub fn use_notification(duration_ms: u32) -> UseNotificationResult {
    let current = use_state(|| Option::<Notification>::None);
    let next_id = use_mut_ref(|| 0u64);
    // id of the toast on screen, read by timers that outlive the render
    let visible_id = use_mut_ref(|| Option::<u64>::None);

    let show = {
        let current = current.clone();
        let next_id = next_id.clone();
        let visible_id = visible_id.clone();
        use_callback(duration_ms, move |(kind, message): (NotificationKind, String), duration_ms: &u32| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next += 1;
                *next
            };
            *visible_id.borrow_mut() = Some(id);
            current.set(Some(Notification::new(id, kind, message)));

            let current = current.clone();
            let visible_id = visible_id.clone();
            let duration_ms = *duration_ms;
            spawn_local(async move {
                TimeoutFuture::new(duration_ms).await;
                if *visible_id.borrow() == Some(id) {
                    *visible_id.borrow_mut() = None;
                    current.set(None);
                }
            });
        })
    };

    let dismiss = {
        let current = current.clone();
        use_callback((), move |_, _| {
            *visible_id.borrow_mut() = None;
            current.set(None);
        })
    };

    UseNotificationResult {
        state: (*current).clone(),
        actions: UseNotificationActions { show, dismiss },
    }
}
