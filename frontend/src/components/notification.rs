use shared::Notification;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct NotificationToastProps {
    pub notification: Option<Notification>,
    pub on_dismiss: Callback<()>,
}

#[function_component(NotificationToast)]
pub fn notification_toast(props: &NotificationToastProps) -> Html {
    let Some(notification) = props.notification.as_ref() else {
        return html! {};
    };

    let on_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div
            key={notification.id.to_string()}
            class={notification.class()}
            role="status"
            onclick={on_click}
        >
            {notification.message.clone()}
        </div>
    }
}
