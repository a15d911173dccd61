use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingOverlayProps {
    pub visible: bool,
    #[prop_or(AttrValue::Static("Updating calendar..."))]
    pub message: AttrValue,
}

/// Full-page overlay that swallows pointer events while a request runs.
#[function_component(LoadingOverlay)]
pub fn loading_overlay(props: &LoadingOverlayProps) -> Html {
    if !props.visible {
        return html! {};
    }

    html! {
        <div class="loading-overlay" aria-busy="true">
            <div class="loading-spinner"></div>
            <div class="loading-message">{props.message.clone()}</div>
        </div>
    }
}
