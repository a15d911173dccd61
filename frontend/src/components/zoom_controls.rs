use shared::ZoomState;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ZoomControlsProps {
    pub zoom: ZoomState,
    pub on_change: Callback<ZoomState>,
}

#[function_component(ZoomControls)]
pub fn zoom_controls(props: &ZoomControlsProps) -> Html {
    let action = |apply: fn(&mut ZoomState)| {
        let zoom = props.zoom;
        let on_change = props.on_change.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = zoom;
            apply(&mut next);
            on_change.emit(next);
        })
    };

    html! {
        <div class="zoom-controls">
            <button
                type="button"
                id="zoom-out"
                title="Zoom out"
                disabled={!props.zoom.can_zoom_out()}
                onclick={action(ZoomState::zoom_out)}
            >
                {"−"}
            </button>
            <span class="zoom-level" id="zoom-level">{props.zoom.label()}</span>
            <button
                type="button"
                id="zoom-in"
                title="Zoom in"
                disabled={!props.zoom.can_zoom_in()}
                onclick={action(ZoomState::zoom_in)}
            >
                {"+"}
            </button>
            <button
                type="button"
                id="fit-width"
                class={classes!(props.zoom.is_fit_width().then_some("active"))}
                title="Fit to width"
                onclick={action(ZoomState::toggle_fit_width)}
            >
                {"Fit"}
            </button>
            <button type="button" id="zoom-reset" title="Reset zoom" onclick={action(ZoomState::reset)}>
                {"100%"}
            </button>
        </div>
    }
}
