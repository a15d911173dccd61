use shared::special_dates::DateListItem;
use shared::SpecialDateKind;
use web_sys::MouseEvent;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DateListSectionProps {
    pub kind: SpecialDateKind,
    pub items: Vec<DateListItem>,
    pub loading: bool,
    /// Disables the add button when no project is selected
    pub enabled: bool,
    pub on_add: Callback<()>,
    pub on_edit: Callback<String>,
    pub on_delete: Callback<String>,
}

/// One titled list of special dates with add, edit and delete buttons.
#[function_component(DateListSection)]
pub fn date_list_section(props: &DateListSectionProps) -> Html {
    let kind = props.kind;

    let on_add = {
        let on_add = props.on_add.clone();
        Callback::from(move |_: MouseEvent| on_add.emit(()))
    };

    let entries = props.items.iter().map(|item| {
        let on_edit = {
            let on_edit = props.on_edit.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_edit.emit(id.clone()))
        };
        let on_delete = {
            let on_delete = props.on_delete.clone();
            let id = item.id.clone();
            Callback::from(move |_: MouseEvent| on_delete.emit(id.clone()))
        };

        html! {
            <div class="date-item" key={item.id.clone()} data-id={item.id.clone()}>
                <div class="date-item-info">
                    <div class="date-item-title">{item.title.clone()}</div>
                    <div class="date-item-description">{item.description.clone()}</div>
                </div>
                <div class="date-item-actions">
                    <button type="button" class="btn btn-small edit-btn" onclick={on_edit}>{"Edit"}</button>
                    <button type="button" class="btn btn-small btn-danger delete-btn" onclick={on_delete}>{"Delete"}</button>
                </div>
            </div>
        }
    });

    html! {
        <section class={classes!("special-dates-section", kind.path_segment())}>
            <div class="section-header">
                <h2>{kind.section_title()}</h2>
                <button type="button" class="btn btn-primary" disabled={!props.enabled} onclick={on_add}>
                    {format!("Add {}", kind.title())}
                </button>
            </div>
            {if props.loading {
                html! { <div class="loading">{"Loading..."}</div> }
            } else if props.items.is_empty() {
                html! { <div class="no-items">{kind.empty_message()}</div> }
            } else {
                html! { <div class="date-list">{for entries}</div> }
            }}
        </section>
    }
}
