use shared::{ColumnFilter, FilterPreferences, FilterStats, RowFilter};
use web_sys::{HtmlInputElement, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_filters::UseFiltersActions;

#[derive(Properties, PartialEq)]
pub struct FilterPanelProps {
    pub prefs: FilterPreferences,
    pub stats: FilterStats,
    pub actions: UseFiltersActions,
}

#[function_component(FilterPanel)]
pub fn filter_panel(props: &FilterPanelProps) -> Html {
    let row_toggles = RowFilter::ALL.iter().map(|&filter| {
        let set_row_visible = props.actions.set_row_visible.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_row_visible.emit((filter, input.checked()));
        });
        html! {
            <label class="filter-option" key={filter.element_id()}>
                <input
                    type="checkbox"
                    id={filter.element_id()}
                    checked={props.prefs.is_row_filter_visible(filter)}
                    {onchange}
                />
                {filter.label()}
            </label>
        }
    });

    let column_toggles = ColumnFilter::ALL.iter().map(|&column| {
        let set_column_visible = props.actions.set_column_visible.clone();
        let onchange = Callback::from(move |e: Event| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_column_visible.emit((column, input.checked()));
        });
        html! {
            <label class="filter-option" key={column.element_id()}>
                <input
                    type="checkbox"
                    id={column.element_id()}
                    checked={props.prefs.is_column_visible(column)}
                    {onchange}
                />
                {column.label()}
            </label>
        }
    });

    let on_reset = {
        let reset = props.actions.reset.clone();
        Callback::from(move |_: MouseEvent| reset.emit(()))
    };

    html! {
        <div class="filter-panel">
            <div class="filter-group">
                <span class="filter-group-title">{"Show rows"}</span>
                {for row_toggles}
            </div>
            <div class="filter-group">
                <span class="filter-group-title">{"Show columns"}</span>
                {for column_toggles}
            </div>
            <div class="filter-stats">
                <span id="visible-count">{format!("Showing {} of {} days", props.stats.visible, props.stats.total)}</span>
                <span id="shoot-day-count">{format!("Shoot days: {}", props.stats.shoot_days_label())}</span>
            </div>
            <button type="button" class="btn btn-secondary" id="reset-filters" onclick={on_reset}>
                {"Reset filters"}
            </button>
        </div>
    }
}
