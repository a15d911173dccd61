use shared::colors::{area_counts, TagStyle};
use shared::{DayRow, LocationArea};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LocationLegendProps {
    pub days: Vec<DayRow>,
    pub areas: Vec<LocationArea>,
}

#[function_component(LocationLegend)]
pub fn location_legend(props: &LocationLegendProps) -> Html {
    if props.areas.is_empty() {
        return html! {};
    }

    let tags = area_counts(&props.days, &props.areas).into_iter().map(|(area, count)| {
        let style = TagStyle::for_background(area.color.clone());
        html! {
            <span class="area-tag" key={area.name.clone()} style={style.css()} data-color={area.color.clone()}>
                {area.name.clone()}
                <span class="area-count">{format!(" ({})", count)}</span>
            </span>
        }
    });

    html! {
        <div class="location-legend">
            <span class="legend-title">{"Location areas:"}</span>
            {for tags}
        </div>
    }
}
