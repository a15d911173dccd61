use shared::api::pages;
use shared::calendar::{format_display_date, format_input_date};
use shared::colors::{area_color_for, DepartmentPalette};
use shared::{ColumnFilter, DayRow, DragController, FilterPreferences, LocationArea, RowDragState};
use web_sys::{DragEvent, MouseEvent};
use yew::prelude::*;

use crate::hooks::use_drag_drop::UseDragDropActions;
use crate::services::browser;

#[derive(Properties, PartialEq)]
pub struct CalendarTableProps {
    pub project_id: String,
    pub days: Vec<DayRow>,
    pub areas: Vec<LocationArea>,
    pub prefs: FilterPreferences,
    pub palette: DepartmentPalette,
    /// Present in admin mode only; viewers get a read-only table
    #[prop_or_default]
    pub drag: Option<DragProps>,
}

#[derive(Clone, PartialEq)]
pub struct DragProps {
    pub controller: DragController,
    pub actions: UseDragDropActions,
}

#[function_component(CalendarTable)]
pub fn calendar_table(props: &CalendarTableProps) -> Html {
    let show_sequence = props.prefs.is_column_visible(ColumnFilter::Sequence);
    let show_second_unit = props.prefs.is_column_visible(ColumnFilter::SecondUnit);

    let rows = props.days.iter().map(|row| {
        let drag_state = props
            .drag
            .as_ref()
            .map(|drag| drag.controller.row_state(row.date))
            .unwrap_or(RowDragState::Idle);
        let area = area_color_for(row, &props.areas);
        let hidden = !props.prefs.is_row_visible(row);

        let class = classes!(
            "calendar-row",
            row.day_type().css_class(),
            drag_state.css_class(),
            hidden.then_some("filtered-hidden"),
            area.is_some().then_some("has-area-color"),
            props.drag.is_some().then_some("clickable"),
        );
        let style = area.map(|area| format!("--row-area-color: {};", area.color));
        let data_color = area.map(|area| area.color.clone());

        let handlers = props.drag.as_ref().map(|drag| row_handlers(&drag.actions, row, &props.project_id));
        let (ondragstart, ondragenter, ondragover, ondragleave, ondragend, ondrop, onclick) = match handlers {
            Some(h) => (h.drag_start, Some(h.drag_over.clone()), Some(h.drag_over), Some(h.drag_leave), Some(h.drag_end), Some(h.drop), Some(h.click)),
            None => (None, None, None, None, None, None, None),
        };
        let draggable = ondragstart.is_some().then_some(AttrValue::Static("true"));

        let departments = row.departments.iter().map(|code| {
            let style = props.palette.style_for(code);
            html! { <span class="department-tag" style={style.css()}>{code.trim().to_string()}</span> }
        });

        html! {
            <tr
                key={format_input_date(row.date)}
                {class}
                {style}
                data-date={format_input_date(row.date)}
                data-color={data_color}
                {draggable}
                {ondragstart}
                {ondragenter}
                {ondragover}
                {ondragleave}
                {ondragend}
                {ondrop}
                {onclick}
            >
                <td class="date-cell">{format_display_date(row.date)}</td>
                <td class="day-cell">{row.weekday_name()}</td>
                <td class="shoot-day-cell">
                    {match row.shoot_day {
                        Some(n) if row.day_type() == shared::DayType::Shoot => n.to_string(),
                        _ => row.day_type().label().to_string(),
                    }}
                </td>
                <td class="location-cell">
                    {row.location.clone()}
                    {if row.main_unit.trim().is_empty() {
                        html! {}
                    } else {
                        html! { <div class="main-unit">{row.main_unit.clone()}</div> }
                    }}
                </td>
                {if show_sequence {
                    html! { <td class="sequence-cell">{row.sequence.clone()}</td> }
                } else {
                    html! {}
                }}
                <td class="departments-cell">{for departments}</td>
                {if show_second_unit {
                    html! {
                        <td class={classes!("second-unit-cell", row.has_second_unit().then_some("has-second-unit"))}>
                            {row.second_unit.clone()}
                        </td>
                    }
                } else {
                    html! {}
                }}
                <td class="notes-cell">{row.notes.clone()}</td>
            </tr>
        }
    });

    html! {
        <table class="calendar-table">
            <thead>
                <tr>
                    <th class="date-col">{"Date"}</th>
                    <th class="day-col">{"Day"}</th>
                    <th class="shoot-day-col">{"Shoot Day"}</th>
                    <th class="location-col">{"Location"}</th>
                    {if show_sequence {
                        html! { <th class="sequence-col">{"Sequence"}</th> }
                    } else {
                        html! {}
                    }}
                    <th class="departments-col">{"Departments"}</th>
                    {if show_second_unit {
                        html! { <th class="second-unit-col">{"Second Unit"}</th> }
                    } else {
                        html! {}
                    }}
                    <th class="notes-col">{"Notes"}</th>
                </tr>
            </thead>
            <tbody>
                {for rows}
            </tbody>
        </table>
    }
}

struct RowHandlers {
    /// Only shoot days can be picked up
    drag_start: Option<Callback<DragEvent>>,
    drag_over: Callback<DragEvent>,
    drag_leave: Callback<DragEvent>,
    drag_end: Callback<DragEvent>,
    drop: Callback<DragEvent>,
    click: Callback<MouseEvent>,
}

fn row_handlers(actions: &UseDragDropActions, row: &DayRow, project_id: &str) -> RowHandlers {
    let date = row.date;

    let drag_start = row.draggable().then(|| {
        let on_drag_start = actions.on_drag_start.clone();
        let row = row.clone();
        Callback::from(move |e: DragEvent| on_drag_start.emit((e, row.clone())))
    });

    let drag_over = {
        let on_drag_over = actions.on_drag_over.clone();
        Callback::from(move |e: DragEvent| on_drag_over.emit((e, date)))
    };

    let drag_leave = {
        let on_drag_leave = actions.on_drag_leave.clone();
        Callback::from(move |e: DragEvent| on_drag_leave.emit((e, date)))
    };

    let drop = {
        let on_drop = actions.on_drop.clone();
        let row = row.clone();
        Callback::from(move |e: DragEvent| on_drop.emit((e, row.clone())))
    };

    let click = {
        let href = pages::admin_day(project_id, date);
        Callback::from(move |_: MouseEvent| browser::navigate(&href))
    };

    RowHandlers {
        drag_start,
        drag_over,
        drag_leave,
        drag_end: actions.on_drag_end.clone(),
        drop,
        click,
    }
}
