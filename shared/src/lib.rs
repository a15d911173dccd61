//! Types and rules shared by the shoot calendar frontend: calendar rows,
//! the drag-and-drop state machine, filters, colours, special dates and the
//! backend API contract. Nothing here touches the browser, so all of it is
//! tested natively.

pub mod api;
pub mod calendar;
pub mod colors;
pub mod config;
pub mod drag;
pub mod filters;
pub mod notification;
pub mod routes;
pub mod special_dates;
pub mod zoom;

pub use api::{ApiError, Endpoints, MoveDayResponse};
pub use calendar::{CalendarData, DayRow, DayType, LocationArea, ProjectSummary};
pub use config::AppConfig;
pub use drag::{DragController, DropOutcome, MoveMode, MoveRequest, MoveResolution, RowDragState};
pub use filters::{ColumnFilter, FilterPreferences, FilterStats, RowFilter};
pub use notification::{Notification, NotificationKind};
pub use routes::{Route, RouteError};
pub use special_dates::{
    BankHoliday, BankHolidayForm, HiatusForm, HiatusPeriod, SpecialDate, SpecialDateKind,
    ValidationError, WorkingWeekend, WorkingWeekendForm,
};
pub use zoom::ZoomState;
