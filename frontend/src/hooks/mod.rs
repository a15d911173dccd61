pub mod use_calendar;
pub mod use_drag_drop;
pub mod use_filters;
pub mod use_notification;
pub mod use_special_dates;
