pub mod calendar_table;
pub mod calendar_view;
pub mod filter_panel;
pub mod header;
pub mod loading_overlay;
pub mod location_legend;
pub mod notification;
pub mod special_dates;
pub mod zoom_controls;
