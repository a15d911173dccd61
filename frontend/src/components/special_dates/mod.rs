pub mod date_list;
pub mod hiatus_modal;
pub mod holiday_modal;
pub mod modal;
pub mod page;
pub mod weekend_modal;
