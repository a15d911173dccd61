//! Working weekends, bank holidays and hiatus periods: the records the
//! special-dates page manages, their form validation and list presentation.

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use crate::calendar::{format_display_date, is_weekend, next_saturday};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpecialDateKind {
    WorkingWeekend,
    BankHoliday,
    Hiatus,
}

impl SpecialDateKind {
    pub fn path_segment(self) -> &'static str {
        match self {
            SpecialDateKind::WorkingWeekend => "weekends",
            SpecialDateKind::BankHoliday => "holidays",
            SpecialDateKind::Hiatus => "hiatus",
        }
    }

    /// Lower-case noun used in messages
    pub fn noun(self) -> &'static str {
        match self {
            SpecialDateKind::WorkingWeekend => "working weekend",
            SpecialDateKind::BankHoliday => "bank holiday",
            SpecialDateKind::Hiatus => "hiatus period",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            SpecialDateKind::WorkingWeekend => "Working Weekend",
            SpecialDateKind::BankHoliday => "Bank Holiday",
            SpecialDateKind::Hiatus => "Hiatus Period",
        }
    }

    pub fn section_title(self) -> &'static str {
        match self {
            SpecialDateKind::WorkingWeekend => "Working Weekends",
            SpecialDateKind::BankHoliday => "Bank Holidays",
            SpecialDateKind::Hiatus => "Hiatus Periods",
        }
    }

    pub fn empty_message(self) -> &'static str {
        match self {
            SpecialDateKind::WorkingWeekend => "No working weekends have been added.",
            SpecialDateKind::BankHoliday => "No bank holidays have been added.",
            SpecialDateKind::Hiatus => "No hiatus periods have been added.",
        }
    }

    pub fn modal_title(self, editing: bool) -> String {
        format!("{} {}", if editing { "Edit" } else { "Add" }, self.title())
    }

    pub fn saved_message(self, editing: bool) -> String {
        format!("{} {} successfully", capitalize(self.noun()), if editing { "updated" } else { "added" })
    }

    pub fn deleted_message(self) -> String {
        format!("{} deleted successfully", capitalize(self.noun()))
    }

    pub fn delete_confirmation(self) -> String {
        format!("Are you sure you want to delete this {}?", self.noun())
    }

    pub fn save_error(self, editing: bool, error: &str) -> String {
        format!("Error {} {}: {}", if editing { "updating" } else { "creating" }, self.noun(), error)
    }

    pub fn delete_error(self, error: &str) -> String {
        format!("Error deleting {}: {}", self.noun(), error)
    }

    pub fn load_error(self, error: &str) -> String {
        format!("Error loading {}s: {}", self.noun(), error)
    }
}

fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Form validation failures. `Display` is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please select a project first")]
    NoProject,
    #[error("Please select a date for the {0}")]
    MissingDate(&'static str),
    #[error("Please select a Saturday or Sunday date for working weekend.")]
    NotAWeekend,
    #[error("Please enter a name for the holiday")]
    MissingName,
    #[error("Hiatus end date must be on or after the start date")]
    HiatusEndsBeforeStart,
}

/// One row of a special-dates list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateListItem {
    pub id: String,
    pub title: String,
    pub description: String,
}

/// Common behaviour of the three special-date records.
pub trait SpecialDate: Clone + PartialEq + Serialize + DeserializeOwned + 'static {
    const KIND: SpecialDateKind;

    fn id(&self) -> &str;

    /// List ordering; weekends list newest first, the rest oldest first
    fn list_order(a: &Self, b: &Self) -> Ordering;

    fn list_item(&self) -> DateListItem;

    fn sort_for_display(items: &mut [Self]) {
        items.sort_by(Self::list_order);
    }
}

fn day_heading(date: NaiveDate) -> String {
    format!("{} ({})", format_display_date(date), date.format("%A"))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingWeekend {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_true")]
    pub is_shoot_day: bool,
}

fn default_true() -> bool {
    true
}

impl SpecialDate for WorkingWeekend {
    const KIND: SpecialDateKind = SpecialDateKind::WorkingWeekend;

    fn id(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        b.date.cmp(&a.date)
    }

    fn list_item(&self) -> DateListItem {
        let description = if self.description.trim().is_empty() {
            let mut text = "Working weekend".to_string();
            if self.is_shoot_day {
                text.push_str(" (counts as shoot day)");
            }
            text
        } else {
            self.description.clone()
        };
        DateListItem { id: self.id.clone(), title: day_heading(self.date), description }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankHoliday {
    pub id: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub is_working: bool,
    #[serde(default)]
    pub is_shoot_day: bool,
}

impl SpecialDate for BankHoliday {
    const KIND: SpecialDateKind = SpecialDateKind::BankHoliday;

    fn id(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.date.cmp(&b.date)
    }

    fn list_item(&self) -> DateListItem {
        let description = match (self.is_working, self.is_shoot_day) {
            (true, true) => "Working holiday (counts as shoot day)",
            (true, false) => "Working holiday (not counted as shoot day)",
            (false, _) => "Non-working holiday",
        };
        DateListItem {
            id: self.id.clone(),
            title: format!("{} - {}", day_heading(self.date), self.name),
            description: description.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HiatusPeriod {
    pub id: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    #[serde(default)]
    pub description: String,
}

impl HiatusPeriod {
    /// Inclusive length in days
    pub fn length_in_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days() + 1
    }
}

impl SpecialDate for HiatusPeriod {
    const KIND: SpecialDateKind = SpecialDateKind::Hiatus;

    fn id(&self) -> &str {
        &self.id
    }

    fn list_order(a: &Self, b: &Self) -> Ordering {
        a.start_date.cmp(&b.start_date).then(a.end_date.cmp(&b.end_date))
    }

    fn list_item(&self) -> DateListItem {
        let days = self.length_in_days();
        let mut description = format!("{} day{}", days, if days == 1 { "" } else { "s" });
        if !self.description.trim().is_empty() {
            description.push_str(" - ");
            description.push_str(self.description.trim());
        }
        DateListItem {
            id: self.id.clone(),
            title: format!("{} to {}", day_heading(self.start_date), day_heading(self.end_date)),
            description,
        }
    }
}

/// Create/update payload for a working weekend. `id` is present on update.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkingWeekendRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub description: String,
    pub is_shoot_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BankHolidayRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: NaiveDate,
    pub name: String,
    pub is_working: bool,
    pub is_shoot_day: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HiatusRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub description: String,
}

fn non_empty_id(id: &str) -> Option<String> {
    let id = id.trim();
    (!id.is_empty()).then(|| id.to_string())
}

/// Raw state of the working weekend modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WorkingWeekendForm {
    pub id: String,
    pub date: Option<NaiveDate>,
    pub description: String,
    pub is_shoot_day: bool,
}

impl WorkingWeekendForm {
    /// Blank form, pre-set to the coming Saturday and counted as a shoot day
    pub fn new(today: NaiveDate) -> Self {
        Self { id: String::new(), date: Some(next_saturday(today)), description: String::new(), is_shoot_day: true }
    }

    pub fn from_record(weekend: &WorkingWeekend) -> Self {
        Self {
            id: weekend.id.clone(),
            date: Some(weekend.date),
            description: weekend.description.clone(),
            is_shoot_day: weekend.is_shoot_day,
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn validate(&self) -> Result<WorkingWeekendRequest, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingDate("working weekend"))?;
        if !is_weekend(date) {
            return Err(ValidationError::NotAWeekend);
        }
        Ok(WorkingWeekendRequest {
            id: non_empty_id(&self.id),
            date,
            description: self.description.trim().to_string(),
            is_shoot_day: self.is_shoot_day,
        })
    }
}

/// Raw state of the bank holiday modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BankHolidayForm {
    pub id: String,
    pub date: Option<NaiveDate>,
    pub name: String,
    pub is_working: bool,
    pub is_shoot_day: bool,
}

impl BankHolidayForm {
    pub fn new(today: NaiveDate) -> Self {
        Self { date: Some(today), ..Default::default() }
    }

    pub fn from_record(holiday: &BankHoliday) -> Self {
        Self {
            id: holiday.id.clone(),
            date: Some(holiday.date),
            name: holiday.name.clone(),
            is_working: holiday.is_working,
            is_shoot_day: holiday.is_working && holiday.is_shoot_day,
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.id.trim().is_empty()
    }

    /// Only a worked holiday can count as a shoot day
    pub fn shoot_day_enabled(&self) -> bool {
        self.is_working
    }

    pub fn set_working(&mut self, is_working: bool) {
        self.is_working = is_working;
        if !is_working {
            self.is_shoot_day = false;
        }
    }

    pub fn set_shoot_day(&mut self, is_shoot_day: bool) {
        self.is_shoot_day = is_shoot_day && self.is_working;
    }

    pub fn validate(&self) -> Result<BankHolidayRequest, ValidationError> {
        let date = self.date.ok_or(ValidationError::MissingDate("holiday"))?;
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::MissingName);
        }
        Ok(BankHolidayRequest {
            id: non_empty_id(&self.id),
            date,
            name: name.to_string(),
            is_working: self.is_working,
            is_shoot_day: self.is_working && self.is_shoot_day,
        })
    }
}

/// Raw state of the hiatus modal
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HiatusForm {
    pub id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub description: String,
}

impl HiatusForm {
    pub fn new(today: NaiveDate) -> Self {
        Self { start_date: Some(today), end_date: Some(today), ..Default::default() }
    }

    pub fn from_record(hiatus: &HiatusPeriod) -> Self {
        Self {
            id: hiatus.id.clone(),
            start_date: Some(hiatus.start_date),
            end_date: Some(hiatus.end_date),
            description: hiatus.description.clone(),
        }
    }

    pub fn is_editing(&self) -> bool {
        !self.id.trim().is_empty()
    }

    pub fn validate(&self) -> Result<HiatusRequest, ValidationError> {
        let start_date = self.start_date.ok_or(ValidationError::MissingDate("hiatus start"))?;
        let end_date = self.end_date.ok_or(ValidationError::MissingDate("hiatus end"))?;
        if end_date < start_date {
            return Err(ValidationError::HiatusEndsBeforeStart);
        }
        Ok(HiatusRequest {
            id: non_empty_id(&self.id),
            start_date,
            end_date,
            description: self.description.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_weekend_form_rejects_weekdays() {
        let mut form = WorkingWeekendForm::new(date(2024, 3, 6));
        assert_eq!(form.date, Some(date(2024, 3, 9)));
        assert!(form.is_shoot_day);
        assert!(form.validate().is_ok());

        form.date = Some(date(2024, 3, 7));
        assert_eq!(form.validate(), Err(ValidationError::NotAWeekend));

        form.date = None;
        assert_matches!(form.validate(), Err(ValidationError::MissingDate(_)));
    }

    #[test]
    fn test_weekend_request_body() {
        let form = WorkingWeekendForm {
            id: String::new(),
            date: Some(date(2024, 3, 10)),
            description: "  Pickups ".to_string(),
            is_shoot_day: false,
        };
        assert_eq!(
            serde_json::to_value(form.validate().unwrap()).unwrap(),
            json!({ "date": "2024-03-10", "description": "Pickups", "isShootDay": false })
        );

        let editing = WorkingWeekendForm { id: "w1".to_string(), ..form };
        assert!(editing.is_editing());
        assert_eq!(editing.validate().unwrap().id.as_deref(), Some("w1"));
    }

    #[test]
    fn test_holiday_shoot_day_requires_working() {
        let mut form = BankHolidayForm::new(date(2024, 5, 6));
        assert!(!form.shoot_day_enabled());

        form.set_shoot_day(true);
        assert!(!form.is_shoot_day);

        form.set_working(true);
        form.set_shoot_day(true);
        assert!(form.is_shoot_day);

        form.set_working(false);
        assert!(!form.is_shoot_day);
    }

    #[test]
    fn test_holiday_validation() {
        let mut form = BankHolidayForm::new(date(2024, 5, 6));
        assert_eq!(form.validate(), Err(ValidationError::MissingName));
        assert_eq!(form.validate().unwrap_err().to_string(), "Please enter a name for the holiday");

        form.name = "Early May".to_string();
        let request = form.validate().unwrap();
        assert_eq!(request.name, "Early May");
        assert!(!request.is_working);

        form.date = None;
        assert_eq!(
            form.validate().unwrap_err().to_string(),
            "Please select a date for the holiday"
        );
    }

    #[test]
    fn test_hiatus_validation() {
        let mut form = HiatusForm::new(date(2024, 4, 1));
        assert!(form.validate().is_ok());

        form.end_date = Some(date(2024, 3, 31));
        assert_eq!(form.validate(), Err(ValidationError::HiatusEndsBeforeStart));

        form.end_date = Some(date(2024, 4, 14));
        assert_eq!(
            serde_json::to_value(form.validate().unwrap()).unwrap(),
            json!({ "startDate": "2024-04-01", "endDate": "2024-04-14", "description": "" })
        );
    }

    #[test]
    fn test_weekend_list_newest_first() {
        let mut weekends: Vec<WorkingWeekend> = serde_json::from_value(json!([
            { "id": "a", "date": "2024-03-02" },
            { "id": "b", "date": "2024-04-06", "description": "Night shoot", "isShootDay": false },
            { "id": "c", "date": "2024-03-16" }
        ]))
        .unwrap();
        WorkingWeekend::sort_for_display(&mut weekends);

        let ids: Vec<&str> = weekends.iter().map(|w| w.id()).collect();
        assert_eq!(ids, vec!["b", "c", "a"]);

        assert_eq!(weekends[0].list_item().description, "Night shoot");
        let item = weekends[2].list_item();
        assert_eq!(item.title, "02/03/2024 (Saturday)");
        assert_eq!(item.description, "Working weekend (counts as shoot day)");
    }

    #[test]
    fn test_holiday_list_oldest_first() {
        let mut holidays = vec![
            BankHoliday {
                id: "late".to_string(),
                date: date(2024, 12, 25),
                name: "Christmas Day".to_string(),
                is_working: false,
                is_shoot_day: false,
            },
            BankHoliday {
                id: "early".to_string(),
                date: date(2024, 5, 6),
                name: "Early May".to_string(),
                is_working: true,
                is_shoot_day: true,
            },
        ];
        BankHoliday::sort_for_display(&mut holidays);

        assert_eq!(holidays[0].id(), "early");
        let item = holidays[0].list_item();
        assert_eq!(item.title, "06/05/2024 (Monday) - Early May");
        assert_eq!(item.description, "Working holiday (counts as shoot day)");
        assert_eq!(holidays[1].list_item().description, "Non-working holiday");
    }

    #[test]
    fn test_hiatus_list_item() {
        let hiatus = HiatusPeriod {
            id: "h".to_string(),
            start_date: date(2024, 4, 1),
            end_date: date(2024, 4, 1),
            description: "Easter".to_string(),
        };
        assert_eq!(hiatus.length_in_days(), 1);
        assert_eq!(hiatus.list_item().description, "1 day - Easter");
    }

    #[test]
    fn test_kind_messages() {
        let kind = SpecialDateKind::WorkingWeekend;
        assert_eq!(kind.modal_title(false), "Add Working Weekend");
        assert_eq!(kind.saved_message(true), "Working weekend updated successfully");
        assert_eq!(
            SpecialDateKind::BankHoliday.save_error(false, "boom"),
            "Error creating bank holiday: boom"
        );
        assert_eq!(SpecialDateKind::Hiatus.deleted_message(), "Hiatus period deleted successfully");
    }
}
