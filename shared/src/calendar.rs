use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of calendar day. Exactly one applies to every row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayType {
    Shoot,
    Weekend,
    Holiday,
    Hiatus,
    Prep,
}

impl DayType {
    pub const ALL: [DayType; 5] = [
        DayType::Shoot,
        DayType::Weekend,
        DayType::Holiday,
        DayType::Hiatus,
        DayType::Prep,
    ];

    /// CSS class used on the calendar row
    pub fn css_class(self) -> &'static str {
        match self {
            DayType::Shoot => "shoot",
            DayType::Weekend => "weekend",
            DayType::Holiday => "holiday",
            DayType::Hiatus => "hiatus",
            DayType::Prep => "prep",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DayType::Shoot => "Shoot",
            DayType::Weekend => "Weekend",
            DayType::Holiday => "Holiday",
            DayType::Hiatus => "Hiatus",
            DayType::Prep => "Prep",
        }
    }
}

impl fmt::Display for DayType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.css_class())
    }
}

/// A single day of the production calendar as served by
/// `GET /api/projects/{id}/calendar`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayRow {
    pub date: NaiveDate,
    /// Explicit classification from the backend, when it sends one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub day_type: Option<DayType>,
    #[serde(default)]
    pub is_shoot_day: bool,
    #[serde(default)]
    pub is_prep: bool,
    #[serde(default)]
    pub is_weekend: bool,
    #[serde(default)]
    pub is_working_weekend: bool,
    #[serde(default)]
    pub is_holiday: bool,
    /// Holiday that is still worked
    #[serde(default)]
    pub is_working: bool,
    #[serde(default)]
    pub is_hiatus: bool,
    #[serde(default)]
    pub shoot_day: Option<u32>,
    #[serde(default)]
    pub main_unit: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub location_area: String,
    #[serde(default)]
    pub sequence: String,
    #[serde(default)]
    pub departments: Vec<String>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub second_unit: String,
}

impl DayRow {
    /// A plain row for the given date with every flag cleared.
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            day_type: None,
            is_shoot_day: false,
            is_prep: false,
            is_weekend: false,
            is_working_weekend: false,
            is_holiday: false,
            is_working: false,
            is_hiatus: false,
            shoot_day: None,
            main_unit: String::new(),
            location: String::new(),
            location_area: String::new(),
            sequence: String::new(),
            departments: Vec::new(),
            notes: String::new(),
            second_unit: String::new(),
        }
    }

    /// Resolved day type. The backend's explicit `dayType` wins; otherwise the
    /// flags are ranked hiatus, shoot, non-working holiday, weekend, and
    /// anything left over counts as a non-shooting working day (prep).
    pub fn day_type(&self) -> DayType {
        if let Some(day_type) = self.day_type {
            return day_type;
        }
        if self.is_hiatus {
            DayType::Hiatus
        } else if self.is_shoot_day {
            DayType::Shoot
        } else if self.is_holiday {
            DayType::Holiday
        } else if self.is_weekend {
            DayType::Weekend
        } else {
            DayType::Prep
        }
    }

    /// Only shoot days may be picked up and dragged.
    pub fn draggable(&self) -> bool {
        self.day_type() == DayType::Shoot
    }

    pub fn weekday_name(&self) -> String {
        self.date.format("%A").to_string()
    }

    pub fn has_second_unit(&self) -> bool {
        !self.second_unit.trim().is_empty()
    }
}

/// A named location area with its display colour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationArea {
    pub name: String,
    pub color: String,
}

/// Calendar document for one project.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarData {
    #[serde(default)]
    pub project_id: String,
    #[serde(default)]
    pub days: Vec<DayRow>,
    #[serde(default)]
    pub location_areas: Vec<LocationArea>,
    #[serde(default)]
    pub last_updated: Option<String>,
}

/// Project summary from `GET /api/projects`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectSummary {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

impl ProjectSummary {
    pub fn display_name(&self) -> &str {
        if self.name.trim().is_empty() {
            &self.id
        } else {
            &self.name
        }
    }
}

/// DD/MM/YYYY, the format used across the admin pages
pub fn format_display_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

/// YYYY-MM-DD, the value format of `<input type="date">`
pub fn format_input_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// The coming Saturday, or `today` itself when it is a Saturday.
pub fn next_saturday(today: NaiveDate) -> NaiveDate {
    let days_until = (6 + 7 - today.weekday().num_days_from_sunday()) % 7;
    today + chrono::Duration::days(i64::from(days_until))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_type_from_flags() {
        let mut row = DayRow::new(date(2024, 3, 1));
        assert_eq!(row.day_type(), DayType::Prep);

        row.is_shoot_day = true;
        assert_eq!(row.day_type(), DayType::Shoot);

        // Hiatus outranks everything else
        row.is_hiatus = true;
        assert_eq!(row.day_type(), DayType::Hiatus);

        let mut weekend = DayRow::new(date(2024, 3, 2));
        weekend.is_weekend = true;
        assert_eq!(weekend.day_type(), DayType::Weekend);

        // A working weekend counted as a shoot day is a shoot day
        weekend.is_working_weekend = true;
        weekend.is_shoot_day = true;
        assert_eq!(weekend.day_type(), DayType::Shoot);

        let mut holiday = DayRow::new(date(2024, 3, 29));
        holiday.is_holiday = true;
        holiday.is_working = true;
        assert_eq!(holiday.day_type(), DayType::Holiday);
    }

    #[test]
    fn test_explicit_day_type_wins() {
        let mut row = DayRow::new(date(2024, 3, 1));
        row.is_shoot_day = true;
        row.day_type = Some(DayType::Hiatus);
        assert_eq!(row.day_type(), DayType::Hiatus);
        assert!(!row.draggable());
    }

    #[test]
    fn test_only_shoot_days_are_draggable() {
        for day_type in DayType::ALL {
            let mut row = DayRow::new(date(2024, 3, 1));
            row.day_type = Some(day_type);
            assert_eq!(row.draggable(), day_type == DayType::Shoot, "{day_type}");
        }
    }

    #[test]
    fn test_deserialize_backend_day() {
        let value = json!({
            "date": "2024-03-04",
            "dayOfWeek": "Monday",
            "isPrep": false,
            "isShootDay": true,
            "isWeekend": false,
            "shootDay": 3,
            "location": "Pinewood Stage 5",
            "locationArea": "Studio",
            "sequence": "12A",
            "departments": ["SFX", "ST"],
            "secondUnit": ""
        });

        let row: DayRow = serde_json::from_value(value).unwrap();
        assert_eq!(row.date, date(2024, 3, 4));
        assert_eq!(row.shoot_day, Some(3));
        assert_eq!(row.day_type(), DayType::Shoot);
        assert_eq!(row.departments, vec!["SFX", "ST"]);
        assert!(!row.has_second_unit());
        assert_eq!(row.weekday_name(), "Monday");
    }

    #[test]
    fn test_calendar_data_tolerates_missing_fields() {
        let calendar: CalendarData = serde_json::from_value(json!({
            "days": [{ "date": "2024-03-02", "isWeekend": true }]
        }))
        .unwrap();

        assert!(calendar.location_areas.is_empty());
        assert_eq!(calendar.days.len(), 1);
        assert_eq!(calendar.days[0].day_type(), DayType::Weekend);
    }

    #[test]
    fn test_date_formats() {
        assert_eq!(format_display_date(date(2024, 3, 1)), "01/03/2024");
        assert_eq!(format_input_date(date(2024, 3, 1)), "2024-03-01");
        assert_eq!(parse_input_date(" 2024-03-01 "), Some(date(2024, 3, 1)));
        assert_eq!(parse_input_date("01/03/2024"), None);
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_next_saturday() {
        // 2024-03-06 is a Wednesday
        assert_eq!(next_saturday(date(2024, 3, 6)), date(2024, 3, 9));
        assert_eq!(next_saturday(date(2024, 3, 9)), date(2024, 3, 9));
        assert_eq!(next_saturday(date(2024, 3, 10)), date(2024, 3, 16));
        assert!(is_weekend(next_saturday(date(2024, 12, 30))));
    }

    #[test]
    fn test_project_display_name_falls_back_to_id() {
        let project = ProjectSummary { id: "abc".to_string(), name: " ".to_string() };
        assert_eq!(project.display_name(), "abc");
    }
}
