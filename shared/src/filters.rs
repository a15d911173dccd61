use serde::{Deserialize, Serialize};

use crate::calendar::{DayRow, DayType};

/// Row-type filter toggles shown in the filter panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowFilter {
    Weekends,
    Prep,
    Holidays,
    Hiatus,
    Shoot,
}

impl RowFilter {
    pub const ALL: [RowFilter; 5] = [
        RowFilter::Weekends,
        RowFilter::Prep,
        RowFilter::Holidays,
        RowFilter::Hiatus,
        RowFilter::Shoot,
    ];

    pub fn day_type(self) -> DayType {
        match self {
            RowFilter::Weekends => DayType::Weekend,
            RowFilter::Prep => DayType::Prep,
            RowFilter::Holidays => DayType::Holiday,
            RowFilter::Hiatus => DayType::Hiatus,
            RowFilter::Shoot => DayType::Shoot,
        }
    }

    pub fn for_day_type(day_type: DayType) -> Self {
        match day_type {
            DayType::Weekend => RowFilter::Weekends,
            DayType::Prep => RowFilter::Prep,
            DayType::Holiday => RowFilter::Holidays,
            DayType::Hiatus => RowFilter::Hiatus,
            DayType::Shoot => RowFilter::Shoot,
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            RowFilter::Weekends => "filter-weekends",
            RowFilter::Prep => "filter-prep",
            RowFilter::Holidays => "filter-holidays",
            RowFilter::Hiatus => "filter-hiatus",
            RowFilter::Shoot => "filter-shoot",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RowFilter::Weekends => "Weekends",
            RowFilter::Prep => "Prep days",
            RowFilter::Holidays => "Holidays",
            RowFilter::Hiatus => "Hiatus",
            RowFilter::Shoot => "Shoot days",
        }
    }
}

/// Optional table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnFilter {
    Sequence,
    SecondUnit,
}

impl ColumnFilter {
    pub const ALL: [ColumnFilter; 2] = [ColumnFilter::Sequence, ColumnFilter::SecondUnit];

    /// Prefix of the `-col` header and `-cell` classes
    pub fn column_name(self) -> &'static str {
        match self {
            ColumnFilter::Sequence => "sequence",
            ColumnFilter::SecondUnit => "second-unit",
        }
    }

    pub fn element_id(self) -> &'static str {
        match self {
            ColumnFilter::Sequence => "filter-col-sequence",
            ColumnFilter::SecondUnit => "filter-col-second-unit",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ColumnFilter::Sequence => "Sequence",
            ColumnFilter::SecondUnit => "Second Unit",
        }
    }
}

/// Persisted "hide" flags. Stored as one flat JSON object; a missing key
/// means the rows or column stay visible.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterPreferences {
    pub hide_weekends: bool,
    pub hide_prep: bool,
    pub hide_holidays: bool,
    pub hide_hiatus: bool,
    pub hide_shoot: bool,
    pub hide_col_sequence: bool,
    pub hide_col_second_unit: bool,
}

impl FilterPreferences {
    fn row_flag(&mut self, filter: RowFilter) -> &mut bool {
        match filter {
            RowFilter::Weekends => &mut self.hide_weekends,
            RowFilter::Prep => &mut self.hide_prep,
            RowFilter::Holidays => &mut self.hide_holidays,
            RowFilter::Hiatus => &mut self.hide_hiatus,
            RowFilter::Shoot => &mut self.hide_shoot,
        }
    }

    fn column_flag(&mut self, column: ColumnFilter) -> &mut bool {
        match column {
            ColumnFilter::Sequence => &mut self.hide_col_sequence,
            ColumnFilter::SecondUnit => &mut self.hide_col_second_unit,
        }
    }

    pub fn is_row_filter_visible(&self, filter: RowFilter) -> bool {
        let hidden = match filter {
            RowFilter::Weekends => self.hide_weekends,
            RowFilter::Prep => self.hide_prep,
            RowFilter::Holidays => self.hide_holidays,
            RowFilter::Hiatus => self.hide_hiatus,
            RowFilter::Shoot => self.hide_shoot,
        };
        !hidden
    }

    pub fn is_column_visible(&self, column: ColumnFilter) -> bool {
        let hidden = match column {
            ColumnFilter::Sequence => self.hide_col_sequence,
            ColumnFilter::SecondUnit => self.hide_col_second_unit,
        };
        !hidden
    }

    pub fn set_row_visible(&mut self, filter: RowFilter, visible: bool) {
        *self.row_flag(filter) = !visible;
    }

    pub fn set_column_visible(&mut self, column: ColumnFilter, visible: bool) {
        *self.column_flag(column) = !visible;
    }

    pub fn is_row_visible(&self, row: &DayRow) -> bool {
        self.is_row_filter_visible(RowFilter::for_day_type(row.day_type()))
    }

    /// Show everything again
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn stats(&self, rows: &[DayRow]) -> FilterStats {
        rows.iter().fold(FilterStats::default(), |mut stats, row| {
            let visible = self.is_row_visible(row);
            let shoot = row.day_type() == DayType::Shoot;
            stats.total += 1;
            stats.visible += usize::from(visible);
            stats.total_shoot_days += usize::from(shoot);
            stats.visible_shoot_days += usize::from(shoot && visible);
            stats
        })
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FilterStats {
    pub total: usize,
    pub visible: usize,
    pub total_shoot_days: usize,
    pub visible_shoot_days: usize,
}

impl FilterStats {
    pub fn shoot_days_label(&self) -> String {
        format!("{} / {}", self.visible_shoot_days, self.total_shoot_days)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;

    fn row(day: u32, day_type: DayType) -> DayRow {
        let mut row = DayRow::new(NaiveDate::from_ymd_opt(2024, 3, day).unwrap());
        row.day_type = Some(day_type);
        row
    }

    #[test]
    fn test_storage_format_uses_hide_keys() {
        let mut prefs = FilterPreferences::default();
        prefs.set_row_visible(RowFilter::Weekends, false);
        prefs.set_column_visible(ColumnFilter::SecondUnit, false);

        assert_eq!(
            serde_json::to_value(prefs).unwrap(),
            json!({
                "hideWeekends": true,
                "hidePrep": false,
                "hideHolidays": false,
                "hideHiatus": false,
                "hideShoot": false,
                "hideColSequence": false,
                "hideColSecondUnit": true
            })
        );
    }

    #[test]
    fn test_missing_keys_mean_visible() {
        let prefs: FilterPreferences = serde_json::from_str(r#"{"hidePrep":true}"#).unwrap();
        assert!(!prefs.is_row_filter_visible(RowFilter::Prep));
        for filter in [RowFilter::Weekends, RowFilter::Holidays, RowFilter::Hiatus, RowFilter::Shoot] {
            assert!(prefs.is_row_filter_visible(filter));
        }
        assert!(prefs.is_column_visible(ColumnFilter::Sequence));

        let empty: FilterPreferences = serde_json::from_str("{}").unwrap();
        assert_eq!(empty, FilterPreferences::default());
    }

    #[test]
    fn test_reset_shows_everything() {
        let mut prefs = FilterPreferences {
            hide_weekends: true,
            hide_shoot: true,
            hide_col_sequence: true,
            ..Default::default()
        };
        prefs.reset();
        assert!(RowFilter::ALL.iter().all(|f| prefs.is_row_filter_visible(*f)));
        assert!(ColumnFilter::ALL.iter().all(|c| prefs.is_column_visible(*c)));
    }

    #[test]
    fn test_stats_count_visible_rows() {
        let rows = vec![
            row(1, DayType::Shoot),
            row(2, DayType::Weekend),
            row(3, DayType::Weekend),
            row(4, DayType::Shoot),
            row(5, DayType::Hiatus),
        ];
        let mut prefs = FilterPreferences::default();
        prefs.set_row_visible(RowFilter::Weekends, false);

        let stats = prefs.stats(&rows);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.visible, 3);
        assert_eq!(stats.shoot_days_label(), "2 / 2");

        prefs.set_row_visible(RowFilter::Shoot, false);
        assert_eq!(prefs.stats(&rows).shoot_days_label(), "0 / 2");
    }

    #[test]
    fn test_row_filter_round_trips_day_type() {
        for day_type in DayType::ALL {
            assert_eq!(RowFilter::for_day_type(day_type).day_type(), day_type);
        }
    }
}
