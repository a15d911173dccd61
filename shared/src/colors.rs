use std::collections::BTreeMap;

use crate::calendar::{DayRow, LocationArea};

pub const DARK_TEXT: &str = "#000000";
pub const LIGHT_TEXT: &str = "#ffffff";
/// Background for department codes with no configured colour
pub const UNKNOWN_DEPARTMENT_COLOR: &str = "#cccccc";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb` or `rrggbb`
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self { r: channel(0)?, g: channel(2)?, b: channel(4)? })
    }

    /// `rgb(r, g, b)` or `rgba(r, g, b, a)` as produced by computed styles
    pub fn from_rgb_function(value: &str) -> Option<Self> {
        let value = value.trim();
        let inner = value
            .strip_prefix("rgba(")
            .or_else(|| value.strip_prefix("rgb("))?
            .strip_suffix(')')?;
        let mut parts = inner.split(',').map(str::trim);
        let r = parts.next()?.parse().ok()?;
        let g = parts.next()?.parse().ok()?;
        let b = parts.next()?.parse().ok()?;
        Some(Self { r, g, b })
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::from_hex(value).or_else(|| Self::from_rgb_function(value))
    }

    /// YIQ perceived brightness, 0..=255
    pub fn brightness(&self) -> u32 {
        (u32::from(self.r) * 299 + u32::from(self.g) * 587 + u32::from(self.b) * 114) / 1000
    }
}

/// Black or white text, whichever reads better on `background`.
/// Unparseable colours (e.g. `transparent`) get dark text.
pub fn contrast_text_color(background: &str) -> &'static str {
    match Rgb::parse(background) {
        Some(rgb) if rgb.brightness() <= 128 => LIGHT_TEXT,
        _ => DARK_TEXT,
    }
}

/// Colours used when the page supplies no department palette
pub fn fallback_department_colors() -> BTreeMap<String, String> {
    [
        ("SFX", "#ffd8e6"),
        ("STN", "#ffecd8"),
        ("CR", "#d8fff2"),
        ("ST", "#f2d8ff"),
        ("PR", "#d8fdff"),
        ("LL", "#e6ffd8"),
        ("VFX", "#d8e5ff"),
        ("ANI", "#ffedd8"),
        ("UW", "#d8f8ff"),
        ("INCY", "#f542dd"),
        ("TEST", "#067bf9"),
    ]
    .into_iter()
    .map(|(code, color)| (code.to_string(), color.to_string()))
    .collect()
}

/// Background and text colour for one tag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagStyle {
    pub background: String,
    pub text: &'static str,
}

impl TagStyle {
    pub fn for_background(background: impl Into<String>) -> Self {
        let background = background.into();
        let text = contrast_text_color(&background);
        Self { background, text }
    }

    pub fn css(&self) -> String {
        format!("background-color: {}; color: {};", self.background, self.text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentPalette {
    colors: BTreeMap<String, String>,
}

impl DepartmentPalette {
    pub fn new(colors: BTreeMap<String, String>) -> Self {
        Self { colors }
    }

    pub fn style_for(&self, code: &str) -> TagStyle {
        let background = self
            .colors
            .get(code.trim())
            .map(String::as_str)
            .unwrap_or(UNKNOWN_DEPARTMENT_COLOR);
        TagStyle::for_background(background)
    }
}

impl Default for DepartmentPalette {
    fn default() -> Self {
        Self::new(fallback_department_colors())
    }
}

/// Area colour for a row: its own `locationArea` when that names a known
/// area, otherwise the first area whose name appears in the location text.
pub fn area_color_for<'a>(row: &DayRow, areas: &'a [LocationArea]) -> Option<&'a LocationArea> {
    let area_name = row.location_area.trim();
    if !area_name.is_empty() {
        if let Some(area) = areas.iter().find(|area| area.name == area_name) {
            return Some(area);
        }
    }

    let location = row.location.trim();
    if location.is_empty() {
        return None;
    }
    areas
        .iter()
        .find(|area| !area.name.is_empty() && location.contains(area.name.as_str()))
}

/// Number of rows attributed to each area, in area order
pub fn area_counts<'a>(rows: &[DayRow], areas: &'a [LocationArea]) -> Vec<(&'a LocationArea, usize)> {
    let mut counts: Vec<(&LocationArea, usize)> = areas.iter().map(|area| (area, 0)).collect();
    for row in rows {
        if let Some(area) = area_color_for(row, areas) {
            if let Some(entry) = counts.iter_mut().find(|(a, _)| std::ptr::eq(*a, area)) {
                entry.1 += 1;
            }
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn area(name: &str, color: &str) -> LocationArea {
        LocationArea { name: name.to_string(), color: color.to_string() }
    }

    fn row_at(location: &str, location_area: &str) -> DayRow {
        let mut row = DayRow::new(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
        row.location = location.to_string();
        row.location_area = location_area.to_string();
        row
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!(Rgb::from_hex("#ff8000"), Some(Rgb { r: 255, g: 128, b: 0 }));
        assert_eq!(Rgb::from_hex("FF8000"), Some(Rgb { r: 255, g: 128, b: 0 }));
        assert_eq!(Rgb::from_hex("#fff"), None);
        assert_eq!(Rgb::from_hex("#gg0000"), None);
        assert_eq!(Rgb::parse("rgb(10, 20, 30)"), Some(Rgb { r: 10, g: 20, b: 30 }));
        assert_eq!(Rgb::parse("rgba(10,20,30,0.5)"), Some(Rgb { r: 10, g: 20, b: 30 }));
        assert_eq!(Rgb::parse("transparent"), None);
    }

    #[test]
    fn test_contrast_text_color() {
        assert_eq!(contrast_text_color("#000000"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#ffffff"), DARK_TEXT);
        assert_eq!(contrast_text_color("#067bf9"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("#ffd8e6"), DARK_TEXT);
        // a brightness of exactly 128 takes light text
        assert_eq!(contrast_text_color("rgb(128, 128, 128)"), LIGHT_TEXT);
        assert_eq!(contrast_text_color("transparent"), DARK_TEXT);
    }

    #[test]
    fn test_department_palette() {
        let palette = DepartmentPalette::default();
        assert_eq!(palette.style_for("SFX").background, "#ffd8e6");
        assert_eq!(palette.style_for("TEST").text, LIGHT_TEXT);
        assert_eq!(palette.style_for(" INCY ").text, DARK_TEXT);

        let unknown = palette.style_for("XYZ");
        assert_eq!(unknown.background, UNKNOWN_DEPARTMENT_COLOR);
        assert_eq!(unknown.css(), "background-color: #cccccc; color: #000000;");
    }

    #[test]
    fn test_area_color_prefers_explicit_area() {
        let areas = vec![area("Studio", "#111111"), area("Pinewood", "#222222")];

        let row = row_at("Pinewood Stage 5", "Studio");
        assert_eq!(area_color_for(&row, &areas).map(|a| a.color.as_str()), Some("#111111"));

        let row = row_at("Pinewood Stage 5", "");
        assert_eq!(area_color_for(&row, &areas).map(|a| a.color.as_str()), Some("#222222"));

        // Unknown explicit area falls through to the location text
        let row = row_at("Pinewood Lot", "Elsewhere");
        assert_eq!(area_color_for(&row, &areas).map(|a| a.name.as_str()), Some("Pinewood"));

        assert_eq!(area_color_for(&row_at("", ""), &areas), None);
    }

    #[test]
    fn test_area_counts() {
        let areas = vec![area("Studio", "#111111"), area("Beach", "#222222")];
        let rows = vec![
            row_at("", "Studio"),
            row_at("Brighton Beach", ""),
            row_at("Studio B", ""),
            row_at("Car park", ""),
        ];

        let counts: Vec<(&str, usize)> = area_counts(&rows, &areas)
            .into_iter()
            .map(|(area, count)| (area.name.as_str(), count))
            .collect();
        assert_eq!(counts, vec![("Studio", 2), ("Beach", 1)]);
    }
}
