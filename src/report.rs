//! Plain-text rendering of forecasts and rankings

use chrono::NaiveDate;

use crate::config::DisplayConfig;
use crate::dataset::DayOverview;
use crate::favorability::split_top;
use crate::models::{RankedSegment, day_display_name};

const NAME_WIDTH: usize = 28;

/// Format an optional bearing with two decimals
#[must_use]
pub fn format_bearing(bearing: Option<f64>) -> String {
    bearing.map_or_else(|| "N/A".to_string(), |b| format!("{b:.2}°"))
}

/// Format a speed in km/h with two decimals
#[must_use]
pub fn format_speed(speed_kmh: f64) -> String {
    format!("{speed_kmh:.2}")
}

fn truncate(name: &str, width: usize) -> String {
    if name.chars().count() <= width {
        name.to_string()
    } else {
        let mut short: String = name.chars().take(width - 1).collect();
        short.push('…');
        short
    }
}

/// Forecast overview table, marking the selected day with `>`
#[must_use]
pub fn render_forecast_overview(
    overview: &[DayOverview],
    selected: Option<&str>,
    today: NaiveDate,
) -> String {
    if overview.is_empty() {
        return "No forecast data available".to_string();
    }

    let mut lines = vec![
        "Wind Forecast".to_string(),
        format!("  {:<24} {:<12} {:>10}", "Day", "Direction", "km/h"),
    ];

    for day in overview {
        let marker = if selected == Some(day.day.as_str()) { '>' } else { ' ' };
        let name = day_display_name(&day.day, today);
        lines.push(format!(
            "{marker} {:<24} {:<12} {:>10}",
            truncate(&name, 24),
            day.wind_direction,
            format_speed(day.wind_speed_kmh)
        ));
    }

    lines.join("\n")
}

fn segment_row(ranked: &RankedSegment) -> String {
    let length = ranked
        .segment
        .length_km()
        .map_or_else(|| "-".to_string(), |km| format!("{km:.2}"));

    format!(
        "  {:<width$} {:>7} {:>9} {:<12} {:>8} {}",
        truncate(&ranked.segment.name, NAME_WIDTH),
        length,
        format_bearing(ranked.segment.bearing),
        ranked.wind_direction,
        format_speed(ranked.wind_speed_kmh),
        ranked.rating.stars(),
        width = NAME_WIDTH
    )
}

fn table_header() -> String {
    format!(
        "  {:<width$} {:>7} {:>9} {:<12} {:>8} {}",
        "Name",
        "Km",
        "Bearing",
        "Wind",
        "km/h",
        "Rating",
        width = NAME_WIDTH
    )
}

/// Ranked segments for `day`: the top segments, then the rest if enabled
#[must_use]
pub fn render_ranking(ranked: &[RankedSegment], day: &str, display: &DisplayConfig) -> String {
    if ranked.is_empty() {
        return "No segments to rank".to_string();
    }

    let (top, others) = split_top(ranked, display.top_segments);

    let mut lines = vec![
        format!("Top {} Segments for {day}", top.len()),
        table_header(),
    ];
    lines.extend(top.iter().map(segment_row));

    if display.show_others && !others.is_empty() {
        lines.push(String::new());
        lines.push(format!("Other Segments ({})", others.len()));
        lines.extend(others.iter().map(segment_row));
    }

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::favorability::rank;
    use crate::models::{Forecast, Segment, WindSample};

    fn ranked() -> Vec<RankedSegment> {
        let segments: Vec<Segment> = [(1_u64, 270.0), (2, 90.0), (3, 0.0)]
            .into_iter()
            .map(|(id, from)| {
                Segment::new(id, format!("Segment {id}"), Some(90.0))
                    .with_forecast(Forecast::new().with_day("mon", WindSample::new(from, 8.0)))
            })
            .collect();
        rank(&segments, "mon")
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_bearing(Some(181.456)), "181.46°");
        assert_eq!(format_bearing(None), "N/A");
        assert_eq!(format_speed(28.8), "28.80");
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a very long segment name", 6), "a ver…");
    }

    #[test]
    fn test_render_ranking_with_others() {
        let display = DisplayConfig {
            top_segments: 2,
            show_others: true,
        };
        let text = render_ranking(&ranked(), "mon", &display);

        assert!(text.starts_with("Top 2 Segments for mon"));
        assert!(text.contains("Other Segments (1)"));
        let first_row = text.lines().nth(2).unwrap();
        assert!(first_row.contains("Segment 1"));
        assert!(first_row.contains("★★★★★"));
        assert!(first_row.contains("28.80"));
    }

    #[test]
    fn test_render_ranking_hides_others() {
        let display = DisplayConfig {
            top_segments: 1,
            show_others: false,
        };
        let text = render_ranking(&ranked(), "mon", &display);

        assert!(!text.contains("Other Segments"));
        assert_eq!(text.lines().count(), 3);
        assert_eq!(render_ranking(&[], "mon", &display), "No segments to rank");
    }

    #[test]
    fn test_render_forecast_overview() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let overview = vec![
            DayOverview {
                day: "2024-03-01".to_string(),
                wind_direction: "West".to_string(),
                wind_speed_kmh: 28.8,
            },
            DayOverview {
                day: "2024-03-02".to_string(),
                wind_direction: "Unknown".to_string(),
                wind_speed_kmh: 0.0,
            },
        ];
        let text = render_forecast_overview(&overview, Some("2024-03-02"), today);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[2].starts_with("  Today"));
        assert!(lines[2].contains("28.80"));
        assert!(lines[3].starts_with("> Tomorrow"));
        assert!(lines[3].contains("Unknown"));
        assert_eq!(
            render_forecast_overview(&[], None, today),
            "No forecast data available"
        );
    }
}
