//! Plain-text rendering of the statistics reports.
//!
//! Each `render_*` function returns the report body as lines; the shell adds
//! headings, timing and separators around them.

use bikeshare_core::formatting::{format_count, format_duration, format_hour, format_number};
use bikeshare_core::models::{month_name, weekday_name};
use bikeshare_data::aggregator::{
    BirthYearReport, DurationStats, Mode, StationStats, TimeStats, UserStats, ValueCount,
};

const NO_DATA: &str = "no data for the selected filters";

/// Horizontal rule printed between report sections.
pub fn separator() -> String {
    "-".repeat(40)
}

pub fn render_time_stats(stats: &TimeStats) -> Vec<String> {
    let month = stats.most_common_month.as_ref().map(|m| {
        let name = month_name(m.value)
            .map(str::to_string)
            .unwrap_or_else(|| m.value.to_string());
        with_count(&name, m.count)
    });
    let weekday = stats.most_common_weekday.as_ref().map(|m| {
        let name = weekday_name(m.value)
            .map(str::to_string)
            .unwrap_or_else(|| m.value.to_string());
        with_count(&name, m.count)
    });
    let hour = stats
        .most_common_hour
        .as_ref()
        .map(|m| with_count(&format_hour(m.value), m.count));

    vec![
        sentence("The most common month", "was", month),
        sentence("The most common day of the week", "was", weekday),
        sentence("The most common hour", "was", hour),
    ]
}

pub fn render_station_stats(stats: &StationStats) -> Vec<String> {
    let describe = |m: &Option<Mode<String>>| m.as_ref().map(|m| with_count(&m.value, m.count));

    vec![
        sentence(
            "The most commonly used start station",
            "is",
            describe(&stats.most_common_start),
        ),
        sentence(
            "The most common end station",
            "is",
            describe(&stats.most_common_end),
        ),
        sentence(
            "The most common trip",
            "is from",
            describe(&stats.most_common_trip),
        ),
    ]
}

pub fn render_duration_stats(stats: &DurationStats) -> Vec<String> {
    let Some(mean) = stats.mean_seconds else {
        return vec![
            format!("The total time spent traveling: {}.", NO_DATA),
            format!("The mean travel time: {}.", NO_DATA),
        ];
    };

    vec![
        format!(
            "The total time spent traveling was {} seconds ({}) over {} trips.",
            format_number(stats.total_seconds, 0),
            format_duration(stats.total_seconds),
            format_count(stats.trip_count as u64),
        ),
        format!(
            "The mean travel time was {} seconds ({}).",
            format_number(mean, 2),
            format_duration(mean),
        ),
    ]
}

pub fn render_user_stats(stats: &UserStats) -> Vec<String> {
    let mut lines = vec!["These are counts for each user type:".to_string()];
    lines.extend(render_counts(&stats.user_types));
    lines.push(String::new());

    match &stats.genders {
        Some(genders) => {
            lines.push("These are counts for each gender:".to_string());
            lines.extend(render_counts(genders));
            lines.push(String::new());
        }
        None => lines.push("No gender data found.".to_string()),
    }

    match &stats.birth_years {
        BirthYearReport::Stats(b) => {
            lines.push(format!(
                "The earliest birth year of a rider was {}.",
                b.earliest
            ));
            lines.push(format!(
                "The most recent birth year of a rider was {}.",
                b.latest
            ));
            lines.push(format!(
                "The most common birth year of a rider was {}.",
                with_count(&b.most_common.value.to_string(), b.most_common.count)
            ));
        }
        BirthYearReport::NoData => lines.push(format!("Birth years: {}.", NO_DATA)),
        BirthYearReport::NotInDataset => lines.push("No birth year data found.".to_string()),
    }

    lines
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn sentence(subject: &str, verb: &str, value: Option<String>) -> String {
    match value {
        Some(v) => format!("{} {} {}.", subject, verb, v),
        None => format!("{}: {}.", subject, NO_DATA),
    }
}

fn with_count(value: &str, count: usize) -> String {
    let noun = if count == 1 { "trip" } else { "trips" };
    format!("{} ({} {})", value, format_count(count as u64), noun)
}

/// Left-aligned value column followed by right-aligned counts.
fn render_counts(counts: &[ValueCount]) -> Vec<String> {
    if counts.is_empty() {
        return vec![format!("  {}", NO_DATA)];
    }

    let width = counts
        .iter()
        .map(|c| c.value.chars().count())
        .max()
        .unwrap_or(0);
    counts
        .iter()
        .map(|c| {
            format!(
                "  {:<width$}  {:>9}",
                c.value,
                format_count(c.count as u64),
                width = width
            )
        })
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use bikeshare_data::aggregator::BirthYearStats;

    #[test]
    fn test_time_stats_names() {
        let stats = TimeStats {
            most_common_month: Some(Mode { value: 6, count: 12 }),
            most_common_weekday: Some(Mode { value: 2, count: 5 }),
            most_common_hour: Some(Mode { value: 17, count: 1 }),
        };
        let lines = render_time_stats(&stats);
        assert_eq!(lines[0], "The most common month was June (12 trips).");
        assert_eq!(lines[1], "The most common day of the week was Wednesday (5 trips).");
        assert_eq!(lines[2], "The most common hour was 17h (1 trip).");
    }

    #[test]
    fn test_time_stats_no_data() {
        let lines = render_time_stats(&TimeStats::default());
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|l| l.contains(NO_DATA)));
        assert_eq!(lines[0], format!("The most common month: {}.", NO_DATA));
    }

    #[test]
    fn test_station_stats() {
        let stats = StationStats {
            most_common_start: Some(Mode { value: "Streeter Dr & Grand Ave".into(), count: 3 }),
            most_common_end: None,
            most_common_trip: Some(Mode { value: "A to B".into(), count: 2 }),
        };
        let lines = render_station_stats(&stats);
        assert_eq!(
            lines[0],
            "The most commonly used start station is Streeter Dr & Grand Ave (3 trips)."
        );
        assert_eq!(lines[1], format!("The most common end station: {}.", NO_DATA));
        assert_eq!(lines[2], "The most common trip is from A to B (2 trips).");
    }

    #[test]
    fn test_duration_stats() {
        let stats = DurationStats {
            trip_count: 2,
            total_seconds: 3725.0,
            mean_seconds: Some(1862.5),
        };
        let lines = render_duration_stats(&stats);
        assert_eq!(
            lines[0],
            "The total time spent traveling was 3,725 seconds (1h 2m 5s) over 2 trips."
        );
        assert!(lines[1].starts_with("The mean travel time was 1,862.50 seconds"));
    }

    #[test]
    fn test_duration_stats_empty() {
        let lines = render_duration_stats(&DurationStats::default());
        assert!(lines.iter().all(|l| l.contains(NO_DATA)));
    }

    #[test]
    fn test_user_stats_without_demographics() {
        let stats = UserStats {
            user_types: vec![ValueCount { value: "Subscriber".into(), count: 4 }],
            genders: None,
            birth_years: BirthYearReport::NotInDataset,
        };
        let lines = render_user_stats(&stats);
        assert!(lines.contains(&"No gender data found.".to_string()));
        assert!(lines.contains(&"No birth year data found.".to_string()));
        assert!(!lines.iter().any(|l| l.contains("earliest birth year")));
    }

    #[test]
    fn test_user_stats_with_demographics() {
        let stats = UserStats {
            user_types: vec![
                ValueCount { value: "Subscriber".into(), count: 1200 },
                ValueCount { value: "Customer".into(), count: 30 },
            ],
            genders: Some(vec![ValueCount { value: "Male".into(), count: 900 }]),
            birth_years: BirthYearReport::Stats(BirthYearStats {
                earliest: 1899,
                latest: 2016,
                most_common: Mode { value: 1989, count: 44 },
            }),
        };
        let lines = render_user_stats(&stats);
        assert_eq!(lines[1], "  Subscriber      1,200");
        assert_eq!(lines[2], "  Customer           30");
        assert!(lines.contains(&"The earliest birth year of a rider was 1899.".to_string()));
        assert!(lines.contains(&"The most recent birth year of a rider was 2016.".to_string()));
        assert!(lines
            .contains(&"The most common birth year of a rider was 1989 (44 trips).".to_string()));
    }

    #[test]
    fn test_counts_align_with_non_ascii_values() {
        let lines = render_counts(&[
            ValueCount { value: "Männlich".into(), count: 7 },
            ValueCount { value: "Weiblich".into(), count: 3 },
        ]);
        assert_eq!(lines[0], "  Männlich          7");
        assert_eq!(lines[0].chars().count(), lines[1].chars().count());
    }
}
