//! Training reports.
//!
//! Aggregates the workout log into totals and a per-weekday volume chart.

use chrono::{DateTime, Datelike, Duration, NaiveDate, Utc};
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::error::RepkitError;

use super::storage::HistoryStorage;

/// Report time period.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportPeriod {
    /// Today only
    Today,
    /// Last 7 days
    Week,
    /// Last 30 days
    Month,
    /// All time
    AllTime,
}

impl ReportPeriod {
    /// Get the start and end timestamps for this period.
    #[must_use]
    pub fn date_range(self) -> (DateTime<Utc>, DateTime<Utc>) {
        let now = Utc::now();
        let start = match self {
            Self::Today => now - Duration::days(1),
            Self::Week => now - Duration::days(7),
            Self::Month => now - Duration::days(30),
            Self::AllTime => NaiveDate::from_ymd_opt(2000, 1, 1)
                .and_then(|d| d.and_hms_opt(0, 0, 0))
                .map_or(now - Duration::days(365 * 50), |naive| {
                    DateTime::from_naive_utc_and_offset(naive, Utc)
                }),
        };
        (start, now)
    }

    /// Parse period from string.
    #[must_use]
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "today" | "t" | "d" => Self::Today,
            "month" | "m" | "30d" => Self::Month,
            "all" | "alltime" | "all-time" => Self::AllTime,
            _ => Self::Week,
        }
    }

    /// Get display name.
    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Week => "This Week",
            Self::Month => "This Month",
            Self::AllTime => "All Time",
        }
    }
}

/// Aggregated training data for a period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryReport {
    /// Report period name
    pub period: String,
    /// Number of completed workouts
    pub workouts: usize,
    /// Total minutes worked
    pub total_minutes: i64,
    /// Total calories burned
    pub total_calories: u64,
    /// Average workout length in minutes
    pub avg_minutes: f64,
    /// Worked minutes per weekday, Monday first
    pub minutes_by_weekday: Vec<(String, u64)>,
}

impl HistoryReport {
    /// Build a report for a period from stored history.
    ///
    /// # Errors
    ///
    /// Returns an error if the history query fails.
    pub fn generate(
        storage: &HistoryStorage,
        period: ReportPeriod,
    ) -> Result<Self, RepkitError> {
        let (start, end) = period.date_range();
        let entries = storage.range(start, end)?;

        let workouts = entries.len();
        let total_seconds: u64 = entries.iter().map(|e| u64::from(e.duration_seconds)).sum();
        let total_calories: u64 = entries.iter().map(|e| u64::from(e.calories)).sum();

        #[allow(clippy::cast_precision_loss)]
        let avg_minutes = if workouts == 0 {
            0.0
        } else {
            total_seconds as f64 / 60.0 / workouts as f64
        };

        let day_labels = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
        let mut by_weekday = [0u64; 7];
        for entry in &entries {
            let day = entry.completed_at.weekday().num_days_from_monday() as usize;
            by_weekday[day] += u64::from(entry.duration_seconds) / 60;
        }

        let minutes_by_weekday = day_labels
            .iter()
            .zip(by_weekday)
            .map(|(label, minutes)| ((*label).to_string(), minutes))
            .collect();

        #[allow(clippy::cast_possible_wrap)]
        let total_minutes = (total_seconds / 60) as i64;

        Ok(Self {
            period: period.display_name().to_string(),
            workouts,
            total_minutes,
            total_calories,
            avg_minutes,
            minutes_by_weekday,
        })
    }

    /// Render the report for the terminal.
    #[must_use]
    pub fn format(&self) -> String {
        let mut output = Vec::new();

        output.push(format!("Training Report - {}", self.period).bold().to_string());
        output.push("─".repeat(50));
        output.push(String::new());

        output.push(format!("Workouts:   {}", self.workouts));
        output.push(format!("Minutes:    {}", self.total_minutes));
        output.push(format!("Calories:   {}", self.total_calories));
        output.push(format!("Avg length: {:.1} min", self.avg_minutes));

        if self.workouts > 0 {
            output.push(String::new());
            output.push("Volume by day".dimmed().to_string());
            output.push(render_bar_chart(&self.minutes_by_weekday, 30));
        }

        output.join("\n")
    }
}

/// Render a horizontal bar chart of (label, value) rows.
fn render_bar_chart(data: &[(String, u64)], bar_width: usize) -> String {
    let max_value = data.iter().map(|(_, v)| *v).max().unwrap_or(1).max(1);
    let mut lines = Vec::new();

    for (label, value) in data {
        #[allow(
            clippy::cast_precision_loss,
            clippy::cast_possible_truncation,
            clippy::cast_sign_loss
        )]
        let filled = (*value as f64 / max_value as f64 * bar_width as f64) as usize;
        let bar = "█".repeat(filled);
        let padding = " ".repeat(bar_width - filled);
        lines.push(format!("{label} |{bar}{padding} {value}m"));
    }

    lines.join("\n")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::catalog::Intensity;
    use crate::history::HistoryEntry;
    use crate::storage::Database;
    use chrono::Duration;

    fn storage_with_entries(durations: &[(u32, i64)]) -> HistoryStorage {
        let storage = HistoryStorage::with_database(Database::open_in_memory().unwrap());
        for (seconds, days_ago) in durations {
            let mut entry = HistoryEntry {
                id: None,
                workout_id: "int-1".to_string(),
                title: "HIIT 20min".to_string(),
                intensity: Intensity::Intermediate,
                completed_at: Utc::now() - Duration::days(*days_ago),
                duration_seconds: *seconds,
                calories: crate::history::calories_burned(*seconds, Intensity::Intermediate),
            };
            storage.add(&mut entry).unwrap();
        }
        storage
    }

    #[test]
    fn test_report_period_parse() {
        assert_eq!(ReportPeriod::parse("today"), ReportPeriod::Today);
        assert_eq!(ReportPeriod::parse("month"), ReportPeriod::Month);
        assert_eq!(ReportPeriod::parse("all"), ReportPeriod::AllTime);
        assert_eq!(ReportPeriod::parse("anything"), ReportPeriod::Week);
    }

    #[test]
    fn test_empty_report() {
        let storage = storage_with_entries(&[]);
        let report = HistoryReport::generate(&storage, ReportPeriod::Week).unwrap();

        assert_eq!(report.workouts, 0);
        assert_eq!(report.total_minutes, 0);
        assert!((report.avg_minutes - 0.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_week_report_totals() {
        // Two workouts this week, one outside the window.
        let storage = storage_with_entries(&[(600, 1), (300, 2), (900, 20)]);
        let report = HistoryReport::generate(&storage, ReportPeriod::Week).unwrap();

        assert_eq!(report.workouts, 2);
        assert_eq!(report.total_minutes, 15);
        assert_eq!(report.total_calories, 90 + 45);
        assert!((report.avg_minutes - 7.5).abs() < 0.01);
    }

    #[test]
    fn test_all_time_includes_everything() {
        let storage = storage_with_entries(&[(600, 1), (900, 20)]);
        let report = HistoryReport::generate(&storage, ReportPeriod::AllTime).unwrap();
        assert_eq!(report.workouts, 2);
    }

    #[test]
    fn test_format_contains_chart() {
        let storage = storage_with_entries(&[(600, 1)]);
        let report = HistoryReport::generate(&storage, ReportPeriod::Week).unwrap();
        let text = report.format();

        assert!(text.contains("Workouts:   1"));
        assert!(text.contains("█"));
    }
}
