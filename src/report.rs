//! The report view-model: everything one render needs, nothing mutable.
//!
//! A report is rebuilt from scratch for every display and thrown away
//! afterwards; nothing carries over between refreshes.

use crate::clock::WallClock;
use crate::error::Result;
use crate::model::{compute_age, AgeBreakdown, CalendarDate};
use anyhow::Context;
use chrono::{DateTime, FixedOffset};
use serde::Serialize;

/// One snapshot of the three display panels plus the clock.
#[derive(Debug, Clone, Serialize)]
pub struct AgeReport {
    pub birth: CalendarDate,
    pub current: CalendarDate,
    pub age: AgeBreakdown,
    /// Formatted time of day, already in the display zone.
    pub clock: String,
    pub zone: String,
    pub generated_at: DateTime<FixedOffset>,
}

impl AgeReport {
    /// Computes a fresh report for `birth` against the clock's "today".
    pub fn build(birth: CalendarDate, clock: &WallClock) -> Result<Self> {
        let current = clock.today()?;
        let age = compute_age(birth, current)?;
        Ok(Self {
            birth,
            current,
            age,
            clock: clock.time_string(),
            zone: clock.zone_name().to_string(),
            generated_at: clock.now(),
        })
    }

    /// The three panels as an aligned day/month/year grid, closed by a
    /// spelled-out age line.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<13}{:>5}{:>7}{:>7}\n",
            "", "Date", "Month", "Year"
        ));
        out.push_str(&format!(
            "{:<13}{:>5}{:>7}{:>7}\n",
            "Birth date",
            self.birth.day(),
            self.birth.month(),
            self.birth.year()
        ));
        out.push_str(&format!(
            "{:<13}{:>5}{:>7}{:>7}\n",
            "Current date",
            self.current.day(),
            self.current.month(),
            self.current.year()
        ));
        out.push_str(&format!(
            "{:<13}{:>5}{:>7}{:>7}\n",
            "Age", self.age.days, self.age.months, self.age.years
        ));
        out.push('\n');
        out.push_str(&format!("{} old\n", self.age));
        out
    }

    /// The ticking line under the panels: formatted time plus zone name.
    pub fn clock_line(&self) -> String {
        format!("{} {}", self.clock, self.zone)
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("serializing report")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::Clock;
    use chrono::{TimeZone, Utc};

    struct FixedClock {
        instant: DateTime<Utc>,
    }

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.instant
        }
    }

    fn clock_at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> WallClock {
        let instant = Utc.with_ymd_and_hms(y, mo, d, h, mi, s).single().unwrap();
        WallClock::with_source("Asia/Kolkata", 330, Box::new(FixedClock { instant })).unwrap()
    }

    fn birth(day: u32, month: u32, year: i32) -> CalendarDate {
        CalendarDate::from_dmy(day, month, year).unwrap()
    }

    #[test]
    fn build_fills_every_panel_from_one_instant() {
        let clock = clock_at(2024, 6, 10, 5, 12, 5);
        let report = AgeReport::build(birth(15, 6, 1990), &clock).unwrap();

        assert_eq!(report.birth.to_string(), "15-06-1990");
        assert_eq!(report.current.to_string(), "10-06-2024");
        assert_eq!(
            (report.age.days, report.age.months, report.age.years),
            (26, 11, 33)
        );
        assert_eq!(report.clock, "10:42:05 AM");
        assert_eq!(report.zone, "Asia/Kolkata");
        assert_eq!(report.generated_at.to_rfc3339(), "2024-06-10T10:42:05+05:30");
    }

    #[test]
    fn build_rejects_a_future_birth() {
        let clock = clock_at(2024, 6, 10, 5, 12, 5);
        let err = AgeReport::build(birth(11, 6, 2024), &clock).unwrap_err();
        assert!(matches!(err, crate::error::Error::BirthAfterCurrent { .. }));
    }

    #[test]
    fn render_lays_out_the_three_panels() {
        let clock = clock_at(2024, 6, 10, 5, 12, 5);
        let report = AgeReport::build(birth(15, 6, 1990), &clock).unwrap();
        let rendered = report.render();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 6);
        let row = |i: usize| lines[i].split_whitespace().collect::<Vec<_>>();
        assert_eq!(row(0), ["Date", "Month", "Year"]);
        assert_eq!(row(1), ["Birth", "date", "15", "6", "1990"]);
        assert_eq!(row(2), ["Current", "date", "10", "6", "2024"]);
        assert_eq!(row(3), ["Age", "26", "11", "33"]);
        assert_eq!(lines[4], "");
        assert_eq!(lines[5], "26 days, 11 months, 33 years old");
    }

    #[test]
    fn clock_line_carries_time_and_zone() {
        let clock = clock_at(2024, 6, 10, 5, 12, 5);
        let report = AgeReport::build(birth(15, 6, 1990), &clock).unwrap();
        assert_eq!(report.clock_line(), "10:42:05 AM Asia/Kolkata");
    }

    #[test]
    fn json_mirrors_the_panels() {
        let clock = clock_at(2024, 6, 10, 5, 12, 5);
        let report = AgeReport::build(birth(15, 6, 1990), &clock).unwrap();
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value["birth"]["day"], 15);
        assert_eq!(value["birth"]["month"], 6);
        assert_eq!(value["birth"]["year"], 1990);
        assert_eq!(value["current"]["year"], 2024);
        assert_eq!(value["age"]["days"], 26);
        assert_eq!(value["age"]["months"], 11);
        assert_eq!(value["age"]["years"], 33);
        assert_eq!(value["clock"], "10:42:05 AM");
        assert_eq!(value["zone"], "Asia/Kolkata");
        let stamp = value["generated_at"].as_str().unwrap();
        assert!(stamp.contains("+05:30"), "{stamp}");
    }
}
