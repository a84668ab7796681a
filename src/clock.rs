//! Wall-clock time in the configured display zone.
//!
//! The time source is a trait so the rest of the crate never touches system
//! time directly; tests swap in a fixed instant and stay deterministic.

use crate::error::{Error, Result};
use crate::model::CalendarDate;
use chrono::{DateTime, FixedOffset, Utc};

/// Display format for the live clock, 24-hour with an AM/PM suffix.
pub const CLOCK_FORMAT: &str = "%H:%M:%S %p";

/// Source of the current instant.
pub trait Clock: Send + Sync {
    fn now_utc(&self) -> DateTime<Utc>;
}

/// The real thing: reads the operating system clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_utc(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock pinned to one named UTC offset.
///
/// The zone is a fixed offset, not a tz-database zone; DST transitions are
/// not modeled. The name rides along for display.
pub struct WallClock {
    zone_name: String,
    offset: FixedOffset,
    source: Box<dyn Clock>,
}

impl std::fmt::Debug for WallClock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // `source` is a trait object without Debug; list the other fields.
        f.debug_struct("WallClock")
            .field("zone_name", &self.zone_name)
            .field("offset", &self.offset)
            .finish_non_exhaustive()
    }
}

impl WallClock {
    /// Builds a clock for the given zone name and UTC offset in minutes
    /// (e.g. 330 for UTC+05:30), reading the system time.
    pub fn new(zone_name: &str, utc_offset_minutes: i32) -> Result<Self> {
        Self::with_source(zone_name, utc_offset_minutes, Box::new(SystemClock))
    }

    /// Same as [`WallClock::new`] but with an explicit time source.
    pub fn with_source(
        zone_name: &str,
        utc_offset_minutes: i32,
        source: Box<dyn Clock>,
    ) -> Result<Self> {
        let offset = utc_offset_minutes
            .checked_mul(60)
            .and_then(FixedOffset::east_opt)
            .ok_or_else(|| {
                Error::Initialization(format!(
                    "UTC offset of {utc_offset_minutes} minutes does not name a valid zone offset"
                ))
            })?;
        Ok(Self {
            zone_name: zone_name.to_string(),
            offset,
            source,
        })
    }

    pub fn zone_name(&self) -> &str {
        &self.zone_name
    }

    /// The current instant shifted into the display zone.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.source.now_utc().with_timezone(&self.offset)
    }

    /// The current time of day rendered with [`CLOCK_FORMAT`].
    pub fn time_string(&self) -> String {
        self.now().format(CLOCK_FORMAT).to_string()
    }

    /// Today's date in the display zone.
    ///
    /// This is the "current date" every age computation is anchored to, so
    /// it moves at the zone's midnight, not UTC's.
    pub fn today(&self) -> Result<CalendarDate> {
        CalendarDate::from_naive(self.now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    struct FixedClock {
        instant: DateTime<Utc>,
    }

    impl FixedClock {
        fn at(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> Box<Self> {
            let instant = Utc
                .with_ymd_and_hms(y, mo, d, h, mi, s)
                .single()
                .unwrap();
            Box::new(Self { instant })
        }
    }

    impl Clock for FixedClock {
        fn now_utc(&self) -> DateTime<Utc> {
            self.instant
        }
    }

    fn kolkata(source: Box<dyn Clock>) -> WallClock {
        WallClock::with_source("Asia/Kolkata", 330, source).unwrap()
    }

    #[test]
    fn shifts_into_the_display_zone() {
        let clock = kolkata(FixedClock::at(2024, 6, 10, 5, 12, 5));
        assert_eq!(clock.time_string(), "10:42:05 AM");
        assert_eq!(clock.today().unwrap().to_string(), "10-06-2024");
    }

    #[test]
    fn afternoon_hours_stay_on_the_24_hour_dial() {
        // 13:30 UTC is 19:00 in the display zone; the format keeps the
        // 24-hour figure and only suffixes the half of day.
        let clock = kolkata(FixedClock::at(2024, 6, 10, 13, 30, 0));
        assert_eq!(clock.time_string(), "19:00:00 PM");
    }

    #[test]
    fn local_midnight_flips_the_date_before_utc_does() {
        let clock = kolkata(FixedClock::at(2024, 6, 10, 18, 30, 0));
        assert_eq!(clock.time_string(), "00:00:00 AM");
        assert_eq!(clock.today().unwrap().to_string(), "11-06-2024");
    }

    #[test]
    fn western_offsets_shift_the_other_way() {
        let clock = WallClock::with_source(
            "America/New_York",
            -300,
            FixedClock::at(2024, 1, 1, 2, 0, 0),
        )
        .unwrap();
        assert_eq!(clock.today().unwrap().to_string(), "31-12-2023");
        assert_eq!(clock.time_string(), "21:00:00 PM");
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        let err = WallClock::new("Nowhere", 24 * 60).unwrap_err();
        assert!(matches!(err, Error::Initialization(_)));
        assert!(WallClock::new("Nowhere", -24 * 60).is_err());
        assert!(WallClock::new("UTC", 0).is_ok());
    }

    #[test]
    fn zone_name_is_preserved_verbatim() {
        let clock = kolkata(FixedClock::at(2024, 6, 10, 0, 0, 0));
        assert_eq!(clock.zone_name(), "Asia/Kolkata");
    }
}
