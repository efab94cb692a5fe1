//! Clocks.
//!
//! "Today" is always handed to the calculator explicitly; the CLI and the
//! response cache get it from a [`Clock`] so tests can pin time.

use chrono::{DateTime, Duration, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::cell::Cell;

/// Which timezone decides where one day ends and the next begins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum DayBoundary {
    /// UTC midnight, the convention GitHub's calendar uses.
    #[default]
    Utc,
    /// The machine's local midnight.
    Local,
}

impl DayBoundary {
    /// Calendar date of `instant` under this convention.
    #[must_use]
    pub fn date_of(self, instant: DateTime<Utc>) -> NaiveDate {
        match self {
            Self::Utc => instant.date_naive(),
            Self::Local => instant.with_timezone(&Local).date_naive(),
        }
    }

    /// First instant of `date` under this convention.
    ///
    /// A local midnight skipped by a DST jump resolves to the first valid
    /// local time after it.
    #[must_use]
    pub fn start_of(self, date: NaiveDate) -> DateTime<Utc> {
        let midnight = date.and_time(NaiveTime::MIN);
        match self {
            Self::Utc => midnight.and_utc(),
            Self::Local => (0..=2)
                .find_map(|h| {
                    Local
                        .from_local_datetime(&(midnight + Duration::hours(h)))
                        .earliest()
                })
                .map_or_else(|| midnight.and_utc(), |t| t.with_timezone(&Utc)),
        }
    }
}

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;

    /// Today's date under the clock's day boundary.
    fn today(&self) -> NaiveDate {
        self.boundary().date_of(self.now())
    }

    fn boundary(&self) -> DayBoundary;
}

/// Wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    pub boundary: DayBoundary,
}

impl SystemClock {
    #[must_use]
    pub const fn new(boundary: DayBoundary) -> Self {
        Self { boundary }
    }
}

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    fn boundary(&self) -> DayBoundary {
        self.boundary
    }
}

/// Manually driven clock for tests and `--today` overrides.
#[derive(Debug, Clone)]
pub struct FixedClock {
    instant: Cell<DateTime<Utc>>,
    boundary: DayBoundary,
}

impl FixedClock {
    #[must_use]
    pub const fn new(instant: DateTime<Utc>) -> Self {
        Self {
            instant: Cell::new(instant),
            boundary: DayBoundary::Utc,
        }
    }

    /// Noon UTC on `date`.
    #[must_use]
    pub fn at_date(date: NaiveDate) -> Self {
        Self::at_date_in(date, DayBoundary::Utc)
    }

    /// Noon on `date` under `boundary`, so `today()` is `date` in that zone.
    #[must_use]
    pub fn at_date_in(date: NaiveDate, boundary: DayBoundary) -> Self {
        Self {
            instant: Cell::new(boundary.start_of(date) + Duration::hours(12)),
            boundary,
        }
    }

    pub fn set(&self, instant: DateTime<Utc>) {
        self.instant.set(instant);
    }

    pub fn advance(&self, by: Duration) {
        self.instant.set(self.instant.get() + by);
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.instant.get()
    }

    fn boundary(&self) -> DayBoundary {
        self.boundary
    }
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }

    fn today(&self) -> NaiveDate {
        (**self).today()
    }

    fn boundary(&self) -> DayBoundary {
        (**self).boundary()
    }
}
