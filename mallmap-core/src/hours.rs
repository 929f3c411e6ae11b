//! Daily opening hours and open-now status.
//!
//! Hours are stored as local wall-clock times. A closing time earlier than
//! the opening time means the window runs past midnight. Both ends of the
//! window are inclusive.

use chrono::{NaiveTime, TimeDelta};
use thiserror::Error;

/// Minutes before closing at which an open entity reports
/// [`OpenStatus::ClosingSoon`].
pub const CLOSING_SOON_MINUTES: i64 = 30;

const TIME_FORMAT: &str = "%H:%M";

/// Errors returned while parsing opening hours.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoursError {
    /// A time was not in `HH:MM` form.
    #[error("invalid time '{value}', expected HH:MM")]
    InvalidTime {
        /// Raw value supplied by the caller.
        value: String,
    },
}

/// Open/closed state at a given time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenStatus {
    /// Open with more than [`CLOSING_SOON_MINUTES`] remaining.
    Open,
    /// Open but closing within [`CLOSING_SOON_MINUTES`].
    ClosingSoon,
    /// Outside the opening window.
    Closed,
    /// No hours are known.
    Unknown,
}

impl OpenStatus {
    /// Convert the status into a candidate's `open_now` flag.
    ///
    /// [`OpenStatus::Unknown`] maps to `None`.
    #[must_use]
    pub const fn open_now(self) -> Option<bool> {
        match self {
            Self::Open | Self::ClosingSoon => Some(true),
            Self::Closed => Some(false),
            Self::Unknown => None,
        }
    }
}

/// A daily opening window.
///
/// # Examples
/// ```
/// use chrono::NaiveTime;
/// use mallmap_core::{OpenStatus, OpeningHours};
///
/// let hours = OpeningHours::parse("10:00", "22:00")?;
/// let evening = NaiveTime::from_hms_opt(21, 45, 0).unwrap();
/// assert_eq!(hours.status_at(evening), OpenStatus::ClosingSoon);
/// # Ok::<(), mallmap_core::HoursError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    open: NaiveTime,
    close: NaiveTime,
}

impl OpeningHours {
    /// Construct hours from parsed times.
    #[must_use]
    pub const fn new(open: NaiveTime, close: NaiveTime) -> Self {
        Self { open, close }
    }

    /// Parse hours from `HH:MM` strings.
    ///
    /// # Errors
    /// Returns [`HoursError::InvalidTime`] when either value is malformed.
    pub fn parse(open: &str, close: &str) -> Result<Self, HoursError> {
        Ok(Self::new(parse_time(open)?, parse_time(close)?))
    }

    /// Parse hours when both ends are present.
    ///
    /// Returns `Ok(None)` when either end is missing or blank.
    ///
    /// # Errors
    /// Returns [`HoursError::InvalidTime`] when a present value is malformed.
    pub fn from_optional(
        open: Option<&str>,
        close: Option<&str>,
    ) -> Result<Option<Self>, HoursError> {
        match (open.map(str::trim), close.map(str::trim)) {
            (Some(from), Some(until)) if !from.is_empty() && !until.is_empty() => {
                Self::parse(from, until).map(Some)
            }
            _ => Ok(None),
        }
    }

    /// Opening time.
    #[must_use]
    pub const fn open(&self) -> NaiveTime {
        self.open
    }

    /// Closing time.
    #[must_use]
    pub const fn close(&self) -> NaiveTime {
        self.close
    }

    /// Report whether the window runs past midnight.
    #[must_use]
    pub fn is_overnight(&self) -> bool {
        self.close < self.open
    }

    /// Status at wall-clock `time`.
    #[must_use]
    pub fn status_at(&self, time: NaiveTime) -> OpenStatus {
        let open = if self.is_overnight() {
            time >= self.open || time <= self.close
        } else {
            time >= self.open && time <= self.close
        };
        if !open {
            return OpenStatus::Closed;
        }
        if self.time_until_close(time) <= TimeDelta::minutes(CLOSING_SOON_MINUTES) {
            OpenStatus::ClosingSoon
        } else {
            OpenStatus::Open
        }
    }

    /// Report whether the entity is open at `time`.
    #[must_use]
    pub fn is_open_at(&self, time: NaiveTime) -> bool {
        self.status_at(time).open_now() == Some(true)
    }

    fn time_until_close(&self, time: NaiveTime) -> TimeDelta {
        let until = self.close.signed_duration_since(time);
        if until < TimeDelta::zero() {
            until + TimeDelta::days(1)
        } else {
            until
        }
    }
}

/// Status for optional hours, reporting [`OpenStatus::Unknown`] when absent.
#[must_use]
pub fn status_for(hours: Option<&OpeningHours>, time: NaiveTime) -> OpenStatus {
    hours.map_or(OpenStatus::Unknown, |known| known.status_at(time))
}

fn parse_time(value: &str) -> Result<NaiveTime, HoursError> {
    NaiveTime::parse_from_str(value.trim(), TIME_FORMAT).map_err(|_| HoursError::InvalidTime {
        value: value.to_owned(),
    })
}
