use chrono::{NaiveDate, NaiveTime};
use std::fmt;
use std::rc::Rc;
use yew::Reducible;

use super::{error::AppError, yacht::Yacht};

/// Start times offered for hourly rentals (08:00 through 17:00).
pub const START_TIMES: [&str; 10] = [
    "08:00", "09:00", "10:00", "11:00", "12:00", "13:00", "14:00", "15:00", "16:00", "17:00",
];

/// Hour counts offered for hourly rentals.
pub const HOUR_OPTIONS: std::ops::RangeInclusive<u32> = 1..=12;

/// Whether a booking is priced per day or per hour
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RentalMode {
    #[default]
    Daily,
    Hourly,
}

impl RentalMode {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Hourly => "hourly",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Hourly => "Hourly",
        }
    }

    /// Suffix shown under the unit price
    pub fn per_unit_label(&self) -> &'static str {
        match self {
            Self::Daily => "/ day",
            Self::Hourly => "/ hour",
        }
    }

    pub fn all() -> &'static [Self] {
        &[Self::Daily, Self::Hourly]
    }
}

impl std::str::FromStr for RentalMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "daily" => Ok(Self::Daily),
            "hourly" => Ok(Self::Hourly),
            _ => Err(AppError::ConfigError(format!("Invalid rental mode: {s}"))),
        }
    }
}

/// Selected charter dates. `end` stays empty until the second pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        Self {
            start: Some(start),
            end,
        }
    }

    /// Inclusive length in calendar days; 0 with no start, never less than 1 otherwise.
    pub fn day_count(&self) -> u32 {
        let Some(start) = self.start else {
            return 0;
        };
        let end = self.end.unwrap_or(start);
        let days = (end - start).num_days() + 1;
        u32::try_from(days.max(1)).unwrap_or(u32::MAX)
    }
}

/// Why a reservation request was refused
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ReservationError {
    #[error("Maximum capacity is {max} guests")]
    CapacityExceeded { max: u32 },

    #[error("Please select your dates")]
    MissingDateRange,

    #[error("Please select a duration")]
    MissingDuration,
}

/// Human-readable description of an accepted request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationSummary {
    pub title: String,
    pub duration: String,
    pub guests: String,
}

impl fmt::Display for ReservationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} • {} • {}", self.title, self.duration, self.guests)
    }
}

fn plural(count: u32, one: &str, many: &str) -> String {
    if count == 1 {
        format!("{count} {one}")
    } else {
        format!("{count} {many}")
    }
}

/// Ephemeral reservation form state. Lives for one visit of a detail page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationDraft {
    pub mode: RentalMode,
    pub dates: DateRange,
    pub start_time: NaiveTime,
    pub hours: u32,
    pub guests: u32,
}

impl Default for ReservationDraft {
    fn default() -> Self {
        Self {
            mode: RentalMode::Daily,
            dates: DateRange::default(),
            start_time: NaiveTime::from_hms_opt(10, 0, 0).unwrap_or(NaiveTime::MIN),
            hours: 2,
            guests: 4,
        }
    }
}

impl ReservationDraft {
    /// Bookable units in the current mode: days when daily, hours when hourly.
    pub fn duration(&self) -> u32 {
        match self.mode {
            RentalMode::Daily => self.dates.day_count(),
            RentalMode::Hourly => self.hours,
        }
    }

    /// Duration times the yacht's unit price, in the yacht's own currency.
    pub fn total_price(&self, yacht: &Yacht) -> u64 {
        u64::from(self.duration()) * u64::from(yacht.price)
    }

    pub fn duration_label(&self) -> String {
        match self.mode {
            RentalMode::Daily => plural(self.duration(), "day", "days"),
            RentalMode::Hourly => format!(
                "{} ({})",
                plural(self.hours, "hour", "hours"),
                self.start_time.format("%H:%M")
            ),
        }
    }

    /// Checks the draft against the yacht and describes the request if it is acceptable.
    pub fn validate(&self, yacht: &Yacht) -> Result<ReservationSummary, ReservationError> {
        if self.guests > yacht.capacity {
            return Err(ReservationError::CapacityExceeded {
                max: yacht.capacity,
            });
        }

        match self.mode {
            RentalMode::Daily if self.dates.start.is_none() => {
                return Err(ReservationError::MissingDateRange);
            }
            RentalMode::Hourly if self.hours < 1 => {
                return Err(ReservationError::MissingDuration);
            }
            _ => {}
        }

        Ok(ReservationSummary {
            title: yacht.title.clone(),
            duration: self.duration_label(),
            guests: plural(self.guests, "guest", "guests"),
        })
    }

    pub fn apply(mut self, action: DraftAction) -> Self {
        match action {
            DraftAction::SetMode(mode) => self.mode = mode,
            DraftAction::SetStart(start) => {
                self.dates.start = start;
                if start.is_none() {
                    self.dates.end = None;
                }
            }
            DraftAction::SetEnd(end) => self.dates.end = end,
            DraftAction::SetStartTime(time) => self.start_time = time,
            DraftAction::SetHours(hours) => self.hours = hours,
            DraftAction::SetGuests(guests) => self.guests = guests.max(1),
        }
        self
    }
}

/// User edits to a [`ReservationDraft`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftAction {
    SetMode(RentalMode),
    SetStart(Option<NaiveDate>),
    SetEnd(Option<NaiveDate>),
    SetStartTime(NaiveTime),
    SetHours(u32),
    SetGuests(u32),
}

impl Reducible for ReservationDraft {
    type Action = DraftAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        Rc::new((*self).clone().apply(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_count_open_range() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        assert_eq!(DateRange::default().day_count(), 0);
        assert_eq!(DateRange::new(start, None).day_count(), 1);
    }

    #[test]
    fn test_day_count_reversed_range_floors_at_one() {
        let start = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let end = NaiveDate::from_ymd_opt(2025, 6, 5).unwrap();
        assert_eq!(DateRange::new(start, Some(end)).day_count(), 1);
    }

    #[test]
    fn test_rental_mode_parsing() {
        assert_eq!("hourly".parse::<RentalMode>().unwrap(), RentalMode::Hourly);
        assert!("weekly".parse::<RentalMode>().is_err());
    }

    #[test]
    fn test_guests_floor_at_one() {
        let draft = ReservationDraft::default().apply(DraftAction::SetGuests(0));
        assert_eq!(draft.guests, 1);
    }

    #[test]
    fn test_clearing_start_clears_end() {
        let day = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        let draft = ReservationDraft::default()
            .apply(DraftAction::SetStart(Some(day)))
            .apply(DraftAction::SetEnd(Some(day)))
            .apply(DraftAction::SetStart(None));
        assert_eq!(draft.dates, DateRange::default());
    }

    #[test]
    fn test_hourly_duration_label() {
        let draft = ReservationDraft::default()
            .apply(DraftAction::SetMode(RentalMode::Hourly))
            .apply(DraftAction::SetHours(1));
        assert_eq!(draft.duration_label(), "1 hour (10:00)");
    }
}
