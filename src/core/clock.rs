use chrono::{Local, NaiveDate};

/// Clock abstracts access to the current date so defaults stay deterministic in tests.
pub trait Clock {
    fn today(&self) -> NaiveDate;

    /// Current month as an `MM-YYYY` token.
    fn month_token(&self) -> String {
        self.today().format("%m-%Y").to_string()
    }
}

/// Real clock backed by the local time zone.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to a single date.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
