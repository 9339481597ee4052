//! Local calendar clock

use chrono::{Local, NaiveDate};

use crate::domain::ports::Clock;

/// Reports today's date in the host's local time zone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
