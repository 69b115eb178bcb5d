use chrono::{DateTime, Utc};

use crate::application::ports::time::Clock;

/// Wall-clock time source used everywhere outside of tests.
#[derive(Default, Clone)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}
