use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::events::ClampDirection;

/// one expected payment week, `[start, end)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Week {
    /// 1-based
    pub index: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl Week {
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }
}

/// where a timestamp lands on the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub week_index: u32,
    /// set when the timestamp was outside the grid and got pulled in
    pub clamped: Option<ClampDirection>,
}

/// week boundaries from the sign date, computed on demand
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekGrid {
    sign_date: DateTime<Utc>,
    len: u32,
}

impl WeekGrid {
    pub fn build(sign_date: DateTime<Utc>, weeks: u32) -> Self {
        Self {
            sign_date,
            len: weeks,
        }
    }

    pub fn len(&self) -> u32 {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// week by 1-based index; `None` outside the grid or past the calendar
    pub fn week(&self, index: u32) -> Option<Week> {
        if index == 0 || index > self.len {
            return None;
        }
        let start = self
            .sign_date
            .checked_add_signed(Duration::weeks(i64::from(index - 1)))?;
        let end = start.checked_add_signed(Duration::weeks(1))?;
        Some(Week { index, start, end })
    }

    /// fresh iterator over every week, in order
    pub fn iter(&self) -> impl Iterator<Item = Week> + '_ {
        (1..=self.len).filter_map(move |index| self.week(index))
    }

    /// week holding `at`; out-of-range instants clamp to the first or last week
    pub fn locate(&self, at: DateTime<Utc>) -> Option<Placement> {
        if self.is_empty() {
            return None;
        }

        if at < self.sign_date {
            return Some(Placement {
                week_index: 1,
                clamped: Some(ClampDirection::BeforeFirstWeek),
            });
        }

        let offset = (at - self.sign_date).num_weeks();
        let index = u32::try_from(offset).unwrap_or(u32::MAX).saturating_add(1);
        if index > self.len {
            return Some(Placement {
                week_index: self.len,
                clamped: Some(ClampDirection::AfterLastWeek),
            });
        }

        Some(Placement {
            week_index: index,
            clamped: None,
        })
    }
}
