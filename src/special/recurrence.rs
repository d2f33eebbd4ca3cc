use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::Datelike;

use super::error::KeyError;

/// Month and day an entry recurs on every year.
///
/// February always allows the 29th, leap years are not checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Deserialize, serde::Serialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecurrenceKey {
  month: u32,
  day: u32,
}

impl RecurrenceKey {
  pub fn new(month: u32, day: u32) -> Result<Self, KeyError> {
    if !(1..=12).contains(&month) {
      return Err(KeyError::Month { month });
    }

    if day < 1 || day > max_day(month) {
      return Err(KeyError::Day { month, day });
    }

    Ok(Self { month, day })
  }

  /// The key a date falls on, ignoring its year
  pub fn of(date: &impl Datelike) -> Self {
    Self {
      month: date.month(),
      day: date.day(),
    }
  }

  pub const fn month(&self) -> u32 {
    self.month
  }

  pub const fn day(&self) -> u32 {
    self.day
  }

  pub fn matches(&self, date: &impl Datelike) -> bool {
    self.month == date.month() && self.day == date.day()
  }
}

const fn max_day(month: u32) -> u32 {
  match month {
    2 => 29,
    4 | 6 | 9 | 11 => 30,
    _ => 31,
  }
}

impl FromStr for RecurrenceKey {
  type Err = KeyError;

  fn from_str(input: &str) -> Result<Self, Self::Err> {
    let malformed = || KeyError::Malformed { input: input.to_owned() };

    let (month, day) = input.split_once('-').ok_or_else(malformed)?;

    let two_digits = |part: &str| part.len() == 2 && part.bytes().all(|b| b.is_ascii_digit());

    if !two_digits(month) || !two_digits(day) {
      return Err(malformed());
    }

    let month = month.parse::<u32>().map_err(|_| malformed())?;
    let day = day.parse::<u32>().map_err(|_| malformed())?;

    Self::new(month, day)
  }
}

impl TryFrom<String> for RecurrenceKey {
  type Error = KeyError;

  fn try_from(value: String) -> Result<Self, Self::Error> {
    value.parse()
  }
}

impl From<RecurrenceKey> for String {
  fn from(key: RecurrenceKey) -> Self {
    key.to_string()
  }
}

impl Display for RecurrenceKey {
  fn fmt(&self, formatter: &mut Formatter) -> std::fmt::Result {
    write!(formatter, "{:02}-{:02}", self.month, self.day)
  }
}
