use thiserror::Error;

/// A candidate date that does not name a real calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidDateError {
  #[error("could not parse date {input:?}, expected YYYY-MM-DD")]
  Unparseable { input: String },

  #[error("{year:04}-{month:02}-{day:02} is not a valid date")]
  OutOfRange { year: i32, month: u32, day: u32 },
}

/// A recurrence key that is not a valid "MM-DD" month and day.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyError {
  #[error("could not parse recurrence key {input:?}, expected MM-DD")]
  Malformed { input: String },

  #[error("month {month} is out of range")]
  Month { month: u32 },

  #[error("day {day} does not exist in month {month}")]
  Day { month: u32, day: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
  #[error("entry #{index} has an empty title")]
  EmptyTitle { index: usize },

  #[error("entry {title:?} has an empty message")]
  EmptyMessage { title: String },
}
