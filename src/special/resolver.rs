use chrono::{DateTime, NaiveDate, TimeZone};

use super::entry::CalendarEntry;
use super::error::InvalidDateError;
use super::recurrence::RecurrenceKey;

/// Anything that can name a single calendar day.
pub trait Candidate {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError>;
}

impl Candidate for NaiveDate {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    Ok(*self)
  }
}

impl<Tz: TimeZone> Candidate for DateTime<Tz> {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    Ok(self.date_naive())
  }
}

impl Candidate for (i32, u32, u32) {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    let (year, month, day) = *self;

    NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDateError::OutOfRange { year, month, day })
  }
}

impl Candidate for str {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    parse_date(self)
  }
}

impl Candidate for &str {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    parse_date(self)
  }
}

impl Candidate for String {
  fn to_date(&self) -> Result<NaiveDate, InvalidDateError> {
    parse_date(self)
  }
}

/// Parses a `YYYY-MM-DD` date: a four digit year, two digit month and day,
/// nothing around them.
///
/// Input with the right shape but impossible numbers ("2024-13-40") is
/// reported as out of range rather than unparseable.
pub fn parse_date(input: &str) -> Result<NaiveDate, InvalidDateError> {
  let unparseable = || InvalidDateError::Unparseable { input: input.to_owned() };
  let digits = |part: &str, len: usize| part.len() == len && part.bytes().all(|b| b.is_ascii_digit());

  let mut parts = input.split('-');
  let (Some(year), Some(month), Some(day), None) = (parts.next(), parts.next(), parts.next(), parts.next()) else {
    return Err(unparseable());
  };

  if !digits(year, 4) || !digits(month, 2) || !digits(day, 2) {
    return Err(unparseable());
  }

  let year = year.parse::<i32>().map_err(|_| unparseable())?;
  let month = month.parse::<u32>().map_err(|_| unparseable())?;
  let day = day.parse::<u32>().map_err(|_| unparseable())?;

  NaiveDate::from_ymd_opt(year, month, day).ok_or(InvalidDateError::OutOfRange { year, month, day })
}

/// Every entry of `table` that recurs on the candidate's month and day.
///
/// The year of the candidate is ignored and the entries keep their table
/// order. An empty result is not an error.
pub fn resolve_events<'a, C>(candidate: &C, table: &'a [CalendarEntry]) -> Result<Vec<&'a CalendarEntry>, InvalidDateError>
where
  C: Candidate + ?Sized,
{
  let key = RecurrenceKey::of(&candidate.to_date()?);

  Ok(table.iter().filter(|entry| entry.key == key).collect())
}
