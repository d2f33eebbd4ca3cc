use super::category::Category;
use super::error::{EntryError, KeyError};
use super::recurrence::RecurrenceKey;

/// A birthday, holiday or homage that comes back every year.
///
/// `icon` and `particle` are opaque tags for whoever draws the card, they are
/// carried along untouched.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEntry {
  pub title: String,
  #[serde(rename = "date")]
  pub key: RecurrenceKey,
  pub message: String,
  #[serde(rename = "eventType")]
  pub category: Category,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_birthday: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub is_homage: Option<bool>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub icon: Option<String>,
  #[serde(default, rename = "particleType", skip_serializing_if = "Option::is_none")]
  pub particle: Option<String>,
}

impl CalendarEntry {
  pub fn new(title: impl Into<String>, key: &str, message: impl Into<String>, category: Category) -> Result<Self, KeyError> {
    Ok(Self {
      title: title.into(),
      key: key.parse()?,
      message: message.into(),
      category,
      is_birthday: None,
      is_homage: None,
      icon: None,
      particle: None,
    })
  }

  #[must_use]
  pub fn icon(mut self, icon: &str) -> Self {
    self.icon = Some(icon.to_owned());
    self
  }

  #[must_use]
  pub fn particle(mut self, particle: &str) -> Self {
    self.particle = Some(particle.to_owned());
    self
  }

  #[must_use]
  pub fn birthday(mut self) -> Self {
    self.is_birthday = Some(true);
    self
  }

  #[must_use]
  pub fn homage(mut self) -> Self {
    self.is_homage = Some(true);
    self
  }

  pub fn is_birthday(&self) -> bool {
    self.is_birthday.unwrap_or_default()
  }

  pub fn is_homage(&self) -> bool {
    self.is_homage.unwrap_or_default()
  }

  /// Checks the display fields, `index` is the entry's position in its table
  pub fn validate(&self, index: usize) -> Result<(), EntryError> {
    if self.title.trim().is_empty() {
      return Err(EntryError::EmptyTitle { index });
    }

    if self.message.trim().is_empty() {
      return Err(EntryError::EmptyMessage { title: self.title.clone() });
    }

    Ok(())
  }
}

pub fn friend_birthday(name: &str, key: &str, message: &str) -> Result<CalendarEntry, KeyError> {
  Ok(
    CalendarEntry::new(format!("Happy Birthday, {name}!"), key, message, Category::FriendBirthday)?
      .icon("cake")
      .particle("popper")
      .birthday(),
  )
}

/// `subject` is what the teacher taught, it ends up lowercased in the message
pub fn teacher_birthday(name: &str, key: &str, subject: &str, message: &str) -> Result<CalendarEntry, KeyError> {
  let message = format!(
    "{message} Wishing you the happiest of birthdays from your {} student!",
    subject.to_lowercase(),
  );

  Ok(
    CalendarEntry::new(format!("Happy Birthday, {name}!"), key, message, Category::TeacherBirthday)?
      .icon("graduation-cap")
      .particle("popper")
      .birthday(),
  )
}
