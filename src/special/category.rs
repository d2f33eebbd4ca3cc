use std::fmt::{Display, Formatter};

/// What kind of day an entry celebrates. Only presentation depends on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Category {
  FriendBirthday,
  TeacherBirthday,
  PersonalBirthday,
  Homage,
  Halloween,
  Christmas,
  NewYear,
  #[serde(rename = "holiday")]
  GenericHoliday,
  #[serde(rename = "science")]
  ScienceFigure,
}

impl Category {
  pub const ALL: [Self; 9] = [
    Self::FriendBirthday,
    Self::TeacherBirthday,
    Self::PersonalBirthday,
    Self::Homage,
    Self::Halloween,
    Self::Christmas,
    Self::NewYear,
    Self::GenericHoliday,
    Self::ScienceFigure,
  ];

  pub const fn as_str(self) -> &'static str {
    match self {
      Self::FriendBirthday => "friendBirthday",
      Self::TeacherBirthday => "teacherBirthday",
      Self::PersonalBirthday => "personalBirthday",
      Self::Homage => "homage",
      Self::Halloween => "halloween",
      Self::Christmas => "christmas",
      Self::NewYear => "newYear",
      Self::GenericHoliday => "holiday",
      Self::ScienceFigure => "science",
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
    f.pad(self.as_str())
  }
}
