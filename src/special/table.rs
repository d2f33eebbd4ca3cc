use std::collections::BTreeMap;

use super::category::Category;
use super::entry::{friend_birthday, teacher_birthday, CalendarEntry};
use super::error::{EntryError, InvalidDateError, KeyError};
use super::recurrence::RecurrenceKey;
use super::resolver::Candidate;

/// The ordered entry list together with an index from recurrence key to
/// positions in that list. Never changes once built.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EntryTable {
  entries: Vec<CalendarEntry>,
  by_key: BTreeMap<RecurrenceKey, Vec<usize>>,
}

impl EntryTable {
  pub fn new(entries: Vec<CalendarEntry>) -> Result<Self, EntryError> {
    let mut by_key: BTreeMap<RecurrenceKey, Vec<usize>> = BTreeMap::new();

    for (idx, entry) in entries.iter().enumerate() {
      entry.validate(idx)?;
      by_key.entry(entry.key).or_default().push(idx);
    }

    Ok(Self { entries, by_key })
  }

  pub fn entries(&self) -> &[CalendarEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  /// Same result as [`super::resolve_events`] over [`Self::entries`], but
  /// looked up through the key index.
  pub fn resolve<C>(&self, candidate: &C) -> Result<Vec<&CalendarEntry>, InvalidDateError>
  where
    C: Candidate + ?Sized,
  {
    let key = RecurrenceKey::of(&candidate.to_date()?);

    Ok(
      self
        .by_key
        .get(&key)
        .map(|indices| indices.iter().map(|idx| &self.entries[*idx]).collect())
        .unwrap_or_default(),
    )
  }

  /// All entries ordered by month and day, keeping table order within a day
  pub fn by_date(&self) -> impl Iterator<Item = &CalendarEntry> {
    self
      .by_key
      .values()
      .flat_map(move |indices| indices.iter().map(move |idx| &self.entries[*idx]))
  }
}

/// The birthdays, holidays and homages the site ships with.
///
/// The movable feasts (Onam, Vishu, Deepavali, Eid, Easter) are pinned to
/// their 2024 dates.
pub fn builtin_entries() -> Result<Vec<CalendarEntry>, KeyError> {
  Ok(vec![
    friend_birthday("Ephrim", "11-07", "Wishing you a fantastic day filled with joy and laughter!")?,
    friend_birthday("William", "10-31", "Hope you have a spooky and spectacular day!")?,
    friend_birthday("Steve", "09-05", "Happy birthday to a great friend! Have a fantastic day.")?,
    friend_birthday("Snitha Ann Shinu", "09-11", "Happy birthday to my dear friend! Wishing you all the best.")?,

    CalendarEntry::new(
      "Happy Birthday, Papa!",
      "11-22",
      "To the person who's behind everything I do—from the craziness to everything else. Thank you for your endless support!",
      Category::PersonalBirthday,
    )?
    .icon("heart")
    .particle("popper")
    .birthday(),
    CalendarEntry::new(
      "Happy Birthday, Akshay!",
      "05-09",
      "Happy Birthday to me! Time to celebrate another trip around the sun and all the adventures to come.",
      Category::PersonalBirthday,
    )?
    .icon("rocket")
    .particle("popper")
    .birthday(),

    teacher_birthday("Ms. Asha Rose Mathew", "12-10", "Physics", "To my class teacher and an extreme supporter of my work.")?,
    teacher_birthday("Mrs. Neethu", "01-28", "Physics", "Wishing a very happy birthday to a wonderful teacher!")?,
    teacher_birthday("Mrs. Bency Jacob", "02-12", "Physics", "To my dearest teacher, thank you for everything.")?,
    teacher_birthday("Fr. Joseph Noble OIC", "02-11", "former principal", "Thank you for your guidance and support.")?,

    CalendarEntry::new(
      "In Loving Memory of Shiny Abraham",
      "03-01",
      "Remembering my mother today and always. A tribute to her enduring love, light, and the lessons she taught me.",
      Category::Homage,
    )?
    .icon("heart")
    .particle("revealing")
    .homage(),

    holiday("Happy New Year!", "01-01", "Wishing you a bright and prosperous New Year! May it be filled with new adventures and good fortune.", Category::NewYear, "sparkles", "popper")?,
    holiday("Happy Halloween!", "10-31", "Wishing you a spooky and fun Halloween!", Category::Halloween, "ghost", "ghost")?,
    holiday("Merry Christmas!", "12-25", "Wishing you and your loved ones a Merry Christmas filled with peace, joy, and happiness.", Category::Christmas, "sparkles", "revealing")?,
    holiday("Happy Republic Day, India!", "01-26", "Celebrating the spirit of unity and democracy. Jai Hind!", Category::GenericHoliday, "flag", "popper")?,
    holiday("Happy Independence Day, India!", "08-15", "Remembering our past and celebrating a future of progress. Jai Hind!", Category::GenericHoliday, "flag", "popper")?,
    holiday("Happy Onam!", "09-15", "May the colors and joy of Onam fill your home with happiness and prosperity.", Category::GenericHoliday, "sun", "popper")?,
    holiday("Happy Vishu!", "04-14", "Wishing you a golden year ahead. Happy Vishu!", Category::GenericHoliday, "sun", "revealing")?,
    holiday("Happy Deepavali!", "11-01", "May the festival of lights bring brightness, joy, and prosperity to your life.", Category::GenericHoliday, "sparkles", "anomaly")?,
    holiday("Eid Mubarak!", "04-09", "May this special day bring peace, happiness, and prosperity to everyone.", Category::GenericHoliday, "moon", "revealing")?,
    holiday("Happy Easter!", "03-31", "Wishing you a joyful Easter filled with hope, love, and new beginnings.", Category::GenericHoliday, "sparkles", "popper")?,

    holiday(
      "Happy Birthday, Albert Einstein!",
      "03-14",
      "Celebrating the mind that reshaped our understanding of the universe. \"Imagination is more important than knowledge.\"",
      Category::ScienceFigure,
      "atom",
      "anomaly",
    )?,
    holiday(
      "Happy Birthday, Richard Feynman!",
      "05-11",
      "Honoring the curious spirit of a brilliant physicist and teacher. \"The first principle is that you must not fool yourself.\"",
      Category::ScienceFigure,
      "rocket",
      "anomaly",
    )?,
  ])
}

fn holiday(title: &str, key: &str, message: &str, category: Category, icon: &str, particle: &str) -> Result<CalendarEntry, KeyError> {
  Ok(CalendarEntry::new(title, key, message, category)?.icon(icon).particle(particle))
}
