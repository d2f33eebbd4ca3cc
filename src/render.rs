use chrono::{Datelike, NaiveDate};

use crate::logger::LogExt;
use crate::special::{resolve_events, CalendarEntry, Candidate, Category, EntryTable};

pub const DEFAULT_TITLE: &str = "Have a Wonderful Day!";
pub const DEFAULT_ICON: &str = "smile";

/// Which card a category is drawn with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTemplate {
  Birthday,
  PersonalEvent,
  Homage,
  Holiday,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
  Blue,
  Pink,
  Grey,
  Orange,
  Red,
  Yellow,
  Green,
}

impl CardTemplate {
  pub const fn for_category(category: Category) -> Self {
    match category {
      Category::FriendBirthday | Category::TeacherBirthday => Self::Birthday,
      Category::PersonalBirthday => Self::PersonalEvent,
      Category::Homage => Self::Homage,
      Category::Halloween
      | Category::Christmas
      | Category::NewYear
      | Category::GenericHoliday
      | Category::ScienceFigure => Self::Holiday,
    }
  }
}

impl Accent {
  pub const fn for_category(category: Category) -> Self {
    match category {
      Category::FriendBirthday | Category::TeacherBirthday => Self::Blue,
      Category::PersonalBirthday => Self::Pink,
      Category::Homage => Self::Grey,
      Category::Halloween => Self::Orange,
      Category::Christmas => Self::Red,
      Category::NewYear => Self::Yellow,
      Category::GenericHoliday | Category::ScienceFigure => Self::Green,
    }
  }

  pub const fn ansi(self) -> &'static str {
    match self {
      Self::Blue => "\x1b[34m",
      Self::Pink => "\x1b[95m",
      Self::Grey => "\x1b[90m",
      Self::Orange => "\x1b[38;5;208m",
      Self::Red => "\x1b[31m",
      Self::Yellow => "\x1b[33m",
      Self::Green => "\x1b[32m",
    }
  }
}

/// What the page shows for a day
#[derive(Debug, PartialEq, Eq)]
pub enum PageView<'a> {
  Events(Vec<&'a CalendarEntry>),
  Default(String),
}

impl<'a> PageView<'a> {
  /// `overridden` is set when the date was picked by hand instead of read
  /// from the clock, it only changes the wording of the default message.
  pub fn new(date: NaiveDate, overridden: bool, entries: Vec<&'a CalendarEntry>) -> Self {
    if entries.is_empty() {
      Self::Default(default_message(date, overridden))
    } else {
      Self::Events(entries)
    }
  }
}

/// Builds the page for a hand-picked day, or for `today` when nothing was
/// picked. A picked day that is not a real date falls back to the default
/// card for today.
pub fn page_for<'a>(table: &'a EntryTable, picked: Option<&str>, today: NaiveDate) -> PageView<'a> {
  let Some(input) = picked else {
    log::debug!("Checking today, {today}");
    return PageView::new(today, false, table.resolve(&today).unwrap_or_default());
  };

  let resolved = input
    .to_date()
    .and_then(|date| Ok((date, resolve_events(&date, table.entries())?)));

  match resolved.log_warn("Could not read the picked date") {
    Ok((date, entries)) => {
      log::debug!("Checking picked date {date}");
      PageView::new(date, true, entries)
    }
    Err(_) => PageView::Default(default_message(today, false)),
  }
}

/// One `--list` row: `MM-DD  category  title`
pub fn list_line(entry: &CalendarEntry) -> String {
  format!("{}  {:<16} {}", entry.key, entry.category, entry.title)
}

/// Colours only go to a terminal, and only when neither the config nor the
/// command line switched them off
pub const fn use_color(configured: bool, disabled: bool, is_terminal: bool) -> bool {
  configured && !disabled && is_terminal
}

pub fn default_message(date: NaiveDate, overridden: bool) -> String {
  if overridden {
    format!(
      "There are no special events scheduled for {} {}.",
      date.format("%B"),
      ordinal(date.day()),
    )
  } else {
    "There are no special events scheduled for today, but I hope you have a great one anyway!".to_owned()
  }
}

/// 1 -> "1st", 12 -> "12th", 22 -> "22nd"
pub fn ordinal(n: u32) -> String {
  let suffix = match (n % 10, n % 100) {
    (_, 11..=13) => "th",
    (1, _) => "st",
    (2, _) => "nd",
    (3, _) => "rd",
    _ => "th",
  };

  format!("{n}{suffix}")
}

pub struct Renderer<'a> {
  pub signature: Option<&'a str>,
  pub color: bool,
}

impl Renderer<'_> {
  pub fn page(&self, view: &PageView) -> String {
    match view {
      PageView::Events(entries) => entries
        .iter()
        .map(|entry| self.card(entry))
        .collect::<Vec<_>>()
        .join("\n"),
      PageView::Default(message) => self.frame(None, DEFAULT_ICON, DEFAULT_TITLE, message),
    }
  }

  pub fn card(&self, entry: &CalendarEntry) -> String {
    let accent = Accent::for_category(entry.category);
    let icon = entry.icon.as_deref().unwrap_or(DEFAULT_ICON);

    let title = match CardTemplate::for_category(entry.category) {
      CardTemplate::Birthday | CardTemplate::Holiday => entry.title.clone(),
      CardTemplate::PersonalEvent => format!("♥ {} ♥", entry.title),
      CardTemplate::Homage => format!("~ {} ~", entry.title),
    };

    self.frame(Some(accent), icon, &title, &entry.message)
  }

  fn frame(&self, accent: Option<Accent>, icon: &str, title: &str, message: &str) -> String {
    let mut out = String::new();

    match accent.filter(|_| self.color) {
      Some(accent) => out.push_str(&format!("{}[{icon}] {title}\x1b[0m\n", accent.ansi())),
      None => out.push_str(&format!("[{icon}] {title}\n")),
    }

    out.push_str(message);
    out.push('\n');

    if let Some(signature) = self.signature {
      out.push_str(signature);
      out.push('\n');
    }

    out
  }
}

#[cfg(test)]
mod tests {
  use pretty_assertions::assert_eq;

  use super::*;

  #[test]
  fn every_category_has_a_template() {
    let templates: Vec<CardTemplate> = Category::ALL.into_iter().map(CardTemplate::for_category).collect();

    assert_eq!(
      templates,
      [
        CardTemplate::Birthday,
        CardTemplate::Birthday,
        CardTemplate::PersonalEvent,
        CardTemplate::Homage,
        CardTemplate::Holiday,
        CardTemplate::Holiday,
        CardTemplate::Holiday,
        CardTemplate::Holiday,
        CardTemplate::Holiday,
      ],
    );
  }

  #[test]
  fn holidays_get_their_own_accent() {
    assert_eq!(Accent::for_category(Category::Halloween), Accent::Orange);
    assert_eq!(Accent::for_category(Category::Christmas), Accent::Red);
    assert_eq!(Accent::for_category(Category::NewYear), Accent::Yellow);
    assert_eq!(Accent::for_category(Category::GenericHoliday), Accent::Green);
    assert_eq!(Accent::for_category(Category::ScienceFigure), Accent::Green);
  }

  #[test]
  fn ordinals() {
    let rendered: Vec<String> = [1, 2, 3, 4, 11, 12, 13, 21, 22, 23, 30, 31].into_iter().map(ordinal).collect();

    assert_eq!(
      rendered,
      ["1st", "2nd", "3rd", "4th", "11th", "12th", "13th", "21st", "22nd", "23rd", "30th", "31st"],
    );
  }

  #[test]
  fn default_message_names_a_picked_date() {
    let date = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();

    assert_eq!(default_message(date, true), "There are no special events scheduled for March 2nd.");
    assert_eq!(
      default_message(date, false),
      "There are no special events scheduled for today, but I hope you have a great one anyway!",
    );
  }

  #[test]
  fn empty_days_show_the_default_card() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap();
    let view = PageView::new(date, true, Vec::new());

    assert_eq!(view, PageView::Default(default_message(date, true)));

    let renderer = Renderer { signature: Some("- me"), color: false };
    assert_eq!(
      renderer.page(&view),
      "[smile] Have a Wonderful Day!\nThere are no special events scheduled for January 2nd.\n- me\n",
    );
  }

  #[test]
  fn cards_follow_the_template() {
    let homage = CalendarEntry::new("In Memory", "03-01", "Always.", Category::Homage)
      .unwrap()
      .icon("heart");
    let holiday = CalendarEntry::new("Merry Christmas!", "12-25", "Joy.", Category::Christmas).unwrap();
    let renderer = Renderer { signature: None, color: false };

    assert_eq!(renderer.card(&homage), "[heart] ~ In Memory ~\nAlways.\n");
    assert_eq!(renderer.card(&holiday), "[smile] Merry Christmas!\nJoy.\n");

    let colored = Renderer { signature: None, color: true };
    assert_eq!(colored.card(&holiday), "\x1b[31m[smile] Merry Christmas!\x1b[0m\nJoy.\n");
  }

  #[test]
  fn shows_every_matched_entry() {
    let a = CalendarEntry::new("A", "05-09", "a", Category::PersonalBirthday).unwrap();
    let b = CalendarEntry::new("B", "05-09", "b", Category::GenericHoliday).unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 5, 9).unwrap();
    let view = PageView::new(date, false, vec![&a, &b]);
    let renderer = Renderer { signature: None, color: false };

    assert_eq!(renderer.page(&view), "[smile] ♥ A ♥\na\n\n[smile] B\nb\n");
  }

  #[test]
  fn list_rows_show_key_category_and_title() {
    let entry = CalendarEntry::new("Happy Halloween!", "10-31", "Boo.", Category::Halloween).unwrap();

    assert_eq!(list_line(&entry), "10-31  halloween        Happy Halloween!");
  }

  #[test]
  fn color_needs_a_terminal() {
    assert!(use_color(true, false, true));
    assert!(!use_color(true, false, false));
    assert!(!use_color(true, true, true));
    assert!(!use_color(false, false, true));
  }

  fn table() -> EntryTable {
    EntryTable::new(vec![
      CalendarEntry::new("Happy Halloween!", "10-31", "Boo.", Category::Halloween).unwrap(),
    ])
    .unwrap()
  }

  #[test]
  fn picked_day_shows_its_entries() {
    let table = table();
    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

    assert_eq!(
      page_for(&table, Some("1999-10-31"), today),
      PageView::Events(table.entries().iter().collect()),
    );
    assert_eq!(
      page_for(&table, Some("2024-03-02"), today),
      PageView::Default("There are no special events scheduled for March 2nd.".into()),
    );
  }

  #[test]
  fn unreadable_picked_day_falls_back_to_today() {
    let table = table();
    let today = NaiveDate::from_ymd_opt(2024, 10, 31).unwrap();
    let fallback = PageView::Default(default_message(today, false));

    assert_eq!(page_for(&table, Some("2024-13-40"), today), fallback);
    assert_eq!(page_for(&table, Some("tomorrow"), today), fallback);
  }

  #[test]
  fn no_picked_day_uses_today() {
    let table = table();
    let halloween = NaiveDate::from_ymd_opt(2030, 10, 31).unwrap();
    let other = NaiveDate::from_ymd_opt(2030, 11, 1).unwrap();

    assert_eq!(page_for(&table, None, halloween), PageView::Events(table.entries().iter().collect()));
    assert_eq!(page_for(&table, None, other), PageView::Default(default_message(other, false)));
  }
}
