use std::path::Path;

use chrono::{Local, NaiveDate, Utc};

use crate::special::{builtin_entries, CalendarEntry, EntryTable};

#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Time zone "today" is read in, the local one when unset
    pub timezone: Option<chrono_tz::Tz>,
    #[serde(default = "default_builtin")]
    pub builtin: bool,
    pub signature: Option<String>,
    #[serde(default = "default_color")]
    pub color: bool,
    #[serde(default)]
    pub events: Vec<CalendarEntry>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            timezone: None,
            builtin: default_builtin(),
            signature: None,
            color: default_color(),
            events: Vec::default(),
        }
    }
}

impl Config {
    pub fn today(&self) -> NaiveDate {
        match self.timezone {
            Some(tz) => Utc::now().with_timezone(&tz).date_naive(),
            None => Local::now().date_naive(),
        }
    }

    /// The built-in entries (unless disabled) followed by the configured ones
    pub fn table(&self) -> anyhow::Result<EntryTable> {
        let mut entries = if self.builtin { builtin_entries()? } else { Vec::new() };
        entries.extend(self.events.iter().cloned());

        Ok(EntryTable::new(entries)?)
    }
}

pub fn init(path: Option<&Path>) -> anyhow::Result<Config> {
    let Some(path) = path else {
        return Ok(Config::default());
    };

    let string = std::fs::read_to_string(path)?;
    let config: Config = toml::from_str(&string)?;

    Ok(config)
}

const fn default_builtin() -> bool {
    true
}

const fn default_color() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::special::Category;

    #[test]
    fn missing_path_uses_defaults() {
        let config = init(None).unwrap();

        assert_eq!(config.timezone, None);
        assert!(config.builtin);
        assert!(config.events.is_empty());
        assert_eq!(config.table().unwrap().len(), builtin_entries().unwrap().len());
    }

    #[test]
    fn reads_extra_events_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
timezone = "Asia/Kolkata"
signature = "- Akshay"

[[events]]
title = "Happy Birthday, Ada!"
date = "12-10"
message = "Counting engines."
eventType = "science"
"#
        )
        .unwrap();

        let config = init(Some(file.path())).unwrap();
        let table = config.table().unwrap();

        assert_eq!(config.timezone, Some(chrono_tz::Asia::Kolkata));
        assert_eq!(config.signature.as_deref(), Some("- Akshay"));

        let titles: Vec<&str> = table
            .resolve("2030-12-10")
            .unwrap()
            .into_iter()
            .map(|e| e.title.as_str())
            .collect();
        assert_eq!(titles, ["Happy Birthday, Ms. Asha Rose Mathew!", "Happy Birthday, Ada!"]);
        assert_eq!(table.entries().last().map(|e| e.category), Some(Category::ScienceFigure));
    }

    #[test]
    fn builtin_entries_can_be_switched_off() {
        let config: Config = toml::from_str(
            r#"
builtin = false

[[events]]
title = "Launch day"
date = "07-16"
message = "Liftoff."
eventType = "holiday"
"#,
        )
        .unwrap();

        let table = config.table().unwrap();
        assert_eq!(table.len(), 1);
        assert!(table.resolve("2024-12-25").unwrap().is_empty());
    }

    #[test]
    fn rejects_events_without_a_message() {
        let config: Config = toml::from_str(
            r#"
[[events]]
title = "Blank"
date = "07-16"
message = ""
eventType = "holiday"
"#,
        )
        .unwrap();

        assert!(config.table().is_err());
    }

    #[test]
    fn rejects_unknown_time_zones() {
        assert!(toml::from_str::<Config>(r#"timezone = "Mars/Olympus_Mons""#).is_err());
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();

        assert!(init(Some(dir.path().join("nope.toml").as_path())).is_err());
    }
}
