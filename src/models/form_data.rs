use chrono::NaiveDate;

/// Default short-date pattern (US locale `%x`, four-digit year).
pub const DEFAULT_DATE_FORMAT: &str = "%m/%d/%Y";

/// Date-format strategy used to turn date entry text into dates.
///
/// The pattern is a chrono `strftime` string and normally comes from
/// [`FlightBookerSettings::date_format`](crate::models::FlightBookerSettings).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateFormat {
    pattern: String,
}

impl DateFormat {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Parse user input into a date.
    ///
    /// Surrounding whitespace is invisible in the entry widgets but breaks parsing,
    /// so it is trimmed first. Empty or unparseable text yields `None`.
    pub fn parse(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        match NaiveDate::parse_from_str(text, &self.pattern) {
            Ok(date) => Some(date),
            Err(e) => {
                tracing::trace!("Date '{}' does not match '{}': {}", text, self.pattern, e);
                None
            }
        }
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern).to_string()
    }
}

impl Default for DateFormat {
    fn default() -> Self {
        Self::new(DEFAULT_DATE_FORMAT)
    }
}

/// Flight booker form contents.
///
/// Updates never mutate in place: each `update_*` returns a new value, so the
/// presenter simply replaces its copy on every UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormData {
    pub one_way: bool,
    pub start_date: Option<NaiveDate>,
    pub return_date: Option<NaiveDate>,
}

impl FormData {
    pub fn new(one_way: bool, start_date: Option<NaiveDate>, return_date: Option<NaiveDate>) -> Self {
        Self {
            one_way,
            start_date,
            return_date,
        }
    }

    pub fn update_one_way(self, one_way: bool) -> Self {
        Self { one_way, ..self }
    }

    pub fn update_start_date(self, start_date: Option<NaiveDate>) -> Self {
        Self { start_date, ..self }
    }

    pub fn update_return_date(self, return_date: Option<NaiveDate>) -> Self {
        Self {
            return_date,
            ..self
        }
    }

    /// A one-way flight only needs a start date; a return flight needs both dates
    /// with the return no earlier than the start.
    pub fn is_valid(&self) -> bool {
        match (self.one_way, self.start_date, self.return_date) {
            (_, None, _) => false,
            (true, Some(_), _) => true,
            (false, Some(_), None) => false,
            (false, Some(start), Some(ret)) => start <= ret,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let format = DateFormat::default();
        assert_eq!(format.parse("  12/31/2024  "), format.parse("12/31/2024"));
        assert_eq!(format.parse("\t12/31/2024\n"), Some(date(2024, 12, 31)));
    }

    #[test]
    fn test_parse_invalid_text_is_none() {
        let format = DateFormat::default();
        assert_eq!(format.parse("not-a-date"), None);
        assert_eq!(format.parse(""), None);
        assert_eq!(format.parse("   "), None);
        assert_eq!(format.parse("02/30/2024"), None);
    }

    #[test]
    fn test_custom_pattern() {
        let format = DateFormat::new("%d.%m.%Y");
        assert_eq!(format.parse("31.12.2024"), Some(date(2024, 12, 31)));
        assert_eq!(format.parse("12/31/2024"), None);
        assert_eq!(format.format(date(2024, 1, 5)), "05.01.2024");
    }

    #[test]
    fn test_updates_return_new_values() {
        let original = FormData::new(true, Some(date(2024, 1, 1)), None);
        let updated = original.update_one_way(false);

        assert!(original.one_way);
        assert!(!updated.one_way);
        assert_eq!(updated.start_date, original.start_date);
    }

    #[test]
    fn test_return_before_start_is_invalid() {
        let data = FormData::new(false, Some(date(2024, 5, 2)), Some(date(2024, 5, 1)));
        assert!(!data.is_valid());
        assert!(data.update_one_way(true).is_valid());
    }

    #[test]
    fn test_same_day_return_is_valid() {
        let data = FormData::new(false, Some(date(2024, 5, 2)), Some(date(2024, 5, 2)));
        assert!(data.is_valid());
    }

    #[test]
    fn test_unparseable_start_invalidates_form() {
        let format = DateFormat::default();
        let data = FormData::new(true, format.parse("01/01/2025"), None);
        assert!(data.is_valid());

        let data = data.update_start_date(format.parse("not-a-date"));
        assert!(!data.is_valid());
    }
}
