use chrono::{Datelike, Duration, Local, NaiveDate, Weekday};
use std::str::FromStr;
use strum_macros::EnumString;

/// Default accepted input date formats (parsing only).
pub const DEFAULT_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Relative date words understood on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum DateKeyword {
    Today,
    Yesterday,
    Tomorrow,
    #[strum(serialize = "this week", serialize = "this-week")]
    ThisWeek,
    #[strum(serialize = "last week", serialize = "last-week")]
    LastWeek,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// The result of parsing a date string, which can be a single day or a range.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DateFilter {
    Single(NaiveDate),
    Range(NaiveDate, NaiveDate),
}

impl DateFilter {
    pub fn days(self) -> Vec<NaiveDate> {
        match self {
            DateFilter::Single(d) => vec![d],
            DateFilter::Range(start, end) => get_dates_in_range(start, end),
        }
    }
}

/// Configuration options for parsing functions.
#[derive(Copy, Clone, Debug, Default)]
pub struct ParseOptions<'a> {
    /// The date to use as "today" for relative keywords.
    pub reference_date: Option<NaiveDate>,
    /// A slice of `chrono` format strings to try for parsing dates.
    pub formats: Option<&'a [&'a str]>,
}

/// Parses one or two date tokens into a [`DateFilter`].
///
/// Two single dates become a range in the order given. If either side is
/// already a range (e.g. `last week`) that range wins.
pub fn parse_date_token(
    start_date: &str,
    end_date: Option<&str>,
    options: Option<ParseOptions>,
) -> Option<DateFilter> {
    let options = options.unwrap_or_default();
    let reference_date = options
        .reference_date
        .unwrap_or_else(|| Local::now().date_naive());
    let formats = options.formats.unwrap_or(DEFAULT_FORMATS);

    let a = resolve_date_token(start_date, reference_date, formats)?;
    let b = end_date.and_then(|date| resolve_date_token(date, reference_date, formats));

    match (a, b) {
        (DateFilter::Range(s_date, e_date), _) => Some(DateFilter::Range(s_date, e_date)),
        (DateFilter::Single(_), Some(DateFilter::Range(s_date, e_date))) => {
            Some(DateFilter::Range(s_date, e_date))
        }
        (DateFilter::Single(a_date), Some(DateFilter::Single(b_date))) => {
            Some(DateFilter::Range(a_date, b_date))
        }
        (DateFilter::Single(a_date), None) => Some(DateFilter::Single(a_date)),
    }
}

fn resolve_date_token(
    date_string: &str,
    reference_date: NaiveDate,
    formats: &[&str],
) -> Option<DateFilter> {
    let token = date_string.trim();
    if let Ok(keyword) = DateKeyword::from_str(token) {
        return Some(resolve_keyword(keyword, reference_date));
    }

    // Fallback to formatted dates
    formats
        .iter()
        .filter_map(|fmt| NaiveDate::parse_from_str(token, fmt).ok())
        .map(DateFilter::Single)
        .next()
}

fn resolve_keyword(keyword: DateKeyword, reference_date: NaiveDate) -> DateFilter {
    let weekday = match keyword {
        DateKeyword::Today => return DateFilter::Single(reference_date),
        DateKeyword::Yesterday => return DateFilter::Single(reference_date - Duration::days(1)),
        DateKeyword::Tomorrow => return DateFilter::Single(reference_date + Duration::days(1)),
        DateKeyword::ThisWeek => {
            let days_from_monday = reference_date.weekday().num_days_from_monday();
            let start_of_week = reference_date - Duration::days(days_from_monday as i64);
            return DateFilter::Range(start_of_week, start_of_week + Duration::days(6));
        }
        DateKeyword::LastWeek => {
            let last_sunday = reference_date
                - Duration::days(reference_date.weekday().num_days_from_monday() as i64 + 1);
            return DateFilter::Range(last_sunday - Duration::days(6), last_sunday);
        }
        DateKeyword::Monday => Weekday::Mon,
        DateKeyword::Tuesday => Weekday::Tue,
        DateKeyword::Wednesday => Weekday::Wed,
        DateKeyword::Thursday => Weekday::Thu,
        DateKeyword::Friday => Weekday::Fri,
        DateKeyword::Saturday => Weekday::Sat,
        DateKeyword::Sunday => Weekday::Sun,
    };
    let today_wd = reference_date.weekday();
    let days_ago = (today_wd.num_days_from_monday() + 7 - weekday.num_days_from_monday()) % 7;
    DateFilter::Single(reference_date - Duration::days(days_ago as i64))
}

/// Generates a vector of `NaiveDate`s, inclusive of the start and end dates.
/// If `start` is after `end`, the resulting vector will be empty.
///
/// # Examples
///
/// ```
/// # use chrono::NaiveDate;
/// # use hourlog_core::dates::get_dates_in_range;
/// let start_date = NaiveDate::from_ymd_opt(2025, 8, 15).unwrap();
/// let end_date = NaiveDate::from_ymd_opt(2025, 8, 17).unwrap();
///
/// let dates = get_dates_in_range(start_date, end_date);
///
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
/// assert_eq!(dates[2], NaiveDate::from_ymd_opt(2025, 8, 17).unwrap());
/// ```
pub fn get_dates_in_range(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        current += Duration::days(1);
    }
    dates
}
