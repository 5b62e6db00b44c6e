use std::fmt::{Display, Formatter};
use std::ops::Range;

use chrono::{Days, Months, NaiveDate, NaiveDateTime, NaiveTime};
use serde::Serialize;

use crate::InvalidDateFilter;

/// How finely a [`DateFilter`] narrows the archive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Granularity {
    /// A whole year.
    Year,
    /// A single month of a year.
    Month,
    /// A single day.
    Day,
}

/// A validated `year[/month[/day]]` archive filter.
///
/// Only constructible through [`DateFilter::parse`] or the checked
/// constructors, so every instance names a real calendar range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateFilter {
    year: i32,
    month: Option<u32>,
    day: Option<u32>,
    #[serde(skip)]
    start: NaiveDate,
    #[serde(skip)]
    end: NaiveDate,
}

impl DateFilter {
    /// Parses raw URL segments following `archive`.
    ///
    /// Accepts one to three segments: a four digit year, then a one or two
    /// digit month in `1..=12`, then a one or two digit day that exists in
    /// that month. Anything else, including no segments at all, is rejected.
    pub fn parse<S: AsRef<str>>(segments: &[S]) -> Result<Self, InvalidDateFilter> {
        let filter = Self::parse_segments(segments);
        if let Err(reason) = &filter {
            tracing::debug!(%reason, "Rejected archive segments");
        }
        filter
    }

    fn parse_segments<S: AsRef<str>>(segments: &[S]) -> Result<Self, InvalidDateFilter> {
        match segments {
            [] => Err(InvalidDateFilter::MissingYear),
            [year] => Self::year(parse_year(year.as_ref())?),
            [year, month] => Self::month(parse_year(year.as_ref())?, parse_month(month.as_ref())?),
            [year, month, day] => {
                let year = parse_year(year.as_ref())?;
                let month = parse_month(month.as_ref())?;
                let invalid = || InvalidDateFilter::InvalidDay(day.as_ref().to_owned());
                let day = digits(day.as_ref(), 2).ok_or_else(invalid)?;
                Self::day(year, month, day).map_err(|_| invalid())
            }
            _ => Err(InvalidDateFilter::TooManySegments(segments.len())),
        }
    }

    /// A filter covering all of `year`.
    pub fn year(year: i32) -> Result<Self, InvalidDateFilter> {
        Self::new(year, None, None)
    }

    /// A filter covering `month` of `year`.
    pub fn month(year: i32, month: u32) -> Result<Self, InvalidDateFilter> {
        Self::new(year, Some(month), None)
    }

    /// A filter covering a single day.
    pub fn day(year: i32, month: u32, day: u32) -> Result<Self, InvalidDateFilter> {
        Self::new(year, Some(month), Some(day))
    }

    /// Checked constructor shared by the others.
    pub fn new(year: i32, month: Option<u32>, day: Option<u32>) -> Result<Self, InvalidDateFilter> {
        if !(1..=9999).contains(&year) {
            return Err(InvalidDateFilter::InvalidYear(year.to_string()));
        }
        if let Some(month) = month {
            if !(1..=12).contains(&month) {
                return Err(InvalidDateFilter::InvalidMonth(month.to_string()));
            }
        }
        match (month, day) {
            (None, Some(_)) => return Err(InvalidDateFilter::DayWithoutMonth),
            (Some(month), Some(day)) if NaiveDate::from_ymd_opt(year, month, day).is_none() => {
                return Err(InvalidDateFilter::InvalidDay(day.to_string()));
            }
            _ => {}
        }

        let invalid_year = || InvalidDateFilter::InvalidYear(year.to_string());
        let start = NaiveDate::from_ymd_opt(year, month.unwrap_or(1), day.unwrap_or(1))
            .ok_or_else(invalid_year)?;
        let end = match (month, day) {
            (None, _) => start.checked_add_months(Months::new(12)),
            (Some(_), None) => start.checked_add_months(Months::new(1)),
            (Some(_), Some(_)) => start.checked_add_days(Days::new(1)),
        }
        .ok_or_else(invalid_year)?;

        Ok(Self {
            year,
            month,
            day,
            start,
            end,
        })
    }

    /// The filtered year.
    pub fn year_value(&self) -> i32 {
        self.year
    }

    /// The filtered month, if narrowed to one.
    pub fn month_value(&self) -> Option<u32> {
        self.month
    }

    /// The filtered day, if narrowed to one.
    pub fn day_value(&self) -> Option<u32> {
        self.day
    }

    /// How finely this filter narrows the archive.
    pub fn granularity(&self) -> Granularity {
        match (self.month, self.day) {
            (None, _) => Granularity::Year,
            (Some(_), None) => Granularity::Month,
            (Some(_), Some(_)) => Granularity::Day,
        }
    }

    /// The filtered period as a half-open `[start, end)` range.
    pub fn range(&self) -> Range<NaiveDateTime> {
        self.start.and_time(NaiveTime::MIN)..self.end.and_time(NaiveTime::MIN)
    }

    /// Whether `timestamp` falls within the filtered period.
    pub fn contains(&self, timestamp: &NaiveDateTime) -> bool {
        let date = timestamp.date();
        self.start <= date && date < self.end
    }

    /// Canonical URL segments, zero padded: `["2013", "10", "01"]`.
    pub fn segments(&self) -> Vec<String> {
        let mut segments = vec![format!("{:04}", self.year)];
        segments.extend(self.month.map(|month| format!("{month:02}")));
        segments.extend(self.day.map(|day| format!("{day:02}")));
        segments
    }
}

impl Display for DateFilter {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.segments().join("/"))
    }
}

fn parse_year(segment: &str) -> Result<i32, InvalidDateFilter> {
    let year = if segment.len() == 4 {
        digits(segment, 4)
    } else {
        None
    };
    year.filter(|year| *year >= 1)
        .map(|year| year as i32)
        .ok_or_else(|| InvalidDateFilter::InvalidYear(segment.to_owned()))
}

fn parse_month(segment: &str) -> Result<u32, InvalidDateFilter> {
    digits(segment, 2)
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| InvalidDateFilter::InvalidMonth(segment.to_owned()))
}

/// Parses one to `max` ASCII digits. Signs, whitespace and anything else
/// are rejected.
fn digits(segment: &str, max: usize) -> Option<u32> {
    if segment.is_empty() || segment.len() > max || !segment.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    segment.parse().ok()
}
