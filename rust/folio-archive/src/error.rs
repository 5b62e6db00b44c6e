use folio_content::BlogId;

/// Reasons a sequence of archive date segments is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidDateFilter {
    /// No segments at all. An archive always needs at least a year.
    #[error("Archive requires a year")]
    MissingYear,

    /// More than year, month and day were given.
    #[error("Archive accepts at most 3 date segments, got {0}")]
    TooManySegments(usize),

    /// The year is not four digits, or is zero.
    #[error("Invalid archive year '{0}'")]
    InvalidYear(String),

    /// The month is not a number between 1 and 12.
    #[error("Invalid archive month '{0}'")]
    InvalidMonth(String),

    /// The day is not a number within the month.
    #[error("Invalid archive day '{0}'")]
    InvalidDay(String),

    /// A day was given without a month.
    #[error("Archive day requires a month")]
    DayWithoutMonth,
}

/// Why an archive request resolves to not-found.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NotFound {
    /// The date segments do not form a valid filter.
    #[error(transparent)]
    InvalidFilter(#[from] InvalidDateFilter),

    /// The requested blog does not exist.
    #[error("Unknown blog '{0}'")]
    UnknownBlog(BlogId),
}
