#![warn(missing_docs)]

//! Date partitioned archive queries over Folio blogs.
//!
//! An archive URL has the shape `.../archive[/year[/month[/day]]]`. The
//! segments after `archive` are validated by [`DateFilter::parse`], which
//! either yields a [`DateFilter`] or rejects the request with
//! [`InvalidDateFilter`]. A valid filter is then run by [`ArchiveQuery`]
//! against the posts of a blog, with visibility decided by the requester's
//! role through [`folio_access::Authority`].
//!
//! [`ArchiveRequest`] strings both steps together and reports the result as
//! an [`ArchiveOutcome`], keeping "valid filter, nothing matched" (found,
//! empty) apart from "invalid filter" (not found).

mod error;
pub use error::*;

mod date;
pub use date::*;

mod query;
pub use query::*;

mod route;
pub use route::*;
