#![warn(missing_docs)]

//! Content model shared by the Folio crates.
//!
//! A [`Blog`] is a container that holds [`Post`]s. Members act on both
//! through a [`Principal`], which may also be [`Principal::Anonymous`] when
//! no session exists. Each member holds at most one [`Role`] against a blog,
//! and posts list the members that authored them.
//!
//! The records here are loaded by a storage collaborator before any
//! evaluation takes place. Nothing in Folio mutates them afterwards; the
//! [`ContentSource`] trait is the read-only seam the other crates consume,
//! and [`ContentStore`] is an in-memory implementation of it.
//!
//! ```rust
//! use folio_content::{Blog, ContentSource, ContentStore, MemberId, Post, Role};
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), folio_content::ContentError> {
//! let writer = MemberId::from("writer");
//! let published_at = NaiveDate::from_ymd_opt(2013, 10, 1)
//!     .and_then(|date| date.and_hms_opt(10, 0, 0))
//!     .expect("valid timestamp");
//!
//! let mut store = ContentStore::default();
//! store.insert_blog(Blog::new("journal", "Journal").assign(writer.clone(), Role::Writer))?;
//! store.insert_post(Post::new("hello", "journal", "Hello", published_at).authored_by(writer))?;
//!
//! assert_eq!(store.posts_of(&"journal".into()).len(), 1);
//! # Ok(())
//! # }
//! ```

mod error;
pub use error::*;

mod id;
pub use id::*;

mod role;
pub use role::*;

mod blog;
pub use blog::*;

mod post;
pub use post::*;

mod store;
pub use store::*;

/// Fixtures shared by tests across the workspace.
#[cfg(any(test, feature = "helpers"))]
pub mod helpers;
