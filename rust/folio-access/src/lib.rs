#![warn(missing_docs)]

//! Role resolution and permission evaluation for Folio blogs.
//!
//! Every member holds at most one [`folio_content::Role`] against a blog.
//! Evaluating an action takes two steps:
//!
//! 1. [`RoleResolver`] turns a principal and a [`Node`] into an
//!    [`EffectiveRole`]. At item scope authorship is folded in: writers and
//!    contributors who authored a post act on it as its author, while
//!    editors keep their blanket rights.
//! 2. [`can_perform`] looks the effective role up in a fixed capability
//!    table keyed by [`Action`] and [`Scope`].
//!
//! [`Authority`] composes both steps for callers:
//!
//! ```rust
//! use folio_access::{Authority, Settings};
//! use folio_content::{Blog, ContentStore, MemberId, Post, Principal, Role};
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
//! store.insert_post(Post::new("hello", "journal", "Hello", published_at).authored_by(writer.clone()))?;
//!
//! let authority = Authority::from_source(&store, &Settings::default());
//! let blog = store.require_blog(&"journal".into())?;
//! let writer = Principal::from(writer);
//!
//! assert!(authority.can_add_children(&writer, blog));
//! assert!(!authority.can_edit(&writer, blog));
//! assert!(!authority.can_edit(&Principal::Anonymous, blog));
//! # Ok(())
//! # }
//! ```
//!
//! The site-tree filter ([`SiteTreeSettings`]) lives alongside but is not a
//! permission: it is driven purely by configuration.

mod membership;
pub use membership::*;

mod resolver;
pub use resolver::*;

mod permission;
pub use permission::*;

mod tree;
pub use tree::*;

mod settings;
pub use settings::*;

mod authority;
pub use authority::*;
