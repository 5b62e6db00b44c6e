//! A small blog network used by tests throughout the workspace.
//!
//! - `first-blog` has no assigned roles and holds the archive posts.
//! - `second-blog` is edited by `blog-editor` and holds `post-b`.
//! - `fourth-blog` assigns every role and holds `post-a` and `post-c`.
//!
//! Members: `blog-editor`, `writer`, `contributor` and `visitor` (no role
//! anywhere).

use chrono::{NaiveDate, NaiveDateTime};

use crate::{Blog, ContentStore, MemberId, Post, Role};

/// Clock value the archive fixtures are evaluated against.
pub fn fixture_now() -> NaiveDateTime {
    timestamp(2013, 12, 1, 20, 0)
}

/// Builds a timestamp, panicking on an invalid date. Test use only.
pub fn timestamp(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|date| date.and_hms_opt(hour, minute, 0))
        .expect("fixture timestamps are valid")
}

/// The editor of `second-blog` and `fourth-blog`.
pub fn blog_editor() -> MemberId {
    MemberId::from("blog-editor")
}

/// The writer of `fourth-blog`.
pub fn writer() -> MemberId {
    MemberId::from("writer")
}

/// The contributor of `fourth-blog`.
pub fn contributor() -> MemberId {
    MemberId::from("contributor")
}

/// A member without any role.
pub fn visitor() -> MemberId {
    MemberId::from("visitor")
}

/// Loads the fixture network.
pub fn fixture_store() -> ContentStore {
    let mut store = ContentStore::default();

    let blogs = [
        Blog::new("first-blog", "First Blog"),
        Blog::new("second-blog", "Second Blog").assign(blog_editor(), Role::Editor),
        Blog::new("fourth-blog", "Fourth Blog")
            .assign(blog_editor(), Role::Editor)
            .assign(writer(), Role::Writer)
            .assign(contributor(), Role::Contributor),
    ];
    for blog in blogs {
        store.insert_blog(blog).expect("fixture blogs are unique");
    }

    let posts = [
        Post::new("first-post", "first-blog", "First Post", timestamp(2013, 10, 1, 10, 0))
            .authored_by(writer()),
        Post::new("second-post", "first-blog", "Second Post", timestamp(2013, 11, 12, 9, 0))
            .authored_by(writer()),
        Post::new("draft-post", "first-blog", "Draft Post", timestamp(2013, 10, 5, 12, 0))
            .authored_by(writer())
            .draft(),
        Post::new("scheduled-post", "first-blog", "Scheduled Post", timestamp(2013, 12, 24, 8, 0))
            .authored_by(writer()),
        Post::new("old-post", "first-blog", "Old Post", timestamp(2012, 1, 9, 15, 0))
            .authored_by(writer()),
        Post::new("ancient-post", "first-blog", "Ancient Post", timestamp(2011, 10, 1, 11, 0))
            .authored_by(writer()),
        Post::new("post-a", "fourth-blog", "One Post", timestamp(2012, 1, 9, 15, 0))
            .authored_by(writer())
            .authored_by(contributor()),
        Post::new("post-b", "second-blog", "Second Blog Post", timestamp(2012, 1, 9, 15, 0))
            .authored_by(writer())
            .authored_by(contributor()),
        Post::new("post-c", "fourth-blog", "Third Post", timestamp(2012, 1, 9, 15, 0))
            .authored_by(blog_editor())
            .authored_by(writer())
            .authored_by(contributor()),
        Post::new("post-d", "fourth-blog", "Editorial", timestamp(2012, 2, 1, 9, 0))
            .authored_by(blog_editor()),
    ];
    for post in posts {
        store.insert_post(post).expect("fixture posts are valid");
    }

    store
}
