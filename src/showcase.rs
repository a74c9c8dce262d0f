//! "Who is Using This?" showcase.
//!
//! Only pinned users appear on the homepage, in config order. When none are
//! pinned the section is dropped entirely: no heading, no container. The
//! section ends with a link to the users page, which lists everyone.

use crate::config::{SiteConfig, UserEntry};
use crate::types::Link;
use crate::urls::UrlResolver;
use serde::Serialize;

pub const SHOWCASE_HEADING: &str = "Who is Using This?";
pub const SHOWCASE_INTRO: &str = "This project is used by all these people";
/// Page name the "more users" link points at.
pub const USERS_PAGE: &str = "users.html";

/// Pinned users, lazily, in their original order.
pub fn pinned_users(users: &[UserEntry]) -> impl Iterator<Item = &UserEntry> {
    users.iter().filter(|user| user.pinned)
}

/// The resolved showcase section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Showcase {
    pub heading: String,
    pub intro: String,
    pub users: Vec<UserEntry>,
    pub more_users: Link,
}

/// Build the showcase section, or `None` when no user is pinned.
pub fn resolve_showcase(config: &SiteConfig, urls: &UrlResolver<'_>) -> Option<Showcase> {
    let users: Vec<UserEntry> = pinned_users(&config.users).cloned().collect();
    if users.is_empty() {
        return None;
    }

    Some(Showcase {
        heading: SHOWCASE_HEADING.to_string(),
        intro: SHOWCASE_INTRO.to_string(),
        users,
        more_users: Link {
            label: format!("More {} Users", config.title),
            href: urls.page(USERS_PAGE),
            new_tab: false,
        },
    })
}
