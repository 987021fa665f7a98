//! Navigation paths and detail lookup.

use crate::model::{User, UserId};

/// A navigable view.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// `/`
    #[default]
    List,
    /// `/user/:id`, with the raw id segment.
    Detail(String),
}

impl Route {
    /// Parse a navigation path. Unknown paths fall back to the list.
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim_end_matches('/');
        match trimmed.strip_prefix("/user/") {
            Some(raw) if !raw.is_empty() && !raw.contains('/') => Route::Detail(raw.to_string()),
            _ => Route::List,
        }
    }

    pub fn detail(id: UserId) -> Self {
        Route::Detail(id.to_string())
    }

    pub fn path(&self) -> String {
        match self {
            Route::List => "/".to_string(),
            Route::Detail(raw) => format!("/user/{raw}"),
        }
    }
}

/// What the detail view shows for a path id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailView<'a> {
    Loading,
    Found(&'a User),
    NotFound,
}

/// Resolve the detail view for `raw_id` against the current users.
pub fn lookup<'a>(users: &'a [User], raw_id: &str, is_loading: bool) -> DetailView<'a> {
    if is_loading {
        return DetailView::Loading;
    }
    parse_id(raw_id)
        .and_then(|id| users.iter().find(|user| user.id == id))
        .map_or(DetailView::NotFound, DetailView::Found)
}

/// Lenient integer parse of a path segment.
///
/// Skips leading whitespace, accepts an optional `+` and reads the leading
/// digits, so `"12abc"` is 12. Negative or digit-less input yields `None`.
pub fn parse_id(raw: &str) -> Option<UserId> {
    let rest = raw.trim_start();
    let rest = rest.strip_prefix('+').unwrap_or(rest);
    let digits_end = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    rest.get(..digits_end)
        .filter(|digits| !digits.is_empty())
        .and_then(|digits| digits.parse().ok())
}
