//! The shipped essay catalog
//!
//! A compile-time constant list; adding an essay means editing this table.
//! There is no runtime configuration surface.

use crate::types::EssayRef;

/// Essays shown in the list view, in display order
pub const ESSAYS: &[EssayRef] = &[
    EssayRef {
        title: "How to Start a Startup",
        url: "http://www.paulgraham.com/start.html",
    },
    EssayRef {
        title: "Do Things that Don't Scale",
        url: "http://www.paulgraham.com/ds.html",
    },
];

/// Resolve a catalog entry from a user-supplied key
///
/// Accepts a 1-based list index, an exact URL, or a case-insensitive title.
pub fn find(key: &str) -> Option<&'static EssayRef> {
    if let Ok(index) = key.parse::<usize>() {
        return index.checked_sub(1).and_then(|i| ESSAYS.get(i));
    }
    ESSAYS
        .iter()
        .find(|essay| essay.url == key || essay.title.eq_ignore_ascii_case(key))
}
