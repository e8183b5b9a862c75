//! # Paginated Listings
//!
//! GitHub's organization listings (members, pending invitations) are served
//! one page at a time. [`Pages`] turns a "fetch page N" function into a lazy
//! iterator over pages that stops at the first empty page, so callers can
//! drain a listing of any length without knowing how many pages it has.
//!
//! A `Pages` value always starts from page 1; to re-read a listing, build a
//! new one.

use std::collections::BTreeSet;

use crate::error::Result;

/// GitHub numbers pages from 1.
pub const FIRST_PAGE: u32 = 1;

/// Lazy iterator over the pages of a listing.
///
/// Yields each non-empty page in order. Iteration ends after the first empty
/// page, or right after the first error has been yielded.
pub struct Pages<F> {
    fetch: F,
    next_page: u32,
    done: bool,
}

impl<F> Pages<F> {
    /// Creates an iterator that will call `fetch(1)`, `fetch(2)`, ... on demand.
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            next_page: FIRST_PAGE,
            done: false,
        }
    }
}

impl<T, F> Iterator for Pages<F>
where
    F: FnMut(u32) -> Result<Vec<T>>,
{
    type Item = Result<Vec<T>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let page = self.next_page;
        match (self.fetch)(page) {
            Ok(items) if items.is_empty() => {
                self.done = true;
                None
            }
            Ok(items) => {
                self.next_page += 1;
                Some(Ok(items))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

/// Drains every page and unions the entries into one set.
///
/// The first failing page aborts the whole drain.
pub fn collect_logins<I>(pages: I) -> Result<BTreeSet<String>>
where
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    let mut logins = BTreeSet::new();
    for page in pages {
        logins.extend(page?);
    }
    Ok(logins)
}
