//! Lazy sequence over paginated store responses.
//!
//! [`Pages`] wraps a fetch function taking an optional continuation token
//! and flattens the returned pages into a single iterator of items. Pages
//! are requested only when the buffered items run out.
//!
//! The sequence is finite and cannot be restarted: once the last page has
//! been drained, or a fetch has failed, it yields `None` forever.

use std::collections::VecDeque;

use crate::core::types::Page;
use crate::error::StoreError;

enum Cursor {
    Start,
    Next(String),
    Done,
}

/// Iterator over the items of every page returned by `fetch`.
pub struct Pages<T, F> {
    fetch: F,
    cursor: Cursor,
    buffer: VecDeque<T>,
    requests: usize,
}

impl<T, F> Pages<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, StoreError>,
{
    pub fn new(fetch: F) -> Self {
        Self {
            fetch,
            cursor: Cursor::Start,
            buffer: VecDeque::new(),
            requests: 0,
        }
    }

    /// Number of page requests issued so far.
    pub fn requests(&self) -> usize {
        self.requests
    }
}

impl<T, F> Iterator for Pages<T, F>
where
    F: FnMut(Option<&str>) -> Result<Page<T>, StoreError>,
{
    type Item = Result<T, StoreError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }

            let token = match &self.cursor {
                Cursor::Done => return None,
                Cursor::Start => None,
                Cursor::Next(token) => Some(token.as_str()),
            };

            self.requests += 1;
            match (self.fetch)(token) {
                Ok(page) => {
                    // An empty token is treated as the end, otherwise a
                    // misbehaving store could keep us looping.
                    self.cursor = match page.next_token {
                        Some(next) if !next.is_empty() => Cursor::Next(next),
                        _ => Cursor::Done,
                    };
                    self.buffer.extend(page.items);
                }
                Err(e) => {
                    self.cursor = Cursor::Done;
                    self.buffer.clear();
                    return Some(Err(e));
                }
            }
        }
    }
}
