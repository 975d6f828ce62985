//! Page Cursor
//!
//! Bounded page index with a single in-flight flip.

/// Current page plus the target of the flip being animated, if any.
///
/// A flip is started with one of the `begin_*` methods, which return the
/// target page, and completed with [`PageCursor::finish`]. Requests made while
/// a flip is in flight are dropped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PageCursor {
    current: usize,
    total: usize,
    flipping: Option<usize>,
}

impl PageCursor {
    pub fn new(total: usize) -> Self {
        Self { current: 0, total, flipping: None }
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_flipping(&self) -> bool {
        self.flipping.is_some()
    }

    pub fn has_next(&self) -> bool {
        self.current + 1 < self.total
    }

    pub fn has_prev(&self) -> bool {
        self.current > 0
    }

    pub fn begin_next(&mut self) -> Option<usize> {
        if !self.has_next() {
            return None;
        }
        self.begin(self.current + 1)
    }

    pub fn begin_prev(&mut self) -> Option<usize> {
        if !self.has_prev() {
            return None;
        }
        self.begin(self.current - 1)
    }

    /// Jump to `page`. Ignored for the current page or an out-of-range page.
    pub fn begin_goto(&mut self, page: usize) -> Option<usize> {
        if page >= self.total || page == self.current {
            return None;
        }
        self.begin(page)
    }

    fn begin(&mut self, target: usize) -> Option<usize> {
        if self.flipping.is_some() {
            return None;
        }
        self.flipping = Some(target);
        Some(target)
    }

    /// Complete the in-flight flip, returning the new current page
    pub fn finish(&mut self) -> Option<usize> {
        let target = self.flipping.take()?;
        if target < self.total {
            self.current = target;
        }
        Some(self.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flip_next(cursor: &mut PageCursor) {
        if cursor.begin_next().is_some() {
            cursor.finish();
        }
    }

    fn flip_prev(cursor: &mut PageCursor) {
        if cursor.begin_prev().is_some() {
            cursor.finish();
        }
    }

    #[test]
    fn test_next_stops_at_last_page() {
        let mut cursor = PageCursor::new(4);
        for _ in 0..10 {
            flip_next(&mut cursor);
            assert!(cursor.current() < 4);
        }
        assert_eq!(cursor.current(), 3);
        assert_eq!(cursor.begin_next(), None);
    }

    #[test]
    fn test_prev_stops_at_first_page() {
        let mut cursor = PageCursor::new(3);
        flip_next(&mut cursor);
        for _ in 0..5 {
            flip_prev(&mut cursor);
        }
        assert_eq!(cursor.current(), 0);
        assert_eq!(cursor.begin_prev(), None);
    }

    #[test]
    fn test_requests_ignored_while_flipping() {
        let mut cursor = PageCursor::new(5);
        assert_eq!(cursor.begin_next(), Some(1));
        assert!(cursor.is_flipping());

        assert_eq!(cursor.begin_next(), None);
        assert_eq!(cursor.begin_goto(4), None);
        assert_eq!(cursor.current(), 0);

        assert_eq!(cursor.finish(), Some(1));
        assert!(!cursor.is_flipping());
        assert_eq!(cursor.finish(), None);
    }

    #[test]
    fn test_goto_bounds() {
        let mut cursor = PageCursor::new(3);
        assert_eq!(cursor.begin_goto(0), None);
        assert_eq!(cursor.begin_goto(3), None);
        assert_eq!(cursor.begin_goto(2), Some(2));
        cursor.finish();
        assert_eq!(cursor.current(), 2);
    }

    #[test]
    fn test_empty_book_never_moves() {
        let mut cursor = PageCursor::new(0);
        assert_eq!(cursor.begin_next(), None);
        assert_eq!(cursor.begin_prev(), None);
        assert_eq!(cursor.begin_goto(0), None);
        assert_eq!(cursor.current(), 0);
    }
}
