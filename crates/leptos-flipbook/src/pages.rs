//! Page Layout
//!
//! Splits a flat list of entries into flipbook pages.

/// How entries are distributed over pages
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Layout {
    /// Cover, two entries per spread, back cover
    #[default]
    Edition,
    /// One entry per page, no covers
    Single,
}

/// A single flipbook page
#[derive(Clone, Debug, PartialEq)]
pub enum Page<T> {
    Cover,
    /// Facing pages; the right side is empty when the entry count is odd
    Spread { left: T, right: Option<T> },
    Single(T),
    BackCover,
}

/// Page discriminant, handy for CSS classes and assertions
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Cover,
    Spread,
    Single,
    BackCover,
}

impl PageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            PageKind::Cover => "flip-page cover",
            PageKind::Spread => "flip-page spread",
            PageKind::Single => "flip-page single",
            PageKind::BackCover => "flip-page back-cover",
        }
    }
}

impl<T> Page<T> {
    pub fn kind(&self) -> PageKind {
        match self {
            Page::Cover => PageKind::Cover,
            Page::Spread { .. } => PageKind::Spread,
            Page::Single(_) => PageKind::Single,
            Page::BackCover => PageKind::BackCover,
        }
    }
}

/// Number of pages `paginate` produces for `entries` items
pub fn page_count(entries: usize, layout: Layout) -> usize {
    match layout {
        Layout::Edition => 2 + entries.div_ceil(2),
        Layout::Single => entries,
    }
}

/// Build the page list for `items`
///
/// The edition layout always has a cover and a back cover, even when there
/// are no entries. The single layout yields an empty list for no entries.
pub fn paginate<T: Clone>(items: &[T], layout: Layout) -> Vec<Page<T>> {
    let mut pages = Vec::with_capacity(page_count(items.len(), layout));

    match layout {
        Layout::Edition => {
            pages.push(Page::Cover);
            for pair in items.chunks(2) {
                pages.push(Page::Spread {
                    left: pair[0].clone(),
                    right: pair.get(1).cloned(),
                });
            }
            pages.push(Page::BackCover);
        }
        Layout::Single => {
            pages.extend(items.iter().cloned().map(Page::Single));
        }
    }

    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds<T>(pages: &[Page<T>]) -> Vec<PageKind> {
        pages.iter().map(Page::kind).collect()
    }

    #[test]
    fn test_edition_layout_odd_count() {
        let pages = paginate(&[1, 2, 3], Layout::Edition);

        assert_eq!(
            kinds(&pages),
            vec![PageKind::Cover, PageKind::Spread, PageKind::Spread, PageKind::BackCover]
        );
        assert_eq!(pages[1], Page::Spread { left: 1, right: Some(2) });
        assert_eq!(pages[2], Page::Spread { left: 3, right: None });
    }

    #[test]
    fn test_edition_layout_page_counts() {
        for n in 0..9usize {
            let items: Vec<usize> = (0..n).collect();
            let pages = paginate(&items, Layout::Edition);
            assert_eq!(pages.len(), 2 + n.div_ceil(2), "n = {}", n);
            assert_eq!(pages.len(), page_count(n, Layout::Edition));
            assert_eq!(pages.first().map(Page::kind), Some(PageKind::Cover));
            assert_eq!(pages.last().map(Page::kind), Some(PageKind::BackCover));
        }
    }

    #[test]
    fn test_empty_edition_still_has_covers() {
        let pages = paginate::<u8>(&[], Layout::Edition);
        assert_eq!(kinds(&pages), vec![PageKind::Cover, PageKind::BackCover]);
    }

    #[test]
    fn test_single_layout() {
        let pages = paginate(&["a", "b", "c", "d"], Layout::Single);
        assert_eq!(pages.len(), 4);
        assert!(pages.iter().all(|p| p.kind() == PageKind::Single));
        assert_eq!(pages[3], Page::Single("d"));

        assert!(paginate::<u8>(&[], Layout::Single).is_empty());
    }
}
