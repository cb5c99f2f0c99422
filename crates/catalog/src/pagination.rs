//! Pagination windower: page-number sequences with ellipsis markers, plus
//! page slicing.

use serde::ser::{Serialize, Serializer};

/// One entry in the rendered page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    Page(u64),
    Ellipsis,
}

impl Serialize for PageEntry {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            PageEntry::Page(n) => serializer.serialize_u64(*n),
            PageEntry::Ellipsis => serializer.serialize_str("ellipsis"),
        }
    }
}

/// Compute the page-number strip for the given position.
///
/// Page 1 always leads; an ellipsis follows when the current page has moved
/// past 3; the window `max(2, current-1) ..= min(total-1, current+1)` fills
/// the middle; an ellipsis precedes the final page when the current page sits
/// more than two pages before it; the final page closes the strip whenever
/// there is more than one page.
pub fn page_numbers(current_page: u64, total_pages: u64) -> Vec<PageEntry> {
    let mut entries = vec![PageEntry::Page(1)];

    if current_page > 3 {
        entries.push(PageEntry::Ellipsis);
    }

    let start = current_page.saturating_sub(1).max(2);
    let end = (current_page + 1).min(total_pages.saturating_sub(1));
    for page in start..=end {
        entries.push(PageEntry::Page(page));
    }

    if current_page + 2 < total_pages {
        entries.push(PageEntry::Ellipsis);
    }

    if total_pages > 1 {
        entries.push(PageEntry::Page(total_pages));
    }

    entries
}

/// Slice out the window for `current_page`, clipped to the available items.
///
/// Out-of-range pages (including page 0) yield an empty slice rather than an
/// error.
pub fn page_slice<T>(items: &[T], current_page: u64, page_size: usize) -> &[T] {
    if current_page == 0 {
        return &items[..0];
    }
    let offset = (current_page as usize - 1).saturating_mul(page_size);
    let start = offset.min(items.len());
    let end = offset.saturating_add(page_size).min(items.len());
    &items[start..end]
}

/// Derived pagination view-state for one render.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct PageDescriptor {
    pub current_page: u64,
    pub total_pages: u64,
    pub entries: Vec<PageEntry>,
    pub has_previous: bool,
    pub has_next: bool,
}

impl PageDescriptor {
    /// Recomputed on every change to the filtered-result count or the
    /// requested page.
    pub fn new(total_items: usize, current_page: u64, page_size: usize) -> Self {
        let total_pages = if page_size == 0 {
            1
        } else {
            (total_items.div_ceil(page_size) as u64).max(1)
        };
        Self {
            current_page,
            total_pages,
            entries: page_numbers(current_page, total_pages),
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
        }
    }
}
