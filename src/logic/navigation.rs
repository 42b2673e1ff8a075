//! Navigation selection logic
//!
//! Pure functions for moving through the page tabs and card lists.
//! Both wrap around at the ends.

use crate::pages::{Page, PAGES};

/// Next selection in a list of `list_len` items, wrapping to the start
///
/// No selection selects the first item; an empty list has no selection.
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(1), 3), Some(2));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 < list_len => i + 1,
        Some(_) => 0,
        None => 0,
    })
}

/// Previous selection in a list of `list_len` items, wrapping to the end
///
/// # Examples
/// ```
/// use foliotui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(None, 0), None);
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(None, 3), Some(2));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i > 0 && i < list_len => i - 1,
        _ => list_len - 1,
    })
}

/// Keep a selection inside a list that may have shrunk
pub fn clamp_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }
    Some(current.unwrap_or(0).min(list_len - 1))
}

/// Page after `page` in tab order
pub fn page_after(page: Page) -> Page {
    next_selection(page.index(), PAGES.len())
        .map(|i| PAGES[i].page)
        .unwrap_or(page)
}

/// Page before `page` in tab order
pub fn page_before(page: Page) -> Page {
    prev_selection(page.index(), PAGES.len())
        .map(|i| PAGES[i].page)
        .unwrap_or(page)
}

/// Page bound to a number key (1-based tab position)
pub fn page_for_digit(digit: u32) -> Option<Page> {
    let idx = (digit as usize).checked_sub(1)?;
    PAGES.get(idx).map(|d| d.page)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_selection_empty_list() {
        assert_eq!(next_selection(None, 0), None);
        assert_eq!(next_selection(Some(4), 0), None);
    }

    #[test]
    fn test_next_selection_out_of_bounds_wraps() {
        assert_eq!(next_selection(Some(10), 3), Some(0));
    }

    #[test]
    fn test_prev_selection_out_of_bounds_goes_to_end() {
        assert_eq!(prev_selection(Some(10), 3), Some(2));
    }

    #[test]
    fn test_single_item_wraps_to_itself() {
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_clamp_selection() {
        assert_eq!(clamp_selection(Some(5), 2), Some(1));
        assert_eq!(clamp_selection(None, 2), Some(0));
        assert_eq!(clamp_selection(Some(1), 0), None);
    }

    #[test]
    fn test_page_cycle_forward() {
        assert_eq!(page_after(Page::About), Page::Education);
        assert_eq!(page_after(Page::Contact), Page::About);
    }

    #[test]
    fn test_page_cycle_backward() {
        assert_eq!(page_before(Page::Education), Page::About);
        assert_eq!(page_before(Page::About), Page::Contact);
    }

    #[test]
    fn test_full_cycle_visits_every_page() {
        let mut page = Page::About;
        for _ in 0..PAGES.len() {
            page = page_after(page);
        }
        assert_eq!(page, Page::About);
    }

    #[test]
    fn test_page_for_digit() {
        assert_eq!(page_for_digit(1), Some(Page::About));
        assert_eq!(page_for_digit(4), Some(Page::Projects));
        assert_eq!(page_for_digit(8), Some(Page::Contact));
        assert_eq!(page_for_digit(0), None);
        assert_eq!(page_for_digit(9), None);
    }
}
