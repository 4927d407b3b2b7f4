//! Page-number pagination over a counted collection.
//!
//! Pages are 1-indexed and fixed at [`PAGE_SIZE`] documents. A request for a
//! page past the last one is not a computation error; callers report it as
//! "not found".

use std::fmt;

/// Documents per page for every listing.
pub const PAGE_SIZE: u64 = 12;

/// A page number requested by a caller, always at least 1.
///
/// Anything that is not a positive integer (missing, zero, negative,
/// non-numeric) resolves to the first page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestedPage(u64);

impl RequestedPage {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Clamps a raw page number to a minimum of 1.
    pub fn new(page: i64) -> Self {
        if page < 1 {
            Self::FIRST
        } else {
            Self(page as u64)
        }
    }

    /// Parses a raw `page` parameter, defaulting to the first page.
    pub fn parse(raw: Option<&str>) -> Self {
        raw.and_then(|value| value.parse::<i64>().ok())
            .map(Self::new)
            .unwrap_or(Self::FIRST)
    }

    /// The page number.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl Default for RequestedPage {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for RequestedPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Scan window and page metadata for one requested page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageBounds {
    /// Documents to skip before the page starts.
    pub skip: u64,
    /// Maximum documents on the page.
    pub limit: u64,
    /// `ceil(total / page_size)`; 0 for an empty collection.
    pub last_page: u64,
    /// Whether the requested page exists. Always false when `last_page` is 0.
    pub in_range: bool,
}

/// Computes skip/limit and the last page for `page` over `total_count`
/// matching documents.
///
/// A zero `page_size` is treated as 1.
pub fn compute_bounds(total_count: u64, page_size: u64, page: RequestedPage) -> PageBounds {
    let page_size = page_size.max(1);
    let last_page = total_count.div_ceil(page_size);

    PageBounds {
        skip: page_size.saturating_mul(page.get() - 1),
        limit: page_size,
        last_page,
        in_range: page.get() <= last_page,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn requested_page_clamps_non_positive_values() {
        assert_eq!(RequestedPage::new(0), RequestedPage::FIRST);
        assert_eq!(RequestedPage::new(-3), RequestedPage::FIRST);
        assert_eq!(RequestedPage::new(i64::MIN), RequestedPage::FIRST);
        assert_eq!(RequestedPage::new(7).get(), 7);
    }

    #[test]
    fn requested_page_parse_defaults_to_first_page() {
        assert_eq!(RequestedPage::parse(None), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("")), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("0")), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("-3")), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("abc")), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("2.5")), RequestedPage::FIRST);
        assert_eq!(RequestedPage::parse(Some("99999999999999999999")), RequestedPage::FIRST);
    }

    #[test]
    fn requested_page_parse_accepts_positive_integers() {
        assert_eq!(RequestedPage::parse(Some("1")).get(), 1);
        assert_eq!(RequestedPage::parse(Some("42")).get(), 42);
    }

    #[test]
    fn twenty_five_documents_make_three_pages() {
        let bounds = compute_bounds(25, PAGE_SIZE, RequestedPage::new(3));
        assert_eq!(bounds.last_page, 3);
        assert_eq!(bounds.skip, 24);
        assert_eq!(bounds.limit, 12);
        assert!(bounds.in_range);

        let past_end = compute_bounds(25, PAGE_SIZE, RequestedPage::new(4));
        assert!(!past_end.in_range);
    }

    #[test]
    fn empty_collection_has_no_valid_page() {
        let bounds = compute_bounds(0, PAGE_SIZE, RequestedPage::FIRST);
        assert_eq!(bounds.last_page, 0);
        assert!(!bounds.in_range);
    }

    #[test]
    fn exact_multiple_does_not_add_a_page() {
        let bounds = compute_bounds(24, PAGE_SIZE, RequestedPage::new(2));
        assert_eq!(bounds.last_page, 2);
        assert!(bounds.in_range);
        assert!(!compute_bounds(24, PAGE_SIZE, RequestedPage::new(3)).in_range);
    }

    #[test]
    fn huge_page_numbers_saturate_instead_of_overflowing() {
        let bounds = compute_bounds(10, PAGE_SIZE, RequestedPage::new(i64::MAX));
        assert_eq!(bounds.skip, u64::MAX);
        assert!(!bounds.in_range);
    }

    #[test]
    fn zero_page_size_is_treated_as_one() {
        let bounds = compute_bounds(3, 0, RequestedPage::new(2));
        assert_eq!(bounds.limit, 1);
        assert_eq!(bounds.last_page, 3);
        assert_eq!(bounds.skip, 1);
    }

    proptest! {
        #[test]
        fn last_page_is_ceiling_of_count_over_size(
            total in 0u64..1_000_000,
            size in 1u64..500,
        ) {
            let bounds = compute_bounds(total, size, RequestedPage::FIRST);
            let expected = total / size + u64::from(total % size != 0);
            prop_assert_eq!(bounds.last_page, expected);
            prop_assert_eq!(bounds.last_page == 0, total == 0);
        }

        #[test]
        fn pages_within_range_skip_whole_pages(
            total in 1u64..1_000_000,
            size in 1u64..500,
            pick in 0u64..u64::MAX,
        ) {
            let last_page = total.div_ceil(size);
            let page = 1 + pick % last_page;
            let bounds = compute_bounds(total, size, RequestedPage::new(page as i64));
            prop_assert!(bounds.in_range);
            prop_assert_eq!(bounds.skip, size * (page - 1));
            prop_assert_eq!(bounds.limit, size);
            prop_assert!(bounds.skip < total);
        }

        #[test]
        fn pages_past_the_end_are_out_of_range(
            total in 0u64..1_000_000,
            size in 1u64..500,
            beyond in 1u64..1_000,
        ) {
            let page = total.div_ceil(size) + beyond;
            let bounds = compute_bounds(total, size, RequestedPage::new(page as i64));
            prop_assert!(!bounds.in_range);
        }

        #[test]
        fn unparseable_pages_resolve_to_first(raw in "[^0-9]*") {
            prop_assert_eq!(RequestedPage::parse(Some(raw.as_str())), RequestedPage::FIRST);
        }
    }
}
