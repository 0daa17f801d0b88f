use super::QueryError;

pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number together with the page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    number: u64,
    size: usize,
}

impl PageRequest {
    pub fn new(number: u64, size: usize) -> Result<Self, QueryError> {
        if number == 0 {
            return Err(QueryError::invalid("page numbers start at 1"));
        }
        if size == 0 {
            return Err(QueryError::invalid("page size must be positive"));
        }
        Ok(Self { number, size })
    }

    pub fn first() -> Self {
        Self {
            number: 1,
            size: QUESTIONS_PER_PAGE,
        }
    }

    pub fn number(&self) -> u64 {
        self.number
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn bounds(&self) -> (usize, usize) {
        let index = usize::try_from(self.number - 1).unwrap_or(usize::MAX);
        let start = index.saturating_mul(self.size);
        (start, start.saturating_add(self.size))
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::first()
    }
}

/// Returns the window `[(n - 1) * size, n * size)` of `items`, or an empty
/// slice when the page starts past the end.
pub fn paginate<T>(items: &[T], page: PageRequest) -> &[T] {
    let (start, end) = page.bounds();
    if start >= items.len() {
        return &[];
    }
    &items[start..end.min(items.len())]
}

pub fn page_count(len: usize, size: usize) -> usize {
    if size == 0 {
        return 0;
    }
    len.div_ceil(size)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(number: u64, size: usize) -> PageRequest {
        PageRequest::new(number, size).unwrap()
    }

    #[test]
    fn first_page_is_default() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, PageRequest::default()), &items[..10]);
        assert_eq!(PageRequest::default().number(), 1);
        assert_eq!(PageRequest::default().size(), QUESTIONS_PER_PAGE);
    }

    #[test]
    fn last_page_is_partial() {
        let items: Vec<i32> = (1..=25).collect();
        assert_eq!(paginate(&items, page(3, 10)), &[21, 22, 23, 24, 25]);
    }

    #[test]
    fn pages_partition_the_input() {
        for len in [0usize, 1, 9, 10, 11, 37] {
            for size in [1usize, 3, 10] {
                let items: Vec<usize> = (0..len).collect();
                let pages = page_count(len, size);
                let joined: Vec<usize> = (1..=pages as u64)
                    .flat_map(|n| paginate(&items, page(n, size)).to_vec())
                    .collect();
                assert_eq!(joined, items, "len {len} size {size}");
                assert!(paginate(&items, page(pages as u64 + 1, size)).is_empty());
            }
        }
    }

    #[test]
    fn page_past_the_end_is_empty() {
        let items = [1, 2, 3];
        assert!(paginate(&items, page(2, 10)).is_empty());
        assert!(paginate(&items, page(u64::MAX, usize::MAX)).is_empty());
    }

    #[test]
    fn rejects_page_zero_and_empty_pages() {
        assert!(matches!(
            PageRequest::new(0, 10),
            Err(QueryError::InvalidInput(_))
        ));
        assert!(matches!(
            PageRequest::new(1, 0),
            Err(QueryError::InvalidInput(_))
        ));
    }

    #[test]
    fn counts_pages() {
        assert_eq!(page_count(0, 10), 0);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(19, 10), 2);
        assert_eq!(page_count(5, 0), 0);
    }
}
