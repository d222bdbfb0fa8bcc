/// A slice of a longer list, shown one page at a time
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub current_page: usize,
    pub page_size: usize,
}

impl<T: Clone> Page<T> {
    /// Paginate `items`; a zero page size is treated as one item per page
    pub fn new(items: Vec<T>, page_size: usize) -> Self {
        Page {
            items,
            current_page: 0,
            page_size: page_size.max(1),
        }
    }

    /// Items on the current page
    pub fn current(&self) -> &[T] {
        let start = (self.current_page * self.page_size).min(self.items.len());
        let end = (start + self.page_size).min(self.items.len());
        &self.items[start..end]
    }

    /// Jump to a 1-based page number; out of range pages are refused
    pub fn go_to(&mut self, page: usize) -> Result<(), String> {
        if page == 0 || page > self.total_pages() {
            return Err(format!(
                "Invalid page number. There are {} page(s)",
                self.total_pages()
            ));
        }
        self.current_page = page - 1;
        Ok(())
    }

    /// Move to next page
    pub fn next(&mut self) -> bool {
        if !self.is_last() {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Move to previous page
    pub fn previous(&mut self) -> bool {
        if self.current_page > 0 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// An empty list still has one (empty) page
    pub fn total_pages(&self) -> usize {
        self.items.len().div_ceil(self.page_size).max(1)
    }

    pub fn is_first(&self) -> bool {
        self.current_page == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_page + 1 >= self.total_pages()
    }

    /// Footer text such as `Page 1/2 (12 total)`
    pub fn footer(&self) -> String {
        format!(
            "Page {}/{} ({} total)",
            self.current_page + 1,
            self.total_pages(),
            self.items.len()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paging_through_items() {
        let mut page = Page::new((1..=25).collect::<Vec<_>>(), 10);
        assert_eq!(page.total_pages(), 3);
        assert!(page.is_first());
        assert_eq!(page.current(), &(1..=10).collect::<Vec<_>>()[..]);
        assert!(page.next());
        assert!(page.next());
        assert_eq!(page.current(), &[21, 22, 23, 24, 25]);
        assert!(page.is_last());
        assert!(!page.next());
        assert!(page.previous());
        assert_eq!(page.footer(), "Page 2/3 (25 total)");
    }

    #[test]
    fn test_go_to_bounds() {
        let mut page = Page::new(vec!['a', 'b', 'c'], 2);
        assert!(page.go_to(0).is_err());
        assert!(page.go_to(3).is_err());
        assert!(page.go_to(2).is_ok());
        assert_eq!(page.current(), &['c']);
    }

    #[test]
    fn test_empty_list_has_one_page() {
        let page: Page<u8> = Page::new(vec![], 10);
        assert_eq!(page.total_pages(), 1);
        assert!(page.current().is_empty());
        assert!(page.is_last());
    }
}
