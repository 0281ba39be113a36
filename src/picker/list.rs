//! Filterable, paginated list of context entries

use crate::context::Context;

/// A context as shown in the list
#[derive(Debug, Clone)]
pub struct Entry {
    context: Context,
}

impl Entry {
    pub fn new(context: Context) -> Self {
        Self { context }
    }

    /// Text shown for the entry and matched by the filter
    pub fn title(&self) -> &str {
        &self.context.name
    }

    /// Whether kubectl reported this context as the active one
    pub fn is_active(&self) -> bool {
        self.context.selected
    }

    fn matches(&self, needle: &str) -> bool {
        self.title().to_lowercase().contains(needle)
    }
}

/// Where the filter stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterState {
    Unfiltered,
    /// The user is typing a query
    Filtering,
    /// A query narrows the list but is no longer being edited
    Applied,
}

/// Entries plus cursor, filter and page bookkeeping
#[derive(Debug, Clone)]
pub struct EntryList {
    entries: Vec<Entry>,
    /// Indices into `entries` that pass the filter, in original order
    visible: Vec<usize>,
    /// Position within `visible`
    cursor: usize,
    per_page: usize,
    query: String,
    filter_state: FilterState,
}

impl EntryList {
    pub fn new(contexts: Vec<Context>, per_page: usize) -> Self {
        let entries: Vec<Entry> = contexts.into_iter().map(Entry::new).collect();
        let visible = (0..entries.len()).collect();
        Self {
            entries,
            visible,
            cursor: 0,
            per_page: per_page.max(1),
            query: String::new(),
            filter_state: FilterState::Unfiltered,
        }
    }

    pub fn total_len(&self) -> usize {
        self.entries.len()
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The entry under the cursor, if any entry is visible
    pub fn highlighted(&self) -> Option<&Entry> {
        self.visible.get(self.cursor).map(|&i| &self.entries[i])
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn filter_state(&self) -> FilterState {
        self.filter_state
    }

    pub fn is_filtered(&self) -> bool {
        self.filter_state != FilterState::Unfiltered
    }

    // --- Navigation ---

    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.visible.len() {
            self.cursor += 1;
        }
    }

    pub fn prev_page(&mut self) {
        if self.page() > 0 {
            self.cursor = (self.page() - 1) * self.per_page;
        }
    }

    pub fn next_page(&mut self) {
        if self.page() + 1 < self.total_pages() {
            self.cursor = (self.page() + 1) * self.per_page;
        }
    }

    pub fn go_to_start(&mut self) {
        self.cursor = 0;
    }

    pub fn go_to_end(&mut self) {
        self.cursor = self.visible.len().saturating_sub(1);
    }

    // --- Pagination ---

    /// Zero-based page holding the cursor
    pub fn page(&self) -> usize {
        self.cursor / self.per_page
    }

    pub fn total_pages(&self) -> usize {
        self.visible.len().div_ceil(self.per_page).max(1)
    }

    /// Visible entries on the current page, paired with their position in
    /// the visible list
    pub fn page_entries(&self) -> impl Iterator<Item = (usize, &Entry)> {
        let start = self.page() * self.per_page;
        self.visible
            .iter()
            .enumerate()
            .skip(start)
            .take(self.per_page)
            .map(move |(pos, &i)| (pos, &self.entries[i]))
    }

    // --- Filtering ---

    pub fn start_filtering(&mut self) {
        self.filter_state = FilterState::Filtering;
        self.refilter();
    }

    pub fn push_filter_char(&mut self, c: char) {
        self.query.push(c);
        self.refilter();
    }

    pub fn pop_filter_char(&mut self) {
        self.query.pop();
        self.refilter();
    }

    /// Stop editing; an empty query drops the filter altogether
    pub fn accept_filter(&mut self) {
        if self.query.is_empty() {
            self.clear_filter();
        } else {
            self.filter_state = FilterState::Applied;
        }
    }

    pub fn clear_filter(&mut self) {
        self.query.clear();
        self.filter_state = FilterState::Unfiltered;
        self.refilter();
    }

    fn refilter(&mut self) {
        let needle = self.query.to_lowercase();
        self.visible = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, entry)| needle.is_empty() || entry.matches(&needle))
            .map(|(i, _)| i)
            .collect();
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(name: &str) -> Context {
        Context {
            name: name.to_string(),
            ..Context::default()
        }
    }

    fn list(names: &[&str], per_page: usize) -> EntryList {
        EntryList::new(names.iter().map(|n| ctx(n)).collect(), per_page)
    }

    fn visible_titles(list: &EntryList) -> Vec<String> {
        list.page_entries()
            .map(|(_, e)| e.title().to_string())
            .collect()
    }

    #[test]
    fn test_cursor_stays_in_bounds() {
        let mut l = list(&["a", "b"], 5);
        l.cursor_up();
        assert_eq!(l.cursor(), 0);
        l.cursor_down();
        l.cursor_down();
        assert_eq!(l.cursor(), 1);
        assert_eq!(l.highlighted().map(Entry::title), Some("b"));
    }

    #[test]
    fn test_pagination() {
        let mut l = list(&["a", "b", "c", "d", "e"], 2);
        assert_eq!(l.total_pages(), 3);
        assert_eq!(visible_titles(&l), vec!["a", "b"]);

        l.next_page();
        assert_eq!(l.page(), 1);
        assert_eq!(l.highlighted().map(Entry::title), Some("c"));

        l.go_to_end();
        assert_eq!(l.page(), 2);
        assert_eq!(visible_titles(&l), vec!["e"]);
        l.next_page();
        assert_eq!(l.page(), 2);

        l.prev_page();
        assert_eq!(l.cursor(), 2);
        l.go_to_start();
        l.prev_page();
        assert_eq!(l.cursor(), 0);
    }

    #[test]
    fn test_filter_narrows_by_substring_ignoring_case() {
        let mut l = list(&["prod-eu", "dev", "Prod-us", "staging"], 10);
        l.start_filtering();
        for c in "prod".chars() {
            l.push_filter_char(c);
        }
        assert_eq!(visible_titles(&l), vec!["prod-eu", "Prod-us"]);
        assert_eq!(l.total_len(), 4);

        l.pop_filter_char();
        l.pop_filter_char();
        l.pop_filter_char();
        l.pop_filter_char();
        assert_eq!(l.visible_len(), 4);
    }

    #[test]
    fn test_filter_resets_cursor_and_handles_no_match() {
        let mut l = list(&["a", "b", "c"], 10);
        l.go_to_end();
        l.start_filtering();
        l.push_filter_char('z');
        assert_eq!(l.visible_len(), 0);
        assert!(l.highlighted().is_none());
        assert_eq!(l.total_pages(), 1);

        l.pop_filter_char();
        assert_eq!(l.cursor(), 0);
        assert_eq!(l.highlighted().map(Entry::title), Some("a"));
    }

    #[test]
    fn test_accept_and_clear_filter() {
        let mut l = list(&["alpha", "beta"], 10);
        l.start_filtering();
        l.accept_filter();
        assert_eq!(l.filter_state(), FilterState::Unfiltered);

        l.start_filtering();
        l.push_filter_char('b');
        l.accept_filter();
        assert_eq!(l.filter_state(), FilterState::Applied);
        assert_eq!(l.visible_len(), 1);

        l.clear_filter();
        assert!(!l.is_filtered());
        assert_eq!(l.visible_len(), 2);
        assert_eq!(l.query(), "");
    }
}
