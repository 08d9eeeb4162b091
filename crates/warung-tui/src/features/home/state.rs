//! Home screen browsing state.

use warung_core::catalog::{self, Product};

/// Search, category tab, and selection state for the home screen.
#[derive(Debug, Default)]
pub struct HomeState {
    /// Current search query; matches product names case-insensitively.
    pub query: String,
    /// Whether keystrokes go into the search field.
    pub search_active: bool,
    /// Selected category tab (0 = all).
    pub category_index: usize,
    /// Selected row within the visible products.
    pub selected: usize,
}

impl HomeState {
    /// Products matching the current query and category tab.
    pub fn visible_products(&self) -> Vec<&'static Product> {
        catalog::filter_products(&self.query, self.category_index)
    }

    pub fn selected_product(&self) -> Option<&'static Product> {
        self.visible_products().get(self.selected).copied()
    }

    pub fn select_next(&mut self) {
        let len = self.visible_products().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn next_category(&mut self) {
        if self.category_index + 1 < catalog::categories().len() {
            self.category_index += 1;
            self.selected = 0;
        }
    }

    pub fn prev_category(&mut self) {
        if self.category_index > 0 {
            self.category_index -= 1;
            self.selected = 0;
        }
    }

    /// Clamps the selection after the visible set shrank.
    pub fn clamp_selection(&mut self) {
        let len = self.visible_products().len();
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_stays_within_visible_products() {
        let mut home = HomeState::default();
        let count = home.visible_products().len();

        for _ in 0..count + 5 {
            home.select_next();
        }
        assert_eq!(home.selected, count - 1);

        home.select_prev();
        assert_eq!(home.selected, count - 2);
    }

    #[test]
    fn category_change_resets_selection() {
        let mut home = HomeState::default();
        home.select_next();
        home.next_category();
        assert_eq!(home.category_index, 1);
        assert_eq!(home.selected, 0);
    }

    #[test]
    fn category_index_saturates_at_the_ends() {
        let mut home = HomeState::default();
        home.prev_category();
        assert_eq!(home.category_index, 0);

        for _ in 0..20 {
            home.next_category();
        }
        assert_eq!(
            home.category_index,
            warung_core::catalog::categories().len() - 1
        );
    }

    #[test]
    fn narrowing_search_clamps_selection() {
        let mut home = HomeState::default();
        for _ in 0..5 {
            home.select_next();
        }

        home.query = "kaos".to_string();
        home.clamp_selection();
        assert_eq!(home.selected, 0);
        assert_eq!(home.selected_product().map(|p| p.name), Some("Kaos Kampus"));
    }

    #[test]
    fn empty_result_set_keeps_selection_at_zero() {
        let mut home = HomeState {
            query: "tidak ada".to_string(),
            ..Default::default()
        };
        home.clamp_selection();
        assert_eq!(home.selected, 0);
        assert_eq!(home.selected_product(), None);
    }
}
