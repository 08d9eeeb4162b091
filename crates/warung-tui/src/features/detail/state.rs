//! Product detail state.

/// State for the product detail screen.
///
/// The favorite flag is per-visit; the catalog has no persistence for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailState {
    pub product_id: u32,
    pub favorite: bool,
}

impl DetailState {
    pub fn new(product_id: u32) -> Self {
        Self {
            product_id,
            favorite: false,
        }
    }

    pub fn toggle_favorite(&mut self) {
        self.favorite = !self.favorite;
    }
}
