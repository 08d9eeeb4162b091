//! Cross-slice state mutations.
//!
//! Feature reducers return these to request changes outside their own slice,
//! chiefly navigation. The main reducer applies them in order.

/// Mutations for cross-slice state changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateMutation {
    /// Switch to another screen.
    Navigate(NavTarget),
}

/// Navigation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Login,
    Register,
    Home,
    Detail { product_id: u32 },
}
