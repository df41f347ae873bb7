//! Slice reducers and their composition into the root reducer.
//!
//! Each slice reducer owns exactly one field of [`ShopState`] and is scoped
//! onto it; the scoped reducers are then combined so that every slice
//! observes every dispatched action. The composition layer never inspects
//! slice contents, it only routes slices in and out.
//!
//! Slice evaluation order is an implementation detail. Slices must not rely
//! on it and have no cross-slice effects, so any order yields the same
//! composed state.

pub mod cart;
pub mod catalog;
pub mod wishlist;

pub use cart::CartReducer;
pub use catalog::CatalogReducer;
pub use wishlist::WishlistReducer;

use crate::actions::ShopAction;
use crate::state::ShopState;
use shopfront_core::{combine_reducers, scope_reducer, CombinedReducer};

/// The root reducer type over the composed shop state
pub type RootReducer = CombinedReducer<ShopState, ShopAction>;

/// Builds the root reducer: catalog, cart, and wishlist scoped and combined
#[must_use]
pub fn root_reducer() -> RootReducer {
    combine_reducers(vec![
        Box::new(scope_reducer(
            CatalogReducer,
            |state: &ShopState| &state.catalog,
            |state, catalog| state.catalog = catalog,
        )),
        Box::new(scope_reducer(
            CartReducer,
            |state: &ShopState| &state.cart_items,
            |state, cart_items| state.cart_items = cart_items,
        )),
        Box::new(scope_reducer(
            WishlistReducer,
            |state: &ShopState| &state.wish_list,
            |state, wish_list| state.wish_list = wish_list,
        )),
    ])
}
