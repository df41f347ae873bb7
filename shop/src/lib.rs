//! # Shopfront Shop
//!
//! The shop domain for the Shopfront store: a composed state with three
//! slices (product catalog, shopping cart, wishlist), the typed actions
//! that drive it, and the store initializers.
//!
//! ## Lifecycle
//!
//! There is no global store. Construct one explicitly with [`store`] (empty
//! catalog) or [`store_with_catalog`] and thread it through an owning
//! context; every store starts from the default state of each slice.
//!
//! ## Example
//!
//! ```
//! use shopfront_shop::{store, ShopAction};
//!
//! let store = store();
//! store.dispatch(ShopAction::CartAddItem {
//!     product_id: 1,
//!     quantity: 1,
//! })?;
//!
//! let state = store.state();
//! assert_eq!(state.cart_quantity(1), 1);
//! # Ok::<(), shopfront_runtime::error::StoreError>(())
//! ```

pub mod actions;
pub mod reducers;
pub mod state;

pub use actions::{ActionEnvelope, PayloadError, ShopAction};
pub use reducers::{root_reducer, RootReducer};
pub use state::{CartLineItem, CatalogState, Product, ShopState, WishlistEntry};

use shopfront_runtime::error::StoreError;
use shopfront_runtime::Store;
use thiserror::Error;

/// The concrete store type for the shop domain
pub type ShopStore = Store<ShopState, ShopAction, RootReducer>;

/// Builds a shop store with an empty catalog
#[must_use]
pub fn store() -> ShopStore {
    store_with_catalog(CatalogState::default())
}

/// Builds a shop store seeded with the given catalog
#[must_use]
pub fn store_with_catalog(catalog: CatalogState) -> ShopStore {
    Store::new(ShopState::with_catalog(catalog), root_reducer())
}

/// Failure to apply a wire envelope to the store
#[derive(Error, Debug)]
pub enum ApplyError {
    /// The envelope's payload did not match its kind's required shape
    #[error(transparent)]
    Payload(#[from] PayloadError),
    /// The store rejected the dispatch
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Decodes a wire envelope and dispatches it
///
/// Returns `Ok(true)` if an action was dispatched and `Ok(false)` if the
/// envelope named an unknown kind (identity no-op: nothing is dispatched
/// and the state pointer does not change).
///
/// Validation happens before dispatch: a malformed payload is rejected
/// while no slice has observed the action, so a failed apply never leaves
/// a partially updated state behind.
///
/// # Errors
///
/// - [`ApplyError::Payload`] if the payload is malformed for a known kind
/// - [`ApplyError::Store`] if a dispatch is already in flight
pub fn apply_envelope(store: &ShopStore, envelope: &ActionEnvelope) -> Result<bool, ApplyError> {
    match envelope.decode()? {
        Some(action) => {
            store.dispatch(action)?;
            Ok(true)
        }
        None => Ok(false),
    }
}
