//! Domain types for the composed shop state.
//!
//! The composed state is rebuilt wholesale on every dispatch; each slice is
//! owned and mutated exclusively by its own reducer. Consumers receive state
//! snapshots and must treat them as immutable.

use serde::{Deserialize, Serialize};

/// One line in the shopping cart
///
/// Identity within the cart is by `product_id`, but uniqueness is not
/// enforced on add: the same product may legitimately appear on several
/// lines.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineItem {
    /// Product this line refers to
    pub product_id: u64,
    /// Number of units on this line
    pub quantity: u32,
}

/// One wishlist entry
///
/// Identity is by `product_id` alone. A quantity may be carried on the wire
/// (some clients send one) but plays no role in wishlist semantics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WishlistEntry {
    /// Product being wished for
    pub product_id: u64,
    /// Optional quantity, preserved verbatim but ignored for identity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

/// A product in the catalog
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Stable product identifier
    pub product_id: u64,
    /// Display name
    pub name: String,
    /// Unit price in cents
    pub price_cents: u64,
}

/// The product catalog slice
///
/// Read-only: seeded once at store construction. No catalog actions exist;
/// the slice participates in composition so that every reducer observes
/// every action, and its reducer is pure identity.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogState {
    /// All known products
    pub products: Vec<Product>,
}

impl CatalogState {
    /// Creates a catalog from a list of products
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        Self { products }
    }

    /// Looks up a product by id
    #[must_use]
    pub fn get(&self, product_id: u64) -> Option<&Product> {
        self.products.iter().find(|p| p.product_id == product_id)
    }

    /// Number of products in the catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

/// The composed shop state: catalog, cart, and wishlist slices
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopState {
    /// Product catalog slice
    pub catalog: CatalogState,
    /// Shopping cart slice (ordered; duplicates permitted)
    pub cart_items: Vec<CartLineItem>,
    /// Wishlist slice (ordered; duplicates permitted)
    pub wish_list: Vec<WishlistEntry>,
}

impl ShopState {
    /// Creates an empty shop state seeded with the given catalog
    #[must_use]
    pub fn with_catalog(catalog: CatalogState) -> Self {
        Self {
            catalog,
            cart_items: Vec::new(),
            wish_list: Vec::new(),
        }
    }

    /// Total quantity of a product across all cart lines
    #[must_use]
    pub fn cart_quantity(&self, product_id: u64) -> u32 {
        self.cart_items
            .iter()
            .filter(|line| line.product_id == product_id)
            .map(|line| line.quantity)
            .sum()
    }

    /// Whether the wishlist contains at least one entry for the product
    #[must_use]
    pub fn is_wished(&self, product_id: u64) -> bool {
        self.wish_list
            .iter()
            .any(|entry| entry.product_id == product_id)
    }
}
