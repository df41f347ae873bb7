//! Shop actions and their wire format.
//!
//! Actions exist in two representations:
//!
//! - [`ShopAction`]: the closed, typed enum that reducers match on. Being a
//!   sum type, every reducer arm is exhaustiveness-checked; actions owned by
//!   other slices are handled by an explicit pass-through arm.
//! - [`ActionEnvelope`]: the stable `{kind, payload}` wire record used by
//!   whatever transport delivers actions. Decoding validates the payload
//!   shape up front, so a malformed action is rejected before any slice
//!   observes it.
//!
//! Unknown kinds are not errors: they decode to `None` and the dispatch is
//! simply skipped (identity no-op).

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Wire kind for adding a cart line
pub const CART_ADD_ITEM: &str = "cart/addItem";
/// Wire kind for removing all cart lines of a product
pub const CART_REMOVE_ITEM: &str = "cart/removeItem";
/// Wire kind for increasing the quantity of a product's cart lines
pub const CART_INCREASE_ITEM: &str = "cart/increaseItem";
/// Wire kind for adding a wishlist entry
pub const WISH_ADD_ITEM: &str = "wish/addItem";
/// Wire kind for removing all wishlist entries of a product
pub const WISH_REMOVE_ITEM: &str = "wish/removeItem";

/// All actions the shop understands
///
/// The set is closed: each slice reducer matches the variants it owns and
/// passes every other variant through untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ShopAction {
    /// Append a line to the cart (no dedup; duplicates are legitimate)
    CartAddItem {
        /// Product to add
        product_id: u64,
        /// Units on the new line
        quantity: u32,
    },
    /// Remove every cart line for a product
    CartRemoveItem {
        /// Product to remove
        product_id: u64,
    },
    /// Increase the quantity on every cart line for a product
    CartIncreaseItem {
        /// Product whose lines grow
        product_id: u64,
        /// Amount added to each matching line
        increment: u32,
    },
    /// Append a wishlist entry (no dedup; duplicates are legitimate)
    WishAddItem {
        /// Product being wished for
        product_id: u64,
        /// Optional quantity carried on the wire, unused by wishlist logic
        quantity: Option<u32>,
    },
    /// Remove every wishlist entry for a product
    WishRemoveItem {
        /// Product to remove
        product_id: u64,
    },
}

impl ShopAction {
    /// The stable wire kind for this action
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::CartAddItem { .. } => CART_ADD_ITEM,
            Self::CartRemoveItem { .. } => CART_REMOVE_ITEM,
            Self::CartIncreaseItem { .. } => CART_INCREASE_ITEM,
            Self::WishAddItem { .. } => WISH_ADD_ITEM,
            Self::WishRemoveItem { .. } => WISH_REMOVE_ITEM,
        }
    }

    /// Encodes this action as a wire envelope
    #[must_use]
    pub fn envelope(&self) -> ActionEnvelope {
        use serde_json::json;

        let (kind, payload) = match *self {
            Self::CartAddItem {
                product_id,
                quantity,
            } => (
                CART_ADD_ITEM,
                json!({ "productId": product_id, "quantity": quantity }),
            ),
            Self::CartRemoveItem { product_id } => {
                (CART_REMOVE_ITEM, json!({ "productId": product_id }))
            }
            Self::CartIncreaseItem {
                product_id,
                increment,
            } => (
                CART_INCREASE_ITEM,
                json!({ "productId": product_id, "increment": increment }),
            ),
            Self::WishAddItem {
                product_id,
                quantity,
            } => {
                let mut payload = json!({ "productId": product_id });
                if let Some(quantity) = quantity {
                    payload["quantity"] = json!(quantity);
                }
                (WISH_ADD_ITEM, payload)
            }
            Self::WishRemoveItem { product_id } => {
                (WISH_REMOVE_ITEM, json!({ "productId": product_id }))
            }
        };

        ActionEnvelope {
            kind: kind.to_string(),
            payload,
        }
    }
}

/// The `{kind, payload}` wire record for actions
///
/// `kind` is one of the `cart/*` / `wish/*` constants; `payload` is a JSON
/// mapping whose required fields depend on the kind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ActionEnvelope {
    /// Action kind constant
    pub kind: String,
    /// Kind-specific payload mapping
    #[serde(default)]
    pub payload: serde_json::Value,
}

/// Failure to decode a known action kind's payload
///
/// This is the single defined input failure mode: the kind is recognized
/// but the payload is missing a required field or carries a field of the
/// wrong type. The dispatch carrying this envelope must be rejected before
/// any slice observes it.
#[derive(Error, Debug)]
pub enum PayloadError {
    /// Payload did not match the shape required by the kind
    #[error("malformed payload for `{kind}`: {source}")]
    Malformed {
        /// The recognized action kind
        kind: &'static str,
        /// Underlying deserialization failure
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartAddPayload {
    product_id: u64,
    quantity: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct CartIncreasePayload {
    product_id: u64,
    increment: u32,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct WishAddPayload {
    product_id: u64,
    quantity: Option<u32>,
}

// Remove payloads only need the product id; extra fields (some clients echo
// a quantity) are ignored.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ProductIdPayload {
    product_id: u64,
}

fn payload<T>(kind: &'static str, value: &serde_json::Value) -> Result<T, PayloadError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_value(value.clone()).map_err(|source| PayloadError::Malformed { kind, source })
}

impl ActionEnvelope {
    /// Creates an envelope from a kind and payload
    #[must_use]
    pub fn new(kind: impl Into<String>, payload: serde_json::Value) -> Self {
        Self {
            kind: kind.into(),
            payload,
        }
    }

    /// Decodes the envelope into a typed action
    ///
    /// Returns `Ok(None)` for unknown kinds: those are identity no-ops by
    /// contract, not errors, and the caller skips the dispatch entirely.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::Malformed`] if the kind is recognized but
    /// the payload is missing a required field or a field has the wrong
    /// type.
    pub fn decode(&self) -> Result<Option<ShopAction>, PayloadError> {
        let action = match self.kind.as_str() {
            CART_ADD_ITEM => {
                let p: CartAddPayload = payload(CART_ADD_ITEM, &self.payload)?;
                ShopAction::CartAddItem {
                    product_id: p.product_id,
                    quantity: p.quantity,
                }
            }
            CART_REMOVE_ITEM => {
                let p: ProductIdPayload = payload(CART_REMOVE_ITEM, &self.payload)?;
                ShopAction::CartRemoveItem {
                    product_id: p.product_id,
                }
            }
            CART_INCREASE_ITEM => {
                let p: CartIncreasePayload = payload(CART_INCREASE_ITEM, &self.payload)?;
                ShopAction::CartIncreaseItem {
                    product_id: p.product_id,
                    increment: p.increment,
                }
            }
            WISH_ADD_ITEM => {
                let p: WishAddPayload = payload(WISH_ADD_ITEM, &self.payload)?;
                ShopAction::WishAddItem {
                    product_id: p.product_id,
                    quantity: p.quantity,
                }
            }
            WISH_REMOVE_ITEM => {
                let p: ProductIdPayload = payload(WISH_REMOVE_ITEM, &self.payload)?;
                ShopAction::WishRemoveItem {
                    product_id: p.product_id,
                }
            }
            other => {
                tracing::debug!(kind = other, "unknown action kind, ignoring");
                return Ok(None);
            }
        };

        Ok(Some(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn decode_cart_add() {
        let envelope = ActionEnvelope::new(
            CART_ADD_ITEM,
            json!({ "productId": 1, "quantity": 1 }),
        );

        let action = envelope.decode().expect("well-formed").expect("known kind");
        assert_eq!(
            action,
            ShopAction::CartAddItem {
                product_id: 1,
                quantity: 1
            }
        );
    }

    #[test]
    fn decode_unknown_kind_is_noop_not_error() {
        let envelope = ActionEnvelope::new("cart/clear", json!({}));
        assert!(envelope.decode().expect("not an error").is_none());
    }

    #[test]
    fn decode_missing_field_is_rejected() {
        let envelope = ActionEnvelope::new(CART_ADD_ITEM, json!({ "productId": 1 }));

        let err = envelope.decode().expect_err("quantity is required");
        let PayloadError::Malformed { kind, .. } = err;
        assert_eq!(kind, CART_ADD_ITEM);
    }

    #[test]
    fn decode_ill_typed_field_is_rejected() {
        let envelope = ActionEnvelope::new(
            CART_INCREASE_ITEM,
            json!({ "productId": 12, "increment": "ten" }),
        );

        assert!(envelope.decode().is_err());
    }

    #[test]
    fn wish_remove_ignores_extra_quantity_field() {
        // The reference walkthrough sends a quantity alongside the remove;
        // it is irrelevant to identity and simply ignored.
        let envelope = ActionEnvelope::new(
            WISH_REMOVE_ITEM,
            json!({ "productId": 12, "quantity": 1 }),
        );

        let action = envelope.decode().expect("well-formed").expect("known kind");
        assert_eq!(action, ShopAction::WishRemoveItem { product_id: 12 });
    }

    #[test]
    fn envelope_round_trip() {
        let action = ShopAction::WishAddItem {
            product_id: 12,
            quantity: Some(1),
        };

        let envelope = action.envelope();
        assert_eq!(envelope.kind, WISH_ADD_ITEM);
        assert_eq!(envelope.decode().expect("well-formed"), Some(action));
    }

    #[test]
    fn wish_add_omits_absent_quantity() {
        let envelope = ShopAction::WishAddItem {
            product_id: 11,
            quantity: None,
        }
        .envelope();

        assert_eq!(envelope.payload, json!({ "productId": 11 }));
    }
}
