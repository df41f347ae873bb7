//! Wishlist slice reducer.

use crate::actions::ShopAction;
use crate::state::WishlistEntry;
use shopfront_core::Reducer;

/// Reducer owning the wishlist slice
///
/// Wishlist semantics:
/// - add appends the entry verbatim without dedup (adding the same product
///   twice yields two entries)
/// - remove drops every entry for the product
#[derive(Clone, Copy, Debug, Default)]
pub struct WishlistReducer;

impl Reducer for WishlistReducer {
    type State = Vec<WishlistEntry>;
    type Action = ShopAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            ShopAction::WishAddItem {
                product_id,
                quantity,
            } => {
                // The quantity is carried through verbatim but never
                // consulted.
                state.push(WishlistEntry {
                    product_id,
                    quantity,
                });
            }
            ShopAction::WishRemoveItem { product_id } => {
                // Removes all occurrences, not just one.
                state.retain(|entry| entry.product_id != product_id);
            }
            // Actions owned by other slices pass through.
            ShopAction::CartAddItem { .. }
            | ShopAction::CartRemoveItem { .. }
            | ShopAction::CartIncreaseItem { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_testing::ReducerTest;

    fn entry(product_id: u64) -> WishlistEntry {
        WishlistEntry {
            product_id,
            quantity: None,
        }
    }

    #[test]
    fn duplicate_add_yields_two_entries() {
        ReducerTest::new(WishlistReducer)
            .given_state(vec![])
            .when_action(ShopAction::WishAddItem {
                product_id: 12,
                quantity: None,
            })
            .when_action(ShopAction::WishAddItem {
                product_id: 12,
                quantity: None,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![entry(12), entry(12)]);
            })
            .run();
    }

    #[test]
    fn remove_drops_all_matches() {
        ReducerTest::new(WishlistReducer)
            .given_state(vec![entry(12), entry(12), entry(11)])
            .when_action(ShopAction::WishRemoveItem { product_id: 12 })
            .then_state(|state| {
                assert_eq!(state, &vec![entry(11)]);
            })
            .run();
    }

    #[test]
    fn cart_actions_are_identity_for_wishlist() {
        ReducerTest::new(WishlistReducer)
            .given_state(vec![entry(11)])
            .when_action(ShopAction::CartAddItem {
                product_id: 11,
                quantity: 1,
            })
            .when_action(ShopAction::CartRemoveItem { product_id: 11 })
            .when_action(ShopAction::CartIncreaseItem {
                product_id: 11,
                increment: 5,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![entry(11)]);
            })
            .run();
    }
}
