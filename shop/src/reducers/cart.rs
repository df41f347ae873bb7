//! Cart slice reducer.

use crate::actions::ShopAction;
use crate::state::CartLineItem;
use shopfront_core::Reducer;

/// Reducer owning the cart slice
///
/// Cart semantics:
/// - add appends a new line without dedup
/// - remove drops every line for the product
/// - increase grows every matching line and leaves all other lines
///   untouched
#[derive(Clone, Copy, Debug, Default)]
pub struct CartReducer;

impl Reducer for CartReducer {
    type State = Vec<CartLineItem>;
    type Action = ShopAction;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        match action {
            ShopAction::CartAddItem {
                product_id,
                quantity,
            } => {
                // No dedup on add: the same product may appear on several
                // lines.
                state.push(CartLineItem {
                    product_id,
                    quantity,
                });
            }
            ShopAction::CartRemoveItem { product_id } => {
                // Removes every line for the product, not just the first.
                state.retain(|line| line.product_id != product_id);
            }
            ShopAction::CartIncreaseItem {
                product_id,
                increment,
            } => {
                // Non-matching lines pass through unchanged.
                for line in state.iter_mut() {
                    if line.product_id == product_id {
                        line.quantity = line.quantity.saturating_add(increment);
                    }
                }
            }
            // Actions owned by other slices pass through.
            ShopAction::WishAddItem { .. } | ShopAction::WishRemoveItem { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shopfront_testing::ReducerTest;

    fn line(product_id: u64, quantity: u32) -> CartLineItem {
        CartLineItem {
            product_id,
            quantity,
        }
    }

    #[test]
    fn add_appends_to_empty_cart() {
        ReducerTest::new(CartReducer)
            .given_state(vec![])
            .when_action(ShopAction::CartAddItem {
                product_id: 1,
                quantity: 1,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 1)]);
            })
            .run();
    }

    #[test]
    fn add_does_not_dedup() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1)])
            .when_action(ShopAction::CartAddItem {
                product_id: 1,
                quantity: 2,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 1), line(1, 2)]);
            })
            .run();
    }

    #[test]
    fn remove_filters_matching_lines() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1), line(2, 1)])
            .when_action(ShopAction::CartRemoveItem { product_id: 1 })
            .then_state(|state| {
                assert_eq!(state, &vec![line(2, 1)]);
            })
            .run();
    }

    #[test]
    fn remove_without_match_keeps_cart_equal() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1)])
            .when_action(ShopAction::CartRemoveItem { product_id: 9 })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 1)]);
            })
            .run();
    }

    #[test]
    fn increase_leaves_other_lines_untouched() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1), line(2, 1)])
            .when_action(ShopAction::CartIncreaseItem {
                product_id: 2,
                increment: 10,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 1), line(2, 11)]);
            })
            .run();
    }

    #[test]
    fn increase_applies_to_every_matching_line() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1), line(1, 3)])
            .when_action(ShopAction::CartIncreaseItem {
                product_id: 1,
                increment: 2,
            })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 3), line(1, 5)]);
            })
            .run();
    }

    #[test]
    fn wishlist_actions_are_identity_for_cart() {
        ReducerTest::new(CartReducer)
            .given_state(vec![line(1, 1)])
            .when_action(ShopAction::WishAddItem {
                product_id: 1,
                quantity: None,
            })
            .when_action(ShopAction::WishRemoveItem { product_id: 1 })
            .then_state(|state| {
                assert_eq!(state, &vec![line(1, 1)]);
            })
            .run();
    }
}
