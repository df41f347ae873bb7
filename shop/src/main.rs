//! Shop walkthrough binary
//!
//! Drives the composed store through the reference dispatch sequence over
//! the wire envelope format, printing the cart and wishlist slices after
//! each step.

use shopfront_shop::{
    apply_envelope, store_with_catalog, ActionEnvelope, CatalogState, Product, ShopAction,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn catalog() -> CatalogState {
    CatalogState::with_products(vec![
        Product {
            product_id: 1,
            name: "Espresso Cup".to_string(),
            price_cents: 899,
        },
        Product {
            product_id: 11,
            name: "French Press".to_string(),
            price_cents: 3499,
        },
        Product {
            product_id: 12,
            name: "Hand Grinder".to_string(),
            price_cents: 5999,
        },
    ])
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shop=debug,shopfront_runtime=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("=== Shopfront: multi-slice reducer store ===\n");

    let store = store_with_catalog(catalog());
    let _subscription = store.subscribe(|state| {
        tracing::debug!(
            cart_lines = state.cart_items.len(),
            wishlist_entries = state.wish_list.len(),
            "subscriber notified"
        );
    });

    let script = [
        ShopAction::CartAddItem {
            product_id: 1,
            quantity: 1,
        },
        ShopAction::CartAddItem {
            product_id: 11,
            quantity: 1,
        },
        ShopAction::CartAddItem {
            product_id: 12,
            quantity: 1,
        },
        ShopAction::CartRemoveItem { product_id: 11 },
        ShopAction::CartIncreaseItem {
            product_id: 12,
            increment: 10,
        },
        ShopAction::WishAddItem {
            product_id: 11,
            quantity: None,
        },
        ShopAction::WishAddItem {
            product_id: 12,
            quantity: Some(1),
        },
        ShopAction::WishAddItem {
            product_id: 12,
            quantity: Some(1),
        },
        ShopAction::WishRemoveItem { product_id: 12 },
    ];

    for action in script {
        let envelope = action.envelope();
        println!(">>> dispatch {}", serde_json::to_string(&envelope)?);
        apply_envelope(&store, &envelope)?;

        let state = store.state();
        println!("    cart:     {:?}", state.cart_items);
        println!("    wishlist: {:?}\n", state.wish_list);
    }

    // Unknown kinds are identity no-ops, not errors.
    let unknown = ActionEnvelope::new("cart/clear", serde_json::json!({}));
    println!(">>> dispatch {}", serde_json::to_string(&unknown)?);
    let applied = apply_envelope(&store, &unknown)?;
    println!("    applied: {applied} (unknown kind is a no-op)\n");

    let state = store.state();
    println!("=== Final state ===");
    println!("catalog:  {} products", state.catalog.len());
    println!("cart:     {:?}", state.cart_items);
    println!("wishlist: {:?}", state.wish_list);

    Ok(())
}
