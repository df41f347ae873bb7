//! # Shopfront Core
//!
//! Core traits and types for the Shopfront state store.
//!
//! This crate provides the fundamental abstractions for building a
//! multi-slice, synchronous state store in the reducer style.
//!
//! ## Core Concepts
//!
//! - **State**: owned domain data for one slice or for the whole store
//! - **Action**: all possible inputs to a reducer
//! - **Reducer**: pure function `(State, Action) → State`
//! - **Composition**: scoping a reducer onto one slice of a larger state,
//!   and combining several scoped reducers into one root reducer
//!
//! ## Architecture Principles
//!
//! - Unidirectional data flow
//! - Reducers are total over the action space (unknown actions are identity)
//! - No I/O, no suspension, no hidden side effects inside reducers
//!
//! ## Example
//!
//! ```
//! use shopfront_core::Reducer;
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//!     Reset,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
//!         match action {
//!             CounterAction::Increment => state.count += 1,
//!             CounterAction::Reset => state.count = 0,
//!         }
//!     }
//! }
//! ```

pub mod composition;

pub use composition::{combine_reducers, scope_reducer, CombinedReducer, ScopedReducer};
pub use reducer::Reducer;

/// Reducer module - The core trait for state transitions
///
/// Reducers are pure functions: `(State, Action) → State`, expressed here as
/// an in-place update of an owned state value. The caller (the store runtime)
/// is responsible for cloning the previous state first, so a reducer mutating
/// its argument still yields wholesale structural replacement at the store
/// level.
pub mod reducer {
    /// The Reducer trait - core abstraction for state transitions
    ///
    /// # Contract
    ///
    /// - **Pure**: no I/O, no clocks, no randomness, no dispatching.
    /// - **Total**: every action value must be handled; actions the reducer
    ///   does not recognize leave the state untouched (identity).
    /// - **Infallible**: reducers never panic or error for well-formed
    ///   actions. Input validation belongs to the layer that constructs
    ///   actions, not to reducers.
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for CartReducer {
    ///     type State = Vec<CartLineItem>;
    ///     type Action = ShopAction;
    ///
    ///     fn reduce(&self, state: &mut Self::State, action: Self::Action) {
    ///         match action {
    ///             ShopAction::CartAddItem { product_id, quantity } => {
    ///                 state.push(CartLineItem { product_id, quantity });
    ///             }
    ///             // Actions owned by other slices pass through.
    ///             _ => {}
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Apply an action to the state
        ///
        /// Mutates `state` in place. The store runtime always hands a
        /// reducer a fresh clone of the previous state, so in-place
        /// mutation here still produces a brand-new state value per
        /// dispatch from the caller's point of view.
        fn reduce(&self, state: &mut Self::State, action: Self::Action);
    }
}
