//! Reducer composition utilities
//!
//! This module provides the two building blocks of a multi-slice store:
//! - **`scope_reducer`**: focus a slice reducer on one field of a larger state
//! - **`combine_reducers`**: run several reducers over the same state/action
//!
//! A root reducer for a composed state is normally built by scoping each
//! slice reducer onto its slice and then combining the scoped reducers.
//! Every reducer in the combination observes every dispatched action; each
//! slice is solely responsible for ignoring actions it does not recognize.
//!
//! # Examples
//!
//! ```
//! use shopfront_core::{combine_reducers, scope_reducer, Reducer};
//!
//! #[derive(Clone, Default)]
//! struct AppState {
//!     count: i32,
//!     name: String,
//! }
//!
//! #[derive(Clone)]
//! enum AppAction {
//!     Increment,
//!     SetName(String),
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = i32;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &mut i32, action: AppAction) {
//!         if matches!(action, AppAction::Increment) {
//!             *state += 1;
//!         }
//!     }
//! }
//!
//! struct NameReducer;
//!
//! impl Reducer for NameReducer {
//!     type State = String;
//!     type Action = AppAction;
//!
//!     fn reduce(&self, state: &mut String, action: AppAction) {
//!         if let AppAction::SetName(name) = action {
//!             *state = name;
//!         }
//!     }
//! }
//!
//! let root = combine_reducers(vec![
//!     Box::new(scope_reducer(
//!         CounterReducer,
//!         |s: &AppState| &s.count,
//!         |s, count| s.count = count,
//!     )),
//!     Box::new(scope_reducer(
//!         NameReducer,
//!         |s: &AppState| &s.name,
//!         |s, name| s.name = name,
//!     )),
//! ]);
//!
//! let mut state = AppState::default();
//! root.reduce(&mut state, AppAction::Increment);
//! assert_eq!(state.count, 1);
//! ```

use crate::reducer::Reducer;

/// A boxed reducer suitable for combination.
pub type BoxedReducer<S, A> = Box<dyn Reducer<State = S, Action = A> + Send + Sync>;

/// Combines multiple reducers that operate on the same state and action types.
///
/// Each reducer runs in sequence over the same state, receiving its own clone
/// of the action. The order of evaluation is an implementation detail:
/// reducers combined here must not depend on it, which in a sliced store is
/// guaranteed by each scoped reducer touching only its own slice.
///
/// # Examples
///
/// ```
/// use shopfront_core::{combine_reducers, Reducer};
///
/// #[derive(Clone, Default)]
/// struct State {
///     counter: i32,
///     logged: bool,
/// }
///
/// #[derive(Clone)]
/// enum Action {
///     Increment,
///     Log,
/// }
///
/// struct CounterReducer;
/// struct LoggingReducer;
///
/// impl Reducer for CounterReducer {
///     type State = State;
///     type Action = Action;
///
///     fn reduce(&self, state: &mut State, action: Action) {
///         if matches!(action, Action::Increment) {
///             state.counter += 1;
///         }
///     }
/// }
///
/// impl Reducer for LoggingReducer {
///     type State = State;
///     type Action = Action;
///
///     fn reduce(&self, state: &mut State, action: Action) {
///         if matches!(action, Action::Log) {
///             state.logged = true;
///         }
///     }
/// }
///
/// let combined = combine_reducers(vec![Box::new(CounterReducer), Box::new(LoggingReducer)]);
///
/// let mut state = State::default();
/// combined.reduce(&mut state, Action::Increment);
/// assert_eq!(state.counter, 1);
/// assert!(!state.logged);
/// ```
#[must_use]
pub fn combine_reducers<S, A>(reducers: Vec<BoxedReducer<S, A>>) -> CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    CombinedReducer { reducers }
}

/// A combined reducer that runs multiple reducers in sequence.
///
/// Created by [`combine_reducers`].
pub struct CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    reducers: Vec<BoxedReducer<S, A>>,
}

impl<S, A> Reducer for CombinedReducer<S, A>
where
    S: 'static,
    A: Clone + 'static,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        for reducer in &self.reducers {
            reducer.reduce(state, action.clone());
        }
    }
}

/// Scopes a reducer to operate on one slice of a larger state.
///
/// The scoping layer reads the slice out, runs the slice reducer on it, and
/// writes the result back. It never inspects or mutates slice contents
/// itself; ownership of the slice's semantics stays entirely with the slice
/// reducer.
///
/// # Examples
///
/// ```
/// use shopfront_core::{scope_reducer, Reducer};
///
/// #[derive(Clone, Default)]
/// struct SubState {
///     value: i32,
/// }
///
/// #[derive(Clone)]
/// enum SubAction {
///     Add(i32),
/// }
///
/// struct SubReducer;
///
/// impl Reducer for SubReducer {
///     type State = SubState;
///     type Action = SubAction;
///
///     fn reduce(&self, state: &mut SubState, action: SubAction) {
///         let SubAction::Add(n) = action;
///         state.value += n;
///     }
/// }
///
/// #[derive(Clone, Default)]
/// struct ParentState {
///     sub: SubState,
///     other: String,
/// }
///
/// let scoped = scope_reducer(
///     SubReducer,
///     |parent: &ParentState| &parent.sub,
///     |parent, sub| parent.sub = sub,
/// );
///
/// let mut state = ParentState::default();
/// scoped.reduce(&mut state, SubAction::Add(3));
/// assert_eq!(state.sub.value, 3);
/// assert_eq!(state.other, "");
/// ```
pub fn scope_reducer<S, SubS, A, R>(
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
) -> ScopedReducer<S, SubS, A, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    ScopedReducer {
        reducer,
        get_state,
        set_state,
        _phantom: std::marker::PhantomData,
    }
}

/// A scoped reducer that operates on one slice of a larger state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, SubS, A, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    reducer: R,
    get_state: fn(&S) -> &SubS,
    set_state: fn(&mut S, SubS),
    _phantom: std::marker::PhantomData<fn(S, A)>,
}

impl<S, SubS, A, R> Reducer for ScopedReducer<S, SubS, A, R>
where
    S: 'static,
    SubS: Clone + 'static,
    A: 'static,
    R: Reducer<State = SubS, Action = A>,
{
    type State = S;
    type Action = A;

    fn reduce(&self, state: &mut Self::State, action: Self::Action) {
        // Extract the slice, run the slice reducer, write the result back.
        let mut slice = (self.get_state)(state).clone();
        self.reducer.reduce(&mut slice, action);
        (self.set_state)(state, slice);
    }
}
