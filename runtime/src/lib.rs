//! # Shopfront Runtime
//!
//! Runtime implementation for the Shopfront store.
//!
//! This crate provides the [`Store`]: the single owner of composed state.
//! The store accepts actions through [`Store::dispatch`], applies the root
//! reducer synchronously, swaps in the freshly built state, and notifies
//! subscribers.
//!
//! ## Execution model
//!
//! - **Synchronous**: `dispatch` runs to completion before returning. No
//!   background work, no timers, no I/O happens inside the store.
//! - **Structural replacement**: every dispatch produces a brand-new state
//!   value behind a new `Arc`. State handles returned by [`Store::state`]
//!   are never mutated after the fact; holders simply keep the snapshot
//!   they took.
//! - **Single writer**: only `dispatch` replaces the state pointer, and the
//!   swap is atomic. Concurrent `dispatch` calls are not supported and are
//!   rejected with [`error::StoreError::DispatchInFlight`]; callers that
//!   need multi-threaded writes must serialize through a single dispatch
//!   queue. Reads are safe from any thread.
//!
//! ## Example
//!
//! ```
//! use shopfront_core::Reducer;
//! use shopfront_runtime::Store;
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     count: i32,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!
//!     fn reduce(&self, state: &mut CounterState, action: CounterAction) {
//!         let CounterAction::Increment = action;
//!         state.count += 1;
//!     }
//! }
//!
//! let store = Store::new(CounterState::default(), CounterReducer);
//! store.dispatch(CounterAction::Increment)?;
//! assert_eq!(store.state().count, 1);
//! # Ok::<(), shopfront_runtime::error::StoreError>(())
//! ```

use shopfront_core::Reducer;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Error types for the Store runtime
pub mod error {
    use thiserror::Error;

    /// Errors that can occur during Store operations
    ///
    /// The store itself has exactly one failure mode: a dispatch that
    /// arrives while another dispatch is executing. Everything else the
    /// store does (reducing, swapping, notifying) is infallible by
    /// contract — reducers are pure and total, and input validation
    /// happens before an action reaches the store.
    #[derive(Error, Debug)]
    pub enum StoreError {
        /// `dispatch` was called while another dispatch was executing
        ///
        /// This is a fatal usage error, not a transient condition. It means
        /// either a reducer (or subscriber re-entering synchronously) called
        /// back into the store, or two threads dispatched concurrently
        /// without serializing. State is left exactly as it was.
        #[error("dispatch already in flight: reentrant or concurrent dispatch is not supported")]
        DispatchInFlight,
    }
}

use error::StoreError;

/// Identifies a registered subscriber, for use with [`Store::unsubscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriberId(u64);

type Subscriber<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct StoreInner<S, A, R> {
    state: RwLock<Arc<S>>,
    reducer: R,
    /// Dispatch-in-flight flag. Set for the duration of reduce-and-swap;
    /// a second dispatch observing it set is a usage error.
    dispatching: AtomicBool,
    subscribers: RwLock<Vec<(SubscriberId, Subscriber<S>)>>,
    next_subscriber: AtomicU64,
    _action: PhantomData<fn(A)>,
}

/// The Store - holds composed state and drives dispatch
///
/// The Store manages:
/// 1. The current state (an `Arc<S>` swapped wholesale on every dispatch)
/// 2. The root reducer (business logic)
/// 3. Subscribers (notified with each new state)
///
/// # Type Parameters
///
/// - `S`: State type
/// - `A`: Action type
/// - `R`: Reducer implementation
///
/// Cloning a `Store` is cheap and yields a handle to the same underlying
/// state; all clones observe the same dispatches.
pub struct Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
{
    inner: Arc<StoreInner<S, A, R>>,
}

impl<S, A, R> Clone for Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Clears the dispatch-in-flight flag when dropped, including when a
/// reducer panics, so a poisoned store cannot wedge future dispatches.
struct InFlightGuard<'a>(&'a AtomicBool);

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

// Lock poisoning can only arise from a panicking reducer or subscriber.
// The state pointer is only ever written after the new state is fully
// built, so the inner value is always coherent and safe to recover.
fn read<T>(lock: &RwLock<T>) -> RwLockReadGuard<'_, T> {
    lock.read().unwrap_or_else(PoisonError::into_inner)
}

fn write<T>(lock: &RwLock<T>) -> RwLockWriteGuard<'_, T> {
    lock.write().unwrap_or_else(PoisonError::into_inner)
}

impl<S, A, R> Store<S, A, R>
where
    R: Reducer<State = S, Action = A>,
    S: Clone,
{
    /// Create a new store with initial state and root reducer
    ///
    /// The store owns its state from this point on; there is no implicit
    /// global store, and re-creating a store always starts from the
    /// initial state passed here.
    #[must_use]
    pub fn new(initial_state: S, reducer: R) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                state: RwLock::new(Arc::new(initial_state)),
                reducer,
                dispatching: AtomicBool::new(false),
                subscribers: RwLock::new(Vec::new()),
                next_subscriber: AtomicU64::new(0),
                _action: PhantomData,
            }),
        }
    }

    /// Dispatch an action to the store
    ///
    /// This is the only way state changes:
    /// 1. Clones the current state
    /// 2. Runs the root reducer on the clone
    /// 3. Atomically swaps the state pointer to the new value
    /// 4. Notifies subscribers with the new state
    ///
    /// The whole sequence is synchronous and completes before `dispatch`
    /// returns. A dispatch either fully replaces the state or leaves it
    /// untouched; there is no partial application.
    ///
    /// Subscribers run after the in-flight flag clears, so a subscriber
    /// may itself dispatch (sequentially). Reducers must never dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DispatchInFlight`] if another dispatch is
    /// currently executing — reentrant dispatch from a reducer, or a
    /// concurrent dispatch from another thread. The current state is left
    /// unchanged.
    ///
    /// # Panics
    ///
    /// If the reducer panics, the panic propagates to the caller. The
    /// state pointer is not swapped and later dispatches still work.
    #[tracing::instrument(skip(self, action), name = "store_dispatch")]
    pub fn dispatch(&self, action: A) -> Result<(), StoreError> {
        if self.inner.dispatching.swap(true, Ordering::Acquire) {
            tracing::error!("dispatch rejected: another dispatch is in flight");
            return Err(StoreError::DispatchInFlight);
        }
        let guard = InFlightGuard(&self.inner.dispatching);

        let current = self.state();
        let mut next = S::clone(&current);
        self.inner.reducer.reduce(&mut next, action);
        let next = Arc::new(next);

        *write(&self.inner.state) = Arc::clone(&next);
        tracing::debug!("state replaced");

        // Clear the in-flight flag before subscribers run, so subscribers
        // are allowed to dispatch follow-up actions.
        drop(guard);
        self.notify(&next);
        Ok(())
    }

    /// Get the current state
    ///
    /// Returns a handle to the current composed state. The value behind
    /// the handle is immutable: dispatches install a new `Arc` rather than
    /// mutating the one returned here, so this snapshot stays valid and
    /// unchanged for as long as the caller holds it.
    #[must_use]
    pub fn state(&self) -> Arc<S> {
        Arc::clone(&read(&self.inner.state))
    }

    /// Register a subscriber
    ///
    /// The subscriber is invoked with a reference to the new state after
    /// every successful dispatch, on the dispatching thread. Returns an id
    /// that can be passed to [`Store::unsubscribe`].
    #[must_use]
    pub fn subscribe<F>(&self, subscriber: F) -> SubscriberId
    where
        F: Fn(&S) + Send + Sync + 'static,
    {
        let id = SubscriberId(self.inner.next_subscriber.fetch_add(1, Ordering::Relaxed));
        write(&self.inner.subscribers).push((id, Arc::new(subscriber)));
        id
    }

    /// Remove a subscriber
    ///
    /// Returns `true` if the id was registered.
    pub fn unsubscribe(&self, id: SubscriberId) -> bool {
        let mut subscribers = write(&self.inner.subscribers);
        let before = subscribers.len();
        subscribers.retain(|(registered, _)| *registered != id);
        subscribers.len() != before
    }

    fn notify(&self, state: &Arc<S>) {
        // Snapshot under the lock, invoke outside it, so subscribers may
        // call subscribe/unsubscribe without deadlocking.
        let snapshot: Vec<Subscriber<S>> = read(&self.inner.subscribers)
            .iter()
            .map(|(_, subscriber)| Arc::clone(subscriber))
            .collect();
        for subscriber in snapshot {
            subscriber(state);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    #[derive(Clone, Debug, Default, PartialEq)]
    struct TestState {
        count: i32,
    }

    #[derive(Clone)]
    enum TestAction {
        Add(i32),
    }

    struct TestReducer;

    impl Reducer for TestReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            let TestAction::Add(n) = action;
            state.count += n;
        }
    }

    #[test]
    fn test_dispatch_applies_reducer() {
        let store = Store::new(TestState::default(), TestReducer);

        store.dispatch(TestAction::Add(2)).unwrap();
        store.dispatch(TestAction::Add(3)).unwrap();

        assert_eq!(store.state().count, 5);
    }

    #[test]
    fn test_dispatch_replaces_state_pointer() {
        let store = Store::new(TestState::default(), TestReducer);

        let before = store.state();
        store.dispatch(TestAction::Add(1)).unwrap();
        let after = store.state();

        assert!(!Arc::ptr_eq(&before, &after));
        // The old snapshot is retained unmodified by its holder.
        assert_eq!(before.count, 0);
        assert_eq!(after.count, 1);
    }

    #[test]
    fn test_clones_share_state() {
        let store = Store::new(TestState::default(), TestReducer);
        let handle = store.clone();

        handle.dispatch(TestAction::Add(7)).unwrap();

        assert_eq!(store.state().count, 7);
    }

    #[test]
    fn test_subscribers_observe_new_state() {
        let store = Store::new(TestState::default(), TestReducer);
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = Arc::clone(&seen);
        let id = store.subscribe(move |state: &TestState| {
            sink.lock().unwrap().push(state.count);
        });

        store.dispatch(TestAction::Add(1)).unwrap();
        store.dispatch(TestAction::Add(1)).unwrap();

        assert!(store.unsubscribe(id));
        store.dispatch(TestAction::Add(1)).unwrap();

        assert_eq!(*seen.lock().unwrap(), vec![1, 2]);
        // Unsubscribing twice reports the id as unknown.
        assert!(!store.unsubscribe(id));
    }

    /// Reducer that calls back into the store through an injected hook,
    /// recording the result of the nested dispatch.
    #[derive(Clone, Default)]
    struct ReentrantReducer {
        hook: Arc<OnceLock<Box<dyn Fn() -> Result<(), StoreError> + Send + Sync>>>,
        nested: Arc<Mutex<Option<Result<(), StoreError>>>>,
    }

    impl Reducer for ReentrantReducer {
        type State = TestState;
        type Action = TestAction;

        fn reduce(&self, state: &mut Self::State, action: Self::Action) {
            if let Some(dispatch) = self.hook.get() {
                *self.nested.lock().unwrap() = Some(dispatch());
            }
            let TestAction::Add(n) = action;
            state.count += n;
        }
    }

    #[test]
    fn test_reentrant_dispatch_is_rejected() {
        let reducer = ReentrantReducer::default();
        let nested = Arc::clone(&reducer.nested);
        let hook = Arc::clone(&reducer.hook);

        let store = Store::new(TestState::default(), reducer);
        let handle = store.clone();
        hook.set(Box::new(move || handle.dispatch(TestAction::Add(100))))
            .map_err(|_| ())
            .unwrap();

        // The outer dispatch succeeds; the nested one is rejected and
        // leaves no trace in the state.
        store.dispatch(TestAction::Add(1)).unwrap();

        assert!(matches!(
            *nested.lock().unwrap(),
            Some(Err(StoreError::DispatchInFlight))
        ));
        assert_eq!(store.state().count, 1);
    }

    #[test]
    fn test_subscriber_may_dispatch_followup() {
        let store = Store::new(TestState::default(), TestReducer);
        let handle = store.clone();

        // Dispatch a one-shot follow-up from a subscriber: allowed, since
        // subscribers run after the in-flight flag clears.
        let _id = store.subscribe(move |state: &TestState| {
            if state.count == 1 {
                handle.dispatch(TestAction::Add(10)).unwrap();
            }
        });

        store.dispatch(TestAction::Add(1)).unwrap();
        assert_eq!(store.state().count, 11);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            // Store state after a sequence of dispatches equals a plain
            // fold of the reducer over that sequence.
            #[test]
            fn dispatch_is_a_fold(increments in proptest::collection::vec(-100..100i32, 0..32)) {
                let store = Store::new(TestState::default(), TestReducer);
                for n in &increments {
                    store.dispatch(TestAction::Add(*n)).unwrap();
                }
                prop_assert_eq!(store.state().count, increments.iter().sum::<i32>());
            }
        }
    }
}
