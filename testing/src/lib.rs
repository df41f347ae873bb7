//! # Shopfront Testing
//!
//! Testing utilities for Shopfront reducers.
//!
//! The main entry point is [`ReducerTest`], a fluent Given-When-Then
//! harness for exercising a reducer against a starting state and a
//! sequence of actions.


pub use reducer_test::ReducerTest;
