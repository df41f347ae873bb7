//! Catalog slice reducer.

use crate::actions::ShopAction;
use crate::state::CatalogState;
use shopfront_core::Reducer;

/// Reducer owning the catalog slice
///
/// The catalog is read-only: it is seeded at store construction and no
/// action kind mutates it. The reducer is pure identity, and exists so the
/// slice takes part in composition like any other.
#[derive(Clone, Copy, Debug, Default)]
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Action = ShopAction;

    fn reduce(&self, _state: &mut Self::State, _action: Self::Action) {}
}
