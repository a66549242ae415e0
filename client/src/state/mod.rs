//! View-model state for the campaign views.
//!
//! DESIGN
//! ======
//! Each view owns one plain state struct, held in an `RwSignal` by the
//! component that renders it. The async flows in `creation` and
//! `campaigns` reach that state through [`StateCell`], so they run the same
//! against a signal in the browser and a `RefCell` in tests.

pub mod campaigns;
pub mod creation;
pub mod ui;

use std::cell::RefCell;

use leptos::prelude::*;

/// Mutable access to a view's state from an async flow.
pub trait StateCell<T> {
    /// Apply `f` to the state. Returns `None` if the owning view is gone.
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R>;
}

impl<T: Send + Sync + 'static> StateCell<T> for RwSignal<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        self.try_update(f)
    }
}

impl<T> StateCell<T> for RefCell<T> {
    fn update_state<R>(&self, f: impl FnOnce(&mut T) -> R) -> Option<R> {
        Some(f(&mut self.borrow_mut()))
    }
}
