//! Application state and change notification
//!
//! The list pipeline stays a pure function; this module holds the snapshot it
//! reads and re-runs it for subscribed views whenever the snapshot changes.

pub mod observer;
pub mod store;

pub use crate::list::ViewState;
pub use observer::ListObserver;
pub use store::{reduce, Action, AppState, Revisions, Store, SubscriptionId};
