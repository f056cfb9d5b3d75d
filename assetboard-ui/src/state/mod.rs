//! State Management
//!
//! Root-owned notification slot and the active account.

pub mod global;

pub use global::{provide_global_state, GlobalState, SignalNotifier};
