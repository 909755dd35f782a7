//! User records and the store abstraction the HTTP layer talks to.

pub mod domain;
pub mod store;

pub use domain::{User, UserUpdate};
pub use store::UserStore;
