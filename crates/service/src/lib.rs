//! Service layer providing the user CRUD operations on top of file storage.
//! - Separates business rules (unique ids, name-only updates) from HTTP.
//! - `users::UserStore` is the seam the HTTP layer depends on.
//! - `storage` holds the reusable JSON array file store.

pub mod errors;
pub mod storage;
pub mod users;
pub mod file;
