//! Storage abstractions for service layer
//!
//! Contains the file-backed JSON array store shared by every service that
//! persists a small collection as a single file.

pub mod json_array_store;
