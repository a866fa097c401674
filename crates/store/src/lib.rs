//! In-memory persistence for users, permissions and roles.
//!
//! `MemoryStore` implements every repository port behind one lock and can
//! be loaded from / saved to a JSON snapshot between process runs.

mod memory;
mod permissions;
mod snapshot;
mod users;

pub use memory::MemoryStore;
