//! Repository Layer
//!
//! Data access abstractions and implementations.

mod memory;
mod traits;


pub use memory::InMemoryRepository;
pub use traits::{PatchableRepository, Repository};
