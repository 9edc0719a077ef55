//! Contact data layer: models, the abstract data service, the
//! in-memory reference store and the phonetic index builder.

pub mod index;
pub mod memory;
pub mod models;
pub mod store;

pub use index::{IndexSection, build_index};
pub use memory::MemoryStore;
pub use models::{Group, Person, User};
pub use store::{ContactStore, StaticUserProvider, UserProvider};
