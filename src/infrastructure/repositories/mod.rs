// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod memory_entity_store;

pub use memory_entity_store::MemoryEntityStore;
