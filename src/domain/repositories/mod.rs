// Repository contracts implemented by the infrastructure layer

pub mod entity_store;

pub use entity_store::EntityStore;
