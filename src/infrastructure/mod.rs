// Infrastructure layer module
// Contains storage adapters for the domain contracts
// Follows Hexagonal Architecture

pub mod repositories;
