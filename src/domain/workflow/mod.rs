// Workflow domain module
// Contains the workflow record and the execution result it produces

#![allow(clippy::module_inception)]

pub mod execution;
pub mod workflow;

// Re-export main types for convenience
pub use execution::{ExecutionResult, ExecutionStatus};
pub use workflow::{Connection, NewWorkflow, Workflow};
