//! Agent Flows API Library
//!
//! This library provides the core functionality for the Agent Flows API:
//! the agent/workflow entity store, its in-memory implementation, and the
//! HTTP layer that exposes it.

pub mod api;
pub mod config;
pub mod domain;
pub mod infrastructure;
