// Agent domain module

#![allow(clippy::module_inception)]

pub mod agent;

pub use agent::{Agent, NewAgent};
