//! Item storage for the items service
//!
//! This crate owns everything that talks to DynamoDB: connection settings,
//! scope-bound handle acquisition, table provisioning, and item writes.

pub mod config;
pub mod handle;
pub mod item;
pub mod provision;
