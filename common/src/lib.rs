//! Shared model types for the self-assessment submission service.
//!
//! Nothing in here touches the network or the filesystem: the backend decodes
//! a request into a [`model::submission::Submission`], normalizes it, and hands
//! the flattened columns to its storage layer.

pub mod model;
pub mod responses;
