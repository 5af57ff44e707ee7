//! Shared contracts between the Query Console frontend and the Query Service.
//!
//! Types here are serialized over the wire; keep field names stable.

pub mod usecases;
