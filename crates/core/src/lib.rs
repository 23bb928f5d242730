//! Core for the todoql project.
//!
//! Everything in here is independent of the GraphQL layer and of the concrete
//! key-value store: the single-table key scheme, the mapping between stored
//! items and public entities, the store contract, and the resolver logic that
//! ties them together. The `dynamodb` feature adds conversions to the SDK's
//! attribute values.

pub mod config;
pub mod entity;
pub mod id;
pub mod keys;
pub mod resolvers;
pub mod storage;
pub mod validation;
