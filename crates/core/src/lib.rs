//! Partner assembly through an ordered chain of enrichment components.
//!
//! An [`EntityBuilder`](pipeline::EntityBuilder) starts from an empty
//! sequence and hands it to each [`EntityComponent`](pipeline::EntityComponent)
//! in turn. The partner components in [`components`] originate the partner
//! list and merge addresses and phone numbers into it with a left-outer
//! [`group_join`](join::group_join).

pub mod components;
pub mod error;
pub mod join;
pub mod model;
pub mod pipeline;
pub mod source;
