// Domain layer module exports
// Entities and repository ports; no infrastructure dependencies

pub mod base_entity;
pub mod errors;
pub mod member;
pub mod repositories;
pub mod team;

pub use base_entity::BaseEntity;
pub use errors::{DomainError, DomainResult};
