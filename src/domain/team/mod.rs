// Team domain module
// Contains the team entity, its key type and relationship events

#![allow(clippy::module_inception)]

pub mod events;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use events::TeamEvent;
pub use team::Team;
pub use value_objects::TeamId;
