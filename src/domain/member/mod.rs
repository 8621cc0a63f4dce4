// Member domain module
// Owning side of the team relationship

#![allow(clippy::module_inception)]

pub mod member;
pub mod value_objects;

pub use member::Member;
pub use value_objects::{MemberId, Username};
