use std::fmt;

use super::value_objects::{MemberId, Username};
use crate::domain::base_entity::BaseEntity;
use crate::domain::team::value_objects::TeamId;

/// Member entity
///
/// Owns the relationship to its team: the `team_id` reference is the
/// foreign key stored on the member row.
///
/// # Example
/// ```
/// use roster_api::domain::member::{Member, Username};
///
/// let member = Member::new(Username::new("kim").unwrap());
/// assert!(member.id().is_none());
/// assert!(member.team_id().is_none());
/// assert_eq!(member.to_string(), "Member{id=null, username=kim}");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: Option<MemberId>,
    username: Username,
    team_id: Option<TeamId>,
    base: BaseEntity,
}

impl Member {
    /// Creates a transient member that belongs to no team
    pub fn new(username: Username) -> Self {
        Self {
            id: None,
            username,
            team_id: None,
            base: BaseEntity::default(),
        }
    }

    pub fn id(&self) -> Option<MemberId> {
        self.id
    }

    pub fn set_id(&mut self, id: Option<MemberId>) {
        self.id = id;
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn set_username(&mut self, username: Username) {
        self.username = username;
    }

    /// Returns the team this member references, if any
    pub fn team_id(&self) -> Option<TeamId> {
        self.team_id
    }

    /// Plain owning-side assignment.
    ///
    /// Does not touch any `Team` member list; use `Team::add_member` and
    /// `Team::remove_member` to keep both sides in step.
    pub fn set_team_id(&mut self, team_id: Option<TeamId>) {
        self.team_id = team_id;
    }

    pub fn base(&self) -> &BaseEntity {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    /// Reconstructs a Member from persistence layer data
    pub fn from_persistence(
        id: MemberId,
        username: Username,
        team_id: Option<TeamId>,
        base: BaseEntity,
    ) -> Self {
        Self {
            id: Some(id),
            username,
            team_id,
            base,
        }
    }
}

impl fmt::Display for Member {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Member{{id={}, username={}}}", id, self.username),
            None => write!(f, "Member{{id=null, username={}}}", self.username),
        }
    }
}
