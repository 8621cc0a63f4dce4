use std::fmt;

use super::events::TeamEvent;
use super::value_objects::TeamId;
use crate::domain::base_entity::BaseEntity;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::member::value_objects::MemberId;
use crate::domain::member::Member;

/// Team entity
///
/// Holds the inverse (non-owning) side of the team/member relationship:
/// each `Member` stores the team reference, the team only keeps an ordered
/// view of the members that point at it.
///
/// # Invariants
/// - Every member in `members` references this team. The plain setters
///   (`set_members`, `members_mut`) do not maintain this; `add_member`,
///   `remove_member` and `assign_id` do.
///
/// # Example
/// ```
/// use roster_api::domain::team::{Team, TeamId};
///
/// let mut team = Team::new();
/// team.set_id(Some(TeamId::new(1)));
/// team.set_members(Vec::new());
///
/// assert_eq!(team.to_string(), "Team{id=1, members=[]}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Team {
    id: Option<TeamId>,
    members: Vec<Member>,
    base: BaseEntity,
}

impl Team {
    /// Creates a transient team with no id and no members
    pub fn new() -> Self {
        Self::default()
    }

    // ===== Plain accessors =====

    /// Returns the team's id, `None` while transient
    pub fn id(&self) -> Option<TeamId> {
        self.id
    }

    /// Plain assignment; contained members are left untouched
    pub fn set_id(&mut self, id: Option<TeamId>) {
        self.id = id;
    }

    /// Returns the members in insertion order
    pub fn members(&self) -> &[Member] {
        &self.members
    }

    /// Live access to the member sequence
    pub fn members_mut(&mut self) -> &mut Vec<Member> {
        &mut self.members
    }

    /// Replaces the member sequence as-is.
    ///
    /// The members' own team references are not updated.
    pub fn set_members(&mut self, members: Vec<Member>) {
        self.members = members;
    }

    pub fn base(&self) -> &BaseEntity {
        &self.base
    }

    pub fn base_mut(&mut self) -> &mut BaseEntity {
        &mut self.base
    }

    // ===== Relationship management =====

    /// Links a member to this team, updating both sides.
    ///
    /// # Returns
    /// * `Ok(TeamEvent::MemberJoined)` - member appended and pointed at this team
    /// * `Err(DomainError::DuplicateMember)` - a member with the same id is already present
    pub fn add_member(&mut self, mut member: Member) -> DomainResult<TeamEvent> {
        if let Some(member_id) = member.id() {
            if self.contains_member(member_id) {
                return Err(DomainError::DuplicateMember(member_id));
            }
        }

        member.set_team_id(self.id);
        let event = TeamEvent::MemberJoined {
            team_id: self.id,
            member_id: member.id(),
        };
        self.members.push(member);

        Ok(event)
    }

    /// Unlinks a member from this team, clearing its team reference.
    ///
    /// # Returns
    /// * `Ok((Member, TeamEvent::MemberLeft))` - the detached member
    /// * `Err(DomainError::MemberNotFound)` - no member with that id
    pub fn remove_member(&mut self, member_id: MemberId) -> DomainResult<(Member, TeamEvent)> {
        let position = self
            .members
            .iter()
            .position(|m| m.id() == Some(member_id))
            .ok_or(DomainError::MemberNotFound(member_id))?;

        let mut member = self.members.remove(position);
        member.set_team_id(None);

        let event = TeamEvent::MemberLeft {
            team_id: self.id,
            member_id,
        };

        Ok((member, event))
    }

    /// Returns true if a member with this id is in the team
    pub fn contains_member(&self, member_id: MemberId) -> bool {
        self.members.iter().any(|m| m.id() == Some(member_id))
    }

    /// Mutable access to one contained member
    pub fn member_mut(&mut self, member_id: MemberId) -> Option<&mut Member> {
        self.members.iter_mut().find(|m| m.id() == Some(member_id))
    }

    /// Sets the store-generated id and re-points every member at it.
    ///
    /// Repository implementations call this after inserting a team.
    pub fn assign_id(&mut self, id: TeamId) {
        self.id = Some(id);
        for member in &mut self.members {
            member.set_team_id(Some(id));
        }
    }

    /// Returns true when every member references this team
    pub fn is_consistent(&self) -> bool {
        self.members.iter().all(|m| m.team_id() == self.id)
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// Members are taken as loaded; they are expected to reference `id`.
    pub fn from_persistence(id: TeamId, members: Vec<Member>, base: BaseEntity) -> Self {
        Self {
            id: Some(id),
            members,
            base,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "Team{{id={}, members=[", id)?,
            None => write!(f, "Team{{id=null, members=[")?,
        }
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", member)?;
        }
        write!(f, "]}}")
    }
}
