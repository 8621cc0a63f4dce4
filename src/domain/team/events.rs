use crate::domain::member::value_objects::MemberId;
use super::value_objects::TeamId;

/// Events produced by the team relationship API
///
/// Ids are optional because the relationship can be edited on transient
/// entities before the store has assigned any key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamEvent {
    /// Fired when a member is linked to the team
    MemberJoined {
        team_id: Option<TeamId>,
        member_id: Option<MemberId>,
    },
    /// Fired when a member is unlinked from the team
    MemberLeft {
        team_id: Option<TeamId>,
        member_id: MemberId,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    pub fn team_id(&self) -> Option<TeamId> {
        match self {
            TeamEvent::MemberJoined { team_id, .. } => *team_id,
            TeamEvent::MemberLeft { team_id, .. } => *team_id,
        }
    }

    /// Returns the member_id for this event, if the member has one
    pub fn member_id(&self) -> Option<MemberId> {
        match self {
            TeamEvent::MemberJoined { member_id, .. } => *member_id,
            TeamEvent::MemberLeft { member_id, .. } => Some(*member_id),
        }
    }
}
