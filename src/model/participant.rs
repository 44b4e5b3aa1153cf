//! Participants and their ranked preference lists.

/// Identifier of a team lead or junior.
pub type ParticipantId = u32;

/// A team lead or a junior.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Participant {
    pub id: ParticipantId,
    pub name: String,
}

impl Participant {
    pub fn new(id: ParticipantId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}

/// A participant's ranking of the opposite group, most preferred first.
///
/// `ranked_ids` must be a permutation of the opposite group's ids. This is
/// checked when a [`PreferenceModel`](super::PreferenceModel) is built.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PreferenceList {
    pub owner_id: ParticipantId,
    pub ranked_ids: Vec<ParticipantId>,
}

impl PreferenceList {
    pub fn new(owner_id: ParticipantId, ranked_ids: Vec<ParticipantId>) -> Self {
        Self {
            owner_id,
            ranked_ids,
        }
    }

    /// Zero-based rank of `counterpart`, or `None` if it is not listed.
    pub fn rank_of(&self, counterpart: ParticipantId) -> Option<usize> {
        self.ranked_ids.iter().position(|&id| id == counterpart)
    }

    pub fn len(&self) -> usize {
        self.ranked_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked_ids.is_empty()
    }
}
