//! Final team records.

use super::participant::Participant;
use crate::matching::Matching;

/// A team lead paired with a junior.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Team {
    pub team_lead: Participant,
    pub junior: Participant,
}

/// Pairs `team_leads[i]` with `juniors[matching[i]]` for every position.
///
/// `matching` must have been built over the same two lists.
pub fn assemble_teams(
    matching: &Matching,
    team_leads: &[Participant],
    juniors: &[Participant],
) -> Vec<Team> {
    team_leads
        .iter()
        .zip(matching.iter())
        .map(|(lead, &j)| Team {
            team_lead: lead.clone(),
            junior: juniors[j].clone(),
        })
        .collect()
}
