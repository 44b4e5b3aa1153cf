//! Validated rank lookup over both groups' preference lists.
//!
//! [`PreferenceModel`] is the single boundary where raw participant data is
//! checked. Once built, every rank lookup is an O(1) table read by position
//! and cannot fail.

use std::collections::{HashMap, HashSet};

use super::participant::{Participant, ParticipantId, PreferenceList};
use crate::error::{PairingError, Result};

/// How the satisfaction scale `N` is chosen.
///
/// A satisfaction score is `N - rank`. For scores to stay within `[1, N]`
/// the scale must equal the group size `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SatisfactionScale {
    /// `N` is the group size of the current run.
    #[default]
    Derived,
    /// `N` is an external rubric value. It must still equal the group size,
    /// otherwise the input is rejected.
    Fixed(usize),
}

impl SatisfactionScale {
    /// Resolves the scale for a group of size `n`.
    pub fn resolve(self, n: usize) -> Result<usize> {
        match self {
            SatisfactionScale::Derived => Ok(n),
            SatisfactionScale::Fixed(scale) if scale == n => Ok(scale),
            SatisfactionScale::Fixed(scale) => Err(PairingError::invalid(format!(
                "satisfaction scale {scale} does not match group size {n}"
            ))),
        }
    }
}

/// Which side of a pair a lookup refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    TeamLead,
    Junior,
}

impl Role {
    fn label(self) -> &'static str {
        match self {
            Role::TeamLead => "team lead",
            Role::Junior => "junior",
        }
    }
}

/// Read-only rank tables for both groups, indexed by position.
#[derive(Debug, Clone)]
pub struct PreferenceModel {
    size: usize,
    scale: usize,
    /// `team_lead_ranks[i * n + j]`: rank of junior `j` in team lead `i`'s list.
    team_lead_ranks: Vec<usize>,
    /// `junior_ranks[j * n + i]`: rank of team lead `i` in junior `j`'s list.
    junior_ranks: Vec<usize>,
}

impl PreferenceModel {
    /// Validates the inputs and builds the rank tables.
    ///
    /// # Errors
    ///
    /// - [`PairingError::InvalidInput`] if the groups differ in size, ids are
    ///   duplicated, a participant has zero or several lists, a list has the
    ///   wrong length, or the scale does not match the group size.
    /// - [`PairingError::PreferenceLookupFailed`] if a list does not rank
    ///   some member of the opposite group.
    pub fn new(
        team_leads: &[Participant],
        juniors: &[Participant],
        team_lead_preferences: &[PreferenceList],
        junior_preferences: &[PreferenceList],
        scale: SatisfactionScale,
    ) -> Result<Self> {
        let n = team_leads.len();
        if juniors.len() != n {
            return Err(PairingError::invalid(format!(
                "group sizes differ: {} team leads, {} juniors",
                n,
                juniors.len()
            )));
        }
        let scale = scale.resolve(n)?;

        check_unique_ids(team_leads, Role::TeamLead)?;
        check_unique_ids(juniors, Role::Junior)?;

        let lead_lists = lists_by_position(team_leads, team_lead_preferences, n, Role::TeamLead)?;
        let junior_lists = lists_by_position(juniors, junior_preferences, n, Role::Junior)?;

        let team_lead_ranks = rank_table(team_leads, &lead_lists, juniors)?;
        let junior_ranks = rank_table(juniors, &junior_lists, team_leads)?;

        Ok(Self {
            size: n,
            scale,
            team_lead_ranks,
            junior_ranks,
        })
    }

    /// Group size `n`.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Satisfaction scale `N`.
    pub fn scale(&self) -> usize {
        self.scale
    }

    /// Rank of junior `junior` in team lead `lead`'s list (positions).
    pub fn team_lead_rank(&self, lead: usize, junior: usize) -> usize {
        self.team_lead_ranks[lead * self.size + junior]
    }

    /// Rank of team lead `lead` in junior `junior`'s list (positions).
    pub fn junior_rank(&self, junior: usize, lead: usize) -> usize {
        self.junior_ranks[junior * self.size + lead]
    }

    /// `N - rank` from the team lead's side.
    pub fn team_lead_satisfaction(&self, lead: usize, junior: usize) -> i64 {
        self.scale as i64 - self.team_lead_rank(lead, junior) as i64
    }

    /// `N - rank` from the junior's side.
    pub fn junior_satisfaction(&self, junior: usize, lead: usize) -> i64 {
        self.scale as i64 - self.junior_rank(junior, lead) as i64
    }
}

fn check_unique_ids(group: &[Participant], role: Role) -> Result<()> {
    let mut seen = HashSet::with_capacity(group.len());
    for p in group {
        if !seen.insert(p.id) {
            return Err(PairingError::invalid(format!(
                "duplicate {} id {}",
                role.label(),
                p.id
            )));
        }
    }
    Ok(())
}

/// Orders `lists` to follow `owners`, checking ownership and length.
fn lists_by_position<'a>(
    owners: &[Participant],
    lists: &'a [PreferenceList],
    n: usize,
    role: Role,
) -> Result<Vec<&'a PreferenceList>> {
    let mut by_owner: HashMap<ParticipantId, &PreferenceList> = HashMap::with_capacity(lists.len());
    for list in lists {
        if by_owner.insert(list.owner_id, list).is_some() {
            return Err(PairingError::invalid(format!(
                "{} {} has more than one preference list",
                role.label(),
                list.owner_id
            )));
        }
    }
    if by_owner.len() != owners.len() {
        let known: HashSet<ParticipantId> = owners.iter().map(|p| p.id).collect();
        if let Some(stray) = by_owner.keys().find(|id| !known.contains(id)) {
            return Err(PairingError::invalid(format!(
                "preference list owner {stray} is not a known {}",
                role.label()
            )));
        }
    }

    owners
        .iter()
        .map(|owner| {
            let list = by_owner.get(&owner.id).copied().ok_or_else(|| {
                PairingError::invalid(format!(
                    "{} {} has no preference list",
                    role.label(),
                    owner.id
                ))
            })?;
            if list.len() != n {
                return Err(PairingError::invalid(format!(
                    "preference list of {} {} has length {}, expected {}",
                    role.label(),
                    owner.id,
                    list.len(),
                    n
                )));
            }
            Ok(list)
        })
        .collect()
}

/// Row-major `ranks[owner * n + counterpart]`.
fn rank_table(
    owners: &[Participant],
    lists: &[&PreferenceList],
    counterparts: &[Participant],
) -> Result<Vec<usize>> {
    let n = counterparts.len();
    let mut ranks = Vec::with_capacity(n * n);
    for (owner, list) in owners.iter().zip(lists) {
        let mut position: HashMap<ParticipantId, usize> = HashMap::with_capacity(n);
        for (rank, &id) in list.ranked_ids.iter().enumerate() {
            position.entry(id).or_insert(rank);
        }
        for counterpart in counterparts {
            let rank = position.get(&counterpart.id).copied().ok_or(
                PairingError::PreferenceLookupFailed {
                    owner: owner.id,
                    counterpart: counterpart.id,
                },
            )?;
            ranks.push(rank);
        }
    }
    Ok(ranks)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people(ids: &[ParticipantId], prefix: &str) -> Vec<Participant> {
        ids.iter()
            .map(|&id| Participant::new(id, format!("{prefix}{id}")))
            .collect()
    }

    fn fixture() -> (
        Vec<Participant>,
        Vec<Participant>,
        Vec<PreferenceList>,
        Vec<PreferenceList>,
    ) {
        let leads = people(&[1, 2, 3], "T");
        let juniors = people(&[10, 20, 30], "J");
        let lead_prefs = vec![
            PreferenceList::new(1, vec![30, 10, 20]),
            PreferenceList::new(2, vec![10, 20, 30]),
            PreferenceList::new(3, vec![20, 30, 10]),
        ];
        let junior_prefs = vec![
            PreferenceList::new(20, vec![3, 1, 2]),
            PreferenceList::new(10, vec![1, 2, 3]),
            PreferenceList::new(30, vec![2, 3, 1]),
        ];
        (leads, juniors, lead_prefs, junior_prefs)
    }

    #[test]
    fn test_ranks_by_position() {
        let (leads, juniors, lp, jp) = fixture();
        let model =
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived).unwrap();

        assert_eq!(model.size(), 3);
        assert_eq!(model.scale(), 3);
        // team lead 1 ranks junior 30 (position 2) first
        assert_eq!(model.team_lead_rank(0, 2), 0);
        assert_eq!(model.team_lead_rank(0, 1), 2);
        // junior 20 (position 1) ranks team lead 3 (position 2) first;
        // list order in the input does not matter
        assert_eq!(model.junior_rank(1, 2), 0);
        assert_eq!(model.junior_satisfaction(1, 2), 3);
        assert_eq!(model.team_lead_satisfaction(0, 1), 1);
    }

    #[test]
    fn test_group_size_mismatch() {
        let (leads, mut juniors, lp, jp) = fixture();
        juniors.pop();
        let err = PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived)
            .unwrap_err();
        assert!(matches!(err, PairingError::InvalidInput(_)));
    }

    #[test]
    fn test_wrong_list_length() {
        let (leads, juniors, mut lp, jp) = fixture();
        lp[1].ranked_ids.pop();
        let err = PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived)
            .unwrap_err();
        assert!(matches!(err, PairingError::InvalidInput(_)));
    }

    #[test]
    fn test_missing_counterpart_is_lookup_failure() {
        let (leads, juniors, lp, mut jp) = fixture();
        // junior 30 lists team lead 2 twice and never lists team lead 1
        jp[2].ranked_ids = vec![2, 3, 2];
        let err = PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived)
            .unwrap_err();
        assert_eq!(
            err,
            PairingError::PreferenceLookupFailed {
                owner: 30,
                counterpart: 1
            }
        );
    }

    #[test]
    fn test_missing_and_duplicate_lists() {
        let (leads, juniors, mut lp, jp) = fixture();
        lp.pop();
        assert!(matches!(
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived),
            Err(PairingError::InvalidInput(_))
        ));

        let (leads, juniors, mut lp, jp) = fixture();
        lp.push(PreferenceList::new(1, vec![10, 20, 30]));
        assert!(matches!(
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived),
            Err(PairingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_stray_owner() {
        let (leads, juniors, mut lp, jp) = fixture();
        lp[2].owner_id = 99;
        assert!(matches!(
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived),
            Err(PairingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_duplicate_participant_id() {
        let (mut leads, juniors, lp, jp) = fixture();
        leads[2].id = 1;
        assert!(matches!(
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Derived),
            Err(PairingError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_fixed_scale() {
        let (leads, juniors, lp, jp) = fixture();
        let model =
            PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Fixed(3)).unwrap();
        assert_eq!(model.scale(), 3);

        let err = PreferenceModel::new(&leads, &juniors, &lp, &jp, SatisfactionScale::Fixed(20))
            .unwrap_err();
        assert!(matches!(err, PairingError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_groups() {
        let model = PreferenceModel::new(&[], &[], &[], &[], SatisfactionScale::Derived).unwrap();
        assert_eq!(model.size(), 0);
        assert_eq!(model.scale(), 0);
    }
}
