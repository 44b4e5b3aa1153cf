//! Shared fixtures: random cohorts with full random preference lists.

use rand::seq::SliceRandom;
use u_pairing::model::{Participant, ParticipantId, PreferenceList};
use u_pairing::random::create_rng;

pub struct Cohort {
    pub team_leads: Vec<Participant>,
    pub juniors: Vec<Participant>,
    pub team_lead_preferences: Vec<PreferenceList>,
    pub junior_preferences: Vec<PreferenceList>,
}

/// Team leads get ids `1..=n`, juniors `1001..=1000 + n`.
pub fn random_cohort(n: usize, seed: u64) -> Cohort {
    let mut rng = create_rng(seed);
    let team_leads: Vec<Participant> = (1..=n as ParticipantId)
        .map(|id| Participant::new(id, format!("Lead {id}")))
        .collect();
    let juniors: Vec<Participant> = (1..=n as ParticipantId)
        .map(|id| Participant::new(1000 + id, format!("Junior {id}")))
        .collect();

    let mut team_lead_preferences = Vec::with_capacity(n);
    for lead in &team_leads {
        let mut ids: Vec<ParticipantId> = juniors.iter().map(|j| j.id).collect();
        ids.shuffle(&mut rng);
        team_lead_preferences.push(PreferenceList::new(lead.id, ids));
    }
    let mut junior_preferences = Vec::with_capacity(n);
    for junior in &juniors {
        let mut ids: Vec<ParticipantId> = team_leads.iter().map(|t| t.id).collect();
        ids.shuffle(&mut rng);
        junior_preferences.push(PreferenceList::new(junior.id, ids));
    }

    Cohort {
        team_leads,
        juniors,
        team_lead_preferences,
        junior_preferences,
    }
}
