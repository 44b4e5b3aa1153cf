//! Participant data model.
//!
//! - [`Participant`] and [`PreferenceList`]: raw input records
//! - [`PreferenceModel`]: validated rank tables for both groups
//! - [`Team`] and [`assemble_teams`]: output records

mod participant;
mod preferences;
mod team;

pub use participant::{Participant, ParticipantId, PreferenceList};
pub use preferences::{PreferenceModel, SatisfactionScale};
pub use team::{assemble_teams, Team};
