//! Semantic game events derived from evaluator output.
//!
//! The engine only produces these; an external notification dispatcher turns
//! them into user-visible alerts. Payload construction and delivery are out
//! of scope here.

use crate::identifiers::{MissionIdentifier, PlayerIdentifier, ZoneIdentifier};
use crate::models::types::ZoneKind;
use crate::radar::Contact;

#[derive(Clone, Debug, PartialEq)]
pub enum GameEvent {
    MissionCompleted {
        subject_id: PlayerIdentifier,
        mission_id: MissionIdentifier,
    },
    ZoneEntered {
        subject_id: PlayerIdentifier,
        zone_id: ZoneIdentifier,
        kind: ZoneKind,
    },
    ZoneExited {
        subject_id: PlayerIdentifier,
        zone_id: ZoneIdentifier,
        kind: ZoneKind,
    },
    /// Another player showed up on the subject's radar
    ContactInRange {
        subject_id: PlayerIdentifier,
        contact: Contact,
    },
}

/// Wrap mission evaluator output as events
pub fn mission_completions(
    subject: &PlayerIdentifier,
    completed: impl IntoIterator<Item = MissionIdentifier>,
) -> Vec<GameEvent> {
    completed
        .into_iter()
        .map(|mission_id| GameEvent::MissionCompleted {
            subject_id: subject.clone(),
            mission_id,
        })
        .collect()
}

/// Wrap radar contacts as events
pub fn radar_contacts(
    subject: &PlayerIdentifier,
    contacts: impl IntoIterator<Item = Contact>,
) -> Vec<GameEvent> {
    contacts
        .into_iter()
        .map(|contact| GameEvent::ContactInRange {
            subject_id: subject.clone(),
            contact,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mission_completions() {
        let subject = PlayerIdentifier::new("p1");
        let events = mission_completions(
            &subject,
            vec![MissionIdentifier::new("m1"), MissionIdentifier::new("m2")],
        );

        assert_eq!(events.len(), 2);
        assert_eq!(
            events[0],
            GameEvent::MissionCompleted {
                subject_id: subject.clone(),
                mission_id: MissionIdentifier::new("m1"),
            }
        );
    }

    #[test]
    fn test_radar_contacts() {
        let subject = PlayerIdentifier::new("chaser");
        let events = radar_contacts(
            &subject,
            vec![Contact {
                id: PlayerIdentifier::new("runner"),
                distance_meters: 42.0,
            }],
        );

        assert!(matches!(
            &events[0],
            GameEvent::ContactInRange { contact, .. } if contact.distance_meters == 42.0
        ));
    }
}
