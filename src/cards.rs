//! Card Projection
//!
//! Turns the board into the flat list the card view renders.

use crate::models::{Activity, ActivityBoard};

/// Everything one activity card displays
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<String>,
}

impl ActivityCard {
    pub fn from_activity(name: &str, activity: &Activity) -> Self {
        Self {
            name: name.to_string(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity.participants.clone(),
        }
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One card per activity, in board order
pub fn project_cards(board: &ActivityBoard) -> Vec<ActivityCard> {
    board
        .iter()
        .map(|(name, activity)| ActivityCard::from_activity(name, activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_activity(max: i64, participants: &[&str]) -> Activity {
        Activity {
            description: "Weekly meetup".to_string(),
            schedule: "Fridays, 3:30 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_one_card_per_activity_in_order() {
        let board = ActivityBoard::new(vec![
            ("Chess Club".to_string(), make_activity(12, &["michael@mergington.edu"])),
            ("Gym Class".to_string(), make_activity(30, &[])),
            ("Programming Class".to_string(), make_activity(20, &[])),
        ]);

        let cards = project_cards(&board);

        assert_eq!(cards.len(), board.len());
        assert_eq!(cards[0].name, "Chess Club");
        assert_eq!(cards[1].name, "Gym Class");
        assert_eq!(cards[2].name, "Programming Class");
        assert_eq!(cards[0].spots_left, 11);
    }

    #[test]
    fn test_empty_board_has_no_cards() {
        assert!(project_cards(&ActivityBoard::default()).is_empty());
    }

    #[test]
    fn test_oversubscribed_shows_negative_spots() {
        let card = ActivityCard::from_activity("Tiny", &make_activity(1, &["a@x.edu", "b@x.edu"]));
        assert_eq!(card.spots_left, -1);
        assert_eq!(card.availability(), "-1 spots left");
    }
}
