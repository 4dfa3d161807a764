//! Frontend Models
//!
//! Data structures matching the activities API.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

/// Activity data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Capacity minus roster size. Not clamped: an over-subscribed activity
    /// reports a negative number.
    pub fn spots_left(&self) -> i64 {
        self.max_participants - self.participants.len() as i64
    }
}

/// All activities keyed by name, in the order the server sent them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityBoard {
    entries: Vec<(String, Activity)>,
}

impl ActivityBoard {
    pub fn new(entries: Vec<(String, Activity)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.entries.iter().find(|(n, _)| n == name).map(|(_, a)| a)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Activity)> {
        self.entries.iter().map(|(n, a)| (n.as_str(), a))
    }
}

impl<'de> Deserialize<'de> for ActivityBoard {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct BoardVisitor;

        impl<'de> Visitor<'de> for BoardVisitor {
            type Value = ActivityBoard;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of activity name to activity")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut entries: Vec<(String, Activity)> = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, activity)) = map.next_entry::<String, Activity>()? {
                    // Later duplicates win, keeping the first position
                    match entries.iter().position(|(n, _)| *n == name) {
                        Some(i) => entries[i].1 = activity,
                        None => entries.push((name, activity)),
                    }
                }
                Ok(ActivityBoard { entries })
            }
        }

        deserializer.deserialize_map(BoardVisitor)
    }
}

/// Body of `POST /activities`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewActivity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
}

/// Success body of a mutation
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub message: Option<String>,
}

/// Failure body of any endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiDetail {
    #[serde(default)]
    pub detail: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_keeps_server_order() {
        let json = r#"{
            "Chess Club": {"description": "d", "schedule": "Fri", "max_participants": 12, "participants": []},
            "Art Studio": {"description": "d", "schedule": "Mon", "max_participants": 5, "participants": ["x@y.edu"]},
            "Band": {"description": "d", "schedule": "Tue", "max_participants": 30, "participants": []}
        }"#;
        let board: ActivityBoard = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = board.iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["Chess Club", "Art Studio", "Band"]);
        assert_eq!(board.get("Art Studio").unwrap().participants, vec!["x@y.edu"]);
    }

    #[test]
    fn test_missing_participants_defaults_to_empty() {
        let json = r#"{"Drama": {"description": "d", "schedule": "Wed", "max_participants": 3}}"#;
        let board: ActivityBoard = serde_json::from_str(json).unwrap();
        assert!(board.get("Drama").unwrap().participants.is_empty());
    }

    #[test]
    fn test_board_rejects_non_object() {
        assert!(serde_json::from_str::<ActivityBoard>("[]").is_err());
        assert!(serde_json::from_str::<ActivityBoard>(r#"{"detail": "nope"}"#).is_err());
    }

    #[test]
    fn test_spots_left_not_clamped() {
        let activity = Activity {
            description: String::new(),
            schedule: String::new(),
            max_participants: 1,
            participants: vec!["a@b.edu".into(), "c@d.edu".into(), "e@f.edu".into()],
        };
        assert_eq!(activity.spots_left(), -2);
    }

    #[test]
    fn test_message_and_detail_are_optional() {
        let msg: ApiMessage = serde_json::from_str("{}").unwrap();
        assert_eq!(msg.message, None);
        let detail: ApiDetail = serde_json::from_str(r#"{"detail": "Already signed up"}"#).unwrap();
        assert_eq!(detail.detail.as_deref(), Some("Already signed up"));
    }
}
