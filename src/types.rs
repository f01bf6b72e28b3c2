use serde::{Deserialize, Serialize};

/// How many rows the table shows after sorting.
pub const MAX_ROWS: usize = 15;

/// A leaderboard entrant as the backend returns it.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Participant {
    pub id: u32,
    pub name: String,
    pub school: String,
    #[serde(default = "default_avatar_id")]
    pub avatar: String,
    pub score: u32,
}

/// The in-progress, not-yet-submitted creation form state.
#[derive(Clone, Debug, Serialize, PartialEq)]
pub struct Draft {
    pub name: String,
    pub school: String,
    pub avatar: String,
    pub score: u32,
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            name: String::new(),
            school: String::new(),
            avatar: DEFAULT_AVATAR.to_string(),
            score: 0,
        }
    }
}

impl Draft {
    /// Name and school must both be filled in before submission.
    pub fn is_valid(&self) -> bool {
        !self.name.trim().is_empty() && !self.school.trim().is_empty()
    }
}

pub struct Avatar {
    pub id: &'static str,
    pub glyph: &'static str,
    pub label: &'static str,
}

pub const DEFAULT_AVATAR: &str = "robot1";

pub const AVATARS: [Avatar; 8] = [
    Avatar { id: "robot1", glyph: "🤖", label: "Robot" },
    Avatar { id: "rocket", glyph: "🚀", label: "Rocket" },
    Avatar { id: "scientist", glyph: "🧑‍🔬", label: "Scientist" },
    Avatar { id: "alien", glyph: "👽", label: "Alien" },
    Avatar { id: "computer", glyph: "💻", label: "Computer" },
    Avatar { id: "gear", glyph: "⚙️", label: "Gear" },
    Avatar { id: "robot2", glyph: "🦾", label: "Robotic Arm" },
    Avatar { id: "satellite", glyph: "🛰️", label: "Satellite" },
];

/// Glyph for an avatar id; anything unrecognized gets the default robot.
pub fn avatar_glyph(id: &str) -> &'static str {
    AVATARS
        .iter()
        .find(|a| a.id == id)
        .map(|a| a.glyph)
        .unwrap_or("🤖")
}

/// Scores are completion times in seconds, shown as m:ss.
pub fn format_time(secs: u32) -> String {
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// The rows actually rendered: ascending by score (lower time ranks
/// higher), ties kept in backend order, capped at [`MAX_ROWS`].
pub fn display_set(participants: &[Participant]) -> Vec<Participant> {
    let mut rows = participants.to_vec();
    rows.sort_by_key(|p| p.score);
    rows.truncate(MAX_ROWS);
    rows
}

fn default_avatar_id() -> String {
    DEFAULT_AVATAR.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entrant(id: u32, score: u32) -> Participant {
        Participant {
            id,
            name: format!("team {id}"),
            school: "ITE".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            score,
        }
    }

    #[test]
    fn format_time_pads_seconds_only() {
        assert_eq!(format_time(0), "0:00");
        assert_eq!(format_time(65), "1:05");
        assert_eq!(format_time(599), "9:59");
        assert_eq!(format_time(600), "10:00");
    }

    #[test]
    fn display_set_sorts_ascending_and_truncates() {
        let fetched: Vec<_> = (0..20).map(|i| entrant(i, 1000 - i)).collect();
        let rows = display_set(&fetched);
        assert_eq!(rows.len(), MAX_ROWS);
        assert!(rows.windows(2).all(|w| w[0].score <= w[1].score));
        // Fastest time comes first.
        assert_eq!(rows[0].id, 19);
    }

    #[test]
    fn display_set_keeps_backend_order_on_ties() {
        let fetched = vec![entrant(1, 90), entrant(2, 90), entrant(3, 30)];
        let rows = display_set(&fetched);
        assert_eq!(rows.iter().map(|p| p.id).collect::<Vec<_>>(), vec![3, 1, 2]);
    }

    #[test]
    fn display_set_smaller_than_cap_is_untruncated() {
        let fetched = vec![entrant(1, 5), entrant(2, 3)];
        assert_eq!(display_set(&fetched).len(), 2);
    }

    #[test]
    fn unknown_avatar_falls_back_to_default() {
        assert_eq!(avatar_glyph("not-an-avatar"), avatar_glyph(DEFAULT_AVATAR));
        assert_eq!(avatar_glyph("satellite"), "🛰️");
    }

    #[test]
    fn missing_avatar_deserializes_to_default() {
        let p: Participant =
            serde_json::from_str(r#"{"id":1,"name":"a","school":"b","score":42}"#).unwrap();
        assert_eq!(p.avatar, DEFAULT_AVATAR);
    }

    #[test]
    fn draft_requires_name_and_school() {
        let mut draft = Draft::default();
        assert!(!draft.is_valid());
        draft.name = "Circuit".to_string();
        assert!(!draft.is_valid());
        draft.school = "  ".to_string();
        assert!(!draft.is_valid());
        draft.school = "Terminator Tech".to_string();
        assert!(draft.is_valid());
    }
}
