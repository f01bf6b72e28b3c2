use crate::types::{Draft, Participant};

pub const LOAD_ERROR: &str = "Failed to load leaderboard data. Please try again later.";

/// Everything the leaderboard view owns. The list is a transient cache:
/// loads replace it wholesale, mutations never touch it directly.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct LeaderboardState {
    pub participants: Vec<Participant>,
    pub loading: bool,
    pub error: Option<String>,
    pub show_form: bool,
    pub draft: Draft,
}

impl LeaderboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn load_start(&mut self) {
        self.loading = true;
    }

    pub fn load_success(&mut self, participants: Vec<Participant>) {
        self.participants = participants;
        self.error = None;
        self.loading = false;
    }

    /// Previous rows stay visible; only the banner changes.
    pub fn load_failure(&mut self) {
        self.error = Some(LOAD_ERROR.to_string());
        self.loading = false;
    }

    /// After the backend accepted the new entrant: clear the form for the
    /// next one. The list itself is refreshed by the follow-up load.
    pub fn create_succeeded(&mut self) {
        self.draft = Draft::default();
        self.show_form = false;
    }

    pub fn open_form(&mut self) {
        self.show_form = true;
    }

    pub fn close_form(&mut self) {
        self.show_form = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DEFAULT_AVATAR;

    fn entrant(id: u32, score: u32) -> Participant {
        Participant {
            id,
            name: "Byte Lasso".to_string(),
            school: "Ted TV Institute".to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            score,
        }
    }

    #[test]
    fn starts_empty_and_idle() {
        let state = LeaderboardState::new();
        assert!(state.participants.is_empty());
        assert!(!state.loading);
        assert!(state.error.is_none());
        assert!(!state.show_form);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn load_success_replaces_list_and_clears_error() {
        let mut state = LeaderboardState::new();
        state.load_start();
        assert!(state.loading);
        state.load_failure();
        assert_eq!(state.error.as_deref(), Some(LOAD_ERROR));

        state.load_start();
        state.load_success(vec![entrant(1, 120), entrant(2, 90)]);
        assert_eq!(state.participants.len(), 2);
        assert!(state.error.is_none());
        assert!(!state.loading);
    }

    #[test]
    fn load_failure_retains_previous_list() {
        let mut state = LeaderboardState::new();
        state.load_success(vec![entrant(1, 120)]);
        state.load_start();
        state.load_failure();
        assert_eq!(state.participants, vec![entrant(1, 120)]);
        assert!(!state.loading);
    }

    #[test]
    fn create_succeeded_resets_draft_and_hides_form() {
        let mut state = LeaderboardState::new();
        state.open_form();
        state.draft.name = "Elon Rust".to_string();
        state.draft.school = "Mars Robotics".to_string();
        state.draft.avatar = "rocket".to_string();
        state.draft.score = 130;

        state.create_succeeded();
        assert!(!state.show_form);
        assert_eq!(state.draft, Draft::default());
    }

    #[test]
    fn closing_form_keeps_draft_for_reopen() {
        let mut state = LeaderboardState::new();
        state.open_form();
        state.draft.name = "Steve Bots".to_string();
        state.close_form();
        assert_eq!(state.draft.name, "Steve Bots");
    }
}
