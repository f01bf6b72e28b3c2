use crate::api::{ApiError, ParticipantsApi};
use crate::dialogs::Dialogs;
use crate::types::Draft;

pub const FILL_ALL_FIELDS: &str = "Please fill out all fields";
pub const CREATE_FAILED: &str = "Failed to add new challenger. Please try again.";
pub const DELETE_FAILED: &str = "Failed to delete participant. Please try again.";
pub const CONFIRM_DELETE: &str = "Are you sure you want to delete this participant?";

#[derive(Debug, PartialEq)]
pub enum CreateOutcome {
    /// Validation failed; no request was made. Draft and form are untouched.
    Rejected,
    /// Backend accepted the entrant; the caller must reload the list.
    Created,
    Failed(ApiError),
}

#[derive(Debug, PartialEq)]
pub enum DeleteOutcome {
    /// User declined the prompt; no request was made.
    Declined,
    /// Backend removed the entrant; the caller must reload the list.
    Deleted,
    Failed(ApiError),
}

/// Submit the creation form. Validation failures and backend failures both
/// notify the user and leave all local state to the caller unchanged, so
/// the draft survives for a retry.
pub async fn submit_draft(
    api: &impl ParticipantsApi,
    dialogs: &impl Dialogs,
    draft: &Draft,
) -> CreateOutcome {
    if !draft.is_valid() {
        dialogs.alert(FILL_ALL_FIELDS);
        return CreateOutcome::Rejected;
    }

    match api.create(draft).await {
        Ok(()) => CreateOutcome::Created,
        Err(err) => {
            dialogs.alert(CREATE_FAILED);
            CreateOutcome::Failed(err)
        }
    }
}

/// Delete an entrant after a blocking yes/no prompt. The cached list is
/// never mutated here: on success the caller re-runs the same load used for
/// initial population.
pub async fn remove_participant(
    api: &impl ParticipantsApi,
    dialogs: &impl Dialogs,
    id: u32,
) -> DeleteOutcome {
    if !dialogs.confirm(CONFIRM_DELETE) {
        return DeleteOutcome::Declined;
    }

    match api.delete(id).await {
        Ok(()) => DeleteOutcome::Deleted,
        Err(err) => {
            dialogs.alert(DELETE_FAILED);
            DeleteOutcome::Failed(err)
        }
    }
}
