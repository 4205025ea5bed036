use super::types::Enrollment;

/// Commands the UI sends down to the API worker.
#[derive(Debug, Clone)]
pub enum ClientCommand {
    /// Fetch the full activity list and replace the rendered snapshot.
    LoadActivities,
    Signup(Enrollment),
    /// Remove one participant from an activity (organizer action).
    Unregister(Enrollment),
}
