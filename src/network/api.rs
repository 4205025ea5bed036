use async_trait::async_trait;

use crate::common::{ActionReply, ActivityCatalog, Enrollment};
use crate::error::ApiError;

/// The three calls the client makes against the activities backend.
#[async_trait]
pub trait ActivityApi: Send + Sync {
    /// `GET /activities`
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError>;

    /// `POST /activities/{name}/signup?email={email}`
    async fn signup(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError>;

    /// `DELETE /activities/{name}/unregister?email={email}`
    async fn unregister(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError>;
}
