//! In-memory stand-in for the activities backend, used by the client tests.

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::common::{ActionReply, Activity, ActivityCatalog, Enrollment};
use crate::error::ApiError;

use super::ActivityApi;

/// A canned failure for the next signup or unregister call.
#[derive(Debug, Clone, Copy)]
pub enum BrokenReply {
    /// Error status whose body carries no usable `detail`.
    WithoutDetail(u16),
    /// 2xx status with a body that is not JSON.
    Garbled,
}

impl BrokenReply {
    fn into_error(self) -> ApiError {
        match self {
            BrokenReply::WithoutDetail(status) => ApiError::Server {
                status,
                detail: None,
            },
            BrokenReply::Garbled => ApiError::Decode(
                serde_json::from_str::<serde_json::Value>("<html>ok</html>").unwrap_err(),
            ),
        }
    }
}

#[derive(Default)]
struct FakeBackend {
    activities: Vec<Activity>,
    failing_fetches: usize,
    fetch_calls: usize,
    broken_reply: Option<BrokenReply>,
}

/// Mirrors the server's replies for signup/unregister and can be told to fail
/// the next list fetches.
#[derive(Clone, Default)]
pub struct FakeActivityApi {
    backend: Arc<Mutex<FakeBackend>>,
}

impl FakeActivityApi {
    pub fn with_activities(activities: Vec<Activity>) -> Self {
        Self {
            backend: Arc::new(Mutex::new(FakeBackend {
                activities,
                ..FakeBackend::default()
            })),
        }
    }

    /// The next `count` calls to `fetch_activities` answer with HTTP 503.
    pub async fn fail_next_fetches(&self, count: usize) {
        self.backend.lock().await.failing_fetches = count;
    }

    /// The next signup or unregister fails with `reply` without touching the list.
    pub async fn break_next_reply(&self, reply: BrokenReply) {
        self.backend.lock().await.broken_reply = Some(reply);
    }

    pub async fn fetch_calls(&self) -> usize {
        self.backend.lock().await.fetch_calls
    }
}

pub fn activity(name: &str, max_participants: u32, participants: &[&str]) -> Activity {
    Activity {
        name: name.to_string(),
        description: format!("{name} description"),
        schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
        max_participants,
        participants: participants.iter().map(|p| p.to_string()).collect(),
    }
}

fn rejected(status: u16, detail: &str) -> ApiError {
    ApiError::Server {
        status,
        detail: Some(detail.to_string()),
    }
}

#[async_trait]
impl ActivityApi for FakeActivityApi {
    async fn fetch_activities(&self) -> Result<ActivityCatalog, ApiError> {
        let mut backend = self.backend.lock().await;
        backend.fetch_calls += 1;

        if backend.failing_fetches > 0 {
            backend.failing_fetches -= 1;
            return Err(ApiError::Unavailable { status: 503 });
        }

        Ok(ActivityCatalog::new(backend.activities.clone()))
    }

    async fn signup(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError> {
        let mut backend = self.backend.lock().await;
        if let Some(reply) = backend.broken_reply.take() {
            return Err(reply.into_error());
        }

        let activity = backend
            .activities
            .iter_mut()
            .find(|activity| activity.name == enrollment.activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        if activity.has_participant(&enrollment.email) {
            return Err(rejected(400, "Student already signed up for this activity"));
        }

        activity.participants.push(enrollment.email.clone());
        Ok(ActionReply {
            message: format!("Signed up {} for {}", enrollment.email, enrollment.activity),
        })
    }

    async fn unregister(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError> {
        let mut backend = self.backend.lock().await;
        if let Some(reply) = backend.broken_reply.take() {
            return Err(reply.into_error());
        }

        let activity = backend
            .activities
            .iter_mut()
            .find(|activity| activity.name == enrollment.activity)
            .ok_or_else(|| rejected(404, "Activity not found"))?;

        if !activity.has_participant(&enrollment.email) {
            return Err(rejected(400, "Student is not registered for this activity"));
        }

        activity
            .participants
            .retain(|participant| participant != &enrollment.email);
        Ok(ActionReply {
            message: format!("Unregistered {} from {}", enrollment.email, enrollment.activity),
        })
    }
}
