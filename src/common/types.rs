use std::collections::HashSet;
use std::fmt;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

/// Wire shape of one entry in `GET /activities`, keyed by activity name.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActivityDetails {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    #[serde(default)]
    pub participants: Vec<String>,
}

/// Domain model of one activity as listed by the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
}

impl Activity {
    fn from_entry(name: String, details: ActivityDetails) -> Self {
        Self {
            name,
            description: details.description,
            schedule: details.schedule,
            max_participants: details.max_participants,
            participants: details.participants,
        }
    }

    /// Free places left. Not clamped: an overbooked activity reports a negative count.
    pub fn spots_left(&self) -> i64 {
        i64::from(self.max_participants) - self.participants.len() as i64
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|participant| participant == email)
    }
}

/// Read-only snapshot of every activity, in the order the server listed them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActivityCatalog {
    activities: Vec<Activity>,
}

impl ActivityCatalog {
    pub fn new(activities: Vec<Activity>) -> Self {
        Self { activities }
    }

    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    pub fn get(&self, name: &str) -> Option<&Activity> {
        self.activities.iter().find(|activity| activity.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.activities.iter().map(|activity| activity.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}

impl<'de> Deserialize<'de> for ActivityCatalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct CatalogVisitor;

        impl<'de> Visitor<'de> for CatalogVisitor {
            type Value = ActivityCatalog;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a map of activity name to activity details")
            }

            fn visit_map<M>(self, mut map: M) -> Result<Self::Value, M::Error>
            where
                M: MapAccess<'de>,
            {
                let mut seen = HashSet::new();
                let mut activities = Vec::with_capacity(map.size_hint().unwrap_or(0));

                while let Some((name, details)) = map.next_entry::<String, ActivityDetails>()? {
                    if !seen.insert(name.clone()) {
                        return Err(de::Error::custom(format!(
                            "duplicate activity `{name}`"
                        )));
                    }
                    activities.push(Activity::from_entry(name, details));
                }

                Ok(ActivityCatalog { activities })
            }
        }

        deserializer.deserialize_map(CatalogVisitor)
    }
}

/// Identifies one participant of one activity; the payload of signup and unregister.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub activity: String,
    pub email: String,
}

impl Enrollment {
    pub fn new(activity: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            activity: activity.into(),
            email: email.into(),
        }
    }
}

/// Body of a 2xx reply to signup/unregister.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ActionReply {
    pub message: String,
}

/// Body of an error reply. `detail` is only trusted when it is a plain string;
/// validation errors carry a list there instead.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorReply {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

impl ErrorReply {
    pub fn into_detail(self) -> Option<String> {
        match self.detail {
            Some(serde_json::Value::String(detail)) if !detail.is_empty() => Some(detail),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Success,
    Error,
    Warning,
}

/// A status message as produced by an operation, before it is timed by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub text: String,
    pub kind: StatusKind,
}

impl StatusUpdate {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Error,
        }
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: StatusKind::Warning,
        }
    }
}
