use chrono::{DateTime, TimeDelta, Utc};

use crate::common::{ActivityCatalog, ClientEvent, Enrollment, StatusKind, StatusUpdate};
use crate::error::FormError;

/// How long a status message stays on screen, in milliseconds.
pub const STATUS_DISPLAY_MS: i64 = 5_000;

/// What the activity list area currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListView {
    Loading,
    Loaded(ActivityCatalog),
    Unavailable,
}

/// The single status slot. Overwritten, never queued.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub kind: StatusKind,
    pub visible: bool,
    pub shown_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl StatusMessage {
    fn new(update: StatusUpdate, now: DateTime<Utc>) -> Self {
        Self {
            text: update.text,
            kind: update.kind,
            visible: true,
            shown_at: now,
            expires_at: now + TimeDelta::milliseconds(STATUS_DISPLAY_MS),
        }
    }
}

/// Local state of the UI.
pub struct AppState {
    pub list: ListView,
    pub selected_activity: String,
    pub email_input: String,
    pub status: Option<StatusMessage>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            list: ListView::Loading,
            selected_activity: String::new(),
            email_input: String::new(),
            status: None,
        }
    }

    pub fn catalog(&self) -> Option<&ActivityCatalog> {
        match &self.list {
            ListView::Loaded(catalog) => Some(catalog),
            ListView::Loading | ListView::Unavailable => None,
        }
    }

    pub fn apply(&mut self, event: ClientEvent, now: DateTime<Utc>) {
        match event {
            ClientEvent::CatalogReplaced(catalog) => self.replace_catalog(catalog),
            ClientEvent::CatalogUnavailable => {
                self.list = ListView::Unavailable;
                self.selected_activity.clear();
            }
            ClientEvent::Status(update) => self.show_status(update, now),
            ClientEvent::SignupAccepted => self.reset_form(),
        }
    }

    fn replace_catalog(&mut self, catalog: ActivityCatalog) {
        if !catalog.contains(&self.selected_activity) {
            self.selected_activity.clear();
        }
        self.list = ListView::Loaded(catalog);
    }

    pub fn reset_form(&mut self) {
        self.selected_activity.clear();
        self.email_input.clear();
    }

    /// Shows `update`, replacing whatever is on screen and restarting the timer.
    pub fn show_status(&mut self, update: StatusUpdate, now: DateTime<Utc>) {
        self.status = Some(StatusMessage::new(update, now));
    }

    /// Hides the status once its time is up. Returns `true` only on the call
    /// that actually hides it.
    pub fn expire_status(&mut self, now: DateTime<Utc>) -> bool {
        match self.status.as_mut() {
            Some(status) if status.visible && now >= status.expires_at => {
                status.visible = false;
                log::debug!(
                    "Status hidden after {}ms",
                    (now - status.shown_at).num_milliseconds()
                );
                true
            }
            _ => false,
        }
    }

    pub fn visible_status(&self) -> Option<&StatusMessage> {
        self.status.as_ref().filter(|status| status.visible)
    }

    /// Checks the signup form against the loaded list.
    pub fn signup_request(&self) -> Result<Enrollment, FormError> {
        let activity = self.selected_activity.as_str();
        if activity.is_empty() {
            return Err(FormError::NoActivity);
        }

        if !self
            .catalog()
            .is_some_and(|catalog| catalog.contains(activity))
        {
            return Err(FormError::UnknownActivity(activity.to_string()));
        }

        let email = self.email_input.trim();
        if email.is_empty() {
            return Err(FormError::EmptyEmail);
        }

        Ok(Enrollment::new(activity, email))
    }
}
