use tokio::sync::mpsc;

use crate::common::{ActionReply, ClientCommand, ClientEvent, Enrollment, StatusUpdate};
use crate::error::ApiError;

use super::ActivityApi;

pub const FALLBACK_DETAIL: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const SIGNUP_NOT_REFRESHED: &str =
    "Signed up successfully but failed to refresh the list. Please reload the page.";
pub const UNREGISTER_FAILED: &str = "Failed to unregister participant. Please try again.";

/// Runs signup/unregister/reload sequences against an `ActivityApi` and
/// reports every outcome to the UI as `ClientEvent`s. Errors never leave this
/// type; they become status messages.
#[derive(Clone)]
pub struct ActivityClient<A> {
    api: A,
    event_sender: mpsc::Sender<ClientEvent>,
}

impl<A> ActivityClient<A>
where
    A: ActivityApi + Clone + 'static,
{
    pub fn new(api: A, event_sender: mpsc::Sender<ClientEvent>) -> Self {
        Self { api, event_sender }
    }

    /// Serves commands until the UI drops its sender. Each command gets its own
    /// task so a slow request never blocks the next click.
    pub async fn run(self, mut command_receiver: mpsc::Receiver<ClientCommand>) {
        log::info!("API worker started");

        while let Some(command) = command_receiver.recv().await {
            let client = self.clone();
            tokio::spawn(async move {
                client.handle_command(command).await;
            });
        }

        log::info!("Command channel closed, API worker stopping");
    }

    pub async fn handle_command(&self, command: ClientCommand) {
        match command {
            ClientCommand::LoadActivities => {
                // Failure is already rendered as the fallback list.
                let _ = self.load_activities().await;
            }
            ClientCommand::Signup(enrollment) => self.signup(enrollment).await,
            ClientCommand::Unregister(enrollment) => self.unregister(enrollment).await,
        }
    }

    /// Fetches the list and replaces the UI snapshot, or voids it on failure.
    pub async fn load_activities(&self) -> Result<(), ApiError> {
        match self.api.fetch_activities().await {
            Ok(catalog) => {
                log::info!("Loaded {} activities", catalog.len());
                self.emit(ClientEvent::CatalogReplaced(catalog)).await;
                Ok(())
            }
            Err(err) => {
                log::error!("Error fetching activities: {err}");
                self.emit(ClientEvent::CatalogUnavailable).await;
                Err(err)
            }
        }
    }

    pub async fn signup(&self, enrollment: Enrollment) {
        log::info!(
            "Signing up {} for {}",
            enrollment.email,
            enrollment.activity
        );

        let status = match self.signup_and_reconcile(&enrollment).await {
            Ok(reply) => {
                self.emit(ClientEvent::SignupAccepted).await;
                StatusUpdate::success(reply.message)
            }
            Err(ApiError::Reconcile(err)) => {
                log::error!("Error updating activities after signup: {err}");
                StatusUpdate::warning(SIGNUP_NOT_REFRESHED)
            }
            Err(ApiError::Server { status, detail }) => {
                log::error!("Signup rejected with HTTP {status}");
                StatusUpdate::error(detail.unwrap_or_else(|| FALLBACK_DETAIL.to_string()))
            }
            Err(err) => {
                log::error!("Error signing up: {err}");
                StatusUpdate::error(SIGNUP_FAILED)
            }
        };

        self.emit(ClientEvent::Status(status)).await;
    }

    async fn signup_and_reconcile(&self, enrollment: &Enrollment) -> Result<ActionReply, ApiError> {
        let reply = self.api.signup(enrollment).await?;
        self.load_activities()
            .await
            .map_err(|err| ApiError::Reconcile(Box::new(err)))?;
        Ok(reply)
    }

    /// Unlike signup, a failed refresh after a successful removal is reported
    /// as a plain unregister failure.
    pub async fn unregister(&self, enrollment: Enrollment) {
        log::info!(
            "Unregistering {} from {}",
            enrollment.email,
            enrollment.activity
        );

        let status = match self.api.unregister(&enrollment).await {
            Ok(reply) => {
                self.emit(ClientEvent::Status(StatusUpdate::success(reply.message)))
                    .await;
                match self.load_activities().await {
                    Ok(()) => return,
                    Err(err) => {
                        log::error!("Error unregistering participant: {err}");
                        StatusUpdate::error(UNREGISTER_FAILED)
                    }
                }
            }
            Err(ApiError::Server { status, detail }) => {
                log::error!("Unregister rejected with HTTP {status}");
                StatusUpdate::error(detail.unwrap_or_else(|| FALLBACK_DETAIL.to_string()))
            }
            Err(err) => {
                log::error!("Error unregistering participant: {err}");
                StatusUpdate::error(UNREGISTER_FAILED)
            }
        };

        self.emit(ClientEvent::Status(status)).await;
    }

    async fn emit(&self, event: ClientEvent) {
        if let Err(err) = self.event_sender.send(event).await {
            log::warn!("Failed to notify UI: {err}");
        }
    }
}
