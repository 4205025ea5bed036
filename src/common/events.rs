use super::types::{ActivityCatalog, StatusUpdate};

/// Events the API worker sends up to the UI.
#[derive(Debug, Clone)]
pub enum ClientEvent {
    CatalogReplaced(ActivityCatalog),
    /// The list could not be loaded; the previous snapshot is void.
    CatalogUnavailable,
    Status(StatusUpdate),
    /// A signup went through and the list was reconciled; the form can be reset.
    SignupAccepted,
}
