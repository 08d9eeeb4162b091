//! Effect handler implementations.
//!
//! Pure async functions that perform the I/O for an effect and return the
//! result as a `UiEvent`; the runtime handles spawning and the task
//! lifecycle. Store failures are rendered to strings here so events stay
//! cheap to clone and log.

use warung_core::auth::{self, SubmitFlow, SubmitRequest};
use warung_core::prefs::PrefStore;

use crate::events::{AuthUiEvent, UiEvent};

/// Runs a login or register submit against the preference store.
pub async fn submit(flow: SubmitFlow, request: SubmitRequest, store: PrefStore) -> UiEvent {
    let result = match flow {
        SubmitFlow::Login => auth::evaluate_login(&request, &store),
        SubmitFlow::Register => auth::evaluate_register(&request, &store),
    }
    .map_err(|err| format!("{err:#}"));

    UiEvent::Auth(AuthUiEvent::SubmitResult { flow, result })
}

/// Clears the persisted session.
pub async fn logout(store: PrefStore) -> UiEvent {
    let result = auth::evaluate_logout(&store).map_err(|err| format!("{err:#}"));
    UiEvent::Auth(AuthUiEvent::LogoutResult { result })
}
