//! Session state machine for login, registration, and logout.
//!
//! `AuthState` is the observable record of the auth forms: field values,
//! per-field error messages, and the loading/logged-in flags. Field updates
//! clear the matching error. The composite operations validate every field,
//! persist through a [`PrefStore`], and flip the logged-in flag.
//!
//! ## Submit lifecycle
//!
//! A submit moves the state Idle → Validating → Idle (errors populated) or
//! Idle → Validating → LoggedIn. The validating phase is captured by
//! `is_loading`; re-entrant submits are refused while it is set. The UI layer
//! runs submits as async tasks built from a [`SubmitRequest`] snapshot and
//! applies the resulting [`SubmitOutcome`]; the synchronous `login`/`register`
//! methods here share the same evaluation functions, so the two paths cannot
//! diverge.

use anyhow::Result;

use crate::prefs::PrefStore;
use crate::validation;

/// Account role selected at login or registration.
///
/// Stored but not otherwise enforced; nothing in the prototype gates on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    #[default]
    Buyer,
    Seller,
}

impl Role {
    /// Stable name used as the persisted `user_role` value.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Buyer => "BUYER",
            Role::Seller => "SELLER",
        }
    }

    /// Parses a persisted role name; anything unrecognized is a buyer.
    pub fn from_stored(name: &str) -> Role {
        if name == Role::Seller.as_str() {
            Role::Seller
        } else {
            Role::Buyer
        }
    }

    /// Label shown in the role selector.
    pub fn display_name(self) -> &'static str {
        match self {
            Role::Buyer => "Pembeli",
            Role::Seller => "Penjual",
        }
    }
}

/// A registered user.
///
/// Constructed transiently at registration; only the role is persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Observable auth session state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub remember_me: bool,
    pub is_loading: bool,
    pub is_logged_in: bool,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    /// Reserved for non-field failures; never set by the current flow.
    pub general_error: Option<String>,
    pub password_visible: bool,
}

/// Snapshot of the fields a submit operates on.
///
/// The UI takes a snapshot when spawning the submit task so the evaluation
/// is independent of keystrokes that arrive while it runs.
#[derive(Debug, Clone)]
pub struct SubmitRequest {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub role: Role,
    pub remember_me: bool,
}

/// Which composite operation a submit runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitFlow {
    Login,
    Register,
}

/// Result of evaluating a submit: per-field errors plus the final
/// logged-in flag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubmitOutcome {
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub confirm_password_error: Option<String>,
    pub logged_in: bool,
}

impl SubmitOutcome {
    /// True when no field check failed.
    pub fn is_valid(&self) -> bool {
        self.email_error.is_none()
            && self.password_error.is_none()
            && self.confirm_password_error.is_none()
    }
}

/// Checks email and password presence and shape.
///
/// Both fields are checked independently; a bad email does not hide a bad
/// password.
fn check_credentials(email: &str, password: &str) -> (Option<String>, Option<String>) {
    let email_error = if validation::is_field_empty(email) {
        Some("Email tidak boleh kosong".to_string())
    } else if !validation::is_email_valid(email) {
        Some("Format email tidak valid".to_string())
    } else {
        None
    };

    let password_error = if validation::is_field_empty(password) {
        Some("Password tidak boleh kosong".to_string())
    } else if !validation::is_password_valid(password) {
        Some("Password minimal 6 karakter".to_string())
    } else {
        None
    };

    (email_error, password_error)
}

fn check_confirm(password: &str, confirm: &str) -> Option<String> {
    if validation::is_field_empty(confirm) {
        Some("Konfirmasi password tidak boleh kosong".to_string())
    } else if password != confirm {
        Some("Password tidak cocok".to_string())
    } else {
        None
    }
}

/// Evaluates a login: validates the snapshot and, when every check passes,
/// persists the session through `store`.
///
/// With remember-me set, credentials and role are saved; without it the
/// remember flag is written false and the credential keys are cleared. The
/// logged-in key is written last either way.
pub fn evaluate_login(req: &SubmitRequest, store: &PrefStore) -> Result<SubmitOutcome> {
    let (email_error, password_error) = check_credentials(&req.email, &req.password);
    let mut outcome = SubmitOutcome {
        email_error,
        password_error,
        ..Default::default()
    };

    if outcome.is_valid() {
        if req.remember_me {
            store.set_remember_me(true)?;
            store.save_credentials(&req.email, &req.password)?;
            store.set_user_role(req.role.as_str())?;
        } else {
            store.set_remember_me(false)?;
            store.clear_login_data()?;
        }
        store.set_logged_in(true)?;
        outcome.logged_in = true;
        tracing::debug!(remember = req.remember_me, "login accepted");
    }

    Ok(outcome)
}

/// Evaluates a registration. On success only the role is persisted; there
/// is no account backend behind this flow.
pub fn evaluate_register(req: &SubmitRequest, store: &PrefStore) -> Result<SubmitOutcome> {
    let (email_error, password_error) = check_credentials(&req.email, &req.password);
    let confirm_password_error = check_confirm(&req.password, &req.confirm_password);
    let mut outcome = SubmitOutcome {
        email_error,
        password_error,
        confirm_password_error,
        logged_in: false,
    };

    if outcome.is_valid() {
        let user = User {
            email: req.email.clone(),
            password: req.password.clone(),
            role: req.role,
        };
        store.set_user_role(user.role.as_str())?;
        store.set_logged_in(true)?;
        outcome.logged_in = true;
        tracing::debug!(role = user.role.as_str(), "registration accepted");
    }

    Ok(outcome)
}

/// Store side of a logout: the logged-in key is cleared, and the credential
/// keys too unless the stored remember-me flag is set.
pub fn evaluate_logout(store: &PrefStore) -> Result<()> {
    store.set_logged_in(false)?;
    if !store.remember_me() {
        store.clear_login_data()?;
    }
    Ok(())
}

impl AuthState {
    pub fn update_email(&mut self, email: &str) {
        self.email = email.to_string();
        self.email_error = None;
    }

    pub fn update_password(&mut self, password: &str) {
        self.password = password.to_string();
        self.password_error = None;
    }

    pub fn update_confirm_password(&mut self, confirm: &str) {
        self.confirm_password = confirm.to_string();
        self.confirm_password_error = None;
    }

    pub fn update_role(&mut self, role: Role) {
        self.role = role;
    }

    pub fn update_remember_me(&mut self, remember: bool) {
        self.remember_me = remember;
    }

    pub fn toggle_password_visibility(&mut self) {
        self.password_visible = !self.password_visible;
    }

    /// Snapshot of the current fields for a submit task.
    pub fn submit_request(&self) -> SubmitRequest {
        SubmitRequest {
            email: self.email.clone(),
            password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
            role: self.role,
            remember_me: self.remember_me,
        }
    }

    /// Clears prior submit errors and marks the state as loading.
    ///
    /// Returns false (and changes nothing) if a submit is already in
    /// flight.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_loading {
            return false;
        }
        self.email_error = None;
        self.password_error = None;
        self.confirm_password_error = None;
        self.general_error = None;
        self.is_loading = true;
        true
    }

    /// Applies a submit outcome and resolves the loading flag.
    pub fn finish_submit(&mut self, outcome: SubmitOutcome) {
        self.email_error = outcome.email_error;
        self.password_error = outcome.password_error;
        self.confirm_password_error = outcome.confirm_password_error;
        self.is_loading = false;
        if outcome.logged_in {
            self.is_logged_in = true;
        }
    }

    /// Runs the full login flow synchronously against `store`.
    pub fn login(&mut self, store: &PrefStore) -> Result<()> {
        if !self.begin_submit() {
            return Ok(());
        }
        self.resolve_submit(evaluate_login(&self.submit_request(), store))
    }

    /// Runs the full registration flow synchronously against `store`.
    pub fn register(&mut self, store: &PrefStore) -> Result<()> {
        if !self.begin_submit() {
            return Ok(());
        }
        self.resolve_submit(evaluate_register(&self.submit_request(), store))
    }

    fn resolve_submit(&mut self, result: Result<SubmitOutcome>) -> Result<()> {
        match result {
            Ok(outcome) => {
                self.finish_submit(outcome);
                Ok(())
            }
            Err(err) => {
                // The loading flag must resolve even when the store fails.
                self.is_loading = false;
                Err(err)
            }
        }
    }

    /// Logs out and applies the state side: logged-in flag reset and the
    /// password field cleared.
    pub fn logout(&mut self, store: &PrefStore) -> Result<()> {
        evaluate_logout(store)?;
        self.apply_logout();
        Ok(())
    }

    /// State side of a logout, applied after the store side succeeded.
    pub fn apply_logout(&mut self) {
        self.is_logged_in = false;
        self.password.clear();
    }

    /// Restores a remembered session from `store`, if one was persisted.
    ///
    /// Returns true when a session was restored.
    pub fn restore(&mut self, store: &PrefStore) -> bool {
        if !(store.is_logged_in() && store.remember_me()) {
            return false;
        }

        self.is_logged_in = true;
        self.email = store.email().unwrap_or_default();
        self.password = store.password().unwrap_or_default();
        self.remember_me = true;
        self.role = store
            .user_role()
            .as_deref()
            .map(Role::from_stored)
            .unwrap_or_default();
        tracing::debug!(email = %self.email, "session restored");
        true
    }
}
