//! Auth feature reducer.
//!
//! Key handling for the login and register forms, plus application of async
//! submit and logout results. All auth state mutations happen here; the
//! runtime only executes the returned effects.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use warung_core::auth::{Role, SubmitFlow, SubmitOutcome};

use super::state::{AuthFocus, AuthFormState};
use crate::common::TaskSeq;
use crate::effects::UiEffect;
use crate::mutations::{NavTarget, StateMutation};

type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

/// Handles a key press on the login form.
pub fn handle_login_key(
    form: &mut AuthFormState,
    task_seq: &mut TaskSeq,
    submit_running: bool,
    key: KeyEvent,
) -> KeyResult {
    handle_form_key(form, task_seq, submit_running, key, false)
}

/// Handles a key press on the register form.
pub fn handle_register_key(
    form: &mut AuthFormState,
    task_seq: &mut TaskSeq,
    submit_running: bool,
    key: KeyEvent,
) -> KeyResult {
    handle_form_key(form, task_seq, submit_running, key, true)
}

fn handle_form_key(
    form: &mut AuthFormState,
    task_seq: &mut TaskSeq,
    submit_running: bool,
    key: KeyEvent,
    register: bool,
) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![]),
        KeyCode::Esc if register => {
            form.reset_focus();
            (vec![], vec![StateMutation::Navigate(NavTarget::Login)])
        }
        KeyCode::Esc => (vec![UiEffect::Quit], vec![]),

        KeyCode::Tab | KeyCode::Down => {
            form.focus_next(register);
            (vec![], vec![])
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus_prev(register);
            (vec![], vec![])
        }

        // Visibility toggle works from anywhere on the form.
        KeyCode::Char('t') if ctrl => {
            form.state.toggle_password_visibility();
            (vec![], vec![])
        }

        KeyCode::Enter => handle_enter(form, task_seq, submit_running, register),

        KeyCode::Left | KeyCode::Right if form.focus == AuthFocus::Role => {
            let role = if key.code == KeyCode::Left {
                Role::Buyer
            } else {
                Role::Seller
            };
            form.state.update_role(role);
            (vec![], vec![])
        }

        KeyCode::Char(' ') if form.focus == AuthFocus::RememberMe => {
            let remember = !form.state.remember_me;
            form.state.update_remember_me(remember);
            (vec![], vec![])
        }
        KeyCode::Char(' ') if form.focus == AuthFocus::Role => {
            let role = match form.state.role {
                Role::Buyer => Role::Seller,
                Role::Seller => Role::Buyer,
            };
            form.state.update_role(role);
            (vec![], vec![])
        }

        KeyCode::Backspace if form.focus.is_text_field() => {
            edit_focused_field(form, |value| {
                value.pop();
            });
            (vec![], vec![])
        }
        KeyCode::Char(c) if !ctrl && form.focus.is_text_field() => {
            edit_focused_field(form, |value| value.push(c));
            (vec![], vec![])
        }

        _ => (vec![], vec![]),
    }
}

fn handle_enter(
    form: &mut AuthFormState,
    task_seq: &mut TaskSeq,
    submit_running: bool,
    register: bool,
) -> KeyResult {
    match form.focus {
        AuthFocus::SwitchScreen => {
            form.reset_focus();
            let target = if register {
                NavTarget::Login
            } else {
                NavTarget::Register
            };
            (vec![], vec![StateMutation::Navigate(target)])
        }
        AuthFocus::RememberMe => {
            let remember = !form.state.remember_me;
            form.state.update_remember_me(remember);
            (vec![], vec![])
        }
        _ => submit(form, task_seq, submit_running, register),
    }
}

/// Starts a submit unless one is already in flight.
///
/// `begin_submit` clears prior errors and raises the loading flag; the
/// request snapshot is taken afterwards so the task sees exactly the
/// submitted values.
fn submit(
    form: &mut AuthFormState,
    task_seq: &mut TaskSeq,
    submit_running: bool,
    register: bool,
) -> KeyResult {
    if submit_running || !form.state.begin_submit() {
        return (vec![], vec![]);
    }

    let flow = if register {
        SubmitFlow::Register
    } else {
        SubmitFlow::Login
    };
    let effect = UiEffect::Submit {
        task: task_seq.next_id(),
        flow,
        request: form.state.submit_request(),
    };
    (vec![effect], vec![])
}

/// Handles pasted text: printable characters go into the focused field.
pub fn handle_paste(form: &mut AuthFormState, text: &str) {
    if !form.focus.is_text_field() {
        return;
    }
    let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
    if cleaned.is_empty() {
        return;
    }
    edit_focused_field(form, |value| value.push_str(&cleaned));
}

/// Applies an edit to the focused text field through the state holder's
/// update operations, so the field's error is cleared on change.
fn edit_focused_field(form: &mut AuthFormState, edit: impl FnOnce(&mut String)) {
    match form.focus {
        AuthFocus::Email => {
            let mut value = form.state.email.clone();
            edit(&mut value);
            form.state.update_email(&value);
        }
        AuthFocus::Password => {
            let mut value = form.state.password.clone();
            edit(&mut value);
            form.state.update_password(&value);
        }
        AuthFocus::ConfirmPassword => {
            let mut value = form.state.confirm_password.clone();
            edit(&mut value);
            form.state.update_confirm_password(&value);
        }
        AuthFocus::Role | AuthFocus::RememberMe | AuthFocus::Submit | AuthFocus::SwitchScreen => {}
    }
}

/// Applies the result of an async submit.
///
/// Validation failures land in the per-field error slots; a successful
/// submit navigates home. Store failures only resolve the loading flag;
/// the general-error slot stays reserved.
pub fn handle_submit_result(
    form: &mut AuthFormState,
    flow: SubmitFlow,
    result: Result<SubmitOutcome, String>,
) -> Vec<StateMutation> {
    match result {
        Ok(outcome) => {
            let logged_in = outcome.logged_in;
            form.state.finish_submit(outcome);
            if logged_in {
                form.reset_focus();
                vec![StateMutation::Navigate(NavTarget::Home)]
            } else {
                vec![]
            }
        }
        Err(msg) => {
            form.state.is_loading = false;
            tracing::error!(?flow, "submit failed: {msg}");
            vec![]
        }
    }
}

/// Applies the result of an async logout.
pub fn handle_logout_result(
    form: &mut AuthFormState,
    result: Result<(), String>,
) -> Vec<StateMutation> {
    match result {
        Ok(()) => {
            form.state.apply_logout();
            form.reset_focus();
            vec![StateMutation::Navigate(NavTarget::Login)]
        }
        Err(msg) => {
            tracing::error!("logout failed: {msg}");
            vec![]
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyEventKind;

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    fn ctrl_key(c: char) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Char(c),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn typing_fills_the_focused_field() {
        let mut form = AuthFormState::default();
        let mut seq = TaskSeq::default();

        for c in "abc".chars() {
            handle_login_key(&mut form, &mut seq, false, key(KeyCode::Char(c)));
        }
        assert_eq!(form.state.email, "abc");

        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Backspace));
        assert_eq!(form.state.email, "ab");
    }

    #[test]
    fn typing_clears_the_field_error() {
        let mut form = AuthFormState::default();
        form.state.email_error = Some("Email tidak boleh kosong".to_string());
        let mut seq = TaskSeq::default();

        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Char('a')));
        assert_eq!(form.state.email_error, None);
    }

    #[test]
    fn enter_emits_a_submit_effect_with_snapshot() {
        let mut form = AuthFormState::default();
        form.state.update_email("budi@kampus.ac.id");
        form.state.update_password("rahasia1");
        let mut seq = TaskSeq::default();

        let (effects, _) = handle_login_key(&mut form, &mut seq, false, key(KeyCode::Enter));

        assert!(form.state.is_loading);
        match effects.as_slice() {
            [UiEffect::Submit { flow, request, .. }] => {
                assert_eq!(*flow, SubmitFlow::Login);
                assert_eq!(request.email, "budi@kampus.ac.id");
            }
            other => panic!("unexpected effects: {other:?}"),
        }
    }

    #[test]
    fn enter_is_ignored_while_a_submit_runs() {
        let mut form = AuthFormState::default();
        let mut seq = TaskSeq::default();

        let (effects, _) = handle_login_key(&mut form, &mut seq, true, key(KeyCode::Enter));
        assert!(effects.is_empty());
        assert!(!form.state.is_loading);

        // Same when the loading flag is already up.
        form.state.is_loading = true;
        let (effects, _) = handle_login_key(&mut form, &mut seq, false, key(KeyCode::Enter));
        assert!(effects.is_empty());
    }

    #[test]
    fn space_toggles_remember_me_when_focused() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::RememberMe;
        let mut seq = TaskSeq::default();

        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Char(' ')));
        assert!(form.state.remember_me);
        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Char(' ')));
        assert!(!form.state.remember_me);
    }

    #[test]
    fn arrows_pick_the_role_when_focused() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::Role;
        let mut seq = TaskSeq::default();

        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Right));
        assert_eq!(form.state.role, Role::Seller);
        handle_login_key(&mut form, &mut seq, false, key(KeyCode::Left));
        assert_eq!(form.state.role, Role::Buyer);
    }

    #[test]
    fn ctrl_t_toggles_password_visibility() {
        let mut form = AuthFormState::default();
        let mut seq = TaskSeq::default();

        handle_login_key(&mut form, &mut seq, false, ctrl_key('t'));
        assert!(form.state.password_visible);
    }

    #[test]
    fn switch_link_navigates_between_forms() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::SwitchScreen;
        let mut seq = TaskSeq::default();

        let (_, mutations) = handle_login_key(&mut form, &mut seq, false, key(KeyCode::Enter));
        assert_eq!(
            mutations,
            vec![StateMutation::Navigate(NavTarget::Register)]
        );
        assert_eq!(form.focus, AuthFocus::Email);
    }

    #[test]
    fn successful_submit_navigates_home() {
        let mut form = AuthFormState::default();
        form.state.is_loading = true;

        let outcome = SubmitOutcome {
            logged_in: true,
            ..Default::default()
        };
        let mutations = handle_submit_result(&mut form, SubmitFlow::Login, Ok(outcome));

        assert_eq!(mutations, vec![StateMutation::Navigate(NavTarget::Home)]);
        assert!(form.state.is_logged_in);
        assert!(!form.state.is_loading);
    }

    #[test]
    fn failed_validation_stays_on_the_form() {
        let mut form = AuthFormState::default();
        form.state.is_loading = true;

        let outcome = SubmitOutcome {
            email_error: Some("Email tidak boleh kosong".to_string()),
            ..Default::default()
        };
        let mutations = handle_submit_result(&mut form, SubmitFlow::Login, Ok(outcome));

        assert!(mutations.is_empty());
        assert!(!form.state.is_logged_in);
        assert!(!form.state.is_loading);
        assert_eq!(
            form.state.email_error.as_deref(),
            Some("Email tidak boleh kosong")
        );
    }

    #[test]
    fn store_failure_resolves_loading_without_general_error() {
        let mut form = AuthFormState::default();
        form.state.is_loading = true;

        let mutations =
            handle_submit_result(&mut form, SubmitFlow::Login, Err("disk full".to_string()));

        assert!(mutations.is_empty());
        assert!(!form.state.is_loading);
        assert_eq!(form.state.general_error, None);
    }

    #[test]
    fn logout_result_returns_to_login() {
        let mut form = AuthFormState::default();
        form.state.is_logged_in = true;
        form.state.update_password("rahasia1");

        let mutations = handle_logout_result(&mut form, Ok(()));

        assert_eq!(mutations, vec![StateMutation::Navigate(NavTarget::Login)]);
        assert!(!form.state.is_logged_in);
        assert!(form.state.password.is_empty());
    }

    #[test]
    fn paste_goes_into_the_focused_field() {
        let mut form = AuthFormState::default();
        handle_paste(&mut form, "budi@kampus.ac.id\n");
        assert_eq!(form.state.email, "budi@kampus.ac.id");

        // Non-text focus ignores pastes.
        form.focus = AuthFocus::Submit;
        handle_paste(&mut form, "xyz");
        assert_eq!(form.state.email, "budi@kampus.ac.id");
    }
}
