//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyEvent};

use crate::effects::UiEffect;
use crate::events::{AuthUiEvent, UiEvent};
use crate::features::detail::DetailState;
use crate::mutations::{NavTarget, StateMutation};
use crate::state::{AppState, Screen};
use crate::{auth, detail, home};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => {
            app.spinner_frame = app.spinner_frame.wrapping_add(1);
            if app.screen == Screen::Splash && app.splash.done() {
                apply_mutations(app, vec![StateMutation::Navigate(after_splash(app))]);
            }
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::Auth(auth_event) => {
            let mutations = match auth_event {
                AuthUiEvent::SubmitResult { flow, result } => {
                    auth::handle_submit_result(&mut app.auth, flow, result)
                }
                AuthUiEvent::LogoutResult { result } => {
                    auth::handle_logout_result(&mut app.auth, result)
                }
            };
            apply_mutations(app, mutations);
            vec![]
        }
        UiEvent::TaskStarted { kind, started } => {
            app.tasks.state_mut(kind).on_started(&started);
            vec![]
        }
        UiEvent::TaskCompleted { kind, completed } => {
            let ok = app.tasks.state_mut(kind).finish_if_active(completed.id);
            if ok {
                update(app, *completed.result)
            } else {
                vec![]
            }
        }
    }
}

fn after_splash(app: &AppState) -> NavTarget {
    if app.auth.state.is_logged_in {
        NavTarget::Home
    } else {
        NavTarget::Login
    }
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Paste(text) => {
            match app.screen {
                Screen::Login | Screen::Register => auth::handle_paste(&mut app.auth, &text),
                Screen::Home if app.home.search_active => {
                    let cleaned: String = text.chars().filter(|c| !c.is_control()).collect();
                    app.home.query.push_str(&cleaned);
                    app.home.selected = 0;
                }
                _ => {}
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    match app.screen {
        Screen::Splash => {
            // Any key skips the dwell.
            let target = after_splash(app);
            apply_mutations(app, vec![StateMutation::Navigate(target)]);
            vec![]
        }
        Screen::Login => {
            let submit_running = app.tasks.submit.is_running();
            let (effects, mutations) =
                auth::handle_login_key(&mut app.auth, &mut app.task_seq, submit_running, key);
            apply_mutations(app, mutations);
            effects
        }
        Screen::Register => {
            let submit_running = app.tasks.submit.is_running();
            let (effects, mutations) =
                auth::handle_register_key(&mut app.auth, &mut app.task_seq, submit_running, key);
            apply_mutations(app, mutations);
            effects
        }
        Screen::Home => {
            let logout_running = app.tasks.logout.is_running();
            let (effects, mutations) =
                home::handle_key(&mut app.home, &mut app.task_seq, logout_running, key);
            apply_mutations(app, mutations);
            effects
        }
        Screen::Detail => match app.detail {
            Some(mut detail_state) => {
                let (effects, mutations) = detail::handle_key(&mut detail_state, key);
                app.detail = Some(detail_state);
                apply_mutations(app, mutations);
                effects
            }
            None => {
                apply_mutations(app, vec![StateMutation::Navigate(NavTarget::Home)]);
                vec![]
            }
        },
    }
}

// ============================================================================
// StateMutation Dispatcher
// ============================================================================

fn apply_mutations(app: &mut AppState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Navigate(target) => navigate(app, target),
        }
    }
}

fn navigate(app: &mut AppState, target: NavTarget) {
    match target {
        NavTarget::Login => {
            app.screen = Screen::Login;
            app.detail = None;
        }
        NavTarget::Register => {
            app.screen = Screen::Register;
            app.detail = None;
        }
        NavTarget::Home => {
            app.screen = Screen::Home;
            app.detail = None;
            app.home.clamp_selection();
        }
        NavTarget::Detail { product_id } => {
            app.detail = Some(DetailState::new(product_id));
            app.screen = Screen::Detail;
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyCode, KeyEventKind, KeyEventState, KeyModifiers};
    use tempfile::tempdir;
    use warung_core::auth::{SubmitFlow, SubmitOutcome};
    use warung_core::prefs::PrefStore;

    use super::*;
    use crate::common::{TaskCompleted, TaskId, TaskKind, TaskStarted};

    fn app_in(dir: &tempfile::TempDir) -> AppState {
        AppState::new(PrefStore::open(dir.path().join("prefs.toml")))
    }

    fn key_event(code: KeyCode) -> UiEvent {
        UiEvent::Terminal(Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }))
    }

    #[test]
    fn splash_key_skips_to_login_when_logged_out() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);

        update(&mut app, key_event(KeyCode::Char('x')));
        assert_eq!(app.screen, Screen::Login);
    }

    #[test]
    fn splash_skips_to_home_with_a_restored_session() {
        let dir = tempdir().unwrap();
        let store = PrefStore::open(dir.path().join("prefs.toml"));
        store.set_remember_me(true).unwrap();
        store.save_credentials("budi@kampus.ac.id", "rahasia1").unwrap();
        store.set_logged_in(true).unwrap();

        let mut app = AppState::new(store);
        assert!(app.auth.state.is_logged_in);

        update(&mut app, key_event(KeyCode::Enter));
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn submit_enter_raises_loading_and_emits_effect() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Login;
        app.auth.state.update_email("budi@kampus.ac.id");
        app.auth.state.update_password("rahasia1");

        let effects = update(&mut app, key_event(KeyCode::Enter));

        assert!(app.auth.state.is_loading);
        assert!(matches!(effects.as_slice(), [UiEffect::Submit { .. }]));
    }

    #[test]
    fn completed_submit_task_navigates_home() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Login;
        app.auth.state.is_loading = true;

        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Submit,
                started: TaskStarted { id: TaskId(7) },
            },
        );
        assert!(app.tasks.submit.is_running());

        let result = UiEvent::Auth(AuthUiEvent::SubmitResult {
            flow: SubmitFlow::Login,
            result: Ok(SubmitOutcome {
                logged_in: true,
                ..Default::default()
            }),
        });
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Submit,
                completed: TaskCompleted {
                    id: TaskId(7),
                    result: Box::new(result),
                },
            },
        );

        assert!(!app.tasks.submit.is_running());
        assert!(!app.auth.state.is_loading);
        assert_eq!(app.screen, Screen::Home);
    }

    #[test]
    fn stale_task_completion_is_ignored() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Login;

        update(
            &mut app,
            UiEvent::TaskStarted {
                kind: TaskKind::Submit,
                started: TaskStarted { id: TaskId(2) },
            },
        );

        let result = UiEvent::Auth(AuthUiEvent::SubmitResult {
            flow: SubmitFlow::Login,
            result: Ok(SubmitOutcome {
                logged_in: true,
                ..Default::default()
            }),
        });
        update(
            &mut app,
            UiEvent::TaskCompleted {
                kind: TaskKind::Submit,
                completed: TaskCompleted {
                    id: TaskId(1),
                    result: Box::new(result),
                },
            },
        );

        // The stale result was dropped: still on login, task still active.
        assert_eq!(app.screen, Screen::Login);
        assert!(app.tasks.submit.is_running());
    }

    #[test]
    fn logout_result_returns_to_login_screen() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Home;
        app.auth.state.is_logged_in = true;

        update(
            &mut app,
            UiEvent::Auth(AuthUiEvent::LogoutResult { result: Ok(()) }),
        );

        assert_eq!(app.screen, Screen::Login);
        assert!(!app.auth.state.is_logged_in);
    }

    #[test]
    fn opening_a_product_sets_detail_state() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Home;

        update(&mut app, key_event(KeyCode::Enter));

        assert_eq!(app.screen, Screen::Detail);
        assert_eq!(app.detail.map(|d| d.product_id), Some(1));

        // Esc returns home and drops the detail state.
        update(&mut app, key_event(KeyCode::Esc));
        assert_eq!(app.screen, Screen::Home);
        assert_eq!(app.detail, None);
    }

    #[test]
    fn paste_lands_in_the_email_field() {
        let dir = tempdir().unwrap();
        let mut app = app_in(&dir);
        app.screen = Screen::Login;

        update(
            &mut app,
            UiEvent::Terminal(Event::Paste("budi@kampus.ac.id".to_string())),
        );

        assert_eq!(app.auth.state.email, "budi@kampus.ac.id");
    }
}
