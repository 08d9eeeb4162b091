//! Application state composition.
//!
//! The top-level state hierarchy for the TUI:
//!
//! ```text
//! AppState
//! ├── screen: Screen            (which screen is active)
//! ├── auth: AuthFormState       (session state + form focus)
//! ├── home: HomeState           (search, category tab, selection)
//! ├── detail: Option<DetailState> (set while the detail screen is open)
//! ├── splash: SplashState       (dwell timer)
//! ├── tasks: Tasks              (async submit/logout lifecycle)
//! └── store: PrefStore          (preference file handle, cloned into tasks)
//! ```
//!
//! The reducer in `crate::update` is the only place that mutates this.

use warung_core::prefs::PrefStore;

use crate::common::{TaskSeq, Tasks};
use crate::features::auth::AuthFormState;
use crate::features::detail::DetailState;
use crate::features::home::HomeState;
use crate::features::splash::SplashState;

/// Which screen owns the terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Splash,
    Login,
    Register,
    Home,
    Detail,
}

/// Combined application state for the TUI.
pub struct AppState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Active screen.
    pub screen: Screen,
    /// Auth session state plus form focus.
    pub auth: AuthFormState,
    /// Home screen browsing state.
    pub home: HomeState,
    /// Product detail state, present while the detail screen is open.
    pub detail: Option<DetailState>,
    /// Splash dwell state.
    pub splash: SplashState,
    /// Task id sequence for async operations.
    pub task_seq: TaskSeq,
    /// Task lifecycle state for async operations.
    pub tasks: Tasks,
    /// Preference store; cloned into submit/logout tasks.
    pub store: PrefStore,
    /// Spinner animation frame counter (submit in flight).
    pub spinner_frame: usize,
}

impl AppState {
    /// Creates the state and restores a remembered session from the store.
    pub fn new(store: PrefStore) -> Self {
        let mut auth = AuthFormState::default();
        auth.state.restore(&store);

        Self {
            should_quit: false,
            screen: Screen::Splash,
            auth,
            home: HomeState::default(),
            detail: None,
            splash: SplashState::new(),
            task_seq: TaskSeq::default(),
            tasks: Tasks::default(),
            store,
            spinner_frame: 0,
        }
    }
}
