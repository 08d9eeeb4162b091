//! Detail feature reducer.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::DetailState;
use crate::effects::UiEffect;
use crate::mutations::{NavTarget, StateMutation};

type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

pub fn handle_key(detail: &mut DetailState, key: KeyEvent) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![]),
        KeyCode::Esc | KeyCode::Backspace => {
            (vec![], vec![StateMutation::Navigate(NavTarget::Home)])
        }
        KeyCode::Char('f') => {
            detail.toggle_favorite();
            (vec![], vec![])
        }
        _ => (vec![], vec![]),
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::{KeyEventKind, KeyEventState};

    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn esc_returns_home() {
        let mut detail = DetailState::new(3);
        let (_, mutations) = handle_key(&mut detail, key(KeyCode::Esc));
        assert_eq!(mutations, vec![StateMutation::Navigate(NavTarget::Home)]);
    }

    #[test]
    fn f_toggles_favorite() {
        let mut detail = DetailState::new(3);
        handle_key(&mut detail, key(KeyCode::Char('f')));
        assert!(detail.favorite);
        handle_key(&mut detail, key(KeyCode::Char('f')));
        assert!(!detail.favorite);
    }
}
