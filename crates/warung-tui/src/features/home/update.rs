//! Home feature reducer.
//!
//! Keys drive search, category tabs, product selection, and logout.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::state::HomeState;
use crate::common::TaskSeq;
use crate::effects::UiEffect;
use crate::mutations::{NavTarget, StateMutation};

type KeyResult = (Vec<UiEffect>, Vec<StateMutation>);

pub fn handle_key(
    home: &mut HomeState,
    task_seq: &mut TaskSeq,
    logout_running: bool,
    key: KeyEvent,
) -> KeyResult {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Char('c') if ctrl => (vec![UiEffect::Quit], vec![]),

        KeyCode::Char('l') if ctrl => {
            if logout_running {
                (vec![], vec![])
            } else {
                (
                    vec![UiEffect::Logout {
                        task: task_seq.next_id(),
                    }],
                    vec![],
                )
            }
        }

        KeyCode::Esc if home.search_active => {
            home.search_active = false;
            (vec![], vec![])
        }
        KeyCode::Esc => (vec![UiEffect::Quit], vec![]),

        KeyCode::Char('/') if !home.search_active => {
            home.search_active = true;
            (vec![], vec![])
        }

        KeyCode::Left => {
            home.prev_category();
            (vec![], vec![])
        }
        KeyCode::Right => {
            home.next_category();
            (vec![], vec![])
        }
        KeyCode::Up => {
            home.select_prev();
            (vec![], vec![])
        }
        KeyCode::Down => {
            home.select_next();
            (vec![], vec![])
        }

        KeyCode::Enter => match home.selected_product() {
            Some(product) => (
                vec![],
                vec![StateMutation::Navigate(NavTarget::Detail {
                    product_id: product.id,
                })],
            ),
            None => (vec![], vec![]),
        },

        KeyCode::Backspace if home.search_active => {
            home.query.pop();
            home.clamp_selection();
            (vec![], vec![])
        }
        KeyCode::Char(c) if home.search_active && !ctrl => {
            home.query.push(c);
            home.selected = 0;
            (vec![], vec![])
        }

        _ => (vec![], vec![]),
    }
}
