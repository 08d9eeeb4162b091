//! Auth form state: the core session state plus which element has focus.

use warung_core::auth::AuthState;

/// Focusable elements on the login and register forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AuthFocus {
    #[default]
    Email,
    Password,
    ConfirmPassword,
    Role,
    RememberMe,
    Submit,
    /// "Daftar" link on the login form, "Masuk" link on the register form.
    SwitchScreen,
}

impl AuthFocus {
    /// True for elements that accept typed characters.
    pub fn is_text_field(self) -> bool {
        matches!(
            self,
            AuthFocus::Email | AuthFocus::Password | AuthFocus::ConfirmPassword
        )
    }
}

const LOGIN_RING: &[AuthFocus] = &[
    AuthFocus::Email,
    AuthFocus::Password,
    AuthFocus::Role,
    AuthFocus::RememberMe,
    AuthFocus::Submit,
    AuthFocus::SwitchScreen,
];

const REGISTER_RING: &[AuthFocus] = &[
    AuthFocus::Email,
    AuthFocus::Password,
    AuthFocus::ConfirmPassword,
    AuthFocus::Role,
    AuthFocus::Submit,
    AuthFocus::SwitchScreen,
];

/// Session state plus form focus.
#[derive(Debug, Default)]
pub struct AuthFormState {
    pub state: AuthState,
    pub focus: AuthFocus,
}

impl AuthFormState {
    fn ring(register: bool) -> &'static [AuthFocus] {
        if register { REGISTER_RING } else { LOGIN_RING }
    }

    /// Position of the current focus in the active ring. Focus left over
    /// from the other screen (e.g. RememberMe after switching to register)
    /// resolves to the first element.
    fn ring_pos(&self, register: bool) -> usize {
        Self::ring(register)
            .iter()
            .position(|f| *f == self.focus)
            .unwrap_or(0)
    }

    pub fn focus_next(&mut self, register: bool) {
        let ring = Self::ring(register);
        self.focus = ring[(self.ring_pos(register) + 1) % ring.len()];
    }

    pub fn focus_prev(&mut self, register: bool) {
        let ring = Self::ring(register);
        let pos = self.ring_pos(register);
        self.focus = ring[(pos + ring.len() - 1) % ring.len()];
    }

    pub fn reset_focus(&mut self) {
        self.focus = AuthFocus::Email;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_ring_skips_confirm_password() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::Password;
        form.focus_next(false);
        assert_eq!(form.focus, AuthFocus::Role);
    }

    #[test]
    fn register_ring_skips_remember_me() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::Role;
        form.focus_next(true);
        assert_eq!(form.focus, AuthFocus::Submit);
    }

    #[test]
    fn focus_wraps_both_ways() {
        let mut form = AuthFormState::default();
        form.focus_prev(false);
        assert_eq!(form.focus, AuthFocus::SwitchScreen);
        form.focus_next(false);
        assert_eq!(form.focus, AuthFocus::Email);
    }

    #[test]
    fn stale_focus_resolves_to_first_element() {
        let mut form = AuthFormState::default();
        form.focus = AuthFocus::RememberMe;
        // RememberMe is not on the register ring.
        form.focus_next(true);
        assert_eq!(form.focus, AuthFocus::Password);
    }
}
