//! Auth feature: login and register forms over the core session state.

pub mod render;
mod state;
mod update;

pub use state::{AuthFocus, AuthFormState};
pub use update::{
    handle_login_key, handle_logout_result, handle_paste, handle_register_key,
    handle_submit_result,
};
