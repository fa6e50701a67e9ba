use contracts::system::auth::UserInfo;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<UserInfo>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn is_organizer(&self) -> bool {
        self.user.as_ref().map(|u| u.is_organizer()).unwrap_or(false)
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(|u| u.is_admin()).unwrap_or(false)
    }
}

/// Provides [`AuthState`] to the whole tree and restores the session from a
/// stored token on startup.
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    Effect::new(move |prev: Option<()>| {
        if prev.is_some() {
            return;
        }
        spawn_local(async move {
            let Some(token) = storage::get_access_token() else {
                return;
            };
            match api::get_current_user(&token).await {
                Ok(user) => {
                    let _ = set_auth_state.try_set(AuthState { user: Some(user) });
                }
                Err(_) => {
                    // Stale or revoked token: drop it and stay signed out.
                    storage::clear_token();
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");
    (auth_state, set_auth_state)
}
