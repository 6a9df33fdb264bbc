use isukuhub_model::{DashboardSession, Role};
use yewdux::prelude::*;

/// Who signed in through the mock login or signup form. Nothing is
/// persisted; a reload forgets it.
#[derive(Clone, PartialEq, Debug)]
pub struct DemoUser {
    pub name: String,
    pub email: String,
}

impl DemoUser {
    /// Name shown for a login, which never asks for one.
    pub fn from_email(email: &str) -> Self {
        let name = email.split('@').next().unwrap_or(email).to_string();
        Self {
            name,
            email: email.to_string(),
        }
    }
}

#[derive(Default, Clone, PartialEq, Store)]
pub struct State {
    // === Dashboard (managed by the dashboard page) ===
    pub session: DashboardSession,

    // === Demo auth (managed by the login and signup pages) ===
    pub user: Option<DemoUser>,
}

impl State {
    /// Record a demo sign-in and open the dashboard as `role`.
    pub fn sign_in(&mut self, user: DemoUser, role: Role) {
        tracing::info!(email = %user.email, role = %role, "demo sign-in");
        self.user = Some(user);
        self.session = DashboardSession::new(role);
    }

    pub fn display_name(&self) -> &str {
        self.user.as_ref().map_or("Guest", |user| user.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use isukuhub_model::Tab;

    #[test]
    fn sign_in_resets_the_dashboard() {
        let mut state = State::default();
        state.session.select_tab(Tab::Payments);
        state.sign_in(DemoUser::from_email("amina@example.com"), Role::Recycler);

        assert_eq!(state.session.role(), Role::Recycler);
        assert_eq!(state.session.active_tab(), Tab::Overview);
        assert_eq!(state.display_name(), "amina");
    }

    #[test]
    fn guest_without_sign_in() {
        assert_eq!(State::default().display_name(), "Guest");
    }
}
