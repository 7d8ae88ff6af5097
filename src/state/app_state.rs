//! Application state definitions

use super::route::Route;
use super::workflow::{Workflow, WorkflowKind};

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    SignIn,
    Registration,
    /// Landing screen for a signed-in user
    Home,
}

impl View {
    pub fn for_route(route: Route) -> Self {
        match route {
            Route::Root => Self::Home,
            Route::SignIn => Self::SignIn,
            Route::Registration => Self::Registration,
        }
    }

    /// Views that mount a sign-in or registration workflow
    pub fn is_form_view(&self) -> bool {
        matches!(self, Self::SignIn | Self::Registration)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::Registration => "Create Account",
            Self::Home => "Home",
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    pub current_route: Option<Route>,
    pub current_view: View,
    /// The mounted workflow; `None` on the home screen
    pub workflow: Option<Workflow>,
    /// Whether a credential was stored at the last check
    pub signed_in: bool,
}

impl AppState {
    /// Show `route`, tearing down whatever workflow was mounted
    pub fn mount(&mut self, route: Route) {
        self.current_route = Some(route);
        self.current_view = View::for_route(route);
        self.workflow = match route {
            Route::SignIn => Some(Workflow::new(WorkflowKind::SignIn)),
            Route::Registration => Some(Workflow::new(WorkflowKind::Registration)),
            Route::Root => None,
        };
    }

    /// True while input to the current screen must be ignored
    pub fn is_locked(&self) -> bool {
        self.workflow.as_ref().is_some_and(Workflow::is_locked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view() {
        let state = AppState::default();
        assert_eq!(state.current_view, View::SignIn);
        assert!(state.current_route.is_none());
        assert!(state.workflow.is_none());
    }

    #[test]
    fn test_view_for_route() {
        assert_eq!(View::for_route(Route::Root), View::Home);
        assert_eq!(View::for_route(Route::SignIn), View::SignIn);
        assert_eq!(View::for_route(Route::Registration), View::Registration);
    }

    #[test]
    fn test_is_form_view() {
        assert!(View::SignIn.is_form_view());
        assert!(View::Registration.is_form_view());
        assert!(!View::Home.is_form_view());
    }

    #[test]
    fn test_mount_creates_matching_workflow() {
        let mut state = AppState::default();
        state.mount(Route::Registration);
        assert_eq!(state.current_view, View::Registration);
        assert_eq!(
            state.workflow.as_ref().map(Workflow::kind),
            Some(WorkflowKind::Registration)
        );

        state.mount(Route::Root);
        assert_eq!(state.current_view, View::Home);
        assert!(state.workflow.is_none());
    }

    #[test]
    fn test_remount_replaces_workflow() {
        let mut state = AppState::default();
        state.mount(Route::SignIn);
        let first = state.workflow.as_ref().map(Workflow::id);
        state.mount(Route::SignIn);
        let second = state.workflow.as_ref().map(Workflow::id);
        assert_ne!(first, second);
    }

    #[test]
    fn test_is_locked_without_workflow() {
        assert!(!AppState::default().is_locked());
    }
}
