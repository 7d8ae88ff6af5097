//! Application state and core logic

use crate::auth::{AuthClient, AuthClientTrait, AuthError, AuthReply};
use crate::config::TuiConfig;
use crate::platform::is_shortcut;
use crate::state::{
    resolve, AppState, FormField, Resolution, Route, View, Workflow, WorkflowKind,
};
use crate::storage::{has_credential, CredentialStore, FileCredentialStore, TOKEN_KEY};
use anyhow::{anyhow, Result};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Response of a spawned submission, addressed to the workflow that sent it
#[derive(Debug)]
pub struct SubmissionResult {
    pub workflow_id: Uuid,
    pub result: Result<AuthReply, AuthError>,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Authentication service client
    auth: Arc<dyn AuthClientTrait>,
    /// Durable client-side storage
    store: Arc<dyn CredentialStore>,
    results_tx: mpsc::UnboundedSender<SubmissionResult>,
    results_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance from configuration
    pub fn new(config: &TuiConfig) -> Result<Self> {
        let auth = AuthClient::new(config.auth_url(), config.request_timeout())?;
        let store_path = FileCredentialStore::default_path()
            .ok_or_else(|| anyhow!("could not determine a data directory"))?;
        let store = FileCredentialStore::new(store_path);
        info!(
            auth_url = %auth.base_url(),
            storage = %store.path().display(),
            "Starting"
        );

        Ok(Self::with_services(
            Arc::new(auth),
            Arc::new(store),
            config.start_path(),
        ))
    }

    /// Create an App around the given services and open `start_path`
    pub fn with_services(
        auth: Arc<dyn AuthClientTrait>,
        store: Arc<dyn CredentialStore>,
        start_path: &str,
    ) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        let mut app = Self {
            state: AppState::default(),
            auth,
            store,
            results_tx,
            results_rx,
            quit: false,
        };
        app.navigate(start_path);
        app
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Re-read the credential store into `state.signed_in`
    fn refresh_credential(&mut self) {
        self.state.signed_in = has_credential(self.store.as_ref());
    }

    /// Navigate to a path, following redirects. Always mounts a fresh workflow,
    /// which discards the previous one along with its scheduled redirect.
    pub fn navigate(&mut self, path: &str) {
        self.refresh_credential();
        let route = match resolve(path, self.state.signed_in) {
            Resolution::Render(route) => route,
            Resolution::Redirect(route) => {
                debug!(from = path, to = route.path(), "Redirecting");
                route
            }
        };
        self.state.mount(route);
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return;
        }

        if self.state.current_view.is_form_view() {
            self.handle_form_key(key);
        } else {
            self.handle_home_key(key);
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        if !is_shortcut(key.modifiers) {
            return;
        }
        match key.code {
            KeyCode::Char('n') => self.navigate(Route::SignIn.path()),
            KeyCode::Char('l') => self.sign_out(),
            _ => {}
        }
    }

    /// Forget the stored credential and go back to the root
    pub fn sign_out(&mut self) {
        if let Err(err) = self.store.remove(TOKEN_KEY) {
            warn!("Failed to clear credential: {err}");
        }
        info!("Signed out");
        self.navigate(Route::Root.path());
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let shortcut = is_shortcut(key.modifiers);

        // Screen switching stays available while locked; leaving tears the
        // workflow down
        if key.code == KeyCode::Char('n') && shortcut {
            let target = match self.state.current_view {
                View::SignIn => Route::Registration,
                _ => Route::SignIn,
            };
            self.navigate(target.path());
            return;
        }

        let Some(workflow) = self.state.workflow.as_mut() else {
            return;
        };

        if workflow.notification().is_some() {
            let on_submit_row = workflow.form().as_form().is_submit_row_active();
            match key.code {
                KeyCode::Esc => {
                    workflow.dismiss_notification();
                    return;
                }
                KeyCode::Enter if !on_submit_row => {
                    workflow.dismiss_notification();
                    return;
                }
                _ => {}
            }
        }

        if workflow.is_locked() {
            return;
        }

        let form = workflow.form().as_form();
        let on_submit_row = form.is_submit_row_active();
        let focused = form.get_field(form.active_field()).cloned();

        match key.code {
            KeyCode::Tab => workflow.focus_next(),
            KeyCode::BackTab => workflow.focus_prev(),
            KeyCode::Char('s') if shortcut => self.submit(),
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter => workflow.focus_next(),
            _ => {
                if let Some(field) = focused {
                    edit_field(workflow, &field, key, shortcut);
                }
            }
        }
    }

    /// Validate and, if allowed, send the mounted workflow's request on a
    /// background task
    pub fn submit(&mut self) {
        let Some(workflow) = self.state.workflow.as_mut() else {
            return;
        };
        let Some(request) = workflow.begin_submit() else {
            return;
        };

        let workflow_id = workflow.id();
        let auth = Arc::clone(&self.auth);
        let results_tx = self.results_tx.clone();
        tokio::spawn(async move {
            let result = request.send(auth.as_ref()).await;
            // The receiver only goes away when the app is shutting down
            let _ = results_tx.send(SubmissionResult {
                workflow_id,
                result,
            });
        });
    }

    /// Apply every submission result that has arrived
    pub fn drain_results(&mut self, now: Instant) {
        while let Ok(result) = self.results_rx.try_recv() {
            self.apply_result(result, now);
        }
    }

    /// Deliver a result to its workflow, if that workflow is still mounted
    pub fn apply_result(&mut self, result: SubmissionResult, now: Instant) {
        let finished = match self.state.workflow.as_mut() {
            Some(workflow) if workflow.id() == result.workflow_id => {
                workflow.finish_submit(result.result, self.store.as_ref(), now);
                Some(workflow.kind())
            }
            _ => {
                debug!(workflow = %result.workflow_id, "Discarding result for unmounted workflow");
                None
            }
        };

        // A sign-in may have stored a credential
        if finished == Some(WorkflowKind::SignIn) {
            self.refresh_credential();
        }
    }

    /// Advance notification and redirect timers
    pub fn tick(&mut self, now: Instant) {
        let due = self
            .state
            .workflow
            .as_mut()
            .and_then(|workflow| workflow.tick(now));
        if let Some(route) = due {
            self.navigate(route.path());
        }
    }
}

/// Apply an editing key to the focused field
fn edit_field(workflow: &mut Workflow, field: &FormField, key: KeyEvent, shortcut: bool) {
    match key.code {
        KeyCode::Char('r') if shortcut => workflow.toggle_secret_visibility(field.id),
        KeyCode::Char(' ') if field.is_flag() => workflow.set_flag(field.id, !field.as_flag()),
        KeyCode::Char(c) if !shortcut && !key.modifiers.contains(KeyModifiers::ALT) => {
            let mut text = field.as_text().to_string();
            text.push(c);
            workflow.set_field(field.id, &text);
        }
        KeyCode::Backspace => {
            let mut text = field.as_text().to_string();
            text.pop();
            workflow.set_field(field.id, &text);
        }
        _ => {}
    }
}
