//! One screen's input → validate → submit → notify cycle
//!
//! A [`Workflow`] owns its form, the errors of the last validation pass, the
//! submission outcome and any redirect scheduled after a success. Dropping the
//! workflow (navigating away) cancels the redirect; results addressed to a
//! dropped workflow are discarded by the caller using [`Workflow::id`].

use super::forms::{
    phone_digits, validate_registration, validate_sign_in, ErrorState, FieldId, FormState,
    RegistrationForm, SignInForm, Validation,
};
use super::outcome::{Notification, SubmissionOutcome};
use super::route::Route;
use crate::auth::{AuthClientTrait, AuthError, AuthReply, LoginRequest, SignupRequest};
use crate::storage::{store_credential, CredentialStore};
use secrecy::SecretString;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Shown for any failure to obtain a response
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";

/// How long a success or failure notification stays up
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(6);

/// Which screen a workflow drives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowKind {
    SignIn,
    Registration,
}

impl WorkflowKind {
    pub fn success_message(self) -> &'static str {
        match self {
            Self::SignIn => "Login successful!",
            Self::Registration => "Account created successfully! Please login.",
        }
    }

    /// Used when a rejection carries no `detail`
    pub fn rejection_message(self) -> &'static str {
        match self {
            Self::SignIn => "Login failed. Please check your credentials.",
            Self::Registration => "Registration failed. Please try again.",
        }
    }

    /// Where to go after a success, and how long to show the message first
    pub fn redirect(self) -> (Route, Duration) {
        match self {
            Self::SignIn => (Route::Root, Duration::from_millis(1500)),
            Self::Registration => (Route::SignIn, Duration::from_millis(2000)),
        }
    }
}

/// The single outbound call a submission makes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitRequest {
    Login(LoginRequest),
    Signup(SignupRequest),
}

impl SubmitRequest {
    pub async fn send(&self, client: &dyn AuthClientTrait) -> Result<AuthReply, AuthError> {
        match self {
            Self::Login(request) => client.login(request).await,
            Self::Signup(request) => client.signup(request).await,
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct ScheduledRedirect {
    to: Route,
    due: Instant,
}

/// A mounted sign-in or registration screen
#[derive(Debug)]
pub struct Workflow {
    id: Uuid,
    kind: WorkflowKind,
    form: FormState,
    errors: ErrorState,
    outcome: SubmissionOutcome,
    notice_expires_at: Option<Instant>,
    redirect: Option<ScheduledRedirect>,
}

impl Workflow {
    pub fn new(kind: WorkflowKind) -> Self {
        let form = match kind {
            WorkflowKind::SignIn => FormState::SignIn(SignInForm::new()),
            WorkflowKind::Registration => FormState::Registration(RegistrationForm::new()),
        };
        Self {
            id: Uuid::new_v4(),
            kind,
            form,
            errors: ErrorState::default(),
            outcome: SubmissionOutcome::Idle,
            notice_expires_at: None,
            redirect: None,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn kind(&self) -> WorkflowKind {
        self.kind
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    /// Move focus to the next field, wrapping past the submit row
    pub fn focus_next(&mut self) {
        self.form.next_field();
    }

    pub fn focus_prev(&mut self) {
        self.form.prev_field();
    }

    pub fn errors(&self) -> &ErrorState {
        &self.errors
    }

    pub fn outcome(&self) -> &SubmissionOutcome {
        &self.outcome
    }

    /// Controls are disabled while a request is in flight and while a
    /// post-success redirect is pending
    pub fn is_locked(&self) -> bool {
        self.outcome.is_pending() || self.redirect.is_some()
    }

    pub fn redirect_target(&self) -> Option<Route> {
        self.redirect.map(|r| r.to)
    }

    /// Replace a field's value. Validation is not triggered; ignored while
    /// the workflow is locked.
    pub fn set_field(&mut self, id: FieldId, value: &str) {
        if !self.is_locked() {
            self.form.as_form_mut().set_field(id, value);
        }
    }

    pub fn set_flag(&mut self, id: FieldId, value: bool) {
        if !self.is_locked() {
            self.form.as_form_mut().set_flag(id, value);
        }
    }

    /// Display-only; the stored value is untouched
    pub fn toggle_secret_visibility(&mut self, id: FieldId) {
        self.form.as_form_mut().toggle_secret_visibility(id);
    }

    /// Run every rule over the current values and replace the error state
    pub fn validate(&mut self) -> bool {
        let Validation { errors, is_valid } = match &self.form {
            FormState::SignIn(form) => validate_sign_in(form),
            FormState::Registration(form) => validate_registration(form),
        };
        self.errors = errors;
        is_valid
    }

    /// Start a submission if allowed.
    ///
    /// Returns the request to send, or `None` when a submission is already
    /// running, a redirect is pending, or validation failed. On `Some`, the
    /// outcome is pending and the caller must deliver the response to
    /// [`Workflow::finish_submit`].
    pub fn begin_submit(&mut self) -> Option<SubmitRequest> {
        if !self.outcome.accepts_submit() || self.redirect.is_some() {
            debug!(workflow = %self.id, "Submit ignored: workflow is busy");
            return None;
        }

        if !self.validate() {
            let failing: Vec<&str> = self.errors.failing().iter().map(FieldId::name).collect();
            debug!(workflow = %self.id, ?failing, "Submit blocked by validation");
            return None;
        }

        let request = self.build_request();
        self.outcome = SubmissionOutcome::Pending;
        self.notice_expires_at = None;
        info!(workflow = %self.id, kind = ?self.kind, "Submitting");
        Some(request)
    }

    fn build_request(&self) -> SubmitRequest {
        let form = self.form.as_form();
        match self.kind {
            WorkflowKind::SignIn => SubmitRequest::Login(LoginRequest {
                username: form.text(FieldId::Email).to_string(),
                password: form.text(FieldId::Password).to_string(),
            }),
            WorkflowKind::Registration => SubmitRequest::Signup(SignupRequest {
                username: form.text(FieldId::Email).to_string(),
                password: form.text(FieldId::Password).to_string(),
                email: form.text(FieldId::Email).to_string(),
                phone_number: phone_digits(form.text(FieldId::Phone)),
                first_name: form.text(FieldId::FirstName).to_string(),
                last_name: form.text(FieldId::LastName).to_string(),
            }),
        }
    }

    /// Apply the response (or transport failure) of the pending submission
    pub fn finish_submit(
        &mut self,
        result: Result<AuthReply, AuthError>,
        store: &dyn CredentialStore,
        now: Instant,
    ) {
        if !self.outcome.is_pending() {
            debug!(workflow = %self.id, "Result ignored: no submission pending");
            return;
        }

        self.outcome = match result {
            Ok(reply) if reply.is_accepted() => {
                if self.kind == WorkflowKind::SignIn {
                    self.persist_credential(reply.body.access_token, store);
                }
                let (to, delay) = self.kind.redirect();
                self.redirect = Some(ScheduledRedirect {
                    to,
                    due: now + delay,
                });
                info!(workflow = %self.id, status = reply.status, "Submission accepted");
                SubmissionOutcome::Success(self.kind.success_message().to_string())
            }
            Ok(reply) => {
                info!(workflow = %self.id, status = reply.status, "Submission rejected");
                let message = reply
                    .body
                    .detail
                    .filter(|d| !d.is_empty())
                    .unwrap_or_else(|| self.kind.rejection_message().to_string());
                SubmissionOutcome::Failure(message)
            }
            Err(err) => {
                warn!(workflow = %self.id, "Submission failed: {err}");
                SubmissionOutcome::Failure(NETWORK_ERROR_MESSAGE.to_string())
            }
        };
        self.notice_expires_at = Some(now + NOTIFICATION_DURATION);
    }

    fn persist_credential(&self, token: Option<String>, store: &dyn CredentialStore) {
        let Some(token) = token.filter(|t| !t.is_empty()) else {
            return;
        };
        if let Err(err) = store_credential(store, &SecretString::from(token)) {
            warn!(workflow = %self.id, "Failed to store credential: {err}");
        }
    }

    pub fn notification(&self) -> Option<Notification<'_>> {
        self.outcome.notification()
    }

    /// Hide the notification and return to idle; no-op when nothing is shown
    pub fn dismiss_notification(&mut self) {
        if self.outcome.notification().is_some() {
            self.outcome = SubmissionOutcome::Idle;
            self.notice_expires_at = None;
        }
    }

    /// Advance timers: auto-dismiss an expired notification and return the
    /// redirect target once it is due
    pub fn tick(&mut self, now: Instant) -> Option<Route> {
        if self.notice_expires_at.is_some_and(|at| now >= at) {
            self.dismiss_notification();
        }

        match self.redirect {
            Some(redirect) if now >= redirect.due => {
                self.redirect = None;
                Some(redirect.to)
            }
            _ => None,
        }
    }
}
