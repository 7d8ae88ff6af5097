//! Submission outcome and the notification derived from it

/// Result of the most recent submission attempt
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionOutcome {
    #[default]
    Idle,
    Pending,
    Success(String),
    Failure(String),
}

impl SubmissionOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    /// Only idle and failed workflows may start a new submission
    pub fn accepts_submit(&self) -> bool {
        matches!(self, Self::Idle | Self::Failure(_))
    }

    /// The notification to show, if any
    pub fn notification(&self) -> Option<Notification<'_>> {
        match self {
            Self::Success(message) => Some(Notification {
                severity: Severity::Success,
                message,
            }),
            Self::Failure(message) => Some(Notification {
                severity: Severity::Error,
                message,
            }),
            Self::Idle | Self::Pending => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
}

impl Severity {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
        }
    }
}

/// A transient, dismissible message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Notification<'a> {
    pub severity: Severity,
    pub message: &'a str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        assert_eq!(SubmissionOutcome::default(), SubmissionOutcome::Idle);
    }

    #[test]
    fn test_accepts_submit() {
        assert!(SubmissionOutcome::Idle.accepts_submit());
        assert!(SubmissionOutcome::Failure("x".to_string()).accepts_submit());
        assert!(!SubmissionOutcome::Pending.accepts_submit());
        assert!(!SubmissionOutcome::Success("x".to_string()).accepts_submit());
    }

    #[test]
    fn test_pending_has_no_notification() {
        assert!(SubmissionOutcome::Pending.notification().is_none());
        assert!(SubmissionOutcome::Idle.notification().is_none());
    }

    #[test]
    fn test_terminal_outcomes_notify() {
        let success = SubmissionOutcome::Success("Login successful!".to_string());
        assert_eq!(
            success.notification(),
            Some(Notification {
                severity: Severity::Success,
                message: "Login successful!",
            })
        );

        let failure = SubmissionOutcome::Failure("bad credentials".to_string());
        let notification = failure.notification().unwrap();
        assert_eq!(notification.severity, Severity::Error);
        assert_eq!(notification.severity.label(), "Error");
    }
}
