/// Contact form state and submission lifecycle.
///
/// `Idle -> Loading -> Success | Error`. Success and Error persist until the next submit.
/// A successful submission clears the fields; a failed one keeps them so the visitor can
/// retry. Submissions are tied to the page's lifetime through a `CancellationToken`: once
/// the page is torn down the in-flight request is dropped and its result never applied.
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::contact::{ContactError, ContactMessage, ContactSender, CONTACT_SOURCE};
use crate::error::CommonError;

/// The "valid e-mail address" production browsers apply to `<input type="email">`.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid regex")
});

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactFields {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Loading,
    Success,
    Error,
}

/// A submission that has left the form and is waiting for the backend.
#[derive(Debug)]
pub struct PendingSubmission {
    generation: u64,
    message: ContactMessage,
}

impl PendingSubmission {
    pub fn message(&self) -> &ContactMessage {
        &self.message
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    Failed,
    /// The page's lifetime ended before the backend answered
    Cancelled,
}

#[derive(Debug, Default)]
pub struct ContactForm {
    fields: ContactFields,
    status: SubmissionStatus,
    generation: u64,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fields(fields: ContactFields) -> Self {
        Self {
            fields,
            ..Self::default()
        }
    }

    pub fn fields(&self) -> &ContactFields {
        &self.fields
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// False while a submission is in flight; drives the disabled submit button.
    pub fn can_submit(&self) -> bool {
        self.status != SubmissionStatus::Loading
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.fields.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.fields.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.fields.message = message.into();
    }

    /// Validate the fields and move to `Loading`.
    ///
    /// Validation mirrors the form controls' native constraints: every field is required,
    /// and the email is trimmed and must be a valid e-mail address. A rejected submission
    /// leaves the form untouched.
    pub fn begin(&mut self) -> Result<PendingSubmission, CommonError> {
        if self.status == SubmissionStatus::Loading {
            return Err(CommonError::SubmissionInFlight);
        }

        let email = self.fields.email.trim();
        for (field, value) in [
            ("name", self.fields.name.as_str()),
            ("email", email),
            ("message", self.fields.message.as_str()),
        ] {
            if value.is_empty() {
                return Err(CommonError::MissingField(field));
            }
        }
        if !EMAIL_RE.is_match(email) {
            return Err(CommonError::InvalidEmail(email.to_string()));
        }

        let email = email.to_string();
        self.fields.email.clone_from(&email);
        self.generation += 1;
        self.status = SubmissionStatus::Loading;
        debug!(generation = self.generation, "contact submission started");

        Ok(PendingSubmission {
            generation: self.generation,
            message: ContactMessage {
                name: self.fields.name.clone(),
                email,
                message: self.fields.message.clone(),
                source: CONTACT_SOURCE,
            },
        })
    }

    /// Apply the backend's answer. Results for superseded submissions are dropped.
    pub fn finish(
        &mut self,
        pending: PendingSubmission,
        result: Result<(), ContactError>,
    ) -> SubmissionStatus {
        if !self.owns(&pending) {
            debug!(generation = pending.generation, "dropping stale submission result");
            return self.status;
        }

        match result {
            Ok(()) => {
                info!("contact submission delivered");
                self.status = SubmissionStatus::Success;
                self.fields = ContactFields::default();
            }
            Err(e) => {
                warn!(error = %e, "contact submission failed");
                self.status = SubmissionStatus::Error;
            }
        }
        self.status
    }

    /// Give up on a submission without a result; fields are kept.
    pub fn abandon(&mut self, pending: PendingSubmission) {
        if self.owns(&pending) {
            debug!(generation = pending.generation, "contact submission abandoned");
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Run one full submission against `sender`, bounded by the page's `lifetime`.
    pub async fn submit<S: ContactSender>(
        &mut self,
        sender: &S,
        lifetime: &CancellationToken,
    ) -> Result<SubmitOutcome, CommonError> {
        let pending = self.begin()?;

        let result = tokio::select! {
            _ = lifetime.cancelled() => None,
            result = sender.send(pending.message()) => Some(result),
        };

        let Some(result) = result else {
            self.abandon(pending);
            return Ok(SubmitOutcome::Cancelled);
        };
        Ok(match self.finish(pending, result) {
            SubmissionStatus::Success => SubmitOutcome::Sent,
            _ => SubmitOutcome::Failed,
        })
    }

    fn owns(&self, pending: &PendingSubmission) -> bool {
        self.status == SubmissionStatus::Loading && pending.generation == self.generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use crate::contact::{ContactClient, ContactClientConfig};

    fn ada() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hi".to_string(),
        }
    }

    async fn backend(status: u16) -> (MockServer, ContactClient) {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;
        let client = ContactClient::new(ContactClientConfig::new(server.uri())).unwrap();
        (server, client)
    }

    #[tokio::test]
    async fn test_success_clears_fields() {
        let (_server, client) = backend(200).await;
        let mut form = ContactForm::with_fields(ada());
        assert_eq!(form.status(), SubmissionStatus::Idle);

        let pending = form.begin().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Loading);
        assert!(!form.can_submit());

        let result = client.send(pending.message()).await;
        assert_eq!(form.finish(pending, result), SubmissionStatus::Success);
        assert_eq!(form.fields(), &ContactFields::default());
        assert!(form.can_submit());
    }

    #[tokio::test]
    async fn test_failure_preserves_fields() {
        let (_server, client) = backend(500).await;
        let mut form = ContactForm::with_fields(ada());

        let pending = form.begin().unwrap();
        assert_eq!(form.status(), SubmissionStatus::Loading);

        let result = client.send(pending.message()).await;
        assert_eq!(form.finish(pending, result), SubmissionStatus::Error);
        assert_eq!(form.fields(), &ada());
    }

    #[tokio::test]
    async fn test_submit_runs_whole_lifecycle() {
        let (_server, client) = backend(204).await;
        let mut form = ContactForm::with_fields(ada());
        let outcome = form.submit(&client, &CancellationToken::new()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Sent);
        assert_eq!(form.status(), SubmissionStatus::Success);

        // Status persists until the next submit, which needs fresh input.
        form.set_name("Ada");
        form.set_email("ada@example.com");
        form.set_message("Again");
        let (_server, failing) = backend(503).await;
        let outcome = form.submit(&failing, &CancellationToken::new()).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Failed);
        assert_eq!(form.status(), SubmissionStatus::Error);
        assert_eq!(form.fields().message, "Again");
    }

    #[tokio::test]
    async fn test_cancelled_submission_applies_no_result() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/contact"))
            .respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(5)))
            .mount(&server)
            .await;
        let client = ContactClient::new(ContactClientConfig::new(server.uri())).unwrap();

        let lifetime = CancellationToken::new();
        let cancel = lifetime.clone();
        tokio::spawn(async move {
            tokio::time::sleep(Duration::from_millis(50)).await;
            cancel.cancel();
        });

        let mut form = ContactForm::with_fields(ada());
        let outcome = form.submit(&client, &lifetime).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Cancelled);
        assert_eq!(form.status(), SubmissionStatus::Idle);
        assert_eq!(form.fields(), &ada());
    }

    #[test]
    fn test_second_submit_while_loading_is_refused() {
        let mut form = ContactForm::with_fields(ada());
        let _pending = form.begin().unwrap();
        assert!(matches!(form.begin(), Err(CommonError::SubmissionInFlight)));
    }

    #[test]
    fn test_stale_result_is_dropped() {
        let mut form = ContactForm::with_fields(ada());
        let first = form.begin().unwrap();
        form.abandon(first);

        let second = form.begin().unwrap();
        let stale = PendingSubmission {
            generation: second.generation - 1,
            message: second.message().clone(),
        };
        assert_eq!(form.finish(stale, Ok(())), SubmissionStatus::Loading);
        assert_eq!(form.fields(), &ada());
        assert_eq!(form.finish(second, Ok(())), SubmissionStatus::Success);
    }

    #[test]
    fn test_required_fields() {
        let mut form = ContactForm::with_fields(ContactFields {
            message: String::new(),
            ..ada()
        });
        assert!(matches!(form.begin(), Err(CommonError::MissingField("message"))));
        assert_eq!(form.status(), SubmissionStatus::Idle);

        form.set_message("Hi");
        form.set_email("   ");
        assert!(matches!(form.begin(), Err(CommonError::MissingField("email"))));
    }

    #[test]
    fn test_email_validation_matches_native_constraint() {
        for bad in ["ada", "ada@", "@example.com", "ada@-example.com", "a da@example.com"] {
            let mut form = ContactForm::with_fields(ContactFields {
                email: bad.to_string(),
                ..ada()
            });
            assert!(
                matches!(form.begin(), Err(CommonError::InvalidEmail(_))),
                "{bad} should be rejected"
            );
        }

        let mut form = ContactForm::with_fields(ContactFields {
            email: "  ada@localhost \n".to_string(),
            ..ada()
        });
        let pending = form.begin().unwrap();
        assert_eq!(pending.message().email, "ada@localhost");
        assert_eq!(pending.message().source, "landing/contact");
    }
}
