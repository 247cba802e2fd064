use color_eyre::Result;
use reqwest::multipart::{Form, Part};
use ulid::Ulid;

use crate::{
    models::{GeneratedDocument, GradingResult, SubmissionFile},
    names,
    rubric::{FormStore, RubricForm, SubmitBlocked},
};

// ---------------------------------------------------------------------------
// GradingClient trait (the service only needs "send both files, get a result")
// ---------------------------------------------------------------------------

#[cfg_attr(test, mockall::automock)]
pub trait GradingClient: Send + Sync {
    fn grade(
        &self,
        rubric: GeneratedDocument,
        submission: SubmissionFile,
    ) -> impl std::future::Future<Output = Result<GradingResult>> + Send;
}

/// Posts the rubric and submission as one multipart request.
#[derive(Clone)]
pub struct HttpGradingClient {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpGradingClient {
    pub fn new(endpoint: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
        }
    }
}

impl GradingClient for HttpGradingClient {
    async fn grade(
        &self,
        rubric: GeneratedDocument,
        submission: SubmissionFile,
    ) -> Result<GradingResult> {
        let rubric_part = Part::bytes(rubric.bytes.to_vec())
            .file_name(rubric.file_name)
            .mime_str(rubric.media_type)?;

        let mut submission_part =
            Part::bytes(submission.bytes.to_vec()).file_name(submission.file_name);
        if let Some(content_type) = submission.content_type.as_deref() {
            submission_part = submission_part.mime_str(content_type)?;
        }

        let form = Form::new()
            .part(names::RUBRIC_PART, rubric_part)
            .part(names::SUBMISSION_PART, submission_part);

        let resp = self
            .client
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            tracing::error!("grading endpoint error: {status} - {text}");
            color_eyre::eyre::bail!("grading endpoint returned {status}");
        }

        let body = resp.json::<serde_json::Value>().await?;
        tracing::debug!("response from grading endpoint: {body}");
        Ok(GradingResult::new(body))
    }
}

// ---------------------------------------------------------------------------
// RubricService
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Blocked(SubmitBlocked),
    Graded,
    Failed,
}

/// Marks the form's upload as failed if the submit future is dropped
/// mid-request, so the in-flight guard cannot outlive the request.
struct UploadGuard<'a> {
    forms: &'a FormStore,
    id: Ulid,
    armed: bool,
}

impl Drop for UploadGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            tracing::warn!("grading request for rubric form {} was abandoned", self.id);
            self.forms.with_form(self.id, RubricForm::abandon_submission);
        }
    }
}

pub struct RubricService<G: GradingClient = HttpGradingClient> {
    grader: G,
    forms: FormStore,
}

impl<G: GradingClient + Clone> Clone for RubricService<G> {
    fn clone(&self) -> Self {
        Self {
            grader: self.grader.clone(),
            forms: self.forms.clone(),
        }
    }
}

impl<G: GradingClient> RubricService<G> {
    pub fn new(grader: G) -> Self {
        Self::with_forms(grader, FormStore::new())
    }

    pub fn with_forms(grader: G, forms: FormStore) -> Self {
        Self { grader, forms }
    }

    pub fn open_form(&self) -> Ulid {
        let id = self.forms.open();
        tracing::debug!("opened rubric form {id}");
        id
    }

    pub fn with_form<T>(&self, id: Ulid, f: impl FnOnce(&mut RubricForm) -> T) -> Option<T> {
        self.forms.with_form(id, f)
    }

    /// Generate, upload and record the outcome. `None` if the form is gone.
    #[tracing::instrument(skip(self))]
    pub async fn submit(&self, id: Ulid) -> Option<SubmitOutcome> {
        let submission = match self.forms.with_form(id, RubricForm::begin_submission)? {
            Ok(submission) => submission,
            Err(blocked) => {
                tracing::info!("submission blocked: {blocked:?}");
                return Some(SubmitOutcome::Blocked(blocked));
            }
        };

        tracing::info!(
            "uploading rubric ({} bytes) and '{}' ({} bytes)",
            submission.rubric.bytes.len(),
            submission.submission.file_name,
            submission.submission.bytes.len()
        );

        let mut guard = UploadGuard {
            forms: &self.forms,
            id,
            armed: true,
        };
        let result = self
            .grader
            .grade(submission.rubric, submission.submission)
            .await;
        guard.armed = false;
        let outcome = if result.is_ok() {
            SubmitOutcome::Graded
        } else {
            SubmitOutcome::Failed
        };

        if self
            .forms
            .with_form(id, |form| form.complete_submission(result))
            .is_none()
        {
            tracing::warn!("rubric form {id} was evicted while grading");
        }

        Some(outcome)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
