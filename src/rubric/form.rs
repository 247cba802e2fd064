use color_eyre::Result;

use crate::models::{
    GeneratedDocument, GradingResult, QuestionField, QuestionRecord, StatusMessage,
    SubmissionFile, SubmissionPhase, UnknownQuestionType,
};

use super::document;

/// Why a submit stopped before reaching the network.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitBlocked {
    /// A previous submission is still uploading.
    InFlight,
    NoQuestions,
    /// The docx writer failed.
    Generation,
    MissingUpload,
}

/// Both parts of one multipart request, snapshotted when uploading starts.
#[derive(Debug, Clone)]
pub struct Submission {
    pub rubric: GeneratedDocument,
    pub submission: SubmissionFile,
}

/// State of one rubric form for the duration of a page session.
#[derive(Debug, Default)]
pub struct RubricForm {
    questions: Vec<QuestionRecord>,
    submission: Option<SubmissionFile>,
    generated: Option<GeneratedDocument>,
    status: Option<StatusMessage>,
    result: Option<GradingResult>,
    phase: SubmissionPhase,
}

impl RubricForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn questions(&self) -> &[QuestionRecord] {
        &self.questions
    }

    pub fn submission(&self) -> Option<&SubmissionFile> {
        self.submission.as_ref()
    }

    pub fn generated(&self) -> Option<&GeneratedDocument> {
        self.generated.as_ref()
    }

    pub fn status(&self) -> Option<StatusMessage> {
        self.status
    }

    pub fn result(&self) -> Option<&GradingResult> {
        self.result.as_ref()
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn add_question(&mut self) {
        self.questions.push(QuestionRecord::default());
    }

    pub fn remove_question(&mut self, index: usize) {
        if index < self.questions.len() {
            self.questions.remove(index);
        }
    }

    /// Returns `Ok(false)` when `index` is out of range.
    pub fn update_question_field(
        &mut self,
        index: usize,
        field: QuestionField,
        value: &str,
    ) -> Result<bool, UnknownQuestionType> {
        let Some(q) = self.questions.get_mut(index) else {
            return Ok(false);
        };

        match field {
            QuestionField::Type => q.question_type = value.parse()?,
            QuestionField::Question => q.question = value.to_string(),
            QuestionField::Rubric => q.rubric = value.to_string(),
            QuestionField::SampleAnswer => q.sample_answer = value.to_string(),
            QuestionField::Points => q.points = value.to_string(),
        }
        Ok(true)
    }

    pub fn select_submission_file(&mut self, file: SubmissionFile) {
        self.submission = Some(file);
    }

    pub fn generate_rubric_document(&mut self) -> Result<&GeneratedDocument, SubmitBlocked> {
        self.phase = SubmissionPhase::Generating;

        if self.questions.is_empty() {
            self.phase = SubmissionPhase::GenerationFailed;
            self.status = Some(StatusMessage::AddQuestions);
            return Err(SubmitBlocked::NoQuestions);
        }

        match document::rubric_document(&self.questions) {
            Ok(doc) => {
                self.phase = SubmissionPhase::Generated;
                self.status = Some(StatusMessage::Generated);
                Ok(&*self.generated.insert(doc))
            }
            Err(e) => {
                tracing::error!("could not generate rubric document: {e}");
                self.phase = SubmissionPhase::GenerationFailed;
                self.status = Some(StatusMessage::GenerationError);
                Err(SubmitBlocked::Generation)
            }
        }
    }

    /// First half of submit: everything up to the network call.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.phase == SubmissionPhase::Uploading {
            return Err(SubmitBlocked::InFlight);
        }

        let rubric = self.generate_rubric_document()?.clone();

        let Some(submission) = self.submission.clone() else {
            self.status = Some(StatusMessage::MissingUpload);
            return Err(SubmitBlocked::MissingUpload);
        };

        self.phase = SubmissionPhase::Uploading;
        self.status = Some(StatusMessage::Uploading);
        Ok(Submission { rubric, submission })
    }

    /// Second half of submit. A failure leaves the previous result in place.
    pub fn complete_submission(&mut self, outcome: Result<GradingResult>) {
        match outcome {
            Ok(result) => {
                self.result = Some(result);
                self.phase = SubmissionPhase::Complete;
                self.status = Some(StatusMessage::Complete);
            }
            Err(e) => {
                tracing::error!("grading request failed: {e:#}");
                self.phase = SubmissionPhase::UploadFailed;
                self.status = Some(StatusMessage::SubmissionError);
            }
        }
    }

    /// Clears an upload whose request was dropped before it finished.
    pub fn abandon_submission(&mut self) {
        if self.phase == SubmissionPhase::Uploading {
            self.phase = SubmissionPhase::UploadFailed;
            self.status = Some(StatusMessage::SubmissionError);
        }
    }

    /// `None` until the grader has returned a textual response.
    pub fn export_response_document(&self) -> Option<Result<bytes::Bytes>> {
        let text = self.result.as_ref()?.gpt_response()?;
        Some(document::response_document(text))
    }
}
