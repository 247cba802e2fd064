use std::{fmt, str::FromStr};

use bytes::Bytes;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionType {
    #[default]
    Mcq,
    TrueFalse,
    Short,
}

impl QuestionType {
    pub const ALL: [QuestionType; 3] = [Self::Mcq, Self::TrueFalse, Self::Short];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mcq => "mcq",
            Self::TrueFalse => "truefalse",
            Self::Short => "short",
        }
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownQuestionType(pub String);

impl fmt::Display for UnknownQuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown question type '{}'", self.0)
    }
}

impl std::error::Error for UnknownQuestionType {}

impl FromStr for QuestionType {
    type Err = UnknownQuestionType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownQuestionType(s.to_string()))
    }
}

/// One rubric item as the instructor typed it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionRecord {
    pub question_type: QuestionType,
    pub question: String,
    pub rubric: String,
    pub sample_answer: String,
    /// Kept as typed; the grader interprets it.
    pub points: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum QuestionField {
    #[serde(rename = "type")]
    Type,
    #[serde(rename = "question")]
    Question,
    #[serde(rename = "rubric")]
    Rubric,
    #[serde(rename = "sampleAnswer")]
    SampleAnswer,
    #[serde(rename = "points")]
    Points,
}

impl QuestionField {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Question => "question",
            Self::Rubric => "rubric",
            Self::SampleAnswer => "sampleAnswer",
            Self::Points => "points",
        }
    }
}

/// The student's work, forwarded untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionFile {
    pub file_name: String,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedDocument {
    pub file_name: String,
    pub media_type: &'static str,
    pub bytes: Bytes,
}

/// Response body of the grading endpoint. Only `gptResponse` is read.
#[derive(Debug, Clone, PartialEq)]
pub struct GradingResult {
    pub body: serde_json::Value,
}

impl GradingResult {
    pub fn new(body: serde_json::Value) -> Self {
        Self { body }
    }

    pub fn gpt_response(&self) -> Option<&str> {
        self.body.get("gptResponse").and_then(|v| v.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    AddQuestions,
    GenerationError,
    Generated,
    MissingUpload,
    Uploading,
    Complete,
    SubmissionError,
}

impl StatusMessage {
    /// Translation key under `status.*`.
    pub fn key(self) -> &'static str {
        match self {
            Self::AddQuestions => "status.add_questions",
            Self::GenerationError => "status.generation_error",
            Self::Generated => "status.generated",
            Self::MissingUpload => "status.missing_upload",
            Self::Uploading => "status.uploading",
            Self::Complete => "status.complete",
            Self::SubmissionError => "status.submission_error",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Generating,
    GenerationFailed,
    Generated,
    Uploading,
    UploadFailed,
    Complete,
}
