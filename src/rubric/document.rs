use std::io::Cursor;

use bytes::Bytes;
use color_eyre::Result;
use docx_rs::{Docx, Paragraph, Run};

use crate::{
    models::{GeneratedDocument, QuestionRecord},
    names,
};

/// Plain lines written for one question, `number` is 1-based.
pub fn question_lines(number: usize, q: &QuestionRecord) -> [String; 6] {
    [
        format!("Question {number}:"),
        format!("Type: {}", q.question_type),
        format!("Question: {}", q.question),
        format!("Rubric: {}", q.rubric),
        format!("Sample Answer: {}", q.sample_answer),
        format!("Points: {}", q.points),
    ]
}

/// Builds `rubric.docx`: a bold title followed by six paragraphs per question.
pub fn rubric_document(questions: &[QuestionRecord]) -> Result<GeneratedDocument> {
    let title = Paragraph::new().add_run(Run::new().add_text(names::RUBRIC_TITLE).bold().size(28));

    let docx = questions
        .iter()
        .enumerate()
        .flat_map(|(i, q)| question_lines(i + 1, q))
        .fold(Docx::new().add_paragraph(title), |docx, line| {
            docx.add_paragraph(plain_paragraph(&line))
        });

    Ok(GeneratedDocument {
        file_name: names::RUBRIC_FILE_NAME.to_string(),
        media_type: names::DOCX_MEDIA_TYPE,
        bytes: pack(docx)?,
    })
}

/// Wraps the grader's text in a single-paragraph document.
pub fn response_document(text: &str) -> Result<Bytes> {
    pack(Docx::new().add_paragraph(plain_paragraph(text)))
}

fn plain_paragraph(text: &str) -> Paragraph {
    Paragraph::new().add_run(Run::new().add_text(text))
}

fn pack(docx: Docx) -> Result<Bytes> {
    let mut buf = Cursor::new(Vec::new());
    docx.build().pack(&mut buf)?;
    Ok(Bytes::from(buf.into_inner()))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::models::QuestionType;

    /// Paragraph texts of a packed document, in order.
    pub(crate) fn paragraphs(bytes: &[u8]) -> Vec<String> {
        use docx_rs::{DocumentChild, ParagraphChild, RunChild};

        let docx = docx_rs::read_docx(bytes).unwrap();
        docx.document
            .children
            .iter()
            .filter_map(|child| match child {
                DocumentChild::Paragraph(p) => Some(p),
                _ => None,
            })
            .map(|p| {
                let mut text = String::new();
                for child in &p.children {
                    if let ParagraphChild::Run(run) = child {
                        for rc in &run.children {
                            if let RunChild::Text(t) = rc {
                                text.push_str(&t.text);
                            }
                        }
                    }
                }
                text
            })
            .collect()
    }

    fn record(t: QuestionType, question: &str, rubric: &str, sample: &str, points: &str) -> QuestionRecord {
        QuestionRecord {
            question_type: t,
            question: question.to_string(),
            rubric: rubric.to_string(),
            sample_answer: sample.to_string(),
            points: points.to_string(),
        }
    }

    #[test]
    fn rubric_document_lists_every_question_in_order() {
        let questions = vec![
            record(QuestionType::Mcq, "What is 2+2?", "Award if answer=4", "4", "10"),
            record(QuestionType::Short, "Explain gravity", "Award for mention of mass", "", "20"),
        ];

        let doc = rubric_document(&questions).unwrap();
        assert_eq!(doc.file_name, "rubric.docx");
        assert_eq!(doc.media_type, names::DOCX_MEDIA_TYPE);

        let lines = paragraphs(&doc.bytes);
        assert_eq!(
            lines,
            vec![
                "Rubric Questions",
                "Question 1:",
                "Type: mcq",
                "Question: What is 2+2?",
                "Rubric: Award if answer=4",
                "Sample Answer: 4",
                "Points: 10",
                "Question 2:",
                "Type: short",
                "Question: Explain gravity",
                "Rubric: Award for mention of mass",
                "Sample Answer: ",
                "Points: 20",
            ]
        );
    }

    #[test]
    fn rubric_document_has_six_lines_per_question() {
        let questions = vec![QuestionRecord::default(); 5];
        let doc = rubric_document(&questions).unwrap();
        assert_eq!(paragraphs(&doc.bytes).len(), 1 + 6 * 5);
    }

    #[test]
    fn response_document_is_one_paragraph() {
        let bytes = response_document("Great work").unwrap();
        assert_eq!(paragraphs(&bytes), vec!["Great work"]);
    }
}
