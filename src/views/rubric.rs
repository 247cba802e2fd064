use maud::{html, Markup};
use rust_i18n::t;
use ulid::Ulid;

use crate::{
    models::{QuestionField, QuestionRecord, QuestionType},
    names,
    rubric::RubricForm,
};

/// Panel requests run one at a time, so a field edit sent on blur lands
/// before a click that re-renders the whole panel.
const PANEL_SYNC: &str = "#rubric-panel:queue all";

fn type_label(question_type: QuestionType, locale: &str) -> String {
    match question_type {
        QuestionType::Mcq => t!("rubric.type_mcq", locale = locale).to_string(),
        QuestionType::TrueFalse => t!("rubric.type_truefalse", locale = locale).to_string(),
        QuestionType::Short => t!("rubric.type_short", locale = locale).to_string(),
    }
}

fn text_input(form_id: Ulid, index: usize, field: QuestionField, value: &str, kind: &str) -> Markup {
    html! {
        input type=(kind)
              name="value"
              value=(value)
              autocomplete="off"
              hx-patch=(names::question_field_url(form_id, index, field))
              hx-sync=(PANEL_SYNC)
              hx-trigger="change"
              hx-target="closest fieldset"
              hx-swap="outerHTML";
    }
}

/// Inputs of one question; swapped on its own after a field edit.
pub fn question_card(form_id: Ulid, index: usize, q: &QuestionRecord, locale: &str) -> Markup {
    html! {
        fieldset."question-card" id=(format!("question-{index}")) {
            legend { (t!("rubric.question_heading", locale = locale, number = index + 1)) }

            label {
                (t!("rubric.question_type", locale = locale))
                select name="value"
                       hx-patch=(names::question_field_url(form_id, index, QuestionField::Type))
                       hx-sync=(PANEL_SYNC)
                       hx-trigger="change"
                       hx-target="closest fieldset"
                       hx-swap="outerHTML" {
                    @for option in QuestionType::ALL {
                        option value=(option.as_str()) selected[option == q.question_type] {
                            (type_label(option, locale))
                        }
                    }
                }
            }
            label {
                (t!("rubric.question", locale = locale))
                (text_input(form_id, index, QuestionField::Question, &q.question, "text"))
            }
            label {
                (t!("rubric.rubric", locale = locale))
                (text_input(form_id, index, QuestionField::Rubric, &q.rubric, "text"))
            }
            label {
                (t!("rubric.sample_answer", locale = locale))
                (text_input(form_id, index, QuestionField::SampleAnswer, &q.sample_answer, "text"))
            }
            label {
                (t!("rubric.points", locale = locale))
                (text_input(form_id, index, QuestionField::Points, &q.points, "number"))
            }

            button."remove-question" type="button"
                   hx-delete=(names::question_url(form_id, index))
                   hx-sync=(PANEL_SYNC)
                   hx-target="#rubric-panel"
                   hx-swap="outerHTML" {
                (t!("rubric.remove_question", locale = locale))
            }
        }
    }
}

pub fn submission_status(form: &RubricForm, locale: &str) -> Markup {
    html! {
        @if let Some(file) = form.submission() {
            small { (t!("rubric.selected_file", locale = locale, name = file.file_name.as_str())) }
        }
    }
}

/// Everything the form owns; the target of most htmx swaps.
pub fn panel(form_id: Ulid, form: &RubricForm, locale: &str) -> Markup {
    let response = form.result().and_then(|r| r.gpt_response());

    html! {
        div id="rubric-panel" data-form-id=(form_id.to_string()) {
            article."rubric-form" {
                h1 { (t!("rubric.title", locale = locale)) }

                div."questions" {
                    @for (index, q) in form.questions().iter().enumerate() {
                        (question_card(form_id, index, q, locale))
                    }
                }

                div."centered" {
                    button type="button"
                           hx-post=(names::add_question_url(form_id))
                           hx-sync=(PANEL_SYNC)
                           hx-target="#rubric-panel"
                           hx-swap="outerHTML" {
                        (t!("rubric.add_question", locale = locale))
                    }
                }

                form."submission-upload"
                     hx-post=(names::submission_url(form_id))
                     hx-sync=(PANEL_SYNC)
                     hx-encoding="multipart/form-data"
                     hx-trigger="change"
                     hx-target="#submission-status"
                     hx-swap="innerHTML" {
                    label {
                        (t!("rubric.upload_submission", locale = locale))
                        input type="file" name=(names::SUBMISSION_PART);
                    }
                }
                div id="submission-status" { (submission_status(form, locale)) }

                div."centered" {
                    button."submit" type="button"
                           hx-post=(names::submit_url(form_id))
                           hx-sync=(PANEL_SYNC)
                           hx-target="#rubric-panel"
                           hx-swap="outerHTML"
                           hx-disabled-elt="this" {
                        (t!("rubric.submit", locale = locale))
                    }
                }

                @if let Some(status) = form.status() {
                    p."status-message" role="status" { (t!(status.key(), locale = locale)) }
                }

                @if form.generated().is_some() {
                    p."centered" {
                        a href=(names::rubric_download_url(form_id)) download=(names::RUBRIC_FILE_NAME) {
                            (t!("rubric.download_rubric", locale = locale))
                        }
                    }
                }
            }

            @if let Some(text) = response {
                details."grading-response" {
                    summary { (t!("rubric.response_preview", locale = locale)) }
                    pre { (text) }
                }
                a."export" role="button"
                  href=(names::export_url(form_id))
                  download=(names::EXPORT_FILE_NAME) {
                    (t!("rubric.download_response", locale = locale))
                }
            }
        }
    }
}

/// The autograder page body; scrolls to the top when mounted.
pub fn rubric_page(form_id: Ulid, form: &RubricForm, locale: &str) -> Markup {
    html! {
        div."rubric-page" data-scroll-top {
            (panel(form_id, form, locale))
        }
    }
}
