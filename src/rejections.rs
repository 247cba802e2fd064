use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use maud::{html, Markup};

use crate::{names, views};

#[derive(Debug)]
pub enum AppError {
    Internal(&'static str),
    Input(&'static str),
    NotFound(&'static str),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message) = match self {
            AppError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
            AppError::Input(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
        };
        (code, error_page(code, message)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the error and map it to an internal server error.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
    /// Log the error and map it to a bad request.
    fn reject_input(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T, E: std::fmt::Display> ResultExt<T> for Result<T, E> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Internal(msg)
        })
    }

    fn reject_input(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Input(msg)
        })
    }
}

fn error_page(code: StatusCode, message: &str) -> Markup {
    views::page(
        "Error",
        html! {
            article {
                h1 { (code.as_u16()) }
                p { (message) }
                a href=(names::HOME_URL) { "Intelli." }
            }
        },
        names::DEFAULT_LOCALE,
        "",
    )
}
