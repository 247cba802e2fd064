use axum::{
    extract::{Form, Query},
    http::{header::SET_COOKIE, HeaderName, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use serde::Deserialize;

use crate::{
    extractors::{match_supported_locale, IsHtmx, Locale},
    names,
    nav::NavSection,
    rejections::AppError,
    utils, views, AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home))
        .route("/set-locale", post(set_locale))
}

#[derive(Deserialize)]
struct HomeQuery {
    #[serde(default)]
    section: Option<String>,
}

async fn home(
    IsHtmx(is_htmx): IsHtmx,
    Locale(locale): Locale,
    Query(query): Query<HomeQuery>,
) -> maud::Markup {
    let scroll_target = query.section.as_deref().and_then(NavSection::from_id);
    if query.section.is_some() && scroll_target.is_none() {
        tracing::debug!("ignoring unknown section {:?}", query.section);
    }

    views::render(
        is_htmx,
        "Home",
        views::home::home(scroll_target, &locale),
        &locale,
        names::HOME_URL,
    )
}

#[derive(Deserialize)]
struct SetLocaleBody {
    lang: String,
}

async fn set_locale(Form(body): Form<SetLocaleBody>) -> Result<impl IntoResponse, AppError> {
    let lang = match_supported_locale(&body.lang).ok_or(AppError::Input("unsupported locale"))?;
    Ok((
        StatusCode::OK,
        [
            (SET_COOKIE, utils::locale_cookie(names::LOCALE_COOKIE_NAME, lang)),
            (HeaderName::from_static("hx-refresh"), "true".to_string()),
        ],
    ))
}
