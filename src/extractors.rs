use std::convert::Infallible;

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};
use axum_extra::extract::CookieJar;

use crate::names;

/// Extracts whether the request is an HTMX request by checking the `HX-Request` header.
pub struct IsHtmx(pub bool);

impl<S: Send + Sync> FromRequestParts<S> for IsHtmx {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_htmx = parts
            .headers
            .get("HX-Request")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == "true");
        Ok(IsHtmx(is_htmx))
    }
}

/// Extracts the locale from the `lang` cookie, falling back to the browser's
/// `Accept-Language` header, then to `"en"`.
pub struct Locale(pub String);

impl<S: Send + Sync> FromRequestParts<S> for Locale {
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let locale = jar
            .get(names::LOCALE_COOKIE_NAME)
            .and_then(|c| match_supported_locale(c.value()))
            .or_else(|| {
                parts
                    .headers
                    .get(header::ACCEPT_LANGUAGE)
                    .and_then(|v| v.to_str().ok())
                    .and_then(locale_from_accept_language)
            })
            .unwrap_or(names::DEFAULT_LOCALE);
        Ok(Locale(locale.to_string()))
    }
}

pub(crate) fn match_supported_locale(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some("en"),
        "ja" => Some("ja"),
        _ if lang.starts_with("en-") => Some("en"),
        _ if lang.starts_with("ja-") => Some("ja"),
        _ => None,
    }
}

/// Parse an `Accept-Language` header and return the best matching supported locale.
fn locale_from_accept_language(header: &str) -> Option<&'static str> {
    let mut entries: Vec<(&str, f32)> = header
        .split(',')
        .map(|entry| {
            let entry = entry.trim();
            if let Some((lang, params)) = entry.split_once(';') {
                let q = params
                    .split(';')
                    .find_map(|p| p.trim().strip_prefix("q="))
                    .and_then(|v| v.trim().parse::<f32>().ok())
                    .unwrap_or(1.0);
                (lang.trim(), q)
            } else {
                (entry, 1.0)
            }
        })
        .collect();
    entries.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    entries
        .iter()
        .find_map(|(lang, _)| match_supported_locale(lang))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_language_prefers_highest_quality() {
        assert_eq!(
            locale_from_accept_language("fr;q=0.9, ja;q=0.8, en;q=0.5"),
            Some("ja")
        );
        assert_eq!(locale_from_accept_language("en-GB,en;q=0.9"), Some("en"));
        assert_eq!(locale_from_accept_language("de, fr"), None);
    }
}
