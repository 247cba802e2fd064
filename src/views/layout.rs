use maud::{html, Markup, DOCTYPE};
use rust_i18n::t;

use crate::{names, utils, views::navbar};

fn css() -> Markup {
    html! {
        link rel="stylesheet" href="https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css";
        link rel="stylesheet" href="/static/index.css";
    }
}

fn js() -> Markup {
    html! {
        script src="https://unpkg.com/htmx.org@2.0.4" {}
        script src="/static/app.js" defer {}
    }
}

fn footer(locale: &str) -> Markup {
    html! {
        footer."container" {
            small {
                (t!("layout.footer", locale = locale)) " · " (utils::VERSION)
                " · "
                form."locale-switch" hx-post=(names::SET_LOCALE_URL) hx-swap="none" {
                    button."secondary outline" name="lang" value="en" { "EN" }
                    button."secondary outline" name="lang" value="ja" { "日本語" }
                }
            }
        }
    }
}

/// Full document. `current_path` decides how navbar links behave.
pub fn page(title: &str, body: Markup, locale: &str, current_path: &str) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(locale) {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                meta name="color-scheme" content="light";

                (css())
                (js())

                title { (format!("{title} - Intelli.")) }
            }

            body {
                (navbar::navbar(current_path, locale))
                main."container" { (body) }
                (footer(locale))
            }
        }
    }
}

pub fn titled(title: &str, body: Markup) -> Markup {
    html! {
        title { (title) " - Intelli." }
        (body)
    }
}

/// Partial for htmx requests, full page otherwise.
pub fn render(is_htmx: bool, title: &str, body: Markup, locale: &str, current_path: &str) -> Markup {
    if is_htmx {
        titled(title, body)
    } else {
        page(title, body, locale, current_path)
    }
}
