use maud::{html, Markup};
use rust_i18n::t;

use crate::{names, nav::NavSection};

fn section(id: NavSection, body: Markup) -> Markup {
    html! {
        section."home-section" id=(id.id()) { (body) }
    }
}

/// Home view. `scroll_target` is the section to scroll to once mounted.
pub fn home(scroll_target: Option<NavSection>, locale: &str) -> Markup {
    html! {
        div."home" data-scroll-target=[scroll_target.map(NavSection::id)] {
            section."hero" {
                h1 { (t!("home.tagline", locale = locale)) }
                p { (t!("home.description", locale = locale)) }
            }

            (section(NavSection::Autograder, html! {
                h2 { (t!("nav.autograder", locale = locale)) }
                p { (t!("home.autograder_desc", locale = locale)) }
                a role="button" href=(names::AUTOGRADER_URL) {
                    (t!("home.autograder_cta", locale = locale))
                }
            }))

            (section(NavSection::HowItWorks, html! {
                h2 { (t!("nav.how_it_works", locale = locale)) }
                ol {
                    li { (t!("home.step_questions", locale = locale)) }
                    li { (t!("home.step_upload", locale = locale)) }
                    li { (t!("home.step_grade", locale = locale)) }
                    li { (t!("home.step_export", locale = locale)) }
                }
            }))

            (section(NavSection::Subscribe, html! {
                h2 { (t!("nav.subscribe", locale = locale)) }
                p { (t!("home.subscribe_desc", locale = locale)) }
            }))

            (section(NavSection::Contact, html! {
                h2 { (t!("nav.contact", locale = locale)) }
                p { (t!("home.contact_desc", locale = locale)) }
            }))

            (section(NavSection::Login, html! {
                h2 { (t!("nav.login", locale = locale)) }
                p { (t!("home.login_desc", locale = locale)) }
            }))
        }
    }
}
