use maud::{html, Markup};
use rust_i18n::t;

use crate::{
    names,
    nav::{NavPlan, NavSection},
};

fn nav_link(plan: &NavPlan, label: &str, class: &str) -> Markup {
    html! {
        a class=(class)
          href=(plan.href())
          data-nav-section=(plan.section().id())
          data-nav-action=(plan.action()) {
            (label)
        }
    }
}

/// Fixed header with the brand and one link per home section.
pub fn navbar(current_path: &str, locale: &str) -> Markup {
    let links = [
        NavSection::Autograder,
        NavSection::HowItWorks,
        NavSection::Subscribe,
        NavSection::Contact,
    ];
    let login = NavPlan::for_route(current_path, NavSection::Login);

    html! {
        nav."navbar" id="navbar" data-offset=(names::NAVBAR_OFFSET_PX) {
            a."brand" href=(names::HOME_URL) { "Intelli." }
            ul."nav-links" {
                @for section in links {
                    li {
                        (nav_link(
                            &NavPlan::for_route(current_path, section),
                            &t!(section.label_key(), locale = locale),
                            "nav-link",
                        ))
                    }
                }
            }
            (nav_link(&login, &t!(login.section().label_key(), locale = locale), "nav-login"))
        }
    }
}
