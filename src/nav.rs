use crate::names;

/// Sections of the home view reachable from the navbar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavSection {
    Autograder,
    HowItWorks,
    Subscribe,
    Contact,
    Login,
}

impl NavSection {
    pub const ALL: [NavSection; 5] = [
        Self::Autograder,
        Self::HowItWorks,
        Self::Subscribe,
        Self::Contact,
        Self::Login,
    ];

    /// DOM id of the section element.
    pub fn id(self) -> &'static str {
        match self {
            Self::Autograder => "autograder",
            Self::HowItWorks => "how-it-works",
            Self::Subscribe => "subscribe",
            Self::Contact => "contact",
            Self::Login => "login",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Self::Autograder => "nav.autograder",
            Self::HowItWorks => "nav.how_it_works",
            Self::Subscribe => "nav.subscribe",
            Self::Contact => "nav.contact",
            Self::Login => "nav.login",
        }
    }

    /// Unknown ids map to `None`, which makes the scroll a no-op.
    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }
}

/// What a navbar click does, decided from the route the page was rendered for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavPlan {
    ScrollTo {
        section: NavSection,
        offset: u32,
    },
    /// Go home first; the home view scrolls once it has mounted.
    NavigateThenScroll {
        to: &'static str,
        section: NavSection,
        offset: u32,
    },
}

impl NavPlan {
    pub fn for_route(current_path: &str, section: NavSection) -> Self {
        let offset = names::NAVBAR_OFFSET_PX;
        if current_path == names::HOME_URL {
            NavPlan::ScrollTo { section, offset }
        } else {
            NavPlan::NavigateThenScroll {
                to: names::HOME_URL,
                section,
                offset,
            }
        }
    }

    pub fn section(&self) -> NavSection {
        match self {
            NavPlan::ScrollTo { section, .. } | NavPlan::NavigateThenScroll { section, .. } => {
                *section
            }
        }
    }

    /// Value of `data-nav-action` read by the static script.
    pub fn action(&self) -> &'static str {
        match self {
            NavPlan::ScrollTo { .. } => "scroll",
            NavPlan::NavigateThenScroll { .. } => "navigate",
        }
    }

    pub fn href(&self) -> String {
        names::home_section_url(self.section().id())
    }
}
