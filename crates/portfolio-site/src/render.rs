/// Page rendering.
///
/// Each page is an askama template fed by a small view struct built from the static
/// content. Templates only lay out what they are given; anything conditional (active nav
/// link, form status, joined lists) is decided here.
use askama::Template;
use chrono::Datelike;

use portfolio_common::contact_form::{ContactForm, SubmissionStatus};
use portfolio_common::content::{
    self, CaseStudy, ExperienceEntry, NavSection, Profile, Service, SocialLink, ToolCard,
};
use portfolio_common::router::case_study_path;
use portfolio_common::scroll_spy::VISIBILITY_THRESHOLD;
use portfolio_common::transition::TransitionSpec;

const LIST_SEPARATOR: &str = " • ";

pub struct NavLink {
    pub id: &'static str,
    pub label: &'static str,
    pub active: bool,
}

pub struct ProjectCard {
    pub href: String,
    pub title: &'static str,
    pub cover: &'static str,
    pub stack: &'static [&'static str],
    pub problem: &'static str,
}

pub struct InfoCard {
    pub title: &'static str,
    pub text: &'static str,
}

pub struct FormView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub sending: bool,
    pub success: bool,
    pub error: bool,
    /// Why the server refused the submission; empty when it did not
    pub rejected: String,
}

impl FormView {
    pub fn new(form: &ContactForm, rejected: Option<String>) -> Self {
        let fields = form.fields();
        Self {
            name: fields.name.clone(),
            email: fields.email.clone(),
            message: fields.message.clone(),
            sending: !form.can_submit(),
            success: form.status() == SubmissionStatus::Success,
            error: form.status() == SubmissionStatus::Error,
            rejected: rejected.unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "landing.html")]
pub struct LandingPage {
    pub title: String,
    pub transition_css: String,
    pub profile: &'static Profile,
    pub socials: &'static [SocialLink],
    pub nav: Vec<NavLink>,
    pub hero_links: &'static [NavSection],
    pub experience: &'static [ExperienceEntry],
    pub projects: Vec<ProjectCard>,
    pub services: &'static [Service],
    pub tool_cards: &'static [ToolCard],
    pub form: FormView,
    /// JSON array of scroll-spy targets for the inline observer script
    pub spy_sections: String,
    pub spy_threshold: f64,
    pub year: i32,
}

#[derive(Template)]
#[template(path = "case_study.html")]
pub struct CaseStudyPage {
    pub title: String,
    pub transition_css: String,
    pub case_study: &'static CaseStudy,
    pub cards: Vec<InfoCard>,
    pub decisions: String,
    pub improvements: String,
}

#[derive(Template)]
#[template(path = "not_found.html")]
pub struct NotFoundPage {
    pub title: String,
    pub transition_css: String,
}

/// Render the landing page with `active` highlighted in the header.
pub fn landing(active: &str, form: FormView) -> Result<String, askama::Error> {
    let nav = content::NAV_SECTIONS
        .iter()
        .filter(|s| s.in_menu)
        .map(|s| NavLink {
            id: s.id,
            label: s.label,
            active: s.id == active,
        })
        .collect();

    let projects = content::PROJECTS
        .iter()
        .map(|p| ProjectCard {
            href: case_study_path(p.slug),
            title: p.title,
            cover: p.cover,
            stack: p.stack,
            problem: p.summary.problem,
        })
        .collect();

    let spy_sections = serde_json::to_string(&content::section_ids().collect::<Vec<_>>())
        .unwrap_or_else(|_| "[]".to_string());

    LandingPage {
        title: content::PROFILE.brand.to_string(),
        transition_css: transition_css(&TransitionSpec::PAGE),
        profile: &content::PROFILE,
        socials: content::PROFILE.socials,
        nav,
        hero_links: content::HERO_LINKS,
        experience: content::EXPERIENCE,
        projects,
        services: content::SERVICES,
        tool_cards: content::TOOL_CARDS,
        form,
        spy_sections,
        spy_threshold: VISIBILITY_THRESHOLD,
        year: chrono::Utc::now().year(),
    }
    .render()
}

pub fn case_study(case_study: &'static CaseStudy) -> Result<String, askama::Error> {
    let overview = &case_study.overview;
    CaseStudyPage {
        title: format!("{} · {}", case_study.title, content::PROFILE.brand),
        transition_css: transition_css(&TransitionSpec::PAGE),
        case_study,
        cards: vec![
            InfoCard {
                title: "Problem",
                text: overview.problem,
            },
            InfoCard {
                title: "Goals",
                text: overview.goals,
            },
            InfoCard {
                title: "Context",
                text: overview.context,
            },
        ],
        decisions: case_study.decisions.join(LIST_SEPARATOR),
        improvements: case_study.improvements.join(LIST_SEPARATOR),
    }
    .render()
}

pub fn not_found() -> Result<String, askama::Error> {
    NotFoundPage {
        title: format!("Not found · {}", content::PROFILE.brand),
        transition_css: transition_css(&TransitionSpec::PAGE),
    }
    .render()
}

/// Enter/exit keyframes for the page wrapper.
fn transition_css(spec: &TransitionSpec) -> String {
    let duration = spec.duration.as_millis();
    let easing = spec.css_easing();
    let (from, to, exit) = (spec.initial, spec.settled, spec.exit);
    format!(
        "@keyframes page-enter {{ from {{ opacity: {}; transform: translateY({}px); }} \
to {{ opacity: {}; transform: translateY({}px); }} }}\n\
@keyframes page-exit {{ from {{ opacity: {}; transform: translateY({}px); }} \
to {{ opacity: {}; transform: translateY({}px); }} }}\n\
.page {{ animation: page-enter {duration}ms {easing} both; }}\n\
.page.page-exit {{ animation: page-exit {duration}ms {easing} both; pointer-events: none; }}",
        from.opacity, from.offset_y, to.opacity, to.offset_y, to.opacity, to.offset_y, exit.opacity,
        exit.offset_y,
    )
}
