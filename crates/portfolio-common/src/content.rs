/// Static portfolio content compiled into the binary.
///
/// Everything here is read-only and fixed at build time. Project summaries reference case
/// studies by slug; `case_study` is the only lookup and returns `None` for unknown slugs,
/// which callers render as a "not found" placeholder.
use serde::Serialize;

/// A structured write-up of one portfolio project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CaseStudy {
    /// Stable routing key, e.g. "commerce-engine"
    pub slug: &'static str,
    pub title: &'static str,
    pub overview: Overview,
    pub architecture: &'static str,
    pub walkthrough: &'static str,
    /// Key decisions, in display order
    pub decisions: &'static [&'static str],
    /// What was improved, in display order
    pub improvements: &'static [&'static str],
    pub results: &'static str,
    /// Screenshot URLs, e.g. "/covers/commerce.jpg"
    pub images: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub problem: &'static str,
    pub goals: &'static str,
    pub context: &'static str,
}

/// A project card on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    /// Slug of the matching `CaseStudy`
    pub slug: &'static str,
    pub title: &'static str,
    pub cover: &'static str,
    /// Technology names, in display order
    pub stack: &'static [&'static str],
    pub summary: Summary,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub problem: &'static str,
    pub solution: &'static str,
    pub impact: &'static str,
}

/// A landing-page section that the scroll-spy observes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavSection {
    /// Element id, e.g. "projects"
    pub id: &'static str,
    pub label: &'static str,
    /// Whether the header menu links to it (the hero is reached through the brand button)
    pub in_menu: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub brand: &'static str,
    /// Hero headline; the middle line is rendered with the accent gradient
    pub headline: [&'static str; 3],
    pub intro: &'static str,
    pub about: &'static str,
    /// Embedded 3D scene behind the hero, treated as an opaque URL
    pub hero_scene: &'static str,
    pub cv_path: &'static str,
    pub socials: &'static [SocialLink],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExperienceEntry {
    pub title: &'static str,
    pub org: &'static str,
    pub period: &'static str,
    pub bullets: &'static [&'static str],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Service {
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolCard {
    pub title: &'static str,
    pub tools: &'static [&'static str],
}

pub static PROFILE: Profile = Profile {
    brand: "iZakCode",
    headline: [
        "Designing scalable",
        "full-stack architectures",
        "— one crafted experience at a time.",
    ],
    intro: "I’m iZakCode — a full‑stack developer focused on robust architectures, clean engineering, and immersive UX.",
    about: "Engineer turned full‑stack developer with a bias for systems thinking. I craft scalable backends, clean APIs, and expressive frontends that move fast and feel great.",
    hero_scene: "https://prod.spline.design/cEecEwR6Ehj4iT8T/scene.splinecode",
    cv_path: "/cv.pdf",
    socials: &[
        SocialLink {
            label: "GitHub",
            href: "https://github.com",
        },
        SocialLink {
            label: "LinkedIn",
            href: "https://linkedin.com",
        },
    ],
};

/// Scroll-spy targets in document order.
pub const NAV_SECTIONS: &[NavSection] = &[
    NavSection {
        id: "home",
        label: "Home",
        in_menu: false,
    },
    NavSection {
        id: "about",
        label: "About",
        in_menu: true,
    },
    NavSection {
        id: "experience",
        label: "Experience",
        in_menu: true,
    },
    NavSection {
        id: "projects",
        label: "Projects",
        in_menu: true,
    },
    NavSection {
        id: "services",
        label: "Services",
        in_menu: true,
    },
    NavSection {
        id: "stack",
        label: "Tech",
        in_menu: true,
    },
    NavSection {
        id: "contact",
        label: "Contact",
        in_menu: true,
    },
];

/// Links in the hero's "More About Me" disclosure. Education lives in the About section.
pub const HERO_LINKS: &[NavSection] = &[
    NavSection {
        id: "about",
        label: "About",
        in_menu: false,
    },
    NavSection {
        id: "experience",
        label: "Experience",
        in_menu: false,
    },
    NavSection {
        id: "about",
        label: "Education",
        in_menu: false,
    },
];

pub const EXPERIENCE: &[ExperienceEntry] = &[
    ExperienceEntry {
        title: "Full‑Stack Developer",
        org: "Freelance",
        period: "2022 — Present",
        bullets: &[
            "Architected SPA platforms",
            "Shipped CI/CD pipelines",
            "Led performance overhauls",
        ],
    },
    ExperienceEntry {
        title: "Engineering Club",
        org: "Tech Society",
        period: "2020 — 2022",
        bullets: &[
            "Built internal tools",
            "Mentored juniors",
            "Organized dev talks",
        ],
    },
    ExperienceEntry {
        title: "Certifications",
        org: "Various",
        period: "Ongoing",
        bullets: &["AWS fundamentals", "Database design", "Security basics"],
    },
];

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Applications",
        description: "Design and build fast, scalable, secure web apps end‑to‑end.",
    },
    Service {
        title: "Full‑Stack Development",
        description: "APIs, databases, auth, CI/CD, and delightful UI in one stack.",
    },
];

pub const TOOL_CARDS: &[ToolCard] = &[
    ToolCard {
        title: "Core Tools",
        tools: &[
            "TypeScript",
            "React",
            "Next.js",
            "Node",
            "Express",
            "PostgreSQL",
            "Docker",
        ],
    },
    ToolCard {
        title: "Other Tools",
        tools: &[
            "GitHub",
            "Actions",
            "VS Code",
            "Linux",
            "Postman",
            "Drizzle ORM",
            "Supabase",
        ],
    },
];

pub const PROJECTS: &[ProjectSummary] = &[
    ProjectSummary {
        slug: "realtime-collab-suite",
        title: "Realtime Collab Suite",
        cover: "/covers/collab.jpg",
        stack: &["Next.js", "Socket.io", "PostgreSQL", "Docker"],
        summary: Summary {
            problem: "Teams struggle with context-switching across tools.",
            solution: "Unified docs, chat, and whiteboard in one realtime workspace.",
            impact: "Cut coordination overhead by 32% for pilot teams.",
        },
    },
    ProjectSummary {
        slug: "commerce-engine",
        title: "Headless Commerce Engine",
        cover: "/covers/commerce.jpg",
        stack: &["Next.js", "Node", "Stripe", "Supabase"],
        summary: Summary {
            problem: "Scaling DTC storefronts is complex and slow.",
            solution: "Composable API-first engine with caching and webhooks.",
            impact: "Improved page speed to 95+ and boosted CR by 14%.",
        },
    },
    ProjectSummary {
        slug: "insights-ops",
        title: "InsightsOps Platform",
        cover: "/covers/insights.jpg",
        stack: &["React", "Python", "FastAPI", "MongoDB"],
        summary: Summary {
            problem: "Siloed operational data blocks decisions.",
            solution: "Streaming ingestion + opinionated dashboards.",
            impact: "Reduced time-to-insight from days to minutes.",
        },
    },
];

pub const CASE_STUDIES: &[CaseStudy] = &[
    CaseStudy {
        slug: "realtime-collab-suite",
        title: "Realtime Collab Suite",
        overview: Overview {
            problem: "Teams juggle too many tools for synchronous work.",
            goals: "Unify docs, chat, and whiteboard with realtime presence.",
            context: "Built as a modular SPA with API-first backend.",
        },
        architecture: "Client-side Next-like routing, websockets layer, CQRS services, and cache-first data fetching.",
        walkthrough: "Core flows: create rooms, collaborative editing, mentions, presence cursors, and comment threads.",
        decisions: &[
            "Socket namespace per room",
            "Optimistic updates with reconciliation",
            "Separated write/read models",
        ],
        improvements: &[
            "Latency reduction",
            "Accessibility tuning",
            "Observability dashboards",
        ],
        results: "Cut coordination overhead by 32% for pilot teams.",
        images: &["/covers/collab.jpg"],
    },
    CaseStudy {
        slug: "commerce-engine",
        title: "Headless Commerce Engine",
        overview: Overview {
            problem: "Headless stacks get complex under scale.",
            goals: "Composable services with fast page delivery.",
            context: "SSR-ready SPA with edge caching.",
        },
        architecture: "Gateway + services, Stripe webhooks, catalog indexing, and CDN caching.",
        walkthrough: "Checkout flow, PDP caching strategy, and inventory sync.",
        decisions: &[
            "Stripe webhook retry logic",
            "Catalog denormalization",
            "Queue-backed jobs",
        ],
        improvements: &["95+ lighthouse", "Bundle splitting", "Preload hints"],
        results: "Improved CR by 14%",
        images: &["/covers/commerce.jpg"],
    },
    CaseStudy {
        slug: "insights-ops",
        title: "InsightsOps Platform",
        overview: Overview {
            problem: "Data silos slow decisions.",
            goals: "Streaming ingestion and clear dashboards.",
            context: "React SPA + Python services.",
        },
        architecture: "Ingestion workers, OLAP store, API aggregation, and client charts.",
        walkthrough: "Connect sources, define metrics, explore reports.",
        decisions: &["Windowed streams", "Idempotent upserts", "Typed contracts"],
        improvements: &[
            "Time-to-insight cuts",
            "Better retention",
            "Data lineage",
        ],
        results: "From days to minutes for key reports.",
        images: &["/covers/insights.jpg"],
    },
];

/// Look up a case study by slug. Slugs are matched exactly.
pub fn case_study(slug: &str) -> Option<&'static CaseStudy> {
    CASE_STUDIES.iter().find(|cs| cs.slug == slug)
}

/// Ids of all scroll-spy targets, in document order.
pub fn section_ids() -> impl Iterator<Item = &'static str> {
    NAV_SECTIONS.iter().map(|s| s.id)
}
