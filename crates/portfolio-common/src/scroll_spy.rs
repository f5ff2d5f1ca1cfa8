/// Scroll-spy: tracks which landing-page section is in view.
///
/// A `ScrollSpy` is the observation scope for one mounted landing page. Sections are
/// registered individually; intersection batches update the per-section visibility and
/// the active section is recomputed as the topmost section that is at least half visible.
/// The active id is published through a `watch` channel, so the spy is the only writer and
/// every `ActiveSection` handle is read-only. Dropping the spy closes the channel.
use std::collections::HashMap;

use tokio::sync::watch;
use tracing::debug;

use crate::error::CommonError;

/// Fraction of a section that must be visible for it to become active.
pub const VISIBILITY_THRESHOLD: f64 = 0.5;

/// One observation reported by the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionEntry {
    /// Section id, e.g. "projects"
    pub target: String,
    /// Visible fraction of the section, 0.0..=1.0
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    pub fn new(target: impl Into<String>, ratio: f64) -> Self {
        Self {
            target: target.into(),
            ratio,
            is_intersecting: ratio > 0.0,
        }
    }

    fn is_visible(&self) -> bool {
        self.is_intersecting && self.ratio >= VISIBILITY_THRESHOLD
    }
}

/// Read-only view of the active section.
#[derive(Debug, Clone)]
pub struct ActiveSection {
    rx: watch::Receiver<String>,
}

impl ActiveSection {
    pub fn get(&self) -> String {
        self.rx.borrow().clone()
    }

    /// False once the owning `ScrollSpy` has been torn down.
    pub fn is_connected(&self) -> bool {
        self.rx.has_changed().is_ok()
    }

    /// Wait for the next change. Returns `None` after teardown.
    pub async fn changed(&mut self) -> Option<String> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

pub struct ScrollSpy {
    /// Section ids in document order
    order: Vec<String>,
    /// Last reported entry for each registered section
    observed: HashMap<String, Option<IntersectionEntry>>,
    active: watch::Sender<String>,
}

impl ScrollSpy {
    /// Open an observation scope over `sections` (document order). The first section starts
    /// out active.
    pub fn mount<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let order: Vec<String> = sections.into_iter().map(Into::into).collect();
        let initial = order.first().cloned().unwrap_or_default();
        let (active, _) = watch::channel(initial);
        debug!(sections = order.len(), "scroll-spy mounted");
        Self {
            order,
            observed: HashMap::new(),
            active,
        }
    }

    /// Start observing a section.
    pub fn register(&mut self, id: &str) -> Result<(), CommonError> {
        if !self.order.iter().any(|s| s == id) {
            return Err(CommonError::UnknownSection(id.to_string()));
        }
        self.observed.entry(id.to_string()).or_insert(None);
        Ok(())
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.observed.contains_key(id)
    }

    pub fn active(&self) -> ActiveSection {
        ActiveSection {
            rx: self.active.subscribe(),
        }
    }

    pub fn current(&self) -> String {
        self.active.borrow().clone()
    }

    /// Apply a batch of intersection changes. Returns the new active section if it changed.
    pub fn observe(&mut self, batch: &[IntersectionEntry]) -> Option<String> {
        for entry in batch {
            match self.observed.get_mut(&entry.target) {
                Some(slot) => *slot = Some(entry.clone()),
                None => debug!(section = %entry.target, "ignoring entry for unobserved section"),
            }
        }

        let topmost = self.order.iter().find(|id| {
            self.observed
                .get(id.as_str())
                .and_then(Option::as_ref)
                .is_some_and(IntersectionEntry::is_visible)
        })?;

        let changed = self.active.send_if_modified(|current| {
            if current == topmost {
                return false;
            }
            current.clone_from(topmost);
            true
        });
        if !changed {
            return None;
        }
        debug!(section = %topmost, "active section changed");
        Some(topmost.clone())
    }

    /// Release every observation. Equivalent to dropping the spy.
    pub fn disconnect(self) {}
}

impl Drop for ScrollSpy {
    fn drop(&mut self) {
        debug!(observed = self.observed.len(), "scroll-spy disconnected");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECTIONS: [&str; 7] = [
        "home",
        "about",
        "experience",
        "projects",
        "services",
        "stack",
        "contact",
    ];

    fn mounted() -> ScrollSpy {
        let mut spy = ScrollSpy::mount(SECTIONS);
        for id in SECTIONS {
            spy.register(id).expect("known section");
        }
        spy
    }

    #[test]
    fn test_starts_at_first_section() {
        let spy = mounted();
        assert_eq!(spy.current(), "home");
        assert_eq!(spy.active().get(), "home");
    }

    #[test]
    fn test_half_visible_section_becomes_active() {
        let mut spy = mounted();
        let batch = [
            IntersectionEntry::new("experience", 0.2),
            IntersectionEntry::new("projects", 0.75),
            IntersectionEntry::new("services", 0.1),
        ];
        assert_eq!(spy.observe(&batch), Some("projects".to_string()));
        assert_eq!(spy.active().get(), "projects");
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let mut spy = mounted();
        assert_eq!(
            spy.observe(&[IntersectionEntry::new("about", 0.5)]),
            Some("about".to_string())
        );
        assert_eq!(spy.observe(&[IntersectionEntry::new("stack", 0.49)]), None);
        assert_eq!(spy.current(), "about");
    }

    #[test]
    fn test_topmost_visible_section_wins() {
        let mut spy = mounted();
        let batch = [
            IntersectionEntry::new("contact", 1.0),
            IntersectionEntry::new("stack", 0.9),
        ];
        assert_eq!(spy.observe(&batch), Some("stack".to_string()));

        // Order inside the batch does not matter.
        let mut spy = mounted();
        let reversed = [
            IntersectionEntry::new("stack", 0.9),
            IntersectionEntry::new("contact", 1.0),
        ];
        assert_eq!(spy.observe(&reversed), Some("stack".to_string()));
    }

    #[test]
    fn test_visibility_carries_across_batches() {
        let mut spy = mounted();
        spy.observe(&[IntersectionEntry::new("services", 0.8)]);
        spy.observe(&[IntersectionEntry::new("contact", 0.6)]);
        assert_eq!(spy.current(), "services");

        spy.observe(&[IntersectionEntry::new("services", 0.3)]);
        assert_eq!(spy.current(), "contact");
    }

    #[test]
    fn test_nothing_visible_keeps_previous() {
        let mut spy = mounted();
        spy.observe(&[IntersectionEntry::new("about", 0.9)]);
        assert_eq!(spy.observe(&[IntersectionEntry::new("about", 0.0)]), None);
        assert_eq!(spy.current(), "about");
    }

    #[test]
    fn test_non_intersecting_entry_is_not_visible() {
        let mut spy = mounted();
        let entry = IntersectionEntry {
            target: "projects".to_string(),
            ratio: 0.9,
            is_intersecting: false,
        };
        assert_eq!(spy.observe(&[entry]), None);
    }

    #[test]
    fn test_unregistered_sections_are_ignored() {
        let mut spy = ScrollSpy::mount(SECTIONS);
        spy.register("about").expect("known section");
        assert_eq!(spy.observe(&[IntersectionEntry::new("projects", 1.0)]), None);
        assert!(!spy.is_registered("projects"));
        assert!(matches!(
            spy.register("blog"),
            Err(CommonError::UnknownSection(id)) if id == "blog"
        ));
    }

    #[tokio::test]
    async fn test_handles_observe_changes_and_teardown() {
        let mut spy = mounted();
        let mut active = spy.active();
        assert!(active.is_connected());

        spy.observe(&[IntersectionEntry::new("projects", 0.6)]);
        assert_eq!(active.changed().await.as_deref(), Some("projects"));

        spy.disconnect();
        assert!(!active.is_connected());
        assert_eq!(active.changed().await, None);
        assert_eq!(active.get(), "projects");
    }
}
