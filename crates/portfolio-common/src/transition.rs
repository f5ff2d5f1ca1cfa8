/// Page-transition state machine.
///
/// Pages are keyed by path. At most one page is mounted at a time: navigating away puts the
/// mounted page into `Exiting` and queues the destination, which only mounts once the exit
/// animation reports completion. Animation timing itself belongs to the renderer; this
/// controller only sequences the phases.
use std::fmt::Debug;
use std::time::Duration;

use serde::Serialize;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Keyframe {
    pub opacity: f32,
    /// Vertical offset in CSS pixels; positive is down
    pub offset_y: f32,
}

/// Visual parameters of a page transition.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitionSpec {
    pub duration: Duration,
    /// Cubic-bezier control points
    pub ease: [f32; 4],
    /// Where an entering page starts
    pub initial: Keyframe,
    /// Where a settled page rests
    pub settled: Keyframe,
    /// Where an exiting page ends
    pub exit: Keyframe,
}

impl TransitionSpec {
    pub const PAGE: TransitionSpec = TransitionSpec {
        duration: Duration::from_millis(350),
        ease: [0.16, 1.0, 0.3, 1.0],
        initial: Keyframe {
            opacity: 0.0,
            offset_y: 12.0,
        },
        settled: Keyframe {
            opacity: 1.0,
            offset_y: 0.0,
        },
        exit: Keyframe {
            opacity: 0.0,
            offset_y: -12.0,
        },
    };

    /// The easing as a CSS timing function, e.g. `cubic-bezier(0.16, 1, 0.3, 1)`.
    pub fn css_easing(&self) -> String {
        let [x1, y1, x2, y2] = self.ease;
        format!("cubic-bezier({x1}, {y1}, {x2}, {y2})")
    }
}

impl Default for TransitionSpec {
    fn default() -> Self {
        Self::PAGE
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Entering,
    Settled,
    Exiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionEvent<K> {
    /// The page was mounted and starts its enter animation
    Mounted(K),
    Settled(K),
    /// The page stopped being interactive and starts its exit animation
    Exiting(K),
    Unmounted(K),
}

#[derive(Debug, Clone)]
struct MountedPage<K> {
    key: K,
    phase: Phase,
}

#[derive(Debug, Clone)]
pub struct TransitionController<K> {
    spec: TransitionSpec,
    mounted: Option<MountedPage<K>>,
    queued: Option<K>,
}

impl<K: Clone + PartialEq + Debug> TransitionController<K> {
    pub fn new(spec: TransitionSpec) -> Self {
        Self {
            spec,
            mounted: None,
            queued: None,
        }
    }

    pub fn spec(&self) -> &TransitionSpec {
        &self.spec
    }

    /// Request that `key` become the visible page.
    pub fn navigate(&mut self, key: K) -> Vec<TransitionEvent<K>> {
        let Some(current) = self.mounted.as_mut() else {
            return vec![self.mount(key)];
        };

        match current.phase {
            Phase::Exiting => {
                debug!(exiting = ?current.key, queued = ?key, "navigation queued behind exit");
                self.queued = Some(key);
                vec![]
            }
            _ if current.key == key => vec![],
            _ => {
                current.phase = Phase::Exiting;
                debug!(exiting = ?current.key, queued = ?key, "page exiting");
                let event = TransitionEvent::Exiting(current.key.clone());
                self.queued = Some(key);
                vec![event]
            }
        }
    }

    /// Report that the running animation of `key` finished.
    pub fn animation_complete(&mut self, key: &K) -> Vec<TransitionEvent<K>> {
        let Some(current) = self.mounted.as_mut() else {
            return vec![];
        };
        if current.key != *key {
            debug!(key = ?key, "ignoring completion for page that is not mounted");
            return vec![];
        }

        match current.phase {
            Phase::Entering => {
                current.phase = Phase::Settled;
                vec![TransitionEvent::Settled(current.key.clone())]
            }
            Phase::Settled => vec![],
            Phase::Exiting => {
                let mut events = Vec::with_capacity(2);
                if let Some(gone) = self.mounted.take() {
                    debug!(key = ?gone.key, "page unmounted");
                    events.push(TransitionEvent::Unmounted(gone.key));
                }
                if let Some(next) = self.queued.take() {
                    events.push(self.mount(next));
                }
                events
            }
        }
    }

    /// The mounted page and its phase.
    pub fn mounted(&self) -> Option<(&K, Phase)> {
        self.mounted.as_ref().map(|m| (&m.key, m.phase))
    }

    /// The page that currently accepts input. Exiting pages never do.
    pub fn interactive(&self) -> Option<&K> {
        self.mounted
            .as_ref()
            .filter(|m| m.phase != Phase::Exiting)
            .map(|m| &m.key)
    }

    pub fn queued(&self) -> Option<&K> {
        self.queued.as_ref()
    }

    /// True once a page is settled and nothing is waiting to mount.
    pub fn is_settled(&self) -> bool {
        self.queued.is_none() && matches!(self.mounted(), Some((_, Phase::Settled)))
    }

    fn mount(&mut self, key: K) -> TransitionEvent<K> {
        debug!(key = ?key, "page mounted");
        self.mounted = Some(MountedPage {
            key: key.clone(),
            phase: Phase::Entering,
        });
        TransitionEvent::Mounted(key)
    }
}

impl<K: Clone + PartialEq + Debug> Default for TransitionController<K> {
    fn default() -> Self {
        Self::new(TransitionSpec::PAGE)
    }
}
