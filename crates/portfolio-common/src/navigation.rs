/// Client-side navigation: the single writer of the current path.
///
/// Each path change resolves the route, asks the viewport to scroll back to the top and
/// hands the new path to the transition controller. Readers follow the path through a
/// `watch` receiver.
use tokio::sync::watch;
use tracing::debug;

use crate::router::{self, Route};
use crate::transition::{TransitionController, TransitionEvent, TransitionSpec};

/// Effects of one path change.
#[derive(Debug, Clone, PartialEq)]
pub struct Navigation {
    pub route: Route,
    /// Smooth-scroll the viewport to the top; false when the path did not change
    pub scroll_to_top: bool,
    pub transitions: Vec<TransitionEvent<String>>,
}

pub struct Navigator {
    path: watch::Sender<String>,
    route: Route,
    transitions: TransitionController<String>,
}

impl Navigator {
    /// Mount the first page. The initial mount scrolls to the top like any other change.
    pub fn start(path: &str, spec: TransitionSpec) -> (Self, Navigation) {
        let pathname = router::pathname(path).to_string();
        let route = router::resolve(&pathname);
        let mut transitions = TransitionController::new(spec);
        let events = transitions.navigate(pathname.clone());
        let (tx, _) = watch::channel(pathname);

        let navigator = Self {
            path: tx,
            route: route.clone(),
            transitions,
        };
        let navigation = Navigation {
            route,
            scroll_to_top: true,
            transitions: events,
        };
        (navigator, navigation)
    }

    pub fn navigate(&mut self, path: &str) -> Navigation {
        let pathname = router::pathname(path);
        if *self.path.borrow() == pathname {
            return Navigation {
                route: self.route.clone(),
                scroll_to_top: false,
                transitions: vec![],
            };
        }

        self.route = router::resolve(pathname);
        self.path.send_replace(pathname.to_string());
        debug!(path = pathname, route = ?self.route, "navigated");

        Navigation {
            route: self.route.clone(),
            scroll_to_top: true,
            transitions: self.transitions.navigate(pathname.to_string()),
        }
    }

    /// Forward an animation completion to the transition controller.
    pub fn animation_complete(&mut self, path: &str) -> Vec<TransitionEvent<String>> {
        self.transitions.animation_complete(&path.to_string())
    }

    pub fn path(&self) -> String {
        self.path.borrow().clone()
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn subscribe(&self) -> watch::Receiver<String> {
        self.path.subscribe()
    }

    pub fn transitions(&self) -> &TransitionController<String> {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::transition::Phase;

    fn settle(nav: &mut Navigator) {
        while let Some((key, _)) = nav.transitions().mounted() {
            let key = key.clone();
            if nav.animation_complete(&key).is_empty() {
                break;
            }
        }
    }

    #[test]
    fn test_start_mounts_initial_page() {
        let (nav, first) = Navigator::start("/", TransitionSpec::PAGE);
        assert_eq!(first.route, Route::Landing);
        assert!(first.scroll_to_top);
        assert_eq!(first.transitions, vec![TransitionEvent::Mounted("/".to_string())]);
        assert_eq!(nav.path(), "/");
    }

    #[test]
    fn test_round_trip_leaves_no_case_study_state() {
        let (mut nav, _) = Navigator::start("/", TransitionSpec::PAGE);
        settle(&mut nav);

        let to_case = nav.navigate("/case/commerce-engine");
        assert_eq!(
            to_case.route,
            Route::CaseStudy {
                slug: "commerce-engine".to_string()
            }
        );
        assert!(content::case_study("commerce-engine").is_some());
        assert!(to_case.scroll_to_top);
        settle(&mut nav);

        let back = nav.navigate("/");
        assert_eq!(back.route, Route::Landing);
        settle(&mut nav);

        assert_eq!(nav.path(), "/");
        assert_eq!(nav.route(), &Route::Landing);
        assert_eq!(nav.route().slug(), None);
        assert_eq!(
            nav.transitions().mounted(),
            Some((&"/".to_string(), Phase::Settled))
        );
        assert!(nav.transitions().queued().is_none());
    }

    #[test]
    fn test_same_path_does_not_scroll() {
        let (mut nav, _) = Navigator::start("/case/insights-ops", TransitionSpec::PAGE);
        let again = nav.navigate("/case/insights-ops#results");
        assert!(!again.scroll_to_top);
        assert!(again.transitions.is_empty());
    }

    #[test]
    fn test_fallback_paths_are_distinct_pages() {
        let (mut nav, _) = Navigator::start("/", TransitionSpec::PAGE);
        settle(&mut nav);
        let nav_result = nav.navigate("/unknown");
        assert_eq!(nav_result.route, Route::Landing);
        assert_eq!(
            nav_result.transitions,
            vec![TransitionEvent::Exiting("/".to_string())]
        );
    }

    #[test]
    fn test_subscribers_see_path_changes() {
        let (mut nav, _) = Navigator::start("/", TransitionSpec::PAGE);
        let mut rx = nav.subscribe();
        nav.navigate("/case/insights-ops");
        assert!(rx.has_changed().unwrap_or(false));
        assert_eq!(*rx.borrow_and_update(), "/case/insights-ops");
    }
}
