//! Hash Router
//!
//! Route names live in the URL fragment (`#tasks`, empty = overview). The
//! `Router` decides transitions; the browser helpers below apply them.

use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Overview,
    Projects,
    Tasks,
    Analytics,
    Documents,
    Notes,
}

impl Route {
    pub const ALL: [Route; 6] = [
        Route::Overview,
        Route::Projects,
        Route::Tasks,
        Route::Analytics,
        Route::Documents,
        Route::Notes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Route::Overview => "overview",
            Route::Projects => "projects",
            Route::Tasks => "tasks",
            Route::Analytics => "analytics",
            Route::Documents => "documents",
            Route::Notes => "notes",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Route::Overview => "Overview",
            Route::Projects => "Projects",
            Route::Tasks => "Tasks",
            Route::Analytics => "Analytics",
            Route::Documents => "Documents",
            Route::Notes => "Notes",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Route::Overview => "🏠",
            Route::Projects => "📁",
            Route::Tasks => "✅",
            Route::Analytics => "📊",
            Route::Documents => "📄",
            Route::Notes => "📝",
        }
    }

    /// DOM id of the page section this route shows
    pub fn section_id(&self) -> &'static str {
        match self {
            Route::Overview => "overview-page",
            Route::Projects => "projects-page",
            Route::Tasks => "tasks-page",
            Route::Analytics => "analytics-page",
            Route::Documents => "documents-page",
            Route::Notes => "notes-page",
        }
    }

    /// URL written to history; overview gets the bare `#`
    pub fn fragment(&self) -> String {
        match self {
            Route::Overview => "#".to_string(),
            other => format!("#{}", other.name()),
        }
    }

    pub fn parse(name: &str) -> Option<Route> {
        Route::ALL.into_iter().find(|r| r.name() == name)
    }

    /// Route for a `location.hash` value; empty means overview.
    pub fn from_hash(hash: &str) -> Option<Route> {
        let name = hash.trim_start_matches('#');
        if name.is_empty() {
            Some(Route::Overview)
        } else {
            Route::parse(name)
        }
    }
}

/// What started a navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Nav link, quick action or any programmatic navigate
    Link,
    /// Browser back/forward
    History,
    /// First resolution at page load
    InitialLoad,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryUpdate {
    Push(String),
    Replace(String),
    Untouched,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub route: Route,
    pub history: HistoryUpdate,
}

/// Current-route state machine. Starts at overview and never terminates.
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn current(&self) -> Route {
        self.current
    }

    /// Resolve a route name. Unknown names yield `None` and leave state alone,
    /// except at initial load where they fall back to overview.
    pub fn resolve(&mut self, name: &str, trigger: Trigger) -> Option<Transition> {
        let route = match (Route::from_hash(name), trigger) {
            (Some(route), _) => route,
            (None, Trigger::InitialLoad) => Route::Overview,
            (None, _) => return None,
        };
        let history = match trigger {
            Trigger::Link => HistoryUpdate::Push(route.fragment()),
            Trigger::InitialLoad => HistoryUpdate::Replace(route.fragment()),
            Trigger::History => HistoryUpdate::Untouched,
        };
        self.current = route;
        Some(Transition { route, history })
    }
}

// ========================
// Browser history
// ========================

/// Value stored in `history.state`
#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryState {
    pub route: String,
}

pub fn current_hash() -> String {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .unwrap_or_default()
}

/// Route name carried by a popstate event, falling back to the fragment.
pub fn route_from_state(state: JsValue) -> String {
    serde_wasm_bindgen::from_value::<HistoryState>(state)
        .map(|s| s.route)
        .unwrap_or_else(|_| current_hash())
}

pub fn apply_history(route: Route, update: &HistoryUpdate) {
    let (url, push) = match update {
        HistoryUpdate::Push(url) => (url, true),
        HistoryUpdate::Replace(url) => (url, false),
        HistoryUpdate::Untouched => return,
    };
    let Some(history) = web_sys::window().and_then(|w| w.history().ok()) else {
        tracing::warn!("history API unavailable, route {} not recorded", route.name());
        return;
    };
    let state = match serde_wasm_bindgen::to_value(&HistoryState { route: route.name().to_string() }) {
        Ok(state) => state,
        Err(err) => {
            tracing::warn!(error = %err, "could not encode history state");
            JsValue::NULL
        }
    };
    let result = if push {
        history.push_state_with_url(&state, "", Some(url))
    } else {
        history.replace_state_with_url(&state, "", Some(url))
    };
    if let Err(err) = result {
        tracing::warn!(?err, "history update failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state_is_overview() {
        assert_eq!(Router::default().current(), Route::Overview);
    }

    #[test]
    fn test_parse_hash() {
        assert_eq!(Route::from_hash(""), Some(Route::Overview));
        assert_eq!(Route::from_hash("#"), Some(Route::Overview));
        assert_eq!(Route::from_hash("#notes"), Some(Route::Notes));
        assert_eq!(Route::from_hash("analytics"), Some(Route::Analytics));
        assert_eq!(Route::from_hash("#settings"), None);
    }

    #[test]
    fn test_link_navigation_pushes() {
        let mut router = Router::default();
        let t = router.resolve("tasks", Trigger::Link).unwrap();
        assert_eq!(t.route, Route::Tasks);
        assert_eq!(t.history, HistoryUpdate::Push("#tasks".into()));
        assert_eq!(router.current(), Route::Tasks);

        let t = router.resolve("overview", Trigger::Link).unwrap();
        assert_eq!(t.history, HistoryUpdate::Push("#".into()));
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        let mut router = Router::default();
        router.resolve("projects", Trigger::Link);
        assert_eq!(router.resolve("settings", Trigger::Link), None);
        assert_eq!(router.current(), Route::Projects);
    }

    #[test]
    fn test_history_transitions_do_not_touch_history() {
        let mut router = Router::default();
        let t = router.resolve("notes", Trigger::History).unwrap();
        assert_eq!(t.history, HistoryUpdate::Untouched);
        assert_eq!(router.current(), Route::Notes);

        assert_eq!(router.resolve("#nowhere", Trigger::History), None);
        assert_eq!(router.current(), Route::Notes);
    }

    #[test]
    fn test_initial_load_replaces_and_falls_back() {
        let mut router = Router::default();
        let t = router.resolve("#analytics", Trigger::InitialLoad).unwrap();
        assert_eq!(t.history, HistoryUpdate::Replace("#analytics".into()));

        let t = router.resolve("#bogus", Trigger::InitialLoad).unwrap();
        assert_eq!(t.route, Route::Overview);
    }

    #[test]
    fn test_every_route_has_distinct_section() {
        let mut ids: Vec<_> = Route::ALL.iter().map(|r| r.section_id()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Route::ALL.len());
        for route in Route::ALL {
            assert_eq!(Route::parse(route.name()), Some(route));
        }
    }
}
