use crate::location::LocationStore;
use crate::ui::Route;
use dioxus::prelude::*;
use tracing::warn;

/// Location backed by the router's current route.
///
/// Writes go through `Navigator::replace`, so the history stack is left as is.
#[derive(Debug, Clone, PartialEq)]
pub struct RouterLocation {
    search: Option<String>,
    page: Option<String>,
}

impl RouterLocation {
    /// Snapshot of the route's query parameters; empty values count as absent
    pub fn new(search: String, page: String) -> Self {
        Self {
            search: Some(search).filter(|s| !s.is_empty()),
            page: Some(page).filter(|p| !p.is_empty()),
        }
    }

    fn route(&self) -> Route {
        Route::AttendeeListPage {
            search: self.search.clone().unwrap_or_default(),
            page: self.page.clone().unwrap_or_default(),
        }
    }
}

impl LocationStore for RouterLocation {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            "search" => self.search.clone(),
            "page" => self.page.clone(),
            _ => None,
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        match key {
            "search" => self.search = Some(value.to_string()),
            "page" => self.page = Some(value.to_string()),
            other => {
                warn!("Route has no query parameter '{}'", other);
                return;
            }
        }

        if navigator().replace(self.route()).is_some() {
            warn!("Failed to replace route with {}", self.route());
        }
    }
}
