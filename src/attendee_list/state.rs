use crate::attendees::models::{Attendee, PageRequest, PAGE_SIZE};
use crate::location::LocationStore;
use tracing::warn;

pub const SEARCH_PARAM: &str = "search";
pub const PAGE_PARAM: &str = "page";

/// Outcome of the most recent fetch
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Failed(String),
}

/// The four pagination controls in the list footer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageControl {
    First,
    Previous,
    Next,
    Last,
}

impl PageControl {
    pub const ALL: [PageControl; 4] = [
        PageControl::First,
        PageControl::Previous,
        PageControl::Next,
        PageControl::Last,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PageControl::First => "Primeira página",
            PageControl::Previous => "Página anterior",
            PageControl::Next => "Próxima página",
            PageControl::Last => "Última página",
        }
    }
}

/// Search, pagination and the currently displayed page of attendees
#[derive(Debug, Clone, PartialEq)]
pub struct ViewState {
    pub search: String,
    /// One-based, not checked against `total_pages`
    pub page: u32,
    pub total: u64,
    pub attendees: Vec<Attendee>,
    pub status: FetchStatus,
}

impl Default for ViewState {
    fn default() -> Self {
        Self {
            search: String::new(),
            page: 1,
            total: 0,
            attendees: Vec::new(),
            status: FetchStatus::Idle,
        }
    }
}

impl ViewState {
    /// Seed search and page from the location's query string
    pub fn from_location(location: &impl LocationStore) -> Self {
        Self {
            search: location.get(SEARCH_PARAM).unwrap_or_default(),
            page: location
                .get(PAGE_PARAM)
                .map(|raw| parse_page(&raw))
                .unwrap_or(1),
            ..Self::default()
        }
    }

    pub fn total_pages(&self) -> u32 {
        u32::try_from(self.total.div_ceil(PAGE_SIZE)).unwrap_or(u32::MAX)
    }

    /// Whether a control may be used from the current page.
    /// Last stays enabled past the end so a stale page can jump back.
    pub fn is_enabled(&self, control: PageControl) -> bool {
        match control {
            PageControl::First | PageControl::Previous => self.page > 1,
            PageControl::Next => self.page < self.total_pages(),
            PageControl::Last => self.page != self.total_pages().max(1),
        }
    }

    /// Page a control leads to
    pub fn target_page(&self, control: PageControl) -> u32 {
        match control {
            PageControl::First => 1,
            PageControl::Previous => self.page.saturating_sub(1).max(1),
            PageControl::Next => self.page.saturating_add(1),
            PageControl::Last => self.total_pages().max(1),
        }
    }

    pub fn request(&self) -> PageRequest {
        PageRequest::new(self.page, &self.search)
    }

    /// "Mostrando {shown} de {total} itens"
    pub fn summary(&self) -> String {
        format!("Mostrando {} de {} itens", self.attendees.len(), self.total)
    }

    /// "Página {page} de {total_pages}"
    pub fn page_label(&self) -> String {
        format!("Página {} de {}", self.page, self.total_pages())
    }

    pub fn is_loading(&self) -> bool {
        self.status == FetchStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            FetchStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Non-numeric, zero and negative values fall back to the first page.
pub fn parse_page(raw: &str) -> u32 {
    match raw.trim().parse::<u32>() {
        Ok(page) if page >= 1 => page,
        _ => {
            warn!("Ignoring invalid page parameter '{}', using page 1", raw);
            1
        }
    }
}
