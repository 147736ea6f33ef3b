use super::state::{FetchStatus, PageControl, ViewState, PAGE_PARAM, SEARCH_PARAM};
use crate::attendees::{AttendeeError, AttendeePage, PageRequest};
use crate::location::LocationStore;
use tracing::{debug, warn};

/// Identifies one issued fetch; only the latest ticket's result is applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    pub generation: u64,
    pub request: PageRequest,
}

/// Drives the attendee list: mirrors search and page into the location and
/// applies fetch results in issue order.
#[derive(Debug, Clone, PartialEq)]
pub struct AttendeeListController<L: LocationStore> {
    location: L,
    state: ViewState,
    generation: u64,
}

impl<L: LocationStore> AttendeeListController<L> {
    /// Seed the view from the location at mount time
    pub fn mount(location: L) -> Self {
        let state = ViewState::from_location(&location);
        debug!(
            "Attendee list mounted: search='{}', page={}",
            state.search, state.page
        );
        Self {
            location,
            state,
            generation: 0,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn location(&self) -> &L {
        &self.location
    }

    /// New search text from the input; a fresh search starts at page 1
    pub fn set_search_page(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.location.set(SEARCH_PARAM, &search);
        self.state.search = search;
        self.set_current_page(1);
    }

    pub fn set_current_page(&mut self, page: u32) {
        self.location.set(PAGE_PARAM, &page.to_string());
        self.state.page = page;
    }

    /// Apply a pagination control. Returns false when the control is disabled.
    pub fn navigate(&mut self, control: PageControl) -> bool {
        if !self.state.is_enabled(control) {
            debug!("Ignoring disabled control {:?} on page {}", control, self.state.page);
            return false;
        }
        let page = self.state.target_page(control);
        self.set_current_page(page);
        true
    }

    pub fn go_to_first_page(&mut self) -> bool {
        self.navigate(PageControl::First)
    }

    pub fn go_to_previous_page(&mut self) -> bool {
        self.navigate(PageControl::Previous)
    }

    pub fn go_to_next_page(&mut self) -> bool {
        self.navigate(PageControl::Next)
    }

    pub fn go_to_last_page(&mut self) -> bool {
        self.navigate(PageControl::Last)
    }

    /// Start a fetch for the current (page, search); supersedes earlier tickets
    pub fn begin_fetch(&mut self) -> FetchTicket {
        self.generation += 1;
        self.state.status = FetchStatus::Loading;
        FetchTicket {
            generation: self.generation,
            request: self.state.request(),
        }
    }

    /// Apply a fetch result. Returns false when the ticket was superseded.
    pub fn complete_fetch(
        &mut self,
        ticket: &FetchTicket,
        result: Result<AttendeePage, AttendeeError>,
    ) -> bool {
        if ticket.generation != self.generation {
            debug!(
                "Discarding stale response (generation {}, current {})",
                ticket.generation, self.generation
            );
            return false;
        }

        match result {
            Ok(page) => {
                self.state.attendees = page.attendees;
                self.state.total = page.total;
                self.state.status = FetchStatus::Idle;
            }
            Err(e) => {
                warn!("Failed to load attendees: {}", e);
                // Keep the previous page on screen
                self.state.status = FetchStatus::Failed(failure_message(&e));
            }
        }
        true
    }
}

fn failure_message(error: &AttendeeError) -> String {
    match error {
        AttendeeError::EventNotFound => "Evento não encontrado".to_string(),
        e if e.is_timeout() => "O servidor demorou demais para responder".to_string(),
        e => format!("Falha ao carregar participantes: {}", e),
    }
}
