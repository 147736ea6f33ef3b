use super::{
    footer::AttendeeListFooter, list::AttendeeTable, search_form::AttendeeSearchForm,
    status::AttendeeListStatus,
};
use crate::attendee_list::{AttendeeListController, PageControl};
use crate::ui::location::RouterLocation;
use crate::ui::AppContext;
use dioxus::core::Task;
use dioxus::prelude::*;
use tracing::debug;

/// Searchable, paginated attendee list. `search` and `page` come from the
/// route's query string and only seed the initial state.
#[component]
pub fn AttendeeListPage(search: String, page: String) -> Element {
    let app = use_context::<AppContext>();
    let event_id = app.config.event_id.clone();
    let mut list = use_signal(move || {
        AttendeeListController::mount(RouterLocation::new(search.clone(), page.clone()))
    });
    let request = use_memo(move || list.read().state().request());
    let mut reload = use_signal(|| 0u32);
    let mut in_flight = use_signal(|| None::<Task>);

    // Refetch whenever (page, search) changes; the previous request is cancelled
    use_effect(move || {
        let request = request();
        let attempt = reload();
        debug!("Fetching {:?} (attempt {})", request, attempt);

        if let Some(task) = in_flight.take() {
            task.cancel();
        }

        let ticket = list.write().begin_fetch();
        let client = app.client.clone();
        let task = spawn(async move {
            let result = client.fetch_page(&ticket.request).await;
            list.write().complete_fetch(&ticket, result);
        });
        in_flight.set(Some(task));
    });

    let view = list.read().state().clone();

    rsx! {
        div { class: "flex flex-col gap-4",
            AttendeeSearchForm {
                event_id,
                search: view.search.clone(),
                on_search: move |value: String| list.write().set_search_page(value),
            }
            AttendeeListStatus {
                loading: view.is_loading(),
                error: view.error().map(str::to_string),
                on_retry: move |_| *reload.write() += 1,
            }
            AttendeeTable { attendees: view.attendees.clone(),
                AttendeeListFooter {
                    summary: view.summary(),
                    page_label: view.page_label(),
                    enabled: PageControl::ALL.map(|control| view.is_enabled(control)),
                    on_navigate: move |control: PageControl| {
                        list.write().navigate(control);
                    },
                }
            }
        }
    }
}
