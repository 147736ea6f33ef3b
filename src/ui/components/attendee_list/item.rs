use crate::attendees::Attendee;
use crate::relative_time::{check_in_label, relative_time};
use crate::ui::components::{IconButton, TableCell, TableRow};
use chrono::{DateTime, Utc};
use dioxus::prelude::*;

#[derive(Props, PartialEq, Clone)]
pub struct AttendeeItemProps {
    pub attendee: Attendee,
    /// Reference instant for the relative dates
    pub now: DateTime<Utc>,
}

#[component]
pub fn AttendeeItem(props: AttendeeItemProps) -> Element {
    let attendee = &props.attendee;
    let registered = relative_time(props.now, attendee.created_at);
    let checked_in = check_in_label(props.now, attendee.checked_in_at);

    rsx! {
        TableRow {
            TableCell {
                input { r#type: "checkbox", class: "size-4 bg-black/20 rounded border border-white/10" }
            }
            TableCell { "{attendee.id}" }
            TableCell {
                div { class: "flex flex-col gap-1",
                    span { class: "font-semibold text-white", "{attendee.name}" }
                    span { "{attendee.email}" }
                }
            }
            TableCell { "{registered}" }
            if attendee.is_checked_in() {
                TableCell { "{checked_in}" }
            } else {
                TableCell { class: "text-zinc-400", "{checked_in}" }
            }
            TableCell {
                IconButton { transparent: true, title: "Mais opções", "⋯" }
            }
        }
    }
}
