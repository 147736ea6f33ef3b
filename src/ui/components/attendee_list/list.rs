use super::item::AttendeeItem;
use crate::attendees::Attendee;
use crate::ui::components::{Table, TableHeader};
use chrono::Utc;
use dioxus::prelude::*;

/// Attendee table; the footer is passed as children
#[component]
pub fn AttendeeTable(attendees: Vec<Attendee>, children: Element) -> Element {
    let now = Utc::now();

    rsx! {
        Table {
            thead {
                tr { class: "border-b border-white/10",
                    TableHeader { width: 48,
                        input { r#type: "checkbox", class: "size-4 bg-black/20 rounded border border-white/10" }
                    }
                    TableHeader { "Código" }
                    TableHeader { "Participante" }
                    TableHeader { "Data de inscrição" }
                    TableHeader { "Data do check-in" }
                    TableHeader { width: 64, "" }
                }
            }
            tbody {
                for attendee in attendees {
                    AttendeeItem { key: "{attendee.id}", attendee: attendee.clone(), now: now }
                }
            }
            tfoot { {children} }
        }
    }
}
