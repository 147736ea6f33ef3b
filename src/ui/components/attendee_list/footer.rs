use crate::attendee_list::PageControl;
use crate::ui::components::{IconButton, TableCell};
use dioxus::prelude::*;

fn glyph(control: PageControl) -> &'static str {
    match control {
        PageControl::First => "«",
        PageControl::Previous => "‹",
        PageControl::Next => "›",
        PageControl::Last => "»",
    }
}

/// "Mostrando N de M itens", "Página X de Y" and the pagination controls.
/// `enabled` follows the order of `PageControl::ALL`.
#[component]
pub fn AttendeeListFooter(
    summary: String,
    page_label: String,
    enabled: [bool; 4],
    on_navigate: EventHandler<PageControl>,
) -> Element {
    rsx! {
        tr {
            TableCell { colspan: 3, "{summary}" }
            TableCell { colspan: 3, class: "text-right",
                div { class: "inline-flex items-center gap-8",
                    "{page_label}"
                    div { class: "flex gap-1.5",
                        for (control, is_enabled) in PageControl::ALL.into_iter().zip(enabled) {
                            IconButton {
                                key: "{control:?}",
                                title: control.label().to_string(),
                                disabled: !is_enabled,
                                onclick: move |_| on_navigate.call(control),
                                {glyph(control)}
                            }
                        }
                    }
                }
            }
        }
    }
}
