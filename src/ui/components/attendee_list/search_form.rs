use dioxus::prelude::*;

/// Title and search box; every keystroke is forwarded
#[component]
pub fn AttendeeSearchForm(
    event_id: String,
    search: String,
    on_search: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "flex gap-3 items-center",
            h1 { class: "text-2xl font-bold", title: "Evento {event_id}", "Participantes" }
            div { class: "px-3 py-1.5 w-72 border border-white/10 rounded-lg flex items-center gap-3",
                span { class: "size-4 text-emerald-300", "🔍" }
                input {
                    class: "bg-transparent flex-1 outline-none border-0 p-0 text-sm",
                    placeholder: "Buscar participante...",
                    value: "{search}",
                    oninput: move |event: FormEvent| on_search.call(event.value()),
                }
            }
        }
    }
}
