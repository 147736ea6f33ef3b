use dioxus::prelude::*;

#[component]
pub fn AttendeeListStatus(
    loading: bool,
    #[props(!optional)] error: Option<String>,
    on_retry: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        if let Some(error) = error {
            div { class: "flex items-center gap-3 bg-red-900 border border-white/10 text-red-100 px-4 py-3 rounded",
                span { class: "flex-1", "{error}" }
                button {
                    class: "border border-white/10 rounded-md px-3 py-1.5 text-sm",
                    disabled: loading,
                    onclick: move |event| on_retry.call(event),
                    "Tentar novamente"
                }
            }
        } else if loading {
            p { class: "text-sm text-zinc-400", "Carregando..." }
        }
    }
}
