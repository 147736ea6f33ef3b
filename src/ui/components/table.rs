use dioxus::prelude::*;

#[component]
pub fn Table(children: Element) -> Element {
    rsx! {
        div { class: "border border-white/10 rounded-lg",
            table { class: "w-full", {children} }
        }
    }
}

#[component]
pub fn TableHeader(#[props(default)] width: Option<u32>, children: Element) -> Element {
    let style = width
        .map(|w| format!("width: {}px", w))
        .unwrap_or_default();

    rsx! {
        th { class: "py-3 px-4 text-sm font-semibold text-left", style: "{style}", {children} }
    }
}

#[component]
pub fn TableRow(children: Element) -> Element {
    rsx! {
        tr { class: "border-b border-white/10 hover:bg-white/5", {children} }
    }
}

#[component]
pub fn TableCell(
    #[props(default = 1)] colspan: u32,
    #[props(default)] class: String,
    children: Element,
) -> Element {
    rsx! {
        td { class: "py-3 px-4 text-sm text-zinc-300 {class}", colspan: "{colspan}", {children} }
    }
}
