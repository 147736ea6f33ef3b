use dioxus::prelude::*;

/// Small square button wrapping an icon glyph
#[component]
pub fn IconButton(
    #[props(default)] transparent: bool,
    #[props(default)] disabled: bool,
    #[props(default)] title: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let background = if transparent {
        "bg-black/20"
    } else {
        "bg-white/10"
    };

    rsx! {
        button {
            class: "border border-white/10 rounded-md p-1.5 size-7 flex items-center justify-center disabled:opacity-50 {background}",
            title: "{title}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            {children}
        }
    }
}
