use dioxus::prelude::*;

use crate::environment::Toasts;

#[inline_props]
pub fn Spinner(cx: Scope, class: Option<&'static str>) -> Element {
    let c = class.unwrap_or_default();
    cx.render(rsx!( div { class: "loader {c}" } ))
}

/// The pending notifications, top right. Click one to dismiss it.
#[inline_props]
pub fn ToastsView<'a>(cx: Scope<'a>, toasts: &'a Toasts) -> Element<'a> {
    let current = toasts.current();
    if current.is_empty() {
        return cx.render(rsx!(div {}));
    }
    cx.render(rsx!(
        div { class: "toasts vstack gap-2",
            current.into_iter().map(|toast| {
                let kind: &'static str = toast.kind.into();
                let id = toast.id;
                let message = toast.message;
                cx.render(rsx!(div {
                    key: "{id}",
                    class: "toast {kind}",
                    onclick: move |_| {
                        toasts.dismiss(id);
                        cx.needs_update();
                    },
                    "{message}"
                }))
            })
        }
    ))
}
