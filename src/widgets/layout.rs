use dioxus::prelude::*;

#[derive(Props)]
pub struct StackProps<'a> {
    #[props(optional)]
    pub class: Option<&'a str>,
    pub children: Element<'a>,
}

fn stack<'a>(cx: Scope<'a, StackProps<'a>>, direction: &'static str) -> Element<'a> {
    let custom_cls = cx.props.class.unwrap_or_default();
    cx.render(rsx!(
        div { class: "{direction} {custom_cls}", &cx.props.children }
    ))
}

/// Children top to bottom
pub fn VStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    stack(cx, "vstack")
}

/// Children left to right
pub fn HStack<'a>(cx: Scope<'a, StackProps<'a>>) -> Element<'a> {
    stack(cx, "hstack")
}
