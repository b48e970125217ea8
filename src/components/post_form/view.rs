#![allow(non_snake_case)]

use crate::{loc, widgets::*};

use dioxus::prelude::*;

use super::{Field, PostFormAction, ViewStore};

#[inline_props]
pub fn PostFormView<'a>(cx: Scope<'a>, store: ViewStore<'a>, title_max_length: usize) -> Element<'a> {
    if store.loading {
        return cx.render(rsx!(
            div { class: "card loader-card", Spinner {} }
        ));
    }

    let disabled = store.is_disabled();
    let is_editing = store.is_editing();
    let heading = if is_editing {
        loc!("Editing Log")
    } else {
        loc!("Creating a Log")
    };
    let submit_title = if is_editing { loc!("Edit") } else { loc!("Submit") };
    let title = &store.draft.title;
    let message = &store.draft.message;
    let incomplete = disabled || title.trim().is_empty() || message.trim().is_empty();

    cx.render(rsx!(
        div { class: "card",
            p { class: "form-title", "{heading}" }
            VStack { class: "post-form gap-4",
                input {
                    r#type: "text",
                    name: "title",
                    required: "true",
                    disabled: "{disabled}",
                    maxlength: "{title_max_length}",
                    placeholder: "Title",
                    value: "{title}",
                    oninput: move |evt| {
                        store.send(PostFormAction::UpdateField(Field::Title, evt.value.clone()));
                    },
                }
                textarea {
                    name: "message",
                    required: "true",
                    disabled: "{disabled}",
                    placeholder: "Message",
                    value: "{message}",
                    oninput: move |evt| {
                        store.send(PostFormAction::UpdateField(Field::Message, evt.value.clone()));
                    },
                }
                TagsView { store: store, disabled: disabled }
                ImageView { store: store, disabled: disabled }
                VStack { class: "gap-2",
                    button {
                        class: "button primary",
                        r#type: "button",
                        disabled: "{incomplete}",
                        onclick: move |_| store.send(PostFormAction::Submit),
                        "{submit_title}"
                    }
                    {
                    if is_editing {
                        rsx!(button {
                            class: "button secondary",
                            r#type: "button",
                            disabled: "{disabled}",
                            onclick: move |_| store.send(PostFormAction::Cancel),
                            loc!("Cancel")
                        })
                    } else {
                        rsx!(button {
                            class: "button secondary",
                            r#type: "button",
                            disabled: "{disabled}",
                            onclick: move |_| store.send(PostFormAction::Clear),
                            loc!("Clear")
                        })
                    }
                }
                }
            }
        }
    ))
}

#[inline_props]
fn TagsView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, disabled: bool) -> Element<'a> {
    let pending = &store.tags.pending;
    cx.render(rsx!(
        VStack { class: "gap-2",
            HStack { class: "tags gap-2",
                store.tags.tags.iter().enumerate().map(|(index, tag)| {
                cx.render(rsx!(TagView {
                    key: "{tag}",
                    store: store,
                    index: index,
                    tag: tag.clone(),
                    disabled: *disabled
                }))
            })
            }
            HStack { class: "gap-2",
                input {
                    class: "grow",
                    r#type: "text",
                    placeholder: "Tags",
                    disabled: "{disabled}",
                    value: "{pending}",
                    oninput: move |evt| {
                        store.send(PostFormAction::UpdateTagText(evt.value.clone()));
                    },
                }
                button {
                    class: "button secondary",
                    r#type: "button",
                    disabled: "{disabled}",
                    onclick: move |_| store.send(PostFormAction::AddTag),
                    loc!("Add")
                }
            }
        }
    ))
}

#[inline_props]
fn TagView<'a>(
    cx: Scope<'a>,
    store: &'a ViewStore<'a>,
    index: usize,
    tag: String,
    disabled: bool,
) -> Element<'a> {
    cx.render(rsx!(
        span { class: "tag",
            "#{tag}"
            button {
                r#type: "button",
                title: "Remove",
                disabled: "{disabled}",
                onclick: move |_| store.send(PostFormAction::RemoveTag(*index)),
                "×"
            }
        }
    ))
}

#[inline_props]
fn ImageView<'a>(cx: Scope<'a>, store: &'a ViewStore<'a>, disabled: bool) -> Element<'a> {
    let image = &store.draft.image;
    let name = match (&store.image_name, image.is_empty()) {
        (Some(name), _) => name.clone(),
        (None, true) => loc!("No image").to_string(),
        (None, false) => loc!("Image attached").to_string(),
    };
    cx.render(rsx!(
        HStack { class: "gap-2 align-items-center",
            button {
                class: "button secondary",
                r#type: "button",
                disabled: "{disabled}",
                onclick: move |_| store.send(PostFormAction::FileDialog),
                loc!("Choose Image")
            }
            span { class: "image-name grow", "{name}" }
            { (!image.is_empty()).then(|| rsx!(img {
                style: "object-fit: cover; width: 48px; height: 48px",
                src: "{image}"
            }))}
        }
    ))
}
