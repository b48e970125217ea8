#![allow(non_snake_case)]

use dioxus::prelude::*;

use crate::environment::types::{PostRecord, StoreAction};
use crate::environment::{AppStore, Session, Store};
use crate::{loc, widgets::*};

/// The currently loaded page of posts
#[inline_props]
pub fn PostListView<'a>(cx: Scope<'a>, store: &'a AppStore) -> Element<'a> {
    let posts = store.posts();
    let user_id = store.user().map(|u| u.id);
    let (current, total) = store.pagination();
    let no_previous = current <= 1;
    let no_next = current >= total;

    cx.render(rsx!(
        VStack { class: "post-list gap-4",
            { posts.is_empty().then(|| rsx!(p { class: "card", loc!("No posts yet") })) },
            posts.into_iter().map(|post| {
                let can_edit = user_id.as_deref() == Some(post.creator.as_str());
                let id = post.id.clone();
                cx.render(rsx!(PostItem {
                    key: "{id}",
                    store: store,
                    post: post,
                    can_edit: can_edit
                }))
            }),
            HStack { class: "justify-content-between align-items-center",
                button {
                    class: "button secondary",
                    r#type: "button",
                    disabled: "{no_previous}",
                    onclick: move |_| store.dispatch(StoreAction::GetPosts(current.saturating_sub(1))),
                    loc!("Previous")
                }
                span { "{current} / {total}" }
                button {
                    class: "button secondary",
                    r#type: "button",
                    disabled: "{no_next}",
                    onclick: move |_| store.dispatch(StoreAction::GetPosts(current + 1)),
                    loc!("Next")
                }
            }
        }
    ))
}

#[inline_props]
fn PostItem<'a>(cx: Scope<'a>, store: &'a AppStore, post: PostRecord, can_edit: bool) -> Element<'a> {
    let tags = post
        .tags
        .iter()
        .map(|t| format!("#{t}"))
        .collect::<Vec<_>>()
        .join(" ");
    let image = &post.selected_file;
    let (title, message) = (&post.title, &post.message);
    let byline = format!("{} · {}", post.name, post.created_at);
    cx.render(rsx!(
        div { class: "card post",
            VStack { class: "gap-2",
                { (!image.is_empty()).then(|| rsx!(img { src: "{image}" })) },
                HStack { class: "justify-content-between align-items-center",
                    h3 { "{title}" }
                    { can_edit.then(|| rsx!(button {
                        class: "button secondary",
                        r#type: "button",
                        onclick: move |_| store.dispatch(StoreAction::SetEditPost(Some(post.clone()))),
                        loc!("Edit")
                    }))}
                }
                p { "{message}" }
                span { class: "label-tertiary", "{tags}" }
                span { class: "label-tertiary", "{byline}" }
            }
        }
    ))
}
