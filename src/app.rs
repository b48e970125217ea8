#![allow(non_snake_case)]

use std::sync::Arc;

use chrono::{Duration, Utc};
use dioxus::prelude::*;
use dioxus_desktop::{Config, LogicalSize, WindowBuilder};

use crate::components::post_form::{PostFormAction, PostFormView, State, ViewStore};
use crate::components::post_list::PostListView;
use crate::environment::store::Subscriber;
use crate::environment::types::StoreAction;
use crate::environment::{AppStore, Environment, FormConfig, Router, Store, Toasts};
use crate::style::STYLE;
use crate::widgets::ToastsView;

pub fn run() {
    use env_logger::Env;
    use std::io::Write;
    env_logger::Builder::from_env(Env::default().default_filter_or("debug"))
        .format(|buf, record| {
            writeln!(
                buf,
                "{}:{} {} [{}] - {}",
                record.file().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stdout)
        .init();

    let style = STYLE;
    let config = Config::new()
        .with_custom_head(format!(
            r#"
        <title>Logbook</title>
        <style>{style}</style>
        "#
        ))
        .with_window(default_window());

    dioxus_desktop::launch_with_props(RootApp, RootAppProps {}, config);
}

fn default_window() -> WindowBuilder {
    WindowBuilder::new()
        .with_title("Logbook")
        .with_inner_size(LogicalSize::new(1024., 760.))
}

pub struct RootAppProps {}

pub fn RootApp(cx: Scope<'_, RootAppProps>) -> Element<'_> {
    log::trace!("rerender root-app");
    let config = use_state(cx, FormConfig::load);
    let store = use_state(cx, || {
        let store = AppStore::new(config.page_size);
        if let Some(session) = config.session.as_ref() {
            let expires = Utc::now() + Duration::minutes(session.ttl_minutes);
            store.sign_in(session.user(), expires);
        }
        store.dispatch(StoreAction::GetPosts(config.refresh_page));
        store
    });
    let toasts = use_state(cx, Toasts::default);
    let router = use_state(cx, || Router::new(config.listing_path.clone()));
    let environment_state = use_state(cx, || {
        Environment::new(
            store.get().clone(),
            toasts.get().clone(),
            router.get().clone(),
            config.get().clone(),
        )
    });

    let updater = cx.schedule_update();
    let (sender, receiver) = cx.use_hook(flume::unbounded);

    cx.use_hook(|| {
        let moved_sender = sender.clone();
        let moved_updater = updater.clone();
        let forward: Subscriber = Arc::new(move |event| {
            if let Err(e) = moved_sender.send(PostFormAction::AppEvent(event)) {
                log::error!("Could not send msg: {e:?}");
            }
            moved_updater();
        });
        store.subscribe(forward.clone());
        router.set_subscriber(forward);

        let toast_updater = updater.clone();
        toasts.set_listener(Arc::new(move || toast_updater()));
    });

    let view_store: ViewStore =
        navicula::root(cx, &[receiver.clone()], environment_state.get(), State::default);

    cx.render(rsx!(
        div { class: "home",
            PostListView { store: store.get() }
            PostFormView {
                store: view_store,
                title_max_length: config.title_max_length
            }
        }
        ToastsView { toasts: toasts.get() }
    ))
}
