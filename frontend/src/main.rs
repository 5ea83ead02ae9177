use dioxus::prelude::*;
use futures::StreamExt;

mod api;
mod components;
mod views;

use api::{AppStore, GlooBackend, API_BASE};
use views::{Layout, Page};

/// Every path lands on [`Page`], which resolves it against the core route
/// table so the browser and the CLI agree on what exists.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/:..segments")]
        Page { segments: Vec<String> },
}

/// Bumped whenever the store commits; reading it subscribes a component.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Revision(pub u64);

const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let store = use_context_provider(|| AppStore::new(GlooBackend::new(API_BASE)));
    let revision = use_context_provider(|| Signal::new(Revision::default()));

    let changes = use_coroutine(move |mut rx: UnboundedReceiver<()>| async move {
        let mut revision = revision;
        while rx.next().await.is_some() {
            revision.write().0 += 1;
        }
    });

    use_hook(move || {
        let tx = changes.tx();
        store.subscribe(move || {
            let _ = tx.unbounded_send(());
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        Router::<Route> {}
    }
}
