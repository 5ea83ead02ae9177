use dioxus::prelude::*;
use stockroom_core::Resource;

use crate::api::AppStore;
use crate::Revision;

mod layout;
pub use layout::Layout;

mod page;
pub use page::Page;

mod dashboard;
mod form;
mod lists;

/// The shared store; the calling component re-renders on every commit.
pub fn use_store() -> AppStore {
    let store = use_context::<AppStore>();
    let revision = use_context::<Signal<Revision>>();
    let _ = revision.read();
    store
}

/// Fetch `resource` once when the calling component mounts.
pub fn use_fetch(resource: Resource) {
    let store = use_context::<AppStore>();
    use_hook(move || {
        spawn(async move {
            store.fetch(resource).await;
        });
    });
}
