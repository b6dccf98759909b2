//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::ApiClient;
use crate::config::ClientConfig;
use crate::loaders;
use crate::render::RenderContext;
use crate::router::{apply_history, Route, Trigger};
use crate::store::{store_close_modal, store_open_modal, AppStateStoreFields, AppStore, ModalKind};

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    api: StoredValue<ApiClient>,
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(store: AppStore, config: ClientConfig) -> Self {
        let api = ApiClient::new(config.api_base.clone());
        Self {
            store,
            api: StoredValue::new(api),
            config: StoredValue::new(config),
        }
    }

    pub fn api(&self) -> ApiClient {
        self.api.get_value()
    }

    pub fn config(&self) -> ClientConfig {
        self.config.get_value()
    }

    /// Clock and preview budgets for a render pass
    pub fn render_context(&self) -> RenderContext {
        self.config.with_value(|config| RenderContext {
            now: chrono::Utc::now(),
            note_preview_chars: config.note_preview_chars,
            task_preview_chars: config.task_preview_chars,
        })
    }

    pub fn current_route(&self) -> Route {
        self.store.router().with(|r| r.current())
    }

    /// Navigate from a link, quick action or any other in-page trigger.
    pub fn navigate(&self, name: &str) {
        self.resolve(name, Trigger::Link);
    }

    /// Run one router transition: record the route, update history, start the loader.
    /// Unknown names change nothing.
    pub fn resolve(&self, name: &str, trigger: Trigger) {
        let transition = self.store.router().write().resolve(name, trigger);
        let Some(transition) = transition else {
            tracing::debug!(route = name, "ignoring unknown route");
            return;
        };
        tracing::info!(route = transition.route.name(), ?trigger, "navigating");
        apply_history(transition.route, &transition.history);
        loaders::spawn_route_loader(*self, transition.route);
    }

    pub fn open_modal(&self, kind: ModalKind) -> u32 {
        store_open_modal(&self.store, kind)
    }

    pub fn close_modal(&self, modal_id: u32) {
        store_close_modal(&self.store, modal_id);
    }
}

/// Get the app context, provided by the root component
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
