//! Application state management

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::Config;
use crate::library::{Section, SectionRegistry};
use crate::pdf::{DocumentRenderer, RenderCapability};
use crate::storage::DocumentStore;
use crate::view::{Msg, ViewState};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    store: DocumentStore,
    capability: RenderCapability,
    renderer: Option<Arc<dyn DocumentRenderer>>,
    view: Mutex<ViewState>,
}

impl AppState {
    /// Create the application state from configuration.
    ///
    /// Section folders are created here, so every section exists on disk
    /// once the state is built.
    pub fn new(config: Config) -> std::io::Result<Self> {
        let capability = RenderCapability::resolve(config.render);
        let renderer = capability.renderer();
        Self::with_renderer(config, capability, renderer)
    }

    /// Create the application state with an explicit renderer
    pub fn with_renderer(
        config: Config,
        capability: RenderCapability,
        renderer: Option<Arc<dyn DocumentRenderer>>,
    ) -> std::io::Result<Self> {
        let registry = SectionRegistry::new(&config.library.base_dir, &config.library.sections);
        registry.ensure_folders()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store: DocumentStore::new(registry),
                capability,
                renderer,
                view: Mutex::new(ViewState::default()),
            }),
        })
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the document store
    pub fn store(&self) -> &DocumentStore {
        &self.inner.store
    }

    /// Get the section registry
    pub fn registry(&self) -> &SectionRegistry {
        self.inner.store.registry()
    }

    /// Look up a section by label
    pub fn section(&self, label: &str) -> Option<&Section> {
        self.registry().get(label)
    }

    pub fn capability(&self) -> RenderCapability {
        self.inner.capability
    }

    /// Renderer, present only when the capability is available
    pub fn renderer(&self) -> Option<&Arc<dyn DocumentRenderer>> {
        self.inner.renderer.as_ref()
    }

    /// Snapshot of the current view state
    pub fn view(&self) -> ViewState {
        self.inner.view.lock().clone()
    }

    /// Feed a message through the view update and store the result
    pub fn dispatch(&self, msg: Msg) -> ViewState {
        let mut view = self.inner.view.lock();
        let next = view.clone().update(msg);
        *view = next.clone();
        next
    }

    /// Snapshot the view state for rendering, consuming its pending flash
    pub fn view_for_render(&self) -> ViewState {
        let mut view = self.inner.view.lock();
        let snapshot = view.clone();
        view.take_flash();
        snapshot
    }
}
