use std::sync::Arc;

use crate::store::Store;

mod transactions;
mod wallets;

/// Entry point used by the transport layer.
///
/// Every operation takes the caller identity explicitly; the engine never
/// looks it up from ambient state.
#[derive(Debug, Clone)]
pub struct Engine {
    store: Arc<Store>,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    /// Direct access to the underlying records.
    pub fn store(&self) -> &Store {
        &self.store
    }
}

/// The builder for `Engine`
#[derive(Default)]
pub struct EngineBuilder {
    store: Option<Arc<Store>>,
}

impl EngineBuilder {
    /// Share an existing store instead of starting empty.
    pub fn store(mut self, store: Arc<Store>) -> EngineBuilder {
        self.store = Some(store);
        self
    }

    /// Construct `Engine`
    pub fn build(self) -> Engine {
        Engine {
            store: self.store.unwrap_or_default(),
        }
    }
}
