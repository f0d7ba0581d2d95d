//! App Context

use std::sync::Arc;

use crate::{
    domain::{
        checkout::CheckoutService,
        products::{CatalogService, StoreCatalogService},
        sessions::{Session, SessionSync},
    },
    store::{DocumentStore, HttpDocumentStore, HttpStoreConfig},
};

/// Dependency-injected service container for one storefront process.
///
/// Built once at startup; per-user state lives in [`Session`] values handed
/// out by [`start_session`](Self::start_session), never in the context
/// itself.
#[derive(Clone)]
pub struct AppContext {
    pub store: Arc<dyn DocumentStore>,
    pub catalog: Arc<dyn CatalogService>,
    pub sync: SessionSync,
    pub checkout: CheckoutService,
}

impl std::fmt::Debug for AppContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppContext").finish_non_exhaustive()
    }
}

impl AppContext {
    /// Build application context over any document store backend.
    #[must_use]
    pub fn with_store(store: Arc<dyn DocumentStore>) -> Self {
        let sync = SessionSync::new(Arc::clone(&store));

        Self {
            catalog: Arc::new(StoreCatalogService::new(Arc::clone(&store))),
            checkout: CheckoutService::new(sync.clone()),
            sync,
            store,
        }
    }

    /// Build application context over the hosted document store.
    #[must_use]
    pub fn from_http_config(config: HttpStoreConfig) -> Self {
        Self::with_store(Arc::new(HttpDocumentStore::new(config)))
    }

    /// A fresh anonymous session.
    #[must_use]
    pub fn start_session(&self) -> Session {
        Session::new()
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{store::MemoryDocumentStore, test::helpers::whiskey};

    use super::*;

    #[test]
    fn sessions_from_one_context_are_independent() -> TestResult {
        let ctx = AppContext::with_store(Arc::new(MemoryDocumentStore::new()));

        let mut first = ctx.start_session();
        let second = ctx.start_session();

        first
            .cart
            .add_item(whiskey("w1", "Glenlivet 12", Decimal::new(4599, 2)), 1)?;

        assert_eq!(first.cart.len(), 1);
        assert!(
            second.cart.is_empty(),
            "sessions must not share cart state"
        );

        Ok(())
    }
}
