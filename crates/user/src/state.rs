use crate::di::DependenciesInject;
use prometheus_client::registry::Registry;
use shared::{
    abstract_trait::user::repository::{
        command::DynUserCommandRepository, query::DynUserQueryRepository,
    },
    config::ConnectionPool,
    utils::Metrics,
};
use std::{fmt, sync::Arc};

#[derive(Clone)]
pub struct AppState {
    pub di_container: Arc<DependenciesInject>,
    pub registry: Arc<Registry>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("deps", &self.di_container)
            .field("registry", &"Registry")
            .finish()
    }
}

impl AppState {
    pub fn new(pool: ConnectionPool) -> Self {
        let (metrics, registry) = Self::metrics();

        Self {
            di_container: Arc::new(DependenciesInject::new(pool, &metrics)),
            registry: Arc::new(registry),
        }
    }

    pub fn with_repositories(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
    ) -> Self {
        let (metrics, registry) = Self::metrics();

        Self {
            di_container: Arc::new(DependenciesInject::from_repositories(
                query, command, &metrics,
            )),
            registry: Arc::new(registry),
        }
    }

    fn metrics() -> (Metrics, Registry) {
        let metrics = Metrics::new();
        let mut registry = Registry::default();
        metrics.register(&mut registry);
        (metrics, registry)
    }
}
