use shared::{
    abstract_trait::user::{
        repository::{command::DynUserCommandRepository, query::DynUserQueryRepository},
        service::{command::DynUserCommandService, query::DynUserQueryService},
    },
    config::ConnectionPool,
    repository::user::{command::UserCommandRepository, query::UserQueryRepository},
    service::user::{command::UserCommandService, query::UserQueryService},
    utils::Metrics,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserCommandDeps {
    pub service: DynUserCommandService,
}

impl UserCommandDeps {
    pub fn new(
        repo: DynUserCommandRepository,
        user_query: DynUserQueryRepository,
        metrics: Metrics,
    ) -> Self {
        let service =
            Arc::new(UserCommandService::new(user_query, repo, metrics)) as DynUserCommandService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct UserQueryDeps {
    pub service: DynUserQueryService,
}

impl UserQueryDeps {
    pub fn new(repo: DynUserQueryRepository, metrics: Metrics) -> Self {
        let service = Arc::new(UserQueryService::new(repo, metrics)) as DynUserQueryService;

        Self { service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub user_command: UserCommandDeps,
    pub user_query: UserQueryDeps,
}

impl std::fmt::Debug for DependenciesInject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DependenciesInject")
            .field("user_command", &"UserCommandService")
            .field("user_query", &"UserQueryService")
            .finish()
    }
}

impl DependenciesInject {
    pub fn new(db: ConnectionPool, metrics: &Metrics) -> Self {
        let query = Arc::new(UserQueryRepository::new(db.clone())) as DynUserQueryRepository;
        let command = Arc::new(UserCommandRepository::new(db)) as DynUserCommandRepository;

        Self::from_repositories(query, command, metrics)
    }

    /// Wires the services over any repository implementation.
    pub fn from_repositories(
        query: DynUserQueryRepository,
        command: DynUserCommandRepository,
        metrics: &Metrics,
    ) -> Self {
        let user_query = UserQueryDeps::new(query.clone(), metrics.clone());
        let user_command = UserCommandDeps::new(command, query, metrics.clone());

        Self {
            user_command,
            user_query,
        }
    }
}
