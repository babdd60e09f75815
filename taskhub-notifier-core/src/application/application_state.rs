use super::ApplicationEnv;
use crate::{
    repository::UsersRepositoryImpl,
    service::{NotificationsService, NotificationsServiceImpl},
};
use mongodb::{options::ClientOptions, Client};
use std::sync::Arc;

#[derive(Clone)]
pub struct ApplicationState {
    pub notifications_service: Arc<dyn NotificationsService>,
}

pub struct ApplicationStateToClose {
    pub db_client: Client,
}

pub async fn create_state(
    env: &ApplicationEnv,
) -> anyhow::Result<(ApplicationState, ApplicationStateToClose)> {
    tracing::info!("connecting to database");
    let db_client_options = ClientOptions::parse(&env.db_connection_string).await?;
    let db_client = Client::with_options(db_client_options)?;
    let db = db_client.database(&env.db_name);

    tracing::info!("creating repositories");
    let users_repository = Arc::new(UsersRepositoryImpl::new(db).await?);

    tracing::info!("creating services");
    let notifications_service = Arc::new(NotificationsServiceImpl::new(users_repository));

    Ok((
        ApplicationState {
            notifications_service,
        },
        ApplicationStateToClose { db_client },
    ))
}
