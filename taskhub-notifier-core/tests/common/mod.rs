#![allow(dead_code)]

use axum::{
    async_trait,
    body::Body,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method, Request, Response, StatusCode,
    },
    Router,
};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header};
use serde_json::{json, Value};
use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};
use taskhub_notifier_core::{
    application::{create_application, ApplicationMiddleware, ApplicationState},
    auth::JwtAuthorizationValidator,
    repository::{Error, Notification, UsersRepository},
    service::NotificationsServiceImpl,
};
use tower::ServiceExt;
use tower_http::{
    limit::RequestBodyLimitLayer, trace::TraceLayer, validate_request::ValidateRequestHeaderLayer,
};
use uuid::Uuid;

const JWT_KEY: &[u8] = b"test key";

pub fn create_jwt(user_id: Uuid) -> String {
    // 31.12.9999
    let claims = json!({
        "sub": user_id,
        "exp": 253402210800_i64,
    });

    jsonwebtoken::encode(&Header::default(), &claims, &EncodingKey::from_secret(JWT_KEY)).unwrap()
}

///
/// In memory stand-in for the users collection. Mirrors the repository's
/// matched-document semantics so service and routing behave exactly as
/// they would against the database.
///
#[derive(Default)]
pub struct InMemoryUsersRepository {
    users: Mutex<HashMap<Uuid, Vec<Notification>>>,
}

impl InMemoryUsersRepository {
    pub fn insert_user(&self, user_id: Uuid) {
        self.users.lock().unwrap().insert(user_id, Vec::new());
    }

    pub fn insert_user_with_notifications(&self, user_id: Uuid, notifications: Vec<Notification>) {
        self.users.lock().unwrap().insert(user_id, notifications);
    }

    fn with_user<T>(
        &self,
        user_id: Uuid,
        f: impl FnOnce(&mut Vec<Notification>) -> T,
    ) -> Result<T, Error> {
        let mut users = self.users.lock().unwrap();
        let notifications = users.get_mut(&user_id).ok_or(Error::NoDocumentUpdated)?;

        Ok(f(notifications))
    }
}

#[async_trait]
impl UsersRepository for InMemoryUsersRepository {
    async fn find_notifications(&self, user_id: Uuid) -> Result<Option<Vec<Notification>>, Error> {
        let users = self.users.lock().unwrap();

        Ok(users.get(&user_id).cloned())
    }

    async fn push_notification(
        &self,
        user_id: Uuid,
        notification: Notification,
    ) -> Result<(), Error> {
        self.with_user(user_id, |notifications| notifications.push(notification))
    }

    async fn set_notification_read(
        &self,
        user_id: Uuid,
        notification_id: &str,
    ) -> Result<(), Error> {
        self.with_user(user_id, |notifications| {
            notifications
                .iter_mut()
                .find(|notification| notification.id == notification_id)
                .map(|notification| notification.read = true)
                .ok_or(Error::NoDocumentUpdated)
        })?
    }

    async fn set_all_notifications_read(&self, user_id: Uuid) -> Result<(), Error> {
        self.with_user(user_id, |notifications| {
            for notification in notifications {
                notification.read = true;
            }
        })
    }

    async fn set_many_notifications_read(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error> {
        self.with_user(user_id, |notifications| {
            for notification in notifications {
                if notification_ids.contains(&notification.id) {
                    notification.read = true;
                }
            }
        })
    }

    async fn pull_notification(&self, user_id: Uuid, notification_id: &str) -> Result<(), Error> {
        self.with_user(user_id, |notifications| {
            let len_before = notifications.len();
            notifications.retain(|notification| notification.id != notification_id);

            match notifications.len() < len_before {
                true => Ok(()),
                false => Err(Error::NoDocumentUpdated),
            }
        })?
    }

    async fn pull_many_notifications(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error> {
        self.with_user(user_id, |notifications| {
            notifications.retain(|notification| !notification_ids.contains(&notification.id));
        })
    }

    async fn clear_notifications(&self, user_id: Uuid) -> Result<(), Error> {
        self.with_user(user_id, |notifications| notifications.clear())
    }
}

pub fn create_app(repository: Arc<InMemoryUsersRepository>) -> Router {
    let state = ApplicationState {
        notifications_service: Arc::new(NotificationsServiceImpl::new(repository)),
    };

    let middleware = ApplicationMiddleware {
        auth: ValidateRequestHeaderLayer::custom(JwtAuthorizationValidator::new(
            DecodingKey::from_secret(JWT_KEY),
            vec![Algorithm::HS256],
        )),
        body_limit: RequestBodyLimitLayer::new(4096),
        trace: TraceLayer::new_for_http(),
    };

    create_application(state, middleware)
}

pub async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    jwt: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut request = Request::builder().method(method).uri(uri);
    if let Some(jwt) = jwt {
        request = request.header(AUTHORIZATION, format!("Bearer {jwt}"));
    }

    let request = match body {
        Some(body) => request
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

pub fn assert_status(response: &Response<Body>, status: StatusCode) {
    assert_eq!(response.status(), status);
}
