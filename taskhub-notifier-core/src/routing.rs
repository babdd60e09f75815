use crate::{
    application::{ApplicationMiddleware, ApplicationState},
    auth::User,
    dto::input,
    error::Error,
};
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{delete, get, put},
    Extension, Json, Router,
};
use notifier_contract::{
    BulkDeleteResponse, BulkReadResponse, CreateNotificationRequest, CreatedNotificationResponse,
    MarkAllReadResponse, NotificationDeletedResponse, NotificationIdsRequest,
    NotificationListResponse, NotificationReadResponse, NotificationsClearedResponse,
};

pub fn routing(application_middleware: &ApplicationMiddleware) -> Router<ApplicationState> {
    Router::new()
        .route(
            "/notifications",
            get(list_notifications)
                .post(create_notification)
                .delete(delete_all_notifications),
        )
        .route("/notifications/read-all", put(mark_all_notifications_read))
        .route("/notifications/bulk-read", put(mark_many_notifications_read))
        .route(
            "/notifications/bulk-delete",
            delete(delete_many_notifications),
        )
        .route("/notifications/:id/read", put(mark_notification_read))
        .route("/notifications/:id", delete(delete_notification))
        .route_layer(application_middleware.auth.clone())
}

async fn list_notifications(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Query(filters): Query<input::NotificationFilters>,
) -> Result<Json<NotificationListResponse>, Error> {
    let list = state
        .notifications_service
        .find_notifications(user.id, filters)
        .await?;

    Ok(Json(NotificationListResponse {
        success: true,
        data: list.notifications,
        pagination: list.pagination,
        unread_count: list.unread_count,
    }))
}

async fn create_notification(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Json(request): Json<CreateNotificationRequest>,
) -> Result<(StatusCode, Json<CreatedNotificationResponse>), Error> {
    let notification = state
        .notifications_service
        .create_notification(user.id, request)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(CreatedNotificationResponse {
            success: true,
            data: notification,
        }),
    ))
}

async fn mark_notification_read(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationReadResponse>, Error> {
    let updated = state
        .notifications_service
        .mark_notification_read(user.id, notification_id)
        .await?;

    Ok(Json(NotificationReadResponse {
        success: true,
        data: updated.notification,
        unread_count: updated.unread_count,
    }))
}

async fn mark_all_notifications_read(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
) -> Result<Json<MarkAllReadResponse>, Error> {
    state
        .notifications_service
        .mark_all_notifications_read(user.id)
        .await?;

    Ok(Json(MarkAllReadResponse {
        success: true,
        message: "all notifications marked as read".to_string(),
        unread_count: 0,
    }))
}

async fn delete_notification(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Path(notification_id): Path<String>,
) -> Result<Json<NotificationDeletedResponse>, Error> {
    let unread_count = state
        .notifications_service
        .delete_notification(user.id, notification_id)
        .await?;

    Ok(Json(NotificationDeletedResponse {
        success: true,
        message: "notification deleted".to_string(),
        unread_count,
    }))
}

async fn delete_all_notifications(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
) -> Result<Json<NotificationsClearedResponse>, Error> {
    state
        .notifications_service
        .delete_all_notifications(user.id)
        .await?;

    Ok(Json(NotificationsClearedResponse {
        success: true,
        message: "all notifications deleted".to_string(),
    }))
}

async fn mark_many_notifications_read(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Json(request): Json<NotificationIdsRequest>,
) -> Result<Json<BulkReadResponse>, Error> {
    let update = state
        .notifications_service
        .mark_many_notifications_read(user.id, request.notification_ids)
        .await?;

    Ok(Json(BulkReadResponse {
        success: true,
        message: "notifications marked as read".to_string(),
        updated: update.affected,
        unread_count: update.unread_count,
    }))
}

async fn delete_many_notifications(
    State(state): State<ApplicationState>,
    Extension(user): Extension<User>,
    Json(request): Json<NotificationIdsRequest>,
) -> Result<Json<BulkDeleteResponse>, Error> {
    let update = state
        .notifications_service
        .delete_many_notifications(user.id, request.notification_ids)
        .await?;

    Ok(Json(BulkDeleteResponse {
        success: true,
        message: "notifications deleted".to_string(),
        deleted: update.affected,
        unread_count: update.unread_count,
    }))
}
