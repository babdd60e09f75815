use super::NotificationsService;
use crate::{
    dto::{input, output},
    error::Error,
    repository::{self, UsersRepository},
};
use axum::async_trait;
use bson::oid::ObjectId;
use notifier_contract::{
    CreateNotificationRequest, FieldError, Notification, NotificationKind, PaginationInfo,
};
use std::{str::FromStr, sync::Arc};
use time::OffsetDateTime;
use uuid::Uuid;

pub struct NotificationsServiceImpl {
    repository: Arc<dyn UsersRepository>,
}

impl NotificationsServiceImpl {
    pub fn new(repository: Arc<dyn UsersRepository>) -> Self {
        Self { repository }
    }

    fn validate_filters(filters: &input::NotificationFilters) -> Result<(), Error> {
        let mut errors = Vec::new();

        if filters.page == 0 {
            errors.push(field_error("page", "page must be greater than or equal to 1"));
        }
        if filters.limit == 0 {
            errors.push(field_error(
                "limit",
                "limit must be greater than or equal to 1",
            ));
        }

        match errors.is_empty() {
            true => Ok(()),
            false => Err(Error::Validation(errors)),
        }
    }

    fn validate_create(
        request: &CreateNotificationRequest,
    ) -> Result<(NotificationKind, Uuid), Error> {
        let mut errors = Vec::new();

        if request.title.trim().is_empty() {
            errors.push(field_error("title", "title is required"));
        }
        if request.message.trim().is_empty() {
            errors.push(field_error("message", "message is required"));
        }

        let kind = NotificationKind::from_str(&request.kind);
        if kind.is_err() {
            errors.push(field_error(
                "type",
                "type must be one of project, team, task, general",
            ));
        }

        let target_user_id = Uuid::parse_str(&request.user_id);
        if target_user_id.is_err() {
            errors.push(field_error("userId", "userId must be a valid user id"));
        }

        match (kind, target_user_id) {
            (Ok(kind), Ok(target_user_id)) if errors.is_empty() => Ok((kind, target_user_id)),
            _ => Err(Error::Validation(errors)),
        }
    }

    async fn load_notifications(
        &self,
        user_id: Uuid,
    ) -> Result<Vec<repository::Notification>, Error> {
        let notifications = self
            .repository
            .find_notifications(user_id)
            .await?
            .ok_or(Error::UserNotExist)?;

        Ok(notifications)
    }
}

fn field_error(field: &str, message: &str) -> FieldError {
    FieldError {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn unread_count(notifications: &[repository::Notification]) -> u64 {
    notifications
        .iter()
        .filter(|notification| !notification.read)
        .count() as u64
}

#[async_trait]
impl NotificationsService for NotificationsServiceImpl {
    async fn find_notifications(
        &self,
        user_id: Uuid,
        filters: input::NotificationFilters,
    ) -> Result<output::NotificationList, Error> {
        tracing::info!("finding notifications");
        tracing::trace!(?filters);

        Self::validate_filters(&filters)?;

        let notifications = self.load_notifications(user_id).await?;

        let mut filtered = notifications
            .into_iter()
            .filter(|notification| {
                filters.read.is_none_or(|read| notification.read == read)
                    && filters.kind.is_none_or(|kind| notification.kind == kind)
            })
            .collect::<Vec<_>>();
        filtered.sort_by(|a, b| b.date.cmp(&a.date));

        let total = filtered.len() as u64;
        let pages = total.div_ceil(filters.limit as u64) as u32;
        let unread_count = unread_count(&filtered);

        let page = filtered
            .into_iter()
            .skip(((filters.page - 1) * filters.limit) as usize)
            .take(filters.limit as usize)
            .map(Notification::from)
            .collect::<Vec<_>>();

        tracing::info!(count = page.len(), "found notifications");

        Ok(output::NotificationList {
            notifications: page,
            pagination: PaginationInfo {
                page: filters.page,
                limit: filters.limit,
                total,
                pages,
            },
            unread_count,
        })
    }

    async fn create_notification(
        &self,
        creator_id: Uuid,
        request: CreateNotificationRequest,
    ) -> Result<Notification, Error> {
        tracing::info!("creating notification");
        tracing::trace!(?request);

        let (kind, target_user_id) = Self::validate_create(&request)?;

        let notification = repository::Notification {
            id: ObjectId::new().to_hex(),
            title: request.title.trim().to_string(),
            message: request.message.trim().to_string(),
            kind,
            date: OffsetDateTime::now_utc(),
            read: false,
            project_id: request.project_id,
            task_id: request.task_id,
            member_id: creator_id,
        };

        self.repository
            .push_notification(target_user_id, notification.clone())
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(id = %notification.id, "created notification");

        Ok(notification.into())
    }

    async fn mark_notification_read(
        &self,
        user_id: Uuid,
        notification_id: String,
    ) -> Result<output::UpdatedNotification, Error> {
        tracing::info!("marking notification as read");

        self.repository
            .set_notification_read(user_id, &notification_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        let notifications = self.load_notifications(user_id).await?;
        let unread_count = unread_count(&notifications);
        let notification = notifications
            .into_iter()
            .find(|notification| notification.id == notification_id)
            .ok_or(Error::NotificationNotExist)?;

        tracing::info!(id = %notification.id, "marked notification as read");

        Ok(output::UpdatedNotification {
            notification: notification.into(),
            unread_count,
        })
    }

    async fn mark_all_notifications_read(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("marking all notifications as read");

        self.repository
            .set_all_notifications_read(user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("marked all notifications as read");

        Ok(())
    }

    async fn delete_notification(
        &self,
        user_id: Uuid,
        notification_id: String,
    ) -> Result<u64, Error> {
        tracing::info!("deleting notification");

        self.repository
            .pull_notification(user_id, &notification_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::NotificationNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(id = %notification_id, "deleted notification");

        let notifications = self.load_notifications(user_id).await?;

        Ok(unread_count(&notifications))
    }

    async fn delete_all_notifications(&self, user_id: Uuid) -> Result<(), Error> {
        tracing::info!("deleting all notifications");

        self.repository
            .clear_notifications(user_id)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!("deleted all notifications");

        Ok(())
    }

    async fn mark_many_notifications_read(
        &self,
        user_id: Uuid,
        notification_ids: Vec<String>,
    ) -> Result<output::BulkUpdate, Error> {
        tracing::info!("marking notifications as read");
        tracing::trace!(?notification_ids);

        let notifications = self.load_notifications(user_id).await?;
        let affected = notifications
            .iter()
            .filter(|notification| {
                !notification.read && notification_ids.contains(&notification.id)
            })
            .count() as u64;

        self.repository
            .set_many_notifications_read(user_id, &notification_ids)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(affected, "marked notifications as read");

        Ok(output::BulkUpdate {
            affected,
            unread_count: unread_count(&notifications) - affected,
        })
    }

    async fn delete_many_notifications(
        &self,
        user_id: Uuid,
        notification_ids: Vec<String>,
    ) -> Result<output::BulkUpdate, Error> {
        tracing::info!("deleting notifications");
        tracing::trace!(?notification_ids);

        let notifications = self.load_notifications(user_id).await?;
        let affected = notifications
            .iter()
            .filter(|notification| notification_ids.contains(&notification.id))
            .count() as u64;
        let unread_deleted = notifications
            .iter()
            .filter(|notification| {
                !notification.read && notification_ids.contains(&notification.id)
            })
            .count() as u64;

        self.repository
            .pull_many_notifications(user_id, &notification_ids)
            .await
            .map_err(|err| match err {
                repository::Error::NoDocumentUpdated => Error::UserNotExist,
                err => Error::Database(err),
            })?;

        tracing::info!(affected, "deleted notifications");

        Ok(output::BulkUpdate {
            affected,
            unread_count: unread_count(&notifications) - unread_deleted,
        })
    }
}
