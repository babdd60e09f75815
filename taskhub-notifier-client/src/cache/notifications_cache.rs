use crate::{api::NotificationsApi, Error};
use notifier_contract::{CreateNotificationRequest, ListFilters, Notification};
use std::sync::Arc;
use tokio::sync::watch;

///
/// Client side mirror of the user's inbox.
///
/// Holds the last fetched page, the unread counter and the transient
/// `loading`/`error` flags behind [watch] channels. Subscribers receive
/// the current value immediately and every update afterwards; dropping
/// the cache closes all subscriptions.
///
/// Every operation is two phase: call the server, and only on success
/// apply the matching local mutation. On failure the mirrored state is
/// left untouched and `error` carries the message. Mutation responses
/// bring the server's unread count with them, so the counter never
/// drifts; only create adjusts it locally (the created notification may
/// belong to another user's inbox).
///
pub struct NotificationsCache {
    api: Arc<dyn NotificationsApi>,
    notifications: watch::Sender<Vec<Notification>>,
    unread_count: watch::Sender<u64>,
    loading: watch::Sender<bool>,
    error: watch::Sender<Option<String>>,
}

impl NotificationsCache {
    pub fn new(api: Arc<dyn NotificationsApi>) -> Self {
        Self {
            api,
            notifications: watch::Sender::new(Vec::new()),
            unread_count: watch::Sender::new(0),
            loading: watch::Sender::new(false),
            error: watch::Sender::new(None),
        }
    }

    pub fn subscribe_notifications(&self) -> watch::Receiver<Vec<Notification>> {
        self.notifications.subscribe()
    }

    pub fn subscribe_unread_count(&self) -> watch::Receiver<u64> {
        self.unread_count.subscribe()
    }

    pub fn subscribe_loading(&self) -> watch::Receiver<bool> {
        self.loading.subscribe()
    }

    pub fn subscribe_error(&self) -> watch::Receiver<Option<String>> {
        self.error.subscribe()
    }

    fn begin(&self) {
        self.loading.send_replace(true);
        self.error.send_replace(None);
    }

    fn fail(&self, error: &Error) {
        tracing::warn!(%error, "notification call failed");
        self.error.send_replace(Some(error.to_string()));
        self.loading.send_replace(false);
    }

    fn finish(&self) {
        self.loading.send_replace(false);
    }

    ///
    /// Replace the mirrored page and the unread counter wholesale with
    /// the server's answer for `filters`.
    ///
    pub async fn fetch_list(&self, filters: ListFilters) -> Result<(), Error> {
        self.begin();

        let response = match self.api.list(filters).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        self.notifications.send_replace(response.data);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }

    pub async fn create(&self, request: CreateNotificationRequest) -> Result<(), Error> {
        self.begin();

        let response = match self.api.create(request).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let created = response.data;
        if !created.read {
            let unread_count = *self.unread_count.borrow() + 1;
            self.unread_count.send_replace(unread_count);
        }
        let mut notifications = vec![created];
        notifications.extend(self.notifications.borrow().iter().cloned());
        self.notifications.send_replace(notifications);
        self.finish();

        Ok(())
    }

    pub async fn mark_read(&self, notification_id: &str) -> Result<(), Error> {
        self.begin();

        let response = match self.api.mark_read(notification_id).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let notifications = self
            .notifications
            .borrow()
            .iter()
            .map(|notification| match notification.id == notification_id {
                true => Notification {
                    read: true,
                    ..notification.clone()
                },
                false => notification.clone(),
            })
            .collect();
        self.notifications.send_replace(notifications);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }

    pub async fn mark_all_read(&self) -> Result<(), Error> {
        self.begin();

        let response = match self.api.mark_all_read().await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let notifications = self
            .notifications
            .borrow()
            .iter()
            .map(|notification| Notification {
                read: true,
                ..notification.clone()
            })
            .collect();
        self.notifications.send_replace(notifications);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }

    pub async fn delete(&self, notification_id: &str) -> Result<(), Error> {
        self.begin();

        let response = match self.api.delete(notification_id).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let notifications = self
            .notifications
            .borrow()
            .iter()
            .filter(|notification| notification.id != notification_id)
            .cloned()
            .collect();
        self.notifications.send_replace(notifications);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }

    pub async fn delete_all(&self) -> Result<(), Error> {
        self.begin();

        if let Err(error) = self.api.delete_all().await {
            self.fail(&error);
            return Err(error);
        }

        self.notifications.send_replace(Vec::new());
        self.unread_count.send_replace(0);
        self.finish();

        Ok(())
    }

    pub async fn bulk_mark_read(&self, notification_ids: &[String]) -> Result<(), Error> {
        self.begin();

        let response = match self.api.bulk_mark_read(notification_ids).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let notifications = self
            .notifications
            .borrow()
            .iter()
            .map(|notification| match notification_ids.contains(&notification.id) {
                true => Notification {
                    read: true,
                    ..notification.clone()
                },
                false => notification.clone(),
            })
            .collect();
        self.notifications.send_replace(notifications);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }

    pub async fn bulk_delete(&self, notification_ids: &[String]) -> Result<(), Error> {
        self.begin();

        let response = match self.api.bulk_delete(notification_ids).await {
            Ok(response) => response,
            Err(error) => {
                self.fail(&error);
                return Err(error);
            }
        };

        let notifications = self
            .notifications
            .borrow()
            .iter()
            .filter(|notification| !notification_ids.contains(&notification.id))
            .cloned()
            .collect();
        self.notifications.send_replace(notifications);
        self.unread_count.send_replace(response.unread_count);
        self.finish();

        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::api::MockNotificationsApi;
    use notifier_contract::{
        BulkDeleteResponse, BulkReadResponse, CreatedNotificationResponse, MarkAllReadResponse,
        NotificationDeletedResponse, NotificationKind, NotificationListResponse,
        NotificationReadResponse, NotificationsClearedResponse, PaginationInfo,
    };
    use time::macros::datetime;
    use uuid::Uuid;

    fn notification(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: format!("title {id}"),
            message: format!("message {id}"),
            kind: NotificationKind::Task,
            date: datetime!(2024-08-28 12:00:00 UTC),
            read,
            project_id: None,
            task_id: None,
            member_id: Uuid::from_u128(7),
        }
    }

    fn list_response(data: Vec<Notification>, unread_count: u64) -> NotificationListResponse {
        NotificationListResponse {
            success: true,
            pagination: PaginationInfo {
                page: 1,
                limit: 20,
                total: data.len() as u64,
                pages: 1,
            },
            data,
            unread_count,
        }
    }

    fn api_error() -> Error {
        Error::Api {
            status: 500,
            message: "database error".to_string(),
        }
    }

    async fn populated_cache(api: MockNotificationsApi) -> NotificationsCache {
        let mut list_api = MockNotificationsApi::new();
        list_api.expect_list().return_once(|_| {
            Ok(list_response(
                vec![notification("a", false), notification("b", true)],
                1,
            ))
        });

        // fetch through a mock that only answers list, then swap in the
        // mock under test for the mutation
        let cache = NotificationsCache::new(Arc::new(list_api));
        cache.fetch_list(ListFilters::default()).await.unwrap();

        NotificationsCache {
            api: Arc::new(api),
            notifications: cache.notifications,
            unread_count: cache.unread_count,
            loading: cache.loading,
            error: cache.error,
        }
    }

    #[tokio::test]
    async fn subscribers_receive_initial_state() {
        let cache = NotificationsCache::new(Arc::new(MockNotificationsApi::new()));

        assert!(cache.subscribe_notifications().borrow().is_empty());
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
        assert!(!*cache.subscribe_loading().borrow());
        assert!(cache.subscribe_error().borrow().is_none());
    }

    #[tokio::test]
    async fn fetch_list_replaces_list_and_counter() {
        let mut api = MockNotificationsApi::new();
        api.expect_list().return_once(|_| {
            Ok(list_response(
                vec![notification("a", false), notification("b", false)],
                2,
            ))
        });
        let cache = NotificationsCache::new(Arc::new(api));

        cache.fetch_list(ListFilters::default()).await.unwrap();

        assert_eq!(cache.subscribe_notifications().borrow().len(), 2);
        assert_eq!(*cache.subscribe_unread_count().borrow(), 2);
        assert!(!*cache.subscribe_loading().borrow());
    }

    #[tokio::test]
    async fn fetch_list_failure_leaves_state_and_sets_error() {
        let mut api = MockNotificationsApi::new();
        api.expect_list().return_once(|_| Err(api_error()));
        let cache = populated_cache(api).await;

        let result = cache.fetch_list(ListFilters::default()).await;

        assert!(result.is_err());
        assert_eq!(cache.subscribe_notifications().borrow().len(), 2);
        assert_eq!(*cache.subscribe_unread_count().borrow(), 1);
        assert_eq!(
            cache.subscribe_error().borrow().as_deref(),
            Some("database error")
        );
        assert!(!*cache.subscribe_loading().borrow());
    }

    #[tokio::test]
    async fn create_prepends_and_increments_counter() {
        let mut api = MockNotificationsApi::new();
        api.expect_create().return_once(|_| {
            Ok(CreatedNotificationResponse {
                success: true,
                data: notification("new", false),
            })
        });
        let cache = populated_cache(api).await;

        cache
            .create(CreateNotificationRequest {
                title: "T".to_string(),
                message: "M".to_string(),
                kind: "task".to_string(),
                user_id: Uuid::from_u128(7).to_string(),
                project_id: None,
                task_id: None,
            })
            .await
            .unwrap();

        let notifications = cache.subscribe_notifications().borrow().clone();
        assert_eq!(notifications.len(), 3);
        assert_eq!(notifications[0].id, "new");
        assert_eq!(*cache.subscribe_unread_count().borrow(), 2);
    }

    #[tokio::test]
    async fn mark_read_flips_only_matching_element() {
        let mut api = MockNotificationsApi::new();
        api.expect_mark_read().return_once(|_| {
            Ok(NotificationReadResponse {
                success: true,
                data: notification("a", true),
                unread_count: 0,
            })
        });
        let cache = populated_cache(api).await;
        let before = cache.subscribe_notifications().borrow().clone();

        cache.mark_read("a").await.unwrap();

        let after = cache.subscribe_notifications().borrow().clone();
        assert!(after[0].read);
        assert_eq!(after[0].id, "a");
        // every other element is untouched
        assert_eq!(after[1], before[1]);
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
    }

    #[tokio::test]
    async fn mark_read_failure_leaves_item_unchanged() {
        let mut api = MockNotificationsApi::new();
        api.expect_mark_read().return_once(|_| Err(api_error()));
        let cache = populated_cache(api).await;

        let result = cache.mark_read("a").await;

        assert!(result.is_err());
        let notifications = cache.subscribe_notifications().borrow().clone();
        assert!(!notifications[0].read);
        assert_eq!(*cache.subscribe_unread_count().borrow(), 1);
        assert!(cache.subscribe_error().borrow().is_some());
    }

    #[tokio::test]
    async fn mark_all_read_flips_everything_and_takes_server_counter() {
        let mut api = MockNotificationsApi::new();
        api.expect_mark_all_read().return_once(|| {
            Ok(MarkAllReadResponse {
                success: true,
                message: "all notifications marked as read".to_string(),
                unread_count: 0,
            })
        });
        let cache = populated_cache(api).await;

        cache.mark_all_read().await.unwrap();

        let notifications = cache.subscribe_notifications().borrow().clone();
        assert!(notifications.iter().all(|notification| notification.read));
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
    }

    #[tokio::test]
    async fn delete_removes_element_and_takes_server_counter() {
        let mut api = MockNotificationsApi::new();
        api.expect_delete().return_once(|_| {
            Ok(NotificationDeletedResponse {
                success: true,
                message: "notification deleted".to_string(),
                unread_count: 0,
            })
        });
        let cache = populated_cache(api).await;

        cache.delete("a").await.unwrap();

        let notifications = cache.subscribe_notifications().borrow().clone();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "b");
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
    }

    #[tokio::test]
    async fn delete_all_clears_mirror() {
        let mut api = MockNotificationsApi::new();
        api.expect_delete_all().return_once(|| {
            Ok(NotificationsClearedResponse {
                success: true,
                message: "all notifications deleted".to_string(),
            })
        });
        let cache = populated_cache(api).await;

        cache.delete_all().await.unwrap();

        assert!(cache.subscribe_notifications().borrow().is_empty());
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
    }

    #[tokio::test]
    async fn bulk_mark_read_applies_listed_ids_only() {
        let mut api = MockNotificationsApi::new();
        api.expect_bulk_mark_read().return_once(|_| {
            Ok(BulkReadResponse {
                success: true,
                message: "notifications marked as read".to_string(),
                updated: 1,
                unread_count: 0,
            })
        });
        let cache = populated_cache(api).await;

        cache
            .bulk_mark_read(&["a".to_string(), "unknown".to_string()])
            .await
            .unwrap();

        let notifications = cache.subscribe_notifications().borrow().clone();
        assert!(notifications[0].read);
        assert_eq!(*cache.subscribe_unread_count().borrow(), 0);
    }

    #[tokio::test]
    async fn bulk_delete_removes_listed_ids_only() {
        let mut api = MockNotificationsApi::new();
        api.expect_bulk_delete().return_once(|_| {
            Ok(BulkDeleteResponse {
                success: true,
                message: "notifications deleted".to_string(),
                deleted: 1,
                unread_count: 1,
            })
        });
        let cache = populated_cache(api).await;

        cache
            .bulk_delete(&["b".to_string(), "unknown".to_string()])
            .await
            .unwrap();

        let notifications = cache.subscribe_notifications().borrow().clone();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].id, "a");
        assert_eq!(*cache.subscribe_unread_count().borrow(), 1);
    }

    #[tokio::test]
    async fn subscriptions_end_when_cache_is_dropped() {
        let cache = NotificationsCache::new(Arc::new(MockNotificationsApi::new()));
        let mut receiver = cache.subscribe_notifications();

        drop(cache);

        assert!(receiver.changed().await.is_err());
    }
}
