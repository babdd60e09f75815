use super::{
    dto::Notification,
    entity::{NotificationEntity, UserFindEntity},
    Error, UsersRepository,
};
use axum::async_trait;
use bson::{doc, Document};
use mongodb::{Collection, Database};
use uuid::Uuid;

const USERS: &str = "users";

///
/// Users collection with the per-user `notifications` array embedded in
/// each document. Every mutation is a single `update_one`, so concurrent
/// writes against the same inbox cannot overwrite each other the way a
/// load-mutate-save cycle could.
///
pub struct UsersRepositoryImpl {
    database: Database,
}

impl UsersRepositoryImpl {
    pub async fn new(database: Database) -> Result<Self, mongodb::error::Error> {
        database.create_collection(USERS).await?;

        Ok(Self { database })
    }

    fn collection(&self) -> Collection<Document> {
        self.database.collection(USERS)
    }
}

#[async_trait]
impl UsersRepository for UsersRepositoryImpl {
    async fn find_notifications(&self, user_id: Uuid) -> Result<Option<Vec<Notification>>, Error> {
        let user = self
            .database
            .collection::<UserFindEntity>(USERS)
            .find_one(doc! { "_id": bson::Uuid::from(user_id) })
            .projection(doc! { "_id": 0, "notifications": 1 })
            .await?;

        let notifications = user.map(|user| {
            user.notifications
                .into_iter()
                .map(Notification::from)
                .collect()
        });

        Ok(notifications)
    }

    async fn push_notification(
        &self,
        user_id: Uuid,
        notification: Notification,
    ) -> Result<(), Error> {
        let entity = NotificationEntity::from(notification);
        let entity = bson::to_bson(&entity)?;

        let update_result = self
            .collection()
            .update_one(
                doc! { "_id": bson::Uuid::from(user_id) },
                doc! { "$push": { "notifications": entity } },
            )
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn set_notification_read(
        &self,
        user_id: Uuid,
        notification_id: &str,
    ) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! {
                    "_id": bson::Uuid::from(user_id),
                    "notifications.id": notification_id,
                },
                doc! { "$set": { "notifications.$.read": true } },
            )
            .await?;

        // matched, not modified: marking an already read notification
        // again is a no-op, not an error
        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn set_all_notifications_read(&self, user_id: Uuid) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! { "_id": bson::Uuid::from(user_id) },
                doc! { "$set": { "notifications.$[].read": true } },
            )
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn set_many_notifications_read(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! { "_id": bson::Uuid::from(user_id) },
                doc! { "$set": { "notifications.$[notification].read": true } },
            )
            .array_filters(vec![doc! {
                "notification.id": { "$in": notification_ids },
            }])
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn pull_notification(&self, user_id: Uuid, notification_id: &str) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! {
                    "_id": bson::Uuid::from(user_id),
                    "notifications.id": notification_id,
                },
                doc! { "$pull": { "notifications": { "id": notification_id } } },
            )
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn pull_many_notifications(
        &self,
        user_id: Uuid,
        notification_ids: &[String],
    ) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! { "_id": bson::Uuid::from(user_id) },
                doc! { "$pull": { "notifications": { "id": { "$in": notification_ids } } } },
            )
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }

    async fn clear_notifications(&self, user_id: Uuid) -> Result<(), Error> {
        let update_result = self
            .collection()
            .update_one(
                doc! { "_id": bson::Uuid::from(user_id) },
                doc! { "$set": { "notifications": [] } },
            )
            .await?;

        if update_result.matched_count == 0 {
            return Err(Error::NoDocumentUpdated);
        }

        Ok(())
    }
}
