use diesel::prelude::*;

use crate::domain::user::{Subscription as DomainSubscription, User as DomainUser};
use crate::models::user::{NewSubscription as DbNewSubscription, Subscription as DbSubscription, User as DbUser};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, SubscriptionReader, SubscriptionWriter};

impl SubscriptionReader for DieselRepository {
    fn is_subscribed(&self, user_id: i32, author_id: i32) -> RepositoryResult<bool> {
        use crate::schema::subscriptions;

        let mut conn = self.conn()?;
        let count = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::author_id.eq(author_id))
            .count()
            .get_result::<i64>(&mut conn)?;

        Ok(count > 0)
    }

    fn list_subscribed_authors(&self, user_id: i32) -> RepositoryResult<Vec<DomainUser>> {
        use crate::schema::{subscriptions, users};

        let mut conn = self.conn()?;
        let authors = subscriptions::table
            .inner_join(users::table.on(users::id.eq(subscriptions::author_id)))
            .filter(subscriptions::user_id.eq(user_id))
            .order(subscriptions::created_at.asc())
            .select(DbUser::as_select())
            .load::<DbUser>(&mut conn)?;

        Ok(authors.into_iter().map(DomainUser::from).collect())
    }
}

impl SubscriptionWriter for DieselRepository {
    fn create_subscription(
        &self,
        user_id: i32,
        author_id: i32,
    ) -> RepositoryResult<DomainSubscription> {
        use crate::schema::subscriptions;

        let mut conn = self.conn()?;
        let created = diesel::insert_into(subscriptions::table)
            .values(&DbNewSubscription { user_id, author_id })
            .get_result::<DbSubscription>(&mut conn)?;

        Ok(created.into())
    }

    fn delete_subscription(&self, user_id: i32, author_id: i32) -> RepositoryResult<()> {
        use crate::schema::subscriptions;

        let mut conn = self.conn()?;
        let target = subscriptions::table
            .filter(subscriptions::user_id.eq(user_id))
            .filter(subscriptions::author_id.eq(author_id));

        let deleted = diesel::delete(target).execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
