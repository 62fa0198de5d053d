use diesel::prelude::*;

use crate::domain::user::{NewUser as DomainNewUser, User as DomainUser};
use crate::models::user::{NewAuthToken as DbNewAuthToken, NewUser as DbNewUser, User as DbUser};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{DieselRepository, UserReader, UserWriter};

impl UserReader for DieselRepository {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::id.eq(id))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }

    fn get_user_by_email(&self, email: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let user = users::table
            .filter(users::email.eq(email))
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }

    fn get_user_by_token(&self, token: &str) -> RepositoryResult<Option<DomainUser>> {
        use crate::schema::{auth_tokens, users};

        let mut conn = self.conn()?;
        let user = auth_tokens::table
            .inner_join(users::table)
            .filter(auth_tokens::token.eq(token))
            .select(DbUser::as_select())
            .first::<DbUser>(&mut conn)
            .optional()?;

        Ok(user.map(DomainUser::from))
    }

    fn get_password_hash(&self, email: &str) -> RepositoryResult<Option<(i32, String)>> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let row = users::table
            .filter(users::email.eq(email))
            .select((users::id, users::password_hash))
            .first::<(i32, String)>(&mut conn)
            .optional()?;

        Ok(row)
    }
}

impl UserWriter for DieselRepository {
    fn create_user(&self, new_user: &DomainNewUser) -> RepositoryResult<DomainUser> {
        use crate::schema::users;

        let mut conn = self.conn()?;
        let db_new = DbNewUser::from(new_user);

        let created = diesel::insert_into(users::table)
            .values(&db_new)
            .get_result::<DbUser>(&mut conn)?;

        Ok(created.into())
    }

    fn create_token(&self, user_id: i32, token: &str) -> RepositoryResult<()> {
        use crate::schema::auth_tokens;

        let mut conn = self.conn()?;
        diesel::insert_into(auth_tokens::table)
            .values(&DbNewAuthToken { user_id, token })
            .execute(&mut conn)?;

        Ok(())
    }

    fn delete_token(&self, token: &str) -> RepositoryResult<()> {
        use crate::schema::auth_tokens;

        let mut conn = self.conn()?;
        let deleted = diesel::delete(auth_tokens::table.filter(auth_tokens::token.eq(token)))
            .execute(&mut conn)?;
        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
