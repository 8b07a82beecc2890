use uuid::Uuid;

use crate::{
    auth::password::{hash_password, make_unusable_password},
    db::dao::{DaoBase, DaoLayerError, NewUser, UserDao, record::now},
    db::entities::user,
    error::AppError,
};

/// Lowercases the domain part of an email and keeps the local part as typed.
/// Input without an `@` comes back unchanged.
pub fn normalize_email(email: &str) -> String {
    let trimmed = email.trim();
    match trimmed.rsplit_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_lowercase()),
        None => email.to_string(),
    }
}

fn stored_password(raw: Option<&str>) -> Result<String, AppError> {
    match raw {
        Some(raw) => hash_password(raw),
        None => Ok(make_unusable_password()),
    }
}

#[derive(Clone)]
pub struct UserService {
    user_dao: UserDao,
    max_login_failures: i32,
}

impl UserService {
    pub fn new(user_dao: UserDao, max_login_failures: i32) -> Self {
        Self {
            user_dao,
            max_login_failures,
        }
    }

    /// Creates one account. The email is required; a missing password leaves
    /// the account without a usable one.
    pub async fn create_account(
        &self,
        email: Option<&str>,
        password: Option<&str>,
        attrs: NewUser,
    ) -> Result<user::Model, AppError> {
        let email = match email {
            Some(email) if !email.trim().is_empty() => normalize_email(email),
            _ => {
                tracing::warn!("account creation rejected: email missing");
                return Err(AppError::invalid_argument("the given email must be set"));
            }
        };
        let password = stored_password(password)?;

        let user = self.user_dao.create_user(&email, &password, attrs).await?;
        tracing::info!(user_id = %user.id, "account created");
        Ok(user)
    }

    /// Creates the account, then grants staff and superuser rights.
    pub async fn promote_to_superuser(
        &self,
        email: Option<&str>,
        password: Option<&str>,
    ) -> Result<user::Model, AppError> {
        let user = self
            .create_account(email, password, NewUser::default())
            .await?;
        let user = self.user_dao.set_privileges(&user.id, true, true).await?;
        tracing::info!(user_id = %user.id, "superuser created");
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &Uuid) -> Result<Option<user::Model>, AppError> {
        match self.user_dao.find_by_id(*id).await {
            Ok(model) => Ok(Some(model)),
            Err(DaoLayerError::NotFound { .. }) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<user::Model>, AppError> {
        Ok(self.user_dao.find_by_email(&normalize_email(email)).await?)
    }

    pub async fn check_password(&self, id: &Uuid, raw: &str) -> Result<bool, AppError> {
        let user = self.user_dao.find_by_id(*id).await?;
        Ok(user.check_password(raw))
    }

    pub async fn set_password(
        &self,
        id: &Uuid,
        raw: Option<&str>,
    ) -> Result<user::Model, AppError> {
        let password = stored_password(raw)?;
        Ok(self.user_dao.set_password(id, &password).await?)
    }

    pub async fn record_login_success(&self, id: &Uuid) -> Result<user::Model, AppError> {
        Ok(self.user_dao.set_last_login(id, &now()).await?)
    }

    /// Counts a failed login and locks the account once the configured
    /// number of consecutive failures is reached.
    pub async fn record_login_failure(&self, id: &Uuid) -> Result<user::Model, AppError> {
        let user = self
            .user_dao
            .record_login_failure(id, self.max_login_failures, &now())
            .await?;
        tracing::info!(
            user_id = %user.id,
            login_fail_count = user.login_fail_count,
            is_lock = user.is_lock,
            lock_count = user.lock_count,
            "login failure recorded"
        );
        Ok(user)
    }

    pub async fn unlock(&self, id: &Uuid) -> Result<user::Model, AppError> {
        Ok(self.user_dao.unlock(id).await?)
    }

    pub async fn soft_delete(&self, id: &Uuid) -> Result<user::Model, AppError> {
        Ok(self.user_dao.soft_delete(id, &now()).await?)
    }

    pub async fn assign_grade(
        &self,
        id: &Uuid,
        grade_id: Option<Uuid>,
    ) -> Result<user::Model, AppError> {
        Ok(self.user_dao.set_grade(id, grade_id).await?)
    }
}
