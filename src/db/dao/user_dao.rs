use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, IntoActiveModel, QueryFilter,
    QuerySelect, Set, TransactionTrait,
};
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use super::record::stamp_save;
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::{prelude::User, user};

/// Attributes of a new account besides its email and password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub phone_number: String,
    pub gender: String,
    pub grade_id: Option<Uuid>,
    pub social_platform_id: Option<Uuid>,
    pub social_login_id: String,
    pub bank_account: String,
    pub coupon: String,
}

impl Default for NewUser {
    fn default() -> Self {
        Self {
            name: String::new(),
            phone_number: String::new(),
            gender: String::new(),
            grade_id: None,
            social_platform_id: None,
            social_login_id: String::new(),
            bank_account: String::new(),
            coupon: "0".to_string(),
        }
    }
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        phone_number: impl Into<String>,
        gender: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone_number: phone_number.into(),
            gender: gender.into(),
            ..Self::default()
        }
    }

    pub fn with_grade(mut self, grade_id: Uuid) -> Self {
        self.grade_id = Some(grade_id);
        self
    }

    pub fn with_social_login(mut self, platform_id: Uuid, login_id: impl Into<String>) -> Self {
        self.social_platform_id = Some(platform_id);
        self.social_login_id = login_id.into();
        self
    }
}

#[derive(Clone)]
pub struct UserDao {
    db: DatabaseConnection,
}

impl DaoBase for UserDao {
    type Entity = User;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl UserDao {
    pub async fn find_by_email(&self, email: &str) -> DaoResult<Option<user::Model>> {
        let email = email.to_string();
        self.find(1, 1, None, move |query| {
            query.filter(user::Column::Email.eq(email))
        })
        .await
        .map(|response| response.data.into_iter().next())
    }

    /// Inserts one account row. `email` must already be normalized and
    /// `password` already hashed; uniqueness is left to the store.
    pub async fn create_user(
        &self,
        email: &str,
        password: &str,
        attrs: NewUser,
    ) -> DaoResult<user::Model> {
        let model = user::ActiveModel {
            email: Set(email.to_string()),
            password: Set(password.to_string()),
            name: Set(attrs.name),
            phone_number: Set(attrs.phone_number),
            grade_id: Set(attrs.grade_id),
            social_platform_id: Set(attrs.social_platform_id),
            social_login_id: Set(attrs.social_login_id),
            point: Set(0),
            purchase_count: Set(0),
            purchase_total: Set(Decimal::ZERO),
            sell_total: Set(Decimal::ZERO),
            last_login: Set(None),
            is_approved: Set(true),
            coupon: Set(attrs.coupon),
            gender: Set(attrs.gender),
            bank_account: Set(attrs.bank_account),
            login_fail_count: Set(0),
            is_lock: Set(false),
            latest_try_login_date: Set(None),
            lock_count: Set(0),
            is_deleted: Set(false),
            date_deleted: Set(None),
            is_active: Set(true),
            is_staff: Set(false),
            is_superuser: Set(false),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn set_password(&self, id: &Uuid, password: &str) -> DaoResult<user::Model> {
        let password = password.to_string();
        self.update(*id, move |active| {
            active.password = Set(password);
        })
        .await
    }

    pub async fn set_privileges(
        &self,
        id: &Uuid,
        is_staff: bool,
        is_superuser: bool,
    ) -> DaoResult<user::Model> {
        self.update(*id, move |active| {
            active.is_staff = Set(is_staff);
            active.is_superuser = Set(is_superuser);
        })
        .await
    }

    pub async fn set_grade(&self, id: &Uuid, grade_id: Option<Uuid>) -> DaoResult<user::Model> {
        self.update(*id, move |active| {
            active.grade_id = Set(grade_id);
        })
        .await
    }

    pub async fn set_last_login(
        &self,
        id: &Uuid,
        at: &DateTimeWithTimeZone,
    ) -> DaoResult<user::Model> {
        let at = *at;
        self.update(*id, move |active| {
            active.last_login = Set(Some(at));
            active.latest_try_login_date = Set(Some(at));
            active.login_fail_count = Set(0);
        })
        .await
    }

    /// Counts one failed attempt under a row lock. Reaching `max_failures`
    /// locks the account, bumps `lock_count` and starts the count over.
    pub async fn record_login_failure(
        &self,
        id: &Uuid,
        max_failures: i32,
        at: &DateTimeWithTimeZone,
    ) -> DaoResult<user::Model> {
        let txn = self.db.begin().await?;

        let current = User::find_by_id(*id)
            .lock_exclusive()
            .one(&txn)
            .await?
            .ok_or_else(|| DaoLayerError::not_found::<User>(*id))?;

        let failures = current.login_fail_count.saturating_add(1);
        let already_locked = current.is_lock;
        let lock_count = current.lock_count;

        let mut active = current.into_active_model();
        active.latest_try_login_date = Set(Some(*at));
        // attempts against an already locked account are only timestamped
        if !already_locked {
            if failures >= max_failures {
                active.is_lock = Set(true);
                active.lock_count = Set(lock_count.saturating_add(1));
                active.login_fail_count = Set(0);
            } else {
                active.login_fail_count = Set(failures);
            }
        }
        stamp_save(&mut active);

        let updated = active.update(&txn).await?;
        txn.commit().await?;
        Ok(updated)
    }

    pub async fn unlock(&self, id: &Uuid) -> DaoResult<user::Model> {
        self.update(*id, |active| {
            active.is_lock = Set(false);
            active.login_fail_count = Set(0);
        })
        .await
    }

    pub async fn soft_delete(&self, id: &Uuid, at: &DateTimeWithTimeZone) -> DaoResult<user::Model> {
        let at = *at;
        self.update(*id, move |active| {
            active.is_deleted = Set(true);
            active.is_active = Set(false);
            active.date_deleted = Set(Some(at));
        })
        .await
    }
}
