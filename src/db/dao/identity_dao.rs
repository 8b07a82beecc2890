use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    Set, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use super::record::{now, stamp_new};
use super::{DaoBase, DaoLayerError, DaoResult};
use crate::db::entities::prelude::{
    Address, PhoneAuthorization, SocialPlatform, User, UserBrand, UserGrade,
};
use crate::db::entities::{
    address, phone_authorization, social_platform, user_brand, user_grade,
};

/// Grades, social platforms, phone verification codes, addresses and
/// followed brands: everything hanging off an account except the account row.
#[derive(Clone)]
pub struct IdentityDao {
    db: DatabaseConnection,
}

impl DaoBase for IdentityDao {
    type Entity = UserGrade;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

entity_dao!(SocialPlatformDao => SocialPlatform);
entity_dao!(PhoneAuthorizationDao => PhoneAuthorization);
entity_dao!(AddressDao => Address);
entity_dao!(UserBrandDao => UserBrand);

impl IdentityDao {
    fn social_platforms(&self) -> SocialPlatformDao {
        SocialPlatformDao::new(&self.db)
    }

    fn phone_authorizations(&self) -> PhoneAuthorizationDao {
        PhoneAuthorizationDao::new(&self.db)
    }

    fn addresses(&self) -> AddressDao {
        AddressDao::new(&self.db)
    }

    fn user_brands(&self) -> UserBrandDao {
        UserBrandDao::new(&self.db)
    }

    pub async fn create_grade(&self, grade: &str) -> DaoResult<user_grade::Model> {
        let model = user_grade::ActiveModel {
            grade: Set(grade.to_string()),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn list_grades(&self) -> DaoResult<Vec<user_grade::Model>> {
        self.find_all(|query| query).await
    }

    /// Users holding the grade keep their rows; their `grade_id` becomes NULL.
    pub async fn delete_grade(&self, id: &Uuid) -> DaoResult<Uuid> {
        self.delete(*id).await
    }

    pub async fn create_social_platform(
        &self,
        platform: &str,
    ) -> DaoResult<social_platform::Model> {
        let model = social_platform::ActiveModel {
            platform: Set(platform.to_string()),
            ..Default::default()
        };
        self.social_platforms().create(model).await
    }

    pub async fn find_social_platform(&self, id: &Uuid) -> DaoResult<social_platform::Model> {
        self.social_platforms().find_by_id(*id).await
    }

    pub async fn create_phone_authorization(
        &self,
        phone_number: &str,
        authorization_number: &str,
    ) -> DaoResult<phone_authorization::Model> {
        let model = phone_authorization::ActiveModel {
            phone_number: Set(phone_number.to_string()),
            authorization_number: Set(authorization_number.to_string()),
            ..Default::default()
        };
        self.phone_authorizations().create(model).await
    }

    pub async fn latest_phone_authorization(
        &self,
        phone_number: &str,
    ) -> DaoResult<Option<phone_authorization::Model>> {
        let phone_number = phone_number.to_string();
        self.phone_authorizations()
            .find(1, 1, None, move |query| {
                query.filter(phone_authorization::Column::PhoneNumber.eq(phone_number))
            })
            .await
            .map(|response| response.data.into_iter().next())
    }

    /// Adds an address. A new default address clears the flag on the user's
    /// other addresses in the same transaction, with the user row locked.
    pub async fn create_address(
        &self,
        user_id: &Uuid,
        name: &str,
        is_default: Option<bool>,
    ) -> DaoResult<address::Model> {
        let txn = self.db.begin().await?;

        if is_default == Some(true) {
            User::find_by_id(*user_id)
                .lock_exclusive()
                .one(&txn)
                .await?
                .ok_or_else(|| DaoLayerError::not_found::<User>(*user_id))?;
            Address::update_many()
                .col_expr(address::Column::IsDefault, Expr::value(false))
                .col_expr(address::Column::UpdatedAt, Expr::value(now()))
                .filter(address::Column::UserId.eq(*user_id))
                .filter(address::Column::IsDefault.eq(true))
                .exec(&txn)
                .await?;
        }

        let mut active = address::ActiveModel {
            user_id: Set(*user_id),
            name: Set(name.to_string()),
            is_default: Set(is_default),
            ..Default::default()
        };
        stamp_new(&mut active);
        let model = active.insert(&txn).await?;

        txn.commit().await?;
        Ok(model)
    }

    pub async fn find_address(&self, id: &Uuid) -> DaoResult<address::Model> {
        self.addresses().find_by_id(*id).await
    }

    pub async fn addresses_of(&self, user_id: &Uuid) -> DaoResult<Vec<address::Model>> {
        let user_id = *user_id;
        self.addresses()
            .find_all(move |query| query.filter(address::Column::UserId.eq(user_id)))
            .await
    }

    pub async fn follow_brand(
        &self,
        user_id: &Uuid,
        brand_id: &Uuid,
    ) -> DaoResult<user_brand::Model> {
        let model = user_brand::ActiveModel {
            user_id: Set(*user_id),
            brand_id: Set(*brand_id),
            ..Default::default()
        };
        self.user_brands().create(model).await
    }

    pub async fn unfollow_brand(&self, user_id: &Uuid, brand_id: &Uuid) -> DaoResult<u64> {
        let result = UserBrand::delete_many()
            .filter(user_brand::Column::UserId.eq(*user_id))
            .filter(user_brand::Column::BrandId.eq(*brand_id))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    pub async fn followed_brands(&self, user_id: &Uuid) -> DaoResult<Vec<user_brand::Model>> {
        let user_id = *user_id;
        self.user_brands()
            .find_all(move |query| query.filter(user_brand::Column::UserId.eq(user_id)))
            .await
    }
}
