use record_derive::record;
use sea_orm::entity::prelude::*;

use crate::auth::password;

/// Account record. `date_created` is written once at insert; `recent_login` and
/// `sleep_expiration_date` are refreshed on every save.
#[record(created = "date_created", modified = "recent_login, sleep_expiration_date")]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(unique, column_type = "String(StringLen::N(255))")]
    pub email: String,
    #[sea_orm(column_type = "String(StringLen::N(255))")]
    pub password: String,
    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub phone_number: String,
    #[sea_orm(indexed)]
    pub grade_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub social_platform_id: Option<Uuid>,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub social_login_id: String,
    #[sea_orm(default_value = 0)]
    pub point: i32,
    #[sea_orm(default_value = 0)]
    pub purchase_count: i32,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub purchase_total: Decimal,
    #[sea_orm(column_type = "Decimal(Some((18, 2)))")]
    pub sell_total: Decimal,
    pub last_login: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_value = true)]
    pub is_approved: bool,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub coupon: String,
    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub gender: String,
    #[sea_orm(column_type = "String(StringLen::N(160))")]
    pub bank_account: String,
    #[sea_orm(default_value = 0)]
    pub login_fail_count: i32,
    #[sea_orm(default_value = false)]
    pub is_lock: bool,
    pub latest_try_login_date: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_value = 0)]
    pub lock_count: i32,
    #[sea_orm(default_value = false)]
    pub is_deleted: bool,
    pub date_deleted: Option<DateTimeWithTimeZone>,
    #[sea_orm(default_value = true)]
    pub is_active: bool,
    #[sea_orm(default_value = false)]
    pub is_staff: bool,
    #[sea_orm(default_value = false)]
    pub is_superuser: bool,
    #[sea_orm(belongs_to, from = "grade_id", to = "id", on_delete = "SetNull")]
    pub grade: HasOne<super::user_grade::Entity>,
    #[sea_orm(belongs_to, from = "social_platform_id", to = "id", on_delete = "SetNull")]
    pub social_platform: HasOne<super::social_platform::Entity>,
    #[sea_orm(has_many)]
    pub addresses: HasMany<super::address::Entity>,
    #[sea_orm(has_many)]
    pub favourite_brands: HasMany<super::user_brand::Entity>,
    #[sea_orm(has_many)]
    pub products: HasMany<super::product::Entity>,
    #[sea_orm(has_many)]
    pub consignments: HasMany<super::consignment::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// True iff `raw` hashes to the stored password. Unusable passwords never match.
    pub fn check_password(&self, raw: &str) -> bool {
        password::verify_password(raw, &self.password).unwrap_or(false)
    }

    pub fn has_usable_password(&self) -> bool {
        password::is_usable(&self.password)
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.email)
    }
}
