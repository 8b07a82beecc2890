use record_derive::record;
use sea_orm::entity::prelude::*;

/// One pickup request for a seller-submitted product.
#[record]
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize, DeriveEntityModel)]
#[sea_orm(table_name = "consignments")]
pub struct Model {
    #[sea_orm(indexed)]
    pub user_id: Option<Uuid>,
    #[sea_orm(indexed)]
    pub product_id: Uuid,
    pub pickup_time_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
    pub pickup_date: Date,
    #[sea_orm(column_type = "String(StringLen::N(500))")]
    pub request_message: String,
    #[sea_orm(default_value = false)]
    pub is_confirmed: bool,
    #[sea_orm(belongs_to, from = "user_id", to = "id", on_delete = "SetNull")]
    pub user: HasOne<super::user::Entity>,
    #[sea_orm(belongs_to, from = "product_id", to = "id", on_delete = "Cascade")]
    pub product: HasOne<super::product::Entity>,
    #[sea_orm(belongs_to, from = "pickup_time_id", to = "id", on_delete = "SetNull")]
    pub pickup_time: HasOne<super::pickup_time::Entity>,
    #[sea_orm(belongs_to, from = "address_id", to = "id", on_delete = "SetNull")]
    pub address: HasOne<super::address::Entity>,
}

impl ActiveModelBehavior for ActiveModel {}
