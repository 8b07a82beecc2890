use chrono::NaiveDate;
use sea_orm::{ColumnTrait, DatabaseConnection, QueryFilter, Set};
use uuid::Uuid;

use super::{DaoBase, DaoResult};
use crate::db::entities::prelude::{Consignment, PickupTime};
use crate::db::entities::{consignment, pickup_time};

/// A request to collect a product from a seller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewConsignment {
    pub user_id: Uuid,
    pub product_id: Uuid,
    pub pickup_time_id: Option<Uuid>,
    pub address_id: Option<Uuid>,
    pub pickup_date: NaiveDate,
    pub request_message: String,
}

#[derive(Clone)]
pub struct LogisticsDao {
    db: DatabaseConnection,
}

impl DaoBase for LogisticsDao {
    type Entity = Consignment;

    fn from_db(db: DatabaseConnection) -> Self {
        Self { db }
    }

    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

entity_dao!(PickupTimeDao => PickupTime);

impl LogisticsDao {
    fn pickup_times(&self) -> PickupTimeDao {
        PickupTimeDao::new(&self.db)
    }

    pub async fn create_pickup_time(&self, time_slot: &str) -> DaoResult<pickup_time::Model> {
        let model = pickup_time::ActiveModel {
            time_slot: Set(time_slot.to_string()),
            ..Default::default()
        };
        self.pickup_times().create(model).await
    }

    pub async fn list_pickup_times(&self) -> DaoResult<Vec<pickup_time::Model>> {
        self.pickup_times().find_all(|query| query).await
    }

    pub async fn create_consignment(
        &self,
        new: NewConsignment,
    ) -> DaoResult<consignment::Model> {
        let model = consignment::ActiveModel {
            user_id: Set(Some(new.user_id)),
            product_id: Set(new.product_id),
            pickup_time_id: Set(new.pickup_time_id),
            address_id: Set(new.address_id),
            pickup_date: Set(new.pickup_date),
            request_message: Set(new.request_message),
            is_confirmed: Set(false),
            ..Default::default()
        };
        self.create(model).await
    }

    pub async fn find_consignment(&self, id: &Uuid) -> DaoResult<consignment::Model> {
        self.find_by_id(*id).await
    }

    pub async fn confirm(&self, id: &Uuid) -> DaoResult<consignment::Model> {
        self.update(*id, |active| {
            active.is_confirmed = Set(true);
        })
        .await
    }

    pub async fn consignments_of(&self, user_id: &Uuid) -> DaoResult<Vec<consignment::Model>> {
        let user_id = *user_id;
        self.find_all(move |query| query.filter(consignment::Column::UserId.eq(user_id)))
            .await
    }

    pub async fn pending(&self) -> DaoResult<Vec<consignment::Model>> {
        self.find_all(|query| query.filter(consignment::Column::IsConfirmed.eq(false)))
            .await
    }
}
