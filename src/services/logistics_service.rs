use uuid::Uuid;

use crate::{
    db::dao::{DaoLayerError, IdentityDao, LogisticsDao, NewConsignment},
    db::entities::{consignment, pickup_time},
    error::AppError,
};

#[derive(Clone)]
pub struct LogisticsService {
    logistics_dao: LogisticsDao,
    identity_dao: IdentityDao,
}

impl LogisticsService {
    pub fn new(logistics_dao: LogisticsDao, identity_dao: IdentityDao) -> Self {
        Self {
            logistics_dao,
            identity_dao,
        }
    }

    pub async fn pickup_times(&self) -> Result<Vec<pickup_time::Model>, AppError> {
        Ok(self.logistics_dao.list_pickup_times().await?)
    }

    /// Books a pickup. A given address must be one of the requester's own.
    pub async fn request_consignment(
        &self,
        new: NewConsignment,
    ) -> Result<consignment::Model, AppError> {
        if let Some(address_id) = new.address_id {
            let owner = match self.identity_dao.find_address(&address_id).await {
                Ok(address) => Some(address.user_id),
                Err(DaoLayerError::NotFound { .. }) => None,
                Err(err) => return Err(err.into()),
            };
            if owner != Some(new.user_id) {
                tracing::warn!(%address_id, user_id = %new.user_id, "foreign address rejected");
                return Err(AppError::invalid_argument(
                    "the address does not belong to the requesting user",
                ));
            }
        }

        let consignment = self.logistics_dao.create_consignment(new).await?;
        tracing::info!(consignment_id = %consignment.id, "consignment requested");
        Ok(consignment)
    }

    pub async fn confirm(&self, id: &Uuid) -> Result<consignment::Model, AppError> {
        Ok(self.logistics_dao.confirm(id).await?)
    }

    pub async fn consignments_of(&self, user_id: &Uuid) -> Result<Vec<consignment::Model>, AppError> {
        Ok(self.logistics_dao.consignments_of(user_id).await?)
    }

    pub async fn pending(&self) -> Result<Vec<consignment::Model>, AppError> {
        Ok(self.logistics_dao.pending().await?)
    }
}
