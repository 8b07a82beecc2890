use chrono::NaiveDate;
use rust_decimal::Decimal;
use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
use uuid::Uuid;

use consign_store::{
    db::dao::NewConsignment,
    db::entities::{address, consignment},
    error::AppError,
    services::ServiceContext,
    test_helpers::{price_model, product_model, ts},
};

#[tokio::test]
async fn repricing_keeps_a_single_current_record() {
    let (product_id, brand_id) = (Uuid::new_v4(), Uuid::new_v4());
    let new_price = Decimal::new(99_000, 0);
    let mut repriced = product_model(product_id, brand_id);
    repriced.price = new_price;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[product_model(product_id, brand_id)]])
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .append_query_results([[price_model(product_id, new_price, true)]])
        .append_query_results([[repriced]])
        .into_connection();

    let record = ServiceContext::new(&db)
        .catalog()
        .change_price(&product_id, new_price)
        .await
        .expect("price change should succeed");
    assert!(record.is_uptodate);

    let log = db.into_transaction_log();
    assert_eq!(log.len(), 1, "the whole change is one transaction");
    let sql = format!("{:?}", log[0]);
    assert!(sql.contains("FOR UPDATE"));
    assert!(sql.contains("price_histories"));
    assert!(sql.contains("products"));
}

#[tokio::test]
async fn consignment_from_own_address_is_booked() {
    let (user_id, address_id) = (Uuid::new_v4(), Uuid::new_v4());
    let pickup_date = NaiveDate::from_ymd_opt(2026, 1, 5).expect("valid date");
    let product_id = Uuid::new_v4();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[address::Model {
            id: address_id,
            created_at: ts(),
            updated_at: ts(),
            name: "서울시 뱅뱅사거리".to_string(),
            user_id,
            is_default: Some(true),
        }]])
        .append_query_results([[consignment::Model {
            id: Uuid::new_v4(),
            created_at: ts(),
            updated_at: ts(),
            user_id: Some(user_id),
            product_id,
            pickup_time_id: None,
            address_id: Some(address_id),
            pickup_date,
            request_message: String::new(),
            is_confirmed: false,
        }]])
        .into_connection();

    let booked = ServiceContext::new(&db)
        .logistics()
        .request_consignment(NewConsignment {
            user_id,
            product_id,
            pickup_time_id: None,
            address_id: Some(address_id),
            pickup_date,
            request_message: String::new(),
        })
        .await
        .expect("consignment should be booked");

    assert_eq!(booked.address_id, Some(address_id));
    assert!(!booked.is_confirmed);
}

#[tokio::test]
async fn review_rating_must_be_in_range() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = ServiceContext::new(&db)
        .analytics()
        .add_review(&Uuid::new_v4(), Some(Uuid::new_v4()), None, 6, "")
        .await
        .expect_err("rating above five");

    assert!(matches!(err, AppError::InvalidArgument(_)));
}
