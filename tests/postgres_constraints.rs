//! Runs against a real Postgres database named by `APP_DATABASE__URL`.

use rust_decimal::Decimal;
use sea_orm::DatabaseConnection;
use uuid::Uuid;

use consign_store::{
    config::DatabaseConfig,
    db::{connection, dao::NewProduct, dao::NewUser},
    error::AppError,
    services::ServiceContext,
};

async fn database() -> DatabaseConnection {
    let url = std::env::var("APP_DATABASE__URL").expect("APP_DATABASE__URL must be set");
    connection::connect(&DatabaseConfig::new(url))
        .await
        .expect("database should be reachable")
}

fn unique_email() -> String {
    format!("user-{}@SEOULAPPDEV.COM", Uuid::new_v4().simple())
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn duplicate_email_is_refused_by_the_store() {
    let db = database().await;
    let users = ServiceContext::new(&db).user();
    let email = unique_email();

    users
        .create_account(Some(email.as_str()), Some("Password123"), NewUser::default())
        .await
        .expect("first account");
    let err = users
        .create_account(Some(email.as_str()), Some("Password123"), NewUser::default())
        .await
        .expect_err("second account with the same email");

    assert!(matches!(err, AppError::IntegrityViolation(_)));
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn deleting_a_grade_clears_it_from_users() {
    let db = database().await;
    let services = ServiceContext::new(&db);
    let grade = services
        .identity_dao()
        .create_grade("일반회원")
        .await
        .expect("grade");
    let user = services
        .user()
        .create_account(
            Some(unique_email().as_str()),
            None,
            NewUser::new("kim", "01055525672", "남성").with_grade(grade.id),
        )
        .await
        .expect("account");
    assert_eq!(user.grade_id, Some(grade.id));

    services
        .identity_dao()
        .delete_grade(&grade.id)
        .await
        .expect("grade deleted");

    let reloaded = services
        .user()
        .find_by_id(&user.id)
        .await
        .expect("query")
        .expect("user survives");
    assert_eq!(reloaded.grade_id, None);
}

#[tokio::test]
#[ignore = "requires Postgres database"]
async fn repeated_repricing_leaves_one_current_price() {
    let db = database().await;
    let services = ServiceContext::new(&db);
    let brand = services
        .taxonomy_dao()
        .create_brand(&format!("brand-{}", Uuid::new_v4().simple()), "브랜드", "")
        .await
        .expect("brand");
    let catalog = services.catalog();
    let product = catalog
        .create_product(NewProduct::new("coat", brand.id, Decimal::new(150_000, 0)))
        .await
        .expect("product");

    for price in [120_000, 110_000, 99_000] {
        catalog
            .change_price(&product.id, Decimal::new(price, 0))
            .await
            .expect("reprice");
    }

    let history = catalog.price_history(&product.id).await.expect("history");
    assert_eq!(history.len(), 4);
    assert_eq!(history.iter().filter(|record| record.is_uptodate).count(), 1);
    assert_eq!(
        catalog.current_price(&product.id).await.expect("price"),
        Some(Decimal::new(99_000, 0))
    );
}
