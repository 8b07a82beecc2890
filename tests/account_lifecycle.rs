use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase};
use uuid::Uuid;

use consign_store::{
    config::AccountsConfig,
    db::dao::NewUser,
    error::AppError,
    services::ServiceContext,
    test_helpers::{ts, user_model, user_model_with_password},
};

fn services(db: &DatabaseConnection, max_login_failures: i32) -> ServiceContext {
    ServiceContext::with_accounts_config(
        db,
        AccountsConfig {
            max_login_failures,
            ..AccountsConfig::default()
        },
    )
}

#[tokio::test]
async fn korean_signup_keeps_local_part_and_checks_password() {
    let id = Uuid::new_v4();
    let mut stored = user_model_with_password(id, "Test@seoulappdev.com", "Password123");
    stored.name = "김민수".to_string();
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[stored]])
        .into_connection();

    let user = services(&db, 5)
        .user()
        .create_account(
            Some("Test@SEOULAPPDEV.COM"),
            Some("Password123"),
            NewUser::new("김민수", "01055525672", "남성"),
        )
        .await
        .expect("account should be created");

    assert_eq!(user.email, "Test@seoulappdev.com");
    assert!(user.check_password("Password123"));
    assert!(!user.is_staff);
    assert!(!user.is_superuser);
}

#[tokio::test]
async fn empty_email_is_rejected() {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();

    let err = services(&db, 5)
        .user()
        .create_account(Some(""), Some("Password123"), NewUser::default())
        .await
        .expect_err("empty email");

    assert!(matches!(err, AppError::InvalidArgument(_)));
    assert!(db.into_transaction_log().is_empty());
}

#[tokio::test]
async fn second_failure_locks_with_threshold_two() {
    let id = Uuid::new_v4();
    let mut after_first = user_model(id, "kim@example.com");
    after_first.login_fail_count = 1;
    let mut locked = after_first.clone();
    locked.login_fail_count = 0;
    locked.is_lock = true;
    locked.lock_count = 1;
    locked.latest_try_login_date = Some(ts());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[after_first], [locked]])
        .into_connection();

    let user = services(&db, 2)
        .user()
        .record_login_failure(&id)
        .await
        .expect("failure should be recorded");

    assert!(user.is_lock);
    assert_eq!(user.lock_count, 1);
    assert_eq!(user.login_fail_count, 0);

    let sql = format!("{:?}", db.into_transaction_log());
    assert!(sql.contains("FOR UPDATE"));
    assert!(sql.contains("lock_count"));
}

#[tokio::test]
async fn successful_login_resets_the_failure_count() {
    let id = Uuid::new_v4();
    let mut failing = user_model(id, "kim@example.com");
    failing.login_fail_count = 3;
    let mut logged_in = failing.clone();
    logged_in.login_fail_count = 0;
    logged_in.last_login = Some(ts());

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[failing], [logged_in]])
        .into_connection();

    let user = services(&db, 5)
        .user()
        .record_login_success(&id)
        .await
        .expect("login should be recorded");

    assert_eq!(user.login_fail_count, 0);
    assert!(user.last_login.is_some());

    let sql = format!("{:?}", db.into_transaction_log());
    assert!(sql.contains("last_login"));
    assert!(sql.contains("recent_login"), "modified timestamps are refreshed");
}

#[tokio::test]
async fn set_password_none_makes_the_account_passwordless() {
    let id = Uuid::new_v4();
    let before = user_model_with_password(id, "kim@example.com", "Password123");
    let mut after = before.clone();
    after.password = "!cleared".to_string();

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([[before], [after]])
        .into_connection();

    let user = services(&db, 5)
        .user()
        .set_password(&id, None)
        .await
        .expect("update should succeed");

    assert!(!user.has_usable_password());
    assert!(!user.check_password("Password123"));
}
