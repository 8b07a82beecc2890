//! Model fixtures for `MockDatabase`-backed tests.

use chrono::{FixedOffset, TimeZone};
use rust_decimal::Decimal;
use sea_orm::entity::prelude::DateTimeWithTimeZone;
use uuid::Uuid;

use crate::auth::password::hash_password;
use crate::db::entities::{price_history, product, product_status_log, user};

pub fn ts() -> DateTimeWithTimeZone {
    FixedOffset::east_opt(9 * 3600)
        .expect("offset should be valid")
        .with_ymd_and_hms(2026, 1, 1, 0, 0, 0)
        .single()
        .expect("timestamp should be valid")
}

pub fn user_model(id: Uuid, email: &str) -> user::Model {
    let now = ts();
    user::Model {
        id,
        date_created: now,
        recent_login: now,
        sleep_expiration_date: now,
        email: email.to_string(),
        password: "!unusable".to_string(),
        name: "kim".to_string(),
        phone_number: "01055525672".to_string(),
        grade_id: None,
        social_platform_id: None,
        social_login_id: String::new(),
        point: 0,
        purchase_count: 0,
        purchase_total: Decimal::ZERO,
        sell_total: Decimal::ZERO,
        last_login: None,
        is_approved: true,
        coupon: "0".to_string(),
        gender: "남성".to_string(),
        bank_account: String::new(),
        login_fail_count: 0,
        is_lock: false,
        latest_try_login_date: None,
        lock_count: 0,
        is_deleted: false,
        date_deleted: None,
        is_active: true,
        is_staff: false,
        is_superuser: false,
    }
}

/// A user row whose stored password is a real hash of `raw`.
pub fn user_model_with_password(id: Uuid, email: &str, raw: &str) -> user::Model {
    let mut model = user_model(id, email);
    model.password = hash_password(raw).expect("hashing should succeed");
    model
}

pub fn product_model(id: Uuid, brand_id: Uuid) -> product::Model {
    let now = ts();
    product::Model {
        id,
        created_at: now,
        updated_at: now,
        name: "trench coat".to_string(),
        brand_id: Some(brand_id),
        seller_id: None,
        product_grade_id: None,
        status_id: None,
        sell_category_id: None,
        price: Decimal::new(150_000, 0),
        view_count: 0,
        like_count: 0,
        is_sold: false,
        is_deleted: false,
    }
}

pub fn price_model(product_id: Uuid, price: Decimal, is_uptodate: bool) -> price_history::Model {
    let now = ts();
    price_history::Model {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        product_id,
        price,
        is_uptodate,
    }
}

pub fn status_log_model(
    product_id: Uuid,
    status_id: Uuid,
    is_valid: bool,
) -> product_status_log::Model {
    let now = ts();
    product_status_log::Model {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        product_id,
        status_id: Some(status_id),
        is_valid,
    }
}
