//! What happens to a referencing row when the row it points at is deleted.
//!
//! Every foreign key in the schema is listed here. The entity definitions
//! carry the same actions into the generated DDL; the tests below keep the
//! two in step.

use OnDelete::{Cascade, SetNull};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OnDelete {
    /// The referencing row is deleted too.
    Cascade,
    /// The referencing row stays, its foreign key becomes NULL.
    SetNull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeletePolicy {
    pub table: &'static str,
    pub column: &'static str,
    pub references: &'static str,
    pub on_delete: OnDelete,
}

const fn policy(
    table: &'static str,
    column: &'static str,
    references: &'static str,
    on_delete: OnDelete,
) -> DeletePolicy {
    DeletePolicy {
        table,
        column,
        references,
        on_delete,
    }
}

pub const DELETE_POLICIES: &[DeletePolicy] = &[
    policy("users", "grade_id", "user_grades", SetNull),
    policy("users", "social_platform_id", "social_platforms", SetNull),
    policy("addresses", "user_id", "users", Cascade),
    policy("users_brands", "user_id", "users", Cascade),
    policy("users_brands", "brand_id", "brands", Cascade),
    policy("sub_categories", "main_category_id", "main_categories", Cascade),
    policy("brand_categories", "brand_id", "brands", Cascade),
    policy("brand_categories", "main_category_id", "main_categories", Cascade),
    policy("products", "brand_id", "brands", SetNull),
    policy("products", "seller_id", "users", SetNull),
    policy("products", "product_grade_id", "product_grades", SetNull),
    policy("products", "status_id", "product_statuses", SetNull),
    policy("products", "sell_category_id", "sell_categories", SetNull),
    policy("product_categories", "product_id", "products", Cascade),
    policy("product_categories", "sub_category_id", "sub_categories", Cascade),
    policy("product_details", "product_id", "products", Cascade),
    policy("product_status_logs", "product_id", "products", Cascade),
    policy("product_status_logs", "status_id", "product_statuses", SetNull),
    policy("price_histories", "product_id", "products", Cascade),
    policy("images", "product_id", "products", Cascade),
    policy("product_tags", "product_id", "products", Cascade),
    policy("product_tags", "tag_id", "tags", Cascade),
    policy("product_keywords", "product_id", "products", Cascade),
    policy("product_keywords", "keyword_id", "keywords", Cascade),
    policy("related_products", "product_id", "products", Cascade),
    policy("related_products", "related_product_id", "products", Cascade),
    policy("consignments", "user_id", "users", SetNull),
    policy("consignments", "product_id", "products", Cascade),
    policy("consignments", "pickup_time_id", "pickup_times", SetNull),
    policy("consignments", "address_id", "addresses", SetNull),
    policy("sell_statistics", "brand_id", "brands", Cascade),
    policy("sell_statistics", "sub_category_id", "sub_categories", SetNull),
    policy("seller_reviews", "seller_id", "users", Cascade),
    policy("seller_reviews", "reviewer_id", "users", SetNull),
    policy("seller_reviews", "product_id", "products", SetNull),
];

pub fn policy_for(table: &str, column: &str) -> Option<&'static DeletePolicy> {
    DELETE_POLICIES
        .iter()
        .find(|policy| policy.table == table && policy.column == column)
}

/// Foreign keys pointing at `table`, i.e. the rows touched when one of its
/// rows is deleted.
pub fn referencing(table: &str) -> impl Iterator<Item = &'static DeletePolicy> + '_ {
    DELETE_POLICIES
        .iter()
        .filter(move |policy| policy.references == table)
}

#[cfg(test)]
mod tests {
    use sea_orm::{
        DbBackend, EntityName, EntityTrait, Schema, sea_query::PostgresQueryBuilder,
    };

    use super::{DELETE_POLICIES, OnDelete, policy_for, referencing};
    use crate::db::entities::*;

    /// (column, referenced table, delete action) for every foreign key in
    /// the entity's CREATE TABLE.
    fn foreign_keys<E: EntityTrait>(entity: E) -> Vec<(String, String, Option<OnDelete>)> {
        let sql = Schema::new(DbBackend::Postgres)
            .create_table_from_entity(entity)
            .to_string(PostgresQueryBuilder);
        sql.split("FOREIGN KEY (")
            .skip(1)
            .map(|fk| {
                let quoted = |text: &str| text.split('"').nth(1).unwrap_or_default().to_string();
                let column = quoted(fk);
                let references = fk.split("REFERENCES ").nth(1).map(quoted).unwrap_or_default();
                let on_delete = if fk.contains("ON DELETE CASCADE") {
                    Some(OnDelete::Cascade)
                } else if fk.contains("ON DELETE SET NULL") {
                    Some(OnDelete::SetNull)
                } else {
                    None
                };
                (column, references, on_delete)
            })
            .collect()
    }

    macro_rules! entity_foreign_keys {
        ($($module:ident),+ $(,)?) => {
            vec![$(($module::Entity.table_name(), foreign_keys($module::Entity))),+]
        };
    }

    #[test]
    fn every_policy_is_unique() {
        for (i, a) in DELETE_POLICIES.iter().enumerate() {
            for b in &DELETE_POLICIES[i + 1..] {
                assert!(
                    !(a.table == b.table && a.column == b.column),
                    "duplicate policy for {}.{}",
                    a.table,
                    a.column
                );
            }
        }
    }

    #[test]
    fn deleting_a_grade_keeps_its_users() {
        let grade = policy_for("users", "grade_id").expect("grade policy declared");
        assert_eq!(grade.on_delete, OnDelete::SetNull);
        assert_eq!(grade.references, user_grade::Entity.table_name());
    }

    #[test]
    fn deleting_a_product_reaches_its_history() {
        let tables: Vec<_> = referencing("products")
            .filter(|policy| policy.on_delete == OnDelete::Cascade)
            .map(|policy| policy.table)
            .collect();
        for table in ["price_histories", "product_status_logs", "product_details", "images"] {
            assert!(tables.contains(&table), "{table} should cascade");
        }
    }

    #[test]
    fn entity_foreign_keys_match_the_policy_table() {
        let entities = entity_foreign_keys![
            address,
            phone_authorization,
            social_platform,
            user,
            user_brand,
            user_grade,
            brand,
            brand_category,
            main_category,
            product_category,
            sell_category,
            sub_category,
            image,
            keyword,
            price_history,
            product,
            product_detail,
            product_grade,
            product_keyword,
            product_status,
            product_status_log,
            product_tag,
            related_product,
            tag,
            consignment,
            pickup_time,
            sell_statistic,
            seller_review,
        ];
        assert_eq!(entities.len(), 28);

        let mut seen = 0;
        for (table, keys) in entities {
            for (column, references, on_delete) in keys {
                let policy = policy_for(table, &column)
                    .unwrap_or_else(|| panic!("no policy for {table}.{column}"));
                assert_eq!(policy.references, references, "{table}.{column} target");
                assert_eq!(Some(policy.on_delete), on_delete, "{table}.{column} on delete");
                seen += 1;
            }
        }
        assert_eq!(seen, DELETE_POLICIES.len(), "policies without a foreign key");
    }
}
