//! Relational home for schemaless documents: one row per record, the record
//! itself in `body`.

use chrono::Utc;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelTrait, DatabaseConnection, QueryFilter, QueryOrder, QuerySelect, Set};
use uuid::Uuid;

use crate::errors::ModelError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "document")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub collection: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub body: Json,
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

pub async fn insert(db: &DatabaseConnection, collection: &str, body: Json) -> Result<Model, ModelError> {
    let am = ActiveModel {
        id: Set(Uuid::new_v4()),
        collection: Set(collection.to_string()),
        body: Set(body),
        created_at: Set(Utc::now().into()),
    };
    Ok(am.insert(db).await?)
}

/// Every document of `collection`, oldest first.
pub async fn list_by_collection(db: &DatabaseConnection, collection: &str) -> Result<Vec<Model>, ModelError> {
    let rows = Entity::find()
        .filter(Column::Collection.eq(collection))
        .order_by_asc(Column::CreatedAt)
        .order_by_asc(Column::Id)
        .all(db)
        .await?;
    Ok(rows)
}

/// Distinct collection names that hold at least one document, sorted.
pub async fn collection_names(db: &DatabaseConnection, limit: u64) -> Result<Vec<String>, ModelError> {
    let names = Entity::find()
        .select_only()
        .column(Column::Collection)
        .distinct()
        .order_by_asc(Column::Collection)
        .limit(limit)
        .into_tuple::<String>()
        .all(db)
        .await?;
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_and_migrate, test_database_url};
    use configs::DatabaseConfig;

    #[tokio::test]
    async fn insert_then_list_in_collection() -> anyhow::Result<()> {
        let Some(url) = test_database_url() else {
            eprintln!("skip: no postgres DATABASE_URL");
            return Ok(());
        };
        let db = connect_and_migrate(&url, &DatabaseConfig::default()).await?;
        let collection = format!("test_{}", Uuid::new_v4().simple());

        let a = insert(&db, &collection, serde_json::json!({"n": 1})).await?;
        let b = insert(&db, &collection, serde_json::json!({"n": 2})).await?;
        assert_ne!(a.id, b.id);

        let rows = list_by_collection(&db, &collection).await?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].body["n"], 1);

        let names = collection_names(&db, 1000).await?;
        assert!(names.contains(&collection));

        Entity::delete_many().filter(Column::Collection.eq(collection)).exec(&db).await?;
        Ok(())
    }
}
