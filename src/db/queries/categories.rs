use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqliteExecutor};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

pub async fn get_all_categories<'e>(
    executor: impl SqliteExecutor<'e>,
) -> sqlx::Result<Vec<Category>> {
    sqlx::query_as::<_, Category>(
        r#"
SELECT id, name
FROM categories
ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}

pub async fn get_category<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> sqlx::Result<Category> {
    sqlx::query_as::<_, Category>(
        r#"
        SELECT id, name FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .fetch_one(executor)
    .await
}

pub async fn create_category<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
    name: &str,
) -> sqlx::Result<i64> {
    let id = sqlx::query(
        r#"
INSERT INTO categories (id, name) VALUES (?1, ?2)
        "#,
    )
    .bind(id)
    .bind(name)
    .execute(executor)
    .await?
    .last_insert_rowid();

    Ok(id)
}

pub async fn update_category<'e>(
    executor: impl SqliteExecutor<'e>,
    category: &Category,
) -> sqlx::Result<()> {
    sqlx::query(
        r#"
        UPDATE categories SET name=?1 WHERE categories.id = ?2
        "#,
    )
    .bind(&category.name)
    .bind(category.id)
    .execute(executor)
    .await?;
    Ok(())
}

pub async fn delete_category<'e>(
    executor: impl SqliteExecutor<'e>,
    id: i64,
) -> sqlx::Result<()> {
    let result = sqlx::query(
        r#"
        DELETE FROM categories WHERE categories.id = ?1
        "#,
    )
    .bind(id)
    .execute(executor)
    .await?;
    if result.rows_affected() == 0 {
        return Err(sqlx::Error::RowNotFound);
    }
    Ok(())
}

/// Inserts unknown categories and renames known ones. Nothing is removed, so
/// questions can be imported against the new set before
/// [`remove_categories_except`] drops the stale ones.
pub async fn upsert_categories(
    conn: &mut SqliteConnection,
    categories: &[Category],
) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = get_all_categories(&mut *conn)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    for category in categories {
        if existing_ids.contains(&category.id) {
            update_category(&mut *conn, category).await?;
        } else {
            create_category(&mut *conn, category.id, &category.name).await?;
        }
    }
    Ok(())
}

pub async fn remove_categories_except(
    conn: &mut SqliteConnection,
    keep: &HashSet<i64>,
) -> sqlx::Result<()> {
    let existing_ids: HashSet<i64> = get_all_categories(&mut *conn)
        .await?
        .iter()
        .map(|c| c.id)
        .collect();
    for id in existing_ids.difference(keep) {
        tracing::debug!(category_id = id, "removing stale category");
        delete_category(&mut *conn, *id).await?;
    }
    Ok(())
}
