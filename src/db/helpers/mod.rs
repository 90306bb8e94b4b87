use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

pub fn read_blob(conn: &Connection, key: &str) -> Result<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .with_context(|| format!("failed to read key '{key}'"))
}

pub fn write_blob(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key, value, Utc::now().to_rfc3339()],
    )
    .with_context(|| format!("failed to write key '{key}'"))?;
    Ok(())
}

/// Deserializes the collection under `key`; a missing key is an empty list.
pub fn read_collection<T: DeserializeOwned>(conn: &Connection, key: &str) -> Result<Vec<T>> {
    match read_blob(conn, key)? {
        Some(raw) => serde_json::from_str(&raw)
            .with_context(|| format!("stored collection '{key}' is not valid JSON")),
        None => Ok(Vec::new()),
    }
}

pub fn write_collection<T: Serialize>(conn: &Connection, key: &str, items: &[T]) -> Result<()> {
    let raw = serde_json::to_string(items)
        .with_context(|| format!("failed to serialize collection '{key}'"))?;
    write_blob(conn, key, &raw)
}

/// Loads the collection, applies `change`, and writes it back in one
/// transaction.
pub fn update_collection<T, R, F>(conn: &mut Connection, key: &str, change: F) -> Result<R>
where
    T: Serialize + DeserializeOwned,
    F: FnOnce(&mut Vec<T>) -> R,
{
    let tx = conn
        .transaction()
        .context("failed to open collection transaction")?;
    let mut items: Vec<T> = read_collection(&tx, key)?;
    let result = change(&mut items);
    write_collection(&tx, key, &items)?;
    tx.commit()
        .with_context(|| format!("failed to commit collection '{key}'"))?;
    Ok(result)
}
