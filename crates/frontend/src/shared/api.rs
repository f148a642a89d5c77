//! Resource client: one async function per backend operation.
//!
//! Reads degrade to an empty row set on any failure (the list views render a
//! placeholder, never an error page); mutations return `Err` with a
//! user-presentable message, backend `detail` verbatim when available.

use contracts::row::Row;
use gloo_net::http::{Request, Response};
use serde::Deserialize;

use crate::shared::api_utils::api_base;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

const TRANSPORT_FAILURE: &str = "could not reach the backend";

/// Failure notice text shown by the mutation forms,
/// e.g. `Update failed: not found`.
pub fn failure_message(operation: &str, detail: &str) -> String {
    format!("{} failed: {}", operation, detail)
}

// Backend `{detail}` when present, otherwise the HTTP status.
async fn failure_detail(response: Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(ErrorBody { detail: Some(detail) }) => detail,
        _ => format!("HTTP {}", status),
    }
}

/// `GET {base}/{table}/all`. Any failure surfaces as an empty list.
pub async fn list_all(table: &str) -> Vec<Row> {
    let url = format!("{}/{}/all", api_base(), table);
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<Vec<Row>>().await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("list {}: bad response body: {}", table, e);
                Vec::new()
            }
        },
        Ok(response) => {
            log::warn!("list {}: HTTP {}", table, response.status());
            Vec::new()
        }
        Err(e) => {
            log::warn!("list {}: {}", table, e);
            Vec::new()
        }
    }
}

/// `POST {base}/{table}/insert` with the full draft as the body.
pub async fn insert(table: &str, body: Row) -> Result<(), String> {
    let url = format!("{}/{}/insert", api_base(), table);
    let response = Request::post(&url)
        .json(&body)
        .map_err(|e| {
            log::error!("insert {}: serialize: {}", table, e);
            TRANSPORT_FAILURE.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("insert {}: {}", table, e);
            TRANSPORT_FAILURE.to_string()
        })?;

    if !response.ok() {
        return Err(failure_detail(response).await);
    }
    Ok(())
}

/// `PUT {base}/{table}/update/{pk}`; the body excludes the primary key.
pub async fn update(table: &str, pk_value: &str, body: Row) -> Result<(), String> {
    let url = format!("{}/{}/update/{}", api_base(), table, pk_value);
    let response = Request::put(&url)
        .json(&body)
        .map_err(|e| {
            log::error!("update {}: serialize: {}", table, e);
            TRANSPORT_FAILURE.to_string()
        })?
        .send()
        .await
        .map_err(|e| {
            log::error!("update {}: {}", table, e);
            TRANSPORT_FAILURE.to_string()
        })?;

    if !response.ok() {
        return Err(failure_detail(response).await);
    }
    Ok(())
}

/// `DELETE {base}/{table}/delete/{pk}`.
pub async fn remove(table: &str, pk_value: &str) -> Result<(), String> {
    let url = format!("{}/{}/delete/{}", api_base(), table, pk_value);
    let response = Request::delete(&url).send().await.map_err(|e| {
        log::error!("delete {}: {}", table, e);
        TRANSPORT_FAILURE.to_string()
    })?;

    if !response.ok() {
        return Err(failure_detail(response).await);
    }
    Ok(())
}

/// `GET {base}/query/{query_id}`. Empty result on any failure.
pub async fn run_query(query_id: &str) -> Vec<Row> {
    let url = format!("{}/query/{}", api_base(), query_id);
    match Request::get(&url).send().await {
        Ok(response) if response.ok() => match response.json::<Vec<Row>>().await {
            Ok(rows) => rows,
            Err(e) => {
                log::warn!("query {}: bad response body: {}", query_id, e);
                Vec::new()
            }
        },
        Ok(response) => {
            log::warn!("query {}: HTTP {}", query_id, response.status());
            Vec::new()
        }
        Err(e) => {
            log::warn!("query {}: {}", query_id, e);
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failure_message_format() {
        assert_eq!(
            failure_message("Update", "not found"),
            "Update failed: not found"
        );
        assert_eq!(
            failure_message("Insert", "HTTP 500"),
            "Insert failed: HTTP 500"
        );
    }
}
