//! Firestore REST Client
//!
//! Thin document client over the Firestore v1 REST API: list / create /
//! patch / delete against per-user collections. Queries carry no server-side
//! filters; ordering is applied client-side by the callers.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::config::FirebaseConfig;
use crate::firebase::error::FirebaseError;

/// Firestore's tagged value union as sent over REST.
///
/// Note `integerValue` is string-encoded in the JSON representation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Value {
    StringValue(String),
    IntegerValue(String),
    DoubleValue(f64),
    BooleanValue(bool),
    TimestampValue(DateTime<Utc>),
    NullValue(()),
    MapValue(MapFields),
    ArrayValue(ArrayValues),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapFields {
    #[serde(default)]
    pub fields: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayValues {
    #[serde(default)]
    pub values: Vec<Value>,
}

impl Value {
    pub fn string(s: impl Into<String>) -> Self {
        Value::StringValue(s.into())
    }

    pub fn integer(n: i64) -> Self {
        Value::IntegerValue(n.to_string())
    }

    pub fn double(f: f64) -> Self {
        Value::DoubleValue(f)
    }

    pub fn timestamp(t: DateTime<Utc>) -> Self {
        Value::TimestampValue(t)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::StringValue(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::IntegerValue(s) => s.parse().ok(),
            Value::DoubleValue(f) if f.fract() == 0.0 => Some(*f as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::DoubleValue(f) => Some(*f),
            Value::IntegerValue(s) => s.parse().ok(),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::TimestampValue(t) => Some(*t),
            // Tolerate RFC 3339 strings written by other clients.
            Value::StringValue(s) => DateTime::parse_from_rfc3339(s)
                .ok()
                .map(|t| t.with_timezone(&Utc)),
            _ => None,
        }
    }
}

pub type Fields = BTreeMap<String, Value>;

/// A Firestore document: full resource name, fields, and the server-assigned
/// create/update times (which stand in for the old `serverTimestamp()` data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    pub name: String,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub update_time: Option<DateTime<Utc>>,
}

impl Document {
    /// Last path segment of the resource name.
    pub fn id(&self) -> &str {
        self.name.rsplit('/').next().unwrap_or(&self.name)
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn require<'a>(&'a self, field: &str) -> Result<&'a Value, FirebaseError> {
        self.get(field).ok_or_else(|| {
            FirebaseError::decode(format!("document {} is missing field `{}`", self.id(), field))
        })
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ListResponse {
    #[serde(default)]
    documents: Vec<Document>,
    next_page_token: Option<String>,
}

#[derive(Serialize)]
struct WriteBody<'a> {
    fields: &'a Fields,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

const PAGE_SIZE: u32 = 300;

#[derive(Clone)]
pub struct Firestore {
    http: reqwest::Client,
    root: String,
}

impl Firestore {
    pub fn new(config: &FirebaseConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            root: config.firestore_root(),
        }
    }

    /// Fetch every document in a collection, following pagination.
    pub async fn list(&self, token: &str, collection: &str) -> Result<Vec<Document>, FirebaseError> {
        let mut documents = Vec::new();
        let mut page_token: Option<String> = None;

        loop {
            let mut url = format!("{}/{}?pageSize={}", self.root, collection, PAGE_SIZE);
            if let Some(t) = &page_token {
                url.push_str("&pageToken=");
                url.push_str(&utf8_percent_encode(t, NON_ALPHANUMERIC).to_string());
            }

            let response = self.http.get(&url).bearer_auth(token).send().await?;
            let page: ListResponse = decode(response).await?;
            documents.extend(page.documents);

            match page.next_page_token {
                Some(t) if !t.is_empty() => page_token = Some(t),
                _ => break,
            }
        }

        Ok(documents)
    }

    /// Create a document with a server-assigned ID.
    pub async fn create(
        &self,
        token: &str,
        collection: &str,
        fields: &Fields,
    ) -> Result<Document, FirebaseError> {
        let url = format!("{}/{}", self.root, collection);
        let response = self
            .http
            .post(&url)
            .bearer_auth(token)
            .json(&WriteBody { fields })
            .send()
            .await?;
        decode(response).await
    }

    /// Overwrite the writable fields of an existing document.
    pub async fn patch(
        &self,
        token: &str,
        document_path: &str,
        fields: &Fields,
    ) -> Result<Document, FirebaseError> {
        let url = format!("{}/{}", self.root, document_path);
        let response = self
            .http
            .patch(&url)
            .bearer_auth(token)
            .json(&WriteBody { fields })
            .send()
            .await?;
        decode(response).await
    }

    pub async fn delete(&self, token: &str, document_path: &str) -> Result<(), FirebaseError> {
        let url = format!("{}/{}", self.root, document_path);
        let response = self.http.delete(&url).bearer_auth(token).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(api_error(status.as_u16(), response).await)
        }
    }
}

async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, FirebaseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response.json().await?)
    } else {
        Err(api_error(status.as_u16(), response).await)
    }
}

async fn api_error(status: u16, response: reqwest::Response) -> FirebaseError {
    let message = match response.json::<ApiErrorBody>().await {
        Ok(body) => body.error.message,
        Err(_) => format!("HTTP {}", status),
    };
    FirebaseError::Api { status, message }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn value_serializes_with_firestore_tags() {
        assert_eq!(
            serde_json::to_value(Value::string("Apple iPhone 15")).unwrap(),
            serde_json::json!({ "stringValue": "Apple iPhone 15" })
        );
        assert_eq!(
            serde_json::to_value(Value::integer(42)).unwrap(),
            serde_json::json!({ "integerValue": "42" })
        );
        assert_eq!(
            serde_json::to_value(Value::double(19.99)).unwrap(),
            serde_json::json!({ "doubleValue": 19.99 })
        );
    }

    #[test]
    fn value_accessors_bridge_numeric_encodings() {
        assert_eq!(Value::integer(7).as_i64(), Some(7));
        assert_eq!(Value::integer(7).as_f64(), Some(7.0));
        assert_eq!(Value::DoubleValue(3.0).as_i64(), Some(3));
        assert_eq!(Value::DoubleValue(3.5).as_i64(), None);
        assert_eq!(Value::string("x").as_i64(), None);
    }

    #[test]
    fn timestamp_value_round_trips() {
        let t = Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap();
        let json = serde_json::to_string(&Value::timestamp(t)).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back.as_timestamp(), Some(t));
    }

    #[test]
    fn timestamp_accessor_accepts_rfc3339_strings() {
        let v = Value::string("2025-06-01T12:30:00Z");
        let t = v.as_timestamp().unwrap();
        assert_eq!(t, Utc.with_ymd_and_hms(2025, 6, 1, 12, 30, 0).unwrap());
    }

    #[test]
    fn document_decodes_from_rest_shape() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/abc123",
            "fields": {
                "name": { "stringValue": "USB Cable" },
                "quantity": { "integerValue": "5" }
            },
            "createTime": "2025-06-01T00:00:00Z",
            "updateTime": "2025-06-02T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(doc.id(), "abc123");
        assert_eq!(doc.require("name").unwrap().as_str(), Some("USB Cable"));
        assert_eq!(doc.require("quantity").unwrap().as_i64(), Some(5));
        assert!(doc.require("price").is_err());
        assert!(doc.create_time.is_some());
    }

    #[test]
    fn missing_fields_map_defaults_to_empty() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/users/u1/memories/m1"
        }))
        .unwrap();
        assert!(doc.fields.is_empty());
        assert_eq!(doc.id(), "m1");
    }
}
