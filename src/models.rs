//! Domain Models
//!
//! Stock items, memories, and memory events, together with their mapping to
//! and from Firestore documents. Creation/update timestamps come from the
//! documents' server-assigned `createTime`/`updateTime`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::firebase::error::FirebaseError;
use crate::firebase::firestore::{Document, Fields, Value};

/// The fixed stock categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Clothing,
    Food,
    Books,
    Tools,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Electronics,
        Category::Clothing,
        Category::Food,
        Category::Books,
        Category::Tools,
        Category::Other,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Electronics => "Electronics",
            Category::Clothing => "Clothing",
            Category::Food => "Food",
            Category::Books => "Books",
            Category::Tools => "Tools",
            Category::Other => "Other",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Category::Electronics => "⚡",
            Category::Clothing => "👕",
            Category::Food => "🍎",
            Category::Books => "📚",
            Category::Tools => "🛠️",
            Category::Other => "📦",
        }
    }

    pub fn parse(s: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.label() == s)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// An inventory entry. `supplier` and `description` use the empty string for
/// "not provided", as the original documents did.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItem {
    pub id: String,
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub min_stock: u32,
    pub price: f64,
    pub supplier: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl StockItem {
    /// Low stock holds iff quantity is at or below the configured minimum.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.min_stock
    }

    pub fn value(&self) -> f64 {
        self.quantity as f64 * self.price
    }

    pub fn from_document(doc: &Document) -> Result<StockItem, FirebaseError> {
        let category_name = doc
            .require("category")?
            .as_str()
            .ok_or_else(|| bad_field(doc, "category"))?;
        Ok(StockItem {
            id: doc.id().to_string(),
            name: string_field(doc, "name")?,
            category: Category::parse(category_name).unwrap_or(Category::Other),
            quantity: int_field(doc, "quantity")?,
            min_stock: int_field(doc, "minStock")?,
            price: doc
                .require("price")?
                .as_f64()
                .ok_or_else(|| bad_field(doc, "price"))?,
            supplier: optional_string_field(doc, "supplier"),
            description: optional_string_field(doc, "description"),
            created_at: doc.create_time,
            updated_at: doc.update_time,
        })
    }
}

/// The writable field set of a stock item, as collected by the add/edit form.
#[derive(Debug, Clone, PartialEq)]
pub struct StockItemInput {
    pub name: String,
    pub category: Category,
    pub quantity: u32,
    pub min_stock: u32,
    pub price: f64,
    pub supplier: String,
    pub description: String,
}

impl StockItemInput {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::string(self.name.trim()));
        fields.insert("category".into(), Value::string(self.category.label()));
        fields.insert("quantity".into(), Value::integer(self.quantity as i64));
        fields.insert("minStock".into(), Value::integer(self.min_stock as i64));
        fields.insert("price".into(), Value::double(self.price));
        fields.insert("supplier".into(), Value::string(self.supplier.trim()));
        fields.insert("description".into(), Value::string(self.description.trim()));
        fields
    }
}

/// A journal entry owning a nested event timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Memory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl Memory {
    pub fn from_document(doc: &Document) -> Result<Memory, FirebaseError> {
        Ok(Memory {
            id: doc.id().to_string(),
            name: string_field(doc, "name")?,
            description: optional_string_field(doc, "description"),
            created_at: doc.create_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MemoryInput {
    pub name: String,
    pub description: String,
}

impl MemoryInput {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("name".into(), Value::string(self.name.trim()));
        fields.insert("description".into(), Value::string(self.description.trim()));
        fields
    }
}

/// A dated entry in a memory's timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MemoryEvent {
    pub id: String,
    pub date: DateTime<Utc>,
    pub description: String,
    pub created_at: Option<DateTime<Utc>>,
}

impl MemoryEvent {
    pub fn from_document(doc: &Document) -> Result<MemoryEvent, FirebaseError> {
        Ok(MemoryEvent {
            id: doc.id().to_string(),
            date: doc
                .require("date")?
                .as_timestamp()
                .ok_or_else(|| bad_field(doc, "date"))?,
            description: optional_string_field(doc, "description"),
            created_at: doc.create_time,
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EventInput {
    pub date: DateTime<Utc>,
    pub description: String,
}

impl EventInput {
    pub fn to_fields(&self) -> Fields {
        let mut fields = Fields::new();
        fields.insert("date".into(), Value::timestamp(self.date));
        fields.insert("description".into(), Value::string(self.description.trim()));
        fields
    }
}

/// Where an event's date sits relative to today; drives timeline styling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DayStatus {
    Past,
    Today,
    Upcoming,
}

pub fn day_status(date: NaiveDate, today: NaiveDate) -> DayStatus {
    match date.cmp(&today) {
        std::cmp::Ordering::Less => DayStatus::Past,
        std::cmp::Ordering::Equal => DayStatus::Today,
        std::cmp::Ordering::Greater => DayStatus::Upcoming,
    }
}

// ========================
// Field decoding helpers
// ========================

fn bad_field(doc: &Document, field: &str) -> FirebaseError {
    FirebaseError::decode(format!(
        "document {} has an unexpected type for `{}`",
        doc.id(),
        field
    ))
}

fn string_field(doc: &Document, field: &str) -> Result<String, FirebaseError> {
    doc.require(field)?
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| bad_field(doc, field))
}

/// Missing and non-string values both read as empty.
fn optional_string_field(doc: &Document, field: &str) -> String {
    doc.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn int_field(doc: &Document, field: &str) -> Result<u32, FirebaseError> {
    doc.require(field)?
        .as_i64()
        .and_then(|n| u32::try_from(n).ok())
        .ok_or_else(|| bad_field(doc, field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stock_doc() -> Document {
        serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/users/u1/inventory/item1",
            "fields": {
                "name": { "stringValue": "Monitor" },
                "category": { "stringValue": "Electronics" },
                "quantity": { "integerValue": "5" },
                "minStock": { "integerValue": "10" },
                "price": { "doubleValue": 199.5 },
                "supplier": { "stringValue": "" },
                "description": { "stringValue": "27 inch" }
            },
            "createTime": "2025-06-01T08:00:00Z",
            "updateTime": "2025-06-01T08:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn stock_item_decodes_and_flags_low_stock() {
        let item = StockItem::from_document(&stock_doc()).unwrap();
        assert_eq!(item.id, "item1");
        assert_eq!(item.category, Category::Electronics);
        assert!(item.is_low_stock());
        assert_eq!(item.value(), 5.0 * 199.5);
        assert!(item.supplier.is_empty());
    }

    #[test]
    fn integer_encoded_price_is_accepted() {
        let mut doc = stock_doc();
        doc.fields.insert("price".into(), Value::integer(200));
        let item = StockItem::from_document(&doc).unwrap();
        assert_eq!(item.price, 200.0);
    }

    #[test]
    fn unknown_category_falls_back_to_other() {
        let mut doc = stock_doc();
        doc.fields.insert("category".into(), Value::string("Gadgets"));
        let item = StockItem::from_document(&doc).unwrap();
        assert_eq!(item.category, Category::Other);
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let mut doc = stock_doc();
        doc.fields.remove("quantity");
        assert!(StockItem::from_document(&doc).is_err());
    }

    #[test]
    fn stock_input_trims_and_encodes() {
        let input = StockItemInput {
            name: "  Cable  ".into(),
            category: Category::Tools,
            quantity: 3,
            min_stock: 1,
            price: 9.99,
            supplier: " Acme ".into(),
            description: String::new(),
        };
        let fields = input.to_fields();
        assert_eq!(fields["name"].as_str(), Some("Cable"));
        assert_eq!(fields["category"].as_str(), Some("Tools"));
        assert_eq!(fields["quantity"].as_i64(), Some(3));
        assert_eq!(fields["supplier"].as_str(), Some("Acme"));
    }

    #[test]
    fn category_parse_matches_labels() {
        for category in Category::ALL {
            assert_eq!(Category::parse(category.label()), Some(category));
        }
        assert_eq!(Category::parse("Gadgets"), None);
    }

    #[test]
    fn event_decodes_date_and_optional_description() {
        let doc: Document = serde_json::from_value(serde_json::json!({
            "name": "projects/p/databases/(default)/documents/users/u1/memories/m1/events/e1",
            "fields": {
                "date": { "timestampValue": "2025-07-04T00:00:00Z" }
            },
            "createTime": "2025-07-01T00:00:00Z"
        }))
        .unwrap();
        let event = MemoryEvent::from_document(&doc).unwrap();
        assert_eq!(event.id, "e1");
        assert!(event.description.is_empty());
    }

    #[test]
    fn day_status_buckets() {
        let today = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
        assert_eq!(
            day_status(NaiveDate::from_ymd_opt(2025, 6, 14).unwrap(), today),
            DayStatus::Past
        );
        assert_eq!(day_status(today, today), DayStatus::Today);
        assert_eq!(
            day_status(NaiveDate::from_ymd_opt(2025, 6, 16).unwrap(), today),
            DayStatus::Upcoming
        );
    }
}
