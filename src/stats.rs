//! Inventory Statistics & Filtering
//!
//! Linear scans over the snapshot list: dashboard aggregates and the
//! composable stock-list filter. Everything here is pure so the display
//! invariants stay testable.

use chrono::{DateTime, Utc};

use crate::models::{Category, Memory, MemoryEvent, StockItem};

/// Aggregates shown on the dashboard, recomputed on every snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    pub total_items: usize,
    pub low_stock_count: usize,
    pub total_value: f64,
    pub unique_categories: usize,
    /// Counts aligned with `Category::ALL`.
    pub category_counts: [usize; Category::ALL.len()],
}

impl InventoryStats {
    pub fn compute(items: &[StockItem]) -> InventoryStats {
        let mut category_counts = [0usize; Category::ALL.len()];
        let mut low_stock_count = 0;
        let mut total_value = 0.0;

        for item in items {
            if item.is_low_stock() {
                low_stock_count += 1;
            }
            total_value += item.value();
            if let Some(slot) = Category::ALL.iter().position(|c| *c == item.category) {
                category_counts[slot] += 1;
            }
        }

        InventoryStats {
            total_items: items.len(),
            low_stock_count,
            total_value,
            unique_categories: category_counts.iter().filter(|n| **n > 0).count(),
            category_counts,
        }
    }

    pub fn count_for(&self, category: Category) -> usize {
        Category::ALL
            .iter()
            .position(|c| *c == category)
            .map(|slot| self.category_counts[slot])
            .unwrap_or(0)
    }
}

/// Stock-list filter state. The three predicates are independent and
/// compose as an AND.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StockFilter {
    pub category: Option<Category>,
    pub search: String,
    pub low_stock_only: bool,
}

impl StockFilter {
    pub fn is_active(&self) -> bool {
        self.category.is_some() || !self.search.trim().is_empty() || self.low_stock_only
    }

    pub fn matches(&self, item: &StockItem) -> bool {
        if let Some(category) = self.category {
            if item.category != category {
                return false;
            }
        }
        if self.low_stock_only && !item.is_low_stock() {
            return false;
        }
        let needle = self.search.trim().to_lowercase();
        if !needle.is_empty() {
            let in_name = item.name.to_lowercase().contains(&needle);
            let in_category = item.category.label().to_lowercase().contains(&needle);
            let in_supplier = item.supplier.to_lowercase().contains(&needle);
            if !(in_name || in_category || in_supplier) {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, items: &[StockItem]) -> Vec<StockItem> {
        items.iter().filter(|i| self.matches(i)).cloned().collect()
    }
}

// ========================
// Display ordering
// ========================

fn newest_first(a: Option<DateTime<Utc>>, b: Option<DateTime<Utc>>) -> std::cmp::Ordering {
    b.cmp(&a)
}

pub fn sort_items_newest_first(items: &mut [StockItem]) {
    items.sort_by(|a, b| newest_first(a.created_at, b.created_at));
}

pub fn sort_memories_newest_first(memories: &mut [Memory]) {
    memories.sort_by(|a, b| newest_first(a.created_at, b.created_at));
}

/// Events display by their own date, most recent first.
pub fn sort_events_by_date_desc(events: &mut [MemoryEvent]) {
    events.sort_by(|a, b| b.date.cmp(&a.date));
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn item(name: &str, category: Category, quantity: u32, min_stock: u32, price: f64) -> StockItem {
        StockItem {
            id: name.to_lowercase(),
            name: name.to_string(),
            category,
            quantity,
            min_stock,
            price,
            supplier: String::new(),
            description: String::new(),
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn low_stock_count_uses_per_item_threshold() {
        // items [{qty:5,min:10},{qty:20,min:5}] -> low-stock 1, total 2
        let items = vec![
            item("A", Category::Food, 5, 10, 1.0),
            item("B", Category::Food, 20, 5, 2.0),
        ];
        let stats = InventoryStats::compute(&items);
        assert_eq!(stats.total_items, 2);
        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn total_value_is_sum_of_quantity_times_price() {
        let items = vec![
            item("A", Category::Books, 3, 0, 10.0),
            item("B", Category::Tools, 2, 0, 2.5),
        ];
        let stats = InventoryStats::compute(&items);
        assert_eq!(stats.total_value, 35.0);
    }

    #[test]
    fn unique_categories_counts_non_empty_ones() {
        let items = vec![
            item("A", Category::Books, 1, 0, 1.0),
            item("B", Category::Books, 1, 0, 1.0),
            item("C", Category::Tools, 1, 0, 1.0),
        ];
        let stats = InventoryStats::compute(&items);
        assert_eq!(stats.unique_categories, 2);
        assert_eq!(stats.count_for(Category::Books), 2);
        assert_eq!(stats.count_for(Category::Tools), 1);
        assert_eq!(stats.count_for(Category::Food), 0);
    }

    #[test]
    fn boundary_quantity_equal_to_min_is_low_stock() {
        let stats = InventoryStats::compute(&[item("A", Category::Other, 10, 10, 1.0)]);
        assert_eq!(stats.low_stock_count, 1);
    }

    #[test]
    fn filters_compose_as_and() {
        let items = vec![
            item("Red Shirt", Category::Clothing, 2, 5, 8.0),
            item("Blue Shirt", Category::Clothing, 50, 5, 8.0),
            item("Red Apple", Category::Food, 1, 5, 0.5),
        ];

        let filter = StockFilter {
            category: Some(Category::Clothing),
            search: "red".into(),
            low_stock_only: true,
        };
        let hits = filter.apply(&items);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "Red Shirt");
    }

    #[test]
    fn search_matches_name_category_and_supplier() {
        let mut supplied = item("Widget", Category::Other, 1, 0, 1.0);
        supplied.supplier = "Tech Distributor Inc.".into();
        let items = vec![supplied, item("Laptop", Category::Electronics, 1, 0, 1.0)];

        let by_supplier = StockFilter {
            search: "distributor".into(),
            ..Default::default()
        };
        assert_eq!(by_supplier.apply(&items).len(), 1);

        let by_category = StockFilter {
            search: "electron".into(),
            ..Default::default()
        };
        assert_eq!(by_category.apply(&items)[0].name, "Laptop");
    }

    #[test]
    fn empty_filter_keeps_everything() {
        let items = vec![item("A", Category::Food, 0, 0, 0.0)];
        let filter = StockFilter::default();
        assert!(!filter.is_active());
        assert_eq!(filter.apply(&items).len(), 1);
    }

    #[test]
    fn items_sort_newest_first_with_missing_timestamps_last() {
        let t1 = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();
        let t2 = Utc.with_ymd_and_hms(2025, 2, 1, 0, 0, 0).unwrap();
        let mut items = vec![
            StockItem { created_at: None, ..item("None", Category::Other, 0, 0, 0.0) },
            StockItem { created_at: Some(t1), ..item("Old", Category::Other, 0, 0, 0.0) },
            StockItem { created_at: Some(t2), ..item("New", Category::Other, 0, 0, 0.0) },
        ];
        sort_items_newest_first(&mut items);
        assert_eq!(items[0].name, "New");
        assert_eq!(items[1].name, "Old");
        assert_eq!(items[2].name, "None");
    }
}
