//! Supply orders shown on the Communication Centre orders page

use crate::core::{ConfigurationError, FieldKind, FieldValue, Record, RecordSchema, SortDirection};
use crate::define_category;
use crate::entities::CatalogRecord;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

define_category! {
    /// Whether stock is coming in to or going out of the unit
    pub enum OrderType {
        Incoming => "incoming",
        Outgoing => "outgoing",
    }
}

define_category! {
    /// Fulfilment state of an order
    pub enum OrderStatus {
        Pending => "pending",
        InProgress => "in-progress",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

/// One row of the orders table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    #[serde(rename = "type")]
    pub order_type: OrderType,
    pub item: String,
    pub quantity: u32,
    pub price: f64,
    pub status: OrderStatus,
    /// Order date as `YYYY-MM-DD`
    pub date: String,
    pub operator: String,
}

impl Order {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        order_type: OrderType,
        item: impl Into<String>,
        quantity: u32,
        price: f64,
        status: OrderStatus,
        date: impl Into<String>,
        operator: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            order_type,
            item: item.into(),
            quantity,
            price,
            status,
            date: date.into(),
            operator: operator.into(),
        }
    }

    /// Parsed order date, if well-formed
    pub fn order_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, crate::core::field::DATE_FORMAT).ok()
    }
}

impl Record for Order {
    fn record_type() -> &'static str {
        "order"
    }

    fn id(&self) -> &str {
        &self.id
    }

    fn field_value(&self, field: &str) -> Option<FieldValue> {
        match field {
            "type" => Some(self.order_type.into()),
            "item" => Some(FieldValue::String(self.item.clone())),
            "quantity" => Some(FieldValue::Integer(i64::from(self.quantity))),
            "price" => Some(FieldValue::Float(self.price)),
            "status" => Some(self.status.into()),
            "date" => Some(FieldValue::String(self.date.clone())),
            "operator" => Some(FieldValue::String(self.operator.clone())),
            _ => None,
        }
    }
}

impl CatalogRecord for Order {
    fn list_name() -> &'static str {
        "orders"
    }

    fn schema() -> Result<RecordSchema, ConfigurationError> {
        RecordSchema::builder(Self::record_type())
            .searchable("item")
            .searchable("operator")
            .category::<OrderType>("type")
            .category::<OrderStatus>("status")
            .sortable("type", FieldKind::Category)
            .sortable("item", FieldKind::Text)
            .sortable("quantity", FieldKind::Number)
            .sortable("price", FieldKind::Number)
            .sortable("status", FieldKind::Category)
            .sortable("date", FieldKind::Date)
            .sortable("operator", FieldKind::Text)
            .default_sort("date", SortDirection::Descending)
            .build()
    }

    fn fixtures() -> Vec<Self> {
        use OrderStatus::*;
        use OrderType::*;

        vec![
            Order::new("001", Outgoing, "Tactical Vest", 1, 199.99, Completed, "2023-07-15", "Cpt. Sarah Johnson"),
            Order::new("002", Incoming, "Night Vision Goggles", 2, 599.99, InProgress, "2023-07-18", "Lt. Mike Chen"),
            Order::new("003", Outgoing, "Combat Boots", 1, 149.99, Pending, "2023-07-20", "Sgt. Alex Rodriguez"),
            Order::new("004", Incoming, "Tactical Gloves", 3, 89.97, Completed, "2023-07-22", "Pvt. Emma Watson"),
            Order::new("005", Outgoing, "Rifle Scope", 1, 349.99, InProgress, "2023-07-25", "Maj. Tom Hardy"),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Query, QueryEngine};

    fn ids(rows: &[&Order]) -> Vec<String> {
        rows.iter().map(|o| o.id.clone()).collect()
    }

    #[test]
    fn test_schema_builds() {
        let schema = Order::schema().unwrap();
        assert_eq!(
            schema.searchable_fields().collect::<Vec<_>>(),
            vec!["item", "operator"]
        );
        assert_eq!(schema.category_field("status").unwrap().values.len(), 4);
    }

    #[test]
    fn test_default_is_most_recent_first() {
        let orders = Order::fixtures();
        let engine = QueryEngine::new(Order::schema().unwrap());
        let rows = engine.run(&orders, &Query::new()).unwrap();
        assert_eq!(ids(&rows), vec!["005", "004", "003", "002", "001"]);
    }

    #[test]
    fn test_filter_by_type_and_search_operator() {
        let orders = Order::fixtures();
        let engine = QueryEngine::new(Order::schema().unwrap());

        let rows = engine
            .run(&orders, &Query::new().filter("type", "incoming"))
            .unwrap();
        assert_eq!(ids(&rows), vec!["004", "002"]);

        let rows = engine.run(&orders, &Query::new().search("sgt.")).unwrap();
        assert_eq!(ids(&rows), vec!["003"]);
    }

    #[test]
    fn test_sort_by_price_is_numeric() {
        let orders = Order::fixtures();
        let engine = QueryEngine::new(Order::schema().unwrap());
        let rows = engine
            .run(&orders, &Query::new().sort("price", SortDirection::Ascending))
            .unwrap();
        assert_eq!(ids(&rows), vec!["004", "003", "001", "005", "002"]);
    }

    #[test]
    fn test_sort_by_type_groups_with_id_tie_break() {
        let orders = Order::fixtures();
        let engine = QueryEngine::new(Order::schema().unwrap());
        let rows = engine.run(&orders, &Query::new().sort_by("type")).unwrap();
        assert_eq!(ids(&rows), vec!["002", "004", "001", "003", "005"]);
    }

    #[test]
    fn test_header_click_toggles() {
        let schema = Order::schema().unwrap();
        let mut query = Query::new();

        // Currently sorted by date descending; clicking date flips it
        query.toggle_sort("date", &schema);
        assert_eq!(query.sort_direction, Some(SortDirection::Ascending));

        query.toggle_sort("date", &schema);
        assert_eq!(query.sort_direction, Some(SortDirection::Descending));

        // Another column starts ascending
        query.toggle_sort("item", &schema);
        assert_eq!(query.sort_key.as_deref(), Some("item"));
        assert_eq!(query.sort_direction, Some(SortDirection::Ascending));
    }

    #[test]
    fn test_wire_format() {
        let order = &Order::fixtures()[1];
        let json = serde_json::to_value(order).unwrap();
        assert_eq!(json["type"], "incoming");
        assert_eq!(json["status"], "in-progress");
        assert_eq!(order.order_date(), NaiveDate::from_ymd_opt(2023, 7, 18));
    }
}
