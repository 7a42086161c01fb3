//! Persisted document and its entities.
//!
//! The whole desk state is one `Document` serialized as a single JSON
//! value. Field names are camelCase on the wire so the stored value
//! reads `trackingNumber`, `chargeAmount`, `createdAt`, ...
//!
//! Collections are most-recent-first: new entities are inserted at the
//! front. Lookups are linear scans; the collections are small.

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────
// Identifier aliases
// ────────────────────────────────────────────

/// Customer identifier, `C-...`.
pub type CustomerId = String;

/// Parcel primary key, `TRK-...`.
pub type TrackingNumber = String;

/// Invoice identifier, `INV-...`.
pub type InvoiceId = String;

// ────────────────────────────────────────────
// Entities
// ────────────────────────────────────────────

/// A registered customer. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    pub address: String,
}

/// One entry of a parcel's append-only tracking log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Local time, `YYYY-MM-DD HH:MM`.
    pub time: String,
    /// Event type code. Usually one of `TrackingEventType`, not enforced.
    #[serde(rename = "type")]
    pub event_type: String,
    pub remarks: String,
}

/// A shipment. Only `status` and `events` change after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parcel {
    pub tracking_number: TrackingNumber,
    pub sender: String,
    pub receiver: String,
    /// Weight in kg.
    pub weight: f64,
    /// Distance in km.
    pub distance: f64,
    /// Shipping price computed by the pricing rules at creation.
    pub charge_amount: u64,
    /// Type of the most recent event.
    pub status: String,
    pub events: Vec<TrackingEvent>,
}

impl Parcel {
    /// Most recent tracking event.
    pub fn last_event(&self) -> Option<&TrackingEvent> {
        self.events.last()
    }
}

/// Invoice payment state. Moves `Open -> Paid` only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum InvoiceStatus {
    Open,
    Paid,
}

impl std::fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "OPEN"),
            Self::Paid => write!(f, "PAID"),
        }
    }
}

/// A bill for one parcel.
///
/// `customer` and `amount` are copies taken from the parcel when the
/// invoice is generated; later parcel changes do not flow through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: InvoiceId,
    pub tracking_number: TrackingNumber,
    pub customer: String,
    pub amount: u64,
    pub status: InvoiceStatus,
    /// Local time, `YYYY-MM-DD HH:MM`.
    pub created_at: String,
}

// ────────────────────────────────────────────
// Session
// ────────────────────────────────────────────

/// Desk role picked at login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    Staff,
    Courier,
    Customer,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Staff => write!(f, "STAFF"),
            Self::Courier => write!(f, "COURIER"),
            Self::Customer => write!(f, "CUSTOMER"),
        }
    }
}

/// Current login. Stored under its own key, outside the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub username: String,
    pub role: Role,
}

// ────────────────────────────────────────────
// Document root
// ────────────────────────────────────────────

/// The single persisted root. Missing collections read as empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Document {
    pub customers: Vec<Customer>,
    pub parcels: Vec<Parcel>,
    pub invoices: Vec<Invoice>,
}

impl Document {
    /// Document substituted when storage is empty or unreadable:
    /// two seed customers, no parcels, no invoices.
    pub fn seed() -> Self {
        Self {
            customers: vec![
                Customer {
                    id: "C001".to_string(),
                    name: "王小明".to_string(),
                    phone: "0912345678".to_string(),
                    address: "台北市信義區...".to_string(),
                },
                Customer {
                    id: "C002".to_string(),
                    name: "陳大華".to_string(),
                    phone: "0987654321".to_string(),
                    address: "新北市板橋區...".to_string(),
                },
            ],
            parcels: Vec::new(),
            invoices: Vec::new(),
        }
    }

    pub fn parcel(&self, tracking_number: &str) -> Option<&Parcel> {
        self.parcels
            .iter()
            .find(|p| p.tracking_number == tracking_number)
    }

    pub fn parcel_mut(&mut self, tracking_number: &str) -> Option<&mut Parcel> {
        self.parcels
            .iter_mut()
            .find(|p| p.tracking_number == tracking_number)
    }

    pub fn invoice_mut(&mut self, invoice_id: &str) -> Option<&mut Invoice> {
        self.invoices.iter_mut().find(|i| i.id == invoice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_parcel() -> Parcel {
        Parcel {
            tracking_number: "TRK-1".to_string(),
            sender: "Alice".to_string(),
            receiver: "Bob".to_string(),
            weight: 2.5,
            distance: 40.0,
            charge_amount: 105,
            status: "CREATED".to_string(),
            events: vec![TrackingEvent {
                time: "2026-01-02 03:04".to_string(),
                event_type: "CREATED".to_string(),
                remarks: "order created".to_string(),
            }],
        }
    }

    #[test]
    fn test_seed_document() {
        let doc = Document::seed();
        assert_eq!(doc.customers.len(), 2);
        assert_eq!(doc.customers[0].id, "C001");
        assert_eq!(doc.customers[1].id, "C002");
        assert!(doc.parcels.is_empty());
        assert!(doc.invoices.is_empty());
    }

    #[test]
    fn test_parcel_wire_field_names() {
        let json = serde_json::to_value(sample_parcel()).unwrap();
        assert_eq!(json["trackingNumber"], "TRK-1");
        assert_eq!(json["chargeAmount"], 105);
        assert_eq!(json["events"][0]["type"], "CREATED");
        assert_eq!(json["events"][0]["time"], "2026-01-02 03:04");
    }

    #[test]
    fn test_invoice_status_wire_format() {
        let inv = Invoice {
            id: "INV-1".to_string(),
            tracking_number: "TRK-1".to_string(),
            customer: "Alice".to_string(),
            amount: 105,
            status: InvoiceStatus::Paid,
            created_at: "2026-01-02 03:04".to_string(),
        };
        let json = serde_json::to_value(&inv).unwrap();
        assert_eq!(json["status"], "PAID");
        assert_eq!(json["createdAt"], "2026-01-02 03:04");
    }

    #[test]
    fn test_session_role_parses_uppercase() {
        let s: Session =
            serde_json::from_str(r#"{"username":"amy","role":"COURIER"}"#).unwrap();
        assert_eq!(s.role, Role::Courier);
        assert_eq!(Role::default(), Role::Staff);
    }

    #[test]
    fn test_lookup_helpers() {
        let mut doc = Document::seed();
        doc.parcels.push(sample_parcel());
        assert!(doc.parcel("TRK-1").is_some());
        assert!(doc.parcel("TRK-2").is_none());
        doc.parcel_mut("TRK-1").unwrap().status = "PICKUP".to_string();
        assert_eq!(doc.parcel("TRK-1").unwrap().status, "PICKUP");
        assert!(doc.invoice_mut("INV-1").is_none());
    }

    #[test]
    fn test_missing_collections_read_as_empty() {
        let doc: Document = serde_json::from_str(
            r#"{"customers":[{"id":"C-REAL","name":"A","phone":"1","address":"x"}]}"#,
        )
        .unwrap();
        assert_eq!(doc.customers.len(), 1);
        assert!(doc.parcels.is_empty());
        assert!(doc.invoices.is_empty());
    }

    #[test]
    fn test_reads_source_shaped_json() {
        let raw = r#"{
            "customers": [{"id":"C001","name":"A","phone":"1","address":"x"}],
            "parcels": [{
                "trackingNumber":"TRK-AB121234","sender":"A","receiver":"B",
                "weight":1,"distance":10,"chargeAmount":30,"status":"CREATED",
                "events":[{"time":"2026-01-01 10:00","type":"CREATED","remarks":""}]
            }],
            "invoices": []
        }"#;
        let doc: Document = serde_json::from_str(raw).unwrap();
        assert_eq!(doc.parcels[0].charge_amount, 30);
        assert!((doc.parcels[0].weight - 1.0).abs() < f64::EPSILON);
        assert_eq!(doc.parcels[0].last_event().unwrap().event_type, "CREATED");
    }
}
