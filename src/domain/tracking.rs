//! Tracking event vocabulary.
//!
//! Parcels store event types as plain strings. This enum is the
//! recognized set; the store only enforces it in strict mode.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::StoreError;

/// Recognized parcel tracking event types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrackingEventType {
    /// Parcel registered at the desk
    Created,
    /// Collected from the sender
    Pickup,
    /// Scanned into a depot
    InboundScan,
    /// Scanned out of a depot
    OutboundScan,
    Sorting,
    OutForDelivery,
    Delivered,
    /// Lost, delayed or damaged
    Exception,
}

impl TrackingEventType {
    pub const ALL: [Self; 8] = [
        Self::Created,
        Self::Pickup,
        Self::InboundScan,
        Self::OutboundScan,
        Self::Sorting,
        Self::OutForDelivery,
        Self::Delivered,
        Self::Exception,
    ];

    /// Wire code of this event type.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Created => "CREATED",
            Self::Pickup => "PICKUP",
            Self::InboundScan => "INBOUND_SCAN",
            Self::OutboundScan => "OUTBOUND_SCAN",
            Self::Sorting => "SORTING",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
            Self::Exception => "EXCEPTION",
        }
    }
}

impl std::fmt::Display for TrackingEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrackingEventType {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| StoreError::validation(format!("unknown tracking event type: {s}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for t in TrackingEventType::ALL {
            assert_eq!(t.as_str().parse::<TrackingEventType>().unwrap(), t);
        }
    }

    #[test]
    fn test_unknown_code_rejected() {
        let err = "LOST_IN_SPACE".parse::<TrackingEventType>().unwrap_err();
        assert!(err.is_validation());
        // Codes are case sensitive.
        assert!("delivered".parse::<TrackingEventType>().is_err());
    }

    #[test]
    fn test_serde_matches_display() {
        let json = serde_json::to_string(&TrackingEventType::OutForDelivery).unwrap();
        assert_eq!(json, "\"OUT_FOR_DELIVERY\"");
        assert_eq!(TrackingEventType::InboundScan.to_string(), "INBOUND_SCAN");
    }
}
