//! Parcel Use Case - Parcel creation, lookup and tracking.
//!
//! A parcel starts with status `CREATED` and one seed event. Each
//! tracking update sets the status and appends one event; earlier
//! events are never touched.

use tracing::{info, instrument};

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::{Parcel, TrackingEvent};
use crate::domain::pricing::Quote;
use crate::domain::tracking::TrackingEventType;
use crate::ports::ids::PARCEL_PREFIX;
use crate::ports::storage::KeyValueStorage;

use super::store::Store;

/// Remarks of the event recorded when a parcel is created.
pub const CREATED_REMARKS: &str = "order created";

impl<S: KeyValueStorage> Store<S> {
    /// Price a shipment with this store's tariff. Pure, no I/O.
    ///
    /// # Errors
    /// `Validation` for NaN, infinite or negative inputs.
    pub fn quote(&self, weight: f64, distance: f64) -> StoreResult<Quote> {
        self.pricing.quote(weight, distance)
    }

    /// Create a parcel, priced by `quote`, at the front of the list.
    #[instrument(skip(self))]
    pub async fn create_parcel(
        &self,
        sender: &str,
        receiver: &str,
        weight: f64,
        distance: f64,
    ) -> StoreResult<Parcel> {
        let Quote { amount } = self.quote(weight, distance)?;
        let mut doc = self.load_document().await?;

        let created = TrackingEventType::Created.as_str();
        let parcel = Parcel {
            tracking_number: self.ids.next_id(PARCEL_PREFIX),
            sender: sender.to_string(),
            receiver: receiver.to_string(),
            weight,
            distance,
            charge_amount: amount,
            status: created.to_string(),
            events: vec![TrackingEvent {
                time: self.clock.timestamp(),
                event_type: created.to_string(),
                remarks: CREATED_REMARKS.to_string(),
            }],
        };
        doc.parcels.insert(0, parcel.clone());

        self.save_document(&doc).await?;
        info!(
            tracking_number = %parcel.tracking_number,
            charge = parcel.charge_amount,
            "Parcel created"
        );
        Ok(parcel)
    }

    /// Parcel with this tracking number, if any.
    pub async fn find_parcel(&self, tracking_number: &str) -> StoreResult<Option<Parcel>> {
        let doc = self.load_document().await?;
        Ok(doc.parcel(tracking_number.trim()).cloned())
    }

    /// All parcels, most recently created first.
    pub async fn list_parcels(&self) -> StoreResult<Vec<Parcel>> {
        Ok(self.load_document().await?.parcels)
    }

    /// Parcels whose sender is exactly `sender`, in stored order.
    pub async fn parcels_by_sender(&self, sender: &str) -> StoreResult<Vec<Parcel>> {
        let doc = self.load_document().await?;
        Ok(doc
            .parcels
            .into_iter()
            .filter(|p| p.sender == sender)
            .collect())
    }

    /// Tracking log of a parcel, oldest first.
    ///
    /// # Errors
    /// `NotFound` if no parcel has this tracking number.
    pub async fn tracking_history(&self, tracking_number: &str) -> StoreResult<Vec<TrackingEvent>> {
        let tracking_number = tracking_number.trim();
        self.find_parcel(tracking_number)
            .await?
            .map(|p| p.events)
            .ok_or_else(|| StoreError::not_found("parcel", tracking_number))
    }

    /// Record a tracking event: set the status and append to the log.
    ///
    /// Any event type string is accepted unless the store is strict,
    /// in which case it must be a `TrackingEventType` code.
    ///
    /// # Errors
    /// - `Validation` for an unknown event type in strict mode
    /// - `NotFound` if no parcel has this tracking number
    ///
    /// Nothing is written when an error is returned.
    #[instrument(skip(self, remarks))]
    pub async fn add_tracking_event(
        &self,
        tracking_number: &str,
        event_type: &str,
        remarks: Option<&str>,
    ) -> StoreResult<Parcel> {
        if self.strict_event_types {
            event_type.parse::<TrackingEventType>()?;
        }

        let tracking_number = tracking_number.trim();
        let mut doc = self.load_document().await?;
        let time = self.clock.timestamp();

        let parcel = doc
            .parcel_mut(tracking_number)
            .ok_or_else(|| StoreError::not_found("parcel", tracking_number))?;
        parcel.status = event_type.to_string();
        parcel.events.push(TrackingEvent {
            time,
            event_type: event_type.to_string(),
            remarks: remarks.unwrap_or_default().to_string(),
        });
        let updated = parcel.clone();

        self.save_document(&doc).await?;
        info!(
            tracking_number = %updated.tracking_number,
            status = %updated.status,
            events = updated.events.len(),
            "Tracking event added"
        );
        Ok(updated)
    }
}
