//! Billing Use Case - Invoice generation and payment.
//!
//! An invoice snapshots the parcel's sender and charge when it is
//! generated. Status moves `OPEN -> PAID` and stays there.

use tracing::{info, instrument};

use crate::domain::error::{StoreError, StoreResult};
use crate::domain::model::{Invoice, InvoiceStatus};
use crate::ports::ids::INVOICE_PREFIX;
use crate::ports::storage::KeyValueStorage;

use super::store::Store;

impl<S: KeyValueStorage> Store<S> {
    /// All invoices, most recently generated first.
    pub async fn list_invoices(&self) -> StoreResult<Vec<Invoice>> {
        Ok(self.load_document().await?.invoices)
    }

    /// Invoices issued for one parcel, in stored order.
    pub async fn invoices_for(&self, tracking_number: &str) -> StoreResult<Vec<Invoice>> {
        let tracking_number = tracking_number.trim();
        let doc = self.load_document().await?;
        Ok(doc
            .invoices
            .into_iter()
            .filter(|i| i.tracking_number == tracking_number)
            .collect())
    }

    /// Issue an `OPEN` invoice for an existing parcel.
    ///
    /// # Errors
    /// `NotFound` if no parcel has this tracking number.
    #[instrument(skip(self))]
    pub async fn generate_invoice(&self, tracking_number: &str) -> StoreResult<Invoice> {
        let tracking_number = tracking_number.trim();
        let mut doc = self.load_document().await?;

        let parcel = doc
            .parcel(tracking_number)
            .ok_or_else(|| StoreError::not_found("parcel", tracking_number))?;

        let invoice = Invoice {
            id: self.ids.next_id(INVOICE_PREFIX),
            tracking_number: parcel.tracking_number.clone(),
            customer: parcel.sender.clone(),
            amount: parcel.charge_amount,
            status: InvoiceStatus::Open,
            created_at: self.clock.timestamp(),
        };
        doc.invoices.insert(0, invoice.clone());

        self.save_document(&doc).await?;
        info!(
            invoice_id = %invoice.id,
            tracking_number = %invoice.tracking_number,
            amount = invoice.amount,
            "Invoice generated"
        );
        Ok(invoice)
    }

    /// Mark an invoice paid. Paying a paid invoice succeeds again.
    ///
    /// # Errors
    /// `NotFound` if no invoice has this id.
    #[instrument(skip(self))]
    pub async fn mark_invoice_paid(&self, invoice_id: &str) -> StoreResult<Invoice> {
        let invoice_id = invoice_id.trim();
        let mut doc = self.load_document().await?;

        let invoice = doc
            .invoice_mut(invoice_id)
            .ok_or_else(|| StoreError::not_found("invoice", invoice_id))?;
        invoice.status = InvoiceStatus::Paid;
        let updated = invoice.clone();

        self.save_document(&doc).await?;
        info!(invoice_id = %updated.id, "Invoice marked paid");
        Ok(updated)
    }
}
