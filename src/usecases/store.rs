//! Store - Document access over a key-value port.
//!
//! Every operation reads the full document from storage, and every
//! mutating operation writes the full document back:
//!
//! 1. load: absent or unparsable value -> seed document
//! 2. mutate in memory (lookups fail here, before any write)
//! 3. save: serialize and replace the stored value
//!
//! There is no locking. Two overlapping mutations on the same storage
//! resolve as last write wins.

use std::sync::Arc;

use tracing::{debug, instrument, warn};

use crate::config::{AppConfig, DEFAULT_DOCUMENT_KEY, DEFAULT_SESSION_KEY};
use crate::domain::error::StoreResult;
use crate::domain::model::Document;
use crate::domain::pricing::PricingRules;
use crate::ports::clock::{Clock, SystemClock};
use crate::ports::ids::{IdGenerator, UuidIdGenerator};
use crate::ports::storage::KeyValueStorage;

/// Desk data-access service.
///
/// Operations live in the sibling modules: `session`, `customers`,
/// `parcels` and `billing`.
pub struct Store<S: KeyValueStorage> {
    /// Storage port.
    pub(crate) storage: S,
    /// Time source for event and invoice timestamps.
    pub(crate) clock: Arc<dyn Clock>,
    /// Identifier source.
    pub(crate) ids: Arc<dyn IdGenerator>,
    /// Shipping tariff.
    pub(crate) pricing: PricingRules,
    /// Key of the serialized document.
    pub(crate) document_key: String,
    /// Key of the login session.
    pub(crate) session_key: String,
    /// Reject unknown tracking event types.
    pub(crate) strict_event_types: bool,
}

impl<S: KeyValueStorage> Store<S> {
    /// Create a store with the system clock, UUID identifiers, the
    /// default tariff and the default storage keys.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            clock: Arc::new(SystemClock),
            ids: Arc::new(UuidIdGenerator),
            pricing: PricingRules::default(),
            document_key: DEFAULT_DOCUMENT_KEY.to_string(),
            session_key: DEFAULT_SESSION_KEY.to_string(),
            strict_event_types: false,
        }
    }

    /// Create a store configured from `config`.
    pub fn from_config(storage: S, config: &AppConfig) -> Self {
        Self::new(storage)
            .with_pricing(config.pricing.into())
            .with_keys(&config.storage.document_key, &config.storage.session_key)
            .with_strict_event_types(config.tracking.strict_event_types)
    }

    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    #[must_use]
    pub fn with_id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = ids;
        self
    }

    #[must_use]
    pub const fn with_pricing(mut self, pricing: PricingRules) -> Self {
        self.pricing = pricing;
        self
    }

    #[must_use]
    pub fn with_keys(mut self, document_key: &str, session_key: &str) -> Self {
        self.document_key = document_key.to_string();
        self.session_key = session_key.to_string();
        self
    }

    #[must_use]
    pub const fn with_strict_event_types(mut self, strict: bool) -> Self {
        self.strict_event_types = strict;
        self
    }

    /// Borrow the storage handle.
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    pub const fn pricing(&self) -> PricingRules {
        self.pricing
    }

    /// Read the document, substituting the seed document when the
    /// key is absent or its value does not parse.
    ///
    /// # Errors
    /// `Storage` if the backend read fails. A failed read is not
    /// treated as empty, so a later save cannot clobber real data.
    #[instrument(skip(self), fields(key = %self.document_key))]
    pub async fn load_document(&self) -> StoreResult<Document> {
        let Some(raw) = self.storage.get(&self.document_key).await? else {
            debug!("No stored document, using seed document");
            return Ok(Document::seed());
        };

        match serde_json::from_str::<Document>(&raw) {
            Ok(doc) => Ok(doc),
            Err(e) => {
                warn!(error = %e, "Stored document is corrupt, using seed document");
                Ok(Document::seed())
            }
        }
    }

    /// Serialize and write the whole document.
    #[instrument(skip(self, doc), fields(key = %self.document_key))]
    pub async fn save_document(&self, doc: &Document) -> StoreResult<()> {
        let json = serde_json::to_string(doc)?;
        self.storage.set(&self.document_key, &json).await?;
        debug!(
            customers = doc.customers.len(),
            parcels = doc.parcels.len(),
            invoices = doc.invoices.len(),
            "Document saved"
        );
        Ok(())
    }

    /// Drop the stored document; the next read yields the seed document.
    #[instrument(skip(self))]
    pub async fn reset(&self) -> StoreResult<()> {
        self.storage.remove(&self.document_key).await?;
        warn!(key = %self.document_key, "Document reset to seed state");
        Ok(())
    }

    /// Check that the storage backend is usable.
    pub async fn is_healthy(&self) -> bool {
        self.storage.is_healthy().await
    }
}
