use models::{validation::check, Consultation, QuoteRequest, Record};
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::{create_record, require, SharedStore};

/// Write-only intake for quote and consultation requests.
#[derive(Clone)]
pub struct LeadService {
    store: Option<SharedStore>,
}

impl LeadService {
    pub fn new(store: Option<SharedStore>) -> Self { Self { store } }

    pub async fn create_quote(&self, quote: &QuoteRequest) -> Result<String, ServiceError> {
        self.submit(quote).await
    }

    pub async fn create_consultation(&self, consultation: &Consultation) -> Result<String, ServiceError> {
        self.submit(consultation).await
    }

    #[instrument(skip_all, fields(collection = %T::COLLECTION))]
    async fn submit<T: Record>(&self, record: &T) -> Result<String, ServiceError> {
        check(record)?;
        let store = require(&self.store)?;
        let id = create_record(store.as_ref(), record).await?;
        info!(%id, "lead recorded");
        Ok(id)
    }
}
