use std::sync::Arc;
use serde_json::Value;
use thiserror::Error;
use tracing::info;

use crate::model::{Fruit, FruitId, FruitInput, InvalidInput};
use crate::store::{Store, StoreError};

/// Fruit service error kinds
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ServiceError {
    #[error("invalid fruit: {0}")]
    Validation(#[from] InvalidInput),
    #[error("fruit already exists: {0}")]
    Conflict(String),
    #[error("fruit not found: {0}")]
    NotFound(FruitId),
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Validation and business rules on top of the store
#[derive(Clone)]
pub struct FruitService {
    store: Arc<Store>,
}

impl FruitService {
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<Store> {
        &self.store
    }

    /// Validate `payload` and store it under a fresh id.
    ///
    /// The name lookup and the insert run under one write lock, so a name
    /// can only ever be stored once.
    pub fn create_fruit(&self, payload: &Value) -> Result<Fruit, ServiceError> {
        let input = FruitInput::from_json(payload)?;

        let fruit = self.store.write(|table| {
            if table.find_by_name(&input.name).is_some() {
                return Err(ServiceError::Conflict(input.name));
            }
            Ok(table.insert(input))
        })??;

        info!(id = fruit.id, name = %fruit.name, "fruit created");
        Ok(fruit)
    }

    pub fn get_all_fruits(&self) -> Result<Vec<Fruit>, ServiceError> {
        Ok(self.store.list_all()?)
    }

    pub fn get_fruit_by_id(&self, id: FruitId) -> Result<Fruit, ServiceError> {
        self.store.find_by_id(id)?.ok_or(ServiceError::NotFound(id))
    }
}
