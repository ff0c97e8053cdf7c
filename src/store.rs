use std::sync::RwLock;
use thiserror::Error;

use crate::model::{Fruit, FruitId, FruitInput};

/// Errors raised by the store itself
#[derive(Debug, Clone, Error, PartialEq)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

/// Fruit records in insertion order, plus the id counter
#[derive(Debug)]
pub struct Table {
    fruits: Vec<Fruit>,
    next_id: FruitId,
}

impl Table {
    fn new() -> Self {
        Self {
            fruits: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a record with the next sequential id
    pub fn insert(&mut self, input: FruitInput) -> Fruit {
        let fruit = Fruit::new(self.next_id, input);
        self.next_id += 1;
        self.fruits.push(fruit.clone());
        fruit
    }

    pub fn list_all(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn find_by_id(&self, id: FruitId) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.id == id)
    }

    /// Exact, case-sensitive match
    pub fn find_by_name(&self, name: &str) -> Option<&Fruit> {
        self.fruits.iter().find(|f| f.name == name)
    }
}

/// In-memory fruit store
pub struct Store {
    data: RwLock<Table>,
}

impl Store {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            data: RwLock::new(Table::new()),
        }
    }

    /// Run `f` against the table while holding the read lock
    pub fn read<T>(&self, f: impl FnOnce(&Table) -> T) -> Result<T, StoreError> {
        let data = self.data.read().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&data))
    }

    /// Run `f` against the table while holding the write lock
    pub fn write<T>(&self, f: impl FnOnce(&mut Table) -> T) -> Result<T, StoreError> {
        let mut data = self.data.write().map_err(|_| StoreError::LockPoisoned)?;
        Ok(f(&mut data))
    }

    pub fn insert(&self, input: FruitInput) -> Result<Fruit, StoreError> {
        self.write(|table| table.insert(input))
    }

    pub fn list_all(&self) -> Result<Vec<Fruit>, StoreError> {
        self.read(|table| table.list_all().to_vec())
    }

    pub fn find_by_id(&self, id: FruitId) -> Result<Option<Fruit>, StoreError> {
        self.read(|table| table.find_by_id(id).cloned())
    }

    pub fn find_by_name(&self, name: &str) -> Result<Option<Fruit>, StoreError> {
        self.read(|table| table.find_by_name(name).cloned())
    }

    pub fn len(&self) -> Result<usize, StoreError> {
        self.read(|table| table.fruits.len())
    }

    pub fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }

    /// Drop every record and restart ids at 1
    pub fn reset(&self) -> Result<(), StoreError> {
        self.write(|table| *table = Table::new())
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}
