//! Fruit data model
//!
//! This module provides the stored fruit record and the validated
//! creation payload.

pub mod fruit;

pub use fruit::{Fruit, FruitId, FruitInput, InvalidInput};
