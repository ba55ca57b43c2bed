//! Food discovery providers
//!
//! Trait seams for the external food database and barcode decoding, plus the
//! OpenFoodFacts implementation.

pub mod open_food_facts;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::NutrientRecord;

pub use open_food_facts::OpenFoodFactsClient;

/// Provider error types
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Provider request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Provider returned unusable payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Result type for provider operations
pub type ProviderResult<T> = Result<T, ProviderError>;

/// A food the provider knows about, with per-100g nutrients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoodCandidate {
    pub name: String,
    pub brand: Option<String>,
    pub nutrients: NutrientRecord,
}

impl FoodCandidate {
    /// Name shown to the user, with the brand appended when known
    pub fn display_name(&self) -> String {
        match self.brand.as_deref().filter(|b| !b.trim().is_empty()) {
            Some(brand) => format!("{} - {}", self.name, brand),
            None => self.name.clone(),
        }
    }
}

/// External food database lookup
#[async_trait]
pub trait FoodProvider: Send + Sync {
    /// Free-text search; zero or more candidates, caller picks one
    async fn search(&self, query: &str) -> ProviderResult<Vec<FoodCandidate>>;

    /// Exact lookup by barcode digits
    async fn lookup_barcode(&self, code: &str) -> ProviderResult<Option<FoodCandidate>>;
}

/// External barcode image decoder.
///
/// Decoding happens outside this crate; embedders plug in whatever scanner
/// they use. Returns every code found in the image, possibly none.
pub trait BarcodeDecoder {
    fn decode(&self, image: &[u8]) -> Vec<String>;
}

/// Pick the code to look up from a decoder's output: the first one, if any
pub fn first_barcode(decoder: &dyn BarcodeDecoder, image: &[u8]) -> Option<String> {
    decoder.decode(image).into_iter().next()
}
