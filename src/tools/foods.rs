//! Food discovery MCP tools
//!
//! Search, barcode lookup, and image scanning against the food provider.
//! Provider failures are never fatal: they surface as an empty result set
//! with a notice, and nothing is added to the log.

use serde::Serialize;

use crate::models::NutrientRecord;
use crate::provider::{first_barcode, BarcodeDecoder, FoodCandidate, FoodProvider};

/// One search hit, carrying the per-100g record needed to log it later
#[derive(Debug, Serialize)]
pub struct FoodHit {
    pub display_name: String,
    pub name: String,
    pub brand: Option<String>,
    pub nutrients: NutrientRecord,
}

impl From<FoodCandidate> for FoodHit {
    fn from(candidate: FoodCandidate) -> Self {
        Self {
            display_name: candidate.display_name(),
            name: candidate.name,
            brand: candidate.brand,
            nutrients: candidate.nutrients,
        }
    }
}

/// Response for search_foods
#[derive(Debug, Serialize)]
pub struct SearchFoodsResponse {
    pub query: String,
    pub results: Vec<FoodHit>,
    pub notice: Option<String>,
}

/// Response for lookup_barcode and scan_barcode_image
#[derive(Debug, Serialize)]
pub struct BarcodeLookupResponse {
    pub code: Option<String>,
    pub result: Option<FoodHit>,
    pub notice: Option<String>,
}

const UNAVAILABLE_NOTICE: &str = "Food database unavailable right now, try again later.";
const NO_MATCH_NOTICE: &str = "Nothing found. Try searching in English if your language gives no hits.";
const UNKNOWN_CODE_NOTICE: &str = "No product registered for this barcode.";
const DECODE_FAILURE_NOTICE: &str = "No barcode found in the image. Retry with a sharper, closer photo.";

/// Free-text food search
pub async fn search_foods(provider: &dyn FoodProvider, query: &str) -> SearchFoodsResponse {
    match provider.search(query).await {
        Ok(candidates) if candidates.is_empty() => SearchFoodsResponse {
            query: query.to_string(),
            results: Vec::new(),
            notice: Some(NO_MATCH_NOTICE.to_string()),
        },
        Ok(candidates) => SearchFoodsResponse {
            query: query.to_string(),
            results: candidates.into_iter().map(FoodHit::from).collect(),
            notice: None,
        },
        Err(e) => {
            tracing::warn!(query, error = %e, "food search failed");
            SearchFoodsResponse {
                query: query.to_string(),
                results: Vec::new(),
                notice: Some(UNAVAILABLE_NOTICE.to_string()),
            }
        }
    }
}

/// Look up a single product by barcode digits
pub async fn lookup_barcode(provider: &dyn FoodProvider, code: &str) -> BarcodeLookupResponse {
    match provider.lookup_barcode(code).await {
        Ok(Some(candidate)) => BarcodeLookupResponse {
            code: Some(code.to_string()),
            result: Some(candidate.into()),
            notice: None,
        },
        Ok(None) => BarcodeLookupResponse {
            code: Some(code.to_string()),
            result: None,
            notice: Some(UNKNOWN_CODE_NOTICE.to_string()),
        },
        Err(e) => {
            tracing::warn!(code, error = %e, "barcode lookup failed");
            BarcodeLookupResponse {
                code: Some(code.to_string()),
                result: None,
                notice: Some(UNAVAILABLE_NOTICE.to_string()),
            }
        }
    }
}

/// Decode an image and look up the first barcode found in it
pub async fn scan_barcode_image(
    decoder: &dyn BarcodeDecoder,
    provider: &dyn FoodProvider,
    image: &[u8],
) -> BarcodeLookupResponse {
    match first_barcode(decoder, image) {
        Some(code) => lookup_barcode(provider, &code).await,
        None => BarcodeLookupResponse {
            code: None,
            result: None,
            notice: Some(DECODE_FAILURE_NOTICE.to_string()),
        },
    }
}
