//! OpenFoodFacts client
//!
//! Talks to the public OpenFoodFacts API. Search uses the legacy CGI search
//! endpoint; barcode lookup uses the v0 product endpoint. Nutriment values
//! arrive per 100 grams and are sometimes encoded as strings, so parsing is
//! deliberately lenient: anything unusable becomes zero.

use async_trait::async_trait;
use serde::{Deserialize, Deserializer};

use crate::models::NutrientRecord;

use super::{FoodCandidate, FoodProvider, ProviderResult};

const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Number of search results requested per query
const SEARCH_PAGE_SIZE: u32 = 5;

/// Name used when the provider has no product name
const UNKNOWN_NAME: &str = "Unknown";

/// HTTP client for the OpenFoodFacts API
#[derive(Debug, Clone)]
pub struct OpenFoodFactsClient {
    http: reqwest::Client,
    base_url: String,
}

impl OpenFoodFactsClient {
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Point the client at a different host (used by tests and mirrors)
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

impl Default for OpenFoodFactsClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FoodProvider for OpenFoodFactsClient {
    async fn search(&self, query: &str) -> ProviderResult<Vec<FoodCandidate>> {
        let url = format!("{}/cgi/search.pl", self.base_url);
        let body = self
            .http
            .get(&url)
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", &SEARCH_PAGE_SIZE.to_string()),
            ])
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        tracing::debug!(query, bytes = body.len(), "search response received");
        parse_search_response(&body)
    }

    async fn lookup_barcode(&self, code: &str) -> ProviderResult<Option<FoodCandidate>> {
        let url = format!("{}/api/v0/product/{}.json", self.base_url, code);
        let body = self
            .http
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        tracing::debug!(code, bytes = body.len(), "barcode response received");
        parse_product_response(&body)
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    products: Vec<Product>,
}

#[derive(Debug, Deserialize)]
struct ProductResponse {
    #[serde(default)]
    status: i64,
    product: Option<Product>,
}

#[derive(Debug, Default, Deserialize)]
struct Product {
    #[serde(default)]
    product_name: Option<String>,
    #[serde(default)]
    brands: Option<String>,
    #[serde(default)]
    nutriments: Nutriments,
}

#[derive(Debug, Default, Deserialize)]
struct Nutriments {
    #[serde(rename = "energy-kcal_100g", default, deserialize_with = "lenient_f64")]
    energy_kcal_100g: f64,
    #[serde(rename = "proteins_100g", default, deserialize_with = "lenient_f64")]
    proteins_100g: f64,
    #[serde(rename = "carbohydrates_100g", default, deserialize_with = "lenient_f64")]
    carbohydrates_100g: f64,
    #[serde(rename = "fat_100g", default, deserialize_with = "lenient_f64")]
    fat_100g: f64,
}

/// OpenFoodFacts sends nutriments as numbers or strings depending on the
/// product; anything else (null, garbage) counts as zero.
fn lenient_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::Number(n) => n.as_f64().unwrap_or(0.0),
        serde_json::Value::String(s) => s.trim().parse().unwrap_or(0.0),
        _ => 0.0,
    })
}

impl From<Product> for FoodCandidate {
    fn from(p: Product) -> Self {
        let name = p
            .product_name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| UNKNOWN_NAME.to_string());
        let brand = p.brands.filter(|b| !b.trim().is_empty());
        FoodCandidate {
            name,
            brand,
            nutrients: NutrientRecord {
                calories_per_100g: p.nutriments.energy_kcal_100g,
                protein_per_100g: p.nutriments.proteins_100g,
                carbs_per_100g: p.nutriments.carbohydrates_100g,
                fat_per_100g: p.nutriments.fat_100g,
            },
        }
    }
}

fn parse_search_response(body: &str) -> ProviderResult<Vec<FoodCandidate>> {
    let response: SearchResponse = serde_json::from_str(body)?;
    Ok(response.products.into_iter().map(FoodCandidate::from).collect())
}

fn parse_product_response(body: &str) -> ProviderResult<Option<FoodCandidate>> {
    let response: ProductResponse = serde_json::from_str(body)?;
    if response.status != 1 {
        return Ok(None);
    }
    Ok(response.product.map(FoodCandidate::from))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "count": 2,
            "products": [
                {
                    "product_name": "Skyr Naturel",
                    "brands": "Arla",
                    "nutriments": {
                        "energy-kcal_100g": 63,
                        "proteins_100g": 10.6,
                        "carbohydrates_100g": 3.9,
                        "fat_100g": 0.2
                    }
                },
                {
                    "product_name": "Skyr Vanilje",
                    "nutriments": {
                        "energy-kcal_100g": 75,
                        "proteins_100g": 9.5
                    }
                }
            ]
        }"#;
        let candidates = parse_search_response(body).unwrap();
        assert_eq!(candidates.len(), 2);
        assert_eq!(candidates[0].display_name(), "Skyr Naturel - Arla");
        assert!((candidates[0].nutrients.calories_per_100g - 63.0).abs() < 0.001);
        assert!((candidates[0].nutrients.protein_per_100g - 10.6).abs() < 0.001);
        // Missing nutriments default to zero
        assert_eq!(candidates[1].nutrients.carbs_per_100g, 0.0);
        assert_eq!(candidates[1].nutrients.fat_per_100g, 0.0);
    }

    #[test]
    fn test_parse_search_no_products_key() {
        let candidates = parse_search_response(r#"{"count": 0}"#).unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_parse_string_encoded_nutriments() {
        let body = r#"{
            "products": [
                {
                    "product_name": "Havregryn",
                    "nutriments": {
                        "energy-kcal_100g": "368",
                        "proteins_100g": "13.5",
                        "carbohydrates_100g": "58.7",
                        "fat_100g": null
                    }
                }
            ]
        }"#;
        let candidates = parse_search_response(body).unwrap();
        let n = &candidates[0].nutrients;
        assert!((n.calories_per_100g - 368.0).abs() < 0.001);
        assert!((n.protein_per_100g - 13.5).abs() < 0.001);
        assert!((n.carbs_per_100g - 58.7).abs() < 0.001);
        assert_eq!(n.fat_per_100g, 0.0);
    }

    #[test]
    fn test_parse_unnamed_product_gets_placeholder() {
        let body = r#"{"products": [{"nutriments": {}}]}"#;
        let candidates = parse_search_response(body).unwrap();
        assert_eq!(candidates[0].name, "Unknown");
        assert!(candidates[0].brand.is_none());
    }

    #[test]
    fn test_parse_product_found() {
        let body = r#"{
            "status": 1,
            "product": {
                "product_name": "Minimælk",
                "brands": "Arla",
                "nutriments": {"energy-kcal_100g": 37, "proteins_100g": 3.5}
            }
        }"#;
        let candidate = parse_product_response(body).unwrap().unwrap();
        assert_eq!(candidate.name, "Minimælk");
        assert!((candidate.nutrients.calories_per_100g - 37.0).abs() < 0.001);
    }

    #[test]
    fn test_parse_product_not_found() {
        let body = r#"{"status": 0, "status_verbose": "product not found"}"#;
        assert!(parse_product_response(body).unwrap().is_none());
    }

    #[test]
    fn test_parse_garbage_is_payload_error() {
        assert!(parse_search_response("<html>teapot</html>").is_err());
    }
}
