//! daylog MCP server implementation
//!
//! Exposes the daily log and food discovery as MCP tools over stdio. The
//! session's log lives behind a mutex on the service; every tool locks it,
//! applies one operation, and releases it, so entries land in confirmation
//! order.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::Deserialize;
use tokio::sync::Mutex;

use crate::models::{DailyLog, DayType, NutrientRecord};
use crate::provider::FoodProvider;
use crate::tools::status::{StatusTracker, LOG_INSTRUCTIONS};
use crate::tools::{foods, log};

/// daylog MCP service
#[derive(Clone)]
pub struct DayLogService {
    log: Arc<Mutex<DailyLog>>,
    provider: Arc<dyn FoodProvider + Send + Sync>,
    status_tracker: Arc<StatusTracker>,
    tool_router: ToolRouter<DayLogService>,
}

impl DayLogService {
    /// Create a service with an empty log opened on today's date
    pub fn new(provider: Arc<dyn FoodProvider + Send + Sync>) -> Self {
        let today = chrono::Local::now().date_naive();
        Self {
            log: Arc::new(Mutex::new(DailyLog::new(today))),
            provider,
            status_tracker: Arc::new(StatusTracker::new()),
            tool_router: Self::tool_router(),
        }
    }
}

// ============================================================================
// Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetDayTypeParams {
    /// Day type: "training" or "rest" (anything else counts as rest)
    pub day_type: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SearchFoodsParams {
    /// Free-text food query (English queries match best)
    pub query: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct LookupBarcodeParams {
    /// Barcode digits as printed under the bars (EAN-13 etc.)
    pub code: String,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct PreviewPortionParams {
    /// Portion weight in grams (must be positive)
    pub grams: f64,
    /// Calories per 100 g
    #[serde(default)]
    pub calories_per_100g: f64,
    /// Protein grams per 100 g
    #[serde(default)]
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    #[serde(default)]
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    #[serde(default)]
    pub fat_per_100g: f64,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AddLogEntryParams {
    /// Display name for the entry (e.g. "Skyr Naturel - Arla")
    pub name: String,
    /// Portion weight in grams (must be positive)
    pub grams: f64,
    /// Calories per 100 g
    #[serde(default)]
    pub calories_per_100g: f64,
    /// Protein grams per 100 g
    #[serde(default)]
    pub protein_per_100g: f64,
    /// Carbohydrate grams per 100 g
    #[serde(default)]
    pub carbs_per_100g: f64,
    /// Fat grams per 100 g
    #[serde(default)]
    pub fat_per_100g: f64,
}

fn nutrient_record(
    calories: f64,
    protein: f64,
    carbs: f64,
    fat: f64,
) -> NutrientRecord {
    NutrientRecord {
        calories_per_100g: calories,
        protein_per_100g: protein,
        carbs_per_100g: carbs,
        fat_per_100g: fat,
    }
}

fn to_json_result<T: serde::Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

#[tool_router]
impl DayLogService {
    // --- Status ---

    #[tool(description = "Get the current status of the daylog service including build info and the session's log state")]
    async fn daylog_status(&self) -> Result<CallToolResult, McpError> {
        let log = self.log.lock().await;
        to_json_result(&self.status_tracker.get_status(&log))
    }

    #[tool(description = "Get step-by-step instructions for logging a day of eating. Call this when starting a new session or when unsure how to use the tools.")]
    fn log_instructions(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(LOG_INSTRUCTIONS)]))
    }

    // --- Day setup ---

    #[tool(description = "Set whether today is a training day or a rest day. Picks the daily calorie and macro targets.")]
    async fn set_day_type(&self, Parameters(p): Parameters<SetDayTypeParams>) -> Result<CallToolResult, McpError> {
        let mut log = self.log.lock().await;
        let result = log::set_day_type(&mut log, DayType::from_str(&p.day_type));
        to_json_result(&result)
    }

    // --- Food discovery ---

    #[tool(description = "Search the OpenFoodFacts database for foods by name. Returns per-100g nutrient values for each hit. An unreachable database gives an empty result, never an error.")]
    async fn search_foods(&self, Parameters(p): Parameters<SearchFoodsParams>) -> Result<CallToolResult, McpError> {
        let result = foods::search_foods(self.provider.as_ref(), &p.query).await;
        to_json_result(&result)
    }

    #[tool(description = "Look up a single product by its barcode digits. Returns per-100g nutrient values when the product is known.")]
    async fn lookup_barcode(&self, Parameters(p): Parameters<LookupBarcodeParams>) -> Result<CallToolResult, McpError> {
        let result = foods::lookup_barcode(self.provider.as_ref(), &p.code).await;
        to_json_result(&result)
    }

    // --- Logging ---

    #[tool(description = "Preview what a gram amount of a food would contribute, without adding it to the log")]
    fn preview_portion(&self, Parameters(p): Parameters<PreviewPortionParams>) -> Result<CallToolResult, McpError> {
        let record = nutrient_record(
            p.calories_per_100g,
            p.protein_per_100g,
            p.carbs_per_100g,
            p.fat_per_100g,
        );
        let result = log::preview_portion(&record, p.grams)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "Add a confirmed food to today's log. Scales the per-100g values to the gram amount and returns the new entry plus updated totals.")]
    async fn add_log_entry(&self, Parameters(p): Parameters<AddLogEntryParams>) -> Result<CallToolResult, McpError> {
        let record = nutrient_record(
            p.calories_per_100g,
            p.protein_per_100g,
            p.carbs_per_100g,
            p.fat_per_100g,
        );
        let mut log = self.log.lock().await;
        let result = log::add_entry(&mut log, &p.name, &record, p.grams)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json_result(&result)
    }

    #[tool(description = "Get today's full log: entries in order, totals, remaining amounts against the goal, and calorie progress")]
    async fn get_day_summary(&self) -> Result<CallToolResult, McpError> {
        let log = self.log.lock().await;
        to_json_result(&log::day_summary(&log))
    }

    #[tool(description = "Clear every entry from today's log. The day type stays as selected. There is no undo.")]
    async fn reset_log(&self) -> Result<CallToolResult, McpError> {
        let mut log = self.log.lock().await;
        to_json_result(&log::reset_log(&mut log))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for DayLogService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "daylog".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("Daily Nutrition Log".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "daylog - single-day nutrition logging against rest/training goals. \
                 IMPORTANT: Call log_instructions first. \
                 Setup: set_day_type (training or rest). \
                 Discovery: search_foods by name, lookup_barcode by digits. \
                 Logging: preview_portion to show a portion, add_log_entry to confirm it. \
                 Views: get_day_summary for entries/totals/remaining/progress, daylog_status. \
                 Reset: reset_log clears the day; nothing persists between sessions."
                    .into(),
            ),
        }
    }
}
