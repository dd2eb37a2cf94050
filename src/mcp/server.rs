//! NutriFit MCP Server Implementation
//!
//! Implements the MCP server with all NutriFit tools.

use std::sync::Arc;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo,
};
use rmcp::{schemars, tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler};
use serde::{Deserialize, Serialize};

use crate::session::Session;
use crate::tools::meals;
use crate::tools::profile::{self, ProfileForm};
use crate::tools::status::StatusTracker;

/// NutriFit MCP Service
#[derive(Clone)]
pub struct NutrifitService {
    status_tracker: Arc<StatusTracker>,
    session: Arc<Session>,
    tool_router: ToolRouter<NutrifitService>,
}

impl NutrifitService {
    pub fn new(session: Session) -> Self {
        Self {
            status_tracker: Arc::new(StatusTracker::new()),
            session: Arc::new(session),
            tool_router: Self::tool_router(),
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Serialization error: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(json)]))
}

// ============================================================================
// Profile Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SubmitProfileParams {
    /// Display name (optional, not used in calculations)
    pub name: Option<String>,
    /// Age in years
    pub age: String,
    /// Height in centimeters
    pub height: String,
    /// Weight in kilograms
    pub weight: String,
    /// "Man" or "Woman"
    pub gender: String,
    /// Sedentary, Lightly Active, Moderately Active, Very Active or Extra Active
    pub activity_level: String,
}

impl From<SubmitProfileParams> for ProfileForm {
    fn from(p: SubmitProfileParams) -> Self {
        ProfileForm {
            name: p.name,
            age: p.age,
            height: p.height,
            weight: p.weight,
            gender: p.gender,
            activity_level: p.activity_level,
        }
    }
}

// ============================================================================
// Meal Parameter Structs
// ============================================================================

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ListMealOptionsParams {
    /// Only list one meal time: breakfast, lunch, snack or dinner (optional)
    pub meal_time: Option<String>,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct ToggleMealParams {
    /// Title of the meal option (case-insensitive)
    pub title: String,
}

// ============================================================================
// Tool Implementations
// ============================================================================

#[tool_router]
impl NutrifitService {
    // --- Status ---

    #[tool(description = "Get the current status of the NutriFit service including build info, session state, and process information")]
    fn nutrifit_status(&self) -> Result<CallToolResult, McpError> {
        let status = self.status_tracker.get_status(&self.session);
        to_json(&status)
    }

    #[tool(description = "Get step-by-step instructions for submitting a profile and selecting meals. Call this when unsure how to use the NutriFit tools.")]
    fn usage_instructions(&self) -> Result<CallToolResult, McpError> {
        use crate::tools::status::USAGE_INSTRUCTIONS;
        Ok(CallToolResult::success(vec![Content::text(USAGE_INSTRUCTIONS)]))
    }

    // --- Profile ---

    #[tool(description = "Submit a profile (age, height cm, weight kg, gender, activity level) and compute BMI, BMR, TDEE and the daily calorie target. Replaces any previous metrics.")]
    fn submit_profile(&self, Parameters(p): Parameters<SubmitProfileParams>) -> Result<CallToolResult, McpError> {
        let form = ProfileForm::from(p);
        let result = profile::submit_profile(&self.session, &form)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the metrics computed from the last submitted profile")]
    fn get_metrics(&self) -> Result<CallToolResult, McpError> {
        let result = profile::get_metrics(&self.session)
            .map_err(|e| McpError::invalid_request(e, None))?;
        to_json(&result)
    }

    // --- Meals ---

    #[tool(description = "List meal options grouped by meal time, with calories and whether each is selected")]
    fn list_meal_options(&self, Parameters(p): Parameters<ListMealOptionsParams>) -> Result<CallToolResult, McpError> {
        let result = meals::list_meal_options(&self.session, p.meal_time.as_deref())
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Select a meal option, or unselect it if already selected. Returns a notification and the updated calorie summary.")]
    fn toggle_meal(&self, Parameters(p): Parameters<ToggleMealParams>) -> Result<CallToolResult, McpError> {
        let result = meals::toggle_meal(&self.session, &p.title)
            .map_err(|e| McpError::invalid_params(e, None))?;
        to_json(&result)
    }

    #[tool(description = "Get the selected meals, total calories, calorie target and remaining calories")]
    fn get_selection_summary(&self) -> Result<CallToolResult, McpError> {
        to_json(&meals::get_selection_summary(&self.session))
    }

    #[tool(description = "Unselect every meal option")]
    fn clear_selection(&self) -> Result<CallToolResult, McpError> {
        to_json(&meals::clear_selection(&self.session))
    }
}

// ============================================================================
// Server Handler
// ============================================================================

#[tool_handler]
impl ServerHandler for NutrifitService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::LATEST,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "nutrifit".into(),
                version: crate::build_info::VERSION.into(),
                title: Some("NutriFit".into()),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "NutriFit - Daily calorie needs and meal selection. \
                 Call usage_instructions first if unsure. \
                 Profile: submit_profile, get_metrics. \
                 Meals: list_meal_options, toggle_meal, get_selection_summary, clear_selection. \
                 Status: nutrifit_status."
                    .into(),
            ),
        }
    }
}
