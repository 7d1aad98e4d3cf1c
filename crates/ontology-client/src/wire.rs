//! Request and response bodies of the ontology v2 REST API.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use ward_core::BedProperties;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ObjectPage {
    #[serde(default)]
    pub data: Vec<BedProperties>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ExecuteQueryReq {
    pub parameters: serde_json::Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ExecuteQueryRes {
    #[serde(default)]
    pub value: Value,
}

#[derive(Debug, Serialize)]
pub(crate) struct ApplyActionReq<'a> {
    pub options: ApplyActionOptions,
    pub parameters: EditBedParameters<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ApplyActionOptions {
    pub mode: &'static str,
    pub return_edits: &'static str,
}

impl ApplyActionOptions {
    pub const VALIDATE_AND_EXECUTE_ALL: Self = Self {
        mode: "VALIDATE_AND_EXECUTE",
        return_edits: "ALL",
    };
}

#[derive(Debug, Serialize)]
pub(crate) struct EditBedParameters<'a> {
    pub bed_data: &'a str,
    pub patient_name: &'a str,
    pub procedure_type: &'a str,
    pub current_note: &'a str,
    pub last_updated: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ApplyActionRes {
    pub validation: ActionValidation,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ActionValidation {
    pub result: String,
}

/// Error envelope returned with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error_name: String,
}

/// Error name the platform uses when an action's submission criteria are not met.
pub(crate) const ACTION_VALIDATION_FAILED: &str = "ActionValidationFailed";
