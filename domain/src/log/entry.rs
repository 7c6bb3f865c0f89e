//! Transport form of a log record

use serde::{Deserialize, Serialize};

/// Parameters of the remote `logFromComponent` operation.
///
/// `additional_data` is the payload already serialized to a JSON string;
/// absent values travel as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentLogEntry {
    pub component: String,
    pub level: String,
    pub message: String,
    pub record_id: Option<String>,
    pub additional_data: Option<String>,
}
