use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A person's active work shift, as the operational data service stores it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShiftRecord {
    pub shiftminutes: i64,
    pub shifthours: i64,
    pub startdatetime: DateTime<Utc>,
    pub teamid: String,
    pub locationid: String,
    pub phone: String,
    #[serde(default)]
    pub commandid: Option<String>,
    #[serde(default)]
    pub subcommandid: Option<String>,
    #[serde(default)]
    pub currentlocationid: Option<String>,
}

/// `shift == None` means "no active shift", a normal condition on page
/// load, not an error.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ShiftState {
    pub is_fetching_active_shift: bool,
    pub shift: Option<ShiftRecord>,
    pub has_active_shift: bool,
    pub active_shift_error: Option<String>,

    pub submitting_active_shift: bool,
    pub active_shift_success: bool,
    pub submission_error: Option<String>,

    pub ending_shift: bool,
    pub end_shift_success: bool,
    pub end_shift_error: Option<String>,

    pub loading_shift_form: bool,
    pub shift_form: Option<Value>,

    pub loading_staff_details: bool,
    pub staff_details: Option<Value>,
}
