use serde_json::Value;

use crate::environment::Response;

/// Every asynchronous family here has request, success, and failure members.
/// Shift creation adds `FetchActiveShiftAfterCreate`, the poll step between
/// the create call succeeding and the record becoming visible.
#[derive(Clone, Debug)]
pub enum ShiftAction {
    FetchActiveShift,
    FetchActiveShiftSuccess(Response),
    FetchActiveShiftFailure(String),

    /// Submit a validated shift form for creation/amendment.
    SubmitValidation(Value),
    SubmitFailure(String),

    FetchActiveShiftAfterCreate,
    CreateActiveShiftSuccess,
    CreateActiveShiftFailure(String),

    EndShift,
    EndShiftSuccess(Response),
    EndShiftFailure(String),

    FetchStaffDetails,
    FetchStaffDetailsSuccess(Response),
    FetchStaffDetailsFailure(String),

    FetchShiftForm,
    FetchShiftFormSuccess(Response),
    FetchShiftFormFailure(String),

    Reset,
}
