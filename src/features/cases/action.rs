use serde_json::Value;

use crate::environment::Response;

#[derive(Clone, Debug)]
pub enum CasesAction {
    FindCasesByKey(String),
    FindCasesByKeySuccess(Response),
    FindCasesByKeyFailure(String),

    GetCaseByKey(String),
    GetCaseByKeySuccess(Response),
    GetCaseByKeyFailure(String),

    GetFormVersion,
    GetFormVersionSuccess(Response),
    GetFormVersionFailure(String),

    SetSelectedFormReference(Value),

    GetFormSubmissionData,
    GetFormSubmissionDataSuccess(Response),
    GetFormSubmissionDataFailure(String),

    /// Clears only the form panes, keeping the search results.
    ResetForm,
    Reset,
}
