use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CasesState {
    pub searching: bool,
    pub business_key_query: Option<String>,
    pub case_search_results: Option<im::Vector<Value>>,

    pub loading_case_details: bool,
    pub case_details: Option<Value>,
    pub business_key: Option<String>,

    pub loading_form_version: bool,
    pub form_version_details: Option<Value>,
    pub selected_form_reference: Option<Value>,

    pub loading_form_submission_data: bool,
    pub form_submission_data: Option<Value>,
}
