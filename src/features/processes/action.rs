use crate::environment::Response;

#[derive(Clone, Debug)]
pub enum ProcessesAction {
    FetchProcessDefinitions,
    FetchProcessDefinitionsSuccess(Response),
    FetchProcessDefinitionsFailure(String),

    FetchProcessDefinition(String),
    FetchProcessDefinitionSuccess(Response),
    FetchProcessDefinitionFailure(String),

    Reset,
}
