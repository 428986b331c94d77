use axum::{
    extract::{Path, Query, State},
    response::Json,
};
use serde_json::Value;
use crate::catalog::command::get_resource_cmd::{GetResourceCommand, GetResourceCommandRequest, GetResourceCommandResponse};
use crate::catalog::command::loan_resource_cmd::{LoanResourceCommand, LoanResourceCommandRequest, LoanResourceCommandResponse};
use crate::catalog::command::register_resource_cmd::{RegisterResourceCommand, RegisterResourceCommandRequest, RegisterResourceCommandResponse};
use crate::catalog::command::return_resource_cmd::{ReturnResourceCommand, ReturnResourceCommandRequest, ReturnResourceCommandResponse};
use crate::catalog::command::search_by_title_cmd::{SearchByTitleCommand, SearchByTitleCommandRequest, SearchByTitleCommandResponse};
use crate::core::command::Command;
use crate::core::controller::{AppState, json_to_server_error, ServerError};
use crate::core::domain::ResourceId;

pub(crate) async fn register_resource(
    State(state): State<AppState>,
    json: Json<Value>) -> Result<Json<RegisterResourceCommandResponse>, ServerError> {
    let req: RegisterResourceCommandRequest = serde_json::from_value(json.0).map_err(json_to_server_error)?;
    let res = RegisterResourceCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn search_by_title(
    State(state): State<AppState>,
    Query(req): Query<SearchByTitleCommandRequest>) -> Result<Json<SearchByTitleCommandResponse>, ServerError> {
    let res = SearchByTitleCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn find_resource_by_id(
    State(state): State<AppState>,
    Path(resource_id): Path<ResourceId>) -> Result<Json<GetResourceCommandResponse>, ServerError> {
    let req = GetResourceCommandRequest::new(resource_id);
    let res = GetResourceCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn loan_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<ResourceId>) -> Result<Json<LoanResourceCommandResponse>, ServerError> {
    let req = LoanResourceCommandRequest::new(resource_id);
    let res = LoanResourceCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

pub(crate) async fn return_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<ResourceId>) -> Result<Json<ReturnResourceCommandResponse>, ServerError> {
    let req = ReturnResourceCommandRequest::new(resource_id);
    let res = ReturnResourceCommand::new(state.catalog).execute(req).await?;
    Ok(Json(res))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use axum::extract::{Path, Query, State};
    use axum::http::StatusCode;
    use axum::response::Json;
    use serde_json::json;
    use crate::catalog::command::search_by_title_cmd::SearchByTitleCommandRequest;
    use crate::catalog::domain::CatalogService;
    use crate::catalog::controller::{find_resource_by_id, loan_resource, register_resource, return_resource, search_by_title};
    use crate::catalog::factory;
    use crate::core::controller::AppState;
    use crate::core::domain::Configuration;
    use crate::gateway::GatewayPublisherVia;

    fn build_state() -> AppState {
        let config = Configuration::new("test");
        let catalog: Arc<dyn CatalogService> = Arc::from(factory::create_catalog_service(&config, GatewayPublisherVia::Memory));
        AppState::new(config, catalog)
    }

    #[tokio::test]
    async fn test_should_register_search_and_loan_over_handlers() {
        let state = build_state();

        let body = json!({"title": "Dune", "available": true, "kind": "book", "author": "Herbert"});
        let Json(added) = register_resource(State(state.clone()), Json(body)).await.expect("should register");
        let id = added.resource.resource_id;

        let Json(found) = search_by_title(State(state.clone()), Query(SearchByTitleCommandRequest::new("Dune")))
            .await.expect("should search");
        let found = serde_json::to_value(&found).expect("should serialize");
        assert_eq!(1, found["resources"].as_array().map(|a| a.len()).unwrap_or_default());
        assert_eq!("Herbert", found["resources"][0]["author"]);

        let _ = loan_resource(State(state.clone()), Path(id)).await.expect("should loan");
        let err = loan_resource(State(state.clone()), Path(id)).await.expect_err("should refuse second loan");
        assert_eq!(StatusCode::CONFLICT, err.0);

        let _ = return_resource(State(state.clone()), Path(id)).await.expect("should return");
        let Json(loaded) = find_resource_by_id(State(state), Path(id)).await.expect("should find");
        let loaded = serde_json::to_value(&loaded).expect("should serialize");
        assert_eq!(true, loaded["resource"]["available"]);
    }

    #[tokio::test]
    async fn test_should_reject_bad_register_body() {
        let body = json!({"title": "Dune", "available": true, "kind": "scroll"});
        let err = register_resource(State(build_state()), Json(body)).await.expect_err("should reject body");
        assert_eq!(StatusCode::BAD_REQUEST, err.0);
    }

    #[tokio::test]
    async fn test_should_answer_not_found_for_unknown_id() {
        let err = find_resource_by_id(State(build_state()), Path(-1)).await.expect_err("should not find");
        assert_eq!(StatusCode::NOT_FOUND, err.0);
    }
}
