use crate::error::ApiError;
use crate::models::{present, Envelope, NewPathway};
use crate::routes;
use crate::state::AppState;
use axum::{extract::rejection::JsonRejection, extract::State, Json};

/// POST /pathways/ handler - Insert a pathway
///
/// Both `/pathways` and `/pathways/` are accepted. The response `id` is the
/// store-assigned insert id when there is one, otherwise the supplied
/// `PathwayID`.
#[utoipa::path(
    post,
    path = routes::PATHWAYS_SLASH,
    request_body = NewPathway,
    responses(
        (status = 201, description = "Pathway created", body = Envelope),
        (
            status = 400,
            description = "Missing fields, invalid JSON or store error",
            body = Envelope
        ),
        (status = 409, description = "PathwayID already exists", body = Envelope)
    ),
    tag = "pathways"
)]
pub async fn create_handler(
    State(state): State<AppState>,
    payload: Result<Json<NewPathway>, JsonRejection>,
) -> Result<Envelope, ApiError> {
    let Json(body) = payload?;
    tracing::debug!("Route /pathways POST {:?} {:?}", body.pathway_id, body.pathway_name);

    let (Some(pathway_id), Some(pathway_name)) = (
        present(body.pathway_id.as_deref()),
        present(body.pathway_name.as_deref()),
    ) else {
        return Err(ApiError::MissingData("Data missing for insert"));
    };

    let outcome = state
        .store
        .insert_pathway(pathway_id, pathway_name)
        .await
        .map_err(|err| {
            tracing::error!("Failed to insert pathway {}: {}", pathway_id, err);
            ApiError::from_store(err, state.policy())
        })?;

    let id = if outcome.last_insert_id > 0 {
        outcome.last_insert_id.to_string()
    } else {
        pathway_id.to_string()
    };
    tracing::info!("Insert ID: {}", id);

    Ok(Envelope::written(state.policy().created(), id))
}
