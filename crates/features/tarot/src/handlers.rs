//! HTTP surface of the tarot slice.

use crate::Tarot;
use crate::deck::DeckCard;
use crate::draw::{self, DrawnCard};
use crate::error::TarotError;
use arcana_domain::constants::TAROT_TAG;
use arcana_kernel::server::state::ApiState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

/// Draw request body.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(deny_unknown_fields)]
pub struct DrawRequest {
    /// How many cards to draw, between 1 and the deck size.
    #[serde(rename = "quantidade")]
    pub count: i64,
}

/// Wire shape of an error response.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Human-readable description of the problem.
    pub erro: String,
}

impl IntoResponse for TarotError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::CountOutOfRange { .. } | Self::InvalidPayload { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorBody { erro: self.to_string() })).into_response()
    }
}

/// Routes owned by the tarot slice.
pub fn router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(draw_cards_handler))
        .routes(routes!(all_cards_handler))
}

#[utoipa::path(
    post,
    path = "/tirar-cartas",
    request_body = DrawRequest,
    responses(
        (status = OK, description = "The drawn cards, in draw order", body = [DrawnCard]),
        (status = BAD_REQUEST, description = "Invalid count or malformed body", body = ErrorBody),
    ),
    tag = TAROT_TAG,
)]
#[allow(clippy::unused_async)]
async fn draw_cards_handler(
    State(state): State<ApiState>,
    payload: Result<Json<DrawRequest>, JsonRejection>,
) -> Result<Json<Vec<DrawnCard>>, TarotError> {
    // Extractor rejections become the wire-level validation error instead of
    // axum's default plain-text response.
    let Json(request) = payload
        .map_err(|rejection| TarotError::InvalidPayload { message: rejection.body_text().into() })?;

    let tarot = state
        .try_get_slice::<Tarot>()
        .map_err(|e| TarotError::Internal { message: e.to_string().into() })?;

    let cards = draw::draw(&tarot.deck, request.count, &mut rand::thread_rng())?;
    Ok(Json(cards))
}

#[utoipa::path(
    get,
    path = "/all_cards",
    responses((status = OK, description = "The full deck in catalog order", body = [DeckCard])),
    tag = TAROT_TAG,
)]
#[allow(clippy::unused_async)]
async fn all_cards_handler(
    State(state): State<ApiState>,
) -> Result<Json<Vec<DeckCard>>, TarotError> {
    let tarot = state
        .try_get_slice::<Tarot>()
        .map_err(|e| TarotError::Internal { message: e.to_string().into() })?;

    Ok(Json(tarot.deck.cards().to_vec()))
}
