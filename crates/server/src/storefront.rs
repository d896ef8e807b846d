//! Storefront JSON API.
//!
//! - `GET  /api/v1/products[?category=]`       list catalog products
//! - `GET  /api/v1/products/{id}`              one product
//! - `GET  /api/v1/collections`                collections with their products
//! - `GET  /api/v1/collections/{id}`           one collection
//! - `GET  /api/v1/quiz/questions`             quiz definition
//! - `POST /api/v1/quiz/sessions`              validate answers, issue a session token
//! - `GET  /api/v1/quiz/results?session=&limit=` profile, family and recommendations

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use fragrance_core::domain::product::{Category, Collection, Product};
use fragrance_core::domain::profile::{ScentFamily, ScentProfile};
use fragrance_core::domain::quiz::{QuizAnswer, QuizQuestion};
use fragrance_core::errors::{ApplicationError, DomainError, InterfaceError};
use fragrance_core::quiz::{questions, validate_answers};
use fragrance_core::recommend::{
    calculate_scent_profile, family_from_profile, Recommendation, RecommendationRanker,
};
use fragrance_core::session::SessionError;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::bootstrap::SharedState;

pub const QUIZ_RESTART_PATH: &str = "/quiz";

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ApiError>)>;

// ---------------------------------------------------------------------------
// Request / Response types
// ---------------------------------------------------------------------------

#[derive(Debug, Default, Deserialize)]
pub struct ProductQuery {
    pub category: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ResultsQuery {
    pub session: Option<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct CreateSessionRequest {
    pub answers: Vec<QuizAnswer>,
}

#[derive(Debug, Serialize)]
pub struct ProductList {
    pub products: Vec<&'static Product>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct CollectionView {
    #[serde(flatten)]
    pub collection: &'static Collection,
    pub products: Vec<&'static Product>,
}

#[derive(Debug, Serialize)]
pub struct QuestionList {
    pub questions: &'static [QuizQuestion],
}

#[derive(Debug, Serialize)]
pub struct FamilySummary {
    pub id: ScentFamily,
    pub headline: &'static str,
    pub description: &'static str,
}

impl From<ScentFamily> for FamilySummary {
    fn from(family: ScentFamily) -> Self {
        Self { id: family, headline: family.headline(), description: family.description() }
    }
}

#[derive(Debug, Serialize)]
pub struct SessionCreated {
    pub token: String,
    pub session_id: Uuid,
    pub expires_at: DateTime<Utc>,
    pub profile: ScentProfile,
    pub family: FamilySummary,
    pub results_url: String,
}

#[derive(Debug, Serialize)]
pub struct QuizResults {
    pub session_id: Uuid,
    pub profile: ScentProfile,
    pub family: FamilySummary,
    pub recommendations: Vec<Recommendation<'static>>,
}

#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct ApiError {
    pub error: String,
    pub message: String,
    pub correlation_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<String>,
}

pub fn router(state: SharedState) -> Router {
    Router::new()
        .route("/api/v1/products", get(list_products))
        .route("/api/v1/products/{id}", get(get_product))
        .route("/api/v1/collections", get(list_collections))
        .route("/api/v1/collections/{id}", get(get_collection))
        .route("/api/v1/quiz/questions", get(list_questions))
        .route("/api/v1/quiz/sessions", post(create_session))
        .route("/api/v1/quiz/results", get(quiz_results))
        .with_state(state)
}

// ---------------------------------------------------------------------------
// Catalog handlers
// ---------------------------------------------------------------------------

pub async fn list_products(
    State(state): State<SharedState>,
    Query(query): Query<ProductQuery>,
) -> ApiResult<ProductList> {
    let products: Vec<&'static Product> = match query.category.as_deref() {
        Some(raw) => {
            let category = raw.parse::<Category>().map_err(|_| {
                let error = DomainError::UnknownCategory(raw.trim().to_string());
                api_error(error.into()).into_parts()
            })?;
            state.catalog.by_category(category).collect()
        }
        None => state.catalog.products().iter().collect(),
    };

    Ok(Json(ProductList { total: products.len(), products }))
}

pub async fn get_product(
    Path(product_id): Path<String>,
    State(state): State<SharedState>,
) -> ApiResult<&'static Product> {
    state.catalog.get(&product_id).map(Json).map_err(|error| api_error(error.into()).into_parts())
}

pub async fn list_collections(State(state): State<SharedState>) -> ApiResult<Vec<CollectionView>> {
    state
        .catalog
        .collections()
        .iter()
        .map(|collection| collection_view(&state, collection))
        .collect::<Result<Vec<_>, _>>()
        .map(Json)
        .map_err(|error| api_error(error.into()).into_parts())
}

pub async fn get_collection(
    Path(collection_id): Path<String>,
    State(state): State<SharedState>,
) -> ApiResult<CollectionView> {
    state
        .catalog
        .collection(&collection_id)
        .and_then(|collection| collection_view(&state, collection))
        .map(Json)
        .map_err(|error| api_error(error.into()).into_parts())
}

fn collection_view(
    state: &SharedState,
    collection: &'static Collection,
) -> Result<CollectionView, DomainError> {
    let products = state.catalog.collection_products(&collection.id)?;
    Ok(CollectionView { collection, products })
}

// ---------------------------------------------------------------------------
// Quiz handlers
// ---------------------------------------------------------------------------

pub async fn list_questions() -> Json<QuestionList> {
    Json(QuestionList { questions: questions() })
}

pub async fn create_session(
    State(state): State<SharedState>,
    Json(body): Json<CreateSessionRequest>,
) -> ApiResult<SessionCreated> {
    validate_answers(&body.answers).map_err(|error| api_error(error.into()).into_parts())?;

    let (token, session) = state
        .codec
        .issue(&body.answers, Utc::now())
        .map_err(|error| api_error(error.into()).into_parts())?;
    let expires_at =
        state.codec.expires_at(&session).map_err(|error| api_error(error.into()).into_parts())?;

    let profile = calculate_scent_profile(&session.answers);
    let family = family_from_profile(&profile);

    info!(
        event_name = "quiz.session.created",
        correlation_id = %session.session_id,
        family = %family,
        answers = session.answers.len(),
        "quiz session created"
    );

    let token = token.into_string();
    Ok(Json(SessionCreated {
        results_url: format!("/api/v1/quiz/results?session={token}"),
        token,
        session_id: session.session_id,
        expires_at,
        profile,
        family: family.into(),
    }))
}

pub async fn quiz_results(
    State(state): State<SharedState>,
    Query(query): Query<ResultsQuery>,
) -> ApiResult<QuizResults> {
    let token = query.session.as_deref().map(str::trim).unwrap_or_default();
    if token.is_empty() {
        return Err(api_error(SessionError::Malformed.into()).into_parts());
    }

    let session = state.codec.open(token, Utc::now()).map_err(|error| {
        let rejected = api_error(error.into());
        warn!(
            event_name = "quiz.session.rejected",
            correlation_id = %rejected.body.correlation_id,
            reason = %rejected.body.error,
            "quiz session rejected"
        );
        rejected.into_parts()
    })?;

    let profile = calculate_scent_profile(&session.answers);
    let family = family_from_profile(&profile);
    let recommendations = RecommendationRanker::new(state.catalog)
        .rank(&profile, state.clamp_limit(query.limit));

    info!(
        event_name = "quiz.results.served",
        correlation_id = %session.session_id,
        family = %family,
        recommendations = recommendations.len(),
        "quiz results served"
    );

    Ok(Json(QuizResults {
        session_id: session.session_id,
        profile,
        family: family.into(),
        recommendations,
    }))
}

// ---------------------------------------------------------------------------
// Error mapping
// ---------------------------------------------------------------------------

struct MappedError {
    status: StatusCode,
    body: ApiError,
}

impl MappedError {
    fn into_parts(self) -> (StatusCode, Json<ApiError>) {
        (self.status, Json(self.body))
    }
}

fn api_error(error: ApplicationError) -> MappedError {
    let interface = error.into_interface(Uuid::new_v4().to_string());
    let status = match interface {
        InterfaceError::BadRequest { .. } | InterfaceError::SessionRejected { .. } => {
            StatusCode::BAD_REQUEST
        }
        InterfaceError::NotFound { .. } => StatusCode::NOT_FOUND,
        InterfaceError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    };

    MappedError {
        status,
        body: ApiError {
            error: interface.to_string(),
            message: interface.user_message().to_string(),
            correlation_id: interface.correlation_id().to_string(),
            restart: interface.requires_quiz_restart().then(|| QUIZ_RESTART_PATH.to_string()),
        },
    }
}

#[cfg(test)]
mod tests {
    use axum::{
        body::{to_bytes, Body},
        extract::{Path, Query, State},
        http::{Request, StatusCode},
        Json,
    };
    use chrono::{Duration, Utc};
    use fragrance_core::domain::profile::ScentFamily;
    use fragrance_core::domain::quiz::QuizAnswer;
    use fragrance_core::session::SessionCodec;
    use tower::ServiceExt;

    use super::*;
    use crate::bootstrap::{app_router, tests::test_state};

    fn oud_answers() -> Vec<QuizAnswer> {
        vec![
            QuizAnswer::new("mood", "bold-mysterious"),
            QuizAnswer::new("occasion", "evening-events"),
            QuizAnswer::new("notes", "smoky-woods"),
        ]
    }

    async fn issue_token(state: &SharedState) -> String {
        let Json(created) = create_session(
            State(state.clone()),
            Json(CreateSessionRequest { answers: oud_answers() }),
        )
        .await
        .expect("session should be created");
        created.token
    }

    #[tokio::test]
    async fn list_products_filters_by_category() {
        let Json(all) = list_products(State(test_state()), Query(ProductQuery::default()))
            .await
            .expect("listing");
        assert_eq!(all.total, 20);

        let Json(amber) = list_products(
            State(test_state()),
            Query(ProductQuery { category: Some("amber-gold".to_string()) }),
        )
        .await
        .expect("listing");
        assert!(amber.total > 0);
        assert!(amber.products.iter().all(|product| product.category == Category::AmberGold));
    }

    #[tokio::test]
    async fn list_products_rejects_unknown_category() {
        let (status, Json(body)) = list_products(
            State(test_state()),
            Query(ProductQuery { category: Some("aquatic".to_string()) }),
        )
        .await
        .expect_err("unknown category");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("aquatic"));
    }

    #[tokio::test]
    async fn get_product_returns_not_found_for_unknown_id() {
        let Json(product) = get_product(Path("royal-oud".to_string()), State(test_state()))
            .await
            .expect("known product");
        assert_eq!(product.name, "Royal Oud");

        let (status, Json(body)) = get_product(Path("nope".to_string()), State(test_state()))
            .await
            .expect_err("unknown product");
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.restart, None);
    }

    #[tokio::test]
    async fn collections_resolve_their_products() {
        let Json(collections) = list_collections(State(test_state())).await.expect("collections");
        assert_eq!(collections.len(), 4);

        let Json(oud) = get_collection(Path("oud-reserve".to_string()), State(test_state()))
            .await
            .expect("collection");
        assert_eq!(oud.products.len(), oud.collection.product_ids.len());
        assert!(oud.products.iter().all(|product| product.category == Category::OudRich));
    }

    #[tokio::test]
    async fn create_session_returns_token_and_profile() {
        let Json(created) = create_session(
            State(test_state()),
            Json(CreateSessionRequest { answers: oud_answers() }),
        )
        .await
        .expect("session");

        assert!(created.token.starts_with("v1."));
        assert_eq!(created.family.id, ScentFamily::OudRich);
        assert!((created.profile.total() - 1.0).abs() < 1e-9);
        assert!(created.results_url.ends_with(&created.token));
    }

    #[tokio::test]
    async fn create_session_rejects_invalid_answers() {
        let (status, Json(body)) = create_session(
            State(test_state()),
            Json(CreateSessionRequest { answers: vec![QuizAnswer::new("mood", "sleepy")] }),
        )
        .await
        .expect_err("invalid answers");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("sleepy"));
        assert_eq!(body.restart, None);
    }

    #[tokio::test]
    async fn results_rank_recommendations_for_token() {
        let state = test_state();
        let token = issue_token(&state).await;

        let Json(results) = quiz_results(
            State(state),
            Query(ResultsQuery { session: Some(token), limit: Some(3) }),
        )
        .await
        .expect("results");

        assert_eq!(results.family.id, ScentFamily::OudRich);
        let ids: Vec<&str> =
            results.recommendations.iter().map(|r| r.product.id.as_str()).collect();
        assert_eq!(ids.len(), 3);
        assert_eq!(ids[0], "royal-oud");
    }

    #[tokio::test]
    async fn results_clamp_limit_to_configured_max() {
        let state = test_state();
        let token = issue_token(&state).await;

        let Json(results) = quiz_results(
            State(state),
            Query(ResultsQuery { session: Some(token), limit: Some(500) }),
        )
        .await
        .expect("results");
        assert_eq!(results.recommendations.len(), 20);
    }

    #[tokio::test]
    async fn bad_token_asks_client_to_restart_quiz() {
        for session in [None, Some("garbage".to_string()), Some("v1.00.00".to_string())] {
            let (status, Json(body)) =
                quiz_results(State(test_state()), Query(ResultsQuery { session, limit: None }))
                    .await
                    .expect_err("rejected");
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(body.restart.as_deref(), Some(QUIZ_RESTART_PATH));
            assert!(!body.correlation_id.is_empty());
        }
    }

    #[tokio::test]
    async fn expired_token_asks_client_to_restart_quiz() {
        let state = test_state();
        let (token, _) = state
            .codec
            .issue(&oud_answers(), Utc::now() - Duration::days(2))
            .expect("issue");

        let (status, Json(body)) = quiz_results(
            State(state),
            Query(ResultsQuery { session: Some(token.into_string()), limit: None }),
        )
        .await
        .expect_err("expired");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("expired"));
        assert_eq!(body.restart.as_deref(), Some(QUIZ_RESTART_PATH));
    }

    #[tokio::test]
    async fn token_from_another_deployment_is_rejected() {
        let foreign = SessionCodec::new(
            "another-deployment-secret-0123456789".to_string().into(),
            Duration::hours(1),
        )
        .expect("codec");
        let (token, _) = foreign.issue(&oud_answers(), Utc::now()).expect("issue");

        let (status, Json(body)) = quiz_results(
            State(test_state()),
            Query(ResultsQuery { session: Some(token.into_string()), limit: None }),
        )
        .await
        .expect_err("foreign token");
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.error.contains("signature"));
    }

    #[tokio::test]
    async fn router_serves_quiz_flow_end_to_end() {
        let app = app_router(test_state());

        let request = Request::post("/api/v1/quiz/sessions")
            .header("content-type", "application/json")
            .body(Body::from(
                r#"{"answers":[{"questionId":"mood","answer":"sweet-playful"},{"questionId":"notes","answer":"vanilla-sweets","weight":2.0}]}"#,
            ))
            .expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let created: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(created["family"]["id"], "gourmand-unique");

        let results_url = created["results_url"].as_str().expect("results url");
        let request =
            Request::get(format!("{results_url}&limit=2")).body(Body::empty()).expect("request");
        let response = app.clone().oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.expect("body");
        let results: serde_json::Value = serde_json::from_slice(&bytes).expect("json");
        assert_eq!(results["recommendations"].as_array().map(Vec::len), Some(2));

        let request = Request::get("/health").body(Body::empty()).expect("request");
        let response = app.oneshot(request).await.expect("response");
        assert_eq!(response.status(), StatusCode::OK);
    }
}
