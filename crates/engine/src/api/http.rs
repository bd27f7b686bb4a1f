//! HTTP routes.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;

use pantry_domain::{DomainError, ItemName, ProductId};
use pantry_shared::{ProductCreated, ProductForm, ProductRow, SearchQuery, StockLine};

use crate::app::App;
use crate::infrastructure::ports::RepoError;
use crate::use_cases::{CatalogError, LedgerError};

/// Create all HTTP routes.
pub fn routes() -> Router<Arc<App>> {
    Router::new()
        .route("/", get(health))
        .route("/api/health", get(health))
        .route("/api/pantry", get(list_stock))
        .route("/api/pantry/{name}", get(get_stock))
        .route("/api/pantry/{name}/add", post(add_stock))
        .route("/api/pantry/{name}/remove", post(remove_stock))
        .route("/api/products", get(list_products).post(create_product))
        .route(
            "/api/products/{id}",
            get(get_product).put(update_product).delete(delete_product),
        )
}

async fn health() -> &'static str {
    "OK"
}

// =============================================================================
// Pantry
// =============================================================================

async fn list_stock(State(app): State<Arc<App>>) -> Result<Json<Vec<StockLine>>, ApiError> {
    Ok(Json(app.use_cases.projection.stock.execute().await?))
}

async fn get_stock(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<StockLine>, ApiError> {
    let name = ItemName::new(name)?;
    let item = app
        .use_cases
        .ledger
        .lookup
        .execute(&name)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(StockLine::from(&item)))
}

async fn add_stock(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StockLine>>, ApiError> {
    let name = ItemName::new(name)?;
    app.use_cases.ledger.add_one.execute(&name).await?;
    list_stock(State(app)).await
}

async fn remove_stock(
    State(app): State<Arc<App>>,
    Path(name): Path<String>,
) -> Result<Json<Vec<StockLine>>, ApiError> {
    let name = ItemName::new(name)?;
    app.use_cases.ledger.remove_one.execute(&name).await?;
    list_stock(State(app)).await
}

// =============================================================================
// Products
// =============================================================================

async fn list_products(
    State(app): State<Arc<App>>,
    Query(query): Query<SearchQuery>,
) -> Result<Json<Vec<ProductRow>>, ApiError> {
    let rows = app
        .use_cases
        .projection
        .products
        .execute(query.search.as_deref())
        .await?;
    Ok(Json(rows))
}

async fn all_products(app: &App) -> Result<Vec<ProductRow>, ApiError> {
    Ok(app.use_cases.projection.products.execute(None).await?)
}

async fn create_product(
    State(app): State<Arc<App>>,
    Json(form): Json<ProductForm>,
) -> Result<(StatusCode, Json<ProductCreated>), ApiError> {
    let draft = form.to_draft()?;
    let product = app.use_cases.catalog.add.execute(draft).await?;
    let products = all_products(&app).await?;
    Ok((
        StatusCode::CREATED,
        Json(ProductCreated {
            id: product.id.to_string(),
            products,
        }),
    ))
}

async fn get_product(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<ProductRow>, ApiError> {
    let id = ProductId::new(id)?;
    let product = app
        .use_cases
        .catalog
        .get
        .execute(&id)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(ProductRow::from(&product)))
}

async fn update_product(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
    Json(form): Json<ProductForm>,
) -> Result<Json<Vec<ProductRow>>, ApiError> {
    let id = ProductId::new(id)?;
    let draft = form.to_draft()?;
    app.use_cases
        .catalog
        .edit
        .execute(&id, draft)
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(all_products(&app).await?))
}

async fn delete_product(
    State(app): State<Arc<App>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<ProductRow>>, ApiError> {
    let id = ProductId::new(id)?;
    app.use_cases.catalog.delete.execute(&id).await?;
    Ok(Json(all_products(&app).await?))
}

// =============================================================================
// Errors
// =============================================================================

#[derive(Debug)]
pub enum ApiError {
    NotFound,
    BadRequest(String),
    /// The store could not be reached or kept losing write races.
    Unavailable(String),
    Internal(String),
}

impl axum::response::IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => (StatusCode::NOT_FOUND, "Not found").into_response(),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg).into_response(),
            ApiError::Unavailable(cause) => {
                tracing::warn!(error = %cause, "Store unavailable");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Store unavailable, try again",
                )
                    .into_response()
            }
            ApiError::Internal(cause) => {
                tracing::error!(error = %cause, "Request failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal error").into_response()
            }
        }
    }
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        ApiError::BadRequest(e.to_string())
    }
}

impl From<RepoError> for ApiError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::Database { .. } | RepoError::Conflict { .. } => {
                ApiError::Unavailable(e.to_string())
            }
            RepoError::Serialization(_) => ApiError::Internal(e.to_string()),
        }
    }
}

impl From<LedgerError> for ApiError {
    fn from(e: LedgerError) -> Self {
        match e {
            LedgerError::Domain(e) => e.into(),
            LedgerError::Repo(e) => e.into(),
            LedgerError::Contention { .. } => ApiError::Unavailable(e.to_string()),
        }
    }
}

impl From<CatalogError> for ApiError {
    fn from(e: CatalogError) -> Self {
        match e {
            CatalogError::Domain(e) => e.into(),
            CatalogError::Repo(e) => e.into(),
            CatalogError::Contention { .. } => ApiError::Unavailable(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::memory::InMemoryDocumentStore;
    use crate::infrastructure::ports::{DocumentStore, MockDocumentStore};
    use crate::use_cases::RetryConfig;
    use axum::{
        body::Body,
        http::{header::CONTENT_TYPE, Method, Request as HttpRequest},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn router_with(store: Arc<dyn DocumentStore>) -> Router {
        routes().with_state(Arc::new(App::new(store, RetryConfig::immediate(3))))
    }

    fn router() -> Router {
        router_with(Arc::new(InMemoryDocumentStore::new()))
    }

    async fn send(router: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Vec<u8>) {
        let builder = HttpRequest::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, body.to_vec())
    }

    fn json_body(body: &[u8]) -> Value {
        serde_json::from_slice(body).unwrap()
    }

    fn milk_form() -> Value {
        json!({
            "name": "Milk",
            "category": "Dairy Products",
            "price": "2.5",
            "quantity": "3",
            "unit": "Liter (L)",
        })
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let (status, body) = send(&router(), Method::GET, "/api/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(&body[..], b"OK");
    }

    #[tokio::test]
    async fn pantry_add_and_remove_return_refreshed_list() {
        let router = router();

        send(&router, Method::POST, "/api/pantry/apple/add", None).await;
        let (status, body) = send(&router, Method::POST, "/api/pantry/apple/add", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            json_body(&body),
            json!([{"name": "apple", "label": "Apple", "quantity": 2}])
        );

        send(&router, Method::POST, "/api/pantry/apple/remove", None).await;
        let (_, body) = send(&router, Method::GET, "/api/pantry/apple", None).await;
        assert_eq!(json_body(&body)["quantity"], json!(1));

        let (status, body) = send(&router, Method::POST, "/api/pantry/apple/remove", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!([]));

        let (status, _) = send(&router, Method::GET, "/api/pantry/apple", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn removing_unknown_item_is_not_an_error() {
        let (status, body) = send(&router(), Method::POST, "/api/pantry/kiwi/remove", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!([]));
    }

    #[tokio::test]
    async fn blank_item_name_is_rejected() {
        let (status, _) = send(&router(), Method::POST, "/api/pantry/%20/add", None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn product_lifecycle() {
        let router = router();

        let (status, body) = send(&router, Method::POST, "/api/products", Some(milk_form())).await;
        assert_eq!(status, StatusCode::CREATED);
        let created = json_body(&body);
        let id = created["id"].as_str().unwrap().to_string();
        assert_eq!(
            created["products"],
            json!([{
                "id": id,
                "name": "Milk",
                "category": "Dairy Products",
                "price": 2.5,
                "quantity": 3,
                "unit": "Liter (L)",
            }])
        );

        let mut edited = milk_form();
        edited["name"] = json!("Oat milk");
        let uri = format!("/api/products/{id}");
        let (status, body) = send(&router, Method::PUT, &uri, Some(edited)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body)[0]["name"], json!("Oat milk"));

        let (status, body) = send(&router, Method::GET, "/api/products?search=OAT", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body).as_array().map(Vec::len), Some(1));

        let (status, body) = send(&router, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(json_body(&body), json!([]));

        let (status, _) = send(&router, Method::GET, &uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn malformed_price_is_rejected_and_nothing_stored() {
        let router = router();
        let mut form = milk_form();
        form["price"] = json!("two fifty");

        let (status, _) = send(&router, Method::POST, "/api/products", Some(form)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (_, body) = send(&router, Method::GET, "/api/products", None).await;
        assert_eq!(json_body(&body), json!([]));
    }

    #[tokio::test]
    async fn editing_unknown_product_returns_404() {
        let (status, _) = send(
            &router(),
            Method::PUT,
            "/api/products/nope",
            Some(milk_form()),
        )
        .await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn store_failure_returns_503_without_cause() {
        let mut store = MockDocumentStore::new();
        store
            .expect_list()
            .returning(|_| Err(RepoError::database("list", "secret-host:5432 refused")));

        let (status, body) = send(
            &router_with(Arc::new(store)),
            Method::GET,
            "/api/pantry",
            None,
        )
        .await;

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(!String::from_utf8_lossy(&body).contains("secret-host"));
    }

    #[tokio::test]
    async fn corrupt_stored_document_returns_500() {
        let store = Arc::new(InMemoryDocumentStore::new());
        let mut fields = crate::infrastructure::ports::Fields::new();
        fields.insert("quantity".into(), json!(0));
        store.set("inventory", "apple", fields).await.unwrap();

        let (status, _) = send(&router_with(store), Method::GET, "/api/pantry", None).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }
}
