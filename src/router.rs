//! 路由与中间件栈

use axum::{
    http::{
        header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_LANGUAGE, CONTENT_TYPE},
        HeaderName, HeaderValue,
    },
    middleware,
    response::Json,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowMethods, AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::app::{health, product::handler, state::AppState};
use crate::config::{ConfigError, CorsConfig};
use crate::core::middleware::{request_logging_middleware, REQUEST_ID_HEADER};

pub const GREETING: &str = "Hello, Product Catalog!";

/// 创建路由
pub fn create_router(state: AppState, cors: &CorsConfig) -> Result<Router, ConfigError> {
    let router = Router::new()
        .route("/", get(greet))
        .route("/health", get(health::health_check))
        .route(
            "/products",
            get(handler::list_products).post(handler::create_product),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product),
        )
        .layer(cors_layer(cors)?)
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(request_logging_middleware))
        .with_state(state);

    Ok(router)
}

async fn greet() -> Json<&'static str> {
    Json(GREETING)
}

/// 只放行配置的来源；携带凭证时方法不能用通配符，改为回显预检请求的方法
fn cors_layer(config: &CorsConfig) -> Result<CorsLayer, ConfigError> {
    let origins = config
        .allowed_origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .map_err(|_| ConfigError::Validation(format!("无效的跨域来源: {}", origin)))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers([ACCEPT, ACCEPT_LANGUAGE, CONTENT_LANGUAGE, CONTENT_TYPE])
        .expose_headers([HeaderName::from_static(REQUEST_ID_HEADER)]))
}
