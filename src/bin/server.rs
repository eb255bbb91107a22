//! REST API server for checkout card input validation.
//!
//! # Usage
//!
//! ```bash
//! # Start server
//! cardcheck-server
//!
//! # With custom bind address
//! cardcheck-server --host 127.0.0.1 --port 8080
//! CARDCHECK_PORT=8080 cardcheck-server
//! ```
//!
//! # Swagger UI
//!
//! Visit http://localhost:3000/swagger-ui/ for interactive API documentation.

use std::collections::BTreeMap;
use std::net::{IpAddr, SocketAddr};

use axum::{
    extract::Query,
    http::{header, Method},
    response::Json,
    routing::{get, post},
    Router,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::{IntoParams, OpenApi, ToSchema};
use utoipa_swagger_ui::SwaggerUi;

use card_input::{
    check_card_number, cvv, expiry, format, get_card_type, mask::mask_card_number, CheckoutForm,
    Field,
};

// ============================================================================
// Configuration
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "cardcheck-server", version, about = "Card input validation REST API")]
struct Config {
    /// Address to bind
    #[arg(long, env = "CARDCHECK_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port to listen on
    #[arg(short, long, env = "CARDCHECK_PORT", default_value_t = 3000)]
    port: u16,
}

// ============================================================================
// OpenAPI Documentation
// ============================================================================

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Card Input Validation API",
        version = "0.1.0",
        description = "Checkout card input validation: formatting, Luhn, expiry, CVV and network detection. Client-side gate only; the payment provider decides acceptance.",
        license(name = "MIT")
    ),
    tags(
        (name = "Card Number", description = "Card number formatting and validation"),
        (name = "Detection", description = "Card network detection from partial numbers"),
        (name = "CVV", description = "CVV/CVC/CID validation"),
        (name = "Expiry", description = "MM/YY expiry date validation"),
        (name = "Checkout", description = "Whole-form validation"),
        (name = "System", description = "Health and status endpoints")
    ),
    paths(
        format_card,
        validate_card,
        card_type,
        validate_expiry_handler,
        validate_cvv_handler,
        validate_checkout,
        health,
    ),
    components(schemas(
        CardNumberRequest,
        FormatResponse,
        ValidateResponse,
        CardTypeQuery,
        CardTypeResponse,
        ExpiryRequest,
        ExpiryResponse,
        CvvRequest,
        CvvResponse,
        CheckoutRequest,
        CheckoutResponse,
        HealthResponse,
    ))
)]
struct ApiDoc;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"card_number": "4111 1111 1111 1111"}))]
struct CardNumberRequest {
    /// Card number, raw or grouped with spaces
    card_number: String,
}

#[derive(Serialize, ToSchema)]
struct FormatResponse {
    /// Card number regrouped in runs of four
    formatted: String,
    /// Whether the checkout form would accept this input (at most 16 digits)
    accepted: bool,
}

#[derive(Serialize, ToSchema)]
#[schema(example = json!({
    "valid": true,
    "network": "visa",
    "masked": "**** **** **** 1111"
}))]
struct ValidateResponse {
    /// Whether the number has 13-19 digits and passes the Luhn checksum
    valid: bool,
    /// Network identifier: visa, mastercard, amex, jcb or unionpay
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<String>,
    /// Card number with all but the last four digits masked
    #[serde(skip_serializing_if = "Option::is_none")]
    masked: Option<String>,
    /// Why validation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize, ToSchema, IntoParams)]
struct CardTypeQuery {
    /// Card number or prefix
    card: String,
}

#[derive(Serialize, ToSchema)]
struct CardTypeResponse {
    /// Network identifier, absent when the prefix is not recognised
    network: Option<String>,
    /// Display name of the network
    name: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"date": "12/30"}))]
struct ExpiryRequest {
    /// Expiry date, exactly MM/YY
    date: String,
}

#[derive(Serialize, ToSchema)]
struct ExpiryResponse {
    /// Whether the expiry is well-formed and not before the current month
    valid: bool,
    /// Month (1-12)
    #[serde(skip_serializing_if = "Option::is_none")]
    month: Option<u8>,
    /// Two-digit year
    #[serde(skip_serializing_if = "Option::is_none")]
    year: Option<u8>,
    /// Error message if validation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[schema(example = json!({"cvv": "123"}))]
struct CvvRequest {
    /// CVV/CVC/CID code (3-4 digits)
    cvv: String,
}

#[derive(Serialize, ToSchema)]
struct CvvResponse {
    /// Whether the CVV is valid
    valid: bool,
    /// Error message if validation failed
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[schema(example = json!({
    "cardNumber": "4111 1111 1111 1111",
    "expiryDate": "12/30",
    "cvv": "123",
    "nameOnCard": "Jordan Lee"
}))]
struct CheckoutRequest {
    card_number: String,
    expiry_date: String,
    cvv: String,
    name_on_card: String,
}

#[derive(Serialize, ToSchema)]
struct CheckoutResponse {
    /// Whether every field is valid
    valid: bool,
    /// Network of the card number, if recognised
    #[serde(skip_serializing_if = "Option::is_none")]
    network: Option<String>,
    /// Error message per field name (cardNumber, expiryDate, cvv, nameOnCard)
    errors: BTreeMap<String, String>,
}

#[derive(Serialize, ToSchema)]
struct HealthResponse {
    /// Service status
    status: String,
    /// API version
    version: String,
}

// ============================================================================
// Handlers
// ============================================================================

/// Format a card number in groups of four
#[utoipa::path(
    post,
    path = "/card-number/format",
    request_body = CardNumberRequest,
    responses(
        (status = 200, description = "Formatted card number", body = FormatResponse)
    ),
    tag = "Card Number"
)]
async fn format_card(Json(req): Json<CardNumberRequest>) -> Json<FormatResponse> {
    Json(FormatResponse {
        formatted: format::format_card_number(&req.card_number),
        accepted: format::format_card_number_input(&req.card_number).is_some(),
    })
}

/// Validate a card number
#[utoipa::path(
    post,
    path = "/card-number/validate",
    request_body = CardNumberRequest,
    responses(
        (status = 200, description = "Validation result", body = ValidateResponse)
    ),
    tag = "Card Number"
)]
async fn validate_card(Json(req): Json<CardNumberRequest>) -> Json<ValidateResponse> {
    let masked = mask_card_number(&req.card_number);

    match check_card_number(&req.card_number) {
        Ok(()) => {
            tracing::debug!(card = %masked, "card number valid");
            Json(ValidateResponse {
                valid: true,
                network: get_card_type(&req.card_number).map(|n| n.to_string()),
                masked: Some(masked),
                error: None,
            })
        }
        Err(e) => {
            tracing::debug!(card = %masked, error = %e, "card number rejected");
            Json(ValidateResponse {
                valid: false,
                network: None,
                masked: None,
                error: Some(e.to_string()),
            })
        }
    }
}

/// Detect the card network from a (partial) number
#[utoipa::path(
    get,
    path = "/card-type",
    params(CardTypeQuery),
    responses(
        (status = 200, description = "Detected network", body = CardTypeResponse)
    ),
    tag = "Detection"
)]
async fn card_type(Query(query): Query<CardTypeQuery>) -> Json<CardTypeResponse> {
    let network = get_card_type(&query.card);
    Json(CardTypeResponse {
        network: network.map(|n| n.to_string()),
        name: network.map(|n| n.name().to_string()),
    })
}

/// Validate an MM/YY expiry date
#[utoipa::path(
    post,
    path = "/expiry/validate",
    request_body = ExpiryRequest,
    responses(
        (status = 200, description = "Expiry validation result", body = ExpiryResponse)
    ),
    tag = "Expiry"
)]
async fn validate_expiry_handler(Json(req): Json<ExpiryRequest>) -> Json<ExpiryResponse> {
    match expiry::check_expiry_date(&req.date) {
        Ok(exp) => Json(ExpiryResponse {
            valid: true,
            month: Some(exp.month()),
            year: Some(exp.year()),
            error: None,
        }),
        Err(e) => Json(ExpiryResponse {
            valid: false,
            month: None,
            year: None,
            error: Some(e.to_string()),
        }),
    }
}

/// Validate a CVV/CVC code
#[utoipa::path(
    post,
    path = "/cvv/validate",
    request_body = CvvRequest,
    responses(
        (status = 200, description = "CVV validation result", body = CvvResponse)
    ),
    tag = "CVV"
)]
async fn validate_cvv_handler(Json(req): Json<CvvRequest>) -> Json<CvvResponse> {
    let result = cvv::check_cvv(&req.cvv);
    Json(CvvResponse {
        valid: result.is_ok(),
        error: result.err().map(|e| e.to_string()),
    })
}

/// Validate all checkout form fields at once
///
/// Each field goes through the same keystroke formatting the browser form
/// applies before validation. A field that the formatter rejects is
/// reported as invalid.
#[utoipa::path(
    post,
    path = "/checkout/validate",
    request_body = CheckoutRequest,
    responses(
        (status = 200, description = "Per-field validation result", body = CheckoutResponse)
    ),
    tag = "Checkout"
)]
async fn validate_checkout(Json(req): Json<CheckoutRequest>) -> Json<CheckoutResponse> {
    let mut form = CheckoutForm::new();
    let mut rejected = Vec::new();

    for (field, value) in [
        (Field::CardNumber, &req.card_number),
        (Field::ExpiryDate, &req.expiry_date),
        (Field::Cvv, &req.cvv),
        (Field::NameOnCard, &req.name_on_card),
    ] {
        if !form.handle_input(field, value) {
            rejected.push(field);
        }
    }

    form.validate();

    let mut errors: BTreeMap<String, String> = form
        .errors()
        .iter()
        .map(|(field, message)| (field.to_string(), message.to_string()))
        .collect();
    for field in rejected {
        errors.insert(field.to_string(), field.error_message().to_string());
    }

    tracing::debug!(form = ?form, invalid = errors.len(), "checkout validated");

    Json(CheckoutResponse {
        valid: errors.is_empty(),
        network: form.card_network().map(|n| n.to_string()),
        errors,
    })
}

/// Health check
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse)
    ),
    tag = "System"
)]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Main
// ============================================================================

fn router() -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .allow_origin(Any);

    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .route("/card-number/format", post(format_card))
        .route("/card-number/validate", post(validate_card))
        .route("/card-type", get(card_type))
        .route("/expiry/validate", post(validate_expiry_handler))
        .route("/cvv/validate", post(validate_cvv_handler))
        .route("/checkout/validate", post(validate_checkout))
        .route("/health", get(health))
        .layer(cors)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::parse();
    let addr = SocketAddr::new(config.host, config.port);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Starting server on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}:{}/swagger-ui/", "localhost", config.port);

    axum::serve(listener, router()).await
}
