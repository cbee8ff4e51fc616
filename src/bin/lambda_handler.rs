//! AWS Lambda handler exposing the projection engine as a JSON API
//!
//! Routes (all POST):
//! - `/emi`     - monthly installment for a loan
//! - `/growth`  - recurring-contribution or lump-sum projection
//! - `/compare` - prepay-vs-invest strategy comparison
//!
//! Supports Lambda Function URLs for direct HTTP access.

use fincalc::plan::Frequency;
use fincalc::projection::{
    compare_loan_strategies, compute_emi, project_contribution_growth, project_lump_sum,
    ScenarioResult, StrategyComparison,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde::{Deserialize, Serialize};

/// Input for the /emi route
#[derive(Debug, Deserialize)]
struct EmiRequest {
    principal: f64,
    annual_rate_percent: f64,
    tenure_months: u32,
}

/// Output from the /emi route
#[derive(Debug, Serialize)]
struct EmiResponse {
    emi: f64,
    total_payment: f64,
    total_interest: f64,
    execution_time_ms: u64,
}

/// Input for the /growth route
///
/// With `lump_sum` set the request projects a single opening deposit;
/// otherwise it projects the recurring contribution plan.
#[derive(Debug, Deserialize)]
struct GrowthRequest {
    #[serde(default)]
    periodic_amount: f64,

    annual_rate_percent: f64,

    total_months: u32,

    #[serde(default = "default_frequency")]
    frequency: Frequency,

    #[serde(default)]
    lump_sum: Option<f64>,
}

fn default_frequency() -> Frequency {
    Frequency::Monthly
}

/// Output from the /growth route
#[derive(Debug, Serialize)]
struct GrowthResponse {
    result: ScenarioResult,
    execution_time_ms: u64,
}

/// Input for the /compare route
#[derive(Debug, Deserialize)]
struct CompareRequest {
    principal: f64,

    current_emi: f64,

    annual_rate_percent: f64,

    remaining_tenure_months: u32,

    #[serde(default)]
    monthly_surplus: f64,

    #[serde(default = "default_investment_return")]
    investment_return_percent: f64,
}

fn default_investment_return() -> f64 {
    7.0
}

/// Output from the /compare route
#[derive(Debug, Serialize)]
struct CompareResponse {
    #[serde(flatten)]
    comparison: StrategyComparison,
    execution_time_ms: u64,
}

fn error_response(status: u16, message: &str) -> Response<Body> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(format!(r#"{{"error":"{}"}}"#, message)))
        .unwrap()
}

fn json_response<T: Serialize>(body: &T) -> Response<Body> {
    Response::builder()
        .status(200)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
        .body(Body::Text(serde_json::to_string(body).unwrap()))
        .unwrap()
}

/// Lambda handler function
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(Response::builder()
            .status(200)
            .header("Access-Control-Allow-Origin", "*")
            .header("Access-Control-Allow-Methods", "POST, OPTIONS")
            .header("Access-Control-Allow-Headers", "Content-Type")
            .body(Body::Empty)
            .unwrap());
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let path = event.uri().path().to_string();
    let elapsed_ms = |start: std::time::Instant| start.elapsed().as_millis() as u64;

    if path.ends_with("/emi") {
        let request: EmiRequest = match serde_json::from_str(&body_str) {
            Ok(r) => r,
            Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
        };
        let emi = match compute_emi(
            request.principal,
            request.annual_rate_percent,
            request.tenure_months,
        ) {
            Ok(emi) => emi,
            Err(e) => return Ok(error_response(422, &e.to_string())),
        };
        let total_payment = emi * request.tenure_months as f64;
        return Ok(json_response(&EmiResponse {
            emi,
            total_payment,
            total_interest: total_payment - request.principal,
            execution_time_ms: elapsed_ms(start),
        }));
    }

    if path.ends_with("/growth") {
        let request: GrowthRequest = match serde_json::from_str(&body_str) {
            Ok(r) => r,
            Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
        };
        let result = match request.lump_sum {
            Some(principal) => {
                project_lump_sum(principal, request.annual_rate_percent, request.total_months)
            }
            None => project_contribution_growth(
                request.periodic_amount,
                request.annual_rate_percent,
                request.total_months,
                request.frequency,
            ),
        };
        return match result {
            Ok(result) => Ok(json_response(&GrowthResponse {
                result,
                execution_time_ms: elapsed_ms(start),
            })),
            Err(e) => Ok(error_response(422, &e.to_string())),
        };
    }

    if path.ends_with("/compare") {
        let request: CompareRequest = match serde_json::from_str(&body_str) {
            Ok(r) => r,
            Err(e) => return Ok(error_response(400, &format!("Invalid JSON: {}", e))),
        };
        return match compare_loan_strategies(
            request.principal,
            request.current_emi,
            request.annual_rate_percent,
            request.remaining_tenure_months,
            request.monthly_surplus,
            request.investment_return_percent,
        ) {
            Ok(comparison) => Ok(json_response(&CompareResponse {
                comparison,
                execution_time_ms: elapsed_ms(start),
            })),
            Err(e) => Ok(error_response(422, &e.to_string())),
        };
    }

    Ok(error_response(404, "unknown route"))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
