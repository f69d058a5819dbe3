//! AWS Lambda handler for running calculators
//!
//! Accepts a calculator request via JSON and returns the calculator's result.
//!
//! Supports Lambda Function URLs for direct HTTP access.

use chrono::{DateTime, Utc};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
use log::{info, warn};
use serde::Serialize;

use wealth_projection::{CalculatorOutput, CalculatorRequest, ScenarioRunner};

/// Output of one calculator run
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorResponse {
    pub calculator: &'static str,
    pub title: &'static str,
    pub result: CalculatorOutput,
    pub computed_at: DateTime<Utc>,
    pub execution_time_us: u64,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

fn cors(builder: lambda_http::http::response::Builder) -> lambda_http::http::response::Builder {
    builder
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", "POST, OPTIONS")
        .header("Access-Control-Allow-Headers", "Content-Type")
}

fn json_response<T: Serialize>(status: u16, body: &T) -> Result<Response<Body>, Error> {
    let text = serde_json::to_string(body)?;
    let response = cors(Response::builder())
        .status(status)
        .header("Content-Type", "application/json")
        .body(Body::Text(text))?;
    Ok(response)
}

fn error_response(status: u16, message: String) -> Result<Response<Body>, Error> {
    json_response(status, &ErrorBody { error: message })
}

/// Lambda handler function
async fn handler(runner: &ScenarioRunner, event: Request) -> Result<Response<Body>, Error> {
    let start = std::time::Instant::now();

    // Handle CORS preflight
    if event.method().as_str() == "OPTIONS" {
        return Ok(cors(Response::builder()).status(200).body(Body::Empty)?);
    }

    let body_str = match event.body() {
        Body::Text(s) => s.clone(),
        Body::Binary(b) => String::from_utf8_lossy(b).to_string(),
        Body::Empty => "{}".to_string(),
    };

    let request: CalculatorRequest = match serde_json::from_str(&body_str) {
        Ok(r) => r,
        Err(e) => return error_response(400, format!("Invalid JSON: {}", e)),
    };
    let calculator = request.calculator();

    let result = match runner.run(&request) {
        Ok(output) => output,
        Err(e) => {
            warn!("rejected {} request: {}", calculator, e);
            return error_response(400, e.to_string());
        }
    };

    let execution_time_us = start.elapsed().as_micros() as u64;
    info!("{} computed in {}us", calculator, execution_time_us);

    json_response(
        200,
        &CalculatorResponse {
            calculator: calculator.slug(),
            title: calculator.title(),
            result,
            computed_at: Utc::now(),
            execution_time_us,
        },
    )
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    let runner = ScenarioRunner::new();
    let runner = &runner;
    run(service_fn(move |event: Request| async move { handler(runner, event).await })).await
}
