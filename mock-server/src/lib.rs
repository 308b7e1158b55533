//! In-process stand-in for the CUFinder API.
//!
//! Every endpoint path accepts a form-encoded POST carrying an `x-api-key`
//! header and answers with a canned payload built from the submitted form.
//! Some payloads come back flat, others wrapped in a `data` envelope, so
//! clients see both shapes.
//!
//! Diagnostic paths used by client tests:
//! - `/echo` answers with the decoded form as a flat JSON object.
//! - `/boom` always fails with status 500 and a plain-text body.
//! - `/garbage` answers 200 with a body that is not JSON.
//! - `/flaky` fails with 503 twice, then succeeds.
//! - `/slow` sleeps for `ms` milliseconds (default 2000) before answering.
//!
//! Any submitted value equal to `unknown` yields a 404.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub type Form = BTreeMap<String, String>;

/// Failures `/flaky` produces before it starts succeeding.
pub const FLAKY_FAILURES: usize = 2;

#[derive(Clone)]
struct AppState {
    api_key: Arc<str>,
    flaky_calls: Arc<AtomicUsize>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorBody {
            error: message.to_string(),
        }),
    )
        .into_response()
}

pub fn app(api_key: &str) -> Router {
    let state = AppState {
        api_key: Arc::from(api_key),
        flaky_calls: Arc::new(AtomicUsize::new(0)),
    };
    Router::new()
        .route("/{endpoint}", post(dispatch))
        .with_state(state)
}

pub async fn run(listener: TcpListener, api_key: &str) -> Result<(), std::io::Error> {
    axum::serve(listener, app(api_key)).await
}

async fn dispatch(
    State(state): State<AppState>,
    Path(endpoint): Path<String>,
    headers: HeaderMap,
    body: String,
) -> Response {
    let key = headers.get("x-api-key").and_then(|v| v.to_str().ok());
    if key != Some(&*state.api_key) {
        tracing::warn!(%endpoint, "rejected request with bad api key");
        return error(StatusCode::UNAUTHORIZED, "invalid api key");
    }

    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if !content_type.starts_with("application/x-www-form-urlencoded") {
        return error(
            StatusCode::UNSUPPORTED_MEDIA_TYPE,
            "expected application/x-www-form-urlencoded",
        );
    }

    let form: Form = url::form_urlencoded::parse(body.as_bytes())
        .into_owned()
        .collect();
    tracing::info!(%endpoint, fields = form.len(), "handling request");

    match endpoint.as_str() {
        "echo" => Json(form).into_response(),
        "boom" => (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response(),
        "garbage" => (StatusCode::OK, "not json").into_response(),
        "flaky" => {
            let call = state.flaky_calls.fetch_add(1, Ordering::SeqCst);
            if call < FLAKY_FAILURES {
                error(StatusCode::SERVICE_UNAVAILABLE, "try again")
            } else {
                Json(json!({ "attempt": call + 1 })).into_response()
            }
        }
        "slow" => {
            let ms = form
                .get("ms")
                .and_then(|ms| ms.parse().ok())
                .unwrap_or(2000);
            tokio::time::sleep(Duration::from_millis(ms)).await;
            Json(json!({})).into_response()
        }
        _ if form.values().any(|v| v == "unknown") => error(StatusCode::NOT_FOUND, "no result"),
        other => match fixture(other, &form) {
            Some(payload) => Json(payload).into_response(),
            None => error(StatusCode::NOT_FOUND, "unknown endpoint"),
        },
    }
}

fn field<'a>(form: &'a Form, name: &str) -> &'a str {
    form.get(name).map(String::as_str).unwrap_or_default()
}

fn envelope(data: Value) -> Value {
    json!({
        "status": 1,
        "data": data,
        "meta_data": { "source": "mock", "version": "v2" },
    })
}

/// Canned payload for an endpoint, or `None` for unknown paths.
pub fn fixture(endpoint: &str, form: &Form) -> Option<Value> {
    let payload = match endpoint {
        "cuf" => json!({
            "query": field(form, "company_name"),
            "credit_count": 1,
            "domain": "techcorp.com",
        }),
        "lcuf" => json!({
            "query": field(form, "company_name"),
            "credit_count": 1,
            "linkedin_url": "https://linkedin.com/company/techcorp",
        }),
        "dtc" => json!({
            "query": field(form, "company_website"),
            "credit_count": 1,
            "company_name": "TechCorp",
        }),
        "dte" => json!({
            "query": field(form, "company_website"),
            "credit_count": 1,
            "emails": ["info@techcorp.com", "sales@techcorp.com"],
        }),
        "ntp" => json!({
            "query": field(form, "company_name"),
            "credit_count": 1,
            "phones": ["+1-555-0100"],
        }),
        "rel" => json!({
            "query": field(form, "email"),
            "credit_count": 1,
            "person": {
                "full_name": "John Doe",
                "first_name": "John",
                "last_name": "Doe",
                "linkedin_followers": "1.2K",
                "job_title": "CTO",
                "company_name": "TechCorp",
            },
        }),
        "fcl" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "companies": [
                { "name": "SimilarCorp", "domain": "similarcorp.com", "type": "Private", "employee_count": 120 },
                { "name": "OtherCorp", "domain": "othercorp.com" },
            ],
        }),
        "elf" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "fundraising_info": {
                "funding_last_round_type": "Series A",
                "funding_ammount_currency_code": "USD",
                "funding_money_raised": "12000000",
            },
        }),
        "car" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "annual_revenue": "$10M-$50M",
        }),
        "fcc" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "subsidiaries": ["TechCorp Labs", "TechCorp Cloud"],
        }),
        "fts" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "technologies": ["Rust", "PostgreSQL", "Kubernetes"],
        }),
        "epp" => envelope(json!({
            "query": field(form, "linkedin_url"),
            "credit_count": 2,
            "confidence_level": 88,
            "person": {
                "full_name": "John Doe",
                "linkedin_url": field(form, "linkedin_url"),
                "linkedin_followers": 1200,
                "job_title": "CTO",
            },
        })),
        "fwe" => envelope(json!({
            "query": field(form, "linkedin_url"),
            "credit_count": 1,
            "work_email": "john.doe@techcorp.com",
        })),
        "tep" => envelope(json!({
            "query": { "full_name": field(form, "full_name"), "company": field(form, "company") },
            "credit_count": 2,
            "confidence_level": 88,
            "person": {
                "full_name": field(form, "full_name"),
                "company_name": field(form, "company"),
                "email": "john.doe@techcorp.com",
                "phone": "+1-555-0101",
                "job_title": "CTO",
            },
        })),
        "enc" => envelope(json!({
            "query": field(form, "query"),
            "credit_count": 2,
            "company": {
                "name": "TechCorp",
                "domain": "techcorp.com",
                "type": "Public",
                "industry": "Software",
                "size": "51-200",
                "employee_count": 150,
            },
        })),
        "cec" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "countries": { "US": 120, "DE": 30 },
        }),
        "clo" => json!({
            "query": field(form, "query"),
            "credit_count": 1,
            "locations": [
                { "country": "US", "state": "CA", "city": "San Francisco", "line1": "1 Market St" },
            ],
        }),
        "cse" => json!({
            "query": form,
            "credit_count": 5,
            "companies": [
                {
                    "name": "TechCorp",
                    "domain": "techcorp.com",
                    "industry": field(form, "industry"),
                    "employees": { "range": "51-200", "count": 150 },
                    "main_location": { "country": field(form, "country") },
                },
            ],
        }),
        "pse" => json!({
            "query": form,
            "credit_count": 5,
            "peoples": [
                {
                    "full_name": "Jane Smith",
                    "current_job": { "title": "Engineering Manager", "role": field(form, "job_title_role") },
                    "location": { "country": field(form, "country") },
                },
            ],
        }),
        "lbs" => json!({
            "query": form,
            "credit_count": 5,
            "companies": [
                { "name": "Corner Cafe", "city": field(form, "city"), "industry": field(form, "industry") },
            ],
        }),
        "bcd" => json!({
            "query": field(form, "url"),
            "credit_count": 1,
            "customers": ["Acme", "Globex"],
        }),
        "ccp" => json!({
            "query": field(form, "url"),
            "credit_count": 1,
            "careers_page_url": "https://techcorp.com/careers",
        }),
        "isc" => json!({
            "query": field(form, "url"),
            "credit_count": 1,
            "is_saas": "yes",
        }),
        "cbc" => json!({
            "query": field(form, "url"),
            "credit_count": 1,
            "business_type": "B2B",
        }),
        "csc" => json!({
            "query": field(form, "url"),
            "credit_count": 1,
            "mission_statement": "Make data useful.",
        }),
        _ => return None,
    };
    Some(payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(pairs: &[(&str, &str)]) -> Form {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn cuf_fixture_echoes_company_name() {
        let payload = fixture("cuf", &form(&[("company_name", "TechCorp")])).unwrap();
        assert_eq!(
            payload,
            json!({"domain": "techcorp.com", "query": "TechCorp", "credit_count": 1})
        );
    }

    #[test]
    fn enveloped_fixtures_carry_meta_data() {
        let payload = fixture("tep", &form(&[("full_name", "John Doe"), ("company", "TechCorp")])).unwrap();
        assert_eq!(payload["data"]["person"]["full_name"], "John Doe");
        assert_eq!(payload["meta_data"]["source"], "mock");
    }

    #[test]
    fn search_fixtures_echo_the_filters() {
        let payload = fixture("lbs", &form(&[("city", "Austin")])).unwrap();
        assert_eq!(payload["query"]["city"], "Austin");
        assert_eq!(payload["companies"][0]["city"], "Austin");
    }

    #[test]
    fn unknown_endpoint_has_no_fixture() {
        assert!(fixture("nope", &Form::new()).is_none());
    }
}
