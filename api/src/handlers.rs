use std::time::Duration;

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use shared::{find_country, Country, Investment, InvestmentReceipt};
use tokio::task::JoinHandle;

use crate::{
    envelope::Envelope,
    error::{ApiError, ApiResult},
    metrics,
    state::AppState,
    validation::{validate_investment, SubmissionBody},
};

pub const INVESTMENT_ACCEPTED_MESSAGE: &str = "Investissement enregistré avec succès";
pub const HEALTH_MESSAGE: &str = "Serveur Africa Investment opérationnel";

/// Currency label appended to logged amounts
const AMOUNT_UNIT: &str = "FCFA";

fn now_iso8601() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// POST /api/investment
pub async fn submit_investment(
    State(state): State<AppState>,
    SubmissionBody(req): SubmissionBody,
) -> ApiResult<Json<Envelope<InvestmentReceipt>>> {
    let submission = match validate_investment(&req) {
        Ok(submission) => submission,
        Err(err) => {
            metrics::observe_rejection(err.kind());
            tracing::warn!(kind = err.kind(), error = %err, "investment rejected");
            return Err(ApiError::from(err));
        }
    };

    let investment = submission.accept(Utc::now());
    log_investment(&investment);
    metrics::observe_investment(&investment.submission.network, investment.submission.amount);

    let receipt = investment.receipt();
    spawn_acknowledgment(investment.submission.name, state.config.ack_delay);

    Ok(Json(Envelope::with_data(INVESTMENT_ACCEPTED_MESSAGE, receipt)))
}

/// Structured record of an accepted investment
fn log_investment(investment: &Investment) {
    let submission = &investment.submission;
    let country_label = find_country(&submission.country).map(|c| c.label);
    tracing::info!(
        id = investment.id,
        timestamp = %investment.timestamp(),
        country = %submission.country,
        country_label = country_label.unwrap_or("inconnu"),
        name = %submission.name,
        phone = %submission.formatted_phone(),
        network = %submission.network,
        amount = %format!("{} {}", submission.amount, AMOUNT_UNIT),
        "nouvel investissement reçu"
    );
}

/// Log the processing acknowledgment once `delay` has elapsed.
///
/// Detached from the request: the response never waits for it.
pub fn spawn_acknowledgment(name: String, delay: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        metrics::ACKNOWLEDGMENTS_COMPLETED.inc();
        tracing::info!(name = %name, "investissement traité avec succès");
    })
}

/// GET /api/health
pub async fn health_check() -> (StatusCode, Json<Envelope<()>>) {
    (
        StatusCode::OK,
        Json(Envelope::status(HEALTH_MESSAGE, now_iso8601())),
    )
}

/// GET /api/countries
pub async fn list_countries(
    State(state): State<AppState>,
) -> (StatusCode, Json<Envelope<&'static [Country]>>) {
    (StatusCode::OK, Json(Envelope::list(state.countries)))
}

pub async fn route_not_found() -> impl IntoResponse {
    ApiError::not_found()
}
