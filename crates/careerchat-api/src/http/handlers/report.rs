//! GET /report - Career report page.

use axum::extract::State;
use axum::response::Html;
use tracing::debug;

use careerchat_core::report::career_report;

use crate::http::error::AppError;
use crate::http::pages::render_report;
use crate::http::session::BrowserSession;
use crate::state::AppState;

/// Render the career report.
///
/// The conversation is loaded for logging only; the report content is fixed.
/// No session is created here.
pub async fn report_page(
    State(state): State<AppState>,
    session: BrowserSession,
) -> Result<Html<String>, AppError> {
    let turns = if session.is_new() {
        0
    } else {
        state.chat_service.load_session(&session.id).await?.len()
    };
    debug!(session_id = %session.id, turns, "Rendering career report");

    Ok(Html(render_report(&career_report())))
}
