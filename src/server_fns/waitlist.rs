use leptos::prelude::*;

/// Record a waitlist sign-up on the server.
#[server]
pub async fn join_waitlist(email: String) -> Result<(), ServerFnError> {
    use axum::Extension;
    use crate::{db, state::AppState, waitlist};
    use leptos_axum::extract;

    let Extension(state) = extract::<Extension<AppState>>()
        .await
        .map_err(|e| ServerFnError::new(e.to_string()))?;

    let email = waitlist::normalize_email(&email).map_err(|e| ServerFnError::new(e.to_string()))?;
    let id = uuid::Uuid::new_v4().to_string();
    let created_at = chrono::Utc::now().to_rfc3339();

    db::insert_signup(&state.db, &id, &email, &created_at)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "failed to store waitlist sign-up");
            ServerFnError::new("Could not join the waitlist, please try again")
        })?;

    tracing::info!(%id, "waitlist sign-up stored");
    Ok(())
}
