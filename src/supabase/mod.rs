use dioxus::prelude::*;

use crate::dashboard::DashboardSnapshot;
use models::Session;

#[cfg(feature = "server")]
pub mod client;
pub mod error;
pub mod models;
#[cfg(all(test, feature = "server"))]
mod tests;

pub use error::SupabaseError;

#[cfg(feature = "server")]
static SUPABASE_CLIENT: tokio::sync::OnceCell<client::SupabaseClient> =
    tokio::sync::OnceCell::const_new();

#[cfg(feature = "server")]
pub async fn get_supabase_client() -> Result<&'static client::SupabaseClient, ServerFnError> {
    SUPABASE_CLIENT
        .get_or_try_init(|| async {
            let config = client::SupabaseConfig::from_env()?;
            tracing::info!("Using Supabase project at {}", config.url);
            client::SupabaseClient::new(config)
        })
        .await
        .map_err(to_server_error)
}

#[cfg(feature = "server")]
fn to_server_error(e: SupabaseError) -> ServerFnError {
    ServerFnError::new(e.to_string())
}

#[server]
pub async fn sign_in(email: String, password: String) -> Result<Session, ServerFnError> {
    let client = get_supabase_client().await?;
    let session = client
        .sign_in_with_password(email.trim(), &password)
        .await
        .map_err(|e| {
            tracing::warn!("Sign in failed: {}", e);
            to_server_error(e)
        })?;
    tracing::info!("Signed in user {}", session.user.id);
    Ok(session)
}

#[server]
pub async fn refresh(refresh_token: String) -> Result<Session, ServerFnError> {
    let client = get_supabase_client().await?;
    client
        .refresh_session(&refresh_token)
        .await
        .map_err(to_server_error)
}

#[server]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    let client = get_supabase_client().await?;
    let redirect = client.config().recovery_redirect();
    client
        .recover_password(email.trim(), redirect.as_deref())
        .await
        .map_err(to_server_error)
}

#[server]
pub async fn update_password(access_token: String, password: String) -> Result<(), ServerFnError> {
    let client = get_supabase_client().await?;
    let user = client
        .update_password(&access_token, &password)
        .await
        .map_err(to_server_error)?;
    tracing::info!("Password updated for user {}", user.id);
    Ok(())
}

#[server]
pub async fn sign_out(access_token: String) -> Result<(), ServerFnError> {
    let client = get_supabase_client().await?;
    client.sign_out(&access_token).await.map_err(to_server_error)
}

/// Name shown in the header, `None` when the user has no profile row.
#[server]
pub async fn get_display_name(access_token: String, user_id: String) -> Result<Option<String>, ServerFnError> {
    let client = get_supabase_client().await?;
    let profile = client
        .get_profile(&access_token, &user_id)
        .await
        .map_err(to_server_error)?;
    Ok(profile
        .and_then(|p| p.display_name)
        .filter(|name| !name.trim().is_empty()))
}

/// Seconds between dashboard refreshes, 0 when disabled.
#[server]
pub async fn refresh_interval() -> Result<u64, ServerFnError> {
    let client = get_supabase_client().await?;
    Ok(client.config().refresh_secs)
}

#[server]
pub async fn load_dashboard(access_token: String) -> Result<DashboardSnapshot, ServerFnError> {
    let client = get_supabase_client().await?;

    let user = client.get_user(&access_token).await.map_err(to_server_error)?;
    let sensors = client
        .list_sensors(&access_token, &user.id)
        .await
        .map_err(to_server_error)?;

    let sensor_ids: Vec<String> = sensors.iter().map(|s| s.sensor_id.clone()).collect();
    // A failed readings query still renders the sensors, just without values
    let readings = match client.list_readings(&access_token, &sensor_ids).await {
        Ok(readings) => readings,
        Err(e) => {
            tracing::warn!("Failed to load readings for user {}: {}", user.id, e);
            Vec::new()
        }
    };

    tracing::debug!(
        "Loaded {} sensors and {} readings for user {}",
        sensors.len(),
        readings.len(),
        user.id
    );

    Ok(DashboardSnapshot::build(sensors, &readings, chrono::Utc::now()))
}
