//! Live checks against a real Supabase project.
//!
//! Run with `SUPABASE_URL`, `SUPABASE_ANON_KEY`, `MARKONE_TEST_EMAIL` and
//! `MARKONE_TEST_PASSWORD` set, then `cargo test -- --ignored`.

use super::client::{SupabaseClient, SupabaseConfig};
use crate::dashboard::DashboardSnapshot;

fn get_client() -> SupabaseClient {
    let config = SupabaseConfig::from_env().unwrap();
    SupabaseClient::new(config).unwrap()
}

fn credentials() -> (String, String) {
    (
        std::env::var("MARKONE_TEST_EMAIL").unwrap(),
        std::env::var("MARKONE_TEST_PASSWORD").unwrap(),
    )
}

#[tokio::test]
#[ignore]
async fn test_sign_in_and_get_user() {
    let client = get_client();
    let (email, password) = credentials();

    let session = client.sign_in_with_password(&email, &password).await.unwrap();
    let user = client.get_user(&session.access_token).await.unwrap();
    println!("Signed in as {:?}", user.email);
    assert_eq!(user.id, session.user.id);

    let refreshed = client.refresh_session(&session.refresh_token).await.unwrap();
    assert_eq!(refreshed.user.id, session.user.id);
}

#[tokio::test]
#[ignore]
async fn test_wrong_password_is_rejected() {
    let client = get_client();
    let (email, _) = credentials();

    let err = client
        .sign_in_with_password(&email, "definitely-not-the-password")
        .await
        .unwrap_err();
    println!("Rejected with: {}", err);
}

#[tokio::test]
#[ignore]
async fn test_dashboard_snapshot() {
    let client = get_client();
    let (email, password) = credentials();
    let session = client.sign_in_with_password(&email, &password).await.unwrap();

    let sensors = client
        .list_sensors(&session.access_token, &session.user.id)
        .await
        .unwrap();
    let ids: Vec<String> = sensors.iter().map(|s| s.sensor_id.clone()).collect();
    let readings = client.list_readings(&session.access_token, &ids).await.unwrap();

    // newest first
    assert!(readings.windows(2).all(|w| w[0].timestamp >= w[1].timestamp));

    let snapshot = DashboardSnapshot::build(sensors, &readings, chrono::Utc::now());
    println!("Stats: {:#?}", snapshot.stats);
    assert_eq!(snapshot.stats.total_sensors, snapshot.tiles.len());

    let profile = client
        .get_profile(&session.access_token, &session.user.id)
        .await
        .unwrap();
    println!("Profile: {:?}", profile);
}

#[tokio::test]
async fn test_no_sensor_ids_skips_request() {
    // Bogus credentials: the call must return before touching the network
    let client = SupabaseClient::new(SupabaseConfig {
        url: "http://127.0.0.1:9".into(),
        anon_key: "anon".into(),
        site_url: None,
        refresh_secs: 60,
    })
    .unwrap();
    let readings = client.list_readings("token", &[]).await.unwrap();
    assert!(readings.is_empty());
}
