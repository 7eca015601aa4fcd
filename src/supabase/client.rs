use chrono::Utc;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde_json::json;

use super::error::{Result, SupabaseError};
use super::models::{AuthUser, Sensor, Session, TemperatureReading, TokenResponse, UserProfile};

const DEFAULT_REFRESH_SECS: u64 = 60;

/// Connection settings, read once from the environment on the server.
#[derive(Debug, Clone, PartialEq)]
pub struct SupabaseConfig {
    pub url: String,
    pub anon_key: String,
    /// Public origin of this app, used for the password recovery redirect.
    pub site_url: Option<String>,
    /// Dashboard auto-refresh period, 0 disables it.
    pub refresh_secs: u64,
}

impl SupabaseConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
                .ok_or_else(|| SupabaseError::Config(format!("{key} environment variable must be set")))
        };

        let url = required("SUPABASE_URL")?.trim_end_matches('/').to_string();
        let anon_key = required("SUPABASE_ANON_KEY")?;
        let site_url = lookup("MARKONE_SITE_URL")
            .map(|v| v.trim().trim_end_matches('/').to_string())
            .filter(|v| !v.is_empty());
        let refresh_secs = match lookup("MARKONE_REFRESH_SECS")
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
        {
            Some(raw) => raw.parse().map_err(|_| {
                SupabaseError::Config(format!("MARKONE_REFRESH_SECS is not a number: {raw}"))
            })?,
            None => DEFAULT_REFRESH_SECS,
        };

        Ok(Self {
            url,
            anon_key,
            site_url,
            refresh_secs,
        })
    }

    pub fn recovery_redirect(&self) -> Option<String> {
        self.site_url
            .as_ref()
            .map(|site| format!("{site}/reset-password"))
    }
}

/// Build a PostgREST `in.(...)` filter, quoting every value so ids with
/// commas or parentheses survive.
pub fn in_filter<S: AsRef<str>>(values: &[S]) -> String {
    let quoted = values
        .iter()
        .map(|v| {
            let escaped = v.as_ref().replace('\\', "\\\\").replace('"', "\\\"");
            format!("\"{escaped}\"")
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("in.({quoted})")
}

/// Thin wrapper over the GoTrue and PostgREST endpoints of a Supabase project
pub struct SupabaseClient {
    http: reqwest::Client,
    config: SupabaseConfig,
}

impl SupabaseClient {
    pub fn new(config: SupabaseConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "apikey",
            HeaderValue::from_str(&config.anon_key)
                .map_err(|e| SupabaseError::Config(format!("invalid SUPABASE_ANON_KEY: {e}")))?,
        );

        let http = reqwest::Client::builder().default_headers(headers).build()?;

        Ok(Self { http, config })
    }

    pub fn config(&self) -> &SupabaseConfig {
        &self.config
    }

    fn auth_url(&self, path: &str) -> String {
        format!("{}/auth/v1/{}", self.config.url, path)
    }

    fn rest_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.config.url, table)
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(SupabaseError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }
        Ok(serde_json::from_str(&body)?)
    }

    async fn send_empty(&self, request: RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SupabaseError::from_response(
                status.as_u16(),
                status.canonical_reason(),
                &body,
            ));
        }
        Ok(())
    }

    pub async fn sign_in_with_password(&self, email: &str, password: &str) -> Result<Session> {
        tracing::debug!("Signing in {}", email);
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "password")])
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "email": email, "password": password }));

        let token: TokenResponse = self.send(request).await?;
        Ok(token.into_session(Utc::now()))
    }

    pub async fn refresh_session(&self, refresh_token: &str) -> Result<Session> {
        let request = self
            .http
            .post(self.auth_url("token"))
            .query(&[("grant_type", "refresh_token")])
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "refresh_token": refresh_token }));

        let token: TokenResponse = self.send(request).await?;
        Ok(token.into_session(Utc::now()))
    }

    pub async fn recover_password(&self, email: &str, redirect_to: Option<&str>) -> Result<()> {
        let mut request = self
            .http
            .post(self.auth_url("recover"))
            .bearer_auth(&self.config.anon_key)
            .json(&json!({ "email": email }));
        if let Some(redirect) = redirect_to {
            request = request.query(&[("redirect_to", redirect)]);
        }
        self.send_empty(request).await
    }

    pub async fn update_password(&self, access_token: &str, password: &str) -> Result<AuthUser> {
        let request = self
            .http
            .put(self.auth_url("user"))
            .bearer_auth(access_token)
            .json(&json!({ "password": password }));
        self.send(request).await
    }

    pub async fn sign_out(&self, access_token: &str) -> Result<()> {
        let request = self.http.post(self.auth_url("logout")).bearer_auth(access_token);
        self.send_empty(request).await
    }

    pub async fn get_user(&self, access_token: &str) -> Result<AuthUser> {
        let request = self.http.get(self.auth_url("user")).bearer_auth(access_token);
        self.send(request).await
    }

    /// Sensors owned by `user_id`, newest first
    pub async fn list_sensors(&self, access_token: &str, user_id: &str) -> Result<Vec<Sensor>> {
        let request = self
            .http
            .get(self.rest_url("sensors"))
            .bearer_auth(access_token)
            .query(&[
                ("select", "*".to_string()),
                ("user_id", format!("eq.{user_id}")),
                ("order", "created_at.desc".to_string()),
            ]);
        self.send(request).await
    }

    /// Readings for the given sensors, newest first
    pub async fn list_readings(
        &self,
        access_token: &str,
        sensor_ids: &[String],
    ) -> Result<Vec<TemperatureReading>> {
        if sensor_ids.is_empty() {
            return Ok(Vec::new());
        }

        let request = self
            .http
            .get(self.rest_url("temperature_readings"))
            .bearer_auth(access_token)
            .query(&[
                ("select", "sensor_id,temperature,timestamp".to_string()),
                ("sensor_id", in_filter(sensor_ids)),
                ("order", "timestamp.desc".to_string()),
            ]);
        self.send(request).await
    }

    pub async fn get_profile(&self, access_token: &str, user_id: &str) -> Result<Option<UserProfile>> {
        let request = self
            .http
            .get(self.rest_url("user_profiles"))
            .bearer_auth(access_token)
            .header(ACCEPT, "application/json")
            .query(&[
                ("select", "display_name".to_string()),
                ("user_id", format!("eq.{user_id}")),
                ("limit", "1".to_string()),
            ]);
        let rows: Vec<UserProfile> = self.send(request).await?;
        Ok(rows.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn config_requires_url_and_key() {
        let err = SupabaseConfig::from_lookup(env(&[("SUPABASE_ANON_KEY", "anon")])).unwrap_err();
        assert!(err.to_string().contains("SUPABASE_URL"));

        let err = SupabaseConfig::from_lookup(env(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "   "),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains("SUPABASE_ANON_KEY"));
    }

    #[test]
    fn config_trims_and_defaults() {
        let config = SupabaseConfig::from_lookup(env(&[
            ("SUPABASE_URL", " https://x.supabase.co/ "),
            ("SUPABASE_ANON_KEY", "anon"),
        ]))
        .unwrap();
        assert_eq!(config.url, "https://x.supabase.co");
        assert_eq!(config.site_url, None);
        assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
        assert_eq!(config.recovery_redirect(), None);
    }

    #[test]
    fn config_reads_optional_values() {
        let config = SupabaseConfig::from_lookup(env(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("MARKONE_SITE_URL", "https://dash.example.com/"),
            ("MARKONE_REFRESH_SECS", "0"),
        ]))
        .unwrap();
        assert_eq!(config.refresh_secs, 0);
        assert_eq!(
            config.recovery_redirect().as_deref(),
            Some("https://dash.example.com/reset-password")
        );
    }

    #[test]
    fn config_rejects_bad_refresh_period() {
        let err = SupabaseConfig::from_lookup(env(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("MARKONE_REFRESH_SECS", "often"),
        ]))
        .unwrap_err();
        assert!(matches!(err, SupabaseError::Config(_)));
    }

    #[test]
    fn config_blank_refresh_period_uses_default() {
        let config = SupabaseConfig::from_lookup(env(&[
            ("SUPABASE_URL", "https://x.supabase.co"),
            ("SUPABASE_ANON_KEY", "anon"),
            ("MARKONE_REFRESH_SECS", "  "),
        ]))
        .unwrap();
        assert_eq!(config.refresh_secs, DEFAULT_REFRESH_SECS);
    }

    #[test]
    fn in_filter_quotes_values() {
        assert_eq!(in_filter(&["ESP32-01", "ESP32-02"]), r#"in.("ESP32-01","ESP32-02")"#);
        assert_eq!(in_filter(&[r#"odd"id,(x)"#]), r#"in.("odd\"id,(x)")"#);
    }

    #[test]
    fn client_rejects_header_breaking_key() {
        let config = SupabaseConfig {
            url: "https://x.supabase.co".into(),
            anon_key: "bad\nkey".into(),
            site_url: None,
            refresh_secs: 60,
        };
        assert!(matches!(SupabaseClient::new(config), Err(SupabaseError::Config(_))));
    }
}
