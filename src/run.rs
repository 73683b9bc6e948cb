//! Application run: logger init and the single model-listing pass.

use std::io::{self, Write};

use crate::cli::Args;
use crate::core::config::Config;
use crate::core::models::{self, ListError};

const CONNECTIVITY_HINT: &str = "Please check your internet connection and API key";

/// Initialize env_logger on stderr so stdout carries only the report.
pub fn init_logger(args: &Args) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(args.log_level()),
    )
    .target(env_logger::Target::Stderr)
    .try_init();
}

/// Fetch models and write the report to `out`.
///
/// Request failures are reported on `out` rather than returned; only write
/// errors on `out` itself propagate.
pub async fn run<W: Write>(config: &Config, out: &mut W) -> io::Result<()> {
    log::debug!("Using base URL {}", config.base_url);
    match models::fetch_models(config).await {
        Ok(list) => models::render_report(&list, out),
        Err(err @ ListError::HttpStatus { .. }) => {
            log::warn!("Models request rejected: {}", err);
            writeln!(out, "Error: {}", err)
        }
        Err(err) => {
            log::warn!("Models request failed: {:?}", err);
            writeln!(out, "Error making request: {}", err)?;
            writeln!(out, "{}", CONNECTIVITY_HINT)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_against(server: &MockServer) -> String {
        let config = Config::new("test-key", format!("{}/api/v1", server.uri()));
        let mut out = Vec::new();
        run(&config, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    async fn serve(template: ResponseTemplate) -> MockServer {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/v1/models"))
            .respond_with(template)
            .expect(1)
            .mount(&server)
            .await;
        server
    }

    #[tokio::test]
    async fn success_prints_both_sections() {
        let server = serve(
            ResponseTemplate::new(200).set_body_json(json!({
                "data": [{"id": "llama-3-8b"}, {"id": "llama-3-70b"}]
            })),
        )
        .await;

        let out = run_against(&server).await;
        let (all, recommended) = out
            .split_once("Recommended models for free accounts:")
            .unwrap();
        assert!(all.contains("- llama-3-70b\n- llama-3-8b (likely works with free account)\n"));
        assert!(recommended.contains("- llama-3-8b\n"));
        assert!(!recommended.contains("70b"));
        assert!(!recommended.contains("likely works"));
    }

    #[tokio::test]
    async fn http_error_prints_status_and_body() {
        let server = serve(ResponseTemplate::new(403).set_body_string("forbidden")).await;
        let out = run_against(&server).await;
        assert_eq!(out, "Error: 403 - forbidden\n");
    }

    #[tokio::test]
    async fn parse_failure_prints_connectivity_hint() {
        let server = serve(ResponseTemplate::new(200).set_body_string("not json")).await;
        let out = run_against(&server).await;
        assert!(out.starts_with("Error making request: "));
        assert!(out.ends_with("Please check your internet connection and API key\n"));
    }

    #[tokio::test]
    async fn empty_base_url_prints_connectivity_hint() {
        let config = Config::new("test-key", "");
        let mut out = Vec::new();
        run(&config, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error making request: "), "got: {}", out);
        assert!(out.ends_with("Please check your internet connection and API key\n"));
    }

    #[tokio::test]
    async fn transport_failure_prints_connectivity_hint() {
        let config = Config::new("test-key", "http://127.0.0.1:1/api/v1");
        let mut out = Vec::new();
        run(&config, &mut out).await.unwrap();
        let out = String::from_utf8(out).unwrap();
        assert!(out.starts_with("Error making request: "));
        assert!(out.contains(CONNECTIVITY_HINT));
    }
}
