use actix_files::Files;
use actix_web::{get, middleware, web, App, HttpResponse, HttpServer, Responder};
use serde::Serialize;
use std::env;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_DIST_DIR: &str = "./dist";
const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";
const DEFAULT_TRAFFIC_POLL_SECS: u64 = 10;

/// Settings handed to the browser client as `/config.json`
#[derive(Debug, Clone, PartialEq, Serialize)]
struct ClientConfig {
    api_base: String,
    traffic_poll_secs: u64,
}

impl ClientConfig {
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base = lookup("API_BASE")
            .map(|base| base.trim_end_matches('/').to_string())
            .filter(|base| !base.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
        let traffic_poll_secs = lookup("TRAFFIC_POLL_SECS")
            .and_then(|secs| secs.parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TRAFFIC_POLL_SECS);
        Self { api_base, traffic_poll_secs }
    }
}

#[get("/config.json")]
async fn client_config(config: web::Data<ClientConfig>) -> impl Responder {
    HttpResponse::Ok().json(config.get_ref())
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(DEFAULT_PORT);
    let dist_dir = env::var("DIST_DIR").unwrap_or_else(|_| DEFAULT_DIST_DIR.to_string());
    let config = web::Data::new(ClientConfig::from_lookup(|key| env::var(key).ok()));

    log::info!("Serving {dist_dir} on 0.0.0.0:{port}");
    log::info!("Client backend: {} (traffic every {}s)", config.api_base, config.traffic_poll_secs);

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(config.clone())
            .service(client_config)
            .service(Files::new("/", dist_dir.clone()).index_file("index.html"))
    })
    .bind(("0.0.0.0", port))?
    .run()
    .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::{call_and_read_body, init_service, TestRequest};

    #[test]
    fn test_config_defaults() {
        let config = ClientConfig::from_lookup(|_| None);
        assert_eq!(config.api_base, "http://127.0.0.1:5000");
        assert_eq!(config.traffic_poll_secs, 10);
    }

    #[test]
    fn test_config_from_env() {
        let config = ClientConfig::from_lookup(|key| match key {
            "API_BASE" => Some("https://traffic.example.org/".to_string()),
            "TRAFFIC_POLL_SECS" => Some("30".to_string()),
            _ => None,
        });
        assert_eq!(config.api_base, "https://traffic.example.org");
        assert_eq!(config.traffic_poll_secs, 30);
    }

    #[test]
    fn test_invalid_interval_falls_back() {
        let config = ClientConfig::from_lookup(|key| (key == "TRAFFIC_POLL_SECS").then(|| "0".to_string()));
        assert_eq!(config.traffic_poll_secs, 10);
    }

    #[actix_web::test]
    async fn test_config_endpoint() {
        let config = ClientConfig::from_lookup(|_| None);
        let app = init_service(
            App::new().app_data(web::Data::new(config)).service(client_config),
        )
        .await;

        let req = TestRequest::get().uri("/config.json").to_request();
        let body = call_and_read_body(&app, req).await;
        assert_eq!(
            body.as_ref(),
            br#"{"api_base":"http://127.0.0.1:5000","traffic_poll_secs":10}"#.as_slice()
        );
    }
}
