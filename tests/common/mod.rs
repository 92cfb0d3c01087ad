//! Local stand-in for the remote services, served by tiny_http on an ephemeral port.

#![allow(dead_code)]

use farmcast::ClientConfig;
use std::sync::{Arc, Mutex};
use std::time::Duration;

pub struct MockResponse {
    pub status: u16,
    pub body: String,
    pub delay: Option<Duration>,
}

impl MockResponse {
    pub fn json(status: u16, body: serde_json::Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn raw(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            delay: None,
        }
    }

    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }
}

pub struct MockServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Serves every request with `route(url)` where `url` is path plus query.
    pub fn start<F>(route: F) -> Self
    where
        F: Fn(&str) -> MockResponse + Send + 'static,
    {
        let server = tiny_http::Server::http("127.0.0.1:0").expect("bind mock server");
        let addr = server
            .server_addr()
            .to_ip()
            .expect("mock server listens on TCP");
        let requests = Arc::new(Mutex::new(Vec::new()));
        let seen = Arc::clone(&requests);

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let url = request.url().to_string();
                seen.lock().unwrap().push(url.clone());
                let reply = route(&url);
                if let Some(delay) = reply.delay {
                    std::thread::sleep(delay);
                }
                let response = tiny_http::Response::from_string(reply.body)
                    .with_status_code(tiny_http::StatusCode::from(reply.status))
                    .with_header(
                        tiny_http::Header::from_bytes(
                            &b"Content-Type"[..],
                            &b"application/json"[..],
                        )
                        .unwrap(),
                    );
                let _ = request.respond(response);
            }
        });

        Self {
            base_url: format!("http://{}", addr),
            requests,
        }
    }

    /// A config pointing every endpoint at this server.
    pub fn config(&self) -> ClientConfig {
        ClientConfig::builder()
            .geolocation_url(format!("{}/json/", self.base_url))
            .archive_url(format!("{}/v1/archive", self.base_url))
            .forecast_url(format!("{}/v1/forecast", self.base_url))
            .flood_url(format!("{}/v1/flood", self.base_url))
            .request_timeout(Duration::from_secs(5))
            .geolocation_timeout(Duration::from_secs(5))
            .build()
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    pub fn request_to(&self, path: &str) -> Option<String> {
        self.requests().into_iter().find(|url| url.starts_with(path))
    }
}

pub fn weather_body(times: &[&str], tmax: &[f64], tmin: &[f64], rain: &[f64]) -> serde_json::Value {
    serde_json::json!({
        "latitude": 23.75,
        "longitude": 90.375,
        "timezone": "Asia/Dhaka",
        "daily_units": {
            "time": "iso8601",
            "temperature_2m_max": "°C",
            "temperature_2m_min": "°C",
            "precipitation_sum": "mm"
        },
        "daily": {
            "time": times,
            "temperature_2m_max": tmax,
            "temperature_2m_min": tmin,
            "precipitation_sum": rain
        }
    })
}

pub fn flood_body(times: &[&str], discharge: &[f64]) -> serde_json::Value {
    serde_json::json!({
        "latitude": 23.75,
        "longitude": 90.375,
        "daily_units": {"time": "iso8601", "river_discharge": "m³/s"},
        "daily": {"time": times, "river_discharge": discharge}
    })
}
