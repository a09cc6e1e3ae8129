use std::time::Duration;

use addrbook_core::gateways::geocode::GeoCodingGateway;
use anyhow::Result as Fallible;
use reqwest::{
    blocking::{Client, RequestBuilder},
    header::USER_AGENT,
    StatusCode,
};
use serde::Deserialize;
use thiserror::Error;

/// A geocoding gateway for the search API of
/// [Nominatim](https://nominatim.org) and compatible services.
#[derive(Debug, Clone)]
pub struct Nominatim {
    client: Client,
    url: String,
    user_agent: String,
}

#[derive(Debug, Error)]
enum Error {
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error("Unexpected response status {0}")]
    Status(StatusCode),
    #[error("Malformed response: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Malformed coordinate '{0}'")]
    Coordinate(String),
}

#[derive(Debug, Deserialize)]
struct Place {
    lat: Coordinate,
    lon: Coordinate,
}

/// Coordinates are usually sent as decimal strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Coordinate {
    Text(String),
    Number(f64),
}

impl Coordinate {
    fn to_deg(&self) -> Result<f64, Error> {
        match self {
            Self::Text(text) => text
                .trim()
                .parse()
                .map_err(|_| Error::Coordinate(text.clone())),
            Self::Number(deg) => Ok(*deg),
        }
    }
}

/// Extracts the position of the best match.
fn parse_response(body: &str) -> Result<Option<(f64, f64)>, Error> {
    let places: Vec<Place> = serde_json::from_str(body)?;
    let Some(place) = places.first() else {
        return Ok(None);
    };
    Ok(Some((place.lat.to_deg()?, place.lon.to_deg()?)))
}

impl Nominatim {
    /// The client must not be created from within an async runtime.
    pub fn try_new(
        url: impl Into<String>,
        user_agent: impl Into<String>,
        timeout: Duration,
    ) -> Fallible<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            url: url.into(),
            user_agent: user_agent.into(),
        })
    }

    fn request(&self, query: &str) -> Option<RequestBuilder> {
        let query = query.trim();
        if query.is_empty() {
            return None;
        }
        let request = self
            .client
            .get(&self.url)
            .header(USER_AGENT, &self.user_agent)
            .query(&[
                ("q", query),
                ("format", "json"),
                ("limit", "1"),
                ("addressdetails", "1"),
            ]);
        Some(request)
    }

    fn search(&self, request: RequestBuilder) -> Result<Option<(f64, f64)>, Error> {
        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            return Err(Error::Status(status));
        }
        parse_response(&response.text()?)
    }
}

impl GeoCodingGateway for Nominatim {
    fn resolve_address_lat_lng(&self, query: &str) -> Option<(f64, f64)> {
        let Some(request) = self.request(query) else {
            log::debug!("Skipping geocoding of an empty address");
            return None;
        };
        match self.search(request) {
            Ok(Some(lat_lng)) => {
                log::debug!("Resolved address location '{query}': {lat_lng:?}");
                Some(lat_lng)
            }
            Ok(None) => {
                log::debug!("No location found for address '{query}'");
                None
            }
            Err(err) => {
                log::warn!("Failed to resolve address location '{query}': {err}");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io::{Read as _, Write as _},
        net::{TcpListener, TcpStream},
        thread,
        time::Instant,
    };

    fn nominatim() -> Nominatim {
        nominatim_at("https://nominatim.example.com/search", Duration::from_secs(1))
    }

    fn nominatim_at(url: &str, timeout: Duration) -> Nominatim {
        Nominatim::try_new(url, "addrbook-test", timeout).unwrap()
    }

    fn read_request_head(stream: &mut TcpStream) {
        let mut buf = [0; 1024];
        let mut head = Vec::new();
        while !head.windows(4).any(|w| w == b"\r\n\r\n") {
            let n = stream.read(&mut buf).unwrap();
            if n == 0 {
                break;
            }
            head.extend_from_slice(&buf[..n]);
        }
    }

    /// Local server that answers a single request with `response`.
    fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request_head(&mut stream);
            stream.write_all(response.as_bytes()).unwrap();
        });
        format!("http://{addr}/search")
    }

    /// Local server that accepts a single request but never answers.
    fn serve_silently(hold: Duration) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            read_request_head(&mut stream);
            thread::sleep(hold);
        });
        format!("http://{addr}/search")
    }

    #[test]
    fn parse_first_place() {
        let body = r#"[
            {"place_id": 1, "lat": "48.7784", "lon": "9.1800", "display_name": "Stuttgart"},
            {"place_id": 2, "lat": "0.0", "lon": "0.0", "display_name": "Elsewhere"}
        ]"#;
        assert_eq!(parse_response(body).unwrap(), Some((48.7784, 9.18)));
    }

    #[test]
    fn parse_numeric_coordinates() {
        let body = r#"[{"lat": -33.8688, "lon": 151.2093}]"#;
        assert_eq!(parse_response(body).unwrap(), Some((-33.8688, 151.2093)));
    }

    #[test]
    fn parse_empty_result() {
        assert_eq!(parse_response("[]").unwrap(), None);
    }

    #[test]
    fn parse_malformed_responses() {
        assert!(matches!(
            parse_response(r#"{"error": "Unable to geocode"}"#),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            parse_response(r#"[{"lat": "north", "lon": "9.18"}]"#),
            Err(Error::Coordinate(_))
        ));
        assert!(matches!(
            parse_response(r#"[{"lat": "48.7"}]"#),
            Err(Error::Json(_))
        ));
        assert!(parse_response("<html>").is_err());
    }

    #[test]
    fn skip_blank_queries_without_a_request() {
        let gw = nominatim();
        assert!(gw.request("").is_none());
        assert!(gw.request(" \t\n").is_none());
        assert_eq!(gw.resolve_address_lat_lng("   "), None);
    }

    #[test]
    fn build_search_request() {
        let gw = nominatim();
        let request = gw
            .request(" Königstraße 1, Stuttgart ")
            .unwrap()
            .build()
            .unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        let url = request.url();
        assert_eq!(url.host_str(), Some("nominatim.example.com"));
        assert_eq!(url.path(), "/search");
        let params: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(
            params,
            vec![
                ("q".to_owned(), "Königstraße 1, Stuttgart".to_owned()),
                ("format".to_owned(), "json".to_owned()),
                ("limit".to_owned(), "1".to_owned()),
                ("addressdetails".to_owned(), "1".to_owned()),
            ]
        );
        assert_eq!(request.headers().get(USER_AGENT).unwrap(), "addrbook-test");
    }

    #[test]
    fn resolve_address_from_server_response() {
        let url = serve_once(concat!(
            "HTTP/1.1 200 OK\r\n",
            "Content-Type: application/json\r\n",
            "Content-Length: 34\r\n",
            "Connection: close\r\n",
            "\r\n",
            r#"[{"lat":"48.7784","lon":"9.1800"}]"#,
        ));
        let gw = nominatim_at(&url, Duration::from_secs(5));
        assert_eq!(
            gw.resolve_address_lat_lng("Stuttgart"),
            Some((48.7784, 9.18))
        );
    }

    #[test]
    fn unreachable_server_resolves_nothing() {
        let gw = nominatim_at("http://127.0.0.1:1/search", Duration::from_millis(200));
        assert_eq!(gw.resolve_address_lat_lng("Stuttgart"), None);
    }

    #[test]
    fn error_status_resolves_nothing() {
        let url = serve_once(concat!(
            "HTTP/1.1 500 Internal Server Error\r\n",
            "Content-Type: application/json\r\n",
            "Content-Length: 34\r\n",
            "Connection: close\r\n",
            "\r\n",
            r#"[{"lat":"48.7784","lon":"9.1800"}]"#,
        ));
        let gw = nominatim_at(&url, Duration::from_secs(5));
        assert_eq!(gw.resolve_address_lat_lng("Stuttgart"), None);
    }

    #[test]
    fn slow_server_is_bounded_by_the_timeout() {
        let url = serve_silently(Duration::from_secs(5));
        let gw = nominatim_at(&url, Duration::from_millis(200));
        let started = Instant::now();
        assert_eq!(gw.resolve_address_lat_lng("Stuttgart"), None);
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
