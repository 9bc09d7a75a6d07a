pub mod errors;

use std::time::Duration;
use log::info;
use ureq::Agent;
use crate::manager_publish::errors::PublishError;
use crate::models::publish_payload::PublishPayload;

/// Struct for posting readings to the state endpoint
pub struct Publisher {
    url: String,
    token: String,
    agent: Agent,
}

impl Publisher {
    /// Returns a new instance of the Publisher struct
    ///
    /// # Arguments
    ///
    /// * 'url' - endpoint to post the state to
    /// * 'token' - bearer token for the endpoint
    /// * 'timeout' - global timeout for the request
    pub fn new(url: String, token: String, timeout: Duration) -> Self {
        let config = Agent::config_builder()
            .timeout_global(Some(timeout))
            .build();

        let agent = config.into();

        Self { url, token, agent }
    }

    /// Posts the payload as JSON. Any non-success status is an error.
    ///
    /// # Arguments
    ///
    /// * 'payload' - the assembled reading
    pub fn publish(&self, payload: &PublishPayload) -> Result<(), PublishError> {
        let json = serde_json::to_string(payload)?;

        let res = self.agent
            .post(&self.url)
            .content_type("application/json")
            .header("Authorization", format!("Bearer {}", self.token))
            .send(json)?;

        info!("published reading to {}, status {}", self.url, res.status());

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::{BufRead, BufReader, Read, Write};
    use std::net::TcpListener;
    use std::sync::mpsc;
    use std::thread;
    use chrono::DateTime;
    use super::*;
    use crate::models::loop_packet::DecodedReading;

    /// Serves a single request with the given status line and hands back head and body
    fn serve_once(status: &'static str) -> (String, mpsc::Receiver<(String, String)>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let url = format!("http://{}/api/states/sensor.campus_weather", listener.local_addr().unwrap());
        let (tx, rx) = mpsc::channel();

        thread::spawn(move || {
            let (stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());

            let mut head = String::new();
            let mut content_length = 0;
            loop {
                let mut line = String::new();
                reader.read_line(&mut line).unwrap();
                if line == "\r\n" || line.is_empty() {
                    break;
                }
                if let Some(v) = line.to_ascii_lowercase().strip_prefix("content-length:") {
                    content_length = v.trim().parse::<usize>().unwrap();
                }
                head.push_str(&line);
            }

            let mut body = vec![0u8; content_length];
            reader.read_exact(&mut body).unwrap();

            let mut stream = stream;
            write!(stream, "HTTP/1.1 {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n", status).unwrap();
            stream.flush().unwrap();

            let _ = tx.send((head, String::from_utf8(body).unwrap()));
        });

        (url, rx)
    }

    fn payload() -> PublishPayload {
        let reading = DecodedReading {
            pressure: Some(30123),
            temperature: Some(725),
            wind_speed: Some(12),
            wind_bearing: None,
            humidity: Some(45),
            icon: 8,
        };

        PublishPayload::assemble(&reading, DateTime::parse_from_rfc3339("2026-10-16T08:30:00+02:00").unwrap())
    }

    #[test]
    fn test_publish_posts_json_with_bearer_token() {
        let (url, rx) = serve_once("200 OK");
        let publisher = Publisher::new(url, "secret".to_string(), Duration::from_secs(5));

        publisher.publish(&payload()).unwrap();

        let (head, body) = rx.recv().unwrap();
        let head = head.to_ascii_lowercase();
        assert!(head.starts_with("post /api/states/sensor.campus_weather http/1.1"));
        assert!(head.contains("authorization: bearer secret"));
        assert!(head.contains("content-type: application/json"));

        let json: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(json, serde_json::to_value(payload()).unwrap());
    }

    #[test]
    fn test_error_status_is_an_error() {
        let (url, _rx) = serve_once("500 Internal Server Error");
        let publisher = Publisher::new(url, "secret".to_string(), Duration::from_secs(5));

        assert!(publisher.publish(&payload()).is_err());
    }

    #[test]
    fn test_unreachable_endpoint_is_an_error() {
        let url = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            format!("http://{}/", listener.local_addr().unwrap())
        };
        let publisher = Publisher::new(url, "secret".to_string(), Duration::from_secs(5));

        assert!(publisher.publish(&payload()).is_err());
    }
}
