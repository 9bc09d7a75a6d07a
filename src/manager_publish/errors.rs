use thiserror::Error;

#[derive(Error, Debug)]
#[error("error publishing reading: {0}")]
pub struct PublishError(pub String);
impl From<serde_json::Error> for PublishError {
    fn from(e: serde_json::Error) -> PublishError {
        PublishError(format!("json document error: {}", e.to_string()))
    }
}
impl From<ureq::Error> for PublishError {
    fn from(e: ureq::Error) -> PublishError {
        PublishError(format!("http request error: {}", e.to_string()))
    }
}
