//! The greeting response served by `/api/hello`.
//!
//! The response is the same for every request: nothing about the
//! incoming request is read.

use serde::{Deserialize, Serialize};
use vercel_runtime::{Body, Error, Response, StatusCode};

/// Origin allowed to read the response (the Firebase-hosted frontend).
pub const ALLOWED_ORIGIN: &str = "https://noxsub-45150.web.app";

/// Greeting carried in the `message` field of the body.
pub const GREETING_MESSAGE: &str = "Hello from Vercel Python Serverless!";

/// Exact body text sent on the wire.
pub const GREETING_BODY: &str = r#"{"message": "Hello from Vercel Python Serverless!"}"#;

/// JSON shape of the greeting body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Greeting {
    pub message: String,
}

impl Default for Greeting {
    fn default() -> Self {
        Greeting {
            message: GREETING_MESSAGE.to_string(),
        }
    }
}

/// Builds the constant greeting response.
///
/// The builder only fails on invalid header values, which the static
/// values above never are.
pub fn greeting_response() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", ALLOWED_ORIGIN)
        .header("Content-Type", "application/json")
        .body(Body::Text(GREETING_BODY.to_string()))?)
}
