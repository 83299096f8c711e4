use noxsub_api::greeting::greeting_response;
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    run(handler).await
}

/// /api/hello — Static greeting for the frontend.
///
/// Any method, path, headers or body yields the same 200 response.
pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    greeting_response()
}
