use crate::types::Response;
use crate::upstream::Upstream;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, error, info};

/// Handles a single invocation.
/// The event and context are ignored: every invocation fetches the same URL
/// and returns its status code and body. Any upstream failure fails the invocation.
pub async fn my_handler(upstream: &Upstream, event: LambdaEvent<Value>) -> Result<Response, Error> {
    let (event, ctx) = event.into_parts();

    info!("Invocation {}, GET {}", ctx.request_id, upstream.url());
    debug!("Event: {:?}", event);

    let resp = match upstream.fetch().await {
        Ok(v) => v,
        Err(e) => {
            error!("Upstream call failed: {}", e);
            return Err(Error::from(e));
        }
    };

    info!("Upstream responded with {}", resp.status);

    Ok(Response {
        status_code: resp.status,
        body: resp.text,
    })
}
