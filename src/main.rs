use fetch_lambda::config::{env_vars_summary, Config};
use fetch_lambda::handler::my_handler;
use fetch_lambda::init_tracing;
use fetch_lambda::upstream::Upstream;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;
use tracing::{debug, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    init_tracing();

    debug!("{}", env_vars_summary(std::env::vars()));

    let config = Config::from_env();
    info!(
        "Starting {} ({}), upstream: {}",
        config.function_name.as_deref().unwrap_or("local"),
        config.function_version.as_deref().unwrap_or("unversioned"),
        config.upstream_url
    );

    // the client is built once and reused by all invocations of this execution environment
    let upstream = Upstream::new(&config)?;
    let upstream = &upstream;

    lambda_runtime::run(service_fn(move |event: LambdaEvent<Value>| async move {
        my_handler(upstream, event).await
    }))
    .await
}
