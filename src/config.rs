use std::env::var;

/// The only address this function ever fetches.
pub const UPSTREAM_URL: &str = "https://google.com";

/// Sent with every upstream request, e.g. `fetch-lambda/0.1.0`
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Env vars that must never end up in the logs
const SENSITIVE_ENV_VARS: [&str; 3] = ["AWS_ACCESS_KEY_ID", "AWS_SECRET_ACCESS_KEY", "AWS_SESSION_TOKEN"];

#[derive(Debug, Clone)]
pub struct Config {
    /// E.g. https://google.com
    pub upstream_url: String,
    pub user_agent: String,
    /// Set by Lambda, e.g. my-lambda. None when running outside of AWS.
    pub function_name: Option<String>,
    /// Set by Lambda, e.g. $LATEST
    pub function_version: Option<String>,
}

impl Config {
    /// Creates a new Config from the Lambda environment.
    /// The upstream URL is fixed and cannot be changed via env vars.
    pub fn from_env() -> Self {
        Self {
            upstream_url: UPSTREAM_URL.to_owned(),
            user_agent: USER_AGENT.to_owned(),
            function_name: var("AWS_LAMBDA_FUNCTION_NAME").ok(),
            function_version: var("AWS_LAMBDA_FUNCTION_VERSION").ok(),
        }
    }

    /// Same as `from_env`, but fetches `upstream_url` instead of the fixed address.
    /// Used to run the handler against a local server.
    pub fn with_upstream(upstream_url: impl Into<String>) -> Self {
        Self {
            upstream_url: upstream_url.into(),
            ..Self::from_env()
        }
    }
}

/// Renders env vars in the form of `export KEY=VALUE key2=value2`, sorted, without AWS credentials.
pub fn env_vars_summary<I>(vars: I) -> String
where
    I: IntoIterator<Item = (String, String)>,
{
    let mut env_vars = vars
        .into_iter()
        .filter(|(key, _)| !SENSITIVE_ENV_VARS.contains(&key.as_str()))
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<String>>();

    // the list is easier to deal with when sorted
    env_vars.sort();
    env_vars.insert(0, "export".to_string());

    env_vars.join(" ")
}
