use serde::{Deserialize, Serialize};

/// The value returned to the runtime, in the shape API Gateway proxy integrations expect.
/// Both fields are copied verbatim from the upstream response.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Response {
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_status_code_key() {
        let resp = Response {
            status_code: 301,
            body: "<HTML>moved</HTML>".to_string(),
        };

        assert_eq!(
            serde_json::to_value(&resp).unwrap(),
            json!({ "statusCode": 301, "body": "<HTML>moved</HTML>" })
        );
    }
}
