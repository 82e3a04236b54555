//! API Root Handler

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};

/// Root response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    /// Greeting identifying the service
    pub message: String,
}

/// Root handler
///
/// Identifies the service.
#[endpoint(tags("root"), summary = "API root")]
pub(crate) async fn handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Shopcart API root url".to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use salvo::{
        prelude::*,
        test::{ResponseExt, TestClient},
    };
    use testresult::TestResult;

    use super::*;

    #[tokio::test]
    async fn test_root_returns_message() -> TestResult {
        let router = Router::new().get(handler);

        let response: RootResponse = TestClient::get("http://example.com/")
            .send(&Service::new(router))
            .await
            .take_json()
            .await?;

        assert_eq!(response.message, "Shopcart API root url");

        Ok(())
    }
}
