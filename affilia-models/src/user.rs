//! Platform user management.

use affilia_client::{ApiClient, ApiError, Endpoint, EndpointFamily};
use affilia_core::{BoolResponse, SetPasswordPayload};

/// Model for platform user operations.
#[derive(Debug, Clone)]
pub struct UserModel {
    client: ApiClient,
}

impl UserModel {
    /// Creates a user model on the given client.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            client: client.clone(),
        }
    }

    fn endpoint(&self) -> Endpoint {
        self.client.endpoint(EndpointFamily::User)
    }

    /// Sets a user's password.
    pub async fn set_password(&self, fid: &str, password: &str) -> Result<BoolResponse, ApiError> {
        let payload = SetPasswordPayload {
            fid: fid.to_string(),
            password: password.to_string(),
        };
        self.endpoint().invoke("setPassword", &payload).await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::testing::{test_client, RecordingTransport};

    #[tokio::test]
    async fn test_set_password() {
        let transport = RecordingTransport::new();
        let model = UserModel::new(&test_client(&transport));

        let response = model.set_password("USER:7", "hunter2").await.unwrap();

        assert!(response.result);
        let call = &transport.calls()[0];
        assert_eq!(call.path(), "auth/user/setPassword");
        assert_eq!(call.body, json!({"fid": "USER:7", "password": "hunter2"}));
    }
}
