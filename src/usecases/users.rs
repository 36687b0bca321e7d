//! User resource accessor, scoped to one user id and token.

use crate::domain::ClientError;
use crate::ports::TransportPort;
use serde_json::{json, Map, Value};
use std::sync::Arc;

/// Accessor for the `user/<id>/` resource. Constructed by sessions; all
/// requests are signed with the owning session's token.
pub struct UserClient {
    transport: Arc<dyn TransportPort>,
    id: String,
    signature: String,
}

impl UserClient {
    pub fn new(
        transport: Arc<dyn TransportPort>,
        id: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        Self {
            transport,
            id: id.into(),
            signature: token.into(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    fn url(&self) -> String {
        format!("user/{}/", self.id)
    }

    /// Fetch the user record.
    pub async fn get(&self) -> Result<Value, ClientError> {
        self.transport.get(&self.url(), &[], &self.signature).await
    }

    /// Create the user with the given profile data.
    pub async fn create(&self, data: Map<String, Value>) -> Result<Value, ClientError> {
        self.transport
            .post("user/", json!({ "id": self.id, "data": data }), &self.signature)
            .await
    }

    /// Replace the user's profile data.
    pub async fn update(&self, data: Map<String, Value>) -> Result<Value, ClientError> {
        self.transport
            .put(&self.url(), json!({ "data": data }), &self.signature)
            .await
    }

    pub async fn delete(&self) -> Result<Value, ClientError> {
        self.transport.delete(&self.url(), &self.signature).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::mock::MockTransport;
    use serde_json::json;

    fn user(mock: &Arc<MockTransport>) -> UserClient {
        UserClient::new(Arc::clone(mock) as Arc<dyn TransportPort>, "alice", "token-a")
    }

    #[tokio::test]
    async fn test_get_hits_user_url() {
        let mock = Arc::new(MockTransport::new());
        user(&mock).get().await.unwrap();

        let request = mock.last_request().await.unwrap();
        assert_eq!(request.method, "GET");
        assert_eq!(request.url, "user/alice/");
        assert_eq!(request.signature, "token-a");
    }

    #[tokio::test]
    async fn test_create_posts_id_and_data() {
        let mock = Arc::new(MockTransport::new());
        let mut data = Map::new();
        data.insert("name".to_string(), json!("Alice"));
        user(&mock).create(data).await.unwrap();

        let request = mock.last_request().await.unwrap();
        assert_eq!(request.url, "user/");
        assert_eq!(
            request.body.unwrap(),
            json!({"id": "alice", "data": {"name": "Alice"}})
        );
    }

    #[tokio::test]
    async fn test_update_and_delete_target_user_url() {
        let mock = Arc::new(MockTransport::new());
        let u = user(&mock);
        u.update(Map::new()).await.unwrap();
        u.delete().await.unwrap();

        let requests = mock.requests().await;
        assert_eq!(requests[0].method, "PUT");
        assert_eq!(requests[0].body.as_ref().unwrap(), &json!({"data": {}}));
        assert_eq!(requests[1].method, "DELETE");
        assert_eq!(requests[1].url, "user/alice/");
    }
}
