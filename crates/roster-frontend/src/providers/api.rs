use roster::api::{ApiClient, ApiError, HttpApiClient};
use roster::data::{Activities, MessageResponse};

/// The main API client for the Roster application, providing methods to interact with the backend API.
pub struct Api {
    client: HttpApiClient,
}

/// Path of one activity, with the name encoded as a single URI component.
fn activity_endpoint(activity_name: &str, action: &str) -> String {
    let name: String = js_sys::encode_uri_component(activity_name).into();
    format!("/activities/{name}/{action}")
}

impl Api {
    pub fn new(base_url: &str) -> Self {
        Api {
            client: HttpApiClient::new(base_url),
        }
    }

    pub async fn fetch_activities(&self) -> Result<Activities, ApiError> {
        self.client.get("/activities").await
    }

    pub async fn signup(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .post(
                &activity_endpoint(activity_name, "signup"),
                &[("email", email)],
            )
            .await
    }

    pub async fn unregister(
        &self,
        activity_name: &str,
        email: &str,
    ) -> Result<MessageResponse, ApiError> {
        self.client
            .delete(
                &activity_endpoint(activity_name, "participants"),
                &[("email", email)],
            )
            .await
    }
}

/// Create a new instance of the API client against the origin that served the page.
pub fn create() -> Api {
    Api::new("")
}
