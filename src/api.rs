/// The events endpoint client

use crate::error::ApiError;
use crate::event::EventPayload;
use url::Url;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

/// What the popup needs to know about the server's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub status_text: String,
}

impl ApiResponse {
    /// Only 201 Created counts as success
    pub fn is_created(&self) -> bool {
        self.status == 201
    }
}

/// POST one event as JSON. Any HTTP status is returned as `Ok`.
pub async fn post_event(endpoint: &Url, payload: &EventPayload) -> Result<ApiResponse, ApiError> {
    let request = build_request(endpoint, payload)?;

    let window = web_sys::window().ok_or(ApiError::NoWindow)?;
    log::info!("Creating {} event for project {}", payload.category, payload.project_id);

    let response_js = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| ApiError::Fetch(format!("{:?}", e)))?;
    log::debug!("{:?}", response_js);

    let response: Response = response_js
        .dyn_into()
        .map_err(|_| ApiError::UnexpectedResponse)?;

    Ok(ApiResponse {
        status: response.status(),
        status_text: response.status_text(),
    })
}

/// `POST <endpoint>` with a JSON body
fn build_request(endpoint: &Url, payload: &EventPayload) -> Result<Request, ApiError> {
    let body = payload.to_json()?;

    let headers = Headers::new().map_err(|e| ApiError::Request(format!("{:?}", e)))?;
    headers
        .set("Content-Type", "application/json")
        .map_err(|e| ApiError::Request(format!("{:?}", e)))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_headers(&headers);
    opts.set_body(&body.into());

    Request::new_with_str_and_init(endpoint.as_str(), &opts)
        .map_err(|e| ApiError::Request(format!("{:?}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_201_is_created() {
        let response = |status: u16| ApiResponse {
            status,
            status_text: String::new(),
        };

        assert!(response(201).is_created());
        assert!(!response(200).is_created());
        assert!(!response(204).is_created());
        assert!(!response(400).is_created());
        assert!(!response(500).is_created());
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use crate::category::Category;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn payload() -> EventPayload {
        EventPayload {
            api_key: "k1".to_string(),
            project_id: "p1".to_string(),
            username: "u1".to_string(),
            category: Category::Bug,
            content: "crash on save".to_string(),
        }
    }

    #[wasm_bindgen_test]
    fn test_request_is_json_post_to_endpoint() {
        let endpoint = Url::parse("https://example.com/api/events").unwrap();

        let request = build_request(&endpoint, &payload()).unwrap();

        assert_eq!(request.method(), "POST");
        assert_eq!(request.url(), "https://example.com/api/events");
        assert_eq!(
            request.headers().get("Content-Type").unwrap(),
            Some("application/json".to_string())
        );
    }

    #[wasm_bindgen_test]
    async fn test_request_body_is_payload_json() {
        let endpoint = Url::parse("http://localhost:3000/api/events").unwrap();

        let request = build_request(&endpoint, &payload()).unwrap();
        let body = JsFuture::from(request.text().unwrap()).await.unwrap();

        assert_eq!(
            body.as_string().unwrap(),
            r#"{"apiKey":"k1","projectId":"p1","username":"u1","category":"BUG","content":"crash on save"}"#
        );
    }
}
