//! Shared fixtures for integration tests.

#![allow(dead_code)]

// std
use std::sync::Arc;
// crates.io
#[cfg(feature = "reqwest")] use httpmock::MockServer;
use parking_lot::Mutex;
// self
#[cfg(feature = "reqwest")]
use storefront_gateway::{gateway::ReqwestGateway, http::ReqwestTransport};
use storefront_gateway::{
	auth::{CredentialProvider, StoredCredentials},
	config::GatewayConfig,
	gateway::Gateway,
	http::{HttpTransport, IncomingResponse, OutgoingRequest, TransportFuture},
	http_types::{HeaderMap, HeaderValue, StatusCode, header::CONTENT_TYPE},
	store::{MemoryStore, SessionStore},
};

#[cfg(feature = "reqwest")]
/// Config whose API root lives under `/api` on the mock server.
pub fn mock_config(server: &MockServer) -> GatewayConfig {
	GatewayConfig::builder()
		.api_root_str(&server.url("/api"))
		.build()
		.expect("Mock server URL should form a valid API root.")
}

#[cfg(feature = "reqwest")]
/// Reqwest-backed gateway reading its token from a fresh in-memory store.
pub fn reqwest_gateway(server: &MockServer) -> (ReqwestGateway, MemoryStore) {
	let store = MemoryStore::default();
	let credentials: Arc<dyn CredentialProvider> =
		Arc::new(StoredCredentials::new(Arc::new(store.clone()) as Arc<dyn SessionStore>));
	let gateway: ReqwestGateway =
		Gateway::with_transport(mock_config(server), credentials, ReqwestTransport::default());

	(gateway, store)
}

/// Transport that records every request and answers with a canned response.
#[derive(Clone)]
pub struct RecordingTransport {
	requests: Arc<Mutex<Vec<OutgoingRequest>>>,
	status: StatusCode,
	content_type: Option<&'static str>,
	body: &'static str,
}
impl RecordingTransport {
	pub fn replying(
		status: StatusCode,
		content_type: Option<&'static str>,
		body: &'static str,
	) -> Self {
		Self { requests: Default::default(), status, content_type, body }
	}

	pub fn json_ok(body: &'static str) -> Self {
		Self::replying(StatusCode::OK, Some("application/json"), body)
	}

	pub fn recorded(&self) -> Vec<OutgoingRequest> {
		self.requests.lock().clone()
	}

	pub fn last(&self) -> OutgoingRequest {
		self.requests.lock().last().cloned().expect("At least one request should be recorded.")
	}
}
impl HttpTransport for RecordingTransport {
	fn send(&self, request: OutgoingRequest) -> TransportFuture<'_, IncomingResponse> {
		self.requests.lock().push(request);

		let mut headers = HeaderMap::new();

		if let Some(content_type) = self.content_type {
			headers.insert(CONTENT_TYPE, HeaderValue::from_static(content_type));
		}

		let response = IncomingResponse::new(self.status, headers, self.body);

		Box::pin(async move { Ok(response) })
	}
}

/// Gateway over a [`RecordingTransport`] reading its token from `store`.
pub fn recording_gateway(
	transport: RecordingTransport,
	store: &MemoryStore,
) -> Gateway<RecordingTransport> {
	let credentials: Arc<dyn CredentialProvider> =
		Arc::new(StoredCredentials::new(Arc::new(store.clone()) as Arc<dyn SessionStore>));
	let config = GatewayConfig::builder()
		.api_root_str("https://shop.example.com/api")
		.build()
		.expect("Fixture API root should validate.");

	Gateway::with_transport(config, credentials, transport)
}
