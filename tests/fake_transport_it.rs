mod common;

// std
use std::sync::Arc;
// crates.io
use serde_json::json;
// self
use common::RecordingTransport;
use storefront_gateway::{
	auth::SessionToken,
	config::GatewayConfig,
	error::{Error, TransportError},
	gateway::{Gateway, Payload, RequestBody, RequestOptions},
	http::{
		HttpTransport, IncomingResponse, MultipartForm, OutgoingBody, OutgoingRequest,
		TransportFuture,
	},
	http_types::{
		HeaderName, Method, StatusCode,
		header::{AUTHORIZATION, CONTENT_TYPE},
	},
	store::{MemoryStore, SESSION_TOKEN_KEY, SessionStore},
};

fn header(request: &OutgoingRequest, name: HeaderName) -> Option<String> {
	request.headers.get(name).and_then(|value| value.to_str().ok()).map(str::to_owned)
}

#[tokio::test]
async fn anonymous_cart_fetch_has_no_authorization_header() {
	let store = MemoryStore::default();
	let transport = RecordingTransport::json_ok(r#"{"items":[]}"#);
	let gateway = common::recording_gateway(transport.clone(), &store);

	gateway.get_cart().await.expect("Anonymous cart fetch should succeed.");

	let request = transport.last();

	assert_eq!(request.method, Method::GET);
	assert_eq!(request.url.as_str(), "https://shop.example.com/api/cart");
	assert_eq!(header(&request, AUTHORIZATION), None);
	assert_eq!(request.body, OutgoingBody::Empty);
}

#[tokio::test]
async fn stored_tokens_are_attached_exactly() {
	let store = MemoryStore::default();
	let transport = RecordingTransport::json_ok("[]");
	let gateway = common::recording_gateway(transport.clone(), &store);

	store.set(SESSION_TOKEN_KEY, "eyJhbGciOi.abc.def").expect("Memory store writes cannot fail.");
	gateway.list_products().await.expect("Listing should succeed.");
	store.remove(SESSION_TOKEN_KEY).expect("Memory store removals cannot fail.");
	gateway.list_products().await.expect("Listing should succeed.");

	let recorded = transport.recorded();

	assert_eq!(recorded.len(), 2);
	assert_eq!(header(&recorded[0], AUTHORIZATION).as_deref(), Some("Bearer eyJhbGciOi.abc.def"));
	assert_eq!(header(&recorded[1], AUTHORIZATION), None);
}

#[tokio::test]
async fn multipart_checkout_leaves_content_type_to_transport() {
	let store = MemoryStore::default();
	let transport = RecordingTransport::json_ok(r#"{"order":1}"#);
	let gateway = common::recording_gateway(transport.clone(), &store);
	let form = MultipartForm::new().text("direccion", "Calle 1").file(
		"comprobante",
		"pago.pdf",
		"application/pdf",
		b"%PDF".to_vec(),
	);

	gateway.checkout(form.clone()).await.expect("Multipart checkout should succeed.");

	let request = transport.last();

	assert_eq!(request.method, Method::POST);
	assert_eq!(request.url.path(), "/api/checkout");
	assert_eq!(header(&request, CONTENT_TYPE), None);
	assert_eq!(request.body, OutgoingBody::Multipart(form));
}

#[tokio::test]
async fn json_operations_set_json_content_type() {
	let store = MemoryStore::default();
	let transport = RecordingTransport::json_ok(r#"{"token":"t"}"#);
	let gateway = common::recording_gateway(transport.clone(), &store);

	gateway
		.register(&json!({ "email": "ana@example.com", "password": "s3cret", "nombre": "Ana" }))
		.await
		.expect("Registration should succeed.");
	gateway.checkout(json!({ "metodo": "efectivo" })).await.expect("JSON checkout should succeed.");

	for request in transport.recorded() {
		assert_eq!(request.method, Method::POST);
		assert_eq!(header(&request, CONTENT_TYPE).as_deref(), Some("application/json"));
		assert!(matches!(request.body, OutgoingBody::Bytes(_)));
	}

	let paths: Vec<_> =
		transport.recorded().iter().map(|request| request.url.path().to_owned()).collect();

	assert_eq!(paths, ["/api/auth/register", "/api/checkout"]);
}

#[tokio::test]
async fn product_ids_are_encoded_as_one_segment() {
	let store = MemoryStore::default();
	let transport = RecordingTransport::json_ok("{}");
	let gateway = common::recording_gateway(transport.clone(), &store);

	gateway.get_product("a/b c").await.expect("Product fetch should succeed.");

	assert_eq!(transport.last().url.path(), "/api/products/a%2Fb%20c");
}

#[tokio::test]
async fn closures_can_supply_credentials() {
	let transport = RecordingTransport::replying(StatusCode::OK, Some("text/plain"), "pong");
	let config = GatewayConfig::builder()
		.api_root_str("https://shop.example.com/api")
		.default_header("accept", "application/json")
		.build()
		.expect("Fixture config should validate.");
	let gateway: Gateway<RecordingTransport> = Gateway::with_transport(
		config,
		Arc::new(|| Some(SessionToken::new("closure-token"))),
		transport.clone(),
	);
	let payload = gateway
		.request(
			"ping",
			RequestOptions::post()
				.with_body(RequestBody::raw("ping", "text/plain").expect("Content type is valid.")),
		)
		.await
		.expect("Ping should succeed.");

	assert_eq!(payload, Payload::Text("pong".into()));

	let request = transport.last();

	assert_eq!(header(&request, AUTHORIZATION).as_deref(), Some("Bearer closure-token"));
	assert_eq!(header(&request, CONTENT_TYPE).as_deref(), Some("text/plain"));
	assert_eq!(
		request.headers.get("accept").and_then(|value| value.to_str().ok()),
		Some("application/json")
	);
}

#[derive(Debug)]
struct Refused;
impl std::fmt::Display for Refused {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		f.write_str("Connection refused.")
	}
}
impl std::error::Error for Refused {}

struct RefusingTransport;
impl HttpTransport for RefusingTransport {
	fn send(&self, _request: OutgoingRequest) -> TransportFuture<'_, IncomingResponse> {
		Box::pin(async { Err(TransportError::network(Refused)) })
	}
}

#[tokio::test]
async fn transport_errors_propagate_unchanged() {
	let config = GatewayConfig::builder().build().expect("Default config should validate.");
	let gateway: Gateway<RefusingTransport> = Gateway::with_transport(
		config,
		Arc::new(storefront_gateway::auth::NoCredentials),
		RefusingTransport,
	);
	let err = gateway.get_cart().await.expect_err("Refused connections should fail.");

	match err {
		Error::Transport(TransportError::Network { source }) => {
			assert!(source.downcast_ref::<Refused>().is_some());
		},
		other => panic!("Unexpected error variant: {other:?}."),
	}
}
