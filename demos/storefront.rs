//! Walks a shopper through login, browsing, cart replacement, and checkout against a mock
//! storefront, using the default reqwest transport and an in-memory session store.

// std
use std::sync::Arc;
// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use storefront_gateway::{
	config::GatewayConfig,
	gateway::ReqwestGateway,
	http::MultipartForm,
	session::SessionManager,
	store::{MemoryStore, SessionStore},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let login_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/auth/login");
			then.status(200)
				.header("content-type", "application/json")
				.body("{\"token\":\"demo-session\"}");
		})
		.await;
	let products_mock = server
		.mock_async(|when, then| {
			when.method(GET).path("/api/products");
			then.status(200)
				.header("content-type", "application/json")
				.body("[{\"id\":1,\"nombre\":\"Leche\"},{\"id\":2,\"nombre\":\"Pan\"}]");
		})
		.await;
	let cart_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/cart").header("authorization", "Bearer demo-session");
			then.status(200).header("content-type", "application/json").body("{\"ok\":true}");
		})
		.await;
	let checkout_mock = server
		.mock_async(|when, then| {
			when.method(POST).path("/api/checkout").header("authorization", "Bearer demo-session");
			then.status(201).header("content-type", "text/plain").body("order 1001 accepted");
		})
		.await;
	let store: Arc<dyn SessionStore> = Arc::new(MemoryStore::default());
	let session = SessionManager::new(Arc::clone(&store));
	let config = GatewayConfig::builder().api_root_str(&server.url("/api")).build()?;
	let gateway = ReqwestGateway::with_session_store(config, store);

	session.sign_in(&gateway, &json!({ "email": "ana@example.com", "password": "s3cret" })).await?;

	let products = gateway.list_products().await?;

	println!("Catalog: {}.", products.as_json().map(ToString::to_string).unwrap_or_default());

	gateway.update_cart(&json!([{ "id": 1, "cantidad": 2 }])).await?;

	let receipt = gateway
		.checkout(MultipartForm::new().text("direccion", "Calle 1").file(
			"comprobante",
			"pago.txt",
			"text/plain",
			b"paid".to_vec(),
		))
		.await?;

	println!("Checkout: {}.", receipt.as_text().unwrap_or_default());

	session.sign_out()?;

	login_mock.assert_async().await;
	products_mock.assert_async().await;
	cart_mock.assert_async().await;
	checkout_mock.assert_async().await;

	Ok(())
}
