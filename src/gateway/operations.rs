//! Named storefront calls, each a fixed method + path + optional JSON body.

// self
use crate::{
	_prelude::*,
	gateway::{Gateway, Payload, RequestBody, RequestOptions},
	http::HttpTransport,
	obs::Operation,
};

impl<T> Gateway<T>
where
	T: ?Sized + HttpTransport,
{
	/// `GET /products`.
	pub async fn list_products(&self) -> Result<Payload> {
		self.execute(Operation::ListProducts, "/products", RequestOptions::get()).await
	}

	/// `GET /products/{id}`; the id is percent-encoded as a single path segment.
	pub async fn get_product(&self, id: impl Display) -> Result<Payload> {
		let path = format!("/products/{}", urlencoding::encode(&id.to_string()));

		self.execute(Operation::GetProduct, &path, RequestOptions::get()).await
	}

	/// `POST /auth/register` with `body` as JSON.
	pub async fn register<B>(&self, body: &B) -> Result<Payload>
	where
		B: ?Sized + Serialize,
	{
		let options = RequestOptions::post().with_json(body)?;

		self.execute(Operation::Register, "/auth/register", options).await
	}

	/// `POST /auth/login` with `body` (typically `{email, password}`) as JSON.
	pub async fn login<B>(&self, body: &B) -> Result<Payload>
	where
		B: ?Sized + Serialize,
	{
		let options = RequestOptions::post().with_json(body)?;

		self.execute(Operation::Login, "/auth/login", options).await
	}

	/// `GET /cart`.
	pub async fn get_cart(&self) -> Result<Payload> {
		self.execute(Operation::GetCart, "/cart", RequestOptions::get()).await
	}

	/// `POST /cart`, replacing the cart with `{"cart": cart}`.
	pub async fn update_cart<C>(&self, cart: &C) -> Result<Payload>
	where
		C: ?Sized + Serialize,
	{
		#[derive(Serialize)]
		struct Envelope<'a, V: ?Sized> {
			cart: &'a V,
		}

		let options = RequestOptions::post().with_json(&Envelope { cart })?;

		self.execute(Operation::UpdateCart, "/cart", options).await
	}

	/// `POST /checkout` with a JSON document or a multipart form.
	pub async fn checkout(&self, body: impl Into<RequestBody>) -> Result<Payload> {
		let options = RequestOptions::post().with_body(body);

		self.execute(Operation::Checkout, "/checkout", options).await
	}
}
