//! Optional observability helpers for gateway requests.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `storefront_gateway.request` with the
//!   `operation`, `method`, and `path` fields.
//! - Enable `metrics` to increment the `storefront_gateway_request_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Gateway operations observed by the instrumentation layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operation {
	/// Generic [`Gateway::request`](crate::gateway::Gateway::request) call.
	Request,
	/// `GET /products`.
	ListProducts,
	/// `GET /products/{id}`.
	GetProduct,
	/// `POST /auth/register`.
	Register,
	/// `POST /auth/login`.
	Login,
	/// `GET /cart`.
	GetCart,
	/// `POST /cart`.
	UpdateCart,
	/// `POST /checkout`.
	Checkout,
}
impl Operation {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Operation::Request => "request",
			Operation::ListProducts => "list_products",
			Operation::GetProduct => "get_product",
			Operation::Register => "register",
			Operation::Login => "login",
			Operation::GetCart => "get_cart",
			Operation::UpdateCart => "update_cart",
			Operation::Checkout => "checkout",
		}
	}
}
impl Display for Operation {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RequestOutcome {
	/// Entry to a gateway call.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl RequestOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			RequestOutcome::Attempt => "attempt",
			RequestOutcome::Success => "success",
			RequestOutcome::Failure => "failure",
		}
	}
}
impl Display for RequestOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
