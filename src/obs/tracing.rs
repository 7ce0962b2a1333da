// self
use crate::{_prelude::*, obs::Operation};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedRequest<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedRequest<F> = F;

/// A span builder used by gateway calls.
#[derive(Clone, Debug)]
pub struct RequestSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl RequestSpan {
	/// Creates a new span tagged with the operation, method, and resource path.
	pub fn new(operation: Operation, method: &Method, path: &str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"storefront_gateway.request",
				operation = operation.as_str(),
				method = method.as_str(),
				path
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, method, path);

			Self {}
		}
	}

	/// Records the response status on the span.
	pub fn record_status(&self, status: StatusCode) {
		#[cfg(feature = "tracing")]
		{
			tracing::debug!(parent: &self.span, status = status.as_u16(), "storefront API responded");
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = status;
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedRequest<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn request_span_noop_without_tracing() {
		let span = RequestSpan::new(Operation::GetCart, &Method::GET, "/cart");

		span.record_status(StatusCode::OK);
	}

	#[tokio::test]
	async fn instrument_wraps_future() {
		let span = RequestSpan::new(Operation::ListProducts, &Method::GET, "/products");
		let value = span.instrument(async { 42 }).await;

		assert_eq!(value, 42);
	}
}
