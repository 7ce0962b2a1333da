//! Gateway configuration: validated API root plus default headers.

// self
use crate::{_prelude::*, error::ConfigError};

/// API root used when none is configured.
pub const DEFAULT_API_ROOT: &str = "http://localhost:3000/api";

/// Validated settings shared by every request a gateway issues.
#[derive(Clone, Debug)]
pub struct GatewayConfig {
	/// Prefix joined with each resource path.
	pub api_root: Url,
	/// Headers applied beneath caller overrides on every request.
	pub default_headers: HeaderMap,
}
impl GatewayConfig {
	/// Creates a new builder seeded with [`DEFAULT_API_ROOT`].
	pub fn builder() -> GatewayConfigBuilder {
		GatewayConfigBuilder::default()
	}

	/// Parses and validates a JSON document such as
	/// `{"api_root": "https://shop.example.com/api", "default_headers": {"accept-language": "es"}}`.
	pub fn from_json_str(raw: &str) -> Result<Self> {
		let raw: RawGatewayConfig =
			serde_json::from_str(raw).map_err(|e| ConfigError::InvalidDocument { source: e })?;
		let mut builder = Self::builder().api_root_str(&raw.api_root);

		for (name, value) in raw.default_headers {
			builder = builder.default_header(name, value);
		}

		Ok(builder.build()?)
	}

	/// Joins the API root with `path`, adding the leading slash when missing.
	pub fn endpoint(&self, path: &str) -> Result<Url, ConfigError> {
		let root = self.api_root.as_str().trim_end_matches('/');
		let joined = if path.starts_with('/') || path.is_empty() {
			format!("{root}{path}")
		} else {
			format!("{root}/{path}")
		};

		Url::parse(&joined)
			.map_err(|source| ConfigError::InvalidPath { path: path.to_owned(), source })
	}
}

#[derive(Debug, Deserialize)]
struct RawGatewayConfig {
	#[serde(default = "default_api_root")]
	api_root: String,
	#[serde(default)]
	default_headers: BTreeMap<String, String>,
}

fn default_api_root() -> String {
	DEFAULT_API_ROOT.into()
}

/// Builder for [`GatewayConfig`] values.
#[derive(Debug, Default)]
pub struct GatewayConfigBuilder {
	api_root: Option<Result<Url, url::ParseError>>,
	default_headers: Vec<(String, String)>,
}
impl GatewayConfigBuilder {
	/// Sets the API root.
	pub fn api_root(mut self, url: Url) -> Self {
		self.api_root = Some(Ok(url));

		self
	}

	/// Sets the API root from a string; parse failures surface from [`build`](Self::build).
	pub fn api_root_str(mut self, raw: &str) -> Self {
		self.api_root = Some(Url::parse(raw));

		self
	}

	/// Adds a default header. Later calls with the same name replace earlier ones.
	pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.default_headers.push((name.into(), value.into()));

		self
	}

	/// Validates the builder state and produces a [`GatewayConfig`].
	pub fn build(self) -> Result<GatewayConfig, ConfigError> {
		let api_root = self
			.api_root
			.unwrap_or_else(|| Url::parse(DEFAULT_API_ROOT))
			.map_err(|source| ConfigError::InvalidApiRoot { source })?;

		if !matches!(api_root.scheme(), "http" | "https") {
			return Err(ConfigError::UnsupportedScheme { url: api_root.to_string() });
		}
		if api_root.query().is_some() || api_root.fragment().is_some() {
			return Err(ConfigError::ApiRootHasQuery { url: api_root.to_string() });
		}

		let mut default_headers = HeaderMap::new();

		for (name, value) in self.default_headers {
			let (name, value) = parse_header(&name, &value)?;

			default_headers.insert(name, value);
		}

		Ok(GatewayConfig { api_root, default_headers })
	}
}

/// Parses a header pair, mapping failures into [`ConfigError`].
pub(crate) fn parse_header(
	name: &str,
	value: &str,
) -> Result<(HeaderName, HeaderValue), ConfigError> {
	let header_name = HeaderName::from_str(name)
		.map_err(|_| ConfigError::InvalidHeaderName { name: name.to_owned() })?;
	let header_value = HeaderValue::from_str(value)
		.map_err(|_| ConfigError::InvalidHeaderValue { name: name.to_owned() })?;

	Ok((header_name, header_value))
}
