use std::time::Duration;

use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use url::Url;

use crate::domain::DomainService;
use crate::record::RecordService;
use crate::{ClientBuilderError, ClientError, HttpError, Method, Payload, Reply};

const DEFAULT_ENDPOINT: &str = "https://dnsapi.cn/";
const DEFAULT_LANG: &str = "en";
const DEFAULT_USER_AGENT: &str = concat!("dnspod-rs/", env!("CARGO_PKG_VERSION"));

/// Delivers calls to the DNSPod API.
///
/// The services only build payloads and inspect envelopes, everything else
/// (authentication, HTTP, JSON decoding) is up to the transport.
pub trait Transport {
    /// Returns a payload already holding the parameters common to every call.
    fn common_params(&self) -> Payload;

    /// Posts `payload` to the remote `method` and decodes the body into `T`.
    fn post<T: DeserializeOwned>(
        &self,
        method: Method,
        payload: Payload,
    ) -> Result<Reply<T>, ClientError>;
}

/// Authentication and identity parameters merged into every request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonParams {
    pub login_token: String,
    pub lang: String,
    pub error_on_empty: bool,
    pub user_id: Option<String>,
}

impl CommonParams {
    pub fn new(login_token: &str) -> Self {
        Self {
            login_token: login_token.to_string(),
            lang: DEFAULT_LANG.to_string(),
            error_on_empty: false,
            user_id: None,
        }
    }

    pub fn to_payload(&self) -> Payload {
        Payload::new()
            .add("login_token", &self.login_token)
            .add("format", "json")
            .add("lang", &self.lang)
            .add("error_on_empty", if self.error_on_empty { "yes" } else { "no" })
            .add_if_not_empty("user_id", self.user_id.as_deref())
    }
}

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    login_token: Option<String>,
    lang: Option<String>,
    error_on_empty: bool,
    user_id: Option<String>,
    user_agent: Option<String>,
    timeout: Option<Duration>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            login_token: None,
            lang: None,
            error_on_empty: false,
            user_id: None,
            user_agent: None,
            timeout: None,
        }
    }

    /// Sets the API endpoint to the one given.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    ///
    /// The endpoint should have a trailing slash, as per [Url]'s semantics.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Sets the login token, in the `<id>,<token>` form DNSPod hands out.
    pub fn login_token(mut self, login_token: &str) -> Self {
        self.login_token = Some(login_token.to_string());
        self
    }

    /// Sets the language of the messages returned by the API.
    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    /// Whether the API should answer empty results with an error.
    pub fn error_on_empty(mut self, error_on_empty: bool) -> Self {
        self.error_on_empty = error_on_empty;
        self
    }

    /// Sets the user ID to act on behalf of.
    pub fn user_id(mut self, user_id: &str) -> Self {
        self.user_id = Some(user_id.to_string());
        self
    }

    pub fn user_agent(mut self, user_agent: &str) -> Self {
        self.user_agent = Some(user_agent.to_string());
        self
    }

    /// Sets the timeout applied to each request.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `https://dnsapi.cn/` is used.
    ///
    /// # Errors
    /// - `MissingField` if the login token isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    /// - `Reqwest` if the HTTP client can't be initialised.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let login_token = self
            .login_token
            .ok_or_else(|| ClientBuilderError::MissingField("login_token".to_string()))?;

        let mut common = CommonParams::new(&login_token);
        if let Some(lang) = self.lang {
            common.lang = lang;
        }
        common.error_on_empty = self.error_on_empty;
        common.user_id = self.user_id;

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| DEFAULT_USER_AGENT.to_string());
        let mut http = reqwest::blocking::Client::builder().user_agent(user_agent);
        if let Some(timeout) = self.timeout {
            http = http.timeout(timeout);
        }

        Ok(Client {
            endpoint,
            common,
            client: http.build()?,
        })
    }
}

/// API client.
pub struct Client {
    endpoint: Url,
    common: CommonParams,
    client: reqwest::blocking::Client,
}

impl Client {
    /// Creates a new Client with default common parameters.
    pub fn new(endpoint: &Url, login_token: &str) -> Self {
        Self {
            endpoint: endpoint.clone(),
            common: CommonParams::new(login_token),
            client: reqwest::blocking::Client::new(),
        }
    }

    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The parameters merged into every request.
    pub fn common(&self) -> &CommonParams {
        &self.common
    }

    /// Domain related methods.
    pub fn domains(&self) -> DomainService<'_, Self> {
        DomainService::new(self)
    }

    /// DNS record related methods.
    pub fn records(&self) -> RecordService<'_, Self> {
        RecordService::new(self)
    }
}

impl Transport for Client {
    fn common_params(&self) -> Payload {
        self.common.to_payload()
    }

    fn post<T: DeserializeOwned>(
        &self,
        method: Method,
        payload: Payload,
    ) -> Result<Reply<T>, ClientError> {
        let url = self.endpoint.join(method.as_str())?;
        log::debug!("calling {method} with {} parameters", payload.len());

        let resp = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .form(&payload)
            .send()?;
        let http_status = resp.status();
        log::debug!("{method} answered with {http_status}");
        if !http_status.is_success() {
            return Err(ClientError::Http(HttpError::from_response(resp)));
        }

        let text = resp.text()?;
        let body = serde_json::from_str(&text)?;

        Ok(Reply { http_status, body })
    }
}
