//! DNS zones, called domains by the DNSPod API.

use serde::Deserialize;

use crate::status::StatusEnvelope;
use crate::utils::{deserialize_to_option_bool, deserialize_to_option_string};
use crate::{ClientError, Method, Response, SUCCESS, Status, Transport};

/// Aggregate counts returned alongside domain listings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DomainInfo {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub domain_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub all_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub mine_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub share_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub vip_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub ismark_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub pause_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub error_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub lock_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub spam_total: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub vip_expire: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub share_out_total: Option<String>,
}

/// A DNS zone.
///
/// Every field is optional, a `None` means the server didn't send it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Domain {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub punycode: Option<String>,
    pub grade: Option<String>,
    pub grade_title: Option<String>,
    pub status: Option<String>,
    pub ext_status: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub records: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub group_id: Option<String>,
    pub is_mark: Option<String>,
    pub remark: Option<String>,
    pub is_vip: Option<String>,
    pub searchengine_push: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub user_id: Option<String>,
    pub created_on: Option<String>,
    pub updated_on: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub ttl: Option<String>,
    pub cname_speedup: Option<String>,
    pub owner: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_bool")]
    pub auth_to_anquanbao: Option<bool>,
}

impl Domain {
    /// Attributes for creating the domain with the given name.
    pub fn named(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Deserialize)]
struct DomainListEnvelope {
    #[serde(default)]
    status: Status,
    #[serde(default)]
    info: DomainInfo,
    #[serde(default)]
    domains: Vec<Domain>,
}

#[derive(Debug, Deserialize)]
struct DomainEnvelope {
    #[serde(default)]
    domain: Domain,
}

/// Domain related methods of the DNSPod API.
pub struct DomainService<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> DomainService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Lists the domains visible to the account.
    pub fn list(&self) -> Result<Vec<Domain>, ClientError> {
        Ok(self.list_with_info()?.0)
    }

    /// Lists the domains visible to the account, along with the aggregate counts.
    pub fn list_with_info(&self) -> Result<(Vec<Domain>, DomainInfo), ClientError> {
        let payload = self.transport.common_params();

        let envelope = self
            .transport
            .post::<DomainListEnvelope>(Method::DomainList, payload)?
            .body;
        envelope.status.ensure(Method::DomainList, &[SUCCESS])?;

        Ok((envelope.domains, envelope.info))
    }

    /// Creates a domain, returning it as echoed by the server.
    ///
    /// The status code isn't checked, an unsuccessful call yields an empty
    /// [Domain].
    ///
    /// # Errors
    ///
    /// Will return `MissingField` if `attributes` has no name.
    pub fn create(&self, attributes: &Domain) -> Result<Domain, ClientError> {
        let name = attributes
            .name
            .as_deref()
            .filter(|name| !name.is_empty())
            .ok_or_else(|| ClientError::MissingField("name".to_string()))?;

        let payload = self
            .transport
            .common_params()
            .add("domain", name)
            .add_if_not_empty("group_id", attributes.group_id.as_deref())
            .add_if_not_empty("is_mark", attributes.is_mark.as_deref());

        Ok(self
            .transport
            .post::<DomainEnvelope>(Method::DomainCreate, payload)?
            .body
            .domain)
    }

    /// Fetches a domain by its ID, its name, or both.
    ///
    /// The status code isn't checked.
    pub fn get(&self, id: &str, name: &str) -> Result<Domain, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add_if_not_empty("domain_id", Some(id))
            .add_if_not_empty("domain", Some(name));

        Ok(self
            .transport
            .post::<DomainEnvelope>(Method::DomainInfo, payload)?
            .body
            .domain)
    }

    /// Deletes a domain by its ID, its name, or both.
    ///
    /// The status code isn't checked, it is handed back in the [Response].
    pub fn delete(&self, id: &str, name: &str) -> Result<Response, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add_if_not_empty("domain_id", Some(id))
            .add_if_not_empty("domain", Some(name));

        let reply = self
            .transport
            .post::<StatusEnvelope>(Method::DomainRemove, payload)?;

        Ok(Response {
            http_status: reply.http_status,
            status: reply.body.status,
        })
    }
}
