//! DNS records of a domain.

use std::num::NonZeroU64;

use serde::Deserialize;

use crate::status::StatusEnvelope;
use crate::utils::{deserialize_to_option_i64, deserialize_to_option_string};
use crate::{ClientError, Method, NO_RECORDS, Payload, Response, SUCCESS, Status, Transport};

/// A DNS record.
///
/// Listings name the fields `name`, `type`, `line` and `line_id`, while
/// `Record.Info` uses the request names (`sub_domain`, `record_type`, ...),
/// both decode into the same fields.
///
/// Also used as the attributes for creating and updating records, where
/// every field that is `None` or empty is left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Record {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub id: Option<String>,
    /// Subdomain label, `@` for the zone apex.
    #[serde(alias = "sub_domain")]
    pub name: Option<String>,
    /// Routing line, e.g. `默认` or `电信`.
    #[serde(alias = "record_line")]
    pub line: Option<String>,
    #[serde(alias = "record_line_id", deserialize_with = "deserialize_to_option_string")]
    pub line_id: Option<String>,
    #[serde(rename = "type", alias = "record_type")]
    pub type_: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub ttl: Option<String>,
    pub value: Option<String>,
    /// MX priority.
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub mx: Option<String>,
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub enabled: Option<String>,
    pub status: Option<String>,
    pub monitor_status: Option<String>,
    pub remark: Option<String>,
    pub updated_on: Option<String>,
    pub use_aqb: Option<String>,
    /// Load balancing weight. `Some(0)` is a real weight, `None` means unset.
    #[serde(deserialize_with = "deserialize_to_option_i64")]
    pub weight: Option<i64>,
}

impl Record {
    /// Layers the settable attributes of the record on top of `payload`.
    fn add_attributes(&self, payload: Payload) -> Payload {
        payload
            .add_if_not_empty("sub_domain", self.name.as_deref())
            .add_if_not_empty("record_type", self.type_.as_deref())
            .add_if_not_empty("record_line", self.line.as_deref())
            .add_if_not_empty("record_line_id", self.line_id.as_deref())
            .add_if_not_empty("value", self.value.as_deref())
            .add_if_not_empty("mx", self.mx.as_deref())
            .add_if_not_empty("ttl", self.ttl.as_deref())
            .add_if_not_empty("status", self.status.as_deref())
            .add_if_some("weight", self.weight)
    }
}

/// The reduced record returned by an update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RecordModify {
    #[serde(deserialize_with = "deserialize_to_option_string")]
    pub id: Option<String>,
    pub name: Option<String>,
    pub value: Option<String>,
    pub status: Option<String>,
}

/// Parameters for listing the records of a domain.
///
/// The domain is referenced by its ID, its name, or both. Every filter left
/// empty is omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListParams {
    pub domain_id: String,
    pub domain: String,
    pub offset: String,
    pub length: String,
    pub sub_domain: String,
    pub record_type: String,
    pub record_line: String,
    pub record_line_id: String,
    pub keyword: String,
}

impl ListParams {
    /// Parameters listing every record of the domain with the given name.
    pub fn for_domain(domain: &str) -> Self {
        Self {
            domain: domain.to_string(),
            ..Default::default()
        }
    }

    /// Parameters listing every record of the domain with the given ID.
    pub fn for_domain_id(domain_id: &str) -> Self {
        Self {
            domain_id: domain_id.to_string(),
            ..Default::default()
        }
    }

    fn add_to(&self, payload: Payload) -> Payload {
        [
            ("domain_id", &self.domain_id),
            ("domain", &self.domain),
            ("offset", &self.offset),
            ("length", &self.length),
            ("sub_domain", &self.sub_domain),
            ("record_type", &self.record_type),
            ("record_line", &self.record_line),
            ("record_line_id", &self.record_line_id),
            ("keyword", &self.keyword),
        ]
        .into_iter()
        .fold(payload, |payload, (key, value)| {
            payload.add_if_not_empty(key, Some(value))
        })
    }
}

#[derive(Debug, Deserialize)]
struct RecordListEnvelope {
    #[serde(default)]
    status: Status,
    #[serde(default)]
    records: Vec<Record>,
}

#[derive(Debug, Deserialize)]
struct RecordEnvelope {
    #[serde(default)]
    status: Status,
    #[serde(default)]
    record: Record,
}

#[derive(Debug, Deserialize)]
struct RecordModifyEnvelope {
    #[serde(default)]
    status: Status,
    #[serde(default)]
    record: RecordModify,
}

/// DNS record related methods of the DNSPod API.
pub struct RecordService<'a, T> {
    transport: &'a T,
}

impl<'a, T: Transport> RecordService<'a, T> {
    pub fn new(transport: &'a T) -> Self {
        Self { transport }
    }

    /// Lists the records of a domain, filtered by `params`.
    ///
    /// A domain without matching records yields an empty list rather than an
    /// error.
    pub fn list(&self, params: &ListParams) -> Result<Vec<Record>, ClientError> {
        let payload = params.add_to(self.transport.common_params());

        let envelope = self
            .transport
            .post::<RecordListEnvelope>(Method::RecordList, payload)?
            .body;
        envelope
            .status
            .ensure(Method::RecordList, &[SUCCESS, NO_RECORDS])?;

        Ok(envelope.records)
    }

    /// Creates a record in the domain addressed by `domain` and/or `domain_id`.
    pub fn create(
        &self,
        domain: &str,
        domain_id: &str,
        attributes: &Record,
    ) -> Result<Record, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add_if_not_empty("domain", Some(domain))
            .add_if_not_empty("domain_id", Some(domain_id));
        let payload = attributes.add_attributes(payload);

        let envelope = self
            .transport
            .post::<RecordEnvelope>(Method::RecordCreate, payload)?
            .body;
        envelope.status.ensure(Method::RecordCreate, &[SUCCESS])?;

        Ok(envelope.record)
    }

    /// Fetches a single record.
    pub fn get(
        &self,
        domain: &str,
        domain_id: &str,
        record_id: NonZeroU64,
    ) -> Result<Record, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add_if_not_empty("domain", Some(domain))
            .add_if_not_empty("domain_id", Some(domain_id))
            .add("record_id", record_id);

        let envelope = self
            .transport
            .post::<RecordEnvelope>(Method::RecordInfo, payload)?
            .body;
        envelope.status.ensure(Method::RecordInfo, &[SUCCESS])?;

        Ok(envelope.record)
    }

    /// Updates a record, returning the reduced projection the API echoes.
    pub fn update(
        &self,
        domain_id: &str,
        domain: &str,
        record_id: &str,
        attributes: &Record,
    ) -> Result<RecordModify, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add_if_not_empty("domain_id", Some(domain_id))
            .add_if_not_empty("domain", Some(domain))
            .add("record_id", record_id);
        let payload = attributes.add_attributes(payload);

        let envelope = self
            .transport
            .post::<RecordModifyEnvelope>(Method::RecordModify, payload)?
            .body;
        envelope.status.ensure(Method::RecordModify, &[SUCCESS])?;

        Ok(envelope.record)
    }

    /// Deletes a record.
    pub fn delete(
        &self,
        domain_id: u64,
        domain: &str,
        record_id: &str,
    ) -> Result<Response, ClientError> {
        let payload = self
            .transport
            .common_params()
            .add("domain_id", domain_id)
            .add_if_not_empty("domain", Some(domain))
            .add("record_id", record_id);

        let reply = self
            .transport
            .post::<StatusEnvelope>(Method::RecordRemove, payload)?;
        reply.body.status.ensure(Method::RecordRemove, &[SUCCESS])?;

        Ok(Response {
            http_status: reply.http_status,
            status: reply.body.status,
        })
    }
}
