use std::cell::RefCell;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

use crate::{ClientError, CommonParams, Method, Payload, Reply, Transport};

/// Transport answering every call with the same JSON body and recording the
/// payloads it was handed.
pub(crate) struct StubTransport {
    body: String,
    calls: RefCell<Vec<(Method, Payload)>>,
}

impl StubTransport {
    pub(crate) fn new(body: &str) -> Self {
        Self {
            body: body.to_string(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn ok() -> Self {
        Self::new(r#"{"status":{"code":"1","message":"Action completed successful"}}"#)
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    /// The single call made so far.
    pub(crate) fn last_call(&self) -> (Method, Payload) {
        let calls = self.calls.borrow();
        assert_eq!(calls.len(), 1, "expected exactly one call");
        calls[0].clone()
    }
}

impl Transport for StubTransport {
    fn common_params(&self) -> Payload {
        CommonParams::new("1,token").to_payload()
    }

    fn post<T: DeserializeOwned>(
        &self,
        method: Method,
        payload: Payload,
    ) -> Result<Reply<T>, ClientError> {
        self.calls.borrow_mut().push((method, payload));
        Ok(Reply {
            http_status: StatusCode::OK,
            body: serde_json::from_str(&self.body)?,
        })
    }
}
