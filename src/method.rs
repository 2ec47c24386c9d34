use strum_macros::{Display, IntoStaticStr};

/// Remote methods of the DNSPod API.
///
/// Each variant maps to the method name appended to the API endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
pub enum Method {
    #[strum(serialize = "Domain.List")]
    DomainList,
    #[strum(serialize = "Domain.Create")]
    DomainCreate,
    #[strum(serialize = "Domain.Info")]
    DomainInfo,
    #[strum(serialize = "Domain.Remove")]
    DomainRemove,
    #[strum(serialize = "Record.List")]
    RecordList,
    #[strum(serialize = "Record.Create")]
    RecordCreate,
    #[strum(serialize = "Record.Info")]
    RecordInfo,
    #[strum(serialize = "Record.Modify")]
    RecordModify,
    #[strum(serialize = "Record.Remove")]
    RecordRemove,
}

impl Method {
    /// Gets the remote name of the method.
    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}
