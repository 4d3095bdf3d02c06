use thiserror::Error;

/// Boxed error crossing the transport boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The GlobalAPI could not be reached or answered with a non-2xx status.
    TransportFailure,
    /// A secondary map source such as KZ:GO or the map cycle could not be reached.
    SecondaryServiceFailure,
    /// The response did not have the expected shape.
    ParseFailure,
    /// Caller supplied an identifier or mode that can't be used.
    InvalidInput,
    /// The request succeeded but there was nothing in it.
    NoData,
    Other,
}

/// Outcome of any failed operation in this crate.
///
/// `origin` is the call chain that produced the error, innermost call first. Callers that
/// propagate an error append their own name with [`Error::within`] instead of building a new one.
#[derive(Debug, Clone, Error)]
#[error("{summary} (at {})", .origin.join(" > "))]
pub struct Error {
    pub kind: ErrorKind,
    pub origin: Vec<&'static str>,
    pub summary: String,
    pub raw: Option<serde_json::Value>,
}

impl Error {
    pub fn new(kind: ErrorKind, origin: &'static str, summary: impl Into<String>) -> Self {
        Self {
            kind,
            origin: vec![origin],
            summary: summary.into(),
            raw: None,
        }
    }

    pub fn with_raw(mut self, raw: impl Into<serde_json::Value>) -> Self {
        self.raw = Some(raw.into());
        self
    }

    pub fn no_data(origin: &'static str, summary: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoData, origin, summary)
    }

    pub fn invalid_input(origin: &'static str, summary: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidInput, origin, summary)
    }

    /// Append `caller` to the origin trail.
    pub fn within(mut self, caller: &'static str) -> Self {
        self.origin.push(caller);
        self
    }

    /// The origin trail rendered as `inner > outer`.
    pub fn origin(&self) -> String {
        self.origin.join(" > ")
    }
}
