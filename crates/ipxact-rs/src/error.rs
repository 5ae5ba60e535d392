// crates/ipxact-rs/src/error.rs

use std::fmt;
use std::string::FromUtf8Error;

use quick_xml::Error as XmlError;

/// Errors that can occur while loading or saving an IP-XACT document.
///
/// Only the string-level entry points return these. Tree-level reading and
/// writing is total, and validation findings are reported as
/// [`Diagnostic`](crate::validation::Diagnostic) values instead.
#[derive(Debug)]
pub enum IpxactError {
    /// The byte stream is not well-formed XML.
    XmlParsing(XmlError),

    /// The underlying `quick-xml` writer failed (e.g., I/O).
    XmlWriting(std::io::Error),

    /// Element names, text or the serialized buffer were not valid UTF-8.
    Utf8(FromUtf8Error),

    /// The document ended while elements were still open.
    UnexpectedEof,

    /// The document contained no root element.
    MissingElement { element: &'static str },

    /// The root element is not an IP-XACT component.
    UnexpectedRoot { found: String },

    /// The root element does not declare a known IP-XACT namespace.
    UnknownRevision,
}

impl From<XmlError> for IpxactError {
    fn from(e: XmlError) -> Self {
        IpxactError::XmlParsing(e)
    }
}

impl From<std::io::Error> for IpxactError {
    fn from(e: std::io::Error) -> Self {
        IpxactError::XmlWriting(e)
    }
}

impl From<FromUtf8Error> for IpxactError {
    fn from(e: FromUtf8Error) -> Self {
        IpxactError::Utf8(e)
    }
}

impl fmt::Display for IpxactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpxactError::XmlParsing(e) => write!(f, "XML parsing error: {}", e),
            IpxactError::XmlWriting(e) => write!(f, "XML writing error: {}", e),
            IpxactError::Utf8(e) => write!(f, "Invalid UTF-8 in document: {}", e),
            IpxactError::UnexpectedEof => write!(f, "Unexpected end of document"),
            IpxactError::MissingElement { element } => {
                write!(f, "Missing required XML element: {}", element)
            }
            IpxactError::UnexpectedRoot { found } => {
                write!(f, "Expected a component root element, found: {}", found)
            }
            IpxactError::UnknownRevision => {
                write!(f, "Root element does not declare a known IP-XACT namespace")
            }
        }
    }
}

impl std::error::Error for IpxactError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IpxactError::XmlParsing(e) => Some(e),
            IpxactError::XmlWriting(e) => Some(e),
            IpxactError::Utf8(e) => Some(e),
            _ => None,
        }
    }
}
