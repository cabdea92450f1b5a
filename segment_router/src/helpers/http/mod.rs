//! Helpers for HTTP request handling

pub mod request;

use log::trace;
use percent_encoding::percent_decode_str;

/// A request path segment after percent decoding, guaranteed to be valid UTF-8.
#[derive(Clone, PartialEq, Debug)]
pub struct PercentDecoded {
    val: String,
}

impl PercentDecoded {
    /// Decodes a single raw request segment.
    ///
    /// Returns `None` if the decoded bytes are not UTF-8. The `Router` then treats the whole
    /// request path as unroutable rather than matching a lossy value.
    pub fn new(raw: &str) -> Option<Self> {
        match percent_decode_str(raw).decode_utf8() {
            Ok(pd) => {
                trace!(" percent_decode: {}, src: {}", pd, raw);
                Some(PercentDecoded {
                    val: pd.into_owned(),
                })
            }
            Err(_) => {
                trace!(" percent_decode: error, src: {}", raw);
                None
            }
        }
    }
}

impl AsRef<str> for PercentDecoded {
    fn as_ref(&self) -> &str {
        &self.val
    }
}
