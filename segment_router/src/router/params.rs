//! Binding of request path segments to the parameter and glob names of a matched pattern.

use log::trace;

use crate::helpers::http::PercentDecoded;
use crate::router::tree::segment::{split_path, SegmentType};

/// A single bound parameter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Param {
    /// Parameter name, without the leading `:` or `*`.
    pub key: String,
    /// Decoded request value. For a glob this is every remaining segment joined with `/`.
    pub value: String,
}

/// Parameters bound while matching a request path, in pattern order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Params(Vec<Param>);

impl Params {
    /// Walks `pattern` alongside the request `segments` it matched.
    pub(crate) fn bind(pattern: &str, segments: &[PercentDecoded]) -> Params {
        let mut params = Vec::new();

        for (i, part) in split_path(pattern).into_iter().enumerate() {
            match SegmentType::of(part) {
                SegmentType::Static => {}
                SegmentType::Dynamic => {
                    if let Some(value) = segments.get(i) {
                        params.push(Param {
                            key: part[1..].to_owned(),
                            value: value.as_ref().to_owned(),
                        });
                    }
                }
                SegmentType::Glob => {
                    let rest = segments.get(i..).unwrap_or(&[]);
                    let value = rest
                        .iter()
                        .map(AsRef::as_ref)
                        .collect::<Vec<&str>>()
                        .join("/");
                    params.push(Param {
                        key: part[1..].to_owned(),
                        value,
                    });
                    break;
                }
            }
        }

        trace!(" bound {} params for `{}`", params.len(), pattern);
        Params(params)
    }

    /// Value of the first parameter named `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|param| param.key == name)
            .map(|param| param.value.as_str())
    }

    /// Number of bound parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True if the pattern had no parameter or glob segments.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Parameters in pattern order.
    pub fn iter(&self) -> impl Iterator<Item = &Param> {
        self.0.iter()
    }
}
