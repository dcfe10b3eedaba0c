use std::collections::BTreeMap;

use crate::constants::OAUTH_SIGNATURE;
use crate::percent;

/// Where a parameter comes from.
///
/// - [RFC 5849 Section 3.4.1.3.1](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.1)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterKind {
    /// `oauth_*` protocol parameters.
    Protocol,
    /// Parameters from the query component of the request URI.
    Query,
    /// Parameters from a form encoded request body.
    Entity,
}

/// Named, possibly repeated parameters of a single kind.
///
/// Values under a key keep their insertion order, which never affects the
/// normalized output since that is fully sorted.
pub type ParameterSet = BTreeMap<String, Vec<String>>;

/// Parameters collects protocol, query and entity parameters of a request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Parameters {
    protocol: ParameterSet,
    query: ParameterSet,
    entity: ParameterSet,
}

impl Parameters {
    /// Create an empty parameter collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `value` under `key` for the given kind.
    pub fn add(&mut self, kind: ParameterKind, key: impl Into<String>, value: impl Into<String>) {
        self.set_mut(kind)
            .entry(key.into())
            .or_default()
            .push(value.into());
    }

    /// Append every `(key, value)` pair for the given kind.
    pub fn extend<K, V>(&mut self, kind: ParameterKind, pairs: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (k, v) in pairs {
            self.add(kind, k, v);
        }
    }

    /// Replace all values of a protocol parameter with exactly one value.
    pub fn set_protocol_parameter(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.protocol.insert(key.into(), vec![value.into()]);
    }

    /// Get the first value of a protocol parameter.
    pub fn protocol_parameter(&self, key: &str) -> Option<&str> {
        self.protocol
            .get(key)
            .and_then(|v| v.first())
            .map(String::as_str)
    }

    /// Get the parameter set of the given kind.
    pub fn get(&self, kind: ParameterKind) -> &ParameterSet {
        match kind {
            ParameterKind::Protocol => &self.protocol,
            ParameterKind::Query => &self.query,
            ParameterKind::Entity => &self.entity,
        }
    }

    fn set_mut(&mut self, kind: ParameterKind) -> &mut ParameterSet {
        match kind {
            ParameterKind::Protocol => &mut self.protocol,
            ParameterKind::Query => &mut self.query,
            ParameterKind::Entity => &mut self.entity,
        }
    }

    /// Iterate every `(key, value)` pair of the given kind, one per value.
    pub fn pairs(&self, kind: ParameterKind) -> impl Iterator<Item = (&str, &str)> {
        self.get(kind)
            .iter()
            .flat_map(|(k, vs)| vs.iter().map(move |v| (k.as_str(), v.as_str())))
    }

    /// Build the normalized parameter string.
    ///
    /// - [RFC 5849 Section 3.4.1.3.2](https://datatracker.ietf.org/doc/html/rfc5849#section-3.4.1.3.2)
    ///
    /// Every key and value is percent encoded on its own, joined with `=` and
    /// the results are sorted by byte value before joining with `&`. The
    /// `oauth_signature` parameter never takes part.
    pub fn normalized_parameter_string(&self) -> String {
        let mut pairs = [ParameterKind::Protocol, ParameterKind::Query, ParameterKind::Entity]
            .into_iter()
            .flat_map(|kind| self.pairs(kind))
            .filter(|(k, _)| *k != OAUTH_SIGNATURE)
            .map(|(k, v)| {
                let mut s = percent::encode(k);
                s.push('=');
                s.push_str(&percent::encode(v));
                s
            })
            .collect::<Vec<_>>();

        pairs.sort_unstable();
        pairs.join("&")
    }
}
