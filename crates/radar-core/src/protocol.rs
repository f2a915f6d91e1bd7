//! Tactical protocol tokens
//!
//! The set is closed: the boundary rejects anything outside it, and the
//! engine maps each variant to exactly one filter or sort pass.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::engine::{Directive, Filter, SortPass};
use crate::errors::RadarError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Protocol {
    AvoidMech,
    PrioritizeMech,
    AvoidCrossfire,
    AssistAllies,
    ClosestEnemies,
    FurthestEnemies,
}

impl Protocol {
    pub const ALL: [Protocol; 6] = [
        Protocol::AvoidMech,
        Protocol::PrioritizeMech,
        Protocol::AvoidCrossfire,
        Protocol::AssistAllies,
        Protocol::ClosestEnemies,
        Protocol::FurthestEnemies,
    ];

    /// Wire token
    pub fn as_str(&self) -> &'static str {
        match self {
            Protocol::AvoidMech => "avoid-mech",
            Protocol::PrioritizeMech => "prioritize-mech",
            Protocol::AvoidCrossfire => "avoid-crossfire",
            Protocol::AssistAllies => "assist-allies",
            Protocol::ClosestEnemies => "closest-enemies",
            Protocol::FurthestEnemies => "furthest-enemies",
        }
    }

    /// The filter or sort pass this protocol contributes
    ///
    /// `PrioritizeMech` is a hard filter that drops every non-mech entry,
    /// not a ranking preference.
    pub fn directive(&self) -> Directive {
        match self {
            Protocol::AvoidMech => Directive::Filter(Filter::AvoidMech),
            Protocol::PrioritizeMech => Directive::Filter(Filter::PrioritizeMech),
            Protocol::AvoidCrossfire => Directive::Filter(Filter::AvoidCrossfire),
            Protocol::AssistAllies => Directive::Sort(SortPass::AssistAllies),
            Protocol::ClosestEnemies => Directive::Sort(SortPass::ClosestEnemies),
            Protocol::FurthestEnemies => Directive::Sort(SortPass::FurthestEnemies),
        }
    }

    pub fn is_filter(&self) -> bool {
        matches!(self.directive(), Directive::Filter(_))
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = RadarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Protocol::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| RadarError::UnknownProtocol {
                token: s.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_parse_back() {
        for protocol in Protocol::ALL {
            assert_eq!(protocol.as_str().parse::<Protocol>().unwrap(), protocol);
        }
    }

    #[test]
    fn test_unknown_token_rejected() {
        let err = "avoid-tanks".parse::<Protocol>().unwrap_err();
        assert_eq!(
            err,
            RadarError::UnknownProtocol {
                token: "avoid-tanks".to_string()
            }
        );
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Avoid-Mech".parse::<Protocol>().is_err());
    }

    #[test]
    fn test_serde_uses_kebab_tokens() {
        let json = serde_json::to_string(&Protocol::ClosestEnemies).unwrap();
        assert_eq!(json, "\"closest-enemies\"");

        let parsed: Protocol = serde_json::from_str("\"prioritize-mech\"").unwrap();
        assert_eq!(parsed, Protocol::PrioritizeMech);
    }

    #[test]
    fn test_classification() {
        let filters: Vec<_> = Protocol::ALL.into_iter().filter(Protocol::is_filter).collect();
        assert_eq!(
            filters,
            vec![
                Protocol::AvoidMech,
                Protocol::PrioritizeMech,
                Protocol::AvoidCrossfire
            ]
        );
    }
}
