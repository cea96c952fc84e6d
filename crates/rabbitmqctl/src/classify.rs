//! Classification of failed `rabbitmqctl status` runs.
//!
//! The tool's exit code does not tell a dead host from a dead epmd from a
//! stopped node, so the decision is made on the diagnostic text instead.
//! All wording the classifier depends on lives in [`RULES`]; if a new
//! `rabbitmqctl` release rephrases its diagnostics, only that table changes.

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// Operationally distinct reasons a status query can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// epmd could not be reached and the host looks down.
    UnreachableHost,
    /// epmd could not be reached but the host answered.
    UnreachableEpmd,
    /// epmd answered but no `rabbit` node is running.
    StoppedRabbitNode,
    /// Anything else.
    Unknown,
}

impl FailureKind {
    /// All kinds, in classification priority order.
    pub const ALL: [Self; 4] = [
        Self::UnreachableHost,
        Self::UnreachableEpmd,
        Self::StoppedRabbitNode,
        Self::Unknown,
    ];

    /// The fixed human-readable message for this kind.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::UnreachableHost => "Unable to reach epmd and host seems down",
            Self::UnreachableEpmd => "Unable to reach epmd but host seems up",
            Self::StoppedRabbitNode => "No rabbit node running",
            Self::Unknown => "Unknown error",
        }
    }

    /// Stable identifier, suitable for logs and machine-readable output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnreachableHost => "unreachable_host",
            Self::UnreachableEpmd => "unreachable_epmd",
            Self::StoppedRabbitNode => "stopped_rabbit_node",
            Self::Unknown => "unknown",
        }
    }

    /// Returns `true` if the text showed the host itself responding.
    #[must_use]
    pub const fn is_host_reachable(self) -> bool {
        matches!(self, Self::UnreachableEpmd | Self::StoppedRabbitNode)
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A classified status failure: a kind and its display message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ClassifiedError {
    kind: FailureKind,
    message: String,
}

impl ClassifiedError {
    /// Build the error for `kind` with its standard message.
    #[must_use]
    pub fn new(kind: FailureKind) -> Self {
        Self {
            kind,
            message: kind.message().to_string(),
        }
    }

    /// The failure kind.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// The display message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<FailureKind> for ClassifiedError {
    fn from(kind: FailureKind) -> Self {
        Self::new(kind)
    }
}

/// Maps the raw text of a failed invocation to a [`ClassifiedError`].
pub trait FailureClassifier: Send + Sync {
    /// Classify `text`. Must be total: every input yields some kind.
    fn classify(&self, text: &str) -> ClassifiedError;
}

/// epmd could not be contacted at all.
const EPMD_UNREACHABLE: &[&str] = &["unable to connect to epmd"];

/// The epmd connection attempt failed in a way that implicates the host.
const HOST_UNREACHABLE: &[&str] = &[
    "timeout (timed out)",
    "nxdomain",
    "ehostunreach",
    "enetunreach",
];

/// The host refused the epmd connection, so it is up.
const HOST_ANSWERED: &[&str] = &["address (cannot connect to host/port)", "econnrefused"];

/// epmd answered and reported no such node.
const NODE_NOT_RUNNING: &[&str] = &["not running at all"];

/// One classification rule.
///
/// Matches when every group in `all_of` has at least one marker present.
struct Rule {
    kind: FailureKind,
    all_of: &'static [&'static [&'static str]],
}

impl Rule {
    fn matches(&self, text: &str) -> bool {
        self.all_of
            .iter()
            .all(|group| group.iter().any(|marker| text.contains(marker)))
    }
}

/// Ordered rules; the first match wins, no match means [`FailureKind::Unknown`].
const RULES: &[Rule] = &[
    Rule {
        kind: FailureKind::UnreachableHost,
        all_of: &[EPMD_UNREACHABLE, HOST_UNREACHABLE],
    },
    Rule {
        kind: FailureKind::UnreachableEpmd,
        all_of: &[EPMD_UNREACHABLE, HOST_ANSWERED],
    },
    Rule {
        kind: FailureKind::StoppedRabbitNode,
        all_of: &[NODE_NOT_RUNNING],
    },
];

/// Classifier for `rabbitmqctl` 3.x diagnostics text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PatternClassifier;

impl PatternClassifier {
    /// Determine the failure kind for `text`.
    #[must_use]
    pub fn kind_of(text: &str) -> FailureKind {
        RULES
            .iter()
            .find(|rule| rule.matches(text))
            .map_or(FailureKind::Unknown, |rule| rule.kind)
    }
}

impl FailureClassifier for PatternClassifier {
    fn classify(&self, text: &str) -> ClassifiedError {
        ClassifiedError::new(Self::kind_of(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use test_case::test_case;

    const HOST_DOWN: &str = include_str!("../tests/fixtures/status-host-down.txt");
    const EPMD_DOWN: &str = include_str!("../tests/fixtures/status-epmd-down-host-up.txt");
    const STOPPED_NODE: &str = include_str!("../tests/fixtures/status-stopped-rabbit-node.txt");
    const UNKNOWN: &str = include_str!("../tests/fixtures/status-unknown-error.txt");

    #[test_case(HOST_DOWN, FailureKind::UnreachableHost, "Unable to reach epmd and host seems down" ; "host down")]
    #[test_case(EPMD_DOWN, FailureKind::UnreachableEpmd, "Unable to reach epmd but host seems up" ; "epmd down host up")]
    #[test_case(STOPPED_NODE, FailureKind::StoppedRabbitNode, "No rabbit node running" ; "stopped rabbit node")]
    #[test_case(UNKNOWN, FailureKind::Unknown, "Unknown error" ; "unknown error")]
    fn test_fixture_classification(text: &str, kind: FailureKind, message: &str) {
        let err = PatternClassifier.classify(text);
        assert_eq!(err.kind(), kind);
        assert_eq!(err.message(), message);
        assert_eq!(err.to_string(), message);
    }

    #[test_case("unable to connect to epmd (port 4369) on nohost: nxdomain (non-existing domain)", FailureKind::UnreachableHost ; "unresolvable host")]
    #[test_case("unable to connect to epmd (port 4369) on h: timeout (timed out)", FailureKind::UnreachableHost ; "timed out")]
    #[test_case("unable to connect to epmd (port 4369) on h: address (cannot connect to host/port)", FailureKind::UnreachableEpmd ; "connection refused")]
    #[test_case("unable to connect to epmd (port 4369) on h: econnrefused", FailureKind::UnreachableEpmd ; "refused by errno")]
    #[test_case("unable to connect to epmd (port 4369) on node-1: ehostunreach (host is unreachable)", FailureKind::UnreachableHost ; "no route to host")]
    #[test_case("unable to connect to epmd (port 4369) on node-1: enetunreach (network is unreachable)", FailureKind::UnreachableHost ; "network unreachable")]
    #[test_case("unable to connect to epmd (port 4369) on h: eacces", FailureKind::Unknown ; "epmd failure without host signal")]
    #[test_case("epmd reports: node 'rabbit' not running at all", FailureKind::StoppedRabbitNode ; "node missing")]
    #[test_case("", FailureKind::Unknown ; "empty text")]
    #[test_case("Unable To Connect To Epmd", FailureKind::Unknown ; "matching is case sensitive")]
    fn test_marker_classification(text: &str, kind: FailureKind) {
        assert_eq!(PatternClassifier::kind_of(text), kind);
    }

    #[test]
    fn test_epmd_failure_takes_priority_over_stopped_node() {
        let text = "unable to connect to epmd (port 4369) on h: timeout (timed out)\n\
                    node 'rabbit' not running at all";
        assert_eq!(PatternClassifier::kind_of(text), FailureKind::UnreachableHost);
    }

    #[test]
    fn test_host_marker_alone_is_not_host_down() {
        assert_eq!(
            PatternClassifier::kind_of("rpc timeout (timed out) while waiting"),
            FailureKind::Unknown
        );
    }

    #[test]
    fn test_every_kind_has_distinct_message() {
        let mut messages: Vec<_> = FailureKind::ALL.iter().map(|k| k.message()).collect();
        messages.sort_unstable();
        messages.dedup();
        assert_eq!(messages.len(), FailureKind::ALL.len());
    }

    #[test]
    fn test_host_reachability() {
        assert!(!FailureKind::UnreachableHost.is_host_reachable());
        assert!(FailureKind::UnreachableEpmd.is_host_reachable());
        assert!(FailureKind::StoppedRabbitNode.is_host_reachable());
        assert!(!FailureKind::Unknown.is_host_reachable());
    }

    #[test]
    fn test_kind_serializes_snake_case() {
        let json = serde_json::to_string(&FailureKind::StoppedRabbitNode).expect("serialize");
        assert_eq!(json, "\"stopped_rabbit_node\"");
        assert_eq!(FailureKind::UnreachableEpmd.to_string(), "unreachable_epmd");
    }

    proptest! {
        #[test]
        fn prop_marker_free_text_is_unknown(text in "[a-z0-9 :.,'\n]{0,200}") {
            prop_assume!(!text.contains("epmd") && !text.contains("not running at all"));
            prop_assert_eq!(PatternClassifier::kind_of(&text), FailureKind::Unknown);
        }

        #[test]
        fn prop_classification_is_deterministic(text in ".{0,200}") {
            prop_assert_eq!(PatternClassifier.classify(&text), PatternClassifier.classify(&text));
        }
    }
}
