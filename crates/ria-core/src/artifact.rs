//! Git artifact link parsing.
//!
//! Work items reference source control objects through opaque artifact URIs
//! of the form
//!
//! ```text
//! vstfs:///Git/{type}/{projectId}/{repositoryId}[/{ref}]
//! ```
//!
//! where everything after the scheme is usually percent-encoded as a single
//! segment (`vstfs:///Git/Ref/p1%2FR1%2Frefs%2Fheads%2Fmain`). The parser
//! decodes the whole string first and only then splits, so both encoded and
//! plain separators work.
//!
//! Parsing is total: malformed input yields `None`, never an error or panic.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Scheme marker every git artifact URI contains.
pub const GIT_ARTIFACT_MARKER: &str = "vstfs:///Git/";

const BRANCH_PREFIX: &str = "refs/heads/";

/// Kind of source control object an artifact link points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArtifactType {
    Commit,
    Branch,
    PullRequest,
    Unknown,
}

impl ArtifactType {
    /// Map the type token of an artifact URI.
    #[must_use]
    pub fn from_token(token: &str) -> Self {
        match token {
            "Commit" => Self::Commit,
            "Ref" | "Branch" => Self::Branch,
            "PullRequestId" | "PullRequest" => Self::PullRequest,
            _ => Self::Unknown,
        }
    }

    /// Label used in manifests.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commit => "Commit",
            Self::Branch => "Branch",
            Self::PullRequest => "PullRequest",
            Self::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for ArtifactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded git artifact link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitArtifactReference {
    pub artifact_type: ArtifactType,
    pub repository_id: String,
    /// Branch name with any `refs/heads/` prefix removed. Empty when the
    /// link carries no ref segment.
    #[serde(rename = "ref")]
    pub git_ref: String,
}

impl GitArtifactReference {
    /// Parse an artifact URI. See the module docs for the accepted shape.
    #[must_use]
    pub fn parse(url: &str) -> Option<Self> {
        if !url.contains(GIT_ARTIFACT_MARKER) {
            return None;
        }
        let decoded = percent_decode(url)?;
        let start = decoded.find(GIT_ARTIFACT_MARKER)? + GIT_ARTIFACT_MARKER.len();

        let mut parts = decoded[start..].splitn(4, '/');
        let type_token = parts.next()?;
        let _project_id = parts.next()?;
        let repository_id = parts.next()?;
        let git_ref = parts.next().unwrap_or_default();
        let git_ref = git_ref.strip_prefix(BRANCH_PREFIX).unwrap_or(git_ref);

        Some(Self {
            artifact_type: ArtifactType::from_token(type_token),
            repository_id: repository_id.to_string(),
            git_ref: git_ref.to_string(),
        })
    }
}

/// Form-style percent decoding: `+` is a space, `%XY` is a byte.
///
/// Returns `None` for a `%` that is not followed by two hex digits. Decoded
/// bytes that are not UTF-8 become U+FFFD.
fn percent_decode(raw: &str) -> Option<String> {
    if has_malformed_escape(raw) {
        return None;
    }
    let spaced = raw.replace('+', " ");
    let bytes = urlencoding::decode_binary(spaced.as_bytes());
    Some(String::from_utf8_lossy(&bytes).into_owned())
}

fn has_malformed_escape(raw: &str) -> bool {
    let bytes = raw.as_bytes();
    bytes.iter().enumerate().any(|(idx, &byte)| {
        byte == b'%'
            && !(bytes.get(idx + 1).is_some_and(u8::is_ascii_hexdigit)
                && bytes.get(idx + 2).is_some_and(u8::is_ascii_hexdigit))
    })
}
