//! Repository identifiers read from GitHub repository URLs.
//!
//! Parsing happens in two stages. [`RepositoryIdentifier::parse_lenient`]
//! splits whatever it is given and never fails: a string such as
//! `foo/bar/baz` yields host `foo`, owner `bar`, name `baz`, and a string with
//! fewer segments yields empty fields. [`validate_repository_url`] is the
//! strict gate; callers that skip it can end up talking to a nonsense path.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

use crate::domain::AppError;

static REPOSITORY_URL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://github\.com/[a-zA-Z0-9-]+/[a-zA-Z0-9-]+$")
        .expect("repository URL pattern must compile")
});

/// `owner/name` pair of a GitHub repository, plus the host it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RepositoryIdentifier {
    host: String,
    owner: String,
    name: String,
}

impl RepositoryIdentifier {
    /// Split `scheme://host/owner/name` into its parts without validating.
    pub fn parse_lenient(input: &str) -> Self {
        let without_scheme = input
            .strip_prefix("https://")
            .or_else(|| input.strip_prefix("http://"))
            .unwrap_or(input);

        let mut segments = without_scheme.split('/');
        let mut next = || segments.next().unwrap_or_default().to_string();
        let host = next();
        let owner = next();
        let name = next();

        Self { host, owner, name }
    }

    /// Validate `input` against the strict URL shape, then parse it.
    pub fn parse(input: &str) -> Result<Self, AppError> {
        validate_repository_url(input)?;
        Ok(Self::parse_lenient(input))
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for RepositoryIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}

/// Check that `input` is exactly `http(s)://github.com/<owner>/<repo>`.
pub fn validate_repository_url(input: &str) -> Result<(), AppError> {
    if REPOSITORY_URL.is_match(input) {
        Ok(())
    } else {
        Err(AppError::InvalidRepositoryUrl(input.to_string()))
    }
}
