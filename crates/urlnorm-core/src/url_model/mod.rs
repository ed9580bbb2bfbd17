//! URL parsing and canonical serialization.
//!
//! A full absolute URL is split into scheme, optional userinfo, host, port,
//! path, query and fragment. Missing parts get defaults, the path is
//! normalized, and the result is frozen into an immutable [`ParsedUrl`] whose
//! `Display` output is the canonical form.

mod error;
mod path;
mod scan;

pub use error::{UrlError, UrlPart, UrlResult};
pub use path::normalize_path;

use scan::RawUrl;
use serde::Serialize;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Port assumed when the URL does not carry one. Never shown in the canonical form.
pub const DEFAULT_PORT: u32 = 80;

/// Parses an absolute URL. Shorthand for `ParsedUrl::new(url, None)`.
pub fn parse(url: &str) -> UrlResult<ParsedUrl> {
    ParsedUrl::new(url, None)
}

/// An absolute URL split into its components.
///
/// Equality, hashing and `Display` all go through the canonical string, so
/// `http://ya.ru` and `http://ya.ru:80/` are the same value.
#[derive(Debug, Clone, Serialize)]
pub struct ParsedUrl {
    scheme: String,
    user: Option<String>,
    pass: Option<String>,
    host: String,
    port: u32,
    path: String,
    query: String,
    fragment: String,
}

impl ParsedUrl {
    /// Parses `url`.
    ///
    /// `base_url` is accepted for relative resolution but not used: every input
    /// must be a full `scheme://host...` URL.
    ///
    /// # Examples
    ///
    /// - `"http://ya.ru"` → `http://ya.ru/`
    /// - `"http://ya.ru?aa=bb"` → `http://ya.ru/?aa=bb`
    /// - `"http://ya.ru/aa/fff/../../vvv"` → path `/vvv`
    pub fn new(url: &str, base_url: Option<&str>) -> UrlResult<Self> {
        if let Some(base) = base_url {
            tracing::debug!(base, "base URL ignored; relative resolution is not supported");
        }

        let raw = scan::scan_url(url).map_err(|err| {
            tracing::debug!(url, %err, "rejected URL");
            err
        })?;
        let parsed = Self::from_raw(raw);
        tracing::trace!(url, canonical = %parsed, "parsed URL");
        Ok(parsed)
    }

    fn from_raw(raw: RawUrl<'_>) -> Self {
        let path = normalize_path(raw.path.unwrap_or("/"));
        Self {
            scheme: raw.scheme.to_string(),
            user: raw.user.map(str::to_string),
            pass: raw.pass.map(str::to_string),
            host: raw.host.to_string(),
            port: raw.port.unwrap_or(DEFAULT_PORT),
            path,
            query: raw.query.unwrap_or_default().to_string(),
            fragment: raw.fragment.unwrap_or_default().to_string(),
        }
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u32 {
        self.port
    }

    /// User name from the userinfo, or `PartNotDefined` when the URL had none.
    pub fn user(&self) -> UrlResult<&str> {
        self.user
            .as_deref()
            .ok_or(UrlError::PartNotDefined(UrlPart::User))
    }

    /// Password from the userinfo, or `PartNotDefined` when the URL had none.
    pub fn pass(&self) -> UrlResult<&str> {
        self.pass
            .as_deref()
            .ok_or(UrlError::PartNotDefined(UrlPart::Pass))
    }

    pub fn has_user(&self) -> bool {
        self.user.is_some()
    }

    pub fn has_pass(&self) -> bool {
        self.pass.is_some()
    }

    /// Normalized path; always starts with `/`.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Raw query without the leading `?`; empty when absent.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Raw fragment without the leading `#`; empty when absent.
    pub fn fragment(&self) -> &str {
        &self.fragment
    }
}

impl fmt::Display for ParsedUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}://", self.scheme)?;

        let user = self.user.as_deref().unwrap_or_default();
        let pass = self.pass.as_deref().unwrap_or_default();
        if !user.is_empty() || !pass.is_empty() {
            write!(f, "{}:{}@", user, pass)?;
        }

        f.write_str(&self.host)?;
        if self.port != DEFAULT_PORT {
            write!(f, ":{}", self.port)?;
        }

        f.write_str(&self.path)?;
        if !self.query.is_empty() {
            write!(f, "?{}", self.query)?;
        }
        if !self.fragment.is_empty() {
            write!(f, "#{}", self.fragment)?;
        }
        Ok(())
    }
}

impl PartialEq for ParsedUrl {
    fn eq(&self, other: &Self) -> bool {
        self.to_string() == other.to_string()
    }
}

impl Eq for ParsedUrl {}

impl Hash for ParsedUrl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.to_string().hash(state);
    }
}

impl PartialEq<str> for ParsedUrl {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for ParsedUrl {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

impl FromStr for ParsedUrl {
    type Err = UrlError;

    fn from_str(url: &str) -> Result<Self, Self::Err> {
        parse(url)
    }
}

impl TryFrom<&str> for ParsedUrl {
    type Error = UrlError;

    fn try_from(url: &str) -> Result<Self, Self::Error> {
        parse(url)
    }
}
