//! Grammar scanning: splits a URL string into borrowed raw components.
//!
//! Each step consumes a prefix of what the previous step left over, so the
//! pieces can be tested on their own. Nothing here allocates or normalizes;
//! that happens when the [`RawUrl`] is frozen into a `ParsedUrl`.

use super::error::{UrlError, UrlResult};

const SCHEME_SEPARATOR: &str = "://";

/// Staging view of a URL, borrowed from the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct RawUrl<'a> {
    pub scheme: &'a str,
    pub user: Option<&'a str>,
    pub pass: Option<&'a str>,
    pub host: &'a str,
    pub port: Option<u32>,
    pub path: Option<&'a str>,
    pub query: Option<&'a str>,
    pub fragment: Option<&'a str>,
}

/// Runs every grammar step over `url`.
pub(crate) fn scan_url(url: &str) -> UrlResult<RawUrl<'_>> {
    let (scheme, rest) = split_scheme(url)
        .ok_or_else(|| UrlError::invalid(url, "missing \"://\" after scheme"))?;
    if scheme.is_empty() {
        return Err(UrlError::invalid(url, "empty scheme"));
    }

    let (userinfo, after_userinfo) = split_userinfo(rest);
    let (host_port, tail) = split_authority(after_userinfo);
    let (host, port_digits) = split_port(host_port);
    if host.is_empty() {
        return Err(UrlError::invalid(url, "empty host"));
    }
    // Digit runs wider than u32 saturate instead of failing.
    let port = port_digits.map(|digits| digits.parse::<u32>().unwrap_or(u32::MAX));

    let (path, query, fragment) = split_tail(tail);

    Ok(RawUrl {
        scheme,
        user: userinfo.map(|(user, _)| user),
        pass: userinfo.map(|(_, pass)| pass),
        host,
        port,
        path,
        query,
        fragment,
    })
}

/// Splits at the first `://`: `(scheme, rest)`.
pub(crate) fn split_scheme(url: &str) -> Option<(&str, &str)> {
    url.split_once(SCHEME_SEPARATOR)
}

/// Host and port end at the first `/`, `?` or `#`: `(host_port, tail)`.
pub(crate) fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find(['/', '?', '#']) {
        Some(end) => rest.split_at(end),
        None => (rest, ""),
    }
}

/// Matches `user:pass@` right after the scheme separator.
///
/// `user` is a non-empty run without `:`, `pass` a non-empty run without `@`.
/// Neither stops at `/`, `?` or `#`, so `u:p/x@h` has pass `p/x`. Anything
/// else (`user@host`, `user:@host`, `:pass@host`) is not userinfo and `rest`
/// comes back untouched.
pub(crate) fn split_userinfo(rest: &str) -> (Option<(&str, &str)>, &str) {
    let Some((user, after_user)) = rest.split_once(':') else {
        return (None, rest);
    };
    let Some((pass, after_pass)) = after_user.split_once('@') else {
        return (None, rest);
    };
    if user.is_empty() || pass.is_empty() {
        return (None, rest);
    }
    (Some((user, pass)), after_pass)
}

/// Strips a trailing `:digits` port: `(host, digits)`.
pub(crate) fn split_port(host_port: &str) -> (&str, Option<&str>) {
    match host_port.rsplit_once(':') {
        Some((host, digits))
            if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) =>
        {
            (host, Some(digits))
        }
        _ => (host_port, None),
    }
}

/// Splits what follows the authority into `(path, query, fragment)`.
///
/// Path keeps its leading `/`; query and fragment drop their `?` / `#`.
pub(crate) fn split_tail(tail: &str) -> (Option<&str>, Option<&str>, Option<&str>) {
    let (before_fragment, fragment) = match tail.split_once('#') {
        Some((before, fragment)) => (before, Some(fragment)),
        None => (tail, None),
    };
    let (path, query) = match before_fragment.split_once('?') {
        Some((path, query)) => (path, Some(query)),
        None => (before_fragment, None),
    };
    let path = if path.is_empty() { None } else { Some(path) };
    (path, query, fragment)
}
