use url::Url;

/// Builds the deduplication key for a course URL.
///
/// Lowercases the host and drops a single trailing `/` from the path.
/// Scheme, port, query and fragment are kept exactly as written, so
/// `http` vs `https` or `www.` variants stay distinct. Input that does
/// not parse as a URL is returned unchanged.
pub fn normalize_url(raw: &str) -> String {
    if Url::parse(raw).is_err() {
        return raw.to_string();
    }

    let url = raw.trim();
    let Some(scheme_end) = url.find("://") else {
        // Parses, but has no authority (e.g. "mailto:")
        return url.to_string();
    };

    let (scheme, rest) = (&url[..scheme_end], &url[scheme_end + 3..]);
    let authority_end = rest.find(['/', '?', '#']).unwrap_or(rest.len());
    let (authority, tail) = rest.split_at(authority_end);
    let path_end = tail.find(['?', '#']).unwrap_or(tail.len());
    let (path, suffix) = tail.split_at(path_end);
    let path = path.strip_suffix('/').unwrap_or(path);

    format!("{}://{}{}{}", scheme, lowercase_host(authority), path, suffix)
}

/// Lowercases the host part of an authority, leaving any userinfo alone
fn lowercase_host(authority: &str) -> String {
    match authority.rfind('@') {
        Some(at) => format!("{}{}", &authority[..=at], authority[at + 1..].to_lowercase()),
        None => authority.to_lowercase(),
    }
}

/// Lowercase host of a URL, without port or userinfo
pub fn host_of(raw: &str) -> Option<String> {
    let url = Url::parse(raw.trim()).ok()?;
    url.host_str()
        .filter(|host| !host.is_empty())
        .map(|host| host.to_lowercase())
}

/// Whether the URL parses, uses a web scheme and spells out `scheme://`
pub fn is_web_url(raw: &str) -> bool {
    let raw = raw.trim();
    Url::parse(raw)
        .map(|url| {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some()
                && raw
                    .get(url.scheme().len()..)
                    .is_some_and(|rest| rest.starts_with("://"))
        })
        .unwrap_or(false)
}
