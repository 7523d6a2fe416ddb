//! Masking of RPC endpoint URLs before they reach logs.

/// Keeps scheme, host and port; replaces any path, query or credentials with `***`.
///
/// Hosted RPC providers embed API keys in the path or query string, e.g.
/// `https://base-sepolia.g.alchemy.com/v2/<key>`. Unparseable input is masked
/// entirely.
pub fn mask_rpc_url(url: &str) -> String {
    let Ok(parsed) = reqwest::Url::parse(url) else {
        return "***".to_string();
    };
    let Some(host) = parsed.host_str() else {
        return "***".to_string();
    };

    let origin = match parsed.port() {
        Some(port) => format!("{}://{host}:{port}", parsed.scheme()),
        None => format!("{}://{host}", parsed.scheme()),
    };

    let has_secret_parts = parsed.path() != "/"
        || parsed.query().is_some()
        || !parsed.username().is_empty()
        || parsed.password().is_some();

    if has_secret_parts {
        format!("{origin}/***")
    } else {
        origin
    }
}
