/// Resolve stored image paths to URLs the browser can load.
///
/// Absolute `http(s)` URLs pass through untouched. Relative paths are joined
/// onto `base` (trailing slash ignored), or made root-relative without one.
pub fn asset_url(base: Option<&str>, path: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }

    let normalized = path.trim_start_matches('/');
    match base.map(|b| b.trim_end_matches('/')).filter(|b| !b.is_empty()) {
        Some(base) => format!("{}/{}", base, normalized),
        None => format!("/{}", normalized),
    }
}
