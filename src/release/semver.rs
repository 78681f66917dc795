use semver::Version;

/// Parse a release tag into a semver::Version
///
/// Strips a leading 'v' and pads partial versions with zeros.
///
/// Examples:
/// - "v2" -> Version(2, 0, 0)
/// - "2.9" -> Version(2, 9, 0)
/// - "v2.9.0-rc1" -> Version(2, 9, 0, pre: rc1)
pub fn parse_tag(tag: &str) -> Option<Version> {
    let version = tag.strip_prefix('v').unwrap_or(tag);
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).ok()
}
