//! Commit hash detection, source URLs and tool output parsing

use crate::source::error::ResolveError;

/// Length of a SHA-1 git object id in hex
pub const COMMIT_HASH_LEN: usize = 40;

/// Returns true if `rev` is a full commit hash (40 lowercase hex characters)
///
/// Such revisions are pinned already and need no remote lookup.
pub fn is_commit_hash(rev: &str) -> bool {
    rev.len() == COMMIT_HASH_LEN
        && rev
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// `https://github.com/{owner}/{repo}`
pub fn repository_url(base_url: &str, owner: &str, repo: &str) -> String {
    format!("{}/{}/{}", base_url.trim_end_matches('/'), owner, repo)
}

/// `https://github.com/{owner}/{repo}/archive/{commit}.tar.gz`
pub fn archive_url(base_url: &str, owner: &str, repo: &str, commit: &str) -> String {
    format!(
        "{}/archive/{}.tar.gz",
        repository_url(base_url, owner, repo),
        commit
    )
}

/// Extracts the commit from `git ls-remote` output: the first field of the first line
pub fn parse_ls_remote(stdout: &str) -> Result<String, ResolveError> {
    let commit = stdout
        .split_whitespace()
        .next()
        .ok_or_else(|| ResolveError::EmptyOutput("git ls-remote".to_string()))?;

    if !is_commit_hash(commit) {
        return Err(ResolveError::InvalidCommit(commit.to_string()));
    }

    Ok(commit.to_string())
}

/// Extracts the hash from `nix-prefetch-url` output, which prints it on the last line
pub fn parse_prefetch(stdout: &str) -> Result<String, ResolveError> {
    stdout
        .trim()
        .lines()
        .last()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .ok_or_else(|| ResolveError::EmptyOutput("nix-prefetch-url".to_string()))
}

/// Extracts the SRI hash from `nix hash to-sri` output
pub fn parse_sri(stdout: &str) -> Result<String, ResolveError> {
    let sri = stdout.trim();

    if sri.is_empty() {
        return Err(ResolveError::EmptyOutput("nix hash to-sri".to_string()));
    }
    if !sri.starts_with("sha256-") {
        return Err(ResolveError::InvalidHash(sri.to_string()));
    }

    Ok(sri.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const COMMIT: &str = "0123456789abcdef0123456789abcdef01234567";

    #[rstest]
    #[case(COMMIT, true)]
    #[case("deadbeefdeadbeefdeadbeefdeadbeefdeadbeef", true)]
    #[case("0123456789ABCDEF0123456789ABCDEF01234567", false)]
    #[case("0123456789abcdef0123456789abcdef0123456", false)]
    #[case("0123456789abcdef0123456789abcdef012345678", false)]
    #[case("0123456789abcdef0123456789abcdef0123456g", false)]
    #[case("v1.2.3", false)]
    #[case("main", false)]
    #[case("", false)]
    fn is_commit_hash_returns_expected(#[case] rev: &str, #[case] expected: bool) {
        assert_eq!(is_commit_hash(rev), expected);
    }

    #[rstest]
    #[case("https://github.com")]
    #[case("https://github.com/")]
    fn archive_url_points_at_commit_tarball(#[case] base_url: &str) {
        assert_eq!(
            archive_url(base_url, "acme", "foo", COMMIT),
            format!("https://github.com/acme/foo/archive/{COMMIT}.tar.gz")
        );
    }

    #[test]
    fn parse_ls_remote_takes_first_line() {
        let stdout = format!(
            "{COMMIT}\trefs/tags/v1.2.3\nffffffffffffffffffffffffffffffffffffffff\trefs/tags/v1.2.3^{{}}\n"
        );

        assert_eq!(parse_ls_remote(&stdout).unwrap(), COMMIT);
    }

    #[rstest]
    #[case("")]
    #[case("\n")]
    fn parse_ls_remote_fails_for_empty_output(#[case] stdout: &str) {
        assert!(matches!(
            parse_ls_remote(stdout),
            Err(ResolveError::EmptyOutput(_))
        ));
    }

    #[test]
    fn parse_ls_remote_fails_for_non_commit_field() {
        assert!(matches!(
            parse_ls_remote("warning: redirecting to https://example.com\n"),
            Err(ResolveError::InvalidCommit(_))
        ));
    }

    #[test]
    fn parse_prefetch_takes_last_line() {
        let stdout = "path is '/nix/store/abc-source'\n0ssh0f7zz7ivd2bvv8q6v0z2dyj3fbhgcpv0z8fp2f4r9q2xh5cb\n";

        assert_eq!(
            parse_prefetch(stdout).unwrap(),
            "0ssh0f7zz7ivd2bvv8q6v0z2dyj3fbhgcpv0z8fp2f4r9q2xh5cb"
        );
    }

    #[test]
    fn parse_prefetch_fails_for_empty_output() {
        assert!(matches!(
            parse_prefetch("  \n"),
            Err(ResolveError::EmptyOutput(_))
        ));
    }

    #[test]
    fn parse_sri_trims_output() {
        assert_eq!(
            parse_sri("sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU=\n").unwrap(),
            "sha256-47DEQpj8HBSa+/TImW+5JCeuQeRkm5NMpJWZG3hSuFU="
        );
    }

    #[rstest]
    #[case("", false)]
    #[case("0ssh0f7zz7ivd2bvv8q6v0z2dyj3fbhgcpv0z8fp2f4r9q2xh5cb", true)]
    fn parse_sri_rejects_unexpected_output(#[case] stdout: &str, #[case] has_output: bool) {
        let result = parse_sri(stdout);

        if has_output {
            assert!(matches!(result, Err(ResolveError::InvalidHash(_))));
        } else {
            assert!(matches!(result, Err(ResolveError::EmptyOutput(_))));
        }
    }
}
