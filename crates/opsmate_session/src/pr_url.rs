use once_cell::sync::Lazy;
use regex::Regex;

use opsmate_core::PrRef;

// Two match policies exist on purpose. Extraction (used at dispatch time) is
// lenient: it finds the owner/repo/number shape anywhere in the string, so a
// URL carrying a trailing sub-page such as `.../pull/123/files` still
// resolves. The display-side validator is strict and only accepts the exact
// canonical form.

static PR_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"https://github\.com/([^/]+)/([^/]+)/pull/(\d+)").unwrap());

static PR_URL_EXACT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https://github\.com/([^/]+)/([^/]+)/pull/(\d+)$").unwrap());

/// Parse a pull request URL into its owner, repo, and number.
///
/// Lenient: trailing path segments after the PR number are accepted.
/// Returns `None` on any mismatch; never errors, never yields a partial
/// record.
pub fn extract(url: &str) -> Option<PrRef> {
    let captures = PR_URL.captures(url)?;
    let number = captures[3].parse().ok()?;
    Some(PrRef {
        owner: captures[1].to_string(),
        repo: captures[2].to_string(),
        number,
    })
}

/// Whole-string check of the canonical PR URL form, with no trailing
/// characters. Used only for display-side validity indication; dispatch goes
/// through [`extract`].
pub fn is_valid_pr_url(url: &str) -> bool {
    PR_URL_EXACT.is_match(url)
}
