use serde::{Deserialize, Serialize};

/// Mail providers adopters commonly use; typos are matched against these.
const COMMON_DOMAINS: &[&str] = &[
    "gmail.com",
    "hotmail.com",
    "hotmail.es",
    "outlook.com",
    "outlook.es",
    "yahoo.com",
    "yahoo.es",
    "live.com",
    "icloud.com",
    "protonmail.com",
];

const SIMILARITY_THRESHOLD: f64 = 0.85;

/// Likely correction for a mistyped e-mail domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmailSuggestion {
    pub original: String,
    pub suggested: String,
    pub similarity: f64,
}

/// Split an address into local part and domain when it is plausibly well formed.
pub(crate) fn split_address(email: &str) -> Option<(&str, &str)> {
    let (local, domain) = email.split_once('@')?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace);
    well_formed.then_some((local, domain))
}

/// Suggest a known provider domain when the address looks like a typo of one.
pub fn suggest_email_correction(email: &str) -> Option<EmailSuggestion> {
    let email = email.trim();
    let (local, domain) = split_address(email)?;
    let domain = domain.to_ascii_lowercase();

    if COMMON_DOMAINS.contains(&domain.as_str()) {
        return None;
    }

    let (best, similarity) = COMMON_DOMAINS
        .iter()
        .map(|candidate| (*candidate, strsim::jaro_winkler(&domain, candidate)))
        .max_by(|left, right| left.1.total_cmp(&right.1))?;

    if similarity < SIMILARITY_THRESHOLD {
        return None;
    }

    Some(EmailSuggestion {
        original: email.to_string(),
        suggested: format!("{local}@{best}"),
        similarity,
    })
}
