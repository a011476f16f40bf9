use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Well-known consumer and regional mail providers.
const POPULAR_DOMAINS: &[&str] = &[
    // international
    "gmail.com",
    "yahoo.com",
    "hotmail.com",
    "outlook.com",
    "live.com",
    "icloud.com",
    "me.com",
    "mac.com",
    "aol.com",
    "protonmail.com",
    // russian
    "yandex.ru",
    "mail.ru",
    "inbox.ru",
    "list.ru",
    "bk.ru",
    "rambler.ru",
    // slovak
    "azet.sk",
    "centrum.sk",
    "atlas.sk",
    "zoznam.sk",
    "post.sk",
    "orange.sk",
    "telekom.sk",
    "chello.sk",
    // czech
    "seznam.cz",
    "centrum.cz",
    "post.cz",
    "quick.cz",
    // german
    "gmx.de",
    "web.de",
    "t-online.de",
    "freenet.de",
    // ukrainian
    "ukr.net",
    "i.ua",
    "bigmir.net",
    "meta.ua",
    // regional variants
    "yahoo.co.uk",
    "yahoo.fr",
    "yahoo.de",
    "yahoo.ca",
    "hotmail.co.uk",
    "hotmail.fr",
    "hotmail.de",
    "googlemail.com",
    "pm.me",
];

/// Disposable-mail services, rejected even when the domain looks like a business.
pub(crate) const DISPOSABLE_PROVIDERS: &[&str] =
    &["tempmail.", "10minutemail.", "guerrillamail.", "mailinator."];

/// Placeholder and throwaway fragments, checked once the corporate patterns missed.
const SUSPICIOUS_FRAGMENTS: &[&str] = &[
    "throwaway",
    "temp-mail",
    "fake",
    "test",
    "example",
    // gmail.com typos and look-alike hosts
    "ail.com",
];

static CORPORATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"^[a-zA-Z0-9-]+\.(com|net|org|edu|gov)$",
        r"^[a-zA-Z0-9-]+\.(sk|cz|de|at|hu|pl|ua|ru)$",
        r"^[a-zA-Z0-9-]+\.(co\.uk|co\.za|com\.au|com\.br)$",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("corporate domain regex"))
    .collect()
});

const MIN_CORPORATE_LABEL_LENGTH: usize = 3;
const MIN_DOMAIN_LENGTH: usize = 4;

/// Why an email domain was accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainKind {
    Popular,
    Corporate,
    Unknown,
}

impl DomainKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainKind::Popular => "popular",
            DomainKind::Corporate => "corporate",
            DomainKind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for DomainKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DomainRejection {
    #[error("email address has no domain")]
    NoDomain,
    #[error("email domain belongs to a disposable or placeholder service")]
    Suspicious,
    #[error("email domain is malformed")]
    Invalid,
}

impl DomainRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainRejection::NoDomain => "noDomain",
            DomainRejection::Suspicious => "suspicious",
            DomainRejection::Invalid => "invalid",
        }
    }
}

fn contains_any(domain: &str, fragments: &[&str]) -> bool {
    fragments.iter().any(|fragment| domain.contains(fragment))
}

fn is_corporate(domain: &str) -> bool {
    let main_label = domain.split('.').next().unwrap_or_default();
    main_label.chars().count() >= MIN_CORPORATE_LABEL_LENGTH
        && CORPORATE_PATTERNS.iter().any(|p| p.is_match(domain))
}

/// Classifies the domain of an email that already passed the shape check.
///
/// Popular providers are accepted first. Known disposable services are rejected
/// next, then plausible business domains are accepted. Of what remains,
/// placeholder-looking and broken domains are rejected and anything else is
/// accepted as [`DomainKind::Unknown`].
pub fn validate_email_domain(email: &str) -> Result<DomainKind, DomainRejection> {
    let domain = match email.split('@').nth(1) {
        Some(domain) if !domain.is_empty() => domain.to_lowercase(),
        _ => return Err(DomainRejection::NoDomain),
    };

    if POPULAR_DOMAINS.contains(&domain.as_str()) {
        return Ok(DomainKind::Popular);
    }
    if contains_any(&domain, DISPOSABLE_PROVIDERS) {
        return Err(DomainRejection::Suspicious);
    }
    if is_corporate(&domain) {
        return Ok(DomainKind::Corporate);
    }
    if contains_any(&domain, SUSPICIOUS_FRAGMENTS) {
        return Err(DomainRejection::Suspicious);
    }
    if domain.chars().count() < MIN_DOMAIN_LENGTH || !domain.contains('.') {
        return Err(DomainRejection::Invalid);
    }
    Ok(DomainKind::Unknown)
}
