use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Region whose numbering plan a phone number matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneRegion {
    Slovakia,
    Czech,
    Russia,
    Ukraine,
    NorthAmerica,
    Germany,
    Austria,
    Poland,
    Hungary,
    International,
}

impl PhoneRegion {
    /// Patterns are tried in this order; the first match wins.
    pub const ALL: [PhoneRegion; 10] = [
        PhoneRegion::Slovakia,
        PhoneRegion::Czech,
        PhoneRegion::Russia,
        PhoneRegion::Ukraine,
        PhoneRegion::NorthAmerica,
        PhoneRegion::Germany,
        PhoneRegion::Austria,
        PhoneRegion::Poland,
        PhoneRegion::Hungary,
        PhoneRegion::International,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneRegion::Slovakia => "slovakia",
            PhoneRegion::Czech => "czech",
            PhoneRegion::Russia => "russia",
            PhoneRegion::Ukraine => "ukraine",
            PhoneRegion::NorthAmerica => "northAmerica",
            PhoneRegion::Germany => "germany",
            PhoneRegion::Austria => "austria",
            PhoneRegion::Poland => "poland",
            PhoneRegion::Hungary => "hungary",
            PhoneRegion::International => "international",
        }
    }

    fn pattern(&self) -> &'static str {
        match self {
            PhoneRegion::Slovakia => r"^(\+421|421|0)[1-9][0-9]{8}$",
            PhoneRegion::Czech => r"^(\+420|420)[1-9][0-9]{8}$",
            PhoneRegion::Russia => r"^(\+7|7|8)[1-9][0-9]{9}$",
            PhoneRegion::Ukraine => r"^(\+380|380)[1-9][0-9]{8}$",
            PhoneRegion::NorthAmerica => r"^(\+1|1)[2-9][0-9]{2}[2-9][0-9]{2}[0-9]{4}$",
            PhoneRegion::Germany => r"^(\+49|49|0)[1-9][0-9]{10,11}$",
            PhoneRegion::Austria => r"^(\+43|43|0)[1-9][0-9]{8,12}$",
            PhoneRegion::Poland => r"^(\+48|48)[1-9][0-9]{8}$",
            PhoneRegion::Hungary => r"^(\+36|36)[1-9][0-9]{8}$",
            PhoneRegion::International => r"^\+[1-9][0-9]{7,14}$",
        }
    }
}

impl fmt::Display for PhoneRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PhoneRejection {
    #[error("phone number must have between 7 and 16 characters")]
    InvalidLength,
    #[error("phone number may only contain digits and a leading '+'")]
    InvalidCharacters,
    #[error("phone number does not match any known format")]
    InvalidFormat,
}

impl PhoneRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            PhoneRejection::InvalidLength => "invalidLength",
            PhoneRejection::InvalidCharacters => "invalidCharacters",
            PhoneRejection::InvalidFormat => "invalidFormat",
        }
    }
}

const MIN_PHONE_LENGTH: usize = 7;
const MAX_PHONE_LENGTH: usize = 16;

static REGION_PATTERNS: Lazy<Vec<(PhoneRegion, Regex)>> = Lazy::new(|| {
    PhoneRegion::ALL
        .iter()
        .map(|region| {
            let pattern = Regex::new(region.pattern()).expect("phone region regex");
            (*region, pattern)
        })
        .collect()
});

static DIGITS_WITH_OPTIONAL_PLUS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\+?[0-9]+$").expect("phone charset regex"));

/// Drops whitespace, parentheses and hyphens.
fn clean_phone_number(phone: &str) -> String {
    phone
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

/// Checks an optional phone number.
///
/// Blank input is valid and yields `Ok(None)`. Otherwise the cleaned number is
/// matched against the regional patterns in [`PhoneRegion::ALL`] order. When none
/// matches, the length and the character set decide which rejection is reported.
pub fn validate_phone_number(phone: &str) -> Result<Option<PhoneRegion>, PhoneRejection> {
    if phone.trim().is_empty() {
        return Ok(None);
    }
    let cleaned = clean_phone_number(phone);

    if let Some((region, _)) = REGION_PATTERNS
        .iter()
        .find(|(_, pattern)| pattern.is_match(&cleaned))
    {
        return Ok(Some(*region));
    }

    let length = cleaned.chars().count();
    if !(MIN_PHONE_LENGTH..=MAX_PHONE_LENGTH).contains(&length) {
        return Err(PhoneRejection::InvalidLength);
    }
    if !DIGITS_WITH_OPTIONAL_PLUS.is_match(&cleaned) {
        return Err(PhoneRejection::InvalidCharacters);
    }
    Err(PhoneRejection::InvalidFormat)
}

struct Grouping {
    prefix: &'static str,
    pattern: Regex,
    replacement: &'static str,
}

// Order matters: `+421`/`+420` must be tried before the generic `+` rule.
static GROUPINGS: Lazy<Vec<Grouping>> = Lazy::new(|| {
    [
        (
            "+421",
            r"^(\+421)([0-9]{3})([0-9]{3})([0-9]{3})",
            "${1} ${2} ${3} ${4}",
        ),
        (
            "+7",
            r"^(\+7)([0-9]{3})([0-9]{3})([0-9]{2})([0-9]{2})",
            "${1} ${2} ${3} ${4} ${5}",
        ),
        (
            "+420",
            r"^(\+420)([0-9]{3})([0-9]{3})([0-9]{3})",
            "${1} ${2} ${3} ${4}",
        ),
        (
            "+1",
            r"^(\+1)([0-9]{3})([0-9]{3})([0-9]{4})",
            "${1} ${2} ${3} ${4}",
        ),
        (
            "+",
            r"^(\+[0-9]{1,3})([0-9]{3})([0-9]{3})([0-9]+)",
            "${1} ${2} ${3} ${4}",
        ),
    ]
    .into_iter()
    .map(|(prefix, pattern, replacement)| Grouping {
        prefix,
        pattern: Regex::new(pattern).expect("phone grouping regex"),
        replacement,
    })
    .collect()
});

/// Normalises a phone number as it is typed.
///
/// Everything but digits and `+` is removed, then numbers with a known country
/// prefix are split into that country's groups. Incomplete numbers are returned
/// cleaned but ungrouped.
pub fn format_phone_number(value: &str) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect();

    match GROUPINGS.iter().find(|g| cleaned.starts_with(g.prefix)) {
        Some(grouping) => grouping
            .pattern
            .replacen(&cleaned, 1, grouping.replacement)
            .into_owned(),
        None => cleaned,
    }
}

/// A phone number that matched one of the regional patterns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneNumber {
    number: String,
    region: PhoneRegion,
}

impl PhoneNumber {
    /// `Ok(None)` when the field was left blank.
    pub fn parse_optional(raw: &str) -> Result<Option<Self>, PhoneRejection> {
        Ok(validate_phone_number(raw)?.map(|region| Self {
            number: raw.to_string(),
            region,
        }))
    }

    pub fn region(&self) -> PhoneRegion {
        self.region
    }
}

impl AsRef<str> for PhoneNumber {
    fn as_ref(&self) -> &str {
        &self.number
    }
}
