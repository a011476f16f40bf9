use crate::domain::FormInput;
use crate::domain::email_domain::DISPOSABLE_PROVIDERS;
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;
use unicode_segmentation::UnicodeSegmentation;

pub const MIN_MESSAGE_LENGTH: usize = 10;
pub const MAX_MESSAGE_LENGTH: usize = 2000;

/// Matched case-insensitively anywhere in `name message email`.
const SPAM_KEYWORDS: &[&str] = &[
    // commercial spam
    "bitcoin",
    "crypto",
    "loan",
    "money",
    "cash",
    "prize",
    "winner",
    "congratulations",
    "free money",
    "click here",
    "urgent",
    "limited time",
    "act now",
    "guarantee",
    // profanity
    "fuck",
    "shit",
    "damn",
    "bitch",
    "asshole",
    "bastard",
    "блядь",
    "сука",
    "пизда",
    "хуй",
    "ебать",
    "мудак",
    "долбоеб",
    "kurva",
    "piča",
    "kokot",
    "jebať",
    "sráč",
    // seo and marketing offers
    "seo services",
    "backlinks for",
    "rank higher google",
    "marketing services offer",
    "increase traffic guaranteed",
    "social media followers",
    "buy likes",
    // pharmaceuticals
    "viagra",
    "cialis",
    "online pharmacy",
    "buy pills",
    "cheap medication",
];


const MAX_CHARACTER_RUN: usize = 6;

/// Structural shapes typical of spam.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpamPattern {
    CardNumber,
    Shouting,
    RepeatedCharacter,
    PriceDiscount,
    PriceSale,
    PercentOff,
    UrlWithPath,
}

impl SpamPattern {
    pub fn as_str(&self) -> &'static str {
        match self {
            SpamPattern::CardNumber => "cardNumber",
            SpamPattern::Shouting => "shouting",
            SpamPattern::RepeatedCharacter => "repeatedCharacter",
            SpamPattern::PriceDiscount => "priceDiscount",
            SpamPattern::PriceSale => "priceSale",
            SpamPattern::PercentOff => "percentOff",
            SpamPattern::UrlWithPath => "urlWithPath",
        }
    }
}

impl fmt::Display for SpamPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ContentRejection {
    #[error("message contains the spam keyword '{0}'")]
    SpamKeyword(&'static str),
    #[error("message matches the spam pattern '{0}'")]
    SuspiciousPattern(SpamPattern),
    #[error("message is shorter than 10 characters")]
    TooShort,
    #[error("message is longer than 2000 characters")]
    TooLong,
    #[error("email uses a disposable mail provider")]
    SuspiciousEmail,
}

impl ContentRejection {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentRejection::SpamKeyword(_) => "spamKeyword",
            ContentRejection::SuspiciousPattern(_) => "suspiciousPattern",
            ContentRejection::TooShort => "tooShort",
            ContentRejection::TooLong => "tooLong",
            ContentRejection::SuspiciousEmail => "suspiciousEmail",
        }
    }
}

/// The text a submission is screened on.
struct Screened {
    /// The message as typed.
    message: String,
    /// `name message email`, lower-cased.
    lowered: String,
}

static CARD_NUMBER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}[\s-]?[0-9]{4}\b")
        .expect("card number regex")
});
static SHOUTING: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[A-Z]{8,}").expect("shouting regex"));
static PRICE_DISCOUNT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$[0-9]+.*discount").expect("price discount regex"));
static PRICE_SALE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"€[0-9]+.*sale").expect("price sale regex"));
static PERCENT_OFF: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b[0-9]+%\s*(off|discount|sale)\b").expect("percent off regex")
});
static URL_WITH_PATH: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)https?://[^\s]+\.(com|net|org|ru|sk|cz)/[^\s]+").expect("url regex")
});

fn has_repeated_character(text: &str) -> bool {
    let mut previous = None;
    let mut run = 0;
    for c in text.chars() {
        if Some(c) == previous && c != '\n' {
            run += 1;
            if run > MAX_CHARACTER_RUN {
                return true;
            }
        } else {
            previous = Some(c);
            run = 1;
        }
    }
    false
}

/// Evaluated in order; the first hit is reported.
const SPAM_PATTERNS: &[(SpamPattern, fn(&Screened) -> bool)] = &[
    (SpamPattern::CardNumber, |s: &Screened| {
        CARD_NUMBER.is_match(&s.lowered)
    }),
    // Names and emails are often typed in capitals, so only the message counts.
    (SpamPattern::Shouting, |s: &Screened| {
        SHOUTING.is_match(&s.message)
    }),
    (SpamPattern::RepeatedCharacter, |s: &Screened| {
        has_repeated_character(&s.lowered)
    }),
    (SpamPattern::PriceDiscount, |s: &Screened| {
        PRICE_DISCOUNT.is_match(&s.lowered)
    }),
    (SpamPattern::PriceSale, |s: &Screened| {
        PRICE_SALE.is_match(&s.lowered)
    }),
    (SpamPattern::PercentOff, |s: &Screened| {
        PERCENT_OFF.is_match(&s.lowered)
    }),
    (SpamPattern::UrlWithPath, |s: &Screened| {
        URL_WITH_PATH.is_match(&s.lowered)
    }),
];

/// Screens a submission for spam, abusive language and message length.
///
/// Checks run in a fixed order: keywords, structural patterns, minimum length,
/// maximum length, disposable email provider. Only the first failure is
/// reported.
pub fn validate_content(input: &FormInput) -> Result<(), ContentRejection> {
    let screened = Screened {
        message: input.message.clone(),
        lowered: format!("{} {} {}", input.name, input.message, input.email).to_lowercase(),
    };

    if let Some(keyword) = SPAM_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| screened.lowered.contains(keyword))
    {
        tracing::debug!(keyword, "Spam keyword detected");
        return Err(ContentRejection::SpamKeyword(keyword));
    }

    if let Some((pattern, _)) = SPAM_PATTERNS
        .iter()
        .find(|(_, matches)| matches(&screened))
    {
        tracing::debug!(pattern = %pattern, "Spam pattern detected");
        return Err(ContentRejection::SuspiciousPattern(*pattern));
    }

    if input.message.trim().graphemes(true).count() < MIN_MESSAGE_LENGTH {
        return Err(ContentRejection::TooShort);
    }
    if input.message.graphemes(true).count() > MAX_MESSAGE_LENGTH {
        return Err(ContentRejection::TooLong);
    }

    if let Some(domain) = input.email.split('@').nth(1) {
        let domain = domain.to_lowercase();
        if DISPOSABLE_PROVIDERS
            .iter()
            .any(|provider| domain.contains(provider))
        {
            return Err(ContentRejection::SuspiciousEmail);
        }
    }

    Ok(())
}
