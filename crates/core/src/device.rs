//! Mobile device classification from the User-Agent header.

/// Substrings that mark a user agent as a mobile device.
///
/// Matched case-insensitively against the raw header value.
pub const MOBILE_UA_KEYWORDS: &[&str] = &[
    "mobile",
    "android",
    "iphone",
    "ipad",
    "ipod",
    "blackberry",
    "windows phone",
    "opera mini",
    "iemobile",
];

/// Classify a User-Agent string as mobile or not.
///
/// A missing header is passed as the empty string and is not mobile.
pub fn is_mobile_device(user_agent: &str) -> bool {
    if user_agent.is_empty() {
        return false;
    }
    let ua = user_agent.to_lowercase();
    MOBILE_UA_KEYWORDS.iter().any(|kw| ua.contains(kw))
}
