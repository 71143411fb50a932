//! Test fixtures - asset contents and their known base64 digests.

pub const APP_CSS: &str = "body{}";
pub const THEME_CSS: &str = "a{}";
pub const MAIN_JS: &str = "console.log(1)";

/// Binary payload that is not valid UTF-8
pub const LOGO_PNG: &[u8] = &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0xff];

pub const APP_CSS_SHA256: &str = "fJgEClQWV1hGkK4qHMO0KotTsVnMYMXTq7/suurGyUo=";
pub const THEME_CSS_SHA256: &str = "X1RutGBrXCt9KkSaXMK7tHftWiRscFHOhxsS8tv8hBk=";
pub const MAIN_JS_SHA256: &str = "CihokcEcBW4atb/CW/XWsvWwbTjqwQlE9nj9ii5ww5M=";

pub const APP_CSS_SHA384: &str =
    "myyg/hQ74aSgjBBvVME/QXAXEkT4Y9dHbVQ5C0lIyGpldvNLJV2IWc5ElXbqLi06";
pub const APP_CSS_SHA512: &str =
    "RX+E71HnX1pcVahPcN1JJT8DtvWD7JkmmiFvLvCoYRohC7wU1R/5eCgzNUXDlnQ7LRMjO2VgEmsdRqeHPzrNCQ==";
