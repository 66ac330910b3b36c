//! Test fixtures and constants.

/// Snapshot file name inside the test directory.
pub const SNAPSHOT_FILE: &str = "params.json";

/// Delimiter of the errors section.
pub const ERRORS_RULE: &str = "------------- ERRORS -------------------";

/// Delimiter of the matches section.
pub const FOUND_RULE: &str = "------------- KEYS USING VALUE -------------------";

/// Mixed path-style and plain parameters.
pub const APP_PARAMETERS: &[(&str, &str, &str)] = &[
    ("/app/db/pass", "SecureString", "secret1"),
    ("/app/db/user", "String", "admin"),
    ("plainKey", "String", "secret1"),
];

/// Parameters spread over several roots.
pub const MULTI_ROOT_PARAMETERS: &[(&str, &str, &str)] = &[
    ("/billing/api/key", "SecureString", "sk-live-1"),
    ("/billing/api/url", "String", "https://billing"),
    ("/search/api/key", "SecureString", "sk-live-1"),
    ("/search/api/url", "String", "https://search"),
    ("LEGACY_KEY", "SecureString", "sk-live-1"),
    ("LEGACY_KEY_OLD", "SecureString", "SK-LIVE-1"),
    ("tags", "StringList", "sk-live-1"),
];
