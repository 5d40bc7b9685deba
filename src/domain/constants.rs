/// Scans an unauthenticated guest session may perform before being blocked.
pub const GUEST_SCAN_QUOTA: u32 = 10;

/// Candidate pools the mock label reader draws from.
pub const MOCK_MATERIALS: &[&str] = &[
    "Cotton",
    "Polyester",
    "Rayon",
    "Organic Cotton",
    "Nylon",
];
pub const MOCK_BRANDS: &[&str] = &[
    "FastFashionCo",
    "EcoThread",
    "UrbanTrend",
    "Unknown Label",
];
pub const MOCK_ORIGINS: &[&str] = &[
    "Made in China",
    "Made in Bangladesh",
    "Made in Portugal",
    "Made in UK",
];

/// Ordered model identifiers the AI label reader attempts in sequence.
pub const LABEL_MODEL_FALLBACK: &[&str] = &[
    "gemini-2.0-flash",
    "gemini-1.5-flash",
    "gemini-1.5-flash-8b",
    "gemini-pro-vision",
];

pub const LABEL_EXTRACTION_PROMPT: &str = "Read this clothing care label. Reply with exactly one line \
formatted as Brand|Origin|Material. Use Unknown for any field you cannot read.";

pub const LABEL_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Environment fallback for the label-service credential. Absence selects
/// the mock strategy; it is not an error.
pub const API_KEY_ENV: &str = "UNSTITCHED_API_KEY";

/// Community board content shown to premium members.
pub const BOARD_CHALLENGE: &str = "Weekly Challenge: Denim";
pub const BOARD_ENTRIES: &[(&str, &str)] = &[
    ("EcoWarrior99", "Before: worn-out jeans"),
    ("SarahSews", "After: tote bag result!"),
];
