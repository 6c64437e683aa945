/// Google Apps Script web app that appends each envelope to the response sheet.
pub const DEFAULT_ENDPOINT: &str = "https://script.google.com/macros/s/AKfycbxFyvSXpJZXtVfsLcxcLte8Yo7GXdG8nM7PQVTQIYZm2S-qAoqPFwtPSdAH9LL18C8m/exec";
pub const DEFAULT_SURVEY_YEAR: u32 = 2026;
pub const DEFAULT_INSTRUMENT_VERSION: &str = "2026.1";
pub const DEFAULT_ITEMS_SOURCE: &str = "./items.json";
pub const DEFAULT_CONFIG_FILE: &str = "survey.toml";
pub const ITEMS_FILE_NAME: &str = "items.json";

pub const BANK_FETCH_TIMEOUT_MS: u64 = 3000;

pub const CONTAINER_ID: &str = "surveyContainer";
pub const LOAD_ERROR_HTML: &str = "<p><b>Error:</b> Failed to load survey resources.</p>";
pub const LOAD_ERROR_TEXT: &str = "Error: Failed to load survey resources.";
pub const THANKS_TEXT: &str = "Thanks — your responses have been recorded.";
pub const COMPLETED_HTML: &str =
    "<h3>Thanks — your responses have been recorded.</h3><p>You may now close this window.</p>";

pub const SCALE_POINTS: u8 = 7;
pub const NOT_APPLICABLE_VALUE: &str = "NA";
pub const NOT_APPLICABLE_TEXT: &str = "N/A";

pub const AGREEMENT_TITLE: &str = "Agreement";
pub const AGREEMENT_MIN: &str = "Strongly disagree";
pub const AGREEMENT_MAX: &str = "Strongly agree";
pub const SEVERITY_TITLE: &str = "Severity";

pub const TABLE1_TITLE: &str = "Table 1 — Diagnoses";
pub const TABLE1_DESCRIPTION: &str =
    "For each diagnostic item, rate agreement (is it the case?) and severity (how big of a problem?).";
pub const TABLE2_TITLE: &str = "Table 2 — Consequences";
pub const TABLE2_DESCRIPTION: &str = "For each consequence item, rate agreement (is it the case?) and severity (how big of a cause is lack of theory development?).";

pub const SUBMIT_CONTENT_TYPE: &str = "text/plain;charset=utf-8";
