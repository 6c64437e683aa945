use crate::domain::constants::{
    DEFAULT_ENDPOINT, DEFAULT_INSTRUMENT_VERSION, DEFAULT_ITEMS_SOURCE, DEFAULT_SURVEY_YEAR,
    TABLE1_DESCRIPTION, TABLE1_TITLE, TABLE2_DESCRIPTION, TABLE2_TITLE,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Serialize)]
pub struct JsonOut<T: Serialize> {
    pub ok: bool,
    pub data: T,
}

#[derive(Serialize)]
pub struct ErrorOut {
    pub ok: bool,
    pub error: ErrorBody,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
}

/// One record of the item bank.
///
/// Fields are optional on the wire: the builder tolerates blank or missing
/// text and only `validate_items` complains about it. Numbers and booleans in
/// text fields are read as their JSON spelling; arrays and objects are dropped
/// and remembered in `mistyped`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
#[serde(from = "RawItem")]
pub struct Item {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Kept as raw JSON so `"1"` or `3` can be reported instead of failing the load.
    pub table: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip)]
    pub mistyped: Vec<&'static str>,
}

#[derive(Deserialize)]
struct RawItem {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    description: Value,
    #[serde(default)]
    table: Value,
    #[serde(default)]
    slug: Value,
}

fn lenient_text(
    field: &'static str,
    raw: Value,
    mistyped: &mut Vec<&'static str>,
) -> Option<String> {
    match raw {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(_) | Value::Object(_) => {
            mistyped.push(field);
            None
        }
    }
}

impl From<RawItem> for Item {
    fn from(raw: RawItem) -> Self {
        let mut mistyped = Vec::new();
        let name = lenient_text("name", raw.name, &mut mistyped);
        let description = lenient_text("description", raw.description, &mut mistyped);
        let slug = lenient_text("slug", raw.slug, &mut mistyped);
        Self {
            name,
            description,
            table: raw.table,
            slug,
            mistyped,
        }
    }
}

impl Item {
    pub fn category(&self) -> Option<Category> {
        Category::from_tag(&self.table)
    }

    pub fn name_text(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn description_text(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// The two item tables. Table 1 holds diagnoses, table 2 consequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Diagnosis,
    Consequence,
}

impl Category {
    pub const ALL: [Category; 2] = [Category::Diagnosis, Category::Consequence];

    /// Only the numbers 1 and 2 are recognized; strings, other numbers and
    /// missing tags yield `None`.
    pub fn from_tag(tag: &Value) -> Option<Self> {
        match tag.as_f64() {
            Some(v) if v == 1.0 => Some(Category::Diagnosis),
            Some(v) if v == 2.0 => Some(Category::Consequence),
            _ => None,
        }
    }

    pub fn prefix(self) -> &'static str {
        match self {
            Category::Diagnosis => "t1",
            Category::Consequence => "t2",
        }
    }

    pub fn page_name(self) -> &'static str {
        match self {
            Category::Diagnosis => "table1",
            Category::Consequence => "table2",
        }
    }

    pub fn page_title(self) -> &'static str {
        match self {
            Category::Diagnosis => TABLE1_TITLE,
            Category::Consequence => TABLE2_TITLE,
        }
    }

    pub fn page_description(self) -> &'static str {
        match self {
            Category::Diagnosis => TABLE1_DESCRIPTION,
            Category::Consequence => TABLE2_DESCRIPTION,
        }
    }

    /// Severity endpoint labels: "problem" framing for diagnoses, "cause" for consequences.
    pub fn severity_endpoints(self) -> (&'static str, &'static str) {
        match self {
            Category::Diagnosis => ("Minor problem", "Major problem"),
            Category::Consequence => ("Minor cause", "Major cause"),
        }
    }
}

/// Year and instrument version stamped into the schema title and every envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SurveyMeta {
    pub year: u32,
    pub version: String,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_year() -> u32 {
    DEFAULT_SURVEY_YEAR
}

fn default_version() -> String {
    DEFAULT_INSTRUMENT_VERSION.to_string()
}

fn default_items() -> String {
    DEFAULT_ITEMS_SOURCE.to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SurveyConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_year")]
    pub survey_year: u32,
    #[serde(default = "default_version")]
    pub instrument_version: String,
    #[serde(default = "default_items")]
    pub items: String,
    #[serde(default)]
    pub strict: bool,
}

impl Default for SurveyConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            survey_year: default_year(),
            instrument_version: default_version(),
            items: default_items(),
            strict: false,
        }
    }
}

impl SurveyConfig {
    pub fn meta(&self) -> SurveyMeta {
        SurveyMeta {
            year: self.survey_year,
            version: self.instrument_version.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormSchema {
    pub title: String,
    pub show_question_numbers: String,
    pub show_progress_bar: String,
    pub progress_bar_type: String,
    pub completed_html: String,
    pub pages: Vec<Page>,
}

impl FormSchema {
    pub fn question_names(&self) -> Vec<&str> {
        self.pages
            .iter()
            .flat_map(|p| p.panels())
            .flat_map(|panel| panel.questions())
            .map(|q| q.name.as_str())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page {
    pub name: String,
    pub title: String,
    pub description: String,
    pub elements: Vec<Element>,
}

impl Page {
    pub fn panels(&self) -> impl Iterator<Item = &Panel> {
        self.elements.iter().filter_map(|e| match e {
            Element::Panel(p) => Some(p),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Element {
    Panel(Panel),
    Html(HtmlBlock),
    Rating(RatingQuestion),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Panel {
    pub name: String,
    pub elements: Vec<Element>,
}

impl Panel {
    pub fn questions(&self) -> impl Iterator<Item = &RatingQuestion> {
        self.elements.iter().filter_map(|e| match e {
            Element::Rating(q) => Some(q),
            _ => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HtmlBlock {
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingQuestion {
    pub name: String,
    pub title: String,
    pub is_required: bool,
    pub rate_values: Vec<RateValue>,
    pub min_rate_description: String,
    pub max_rate_description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateValue {
    pub value: RateKey,
    pub text: String,
}

/// Scale points serialize as numbers, the N/A sentinel as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateKey {
    Point(u8),
    Sentinel(String),
}

/// Completion payload handed to the sink. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Envelope {
    submitted_at: String,
    response_id: String,
    meta_year: u32,
    meta_version: String,
    data: Value,
}

impl Envelope {
    pub(crate) fn new(
        submitted_at: String,
        response_id: String,
        meta: &SurveyMeta,
        data: Value,
    ) -> Self {
        Self {
            submitted_at,
            response_id,
            meta_year: meta.year,
            meta_version: meta.version.clone(),
            data,
        }
    }

    pub fn submitted_at(&self) -> &str {
        &self.submitted_at
    }

    pub fn response_id(&self) -> &str {
        &self.response_id
    }

    pub fn meta_year(&self) -> u32 {
        self.meta_year
    }

    pub fn meta_version(&self) -> &str {
        &self.meta_version
    }

    pub fn data(&self) -> &Value {
        &self.data
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    NotText,
    UnknownTable,
    MissingName,
    MissingDescription,
    EmptySlug,
    DuplicateSlug,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemIssue {
    pub index: usize,
    pub kind: IssueKind,
    pub detail: String,
}

#[derive(Serialize)]
pub struct PageSummary {
    pub name: String,
    pub panels: usize,
}

#[derive(Serialize)]
pub struct BuildReport {
    pub path: String,
    pub questions: usize,
    pub pages: Vec<PageSummary>,
}

#[derive(Serialize)]
pub struct SubmitReport {
    pub response_id: String,
    pub submitted_at: String,
    pub endpoint: String,
    pub dispatched: bool,
    pub message: String,
}
