use crate::domain::constants::{
    AGREEMENT_MAX, AGREEMENT_MIN, AGREEMENT_TITLE, COMPLETED_HTML, NOT_APPLICABLE_TEXT,
    NOT_APPLICABLE_VALUE, SCALE_POINTS, SEVERITY_TITLE,
};
use crate::domain::models::{
    Category, Element, FormSchema, HtmlBlock, Item, Page, Panel, RateKey, RateValue,
    RatingQuestion, SurveyMeta,
};
use tracing::debug;

/// Lower-cases, spells out `&`, and collapses every run of characters
/// outside `[a-z0-9]` into one `_`, trimming separators at both ends.
pub fn slugify(name: &str) -> String {
    let lowered = name.to_lowercase().replace('&', " and ");
    let mut out = String::with_capacity(lowered.len());
    let mut pending_sep = false;
    for c in lowered.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_sep && !out.is_empty() {
                out.push('_');
            }
            pending_sep = false;
            out.push(c);
        } else {
            pending_sep = true;
        }
    }
    out
}

/// Provided non-empty slug wins; otherwise it is derived from the name.
pub fn item_slug(item: &Item) -> String {
    match item.slug.as_deref() {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slugify(item.name_text()),
    }
}

pub fn item_prefix(category: Category, item: &Item) -> String {
    format!("{}_{}", category.prefix(), item_slug(item))
}

pub fn rate_values() -> Vec<RateValue> {
    let mut values: Vec<RateValue> = (1..=SCALE_POINTS)
        .map(|n| RateValue {
            value: RateKey::Point(n),
            text: n.to_string(),
        })
        .collect();
    values.push(RateValue {
        value: RateKey::Sentinel(NOT_APPLICABLE_VALUE.to_string()),
        text: NOT_APPLICABLE_TEXT.to_string(),
    });
    values
}

pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn header_html(item: &Item) -> String {
    format!(
        "<div style=\"padding: 8px 0 2px 0;\">\
         <div style=\"font-weight:700; font-size:1.05rem;\">{}</div>\
         <div style=\"margin-top:4px; color:#555;\">{}</div>\
         </div>",
        escape_html(item.name_text()),
        escape_html(item.description_text())
    )
}

fn rating(name: String, title: &str, endpoints: (&str, &str)) -> Element {
    Element::Rating(RatingQuestion {
        name,
        title: title.to_string(),
        is_required: true,
        rate_values: rate_values(),
        min_rate_description: endpoints.0.to_string(),
        max_rate_description: endpoints.1.to_string(),
    })
}

pub fn item_panel(category: Category, item: &Item) -> Panel {
    let prefix = item_prefix(category, item);
    Panel {
        name: format!("{prefix}_panel"),
        elements: vec![
            Element::Html(HtmlBlock {
                html: header_html(item),
            }),
            rating(
                format!("{prefix}_agreement"),
                AGREEMENT_TITLE,
                (AGREEMENT_MIN, AGREEMENT_MAX),
            ),
            rating(
                format!("{prefix}_severity"),
                SEVERITY_TITLE,
                category.severity_endpoints(),
            ),
        ],
    }
}

fn page(category: Category, items: &[Item]) -> Page {
    let elements: Vec<Element> = items
        .iter()
        .filter(|i| i.category() == Some(category))
        .map(|i| Element::Panel(item_panel(category, i)))
        .collect();
    Page {
        name: category.page_name().to_string(),
        title: category.page_title().to_string(),
        description: category.page_description().to_string(),
        elements,
    }
}

pub fn survey_title(meta: &SurveyMeta) -> String {
    format!(
        "Perspectives on Theory in Psychological Science ({})",
        meta.year
    )
}

/// Items whose tag is neither 1 nor 2 land on no page.
pub fn build_survey(items: &[Item], meta: &SurveyMeta) -> FormSchema {
    let pages: Vec<Page> = Category::ALL.iter().map(|c| page(*c, items)).collect();
    debug!(
        items = items.len(),
        table1 = pages[0].elements.len(),
        table2 = pages[1].elements.len(),
        "built form schema"
    );
    FormSchema {
        title: survey_title(meta),
        show_question_numbers: "off".to_string(),
        show_progress_bar: "top".to_string(),
        progress_bar_type: "pages".to_string(),
        completed_html: COMPLETED_HTML.to_string(),
        pages,
    }
}
