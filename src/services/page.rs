use crate::domain::constants::{CONTAINER_ID, LOAD_ERROR_HTML, SUBMIT_CONTENT_TYPE};
use crate::domain::models::{FormSchema, SurveyConfig};
use crate::services::schema::escape_html;

const ENGINE_CSS: &str = "https://unpkg.com/survey-core/defaultV2.min.css";
const ENGINE_CORE_JS: &str = "https://unpkg.com/survey-core/survey.core.min.js";
const ENGINE_UI_JS: &str = "https://unpkg.com/survey-js-ui/survey-js-ui.min.js";

fn shell(title: &str, container: &str, script: Option<&str>) -> String {
    let mut html = String::new();
    html.push_str("<!doctype html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"utf-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    if script.is_some() {
        html.push_str(&format!("<link href=\"{ENGINE_CSS}\" rel=\"stylesheet\">\n"));
        html.push_str(&format!("<script src=\"{ENGINE_CORE_JS}\"></script>\n"));
        html.push_str(&format!("<script src=\"{ENGINE_UI_JS}\"></script>\n"));
    }
    html.push_str("</head>\n<body>\n");
    html.push_str(&format!("<div id=\"{CONTAINER_ID}\">{container}</div>\n"));
    if let Some(s) = script {
        html.push_str("<script>\n");
        html.push_str(s);
        html.push_str("</script>\n");
    }
    html.push_str("</body>\n</html>\n");
    html
}

/// JSON literal safe to inline in a `<script>` element.
fn script_json<T: serde::Serialize + ?Sized>(value: &T) -> anyhow::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Host page that mounts the rendering engine and posts each completion,
/// unacknowledged, to the configured endpoint.
pub fn render_host_page(schema: &FormSchema, cfg: &SurveyConfig) -> anyhow::Result<String> {
    let script = format!(
        r#"const surveyJson = {schema};
const endpoint = {endpoint};
const survey = new Survey.Model(surveyJson);
survey.onComplete.add((sender) => {{
  const responseId = (window.crypto && crypto.randomUUID)
    ? crypto.randomUUID()
    : "id_" + Math.random().toString(16).slice(2) + "_" + Date.now().toString(16);
  const payload = {{
    submitted_at: new Date().toISOString(),
    response_id: responseId,
    meta_year: {year},
    meta_version: {version},
    data: sender.data
  }};
  fetch(endpoint, {{
    method: "POST",
    mode: "no-cors",
    headers: {{ "Content-Type": {content_type} }},
    body: JSON.stringify(payload)
  }}).catch((err) => console.error("Submission failed:", err));
}});
document.addEventListener("DOMContentLoaded", () => {{
  survey.render(document.getElementById({container}));
}});
"#,
        schema = script_json(schema)?,
        endpoint = script_json(&cfg.endpoint)?,
        year = cfg.survey_year,
        version = script_json(&cfg.instrument_version)?,
        content_type = script_json(SUBMIT_CONTENT_TYPE)?,
        container = script_json(CONTAINER_ID)?,
    );
    Ok(shell(&schema.title, "", Some(&script)))
}

pub fn render_error_page(title: &str) -> String {
    shell(title, LOAD_ERROR_HTML, None)
}
