use crate::domain::models::{IssueKind, Item, ItemIssue};
use crate::services::schema::{item_prefix, item_slug};
use std::collections::HashMap;

#[derive(thiserror::Error, Debug)]
#[error("item bank has {} issue(s): {}", .0.len(), summarize(.0))]
pub struct ValidationError(pub Vec<ItemIssue>);

fn summarize(issues: &[ItemIssue]) -> String {
    issues
        .iter()
        .map(|i| format!("#{} {}", i.index, i.detail))
        .collect::<Vec<_>>()
        .join("; ")
}

fn is_blank(s: Option<&str>) -> bool {
    s.map(|v| v.trim().is_empty()).unwrap_or(true)
}

fn issue(index: usize, kind: IssueKind, detail: String) -> ItemIssue {
    ItemIssue {
        index,
        kind,
        detail,
    }
}

/// Reports what the lenient builder would silently drop or blank out.
pub fn validate_items(items: &[Item]) -> Vec<ItemIssue> {
    let mut out = Vec::new();
    let mut prefixes: HashMap<String, usize> = HashMap::new();

    for (index, item) in items.iter().enumerate() {
        for field in &item.mistyped {
            out.push(issue(index, IssueKind::NotText, format!("{field} is not text")));
        }
        if is_blank(item.name.as_deref()) && !item.mistyped.contains(&"name") {
            out.push(issue(index, IssueKind::MissingName, "missing name".to_string()));
        }
        if is_blank(item.description.as_deref()) && !item.mistyped.contains(&"description") {
            out.push(issue(
                index,
                IssueKind::MissingDescription,
                format!("missing description for '{}'", item.name_text()),
            ));
        }

        let Some(category) = item.category() else {
            out.push(issue(
                index,
                IssueKind::UnknownTable,
                format!("table {} is neither 1 nor 2", item.table),
            ));
            continue;
        };

        if item_slug(item).is_empty() {
            out.push(issue(
                index,
                IssueKind::EmptySlug,
                format!("'{}' yields an empty slug", item.name_text()),
            ));
            continue;
        }

        let prefix = item_prefix(category, item);
        if let Some(first) = prefixes.get(&prefix) {
            out.push(issue(
                index,
                IssueKind::DuplicateSlug,
                format!("{prefix} already used by item #{first}"),
            ));
        } else {
            prefixes.insert(prefix, index);
        }
    }
    out
}

pub fn ensure_valid(items: &[Item]) -> Result<(), ValidationError> {
    let issues = validate_items(items);
    if issues.is_empty() {
        Ok(())
    } else {
        Err(ValidationError(issues))
    }
}
