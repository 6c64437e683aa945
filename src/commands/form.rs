use crate::*;

fn load_checked(cfg: &SurveyConfig, strict: bool) -> anyhow::Result<Vec<Item>> {
    let items = load_items(&cfg.items)?;
    if strict || cfg.strict {
        ensure_valid(&items)?;
    }
    Ok(items)
}

fn page_summaries(schema: &FormSchema) -> Vec<PageSummary> {
    schema
        .pages
        .iter()
        .map(|p| PageSummary {
            name: p.name.clone(),
            panels: p.panels().count(),
        })
        .collect()
}

fn write_report(path: &str, schema: &FormSchema) -> BuildReport {
    BuildReport {
        path: path.to_string(),
        questions: schema.question_names().len(),
        pages: page_summaries(schema),
    }
}

fn report_row(r: &BuildReport) -> String {
    let pages: Vec<String> = r
        .pages
        .iter()
        .map(|p| format!("{}={}", p.name, p.panels))
        .collect();
    format!("wrote {} ({})", r.path, pages.join(" "))
}

pub fn handle_form_commands(cli: &Cli, cfg: &SurveyConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::Build { out, strict } => {
            let items = load_checked(cfg, *strict)?;
            let schema = build_survey(&items, &cfg.meta());
            match out {
                Some(path) => {
                    std::fs::write(path, serde_json::to_string_pretty(&schema)?)?;
                    print_one(cli.json, write_report(path, &schema), report_row)?;
                }
                None if cli.json => print_one(true, &schema, |_| String::new())?,
                None => println!("{}", serde_json::to_string_pretty(&schema)?),
            }
        }
        Commands::Page { out, strict } => {
            let items = match load_items(&cfg.items) {
                Ok(items) => items,
                Err(e) => {
                    let error_page = render_error_page(&survey_title(&cfg.meta()));
                    match out {
                        Some(path) => std::fs::write(path, error_page)?,
                        None if !cli.json => print!("{}", error_page),
                        None => {}
                    }
                    return Err(e.into());
                }
            };
            if *strict || cfg.strict {
                ensure_valid(&items)?;
            }
            let schema = build_survey(&items, &cfg.meta());
            let html = render_host_page(&schema, cfg)?;
            match out {
                Some(path) => {
                    std::fs::write(path, html)?;
                    print_one(cli.json, write_report(path, &schema), report_row)?;
                }
                None if cli.json => print_one(true, html, |_| String::new())?,
                None => print!("{}", html),
            }
        }
        Commands::Slug { name } => {
            print_one(cli.json, slugify(name), |s| s.clone())?;
        }
        Commands::Validate => {
            let items = load_items(&cfg.items)?;
            let issues = validate_items(&items);
            if !issues.is_empty() {
                if !cli.json {
                    for i in &issues {
                        println!("#{}\t{:?}\t{}", i.index, i.kind, i.detail);
                    }
                }
                return Err(ValidationError(issues).into());
            }
            print_one(cli.json, items.len(), |n| {
                format!("item bank valid ({} items)", n)
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}
