use apiform::editor::{EditOp, FieldPath, LOCALES};
use apiform::form::FormSession;
use apiform::schema::{ArrayItems, Catalog, FieldKind, FieldSchema, Section};
use apiform::store::{DraftStore, MemoryStore};
use clap::Parser;
use rand::seq::IndexedRandom;
use rand::{Rng, rngs::ThreadRng};
use std::fs;

const CATEGORY_KEYS: [&str; 6] = ["cards", "loans", "accounts", "mortgages", "savings", "insurance"];
const WORDS: [&str; 8] = [
    "flexible", "secure", "premium", "everyday", "fixed", "digital", "family", "business",
];

/// A CLI tool to generate random drafts by driving the field editor
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated export document to
    #[arg(short, long, default_value = "generated_drafts.json")]
    output: String,

    /// Endpoint to generate drafts for
    #[arg(short, long, default_value = "createProduct")]
    endpoint: String,

    /// Number of drafts to generate
    #[arg(short, long, default_value_t = 10)]
    count: usize,

    /// Maximum depth of generated hierarchies and of items per array
    #[arg(long, default_value_t = 3)]
    depth: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.depth == 0 {
        eprintln!("Error: --depth must be at least 1");
        std::process::exit(1);
    }

    let catalog = Catalog::product_directory();
    let endpoint = catalog.get(&cli.endpoint)?;
    let mut store = MemoryStore::new();

    println!(
        "Generating {} drafts for '{}' (depth up to {})...",
        cli.count, endpoint.id, cli.depth
    );

    for n in 0..cli.count {
        let mut form = FormSession::new(endpoint);
        for section in [Section::Path, Section::Query, Section::Body] {
            fill_fields(&mut form, section, None, endpoint.fields(section), &mut rng, cli.depth)?;
        }
        form.save(&mut store, &format!("Generated {} #{}", endpoint.label, n + 1))?;
    }

    fs::write(&cli.output, store.export_all()?)?;

    println!(
        "Successfully generated and saved {} drafts to '{}'",
        store.drafts().len(),
        cli.output
    );

    Ok(())
}

fn child_path(prefix: Option<&FieldPath>, key: &str) -> FieldPath {
    match prefix {
        Some(p) => p.clone().key(key),
        None => FieldPath::field(key),
    }
}

fn fill_fields(
    form: &mut FormSession<'_>,
    section: Section,
    prefix: Option<&FieldPath>,
    fields: &[FieldSchema],
    rng: &mut ThreadRng,
    depth: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    for field in fields {
        // Optional fields are left unset some of the time.
        if !field.constraints.required && rng.random_bool(0.3) {
            continue;
        }
        let path = child_path(prefix, &field.key);
        fill_field(form, section, &path, field, rng, depth)?;
    }
    Ok(())
}

fn fill_field(
    form: &mut FormSession<'_>,
    section: Section,
    path: &FieldPath,
    field: &FieldSchema,
    rng: &mut ThreadRng,
    depth: usize,
) -> Result<(), Box<dyn std::error::Error>> {
    match &field.kind {
        FieldKind::Text => form.edit(section, path, EditOp::SetText(random_text(&field.key, rng)))?,
        FieldKind::Number => form.edit(section, path, EditOp::SetNumber(random_number(field, rng)))?,
        FieldKind::DateTime => form.edit(section, path, EditOp::SetText(random_datetime(rng)))?,
        FieldKind::KeyValue => {
            for i in 0..rng.random_range(1..=3) {
                form.edit(
                    section,
                    path,
                    EditOp::AddEntry {
                        key: format!("additionalProp{}", i + 1),
                        value: random_word(rng).to_string(),
                    },
                )?;
            }
        }
        FieldKind::Translations { .. } => {
            for locale in LOCALES.iter() {
                for property in ["name", "description"] {
                    form.edit(
                        section,
                        path,
                        EditOp::SetTranslation {
                            locale: locale.code.to_string(),
                            property: property.to_string(),
                            value: format!("{} {}", random_word(rng), locale.label),
                        },
                    )?;
                }
            }
        }
        FieldKind::Hierarchy => {
            for root in 0..rng.random_range(1..=2) {
                form.edit(section, path, EditOp::AddRoot)?;
                let mut node = vec![root];
                form.edit(section, path, rename(&node, rng))?;
                for _ in 1..rng.random_range(1..=depth) {
                    form.edit(section, path, EditOp::AddChild(node.clone()))?;
                    node.push(0);
                    form.edit(section, path, rename(&node, rng))?;
                }
            }
        }
        FieldKind::ReferencePicker { .. } => {
            let count = rng.random_range(1..=3);
            for key in CATEGORY_KEYS.choose_multiple(rng, count) {
                form.edit(section, path, EditOp::Toggle(key.to_string()))?;
            }
        }
        FieldKind::Array { items, .. } => {
            let len = rng.random_range(1..=depth.min(3));
            for index in 0..len {
                form.edit(section, path, EditOp::Append)?;
                let item_path = path.clone().index(index);
                match items {
                    ArrayItems::Scalar { item } => {
                        fill_field(form, section, &item_path, item, rng, depth)?;
                    }
                    ArrayItems::Record { fields } => {
                        fill_fields(form, section, Some(&item_path), fields, rng, depth)?;
                    }
                }
            }
        }
        FieldKind::Record { fields } => fill_fields(form, section, Some(path), fields, rng, depth)?,
    }
    Ok(())
}

fn rename(node: &[usize], rng: &mut ThreadRng) -> EditOp {
    EditOp::RenameNode {
        path: node.to_vec(),
        label: format!("{}-{}", random_word(rng), rng.random_range(1..100)),
    }
}

fn random_word(rng: &mut ThreadRng) -> &'static str {
    WORDS.choose(rng).copied().unwrap_or("generated")
}

fn random_text(key: &str, rng: &mut ThreadRng) -> String {
    format!("{}-{}-{}", random_word(rng), key, rng.random_range(1..1000))
}

fn random_number(field: &FieldSchema, rng: &mut ThreadRng) -> String {
    let min = field.constraints.min.unwrap_or(0.0);
    let max = field.constraints.max.unwrap_or(min + 100.0);
    if rng.random_bool(0.5) {
        format!("{}", rng.random_range(min as i64..=max as i64))
    } else {
        format!("{:.2}", rng.random_range(min..max))
    }
}

fn random_datetime(rng: &mut ThreadRng) -> String {
    format!(
        "2025-{:02}-{:02}T{:02}:{:02}:00Z",
        rng.random_range(1..=12),
        rng.random_range(1..=28),
        rng.random_range(0..24),
        rng.random_range(0..60)
    )
}
