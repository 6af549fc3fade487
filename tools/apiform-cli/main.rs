use apiform::config::{Settings, default_config_path};
use apiform::editor::{EditOp, FieldEditor, FieldPath};
use apiform::form::{ExampleSet, FormSession, FormValues};
use apiform::request::RequestDescriptor;
use apiform::schema::{Catalog, EndpointDefinition, FieldKind, FieldOutline, Section};
use apiform::store::{DraftStore, JsonFileStore, export_file_name};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about = "Build product directory API requests from schema-driven forms", long_about = None)]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Draft store file, overriding the settings
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    /// Base URL, overriding the settings and environment
    #[arg(long, global = true)]
    base_url: Option<String>,

    #[arg(short, long, global = true, help = "Log debug output to stderr")]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the endpoints of the catalog
    Endpoints,
    /// Show the field tree of an endpoint with its constraint hints
    Describe { endpoint: String },
    /// Compile the built-in example for an endpoint
    Example {
        endpoint: String,
        #[arg(long, value_enum, default_value_t = View::Curl)]
        view: View,
    },
    /// Compile a request from a draft, a values file or scratch
    Build {
        endpoint: String,
        #[arg(long, conflicts_with = "values")]
        draft: Option<String>,
        /// JSON file with pathValues, queryValues and bodyValues
        #[arg(long)]
        values: Option<PathBuf>,
        /// Field edit, e.g. `name=Accounts`, `path:categoryKey=cards` or `faqs[0].faqKey=main`
        #[arg(long = "set", value_name = "PATH=VALUE")]
        sets: Vec<String>,
        #[arg(long, value_enum, default_value_t = View::Curl)]
        view: View,
    },
    /// Save form values as a draft, or update an existing one
    Save {
        endpoint: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        values: Option<PathBuf>,
        /// Update this draft instead of creating a new one
        #[arg(long)]
        draft: Option<String>,
        #[arg(long = "set", value_name = "PATH=VALUE")]
        sets: Vec<String>,
    },
    /// Manage saved drafts
    Drafts {
        #[command(subcommand)]
        action: DraftsAction,
    },
    /// List saved categories available to category pickers
    Categories,
}

#[derive(Subcommand, Debug)]
enum DraftsAction {
    List { endpoint: Option<String> },
    Delete { id: String },
    Export { file: Option<PathBuf> },
    Import { file: PathBuf },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum View {
    Json,
    Curl,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut settings = Settings::resolve(cli.config.as_deref())
        .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    if let Some(url) = &cli.base_url {
        settings.base_url = url.clone();
    }
    if let Some(store) = &cli.store {
        settings.store_path = store.clone();
    }
    tracing::debug!(config = ?cli.config.clone().or_else(default_config_path), ?settings, "resolved settings");

    let catalog = load_catalog(&settings);

    match cli.command {
        Command::Endpoints => list_endpoints(&catalog),
        Command::Describe { endpoint } => describe(find_endpoint(&catalog, &endpoint)),
        Command::Example { endpoint, view } => {
            let endpoint = find_endpoint(&catalog, &endpoint);
            let mut form = FormSession::with_base_url(endpoint, &settings.base_url);
            if !form.load_example(&ExampleSet::product_directory()) {
                exit_with_error(&format!("No example is registered for '{}'", endpoint.id));
            }
            print_request(&form.build_output(), view);
        }
        Command::Build {
            endpoint,
            draft,
            values,
            sets,
            view,
        } => {
            let endpoint = find_endpoint(&catalog, &endpoint);
            let store = open_store(&settings);
            let mut form = FormSession::with_base_url(endpoint, &settings.base_url);
            prepare_form(&mut form, &store, draft.as_deref(), values.as_ref(), &sets);
            print_request(&form.build_output(), view);
        }
        Command::Save {
            endpoint,
            name,
            values,
            draft,
            sets,
        } => {
            let endpoint = find_endpoint(&catalog, &endpoint);
            let mut store = open_store(&settings);
            let mut form = FormSession::with_base_url(endpoint, &settings.base_url);
            prepare_form(&mut form, &store, draft.as_deref(), values.as_ref(), &sets);
            let saved = form
                .save(&mut store, &name)
                .unwrap_or_else(|e| exit_with_error(&format!("Failed to save draft: {}", e)));
            println!("Saved '{}' ({})", saved.name, saved.id);
        }
        Command::Drafts { action } => run_drafts(action, &settings),
        Command::Categories => {
            let store = open_store(&settings);
            let categories = store.saved_categories();
            if categories.is_empty() {
                println!("No saved categories. Save an upsertCategory draft first.");
            }
            for option in categories {
                println!("{:<24} {}", option.reference_key, option.display_name);
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "apiform=debug" } else { "apiform=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_catalog(settings: &Settings) -> Catalog {
    let Some(path) = &settings.catalog_path else {
        return Catalog::product_directory();
    };
    let json = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read catalog file '{}': {}",
            path.display(),
            e
        ))
    });
    Catalog::from_json(&json).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn find_endpoint<'c>(catalog: &'c Catalog, id: &str) -> &'c EndpointDefinition {
    catalog
        .get(id)
        .unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn open_store(settings: &Settings) -> JsonFileStore {
    JsonFileStore::open(&settings.store_path).unwrap_or_else(|e| exit_with_error(&e.to_string()))
}

fn list_endpoints(catalog: &Catalog) {
    for endpoint in catalog.iter() {
        println!(
            "{:<7} {:<16} {}",
            endpoint.method.as_str(),
            endpoint.id,
            endpoint.path
        );
    }
}

fn describe(endpoint: &EndpointDefinition) {
    println!("{} {} ({})", endpoint.method, endpoint.path, endpoint.label);
    if !endpoint.summary.is_empty() {
        println!("{}", endpoint.summary);
    }
    for (title, section) in [
        ("Path parameters", Section::Path),
        ("Query parameters", Section::Query),
        ("Body", Section::Body),
    ] {
        let fields = endpoint.fields(section);
        if fields.is_empty() {
            continue;
        }
        println!("\n{}:", title);
        print!("{}", FieldOutline::new(fields));
    }
}

/// Loads the starting values, then applies each `--set` edit in order.
fn prepare_form(
    form: &mut FormSession<'_>,
    store: &JsonFileStore,
    draft: Option<&str>,
    values: Option<&PathBuf>,
    sets: &[String],
) {
    if let Some(id) = draft {
        let draft = store
            .get(id)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
        form.load(&draft);
    }

    if let Some(path) = values {
        let text = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!(
                "Failed to read values file '{}': {}",
                path.display(),
                e
            ))
        });
        let loaded: FormValues = serde_json::from_str(&text)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse values JSON: {}", e)));
        form.set_section(Section::Path, loaded.path_values);
        form.set_section(Section::Query, loaded.query_values);
        form.set_section(Section::Body, loaded.body_values);
    }

    for assignment in sets {
        let (section, path, op) = parse_assignment(form.endpoint(), assignment);
        form.edit(section, &path, op)
            .unwrap_or_else(|e| exit_with_error(&e.to_string()));
    }
}

/// Turns `[path:|query:]FIELD_PATH=VALUE` into an edit suited to the target field's kind.
fn parse_assignment(endpoint: &EndpointDefinition, assignment: &str) -> (Section, FieldPath, EditOp) {
    let Some((target, raw)) = assignment.split_once('=') else {
        exit_with_error(&format!("Expected PATH=VALUE, got '{}'", assignment));
    };
    let (section, target) = if let Some(rest) = target.strip_prefix("path:") {
        (Section::Path, rest)
    } else if let Some(rest) = target.strip_prefix("query:") {
        (Section::Query, rest)
    } else {
        (Section::Body, target)
    };

    let path: FieldPath = target
        .parse()
        .unwrap_or_else(|e: apiform::error::EditError| exit_with_error(&e.to_string()));

    let op = match FieldEditor::field_at(endpoint.fields(section), &path).map(|f| &f.kind) {
        Some(FieldKind::Text | FieldKind::DateTime) => EditOp::SetText(raw.to_string()),
        Some(FieldKind::Number) => EditOp::SetNumber(raw.to_string()),
        Some(FieldKind::ReferencePicker { .. }) => EditOp::Toggle(raw.to_string()),
        _ => {
            match serde_json::from_str::<Value>(raw) {
                Ok(Value::Null) => EditOp::Replace(None),
                Ok(value) => EditOp::Replace(Some(value)),
                Err(_) => EditOp::Replace(Some(Value::String(raw.to_string()))),
            }
        }
    };
    (section, path, op)
}

fn print_request(request: &RequestDescriptor, view: View) {
    match view {
        View::Json => println!("{}", request.json_view()),
        View::Curl => println!("{}", request.command_line()),
    }
}

fn run_drafts(action: DraftsAction, settings: &Settings) {
    let mut store = open_store(settings);
    match action {
        DraftsAction::List { endpoint } => {
            let drafts = match &endpoint {
                Some(id) => store.list(id),
                None => store.drafts().iter().cloned().collect(),
            };
            if drafts.is_empty() {
                println!("No saved drafts.");
            }
            for draft in drafts {
                println!(
                    "{}  {:<16} {:<24} {}",
                    draft.id, draft.endpoint_id, draft.timestamp, draft.name
                );
            }
        }
        DraftsAction::Delete { id } => {
            let removed = store
                .delete(&id)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("Deleted '{}' ({})", removed.name, removed.id);
        }
        DraftsAction::Export { file } => {
            let json = store
                .export_all()
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            let file = file.unwrap_or_else(|| {
                PathBuf::from(export_file_name(chrono::Utc::now().date_naive()))
            });
            fs::write(&file, json).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to write '{}': {}", file.display(), e))
            });
            println!(
                "Exported {} drafts to {}",
                store.drafts().len(),
                file.display()
            );
        }
        DraftsAction::Import { file } => {
            let text = fs::read_to_string(&file).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read '{}': {}", file.display(), e))
            });
            let merged = store
                .import_all(&text)
                .unwrap_or_else(|e| exit_with_error(&e.to_string()));
            println!("Imported {} drafts", merged);
        }
    }
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
