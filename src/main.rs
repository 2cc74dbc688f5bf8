use clap::{Parser, Subcommand};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;

use wcc_assess::catalog::{self, Catalog};
use wcc_assess::output;
use wcc_assess::output::SortOrder;
use wcc_assess::store::{export_filename, AssessmentStore, FileBackend};
use wcc_assess::wizard;

const EXIT_SUCCESS: i32 = 0;
const EXIT_DATA: i32 = 1;
const EXIT_USAGE: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the assessment questionnaire and record the outcome
    Assess,
    /// List recorded assessments (default if no subcommand)
    List {
        /// Only show records with this exact decision (e.g. "DECLINE",
        /// "PURSUE WITH HIGH MARGIN")
        #[arg(long)]
        decision: Option<String>,
        /// Only show records with this client category
        /// (Avoid, Nuisance, Leverage, Development)
        #[arg(long)]
        client: Option<String>,
        /// Sort order: date-desc, date-asc, score-desc, score-asc,
        /// value-desc, value-asc
        #[arg(long, default_value = "date-desc")]
        sort: String,
    },
    /// Show one assessment in full
    Show {
        /// Record id as shown in the list
        id: String,
    },
    /// Delete one assessment
    Delete {
        /// Record id as shown in the list
        id: String,
    },
    /// Delete every recorded assessment
    Clear {
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Write all assessments to a JSON file
    Export {
        /// Output path (defaults to wcc_assessments_<date>.json)
        path: Option<PathBuf>,
    },
    /// Replace all assessments with the contents of a JSON export
    Import {
        /// Path to a previously exported file
        path: PathBuf,
    },
    /// Show summary statistics across all assessments
    Stats,
}

#[derive(Parser, Debug)]
#[command(name = "wcc-assess")]
#[command(about = "Construction project go/no-go assessment CLI", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to the assessment data file
    /// (defaults to ~/.config/wcc-assess/assessments.json)
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Path to a catalog YAML file
    /// (defaults to ~/.config/wcc-assess/catalog.yaml when present)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::List {
        decision: None,
        client: None,
        sort: "date-desc".to_string(),
    });

    // Load and validate the question catalog
    let catalog = match catalog::load_catalog(cli.catalog.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };
    if let Err(errors) = catalog::validate_catalog(&catalog) {
        eprintln!("Catalog errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let data_path = cli.data_file.clone().unwrap_or_else(catalog::get_data_path);
    if cli.verbose {
        eprintln!("Using data file {}", data_path.display());
    }
    let mut store = AssessmentStore::new(FileBackend::new(data_path));

    let use_colors = output::should_use_colors();

    match command {
        Commands::Assess => run_assess(&catalog, &mut store, use_colors),
        Commands::List {
            decision,
            client,
            sort,
        } => run_list(&store, decision, client, &sort, use_colors),
        Commands::Show { id } => run_show(&catalog, &store, &id, use_colors),
        Commands::Delete { id } => run_delete(&mut store, &id),
        Commands::Clear { yes } => run_clear(&mut store, yes),
        Commands::Export { path } => run_export(&store, path, cli.verbose),
        Commands::Import { path } => run_import(&mut store, &path),
        Commands::Stats => {
            let stats = store.summary_stats();
            print!("{}", output::format_stats(&stats, use_colors));
            std::process::exit(EXIT_SUCCESS);
        }
    }
}

fn run_assess(catalog: &Catalog, store: &mut AssessmentStore<FileBackend>, use_colors: bool) {
    let stdin = std::io::stdin();
    let mut input = stdin.lock();
    let mut out = std::io::stdout();

    let draft = match wizard::run_wizard(catalog, &mut input, &mut out) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Assessment aborted: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    print_result_summary(&draft.result, use_colors);

    match store.save(draft) {
        Ok(id) => {
            println!("Saved assessment {}", id);
            println!("Run `wcc-assess show {}` to review it.", id);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Failed to save assessment: {}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}

fn print_result_summary(result: &wcc_assess::scoring::DecisionResult, use_colors: bool) {
    use owo_colors::OwoColorize;

    println!();
    if use_colors {
        println!("Decision: {}", result.decision.as_str().bold());
    } else {
        println!("Decision: {}", result.decision.as_str());
    }
    if let Some(reason) = &result.reason {
        println!("Reason: {}", reason);
    }
    println!("Margin guidance: {}", result.margin_guidance);
    println!(
        "Client: {} ({}/25)   Work: {} ({}/35)   Total: {}/60",
        result.client_category.as_str(),
        result.client_score,
        result.work_category.as_str(),
        result.work_score,
        result.total_score
    );
    println!();
}

fn run_list(
    store: &AssessmentStore<FileBackend>,
    decision: Option<String>,
    client: Option<String>,
    sort: &str,
    use_colors: bool,
) {
    let order: SortOrder = match sort.parse() {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Invalid --sort: {}", e);
            std::process::exit(EXIT_USAGE);
        }
    };

    let mut records =
        output::filter_records(store.list(), decision.as_deref(), client.as_deref());
    output::sort_records(&mut records, order);

    println!("{}", output::format_record_table(&records, use_colors));
    std::process::exit(EXIT_SUCCESS);
}

fn run_show(
    catalog: &Catalog,
    store: &AssessmentStore<FileBackend>,
    id: &str,
    use_colors: bool,
) {
    match store.get(id) {
        Some(record) => {
            print!("{}", output::format_record_detail(&record, catalog, use_colors));
            std::process::exit(EXIT_SUCCESS);
        }
        None => {
            eprintln!("No assessment with id {}", id);
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn run_delete(store: &mut AssessmentStore<FileBackend>, id: &str) {
    if store.get(id).is_none() {
        eprintln!("No assessment with id {}", id);
        std::process::exit(EXIT_USAGE);
    }
    match store.delete(id) {
        Ok(()) => {
            println!("Deleted assessment {}", id);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Failed to delete assessment: {}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}

fn run_clear(store: &mut AssessmentStore<FileBackend>, yes: bool) {
    let count = store.list().len();
    if count == 0 {
        println!("Nothing to clear.");
        std::process::exit(EXIT_SUCCESS);
    }

    if !yes {
        print!(
            "Delete all {} assessments? This cannot be undone. [y/N]: ",
            count
        );
        let _ = std::io::stdout().flush();

        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err()
            || !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
        {
            println!("Aborted.");
            std::process::exit(EXIT_SUCCESS);
        }
    }

    match store.clear() {
        Ok(()) => {
            println!("Deleted {} assessments.", count);
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            eprintln!("Failed to clear assessments: {}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}

fn run_export(store: &AssessmentStore<FileBackend>, path: Option<PathBuf>, verbose: bool) {
    let path = path.unwrap_or_else(|| PathBuf::from(export_filename(chrono::Utc::now())));

    let json = match store.export_json() {
        Ok(j) => j,
        Err(e) => {
            eprintln!("Export failed: {}", e);
            std::process::exit(EXIT_DATA);
        }
    };

    if verbose {
        eprintln!("Writing {} bytes to {}", json.len(), path.display());
    }

    if let Err(e) = fs::write(&path, json) {
        eprintln!("Failed to write {}: {}", path.display(), e);
        std::process::exit(EXIT_DATA);
    }

    println!("Exported {} assessments to {}", store.list().len(), path.display());
    std::process::exit(EXIT_SUCCESS);
}

fn run_import(store: &mut AssessmentStore<FileBackend>, path: &PathBuf) {
    let data = match fs::read_to_string(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path.display(), e);
            std::process::exit(EXIT_DATA);
        }
    };

    match store.import_json(&data) {
        Ok(count) => {
            println!("Imported {} assessments from {}", count, path.display());
            std::process::exit(EXIT_SUCCESS);
        }
        Err(e) => {
            // Existing data is untouched on a failed import.
            eprintln!("Import failed: {}", e);
            std::process::exit(EXIT_DATA);
        }
    }
}
