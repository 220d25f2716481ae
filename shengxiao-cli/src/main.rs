mod display;
mod enrich;
mod interactive;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use shengxiao_db::dataset::{load_dataset, DEFAULT_DATASET};
use shengxiao_db::db::{db_path, SqliteStore};
use shengxiao_filter::engine::FilterEngine;
use shengxiao_filter::ranking::compute_ranking;
use shengxiao_filter::search::{SearchMode, SortOrder};
use shengxiao_filter::session::{FilterSession, LoadOutcome};
use shengxiao_filter::vocabulary::Vocabulary;

use crate::display::{
    display_enrich_summary, display_ranking, display_record, display_results, display_tokens,
};

#[derive(Parser)]
#[command(name = "shengxiao", about = "Filtre des numéros 1-49 par attributs zodiacaux")]
struct Cli {
    /// Fichier JSON des numéros
    #[arg(long, global = true, default_value = DEFAULT_DATASET)]
    data: PathBuf,

    /// Base SQLite des réglages (défaut : data/shengxiao.db)
    #[arg(long, global = true)]
    db: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Enrichir le fichier des numéros avec les attributs zodiacaux
    Enrich,

    /// Lister les libellés de filtre par catégorie
    Tokens,

    /// Filtrer les numéros
    Filter {
        /// Libellé à activer (répétable), ex: -t 单 -t 大
        #[arg(short, long = "token")]
        tokens: Vec<String>,

        /// Texte recherché dans le numéro
        #[arg(short, long, default_value = "")]
        search: String,

        /// Mode de recherche
        #[arg(short, long, default_value = "fuzzy")]
        mode: SearchMode,

        /// Ordre de tri
        #[arg(long, default_value = "asc")]
        sort: SortOrder,

        /// Partir des filtres sauvegardés
        #[arg(long)]
        saved: bool,
    },

    /// Afficher tous les attributs d'un numéro
    Show {
        id: u32,
    },

    /// Classer les signes par fréquence, un groupe par argument (ex: 鼠,牛,虎)
    Rank {
        groups: Vec<String>,
    },

    /// Sauvegarder une liste de filtres
    Save {
        #[arg(short, long = "token")]
        tokens: Vec<String>,
    },

    /// Afficher les filtres sauvegardés
    Load,

    /// Afficher le chemin de la base des réglages
    DbPath,

    /// Mode interactif
    Interactive,
}

/// Niveau `warn` par défaut, `RUST_LOG` l'emporte.
fn logger(env: env_logger::Env) -> env_logger::Builder {
    let mut builder = env_logger::Builder::from_env(env.default_filter_or("warn"));
    builder.target(env_logger::Target::Stderr);
    builder
}

fn init_logging() {
    logger(env_logger::Env::default()).init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();
    let settings_path = cli.db.clone().unwrap_or_else(db_path);

    match cli.command {
        Command::Enrich => cmd_enrich(&cli.data),
        Command::Tokens => {
            display_tokens(&Vocabulary::standard());
            Ok(())
        }
        Command::Filter {
            tokens,
            search,
            mode,
            sort,
            saved,
        } => cmd_filter(&cli.data, &settings_path, tokens, search, mode, sort, saved),
        Command::Show { id } => cmd_show(&cli.data, id),
        Command::Rank { groups } => cmd_rank(&groups),
        Command::Save { tokens } => cmd_save(&settings_path, &tokens),
        Command::Load => cmd_load(&settings_path),
        Command::DbPath => {
            println!("{}", settings_path.display());
            Ok(())
        }
        Command::Interactive => {
            let engine = load_engine(&cli.data)?;
            let store = SqliteStore::open(&settings_path)?;
            interactive::run_interactive(&engine, store)
        }
    }
}

fn load_engine(data: &Path) -> Result<FilterEngine> {
    let records = load_dataset(data)
        .with_context(|| format!("Lancez depuis la racine du projet ou passez --data (actuel : {:?})", data))?;
    Ok(FilterEngine::new(records))
}

fn console_notifier(message: &str) {
    println!("» {}", message);
}

fn cmd_enrich(data: &Path) -> Result<()> {
    let report = enrich::enrich_file(data)?;
    display_enrich_summary(&report, data);
    Ok(())
}

fn cmd_filter(
    data: &Path,
    settings_path: &Path,
    tokens: Vec<String>,
    search: String,
    mode: SearchMode,
    sort: SortOrder,
    saved: bool,
) -> Result<()> {
    let engine = load_engine(data)?;
    let mut session = FilterSession::new(SqliteStore::open(settings_path)?).with_notifier(console_notifier);

    if saved {
        session.load();
    }
    for token in &tokens {
        if !engine.vocabulary().contains(token) {
            log::warn!("Libellé inconnu : {}", token);
        }
        session.toggle(token);
    }
    session.set_search_text(search);
    session.set_search_mode(mode);
    session.set_sort_order(sort);

    display_results(&session.results(&engine), &engine);
    Ok(())
}

fn cmd_show(data: &Path, id: u32) -> Result<()> {
    let engine = load_engine(data)?;
    match engine.record(id) {
        Some(record) => display_record(record),
        None => bail!("Numéro {} introuvable", id),
    }
    Ok(())
}

fn parse_groups(raw: &[String]) -> Vec<Vec<String>> {
    raw.iter()
        .map(|g| {
            g.split([',', '，', ' '])
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
                .collect()
        })
        .collect()
}

fn cmd_rank(raw_groups: &[String]) -> Result<()> {
    let groups = parse_groups(raw_groups);
    display_ranking(&compute_ranking(&groups), groups.len());
    Ok(())
}

fn cmd_save(settings_path: &Path, tokens: &[String]) -> Result<()> {
    let mut session = FilterSession::new(SqliteStore::open(settings_path)?).with_notifier(console_notifier);
    for token in tokens {
        session.toggle(token);
    }
    session.save();
    Ok(())
}

fn cmd_load(settings_path: &Path) -> Result<()> {
    let mut session = FilterSession::new(SqliteStore::open(settings_path)?).with_notifier(console_notifier);
    if let LoadOutcome::Loaded(_) = session.load() {
        println!("Filtres : {}", session.state().selected.join(" "));
    }
    Ok(())
}
