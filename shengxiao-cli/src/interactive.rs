use std::io::{self, Write};

use anyhow::{Context, Result};
use shengxiao_db::db::SettingsStore;
use shengxiao_db::models::ALL_ZODIACS;
use shengxiao_filter::engine::FilterEngine;
use shengxiao_filter::ranking::RankingBoard;
use shengxiao_filter::search::{SearchMode, SortOrder};
use shengxiao_filter::session::FilterSession;

use crate::display::{display_ranking, display_results, display_tokens};

#[derive(Debug, PartialEq)]
enum InteractiveCommand {
    Toggle,
    Search,
    Mode,
    Sort,
    Clear,
    Save,
    Load,
    Tokens,
    Ranking,
    Quit,
}

fn parse_command(input: &str) -> Option<InteractiveCommand> {
    match input.trim().to_lowercase().as_str() {
        "1" | "basculer" | "toggle" | "t" => Some(InteractiveCommand::Toggle),
        "2" | "chercher" | "search" | "s" => Some(InteractiveCommand::Search),
        "3" | "mode" => Some(InteractiveCommand::Mode),
        "4" | "trier" | "sort" => Some(InteractiveCommand::Sort),
        "5" | "effacer" | "clear" => Some(InteractiveCommand::Clear),
        "6" | "sauver" | "save" => Some(InteractiveCommand::Save),
        "7" | "charger" | "load" => Some(InteractiveCommand::Load),
        "8" | "libelles" | "libellés" | "tokens" => Some(InteractiveCommand::Tokens),
        "9" | "classement" | "ranking" | "rank" => Some(InteractiveCommand::Ranking),
        "0" | "quitter" | "quit" | "q" | "exit" => Some(InteractiveCommand::Quit),
        _ => None,
    }
}

fn parse_mode(input: &str) -> Option<SearchMode> {
    match input.trim().to_lowercase().as_str() {
        "exact" | "e" => Some(SearchMode::Exact),
        "fuzzy" | "f" => Some(SearchMode::Fuzzy),
        "regex" | "r" => Some(SearchMode::Regex),
        _ => None,
    }
}

fn parse_sort(input: &str) -> Option<SortOrder> {
    match input.trim().to_lowercase().as_str() {
        "asc" | "a" => Some(SortOrder::Asc),
        "desc" | "d" => Some(SortOrder::Desc),
        _ => None,
    }
}

fn display_menu() {
    println!();
    println!("── Mode interactif ──");
    println!("  1. basculer   Activer / retirer des libellés");
    println!("  2. chercher   Texte recherché");
    println!("  3. mode       exact / fuzzy / regex");
    println!("  4. trier      asc / desc");
    println!("  5. effacer    Retirer tous les libellés");
    println!("  6. sauver     Sauvegarder les libellés");
    println!("  7. charger    Recharger les libellés");
    println!("  8. libellés   Lister les libellés");
    println!("  9. classement Classement des signes par tours");
    println!("  0. quitter    Quitter");
    println!();
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    let read = io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    if read == 0 {
        anyhow::bail!("Fin de l'entrée");
    }
    Ok(input.trim_end_matches(['\r', '\n']).to_string())
}

fn display_state<S: SettingsStore>(session: &FilterSession<S>, engine: &FilterEngine) {
    let state = session.state();
    println!(
        "\nLibellés : [{}]  Recherche : {:?} ({:?})  Tri : {:?}",
        state.selected.join(" "),
        state.search_text,
        state.search_mode,
        state.sort_order,
    );
    display_results(&session.results(engine), engine);
}

fn run_ranking_board() -> Result<()> {
    let mut board = RankingBoard::new();
    let signs: String = ALL_ZODIACS.iter().map(|z| z.label()).collect();
    println!("Signes : {}", signs);
    println!("Saisir des signes pour les (dé)sélectionner, '+' pour valider le tour,");
    println!("'=' pour le classement, '0' pour tout effacer, ligne vide pour revenir.");

    loop {
        let input = prompt(&format!(
            "[{} tour(s), sélection : {}] > ",
            board.groups.len(),
            board.selected.join("")
        ))?;
        match input.trim() {
            "" => break,
            "+" => {
                if !board.commit() {
                    println!("Sélection vide.");
                }
            }
            "=" => display_ranking(&board.ranking(), board.groups.len()),
            "0" => board.reset(),
            other => {
                for ch in other.chars().filter(|c| !c.is_whitespace()) {
                    let sign = ch.to_string();
                    if ALL_ZODIACS.iter().any(|z| z.label() == sign) {
                        board.toggle(&sign);
                    } else {
                        println!("Signe inconnu : {}", sign);
                    }
                }
            }
        }
    }
    Ok(())
}

fn handle<S: SettingsStore>(
    command: InteractiveCommand,
    session: &mut FilterSession<S>,
    engine: &FilterEngine,
) -> Result<()> {
    match command {
        InteractiveCommand::Toggle => {
            let input = prompt("Libellés (séparés par des espaces) : ")?;
            for token in input.split_whitespace() {
                if !engine.vocabulary().contains(token) {
                    println!("Libellé inconnu (ne retiendra aucun numéro) : {}", token);
                }
                session.toggle(token);
            }
        }
        InteractiveCommand::Search => {
            let input = prompt("Recherche (vide pour effacer) : ")?;
            session.set_search_text(input);
        }
        InteractiveCommand::Mode => {
            let input = prompt("Mode (exact/fuzzy/regex) : ")?;
            match parse_mode(&input) {
                Some(mode) => session.set_search_mode(mode),
                None => println!("Mode inconnu : {}", input),
            }
        }
        InteractiveCommand::Sort => {
            let input = prompt("Tri (asc/desc) : ")?;
            match parse_sort(&input) {
                Some(order) => session.set_sort_order(order),
                None => println!("Tri inconnu : {}", input),
            }
        }
        InteractiveCommand::Clear => session.clear(),
        InteractiveCommand::Save => {
            session.save();
            return Ok(());
        }
        InteractiveCommand::Load => {
            session.load();
        }
        InteractiveCommand::Tokens => {
            display_tokens(engine.vocabulary());
            return Ok(());
        }
        InteractiveCommand::Ranking => return run_ranking_board(),
        InteractiveCommand::Quit => return Ok(()),
    }
    display_state(session, engine);
    Ok(())
}

pub fn run_interactive<S: SettingsStore>(engine: &FilterEngine, store: S) -> Result<()> {
    println!("Bienvenue dans le mode interactif de shengxiao !");
    let mut session = FilterSession::new(store).with_notifier(|m: &str| println!("» {}", m));

    loop {
        display_menu();
        let input = match prompt("> ") {
            Ok(s) => s,
            Err(_) => break, // EOF / Ctrl+D
        };

        if input.trim().is_empty() {
            continue;
        }

        match parse_command(&input) {
            Some(InteractiveCommand::Quit) => {
                println!("Au revoir !");
                break;
            }
            Some(command) => {
                if let Err(e) = handle(command, &mut session, engine) {
                    println!("Erreur: {e:#}");
                }
            }
            None => {
                println!("Commande inconnue : '{}'. Tapez un numéro (0-9) ou un nom de commande.", input.trim());
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_command_by_number() {
        assert_eq!(parse_command("1"), Some(InteractiveCommand::Toggle));
        assert_eq!(parse_command("2"), Some(InteractiveCommand::Search));
        assert_eq!(parse_command("3"), Some(InteractiveCommand::Mode));
        assert_eq!(parse_command("4"), Some(InteractiveCommand::Sort));
        assert_eq!(parse_command("5"), Some(InteractiveCommand::Clear));
        assert_eq!(parse_command("6"), Some(InteractiveCommand::Save));
        assert_eq!(parse_command("7"), Some(InteractiveCommand::Load));
        assert_eq!(parse_command("8"), Some(InteractiveCommand::Tokens));
        assert_eq!(parse_command("9"), Some(InteractiveCommand::Ranking));
        assert_eq!(parse_command("0"), Some(InteractiveCommand::Quit));
    }

    #[test]
    fn test_parse_command_by_name() {
        assert_eq!(parse_command("basculer"), Some(InteractiveCommand::Toggle));
        assert_eq!(parse_command("chercher"), Some(InteractiveCommand::Search));
        assert_eq!(parse_command("effacer"), Some(InteractiveCommand::Clear));
        assert_eq!(parse_command("libellés"), Some(InteractiveCommand::Tokens));
        assert_eq!(parse_command("classement"), Some(InteractiveCommand::Ranking));
        assert_eq!(parse_command("QUIT"), Some(InteractiveCommand::Quit));
        assert_eq!(parse_command(" Sauver "), Some(InteractiveCommand::Save));
    }

    #[test]
    fn test_parse_command_unknown() {
        assert_eq!(parse_command("foo"), None);
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("10"), None);
    }

    #[test]
    fn test_parse_mode_and_sort() {
        assert_eq!(parse_mode("Regex"), Some(SearchMode::Regex));
        assert_eq!(parse_mode("e"), Some(SearchMode::Exact));
        assert_eq!(parse_mode("glob"), None);
        assert_eq!(parse_sort("desc"), Some(SortOrder::Desc));
        assert_eq!(parse_sort(" a "), Some(SortOrder::Asc));
        assert_eq!(parse_sort("up"), None);
    }
}
