use std::path::Path;

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use shengxiao_db::enrich::EnrichReport;
use shengxiao_db::models::{NumberRecord, Parity};
use shengxiao_filter::engine::FilterEngine;
use shengxiao_filter::ranking::RankingEntry;
use shengxiao_filter::vocabulary::Vocabulary;

const RESULTS_PER_ROW: usize = 10;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn wave_cell(label: &str, wave: &str) -> Cell {
    let color = match wave {
        "red" => Color::Red,
        "green" => Color::Green,
        "blue" => Color::Blue,
        _ => Color::White,
    };
    Cell::new(label).fg(color)
}

pub fn display_results(results: &[String], engine: &FilterEngine) {
    if results.is_empty() {
        println!("Aucun numéro. Activez un filtre ou saisissez une recherche.");
        return;
    }

    let mut table = new_table();
    for chunk in results.chunks(RESULTS_PER_ROW) {
        let row: Vec<Cell> = chunk
            .iter()
            .map(|label| {
                let wave = label
                    .parse::<u32>()
                    .map(|id| engine.wave_color_by_id(id))
                    .unwrap_or("");
                wave_cell(label, wave)
            })
            .collect();
        table.add_row(row);
    }
    println!("{table}");
    println!("共 {} 个号码", results.len());
}

pub fn display_tokens(vocabulary: &Vocabulary) {
    let mut table = new_table();
    table.set_header(vec!["Catégorie", "Libellés"]);

    for (category, tokens) in vocabulary.grouped() {
        table.add_row(vec![
            format!("{} ({})", category.title(), category.name()),
            tokens.join(" "),
        ]);
    }
    println!("{table}");
}

fn text(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| "—".to_string())
}

fn number(value: Option<u32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| "—".to_string())
}

fn parity_label(parity: Option<Parity>) -> &'static str {
    match parity {
        Some(Parity::Odd) => "单",
        Some(Parity::Even) => "双",
        None => "—",
    }
}

pub fn display_record(record: &NumberRecord) {
    let mut table = new_table();
    table.set_header(vec!["Attribut", "Valeur"]);

    let zodiac = match (record.zodiac(), &record.chinese_zodiac) {
        (Some(sign), _) => format!("{} ({})", sign.label(), sign.code()),
        (None, Some(raw)) => format!("? ({})", raw),
        (None, None) => "—".to_string(),
    };
    let wave = record.wave().map(|c| c.code()).unwrap_or("");

    let rows: Vec<(&str, String)> = vec![
        ("单双", parity_label(record.parity()).to_string()),
        ("生肖", zodiac),
        ("五行", record.element().map(|e| e.label().to_string()).unwrap_or_else(|| text(&record.five_elements))),
        ("合数", number(record.sum)),
        ("合数单双", text(&record.sum_odd_and_even)),
        ("尾数", number(record.tail)),
        ("头数", number(record.head)),
        ("门数", text(&record.men)),
        ("段数", text(&record.duan)),
        ("合", text(&record.he_shu)),
        ("家禽野兽", text(&record.poultry_beast)),
        ("吉凶", text(&record.luckiness)),
        ("阴阳", text(&record.yin_yang)),
        ("笔画", text(&record.stroke)),
        ("天地", text(&record.sky_earth)),
        ("自边画中", text(&record.zi_bian_hua_zhong)),
        ("男女", text(&record.gender)),
        ("三合", text(&record.three_harmony)),
        ("六合", text(&record.six_harmony)),
        ("琴棋书画", text(&record.four_arts)),
        ("色肖", text(&record.zodiac_color)),
        ("季节", text(&record.season)),
        ("方位", text(&record.direction)),
        ("五福", text(&record.five_fu)),
    ];

    println!();
    println!("── Numéro {:02} ──", record.id);
    table.add_row(vec![Cell::new("波色"), wave_cell(if wave.is_empty() { "—" } else { wave }, wave)]);
    for (name, value) in rows {
        table.add_row(vec![name.to_string(), value]);
    }
    println!("{table}");
}

pub fn display_ranking(entries: &[RankingEntry], group_count: usize) {
    if entries.is_empty() {
        println!("Aucune sélection à classer.");
        return;
    }

    println!("\n── Classement sur {} groupe(s) ──", group_count);
    let mut table = new_table();
    table.set_header(vec!["#", "Signe", "Occurrences", "Ratio"]);

    for (i, entry) in entries.iter().enumerate() {
        table.add_row(vec![
            format!("{}", i + 1),
            entry.name.clone(),
            entry.count.to_string(),
            format!("{:.2} %", entry.ratio * 100.0),
        ]);
    }
    println!("{table}");
}

pub fn display_enrich_summary(report: &EnrichReport, path: &Path) {
    println!("Enrichissement terminé ({}) :", path.display());
    println!("  Numéros lus     : {}", report.total_records);
    println!("  Enrichis        : {}", report.enriched);
    if report.skipped > 0 {
        println!("  Ignorés (signe) : {}", report.skipped);
    }
}
