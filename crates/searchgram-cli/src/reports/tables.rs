use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use searchgram_core::ngram::NGramEntry;
use searchgram_core::summary::AccountSummary;

/// Groups the integer part in thousands: 1234567.8 -> "1,234,567.80".
pub fn thousands(val: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, val.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3 + 1);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if val < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(f) => format!("{}{}.{}", sign, grouped, f),
        None => format!("{}{}", sign, grouped),
    }
}

pub fn euros(val: f64, decimals: usize) -> String {
    format!("€{}", thousands(val, decimals))
}

fn right_align(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn summary(s: &AccountSummary) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Total Spend").add_attribute(Attribute::Bold),
        Cell::new("Conversions").add_attribute(Attribute::Bold),
        Cell::new("Account ROAS").add_attribute(Attribute::Bold),
        Cell::new("Analyzed Terms").add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![
        Cell::new(euros(s.total_spend, 0)).fg(Color::Cyan),
        Cell::new(thousands(s.total_conversions, 0)),
        Cell::new(format!("{:.2}x", s.account_roas)).fg(Color::Green),
        Cell::new(thousands(s.analyzed_terms as f64, 0)),
    ]);
    right_align(&mut table, 0..=3);

    println!("\n📊 === ACCOUNT SUMMARY === 📊");
    println!("{}", table);
}

/// Negative keyword candidates: word, wasted spend, clicks, cpc.
pub fn waste(rows: &[NGramEntry], total_candidates: usize) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Word").add_attribute(Attribute::Bold),
        Cell::new("Wasted Spend").fg(Color::Red),
        Cell::new("Clicks"),
        Cell::new("CPC"),
    ]);
    right_align(&mut table, 1..=3);

    for e in rows {
        table.add_row(vec![
            Cell::new(&e.ngram).add_attribute(Attribute::Bold),
            Cell::new(euros(e.cost, 2)).fg(Color::Red),
            Cell::new(format!("{:.0}", e.clicks)),
            Cell::new(euros(e.cpc, 2)),
        ]);
    }

    println!(
        "\n📋 Negative Keyword Candidates (showing {} of {})",
        rows.len(),
        total_candidates
    );
    println!("{}", table);
}

pub fn ngram_table(n: usize, rows: &[NGramEntry], matching: usize, min_clicks: f64) {
    let label = match n {
        1 => "1-Word (Single)".to_string(),
        2 => "2-Words (Pairs)".to_string(),
        3 => "3-Words (Phrases)".to_string(),
        _ => format!("{}-Words", n),
    };

    println!(
        "\n{} | min clicks {:.0} | showing {} of {}",
        label,
        min_clicks,
        rows.len(),
        matching
    );

    if rows.is_empty() {
        println!("No n-grams with at least {:.0} clicks.", min_clicks);
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("N-gram").add_attribute(Attribute::Bold),
        Cell::new("Cost").fg(Color::Cyan),
        Cell::new("Conv"),
        Cell::new("ROAS").fg(Color::Green),
        Cell::new("CPA"),
        Cell::new("Clicks"),
        Cell::new("CTR"),
        Cell::new("Terms"),
    ]);
    right_align(&mut table, 1..=7);

    for e in rows {
        let roas_cell = if e.roas >= 1.0 {
            Cell::new(format!("{:.2}x", e.roas)).fg(Color::Green)
        } else if e.is_waste() {
            Cell::new(format!("{:.2}x", e.roas)).fg(Color::Red)
        } else {
            Cell::new(format!("{:.2}x", e.roas))
        };

        table.add_row(vec![
            Cell::new(&e.ngram).add_attribute(Attribute::Bold),
            Cell::new(euros(e.cost, 2)).fg(Color::Cyan),
            Cell::new(format!("{:.0}", e.conversions)),
            roas_cell,
            Cell::new(euros(e.cpa, 2)),
            Cell::new(format!("{:.0}", e.clicks)),
            Cell::new(format!("{:.2}%", e.ctr)),
            Cell::new(e.count),
        ]);
    }
    println!("{}", table);
}
