use super::styles::{BOARD, FRAGMENT, HEADING, HIDDEN, MUTED, SHIELD, SUCCESS};
use boardcat::api::{FacetOptions, FilterOutcome};
use boardcat::error::Result;
use boardcat::facets::predicate::FilterSummary;
use boardcat::facets::FacetState;
use boardcat::model::Card;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

const NAME_WIDTH_CAP: usize = 40;

pub(super) fn print_filter_result(cards: &[Card], outcome: &FilterOutcome, show_hidden: bool) {
    let rows: Vec<(&Card, bool)> = cards
        .iter()
        .zip(outcome.visible.iter().copied())
        .filter(|(_, shown)| *shown || show_hidden)
        .collect();

    if rows.is_empty() {
        println!("{}", MUTED.apply_to("No cards match."));
    }

    let name_width = rows
        .iter()
        .map(|(card, _)| card.name.width())
        .max()
        .unwrap_or(0)
        .min(NAME_WIDTH_CAP);

    for (card, shown) in rows {
        let line = card_line(card, name_width);
        if shown {
            let kind = if card.is_shield {
                SHIELD.apply_to("shield")
            } else {
                BOARD.apply_to("board ")
            };
            println!("  {} {}", kind, line);
        } else {
            let kind = if card.is_shield { "shield" } else { "board " };
            println!("{}", HIDDEN.apply_to(format!("x {} {}", kind, line)));
        }
    }

    println!();
    println!("{}", HEADING.apply_to(outcome.summary));
    print_fragment(&outcome.fragment);
}

fn card_line(card: &Card, name_width: usize) -> String {
    let name = truncate_to_width(&card.name, name_width);
    let padding = " ".repeat(name_width.saturating_sub(name.width()));
    let socs = card.socs.iter().cloned().collect::<Vec<_>>().join(" ");

    let mut line = format!("{}{}  {}", name, padding, card.vendor);
    if !socs.is_empty() {
        line.push_str(&format!("  [{}]", socs));
    }
    line.trim_end().to_string()
}

fn print_fragment(fragment: &str) {
    if fragment.is_empty() {
        println!("{}", MUTED.apply_to("(no filters)"));
    } else {
        println!("{}", FRAGMENT.apply_to(format!("#{}", fragment)));
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        current_width += char_width;
    }
    result.push('…');
    result
}

#[derive(Serialize)]
struct FilterJson<'a> {
    state: &'a FacetState,
    summary: FilterSummary,
    message: String,
    fragment: &'a str,
    visible: Vec<&'a Card>,
    hidden: Vec<&'a str>,
}

pub(super) fn print_filter_json(
    cards: &[Card],
    state: &FacetState,
    outcome: &FilterOutcome,
) -> Result<()> {
    let out = FilterJson {
        state,
        summary: outcome.summary,
        message: outcome.summary.to_string(),
        fragment: &outcome.fragment,
        visible: outcome.visible_cards(cards).collect(),
        hidden: outcome
            .hidden_cards(cards)
            .map(|c| c.name.as_str())
            .collect(),
    };
    println!("{}", serde_json::to_string_pretty(&out)?);
    Ok(())
}

pub(super) fn print_options(options: &FacetOptions, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(options)?);
        return Ok(());
    }

    let sections: [(&str, &[String]); 6] = [
        ("Architectures", &options.architectures),
        ("Vendors", &options.vendors),
        ("Families", &options.families),
        ("Series", &options.series),
        ("SoCs", &options.socs),
        ("Hardware tags", &options.tags),
    ];

    for (i, (heading, values)) in sections.iter().enumerate() {
        if i > 0 {
            println!();
        }
        println!("{}", HEADING.apply_to(format!("{}:", heading)));
        if values.is_empty() {
            println!("  {}", MUTED.apply_to("(none)"));
        } else {
            println!("  {}", values.join(", "));
        }
    }
    Ok(())
}

pub(super) fn print_tags(tags: &[String]) {
    if tags.is_empty() {
        println!("{}", MUTED.apply_to("No matching tags."));
        return;
    }
    for tag in tags {
        println!("{}", tag);
    }
}

pub(super) fn print_config(entries: &[(String, String)], message: Option<&str>) {
    for (key, value) in entries {
        println!("{} = {}", key, value);
    }
    if let Some(message) = message {
        println!("{}", SUCCESS.apply_to(message));
    }
}
