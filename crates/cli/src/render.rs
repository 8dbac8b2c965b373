//! Terminal rendering for catalog views, detail records, and profiles.

use console::{style, Style};
use dex_catalog::{LoadStatus, PagedView, TypeView};
use dex_protocol::{Pokemon, Trainer, TypeTag};

const STAT_BAR_WIDTH: usize = 20;
const MAX_BASE_STAT: u16 = 255;

fn rgb_to_ansi256(r: u8, g: u8, b: u8) -> u8 {
    let scale = |c: u8| -> u8 { ((u16::from(c) * 5 + 127) / 255) as u8 };
    16 + 36 * scale(r) + 6 * scale(g) + scale(b)
}

fn tag_style(name: &str) -> Style {
    match name.parse::<TypeTag>() {
        Ok(tag) => {
            let (r, g, b) = tag.color_rgb();
            Style::new().on_color256(rgb_to_ansi256(r, g, b)).white()
        }
        Err(_) => Style::new().dim(),
    }
}

fn name_style(primary_type: &str) -> Style {
    match primary_type.parse::<TypeTag>() {
        Ok(tag) => {
            let (r, g, b) = tag.color_rgb();
            Style::new().color256(rgb_to_ansi256(r, g, b)).bold()
        }
        Err(_) => Style::new().bold(),
    }
}

fn type_badges(types: &[String]) -> String {
    types
        .iter()
        .map(|name| {
            tag_style(name)
                .apply_to(format!(" {} ", name.to_uppercase()))
                .to_string()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn card_line(pokemon: &Pokemon) -> String {
    format!(
        "#{:03} {} {}",
        pokemon.id,
        name_style(pokemon.primary_type()).apply_to(format!("{:<14}", pokemon.display_name())),
        type_badges(&pokemon.types)
    )
}

/// `Page N of M` plus movement hints; hidden entirely for a single page.
fn controls_line(current_page: usize, total_pages: usize) -> Option<String> {
    if total_pages <= 1 {
        return None;
    }
    let mut line = format!("Page {current_page} of {total_pages}");
    if current_page > 1 {
        line.push_str(&format!("  (prev: dex list --page {})", current_page - 1));
    }
    if current_page < total_pages {
        line.push_str(&format!("  (next: dex list --page {})", current_page + 1));
    }
    Some(line)
}

fn status_note(status: &LoadStatus) -> Option<String> {
    match status {
        LoadStatus::Idle | LoadStatus::Loading => Some("Loading Pokémon...".to_string()),
        LoadStatus::Failed(message) => Some(message.clone()),
        LoadStatus::Ready => None,
    }
}

pub fn paged_view(view: &PagedView) {
    if let Some(note) = status_note(&view.status) {
        println!("{note}");
        return;
    }

    println!("{}", style("All Pokémon").bold());
    for pokemon in &view.items {
        println!("{}", card_line(pokemon));
    }
    if view.show_controls {
        if let Some(line) = controls_line(view.current_page, view.total_pages) {
            println!();
            println!("{line}");
        }
    }
}

pub fn type_view(view: &TypeView) {
    if let Some(note) = status_note(&view.status) {
        println!("{note}");
        return;
    }

    if view.items.is_empty() {
        println!("No {} type Pokémon found", view.tag.label());
        return;
    }

    println!(
        "{} ({} found)",
        style(format!("{} Pokémon", view.tag.label())).bold(),
        view.items.len()
    );
    for pokemon in &view.items {
        println!("{}", card_line(pokemon));
    }
}

pub fn tab_counts(counts: &[(TypeTag, usize)]) {
    println!("{}", style("Type tabs").bold());
    for (tag, count) in counts {
        println!(
            "{}  {count}",
            tag_style(tag.as_str()).apply_to(format!(" {:<8} ", tag.label()))
        );
    }
}

fn stat_bar(value: u8) -> String {
    let filled =
        (usize::from(value) * STAT_BAR_WIDTH + usize::from(MAX_BASE_STAT) / 2) / usize::from(MAX_BASE_STAT);
    let mut bar = "█".repeat(filled);
    bar.push_str(&"░".repeat(STAT_BAR_WIDTH - filled));
    bar
}

pub fn detail(pokemon: &Pokemon) {
    println!(
        "{} #{:03}",
        style(pokemon.display_name()).bold(),
        pokemon.id
    );
    println!("Types: {}", type_badges(&pokemon.types));
    print!(
        "Height: {:.1} m   Weight: {:.1} kg",
        f64::from(pokemon.height) / 10.0,
        f64::from(pokemon.weight) / 10.0
    );
    match pokemon.base_experience {
        Some(xp) => println!("   Base XP: {xp}"),
        None => println!(),
    }

    if !pokemon.abilities.is_empty() {
        println!("Abilities:");
        for ability in &pokemon.abilities {
            if ability.is_hidden {
                println!("  - {} {}", ability.name, style("(hidden)").dim());
            } else {
                println!("  - {}", ability.name);
            }
        }
    }

    if !pokemon.stats.is_empty() {
        println!("Base Stats:");
        for stat in &pokemon.stats {
            println!(
                "  {:<16} {:>3}  {}",
                stat.name,
                stat.base_value,
                stat_bar(stat.base_value)
            );
        }
    }

    let images = [
        ("Artwork", pokemon.sprites.official.as_deref()),
        ("Front", pokemon.sprites.front.as_deref()),
        ("Back", pokemon.sprites.back.as_deref()),
    ];
    if images.iter().any(|(_, url)| url.is_some()) {
        println!("Images:");
        for (label, url) in images {
            if let Some(url) = url {
                println!("  {label}: {url}");
            }
        }
    }
}

pub fn failure(message: &str) {
    eprintln!("{}", style("Oops!").red().bold());
    eprintln!("{message}");
}

pub fn welcome(trainer: &Trainer) {
    println!("Welcome back, {}!", style(&trainer.name).bold());
    println!("  Level:      {}", trainer.level);
    println!("  Region:     {}", trainer.region);
    println!("  Badges:     {}", trainer.badges);
    println!("  Caught:     {}", trainer.pokemon_caught);
    println!("  Pokédex:    {}% complete", trainer.pokedex_completion);
    println!("  Joined:     {}", trainer.join_date);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ansi_cube_maps_extremes() {
        assert_eq!(rgb_to_ansi256(0, 0, 0), 16);
        assert_eq!(rgb_to_ansi256(255, 255, 255), 231);
        assert_eq!(rgb_to_ansi256(255, 0, 0), 196);
    }

    #[test]
    fn controls_hidden_for_single_page() {
        assert_eq!(controls_line(1, 1), None);
        assert_eq!(controls_line(1, 0), None);
    }

    #[test]
    fn controls_omit_the_unavailable_direction() {
        let first = controls_line(1, 3).unwrap();
        assert!(first.contains("next: dex list --page 2"));
        assert!(!first.contains("prev:"));

        let last = controls_line(3, 3).unwrap();
        assert!(last.contains("prev: dex list --page 2"));
        assert!(!last.contains("next:"));

        let middle = controls_line(2, 3).unwrap();
        assert!(middle.contains("prev: dex list --page 1"));
        assert!(middle.contains("next: dex list --page 3"));
    }

    #[test]
    fn stat_bar_scales_into_twenty_cells() {
        assert_eq!(stat_bar(0).chars().filter(|c| *c == '█').count(), 0);
        assert_eq!(stat_bar(255).chars().filter(|c| *c == '█').count(), 20);
        let half = stat_bar(128).chars().filter(|c| *c == '█').count();
        assert!((9..=11).contains(&half));
    }
}
