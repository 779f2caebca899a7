//! # Snapshot Terminal Preview
//!
//! Renders a [`Snapshot`] as a boxed text card so a run can be checked from
//! a terminal (`--stdout`) without a display client. The layout mimics the
//! client's tile: a large symbol block on the left, properties on the right.

use crate::snapshot::{Cycle, Snapshot};

/// Inner width of the card, excluding the border characters.
const CARD_WIDTH: usize = 46;

/// Width of the symbol block, including its own border.
const TILE_WIDTH: usize = 9;

fn border(left: char, fill: char, right: char) -> String {
    let mut line = String::with_capacity(CARD_WIDTH + 2);
    line.push(left);
    line.extend(std::iter::repeat(fill).take(CARD_WIDTH));
    line.push(right);
    line
}

/// Pad or cut `text` to exactly `width` characters.
fn fit(text: &str, width: usize) -> String {
    let mut out: String = text.chars().take(width).collect();
    let len = out.chars().count();
    out.extend(std::iter::repeat(' ').take(width - len));
    out
}

fn row(text: &str) -> String {
    format!("│{}│", fit(text, CARD_WIDTH))
}

/// Render the card as a multi-line string.
pub fn render_ascii(snapshot: &Snapshot, cycle: Cycle) -> String {
    let e = &snapshot.element;
    let side_width = CARD_WIDTH - TILE_WIDTH - 2;

    let tile = [
        "┌───────┐".to_string(),
        format!("│{:<7}│", fit(&e.atomic_number, 7)),
        format!("│  {:<5}│", fit(&e.symbol, 5)),
        "│       │".to_string(),
        "└───────┘".to_string(),
    ];
    let side = [
        e.name.clone(),
        e.category.clone(),
        format!("Mass {}", e.atomic_mass),
        format!("State {}", e.standard_state),
        format!("Config {}", e.electron_configuration),
    ];

    let mut lines = vec![border('┌', '─', '┐'), row(&format!(" {}", cycle.label()))];
    lines.push(border('├', '─', '┤'));
    for (left, right) in tile.iter().zip(side.iter()) {
        lines.push(row(&format!(" {left} {}", fit(right, side_width))));
    }
    lines.push(border('├', '─', '┤'));
    for (label, value) in [
        ("Electronegativity", &e.electronegativity),
        ("Melting point", &e.melting_point),
        ("Boiling point", &e.boiling_point),
        ("Density", &e.density),
        ("Oxidation states", &e.oxidation_states),
        ("Discovered", &e.year_discovered),
    ] {
        lines.push(row(&format!(" {label:<18}{value}")));
    }
    lines.push(border('├', '─', '┤'));
    lines.push(row(&format!(" Updated {}", e.updated_at)));
    lines.push(border('└', '─', '┘'));

    lines.join("\n")
}

/// Print the card to stdout (development mode).
pub fn draw_ascii(snapshot: &Snapshot, cycle: Cycle) {
    println!("{}", render_ascii(snapshot, cycle));
}
