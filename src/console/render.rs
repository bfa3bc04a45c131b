//! Text rendering of the board.

use crate::games::fox_hounds::{
    CHAR_SHIFT, Dimension, FOX_FIELD, HOUND_FIELD, Positions, make_coordinate,
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// How the board is drawn.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    clap::ValueEnum,
    strum::Display,
    strum::EnumIter,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BoardStyle {
    /// One character per cell, dots for empty cells.
    Plain,
    /// Boxed grid with a divider under every row.
    #[default]
    Fancy,
}

/// Renders the board in the given style.
#[instrument(skip(positions))]
pub fn render_board(positions: &Positions, dimension: Dimension, style: BoardStyle) -> String {
    match style {
        BoardStyle::Plain => render_plain(positions, dimension),
        BoardStyle::Fancy => render_fancy(positions, dimension),
    }
}

/// Symbol for the piece on a cell, if any.
fn piece_at(positions: &Positions, lateral: i32, vertical: i32) -> Option<char> {
    let cell = make_coordinate(lateral, vertical);
    if positions.fox() == cell {
        Some(FOX_FIELD)
    } else if positions.is_hound(cell) {
        Some(HOUND_FIELD)
    } else {
        None
    }
}

fn column_letters(dimension: Dimension) -> impl Iterator<Item = char> {
    (1..=u32::from(dimension.get())).filter_map(|lat| char::from_u32(CHAR_SHIFT + lat))
}

fn render_plain(positions: &Positions, dimension: Dimension) -> String {
    let dim = i32::from(dimension.get());
    let pad = usize::from(dimension.get()) / 10 + 1;
    let indent = " ".repeat(pad);
    let title: String = column_letters(dimension).collect();

    let mut out = format!("{} {}  \n\n", indent, title);
    for vert in 1..=dim {
        out.push_str(&format!("{:0pad$} ", vert, pad = pad));
        for lat in 1..=dim {
            out.push(piece_at(positions, lat, vert).unwrap_or('.'));
        }
        out.push_str(&format!(" {:0pad$}\n", vert, pad = pad));
    }
    out.push_str(&format!("\n{} {}\n\n", indent, title));
    out
}

fn render_fancy(positions: &Positions, dimension: Dimension) -> String {
    let dim = i32::from(dimension.get());
    let pad = usize::from(dimension.get()) / 10 + 1;
    let indent = " ".repeat(pad);
    let title: String = column_letters(dimension)
        .map(|letter| format!("   {}", letter))
        .collect();
    let divider = format!("{} {}|", indent, "|===".repeat(usize::from(dimension.get())));

    let mut out = format!("{}{}\n{}\n", indent, title, divider);
    for vert in 1..=dim {
        out.push_str(&format!("{:0pad$} ", vert, pad = pad));
        for lat in 1..=dim {
            match piece_at(positions, lat, vert) {
                Some(symbol) => out.push_str(&format!("| {} ", symbol)),
                None => out.push_str("|   "),
            }
        }
        out.push_str(&format!("| {:0pad$}\n", vert, pad = pad));
        out.push_str(&divider);
        out.push('\n');
    }
    out.push_str(&format!("{}{}\n\n", indent, title));
    out
}
