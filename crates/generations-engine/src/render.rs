//! Terminal rendering of boards.
//!
//! Each cell is drawn as an emoji on a 24-bit background color picked by
//! its lifecycle stage. The tables below are the only place presentation
//! lives; the core crates know nothing about emoji or color.

use std::io::{self, Write};

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};
use crossterm::terminal::{Clear, ClearType};
use generations_core::board::Board;
use generations_core::runner::TickCallback;
use generations_core::simulation::TickSummary;
use generations_types::{Cell, Stage, SurvivorTier};
use tracing::warn;

/// Background for newborns and young survivors.
pub const BABY_COLOR: u32 = 0x01_a2_e1;
/// Background for adult survivors.
pub const MAN_COLOR: u32 = 0x9b_3c_e9;
/// Background for elder survivors.
pub const OLD_COLOR: u32 = 0xfa_d2_0b;
/// Background for ancient survivors.
pub const WIZARD_COLOR: u32 = 0xfd_3a_3a;

/// Emoji for a cell's stage. Empty cells are blank.
pub const fn glyph(cell: &Cell) -> &'static str {
    match cell.stage() {
        Stage::Empty => "  ",
        Stage::Dead => "💀",
        Stage::NewBorn | Stage::Survivor(SurvivorTier::Young) => "👶",
        Stage::Survivor(SurvivorTier::Adult) => "🧑",
        Stage::Survivor(SurvivorTier::Elder) => "👴",
        Stage::Survivor(SurvivorTier::Ancient) => "🧙",
    }
}

/// Background color for a cell, if it gets one.
pub const fn background(cell: &Cell) -> Option<u32> {
    match cell.presentation_tier() {
        Some(SurvivorTier::Young) => Some(BABY_COLOR),
        Some(SurvivorTier::Adult) => Some(MAN_COLOR),
        Some(SurvivorTier::Elder) => Some(OLD_COLOR),
        Some(SurvivorTier::Ancient) => Some(WIZARD_COLOR),
        None => None,
    }
}

/// Split `0xRRGGBB` into its channels.
pub const fn rgb(hex: u32) -> (u8, u8, u8) {
    let [_, r, g, b] = hex.to_be_bytes();
    (r, g, b)
}

/// Write `board` as rows of colored emoji.
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_board(out: &mut impl Write, board: &Board) -> io::Result<()> {
    for row in board.rows() {
        for cell in row {
            match background(cell) {
                Some(hex) => {
                    let (r, g, b) = rgb(hex);
                    queue!(
                        out,
                        SetBackgroundColor(Color::Rgb { r, g, b }),
                        Print(glyph(cell)),
                        ResetColor
                    )?;
                }
                None => queue!(out, Print(glyph(cell)))?,
            }
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Tick callback that redraws the board after every generation.
pub struct TerminalRenderer<W: Write> {
    out: W,
    clear: bool,
}

impl<W: Write> TerminalRenderer<W> {
    /// Render into `out`. With `clear` set, the screen is wiped before each
    /// frame.
    pub const fn new(out: W, clear: bool) -> Self {
        Self { out, clear }
    }

    /// Draw a frame with a one-line header.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn draw(&mut self, header: &str, board: &Board) -> io::Result<()> {
        if self.clear {
            queue!(self.out, Clear(ClearType::All), MoveTo(0, 0))?;
        }
        writeln!(self.out, "{header}")?;
        write_board(&mut self.out, board)?;
        self.out.flush()
    }
}

impl<W: Write> TickCallback for TerminalRenderer<W> {
    fn on_tick(&mut self, summary: &TickSummary, board: &Board) {
        let mut header = format!(
            "generation {} | population {} | births {} | deaths {}",
            summary.generation, summary.census.population, summary.births, summary.deaths
        );
        if let Some(termination) = summary.verdict.termination() {
            header.push_str(" | ");
            header.push_str(&termination.message());
        }
        if let Err(e) = self.draw(&header, board) {
            warn!(error = %e, generation = summary.generation, "failed to draw board");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use core::num::NonZeroU32;

    use generations_core::simulation::Simulation;
    use generations_types::{AgeThresholds, EvolutionMode};

    use super::*;

    fn survivor(age: u32, tier: SurvivorTier) -> Cell {
        Cell::survivor(NonZeroU32::new(age).unwrap(), tier)
    }

    #[test]
    fn glyphs_follow_stage() {
        assert_eq!(glyph(&Cell::empty()), "  ");
        assert_eq!(glyph(&Cell::dead()), "💀");
        assert_eq!(glyph(&Cell::new_born()), "👶");
        assert_eq!(glyph(&survivor(3, SurvivorTier::Young)), "👶");
        assert_eq!(glyph(&survivor(8, SurvivorTier::Adult)), "🧑");
        assert_eq!(glyph(&survivor(12, SurvivorTier::Elder)), "👴");
        assert_eq!(glyph(&survivor(30, SurvivorTier::Ancient)), "🧙");
    }

    #[test]
    fn only_living_cells_get_a_background() {
        assert_eq!(background(&Cell::empty()), None);
        assert_eq!(background(&Cell::dead()), None);
        assert_eq!(background(&Cell::new_born()), Some(BABY_COLOR));
        assert_eq!(
            background(&survivor(16, SurvivorTier::Ancient)),
            Some(WIZARD_COLOR)
        );
    }

    #[test]
    fn rgb_splits_channels() {
        assert_eq!(rgb(BABY_COLOR), (0x01, 0xa2, 0xe1));
        assert_eq!(rgb(OLD_COLOR), (250, 210, 11));
    }

    #[test]
    fn write_board_emits_one_line_per_row() {
        let board = Board::empty(2)
            .unwrap()
            .with_cells(&[(0, 0)], Cell::new_born())
            .unwrap();
        let mut out = Vec::new();
        write_board(&mut out, &board).unwrap();
        let text = String::from_utf8(out).unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, vec!["\x1b[48;2;1;162;225m👶\x1b[0m  ", "    "]);
    }

    #[test]
    fn renderer_writes_header_with_verdict() {
        let board = Board::empty(3)
            .unwrap()
            .with_cells(&[(1, 1)], Cell::new_born())
            .unwrap();
        let mut sim = Simulation::new(board, EvolutionMode::Population, AgeThresholds::default());
        let summary = sim.tick().unwrap();

        let mut out = Vec::new();
        TerminalRenderer::new(&mut out, false).on_tick(&summary, sim.board());
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("generation 1 | population 0"));
        assert!(text.contains("everyone died out after 1 generations"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn clearing_renderer_wipes_screen_before_header() {
        let board = Board::empty(1).unwrap();
        let mut out = Vec::new();
        TerminalRenderer::new(&mut out, true)
            .draw("generation 0", &board)
            .unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(text, "\x1b[2J\x1b[1;1Hgeneration 0\n  \n");
    }
}
