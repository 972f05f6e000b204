//! Text rendering for sim-runner.
//!
//! Pure layout: every function takes core data and returns a String.
//! Grids size themselves to the terminal width, capped at sqrt(N)
//! columns so large runs stay roughly square.

use prisoners_core::{
    cycles::Cycle,
    permutation::Permutation,
    walk::PrisonerOutcome,
};

pub const DEFAULT_WIDTH: usize = 80;

/// Detected terminal width. Honors COLUMNS when set and parseable,
/// falls back to a sane default otherwise (no attached terminal is
/// never an error).
pub fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|v| v.parse().ok())
        .filter(|&w| w > 0)
        .unwrap_or(DEFAULT_WIDTH)
}

fn digits(n: usize) -> usize {
    n.to_string().len()
}

/// Columns that fit: min(isqrt(n), width / cell), at least 1.
/// Cell width is 2*digits + 3, enough for "label[value] ".
fn grid_cols(n: usize, width: usize) -> usize {
    let cell = 2 * digits(n) + 3;
    n.isqrt().min(width / cell).max(1)
}

/// The boxes grid: each cell is `box[content]`, with an RxC header.
pub fn render_boxes(perm: &Permutation, width: usize) -> String {
    let n = perm.len();
    let d = digits(n);
    let cols = grid_cols(n, width);
    let rows = n.div_ceil(cols);

    let mut out = String::new();
    out.push_str("Boxes:\n");
    out.push_str(&format!("mxn= {rows}x{cols}\n"));
    for r in 0..rows {
        let mut line = String::new();
        for c in 0..cols {
            let box_num = r * cols + c + 1;
            if box_num > n {
                break;
            }
            line.push_str(&format!(
                "{box_num:>d$}[{:>d$}] ",
                perm.get(box_num as u32),
            ));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

/// The cycle listing: one `[len] a->b->c` entry per cycle, wrapped to
/// the terminal width with a hanging indent, never splitting a number.
pub fn render_cycles(cycles: &[Cycle], n: usize, width: usize) -> String {
    let d = digits(n);
    let indent = d + 3; // matches the "[len] " prefix width
    let cols = grid_cols(n, width);
    let line_width = (cols * (2 * d + 3)).max(indent + 2 * d + 2);

    let mut out = String::new();
    out.push_str("Cycles:\n");
    for cycle in cycles {
        let prefix = format!("[{:>d$}] ", cycle.len());
        out.push_str(&wrap_chain(cycle.numbers(), &prefix, indent, line_width));
    }
    out
}

/// One prisoner's walk, for --details mode.
pub fn render_walk(outcome: &PrisonerOutcome, max_tries: usize, n: usize, width: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Prisoner {} entered the room, max tries is {max_tries}\n",
        outcome.prisoner,
    ));
    out.push_str(if outcome.succeeded { "W\n" } else { "L\n" });

    let d = digits(n);
    let indent = d + 3;
    let cols = grid_cols(n, width);
    let line_width = (cols * (2 * d + 3)).max(indent + 2 * d + 2);
    let prefix = format!("[{:>d$}] ", outcome.path.len());
    out.push_str(&wrap_chain(&outcome.path, &prefix, indent, line_width));
    out
}

/// The per-prisoner win/loss grid.
pub fn render_winloss(outcomes: &[PrisonerOutcome], width: usize) -> String {
    let n = outcomes.len();
    let d = digits(n);
    let cols = grid_cols(n, width);
    let rows = n.div_ceil(cols);

    let mut out = String::new();
    for r in 0..rows {
        let mut line = String::new();
        for c in 0..cols {
            let prisoner = r * cols + c + 1;
            if prisoner > n {
                break;
            }
            let mark = if outcomes[prisoner - 1].succeeded {
                '\u{2705}'
            } else {
                '\u{274C}'
            };
            line.push_str(&format!("{prisoner:>d$}{mark}"));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Join numbers with "->" and wrap greedily at token boundaries.
/// `prefix` heads the first line; continuation lines get `indent`
/// spaces.
fn wrap_chain(numbers: &[u32], prefix: &str, indent: usize, line_width: usize) -> String {
    let mut out = String::new();
    let mut line = prefix.to_string();

    for (i, num) in numbers.iter().enumerate() {
        let token = if i == 0 {
            num.to_string()
        } else {
            format!("->{num}")
        };
        if line.len() + token.len() > line_width && line.len() > indent {
            out.push_str(&line);
            out.push('\n');
            line = " ".repeat(indent);
        }
        line.push_str(&token);
    }
    out.push_str(&line);
    out.push('\n');
    out
}
