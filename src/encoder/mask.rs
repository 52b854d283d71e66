//! Mask application, penalty scoring and mask selection

use super::format::FormatInfo;
use super::version::write_version_info;
use crate::models::{ECLevel, MaskPattern, ModuleGrid, Version};

const PENALTY_N1: u32 = 3;
const PENALTY_N2: u32 = 3;
const PENALTY_N3: u32 = 40;
const PENALTY_N4: u32 = 10;

/// Per-rule penalty breakdown of a masked grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Penalty {
    /// Rule 1: runs of five or more same-color modules
    pub runs: u32,
    /// Rule 2: 2x2 blocks of one color
    pub blocks: u32,
    /// Rule 3: finder-like patterns
    pub finder_like: u32,
    /// Rule 4: dark/light imbalance
    pub balance: u32,
}

impl Penalty {
    /// Sum of the four rules
    pub fn total(&self) -> u32 {
        self.runs + self.blocks + self.finder_like + self.balance
    }
}

/// XOR every data module for which `mask` fires; structural modules stay put
pub fn apply_mask(grid: &mut ModuleGrid, mask: MaskPattern) {
    let size = grid.size();
    for y in 0..size {
        for x in 0..size {
            if mask.is_masked(y, x) {
                grid.toggle_data(x, y);
            }
        }
    }
}

/// Score a finished grid against the four penalty rules
pub fn penalty_score(grid: &ModuleGrid) -> Penalty {
    let size = grid.size();
    let dark: Vec<bool> = (0..size * size)
        .map(|i| grid.is_dark(i % size, i / size))
        .collect();
    let row = |y: usize| -> Vec<bool> { dark[y * size..(y + 1) * size].to_vec() };
    let column = |x: usize| -> Vec<bool> { (0..size).map(|y| dark[y * size + x]).collect() };

    let mut penalty = Penalty::default();
    for i in 0..size {
        for line in [row(i), column(i)] {
            penalty.runs += run_penalty(&line);
            penalty.finder_like += finder_like_penalty(&line);
        }
    }

    for y in 0..size.saturating_sub(1) {
        for x in 0..size - 1 {
            let c = dark[y * size + x];
            if c == dark[y * size + x + 1]
                && c == dark[(y + 1) * size + x]
                && c == dark[(y + 1) * size + x + 1]
            {
                penalty.blocks += PENALTY_N2;
            }
        }
    }

    let total = (size * size) as u32;
    if total > 0 {
        let dark_count = dark.iter().filter(|&&d| d).count() as u32;
        // floor(|dark% - 50%| / 5%)
        let k = (dark_count * 20).abs_diff(total * 10) / total;
        penalty.balance = k * PENALTY_N4;
    }
    penalty
}

fn run_penalty(line: &[bool]) -> u32 {
    let mut score = 0;
    let mut run = 0u32;
    let mut prev = None;
    for &module in line {
        if Some(module) == prev {
            run += 1;
        } else {
            if run >= 5 {
                score += PENALTY_N1 + run - 5;
            }
            run = 1;
            prev = Some(module);
        }
    }
    if run >= 5 {
        score += PENALTY_N1 + run - 5;
    }
    score
}

/// Last seven run lengths of a line, newest first.
///
/// The area outside the symbol reads as light: the first run and the closing
/// light run are both extended by the line length.
struct FinderPenalty {
    line_len: u32,
    run_history: [u32; 7],
}

impl FinderPenalty {
    fn new(line_len: usize) -> Self {
        Self {
            line_len: line_len as u32,
            run_history: [0; 7],
        }
    }

    fn add_history(&mut self, mut run: u32) {
        if self.run_history[0] == 0 {
            run += self.line_len;
        }
        self.run_history.copy_within(0..6, 1);
        self.run_history[0] = run;
    }

    /// Dark 1:1:3:1:1 core (any scale n) closed by light runs, one of which
    /// is at least 4n long. Each qualifying side counts once.
    fn count_patterns(&self) -> u32 {
        let rh = &self.run_history;
        let n = rh[1];
        let core = n > 0 && rh[2] == n && rh[3] == n * 3 && rh[4] == n && rh[5] == n;
        u32::from(core && rh[0] >= n * 4 && rh[6] >= n)
            + u32::from(core && rh[6] >= n * 4 && rh[0] >= n)
    }

    fn terminate_and_count(mut self, color: bool, mut run: u32) -> u32 {
        if color {
            self.add_history(run);
            run = 0;
        }
        run += self.line_len;
        self.add_history(run);
        self.count_patterns()
    }
}

/// Finder-like patterns in one row or column
fn finder_like_penalty(line: &[bool]) -> u32 {
    let mut history = FinderPenalty::new(line.len());
    let mut color = false;
    let mut run = 0;
    let mut found = 0;
    for &module in line {
        if module == color {
            run += 1;
        } else {
            history.add_history(run);
            if !color {
                found += history.count_patterns();
            }
            color = module;
            run = 1;
        }
    }
    found += history.terminate_and_count(color, run);
    found * PENALTY_N3
}

/// Copy of `base` with `mask` applied and format/version information written
pub fn masked_candidate(
    base: &ModuleGrid,
    version: Version,
    ec_level: ECLevel,
    mask: MaskPattern,
) -> ModuleGrid {
    let mut grid = base.clone();
    apply_mask(&mut grid, mask);
    FormatInfo::new(ec_level, mask).write(&mut grid);
    write_version_info(&mut grid, version);
    grid
}

/// Mask every candidate and keep the one with the lowest penalty
pub struct MaskEvaluator;

impl MaskEvaluator {
    /// Returns the finished grid, the chosen mask and its penalty.
    /// Ties go to the lowest mask id; `forced` skips the search.
    pub fn choose(
        base: &ModuleGrid,
        version: Version,
        ec_level: ECLevel,
        forced: Option<MaskPattern>,
    ) -> (ModuleGrid, MaskPattern, Penalty) {
        if let Some(mask) = forced {
            let grid = masked_candidate(base, version, ec_level, mask);
            let penalty = penalty_score(&grid);
            return (grid, mask, penalty);
        }

        let mut best: Option<(ModuleGrid, MaskPattern, Penalty)> = None;
        for mask in MaskPattern::ALL {
            let grid = masked_candidate(base, version, ec_level, mask);
            let penalty = penalty_score(&grid);
            tracing::trace!(mask = mask.bits(), ?penalty, total = penalty.total(), "mask candidate");
            let better = best
                .as_ref()
                .is_none_or(|(_, _, current)| penalty.total() < current.total());
            if better {
                best = Some((grid, mask, penalty));
            }
        }
        // MaskPattern::ALL is non-empty
        let (grid, mask, penalty) = best.unwrap_or_else(|| unreachable!());
        tracing::debug!(mask = mask.bits(), penalty = penalty.total(), "selected mask");
        (grid, mask, penalty)
    }
}

/// Finished grid and mask id for a placed, unmasked grid
pub fn choose_mask(
    base: &ModuleGrid,
    version: Version,
    ec_level: ECLevel,
    forced: Option<MaskPattern>,
) -> (ModuleGrid, MaskPattern) {
    let (grid, mask, _) = MaskEvaluator::choose(base, version, ec_level, forced);
    (grid, mask)
}
