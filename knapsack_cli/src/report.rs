use std::io::Write;

use comfy_table::Table;
use jiff::{SignedDuration, Timestamp};
use knapsack_optimizer::{
    problem::capacity::Capacity,
    solver::search_outcome::{EvaluatedCandidate, SearchOutcome, SearchState},
};
use serde::Serialize;

const BITS_PER_GROUP: usize = 10;
const GROUPS_PER_LINE: usize = 2;

#[derive(Serialize, Debug)]
pub struct CandidateReport {
    pub bits: String,
    pub value: u64,
    pub weight: u64,
    pub included: usize,
}

impl From<&EvaluatedCandidate> for CandidateReport {
    fn from(evaluated: &EvaluatedCandidate) -> Self {
        CandidateReport {
            bits: evaluated.candidate.to_bit_string(),
            value: evaluated.value(),
            weight: evaluated.weight(),
            included: evaluated.candidate.included_count(),
        }
    }
}

#[derive(Serialize, Debug)]
pub struct SolutionReport {
    pub items: usize,
    pub capacity: Capacity,
    pub state: SearchState,
    pub scans: usize,
    pub moves: usize,
    pub started_at: Timestamp,
    pub elapsed: SignedDuration,
    pub initial: CandidateReport,
    pub solution: CandidateReport,
}

impl SolutionReport {
    pub fn new(items: usize, capacity: Capacity, outcome: &SearchOutcome) -> Self {
        SolutionReport {
            items,
            capacity,
            state: outcome.state,
            scans: outcome.scans,
            moves: outcome.moves,
            started_at: outcome.started_at,
            elapsed: outcome.elapsed,
            initial: CandidateReport::from(&outcome.initial),
            solution: CandidateReport::from(&outcome.solution),
        }
    }

    pub fn print<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "\nInitial solution:")?;
        for line in format_bits(&self.initial.bits) {
            writeln!(out, "{line}")?;
        }

        writeln!(out, "\nSolution ({:?}):", self.state)?;
        for line in format_bits(&self.solution.bits) {
            writeln!(out, "{line}")?;
        }

        let mut table = Table::new();
        table.set_header(vec!["", "Value", "Weight", "Items"]);
        table.add_row(vec![
            String::from("Initial"),
            self.initial.value.to_string(),
            self.initial.weight.to_string(),
            self.initial.included.to_string(),
        ]);
        table.add_row(vec![
            String::from("Solution"),
            self.solution.value.to_string(),
            self.solution.weight.to_string(),
            self.solution.included.to_string(),
        ]);

        writeln!(out, "\n{table}")?;
        writeln!(
            out,
            "Capacity {}, {} items, {} scans, {} moves in {:#}",
            self.capacity, self.items, self.scans, self.moves, self.elapsed
        )
    }
}

/// Splits a bit string into lines of `GROUPS_PER_LINE` groups of
/// `BITS_PER_GROUP` bits, groups separated by a space.
pub fn format_bits(bits: &str) -> Vec<String> {
    let chars = bits.chars().collect::<Vec<_>>();

    chars
        .chunks(BITS_PER_GROUP * GROUPS_PER_LINE)
        .map(|line| {
            line.chunks(BITS_PER_GROUP)
                .map(|group| group.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}
