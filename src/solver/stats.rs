use prettytable::{Cell, Row, Table};

/// Counters collected across one call to
/// [`SolverEngine::solve`](crate::solver::engine::SolverEngine::solve).
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    /// Arcs popped and revised during propagation.
    pub revisions: u64,
    /// Words removed from domains during propagation.
    pub prunings: u64,
    /// Search nodes entered (including the root).
    pub nodes_visited: u64,
    /// Candidate words abandoned during search.
    pub backtracks: u64,
    /// Time spent inside AC-3.
    pub propagation_micros: u64,
}

pub fn render_stats_table(stats: &SearchStats) -> String {
    let mut table = Table::new();
    table.add_row(Row::new(vec![Cell::new("Metric"), Cell::new("Value")]));
    table.add_row(Row::new(vec![
        Cell::new("Revise Calls"),
        Cell::new(&stats.revisions.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Words Pruned"),
        Cell::new(&stats.prunings.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Nodes Visited"),
        Cell::new(&stats.nodes_visited.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Backtracks"),
        Cell::new(&stats.backtracks.to_string()),
    ]));
    table.add_row(Row::new(vec![
        Cell::new("Propagation Time (ms)"),
        Cell::new(&format!("{:.2}", stats.propagation_micros as f64 / 1000.0)),
    ]));
    table.to_string()
}
