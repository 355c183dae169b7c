//! Text rendering and JSON export of analyzer measurements

use crate::analyzer::{Measurement, Outcome};
use crate::error::{AnalyzerError, Result};
use complexity_core::{Algorithm, Scenario};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

const HEADERS: [&str; 9] = [
    "Algorithm",
    "Scenario",
    "Size (N)",
    "Result",
    "Time (s)",
    "Operations",
    "Ops / Worst",
    "Worst Case",
    "Best Case",
];

/// Widest bar in a chart, in cells
const BAR_WIDTH: usize = 40;

/// Grid table of measurements sorted by algorithm, scenario and size
pub fn render_table(measurements: &[Measurement]) -> String {
    if measurements.is_empty() {
        return "No results to display. Run an analysis first.\n".to_string();
    }

    let mut sorted: Vec<&Measurement> = measurements.iter().collect();
    sorted.sort_by_key(|m| (m.algorithm, m.scenario, m.size));

    let rows: Vec<[String; 9]> = sorted
        .iter()
        .map(|m| {
            [
                m.algorithm.to_string(),
                m.scenario.to_string(),
                m.size.to_string(),
                m.outcome.to_string(),
                format!("{:.6}", m.avg_time_secs),
                m.operations.to_string(),
                format!("{:.3}", m.growth_ratio()),
                m.algorithm.worst_case().to_string(),
                m.algorithm.best_case().to_string(),
            ]
        })
        .collect();

    let mut widths: Vec<usize> = HEADERS.iter().map(|h| h.chars().count()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let rule = |fill: char| -> String {
        let segments: Vec<String> = widths.iter().map(|w| fill.to_string().repeat(w + 2)).collect();
        format!("+{}+\n", segments.join("+"))
    };
    let line = |cells: &[String]| -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, &w)| format!(" {:<w$} ", cell, w = w))
            .collect();
        format!("|{}|\n", padded.join("|"))
    };

    let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
    let table_width = widths.iter().map(|w| w + 3).sum::<usize>() + 1;
    let title = "Empirical and Theoretical Analysis Results";

    let mut out = String::new();
    out.push_str(&"=".repeat(table_width));
    out.push('\n');
    out.push_str(&format!("{:^width$}\n", title, width = table_width));
    out.push_str(&"=".repeat(table_width));
    out.push('\n');
    out.push_str(&rule('-'));
    out.push_str(&line(&header[..]));
    out.push_str(&rule('='));
    for row in &rows {
        out.push_str(&line(&row[..]));
        out.push_str(&rule('-'));
    }
    out
}

/// Bar charts of operations and time against input size, one series per
/// (algorithm, scenario) pair
pub fn render_chart(measurements: &[Measurement], title: &str) -> String {
    let mut out = format!("{}\n{}\n", title, "-".repeat(title.chars().count()));
    if measurements.is_empty() {
        out.push_str("No results to plot.\n");
        return out;
    }

    let mut series: BTreeMap<(Algorithm, Scenario), Vec<&Measurement>> = BTreeMap::new();
    for m in measurements {
        series.entry((m.algorithm, m.scenario)).or_default().push(m);
    }
    for points in series.values_mut() {
        points.sort_by_key(|m| m.size);
    }

    out.push_str("\nTotal operations vs. input size (N)\n");
    render_section(&mut out, &series, |m| m.operations as f64, |m| m.operations.to_string());

    out.push_str("\nExecution time vs. input size (N)\n");
    render_section(&mut out, &series, |m| m.avg_time_secs, |m| format!("{:.6}s", m.avg_time_secs));

    out
}

fn render_section(
    out: &mut String,
    series: &BTreeMap<(Algorithm, Scenario), Vec<&Measurement>>,
    value: impl Fn(&Measurement) -> f64,
    label: impl Fn(&Measurement) -> String,
) {
    let max = series
        .values()
        .flatten()
        .map(|&m| value(m))
        .fold(0.0_f64, f64::max);
    let size_width = series
        .values()
        .flatten()
        .map(|m| m.size.to_string().len())
        .max()
        .unwrap_or(1);

    for ((algorithm, scenario), points) in series {
        out.push_str(&format!("  {} ({})\n", algorithm, scenario));
        for &m in points {
            out.push_str(&format!(
                "    N={:>size_width$} {:<bar_width$} {}\n",
                m.size,
                bar(value(m), max),
                label(m),
                size_width = size_width,
                bar_width = BAR_WIDTH
            ));
        }
    }
}

fn bar(value: f64, max: f64) -> String {
    if max <= 0.0 || value <= 0.0 {
        return String::new();
    }
    let cells = ((value / max) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(cells.clamp(1, BAR_WIDTH))
}

/// Default export location in the user's local data directory
pub fn default_export_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("complexity_measurements.json")
}

/// Write measurements as pretty-printed JSON
pub fn export_json(measurements: &[Measurement], path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(measurements)?;
    fs::write(path, json).map_err(|e| AnalyzerError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use complexity_core::{Counter, Family, Operation};

    fn measurement(algorithm: Algorithm, scenario: Scenario, size: usize, operations: u64) -> Measurement {
        let outcome = match algorithm.family() {
            Family::Sorting => Outcome::Sorted,
            Family::Searching => Outcome::NotFound,
            Family::ConstraintSearch => Outcome::Solved,
        };
        let mut counts = Counter::new();
        counts.charge_by(Operation::Comparisons, operations);
        Measurement {
            algorithm,
            scenario,
            size,
            avg_time_secs: size as f64 * 1e-6,
            operations,
            counts,
            outcome,
        }
    }

    fn sample() -> Vec<Measurement> {
        vec![
            measurement(Algorithm::MergeSort, Scenario::Random, 100, 540),
            measurement(Algorithm::InsertionSort, Scenario::Sorted, 200, 199),
            measurement(Algorithm::InsertionSort, Scenario::Sorted, 100, 99),
        ]
    }

    #[test]
    fn test_empty_table() {
        assert!(render_table(&[]).starts_with("No results"));
    }

    #[test]
    fn test_table_rows_sorted_with_bounds() {
        let table = render_table(&sample());

        assert!(table.contains("Empirical and Theoretical Analysis Results"));
        assert!(table.contains("| Algorithm "));
        assert!(table.contains("O(n²)"));
        assert!(table.contains("Θ(n log n)"));

        let first = table.find("| Insertion Sort | Sorted   | 100 ").unwrap();
        let second = table.find("| Insertion Sort | Sorted   | 200 ").unwrap();
        let third = table.find("| Merge Sort ").unwrap();
        assert!(first < second && second < third);
    }

    #[test]
    fn test_table_shows_outcome() {
        let mut unsolved = measurement(Algorithm::NQueens, Scenario::Random, 3, 58);
        unsolved.outcome = Outcome::Unsolved;
        let solved = measurement(Algorithm::NQueens, Scenario::Random, 4, 100);

        let table = render_table(&[solved, unsolved]);
        let row_3 = table.lines().find(|l| l.starts_with("| N-Queens  | Random   | 3 ")).unwrap();
        let row_4 = table.lines().find(|l| l.starts_with("| N-Queens  | Random   | 4 ")).unwrap();
        assert!(row_3.contains("| no solution |"), "{}", row_3);
        assert!(row_4.contains("| solved      |"), "{}", row_4);
    }

    #[test]
    fn test_table_lines_align() {
        let table = render_table(&sample());
        let widths: Vec<usize> = table
            .lines()
            .filter(|l| l.starts_with('+') || l.starts_with('|'))
            .map(|l| l.chars().count())
            .collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }

    #[test]
    fn test_chart_scales_to_largest() {
        let chart = render_chart(&sample(), "Sorting Analysis");

        assert!(chart.starts_with("Sorting Analysis\n"));
        assert!(chart.contains("Insertion Sort (Sorted)"));
        assert!(chart.contains("Merge Sort (Random)"));
        assert!(chart.contains(&"█".repeat(BAR_WIDTH)));
        assert!(chart.contains("540"));
    }

    #[test]
    fn test_bar_bounds() {
        assert_eq!(bar(0.0, 10.0), "");
        assert_eq!(bar(5.0, 0.0), "");
        assert_eq!(bar(0.001, 1000.0).chars().count(), 1);
        assert_eq!(bar(10.0, 10.0).chars().count(), BAR_WIDTH);
    }

    #[test]
    fn test_export_writes_json() {
        let path = std::env::temp_dir().join(format!("complexity-export-{}.json", std::process::id()));
        export_json(&sample(), &path).unwrap();

        let json = fs::read_to_string(&path).unwrap();
        let back: Vec<Measurement> = serde_json::from_str(&json).unwrap();
        assert_eq!(back.len(), 3);
        assert_eq!(back[0].counts.get(Operation::Comparisons), 540);

        fs::remove_file(&path).unwrap();
    }
}
