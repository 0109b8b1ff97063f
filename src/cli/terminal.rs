use crate::evaluation::*;
use colored::Colorize;

/// Evaluation chart rendered as terminal output.
#[derive(Debug, Default)]
pub struct Terminal {
    points: Vec<String>,
}

impl Chart for Terminal {
    fn select_point(&mut self, index: usize) {
        if let Some(point) = self.points.get(index) {
            println!("{} {}", "chart".cyan(), point.bold());
        }
    }
    fn clear_selection(&mut self) {
        println!("{} {}", "chart".cyan(), "-".dimmed());
    }
    fn has_point(&self, index: usize) -> bool {
        index < self.points.len()
    }
    fn refresh(&mut self, series: &Series) {
        self.points = series
            .points()
            .iter()
            .zip(series.chances())
            .map(|(point, chances)| match chances {
                Some(c) => format!("{:>3} {:<8} {:+.2}", point.ply, point.san, c),
                None => format!("{:>3} {:<8}    ?", point.ply, point.san),
            })
            .collect();
        println!("{} {} points", "chart".cyan(), self.points.len());
    }
}
