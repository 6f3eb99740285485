use serde::{Deserialize, Serialize};

/// Correlation matrix payload as returned by `/heatmap-data`.
///
/// Both fields may be missing or `null`; that is a display state ("no data"),
/// not a decode error.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeatmapPayload {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub matrix: Option<Vec<Vec<f64>>>,
}

impl HeatmapPayload {
    pub fn new(labels: Vec<String>, matrix: Vec<Vec<f64>>) -> Self {
        Self { labels: Some(labels), matrix: Some(matrix) }
    }

    /// Renderable view of the payload, `None` unless both labels and matrix are present.
    pub fn grid(&self) -> Option<HeatmapGrid<'_>> {
        match (&self.labels, &self.matrix) {
            (Some(labels), Some(matrix)) => Some(HeatmapGrid { labels, matrix }),
            _ => None,
        }
    }
}

/// Borrowed, validated heatmap ready for rendering
#[derive(Debug, Clone, Copy)]
pub struct HeatmapGrid<'a> {
    labels: &'a [String],
    matrix: &'a [Vec<f64>],
}

impl<'a> HeatmapGrid<'a> {
    pub fn labels(&self) -> &'a [String] {
        self.labels
    }

    /// Label for row/column `index`, empty when the server sent fewer labels than rows.
    pub fn label(&self, index: usize) -> &'a str {
        self.labels.get(index).map(String::as_str).unwrap_or("")
    }

    pub fn row_count(&self) -> usize {
        self.matrix.len()
    }

    /// Cells of one row, in column order.
    pub fn row(self, row: usize) -> impl Iterator<Item = HeatmapCell> + 'a {
        let values: &'a [f64] = self.matrix.get(row).map(Vec::as_slice).unwrap_or_default();
        values
            .iter()
            .enumerate()
            .map(move |(column, &value)| HeatmapCell::new(row, column, value))
    }

    /// Every `matrix[i][j]`, row-major. Ragged rows are rendered as sent.
    pub fn cells(self) -> impl Iterator<Item = HeatmapCell> + 'a {
        (0..self.matrix.len()).flat_map(move |row| self.row(row))
    }
}

/// One rendered correlation cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatmapCell {
    pub row: usize,
    pub column: usize,
    pub value: f64,
}

impl HeatmapCell {
    pub fn new(row: usize, column: usize, value: f64) -> Self {
        Self { row, column, value }
    }

    /// Visual intensity: `abs(value)` clamped to [0, 1].
    ///
    /// There is no normalization against the matrix's own range, so 1.0 is always
    /// full intensity.
    pub fn intensity(&self) -> f64 {
        let magnitude = self.value.abs();
        if magnitude.is_nan() { 0.0 } else { magnitude.clamp(0.0, 1.0) }
    }

    pub fn background(&self) -> String {
        format!("rgba(0, 0, 255, {})", self.intensity())
    }

    pub fn text(&self) -> String {
        format!("{:.2}", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_outlive_the_grid_handle() {
        let payload = HeatmapPayload::new(vec!["A".into(), "B".into()], vec![vec![1.0, 0.4], vec![-0.7]]);
        let cells: Vec<HeatmapCell> = {
            let grid = payload.grid().unwrap();
            grid.cells()
        }
        .collect();

        assert_eq!(
            cells,
            vec![
                HeatmapCell::new(0, 0, 1.0),
                HeatmapCell::new(0, 1, 0.4),
                HeatmapCell::new(1, 0, -0.7),
            ]
        );
    }

    #[test]
    fn missing_row_is_empty() {
        let payload = HeatmapPayload::new(vec!["A".into()], vec![vec![0.5]]);
        assert_eq!(payload.grid().unwrap().row(3).count(), 0);
    }
}
