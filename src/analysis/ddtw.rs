// DDTW module - derivative dynamic time warping
//
// Aligns two feature tracks by their local rates of change rather than raw
// values. Plain DTW rewards flat-on-flat matches too strongly (a performer
// who stays silent aligns suspiciously well against quiet stretches of the
// theme); differentiating first suppresses baseline-offset matches.
//
// The cost matrix is (n+1) x (m+1) with cumulative boundary accumulation:
//   M[0][0] = 0
//   M[i][0] = M[i-1][0] + |dq[i-1]|   (symmetric for M[0][j])
//   M[i][j] = |dq[i-1] - dr[j-1]| + min(M[i-1][j], M[i][j-1], M[i-1][j-1])
// Terminal cost is M[n][m]. Downstream normalization divides by the true
// maximum of the FULL matrix, not the terminal cell or the path length; do
// not change that to path-length or shape normalization, the scores would
// stop matching across track lengths.

use crate::analysis::features::FeatureTrack;
use crate::error::ScoringError;

/// Cumulative alignment cost matrix
///
/// Flat row-major storage, exclusively owned by one alignment. Never mutated
/// after `align` returns it.
#[derive(Debug, Clone)]
pub struct CostMatrix {
    data: Vec<f32>,
    rows: usize,
    cols: usize,
}

impl CostMatrix {
    fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0.0; rows * cols],
            rows,
            cols,
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn get(&self, i: usize, j: usize) -> f32 {
        self.data[i * self.cols + j]
    }

    fn set(&mut self, i: usize, j: usize, value: f32) {
        self.data[i * self.cols + j] = value;
    }

    /// Cumulative cost at the terminal cell M[n][m]
    pub fn terminal_cost(&self) -> f32 {
        self.get(self.rows - 1, self.cols - 1)
    }

    /// True maximum over the full matrix (the normalization denominator)
    pub fn max_cost(&self) -> f32 {
        self.data.iter().cloned().fold(0.0_f32, f32::max)
    }
}

/// Result of one alignment: terminal cost plus the matrix it came from
#[derive(Debug, Clone)]
pub struct Alignment {
    pub terminal_cost: f32,
    pub matrix: CostMatrix,
}

impl Alignment {
    /// Reconstruct the minimal-cost warping path for diagnostics
    ///
    /// Walks backward from M[n][m] to M[0][0], picking the cheapest
    /// predecessor at each step (diagonal preferred on ties). Every step
    /// advances at least one index by exactly one; the returned path is in
    /// forward order.
    pub fn path(&self) -> Vec<(usize, usize)> {
        let mut i = self.matrix.rows() - 1;
        let mut j = self.matrix.cols() - 1;
        let mut path = vec![(i, j)];

        while i > 0 || j > 0 {
            let (ni, nj) = if i == 0 {
                (0, j - 1)
            } else if j == 0 {
                (i - 1, 0)
            } else {
                let diag = self.matrix.get(i - 1, j - 1);
                let up = self.matrix.get(i - 1, j);
                let left = self.matrix.get(i, j - 1);
                if diag <= up && diag <= left {
                    (i - 1, j - 1)
                } else if up <= left {
                    (i - 1, j)
                } else {
                    (i, j - 1)
                }
            };
            i = ni;
            j = nj;
            path.push((i, j));
        }

        path.reverse();
        path
    }
}

/// Derivative dynamic time warping aligner
pub struct DdtwAligner;

impl DdtwAligner {
    pub fn new() -> Self {
        Self
    }

    /// Align a query track against a same-kind reference track
    ///
    /// Different track lengths are the normal case; warping is the point.
    ///
    /// # Errors
    /// `ScoringError::EmptyTrack` if either track has length 0.
    pub fn align(
        &self,
        query: &FeatureTrack,
        reference: &FeatureTrack,
    ) -> Result<Alignment, ScoringError> {
        debug_assert_eq!(
            query.kind(),
            reference.kind(),
            "only same-kind tracks are comparable"
        );
        if query.is_empty() {
            return Err(ScoringError::EmptyTrack { kind: query.kind() });
        }
        if reference.is_empty() {
            return Err(ScoringError::EmptyTrack {
                kind: reference.kind(),
            });
        }

        let dq = derivative(query.values());
        let dr = derivative(reference.values());
        let n = dq.len();
        let m = dr.len();

        let mut matrix = CostMatrix::zeros(n + 1, m + 1);
        for i in 1..=n {
            matrix.set(i, 0, matrix.get(i - 1, 0) + dq[i - 1].abs());
        }
        for j in 1..=m {
            matrix.set(0, j, matrix.get(0, j - 1) + dr[j - 1].abs());
        }
        for i in 1..=n {
            for j in 1..=m {
                let local = (dq[i - 1] - dr[j - 1]).abs();
                let best = matrix
                    .get(i - 1, j)
                    .min(matrix.get(i, j - 1))
                    .min(matrix.get(i - 1, j - 1));
                matrix.set(i, j, local + best);
            }
        }

        Ok(Alignment {
            terminal_cost: matrix.terminal_cost(),
            matrix,
        })
    }
}

impl Default for DdtwAligner {
    fn default() -> Self {
        Self::new()
    }
}

/// Discrete derivative estimate of a track
///
/// Central difference at interior points, forward difference at the first
/// point, backward at the last. A length-1 track has no measurable change
/// and gets the single value 0.0.
fn derivative(values: &[f32]) -> Vec<f32> {
    match values.len() {
        0 => Vec::new(),
        1 => vec![0.0],
        len => (0..len)
            .map(|i| {
                if i == 0 {
                    values[1] - values[0]
                } else if i == len - 1 {
                    values[len - 1] - values[len - 2]
                } else {
                    (values[i + 1] - values[i - 1]) / 2.0
                }
            })
            .collect(),
    }
}
