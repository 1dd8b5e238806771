// src/core/plp/features.rs
//
// Row-major PLP feature matrix.

use serde::{Deserialize, Serialize};

/// `num_frames x num_coeffs` cepstral features, one row per frame in order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlpFeatures {
    num_frames: usize,
    num_coeffs: usize,
    data: Vec<f64>,
}

impl PlpFeatures {
    pub fn empty(num_coeffs: usize) -> Self {
        Self {
            num_frames: 0,
            num_coeffs,
            data: Vec::new(),
        }
    }

    /// Flatten rows; every row must have `num_coeffs` entries
    pub fn from_rows(rows: Vec<Vec<f64>>, num_coeffs: usize) -> Self {
        let num_frames = rows.len();
        let mut data = Vec::with_capacity(num_frames * num_coeffs);
        for row in rows {
            debug_assert_eq!(row.len(), num_coeffs);
            data.extend(row);
        }
        Self {
            num_frames,
            num_coeffs,
            data,
        }
    }

    pub fn num_frames(&self) -> usize {
        self.num_frames
    }

    pub fn num_coeffs(&self) -> usize {
        self.num_coeffs
    }

    pub fn is_empty(&self) -> bool {
        self.num_frames == 0
    }

    pub fn row(&self, frame: usize) -> Option<&[f64]> {
        if frame >= self.num_frames {
            return None;
        }
        let start = frame * self.num_coeffs;
        Some(&self.data[start..start + self.num_coeffs])
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks_exact panics on a zero chunk size
        self.data.chunks_exact(self.num_coeffs.max(1))
    }

    /// One coefficient across all frames
    pub fn column(&self, coeff: usize) -> Vec<f64> {
        self.rows().filter_map(|row| row.get(coeff).copied()).collect()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(|r| r.to_vec()).collect()
    }
}
