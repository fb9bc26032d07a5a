//! CPU spectral backends built on rustfft.
//!
//! [`CpuBackend`] runs row and column passes serially. [`ParallelCpuBackend`]
//! fans the same passes out over a rayon pool; both produce identical
//! transforms and either can be handed to a `GaussianBeam`.

use std::sync::Arc;

use fresnel2d_core::backend::SpectralBackend;
use fresnel2d_core::field::Field2D;
use num_complex::Complex64;
use parking_lot::Mutex;
use rayon::prelude::*;
use rustfft::{Fft, FftDirection, FftPlanner};

/// Planner shared by all transforms of a backend; rustfft caches plans per
/// length and direction internally.
struct PlanCache {
    planner: Mutex<FftPlanner<f64>>,
}

impl PlanCache {
    fn new() -> Self {
        Self {
            planner: Mutex::new(FftPlanner::new()),
        }
    }

    fn plan(&self, len: usize, direction: FftDirection) -> Arc<dyn Fft<f64>> {
        self.planner.lock().plan_fft(len, direction)
    }
}

fn inverse_scale(buffer: &mut Field2D) {
    let scale = 1.0 / buffer.len() as f64;
    for value in buffer.as_mut_slice() {
        *value *= scale;
    }
}

fn transpose(data: &[Complex64], rows: usize, cols: usize) -> Vec<Complex64> {
    let mut out = vec![Complex64::default(); data.len()];
    for r in 0..rows {
        for c in 0..cols {
            out[c * rows + r] = data[r * cols + c];
        }
    }
    out
}

// ============================================================================
// Serial backend
// ============================================================================

pub struct CpuBackend {
    plans: PlanCache,
}

impl CpuBackend {
    pub fn new() -> Self {
        Self {
            plans: PlanCache::new(),
        }
    }

    fn fft_2d(&self, buffer: &mut Field2D, direction: FftDirection) {
        let grid = buffer.grid();
        let (nx, ny) = (grid.nx, grid.ny);
        if nx == 0 || ny == 0 {
            return;
        }
        let fft_x = self.plans.plan(nx, direction);
        let fft_y = self.plans.plan(ny, direction);
        let data = buffer.as_mut_slice();

        // rows are contiguous, process them in one batch
        fft_x.process(data);

        let mut col_buf = vec![Complex64::default(); ny];
        for col in 0..nx {
            for row in 0..ny {
                col_buf[row] = data[row * nx + col];
            }
            fft_y.process(&mut col_buf);
            for row in 0..ny {
                data[row * nx + col] = col_buf[row];
            }
        }
    }
}

impl Default for CpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralBackend for CpuBackend {
    fn forward_fft_2d(&self, buffer: &mut Field2D) {
        self.fft_2d(buffer, FftDirection::Forward);
    }

    fn inverse_fft_2d(&self, buffer: &mut Field2D) {
        self.fft_2d(buffer, FftDirection::Inverse);
        inverse_scale(buffer);
    }
}

// ============================================================================
// Rayon backend
// ============================================================================

pub struct ParallelCpuBackend {
    plans: PlanCache,
    pool: Option<rayon::ThreadPool>,
}

impl ParallelCpuBackend {
    /// Run on rayon's global pool.
    pub fn new() -> Self {
        Self {
            plans: PlanCache::new(),
            pool: None,
        }
    }

    /// Run on a dedicated pool of `threads` workers.
    pub fn with_threads(threads: usize) -> Result<Self, rayon::ThreadPoolBuildError> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|idx| format!("fresnel2d-fft-{idx}"))
            .build()?;
        log::debug!("parallel FFT backend with {threads} threads");
        Ok(Self {
            plans: PlanCache::new(),
            pool: Some(pool),
        })
    }

    pub fn threads(&self) -> usize {
        match &self.pool {
            Some(pool) => pool.current_num_threads(),
            None => rayon::current_num_threads(),
        }
    }

    fn fft_2d(&self, buffer: &mut Field2D, direction: FftDirection) {
        let grid = buffer.grid();
        let (nx, ny) = (grid.nx, grid.ny);
        if nx == 0 || ny == 0 {
            return;
        }
        let fft_x = self.plans.plan(nx, direction);
        let fft_y = self.plans.plan(ny, direction);
        let data = buffer.as_mut_slice();

        let mut run = || {
            data.par_chunks_mut(nx).for_each(|row| fft_x.process(row));
            let mut columns = transpose(data, ny, nx);
            columns.par_chunks_mut(ny).for_each(|col| fft_y.process(col));
            data.copy_from_slice(&transpose(&columns, nx, ny));
        };
        match &self.pool {
            Some(pool) => pool.install(run),
            None => run(),
        }
    }
}

impl Default for ParallelCpuBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl SpectralBackend for ParallelCpuBackend {
    fn forward_fft_2d(&self, buffer: &mut Field2D) {
        self.fft_2d(buffer, FftDirection::Forward);
    }

    fn inverse_fft_2d(&self, buffer: &mut Field2D) {
        self.fft_2d(buffer, FftDirection::Inverse);
        inverse_scale(buffer);
    }
}
