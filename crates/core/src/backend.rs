//! Transform-provider trait injected into the propagation engine.
//!
//! Conventions match numpy: `forward_fft_2d` is unnormalized,
//! `inverse_fft_2d` carries the `1/(nx*ny)` factor, so a forward/inverse
//! pair is the identity. Implementations must finish the whole transform
//! before returning; the engine treats every call as atomic.

use num_complex::Complex64;

use crate::field::Field2D;

pub trait SpectralBackend {
    fn forward_fft_2d(&self, buffer: &mut Field2D);
    fn inverse_fft_2d(&self, buffer: &mut Field2D);

    fn scale(&self, alpha: Complex64, buffer: &mut Field2D) {
        buffer.scale(alpha);
    }

    /// Forward transform of a field whose optical axis sits at the grid
    /// centre; the result is DC-centred as well.
    fn centered_forward_fft_2d(&self, buffer: &mut Field2D) {
        buffer.ifftshift();
        self.forward_fft_2d(buffer);
        buffer.fftshift();
    }

    /// Inverse counterpart of [`centered_forward_fft_2d`](Self::centered_forward_fft_2d).
    fn centered_inverse_fft_2d(&self, buffer: &mut Field2D) {
        buffer.ifftshift();
        self.inverse_fft_2d(buffer);
        buffer.fftshift();
    }
}

impl<B: SpectralBackend + ?Sized> SpectralBackend for &B {
    fn forward_fft_2d(&self, buffer: &mut Field2D) {
        (**self).forward_fft_2d(buffer);
    }

    fn inverse_fft_2d(&self, buffer: &mut Field2D) {
        (**self).inverse_fft_2d(buffer);
    }

    fn scale(&self, alpha: Complex64, buffer: &mut Field2D) {
        (**self).scale(alpha, buffer);
    }
}
