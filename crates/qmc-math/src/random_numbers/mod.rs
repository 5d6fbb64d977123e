//! Random number and random sequence generation.
//!
//! Path generation consumes whole draw sequences at a time, through the
//! [`SequenceGenerator`] trait: `dimension()` scalars per call, plus a
//! likelihood weight. `last_sequence()` re-emits the previous draw
//! unchanged, which is what makes antithetic pairing possible without the
//! source re-advancing.

use crate::array::Array;
use crate::distributions::normal_cdf_inverse;
use qmc_core::{
    errors::{Error, Result},
    Real, Sample, Size,
};
use rand_mt::Mt19937GenRand64;

// ── Scalar generators ─────────────────────────────────────────────────────────

/// A scalar pseudo-random number generator emitting weighted samples.
pub trait RandomNumberGenerator {
    /// Draw the next sample.
    fn next(&mut self) -> Sample<Real>;
}

/// A uniform generator on the open interval (0, 1), based on the Mersenne
/// Twister MT19937-64 algorithm.
///
/// The half-offset mapping keeps draws strictly inside the unit interval,
/// so inverse-CDF transforms never see 0 or 1.
pub struct MersenneTwisterUniformRng {
    rng: Mt19937GenRand64,
}

impl MersenneTwisterUniformRng {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Mt19937GenRand64::new(seed),
        }
    }

    /// Generate the next uniform deviate in (0, 1).
    pub fn next_real(&mut self) -> Real {
        let u: u64 = self.rng.next_u64();
        (u as f64 + 0.5) / (u64::MAX as f64 + 1.0)
    }
}

impl RandomNumberGenerator for MersenneTwisterUniformRng {
    fn next(&mut self) -> Sample<Real> {
        Sample::new(self.next_real(), 1.0)
    }
}

// ── Sequence generators ───────────────────────────────────────────────────────

/// A source of fixed-dimension random draw sequences.
///
/// `next_sequence` advances the source and returns a fresh draw;
/// `last_sequence` returns the most recent draw without advancing —
/// calling it before any `next_sequence` call is a contract violation
/// left to the caller (implementations here return the zero sequence they
/// were initialized with).
pub trait SequenceGenerator {
    /// Number of scalars per draw.
    fn dimension(&self) -> Size;

    /// Advance the source and return a fresh draw.
    fn next_sequence(&mut self) -> &Sample<Array>;

    /// Return the most recent draw, unchanged.
    fn last_sequence(&self) -> &Sample<Array>;
}

/// Adapts a scalar generator into a [`SequenceGenerator`] of the given
/// dimension, multiplying the per-draw weights into the sequence weight.
pub struct RandomSequenceGenerator<R: RandomNumberGenerator> {
    rng: R,
    sequence: Sample<Array>,
}

impl<R: RandomNumberGenerator> RandomSequenceGenerator<R> {
    /// Wrap `rng` into a source of `dimension`-sized sequences.
    pub fn new(dimension: Size, rng: R) -> Result<Self> {
        if dimension == 0 {
            return Err(Error::Configuration(
                "sequence dimension must be positive".into(),
            ));
        }
        Ok(Self {
            rng,
            sequence: Sample::new(Array::zeros(dimension), 1.0),
        })
    }
}

impl<R: RandomNumberGenerator> SequenceGenerator for RandomSequenceGenerator<R> {
    fn dimension(&self) -> Size {
        self.sequence.value.len()
    }

    fn next_sequence(&mut self) -> &Sample<Array> {
        let mut weight = 1.0;
        for i in 0..self.sequence.value.len() {
            let s = self.rng.next();
            self.sequence.value[i] = s.value;
            weight *= s.weight;
        }
        self.sequence.weight = weight;
        &self.sequence
    }

    fn last_sequence(&self) -> &Sample<Array> {
        &self.sequence
    }
}

/// Maps a uniform sequence source through the inverse normal CDF,
/// yielding sequences of i.i.d. standard-normal deviates.
pub struct GaussianSequenceGenerator<G: SequenceGenerator> {
    uniform: G,
    sequence: Sample<Array>,
}

impl<G: SequenceGenerator> GaussianSequenceGenerator<G> {
    /// Wrap a uniform sequence source.
    pub fn new(uniform: G) -> Self {
        let dimension = uniform.dimension();
        Self {
            uniform,
            sequence: Sample::new(Array::zeros(dimension), 1.0),
        }
    }
}

impl<G: SequenceGenerator> SequenceGenerator for GaussianSequenceGenerator<G> {
    fn dimension(&self) -> Size {
        self.sequence.value.len()
    }

    fn next_sequence(&mut self) -> &Sample<Array> {
        let uniforms = self.uniform.next_sequence();
        for i in 0..self.sequence.value.len() {
            self.sequence.value[i] = normal_cdf_inverse(uniforms.value[i]);
        }
        self.sequence.weight = uniforms.weight;
        &self.sequence
    }

    fn last_sequence(&self) -> &Sample<Array> {
        &self.sequence
    }
}

/// The workhorse Gaussian source: inverse-cumulative transform over a
/// Mersenne-Twister uniform sequence.
pub type MtGaussianSequenceGenerator =
    GaussianSequenceGenerator<RandomSequenceGenerator<MersenneTwisterUniformRng>>;

impl MtGaussianSequenceGenerator {
    /// Build the full Mersenne-Twister-backed Gaussian chain.
    pub fn from_seed(dimension: Size, seed: u64) -> Result<Self> {
        let uniform =
            RandomSequenceGenerator::new(dimension, MersenneTwisterUniformRng::new(seed))?;
        Ok(Self::new(uniform))
    }
}
