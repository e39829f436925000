//! Identifier generation service.
//!
//! Owns the worker's random source and hands out batches of identifiers.

use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use crate::config::GeneratorConfig;
use crate::domain::{GenerateOptions, Scheme, SchemeDescriptor};
use crate::error::{AppError, Result};
use crate::service::schemes;

/// Service for business identifier generation.
pub struct IdentifierService {
    /// Random source shared by all requests.
    rng: Mutex<StdRng>,
    /// Largest batch a single call may request.
    max_count: u32,
}

impl IdentifierService {
    /// Create a new identifier service.
    ///
    /// A configured seed makes the output sequence reproducible; otherwise the
    /// source is seeded from the OS.
    pub fn new(config: &GeneratorConfig) -> Self {
        let rng = config
            .seed
            .map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);

        Self {
            rng: Mutex::new(rng),
            max_count: config.max_count,
        }
    }

    /// Largest accepted batch size.
    #[must_use]
    pub const fn max_count(&self) -> u32 {
        self.max_count
    }

    /// Whether the random source is free right now. Never blocks.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.rng.try_lock().is_some()
    }

    /// Descriptors of every supported scheme.
    #[must_use]
    pub fn schemes(&self) -> Vec<SchemeDescriptor> {
        Scheme::ALL.iter().map(|s| s.descriptor()).collect()
    }

    /// Generate identifiers.
    ///
    /// # Arguments
    ///
    /// * `scheme` - Identifier scheme
    /// * `options` - Formatting and length options
    /// * `count` - Number of identifiers to generate
    ///
    /// # Errors
    ///
    /// Returns an error if `count` is out of range or the options are invalid for the scheme.
    pub fn generate(
        &self,
        scheme: Scheme,
        options: &GenerateOptions,
        count: u32,
    ) -> Result<Vec<String>> {
        if count == 0 {
            return Err(AppError::BadRequest("count must be at least 1".to_string()));
        }
        if count > self.max_count {
            return Err(AppError::BadRequest(format!(
                "count cannot exceed {}",
                self.max_count
            )));
        }

        let mut ids = Vec::with_capacity(count as usize);
        {
            let mut rng = self.rng.lock();
            for _ in 0..count {
                ids.push(schemes::generate(scheme, options, &mut *rng)?);
            }
        }

        metrics::counter!("bizid_identifiers_generated_total", "scheme" => scheme.as_str())
            .increment(u64::from(count));
        debug!(%scheme, count, "Identifiers generated");

        Ok(ids)
    }
}
