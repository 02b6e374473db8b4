//! Code generation and duplicate-submission reconciliation.

use std::sync::Arc;

use tracing::info;

use crate::domain::entities::{Entry, Mode};
use crate::domain::errors::ShortenError;
use crate::domain::{Registry, RegistryTxn};
use crate::utils::code_generator::{CodeGenerator, FALLBACK_CODE_LENGTH, PRIMARY_CODE_LENGTH};

/// Upper bound on candidate draws for a single new code.
pub const MAX_GENERATION_ATTEMPTS: usize = 64;

/// Decides, for each submission, whether to reuse an existing code, accept a
/// custom code or mint a new one.
///
/// The whole decision runs under one registry transaction, so two concurrent
/// submissions for the same url or code cannot both observe "unused".
pub struct ShortenerService {
    registry: Arc<Registry>,
    generator: Arc<dyn CodeGenerator>,
}

impl ShortenerService {
    /// Creates a new shortener service.
    pub fn new(registry: Arc<Registry>, generator: Arc<dyn CodeGenerator>) -> Self {
        Self {
            registry,
            generator,
        }
    }

    /// Returns the code for `url`, creating or reusing an entry.
    ///
    /// # Policy
    ///
    /// With a `requested_code`:
    /// - unused: a new entry is created under it
    /// - bound to the same url and mode: the code is returned as is, counters
    ///   untouched
    /// - bound to anything else: [`ShortenError::CodeConflict`]
    ///
    /// Without one:
    /// - url known under the same mode: its shorten count is bumped and its
    ///   code returned
    /// - url known under the other mode: [`ShortenError::ModeConflict`]
    /// - url unknown: a fresh code is minted
    ///
    /// An empty `requested_code` counts as no code.
    ///
    /// # Errors
    ///
    /// See the policy above. [`ShortenError::EmptyUrl`] is returned for an
    /// empty `url`, [`ShortenError::CodeSpaceExhausted`] if no free code is
    /// found within [`MAX_GENERATION_ATTEMPTS`] draws.
    pub async fn shorten(
        &self,
        url: &str,
        requested_code: Option<&str>,
        mode: Mode,
    ) -> Result<String, ShortenError> {
        if url.is_empty() {
            return Err(ShortenError::EmptyUrl);
        }
        let requested_code = requested_code.filter(|code| !code.is_empty());

        let mut txn = self.registry.lock().await;

        match requested_code {
            Some(code) => Self::claim_custom(&mut txn, url, code, mode).await,
            None => self.reuse_or_mint(&mut txn, url, mode).await,
        }
    }

    async fn claim_custom(
        txn: &mut RegistryTxn<'_>,
        url: &str,
        code: &str,
        mode: Mode,
    ) -> Result<String, ShortenError> {
        let bound_to_same = txn
            .get_by_code(code)
            .map(|existing| existing.binds(url, mode));

        match bound_to_same {
            None => {
                txn.put(Entry::new(url, code, mode)).await;
                info!(url = %url, code = %code, mode = %mode, "Created custom short code");
                Ok(code.to_string())
            }
            Some(true) => Ok(code.to_string()),
            Some(false) => Err(ShortenError::CodeConflict {
                code: code.to_string(),
            }),
        }
    }

    async fn reuse_or_mint(
        &self,
        txn: &mut RegistryTxn<'_>,
        url: &str,
        mode: Mode,
    ) -> Result<String, ShortenError> {
        let known = txn
            .get_by_url(url)
            .map(|existing| (existing.code.clone(), existing.mode));

        if let Some((code, existing)) = known {
            if existing != mode {
                return Err(ShortenError::ModeConflict {
                    url: url.to_string(),
                    existing,
                    requested: mode,
                });
            }
            txn.bump_shorten_count(&code).await;
            return Ok(code);
        }

        let code = self.synthesize(txn)?;
        txn.put(Entry::new(url, code.as_str(), mode)).await;
        info!(url = %url, code = %code, mode = %mode, "Created short code");
        Ok(code)
    }

    /// Draws candidates until one is unused in the registry.
    ///
    /// The first draw has [`PRIMARY_CODE_LENGTH`] characters, every retry
    /// [`FALLBACK_CODE_LENGTH`].
    fn synthesize(&self, txn: &RegistryTxn<'_>) -> Result<String, ShortenError> {
        let mut candidate = self.generator.generate(PRIMARY_CODE_LENGTH);

        for _ in 1..MAX_GENERATION_ATTEMPTS {
            if !candidate.is_empty() && !txn.contains(&candidate) {
                return Ok(candidate);
            }
            candidate = self.generator.generate(FALLBACK_CODE_LENGTH);
        }

        if !candidate.is_empty() && !txn.contains(&candidate) {
            return Ok(candidate);
        }

        Err(ShortenError::CodeSpaceExhausted {
            attempts: MAX_GENERATION_ATTEMPTS,
        })
    }
}
