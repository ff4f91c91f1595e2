// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! The generator proper.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

use crate::config::{LocalUuidConfig, Mode};

/// Fixed first component of every demo-mode name.
pub const DEMO_MARKER: &str = "example.org";

/// Mints identifiers for nodes with no natural derivation.
///
/// In demo mode the `n`-th call (starting at 1) returns
/// `uuid5(URL, "example.org/<n>/<location>/<argv...>")`, so a rerun from the
/// same directory with the same arguments reproduces the same sequence. The
/// counter is atomic; concurrent callers each observe a distinct `n`.
#[derive(Debug)]
pub struct LocalUuidGenerator {
    config: LocalUuidConfig,
    counter: AtomicU64,
}

impl LocalUuidGenerator {
    /// Creates a generator with a fresh counter.
    pub fn new(config: LocalUuidConfig) -> Self {
        Self {
            config,
            counter: AtomicU64::new(0),
        }
    }

    /// Returns `true` when identifiers are reproducible rather than random.
    pub fn is_deterministic(&self) -> bool {
        matches!(self.config.mode(), Mode::Demo(_))
    }

    /// Number of demo-mode identifiers issued so far (always 0 in random mode).
    pub fn issued(&self) -> u64 {
        self.counter.load(Ordering::SeqCst)
    }

    /// Mints the next identifier as hyphenated lowercase UUID text.
    pub fn next_id(&self) -> String {
        self.next_uuid().hyphenated().to_string()
    }

    /// Mints the next identifier.
    pub fn next_uuid(&self) -> Uuid {
        match self.config.mode() {
            Mode::Random => Uuid::new_v4(),
            Mode::Demo(context) => {
                let n = self.counter.fetch_add(1, Ordering::SeqCst) + 1;
                let mut parts = Vec::with_capacity(3 + context.argv().len());
                parts.push(DEMO_MARKER.to_owned());
                parts.push(n.to_string());
                parts.push(context.location().to_owned());
                parts.extend(context.argv().iter().cloned());
                Uuid::new_v5(&Uuid::NAMESPACE_URL, parts.join("/").as_bytes())
            }
        }
    }
}
