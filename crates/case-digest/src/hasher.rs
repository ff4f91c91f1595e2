// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Streaming passes and the retry loop around them.

use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

use tracing::{debug, warn};

use crate::confirm::{confirm, ConfirmError};
use crate::digests::{ConfirmedHashes, DigestSet, PassDigests};
use crate::DigestError;

/// Passes attempted before a changing source is declared unhashable.
pub const MAX_ATTEMPTS: usize = 4;

/// Read size for one pass (4 MiB).
pub const CHUNK_SIZE: usize = 1 << 22;

/// Reads `reader` to the end once, feeding every chunk to every digest in `set`.
///
/// # Errors
///
/// Any read error other than [`io::ErrorKind::Interrupted`] ends the pass.
pub fn hash_pass<R: Read>(mut reader: R, set: &DigestSet) -> io::Result<PassDigests> {
    let mut hashers = set.hashers();
    let mut buf = vec![0_u8; CHUNK_SIZE];
    let mut byte_count = 0_u64;
    loop {
        let n = match reader.read(&mut buf) {
            Ok(0) => break,
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        let chunk = &buf[..n];
        for (_, hasher) in &mut hashers {
            hasher.update(chunk);
        }
        byte_count += n as u64;
    }
    Ok(PassDigests {
        byte_count,
        digests: hashers
            .into_iter()
            .map(|(method, hasher)| (method, hasher.finalize().into_vec()))
            .collect(),
    })
}

/// Hashes `source` from the start until two consecutive passes report the same
/// byte count and digests, making at most `max_attempts` passes.
///
/// # Errors
///
/// [`DigestError::Io`] as soon as a seek or read fails;
/// [`DigestError::HashConfirmationFailed`] when no two consecutive passes
/// agree.
pub fn convergent_hash<S: Read + Seek>(
    source: &mut S,
    set: &DigestSet,
    max_attempts: usize,
) -> Result<ConfirmedHashes, DigestError> {
    confirm(max_attempts, |attempt| {
        source.seek(SeekFrom::Start(0))?;
        let pass = hash_pass(&mut *source, set)?;
        debug!(attempt, bytes = pass.byte_count, "hash pass complete");
        Ok::<_, io::Error>(pass)
    })
    .map(ConfirmedHashes)
    .map_err(|e| match e {
        ConfirmError::Exhausted { attempts } => DigestError::HashConfirmationFailed { attempts },
        ConfirmError::Compute(io) => DigestError::Io(io),
    })
}

/// [`convergent_hash`] over the file at `path`.
///
/// A confirmed byte count that differs from the file's metadata length is
/// logged as a warning and does not fail the call.
///
/// # Errors
///
/// See [`convergent_hash`]; opening the file or reading its metadata can also
/// fail with [`DigestError::Io`].
pub fn hash_file(
    path: &Path,
    set: &DigestSet,
    max_attempts: usize,
) -> Result<ConfirmedHashes, DigestError> {
    let mut file = File::open(path)?;
    let expected = file.metadata()?.len();
    let confirmed = convergent_hash(&mut file, set, max_attempts)?;
    if confirmed.byte_count() != expected {
        warn!(
            path = %path.display(),
            metadata_len = expected,
            hashed_len = confirmed.byte_count(),
            "file size in metadata differs from bytes hashed"
        );
    }
    Ok(confirmed)
}
