// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]

use std::cell::Cell;
use std::io::{self, Cursor, Read, Seek, SeekFrom};
use std::rc::Rc;

use case_digest::{
    convergent_hash, hash_file, hash_pass, DigestError, DigestSet, HashMethod, MAX_ATTEMPTS,
};
use proptest::prelude::*;

type TestResult = Result<(), Box<dyn std::error::Error>>;

/// A source whose contents are regenerated on every rewind, as if another
/// process were writing to it between passes.
struct Rewritten<F: FnMut(usize) -> Vec<u8>> {
    generate: F,
    rewinds: Rc<Cell<usize>>,
    current: Cursor<Vec<u8>>,
}

impl<F: FnMut(usize) -> Vec<u8>> Rewritten<F> {
    fn new(generate: F) -> (Self, Rc<Cell<usize>>) {
        let rewinds = Rc::new(Cell::new(0));
        let source = Self {
            generate,
            rewinds: Rc::clone(&rewinds),
            current: Cursor::new(Vec::new()),
        };
        (source, rewinds)
    }
}

impl<F: FnMut(usize) -> Vec<u8>> Read for Rewritten<F> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.current.read(buf)
    }
}

impl<F: FnMut(usize) -> Vec<u8>> Seek for Rewritten<F> {
    fn seek(&mut self, pos: SeekFrom) -> io::Result<u64> {
        if pos == SeekFrom::Start(0) {
            let pass = self.rewinds.get() + 1;
            self.rewinds.set(pass);
            self.current = Cursor::new((self.generate)(pass));
        }
        self.current.seek(pos)
    }
}

/// Yields `good` bytes and then fails.
struct FailsAfter {
    good: usize,
    served: usize,
}

impl Read for FailsAfter {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.served >= self.good {
            return Err(io::Error::other("device went away"));
        }
        let n = buf.len().min(self.good - self.served);
        buf[..n].fill(0xAB);
        self.served += n;
        Ok(n)
    }
}

impl Seek for FailsAfter {
    fn seek(&mut self, _: SeekFrom) -> io::Result<u64> {
        self.served = 0;
        Ok(0)
    }
}

#[test]
fn known_digests_of_test() -> TestResult {
    let mut source = Cursor::new(b"test".to_vec());
    let confirmed = convergent_hash(&mut source, &DigestSet::file_default(), MAX_ATTEMPTS)?;
    assert_eq!(confirmed.byte_count(), 4);
    let expected = [
        (HashMethod::Md5, "098F6BCD4621D373CADE4E832627B4F6"),
        (HashMethod::Sha1, "A94A8FE5CCB19BA61C4C0873D391E987982FBBD3"),
        (
            HashMethod::Sha256,
            "9F86D081884C7D659A2FEAA0C55AD015A3BF4F1B2B0B822CD15D6C15B0F00A08",
        ),
        (
            HashMethod::Sha3_256,
            "36F028580BB02CC8272A9A020F4200E346E276AE664E45EE80745574E2F5AB80",
        ),
        (
            HashMethod::Sha3_512,
            "9ECE086E9BAC491FAC5C1D1046CA11D737B92A2B2EBD93F005D7B710110C0A678288166E7FBE796883A4F2E9B3CA9F484F521D0CE464345CC1AEC96779149C14",
        ),
        (
            HashMethod::Sha512,
            "EE26B0DD4AF7E749AA1A8EE3C10AE9923F618980772E473F8819A5D4940E0DB27AC185F8A0E1D5F84F88BC887FD67B143732C304CC5FA9AD8E6F57F50028A8FF",
        ),
    ];
    for (method, hex) in expected {
        assert_eq!(confirmed.hex_upper(method).as_deref(), Some(hex), "{method}");
    }
    assert_eq!(confirmed.iter().count(), expected.len());
    assert_eq!(confirmed.hex_upper(HashMethod::Sha384), None);
    Ok(())
}

#[test]
fn sha384_is_available_on_request() -> TestResult {
    let set = DigestSet::new([HashMethod::Sha384])?;
    let pass = hash_pass(&b"test"[..], &set)?;
    assert_eq!(
        pass.digest(HashMethod::Sha384).map(hex::encode),
        Some(
            "768412320f7b0aa5812fce428dc4706b3cae50e02a64caa16a782249bfe8efc4b7ef1ccb126255d196047dfedf17a0a9"
                .to_owned()
        )
    );
    Ok(())
}

#[test]
fn stable_source_takes_two_passes() -> TestResult {
    let (mut source, rewinds) = Rewritten::new(|_| b"stable bytes".to_vec());
    let confirmed = convergent_hash(&mut source, &DigestSet::file_default(), MAX_ATTEMPTS)?;
    assert_eq!(rewinds.get(), 2);
    assert_eq!(confirmed.byte_count(), 12);
    Ok(())
}

#[test]
fn source_changing_every_pass_fails_after_the_bound() {
    let (mut source, rewinds) = Rewritten::new(|pass| format!("generation {pass}").into_bytes());
    let result = convergent_hash(&mut source, &DigestSet::file_default(), MAX_ATTEMPTS);
    assert!(matches!(
        result,
        Err(DigestError::HashConfirmationFailed { attempts: 4 })
    ));
    assert_eq!(rewinds.get(), MAX_ATTEMPTS);
}

#[test]
fn a_source_that_settles_is_reported_in_its_settled_state() -> TestResult {
    let (mut source, rewinds) = Rewritten::new(|pass| {
        if pass == 1 {
            b"half-written".to_vec()
        } else {
            b"fully written contents".to_vec()
        }
    });
    let confirmed = convergent_hash(&mut source, &DigestSet::file_default(), MAX_ATTEMPTS)?;
    assert_eq!(rewinds.get(), 3);
    assert_eq!(confirmed.byte_count(), 22);
    Ok(())
}

#[test]
fn growth_alone_defeats_confirmation_even_without_digests() {
    // With no digests requested the byte count is still compared.
    let (mut source, _) = Rewritten::new(|pass| vec![0; pass]);
    let result = convergent_hash(&mut source, &DigestSet::default(), MAX_ATTEMPTS);
    assert!(matches!(
        result,
        Err(DigestError::HashConfirmationFailed { .. })
    ));
}

#[test]
fn read_error_aborts_without_retrying() {
    let mut source = FailsAfter { good: 10, served: 0 };
    let result = convergent_hash(&mut source, &DigestSet::file_default(), MAX_ATTEMPTS);
    assert!(matches!(result, Err(DigestError::Io(ref e)) if e.kind() == io::ErrorKind::Other));
}

#[test]
fn hash_file_matches_a_single_pass() -> TestResult {
    let dir = tempfile::tempdir()?;
    let path = dir.path().join("sample.bin");
    let contents: Vec<u8> = (0..100_000_u32).map(|i| (i % 251) as u8).collect();
    std::fs::write(&path, &contents)?;

    let set = DigestSet::file_default();
    let confirmed = hash_file(&path, &set, MAX_ATTEMPTS)?;
    let pass = hash_pass(contents.as_slice(), &set)?;
    assert_eq!(confirmed.byte_count(), pass.byte_count());
    for method in set.methods() {
        assert_eq!(confirmed.digest(*method), pass.digest(*method));
    }
    Ok(())
}

#[test]
fn empty_file_hashes_to_empty_digests() -> TestResult {
    let file = tempfile::NamedTempFile::new()?;
    let confirmed = hash_file(file.path(), &DigestSet::file_default(), MAX_ATTEMPTS)?;
    assert_eq!(confirmed.byte_count(), 0);
    assert_eq!(
        confirmed.hex_upper(HashMethod::Md5).as_deref(),
        Some("D41D8CD98F00B204E9800998ECF8427E")
    );
    Ok(())
}

/// Collects formatted log output for inspection.
#[cfg(target_os = "linux")]
#[derive(Clone, Default)]
struct LogSink(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

#[cfg(target_os = "linux")]
impl io::Write for LogSink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("log sink poisoned"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// procfs files report a length of zero but read back real content.
#[cfg(target_os = "linux")]
#[test]
fn size_mismatch_warns_and_keeps_the_result() -> TestResult {
    let path = std::path::Path::new("/proc/version");
    assert_eq!(std::fs::metadata(path)?.len(), 0);

    let sink = LogSink::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::WARN)
        .with_ansi(false)
        .finish();
    let hashes = tracing::subscriber::with_default(subscriber, || {
        hash_file(path, &DigestSet::file_default(), MAX_ATTEMPTS)
    })?;
    assert!(hashes.byte_count() > 0);

    let logs = sink.0.lock().map_err(|_| "log sink poisoned")?.clone();
    let logs = String::from_utf8(logs)?;
    assert!(logs.contains("file size in metadata differs from bytes hashed"), "{logs}");
    assert!(logs.contains("metadata_len=0"), "{logs}");
    Ok(())
}

#[test]
fn missing_file_is_an_io_error() -> TestResult {
    let dir = tempfile::tempdir()?;
    let result = hash_file(&dir.path().join("absent"), &DigestSet::file_default(), MAX_ATTEMPTS);
    assert!(matches!(result, Err(DigestError::Io(ref e)) if e.kind() == io::ErrorKind::NotFound));
    Ok(())
}

proptest! {
    #[test]
    fn chunking_does_not_change_digests(data in proptest::collection::vec(any::<u8>(), 0..4096), split in 0_usize..4096) {
        let set = DigestSet::file_default();
        let whole = hash_pass(data.as_slice(), &set).map_err(|e| TestCaseError::fail(e.to_string()))?;
        let split = split.min(data.len());
        let (head, tail) = data.split_at(split);
        let chained = hash_pass(head.chain(tail), &set).map_err(|e| TestCaseError::fail(e.to_string()))?;
        prop_assert_eq!(whole, chained);
    }
}
