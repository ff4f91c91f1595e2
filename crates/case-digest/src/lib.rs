// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Content hashing for files that may change while they are read.
//!
//! One pass streams the source once through every requested digest. A file is
//! only reported once two consecutive passes agree on every digest and on the
//! byte count; a source that keeps changing fails after a bounded number of
//! passes instead of yielding digests of bytes that never existed together.
//!
//! The retry loop is the generic [`confirm`] combinator, usable for any
//! computation whose result should be observed twice in a row.
//!
//! # Convergence Invariant
//!
//! A [`ConfirmedHashes`] only exists if two consecutive passes produced equal
//! byte counts and equal digests for every requested method. There is no
//! public constructor.
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::dbg_macro,
    clippy::print_stdout,
    clippy::print_stderr
)]
#![allow(
    clippy::must_use_candidate,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate,
    clippy::module_name_repetitions
)]

mod confirm;
mod digests;
mod error;
mod hasher;

pub use case_ident::HashMethod;
pub use confirm::{confirm, ConfirmError};
pub use digests::{ConfirmedHashes, DigestSet, PassDigests};
pub use error::DigestError;
pub use hasher::{convergent_hash, hash_file, hash_pass, CHUNK_SIZE, MAX_ATTEMPTS};
