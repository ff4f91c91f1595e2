// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! CLI entry point for `case-uuid`.

use anyhow::Result;
use case_cli::entrypoint;

fn main() -> Result<()> {
    entrypoint()
}
