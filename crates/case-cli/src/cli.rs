// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Argument parsing and subcommand dispatch for `case-uuid`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use case_app_core::config::ConfigService;
use case_app_core::config_port::PrefsPort;
use case_app_core::prefs::{CaseFilePrefs, DEFAULT_BASE_PREFIX};
use case_config_fs::FsConfigStore;
use case_ident::{
    content_uuid, embedded_uuid, facet_iri, inherence_namespace, HashLiteral, HashMethod,
    NonLeafClasses, SchemeVersion,
};
use case_local_uuid::{LocalUuidError, LocalUuidGenerator};
use clap::{Args, Parser, Subcommand};
use tracing::{debug, info};

use crate::characterize::characterize_file;
use crate::graph::{expand, Document};

/// Characterize files as UCO observables and derive CASE identifiers
#[derive(Parser, Debug)]
#[command(name = "case-uuid", version)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Commands,
}

/// `case-uuid` subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Characterize a file and write the graph as JSON-LD
    File(FileArgs),
    /// Print the IRI of a facet of an object
    Facet {
        /// Prefix for the derived IRI
        #[arg(long, default_value = DEFAULT_BASE_PREFIX)]
        base_prefix: String,
        /// Derivation scheme
        #[arg(long, default_value_t = SchemeVersion::V1)]
        scheme: SchemeVersion,
        /// IRI of the object the facet belongs to
        object_iri: String,
        /// Facet class: full IRI, `uco-observable:FileFacet`, or `FileFacet`
        facet_class: String,
    },
    /// Print the UUID of the hash node for a digest
    Hash {
        /// Vocabulary label, e.g. SHA256
        method: HashMethod,
        /// Digest as hex (either case)
        hex: String,
        /// Print `<prefix>Hash-<uuid>` instead of the bare UUID
        #[arg(long)]
        base_prefix: Option<String>,
    },
    /// Print the UUID namespace an IRI induces
    Namespace {
        /// Derivation scheme
        #[arg(long, default_value_t = SchemeVersion::V1)]
        scheme: SchemeVersion,
        /// Print the UUID the IRI ends with, failing if it has none
        #[arg(long)]
        embedded: bool,
        /// Node IRI
        iri: String,
    },
    /// Print freshly minted identifiers, one per line
    Mint {
        /// How many to mint
        #[arg(long, default_value_t = 1)]
        count: usize,
        /// Text to put in front of each identifier
        #[arg(long, default_value = "")]
        prefix: String,
    },
}

/// Arguments to `case-uuid file`.
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Prefix for minted and derived node IRIs
    #[arg(long)]
    pub base_prefix: Option<String>,
    /// Facet derivation scheme
    #[arg(long)]
    pub scheme: Option<SchemeVersion>,
    /// Digest to compute (repeatable); replaces the configured set
    #[arg(long = "hash-method")]
    pub hash_methods: Vec<HashMethod>,
    /// Skip content hashing
    #[arg(long)]
    pub disable_hashes: bool,
    /// Omit the modification time
    #[arg(long)]
    pub disable_mtime: bool,
    /// Use this IRI for the file node instead of minting one
    #[arg(long)]
    pub node_iri: Option<String>,
    /// Read settings from this JSON file instead of the user config directory
    #[arg(long)]
    pub config: Option<PathBuf>,
    /// Output path, or `-` for stdout
    pub out_graph: PathBuf,
    /// File to characterize
    pub in_file: PathBuf,
}

impl FileArgs {
    /// Settings in effect: defaults, then the config store, then flags.
    pub fn resolve_prefs(&self) -> Result<CaseFilePrefs> {
        let stored = match &self.config {
            Some(path) => ConfigService::new(FsConfigStore::file(path))
                .load_prefs()
                .with_context(|| format!("configuration: {}", path.display()))?,
            None => match FsConfigStore::new() {
                Ok(store) => ConfigService::new(store)
                    .load_prefs()
                    .context("configuration: user config directory")?,
                Err(err) => {
                    debug!(%err, "no user config directory; using defaults");
                    CaseFilePrefs::default()
                }
            },
        };
        let prefs = CaseFilePrefs {
            base_prefix: self.base_prefix.clone().unwrap_or(stored.base_prefix),
            scheme: self.scheme.unwrap_or(stored.scheme),
            hash_methods: if self.hash_methods.is_empty() {
                stored.hash_methods
            } else {
                self.hash_methods.clone()
            },
            disable_hashes: self.disable_hashes || stored.disable_hashes,
            disable_mtime: self.disable_mtime || stored.disable_mtime,
            max_attempts: stored.max_attempts,
        };
        prefs.validate().context("configuration")?;
        Ok(prefs)
    }
}

const STDOUT: &str = "output: stdout";

/// Runs `cli`, writing results to `out`.
///
/// `ids` is only called by subcommands that mint identifiers, so a broken
/// generator configuration does not affect pure derivations.
pub fn run<'g, W, G>(cli: Cli, ids: G, out: &mut W) -> Result<()>
where
    W: Write,
    G: FnOnce() -> Result<&'g LocalUuidGenerator, LocalUuidError>,
{
    match cli.command {
        Commands::File(args) => {
            let prefs = args.resolve_prefs()?;
            let node_iri = match &args.node_iri {
                Some(iri) => iri.clone(),
                None => {
                    let ids = ids().context("configuration")?;
                    format!("{}File-{}", prefs.base_prefix, ids.next_id())
                }
            };
            let nodes = characterize_file(&args.in_file, &node_iri, &prefs)?;
            let doc = Document::new(&prefs.base_prefix, nodes);
            if args.out_graph.as_os_str() == "-" {
                serde_json::to_writer_pretty(&mut *out, &doc).context(STDOUT)?;
                writeln!(out).context(STDOUT)?;
            } else {
                write_document(&args.out_graph, &doc)
                    .with_context(|| format!("output: {}", args.out_graph.display()))?;
                info!(path = %args.out_graph.display(), node = %node_iri, "graph written");
            }
        }
        Commands::Facet {
            base_prefix,
            scheme,
            object_iri,
            facet_class,
        } => {
            let iri = facet_iri(
                &object_iri,
                &expand(&facet_class),
                &base_prefix,
                scheme,
                &NonLeafClasses::uco(),
            )
            .context("derivation")?;
            writeln!(out, "{iri}").context(STDOUT)?;
        }
        Commands::Hash {
            method,
            hex,
            base_prefix,
        } => {
            let uuid = content_uuid(method, &HashLiteral::hex_binary(hex)).context("derivation")?;
            let written = match base_prefix {
                Some(base) => writeln!(out, "{base}Hash-{uuid}"),
                None => writeln!(out, "{uuid}"),
            };
            written.context(STDOUT)?;
        }
        Commands::Namespace {
            scheme,
            embedded,
            iri,
        } => {
            let uuid = if embedded {
                embedded_uuid(&iri).context("derivation")?
            } else {
                inherence_namespace(&iri, scheme)
            };
            writeln!(out, "{uuid}").context(STDOUT)?;
        }
        Commands::Mint { count, prefix } => {
            let ids = ids().context("configuration")?;
            for _ in 0..count {
                writeln!(out, "{prefix}{}", ids.next_id()).context(STDOUT)?;
            }
        }
    }
    Ok(())
}

fn write_document(path: &Path, doc: &Document) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, doc)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use case_local_uuid::{DemoContext, LocalUuidConfig};

    fn demo_ids() -> LocalUuidGenerator {
        LocalUuidGenerator::new(LocalUuidConfig::demo(DemoContext::new(
            "~/work",
            vec!["case_file".to_owned(), "out.json".to_owned()],
        )))
    }

    fn parse(args: &[&str]) -> Result<Cli> {
        Ok(Cli::try_parse_from(
            std::iter::once("case-uuid").chain(args.iter().copied()),
        )?)
    }

    fn run_args(args: &[&str]) -> Result<String> {
        let ids = demo_ids();
        let mut out = Vec::new();
        run(parse(args)?, || Ok(&ids), &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn unconfigured() -> Result<&'static LocalUuidGenerator, LocalUuidError> {
        Err(LocalUuidError::Configuration("HOME is not set".to_owned()))
    }

    /// A writer whose reader has gone away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _: &[u8]) -> std::io::Result<usize> {
            Err(std::io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_name_the_output_stage() -> Result<()> {
        let ids = demo_ids();
        let object = "http://example.org/kb/File-ac6b44cf-dc6b-4f2c-a09d-c9beb0a345a9";
        let md5 = "098f6bcd4621d373cade4e832627b4f6";
        let cases: [&[&str]; 5] = [
            &["mint", "--count", "3"],
            &["namespace", object],
            &["facet", object, "FileFacet"],
            &["hash", "--base-prefix", "kb:", "MD5", md5],
            &["hash", "MD5", md5],
        ];
        for args in cases {
            let err = run(parse(args)?, || Ok(&ids), &mut ClosedPipe)
                .err()
                .ok_or_else(|| anyhow::anyhow!("{args:?} wrote to a closed pipe"))?;
            assert_eq!(err.to_string(), STDOUT, "{args:?}");
        }
        Ok(())
    }

    #[test]
    fn derivations_do_not_need_a_generator() -> Result<()> {
        let mut out = Vec::new();
        run(parse(&["namespace", "https://caseontology.org/"])?, unconfigured, &mut out)?;
        assert_eq!(out, b"2c6406b7-3396-5fdd-b9bf-c6e21273e40a\n");
        let err = run(parse(&["mint"])?, unconfigured, &mut out)
            .err()
            .ok_or_else(|| anyhow::anyhow!("mint succeeded without a generator"))?;
        assert_eq!(err.to_string(), "configuration");
        Ok(())
    }

    #[test]
    fn facet_accepts_short_class_names() -> Result<()> {
        let object = "http://example.org/kb/File-ac6b44cf-dc6b-4f2c-a09d-c9beb0a345a9";
        let short = run_args(&["facet", object, "FileFacet"])?;
        let curie = run_args(&["facet", object, "uco-observable:FileFacet"])?;
        assert_eq!(short, curie);
        assert_eq!(
            short.trim(),
            "http://example.org/kb/FileFacet-01d292e3-0f38-5974-868d-006ef07f5186"
        );
        Ok(())
    }

    #[test]
    fn facet_rejects_the_abstract_class() {
        let out = run_args(&["facet", "http://example.org/kb/x", "uco-core:Facet"]);
        assert!(out.is_err_and(|e| e.to_string() == "derivation"));
    }

    #[test]
    fn mint_uses_the_supplied_generator() -> Result<()> {
        let out = run_args(&["mint", "--count", "2", "--prefix", "kb:File-"])?;
        assert_eq!(
            out,
            "kb:File-e04b9af0-57f7-5491-9c9c-399b653ca667\n\
             kb:File-122e77c0-8dc9-5425-af01-63b140855e5d\n"
        );
        Ok(())
    }

    #[test]
    fn flags_override_the_config_file() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("prefs.json");
        std::fs::write(&config, br#"{"scheme":"v2","disable_mtime":true,"base_prefix":"urn:x:"}"#)?;
        let cli = Cli::try_parse_from([
            "case-uuid",
            "file",
            "--config",
            config.to_str().unwrap_or_default(),
            "--scheme",
            "v1",
            "--hash-method",
            "SHA256",
            "out.json",
            "in.txt",
        ])?;
        let Commands::File(args) = cli.command else {
            anyhow::bail!("parsed the wrong subcommand");
        };
        let prefs = args.resolve_prefs()?;
        assert_eq!(prefs.scheme, SchemeVersion::V1);
        assert_eq!(prefs.base_prefix, "urn:x:");
        assert!(prefs.disable_mtime);
        assert_eq!(prefs.hash_methods, vec![HashMethod::Sha256]);
        Ok(())
    }

    #[test]
    fn invalid_config_file_is_a_configuration_error() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let config = dir.path().join("prefs.json");
        std::fs::write(&config, b"{ not json")?;
        let out = run_args(&[
            "file",
            "--config",
            config.to_str().unwrap_or_default(),
            "-",
            "in.txt",
        ]);
        assert!(out.is_err_and(|e| e.to_string().starts_with("configuration:")));
        Ok(())
    }
}
