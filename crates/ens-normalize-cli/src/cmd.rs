use crate::{
    args::{Ensn, EnsnSubcommand},
    stdin,
};
use ens_normalize::{NormalizeError, Normalizer, NormalizerConfig, ProcessedName};
use eyre::{Result, WrapErr};
use std::io::Write;

/// Runs the subcommand, writing one result per name to `out`.
///
/// Returns the number of names that failed, including invalid names reported by `inspect`.
pub fn run(args: Ensn, out: &mut impl Write) -> Result<usize> {
    let mut config = NormalizerConfig::load()?;
    if let Some(spec) = args.spec_source() {
        config = config.with_spec(spec);
    }
    let normalizer = Normalizer::from_config(&config).wrap_err("failed to load spec data")?;
    let names = stdin::unwrap_names(args.cmd.names())?;
    run_command(&normalizer, &args.cmd, &names, out)
}

pub fn run_command(
    normalizer: &Normalizer,
    cmd: &EnsnSubcommand,
    names: &[Vec<u8>],
    out: &mut impl Write,
) -> Result<usize> {
    let mut failed = 0;
    for name in names {
        let result = match cmd {
            EnsnSubcommand::Normalize { .. } => {
                normalizer.normalize_bytes(name).map(|name| writeln!(out, "{name}"))
            }
            EnsnSubcommand::Beautify { .. } => {
                normalizer.beautify_bytes(name).map(|name| writeln!(out, "{name}"))
            }
            EnsnSubcommand::Namehash { .. } => std::str::from_utf8(name)
                .map_err(|_| NormalizeError::InvalidUtf8)
                .and_then(|name| normalizer.namehash(name))
                .map(|hash| writeln!(out, "{hash}")),
            EnsnSubcommand::Inspect { json, .. } => match std::str::from_utf8(name) {
                Ok(name) => {
                    let processed = normalizer.process(name);
                    if !processed.is_valid() {
                        failed += 1;
                    }
                    Ok(inspect(&processed, *json, out))
                }
                Err(_) => Err(NormalizeError::InvalidUtf8),
            },
        };
        match result {
            Ok(written) => written?,
            Err(err) => {
                debug!(name = %String::from_utf8_lossy(name), %err, "failed");
                failed += 1;
                writeln!(out, "error: {err}")?;
            }
        }
    }
    Ok(failed)
}

fn inspect(processed: &ProcessedName, json: bool, out: &mut impl Write) -> std::io::Result<()> {
    if json {
        serde_json::to_writer(&mut *out, processed)?;
        return writeln!(out);
    }

    writeln!(out, "{}", processed.input)?;
    for label in &processed.labels {
        write!(out, "  {:>3}  {:?}  ", label.offset, label.input)?;
        match (&label.error, &label.output, &label.label_type) {
            (Some(err), _, _) => writeln!(out, "error: {}", err.message)?,
            (None, Some(output), Some(label_type)) => {
                writeln!(out, "{label_type}  {output}")?;
            }
            _ => writeln!(out)?,
        }
    }
    match processed.beautified() {
        Some(beautified) => writeln!(out, "  => {beautified}"),
        None => Ok(()),
    }
}
