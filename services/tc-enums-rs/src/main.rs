mod config;

use anyhow::bail;
use clap::Parser;
use std::io::Write;
use tc_enums::{Canonical, EnumKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{Config, OutputFormat};

// ── Arguments ─────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(name = "tc-enums")]
#[command(about = "Canonicalize traffic control enumeration values")]
struct Args {
    /// Enumeration: cache-type, cache-status, ds-type, ds-type-category,
    /// ds-match-type, deep-caching-type
    kind: EnumKind,

    /// Values to canonicalize
    #[arg(required = true)]
    values: Vec<String>,

    /// Output format, overrides TC_ENUMS_OUTPUT
    #[arg(short, long, value_enum)]
    output: Option<OutputFormat>,

    /// Fail if any value is invalid (also enabled by TC_ENUMS_STRICT=true)
    #[arg(short, long)]
    strict: bool,
}

impl Args {
    /// Flags win over the environment.
    fn apply(&self, config: Config) -> Config {
        Config {
            output: self.output.unwrap_or(config.output),
            strict: self.strict || config.strict,
        }
    }
}

// ── Run ───────────────────────────────────────────────────────────────────────

fn write_result(out: &mut impl Write, format: OutputFormat, result: &Canonical) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}\t{}", result.input, result.canonical)?,
        OutputFormat::Json => writeln!(out, "{}", serde_json::to_string(result)?)?,
    }
    Ok(())
}

/// Write one line per value. In strict mode, fails after everything is written.
fn run(kind: EnumKind, values: &[String], config: &Config, out: &mut impl Write) -> anyhow::Result<()> {
    let mut invalid = 0usize;
    for value in values {
        let result = kind.canonicalize(value);
        if !result.valid {
            invalid += 1;
            tracing::warn!(kind = %kind, input = %value, "not a valid value");
        }
        write_result(out, config.output, &result)?;
    }
    out.flush()?;

    tracing::info!(kind = %kind, total = values.len(), invalid, "canonicalized values");
    if config.strict && invalid > 0 {
        bail!("{invalid} of {} {kind} values were invalid", values.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    // Tracing
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = args.apply(Config::from_env()?);
    tracing::debug!(output = ?config.output, strict = config.strict, "starting tc-enums");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    run(args.kind, &args.values, &config, &mut out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(vs: &[&str]) -> Vec<String> {
        vs.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn text_output_is_input_tab_canonical() {
        let mut out = Vec::new();
        run(
            EnumKind::CacheType,
            &values(&["edge1", "bogus", "Mid"]),
            &Config::default(),
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "edge1\tEDGE\nbogus\tINVALIDCACHETYPE\nMid\tMID\n"
        );
    }

    #[test]
    fn json_output_is_one_object_per_line() {
        let config = Config {
            output: OutputFormat::Json,
            strict: false,
        };
        let mut out = Vec::new();
        run(EnumKind::DsType, &values(&["http_live", "http-live"]), &config, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0]["canonical"], "HTTP_LIVE");
        assert_eq!(lines[0]["valid"], true);
        assert_eq!(lines[1]["kind"], "ds-type");
        assert_eq!(lines[1]["canonical"], "INVALID");
        assert_eq!(lines[1]["valid"], false);
    }

    #[test]
    fn strict_fails_after_printing_everything() {
        let config = Config {
            output: OutputFormat::Text,
            strict: true,
        };
        let mut out = Vec::new();
        let err = run(
            EnumKind::CacheStatus,
            &values(&["admin_down", "sideways"]),
            &config,
            &mut out,
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "1 of 2 cache-status values were invalid");
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "admin_down\tADMIN_DOWN\nsideways\tINVALIDCACHESTATUS\n"
        );
    }

    #[test]
    fn strict_passes_when_all_valid() {
        let config = Config {
            output: OutputFormat::Text,
            strict: true,
        };
        let mut out = Vec::new();
        run(EnumKind::DeepCachingType, &values(&["always", ""]), &config, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "always\tALWAYS\n\tNEVER\n");
    }

    #[test]
    fn missing_values_or_unknown_kind_is_a_usage_error() {
        assert!(Args::try_parse_from(["tc-enums"]).is_err());
        assert!(Args::try_parse_from(["tc-enums", "ds-type"]).is_err());
        assert!(Args::try_parse_from(["tc-enums", "dstype", "HTTP"]).is_err());
    }

    #[test]
    fn flags_override_environment() {
        let args =
            Args::try_parse_from(["tc-enums", "DS_MATCH_TYPE", "--output", "json", "host_regexp"])
                .unwrap();
        assert_eq!(args.kind, EnumKind::DsMatchType);
        assert_eq!(args.values, vec!["host_regexp".to_string()]);

        let env = Config {
            output: OutputFormat::Text,
            strict: true,
        };
        let config = args.apply(env);
        assert_eq!(config.output, OutputFormat::Json);
        assert!(config.strict);
    }
}
