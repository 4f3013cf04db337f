//! Process command implementation

use crate::config::Config;
use crate::pipeline;
use crate::report::{self, DualSink, ReportSink};
use crate::source::ByteSource;
use anyhow::Context;
use clap::Args;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ProcessArgs {
    /// Path to the binary feed file
    pub input: PathBuf,
}

impl ProcessArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let output_path = report_path(&self.input, &config.report.output_suffix);

        // Sink creation failure surfaces to the interactive sink only; the
        // caller maps it to exit code 1.
        let mut sink = DualSink::create(&output_path)
            .with_context(|| format!("could not create {}", output_path.display()))?;

        // Source failure is mirrored into the report before aborting
        let source = match ByteSource::open(&self.input) {
            Ok(source) => source,
            Err(e) => {
                let _ = sink.write_line(&format!("An error occurred: {e}"));
                return Err(e.into());
            }
        };
        tracing::info!(path = %self.input.display(), bytes = source.len(), "mapped input file");

        let summary = pipeline::run(source.as_bytes());

        for line in report::render(&summary.vwaps, &summary.stats) {
            sink.write_line(&line)?;
        }

        println!("Output has been written to {}", output_path.display());
        Ok(())
    }
}

/// Report file name: input stem + suffix, in the working directory.
fn report_path(input: &Path, suffix: &str) -> PathBuf {
    let stem = input.file_stem().unwrap_or_else(|| OsStr::new("feed"));
    let mut name = stem.to_os_string();
    name.push(suffix);
    PathBuf::from(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_path_from_stem() {
        assert_eq!(
            report_path(Path::new("data/feed01.itch"), "_vwap_output.txt"),
            PathBuf::from("feed01_vwap_output.txt")
        );
        assert_eq!(
            report_path(Path::new("plain"), "_vwap_output.txt"),
            PathBuf::from("plain_vwap_output.txt")
        );
    }
}
