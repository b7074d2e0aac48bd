use clap::Parser;
use fastq_header_fix::{ErrorPolicy, FixConfig, FixOptions, fix};
use std::path::PathBuf;
use std::process::ExitCode;

/// Remove every space from the read names of an Ultraplex-demultiplexed FASTQ file.
///
/// Writes <name>_fixed.<ext> into the current directory unless it already exists.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
struct Args {
    /// Input FASTQ (.fastq.gz or .fq.gz) whose read names have to be fixed
    #[arg(value_name = "INPUT_FASTQ")]
    input_fastq: PathBuf,

    /// Fail on a truncated trailing record instead of dropping it with a warning
    #[arg(long)]
    strict: bool,
}

impl Args {
    fn into_config(self) -> FixConfig {
        let error_policy = if self.strict {
            ErrorPolicy::Return
        } else {
            ErrorPolicy::Skip
        };
        FixConfig::new(self.input_fastq).options(FixOptions { error_policy })
    }
}

fn main() -> ExitCode {
    let env = env_logger::Env::default().filter_or("RUST_LOG", "info");
    env_logger::Builder::from_env(env)
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cfg = Args::parse().into_config();
    match fix(&cfg) {
        Ok(_) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            ExitCode::from(err.exit_code())
        }
    }
}
