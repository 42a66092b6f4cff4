use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use scp_ecg::commands::{
    export_command, info_command, init_config_command, list_leads_command, patient_command,
    plot_command,
};

/// Fixed-layout SCP-ECG decoder CLI.
///
/// This CLI is a thin wrapper around `scp-core` (exposed in code as `scp_core`).
/// All decoding logic lives in the library so it can be tested thoroughly
/// and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "scp-ecg",
    version,
    about = "Decode patient text and 12-lead waveforms from SCP-ECG recordings",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the patient name and id found in a recording.
    Patient {
        /// Path to the recording file.
        #[arg(long)]
        file: String,

        /// Optional decoder config (json/yaml). Defaults to the device layout.
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Export all twelve leads as a comma-separated table.
    ///
    /// Without `--output`, the table is written to `<out-dir>/<first name>.csv`
    /// (or `Patient.csv` when no patient was recovered).
    Export {
        /// Path to the recording file.
        #[arg(long)]
        file: String,

        /// Optional decoder config (json/yaml).
        #[arg(long)]
        config: Option<String>,

        /// Explicit output file path.
        #[arg(long)]
        output: Option<String>,

        /// Directory for the default `<first name>.csv` file name.
        #[arg(long)]
        out_dir: Option<String>,

        /// Print the table to stdout instead of writing a file.
        #[arg(long, default_value_t = false)]
        stdout: bool,
    },

    /// List the twelve leads in display order.
    Leads {
        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Emit one lead as a JSON series for plotting.
    Plot {
        /// Path to the recording file.
        #[arg(long)]
        file: String,

        /// Optional decoder config (json/yaml).
        #[arg(long)]
        config: Option<String>,

        /// Lead name or label (e.g. `aVR` or `Lead aVR`).
        #[arg(long)]
        lead: String,
    },

    /// Show file facts, patient outcome and per-lead statistics.
    Info {
        /// Path to the recording file.
        #[arg(long)]
        file: String,

        /// Optional decoder config (json/yaml).
        #[arg(long)]
        config: Option<String>,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },

    /// Write the default decoder config to a file.
    InitConfig {
        /// Destination path for the JSON config.
        #[arg(long, default_value = "scp-decoder.json")]
        output: String,

        /// Overwrite an existing file.
        #[arg(long, default_value_t = false)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new().filter_level(log_level).format_timestamp(None).init();

    match cli.command {
        Command::Patient { file, config, json } => {
            patient_command(&file, config.as_deref(), json)?
        }
        Command::Export { file, config, output, out_dir, stdout } => {
            let config = config.as_deref();
            export_command(&file, config, output.as_deref(), out_dir.as_deref(), stdout)?;
        }
        Command::Leads { json } => list_leads_command(json)?,
        Command::Plot { file, config, lead } => plot_command(&file, config.as_deref(), &lead)?,
        Command::Info { file, config, json } => info_command(&file, config.as_deref(), json)?,
        Command::InitConfig { output, force } => {
            init_config_command(&output, force)?;
        }
    }

    Ok(())
}
