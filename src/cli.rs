// src/cli.rs
use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;

use crate::{
    config::{
        consts::{API_KEY_ENV, API_KEY_FILENAME, API_URL_ENV},
        options::{ApiOptions, AppOptions, ColumnPolicy, ExportOptions, ReportKind},
    },
    core::net::HttpTransport,
    key_store::KeyStore,
    progress::Progress,
    request::ReportRequest,
    runner,
};

/// Download an ARC RMS Research Office report and export it to CSV.
#[derive(Parser, Debug)]
#[command(name = "rms_export_cli", version, about, long_about = None)]
pub struct Cli {
    /// Report to download (UnsuccessfulFeedback, IneligibleProposals,
    /// FundingDetailsForSuccessfulProposals)
    #[arg(short, long, required_unless_present = "list_reports")]
    pub report: Option<ReportKind>,

    /// Scheme round, e.g. DP25
    #[arg(short = 's', long = "round", required_unless_present = "list_reports")]
    pub scheme_round: Option<String>,

    /// API key; falls back to the saved key file
    #[arg(short = 'k', long, env = API_KEY_ENV, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Output CSV path [default: <Report>_<round>.csv]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Fail instead of padding when records produce different columns
    #[arg(long)]
    pub strict_columns: bool,

    /// Save the API key used for this run to the key file
    #[arg(long)]
    pub save_key: bool,

    /// Override the API base URL
    #[arg(long, env = API_URL_ENV)]
    pub base_url: Option<String>,

    /// Where the API key is saved
    #[arg(long, default_value = API_KEY_FILENAME)]
    pub key_file: PathBuf,

    /// Print the known report names and exit
    #[arg(long)]
    pub list_reports: bool,
}

impl Cli {
    pub fn app_options(&self) -> AppOptions {
        let api = match &self.base_url {
            Some(url) if !url.trim().is_empty() => ApiOptions { base_url: s!(url.trim()) },
            _ => ApiOptions::default(),
        };
        let export = ExportOptions {
            column_policy: if self.strict_columns { ColumnPolicy::Strict } else { ColumnPolicy::Union },
            out_path: self.out.clone(),
        };
        AppOptions { api, export }
    }

    /// Explicit key wins; otherwise whatever the key file holds.
    pub fn request(&self, store: &KeyStore) -> Result<ReportRequest> {
        let api_key = self.api_key.clone().or_else(|| store.load()).unwrap_or_default();
        let request = ReportRequest::new(
            self.report.unwrap_or_default(),
            self.scheme_round.as_deref().unwrap_or_default(),
            &api_key,
        )?;
        Ok(request)
    }
}

/// Prints stage changes to stderr; stdout carries only the result line.
#[derive(Default)]
struct CliProgress {
    total: usize,
    done: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Received {} record(s)", total);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{}", msg);
    }
    fn item_done(&mut self, _index: usize) {
        self.done += 1;
    }
    fn finish(&mut self) {
        if self.total > 0 {
            eprintln!("Flattened {}/{} record(s)", self.done, self.total);
        }
    }
}

pub fn run() -> Result<()> {
    execute(Cli::parse())
}

pub fn execute(cli: Cli) -> Result<()> {
    if cli.list_reports {
        for kind in ReportKind::ALL {
            println!("{}", kind);
        }
        return Ok(());
    }

    let store = KeyStore::new(&cli.key_file);
    let request = cli.request(&store)?;

    if cli.save_key {
        let path = store.save(request.api_key())?;
        eprintln!("Key saved to file {}", path.display());
    }

    let options = cli.app_options();
    let out = options.export.out_path_for(request.report(), request.scheme_round());
    let transport = HttpTransport::new()?;

    let mut progress = CliProgress::default();
    let sum = runner::run(&transport, &options, &request, &out, Some(&mut progress))?;

    println!(
        "Download complete! {} row(s) saved to {}",
        sum.export.row_count,
        sum.export.path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rms_export_cli").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn parses_full_invocation() {
        let cli = parse(&[
            "--report", "fundingdetailsforsuccessfulproposals",
            "--round", "DP25",
            "--api-key", "k",
            "--out", "funding.csv",
            "--strict-columns",
            "--base-url", "http://localhost:9000/api",
        ]);
        assert_eq!(cli.report, Some(ReportKind::FundingDetailsForSuccessfulProposals));
        let opts = cli.app_options();
        assert_eq!(opts.export.column_policy, ColumnPolicy::Strict);
        assert_eq!(opts.export.out_path, Some(PathBuf::from("funding.csv")));
        assert_eq!(opts.api.base_url, "http://localhost:9000/api");
    }

    #[test]
    fn report_and_round_required_unless_listing() {
        assert!(Cli::try_parse_from(["rms_export_cli", "--round", "DP25"]).is_err());
        let cli = parse(&["--list-reports"]);
        assert!(cli.list_reports);
    }

    #[test]
    fn unknown_report_is_rejected() {
        assert!(Cli::try_parse_from(["rms_export_cli", "-r", "Nope", "-s", "DP25"]).is_err());
    }

    #[test]
    fn key_falls_back_to_key_file() {
        let dir = tempfile::tempdir().unwrap();
        let store = KeyStore::new(dir.path().join("key"));
        store.save("from-file").unwrap();

        let cli = Cli {
            report: Some(ReportKind::IneligibleProposals),
            scheme_round: Some(s!("DP25")),
            api_key: None,
            out: None,
            strict_columns: false,
            save_key: false,
            base_url: None,
            key_file: store.path().to_path_buf(),
            list_reports: false,
        };
        assert_eq!(cli.request(&store).unwrap().api_key(), "from-file");
    }
}
