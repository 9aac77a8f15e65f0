use std::io::Read;
use std::time::Duration;

use anyhow::Context;
use mg_config::MindGuardConfig;
use mg_core::{AnalysisResponse, AssessmentRequest};
use mg_gateway::AnalysisGateway;

use crate::bootstrap;
use crate::cli::root_commands::AnalyzeArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::dashboard::{DashboardView, text};
use crate::output;
use crate::progress::Progress;
use crate::status::{STATUS_MESSAGES, StatusTicker};

/// How often the spinner message is refreshed from the ticker.
const REFRESH: Duration = Duration::from_millis(200);

/// Handle `mindguard analyze`.
pub async fn handle(
    args: &AnalyzeArgs,
    config: &MindGuardConfig,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let request = parse_request(&read_input(args)?)?;
    let gateway = bootstrap::build_gateway(config)?;
    let report = analyze_with_status(gateway.as_ref(), &request, config.ui.status_interval()).await?;
    println!("{}", render_report(&report, flags.format)?);
    Ok(())
}

fn read_input(args: &AnalyzeArgs) -> anyhow::Result<String> {
    if args.reads_stdin() {
        let mut raw = String::new();
        std::io::stdin()
            .read_to_string(&mut raw)
            .context("failed to read assessment from stdin")?;
        return Ok(raw);
    }

    std::fs::read_to_string(&args.input)
        .with_context(|| format!("failed to read assessment from {}", args.input.display()))
}

/// Decode and validate an assessment request document.
fn parse_request(raw: &str) -> anyhow::Result<AssessmentRequest> {
    let request: AssessmentRequest =
        serde_json::from_str(raw).context("input is not a valid assessment request")?;
    request.validate()?;
    Ok(request)
}

/// Run one analysis while a spinner cycles the status messages.
async fn analyze_with_status(
    gateway: &dyn AnalysisGateway,
    request: &AssessmentRequest,
    status_interval: Duration,
) -> anyhow::Result<AnalysisResponse> {
    let progress = Progress::spinner(STATUS_MESSAGES[0]);
    let ticker = StatusTicker::start(status_interval);
    let mut refresh = tokio::time::interval(REFRESH);

    let analysis = gateway.analyze(request);
    tokio::pin!(analysis);

    let result = loop {
        tokio::select! {
            result = &mut analysis => break result,
            _ = refresh.tick() => progress.set_message(ticker.message()),
        }
    };

    match result {
        Ok(report) => {
            progress.finish_clear();
            tracing::info!(
                gateway = gateway.name(),
                level = %report.stress_analysis.stress_level,
                "analysis complete"
            );
            Ok(report)
        }
        Err(error) => {
            progress.finish_err("Analysis failed");
            tracing::warn!(
                gateway = gateway.name(),
                transient = error.is_transient(),
                %error,
                "analysis failed"
            );
            Err(anyhow::Error::new(error).context("analysis failed"))
        }
    }
}

fn render_report(report: &AnalysisResponse, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Text => Ok(text::render(&DashboardView::from_report(report))),
        OutputFormat::Json | OutputFormat::Raw => output::render(report, format),
    }
}
