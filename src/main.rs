// src/main.rs
use anyhow::Context;
use atrust_client::config;
use atrust_client::models::{MediaKind, SubmissionPayload};
use atrust_client::report::{DisplayModel, ReportView, display_for};
use atrust_client::services::ScanClient;
use atrust_client::session::SubmissionSession;
use log::info;
use std::path::Path;

const USAGE: &str = "Usage: atrust-client <video|audio|image> <file>\n       atrust-client text <text to scan>";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let mut args = std::env::args().skip(1);
    let kind = match args.next().map(|raw| raw.parse::<MediaKind>()) {
        Some(Ok(kind)) => kind,
        Some(Err(err)) => {
            eprintln!("{}\n{}", err, USAGE);
            std::process::exit(2);
        }
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    };
    let rest: Vec<String> = args.collect();

    let base_url = config::api_base_url();
    info!("Using backend at {}", base_url);

    let client = ScanClient::new(base_url);
    let mut session = SubmissionSession::new();
    session.select(kind);

    if kind.wants_file() {
        if let Some(path) = rest.first() {
            let path = Path::new(path);
            let data = std::fs::read(path)
                .with_context(|| format!("Failed to read {}", path.display()))?;
            let filename = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| "upload".to_string());
            session.set_payload(SubmissionPayload::file(
                filename,
                guess_content_type(path),
                data,
            ));
        }
    } else if !rest.is_empty() {
        session.set_payload(SubmissionPayload::text(rest.join(" ")));
    }

    let session_kind = session.kind();
    let state = session.submit(&client).await;

    match display_for(state, session_kind) {
        Some(DisplayModel::Report(view)) => print_report(&view),
        Some(DisplayModel::Error(err)) => {
            eprintln!("{}", err.message);
            eprintln!("{}", config::connectivity_hint(base_url));
            std::process::exit(1);
        }
        _ => {}
    }

    Ok(())
}

fn print_report(view: &ReportView) {
    let verdict = if view.favorable {
        "favorable"
    } else {
        "unfavorable"
    };
    println!("Trust score: {:.0}% ({})", view.score_percent, verdict);
    println!("Risk level:  {}", view.risk_label);
    println!("Action:      {}", view.recommendation);

    if !view.flags.is_empty() {
        println!("Flags:       {}", view.flags.join(", "));
    }
    if !view.metrics.is_empty() {
        println!("Breakdown:");
        for metric in &view.metrics {
            println!("  {:<24} {:>5.1}%", metric.label, metric.percent);
        }
    }
    if !view.keywords.is_empty() {
        println!("Keywords:    {}", view.keywords.join(", "));
    }
}

fn guess_content_type(path: &Path) -> &'static str {
    match path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
        .as_deref()
    {
        Some("mp4" | "m4v") => "video/mp4",
        Some("mov") => "video/quicktime",
        Some("webm") => "video/webm",
        Some("mp3") => "audio/mpeg",
        Some("wav") => "audio/wav",
        Some("flac") => "audio/flac",
        Some("ogg") => "audio/ogg",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        _ => "application/octet-stream",
    }
}
