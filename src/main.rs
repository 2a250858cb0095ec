use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use salary_chat::chat::render::render_message;
use salary_chat::chat::{Message, Section};
use salary_chat::utils::is_accepted_upload;
use salary_chat::{
    load_job_overview, render_overview, BenchmarkPanel, ChatSessionController, ConfigManager,
    SalaryApi, ServiceClient, UploadFile, UploadOutcome,
};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "salary-chat")]
#[command(about = "Chat with the salary intelligence assistant about an analysed job")]
struct Cli {
    /// Base URL of the analysis API (overrides SALARY_API_URL)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Open an interactive chat, optionally bound to a job analysis
    Chat {
        #[arg(long)]
        job: Option<String>,
    },
    /// Upload a job description and print the resulting page location
    Upload { file: PathBuf },
    /// Show the analysis dashboard for a job
    Show { job: String },
    /// Show benchmark details for a job
    Benchmark {
        job: String,
        /// Sections to collapse: benchmark-data, calculation
        #[arg(long)]
        collapse: Vec<Section>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = ConfigManager::load()?;
    if let Some(url) = &cli.api_url {
        config = config.with_api_url(url);
    }
    let api = Arc::new(ServiceClient::new(&config.service)?);
    info!("Salary API: {}", api.base_url());

    match cli.command {
        Command::Chat { job } => {
            let chat = ChatSessionController::new(api, config.timings, job);
            run_chat(chat).await
        }
        Command::Upload { file } => {
            let chat = ChatSessionController::new(api, config.timings, None);
            let upload = UploadFile::from_path(&file).await?;
            match chat.upload_file(Some(upload)).await {
                UploadOutcome::Navigate { target, .. } => {
                    println!("{}", target);
                    Ok(())
                }
                _ => {
                    print_new(&chat.messages(), &mut None);
                    anyhow::bail!("Upload of {} failed", file.display())
                }
            }
        }
        Command::Show { job } => {
            let overview = load_job_overview(api.as_ref(), &job).await?;
            print!("{}", render_overview(&overview));
            Ok(())
        }
        Command::Benchmark { job, collapse } => {
            let mut panel = BenchmarkPanel::new(api, job);
            panel.load().await;
            for section in collapse {
                panel.toggle(section);
            }
            print!("{}", panel.render());
            Ok(())
        }
    }
}

/// Print messages after the last one already shown
fn print_new(messages: &[Message], last_shown: &mut Option<String>) {
    let start = last_shown
        .as_ref()
        .and_then(|id| messages.iter().position(|m| &m.id == id))
        .map(|pos| pos + 1)
        .unwrap_or(0);

    for message in &messages[start..] {
        println!("{}\n", render_message(message));
    }
    if let Some(last) = messages.last() {
        *last_shown = Some(last.id.clone());
    }
}

fn print_help<A: SalaryApi + ?Sized>(chat: &ChatSessionController<A>) {
    println!("Commands: /upload <file>  /quick <n>  /min  /close  /quit");
    for (idx, action) in chat.quick_actions().iter().enumerate() {
        println!("  /quick {}  {}", idx + 1, action);
    }
    println!();
}

async fn pick_file(path: &Path) -> Option<UploadFile> {
    let name = path.to_string_lossy();
    if !is_accepted_upload(&name) {
        warn!("Skipping {}: only PDF, DOCX or TXT files can be picked", name);
        return None;
    }
    match UploadFile::from_path(path).await {
        Ok(file) => Some(file),
        Err(e) => {
            warn!("{:#}", e);
            None
        }
    }
}

async fn run_chat<A: SalaryApi + ?Sized>(chat: ChatSessionController<A>) -> Result<()> {
    let mut last_shown = None;
    chat.open().await;
    println!("== Salary Intelligence Assistant: {} ==\n", chat.title());
    print_new(&chat.messages(), &mut last_shown);
    print_help(&chat);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("Failed to read input")? {
        let line = line.trim_end();

        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/min", _) => {
                chat.toggle_minimized();
                if chat.ui().minimized {
                    println!("(minimized, /min to restore)");
                    continue;
                }
            }
            ("/close", _) => {
                chat.close();
                println!("(closed, press enter to reopen)");
                continue;
            }
            ("/quick", n) => {
                let action = n
                    .trim()
                    .parse::<usize>()
                    .ok()
                    .and_then(|n| chat.quick_actions().get(n.wrapping_sub(1)).copied());
                match action {
                    Some(action) => {
                        chat.quick_action(action).await;
                    }
                    None => print_help(&chat),
                }
            }
            ("/upload", path) => {
                let file = pick_file(Path::new(path.trim())).await;
                if let UploadOutcome::Navigate { target, .. } = chat.upload_file(file).await {
                    println!("-> {}\n", target);
                    last_shown = None;
                    chat.open().await;
                    println!("== Salary Intelligence Assistant: {} ==\n", chat.title());
                }
            }
            _ => {
                if !chat.ui().open {
                    chat.open().await;
                }
                chat.send(line).await;
            }
        }

        if !chat.ui().minimized {
            print_new(&chat.messages(), &mut last_shown);
        }
    }

    Ok(())
}
