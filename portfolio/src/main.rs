//! Portfolio command line.
//!
//! Drives the project listing and the contact form pipelines from a terminal.
//! Configuration is read from `portfolio.toml` in the working directory unless
//! `--config` points elsewhere.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};

use portfolio::contact::{SubmitReport, submit};
use portfolio::core::catalog::{shows_read_more, truncated_description};
use portfolio::core::form::{FieldErrors, FormState, validate};
use portfolio::core::submission::{ContactForm, Notification};
use portfolio::exit_codes;
use portfolio::io::catalog_store::{load_bundled, load_projects};
use portfolio::io::config::{
    ContactConfig, DEFAULT_CONFIG_FILE, PortfolioConfig, load_config, write_config,
};
use portfolio::io::transport::WebhookTransport;
use portfolio::listing::{ListingPage, ProjectListing};
use portfolio::logging;

#[derive(Parser)]
#[command(
    name = "portfolio",
    version,
    about = "Portfolio contact form and project listing"
)]
struct Cli {
    /// Path to the TOML config file.
    #[arg(long, global = true, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print one page of the project list.
    Projects {
        /// Page number (1-based).
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Output machine-readable JSON.
        #[arg(long)]
        json: bool,
    },
    /// Validate contact form values without sending them.
    Validate(FormArgs),
    /// Validate and send a contact message to the configured webhook.
    Contact(FormArgs),
    /// Write a `portfolio.toml` at the `--config` path.
    Init {
        /// Webhook that receives contact submissions.
        #[arg(long)]
        webhook_url: Option<String>,
        /// Request timeout in seconds.
        #[arg(long)]
        timeout_secs: Option<u64>,
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
    /// Check a project data file against the schema and invariants.
    CheckData {
        /// File to check (defaults to the configured or bundled list).
        #[arg(long)]
        path: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Clone)]
struct FormArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

impl FormArgs {
    fn into_form(self) -> FormState {
        FormState::new(self.name, self.email, self.message)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    logging::init();
    let code = match run().await {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

async fn run() -> Result<i32> {
    let cli = Cli::parse();
    match cli.command {
        Command::Init {
            webhook_url,
            timeout_secs,
            force,
        } => cmd_init(&cli.config, webhook_url, timeout_secs, force),
        command => {
            let cfg = load_config(&cli.config)?;
            run_configured(&cfg, command).await
        }
    }
}

async fn run_configured(cfg: &PortfolioConfig, command: Command) -> Result<i32> {
    match command {
        Command::Projects { page, json } => cmd_projects(cfg, page, json),
        Command::Validate(args) => Ok(cmd_validate(args.into_form())),
        Command::Contact(args) => cmd_contact(cfg, args.into_form()).await,
        Command::CheckData { path } => cmd_check_data(cfg, path),
        Command::Init { .. } => bail!("init does not read an existing config"),
    }
}

fn cmd_init(
    path: &Path,
    webhook_url: Option<String>,
    timeout_secs: Option<u64>,
    force: bool,
) -> Result<i32> {
    if !force && path.exists() {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    let cfg = PortfolioConfig {
        contact: ContactConfig {
            webhook_url,
            timeout_secs,
        },
        ..PortfolioConfig::default()
    };
    write_config(path, &cfg)?;
    println!("wrote {}", path.display());
    Ok(exit_codes::OK)
}

fn cmd_projects(cfg: &PortfolioConfig, page: usize, json: bool) -> Result<i32> {
    let mut listing = ProjectListing::mount(cfg.projects.data_path.as_deref());
    listing.set_page(page);
    let snapshot = listing.snapshot();
    if json {
        let payload = serde_json::to_string_pretty(&snapshot).context("serialize listing")?;
        println!("{}", payload);
    } else {
        print!("{}", render_page(&snapshot));
    }
    Ok(exit_codes::OK)
}

fn cmd_validate(form: FormState) -> i32 {
    let errors = validate(&form);
    if errors.is_empty() {
        println!("ok");
        return exit_codes::OK;
    }
    print!("{}", render_errors(&errors));
    exit_codes::BLOCKED
}

async fn cmd_contact(cfg: &PortfolioConfig, values: FormState) -> Result<i32> {
    let mut form = ContactForm::with_values(values);
    // Field errors take precedence over a missing or broken webhook.
    let errors = validate(form.form());
    if !errors.is_empty() {
        print!("{}", render_errors(&errors));
        return Ok(exit_codes::BLOCKED);
    }
    let transport = WebhookTransport::from_config(&cfg.contact)?;
    match submit(&mut form, &transport).await {
        SubmitReport::Blocked(errors) => {
            print!("{}", render_errors(&errors));
            Ok(exit_codes::BLOCKED)
        }
        SubmitReport::AlreadySending => bail!("a submission is already in flight"),
        SubmitReport::Settled(notification) => {
            println!("{}", render_notification(&notification));
            if notification.is_success() {
                Ok(exit_codes::OK)
            } else {
                Ok(exit_codes::FAILED)
            }
        }
    }
}

fn cmd_check_data(cfg: &PortfolioConfig, path: Option<PathBuf>) -> Result<i32> {
    let path = path.or_else(|| cfg.projects.data_path.clone());
    let projects = match &path {
        Some(path) => load_projects(path)?,
        None => load_bundled()?,
    };
    println!("ok: {} projects", projects.len());
    Ok(exit_codes::OK)
}

fn render_page(snapshot: &ListingPage) -> String {
    let mut out = format!(
        "Page {} of {} ({} projects)\n",
        snapshot.page, snapshot.total_pages, snapshot.total_records
    );
    if snapshot.projects.is_empty() {
        out.push_str("(no projects on this page)\n");
    }
    for project in &snapshot.projects {
        out.push_str(&format!("\n{}\n", project.title));
        out.push_str(&format!("  {}\n", truncated_description(&project.description)));
        if shows_read_more(&project.description) {
            out.push_str("  (full description available)\n");
        }
        out.push_str(&format!("  tech: {}\n", project.tech.join(", ")));
        out.push_str(&format!("  repo: {}\n", project.repository_link));
        out.push_str(&format!("  demo: {}\n", project.demo_link));
    }
    if let Some(controls) = &snapshot.controls {
        let buttons: Vec<String> = controls
            .iter()
            .map(|button| {
                if button.active {
                    format!("[{}]", button.number)
                } else {
                    button.number.to_string()
                }
            })
            .collect();
        out.push_str(&format!("\nPages: {}\n", buttons.join(" ")));
    }
    out
}

fn render_errors(errors: &FieldErrors) -> String {
    errors
        .iter()
        .map(|(field, message)| format!("{}: {}\n", field.label(), message))
        .collect()
}

fn render_notification(notification: &Notification) -> String {
    format!("{}: {}", notification.title, notification.description)
}
