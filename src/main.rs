use clap::Parser;
use placement_client::config::cli::{
    Command, InternshipCommand, OfferCommand, ReportCommand, StudentCommand,
};
use placement_client::core::render;
use placement_client::utils::error::ErrorSeverity;
use placement_client::utils::{logger, validation::Validate};
use placement_client::{
    ApiClient, ApiResponse, AppEvent, AppOutcome, CliConfig, ClientSettings, PlacementApi,
    PlacementApp, Result,
};
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, BufReader};

fn print_view<T: Serialize>(raw: bool, value: &T, view: impl FnOnce(&T) -> String) -> Result<()> {
    if raw {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        println!("{}", view(value));
    }
    Ok(())
}

fn print_outcome(raw: bool, outcome: &AppOutcome) -> Result<()> {
    match outcome {
        AppOutcome::Refreshed(snapshot) => print_view(raw, snapshot, |s| {
            format!(
                "{}\n\n{}",
                render::student_list(&s.students),
                render::dashboard(&s.dashboard)
            )
        }),
        AppOutcome::StudentDetail(student) => print_view(raw, student, render::student_detail),
        AppOutcome::DashboardUpdated(summary) => print_view(raw, summary, render::dashboard),
        AppOutcome::ReportAdded(report) => print_view(raw, report, |r| {
            format!(
                "✅ Report {} added to internship {}",
                r.id, r.internship_id
            )
        }),
    }
}

async fn confirm(prompt: &str) -> Result<bool> {
    eprint!("{} [y/N] ", prompt);
    let mut line = String::new();
    BufReader::new(tokio::io::stdin())
        .read_line(&mut line)
        .await?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes"))
}

async fn run(app: &PlacementApp<ApiClient>, command: Command, raw: bool) -> Result<()> {
    let api = app.api();

    match command {
        Command::Start => {
            let snapshot = app.start().await?;
            print_outcome(raw, &AppOutcome::Refreshed(snapshot))?;
        }
        Command::Dashboard => {
            let summary = api.dashboard_summary().await?;
            print_view(raw, &summary, render::dashboard)?;
        }
        Command::Students(command) => match command {
            StudentCommand::List => {
                let students = api.list_students().await?;
                print_view(raw, &students, |s| render::student_list(s))?;
            }
            StudentCommand::Show { id } => {
                let outcome = app.handle(AppEvent::ViewStudent(id)).await?;
                print_outcome(raw, &outcome)?;
            }
            StudentCommand::Add(args) => {
                let outcome = app.handle(AppEvent::SubmitStudent(args.into())).await?;
                print_outcome(raw, &outcome)?;
            }
            StudentCommand::Update { id, fields } => {
                let student = api.update_student(id, &fields.into()).await?;
                print_view(raw, &student, render::student_detail)?;
            }
            StudentCommand::Delete { id, yes } => {
                if !yes && !confirm("Delete student and all related records?").await? {
                    tracing::info!("Deletion of student {} cancelled", id);
                    return Ok(());
                }
                let outcome = app.handle(AppEvent::DeleteStudent(id)).await?;
                print_outcome(raw, &outcome)?;
            }
        },
        Command::Offers(command) => match command {
            OfferCommand::List => {
                let offers = api.list_offers().await?;
                print_view(raw, &offers, |o| render::offer_list(o))?;
            }
            OfferCommand::Add(args) => {
                let outcome = app.handle(AppEvent::SubmitOffer(args.into())).await?;
                print_outcome(raw, &outcome)?;
            }
            OfferCommand::Update { id, fields } => {
                let offer = api.update_offer(id, &fields.into()).await?;
                print_view(raw, &offer, |o| render::offer_list(std::slice::from_ref(o)))?;
            }
            OfferCommand::Delete { id } => {
                api.delete_offer(id).await?;
                println!("🗑️ Offer {} deleted", id);
            }
        },
        Command::Internships(command) => match command {
            InternshipCommand::List => {
                let internships = api.list_internships().await?;
                print_view(raw, &internships, |i| render::internship_list(i))?;
            }
            InternshipCommand::Add(args) => {
                let outcome = app
                    .handle(AppEvent::SubmitInternship(args.into()))
                    .await?;
                print_outcome(raw, &outcome)?;
            }
            InternshipCommand::Update { id, fields } => {
                let internship = api.update_internship(id, &fields.into()).await?;
                print_view(raw, &internship, |i| {
                    render::internship_list(std::slice::from_ref(i))
                })?;
            }
            InternshipCommand::Delete { id } => {
                api.delete_internship(id).await?;
                println!("🗑️ Internship {} deleted", id);
            }
        },
        Command::Reports(command) => match command {
            ReportCommand::Add(args) => {
                let outcome = app.handle(AppEvent::SubmitReport(args.into())).await?;
                print_outcome(raw, &outcome)?;
            }
            ReportCommand::Update { id, fields } => {
                let report = api.update_report(id, &fields.into()).await?;
                print_view(raw, &report, |r| {
                    format!("✅ Report {} updated", r.id)
                })?;
            }
            ReportCommand::Delete { id } => {
                api.delete_report(id).await?;
                println!("🗑️ Report {} deleted", id);
            }
        },
        Command::Request(args) => {
            let options = args.to_options()?;
            match api.request(&args.path, options).await? {
                ApiResponse::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                ApiResponse::NoContent => println!("(no content)"),
            }
        }
    }

    Ok(())
}

async fn connect_and_run(settings: &ClientSettings, command: Command, raw: bool) -> Result<()> {
    let client = ApiClient::from_config(settings)?;
    tracing::debug!("Using API base URL: {}", client.base_url());

    let app = PlacementApp::new(client);
    run(&app, command, raw).await
}

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting placement-client");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    // 解析並驗證連線設定
    let settings = match config.settings().and_then(|s| s.validate().map(|_| s)) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
    };

    if let Err(e) = connect_and_run(&settings, config.command, config.raw).await {
        // 記錄詳細錯誤信息
        tracing::error!(
            "❌ Request failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );

        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 建議: {}", e.recovery_suggestion());

        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };

        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}
