//! `hirelink` command line front end.
//!
//! Each subcommand drives one page controller and prints its state as JSON.

use hirelink_lib::error::AppError;
use hirelink_lib::models::notification::unread_count;
use hirelink_lib::models::{ApplicationStatus, EmailType, JobFilters, JobType};
use hirelink_lib::pages::{self, FormState, Page, PageContext, PageState};
use hirelink_lib::services::Settings;
use serde::Serialize;
use std::path::Path;
use std::process::ExitCode;

const USAGE: &str = "\
Usage: hirelink <command> [args]

Account:
  login <email> <password>        Log in and store the session
  logout                          Log out and clear the session
  forgot-password <email>         Request a password reset email
  dashboard                       Greeting and profile summary
  profile                         Show the current user
  upload-resume <file>            Upload a resume to the profile

Candidate:
  jobs [search] [--type T] [--location L]
  job <id>                        Show one job
  save-job <id>                   Bookmark a job
  saved-jobs                      List bookmarked jobs
  recommendations [limit]         Jobs matched to your profile
  apply <job-id> <resume> [cover letter]
  quick-apply <job-id> [cover letter]
  applications [status]
  withdraw <application-id>
  interviews [--upcoming]
  notifications [--mark-read]

Recruiter:
  recruiter dashboard
  recruiter jobs
  recruiter toggle <job-id>
  recruiter applications [job-id]
  recruiter status <application-id> <status> [reason]
  recruiter email <application-id> <refus|relance|invitation> [--send]
  company

Admin:
  admin recruiters
  admin validate <recruiter-id>

Tools:
  ats <resume file> | ats --text <text> | ats --url <url>
";

#[tokio::main]
async fn main() -> ExitCode {
    hirelink_lib::init_logging();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || matches!(args[0].as_str(), "-h" | "--help" | "help") {
        eprint!("{}", USAGE);
        return ExitCode::SUCCESS;
    }

    let ctx = match Settings::from_env().and_then(|settings| hirelink_lib::connect(&settings)) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(&ctx, &args).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(ctx: &PageContext, args: &[String]) -> Result<ExitCode, AppError> {
    let arg = |i: usize| args.get(i).map(String::as_str);
    let id = |i: usize| parse_id(arg(i));

    match (arg(0).unwrap_or_default(), arg(1)) {
        ("login", _) => {
            let (email, password) = (required(arg(1), "email")?, required(arg(2), "password")?);
            let (form, session) = pages::auth::login(ctx, email, password).await;
            if let Some(session) = session {
                log::info!("Logged in as {:?}", session.user_role);
            }
            form_output(&form)
        }
        ("logout", _) => form_output(&pages::auth::logout(ctx).await),
        ("forgot-password", _) => {
            let email = arg(1).unwrap_or_default();
            form_output(&pages::auth::request_password_reset(ctx, email).await)
        }
        ("dashboard", _) => {
            let page = pages::dashboard::load(ctx).await;
            if let Some(profile) = page.data() {
                eprintln!("{}", pages::dashboard::greeting(profile));
            }
            page_output(&page)
        }
        ("profile", _) => page_output(&pages::profile::load(ctx).await),
        ("upload-resume", _) => {
            let path = required(arg(1), "file")?;
            let mut page = pages::profile::load(ctx).await;
            pages::profile::upload_resume(ctx, &mut page, Path::new(path)).await;
            page_output(&page)
        }
        ("jobs", _) => {
            let filters = job_filters(&args[1..])?;
            page_output(&pages::jobs::load_board(ctx, &filters).await)
        }
        ("job", _) => page_output(&pages::jobs::load_detail(ctx, id(1)?).await),
        ("saved-jobs", _) => page_output(&pages::jobs::load_saved(ctx).await),
        ("recommendations", _) => {
            let limit = arg(1).map(parse_limit).transpose()?;
            page_output(&pages::jobs::load_recommendations(ctx, limit).await)
        }
        ("save-job", _) => {
            let job_id = id(1)?;
            let mut page = pages::jobs::load_detail(ctx, job_id).await;
            pages::jobs::save_job(ctx, &mut page, job_id).await;
            page_output(&page)
        }
        ("apply", _) => {
            let job_id = id(1)?;
            let path = Path::new(required(arg(2), "resume")?);
            let resume = tokio::fs::read(path).await?;
            let resume_name = file_name(path);
            let cover_letter = args.get(3..).map(|rest| rest.join(" ")).unwrap_or_default();

            let mut page = pages::jobs::load_apply(ctx, job_id).await;
            pages::jobs::submit_application(ctx, &mut page, &cover_letter, resume_name, resume).await;
            page_output(&page)
        }
        ("quick-apply", _) => {
            let cover_letter = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
            let mut page = pages::jobs::load_apply(ctx, id(1)?).await;
            pages::jobs::quick_apply(ctx, &mut page, &cover_letter).await;
            page_output(&page)
        }
        ("applications", _) => {
            let status = arg(1).map(parse_status).transpose()?;
            page_output(&pages::applications::load_list(ctx, status).await)
        }
        ("withdraw", _) => {
            let application_id = id(1)?;
            let mut page = pages::applications::load_list(ctx, None).await;
            pages::applications::withdraw(ctx, &mut page, application_id).await;
            page_output(&page)
        }
        ("interviews", flag) => {
            let page = pages::interviews::load(ctx).await;
            if flag == Some("--upcoming") {
                if let Some(list) = page.data() {
                    let upcoming = pages::interviews::upcoming(list, chrono::Utc::now());
                    print_json(&upcoming)?;
                    return Ok(ExitCode::SUCCESS);
                }
            }
            page_output(&page)
        }
        ("notifications", flag) => {
            let mut page = pages::notifications::load(ctx).await;
            if flag == Some("--mark-read") {
                pages::notifications::mark_all_read(ctx, &mut page).await;
            }
            if let Some(list) = page.data() {
                eprintln!("{} unread", unread_count(list));
            }
            page_output(&page)
        }
        ("recruiter", Some(sub)) => recruiter(ctx, sub, &args[2..]).await,
        ("company", _) => page_output(&pages::company::load(ctx).await),
        ("admin", Some("recruiters")) => page_output(&pages::admin::load(ctx).await),
        ("admin", Some("validate")) => {
            let recruiter_id = id(2)?;
            let mut page = pages::admin::load(ctx).await;
            pages::admin::validate(ctx, &mut page, recruiter_id).await;
            page_output(&page)
        }
        ("ats", Some(mode)) => {
            let mut analyzer = pages::ats::AtsAnalyzer::new();
            match mode {
                "--text" => {
                    let text = args.get(2..).map(|rest| rest.join(" ")).unwrap_or_default();
                    analyzer.analyze_text(ctx, &text).await;
                }
                "--url" => analyzer.analyze_url(ctx, required(arg(2), "url")?).await,
                path => analyzer.analyze_file(ctx, Path::new(path)).await,
            }
            print_json(&analyzer)?;
            Ok(exit_for_form(&analyzer.form))
        }
        _ => {
            eprint!("{}", USAGE);
            Ok(ExitCode::from(2))
        }
    }
}

async fn recruiter(ctx: &PageContext, sub: &str, args: &[String]) -> Result<ExitCode, AppError> {
    let arg = |i: usize| args.get(i).map(String::as_str);

    match sub {
        "dashboard" => page_output(&pages::recruiter::load_dashboard(ctx).await),
        "jobs" => page_output(&pages::recruiter::load_jobs(ctx).await),
        "toggle" => {
            let job_id = parse_id(arg(0))?;
            let mut page = pages::recruiter::load_jobs(ctx).await;
            pages::recruiter::toggle_job(ctx, &mut page, job_id).await;
            page_output(&page)
        }
        "applications" => {
            let job_id = arg(0).map(|raw| parse_id(Some(raw))).transpose()?;
            page_output(&pages::recruiter::load_applications(ctx, job_id, None).await)
        }
        "status" => {
            let application_id = parse_id(arg(0))?;
            let status = parse_status(required(arg(1), "status")?)?;
            let reason = args.get(2..).map(|rest| rest.join(" ")).filter(|r| !r.is_empty());

            let mut page = pages::recruiter::load_application(ctx, application_id).await;
            pages::recruiter::update_status(ctx, &mut page, status, reason.as_deref()).await;
            page_output(&page)
        }
        "email" => {
            let application_id = parse_id(arg(0))?;
            let email_type: EmailType = required(arg(1), "email type")?
                .parse()
                .map_err(|e: String| AppError::invalid_input_field(e, "email type"))?;

            let mut page = pages::recruiter::load_application(ctx, application_id).await;
            pages::recruiter::generate_email(ctx, &mut page, email_type).await;
            if arg(2) == Some("--send") && page.action_error.is_none() {
                pages::recruiter::send_email(ctx, &mut page).await;
            }
            page_output(&page)
        }
        _ => {
            eprint!("{}", USAGE);
            Ok(ExitCode::from(2))
        }
    }
}

fn job_filters(args: &[String]) -> Result<JobFilters, AppError> {
    let mut filters = JobFilters::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--type" => {
                let raw = required(iter.next().map(String::as_str), "type")?;
                let job_type = raw
                    .parse::<JobType>()
                    .map_err(|e| AppError::invalid_input_field(e, "type"))?;
                filters.job_type = Some(job_type);
            }
            "--location" => filters.location = iter.next().cloned(),
            search => filters.search = Some(search.to_string()),
        }
    }
    Ok(filters)
}

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, AppError> {
    value
        .filter(|v| !v.is_empty())
        .ok_or_else(|| AppError::invalid_input_field(format!("Missing <{}>", field), field))
}

fn parse_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = required(raw, "id")?;
    raw.parse()
        .map_err(|_| AppError::invalid_input_field(format!("Invalid id '{}'", raw), "id"))
}

fn parse_limit(raw: &str) -> Result<u32, AppError> {
    raw.parse()
        .map_err(|_| AppError::invalid_input_field(format!("Invalid limit '{}'", raw), "limit"))
}

fn parse_status(raw: &str) -> Result<ApplicationStatus, AppError> {
    ApplicationStatus::parse(raw).ok_or_else(|| {
        AppError::invalid_input_field(format!("Unknown status '{}'", raw), "status")
    })
}

fn file_name(path: &Path) -> &str {
    path.file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("resume.pdf")
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<(), AppError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn page_output<T: Serialize>(page: &Page<T>) -> Result<ExitCode, AppError> {
    print_json(page)?;
    if let Some(route) = page.state.redirect().or(page.navigate) {
        log::info!("Next page: {}", route);
    }
    Ok(match &page.state {
        PageState::Failed(_) => ExitCode::FAILURE,
        PageState::Redirect(_) => ExitCode::from(3),
        _ if page.action_error.is_some() => ExitCode::FAILURE,
        _ => ExitCode::SUCCESS,
    })
}

fn form_output(form: &FormState) -> Result<ExitCode, AppError> {
    print_json(form)?;
    Ok(exit_for_form(form))
}

fn exit_for_form(form: &FormState) -> ExitCode {
    if form.error.is_some() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}
