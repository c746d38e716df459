//! CrewDesk CLI - a headless client for the CrewDesk backend.
//!
//! Logs in with a stored or prompted password and prints resource tables
//! to stdout. The session cookie lives in the process's cookie jar, so
//! every run starts by authenticating; passwords are kept in the OS
//! keychain after the first `login`.

use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crewdesk_core::api::{
    ApiClient, ListCompaniesQuery, ListDepartmentsQuery, ListDesignationsQuery,
    ListEmployeesQuery, ListNoticesQuery, ListUsersQuery,
};
use crewdesk_core::auth::{CredentialStore, Session};
use crewdesk_core::config::{Config, DEFAULT_API_URL};
use crewdesk_core::models::User;
use crewdesk_core::utils::{format_date, format_optional, format_phone, truncate};

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn print_usage() {
    eprintln!("CrewDesk CLI");
    eprintln!();
    eprintln!("Usage: crewdesk <command> [options]");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  login [email]      Authenticate and store the password in the keychain");
    eprintln!("  logout             End the session and forget the stored password");
    eprintln!("  me                 Show the authenticated account");
    eprintln!("  companies          List companies");
    eprintln!("  departments        List departments");
    eprintln!("  designations       List designations");
    eprintln!("  employees          List employees");
    eprintln!("  users              List dashboard accounts");
    eprintln!("  notices            List notices");
    eprintln!();
    eprintln!("List options:");
    eprintln!("  --search <text>  --page <n>  --limit <n>");
    eprintln!("  --company <id>   --department <id>");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  CREWDESK_API_URL   Backend base URL (default {})", DEFAULT_API_URL);
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();
    init_tracing();

    let args: Vec<String> = std::env::args().collect();
    let Some(command) = args.get(1) else {
        print_usage();
        return Ok(());
    };

    let mut config = Config::load()?;
    let base_url = std::env::var("CREWDESK_API_URL")
        .ok()
        .unwrap_or_else(|| config.base_url().to_string());
    debug!(base_url = %base_url, "connecting");

    let client = ApiClient::builder().base_url(&base_url).build()?;

    match command.as_str() {
        "login" => cmd_login(&client, &mut config, args.get(2).cloned()).await,
        "logout" => cmd_logout(&client, &config).await,
        "me" => {
            let session = ensure_session(&client, &config).await?;
            print_me(&session);
            Ok(())
        }
        "companies" => {
            ensure_session(&client, &config).await?;
            cmd_companies(&client, &args[2..]).await
        }
        "departments" => {
            ensure_session(&client, &config).await?;
            cmd_departments(&client, &args[2..]).await
        }
        "designations" => {
            ensure_session(&client, &config).await?;
            cmd_designations(&client, &args[2..]).await
        }
        "employees" => {
            ensure_session(&client, &config).await?;
            cmd_employees(&client, &args[2..]).await
        }
        "users" => {
            ensure_session(&client, &config).await?;
            cmd_users(&client, &args[2..]).await
        }
        "notices" => {
            ensure_session(&client, &config).await?;
            cmd_notices(&client, &args[2..]).await
        }
        _ => {
            print_usage();
            bail!("unknown command: {}", command);
        }
    }
}

/// Authenticate this run using the stored credentials. The session cookie
/// only lives in the process's jar, so every invocation logs in fresh.
async fn ensure_session(client: &ApiClient, config: &Config) -> Result<Session> {
    let Some(email) = config.last_email.as_deref() else {
        bail!("not logged in; run `crewdesk login <email>` first");
    };
    let password = CredentialStore::password_for(email)
        .context("no stored password; run `crewdesk login` again")?;

    let login = client
        .auth()
        .login(email, &password)
        .await
        .context("authentication failed; run `crewdesk login` again")?;

    let mut session = Session::new();
    session.establish(login.user);
    Ok(session)
}

async fn cmd_login(client: &ApiClient, config: &mut Config, email: Option<String>) -> Result<()> {
    let email = match email.or_else(|| config.last_email.clone()) {
        Some(email) => email,
        None => prompt_line("Email: ")?,
    };
    let password = rpassword::prompt_password("Password: ")?;

    let login = client.auth().login(&email, &password).await?;
    println!("{} ({})", login.message, login.user.email);

    config.last_email = Some(email.clone());
    config.save()?;
    if let Err(err) = CredentialStore::save(&email, &password) {
        warn!(error = %err, "could not store password in keychain");
    }
    Ok(())
}

async fn cmd_logout(client: &ApiClient, config: &Config) -> Result<()> {
    // Server-side logout is best effort; the local cleanup happens anyway.
    if let Err(err) = client.auth().logout().await {
        warn!(error = %err, "server-side logout failed");
    }
    if let Some(email) = config.last_email.as_deref() {
        if CredentialStore::has_password(email) {
            if let Err(err) = CredentialStore::forget(email) {
                warn!(error = %err, "could not remove password from keychain");
            }
        }
    }
    println!("Logged out");
    Ok(())
}

fn print_me(session: &Session) {
    if let Some(user) = session.user() {
        println!("{} <{}>", user.name, user.email);
        println!("Role: {}", user.role);
        if let Some(company_id) = user.company_id {
            println!("Company: {}", company_id);
        }
    }
}

async fn cmd_companies(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .companies()
        .list(&ListCompaniesQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            ..Default::default()
        })
        .await?;

    println!("{:<6} {:<28} {:<28} {:<14}", "ID", "Name", "Email", "Employees");
    for company in &page.data {
        println!(
            "{:<6} {:<28} {:<28} {:<14}",
            company.id,
            truncate(&company.name, 26),
            format_optional(company.email.as_deref()),
            company.display_employee_count(),
        );
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

async fn cmd_departments(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .departments()
        .list(&ListDepartmentsQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            company_id: parse_flag(args, "--company")?,
            ..Default::default()
        })
        .await?;

    println!("{:<6} {:<28} {:<10} {:<40}", "ID", "Name", "Company", "Description");
    for department in &page.data {
        println!(
            "{:<6} {:<28} {:<10} {:<40}",
            department.id,
            truncate(&department.name, 26),
            department.company_id,
            truncate(format_optional(department.description.as_deref()), 38),
        );
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

async fn cmd_designations(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .designations()
        .list(&ListDesignationsQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            company_id: parse_flag(args, "--company")?,
            department_id: parse_flag(args, "--department")?,
            ..Default::default()
        })
        .await?;

    println!("{:<6} {:<32} {:<10} {:<12}", "ID", "Name", "Company", "Department");
    for designation in &page.data {
        println!(
            "{:<6} {:<32} {:<10} {:<12}",
            designation.id,
            truncate(&designation.name, 30),
            designation.company_id,
            designation
                .department_id
                .map(|id| id.to_string())
                .unwrap_or_else(|| "-".to_string()),
        );
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

async fn cmd_employees(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .employees()
        .list(&ListEmployeesQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            company_id: parse_flag(args, "--company")?,
            department_id: parse_flag(args, "--department")?,
            ..Default::default()
        })
        .await?;

    println!(
        "{:<6} {:<24} {:<28} {:<16} {:<18} {:<18} {:<10} {:<12}",
        "ID", "Name", "Email", "Phone", "Department", "Designation", "Status", "Joined"
    );
    for employee in &page.data {
        println!(
            "{:<6} {:<24} {:<28} {:<16} {:<18} {:<18} {:<10} {:<12}",
            employee.id,
            truncate(&employee.full_name(), 22),
            truncate(&employee.email, 26),
            employee
                .phone
                .as_deref()
                .map(format_phone)
                .unwrap_or_else(|| "-".to_string()),
            truncate(employee.department_display(), 16),
            truncate(employee.designation_display(), 16),
            employee.status.to_string(),
            format_date(employee.joining_date),
        );
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

async fn cmd_users(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .users()
        .list(&ListUsersQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            company_id: parse_flag(args, "--company")?,
            ..Default::default()
        })
        .await?;

    println!("{:<6} {:<24} {:<28} {:<12} {:<10}", "ID", "Name", "Email", "Role", "Company");
    for user in &page.data {
        print_user_row(user);
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

fn print_user_row(user: &User) {
    println!(
        "{:<6} {:<24} {:<28} {:<12} {:<10}",
        user.id,
        truncate(&user.name, 22),
        truncate(&user.email, 26),
        user.role.to_string(),
        user.company_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string()),
    );
}

async fn cmd_notices(client: &ApiClient, args: &[String]) -> Result<()> {
    let page = client
        .notices()
        .list(&ListNoticesQuery {
            search: flag_value(args, "--search"),
            page: parse_flag(args, "--page")?,
            limit: parse_flag(args, "--limit")?,
            company_id: parse_flag(args, "--company")?,
            ..Default::default()
        })
        .await?;

    for notice in &page.data {
        let marker = if notice.is_expired() { " (expired)" } else { "" };
        println!("#{} {}{}", notice.id, notice.title, marker);
        println!("    {}", truncate(&notice.description, 100));
    }
    print_page_footer(page.data.len(), page.total);
    Ok(())
}

fn print_page_footer(shown: usize, total: u64) {
    println!();
    println!("Showing {} of {}", shown, total);
}

/// Get the value following a `--flag` argument, if present
fn flag_value(args: &[String], name: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg.as_str() == name)
        .and_then(|index| args.get(index + 1))
        .cloned()
}

fn parse_flag<T: std::str::FromStr>(args: &[String], name: &str) -> Result<Option<T>>
where
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match flag_value(args, name) {
        Some(value) => {
            let parsed = value
                .parse()
                .with_context(|| format!("invalid value for {}: {}", name, value))?;
            Ok(Some(parsed))
        }
        None => Ok(None),
    }
}

fn prompt_line(prompt: &str) -> Result<String> {
    print!("{}", prompt);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
