use anyhow::{Result, anyhow};
use clap::{Args, Parser, Subcommand};
use contacts_client::view::{DEFAULT_ROWS_PER_PAGE, ROWS_PER_PAGE_OPTIONS};
use contacts_client::{
    ContactsController, ContactsView, HttpContactsApi, Notification, Severity,
};
use contacts_core::{Contact, ContactPayload};
use log::info;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[derive(Debug, Parser)]
#[command(version, about = "Manage contacts from the terminal", long_about = None)]
struct Cli {
    /// The URL the contacts API is reachable at
    #[arg(long, env = "CONTACTS_API_URL", default_value = "http://localhost:3001")]
    base_url: String,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Lists contacts as a table
    List {
        /// Only show contacts whose name or phone number contains this
        #[arg(long, default_value = "")]
        search: String,
        /// The page to show, starting at 0
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long, default_value_t = DEFAULT_ROWS_PER_PAGE, value_parser = parse_rows_per_page)]
        rows_per_page: usize,
    },
    /// Adds a contact
    Add(ContactArgs),
    /// Edits a contact, fields that aren't given keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: ContactArgs,
    },
    /// Deletes a contact
    Delete {
        id: String,
        /// Don't ask for confirmation
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Clone, Args)]
struct ContactArgs {
    #[arg(long)]
    first_name: Option<String>,
    #[arg(long)]
    last_name: Option<String>,
    #[arg(long)]
    email: Option<String>,
    #[arg(long)]
    phone: Option<String>,
    #[arg(long)]
    company: Option<String>,
    #[arg(long)]
    job_title: Option<String>,
}

impl ContactArgs {
    /// Overrides the fields of `base` with the ones that were given
    fn merge_into(self, base: ContactPayload) -> ContactPayload {
        ContactPayload {
            first_name: self.first_name.or(base.first_name),
            last_name: self.last_name.or(base.last_name),
            email: self.email.or(base.email),
            phone: self.phone.or(base.phone),
            company: self.company.or(base.company),
            job_title: self.job_title.or(base.job_title),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();
    info!("Using contacts API at {}", cli.base_url);

    let api = Arc::new(HttpContactsApi::new(&cli.base_url));
    let mut view = ContactsView::new(ContactsController::new(api));
    view.controller().load().await;

    let ok = match cli.command {
        Command::List {
            search,
            page,
            rows_per_page,
        } => {
            view.set_search_query(&search);
            view.set_rows_per_page(rows_per_page);
            view.set_page(page);
            print_table(&view);
            view.state().error.is_none()
        }
        Command::Add(fields) => {
            view.open_add();
            let payload = fields.merge_into(ContactPayload::default());
            let added = view.submit_add(&payload).await;
            print_form_errors(&view);
            added
        }
        Command::Edit { id, fields } => {
            let contact = find_contact(&view, &id)?;
            let payload = fields.merge_into(ContactPayload::from(&contact));
            view.open_edit(contact);
            let updated = view.submit_edit(&payload).await;
            print_form_errors(&view);
            updated
        }
        Command::Delete { id, yes } => {
            let contact = find_contact(&view, &id)?;
            if !yes && !confirm(&format!("Delete {}?", contact.full_name()))? {
                println!("Aborted");
                return Ok(());
            }
            view.delete(&id).await
        }
    };

    print_notification(view.notification());
    match (ok, &view.state().error) {
        (false, Some(e)) => Err(anyhow!("{e}")),
        (false, None) if !view.form_errors().is_empty() => Err(anyhow!("The contact is invalid")),
        (false, None) => Err(anyhow!("The operation failed")),
        _ => Ok(()),
    }
}

fn parse_rows_per_page(value: &str) -> std::result::Result<usize, String> {
    let rows: usize = value.parse().map_err(|e| format!("{e}"))?;
    if ROWS_PER_PAGE_OPTIONS.contains(&rows) {
        Ok(rows)
    } else {
        Err(format!("has to be one of {ROWS_PER_PAGE_OPTIONS:?}"))
    }
}

fn find_contact(view: &ContactsView, id: &str) -> Result<Contact> {
    if let Some(e) = &view.state().error {
        return Err(anyhow!("{e}"));
    }
    view.filtered()
        .into_iter()
        .find(|c| c.id == id)
        .ok_or_else(|| anyhow!("Contact not found"))
}

fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;
    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn print_table(view: &ContactsView) {
    if let Some(e) = &view.state().error {
        eprintln!("Error: {e}");
    }
    let rows = view.visible_rows();
    if rows.is_empty() {
        println!("No contacts found");
        return;
    }
    println!(
        "{:<36}  {:<24}  {:<28}  {:<16}  {:<20}  {:<20}",
        "ID", "NAME", "EMAIL", "PHONE", "COMPANY", "JOB TITLE"
    );
    for c in rows {
        println!(
            "{:<36}  {:<24}  {:<28}  {:<16}  {:<20}  {:<20}",
            c.id,
            c.full_name(),
            c.email,
            c.phone,
            c.company.as_deref().unwrap_or("-"),
            c.job_title.as_deref().unwrap_or("-"),
        );
    }
    println!(
        "page {}/{} ({} contacts, {} per page)",
        view.page() + 1,
        view.page_count(),
        view.filtered().len(),
        view.rows_per_page()
    );
}

fn print_form_errors(view: &ContactsView) {
    for (field, msg) in view.form_errors() {
        eprintln!("{}: {msg}", field.label());
    }
}

fn print_notification(notification: Option<&Notification>) {
    match notification {
        Some(Notification {
            message,
            severity: Severity::Success,
        }) => println!("{message}"),
        Some(Notification {
            message,
            severity: Severity::Error,
        }) => eprintln!("{message}"),
        None => (),
    }
}
