use anyhow::Result;
use credcheck::validation::{validate_email, validate_mobile, validate_password, Verdict};
use inquire::{Password, PasswordDisplayMode, Text};
use log::info;

const LOG_FILE: &str = "./credcheck.log";

// Fixed inputs for the edge case report, from empty through almost-valid
// to valid.
const EXAMPLE_EMAILS: [&str; 4] = ["", "user@", "user@gmail", "user@gmail.com"];
const EXAMPLE_MOBILES: [&str; 4] = ["", "12345", "987654321", "9876543210"];
const EXAMPLE_PASSWORDS: [&str; 4] = ["", "pass123", "Password1", "Password@1"];

/// Prompts for one line of text. An aborted or failed prompt degrades to
/// the empty string, which the validators report as a handled case.
fn prompt_text(label: &str) -> String {
    Text::new(label)
        .prompt()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn prompt_password(label: &str) -> String {
    Password::new(label)
        .without_confirmation()
        .with_display_mode(PasswordDisplayMode::Masked)
        .prompt()
        .unwrap_or_default()
        .trim()
        .to_string()
}

fn report(check: &str, verdict: Verdict) {
    info!("{check} check: valid={} ({})", verdict.is_valid(), verdict);
    println!("{check} Check: {verdict}\n");
}

/// Interactive mode: reads email, mobile number and password in order,
/// printing one result after each.
fn interactive_session() {
    let email = prompt_text("Enter Email:");
    report("Email", validate_email(&email));

    let mobile = prompt_text("Enter Indian Mobile Number:");
    report("Mobile", validate_mobile(&mobile));

    let password = prompt_password("Enter Password:");
    report("Password", validate_password(&password));
}

/// Batch mode: runs each validator over its fixed example inputs.
fn edge_case_report() {
    println!("\n=== EDGE CASE TESTING ===");

    println!("\nEmail Tests:");
    for email in EXAMPLE_EMAILS {
        println!("{} -> {}", email, validate_email(email));
    }

    println!("\nMobile Tests:");
    for mobile in EXAMPLE_MOBILES {
        println!("{} -> {}", mobile, validate_mobile(mobile));
    }

    println!("\nPassword Tests:");
    for password in EXAMPLE_PASSWORDS {
        println!("{} -> {}", password, validate_password(password));
    }
}

fn main() -> Result<()> {
    simple_logging::log_to_file(LOG_FILE, log::LevelFilter::Info)?;

    println!("=== REGEX VALIDATION SYSTEM ===\n");
    interactive_session();
    edge_case_report();
    Ok(())
}
