// src/cli/menu.rs
use chrono::Utc;
use console::style;
use inquire::{Confirm, Select, Text};

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::history::HistoryStore;
use crate::models::{PasswordGenerationOptions, StrengthTier};
use crate::strength::StrengthClassifier;
use crate::utils::format::{format_time_ago, truncate_string};

pub fn run_cli_menu(config: &Config) -> anyhow::Result<()> {
    println!("🔐 Welcome to");
    println!("╔══════════════════════════════════════╗");
    println!("║        🔐 SECUREPASS GENERATOR       ║");
    println!("╚══════════════════════════════════════╝");

    let generator = PasswordGenerator::new();
    let classifier = StrengthClassifier::new();

    // Session state: this menu owns the history, nothing else mutates it
    let mut history = HistoryStore::new();
    let mut current_password: Option<String> = None;

    loop {
        println!();
        if let Some(password) = &current_password {
            println!(
                "Current password: {}  ({})",
                password,
                styled_strength(classifier.classify(password))
            );
        }

        let choice = Select::new(
            "What would you like to do?",
            vec![
                "🔄  Generate a password",
                "🧪  Check password strength",
                "🕘  View password history",
                "♻️  Reuse a previous password",
                "🚪  Exit",
            ],
        )
        .prompt()?;

        match choice {
            "🔄  Generate a password" => {
                let default_length = config.default_password_length.to_string();
                let length: usize = Text::new("Password length:")
                    .with_default(&default_length)
                    .prompt()
                    .and_then(|s| {
                        s.parse()
                            .map_err(|_| inquire::InquireError::Custom("Invalid number".into()))
                    })?;

                let include_uppercase = Confirm::new("Include uppercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_lowercase = Confirm::new("Include lowercase letters?")
                    .with_default(true)
                    .prompt()?;

                let include_numbers = Confirm::new("Include numbers?")
                    .with_default(true)
                    .prompt()?;

                let include_symbols = Confirm::new("Include symbols?")
                    .with_default(true)
                    .prompt()?;

                let options = PasswordGenerationOptions {
                    length,
                    include_uppercase,
                    include_lowercase,
                    include_numbers,
                    include_symbols,
                };

                match generator.generate(&options) {
                    Ok(password) => {
                        let strength = classifier.classify(&password);
                        println!("\nGenerated Password: {}", password);
                        println!("Strength: {}", styled_strength(strength));

                        history.record(&password, strength, Utc::now());
                        current_password = Some(password);
                    }
                    Err(e) => {
                        eprintln!("❌ Failed to generate password: {}", e);
                    }
                }
            }
            "🧪  Check password strength" => {
                let password = Text::new("Password to check:").prompt()?;
                let strength = classifier.classify(&password);
                println!("Strength: {}", styled_strength(strength));
            }
            "🕘  View password history" => {
                if history.is_empty() {
                    println!("No password history yet. Generate your first password!");
                } else {
                    for (i, entry) in history.list().iter().enumerate() {
                        println!("{}. {}", i + 1, truncate_string(&entry.password, 40));
                        println!(
                            "   {} • Strength: {}",
                            format_time_ago(entry.created_at),
                            styled_strength(entry.strength)
                        );
                    }
                }
            }
            "♻️  Reuse a previous password" => {
                if history.is_empty() {
                    println!("No password history yet. Generate your first password!");
                    continue;
                }

                let passwords: Vec<String> = history
                    .list()
                    .iter()
                    .map(|entry| entry.password.clone())
                    .collect();
                let chosen = Select::new("Choose a password to reuse:", passwords).prompt()?;

                match history.select(&chosen) {
                    Ok(entry) => {
                        println!(
                            "Reusing password from {} ({})",
                            format_time_ago(entry.created_at),
                            styled_strength(entry.strength)
                        );
                        current_password = Some(entry.password.clone());
                    }
                    Err(e) => {
                        println!("❌ {}", e);
                    }
                }
            }
            "🚪  Exit" => {
                println!("Goodbye! 👋");
                break;
            }
            _ => unreachable!(),
        }
    }

    Ok(())
}

fn styled_strength(strength: StrengthTier) -> console::StyledObject<String> {
    let label = style(strength.to_string());
    match strength {
        StrengthTier::VeryWeak | StrengthTier::Weak => label.red(),
        StrengthTier::Medium => label.yellow(),
        StrengthTier::Strong | StrengthTier::VeryStrong => label.green(),
    }
}
