// src/cli/handlers.rs
use serde_json::json;

use crate::core::config::Config;
use crate::generators::PasswordGenerator;
use crate::models::PasswordGenerationOptions;
use crate::strength::StrengthClassifier;

// Handlers for CLI commands
pub fn handle_generate(
    config: &Config,
    length: Option<usize>,
    no_uppercase: bool,
    no_lowercase: bool,
    no_numbers: bool,
    no_symbols: bool,
    json: bool,
) -> anyhow::Result<()> {
    let options = PasswordGenerationOptions {
        length: length.unwrap_or(config.default_password_length),
        include_uppercase: !no_uppercase,
        include_lowercase: !no_lowercase,
        include_numbers: !no_numbers,
        include_symbols: !no_symbols,
    };

    let generator = PasswordGenerator::new();
    let password = generator.generate(&options)?;
    let strength = StrengthClassifier::new().classify(&password);

    if json {
        println!("{}", json!({ "password": password, "strength": strength }));
    } else {
        println!("{}", password);
        println!("Strength: {}", strength);
    }

    Ok(())
}

pub fn handle_classify(password: &str, json: bool) -> anyhow::Result<()> {
    let strength = StrengthClassifier::new().classify(password);

    if json {
        println!("{}", json!({ "strength": strength }));
    } else {
        println!("Strength: {}", strength);
    }

    Ok(())
}
