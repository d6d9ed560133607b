//! CLI Doctor Command
//!
//! Reports which environment variables are set and whether the resolved
//! configuration would pass startup validation.

use anyhow::Result;
use std::env;

use bento_config::defaults::{ENV_ANTHROPIC_KEY, ENV_DISCORD_TOKEN};
use bento_config::{validate, BotConfig};

/// Executes the full doctor diagnosis.
pub fn run() -> Result<()> {
    println!("\n🔍 Running Bento Doctor...\n");

    let env_ok = check_env_vars();
    let config_ok = check_config();

    println!();
    if env_ok && config_ok {
        println!("✅ All checks passed! Bento is ready to serve.");
    } else {
        println!("❌ Some checks failed! Please fix the errors above.");
    }

    Ok(())
}

fn check_env_vars() -> bool {
    println!("Checking Environment Variables:");

    let checks = [
        (ENV_DISCORD_TOKEN, false), // false = required
        (ENV_ANTHROPIC_KEY, true),  // true = optional
    ];

    let mut all_good = true;

    for (var, optional) in checks {
        match env::var(var) {
            Ok(val) if !val.is_empty() => {
                println!("  🟢 {} is set", var);
            }
            _ => {
                if optional {
                    println!("  🟡 {} is missing (optional, disables the generative fallback)", var);
                } else {
                    println!("  🔴 {} is missing (REQUIRED)", var);
                    all_good = false;
                }
            }
        }
    }

    all_good
}

fn check_config() -> bool {
    println!("Checking Configuration:");

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("  🔴 {}", e);
            return false;
        }
    };

    let report = validate(&config);
    for warning in &report.warnings {
        println!("  🟡 {}", warning);
    }
    for error in &report.errors {
        println!("  🔴 {}", error);
    }
    if report.is_valid() {
        println!(
            "  🟢 {} answers to prefix \"{}\"",
            config.bot_name, config.prefix
        );
    }

    report.is_valid()
}
