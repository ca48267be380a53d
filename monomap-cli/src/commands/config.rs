//! Config command - show effective configuration

use monomap_core::Config;

pub fn show(config: &Config) {
    println!("Monomap Configuration");
    println!("=====================");
    println!();
    println!("Report Settings:");
    match &config.report.plan_path {
        Some(path) => println!("  plan_path: {}", path.display()),
        None => println!(
            "  plan_path: {} (default)",
            config.report.resolved_plan_path().display()
        ),
    }
    println!("  emoji: {}", config.report.emoji);
    println!();
    if let Some(path) = Config::default_config_path() {
        println!("Config file: {}", path.display());
        if path.exists() {
            println!("  (exists)");
        } else {
            println!("  (not found - using defaults)");
        }
    }
}
