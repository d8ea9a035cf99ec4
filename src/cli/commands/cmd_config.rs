use colored::Colorize;

use crate::config::Settings;

pub fn execute(settings: &Settings) {
    println!("{}", "=== Configuration ===".blue());
    settings.print_config();
}
