use colored::Colorize;

pub fn print_banner() {
    let rule = "=================================================";
    println!();
    println!("  {}", rule.green().bold());
    println!(
        "  {} {}",
        "swagprobe".bright_blue().bold(),
        env!("CARGO_PKG_VERSION").bright_black()
    );
    println!("  {}", "Exposed Swagger UI checker".cyan());
    println!("  {}", rule.green().bold());
    println!(
        "  {}",
        "Only probe domains you own or are authorized to test.".yellow()
    );
    println!();
}
