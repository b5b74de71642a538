use clap::arg;
use swagprobe_core::origin::DEFAULT_CANDIDATE_PATHS;

pub const DEFAULT_INPUT: &str = "urls.csv";
pub const DEFAULT_OUTPUT: &str = "swagger_check_results.csv";

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("swagprobe")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("swagprobe")
        .about("Check a list of domains for exposed Swagger UI pages")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner, progress and summary output").required(false))
        .arg(arg!(-v --"verbose" "Log every probe (debug level)").required(false))
        .arg(
            arg!(-i --"input" <PATH>)
                .required(false)
                .help("CSV file with a 'URL' column")
                .default_value(DEFAULT_INPUT),
        )
        .arg(
            arg!(-o --"output" <PATH>)
                .required(false)
                .help("Where to write the results (overwritten)")
                .default_value(DEFAULT_OUTPUT),
        )
        .arg(
            arg!(-f --"format" <FORMAT>)
                .required(false)
                .help("Output format: csv, json")
                .value_parser(["csv", "json"])
                .default_value("csv"),
        )
        .arg(
            arg!(--"paths" <LIST>)
                .required(false)
                .help(format!(
                    "Comma-separated candidate paths; an empty item probes the bare origin \
                    (default: \"{}\")",
                    DEFAULT_CANDIDATE_PATHS.join(",")
                )),
        )
        .arg(
            arg!(--"timeout" <SECONDS>)
                .required(false)
                .help("Per-request timeout in seconds (default: none)")
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
}
