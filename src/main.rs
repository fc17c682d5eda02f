use anyhow::{anyhow, bail};
use clap::{value_parser, Arg, ArgAction, ArgMatches, Command};
use log::LevelFilter;
use taglog::{
    check, check_eq, check_ge, check_gt, check_le, check_lt, check_ne, facade, logger,
    util::fatal, Logger, Severity,
};

pub fn parse_condition(string: &str) -> Option<bool> {
    match string {
        "true" | "1" => Some(true),
        "false" | "0" => Some(false),
        _ => None,
    }
}

fn after_arg() -> Arg {
    Arg::new("after")
        .help("message logged as INFO once the check has passed")
        .required(false)
        .long("after")
}

fn command() -> Command {
    Command::new("taglog")
        .about("Print tagged log lines and run fatal checks")
        .subcommand_required(true)
        .arg(
            Arg::new("level-filter")
                .help(format!(
                    "max level for --facade output (default: ${} or {})",
                    facade::LEVEL_ENV,
                    LevelFilter::Info
                ))
                .required(false)
                .long("level-filter")
                .global(true),
        )
        .subcommand(
            Command::new("log")
                .about("print one line, exit with failure for the fatal level")
                .arg(
                    Arg::new("level")
                        .help("info, warning or fatal")
                        .required(true),
                )
                .arg(
                    Arg::new("fragment")
                        .help("fragments appended in order, without separators")
                        .num_args(0..),
                )
                .arg(
                    Arg::new("facade")
                        .help("emit through the log crate macros")
                        .long("facade")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("check")
                .about("fail fatally unless the condition is true")
                .arg(
                    Arg::new("condition")
                        .help("true or false")
                        .required(true),
                )
                .arg(
                    Arg::new("detail")
                        .help("text appended to the failure line")
                        .required(false)
                        .long("detail"),
                )
                .arg(after_arg()),
        )
        .subcommand(
            Command::new("check-eq")
                .about("fail fatally unless both values are equal")
                .arg(Arg::new("lhs").required(true))
                .arg(Arg::new("rhs").required(true))
                .arg(after_arg()),
        )
        .subcommand(
            Command::new("compare")
                .about("fail fatally unless `x <op> y` holds for two integers")
                .arg(
                    Arg::new("x")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(
                    Arg::new("op")
                        .help("one of ==, !=, <, <=, >, >=")
                        .required(true),
                )
                .arg(
                    Arg::new("y")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(value_parser!(i64)),
                )
                .arg(after_arg()),
        )
}

fn level_filter(args: &ArgMatches) -> anyhow::Result<LevelFilter> {
    match args.get_one::<String>("level-filter") {
        Some(filter) => filter
            .parse::<LevelFilter>()
            .map_err(|_| anyhow!("Invalid level filter passed: {}", filter)),
        None => Ok(facade::level_from_env()),
    }
}

fn run_log(args: &ArgMatches) -> anyhow::Result<()> {
    let level: &String = args.get_one::<String>("level").unwrap();
    let severity: Severity = Severity::from_string(level)
        .unwrap_or_else(|| fatal(format!("Invalid level passed: {}", level)));
    let fragments: Vec<&String> = args
        .get_many::<String>("fragment")
        .map(|fragments| fragments.collect())
        .unwrap_or_default();
    if args.get_flag("facade") {
        let message: String = fragments.into_iter().map(String::as_str).collect();
        match severity {
            Severity::Info => log::info!("{}", message),
            Severity::Warning => log::warn!("{}", message),
            Severity::Fatal => bail!("the log facade has no fatal level"),
        }
        return Ok(());
    }
    let mut logger: Logger = Logger::new(severity);
    for fragment in fragments {
        logger = logger.append(fragment);
    }
    Ok(())
}

fn log_after(args: &ArgMatches) {
    if let Some(after) = args.get_one::<String>("after") {
        logger!(INFO).append(after);
    }
}

fn run_check(args: &ArgMatches) {
    let condition_str: &String = args.get_one::<String>("condition").unwrap();
    let condition: bool = parse_condition(condition_str)
        .unwrap_or_else(|| fatal(format!("Invalid condition passed: {}", condition_str)));
    match args.get_one::<String>("detail") {
        Some(detail) => check!(condition, "{}", detail),
        None => check!(condition),
    }
    log_after(args);
}

fn run_check_eq(args: &ArgMatches) {
    let lhs: &String = args.get_one::<String>("lhs").unwrap();
    let rhs: &String = args.get_one::<String>("rhs").unwrap();
    check_eq!(lhs, rhs, "({:?} vs {:?})", lhs, rhs);
    log_after(args);
}

fn run_compare(args: &ArgMatches) {
    let x: i64 = *args.get_one::<i64>("x").unwrap();
    let y: i64 = *args.get_one::<i64>("y").unwrap();
    match args.get_one::<String>("op").unwrap().as_str() {
        "==" => check_eq!(x, y),
        "!=" => check_ne!(x, y),
        "<" => check_lt!(x, y),
        "<=" => check_le!(x, y),
        ">" => check_gt!(x, y),
        ">=" => check_ge!(x, y),
        op => fatal(format!("Invalid operator passed: {}", op)),
    }
    log_after(args);
}

pub fn main() {
    let args: ArgMatches = command().get_matches();
    let filter: LevelFilter = level_filter(&args).unwrap_or_else(|err| fatal(format!("{err}")));
    facade::init(filter).unwrap_or_else(|err| fatal(format!("cannot install log facade: {err}")));
    let result: anyhow::Result<()> = match args.subcommand() {
        Some(("log", sub)) => run_log(sub),
        Some(("check", sub)) => {
            run_check(sub);
            Ok(())
        }
        Some(("check-eq", sub)) => {
            run_check_eq(sub);
            Ok(())
        }
        Some(("compare", sub)) => {
            run_compare(sub);
            Ok(())
        }
        _ => fatal("unknown subcommand"),
    };
    result.unwrap_or_else(|err| fatal(format!("{err}")));
}
