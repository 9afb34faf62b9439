use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use clrs_algorithms::config::RunConfig;
use clrs_algorithms::generate::NumberKind;
use clrs_algorithms::sorting::SortAlgorithm;
use clrs_algorithms::subarray::SubarrayMethod;
use clrs_algorithms::SortOrder;
use clrs_cli::commands::generate::{run_generate, GenerateParams};
use clrs_cli::commands::horner::{run_horner, HornerParams};
use clrs_cli::commands::inversions::{run_count_inversions, InversionParams};
use clrs_cli::commands::matrix::{run_matrix_multiply, MatrixParams};
use clrs_cli::commands::search::{run_search, SearchKind, SearchParams};
use clrs_cli::commands::sort::{run_sort, SortParams};
use clrs_cli::commands::subarray::{run_max_subarray, SubarrayParams};
use clrs_cli::commands::two_sum::{run_two_sum, TwoSumParams};
use clrs_cli::terminal::Terminal;
use clrs_cli::util::load_run_config;

const SORT_COMMANDS: [(&str, SortAlgorithm); 5] = [
    ("insertion-sort", SortAlgorithm::Insertion),
    ("binary-insertion-sort", SortAlgorithm::BinaryInsertion),
    ("selection-sort", SortAlgorithm::Selection),
    ("merge-sort", SortAlgorithm::Merge),
    ("merge-sort-coarsened", SortAlgorithm::MergeCoarsened),
];

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("CLRS_LOG", "error,clrs=info"))
        .init();

    let matches = build_cli().get_matches();
    let config_path = matches.get_one::<PathBuf>("config");

    match matches.subcommand() {
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&RunConfig::default())?);
            Ok(())
        }
        Some((name, sub_m)) => {
            let result = load_run_config(config_path).and_then(|config| dispatch(name, sub_m, &config));
            match result {
                Ok(()) => Ok(()),
                Err(e) => {
                    log::error!("{} failed: {:#}", name, e);
                    std::process::exit(1)
                }
            }
        }
        None => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn dispatch(name: &str, matches: &ArgMatches, config: &RunConfig) -> Result<()> {
    let mut term = Terminal::stdio();

    if let Some((_, algorithm)) = SORT_COMMANDS.iter().find(|(cmd, _)| *cmd == name) {
        let params = SortParams::from_arguments(*algorithm, matches, config)?;
        return run_sort(&params, &mut term);
    }

    match name {
        "linear-search" => {
            let params = SearchParams::from_arguments(SearchKind::Linear, matches, config)?;
            run_search(&params, &mut term)
        }
        "binary-search" => {
            let params = SearchParams::from_arguments(SearchKind::Binary, matches, config)?;
            run_search(&params, &mut term)
        }
        "two-sum" => {
            let params = TwoSumParams::from_arguments(matches, config)?;
            run_two_sum(&params, &mut term)
        }
        "horner" => {
            let params = HornerParams::from_arguments(matches)?;
            run_horner(&params, &mut term)
        }
        "count-inversions" => {
            let params = InversionParams::from_arguments(matches, config)?;
            run_count_inversions(&params, &mut term)
        }
        "max-subarray" => {
            let params = SubarrayParams::from_arguments(matches)?;
            run_max_subarray(&params, &mut term)
        }
        "matrix-multiply" => {
            let params = MatrixParams::from_arguments(matches, config)?;
            run_matrix_multiply(&params, &mut term)
        }
        "generate" => {
            let params = GenerateParams::from_arguments(matches)?;
            run_generate(&params, &mut term)
        }
        _ => unreachable!(),
    }
}

fn build_cli() -> Command {
    let mut cli = Command::new("clrs")
        .version(clap::crate_version!())
        .about("Textbook sorting, searching and divide-and-conquer algorithms, timed")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("Path to a JSON run configuration (see `clrs config`)")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        );

    for (name, algorithm) in SORT_COMMANDS {
        let mut cmd = Command::new(name)
            .about(format!("Sort numbers with {}", algorithm.display_name().to_lowercase()))
            .arg(input_arg(true))
            .arg(output_arg(true))
            .arg(sort_order_arg());
        if algorithm == SortAlgorithm::MergeCoarsened {
            cmd = cmd.arg(threshold_arg());
        }
        cli = cli.subcommand(cmd);
    }

    cli.subcommand(
        Command::new("linear-search")
            .about("Find a value by scanning the array")
            .arg(input_arg(true))
            .arg(search_value_arg()),
    )
    .subcommand(
        Command::new("binary-search")
            .about("Find a value in a sorted array by halving")
            .arg(input_arg(true))
            .arg(search_value_arg())
            .arg(sort_order_arg()),
    )
    .subcommand(
        Command::new("two-sum")
            .about("Decide whether two array elements sum to a target")
            .arg(input_arg(true))
            .arg(
                Arg::new("target")
                    .short('x')
                    .long("target")
                    .help("Number to write as a sum of two elements")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            )
            .arg(
                Arg::new("methods")
                    .short('m')
                    .long("methods")
                    .help("Bit mask of methods to run, 0-7 (4: sort + search, 2: two pointers, 1: table)")
                    .value_parser(clap::value_parser!(u32)),
            ),
    )
    .subcommand(
        Command::new("horner")
            .about("Evaluate a polynomial with Horner's rule")
            .arg(input_arg(true).help("Coefficient file, highest degree first"))
            .arg(
                Arg::new("x")
                    .short('x')
                    .help("Point at which to evaluate the polynomial")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(f64)),
            ),
    )
    .subcommand(
        Command::new("count-inversions")
            .about("Count inversions with a merge sort that uses insertion-sort leaves")
            .arg(input_arg(false))
            .arg(output_arg(false).help("Write the sorted array to this file"))
            .arg(sort_order_arg())
            .arg(threshold_arg()),
    )
    .subcommand(
        Command::new("max-subarray")
            .about("Find the contiguous subarray with the largest sum")
            .arg(input_arg(false))
            .arg(
                Arg::new("method")
                    .long("method")
                    .help("divide (divide and conquer, default) or linear")
                    .value_parser(clap::value_parser!(SubarrayMethod)),
            ),
    )
    .subcommand(
        Command::new("matrix-multiply")
            .about("Multiply two matrices directly")
            .arg(
                Arg::new("left")
                    .short('a')
                    .help("File with the left matrix (`rows cols` header)")
                    .value_parser(clap::value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                Arg::new("right")
                    .short('b')
                    .help("File with the right matrix (`rows cols` header)")
                    .value_parser(clap::value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(output_arg(false))
            .arg(
                Arg::new("parallel")
                    .long("parallel")
                    .help("Compute result rows in parallel")
                    .action(ArgAction::SetTrue),
            ),
    )
    .subcommand(
        Command::new("generate")
            .about("Write random numbers with a count header for the other commands")
            .arg(
                Arg::new("kind")
                    .short('d')
                    .long("data-type")
                    .help("int or float")
                    .value_parser(clap::value_parser!(NumberKind)),
            )
            .arg(
                Arg::new("lower")
                    .short('l')
                    .long("lower")
                    .help("Lower bound (default 0)")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            )
            .arg(
                Arg::new("upper")
                    .short('u')
                    .long("upper")
                    .help("Upper bound (default 100)")
                    .allow_negative_numbers(true)
                    .value_parser(clap::value_parser!(i64)),
            )
            .arg(
                Arg::new("count")
                    .short('n')
                    .long("count")
                    .help("How many numbers to write (default 10)")
                    .value_parser(clap::value_parser!(usize)),
            )
            .arg(output_arg(false).required(true))
            .arg(
                Arg::new("seed")
                    .long("seed")
                    .help("Seed for reproducible output")
                    .value_parser(clap::value_parser!(u64)),
            ),
    )
    .subcommand(Command::new("config").about("Print the default JSON run configuration"))
    .help_template(
        "{usage-heading} {usage}\n\n\
         {about-with-newline}\n\
         Version {version}\n\n\
         {all-args}{after-help}",
    )
}

fn input_arg(positional: bool) -> Arg {
    let arg = Arg::new("input")
        .help("Input file: a count followed by that many numbers. Prompts on the terminal if absent.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath);
    if positional {
        arg
    } else {
        arg.short('i').long("input")
    }
}

fn output_arg(positional: bool) -> Arg {
    let arg = Arg::new("output")
        .help("Output file, one number per line. Prints to the terminal if absent.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath);
    if positional {
        arg
    } else {
        arg.short('o').long("output")
    }
}

fn sort_order_arg() -> Arg {
    Arg::new("sort")
        .short('s')
        .long("sort")
        .help("1 or ascend, 2 or descend. Prompts if absent and not configured.")
        .value_parser(clap::value_parser!(SortOrder))
}

fn threshold_arg() -> Arg {
    Arg::new("threshold")
        .short('k')
        .help("Largest sub-array length handed to insertion sort")
        .value_parser(clap::value_parser!(usize))
}

fn search_value_arg() -> Arg {
    Arg::new("value")
        .short('v')
        .long("value")
        .help("Value to search for")
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}
