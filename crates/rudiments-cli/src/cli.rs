use std::path::PathBuf;

use clap::{Arg, ArgAction, Command, ValueHint};

fn config_arg() -> Arg {
    Arg::new("config")
        .short('c')
        .long("config")
        .help("Path to a JSON configuration file. Command-line options override its values.")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn k_arg() -> Arg {
    Arg::new("k")
        .short('k')
        .long("k")
        .help("Number of neighbors that vote")
        .value_parser(clap::value_parser!(usize))
}

/// Argument grammar of the `rudiments` binary.
pub fn build_cli() -> Command {
    Command::new("rudiments")
        .version(clap::crate_version!())
        .about("Rudiments CLI - nearest neighbors, decision trees and naive Bayes from first principles")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("knn")
                .about("Evaluate the k-nearest-neighbor classifier")
                .subcommand_required(true)
                .subcommand(
                    Command::new("holdout")
                        .about("Hold out the first rows of a tab-separated table as test set")
                        .arg(
                            Arg::new("data")
                                .help("Tab-separated numeric features with an integer label in the last column")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(k_arg())
                        .arg(
                            Arg::new("ratio")
                                .long("ratio")
                                .help("Fraction of rows held out as test set")
                                .value_parser(clap::value_parser!(f64)),
                        )
                        .arg(
                            Arg::new("no_normalize")
                                .long("no-normalize")
                                .help("Compare raw feature values instead of rescaling them to [0, 1]")
                                .action(ArgAction::SetTrue),
                        )
                        .arg(config_arg()),
                )
                .subcommand(
                    Command::new("digits")
                        .about("Classify a directory of digit bitmaps against a training directory")
                        .arg(
                            Arg::new("train_dir")
                                .help("Directory of <label>_<index>.txt training bitmaps")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::DirPath),
                        )
                        .arg(
                            Arg::new("test_dir")
                                .help("Directory of <label>_<index>.txt test bitmaps")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::DirPath),
                        )
                        .arg(k_arg())
                        .arg(config_arg()),
                ),
        )
        .subcommand(
            Command::new("tree")
                .about("Grow, store and query ID3 decision trees")
                .subcommand_required(true)
                .subcommand(
                    Command::new("build")
                        .about("Grow a tree from a tab-separated categorical table and store it as JSON")
                        .arg(
                            Arg::new("data")
                                .help("Tab-separated categorical rows with the label in the last column")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("output_file")
                                .short('o')
                                .long("output")
                                .help("Path of the JSON tree file to write")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("features")
                                .short('f')
                                .long("features")
                                .help(
                                    "Comma-separated feature names. Without them (here or in the \
                                     config), the first row of the table is read as header.",
                                )
                                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                        )
                        .arg(config_arg()),
                )
                .subcommand(
                    Command::new("classify")
                        .about("Classify one sample with a stored tree")
                        .arg(
                            Arg::new("tree")
                                .help("JSON tree file written by `tree build`")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::FilePath),
                        )
                        .arg(
                            Arg::new("values")
                                .help("Feature values in training column order")
                                .required(true)
                                .num_args(1..)
                                .value_parser(clap::builder::NonEmptyStringValueParser::new()),
                        ),
                ),
        )
        .subcommand(
            Command::new("bayes")
                .about("Evaluate the naive Bayes text classifier")
                .subcommand_required(true)
                .subcommand(
                    Command::new("holdout")
                        .about("Repeated random hold-out over two folders of numbered text documents")
                        .arg(
                            Arg::new("positive_dir")
                                .help("Folder of class-1 documents named 1.txt, 2.txt, ...")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::DirPath),
                        )
                        .arg(
                            Arg::new("negative_dir")
                                .help("Folder of class-0 documents named 1.txt, 2.txt, ...")
                                .required(true)
                                .value_parser(clap::value_parser!(PathBuf))
                                .value_hint(ValueHint::DirPath),
                        )
                        .arg(
                            Arg::new("docs")
                                .short('n')
                                .long("docs")
                                .help("Number of documents to read from each folder")
                                .required(true)
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("vectorizer")
                                .long("vectorizer")
                                .help("Document encoding")
                                .value_parser(["set", "bag"]),
                        )
                        .arg(
                            Arg::new("test_size")
                                .long("test-size")
                                .help("Documents drawn as test set per iteration")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("iterations")
                                .long("iterations")
                                .help("Number of random hold-out rounds to average")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("prune_top")
                                .long("prune-top")
                                .help("Drop this many of the most frequent tokens from the vocabulary")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(
                            Arg::new("seed")
                                .long("seed")
                                .help("Seed for the hold-out draws")
                                .value_parser(clap::value_parser!(u64)),
                        )
                        .arg(
                            Arg::new("top_words")
                                .long("top-words")
                                .help("Print up to this many of the most indicative tokens per class")
                                .value_parser(clap::value_parser!(usize)),
                        )
                        .arg(config_arg()),
                ),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
}
