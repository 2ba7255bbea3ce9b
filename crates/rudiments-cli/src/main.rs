use std::path::PathBuf;

use anyhow::Result;
use clap::ArgMatches;
use log::LevelFilter;

use rudiments_cli::cli::build_cli;
use rudiments_cli::commands::bayes::{self, BayesHoldOutParams};
use rudiments_cli::commands::knn::{self, DigitsParams, KnnHoldOutParams};
use rudiments_cli::commands::tree::{self, TreeBuildParams};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("RUDIMENTS_LOG", "error,rudiments=info"))
        .init();

    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("knn", sub_m)) => handle_knn(sub_m),
        Some(("tree", sub_m)) => handle_tree(sub_m),
        Some(("bayes", sub_m)) => handle_bayes(sub_m),
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_knn(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("holdout", holdout_matches)) => {
            let params = KnnHoldOutParams::from_arguments(holdout_matches)?;
            log::info!("[Rudiments::Knn] Hold-out on {:?}", params.data);

            match knn::run_hold_out(&params) {
                Ok(report) => {
                    println!("the total error rate is: {:.6}", report.error_rate());
                    println!("{}", report);
                    Ok(())
                }
                Err(e) => {
                    log::error!("k-NN hold-out failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        Some(("digits", digits_matches)) => {
            let params = DigitsParams::from_arguments(digits_matches)?;
            log::info!(
                "[Rudiments::Knn] Digits: train {:?}, test {:?}",
                params.train_dir,
                params.test_dir
            );

            match knn::run_digits(&params) {
                Ok(report) => {
                    println!("the total number of errors is: {}", report.errors);
                    println!("the total error rate is: {:.6}", report.error_rate());
                    Ok(())
                }
                Err(e) => {
                    log::error!("Digit recognition failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!(),
    }
}

fn handle_tree(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("build", build_matches)) => {
            let params = TreeBuildParams::from_arguments(build_matches)?;
            log::info!("[Rudiments::Tree] Growing tree from {:?}", params.data);

            match tree::run_build(&params) {
                Ok(tree) => {
                    print!("{}", tree);
                    eprintln!(
                        "[Rudiments::Tree] Stored tree in {:?}",
                        params.output_file
                    );
                    Ok(())
                }
                Err(e) => {
                    log::error!("Tree construction failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        Some(("classify", classify_matches)) => {
            let tree_path: &PathBuf = classify_matches.get_one("tree").unwrap();
            let values: Vec<String> = classify_matches
                .get_many::<String>("values")
                .unwrap_or_default()
                .cloned()
                .collect();

            match tree::run_classify(tree_path, &values) {
                Ok(label) => {
                    println!("{}", label);
                    Ok(())
                }
                Err(e) => {
                    log::error!("Classification failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!(),
    }
}

fn handle_bayes(matches: &ArgMatches) -> Result<()> {
    match matches.subcommand() {
        Some(("holdout", holdout_matches)) => {
            let params = BayesHoldOutParams::from_arguments(holdout_matches)?;
            log::info!(
                "[Rudiments::Bayes] Hold-out on {:?} vs {:?} ({} documents each)",
                params.positive_dir,
                params.negative_dir,
                params.docs
            );

            match bayes::run_hold_out(&params) {
                Ok(evaluation) => {
                    for (i, report) in evaluation.reports.iter().enumerate() {
                        println!("iteration {}: {}", i + 1, report);
                    }
                    println!("the mean error rate is: {:.6}", evaluation.mean_error_rate());

                    if let Some(limit) = params.top_words {
                        let top = evaluation.classifier.model.top_words(
                            &evaluation.classifier.vocabulary,
                            params.bayes.top_word_threshold,
                        )?;
                        print!("{}", bayes::format_top_words(&top, limit));
                    }
                    Ok(())
                }
                Err(e) => {
                    log::error!("Naive Bayes hold-out failed: {:#}", e);
                    std::process::exit(1)
                }
            }
        }
        _ => unreachable!(),
    }
}
