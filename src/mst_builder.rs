/*
 * Copyright (c) Facebook, Inc. and its affiliates.
 *
 * This source code is licensed under the MIT license found in the
 * LICENSE file in the root directory of this source tree.
 */
extern crate clap;
extern crate lib_spanning;

use std::io;

use clap::{App, Arg, ArgMatches};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use lib_spanning::spanning::error::{SpanningError, SpanningResult};
use lib_spanning::spanning::input::Input;
use lib_spanning::spanning::mst_transformer::MSTTransformer;
use lib_spanning::spanning::output::Output;
use lib_spanning::spanning::transformer_base::TransformerBase;

fn get_command_line_args() -> ArgMatches<'static> {
    let matches: ArgMatches = App::new("Spanning MST Builder")
        .version("0.1.0")
        .about(
            "Computes minimum spanning trees (Prim's algorithm) of weighted undirected graphs \
             specified from stdin as graph_key\\tsource\\ttarget\\tweight rows.",
        )
        .arg(
            Arg::with_name("start")
                .short("s")
                .long("start")
                .takes_value(true)
                .help("Label of the node to grow each tree from (default: source of the \
                       first row of each graph)."),
        )
        .arg(
            Arg::with_name("require_full_coverage")
                .short("r")
                .long("require_full_coverage")
                .help("Fail unless every node of the graph is reachable from the start node."),
        )
        .arg(
            Arg::with_name("long_format")
                .short("l")
                .long("long_format")
                .help("Print one row per tree edge: graph_key\\tsource\\ttarget\\tweight, \
                       followed by graph_key\\ttotal_cost\\tcost."),
        )
        .arg(
            Arg::with_name("trace")
                .short("t")
                .long("trace")
                .help("Log the visited set and frontier at every step (to stderr)."),
        )
        .arg(
            Arg::with_name("log_level")
                .long("log_level")
                .takes_value(true)
                .possible_values(&["trace", "debug", "info", "warn", "error"])
                .default_value("warn")
                .help("Log level for messages written to stderr."),
        )
        .get_matches();
    matches
}

fn init_logging(matches: &ArgMatches) -> SpanningResult<()> {
    let log_level = match matches.value_of("log_level") {
        Some("trace") => Level::TRACE,
        Some("debug") => Level::DEBUG,
        Some("info") => Level::INFO,
        Some("error") => Level::ERROR,
        _ => Level::WARN,
    };
    let log_level = if matches.is_present("trace") && log_level < Level::DEBUG {
        Level::DEBUG
    } else {
        log_level
    };
    let subscriber = FmtSubscriber::builder()
        .with_writer(io::stderr)
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| SpanningError::from(format!("Could not install logger: {}", e)))
}

fn main() -> SpanningResult<()> {
    let matches: ArgMatches = get_command_line_args();
    init_logging(&matches)?;
    let mut transformer = MSTTransformer::from_argmatches(&matches)?;
    let stdio: io::Stdin = io::stdin();
    let input: Input = Input::console(&stdio);
    let output: Output = Output::console();
    transformer.run(input, output)?;
    Ok(())
}
