use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;

// 导入库模块
use pathtrace::api;
use pathtrace::config::Config;
use pathtrace::core::SolveError;
use pathtrace::utils::logging;

#[derive(Parser)]
#[clap(version = "0.1.0", author = "PathTrace Contributors")]
enum Cli {
    /// Start the PathTrace HTTP service
    Serve {
        #[clap(short, long, default_value = "config.toml")]
        config: String,
    },
    /// Solve a request file and print the trace
    Solve {
        /// JSON file holding graph, startNode, endNode and algorithm
        #[clap(short, long)]
        request: String,
        /// Override the algorithm named in the request file
        #[clap(short, long)]
        algorithm: Option<String>,
        #[clap(short, long)]
        config: Option<String>,
        /// Pretty-print the JSON trace
        #[clap(long)]
        pretty: bool,
        /// Print one human-readable line per event instead of JSON
        #[clap(long)]
        describe: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    match cli {
        Cli::Serve { config } => {
            println!("Starting PathTrace service with config: {}", config);
            api::start_service(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Cli::Solve {
            request,
            algorithm,
            config,
            pretty,
            describe,
        } => {
            let mut config = match config {
                Some(path) => Config::load_or_default(path),
                None => Config::default(),
            };
            // 一次性命令只输出到 stderr
            config.log.to_file = false;
            if let Err(e) = logging::init(&config.log) {
                eprintln!("Failed to initialize logging: {}", e);
            }

            let outcome = api::solve_file(&config, &request, algorithm.as_deref())?;
            let code = match outcome {
                Ok(trace) => {
                    if describe {
                        for event in trace.events() {
                            println!("{}", event.describe());
                        }
                    } else if pretty {
                        println!("{}", serde_json::to_string_pretty(&trace)?);
                    } else {
                        println!("{}", serde_json::to_string(&trace)?);
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {}", e);
                    exit_code(&e)
                }
            };

            logging::shutdown();
            Ok(code)
        }
    }
}

fn exit_code(err: &SolveError) -> ExitCode {
    if err.is_client_error() {
        ExitCode::from(2)
    } else {
        ExitCode::from(1)
    }
}
