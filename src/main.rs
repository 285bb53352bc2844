//! Word Chain - CLI
//!
//! Word-chain game with an interactive terminal mode, one-shot commands and a
//! line-delimited JSON server.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::time::Duration;
use word_chain::{
    commands::run_play,
    config::{DEFAULT_ORACLE_URL, GameConfig, OracleConfig},
    output::print_response,
    server::{
        GameServer, Request,
        protocol::{CheckRequest, HintRequest, SubmitRequest},
        serve_stdio, serve_tcp,
    },
    validity::{BoundedCache, WordValidator, oracle_from_config},
    wordlists::loader::load_or_default,
};

#[derive(Parser)]
#[command(
    name = "word_chain",
    about = "Word-chain game: build new words from the letters of the current word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary file (one word per line); the built-in list is used if missing
    #[arg(short, long, global = true, env = "WORD_CHAIN_DICTIONARY")]
    dictionary: Option<PathBuf>,

    /// Never query the external dictionary service
    #[arg(long, global = true, env = "WORD_CHAIN_OFFLINE")]
    offline: bool,

    /// Base URL of the dictionary service, queried as <url>/<word>
    #[arg(long, global = true, env = "WORD_CHAIN_ORACLE_URL", default_value = DEFAULT_ORACLE_URL)]
    oracle_url: String,

    /// Timeout for a single dictionary service request, in milliseconds
    #[arg(long, global = true, default_value = "2000")]
    oracle_timeout_ms: u64,

    /// Pause before each dictionary service request, in milliseconds
    #[arg(long, global = true, default_value = "100")]
    oracle_delay_ms: u64,

    /// Maximum number of words kept in the validity cache
    #[arg(long, global = true, env = "WORD_CHAIN_CACHE_CAPACITY", default_value = "10000")]
    cache_capacity: usize,

    /// Print one-shot command results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game in the terminal (default)
    Play,

    /// Pick a start word
    Start,

    /// Play a word against the current word
    Submit {
        /// The current word
        current_word: String,

        /// The word to play
        new_word: String,

        /// Words already played, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,

        /// The word was taken from a hint (half points)
        #[arg(long)]
        from_hint: bool,
    },

    /// Show hints for the current word
    Hint {
        /// The current word
        current_word: String,

        /// Words already played, comma separated
        #[arg(short, long, value_delimiter = ',')]
        used: Vec<String>,
    },

    /// Check whether a word is valid
    Check {
        /// Word to check
        word: String,
    },

    /// Serve JSON requests (stdin/stdout, or TCP with --listen)
    Serve {
        /// Address to listen on, e.g. 127.0.0.1:5002
        #[arg(short, long)]
        listen: Option<String>,
    },
}

impl Cli {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            dictionary: self.dictionary.clone(),
            cache_capacity: self.cache_capacity,
            oracle: OracleConfig {
                enabled: !self.offline,
                base_url: self.oracle_url.clone(),
                timeout: Duration::from_millis(self.oracle_timeout_ms),
                min_delay: Duration::from_millis(self.oracle_delay_ms),
            },
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = cli.game_config();
    let json = cli.json;

    // Dictionary and validity cache live for the whole process
    let words = load_or_default(config.dictionary.as_ref());
    let oracle = oracle_from_config(&config.oracle);
    let validator = WordValidator::new(&words, oracle, BoundedCache::new(config.cache_capacity));
    let server = GameServer::new(&words, validator);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play(&words, server.validator()).map_err(|e| anyhow::anyhow!(e)),
        Commands::Start => {
            print_response(&server.start(), json);
            Ok(())
        }
        Commands::Submit {
            current_word,
            new_word,
            used,
            from_hint,
        } => {
            let response = server.handle(Request::Submit(SubmitRequest {
                current_word,
                new_word,
                used_words: used,
                from_hint,
            }));
            print_response(&response, json);
            Ok(())
        }
        Commands::Hint { current_word, used } => {
            let response = server.handle(Request::Hint(HintRequest {
                current_word,
                used_words: used,
            }));
            print_response(&response, json);
            Ok(())
        }
        Commands::Check { word } => {
            let response = server.handle(Request::Check(CheckRequest { word }));
            print_response(&response, json);
            Ok(())
        }
        Commands::Serve { listen } => match listen {
            Some(addr) => {
                serve_tcp(&server, addr.as_str()).with_context(|| format!("Failed to serve on {addr}"))
            }
            None => serve_stdio(&server).context("Failed to serve on stdin/stdout"),
        },
    }
}
