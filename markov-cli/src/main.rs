//! `markov` command: learn a word chain from text files and print generated text.

use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser};
use log::{debug, info, warn};

use markov_core::io::read_words;
use markov_core::model::generation_input::GenerationInput;
use markov_core::model::generator::Generator;
use markov_core::model::picker::{IndexPicker, RandomPicker};
use markov_core::model::word_chain::WordChain;

/// Generate pseudo-random text from a word chain learned on the given files
#[derive(Debug, Parser)]
#[command(name = "markov", version, about)]
struct Cli {
	/// Minimum number of words before stopping at the next sentence end
	#[arg(value_name = "WORDS")]
	words: usize,

	/// Text files to learn from; unreadable files are skipped
	#[arg(value_name = "FILE", required = true)]
	files: Vec<PathBuf>,

	/// Seed for reproducible output
	#[arg(long, env = "MARKOV_SEED")]
	seed: Option<u64>,

	/// Fail instead of walking more than this many steps
	#[arg(long, value_name = "STEPS")]
	max_steps: Option<usize>,

	/// Suppress log output
	#[arg(short, long)]
	quiet: bool,

	/// Increase verbosity
	#[arg(short, long, action = ArgAction::Count)]
	verbose: u8,
}

impl Cli {
	fn init_logging(&self) {
		let log_level = match self.verbose {
			0 => "warn",
			1 => "info",
			2 => "debug",
			_ => "trace",
		};

		if !self.quiet {
			env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
		}
	}

	fn train(&self) -> WordChain {
		let mut chain = WordChain::new();
		for path in &self.files {
			match read_words(path) {
				Ok(words) => chain.train(&words),
				Err(e) => warn!("{e}"),
			}
		}
		info!("learned {} contexts from {} files", chain.len(), self.files.len());
		if !chain.has_start() {
			warn!("nothing was learned, generation cannot reach a sentence end");
		}
		chain
	}

	fn generate(&self, generator: &Generator, picker: &mut impl IndexPicker) -> Result<String> {
		match self.max_steps {
			Some(limit) => {
				let mut input = GenerationInput::new(self.words);
				input.set_max_steps(limit)?;
				Ok(generator.generate_bounded(&input, picker)?)
			}
			None => Ok(generator.generate(self.words, picker)),
		}
	}
}

fn main() -> Result<()> {
	let cli = Cli::parse();
	cli.init_logging();
	debug!("arguments: {cli:?}");

	let generator = Generator::new(cli.train());
	let text = match cli.seed {
		Some(seed) => cli.generate(&generator, &mut RandomPicker::seeded(seed))?,
		None => cli.generate(&generator, &mut RandomPicker::from_thread_rng())?,
	};

	println!("{text}");
	Ok(())
}
