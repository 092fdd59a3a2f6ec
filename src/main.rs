#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "gltfdoc", about = "glTF .glb/.gltf inspection tools")]
struct Cli {
	/// Log decode details to stderr (overridden by RUST_LOG).
	#[arg(short, long, global = true)]
	verbose: bool,
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Decode materials, meshes, and accessor data into a JSON report.
	Report(cmd::report::Args),
	/// Show container header, chunk table, and document counts.
	Info(cmd::info::Args),
	/// Decode a single accessor by index.
	Accessor(cmd::accessor::Args),
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if let Err(err) = run(cli.command) {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run(command: Commands) -> gltfdoc::gltf::Result<()> {
	match command {
		Commands::Report(args) => cmd::report::run(args),
		Commands::Info(args) => cmd::info::run(args),
		Commands::Accessor(args) => cmd::accessor::run(args),
	}
}

fn init_tracing(verbose: bool) {
	let fallback = if verbose { "gltfdoc=debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).with_target(false).init();
}
