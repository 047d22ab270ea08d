mod adapters;
mod cli;
mod config;
mod core;

use clap::Parser;

use cli::context::Context;
use cli::{Cli, Commands};

fn main() {
    let args = Cli::parse();

    cli::logging::init(args.verbose);
    cli::output::set_quiet(args.quiet);

    let result = Context::from_cli(&args).and_then(|ctx| match &args.command {
        Commands::Create(key) => cli::commands::create::execute(&ctx, key),
        Commands::Read => cli::commands::read::execute(&ctx),
        Commands::Update {
            key_type,
            namespace,
            ascii_armor,
        } => cli::commands::update::execute(
            &ctx,
            key_type.as_deref(),
            namespace.as_deref(),
            ascii_armor.as_deref(),
        ),
        Commands::Delete => cli::commands::delete::execute(&ctx),
        Commands::Plan(key) => cli::commands::plan::execute(&ctx, key),
        Commands::Apply(key) => cli::commands::apply::execute(&ctx, key),
        Commands::Lookup { namespace, key_id } => {
            cli::commands::lookup::execute(&ctx, namespace, key_id)
        }
        Commands::Schema => cli::commands::schema::execute(),
    });

    if let Err(e) = result {
        cli::output::error(&format!("Error: {e}"));
        std::process::exit(1);
    }
}
