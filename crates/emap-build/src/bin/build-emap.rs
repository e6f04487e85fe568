use clap::Parser;
use emap_build::{app, cli::BuildCli};

fn main() {
    let cli = BuildCli::parse();
    app::finish(app::run_build(cli))
}
