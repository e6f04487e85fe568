use clap::Parser;
use emap_build::{app, cli::BootstrapCli};

fn main() {
    let cli = BootstrapCli::parse();
    app::finish(app::run_bootstrap(cli))
}
