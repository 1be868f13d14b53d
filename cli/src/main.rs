mod args;
mod commands;
mod executor;
mod render;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;
use visionchef_core::{
    application::create_chef_app,
    domain::{common::ClientConfig, view::{entities::View, value_objects::Action}},
};

use crate::{
    args::Args,
    commands::{Command, CommandError, parse_command},
    executor::{Flow, execute},
    render::render,
};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut app = create_chef_app(&ClientConfig::from(args));
    println!("{}", render(app.session(), app.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let command = match parse_command(&line, app.view()) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                eprintln!("{e}");
                continue;
            }
        };

        if matches!(command, Command::Ingredients(_) | Command::Photo { .. })
            && app.view() == View::Home
        {
            println!("{}", app.translations().detecting);
        }

        match execute(&mut app, command).await {
            Ok(Flow::Quit) => break,
            Ok(Flow::Print(text)) => println!("{text}"),
            Ok(Flow::Continue) => {}
            Err(e) => eprintln!("{e}"),
        }

        println!("{}", render(app.session(), app.state()));
        if app.session().alert.is_some() {
            app.dispatch(Action::DismissAlert)?;
        }
    }

    Ok(())
}
