//! # BigRecipe Admin
//!
//! Terminal front-end for the admin console. Prints the current screen with
//! numbered links and reads one command per line:
//!
//! | Command | Effect |
//! |---------|--------|
//! | `<n>` | follow link `[n]` |
//! | `set <field> <value>` | fill a form field |
//! | `submit` | submit the form |
//! | `recipes` / `ingredients` / `drinks` | jump to a collection |
//! | `html` | print the screen as HTML |
//! | `show` | print the screen again |
//! | `help` | list commands |
//! | `quit` | exit |

use anyhow::Context;
use bigrecipe_admin::clients::AdminClient;
use bigrecipe_admin::config::AdminConfig;
use bigrecipe_admin::error::AdminError;
use bigrecipe_admin::lifecycle::{setup_tracing, AdminSystem};
use bigrecipe_admin::model::ResourceKind;
use bigrecipe_admin::screen::Screen;
use clap::{Parser, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

const HELP: &str = "\
  <n>                   follow link [n]
  set <field> <value>   fill a form field
  submit                submit the form
  recipes | ingredients | drinks
  html                  print the screen as HTML
  show                  print the screen again
  help                  this text
  quit                  exit";

enum Command<'a> {
    Follow(usize),
    Set(&'a str, &'a str),
    Submit,
    Open(ResourceKind),
    Html,
    Show,
    Help,
    Quit,
}

fn parse(line: &str) -> Option<Command<'_>> {
    let line = line.trim();
    if let Ok(number) = line.parse() {
        return Some(Command::Follow(number));
    }
    if let Some(rest) = line.strip_prefix("set ") {
        let (field, value) = rest.trim_start().split_once(' ').unwrap_or((rest.trim(), ""));
        return Some(Command::Set(field, value.trim()));
    }
    match line {
        "submit" => Some(Command::Submit),
        "html" => Some(Command::Html),
        "show" => Some(Command::Show),
        "help" => Some(Command::Help),
        "quit" | "exit" => Some(Command::Quit),
        other => ResourceKind::from_str(other, true).ok().map(Command::Open),
    }
}

fn present(screen: &Screen, html: bool) {
    if html {
        println!("{}", screen.to_html());
    } else {
        println!("{screen}");
    }
}

async fn execute(
    client: &AdminClient,
    screen: &mut Screen,
    command: Command<'_>,
) -> Result<(), AdminError> {
    match command {
        Command::Follow(number) => *screen = client.activate(screen, number).await?,
        Command::Set(field, value) => {
            let form = screen.form.as_mut().ok_or(AdminError::NoForm)?;
            form.fill(field, value)?;
        }
        Command::Submit => {
            let form = screen.form.as_ref().ok_or(AdminError::NoForm)?;
            *screen = client.submit(form).await?;
        }
        Command::Open(kind) => *screen = client.open(kind).await?,
        Command::Html | Command::Show | Command::Help | Command::Quit => {}
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    setup_tracing();
    let config = AdminConfig::parse();

    let system = AdminSystem::new(&config).context("Failed to start console")?;
    let mut screen = system
        .bootstrap(config.entry)
        .await
        .context("Failed to load entry collection")?;
    present(&screen, config.html);

    if !config.once {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let Some(command) = parse(&line) else {
                if !line.trim().is_empty() {
                    println!("Unknown command, try `help`");
                }
                continue;
            };
            match command {
                Command::Quit => break,
                Command::Help => println!("{HELP}"),
                Command::Html => println!("{}", screen.to_html()),
                Command::Show => present(&screen, config.html),
                command => match execute(&system.client, &mut screen, command).await {
                    Ok(()) => present(&screen, config.html),
                    Err(e) => {
                        warn!(error = %e, "Command failed");
                        println!("error: {e}");
                    }
                },
            }
        }
    }

    system.shutdown().await.map_err(anyhow::Error::msg)?;
    info!("Console closed");
    Ok(())
}
