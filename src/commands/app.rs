use anyhow::Result;
use clap::Args;
use colored::Colorize;
use dialoguer::{Input, Password, Select};
use indicatif::ProgressBar;
use std::time::Duration;

use crate::api::{AuthClient, AuthError};
use crate::config::Config;
use crate::models::User;
use crate::state::{CatalogStore, SessionStore};
use crate::ui::{App, Tui, TuiOutcome};

#[derive(Args, Default)]
pub struct AppCommand {}

impl AppCommand {
    pub async fn execute(self) -> Result<()> {
        let config = Config::load()?;
        let client = AuthClient::new(&config)?;
        let mut session = SessionStore::new(client);
        let catalog = CatalogStore::with_builtin();

        println!("FitMe - Fitness Tracking Dashboard");
        println!();

        loop {
            let Some(user) = auth_flow(&mut session).await? else {
                return Ok(());
            };

            println!();
            println!("{} Welcome, {}!", "✓".green(), user.name);

            let mut tui = Tui::new(App::new(user, &catalog))?;
            let outcome = tui.run(&mut session);
            // Restore the terminal before touching stdout again
            drop(tui);

            match outcome? {
                TuiOutcome::Quit => return Ok(()),
                TuiOutcome::SignedOut => {
                    session.clear();
                    println!("Signed out.");
                    println!();
                }
            }
        }
    }
}

/// Prompt until the user authenticates or chooses to quit
async fn auth_flow(session: &mut SessionStore) -> Result<Option<User>> {
    loop {
        let choice = Select::new()
            .with_prompt("Get started")
            .items(&["Sign in", "Create account", "Quit"])
            .default(0)
            .interact()?;

        let result = match choice {
            0 => {
                let email: String = Input::new().with_prompt("Email").interact_text()?;
                let password = Password::new().with_prompt("Password").interact()?;

                let spinner = auth_spinner(format!("Signing in as {}...", email));
                let result = session.authenticate(&email, &password).await;
                spinner.finish_and_clear();
                result
            }
            1 => {
                let name: String = Input::new().with_prompt("Name").interact_text()?;
                let email: String = Input::new().with_prompt("Email").interact_text()?;
                let password = Password::new()
                    .with_prompt("Password")
                    .with_confirmation("Confirm password", "Passwords do not match")
                    .interact()?;

                let spinner = auth_spinner(format!("Creating account for {}...", email));
                let result = session.register(&name, &email, &password).await;
                spinner.finish_and_clear();
                result
            }
            _ => return Ok(None),
        };

        match result {
            Ok(user) => return Ok(Some(user)),
            Err(err) => {
                // Connectivity problems look different from rejections
                let marker = match err {
                    AuthError::Unreachable => "!".yellow(),
                    _ => "✗".red(),
                };
                println!("{} {}", marker, err);
                println!();
            }
        }
    }
}

fn auth_spinner(message: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}
