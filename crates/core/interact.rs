use dialoguer::Input;
use eyre::{eyre, Context, Result};
use log::trace;
use olr::SearchSession;

use crate::app;

const CLEAR: &str = "clear";
const QUIT: &str = "quit";

pub fn user_input(prompt: &str) -> Result<String> {
    Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()
        .wrap_err_with(|| eyre!("User input cancelled"))
}

pub fn run(mut session: SearchSession) -> Result<()> {
    loop {
        let input = user_input("ISBN")?;
        let input = input.trim();

        match input {
            "" | QUIT => return Ok(()),
            CLEAR => {
                trace!("Clearing screen");
                session.clear();
                continue;
            }
            isbn => session.perform_search(isbn),
        }

        session.wait();

        if let Some(alert) = session.take_alert() {
            eprintln!("{}", app::alert_text(&alert));
        } else {
            app::render(session.screen());
        }
    }
}
