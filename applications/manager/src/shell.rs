//! Line-oriented interactive shell around a [`BookManager`].

use crate::command::{Command, HELP};
use crate::manager::BookManager;
use crate::view::render;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

const PROMPT: &str = "> ";

/// What the shell shows after running a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Redraw the screen
    Render,
    /// Print a note; state is unchanged
    Notice(String),
    /// Leave the shell
    Quit,
}

/// Apply one command to the manager.
pub async fn execute(manager: &BookManager, command: Command) -> Outcome {
    debug!(?command, "Executing command");

    match command {
        Command::Set { field, value } => manager.handle_change(field, value).await,
        Command::Add => manager.add_book().await,
        Command::Update => manager.update_book().await,
        Command::Submit => manager.submit().await,
        Command::Cancel => manager.reset_form().await,
        Command::Edit(id) => match manager.find_book(id).await {
            Some(book) => manager.handle_edit(&book).await,
            None => return Outcome::Notice(format!("No listed book has ID {}.", id)),
        },
        Command::Delete(id) => manager.delete_book(id).await,
        Command::Lookup(id) => {
            if let Some(id) = id {
                manager.set_id_to_fetch(id).await;
            }
            manager.get_book_by_id().await;
        }
        Command::Refresh => manager.fetch_all_books().await,
        Command::Show => {}
        Command::Help => return Outcome::Notice(HELP.to_string()),
        Command::Quit => return Outcome::Quit,
    }

    Outcome::Render
}

/// Run the shell until `quit` or end of input.
///
/// The screen is drawn once on entry and again after every command that
/// may have changed state.
pub async fn run<R, W>(manager: &BookManager, input: R, output: &mut W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();

    draw(manager, output).await?;

    loop {
        output.write_all(PROMPT.as_bytes()).await?;
        output.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                output
                    .write_all(format!("{}\nType 'help' for a list of commands.\n", e).as_bytes())
                    .await?;
                continue;
            }
        };

        match execute(manager, command).await {
            Outcome::Render => draw(manager, output).await?,
            Outcome::Notice(text) => {
                output.write_all(text.as_bytes()).await?;
                output.write_all(b"\n").await?;
            }
            Outcome::Quit => break,
        }
    }

    output.flush().await
}

async fn draw<W: AsyncWrite + Unpin>(manager: &BookManager, output: &mut W) -> std::io::Result<()> {
    let screen = render(&manager.snapshot().await);
    output.write_all(b"\n").await?;
    output.write_all(screen.as_bytes()).await?;
    output.flush().await
}
