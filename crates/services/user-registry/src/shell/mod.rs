//! Interactive console for managing users.
//!
//! Reads one menu choice at a time, collects the fields it needs, calls a
//! single service operation and prints the outcome. Works over any async
//! reader/writer pair so it can be driven by stdin/stdout or by tests.

mod input;

use std::sync::Arc;

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use common::AppError;
use domain::{NewUser, UserId};

use crate::service::UserService;

pub use input::{parse_number, parse_optional_number, InputError, MenuOption};

const MENU: &str = "
User registry
1. Create user
2. Show user by id
3. Show all users
4. Update user
5. Delete user
0. Exit
Choose an option: ";

/// Failure of a single menu action.
#[derive(Error, Debug)]
pub enum ShellError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    App(#[from] AppError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

enum Flow {
    Continue,
    Exit,
}

/// Menu-driven front end over a [`UserService`].
pub struct Shell<R, W> {
    service: Arc<dyn UserService>,
    input: R,
    output: W,
}

impl<R, W> Shell<R, W>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    pub fn new(service: Arc<dyn UserService>, input: R, output: W) -> Self {
        Self {
            service,
            input,
            output,
        }
    }

    /// Give back the writer, e.g. to inspect what was printed.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Run the menu loop until the user picks exit or input ends.
    ///
    /// Only I/O failures on the console itself end the loop with an error;
    /// input and service errors are printed and the menu is shown again.
    pub async fn run(&mut self) -> std::io::Result<()> {
        loop {
            self.write(MENU).await?;
            let Some(line) = self.read_line().await? else {
                break;
            };

            match self.handle(&line).await {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(ShellError::Io(e)) => return Err(e),
                Err(ShellError::Input(e)) => {
                    tracing::warn!("Invalid console input: {}", e);
                    self.say(&format!("Input error: {e}")).await?;
                }
                Err(ShellError::App(e)) => {
                    match &e {
                        AppError::Store(store_err) => tracing::error!(
                            code = e.code(),
                            "Database error: {:?}",
                            store_err.cause()
                        ),
                        _ => tracing::warn!(code = e.code(), "{}", e),
                    }
                    self.say(&e.user_message()).await?;
                }
            }
        }

        self.say("Goodbye").await
    }

    async fn handle(&mut self, line: &str) -> Result<Flow, ShellError> {
        match MenuOption::parse(line)? {
            MenuOption::Create => self.create_user().await?,
            MenuOption::Show => self.show_user().await?,
            MenuOption::List => self.list_users().await?,
            MenuOption::Update => self.update_user().await?,
            MenuOption::Delete => self.delete_user().await?,
            MenuOption::Exit => return Ok(Flow::Exit),
        }
        Ok(Flow::Continue)
    }

    async fn create_user(&mut self) -> Result<(), ShellError> {
        let name = self.ask("Name: ").await?;
        let email = self.ask("Email: ").await?;
        let age = parse_number(&self.ask("Age: ").await?, "Age")?;

        let user = self.service.add_user(NewUser::new(name, email, age)).await?;
        self.say(&format!("User created: {user}")).await?;
        Ok(())
    }

    async fn show_user(&mut self) -> Result<(), ShellError> {
        let id = self.ask_id("User ID: ").await?;

        let user = self.service.get_user(id).await?;
        self.say(&user.to_string()).await?;
        Ok(())
    }

    async fn list_users(&mut self) -> Result<(), ShellError> {
        let users = self.service.list_users().await?;

        if users.is_empty() {
            self.say("No users found").await?;
        }
        for user in users {
            self.say(&user.to_string()).await?;
        }
        Ok(())
    }

    async fn update_user(&mut self) -> Result<(), ShellError> {
        let id = self.ask_id("User ID to update: ").await?;
        let mut user = self.service.get_user(id).await?;

        // Blank answers keep the current value
        let name = self.ask(&format!("New name ({}): ", user.name)).await?;
        if !name.is_empty() {
            user.name = name;
        }
        let email = self.ask(&format!("New email ({}): ", user.email)).await?;
        if !email.is_empty() {
            user.email = email;
        }
        let age = self.ask(&format!("New age ({}): ", user.age)).await?;
        if let Some(age) = parse_optional_number(&age, "Age")? {
            user.age = age;
        }

        let user = self.service.update_user(user).await?;
        self.say(&format!("User updated: {user}")).await?;
        Ok(())
    }

    async fn delete_user(&mut self) -> Result<(), ShellError> {
        let id = self.ask_id("User ID to delete: ").await?;

        if self.service.delete_user(id).await? {
            self.say(&format!("User {id} deleted")).await?;
        } else {
            self.say(&format!("No user with id {id}, nothing deleted")).await?;
        }
        Ok(())
    }

    async fn ask_id(&mut self, prompt: &str) -> Result<UserId, ShellError> {
        let answer = self.ask(prompt).await?;
        Ok(parse_number(&answer, "ID")?)
    }

    /// Prompt and read one trimmed answer; end of input reads as blank.
    async fn ask(&mut self, prompt: &str) -> std::io::Result<String> {
        self.write(prompt).await?;
        Ok(self.read_line().await?.unwrap_or_default())
    }

    async fn read_line(&mut self) -> std::io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line).await? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    async fn say(&mut self, text: &str) -> std::io::Result<()> {
        self.write(text).await?;
        self.write("\n").await
    }

    async fn write(&mut self, text: &str) -> std::io::Result<()> {
        self.output.write_all(text.as_bytes()).await?;
        self.output.flush().await
    }
}
