use std::str::FromStr;

use anyhow::{anyhow, bail};

use crate::{state::Field, view::Action};

pub const HELP: &str = "\
Fields:  email|password|data|id|new <value>   (value may be empty)
Buttons: register | check | deactivate | write | get | update | delete
Other:   show | help | quit";

/// One line typed in the terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set(Field, String),
    Press(Action),
    Show,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, Some(rest)),
            None => (line, None),
        };

        let field = match word {
            "email" => Some(Field::Email),
            "password" => Some(Field::Password),
            "data" => Some(Field::Data),
            "id" => Some(Field::DataId),
            "new" => Some(Field::NewData),
            _ => None,
        };
        if let Some(field) = field {
            return Ok(Command::Set(field, rest.unwrap_or_default().to_string()));
        }

        if let Some(rest) = rest {
            bail!("`{word}` takes no argument, got {rest:?}");
        }

        let command = match word {
            "register" => Command::Press(Action::Register),
            "check" => Command::Press(Action::CheckRegistration),
            "deactivate" => Command::Press(Action::Deactivate),
            "write" => Command::Press(Action::WriteData),
            "get" => Command::Press(Action::GetData),
            "update" => Command::Press(Action::UpdateData),
            "delete" => Command::Press(Action::DeleteData),
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(anyhow!("unknown command `{other}`")),
        };
        Ok(command)
    }
}
