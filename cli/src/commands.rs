use std::path::{Path, PathBuf};

use thiserror::Error;
use visionchef_core::domain::{
    analysis::value_objects::{AnalysisInput, AnalysisMode},
    profile::entities::{CalculationMode, DietType, Disease, Region},
    view::{entities::View, value_objects::NavTab},
};

/// One line of user input, decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ingredients(String),
    Photo { path: PathBuf, mode: AnalysisMode },
    /// Zero-based index into the offered choices.
    Choose(usize),
    Cancel,
    /// Zero-based index into the history.
    Open(usize),
    Close,
    /// Zero-based index into the open recipe's ingredients.
    Substitutes(usize),
    Age(u32),
    Weight(u32),
    Height(u32),
    Diet(DietType),
    Region(Region),
    Mode(CalculationMode),
    Disease(Disease),
    Save,
    Language,
    Go(NavTab),
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("empty input")]
    Empty,

    #[error("unknown command: {0}")]
    Unknown(String),

    #[error("`{command}` expects {expected}")]
    BadArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("unsupported image type: {0}")]
    UnsupportedImage(String),
}

fn position(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    match arg.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(CommandError::BadArgument {
            command,
            expected: "a number starting at 1",
        }),
    }
}

fn measure(command: &'static str, arg: &str) -> Result<u32, CommandError> {
    match arg.parse::<u32>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::BadArgument {
            command,
            expected: "a positive whole number",
        }),
    }
}

fn keyword<T: std::str::FromStr>(
    command: &'static str,
    arg: &str,
    expected: &'static str,
) -> Result<T, CommandError> {
    arg.parse::<T>()
        .map_err(|_| CommandError::BadArgument { command, expected })
}

fn image_path(command: &'static str, arg: &str) -> Result<PathBuf, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::BadArgument {
            command,
            expected: "an image path",
        });
    }
    let path = PathBuf::from(arg);
    mime_for_path(&path)?;
    Ok(path)
}

fn bare(command: &'static str, rest: &str, value: Command) -> Result<Command, CommandError> {
    if rest.is_empty() {
        Ok(value)
    } else {
        Err(CommandError::BadArgument {
            command,
            expected: "no argument",
        })
    }
}

/// Decodes a command word and its argument. `None` when `head` is no command.
fn parse_keyword(head: &str, rest: &str) -> Option<Result<Command, CommandError>> {
    let parsed = match head.to_lowercase().as_str() {
        "quit" | "exit" => bare("quit", rest, Command::Quit),
        "help" | "?" => bare("help", rest, Command::Help),
        "home" => bare("home", rest, Command::Go(NavTab::Home)),
        "history" => bare("history", rest, Command::Go(NavTab::History)),
        "profile" => bare("profile", rest, Command::Go(NavTab::Profile)),
        "lang" => bare("lang", rest, Command::Language),
        "cook" if rest.is_empty() => Err(CommandError::BadArgument {
            command: "cook",
            expected: "a list of ingredients",
        }),
        "cook" => Ok(Command::Ingredients(rest.to_string())),
        "photo" => image_path("photo", rest).map(|path| Command::Photo {
            path,
            mode: AnalysisMode::Ingredients,
        }),
        "meal" => image_path("meal", rest).map(|path| Command::Photo {
            path,
            mode: AnalysisMode::Meal,
        }),
        "choose" => position("choose", rest).map(Command::Choose),
        "cancel" => bare("cancel", rest, Command::Cancel),
        "open" => position("open", rest).map(Command::Open),
        "close" => bare("close", rest, Command::Close),
        "subs" => position("subs", rest).map(Command::Substitutes),
        "age" => measure("age", rest).map(Command::Age),
        "weight" => measure("weight", rest).map(Command::Weight),
        "height" => measure("height", rest).map(Command::Height),
        "diet" => keyword("diet", rest, "none, vegan, keto, paleo or gluten_free").map(Command::Diet),
        "region" => keyword(
            "region",
            rest,
            "international, gulf, egyptian, levant or maghreb",
        )
        .map(Command::Region),
        "mode" => keyword("mode", rest, "free or calculated").map(Command::Mode),
        "disease" => {
            keyword("disease", rest, "diabetes, hypertension or celiac").map(Command::Disease)
        }
        "save" => bare("save", rest, Command::Save),
        _ => return None,
    };
    Some(parsed)
}

/// Parses one input line. On the home screen, text that does not form a
/// valid command is a list of ingredients; `cook <ingredients>` forces that
/// reading anywhere.
pub fn parse_command(line: &str, view: View) -> Result<Command, CommandError> {
    let line = line.trim();
    if line.is_empty() {
        return Err(CommandError::Empty);
    }

    let (head, rest) = match line.split_once(char::is_whitespace) {
        Some((head, rest)) => (head, rest.trim()),
        None => (line, ""),
    };

    match parse_keyword(head, rest) {
        Some(Ok(command)) => Ok(command),
        _ if view == View::Home => Ok(Command::Ingredients(line.to_string())),
        Some(Err(e)) => Err(e),
        None => Err(CommandError::Unknown(head.to_string())),
    }
}

pub fn mime_for_path(path: &Path) -> Result<&'static str, CommandError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match extension.as_str() {
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "png" => Ok("image/png"),
        "webp" => Ok("image/webp"),
        "gif" => Ok("image/gif"),
        "heic" => Ok("image/heic"),
        _ => Err(CommandError::UnsupportedImage(path.display().to_string())),
    }
}

/// Reads the whole image and encodes it for the model.
pub async fn load_image(path: &Path) -> Result<AnalysisInput, anyhow::Error> {
    let mime_type = mime_for_path(path)?;
    let bytes = tokio::fs::read(path).await?;
    Ok(AnalysisInput::from_image_bytes(&bytes, mime_type))
}

pub const HELP: &str = "\
commands:
  <ingredients>         create recipes from typed ingredients (home screen)
  cook <ingredients>    same, even when the text starts with a command word
  photo <path>          create recipes from a photo of ingredients
  meal <path>           analyze a photo of a ready meal
  choose <n> | cancel   pick one of several suggestions
  open <n>              open a history entry
  subs <n>              substitutes for ingredient n of the open recipe
  close                 close the open recipe
  age|weight|height <n>, diet <d>, region <r>, mode <m>, disease <d>
  save                  leave the profile screen
  home | history | profile | lang | quit";
