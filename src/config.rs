//! Run configuration.
//!
//! The colour and directory come either from command-line flags or from
//! interactive answers. Both sources go through the same resolution
//! functions, so validation and the fallback to the default colour behave
//! identically whichever way a value arrives.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use crate::colour::Colour;
use crate::error::{DarkError, Result};
use crate::output::Printer;

/// Question asked when no colour flag is given.
pub const CUSTOM_COLOUR_QUESTION: &str = "Do you want to use a custom color? (y/n, default: n):";

/// Question asked for the custom colour value.
pub const COLOUR_QUESTION: &str = "Enter RGBA color values (e.g., 240,240,240,255):";

/// Question asked when no directory flag is given.
pub const DIRECTORY_QUESTION: &str = "Enter the directory path to process:";

/// A source of interactive answers.
pub trait Prompt {
    /// Ask `question` and return the answer with surrounding whitespace
    /// removed.
    ///
    /// Returns [`DarkError::Cancelled`] when the user abandons the prompt.
    fn ask(&mut self, question: &str) -> Result<String>;
}

/// Prompts on the terminal, reading answers from stdin.
///
/// Questions are written to stderr so stdout stays free for `--json`.
/// End of input or an interrupted read counts as a cancellation.
pub struct StdinPrompt;

impl Prompt for StdinPrompt {
    fn ask(&mut self, question: &str) -> Result<String> {
        {
            let mut stderr = io::stderr().lock();
            write!(stderr, "{} ", question)?;
            stderr.flush()?;
        }

        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) => Err(DarkError::Cancelled),
            Ok(_) => Ok(line.trim().to_string()),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => Err(DarkError::Cancelled),
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub directory: PathBuf,
    pub colour: Colour,
}

/// Resolve colour then directory, asking only for what the flags omit.
pub fn resolve(
    colour_flag: Option<&str>,
    directory_flag: Option<&Path>,
    prompt: &mut dyn Prompt,
    printer: &Printer,
) -> Result<Settings> {
    let colour = resolve_colour(colour_flag, prompt, printer)?;
    let directory = resolve_directory(directory_flag, prompt)?;
    Ok(Settings { directory, colour })
}

/// Resolve the target colour.
///
/// A flag value wins. Without one the user is asked whether they want a
/// custom colour; any answer other than `y`/`yes` keeps the default.
/// Invalid input, from either source, falls back to the default with a
/// warning.
pub fn resolve_colour(
    flag: Option<&str>,
    prompt: &mut dyn Prompt,
    printer: &Printer,
) -> Result<Colour> {
    if let Some(value) = flag {
        return Ok(colour_or_default(value, printer));
    }

    let answer = prompt.ask(CUSTOM_COLOUR_QUESTION)?;
    if !is_yes(&answer) {
        return Ok(Colour::DEFAULT);
    }

    let value = prompt.ask(COLOUR_QUESTION)?;
    Ok(colour_or_default(&value, printer))
}

/// Resolve the directory to scan from the flag, or by asking.
///
/// The path is not checked here; see [`check_directory`].
pub fn resolve_directory(flag: Option<&Path>, prompt: &mut dyn Prompt) -> Result<PathBuf> {
    match flag {
        Some(path) => Ok(path.to_path_buf()),
        None => Ok(PathBuf::from(prompt.ask(DIRECTORY_QUESTION)?)),
    }
}

/// Ensure `path` names an existing directory.
pub fn check_directory(path: &Path) -> Result<()> {
    if path.is_dir() {
        Ok(())
    } else {
        Err(DarkError::InvalidDirectory {
            path: path.to_path_buf(),
        })
    }
}

/// Validate a colour string, falling back to [`Colour::DEFAULT`].
fn colour_or_default(value: &str, printer: &Printer) -> Colour {
    match value.parse::<Colour>() {
        Ok(colour) => {
            printer.info("Using", &format!("custom color {}", colour));
            colour
        }
        Err(e) => {
            printer.warning(
                "Warning",
                &format!("{}; expected R,G,B,A (e.g., 240,240,240,255)", e),
            );
            printer.warning("Warning", &format!("using default color {}", Colour::DEFAULT));
            Colour::DEFAULT
        }
    }
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::VecDeque;
    use tempfile::tempdir;

    /// Answers questions from a fixed script and records what was asked.
    struct ScriptedPrompt {
        answers: VecDeque<Result<String>>,
        asked: Vec<String>,
    }

    impl ScriptedPrompt {
        fn new(answers: &[&str]) -> Self {
            Self {
                answers: answers.iter().map(|a| Ok(a.to_string())).collect(),
                asked: Vec::new(),
            }
        }

        fn cancelled() -> Self {
            Self {
                answers: VecDeque::from([Err(DarkError::Cancelled)]),
                asked: Vec::new(),
            }
        }
    }

    impl Prompt for ScriptedPrompt {
        fn ask(&mut self, question: &str) -> Result<String> {
            self.asked.push(question.to_string());
            self.answers
                .pop_front()
                .unwrap_or_else(|| panic!("unexpected question: {question}"))
        }
    }

    #[test]
    fn test_colour_flag_valid() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let colour = resolve_colour(Some("1, 2, 3, 4"), &mut prompt, &Printer::new()).unwrap();

        assert_eq!(colour, Colour::new(1, 2, 3, 4));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_colour_flag_invalid_falls_back() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let colour = resolve_colour(Some("300,10,10,255"), &mut prompt, &Printer::new()).unwrap();

        assert_eq!(colour, Colour::DEFAULT);
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_colour_prompt_declined() {
        for answer in ["n", "", "no", "maybe"] {
            let mut prompt = ScriptedPrompt::new(&[answer]);
            let colour = resolve_colour(None, &mut prompt, &Printer::new()).unwrap();

            assert_eq!(colour, Colour::DEFAULT);
            assert_eq!(prompt.asked, vec![CUSTOM_COLOUR_QUESTION.to_string()]);
        }
    }

    #[test]
    fn test_colour_prompt_accepted() {
        for answer in ["y", "Y", "yes", " YES "] {
            let mut prompt = ScriptedPrompt::new(&[answer, "20,30,40,50"]);
            let colour = resolve_colour(None, &mut prompt, &Printer::new()).unwrap();

            assert_eq!(colour, Colour::new(20, 30, 40, 50));
            assert_eq!(
                prompt.asked,
                vec![
                    CUSTOM_COLOUR_QUESTION.to_string(),
                    COLOUR_QUESTION.to_string()
                ]
            );
        }
    }

    #[test]
    fn test_colour_prompt_invalid_falls_back() {
        let mut prompt = ScriptedPrompt::new(&["y", "1,2,3"]);
        let colour = resolve_colour(None, &mut prompt, &Printer::new()).unwrap();
        assert_eq!(colour, Colour::DEFAULT);
    }

    #[test]
    fn test_colour_prompt_cancelled() {
        let mut prompt = ScriptedPrompt::cancelled();
        let err = resolve_colour(None, &mut prompt, &Printer::new()).unwrap_err();
        assert!(err.is_cancelled());
    }

    #[test]
    fn test_directory_flag() {
        let mut prompt = ScriptedPrompt::new(&[]);
        let dir = resolve_directory(Some(Path::new("assets/icons")), &mut prompt).unwrap();

        assert_eq!(dir, PathBuf::from("assets/icons"));
        assert!(prompt.asked.is_empty());
    }

    #[test]
    fn test_directory_prompt() {
        let mut prompt = ScriptedPrompt::new(&["assets/icons"]);
        let dir = resolve_directory(None, &mut prompt).unwrap();

        assert_eq!(dir, PathBuf::from("assets/icons"));
        assert_eq!(prompt.asked, vec![DIRECTORY_QUESTION.to_string()]);
    }

    #[test]
    fn test_resolve_asks_colour_before_directory() {
        let mut prompt = ScriptedPrompt::new(&["n", "icons"]);
        let settings = resolve(None, None, &mut prompt, &Printer::new()).unwrap();

        assert_eq!(
            settings,
            Settings {
                directory: PathBuf::from("icons"),
                colour: Colour::DEFAULT,
            }
        );
        assert_eq!(
            prompt.asked,
            vec![
                CUSTOM_COLOUR_QUESTION.to_string(),
                DIRECTORY_QUESTION.to_string()
            ]
        );
    }

    #[test]
    fn test_check_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("file_icon.png");
        std::fs::write(&file, b"").unwrap();

        assert!(check_directory(dir.path()).is_ok());
        assert!(matches!(
            check_directory(&file),
            Err(DarkError::InvalidDirectory { .. })
        ));
        assert!(matches!(
            check_directory(&dir.path().join("missing")),
            Err(DarkError::InvalidDirectory { .. })
        ));
    }
}
