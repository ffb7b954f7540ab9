//! Plain line-mode frontend
//!
//! A stdin command loop over the same core as the TUI: add and remove
//! options, save and load lists, and run the animated pick with an
//! indicatif spinner standing in for the spin screen.

use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Duration;

use crate::chooser::{step_delay, Chooser, SpinSequence, SpinStep};
use crate::config::AppConfig;
use crate::error;
use crate::store::{storage::ListStorage, OptionStore};
use crate::Result;

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Add(String),
    /// 1-based position, as shown by `list`
    Del(usize),
    Remove(String),
    List,
    Clear,
    Pick,
    Save(Option<String>),
    Load(String),
    Files,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

fn parse_command(line: &str) -> Command {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Command::Empty;
    }

    let (word, rest) = match trimmed.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (trimmed, ""),
    };

    match word {
        "add" if !rest.is_empty() => Command::Add(rest.to_string()),
        "del" => match rest.parse::<usize>() {
            Ok(position) if position > 0 => Command::Del(position),
            _ => Command::Unknown(trimmed.to_string()),
        },
        "rm" if !rest.is_empty() => Command::Remove(rest.to_string()),
        "list" if rest.is_empty() => Command::List,
        "clear" if rest.is_empty() => Command::Clear,
        "pick" | "spin" if rest.is_empty() => Command::Pick,
        "save" => Command::Save(if rest.is_empty() {
            None
        } else {
            Some(rest.to_string())
        }),
        "load" if !rest.is_empty() => Command::Load(rest.to_string()),
        "files" if rest.is_empty() => Command::Files,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

fn print_help() {
    println!("Commands:");
    println!("  add <text>    add an option");
    println!("  del <n>       remove option n (as shown by list)");
    println!("  rm <text>     remove the first option equal to <text>");
    println!("  list          show the options");
    println!("  clear         remove all options");
    println!("  pick          spin and choose one option");
    println!("  save [name]   save the list (timestamped name by default)");
    println!("  load <n|name> load a saved list by files number or name");
    println!("  files         show the saved lists");
    println!("  quit          leave");
}

fn print_list(store: &OptionStore) {
    if store.is_empty() {
        println!("(no options)");
        return;
    }
    for (i, option) in store.options().iter().enumerate() {
        println!("{:>3}. {}", i + 1, option);
    }
}

/// Walk the spin sequence with an indicatif spinner, printing the
/// settled outcome at the end.
async fn animate_pick(sequence: SpinSequence, base_delay: Duration) {
    let pb = indicatif::ProgressBar::new_spinner();
    pb.set_style(indicatif::ProgressStyle::with_template("{spinner} {msg}").unwrap());

    let mut outcome = None;
    for item in sequence {
        match item {
            SpinStep::Reveal { value, step, .. } => {
                pb.set_message(value);
                pb.tick();
                tokio::time::sleep(step_delay(base_delay, step)).await;
            }
            SpinStep::Settle { value } => {
                outcome = Some(value);
            }
        }
    }
    pb.finish_and_clear();

    if let Some(value) = outcome {
        println!("Chosen: {}", value);
    }
}

/// Resolve a `load` argument: a number indexes into the `files`
/// listing, anything else is a file name inside the save directory.
fn resolve_load_path(storage: &ListStorage, arg: &str) -> Result<PathBuf> {
    if let Ok(position) = arg.parse::<usize>() {
        let files = storage.list_saved()?;
        return files
            .get(position.wrapping_sub(1))
            .cloned()
            .ok_or_else(|| crate::SpinPickError::Storage(format!("No saved list #{}", position)));
    }

    let name = if arg.ends_with(".json") {
        arg.to_string()
    } else {
        format!("{}.json", arg)
    };
    Ok(storage.dir().join(name))
}

/// Run the plain frontend until `quit` or end of input
pub async fn run() -> Result<()> {
    let config = AppConfig::load()?;
    let storage = config.list_storage()?;
    let mut store = OptionStore::new();
    let mut chooser = Chooser::new();

    println!("spinpick (plain mode) - type 'help' for commands");

    let mut input = String::new();
    loop {
        print!("> ");
        io::stdout().flush()?;

        input.clear();
        if io::stdin().read_line(&mut input)? == 0 {
            break;
        }

        match parse_command(&input) {
            Command::Empty => {}
            Command::Help => print_help(),
            Command::Quit => break,
            Command::Add(text) => match store.add(&text) {
                Ok(count) => println!("Added ({} options)", count),
                Err(err) => println!("{}", error::user_friendly_message(&err)),
            },
            Command::Del(position) => match store.remove_at(position - 1) {
                Ok(removed) => println!("Removed: {}", removed),
                Err(err) => println!("{}", error::user_friendly_message(&err)),
            },
            Command::Remove(text) => match store.remove_value(&text) {
                Ok(_) => println!("Removed: {}", text),
                Err(err) => println!("{}", error::user_friendly_message(&err)),
            },
            Command::List => print_list(&store),
            Command::Clear => {
                store.clear();
                println!("Cleared");
            }
            Command::Pick => match chooser.spin(store.options(), config.spin_steps) {
                Ok(sequence) => animate_pick(sequence, config.spin_tick()).await,
                Err(err) => println!("{}", error::user_friendly_message(&err)),
            },
            Command::Save(name) => {
                let name = name.unwrap_or_else(ListStorage::default_file_name);
                match storage.save(&name, &store) {
                    Ok(path) => println!("Saved to {}", path.display()),
                    Err(err) => println!("{}", error::user_friendly_message(&err)),
                }
            }
            Command::Load(arg) => {
                let result = resolve_load_path(&storage, &arg)
                    .and_then(|path| storage.load(&path, &mut store));
                match result {
                    Ok(count) => println!("Loaded {} options", count),
                    Err(err) => println!("{}", error::user_friendly_message(&err)),
                }
            }
            Command::Files => {
                let files = storage.list_saved()?;
                if files.is_empty() {
                    println!("(no saved lists)");
                } else {
                    for (i, path) in files.iter().enumerate() {
                        let name = path
                            .file_name()
                            .map(|n| n.to_string_lossy().into_owned())
                            .unwrap_or_else(|| path.display().to_string());
                        println!("{:>3}. {}", i + 1, name);
                    }
                }
            }
            Command::Unknown(line) => {
                println!("Unknown command: {} (try 'help')", line);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("add Pizza"), Command::Add("Pizza".to_string()));
        assert_eq!(
            parse_command("  add  spicy noodles  "),
            Command::Add("spicy noodles".to_string())
        );
        assert_eq!(parse_command("del 2"), Command::Del(2));
        assert_eq!(parse_command("rm Pizza"), Command::Remove("Pizza".to_string()));
        assert_eq!(parse_command("list"), Command::List);
        assert_eq!(parse_command("clear"), Command::Clear);
        assert_eq!(parse_command("pick"), Command::Pick);
        assert_eq!(parse_command("spin"), Command::Pick);
        assert_eq!(parse_command("files"), Command::Files);
        assert_eq!(parse_command("help"), Command::Help);
        assert_eq!(parse_command("quit"), Command::Quit);
    }

    #[test]
    fn test_parse_save_variants() {
        assert_eq!(parse_command("save"), Command::Save(None));
        assert_eq!(
            parse_command("save lunch"),
            Command::Save(Some("lunch".to_string()))
        );
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert_eq!(parse_command(""), Command::Empty);
        assert_eq!(parse_command("   \n"), Command::Empty);
        assert_eq!(parse_command("add"), Command::Unknown("add".to_string()));
        assert_eq!(parse_command("del zero"), Command::Unknown("del zero".to_string()));
        assert_eq!(parse_command("del 0"), Command::Unknown("del 0".to_string()));
        assert_eq!(parse_command("load"), Command::Unknown("load".to_string()));
        assert_eq!(
            parse_command("frobnicate"),
            Command::Unknown("frobnicate".to_string())
        );
    }

    #[test]
    fn test_resolve_load_path_by_name() {
        let storage = ListStorage::with_dir(PathBuf::from("/tmp/saved"));
        let path = resolve_load_path(&storage, "lunch").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/saved/lunch.json"));

        let path = resolve_load_path(&storage, "lunch.json").unwrap();
        assert_eq!(path, PathBuf::from("/tmp/saved/lunch.json"));
    }

    #[test]
    fn test_resolve_load_path_by_number_out_of_range() {
        let storage = ListStorage::with_dir(PathBuf::from("/tmp/does-not-exist"));
        assert!(resolve_load_path(&storage, "1").is_err());
    }
}
