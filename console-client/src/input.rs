use common::games::gomoku::{GameMode, Player};

#[derive(Debug, Clone, PartialEq)]
pub enum InputCommand {
    Place { row: i64, col: i64 },
    Click { x: f32, y: f32 },
    NewGame,
    SetBoardSize(usize),
    SetMode(GameMode),
    SetHumanSide(Player),
    ShowSettings,
    ShowBoard,
    History,
    Help,
    Quit,
}

pub const HELP_TEXT: &str = "\
Commands:
  <row> <col>        place a stone (0-based)
  click <x> <y>      place a stone at canvas coordinates
  new                start a new game with the pending settings
  size 10|15|20      board size for the next game
  mode pvp|pve       two players, or play against the bot
  side black|white   your colour against the bot
  settings           show pending settings
  board              redraw the current board
  history            recent game events
  help               show this text
  quit               exit";

pub fn parse_command(line: &str) -> Result<InputCommand, String> {
    let mut parts = line.split_whitespace();
    let Some(head) = parts.next() else {
        return Err("Empty command".to_string());
    };
    let args: Vec<&str> = parts.collect();

    let command = match head.to_ascii_lowercase().as_str() {
        "new" | "start" => no_args(&args, head, InputCommand::NewGame)?,
        "settings" => no_args(&args, head, InputCommand::ShowSettings)?,
        "board" => no_args(&args, head, InputCommand::ShowBoard)?,
        "history" | "log" => no_args(&args, head, InputCommand::History)?,
        "help" | "?" => no_args(&args, head, InputCommand::Help)?,
        "quit" | "exit" | "q" => no_args(&args, head, InputCommand::Quit)?,
        "size" => InputCommand::SetBoardSize(parse_single(&args, "size")?),
        "mode" => InputCommand::SetMode(parse_mode(single_arg(&args, "mode")?)?),
        "side" => InputCommand::SetHumanSide(parse_side(single_arg(&args, "side")?)?),
        "click" => {
            let [x, y] = two_args(&args, "click")?;
            InputCommand::Click {
                x: parse_number(x, "x")?,
                y: parse_number(y, "y")?,
            }
        }
        _ => {
            let row = parse_number(head, "row")?;
            let [col] = args.as_slice() else {
                return Err("Expected: <row> <col>".to_string());
            };
            InputCommand::Place {
                row,
                col: parse_number(col, "col")?,
            }
        }
    };

    Ok(command)
}

fn no_args(args: &[&str], head: &str, command: InputCommand) -> Result<InputCommand, String> {
    if args.is_empty() {
        Ok(command)
    } else {
        Err(format!("'{}' takes no arguments", head))
    }
}

fn single_arg<'a>(args: &[&'a str], name: &str) -> Result<&'a str, String> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(format!("Expected: {} <value>", name)),
    }
}

fn two_args<'a>(args: &[&'a str], name: &str) -> Result<[&'a str; 2], String> {
    match args {
        [a, b] => Ok([*a, *b]),
        _ => Err(format!("Expected: {} <x> <y>", name)),
    }
}

fn parse_single<T: std::str::FromStr>(args: &[&str], name: &str) -> Result<T, String> {
    parse_number(single_arg(args, name)?, name)
}

fn parse_number<T: std::str::FromStr>(value: &str, name: &str) -> Result<T, String> {
    value
        .parse()
        .map_err(|_| format!("Invalid {}: '{}'", name, value))
}

fn parse_mode(value: &str) -> Result<GameMode, String> {
    match value.to_ascii_lowercase().as_str() {
        "pvp" | "two" | "twoplayer" => Ok(GameMode::TwoPlayer),
        "pve" | "bot" | "playervsbot" => Ok(GameMode::PlayerVsBot),
        _ => Err(format!("Unknown mode '{}', expected pvp or pve", value)),
    }
}

pub fn parse_side(value: &str) -> Result<Player, String> {
    match value.to_ascii_lowercase().as_str() {
        "black" | "first" | "b" => Ok(Player::First),
        "white" | "second" | "w" => Ok(Player::Second),
        _ => Err(format!("Unknown side '{}', expected black or white", value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_place() {
        assert_eq!(parse_command("7 8"), Ok(InputCommand::Place { row: 7, col: 8 }));
        assert_eq!(parse_command("  -1   0 "), Ok(InputCommand::Place { row: -1, col: 0 }));
        assert!(parse_command("7").is_err());
        assert!(parse_command("7 8 9").is_err());
        assert!(parse_command("seven 8").is_err());
    }

    #[test]
    fn test_parse_click() {
        assert_eq!(
            parse_command("click 45.5 30"),
            Ok(InputCommand::Click { x: 45.5, y: 30.0 })
        );
        assert!(parse_command("click 1").is_err());
    }

    #[test]
    fn test_parse_settings_commands() {
        assert_eq!(parse_command("size 20"), Ok(InputCommand::SetBoardSize(20)));
        assert_eq!(parse_command("MODE pve"), Ok(InputCommand::SetMode(GameMode::PlayerVsBot)));
        assert_eq!(parse_command("mode pvp"), Ok(InputCommand::SetMode(GameMode::TwoPlayer)));
        assert_eq!(parse_command("side white"), Ok(InputCommand::SetHumanSide(Player::Second)));
        assert!(parse_command("side red").is_err());
        assert!(parse_command("size").is_err());
        assert!(parse_command("size big").is_err());
    }

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_command("new"), Ok(InputCommand::NewGame));
        assert_eq!(parse_command("quit"), Ok(InputCommand::Quit));
        assert_eq!(parse_command("help"), Ok(InputCommand::Help));
        assert_eq!(parse_command("settings"), Ok(InputCommand::ShowSettings));
        assert_eq!(parse_command("board"), Ok(InputCommand::ShowBoard));
        assert_eq!(parse_command("log"), Ok(InputCommand::History));
        assert!(parse_command("new now").is_err());
        assert!(parse_command("").is_err());
    }
}
