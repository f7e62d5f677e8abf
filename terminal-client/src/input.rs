use common::Position;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Position),
    Reset,
    Quit,
}

/// Accepts `row col` (space or comma separated), `r` to restart, `q` to quit.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "" => return Err("Enter a move as 'row col'".to_string()),
        "r" | "reset" => return Ok(Command::Reset),
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        _ => {}
    }

    let parts: Vec<&str> = trimmed
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let [row, col] = parts.as_slice() else {
        return Err(format!("Expected 'row col', got '{}'", trimmed));
    };

    let row = row
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid row", row))?;
    let col = col
        .parse::<usize>()
        .map_err(|_| format!("'{}' is not a valid column", col))?;

    Ok(Command::Move(Position::new(row, col)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_command("3 4\n"), Ok(Command::Move(Position::new(3, 4))));
        assert_eq!(parse_command(" 11,0 "), Ok(Command::Move(Position::new(11, 0))));
        assert_eq!(parse_command("7, 2"), Ok(Command::Move(Position::new(7, 2))));
    }

    #[test]
    fn test_parse_keywords() {
        assert_eq!(parse_command("r"), Ok(Command::Reset));
        assert_eq!(parse_command("R\n"), Ok(Command::Reset));
        assert_eq!(parse_command("quit"), Ok(Command::Quit));
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_command("").is_err());
        assert!(parse_command("5").is_err());
        assert!(parse_command("1 2 3").is_err());
        assert!(parse_command("-1 2").is_err());
        assert!(parse_command("a b").is_err());
    }
}
