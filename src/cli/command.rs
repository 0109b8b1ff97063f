use clap::Parser;

#[derive(Parser, Debug, PartialEq)]
#[command(author, version, about, long_about = None)]
pub enum Command {
    #[command(about = "Go to the root position", alias = "f")]
    First,
    #[command(about = "Go back one move", alias = "p")]
    Prev,
    #[command(about = "Go forward along the mainline", alias = "n")]
    Next,
    #[command(about = "Go to the end of the mainline", alias = "l")]
    Last,
    #[command(about = "Hold a navigation button down")]
    Hold {
        #[arg(required = true)]
        step: String,
    },
    #[command(about = "Let go of the held button", alias = "r")]
    Release,
    #[command(about = "Scroll by a vertical delta")]
    Wheel {
        #[arg(required = true, allow_negative_numbers = true)]
        delta: f64,
    },
    #[command(about = "Jump to a path", alias = "j")]
    Jump {
        #[arg(required = true)]
        path: String,
    },
    #[command(about = "Request server analysis of the chapter")]
    Request,
    #[command(about = "Reveal the mainline up to a ply")]
    Reveal {
        #[arg(required = true)]
        ply: usize,
    },
    #[command(about = "Deliver a server push message given as JSON")]
    Push {
        #[arg(required = true, num_args = 1..)]
        json: Vec<String>,
    },
    #[command(about = "List the moves", alias = "ls")]
    Moves,
    #[command(about = "Show the evaluation chart")]
    Attach,
    #[command(about = "Hide the evaluation chart")]
    Detach,
    #[command(about = "Open another chapter")]
    Load {
        #[arg(required = true)]
        file: std::path::PathBuf,
    },
}

impl Command {
    pub fn parse_line(line: &str) -> Result<Self, clap::Error> {
        Self::try_parse_from(std::iter::once("> ").chain(line.split_whitespace()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aliases() {
        assert_eq!(Command::parse_line("n").unwrap(), Command::Next);
        assert_eq!(Command::parse_line("ls").unwrap(), Command::Moves);
    }

    #[test]
    fn arguments() {
        assert_eq!(
            Command::parse_line("wheel -1.5").unwrap(),
            Command::Wheel { delta: -1.5 }
        );
        assert_eq!(
            Command::parse_line(r#"push {"t":"conceal", "d":{}}"#).unwrap(),
            Command::Push {
                json: vec![r#"{"t":"conceal","#.into(), r#""d":{}}"#.into()]
            }
        );
        assert!(Command::parse_line("jump").is_err());
        assert!(Command::parse_line("dance").is_err());
    }
}
