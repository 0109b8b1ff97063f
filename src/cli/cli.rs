use super::*;
use crate::conceal::Visibility;
use crate::navigation::*;
use crate::protocol::*;
use crate::session::*;
use crate::study::Study;
use crate::tree::Path;
use clap::Parser;
use colored::Colorize;
use std::io::Write;
use tokio::io::AsyncBufReadExt;

/// Prompt loop over one study session.
pub struct CLI(Handle);

impl From<Handle> for CLI {
    fn from(handle: Handle) -> Self {
        Self(handle)
    }
}

impl CLI {
    pub async fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        let mut study = Study::open(&args.file)?;
        args.apply(&mut study);
        let viewer = args.viewer(&study.chapter)?;
        let (outbox, mut sent) = tokio::sync::mpsc::unbounded_channel::<Outbound>();
        tokio::spawn(async move {
            while let Some(message) = sent.recv().await {
                println!("{} {}", "socket".magenta(), message.to_json());
            }
        });
        let handle = Session::spawn(study, viewer, args.start()?, CadenceConfig::default(), outbox)?;
        tokio::spawn(Self::watch(handle.frames()));
        let cli = Self::from(handle);
        log::info!("entering study");
        let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
        loop {
            print!("> ");
            std::io::stdout().flush()?;
            let Some(line) = lines.next_line().await? else {
                break;
            };
            match line.trim() {
                "" => continue,
                "quit" => break,
                "exit" => break,
                line => match cli.handle(line) {
                    Err(e) => eprintln!("{}", e),
                    Ok(_) => continue,
                },
            }
        }
        cli.0.close().await?;
        Ok(())
    }
    fn handle(&self, line: &str) -> anyhow::Result<()> {
        let input = match Command::parse_line(line)? {
            Command::First => Input::Step(Step::First),
            Command::Prev => Input::Step(Step::Prev),
            Command::Next => Input::Step(Step::Next),
            Command::Last => Input::Step(Step::Last),
            Command::Hold { step } => Input::Hold(Step::try_from(step.as_str())?),
            Command::Release => Input::Release,
            Command::Wheel { delta } => Input::Wheel(delta),
            Command::Jump { path } => Input::Jump(Path::try_from(path.as_str())?),
            Command::Request => Input::Request,
            Command::Reveal { ply } => Input::Reveal(ply),
            Command::Push { json } => Input::Push(Inbound::decode(&json.join(" "))?),
            Command::Attach => Input::Attach(Box::new(Terminal::default())),
            Command::Detach => Input::Detach,
            Command::Load { file } => Input::Load(Study::open(&file)?),
            Command::Moves => return Ok(Self::print(&self.0.frame())),
        };
        self.0.send(input)
    }
    /// Prints a status line whenever the view moves.
    async fn watch(mut frames: tokio::sync::watch::Receiver<Frame>) {
        let mut last = None;
        while frames.changed().await.is_ok() {
            let frame = frames.borrow_and_update().clone();
            let status = (frame.path.clone(), frame.panel, frame.conceal);
            if last.as_ref() == Some(&status) {
                continue;
            }
            let at = frame
                .current()
                .map(|e| e.san.clone())
                .unwrap_or_else(|| "start".into());
            println!(
                "{} {} {} {:?}",
                format!("[{}]", frame.ply).dimmed(),
                at.bold(),
                format!("analysis {:?}", frame.panel).dimmed(),
                frame.conceal
            );
            last = Some(status);
        }
    }
    fn print(frame: &Frame) {
        for entry in frame.moves.iter() {
            let san = match entry.visibility {
                Visibility::Visible => entry.san.normal(),
                Visibility::Concealed => entry.san.dimmed().italic(),
                Visibility::Hidden => continue,
            };
            let san = if entry.path == frame.path {
                san.bold().underline()
            } else {
                san
            };
            let indent = if entry.mainline { "" } else { "    " };
            println!("{}{:>3} {:<10} {}", indent, entry.ply, san, entry.path.to_string().dimmed());
        }
    }
}
