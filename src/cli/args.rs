use crate::navigation::Start;
use crate::study::*;
use crate::tree::Path;
use crate::*;
use clap::Parser;

#[derive(Parser, Debug)]
#[command(author, version, about = "Step through a draughts study", long_about = None)]
pub struct Args {
    /// Study document as JSON
    #[arg(required = true)]
    pub file: std::path::PathBuf,
    /// View as the chapter owner
    #[arg(long)]
    pub owner: bool,
    /// View as a study contributor, allowed to request analysis
    #[arg(long)]
    pub contributor: bool,
    /// Reveal boundary, overriding the one stored in the chapter
    #[arg(long, env = "STUDY_CONCEAL")]
    pub conceal: Option<Ply>,
    /// Where to start: root, last, or a path
    #[arg(long, default_value = "root")]
    pub start: String,
}

impl Args {
    pub fn start(&self) -> Result<Start, Error> {
        match self.start.as_str() {
            "root" => Ok(Start::Root),
            "last" => Ok(Start::Last),
            path => Path::try_from(path).map(Start::Path),
        }
    }
    /// Viewing as owner needs a chapter that has one.
    pub fn viewer(&self, chapter: &Chapter) -> anyhow::Result<Viewer> {
        if !self.owner {
            return Ok(Viewer::new(None, self.contributor));
        }
        match chapter.owner.clone() {
            Some(id) => Ok(Viewer::new(Some(id), true)),
            None => anyhow::bail!("--owner given but chapter {} has no owner", chapter.id),
        }
    }
    pub fn apply(&self, study: &mut Study) {
        if let Some(ply) = self.conceal {
            study.chapter.conceal = Some(ply);
        }
    }
}
