use super::*;
use crate::conceal::*;
use crate::evaluation::*;
use crate::navigation::*;
use crate::protocol::*;
use crate::study::*;
use crate::tree::*;
use crate::*;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::WeakUnboundedSender;
use tokio::sync::mpsc::unbounded_channel;
use tokio::sync::watch;

/// Study view actor.
///
/// Owns the navigator, the server evaluation, the reveal boundary and the
/// held-button timer. User input, timer ticks and push messages all arrive
/// on one inbox and are handled one at a time, so chart updates are applied
/// in arrival order. A [`Frame`] is published after every input.
pub struct Session {
    chapter: Chapter,
    viewer: Viewer,
    nav: Navigator,
    eval: ServerEval<UnboundedSender<Outbound>>,
    conceal: Option<Conceal>,
    outbox: UnboundedSender<Outbound>,
    cadence: CadenceConfig,
    repeat: Option<Repeat>,
    holds: u64,
    ticks: WeakUnboundedSender<Input>,
}

impl Session {
    /// Opens `study` for `viewer` and starts the actor on the current runtime.
    /// Outbound socket messages are written to `outbox`.
    pub fn spawn(
        study: Study,
        viewer: Viewer,
        start: Start,
        cadence: CadenceConfig,
        outbox: UnboundedSender<Outbound>,
    ) -> Result<Handle, Error> {
        let Study { chapter, root } = study;
        let tree = Tree::checked(root)?;
        let offset = tree.offset();
        let nav = Navigator::new(tree, start)?;
        let (tx, rx) = unbounded_channel();
        let mut session = Self {
            eval: ServerEval::new(outbox.clone(), chapter.id.clone(), offset),
            conceal: Conceal::of(&chapter, &viewer),
            ticks: tx.downgrade(),
            repeat: None,
            holds: 0,
            chapter,
            viewer,
            nav,
            outbox,
            cadence,
        };
        session.analysed();
        session.eval.on_navigate(session.nav.ply());
        let (frames, watcher) = watch::channel(session.frame());
        let task = tokio::spawn(session.run(rx, frames));
        Ok(Handle::new(tx, watcher, task))
    }
    async fn run(mut self, mut inbox: UnboundedReceiver<Input>, frames: watch::Sender<Frame>) {
        log::info!("[session] opened chapter {}", self.chapter.id);
        while let Some(input) = inbox.recv().await {
            log::trace!("[session] {}", input);
            if let Err(e) = self.handle(input) {
                log::warn!("[session] {}", e);
            }
            self.eval.on_navigate(self.nav.ply());
            frames.send_replace(self.frame());
        }
        self.release();
        log::info!("[session] closed chapter {}", self.chapter.id);
    }
    fn handle(&mut self, input: Input) -> Result<(), Error> {
        match input {
            Input::Step(step) => {
                self.nav.step(step);
            }
            Input::Hold(step) => self.hold(step),
            Input::Release => self.release(),
            Input::Tick(step, hold) => self.tick(step, hold),
            Input::Wheel(delta) => {
                self.nav.wheel(delta);
            }
            Input::Jump(path) => {
                self.nav.jump(path)?;
            }
            Input::Request => self.request()?,
            Input::Reveal(ply) => self.reveal(ply),
            Input::Push(inbound) => self.push(inbound)?,
            Input::Attach(chart) => self.eval.attach(chart, &Series::mainline(self.nav.tree())),
            Input::Detach => {
                self.eval.detach();
            }
            Input::Load(study) => self.load(study)?,
        }
        Ok(())
    }
}

impl Session {
    fn hold(&mut self, step: Step) {
        self.release();
        self.nav.step(step);
        if !step.repeats() {
            return;
        }
        self.holds += 1;
        let hold = self.holds;
        let ticks = self.ticks.clone();
        self.repeat = Some(Repeat::after(Cadence::from(self.cadence), move || {
            if let Some(inbox) = ticks.upgrade() {
                let _ = inbox.send(Input::Tick(step, hold));
            }
        }));
    }
    /// Ticks queued before a release, or from an earlier hold, are stale.
    fn tick(&mut self, step: Step, hold: u64) {
        if self.repeat.is_some() && hold == self.holds {
            self.nav.step(step);
        }
    }
    fn release(&mut self) {
        if let Some(mut repeat) = self.repeat.take() {
            repeat.cancel();
        }
    }
}

impl Session {
    fn panel(&self) -> Panel {
        Panel::of(self.eval.state(), self.nav.tree(), &self.viewer)
    }
    fn request(&mut self) -> Result<(), Error> {
        match self.panel() {
            panel @ (Panel::TooShort | Panel::Forbidden) => {
                log::debug!("[session] analysis not offered: {:?}", panel);
                Ok(())
            }
            _ => self.eval.request(),
        }
    }
    /// A chapter whose analysis already exists starts out available.
    fn analysed(&mut self) {
        if self.chapter.analysis.is_some() {
            self.eval
                .on_merge(&self.chapter.id, &Series::mainline(self.nav.tree()));
        }
    }
    fn reveal(&mut self, ply: Ply) {
        match self.conceal.as_mut() {
            Some(conceal) if conceal.owner() => {
                if conceal.extend(ply) {
                    self.chapter.conceal = Some(ply);
                    let boundary = Boundary {
                        ch: self.chapter.id.clone(),
                        ply,
                    };
                    if self.outbox.send(Outbound::Conceal(boundary)).is_err() {
                        log::warn!("[session] reveal of {} not sent, socket closed", ply);
                    }
                }
            }
            _ => log::debug!("[session] reveal ignored, viewer does not own a boundary"),
        }
    }
    fn push(&mut self, inbound: Inbound) -> Result<(), Error> {
        if inbound.chapter() != self.chapter.id {
            log::debug!("[session] ignoring {}", inbound);
            return Ok(());
        }
        match inbound {
            Inbound::AnalysisProgress(progress) => {
                self.nav.merge(&progress.evals);
                self.eval
                    .on_merge(&progress.ch, &Series::mainline(self.nav.tree()));
            }
            Inbound::SetPath(position) => {
                self.nav.jump(position.path)?;
            }
            Inbound::Conceal(boundary) => {
                match self.conceal.as_mut() {
                    Some(conceal) => {
                        conceal.extend(boundary.ply);
                    }
                    None => {
                        let owner = self.viewer.owns(&self.chapter);
                        self.conceal = Some(Conceal::new(owner, boundary.ply));
                    }
                }
                self.chapter.conceal = self.conceal.map(|c| c.ply());
            }
        }
        Ok(())
    }
    fn load(&mut self, study: Study) -> Result<(), Error> {
        let Study { chapter, root } = study;
        let tree = Tree::checked(root)?;
        let offset = tree.offset();
        self.release();
        self.nav = Navigator::new(tree, Start::Root)?;
        self.conceal = Conceal::of(&chapter, &self.viewer);
        self.eval.switch(chapter.id.clone(), offset);
        self.chapter = chapter;
        self.analysed();
        log::info!("[session] switched to chapter {}", self.chapter.id);
        Ok(())
    }
    fn frame(&self) -> Frame {
        Frame {
            chapter: self.chapter.id.clone(),
            path: self.nav.path().clone(),
            ply: self.nav.node().shown_ply(),
            moves: Moves::collect(&self.nav, self.conceal.as_ref())
                .into_iter()
                .map(Entry::from)
                .collect(),
            panel: self.panel(),
            request: self.eval.state(),
            selection: self.eval.last_ply(),
            conceal: self.conceal.map(|c| c.ply()),
            can_jump_prev: self.nav.can_jump_prev(),
            can_jump_next: self.nav.can_jump_next(),
        }
    }
}
