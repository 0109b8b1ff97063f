use super::*;
use crate::*;

/// Server analysis of the active chapter, and the chart drawn from it.
///
/// Owns the request state and the last selected ply; nothing else
/// mutates either. Navigation and push messages are fed in through
/// [`ServerEval::on_navigate`] and [`ServerEval::on_merge`] by a single
/// caller, so updates are applied in call order.
pub struct ServerEval<A> {
    analyst: A,
    chapter: ChapterId,
    offset: Ply,
    request: Request,
    last: Option<Ply>,
    chart: Option<Box<dyn Chart + Send>>,
}

impl<A> ServerEval<A>
where
    A: Analyst,
{
    /// `offset` is the ply chart point zero is counted from,
    /// see [`Tree::offset`](crate::tree::Tree::offset).
    pub fn new(analyst: A, chapter: ChapterId, offset: Ply) -> Self {
        Self {
            analyst,
            chapter,
            offset,
            request: Request::default(),
            last: None,
            chart: None,
        }
    }
    pub fn chapter(&self) -> &str {
        &self.chapter
    }
    pub fn state(&self) -> Request {
        self.request
    }
    /// Last ply handed to the chart, `None` when nothing is selected.
    pub fn last_ply(&self) -> Option<Ply> {
        self.last
    }
    pub fn is_attached(&self) -> bool {
        self.chart.is_some()
    }
}

impl<A> ServerEval<A>
where
    A: Analyst,
{
    /// Asks the server to analyse the chapter. Allowed once per chapter:
    /// the state moves to requested even if the message is lost, and stays
    /// there until analysis arrives or the chapter changes.
    pub fn request(&mut self) -> Result<(), Error> {
        if self.request != Request::NotRequested {
            return Err(Error::DuplicateRequest(self.request));
        }
        self.request = Request::Requested;
        match self.analyst.request(&self.chapter) {
            Ok(()) => log::info!("[server-eval] requested analysis of {}", self.chapter),
            Err(e) => log::warn!("[server-eval] request for {} lost: {}", self.chapter, e),
        }
        Ok(())
    }
    pub fn reset(&mut self) {
        log::debug!("[server-eval] reset {}", self.chapter);
        self.request = Request::NotRequested;
        self.last = None;
    }
    /// Makes another chapter the active one.
    pub fn switch(&mut self, chapter: ChapterId, offset: Ply) {
        self.chapter = chapter;
        self.offset = offset;
        self.reset();
    }
    /// Analysis for `chapter` was merged into the tree.
    /// Returns false when the message was for another chapter.
    pub fn on_merge(&mut self, chapter: &str, series: &Series) -> bool {
        if chapter != self.chapter {
            log::debug!("[server-eval] ignoring analysis of {}", chapter);
            return false;
        }
        self.request = Request::Available;
        if let Some(chart) = self.chart.as_mut() {
            chart.refresh(series);
        }
        true
    }
    /// The viewed position changed. `ply` is the mainline ply,
    /// or `None` when the position is off the mainline.
    pub fn on_navigate(&mut self, ply: Option<Ply>) {
        if ply == self.last {
            return;
        }
        self.last = ply;
        self.render();
    }
    /// Hands over a live chart and draws the current selection on it.
    pub fn attach(&mut self, mut chart: Box<dyn Chart + Send>, series: &Series) {
        chart.refresh(series);
        self.chart = Some(chart);
        self.render();
    }
    pub fn detach(&mut self) -> Option<Box<dyn Chart + Send>> {
        self.chart.take()
    }
    fn render(&mut self) {
        let Some(chart) = self.chart.as_mut() else {
            return;
        };
        match self.last {
            None => chart.clear_selection(),
            Some(ply) => match ply
                .checked_sub(1 + self.offset)
                .filter(|i| chart.has_point(*i))
            {
                Some(index) => chart.select_point(index),
                None => {
                    let index = ply.checked_sub(1 + self.offset);
                    log::debug!("[server-eval] {}", Error::ChartDesync { ply, index });
                    chart.clear_selection();
                }
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Select(usize),
        Clear,
        Refresh(usize),
    }

    #[derive(Clone, Default)]
    struct Recorder {
        points: usize,
        calls: Arc<Mutex<Vec<Call>>>,
    }

    impl Recorder {
        fn with(points: usize) -> Self {
            Self {
                points,
                ..Self::default()
            }
        }
        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    impl Chart for Recorder {
        fn select_point(&mut self, index: usize) {
            self.calls.lock().unwrap().push(Call::Select(index));
        }
        fn clear_selection(&mut self) {
            self.calls.lock().unwrap().push(Call::Clear);
        }
        fn has_point(&self, index: usize) -> bool {
            index < self.points
        }
        fn refresh(&mut self, series: &Series) {
            self.calls.lock().unwrap().push(Call::Refresh(series.len()));
        }
    }

    #[derive(Clone, Default)]
    struct Socket {
        sent: Arc<Mutex<Vec<String>>>,
        closed: bool,
    }

    impl Analyst for Socket {
        fn request(&self, chapter: &str) -> anyhow::Result<()> {
            if self.closed {
                anyhow::bail!("closed");
            }
            self.sent.lock().unwrap().push(chapter.to_string());
            Ok(())
        }
    }

    fn attached(points: usize, offset: Ply) -> (ServerEval<Socket>, Recorder) {
        let chart = Recorder::with(points);
        let mut eval = ServerEval::new(Socket::default(), "ch".into(), offset);
        eval.attach(Box::new(chart.clone()), &Series::default());
        chart.calls.lock().unwrap().clear();
        (eval, chart)
    }

    #[test]
    fn request_once() {
        let socket = Socket::default();
        let mut eval = ServerEval::new(socket.clone(), "ch".into(), 0);
        assert_eq!(eval.request(), Ok(()));
        assert_eq!(eval.state(), Request::Requested);
        assert_eq!(
            eval.request(),
            Err(Error::DuplicateRequest(Request::Requested))
        );
        assert_eq!(*socket.sent.lock().unwrap(), vec!["ch".to_string()]);
    }

    #[test]
    fn lost_request_stays_requested() {
        let socket = Socket {
            closed: true,
            ..Socket::default()
        };
        let mut eval = ServerEval::new(socket, "ch".into(), 0);
        assert_eq!(eval.request(), Ok(()));
        assert_eq!(eval.state(), Request::Requested);
    }

    #[test]
    fn no_request_after_availability() {
        let mut eval = ServerEval::new(Socket::default(), "ch".into(), 0);
        eval.on_merge("ch", &Series::default());
        assert_eq!(
            eval.request(),
            Err(Error::DuplicateRequest(Request::Available))
        );
    }

    #[test]
    fn reset_from_any_state() {
        for merged in [false, true] {
            let (mut eval, _) = attached(20, 0);
            eval.request().unwrap();
            if merged {
                eval.on_merge("ch", &Series::default());
            }
            eval.on_navigate(Some(4));
            eval.reset();
            assert_eq!(eval.state(), Request::NotRequested);
            assert_eq!(eval.last_ply(), None);
        }
    }

    #[test]
    fn merge_refreshes_chart() {
        let (mut eval, chart) = attached(20, 0);
        assert!(eval.on_merge("ch", &Series::default()));
        assert_eq!(eval.state(), Request::Available);
        assert_eq!(chart.calls(), vec![Call::Refresh(0)]);
    }

    #[test]
    fn merge_for_other_chapter_is_ignored() {
        let (mut eval, chart) = attached(20, 0);
        assert!(!eval.on_merge("other", &Series::default()));
        assert_eq!(eval.state(), Request::NotRequested);
        assert!(chart.calls().is_empty());
    }

    #[test]
    fn repeated_ply_touches_chart_once() {
        let (mut eval, chart) = attached(20, 0);
        eval.on_navigate(Some(10));
        eval.on_navigate(Some(10));
        assert_eq!(chart.calls(), vec![Call::Select(9)]);
    }

    #[test]
    fn leaving_mainline_clears() {
        let (mut eval, chart) = attached(20, 0);
        eval.on_navigate(Some(3));
        eval.on_navigate(None);
        assert_eq!(chart.calls(), vec![Call::Select(2), Call::Clear]);
        assert_eq!(eval.last_ply(), None);
    }

    #[test]
    fn out_of_range_ply_clears() {
        let (mut eval, chart) = attached(20, 0);
        eval.on_navigate(Some(25));
        assert_eq!(chart.calls(), vec![Call::Clear]);
        assert_eq!(eval.last_ply(), Some(25));
    }

    #[test]
    fn ply_before_first_point_clears() {
        let (mut eval, chart) = attached(20, 4);
        eval.on_navigate(Some(3));
        eval.on_navigate(Some(5));
        assert_eq!(chart.calls(), vec![Call::Clear, Call::Select(0)]);
    }

    #[test]
    fn detached_chart_caches_ply() {
        let mut eval = ServerEval::new(Socket::default(), "ch".into(), 0);
        eval.on_navigate(Some(7));
        assert_eq!(eval.last_ply(), Some(7));
        let chart = Recorder::with(20);
        eval.attach(Box::new(chart.clone()), &Series::default());
        assert_eq!(chart.calls(), vec![Call::Refresh(0), Call::Select(6)]);
    }

    #[test]
    fn switch_starts_over() {
        let (mut eval, _) = attached(20, 0);
        eval.request().unwrap();
        eval.on_navigate(Some(2));
        eval.switch("next".into(), 3);
        assert_eq!(eval.chapter(), "next");
        assert_eq!(eval.state(), Request::NotRequested);
        assert_eq!(eval.last_ply(), None);
        assert!(!eval.on_merge("ch", &Series::default()));
        assert!(eval.on_merge("next", &Series::default()));
        assert_eq!(eval.state(), Request::Available);
    }

    /// Offset comes from a display-ply override of zero, which falls back
    /// to the root's own ply of one.
    #[test]
    fn scenario_twenty_point_chart() {
        use crate::tree::*;
        let mut root = Node::root(1);
        root.display_ply = Some(0);
        let offset = Tree::from(root).offset();
        let (mut eval, chart) = attached(20, offset);
        eval.on_merge("ch", &Series::default());
        eval.on_navigate(Some(10));
        eval.on_navigate(Some(10));
        eval.on_navigate(None);
        eval.on_navigate(Some(25));
        assert_eq!(
            chart.calls(),
            vec![Call::Refresh(0), Call::Select(8), Call::Clear, Call::Clear]
        );
    }
}
