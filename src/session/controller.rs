//! The session state machine.
//!
//! One [`Session`] owns the line editor, the journal and the pipeline.
//! Each [`Action`] is one transition; the caller redraws after every
//! transition and clears the error line once it has been shown.

use crate::actor::Action;
use crate::editor::LineEditor;
use crate::error::SessionError;
use crate::journal::Journal;
use crate::pipeline::{Outcome, Pipeline, PipelineError, Spawner, SystemSpawner};
use crate::terminal::{Renderer, View};

use super::keys::KeySource;

/// Prompt shown before the input line.
pub const PROMPT: &str = "txtmanip> ";

/// Where the session stands after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Waiting for the next key.
    #[default]
    Idle,
    /// A quit key was pressed.
    Quit,
}

/// Interactive editing session over one text buffer.
pub struct Session<S: Spawner = SystemSpawner> {
    editor: LineEditor,
    journal: Journal,
    pipeline: Pipeline<S>,
    state: SessionState,
}

impl<S: Spawner> Session<S> {
    /// Start a session over `content`.
    pub fn new(content: impl Into<Vec<u8>>, pipeline: Pipeline<S>) -> Self {
        Self {
            editor: LineEditor::new(PROMPT),
            journal: Journal::new(content),
            pipeline,
            state: SessionState::Idle,
        }
    }

    /// The input line.
    pub const fn editor(&self) -> &LineEditor {
        &self.editor
    }

    /// Buffer, undo history and invocation log.
    pub const fn journal(&self) -> &Journal {
        &self.journal
    }

    /// Current state.
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Whether a quit key was handled.
    pub fn is_finished(&self) -> bool {
        self.state == SessionState::Quit
    }

    /// Snapshot of what the screen should show.
    pub fn view(&self) -> View<'_> {
        View {
            prompt: self.editor.prompt(),
            input: self.editor.content(),
            cursor_column: self.editor.cursor_column(),
            error: self.editor.error(),
            text: self.journal.content(),
        }
    }

    /// Apply one action.
    ///
    /// # Errors
    ///
    /// Only an unparseable submitted line is an error here; disallowed
    /// or failing commands are reported on the error line.
    pub fn handle(&mut self, action: Action) -> Result<SessionState, SessionError> {
        if self.is_finished() {
            return Ok(self.state);
        }

        match action {
            Action::Quit => {
                tracing::info!(target: "session", steps = self.journal.depth(), "quit");
                self.state = SessionState::Quit;
            }
            Action::Undo => self.undo(),
            Action::Submit => self.submit()?,
            Action::Insert(ch) => self.editor.type_char(ch),
            Action::MoveToStart => self.editor.move_to_start(),
            Action::MoveToEnd => self.editor.move_to_end(),
            Action::StepBackward => self.editor.step_backward(),
            Action::StepForward => self.editor.step_forward(),
            Action::Backspace => self.editor.backspace(),
            Action::Delete => self.editor.delete_at_cursor(),
            Action::HistoryUp => {
                self.editor.browse_history_up();
                self.editor.materialize_history_selection();
            }
            Action::HistoryDown => {
                self.editor.browse_history_down();
                self.editor.materialize_history_selection();
            }
            // The renderer owns the screen size.
            Action::Resize { .. } => {}
        }

        Ok(self.state)
    }

    fn undo(&mut self) {
        match self.journal.undo() {
            Ok(line) => {
                tracing::info!(target: "session", command = %line, depth = self.journal.depth(), "undo");
            }
            Err(e) => tracing::debug!(target: "session", "{e}"),
        }
    }

    fn submit(&mut self) -> Result<(), SessionError> {
        if self.editor.is_empty() {
            return Ok(());
        }

        let line = self.editor.content().to_string();
        match self.pipeline.execute(&line, self.journal.content()) {
            Ok(Outcome::Success { stdout, notice }) => {
                self.journal.apply(line, stdout);
                self.editor.commit_to_history();
                self.editor.clear();
                if let Some(notice) = notice {
                    self.editor.set_error(notice);
                }
                tracing::debug!(target: "session", depth = self.journal.depth(), "applied");
            }
            Ok(outcome) => {
                self.editor.clear();
                if let Some(message) = outcome.message() {
                    self.editor.set_error(message);
                }
            }
            Err(PipelineError::EmptyCommand) => self.editor.clear(),
            Err(e) => {
                tracing::error!(target: "session", command = %line, error = %e, "unparseable_line");
                return Err(e.into());
            }
        }
        Ok(())
    }

    /// Drive the session until a quit key, returning the invocation log.
    ///
    /// The screen is drawn before every key read. An error message is
    /// cleared right after it has been drawn, so it is shown exactly once.
    ///
    /// # Errors
    ///
    /// Returns the first fatal error from the key source, the renderer
    /// or the pipeline.
    pub fn run<K, R>(mut self, keys: &mut K, renderer: &mut R) -> Result<Vec<String>, SessionError>
    where
        K: KeySource,
        R: Renderer,
    {
        tracing::info!(target: "session", bytes = self.journal.content().len(), "session_started");
        loop {
            renderer.draw(&self.view())?;
            self.editor.clear_error();

            let action = keys.next_action()?;
            tracing::trace!(target: "input", ?action, "action");
            if let Action::Resize { width, height } = action {
                renderer.resize(width, height);
            }
            if self.handle(action)? == SessionState::Quit {
                break;
            }
        }
        Ok(self.journal.into_invocations())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::{AllowList, ProcessOutput};
    use crate::session::ScriptedKeys;
    use crate::terminal::RenderError;
    use std::cell::RefCell;
    use std::collections::VecDeque;
    use std::io;

    /// Captures every drawn view as owned values.
    #[derive(Debug, Default)]
    struct RecordingRenderer {
        frames: Vec<Frame>,
        resizes: Vec<(u16, u16)>,
    }

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Frame {
        input: String,
        cursor_column: usize,
        error: Option<String>,
        text: Vec<u8>,
    }

    impl Renderer for RecordingRenderer {
        fn draw(&mut self, view: &View<'_>) -> Result<(), RenderError> {
            self.frames.push(Frame {
                input: view.input.to_string(),
                cursor_column: view.cursor_column,
                error: view.error.map(str::to_string),
                text: view.text.to_vec(),
            });
            Ok(())
        }

        fn resize(&mut self, width: u16, height: u16) {
            self.resizes.push((width, height));
        }
    }

    /// Replies from a queue and records what was run.
    #[derive(Default)]
    struct FakeSpawner {
        calls: RefCell<Vec<(String, Vec<String>, Vec<u8>)>>,
        replies: RefCell<VecDeque<ProcessOutput>>,
    }

    impl FakeSpawner {
        fn replying(replies: impl IntoIterator<Item = ProcessOutput>) -> Self {
            Self {
                calls: RefCell::default(),
                replies: RefCell::new(replies.into_iter().collect()),
            }
        }
    }

    impl Spawner for FakeSpawner {
        fn spawn(&self, program: &str, args: &[String], input: &[u8]) -> io::Result<ProcessOutput> {
            self.calls
                .borrow_mut()
                .push((program.to_string(), args.to_vec(), input.to_vec()));
            self.replies
                .borrow_mut()
                .pop_front()
                .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such program"))
        }
    }

    fn ok(stdout: &str) -> ProcessOutput {
        ProcessOutput {
            code: Some(0),
            stdout: stdout.as_bytes().to_vec(),
            stderr: Vec::new(),
        }
    }

    fn fake_session(content: &str, replies: Vec<ProcessOutput>) -> Session<FakeSpawner> {
        let allow = AllowList::new(["grep", "sort", "sed"]);
        Session::new(
            content.as_bytes().to_vec(),
            Pipeline::with_spawner(allow, FakeSpawner::replying(replies)),
        )
    }

    fn submit(session: &mut Session<FakeSpawner>, line: &str) {
        for ch in line.chars() {
            session.handle(Action::Insert(ch)).unwrap();
        }
        session.handle(Action::Submit).unwrap();
    }

    #[test]
    fn test_session_typing_and_cursor() {
        let mut session = fake_session("a\n", vec![]);
        for ch in "sort".chars() {
            session.handle(Action::Insert(ch)).unwrap();
        }
        session.handle(Action::MoveToStart).unwrap();
        session.handle(Action::Delete).unwrap();
        session.handle(Action::StepForward).unwrap();
        session.handle(Action::Backspace).unwrap();
        assert_eq!(session.editor().content(), "rt");
        assert_eq!(session.view().cursor_column, PROMPT.len());

        session.handle(Action::MoveToEnd).unwrap();
        session.handle(Action::StepBackward).unwrap();
        assert_eq!(session.view().cursor_column, PROMPT.len() + 1);
    }

    #[test]
    fn test_session_submit_success_applies() {
        let mut session = fake_session("b\na\n", vec![ok("a\nb\n")]);
        submit(&mut session, "sort");

        assert_eq!(session.journal().content(), b"a\nb\n");
        assert_eq!(session.journal().log().snapshot(), ["sort"]);
        assert!(session.editor().is_empty());
        assert_eq!(session.editor().history().entries(), ["sort"]);
        assert_eq!(session.editor().error(), None);

        let calls = session.pipeline.spawner().calls.borrow();
        assert_eq!(calls[0].0, "sort");
        assert_eq!(calls[0].2, b"b\na\n");
    }

    #[test]
    fn test_session_disallowed_reports_base_command() {
        let mut session = fake_session("a\n", vec![]);
        submit(&mut session, "awk '{print}'");

        assert_eq!(session.editor().error(), Some("awk cannot be executed"));
        assert!(session.editor().is_empty());
        assert_eq!(session.journal().content(), b"a\n");
        assert_eq!(session.journal().depth(), 0);
        assert!(session.editor().history().is_empty());
        assert!(session.pipeline.spawner().calls.borrow().is_empty());
    }

    #[test]
    fn test_session_failure_shows_stderr() {
        let failed = ProcessOutput {
            code: Some(1),
            stdout: Vec::new(),
            stderr: b"sed: -e expression #1, char 1: unknown command\n".to_vec(),
        };
        let mut session = fake_session("a\n", vec![failed]);
        submit(&mut session, "sed x");

        assert_eq!(
            session.editor().error(),
            Some("sed: -e expression #1, char 1: unknown command")
        );
        assert_eq!(session.journal().content(), b"a\n");
        assert_eq!(session.journal().depth(), 0);
    }

    #[test]
    fn test_session_launch_failure_is_recoverable() {
        let mut session = fake_session("a\n", vec![]);
        submit(&mut session, "grep a");
        assert_eq!(session.editor().error(), Some("grep: no such program"));
        assert_eq!(session.state(), SessionState::Idle);
    }

    #[test]
    fn test_session_empty_and_blank_lines() {
        let mut session = fake_session("a\n", vec![]);
        session.handle(Action::Submit).unwrap();
        submit(&mut session, "   ");
        assert!(session.editor().is_empty());
        assert_eq!(session.editor().error(), None);
        assert!(session.pipeline.spawner().calls.borrow().is_empty());
    }

    #[test]
    fn test_session_unparseable_line_is_fatal() {
        let mut session = fake_session("a\n", vec![]);
        for ch in "grep 'a".chars() {
            session.handle(Action::Insert(ch)).unwrap();
        }
        let result = session.handle(Action::Submit);
        assert!(matches!(
            result,
            Err(SessionError::Pipeline(PipelineError::Parse { .. }))
        ));
    }

    #[test]
    fn test_session_undo() {
        let mut session = fake_session("b\na\n", vec![ok("a\nb\n"), ok("b\n")]);
        submit(&mut session, "sort");
        submit(&mut session, "grep b");
        assert_eq!(session.journal().depth(), 2);

        session.handle(Action::Undo).unwrap();
        assert_eq!(session.journal().content(), b"a\nb\n");
        assert_eq!(session.journal().log().snapshot(), ["sort"]);

        session.handle(Action::Undo).unwrap();
        session.handle(Action::Undo).unwrap();
        assert_eq!(session.journal().content(), b"b\na\n");
        assert_eq!(session.journal().depth(), 0);
        assert_eq!(session.editor().error(), None);
    }

    #[test]
    fn test_session_history_recall() {
        let mut session = fake_session("a\n", vec![ok("a\n"), ok("a\n")]);
        submit(&mut session, "sort");
        submit(&mut session, "grep a");

        session.handle(Action::HistoryUp).unwrap();
        assert_eq!(session.editor().content(), "grep a");
        session.handle(Action::HistoryUp).unwrap();
        assert_eq!(session.editor().content(), "sort");
        assert_eq!(session.view().cursor_column, PROMPT.len() + 4);
        session.handle(Action::HistoryUp).unwrap();
        assert_eq!(session.editor().content(), "sort");

        session.handle(Action::HistoryDown).unwrap();
        session.handle(Action::HistoryDown).unwrap();
        assert!(session.editor().is_empty());
    }

    #[test]
    fn test_session_history_keys_replace_live_line() {
        let mut session = fake_session("a\n", vec![]);
        session.handle(Action::Insert('s')).unwrap();
        session.handle(Action::HistoryDown).unwrap();
        assert_eq!(session.editor().content(), "");

        session.handle(Action::Insert('s')).unwrap();
        session.handle(Action::HistoryUp).unwrap();
        assert_eq!(session.editor().content(), "");
        assert_eq!(session.view().cursor_column, PROMPT.len());
    }

    #[test]
    fn test_session_history_up_at_oldest_reloads_entry() {
        let mut session = fake_session("a\n", vec![ok("a\n")]);
        submit(&mut session, "sort");

        session.handle(Action::HistoryUp).unwrap();
        session.handle(Action::Insert('x')).unwrap();
        assert_eq!(session.editor().content(), "sortx");

        session.handle(Action::HistoryUp).unwrap();
        assert_eq!(session.editor().content(), "sort");
        assert_eq!(session.view().cursor_column, PROMPT.len() + 4);
    }

    #[test]
    fn test_session_grep_no_match_shows_stderr_and_applies() {
        let warned = ProcessOutput {
            code: Some(1),
            stdout: Vec::new(),
            stderr: b"grep: warning: stray \\ before -\n".to_vec(),
        };
        let mut session = fake_session("a\n", vec![warned]);
        submit(&mut session, "grep zzz");

        assert_eq!(session.journal().content(), b"");
        assert_eq!(session.journal().log().snapshot(), ["grep zzz"]);
        assert_eq!(session.editor().error(), Some("grep: warning: stray \\ before -"));
        assert!(session.editor().is_empty());
    }

    #[test]
    fn test_session_ignores_actions_after_quit() {
        let mut session = fake_session("a\n", vec![]);
        assert_eq!(session.handle(Action::Quit).unwrap(), SessionState::Quit);
        session.handle(Action::Insert('x')).unwrap();
        assert!(session.editor().is_empty());
        assert!(session.is_finished());
    }

    #[test]
    fn test_run_error_shown_once() {
        let session = fake_session("a\n", vec![]);
        let mut keys = ScriptedKeys::default()
            .typed("awk")
            .then(Action::Submit)
            .then(Action::Insert('s'))
            .then(Action::Quit);
        let mut renderer = RecordingRenderer::default();

        let log = session.run(&mut keys, &mut renderer).unwrap();
        assert!(log.is_empty());

        let with_error: Vec<_> = renderer
            .frames
            .iter()
            .filter(|f| f.error.is_some())
            .collect();
        assert_eq!(with_error.len(), 1);
        assert_eq!(with_error[0].error.as_deref(), Some("awk cannot be executed"));
        assert_eq!(with_error[0].input, "");
        assert_eq!(renderer.frames.last().unwrap().input, "s");
    }

    #[test]
    fn test_run_draws_before_each_key() {
        let session = fake_session("hello\n", vec![]);
        let mut keys = ScriptedKeys::default().typed("ab").then(Action::Quit);
        let mut renderer = RecordingRenderer::default();
        session.run(&mut keys, &mut renderer).unwrap();

        assert_eq!(renderer.frames.len(), 3);
        assert_eq!(renderer.frames[0].text, b"hello\n");
        assert_eq!(renderer.frames[2].input, "ab");
        assert_eq!(renderer.frames[2].cursor_column, PROMPT.len() + 2);
    }

    #[test]
    fn test_run_forwards_resize() {
        let session = fake_session("a\n", vec![]);
        let mut keys = ScriptedKeys::new([Action::Resize { width: 100, height: 40 }, Action::Quit]);
        let mut renderer = RecordingRenderer::default();
        session.run(&mut keys, &mut renderer).unwrap();
        assert_eq!(renderer.resizes, [(100, 40)]);
        assert_eq!(renderer.frames.len(), 2);
    }

    #[test]
    fn test_run_disconnect_is_error() {
        let session = fake_session("a\n", vec![]);
        let mut keys = ScriptedKeys::default().typed("x");
        let mut renderer = RecordingRenderer::default();
        assert!(matches!(
            session.run(&mut keys, &mut renderer),
            Err(SessionError::Disconnected)
        ));
    }

    #[test]
    fn test_run_returns_invocations() {
        let session = fake_session("b\na\n", vec![ok("a\nb\n"), ok("b\n")]);
        let mut keys = ScriptedKeys::default()
            .typed("sort")
            .then(Action::Submit)
            .typed("grep b")
            .then(Action::Submit)
            .then(Action::Quit);
        let mut renderer = RecordingRenderer::default();

        let log = session.run(&mut keys, &mut renderer).unwrap();
        assert_eq!(log, ["sort", "grep b"]);
        assert_eq!(renderer.frames.last().unwrap().text, b"b\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_grep_then_undo_with_real_processes() {
        let session = Session::new(
            b"a\nb\nc\n".to_vec(),
            Pipeline::new(AllowList::new(["grep"])),
        );
        let mut keys = ScriptedKeys::default()
            .typed("grep b")
            .then(Action::Submit)
            .then(Action::Undo)
            .typed("grep zzz")
            .then(Action::Submit)
            .then(Action::Quit);
        let mut renderer = RecordingRenderer::default();

        let log = session.run(&mut keys, &mut renderer).unwrap();
        assert_eq!(log, ["grep zzz"]);

        // Undo after `grep b` restored the source exactly.
        let after_undo = &renderer.frames[8];
        assert_eq!(after_undo.text, b"a\nb\nc\n");
        assert_eq!(after_undo.input, "");

        let texts: Vec<&[u8]> = renderer.frames.iter().map(|f| f.text.as_slice()).collect();
        assert!(texts.contains(&&b"b\n"[..]));
        assert_eq!(*texts.last().unwrap(), b"");
        assert!(renderer.frames.iter().all(|f| f.error.is_none()));
    }

    #[cfg(unix)]
    #[test]
    fn test_grep_then_undo_restores_content_and_log() {
        let mut session = Session::new(
            b"a\nb\nc\n".to_vec(),
            Pipeline::new(AllowList::new(["grep"])),
        );
        for ch in "grep b".chars() {
            session.handle(Action::Insert(ch)).unwrap();
        }
        session.handle(Action::Submit).unwrap();
        assert_eq!(session.journal().content(), b"b\n");
        assert_eq!(session.journal().log().snapshot(), ["grep b"]);

        session.handle(Action::Undo).unwrap();
        assert_eq!(session.journal().content(), b"a\nb\nc\n");
        assert!(session.journal().log().is_empty());
    }

    #[test]
    fn test_journal_parity_after_every_transition() {
        let mut session = fake_session("x\n", vec![ok("y\n"), ok("z\n")]);
        let script = ScriptedKeys::default()
            .typed("sort")
            .then(Action::Submit)
            .then(Action::Undo)
            .then(Action::Undo)
            .typed("awk")
            .then(Action::Submit)
            .then(Action::HistoryUp)
            .then(Action::Submit)
            .then(Action::Undo);
        let mut keys = script;
        while keys.remaining() > 0 {
            let action = keys.next_action().unwrap();
            session.handle(action).unwrap();
            assert_eq!(
                session.journal().buffer().undo_depth(),
                session.journal().log().len()
            );
        }
        assert_eq!(session.journal().depth(), 0);
    }
}
