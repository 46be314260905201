//! Coordinator: the single owner of navigator state
//!
//! Holds the binding table, the optional session, the sequencer and the
//! platform collaborators. All input arrives through [`Coordinator::update`],
//! which returns the side effect the runtime has to perform.

use crate::commands::Cmd;
use crate::config::Settings;
use crate::keymap::{Action, BindingSource, KeyBindingTable, Keystroke};
use crate::messages::Msg;
use crate::model::NavigationSession;
use crate::platform::Platform;
use crate::sequencer::{ActionSequencer, Outcome, SequenceContext};

/// Answer to an intercepted key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interception {
    /// Swallow the key instead of passing it to the focused application
    pub consumed: bool,
    pub cmd: Cmd,
}

pub struct Coordinator<P: Platform> {
    platform: P,
    table: KeyBindingTable,
    source: Box<dyn BindingSource>,
    session: Option<NavigationSession>,
    sequencer: ActionSequencer,
    settings: Settings,
}

impl<P: Platform> Coordinator<P> {
    /// Load the bindings from `source` and register the start shortcuts
    pub fn new(platform: P, source: Box<dyn BindingSource>, settings: Settings) -> Self {
        let (table, _) = KeyBindingTable::load(source.as_ref());
        let mut coordinator = Self {
            platform,
            table,
            source,
            session: None,
            sequencer: ActionSequencer::new(),
            settings,
        };
        coordinator.context().register_shortcuts();
        coordinator
    }

    pub fn update(&mut self, msg: Msg) -> Cmd {
        match msg {
            Msg::Shortcut(keystroke) => self.shortcut(keystroke),
            Msg::Key(keystroke) => self.intercept(keystroke).cmd,
            Msg::Resume { generation } => {
                let (sequencer, mut ctx) = self.split();
                let outcome = sequencer.resume(generation, &mut ctx);
                outcome_to_cmd(outcome)
            }
            Msg::BindingsChanged => {
                tracing::info!("Bindings file changed, reloading");
                self.context().reload_bindings();
                Cmd::None
            }
            Msg::Quit => {
                self.sequencer.clear();
                self.context().close_session();
                Cmd::Quit
            }
        }
    }

    /// Handle a key captured during a session
    ///
    /// Unbound keys pass through. Without a session only start bindings are
    /// honoured, as if the key had arrived as a global shortcut.
    pub fn intercept(&mut self, keystroke: Keystroke) -> Interception {
        if self.session.is_none() {
            let cmd = self.shortcut(keystroke);
            return Interception {
                consumed: self.is_start_key(&keystroke),
                cmd,
            };
        }

        let Some(actions) = self.table.resolve(&keystroke).map(<[Action]>::to_vec) else {
            tracing::trace!("{} is not bound, passing through", keystroke);
            return Interception {
                consumed: false,
                cmd: Cmd::None,
            };
        };

        Interception {
            consumed: true,
            cmd: self.run(&actions),
        }
    }

    fn shortcut(&mut self, keystroke: Keystroke) -> Cmd {
        if !self.is_start_key(&keystroke) {
            tracing::debug!("{} is not a start binding, ignoring", keystroke);
            return Cmd::None;
        }
        let actions = self
            .table
            .resolve(&keystroke)
            .map(<[Action]>::to_vec)
            .unwrap_or_default();
        self.run(&actions)
    }

    fn is_start_key(&self, keystroke: &Keystroke) -> bool {
        self.table
            .resolve(keystroke)
            .is_some_and(|actions| actions.contains(&Action::Start))
    }

    fn run(&mut self, actions: &[Action]) -> Cmd {
        let (sequencer, mut ctx) = self.split();
        outcome_to_cmd(sequencer.run(actions, &mut ctx))
    }

    fn context(&mut self) -> SequenceContext<'_, P> {
        self.split().1
    }

    fn split(&mut self) -> (&mut ActionSequencer, SequenceContext<'_, P>) {
        (
            &mut self.sequencer,
            SequenceContext {
                platform: &mut self.platform,
                session: &mut self.session,
                table: &mut self.table,
                source: self.source.as_ref(),
                settings: &self.settings,
            },
        )
    }

    pub fn session(&self) -> Option<&NavigationSession> {
        self.session.as_ref()
    }

    pub fn table(&self) -> &KeyBindingTable {
        &self.table
    }

    pub fn sequencer(&self) -> &ActionSequencer {
        &self.sequencer
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }
}

fn outcome_to_cmd(outcome: Outcome) -> Cmd {
    match outcome {
        Outcome::Suspended { delay, generation } => Cmd::ScheduleResume { delay, generation },
        Outcome::Quit => Cmd::Quit,
        Outcome::Idle | Outcome::Queued | Outcome::Ignored => Cmd::None,
    }
}
