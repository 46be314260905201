//! ActionSequencer: runs a binding's action list strictly left to right
//!
//! Every action is fully applied before the next one starts. The only
//! exception is the settle delay: a click issued shortly after a warp is
//! parked as a pending click, the sequencer reports
//! [`Outcome::Suspended`], and the runtime calls [`ActionSequencer::resume`]
//! once the delay has elapsed. Sequences arriving in the meantime are queued
//! and run afterwards, never interleaved.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use thiserror::Error;

use crate::config::Settings;
use crate::keymap::{Action, BindingSource, KeyBindingTable};
use crate::model::{Direction, NavigationSession, Point, SelectionError};
use crate::monitor::{monitor_in_direction, Monitor};
use crate::platform::{MouseButton, Platform, PlatformError};

/// A precondition of the navigation model did not hold
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error(transparent)]
    Selection(#[from] SelectionError),
    #[error("'{0}' needs an active session")]
    NoSession(Action),
}

/// Why an action did not complete
#[derive(Debug, Error)]
pub enum SequenceError {
    /// Aborts the rest of the sequence
    #[error("invariant violated: {0}")]
    Invariant(#[from] InvariantViolation),
    /// Abandons only the failing action
    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl From<SelectionError> for SequenceError {
    fn from(e: SelectionError) -> Self {
        SequenceError::Invariant(e.into())
    }
}

/// What the caller has to do after a `run` or `resume`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Everything queued has been executed
    Idle,
    /// A click is waiting; call `resume(generation)` after `delay`
    Suspended { delay: Duration, generation: u64 },
    /// A click is still pending; the new sequence will run after it
    Queued,
    /// A resume that no longer matches the pending click
    Ignored,
    /// `quit` ran; the application should exit
    Quit,
}

enum Step {
    Continue,
    Suspend(Duration),
    Quit,
}

#[derive(Debug, Clone, Copy)]
struct PendingClick {
    button: MouseButton,
    at: Point,
}

/// Everything an action may touch, borrowed from the coordinator
pub struct SequenceContext<'a, P: Platform> {
    pub platform: &'a mut P,
    pub session: &'a mut Option<NavigationSession>,
    pub table: &'a mut KeyBindingTable,
    pub source: &'a dyn BindingSource,
    pub settings: &'a Settings,
}

impl<P: Platform> SequenceContext<'_, P> {
    /// Open a session on `monitor`: install interception, show the overlay,
    /// draw the full-monitor selection
    pub fn open_session(&mut self, monitor: Monitor) -> Result<(), SequenceError> {
        let mut session = NavigationSession::new(monitor)?;

        self.platform.install(&monitor)?;
        if let Err(e) = self.platform.show(&monitor) {
            if let Err(release_err) = self.platform.release() {
                tracing::warn!("Failed to release key interception: {}", release_err);
            }
            return Err(e.into());
        }
        session.overlay_visible = true;

        tracing::info!("Session started on {}", monitor.id);
        *self.session = Some(session);
        self.redraw();
        Ok(())
    }

    /// Hide the overlay and release interception; false if no session was open
    pub fn close_session(&mut self) -> bool {
        let Some(session) = self.session.take() else {
            return false;
        };

        if session.overlay_visible {
            if let Err(e) = self.platform.hide() {
                tracing::warn!("Failed to hide overlay: {}", e);
            }
        }
        if let Err(e) = self.platform.release() {
            tracing::warn!("Failed to release key interception: {}", e);
        }
        tracing::info!("Session on {} ended", session.monitor.id);
        true
    }

    /// Push the current selection to the overlay
    pub fn redraw(&mut self) {
        let Some(session) = self.session.as_ref() else {
            return;
        };
        if !session.overlay_visible {
            return;
        }
        let selection = &session.selection;
        if let Err(e) = self.platform.redraw(selection.current(), selection.bounds()) {
            tracing::warn!("Overlay redraw failed: {}", e);
        }
    }

    /// Rebuild the binding table from its source and re-register shortcuts
    pub fn reload_bindings(&mut self) {
        let diagnostics = self.table.reload(self.source);
        if !diagnostics.is_empty() {
            tracing::info!("Bindings reloaded, {} lines skipped", diagnostics.len());
        }
        self.register_shortcuts();
    }

    /// Hand the start bindings to the global shortcut listener
    pub fn register_shortcuts(&mut self) {
        let keys = self.table.start_bindings();
        if let Err(e) = self.platform.register(&keys) {
            tracing::warn!("Failed to register global shortcuts: {}", e);
        }
    }

    fn session_mut(&mut self, action: Action) -> Result<&mut NavigationSession, SequenceError> {
        self.session
            .as_mut()
            .ok_or_else(|| InvariantViolation::NoSession(action).into())
    }

    /// Open a session under the pointer, or on the first monitor
    fn start_session(&mut self) -> Result<(), SequenceError> {
        let under_pointer = match self.platform.pointer_position() {
            Ok(pointer) => self.platform.monitor_at(pointer)?,
            Err(e) => {
                tracing::warn!("Pointer position unknown: {}", e);
                None
            }
        };
        let monitor = match under_pointer {
            Some(monitor) => monitor,
            None => self
                .platform
                .monitors()?
                .into_iter()
                .next()
                .ok_or_else(|| PlatformError::Unavailable("monitor".to_string()))?,
        };
        self.open_session(monitor)
    }

    fn switch_monitor(&mut self, action: Action, direction: Direction) -> Result<(), SequenceError> {
        let mut moved = self.session_mut(action)?.clone();
        let monitors = self.platform.monitors()?;

        let Some(target) = monitor_in_direction(direction, &moved.monitor, &monitors).copied()
        else {
            tracing::debug!("No monitor {} of {}", direction, moved.monitor.id);
            return Ok(());
        };

        // Validate the target before tearing anything down
        moved.switch_monitor(target)?;
        let was_visible = moved.overlay_visible;
        moved.overlay_visible = false;

        if was_visible {
            if let Err(e) = self.platform.hide() {
                tracing::warn!("Failed to hide overlay: {}", e);
            }
        }
        if let Err(e) = self.platform.release() {
            tracing::warn!("Failed to release key interception: {}", e);
        }

        // The old monitor is already torn down
        if let Err(e) = self.platform.install(&target) {
            tracing::warn!("Failed to intercept keys on {}, ending session: {}", target.id, e);
            *self.session = None;
            return Err(e.into());
        }
        match self.platform.show(&target) {
            Ok(()) => moved.overlay_visible = true,
            Err(e) => tracing::warn!("Failed to show overlay on {}: {}", target.id, e),
        }

        tracing::info!("Session moved to {}", target.id);
        *self.session = Some(moved);
        self.redraw();
        Ok(())
    }
}

/// Interpreter state that outlives a single `run`
#[derive(Debug, Default)]
pub struct ActionSequencer {
    queue: VecDeque<Action>,
    backlog: VecDeque<Vec<Action>>,
    pending: Option<PendingClick>,
    last_warp: Option<Instant>,
    generation: u64,
}

impl ActionSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a click is waiting for its settle delay
    pub fn is_suspended(&self) -> bool {
        self.pending.is_some()
    }

    /// Sequences waiting behind the pending click
    pub fn queued_sequences(&self) -> usize {
        self.backlog.len()
    }

    /// Execute `actions`, or queue them if a click is pending
    pub fn run<P: Platform>(&mut self, actions: &[Action], ctx: &mut SequenceContext<'_, P>) -> Outcome {
        if self.pending.is_some() {
            tracing::debug!("Click pending, queueing {} actions", actions.len());
            self.backlog.push_back(actions.to_vec());
            return Outcome::Queued;
        }
        self.queue.extend(actions.iter().copied());
        self.drain(ctx)
    }

    /// Continue after a settle delay scheduled with `generation`
    pub fn resume<P: Platform>(&mut self, generation: u64, ctx: &mut SequenceContext<'_, P>) -> Outcome {
        if generation != self.generation {
            tracing::debug!(
                "Ignoring stale resume {} (current {})",
                generation,
                self.generation
            );
            return Outcome::Ignored;
        }
        let Some(click) = self.pending.take() else {
            return Outcome::Ignored;
        };

        Self::press(click, ctx);
        self.drain(ctx)
    }

    /// Drop everything queued or pending; outstanding resumes become stale
    pub fn clear(&mut self) {
        self.queue.clear();
        self.backlog.clear();
        if self.pending.take().is_some() {
            self.generation += 1;
        }
    }

    fn drain<P: Platform>(&mut self, ctx: &mut SequenceContext<'_, P>) -> Outcome {
        loop {
            while let Some(action) = self.queue.pop_front() {
                tracing::debug!("Running {}", action);
                match self.step(action, ctx) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Suspend(delay)) => {
                        return Outcome::Suspended {
                            delay,
                            generation: self.generation,
                        };
                    }
                    Ok(Step::Quit) => {
                        self.clear();
                        return Outcome::Quit;
                    }
                    Err(SequenceError::Platform(e)) => {
                        tracing::warn!("Abandoned {}: {}", action, e);
                    }
                    Err(e) => {
                        tracing::warn!(
                            "Aborted sequence at {} ({} actions dropped): {}",
                            action,
                            self.queue.len(),
                            e
                        );
                        self.queue.clear();
                    }
                }
            }

            match self.backlog.pop_front() {
                Some(next) => self.queue.extend(next),
                None => return Outcome::Idle,
            }
        }
    }

    fn step<P: Platform>(
        &mut self,
        action: Action,
        ctx: &mut SequenceContext<'_, P>,
    ) -> Result<Step, SequenceError> {
        match action {
            Action::Bisect(direction) | Action::Cut(direction) => {
                ctx.session_mut(action)?.selection.bisect(direction)?;
                ctx.redraw();
            }
            Action::Move(direction) => {
                let fraction = ctx.settings.nudge_fraction;
                ctx.session_mut(action)?.selection.nudge(direction, fraction);
                ctx.redraw();
            }
            Action::Reset => {
                ctx.session_mut(action)?.selection.reset();
                ctx.redraw();
            }
            Action::Warp => {
                let center = ctx.session_mut(action)?.selection.center();
                let target = ctx.platform.to_screen(center);
                ctx.platform.move_to(target)?;
                self.last_warp = Some(Instant::now());
            }
            Action::Click => {
                ctx.session_mut(action)?;
                self.queue.push_front(Action::End);
                self.queue.push_front(Action::ClickPointer(MouseButton::Left));
                self.queue.push_front(Action::Warp);
            }
            Action::ClickPointer(button) => {
                let at = ctx.platform.pointer_position()?;
                let delay = self.settle_delay(button, ctx.settings, Instant::now());
                let click = PendingClick { button, at };
                if delay.is_zero() {
                    Self::press(click, ctx);
                } else {
                    self.generation += 1;
                    self.pending = Some(click);
                    return Ok(Step::Suspend(delay));
                }
            }
            Action::ScrollUp | Action::ScrollDown => {
                let lines = match action {
                    Action::ScrollUp => ctx.settings.scroll_lines,
                    _ => -ctx.settings.scroll_lines,
                };
                let at = ctx.platform.pointer_position()?;
                ctx.platform.scroll(at, lines)?;
            }
            Action::Start => {
                if ctx.session.is_some() {
                    ctx.close_session();
                } else {
                    ctx.start_session()?;
                }
            }
            Action::End => {
                if !ctx.close_session() {
                    tracing::debug!("end without an active session");
                }
            }
            Action::Quit => {
                ctx.close_session();
                return Ok(Step::Quit);
            }
            Action::Reload => ctx.reload_bindings(),
            Action::Monitor(direction) => ctx.switch_monitor(action, direction)?,
            Action::Grid
            | Action::GridNav
            | Action::HistoryBack
            | Action::Record
            | Action::Playback
            | Action::WindowZoom
            | Action::CursorZoom
            | Action::Ignore => {
                tracing::debug!("{} is reserved, skipping", action);
            }
        }
        Ok(Step::Continue)
    }

    /// How long a click at `now` has to wait for the pointer to settle
    fn settle_delay(&self, button: MouseButton, settings: &Settings, now: Instant) -> Duration {
        match self.last_warp {
            Some(warped) if now.saturating_duration_since(warped) < settings.settle_window() => {
                if button.is_primary() {
                    settings.settle_primary()
                } else {
                    settings.settle_secondary()
                }
            }
            _ => Duration::ZERO,
        }
    }

    fn press<P: Platform>(click: PendingClick, ctx: &mut SequenceContext<'_, P>) {
        if let Err(e) = ctx.platform.button_down(click.button, click.at) {
            tracing::warn!("Abandoned {} click: {}", click.button, e);
            return;
        }
        if let Err(e) = ctx.platform.button_up(click.button, click.at) {
            tracing::warn!("Failed to release {} button: {}", click.button, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keymap::StaticSource;
    use crate::model::Rect;
    use crate::platform::{Collaborator, HeadlessPlatform, PlatformEvent};

    struct Fixture {
        platform: HeadlessPlatform,
        session: Option<NavigationSession>,
        table: KeyBindingTable,
        source: StaticSource,
        settings: Settings,
        sequencer: ActionSequencer,
    }

    impl Fixture {
        fn new() -> Self {
            Self {
                platform: HeadlessPlatform::dual_hd(),
                session: None,
                table: KeyBindingTable::with_defaults(),
                source: StaticSource::empty(),
                settings: Settings::default(),
                sequencer: ActionSequencer::new(),
            }
        }

        fn run(&mut self, actions: &[Action]) -> Outcome {
            let mut ctx = SequenceContext {
                platform: &mut self.platform,
                session: &mut self.session,
                table: &mut self.table,
                source: &self.source,
                settings: &self.settings,
            };
            self.sequencer.run(actions, &mut ctx)
        }

        fn resume(&mut self, generation: u64) -> Outcome {
            let mut ctx = SequenceContext {
                platform: &mut self.platform,
                session: &mut self.session,
                table: &mut self.table,
                source: &self.source,
                settings: &self.settings,
            };
            self.sequencer.resume(generation, &mut ctx)
        }

        fn current(&self) -> Rect {
            self.session.as_ref().unwrap().selection.current()
        }
    }

    #[test]
    fn test_start_opens_on_monitor_under_pointer() {
        let mut fx = Fixture::new();
        fx.platform = HeadlessPlatform::dual_hd().with_pointer(Point::new(2500.0, 100.0));
        assert_eq!(fx.run(&[Action::Start]), Outcome::Idle);

        let session = fx.session.as_ref().unwrap();
        assert_eq!(session.monitor.frame.x, 1920.0);
        assert!(session.overlay_visible);
        assert_eq!(
            fx.platform.effects()[..2],
            [
                PlatformEvent::InterceptInstalled(session.monitor.id),
                PlatformEvent::OverlayShown(session.monitor.id),
            ]
        );
    }

    #[test]
    fn test_start_falls_back_to_first_monitor() {
        let mut fx = Fixture::new();
        fx.platform = HeadlessPlatform::dual_hd().with_pointer(Point::new(-50.0, -50.0));
        fx.run(&[Action::Start]);
        assert_eq!(fx.session.as_ref().unwrap().monitor.frame.x, 0.0);
    }

    #[test]
    fn test_start_toggles_off() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        fx.run(&[Action::Start]);
        assert!(fx.session.is_none());
        assert_eq!(fx.platform.overlay_monitor(), None);
        assert_eq!(fx.platform.intercepting(), None);
    }

    #[test]
    fn test_bisect_then_warp_moves_to_center() {
        let mut fx = Fixture::new();
        fx.run(&[
            Action::Start,
            Action::Bisect(Direction::Left),
            Action::Cut(Direction::Up),
            Action::Warp,
        ]);
        assert_eq!(fx.current(), Rect::new(0.0, 0.0, 960.0, 540.0));
        assert_eq!(fx.platform.pointer(), Point::new(480.0, 270.0));
    }

    #[test]
    fn test_redraw_after_each_mutation() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        fx.platform.clear_events();
        fx.run(&[
            Action::Bisect(Direction::Down),
            Action::Move(Direction::Up),
            Action::Reset,
        ]);
        let redraws = fx
            .platform
            .effects()
            .into_iter()
            .filter(|e| matches!(e, PlatformEvent::OverlayRedrawn { .. }))
            .count();
        assert_eq!(redraws, 3);
        assert_eq!(fx.current(), Rect::new(0.0, 0.0, 1920.0, 1080.0));
    }

    #[test]
    fn test_click_after_warp_suspends() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let outcome = fx.run(&[Action::Warp, Action::ClickPointer(MouseButton::Left), Action::End]);

        let Outcome::Suspended { delay, generation } = outcome else {
            panic!("expected suspension, got {:?}", outcome);
        };
        assert_eq!(delay, Duration::from_millis(50));
        assert!(fx.sequencer.is_suspended());
        // End has not run yet
        assert!(fx.session.is_some());

        assert_eq!(fx.resume(generation), Outcome::Idle);
        assert!(fx.session.is_none());
        let effects = fx.platform.effects();
        let down = effects
            .iter()
            .position(|e| matches!(e, PlatformEvent::ButtonDown(MouseButton::Left, _)))
            .unwrap();
        assert!(matches!(effects[down + 1], PlatformEvent::ButtonUp(MouseButton::Left, _)));
        assert_eq!(effects.last(), Some(&PlatformEvent::InterceptReleased));
    }

    #[test]
    fn test_secondary_click_uses_shorter_delay() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let outcome = fx.run(&[Action::Warp, Action::ClickPointer(MouseButton::Right)]);
        assert!(matches!(
            outcome,
            Outcome::Suspended { delay, .. } if delay == Duration::from_millis(20)
        ));
    }

    #[test]
    fn test_click_without_recent_warp_is_immediate() {
        let mut fx = Fixture::new();
        let outcome = fx.run(&[Action::ClickPointer(MouseButton::Middle)]);
        assert_eq!(outcome, Outcome::Idle);
        let at = fx.platform.pointer();
        assert_eq!(
            fx.platform.effects(),
            vec![
                PlatformEvent::ButtonDown(MouseButton::Middle, at),
                PlatformEvent::ButtonUp(MouseButton::Middle, at),
            ]
        );
    }

    #[test]
    fn test_sequences_queue_behind_pending_click() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let Outcome::Suspended { generation, .. } =
            fx.run(&[Action::Warp, Action::ClickPointer(MouseButton::Left)])
        else {
            panic!("expected suspension");
        };

        assert_eq!(fx.run(&[Action::Bisect(Direction::Right)]), Outcome::Queued);
        assert_eq!(fx.sequencer.queued_sequences(), 1);
        // Not applied yet
        assert_eq!(fx.current(), Rect::new(0.0, 0.0, 1920.0, 1080.0));

        assert_eq!(fx.resume(generation), Outcome::Idle);
        assert_eq!(fx.current(), Rect::new(960.0, 0.0, 960.0, 1080.0));
    }

    #[test]
    fn test_stale_resume_is_ignored() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let Outcome::Suspended { generation, .. } =
            fx.run(&[Action::Warp, Action::ClickPointer(MouseButton::Left)])
        else {
            panic!("expected suspension");
        };
        assert_eq!(fx.resume(generation + 7), Outcome::Ignored);
        assert!(fx.sequencer.is_suspended());
        assert_eq!(fx.resume(generation), Outcome::Idle);
        assert_eq!(fx.resume(generation), Outcome::Ignored);
    }

    #[test]
    fn test_click_action_expands_to_warp_click_end() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start, Action::Bisect(Direction::Right)]);
        let Outcome::Suspended { generation, .. } = fx.run(&[Action::Click]) else {
            panic!("expected suspension");
        };
        assert_eq!(fx.platform.pointer(), Point::new(1440.0, 540.0));
        fx.resume(generation);
        assert!(fx.session.is_none());
        assert!(fx.platform.effects().contains(&PlatformEvent::ButtonDown(
            MouseButton::Left,
            Point::new(1440.0, 540.0)
        )));
    }

    #[test]
    fn test_invariant_violation_aborts_rest_of_sequence() {
        let mut fx = Fixture::new();
        let outcome = fx.run(&[Action::Bisect(Direction::Up), Action::Start]);
        assert_eq!(outcome, Outcome::Idle);
        // Start never ran
        assert!(fx.session.is_none());
    }

    #[test]
    fn test_degenerate_bisect_keeps_session() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let many = vec![Action::Bisect(Direction::Left); 2000];
        fx.run(&many);
        assert!(fx.session.is_some());
        assert!(fx.current().has_positive_area());
    }

    #[test]
    fn test_platform_failure_abandons_only_that_action() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        fx.platform.set_unavailable(Collaborator::Injector, true);
        fx.run(&[Action::Warp, Action::Bisect(Direction::Down)]);
        assert_eq!(fx.current(), Rect::new(0.0, 540.0, 1920.0, 540.0));
    }

    #[test]
    fn test_overlay_failure_releases_interception() {
        let mut fx = Fixture::new();
        fx.platform.set_unavailable(Collaborator::Overlay, true);
        fx.run(&[Action::Start]);
        assert!(fx.session.is_none());
        assert_eq!(fx.platform.intercepting(), None);
    }

    #[test]
    fn test_monitor_switch_tears_down_then_recreates() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start, Action::Bisect(Direction::Left)]);
        fx.platform.clear_events();

        fx.run(&[Action::Monitor(Direction::Right)]);
        let session = fx.session.as_ref().unwrap();
        assert_eq!(session.selection.current(), Rect::new(1920.0, 0.0, 1920.0, 1080.0));

        let effects = fx.platform.effects();
        assert_eq!(effects[0], PlatformEvent::OverlayHidden);
        assert_eq!(effects[1], PlatformEvent::InterceptReleased);
        assert_eq!(effects[2], PlatformEvent::InterceptInstalled(session.monitor.id));
        assert_eq!(effects[3], PlatformEvent::OverlayShown(session.monitor.id));

        // Nothing further right
        fx.platform.clear_events();
        fx.run(&[Action::Monitor(Direction::Right)]);
        assert!(fx.platform.effects().is_empty());
    }

    #[test]
    fn test_monitor_switch_without_interception_ends_session() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        fx.platform.set_unavailable(Collaborator::Interceptor, true);
        fx.platform.clear_events();

        let outcome = fx.run(&[
            Action::Monitor(Direction::Right),
            Action::Bisect(Direction::Left),
        ]);
        assert_eq!(outcome, Outcome::Idle);
        assert!(fx.session.is_none());
        assert_eq!(fx.platform.overlay_monitor(), None);
        assert!(!fx
            .platform
            .effects()
            .iter()
            .any(|e| matches!(e, PlatformEvent::OverlayShown(_))));
    }

    #[test]
    fn test_scroll_direction_and_lines() {
        let mut fx = Fixture::new();
        fx.run(&[Action::ScrollUp, Action::ScrollDown]);
        let at = fx.platform.pointer();
        assert_eq!(
            fx.platform.effects(),
            vec![
                PlatformEvent::Scroll { at, lines: 3 },
                PlatformEvent::Scroll { at, lines: -3 },
            ]
        );
    }

    #[test]
    fn test_quit_closes_session_and_drops_rest() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Start]);
        let outcome = fx.run(&[Action::Quit, Action::Start]);
        assert_eq!(outcome, Outcome::Quit);
        assert!(fx.session.is_none());
    }

    #[test]
    fn test_reload_reregisters_shortcuts() {
        let mut fx = Fixture::new();
        fx.source.set("f13 start\n");
        fx.run(&[Action::Reload]);
        assert_eq!(fx.platform.registered_shortcuts().len(), 2);
    }

    #[test]
    fn test_reserved_actions_have_no_effect() {
        let mut fx = Fixture::new();
        fx.run(&[Action::Grid, Action::Record, Action::Ignore]);
        assert!(fx.platform.events().is_empty());
    }
}
