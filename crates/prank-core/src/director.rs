//! Scene director: runs the scripts, owns the stage and drives the effects.
//!
//! The director never sleeps. Every pause becomes a cue on its scheduler and
//! the host pulls due cues by calling [`Director::advance`] with its current
//! time, collecting outward effects (sounds, navigation) in a caller-owned
//! buffer the same way a sequencer hands out note events.

use crate::config::{ConfigError, ShowConfig};
use crate::constants::*;
use crate::glitch::{GlitchCue, GlitchPulse};
use crate::particles::ConfettiField;
use crate::schedule::Scheduler;
use crate::script::{self, SceneStep, Script};
use crate::sfx::{Sfx, STATIC_DEFAULT_FADE_SEC};
use crate::stage::{Screen, Stage};
use fnv::FnvHashMap;
use rand::prelude::*;
use thiserror::Error;

/// User gestures the page forwards to the director.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Start,
    Retry1,
    Retry2,
    Confirm,
    SetCheck { index: usize, checked: bool },
    Accept,
    Ticket,
    Replay,
}

#[derive(Debug, Error, PartialEq)]
pub enum ActionError {
    #[error("{action:?} is only valid on {expected:?} (active: {actual:?})")]
    WrongScreen {
        action: Action,
        expected: Screen,
        actual: Option<Screen>,
    },
    #[error("the intro has already started")]
    AlreadyStarted,
    #[error("{action:?} already ran on {screen:?}")]
    AlreadyHandled { action: Action, screen: Screen },
    #[error("accept pressed while the terms gate is closed")]
    GateClosed,
    #[error("no checkbox with index {0}")]
    UnknownCheckbox(usize),
    #[error("the ticket is not visible yet")]
    TicketHidden,
}

/// Outward commands for the host. Fire-and-forget; nothing comes back.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    Sound(Sfx),
    StaticStart { volume: f32 },
    StaticStop { fade_sec: f64 },
    Navigate(String),
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Cue {
    Resume(u32),
    Glitch(GlitchCue),
    StatusTick,
    ProgressTick,
    Crash,
    ErrorItem(usize),
    RainTick { until: u64 },
}

impl From<GlitchCue> for Cue {
    fn from(c: GlitchCue) -> Self {
        Cue::Glitch(c)
    }
}

enum Flow {
    Continue,
    Suspend(u64),
}

#[derive(Debug, Default)]
struct LoadingRun {
    status_index: usize,
    done: bool,
}

pub struct Director {
    cfg: ShowConfig,
    stage: Stage,
    sched: Scheduler<Cue>,
    threads: FnvHashMap<u32, Script>,
    next_thread: u32,
    glitch: GlitchPulse,
    confetti: ConfettiField,
    loading: Option<LoadingRun>,
    rng: StdRng,
    started: bool,
    /// Screen whose button script has already been started.
    handled: Option<Screen>,
    static_on: bool,
}

impl Director {
    pub fn new(cfg: ShowConfig) -> Result<Self, ConfigError> {
        cfg.validate()?;
        let stage = Stage::new(cfg.checkboxes, cfg.error_items, cfg.statuses[0]);
        // Separate stream for confetti so its draws do not shift the script's jitter.
        let confetti_seed = cfg.seed ^ 0x9E37_79B9_7F4A_7C15;
        Ok(Self {
            rng: StdRng::seed_from_u64(cfg.seed),
            confetti: ConfettiField::new(0.0, 0.0, confetti_seed),
            stage,
            cfg,
            sched: Scheduler::new(),
            threads: FnvHashMap::default(),
            next_thread: 0,
            glitch: GlitchPulse::new(),
            loading: None,
            started: false,
            handled: None,
            static_on: false,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn config(&self) -> &ShowConfig {
        &self.cfg
    }

    pub fn confetti(&self) -> &ConfettiField {
        &self.confetti
    }

    pub fn confetti_mut(&mut self) -> &mut ConfettiField {
        &mut self.confetti
    }

    pub fn glitch(&self) -> &GlitchPulse {
        &self.glitch
    }

    pub fn now(&self) -> u64 {
        self.sched.now()
    }

    pub fn set_canvas_size(&mut self, width: f32, height: f32) {
        self.confetti.set_bounds(width, height);
    }

    /// True when no script is running and nothing is scheduled.
    pub fn is_idle(&self) -> bool {
        self.threads.is_empty() && self.sched.is_idle()
    }

    pub fn running_scripts(&self) -> usize {
        self.threads.len()
    }

    /// Run every cue due at or before `now_ms`.
    pub fn advance(&mut self, now_ms: u64, out: &mut Vec<Effect>) {
        while let Some(cue) = self.sched.pop_due(now_ms) {
            self.on_cue(cue, out);
        }
        self.sched.settle(now_ms);
        self.stage.glitch_active = self.glitch.is_active();
    }

    /// Apply a user action at `now_ms`. A rejected action changes nothing
    /// beyond running the cues that were already due.
    pub fn dispatch(
        &mut self,
        now_ms: u64,
        action: Action,
        out: &mut Vec<Effect>,
    ) -> Result<(), ActionError> {
        self.advance(now_ms, out);
        self.apply(action, out)?;
        // Zero-delay cues raised by the action run right away.
        self.advance(now_ms, out);
        Ok(())
    }

    fn apply(&mut self, action: Action, out: &mut Vec<Effect>) -> Result<(), ActionError> {
        match action {
            Action::Start => {
                self.expect_screen(action, Screen::Intro)?;
                if self.started {
                    return Err(ActionError::AlreadyStarted);
                }
                self.started = true;
                log::info!("[director] intro started");
                let s = script::intro(&self.cfg);
                self.spawn(s, out);
            }
            Action::Retry1 => {
                self.claim(action, Screen::Error1)?;
                self.spawn(script::retry1(), out);
            }
            Action::Retry2 => {
                self.claim(action, Screen::Error2)?;
                self.spawn(script::retry2(), out);
            }
            Action::Confirm => {
                self.claim(action, Screen::Error3)?;
                self.spawn(script::confirm(), out);
            }
            Action::SetCheck { index, checked } => {
                self.expect_screen(action, Screen::Terms)?;
                if !self.stage.gate.set(index, checked) {
                    return Err(ActionError::UnknownCheckbox(index));
                }
                out.push(Effect::Sound(Sfx::Checkbox));
            }
            Action::Accept => {
                self.expect_screen(action, Screen::Terms)?;
                if !self.stage.accept_enabled() {
                    return Err(ActionError::GateClosed);
                }
                self.claim(action, Screen::Terms)?;
                self.spawn(script::accept(), out);
            }
            Action::Ticket => {
                if !self.stage.reveal.ticket {
                    return Err(ActionError::TicketHidden);
                }
                self.spawn(script::ticket(), out);
            }
            Action::Replay => {
                out.push(Effect::Sound(Sfx::Click));
                self.reset(out);
            }
        }
        Ok(())
    }

    fn expect_screen(&self, action: Action, expected: Screen) -> Result<(), ActionError> {
        if self.stage.is_active(expected) {
            Ok(())
        } else {
            Err(ActionError::WrongScreen {
                action,
                expected,
                actual: self.stage.active,
            })
        }
    }

    /// A screen's button runs its script once per visit.
    fn claim(&mut self, action: Action, screen: Screen) -> Result<(), ActionError> {
        self.expect_screen(action, screen)?;
        if self.handled == Some(screen) {
            return Err(ActionError::AlreadyHandled { action, screen });
        }
        self.handled = Some(screen);
        Ok(())
    }

    /// Back to the intro from anywhere: pending scripts and timers are
    /// dropped and every per-run flag is cleared. Confetti already in the air
    /// keeps falling.
    pub fn reset(&mut self, out: &mut Vec<Effect>) {
        log::info!("[director] reset");
        self.sched.clear();
        self.threads.clear();
        self.loading = None;
        self.glitch.reset();
        self.stage.reset(self.cfg.statuses[0]);
        self.started = false;
        self.handled = None;
        if self.static_on {
            self.stop_static(STATIC_DEFAULT_FADE_SEC, out);
        }
    }

    pub fn start_static(&mut self, volume: f32, out: &mut Vec<Effect>) {
        self.static_on = true;
        out.push(Effect::StaticStart { volume });
    }

    pub fn stop_static(&mut self, fade_sec: f64, out: &mut Vec<Effect>) {
        if std::mem::take(&mut self.static_on) {
            out.push(Effect::StaticStop { fade_sec });
        }
    }

    /// Spawn a confetti burst at an explicit point.
    pub fn burst(&mut self, x: f32, y: f32, count: usize) {
        self.confetti.burst(x, y, count);
    }

    /// Rain confetti for `duration_ms`, one wave per spawn interval.
    pub fn rain(&mut self, duration_ms: u64) {
        let until = self.sched.now() + duration_ms;
        self.sched
            .after(CONFETTI_RAIN_INTERVAL_MS, Cue::RainTick { until });
    }

    fn spawn(&mut self, s: Script, out: &mut Vec<Effect>) {
        let id = self.next_thread;
        self.next_thread = self.next_thread.wrapping_add(1);
        self.threads.insert(id, s);
        self.run_thread(id, out);
    }

    fn run_thread(&mut self, id: u32, out: &mut Vec<Effect>) {
        loop {
            let step = match self.threads.get_mut(&id).and_then(|t| t.pop_front()) {
                Some(s) => s,
                None => {
                    self.threads.remove(&id);
                    return;
                }
            };
            match self.exec(id, step, out) {
                Flow::Continue => {}
                Flow::Suspend(ms) => {
                    self.sched.after(ms, Cue::Resume(id));
                    return;
                }
            }
        }
    }

    fn push_front(&mut self, id: u32, step: SceneStep) {
        if let Some(t) = self.threads.get_mut(&id) {
            t.push_front(step);
        }
    }

    fn exec(&mut self, id: u32, step: SceneStep, out: &mut Vec<Effect>) -> Flow {
        match step {
            SceneStep::Wait(ms) => return Flow::Suspend(ms),
            SceneStep::Type {
                text,
                speed_ms,
                style,
            } => {
                self.stage.terminal.begin_segment(style);
                self.push_front(id, SceneStep::Keystrokes { rest: text, speed_ms });
            }
            SceneStep::Keystrokes { rest, speed_ms } => {
                let mut chars = rest.chars();
                let Some(c) = chars.next() else {
                    return Flow::Continue;
                };
                self.stage.terminal.push(c);
                if c != ' ' && c != '\n' {
                    out.push(Effect::Sound(Sfx::Type));
                }
                let rest = chars.as_str();
                if !rest.is_empty() {
                    self.push_front(id, SceneStep::Keystrokes { rest, speed_ms });
                }
                let jitter = self.rng.gen_range(0..TYPE_JITTER_MS);
                return Flow::Suspend(speed_ms + jitter);
            }
            SceneStep::Sound(sfx) => out.push(Effect::Sound(sfx)),
            SceneStep::Glitch => self.glitch.trigger(&mut self.sched),
            SceneStep::GlitchBurst { times, interval_ms } => {
                self.glitch
                    .trigger_multiple(times, interval_ms, &mut self.sched)
            }
            SceneStep::Transition { from, to } => {
                log::info!("[director] transition {:?} -> {:?}", from, to);
                self.stage.begin_fade(from);
                self.push_front(id, SceneStep::Activate(to));
                return Flow::Suspend(self.cfg.transition_delay_ms);
            }
            SceneStep::Activate(screen) => self.stage.show(screen),
            SceneStep::HideTapHint => self.stage.tap_hint_visible = false,
            SceneStep::ShowTerminal => self.stage.terminal_visible = true,
            SceneStep::StartLoading => self.start_loading(),
            SceneStep::RevealErrorItems => {
                for i in 0..self.stage.error_items.len() {
                    self.sched
                        .after(i as u64 * ERROR_ITEM_INTERVAL_MS, Cue::ErrorItem(i));
                }
            }
            SceneStep::Reveal(part) => self.stage.reveal.show(part),
            SceneStep::ConfettiBurst { count } => {
                let (w, h) = self.confetti.size();
                self.confetti.burst(w / 2.0, h / 3.0, count);
            }
            SceneStep::ConfettiRain { duration_ms } => self.rain(duration_ms),
            SceneStep::ShowToast => self.stage.toast_visible = true,
            SceneStep::Navigate => {
                log::info!("[director] redirecting to {}", self.cfg.redirect_url);
                out.push(Effect::Navigate(self.cfg.redirect_url.clone()));
            }
        }
        Flow::Continue
    }

    fn start_loading(&mut self) {
        log::info!("[director] loading sequence started");
        self.stage.progress = 0.0;
        self.loading = Some(LoadingRun::default());
        self.sched.after(STATUS_INTERVAL_MS, Cue::StatusTick);
        self.sched.after(PROGRESS_INTERVAL_MS, Cue::ProgressTick);
    }

    fn on_cue(&mut self, cue: Cue, out: &mut Vec<Effect>) {
        log::debug!("[director] t={} {:?}", self.sched.now(), cue);
        match cue {
            Cue::Resume(id) => self.run_thread(id, out),
            Cue::Glitch(c) => self.glitch.on_cue(c, &mut self.sched),
            Cue::StatusTick => {
                let Some(run) = self.loading.as_mut().filter(|r| !r.done) else {
                    return;
                };
                if let Some(status) = self.cfg.statuses.get(run.status_index) {
                    self.stage.status = *status;
                    run.status_index += 1;
                }
                self.sched.after(STATUS_INTERVAL_MS, Cue::StatusTick);
            }
            Cue::ProgressTick => {
                let Some(run) = self.loading.as_mut().filter(|r| !r.done) else {
                    return;
                };
                let p = self.stage.progress;
                let (lo, hi) = if p < PROGRESS_SLOWDOWN_AT {
                    PROGRESS_FAST_STEP
                } else {
                    PROGRESS_SLOW_STEP
                };
                let ceiling = self.cfg.progress_ceiling;
                let next = (p + self.rng.gen_range(lo..hi)).min(ceiling);
                self.stage.progress = next;
                if next >= ceiling {
                    run.done = true;
                    self.stage.status = FINAL_STATUS;
                    log::info!("[director] progress reached {}%", ceiling);
                    self.sched.after(CRASH_DELAY_MS, Cue::Crash);
                } else {
                    self.sched.after(PROGRESS_INTERVAL_MS, Cue::ProgressTick);
                }
            }
            Cue::Crash => self.spawn(script::crash(), out),
            Cue::ErrorItem(i) => {
                if let Some(v) = self.stage.error_items.get_mut(i) {
                    *v = true;
                }
            }
            Cue::RainTick { until } => {
                let now = self.sched.now();
                if now <= until {
                    self.confetti.rain_wave();
                    if now + CONFETTI_RAIN_INTERVAL_MS <= until {
                        self.sched
                            .after(CONFETTI_RAIN_INTERVAL_MS, Cue::RainTick { until });
                    }
                }
            }
        }
    }
}
