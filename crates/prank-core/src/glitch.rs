use crate::constants::GLITCH_WINDOW_MS;
use crate::schedule::Scheduler;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GlitchCue {
    Fire,
    Clear,
}

/// Short on/off flicker of the glitch overlay and every glitch-capable element.
///
/// Windows are not counted: when two overlap, the first clear switches the
/// flag off for both.
#[derive(Debug, Default)]
pub struct GlitchPulse {
    active: bool,
    fired: u64,
}

impl GlitchPulse {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn trigger<T: From<GlitchCue>>(&mut self, sched: &mut Scheduler<T>) {
        self.active = true;
        self.fired += 1;
        sched.after(GLITCH_WINDOW_MS, GlitchCue::Clear.into());
    }

    /// Fire `times` pulses, the first one `interval_ms` from now.
    pub fn trigger_multiple<T: From<GlitchCue>>(
        &mut self,
        times: u32,
        interval_ms: u64,
        sched: &mut Scheduler<T>,
    ) {
        for k in 1..=times as u64 {
            sched.after(interval_ms * k, GlitchCue::Fire.into());
        }
    }

    pub fn on_cue<T: From<GlitchCue>>(&mut self, cue: GlitchCue, sched: &mut Scheduler<T>) {
        match cue {
            GlitchCue::Fire => self.trigger(sched),
            GlitchCue::Clear => self.active = false,
        }
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Pulses fired since construction.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    pub fn reset(&mut self) {
        self.active = false;
    }
}
