//! The narrative, written down as ordered step lists.
//!
//! A script runs as one logical thread: each step starts only after the
//! previous one finished, including any pause it carries. Sounds and glitch
//! pulses are fire-and-forget and never hold the thread up.

use crate::config::ShowConfig;
use crate::sfx::Sfx;
use crate::stage::{RevealPart, Screen, TextStyle};
use std::collections::VecDeque;

#[derive(Clone, Debug, PartialEq)]
pub enum SceneStep {
    Wait(u64),
    /// Type `text` one character at a time, `speed_ms` plus jitter apart.
    Type {
        text: &'static str,
        speed_ms: u64,
        style: Option<TextStyle>,
    },
    /// What is left of a `Type` step.
    Keystrokes { rest: &'static str, speed_ms: u64 },
    Sound(Sfx),
    Glitch,
    GlitchBurst { times: u32, interval_ms: u64 },
    /// Fade `from` out, suspend for the transition delay, then activate `to`.
    Transition { from: Screen, to: Screen },
    Activate(Screen),
    HideTapHint,
    ShowTerminal,
    StartLoading,
    /// Show the error-detail items one by one without holding the thread.
    RevealErrorItems,
    Reveal(RevealPart),
    /// Burst at the horizontal centre, a third of the way down.
    ConfettiBurst { count: usize },
    ConfettiRain { duration_ms: u64 },
    ShowToast,
    Navigate,
}

pub type Script = VecDeque<SceneStep>;

/// One line of the boot log and what follows it.
#[derive(Clone, Copy, Debug)]
pub struct ScriptLine {
    pub text: &'static str,
    pub speed_ms: u64,
    pub style: Option<TextStyle>,
    pub sound: Option<Sfx>,
    pub pause_ms: u64,
}

const fn line(text: &'static str, speed_ms: u64, pause_ms: u64) -> ScriptLine {
    ScriptLine {
        text,
        speed_ms,
        style: None,
        sound: None,
        pause_ms,
    }
}

const fn styled(
    text: &'static str,
    speed_ms: u64,
    style: TextStyle,
    sound: Option<Sfx>,
    pause_ms: u64,
) -> ScriptLine {
    ScriptLine {
        text,
        speed_ms,
        style: Some(style),
        sound,
        pause_ms,
    }
}

pub const TERMINAL_SCRIPT: [ScriptLine; 11] = [
    line("$ ./joyce_birthday.exe", 50, 300),
    line("\n> Connecting...", 40, 800),
    line("\n> Loading: JOYCE", 60, 200),
    line("\n> Loading: IS (BIJNA) JARIG!!", 60, 400),
    styled("\n> ERROR: Celebration overflow", 40, TextStyle::Error, Some(Sfx::Error), 600),
    line("\n> Retrying...", 50, 500),
    styled("\n> ERROR: Too much fun detected", 40, TextStyle::Error, Some(Sfx::Error), 600),
    line("\n> Attempting recovery...", 50, 400),
    styled("\n> WARNING: Gift too awesome", 40, TextStyle::Warning, None, 500),
    line("\n> Falling back to safe mode...", 50, 800),
    styled("\n> Success! Launching...", 40, TextStyle::Success, Some(Sfx::Success), 800),
];

/// Everything the terminal shows once the boot log has been typed out.
pub fn terminal_transcript() -> String {
    TERMINAL_SCRIPT.iter().map(|l| l.text).collect()
}

// Intro timing
pub const INTRO_TERMINAL_DELAY_MS: u64 = 300;
pub const INTRO_DIAL_UP_DELAY_MS: u64 = 500;
pub const INTRO_LOADING_DELAY_MS: u64 = 500;

pub fn intro(cfg: &ShowConfig) -> Script {
    let mut s = Script::new();
    s.push_back(SceneStep::HideTapHint);
    s.push_back(SceneStep::Wait(INTRO_TERMINAL_DELAY_MS));
    s.push_back(SceneStep::ShowTerminal);
    s.push_back(SceneStep::Wait(INTRO_DIAL_UP_DELAY_MS));
    s.push_back(SceneStep::Sound(Sfx::DialUp {
        duration_ms: cfg.dial_up_ms,
    }));
    for l in TERMINAL_SCRIPT.iter() {
        s.push_back(SceneStep::Type {
            text: l.text,
            speed_ms: l.speed_ms,
            style: l.style,
        });
        if let Some(sfx) = l.sound {
            s.push_back(SceneStep::Sound(sfx));
        }
        s.push_back(SceneStep::Wait(l.pause_ms));
    }
    s.push_back(SceneStep::Transition {
        from: Screen::Intro,
        to: Screen::Loading,
    });
    s.push_back(SceneStep::Wait(INTRO_LOADING_DELAY_MS));
    s.push_back(SceneStep::StartLoading);
    s
}

pub fn crash() -> Script {
    Script::from([
        SceneStep::GlitchBurst {
            times: 4,
            interval_ms: 100,
        },
        SceneStep::Sound(Sfx::Error),
        SceneStep::Wait(500),
        SceneStep::Transition {
            from: Screen::Loading,
            to: Screen::Error1,
        },
    ])
}

pub fn retry1() -> Script {
    Script::from([
        SceneStep::Sound(Sfx::Click),
        SceneStep::Glitch,
        SceneStep::Wait(300),
        SceneStep::Sound(Sfx::Error),
        SceneStep::GlitchBurst {
            times: 2,
            interval_ms: 150,
        },
        SceneStep::Wait(400),
        SceneStep::Transition {
            from: Screen::Error1,
            to: Screen::Error2,
        },
        SceneStep::Wait(300),
        SceneStep::RevealErrorItems,
    ])
}

pub fn retry2() -> Script {
    Script::from([
        SceneStep::Sound(Sfx::Click),
        SceneStep::Glitch,
        SceneStep::Wait(200),
        SceneStep::Sound(Sfx::Error),
        SceneStep::GlitchBurst {
            times: 3,
            interval_ms: 100,
        },
        SceneStep::Wait(400),
        SceneStep::Transition {
            from: Screen::Error2,
            to: Screen::Error3,
        },
        SceneStep::Wait(300),
        SceneStep::Sound(Sfx::Stinger),
    ])
}

pub fn confirm() -> Script {
    Script::from([
        SceneStep::Sound(Sfx::Click),
        SceneStep::GlitchBurst {
            times: 5,
            interval_ms: 80,
        },
        SceneStep::Wait(600),
        SceneStep::Sound(Sfx::Success),
        SceneStep::Wait(200),
        SceneStep::Transition {
            from: Screen::Error3,
            to: Screen::Terms,
        },
    ])
}

// Reveal timing, relative to the spotlight
pub const REVEAL_SPOTLIGHT_DELAY_MS: u64 = 400;
pub const REVEAL_TEASER_AT_MS: u64 = 300;
pub const REVEAL_HEADER_AT_MS: u64 = 3200;
pub const REVEAL_RAIN_AFTER_HEADER_MS: u64 = 300;
pub const REVEAL_FOOTER_AT_MS: u64 = 4000;
pub const REVEAL_BURST_COUNT: usize = 100;
pub const REVEAL_RAIN_MS: u64 = 5000;

pub fn accept() -> Script {
    Script::from([
        SceneStep::Sound(Sfx::Click),
        SceneStep::Wait(200),
        SceneStep::Transition {
            from: Screen::Terms,
            to: Screen::Reveal,
        },
        SceneStep::Wait(REVEAL_SPOTLIGHT_DELAY_MS),
        SceneStep::Reveal(RevealPart::Spotlight),
        SceneStep::Wait(REVEAL_TEASER_AT_MS),
        SceneStep::Reveal(RevealPart::Teaser),
        SceneStep::Sound(Sfx::Drumroll),
        SceneStep::Wait(REVEAL_HEADER_AT_MS - REVEAL_TEASER_AT_MS),
        SceneStep::Reveal(RevealPart::Header),
        SceneStep::Reveal(RevealPart::Ticket),
        SceneStep::Sound(Sfx::Champagne),
        SceneStep::ConfettiBurst {
            count: REVEAL_BURST_COUNT,
        },
        SceneStep::Wait(REVEAL_RAIN_AFTER_HEADER_MS),
        SceneStep::ConfettiRain {
            duration_ms: REVEAL_RAIN_MS,
        },
        SceneStep::Wait(REVEAL_FOOTER_AT_MS - REVEAL_HEADER_AT_MS - REVEAL_RAIN_AFTER_HEADER_MS),
        SceneStep::Reveal(RevealPart::Footer),
    ])
}

pub fn ticket() -> Script {
    Script::from([
        SceneStep::Sound(Sfx::Click),
        SceneStep::ShowToast,
        SceneStep::Wait(crate::constants::REDIRECT_DELAY_MS),
        SceneStep::Navigate,
    ])
}
