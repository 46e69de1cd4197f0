//! Everything visible on the page, as plain data.
//!
//! The director is the only writer. The front-end compares successive
//! snapshots and touches the DOM only where something changed.

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Screen {
    Intro,
    Loading,
    Error1,
    Error2,
    Error3,
    Terms,
    Reveal,
}

impl Screen {
    /// Canonical forward order.
    pub const ALL: [Screen; 7] = [
        Screen::Intro,
        Screen::Loading,
        Screen::Error1,
        Screen::Error2,
        Screen::Error3,
        Screen::Terms,
        Screen::Reveal,
    ];

    pub fn element_id(self) -> &'static str {
        match self {
            Screen::Intro => "screen-intro",
            Screen::Loading => "screen-loading",
            Screen::Error1 => "screen-error1",
            Screen::Error2 => "screen-error2",
            Screen::Error3 => "screen-error3",
            Screen::Terms => "screen-terms",
            Screen::Reveal => "screen-reveal",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextStyle {
    Error,
    Warning,
    Success,
}

impl TextStyle {
    pub fn class_name(self) -> &'static str {
        match self {
            TextStyle::Error => "terminal-error",
            TextStyle::Warning => "terminal-warning",
            TextStyle::Success => "terminal-success",
        }
    }
}

/// Accumulated terminal output.
///
/// Only the segment currently being typed keeps its style. Starting a new
/// segment, styled or not, drops the wrapper from every earlier one.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Terminal {
    text: String,
    segment: Option<(usize, TextStyle)>,
    styled: Option<(usize, TextStyle)>,
}

impl Terminal {
    pub fn begin_segment(&mut self, style: Option<TextStyle>) {
        self.segment = style.map(|s| (self.text.len(), s));
    }

    pub fn push(&mut self, c: char) {
        self.text.push(c);
        self.styled = self.segment;
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn to_html(&self) -> String {
        match self.styled {
            None => escape_html(&self.text),
            Some((start, style)) => {
                let (before, span) = self.text.split_at(start.min(self.text.len()));
                format!(
                    "{}<span class=\"{}\">{}</span>",
                    escape_html(before),
                    style.class_name(),
                    escape_html(span)
                )
            }
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Boolean AND over the terms checkboxes.
#[derive(Clone, Debug, PartialEq)]
pub struct ChecklistGate {
    flags: Vec<bool>,
}

impl ChecklistGate {
    pub fn new(count: usize) -> Self {
        Self {
            flags: vec![false; count],
        }
    }

    /// Returns `false` when `index` is out of range.
    pub fn set(&mut self, index: usize, checked: bool) -> bool {
        match self.flags.get_mut(index) {
            Some(f) => {
                *f = checked;
                true
            }
            None => false,
        }
    }

    pub fn is_open(&self) -> bool {
        !self.flags.is_empty() && self.flags.iter().all(|f| *f)
    }

    pub fn flags(&self) -> &[bool] {
        &self.flags
    }

    pub fn clear(&mut self) {
        self.flags.iter_mut().for_each(|f| *f = false);
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RevealFlags {
    pub spotlight: bool,
    pub teaser: bool,
    pub header: bool,
    pub ticket: bool,
    pub footer: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPart {
    Spotlight,
    Teaser,
    Header,
    Ticket,
    Footer,
}

impl RevealFlags {
    pub fn show(&mut self, part: RevealPart) {
        match part {
            RevealPart::Spotlight => self.spotlight = true,
            RevealPart::Teaser => self.teaser = true,
            RevealPart::Header => self.header = true,
            RevealPart::Ticket => self.ticket = true,
            RevealPart::Footer => self.footer = true,
        }
    }

    pub fn any(&self) -> bool {
        self.spotlight || self.teaser || self.header || self.ticket || self.footer
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stage {
    pub active: Option<Screen>,
    pub fading: Option<Screen>,
    pub tap_hint_visible: bool,
    pub terminal_visible: bool,
    pub terminal: Terminal,
    pub progress: f32,
    pub status: &'static str,
    pub gate: ChecklistGate,
    pub error_items: Vec<bool>,
    pub reveal: RevealFlags,
    pub toast_visible: bool,
    pub glitch_active: bool,
}

impl Stage {
    pub fn new(checkboxes: usize, error_items: usize, initial_status: &'static str) -> Self {
        Self {
            active: Some(Screen::Intro),
            fading: None,
            tap_hint_visible: true,
            terminal_visible: false,
            terminal: Terminal::default(),
            progress: 0.0,
            status: initial_status,
            gate: ChecklistGate::new(checkboxes),
            error_items: vec![false; error_items],
            reveal: RevealFlags::default(),
            toast_visible: false,
            glitch_active: false,
        }
    }

    /// Deactivate every screen and activate `screen`.
    pub fn show(&mut self, screen: Screen) {
        self.fading = None;
        self.active = Some(screen);
    }

    pub fn begin_fade(&mut self, screen: Screen) {
        self.fading = Some(screen);
    }

    pub fn is_active(&self, screen: Screen) -> bool {
        self.active == Some(screen)
    }

    /// Percent text under the progress bar.
    pub fn progress_text(&self) -> String {
        format!("{}%", self.progress.floor() as u32)
    }

    pub fn accept_enabled(&self) -> bool {
        self.gate.is_open()
    }

    /// Clear every per-run flag and return to the intro screen.
    pub fn reset(&mut self, initial_status: &'static str) {
        self.terminal.clear();
        self.terminal_visible = false;
        self.tap_hint_visible = true;
        self.progress = 0.0;
        self.status = initial_status;
        self.gate.clear();
        self.error_items.iter_mut().for_each(|v| *v = false);
        self.reveal = RevealFlags::default();
        self.toast_visible = false;
        self.glitch_active = false;
        self.show(Screen::Intro);
    }
}
