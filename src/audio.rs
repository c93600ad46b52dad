//! Audio collaborator.  The core only emits `FrameEvent::Shoot`; whatever
//! implements `AudioSink` decides how that sounds.

use std::io::Write;

use tracing::warn;

use crate::assets::SoundSample;
use crate::entities::FrameEvent;

pub trait AudioSink {
    /// Fire-and-forget.
    fn play_shoot(&mut self);

    fn handle_events(&mut self, events: &[FrameEvent]) {
        for event in events {
            if *event == FrameEvent::Shoot {
                self.play_shoot();
            }
        }
    }
}

/// Plays the shoot sound as the terminal bell (BEL, 0x07).
pub struct TerminalBell<W: Write> {
    out: W,
    enabled: bool,
}

impl<W: Write> TerminalBell<W> {
    pub fn new(out: W, sample: &SoundSample) -> Self {
        let enabled = sample.data_len > 0;
        if !enabled {
            warn!("shoot sample is silent; bell disabled");
        }
        TerminalBell { out, enabled }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> AudioSink for TerminalBell<W> {
    fn play_shoot(&mut self) {
        if !self.enabled {
            return;
        }
        // A failed bell is not worth stopping the game for.
        let _ = self.out.write_all(b"\x07");
    }
}

/// Counts plays without producing sound.
#[derive(Debug, Default)]
pub struct SilentSink {
    pub plays: usize,
}

impl AudioSink for SilentSink {
    fn play_shoot(&mut self) {
        self.plays += 1;
    }
}
