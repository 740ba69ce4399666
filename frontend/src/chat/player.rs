use super::transcript::{Sender, TranscriptMessage};

/// How long a freshly revealed message stays before the next typing bubble.
pub const READ_PAUSE_MS: u32 = 1_800;
/// How long the typing bubble shows before its message appears.
pub const TYPING_MS: u32 = 1_200;
/// Pause with the whole conversation on screen before it restarts.
pub const LOOP_PAUSE_MS: u32 = 6_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Revealed,
    Typing(Sender),
    Idle,
}

/// Timer-driven playback of a fixed transcript.
///
/// Each call to [`advance`](Self::advance) is one timer tick. A message is
/// always preceded by a typing bubble for its sender, the revealed count only
/// ever grows by one, and after the last message plus [`LOOP_PAUSE_MS`] the
/// player goes back to showing just the first message.
#[derive(Clone, Debug, PartialEq)]
pub struct ConversationPlayer {
    transcript: &'static [TranscriptMessage],
    revealed: usize,
    phase: Phase,
}

impl ConversationPlayer {
    pub fn new(transcript: &'static [TranscriptMessage]) -> Self {
        Self {
            transcript,
            revealed: transcript.len().min(1),
            phase: Phase::Revealed,
        }
    }

    pub fn revealed(&self) -> usize {
        self.revealed
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn visible(&self) -> &'static [TranscriptMessage] {
        &self.transcript[..self.revealed]
    }

    pub fn typing_sender(&self) -> Option<Sender> {
        match self.phase {
            Phase::Typing(sender) => Some(sender),
            _ => None,
        }
    }

    /// Milliseconds the current phase is held before the next tick.
    pub fn delay_ms(&self) -> u32 {
        match self.phase {
            Phase::Revealed => READ_PAUSE_MS,
            Phase::Typing(_) => TYPING_MS,
            Phase::Idle => LOOP_PAUSE_MS,
        }
    }

    /// Moves to the next phase and returns how long to hold it.
    pub fn advance(&mut self) -> u32 {
        self.phase = match self.phase {
            Phase::Revealed if self.revealed < self.transcript.len() => {
                Phase::Typing(self.transcript[self.revealed].sender)
            }
            Phase::Revealed => Phase::Idle,
            Phase::Typing(_) => {
                self.revealed += 1;
                Phase::Revealed
            }
            Phase::Idle => {
                self.revealed = self.transcript.len().min(1);
                Phase::Revealed
            }
        };
        self.delay_ms()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::transcript::TRANSCRIPT;

    #[test]
    fn starts_with_first_message_visible() {
        let player = ConversationPlayer::new(TRANSCRIPT);
        assert_eq!(player.revealed(), 1);
        assert_eq!(player.phase(), Phase::Revealed);
        assert_eq!(player.visible(), &TRANSCRIPT[..1]);
        assert_eq!(player.typing_sender(), None);
    }

    #[test]
    fn typing_bubble_belongs_to_next_sender() {
        let mut player = ConversationPlayer::new(TRANSCRIPT);
        for expected in &TRANSCRIPT[1..] {
            assert_eq!(player.advance(), TYPING_MS);
            assert_eq!(player.typing_sender(), Some(expected.sender));
            assert_eq!(player.advance(), READ_PAUSE_MS);
            assert_eq!(player.visible().last(), Some(expected));
        }
    }

    #[test]
    fn revealed_count_grows_by_one_then_resets_to_one() {
        let mut player = ConversationPlayer::new(TRANSCRIPT);
        let mut reveals = vec![player.revealed()];
        let mut idle_delays = Vec::new();

        // Two full cycles.
        for _ in 0..(2 * (2 * (TRANSCRIPT.len() - 1) + 2)) {
            let before = player.revealed();
            let delay = player.advance();
            if player.phase() == Phase::Idle {
                idle_delays.push(delay);
            }
            if player.revealed() != before {
                reveals.push(player.revealed());
            }
        }

        let cycle: Vec<usize> = (1..=TRANSCRIPT.len()).collect();
        let expected: Vec<usize> = cycle.iter().chain(cycle.iter()).chain([1].iter()).copied().collect();
        assert_eq!(reveals, expected);
        assert_eq!(idle_delays, vec![LOOP_PAUSE_MS, LOOP_PAUSE_MS]);
    }

    #[test]
    fn one_message_every_three_seconds() {
        assert_eq!(READ_PAUSE_MS + TYPING_MS, 3_000);
    }

    #[test]
    fn empty_transcript_never_panics() {
        let mut player = ConversationPlayer::new(&[]);
        for _ in 0..4 {
            player.advance();
            assert!(player.visible().is_empty());
        }
    }
}
