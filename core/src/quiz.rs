//! The "Psymetrics" personality assessment demo.
//!
//! Intro -> Answering -> Analyzing (timed) -> Result. The result is fully
//! determined by the answer sum; the analyzing phase only paces the UI.

use std::time::Duration;

use tracing::debug;

use crate::{AppSignal, DelayTimer, MiniAppState};

pub const DEFAULT_ANALYSIS_DELAY: Duration = Duration::from_millis(1500);

/// The fixed question set, asked in order.
pub const QUESTIONS: [&str; 5] = [
    "I enjoy taking charge when a group needs direction.",
    "I make decisions quickly, even with incomplete information.",
    "I feel energized after meeting new people.",
    "I prefer a clear plan over improvising.",
    "I stay calm when deadlines change at the last minute.",
];

/// A five-point agreement scale. The discriminant is the answer weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Likert {
    StronglyDisagree = 1,
    Disagree = 2,
    Neutral = 3,
    Agree = 4,
    StronglyAgree = 5,
}

impl Likert {
    pub const ALL: [Self; 5] = [
        Self::StronglyDisagree,
        Self::Disagree,
        Self::Neutral,
        Self::Agree,
        Self::StronglyAgree,
    ];

    #[must_use]
    pub const fn weight(self) -> u8 {
        self as u8
    }

    #[must_use]
    pub fn from_weight(weight: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.weight() == weight)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StronglyDisagree => "Strongly Disagree",
            Self::Disagree => "Disagree",
            Self::Neutral => "Neutral",
            Self::Agree => "Agree",
            Self::StronglyAgree => "Strongly Agree",
        }
    }
}

/// Result category, chosen by two thresholds on the answer sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Personality {
    StrategicLeader,
    BalancedCollaborator,
    ReflectiveThinker,
}

impl Personality {
    #[must_use]
    pub const fn classify(sum: u32) -> Self {
        if sum > 20 {
            Self::StrategicLeader
        } else if sum > 15 {
            Self::BalancedCollaborator
        } else {
            Self::ReflectiveThinker
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::StrategicLeader => "Strategic Leader",
            Self::BalancedCollaborator => "Balanced Collaborator",
            Self::ReflectiveThinker => "Reflective Thinker",
        }
    }

    #[must_use]
    pub const fn blurb(self) -> &'static str {
        match self {
            Self::StrategicLeader => "You set direction and move people toward it.",
            Self::BalancedCollaborator => "You adapt to the room and keep teams aligned.",
            Self::ReflectiveThinker => "You weigh options carefully before committing.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuizPhase {
    Intro,
    Answering,
    Analyzing(DelayTimer),
    Result,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    Start,
    Answer(Likert),
    Retake,
    SaveAndExit,
    Exit,
}

#[derive(Debug, Clone)]
pub struct Quiz {
    questions: &'static [&'static str],
    index: usize,
    answers: Vec<u8>,
    phase: QuizPhase,
    analysis_delay: Duration,
}

impl Quiz {
    #[must_use]
    pub fn new(analysis_delay: Duration) -> Self {
        Self {
            questions: &QUESTIONS,
            index: 0,
            answers: Vec::with_capacity(QUESTIONS.len()),
            phase: QuizPhase::Intro,
            analysis_delay,
        }
    }

    #[must_use]
    pub fn phase(&self) -> &QuizPhase {
        &self.phase
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    #[must_use]
    pub fn answers(&self) -> &[u8] {
        &self.answers
    }

    #[must_use]
    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    /// The question being asked, while answering.
    #[must_use]
    pub fn current_question(&self) -> Option<&'static str> {
        match self.phase {
            QuizPhase::Answering => self.questions.get(self.index).copied(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.answers.len() == self.questions.len()
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.answers.iter().map(|&w| u32::from(w)).sum()
    }

    /// The classification, once the result is shown.
    #[must_use]
    pub fn outcome(&self) -> Option<Personality> {
        match self.phase {
            QuizPhase::Result => Some(Personality::classify(self.score())),
            _ => None,
        }
    }

    fn answer(&mut self, response: Likert) {
        if self.phase != QuizPhase::Answering {
            return;
        }
        self.answers.push(response.weight());
        if self.index + 1 < self.questions.len() {
            self.index += 1;
        } else {
            debug!(score = self.score(), "Quiz answers complete; analyzing");
            self.phase = QuizPhase::Analyzing(DelayTimer::new(self.analysis_delay));
        }
    }

    fn retake(&mut self) {
        self.phase = QuizPhase::Intro;
        self.index = 0;
        self.answers.clear();
    }
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYSIS_DELAY)
    }
}

impl MiniAppState for Quiz {
    type Action = QuizAction;

    fn handle(&mut self, action: QuizAction) -> AppSignal {
        match action {
            QuizAction::Start => {
                if self.phase == QuizPhase::Intro {
                    self.phase = QuizPhase::Answering;
                }
            }
            QuizAction::Answer(response) => self.answer(response),
            QuizAction::Retake => {
                if self.phase == QuizPhase::Result {
                    self.retake();
                }
            }
            QuizAction::SaveAndExit => {
                if self.phase == QuizPhase::Result {
                    return AppSignal::Close;
                }
            }
            QuizAction::Exit => return AppSignal::Close,
        }
        AppSignal::Continue
    }

    fn tick(&mut self, delta: Duration) {
        if let QuizPhase::Analyzing(timer) = &mut self.phase
            && timer.advance(delta)
        {
            self.phase = QuizPhase::Result;
        }
    }
}
