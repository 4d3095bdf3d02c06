use crate::Mode;

use std::fmt;

/// Skill tier derived from a player's total points. Ordered from best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Legend,
    Master,
    Pro,
    Semipro,
    ExpertPlus,
    Expert,
    ExpertMinus,
    SkilledPlus,
    Skilled,
    SkilledMinus,
    RegularPlus,
    Regular,
    RegularMinus,
    CasualPlus,
    Casual,
    CasualMinus,
    AmateurPlus,
    Amateur,
    AmateurMinus,
    BeginnerPlus,
    Beginner,
    BeginnerMinus,
    New,
}

// The lower half of the ladder is the same for every mode.
const SHARED_TAIL: [(i64, Rank); 14] = [
    (120_000, Rank::Skilled),
    (100_000, Rank::SkilledMinus),
    (80_000, Rank::RegularPlus),
    (70_000, Rank::Regular),
    (60_000, Rank::RegularMinus),
    (40_000, Rank::CasualPlus),
    (30_000, Rank::Casual),
    (20_000, Rank::CasualMinus),
    (10_000, Rank::AmateurPlus),
    (5_000, Rank::Amateur),
    (2_000, Rank::AmateurMinus),
    (1_000, Rank::BeginnerPlus),
    (500, Rank::Beginner),
    (0, Rank::BeginnerMinus),
];

const KZ_TIMER_HEAD: [(i64, Rank); 7] = [
    (1_000_000, Rank::Legend),
    (800_000, Rank::Master),
    (600_000, Rank::Pro),
    (400_000, Rank::Semipro),
    (250_000, Rank::ExpertPlus),
    (230_000, Rank::Expert),
    (200_000, Rank::ExpertMinus),
];

const SIMPLE_KZ_HEAD: [(i64, Rank); 7] = [
    (800_000, Rank::Legend),
    (500_000, Rank::Master),
    (400_000, Rank::Pro),
    (300_000, Rank::Semipro),
    (250_000, Rank::ExpertPlus),
    (230_000, Rank::Expert),
    (200_000, Rank::ExpertMinus),
];

const VANILLA_HEAD: [(i64, Rank); 7] = [
    (600_000, Rank::Legend),
    (400_000, Rank::Master),
    (300_000, Rank::Pro),
    (250_000, Rank::Semipro),
    (200_000, Rank::ExpertPlus),
    (180_000, Rank::Expert),
    (160_000, Rank::ExpertMinus),
];

// Where SkilledPlus starts; the only threshold between the head and the shared tail.
fn skilled_plus_threshold(mode: Mode) -> i64 {
    match mode {
        Mode::KZTimer | Mode::SimpleKZ => 150_000,
        Mode::Vanilla => 140_000,
    }
}

impl Rank {
    /// Classifies `points` for `mode`. A score has to be strictly greater than a threshold to
    /// reach that tier, so anything at or below 0 is [`Rank::New`].
    pub fn from_points(points: i64, mode: Mode) -> Rank {
        let head = match mode {
            Mode::KZTimer => &KZ_TIMER_HEAD,
            Mode::SimpleKZ => &SIMPLE_KZ_HEAD,
            Mode::Vanilla => &VANILLA_HEAD,
        };

        let skilled_plus = [(skilled_plus_threshold(mode), Rank::SkilledPlus)];

        head.iter()
            .chain(skilled_plus.iter())
            .chain(SHARED_TAIL.iter())
            .find(|(threshold, _)| points > *threshold)
            .map(|&(_, rank)| rank)
            .unwrap_or(Rank::New)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Rank::Legend => "Legend",
            Rank::Master => "Master",
            Rank::Pro => "Pro",
            Rank::Semipro => "Semipro",
            Rank::ExpertPlus => "Expert+",
            Rank::Expert => "Expert",
            Rank::ExpertMinus => "Expert-",
            Rank::SkilledPlus => "Skilled+",
            Rank::Skilled => "Skilled",
            Rank::SkilledMinus => "Skilled-",
            Rank::RegularPlus => "Regular+",
            Rank::Regular => "Regular",
            Rank::RegularMinus => "Regular-",
            Rank::CasualPlus => "Casual+",
            Rank::Casual => "Casual",
            Rank::CasualMinus => "Casual-",
            Rank::AmateurPlus => "Amateur+",
            Rank::Amateur => "Amateur",
            Rank::AmateurMinus => "Amateur-",
            Rank::BeginnerPlus => "Beginner+",
            Rank::Beginner => "Beginner",
            Rank::BeginnerMinus => "Beginner-",
            Rank::New => "New",
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
