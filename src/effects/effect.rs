//! Effect definitions.
//!
//! An `Effect` is an immutable rule attached to a card definition,
//! reusable across cards. What it does is driven entirely by structured
//! fields - category selects the processor branch, `affected_stats` and
//! `control` select what the branch touches. The description string is
//! display text and is never consulted for dispatch.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier for an effect definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EffectId(pub u32);

impl EffectId {
    /// Create a new effect ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for EffectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Effect({})", self.0)
    }
}

/// Effect type. Governs the sign and timing semantics of the magnitude.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectType {
    /// Positive stat modification.
    Buff,
    /// Negative stat modification.
    Debuff,
    /// Fires when the card is played; the driver resolves it.
    Trigger,
    /// Fires at turn boundaries matching its condition.
    Persistent,
    /// Always-on; informational to this engine.
    Passive,
    Summon,
    Transform,
    Revive,
}

/// Effect category. Selects the processor branch that applies it.
///
/// Categories without a resolution branch in this engine (`Shield`,
/// `Summoning`, `Revival`, `Transformation`, `Environment`) are accepted
/// and silently skipped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectCategory {
    StatModification,
    Damage,
    Healing,
    Control,
    Utility,
    Shield,
    Summoning,
    Revival,
    Transformation,
    Environment,
}

/// Who an effect may resolve against.
///
/// Resolution into concrete instances happens outside the processor (see
/// `targeting`); the `*All` variants consume every candidate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectTarget {
    Self_,
    Ally,
    AllyAll,
    Enemy,
    EnemyAll,
    Any,
}

impl EffectTarget {
    /// Does this target spec resolve against every candidate?
    #[must_use]
    pub const fn is_area(self) -> bool {
        matches!(self, EffectTarget::AllyAll | EffectTarget::EnemyAll)
    }
}

/// How long an effect application persists.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectDuration {
    /// One-time; nothing is registered on the target.
    Instant,
    /// Never expires on its own.
    Permanent,
    /// Counts down at the target's start-of-turn passes; removed at 0.
    Turns(u32),
}

impl EffectDuration {
    /// Countdown turns, if this duration is timed.
    #[must_use]
    pub const fn turns(self) -> Option<u32> {
        match self {
            EffectDuration::Turns(n) => Some(n),
            _ => None,
        }
    }
}

/// When a persistent effect self-triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EffectCondition {
    #[default]
    Always,
    TurnStart,
    TurnEnd,
    OnDeath,
}

/// A stat a stat-modification effect touches.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatKind {
    Health,
    Attack,
}

/// A control marker a control effect applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ControlKind {
    /// Marker only; suppression rules belong to the driver.
    Silence,
    /// Marker plus an immediate `can_attack = false`.
    Stun,
}

/// An immutable effect definition.
///
/// ## Example
///
/// ```
/// use cardverse_battle::effects::{Effect, EffectDuration, EffectId, StatKind};
///
/// let rally = Effect::buff(EffectId::new(1), StatKind::Attack, 2)
///     .with_duration(EffectDuration::Turns(2))
///     .with_description("Rally: +2 attack for two turns.");
///
/// assert_eq!(rally.magnitude, 2);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Effect {
    /// Unique identifier, referenced by active-effect entries.
    pub id: EffectId,

    /// Effect type.
    pub effect_type: EffectType,

    /// Processor branch selector.
    pub category: EffectCategory,

    /// Who this effect may resolve against.
    pub target: EffectTarget,

    /// How long an application persists.
    pub duration: EffectDuration,

    /// Numeric strength, interpreted per category.
    pub magnitude: i32,

    /// When a persistent effect self-triggers.
    pub condition: EffectCondition,

    /// Stats touched by a stat-modification effect. Both may be listed;
    /// each is applied independently.
    #[serde(default)]
    pub affected_stats: SmallVec<[StatKind; 2]>,

    /// Markers applied by a control effect; each applies independently.
    #[serde(default)]
    pub control: SmallVec<[ControlKind; 2]>,

    /// Display text only.
    pub description: String,
}

impl Effect {
    /// Create an effect with neutral defaults; use the builder methods to
    /// fill in the rest.
    #[must_use]
    pub fn new(id: EffectId, effect_type: EffectType, category: EffectCategory) -> Self {
        Self {
            id,
            effect_type,
            category,
            target: EffectTarget::Self_,
            duration: EffectDuration::Instant,
            magnitude: 0,
            condition: EffectCondition::default(),
            affected_stats: SmallVec::new(),
            control: SmallVec::new(),
            description: String::new(),
        }
    }

    /// Create an unmitigated damage effect against an enemy.
    #[must_use]
    pub fn damage(id: EffectId, magnitude: i32) -> Self {
        Self::new(id, EffectType::Trigger, EffectCategory::Damage)
            .with_target(EffectTarget::Enemy)
            .with_magnitude(magnitude)
    }

    /// Create a healing effect, capped at the target's base health.
    #[must_use]
    pub fn healing(id: EffectId, magnitude: i32) -> Self {
        Self::new(id, EffectType::Trigger, EffectCategory::Healing)
            .with_target(EffectTarget::Ally)
            .with_magnitude(magnitude)
    }

    /// Create a stat buff on the card itself.
    #[must_use]
    pub fn buff(id: EffectId, stat: StatKind, magnitude: i32) -> Self {
        Self::new(id, EffectType::Buff, EffectCategory::StatModification)
            .with_magnitude(magnitude)
            .affecting(stat)
    }

    /// Create a stat debuff against an enemy.
    #[must_use]
    pub fn debuff(id: EffectId, stat: StatKind, magnitude: i32) -> Self {
        Self::new(id, EffectType::Debuff, EffectCategory::StatModification)
            .with_target(EffectTarget::Enemy)
            .with_magnitude(magnitude)
            .affecting(stat)
    }

    /// Create a silence marker against an enemy.
    #[must_use]
    pub fn silence(id: EffectId, turns: u32) -> Self {
        Self::new(id, EffectType::Debuff, EffectCategory::Control)
            .with_target(EffectTarget::Enemy)
            .with_duration(EffectDuration::Turns(turns))
            .controlling(ControlKind::Silence)
    }

    /// Create a stun against an enemy.
    #[must_use]
    pub fn stun(id: EffectId, turns: u32) -> Self {
        Self::new(id, EffectType::Debuff, EffectCategory::Control)
            .with_target(EffectTarget::Enemy)
            .with_duration(EffectDuration::Turns(turns))
            .controlling(ControlKind::Stun)
    }

    /// Set the target spec (builder pattern).
    #[must_use]
    pub fn with_target(mut self, target: EffectTarget) -> Self {
        self.target = target;
        self
    }

    /// Set the duration (builder pattern).
    #[must_use]
    pub fn with_duration(mut self, duration: EffectDuration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the magnitude (builder pattern).
    #[must_use]
    pub fn with_magnitude(mut self, magnitude: i32) -> Self {
        self.magnitude = magnitude;
        self
    }

    /// Set the trigger condition (builder pattern).
    #[must_use]
    pub fn with_condition(mut self, condition: EffectCondition) -> Self {
        self.condition = condition;
        self
    }

    /// Add an affected stat (builder pattern).
    #[must_use]
    pub fn affecting(mut self, stat: StatKind) -> Self {
        if !self.affected_stats.contains(&stat) {
            self.affected_stats.push(stat);
        }
        self
    }

    /// Add a control marker (builder pattern).
    #[must_use]
    pub fn controlling(mut self, kind: ControlKind) -> Self {
        if !self.control.contains(&kind) {
            self.control.push(kind);
        }
        self
    }

    /// Set the display text (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}
