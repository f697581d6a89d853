//! Effect system: immutable effect definitions, the stateless processor
//! that applies them, and target-candidate resolution for drivers.

pub mod effect;
pub mod processor;
pub mod targeting;

pub use effect::{
    ControlKind, Effect, EffectCategory, EffectCondition, EffectDuration, EffectId, EffectTarget,
    EffectType, StatKind,
};
pub use processor::EffectProcessor;
