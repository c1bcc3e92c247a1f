// SliceUtils - core/pipeline.rs
//
// Ordered filter/map/push steps over integer sequences, parsed from their
// text form (`filter:even`, `map:mul:2`, `push:4,5`).
// Core layer: pure logic, no I/O. Arithmetic is checked; overflow is an
// error, never a wrap.

use crate::core::seq::{self, Growth};
use crate::util::constants;
use crate::util::error::PipelineError;
use std::fmt;
use std::str::FromStr;

/// Split `name:operand` into a lowercased name and the optional operand.
fn split_operand(s: &str) -> (String, Option<&str>) {
    match s.split_once(constants::STEP_SEPARATOR) {
        Some((name, operand)) => (name.trim().to_lowercase(), Some(operand.trim())),
        None => (s.trim().to_lowercase(), None),
    }
}

fn require_operand(name: &str, operand: Option<&str>) -> Result<i64, PipelineError> {
    match operand {
        None | Some("") => Err(PipelineError::MissingOperand {
            name: name.to_string(),
        }),
        Some(raw) => raw.parse().map_err(|_| PipelineError::InvalidOperand {
            name: name.to_string(),
            operand: raw.to_string(),
        }),
    }
}

fn reject_operand(name: &str, operand: Option<&str>) -> Result<(), PipelineError> {
    match operand {
        None => Ok(()),
        Some(raw) => Err(PipelineError::UnexpectedOperand {
            name: name.to_string(),
            operand: raw.to_string(),
        }),
    }
}

// =============================================================================
// Predicates
// =============================================================================

/// Named integer predicate used by `filter:` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate {
    Even,
    Odd,
    Positive,
    Negative,
    Zero,
    Eq(i64),
    Ne(i64),
    Gt(i64),
    Ge(i64),
    Lt(i64),
    Le(i64),
}

impl Predicate {
    /// Returns true if `value` satisfies the predicate.
    pub fn test(&self, value: &i64) -> bool {
        let v = *value;
        match *self {
            Self::Even => v % 2 == 0,
            Self::Odd => v % 2 != 0,
            Self::Positive => v > 0,
            Self::Negative => v < 0,
            Self::Zero => v == 0,
            Self::Eq(n) => v == n,
            Self::Ne(n) => v != n,
            Self::Gt(n) => v > n,
            Self::Ge(n) => v >= n,
            Self::Lt(n) => v < n,
            Self::Le(n) => v <= n,
        }
    }
}

impl FromStr for Predicate {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, operand) = split_operand(s);
        let predicate = match name.as_str() {
            "even" => reject_operand(&name, operand).map(|_| Self::Even)?,
            "odd" => reject_operand(&name, operand).map(|_| Self::Odd)?,
            "positive" => reject_operand(&name, operand).map(|_| Self::Positive)?,
            "negative" => reject_operand(&name, operand).map(|_| Self::Negative)?,
            "zero" => reject_operand(&name, operand).map(|_| Self::Zero)?,
            "eq" => Self::Eq(require_operand(&name, operand)?),
            "ne" => Self::Ne(require_operand(&name, operand)?),
            "gt" => Self::Gt(require_operand(&name, operand)?),
            "ge" => Self::Ge(require_operand(&name, operand)?),
            "lt" => Self::Lt(require_operand(&name, operand)?),
            "le" => Self::Le(require_operand(&name, operand)?),
            other => {
                return Err(PipelineError::UnknownPredicate {
                    name: other.to_string(),
                })
            }
        };
        Ok(predicate)
    }
}

impl fmt::Display for Predicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Even => f.write_str("even"),
            Self::Odd => f.write_str("odd"),
            Self::Positive => f.write_str("positive"),
            Self::Negative => f.write_str("negative"),
            Self::Zero => f.write_str("zero"),
            Self::Eq(n) => write!(f, "eq:{n}"),
            Self::Ne(n) => write!(f, "ne:{n}"),
            Self::Gt(n) => write!(f, "gt:{n}"),
            Self::Ge(n) => write!(f, "ge:{n}"),
            Self::Lt(n) => write!(f, "lt:{n}"),
            Self::Le(n) => write!(f, "le:{n}"),
        }
    }
}

// =============================================================================
// Transforms
// =============================================================================

/// Named integer transform used by `map:` steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transform {
    Identity,
    Add(i64),
    Sub(i64),
    Mul(i64),
    Neg,
    Square,
    Abs,
    /// The element's position in the sequence.
    Index,
    /// Element minus its left neighbour; the first element maps to itself.
    Delta,
    /// Sum of every element up to and including this one.
    RunningSum,
}

impl Transform {
    /// Apply the transform to `value`, found at `index` within `seq`.
    pub fn apply(&self, value: &i64, index: usize, seq: &[i64]) -> Result<i64, PipelineError> {
        let v = *value;
        let result = match *self {
            Self::Identity => Some(v),
            Self::Add(n) => v.checked_add(n),
            Self::Sub(n) => v.checked_sub(n),
            Self::Mul(n) => v.checked_mul(n),
            Self::Neg => v.checked_neg(),
            Self::Square => v.checked_mul(v),
            Self::Abs => v.checked_abs(),
            Self::Index => i64::try_from(index).ok(),
            Self::Delta => match index.checked_sub(1).and_then(|prev| seq.get(prev)) {
                Some(prev) => v.checked_sub(*prev),
                None => Some(v),
            },
            Self::RunningSum => seq
                .iter()
                .take(index + 1)
                .try_fold(0i64, |acc, item| acc.checked_add(*item)),
        };
        result.ok_or_else(|| PipelineError::Overflow {
            transform: self.to_string(),
            index,
        })
    }
}

impl FromStr for Transform {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, operand) = split_operand(s);
        let transform = match name.as_str() {
            "identity" => reject_operand(&name, operand).map(|_| Self::Identity)?,
            "add" => Self::Add(require_operand(&name, operand)?),
            "sub" => Self::Sub(require_operand(&name, operand)?),
            "mul" => Self::Mul(require_operand(&name, operand)?),
            "neg" => reject_operand(&name, operand).map(|_| Self::Neg)?,
            "square" => reject_operand(&name, operand).map(|_| Self::Square)?,
            "abs" => reject_operand(&name, operand).map(|_| Self::Abs)?,
            "index" => reject_operand(&name, operand).map(|_| Self::Index)?,
            "delta" => reject_operand(&name, operand).map(|_| Self::Delta)?,
            "running-sum" => reject_operand(&name, operand).map(|_| Self::RunningSum)?,
            other => {
                return Err(PipelineError::UnknownTransform {
                    name: other.to_string(),
                })
            }
        };
        Ok(transform)
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identity => f.write_str("identity"),
            Self::Add(n) => write!(f, "add:{n}"),
            Self::Sub(n) => write!(f, "sub:{n}"),
            Self::Mul(n) => write!(f, "mul:{n}"),
            Self::Neg => f.write_str("neg"),
            Self::Square => f.write_str("square"),
            Self::Abs => f.write_str("abs"),
            Self::Index => f.write_str("index"),
            Self::Delta => f.write_str("delta"),
            Self::RunningSum => f.write_str("running-sum"),
        }
    }
}

// =============================================================================
// Steps and pipelines
// =============================================================================

/// One pipeline instruction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Step {
    Filter(Predicate),
    Map(Transform),
    /// Values appended in order. Empty is a no-op.
    Push(Vec<i64>),
}

impl FromStr for Step {
    type Err = PipelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, rest) = match s.split_once(constants::STEP_SEPARATOR) {
            Some((kind, rest)) => (kind.trim().to_lowercase(), Some(rest)),
            None => (s.trim().to_lowercase(), None),
        };

        match (kind.as_str(), rest) {
            ("filter", Some(rest)) => Ok(Self::Filter(rest.parse()?)),
            ("map", Some(rest)) => Ok(Self::Map(rest.parse()?)),
            (name @ ("filter" | "map"), None) => Err(PipelineError::MissingOperand {
                name: name.to_string(),
            }),
            ("push", rest) => parse_push_values(rest.unwrap_or("")).map(Self::Push),
            _ => Err(PipelineError::UnknownStep {
                step: s.trim().to_string(),
            }),
        }
    }
}

fn parse_push_values(raw: &str) -> Result<Vec<i64>, PipelineError> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parts: Vec<&str> = raw.split(constants::PUSH_VALUE_SEPARATOR).collect();
    if parts.len() > constants::MAX_PUSH_VALUES {
        return Err(PipelineError::TooManyValues {
            count: parts.len(),
            max: constants::MAX_PUSH_VALUES,
        });
    }

    parts
        .into_iter()
        .map(|part| {
            let part = part.trim();
            part.parse().map_err(|_| PipelineError::InvalidOperand {
                name: "push".to_string(),
                operand: part.to_string(),
            })
        })
        .collect()
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filter(p) => write!(f, "filter:{p}"),
            Self::Map(t) => write!(f, "map:{t}"),
            Self::Push(values) => {
                f.write_str("push:")?;
                for (i, v) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, "{}", constants::PUSH_VALUE_SEPARATOR)?;
                    }
                    write!(f, "{v}")?;
                }
                Ok(())
            }
        }
    }
}

/// An ordered list of steps plus the growth policy used by `push` steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pipeline {
    steps: Vec<Step>,
    growth: Growth,
}

impl Pipeline {
    /// Build a pipeline from already-parsed steps.
    pub fn new(steps: Vec<Step>) -> Result<Self, PipelineError> {
        if steps.len() > constants::MAX_PIPELINE_STEPS {
            return Err(PipelineError::TooManySteps {
                count: steps.len(),
                max: constants::MAX_PIPELINE_STEPS,
            });
        }
        Ok(Self {
            steps,
            growth: Growth::default(),
        })
    }

    /// Parse each string as a [`Step`], failing on the first invalid one.
    pub fn parse<I, S>(steps: I) -> Result<Self, PipelineError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let raw: Vec<S> = steps.into_iter().collect();
        if raw.len() > constants::MAX_PIPELINE_STEPS {
            return Err(PipelineError::TooManySteps {
                count: raw.len(),
                max: constants::MAX_PIPELINE_STEPS,
            });
        }

        let parsed = raw
            .iter()
            .map(|s| s.as_ref().parse::<Step>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(parsed)
    }

    /// Set the growth policy used by `push` steps.
    pub fn with_growth(mut self, growth: Growth) -> Self {
        self.growth = growth;
        self
    }

    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    pub fn growth(&self) -> Growth {
        self.growth
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Apply every step in order to `input`.
    pub fn run(&self, input: Vec<i64>) -> Result<Vec<i64>, PipelineError> {
        tracing::debug!(
            steps = self.steps.len(),
            input = input.len(),
            growth = %self.growth,
            "Running pipeline"
        );

        let mut current = input;
        for step in &self.steps {
            match step {
                Step::Filter(predicate) => {
                    current = seq::filter(&current, |v| predicate.test(v));
                }
                Step::Map(transform) => {
                    current = seq::try_map(&current, |v, i, all| transform.apply(v, i, all))?;
                }
                Step::Push(values) => {
                    seq::push_with(&mut current, values.iter().copied(), self.growth);
                }
            }
            tracing::debug!(step = %step, len = current.len(), "Pipeline step applied");
        }

        Ok(current)
    }
}
