use std::fmt::{Display, Formatter};

use crate::error::{Error, Result};
use crate::problem::dtlz::distance::{g13, g245, g6, g7, DistanceFn};
use crate::problem::dtlz::shape::{curve, disconnected, linear, skewed_spherical, spherical, ShapeFn};

/// The seven members of the DTLZ family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant
{
    Dtlz1,
    Dtlz2,
    Dtlz3,
    Dtlz4,
    Dtlz5,
    Dtlz6,
    Dtlz7,
}

impl Variant
{
    pub const ALL: [Variant; 7] = [
        Variant::Dtlz1,
        Variant::Dtlz2,
        Variant::Dtlz3,
        Variant::Dtlz4,
        Variant::Dtlz5,
        Variant::Dtlz6,
        Variant::Dtlz7,
    ];

    /// The numeric problem id, `1..=7`.
    pub fn id(self) -> u32
    {
        match self {
            Variant::Dtlz1 => 1,
            Variant::Dtlz2 => 2,
            Variant::Dtlz3 => 3,
            Variant::Dtlz4 => 4,
            Variant::Dtlz5 => 5,
            Variant::Dtlz6 => 6,
            Variant::Dtlz7 => 7,
        }
    }

    pub fn distance_fn(self) -> DistanceFn
    {
        match self {
            Variant::Dtlz1 | Variant::Dtlz3 => g13,
            Variant::Dtlz2 | Variant::Dtlz4 | Variant::Dtlz5 => g245,
            Variant::Dtlz6 => g6,
            Variant::Dtlz7 => g7,
        }
    }

    pub fn shape_fn(self) -> ShapeFn
    {
        match self {
            Variant::Dtlz1 => linear,
            Variant::Dtlz2 | Variant::Dtlz3 => spherical,
            Variant::Dtlz4 => skewed_spherical,
            Variant::Dtlz5 | Variant::Dtlz6 => curve,
            Variant::Dtlz7 => disconnected,
        }
    }

    /// Value of each tail variable at which the distance function vanishes.
    pub fn optimal_tail_value(self) -> f64
    {
        match self {
            Variant::Dtlz6 | Variant::Dtlz7 => 0.0,
            _ => 0.5,
        }
    }
}

impl TryFrom<u32> for Variant
{
    type Error = Error;

    fn try_from(prob_id: u32) -> Result<Self>
    {
        match prob_id {
            1 => Ok(Variant::Dtlz1),
            2 => Ok(Variant::Dtlz2),
            3 => Ok(Variant::Dtlz3),
            4 => Ok(Variant::Dtlz4),
            5 => Ok(Variant::Dtlz5),
            6 => Ok(Variant::Dtlz6),
            7 => Ok(Variant::Dtlz7),
            _ => Err(Error::invalid(
                "prob_id",
                format!("DTLZ test suite contains seven (prob_id = [1 ... 7]) problems, prob_id={} was detected", prob_id),
            )),
        }
    }
}

impl Display for Variant
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "DTLZ{}", self.id())
    }
}
