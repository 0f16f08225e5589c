use std::fmt;
use std::iter::Sum;
use std::ops::Add;

/// Uniquely identifies a station within one [`TransitNetwork`](crate::TransitNetwork).
///
/// Identity is independent of the display name: two stations registered with
/// the same name are still distinct stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct StationId(pub(crate) usize);

impl StationId {
    pub const fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A registered station: a fresh identity plus its display name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub id: StationId,
    pub name: String,
}

/// Non-negative integer travel cost between two stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Distance(u32);

impl Distance {
    pub const ZERO: Self = Self(0);

    /// Sentinel for "not reachable"; addition saturates here so a saturated
    /// distance can never win a relaxation against a finite one.
    pub const MAX: Self = Self(u32::MAX);

    pub const fn from_units(units: u32) -> Self {
        Self(units)
    }

    pub const fn units(&self) -> u32 {
        self.0
    }

    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }
}

impl Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A directed arc in the route graph: destination station and travel cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: StationId,
    pub weight: Distance,
}

/// A concrete route through the network, returned by the path queries.
///
/// `stations` is never empty: it starts at the query source and ends at the
/// destination, and `distance` is the sum of the traversed edge weights.
/// A source-to-itself route is the single-station sequence with distance zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub distance: Distance,
    pub stations: Vec<StationId>,
}

/// Amount of currency owed for travelling a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Fare(u64);

impl Fare {
    pub const fn from_amount(amount: u64) -> Self {
        Self(amount)
    }

    pub const fn amount(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for Fare {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Converts a route distance into a fare with a fixed linear rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FareSchedule {
    /// Currency units charged per distance unit.
    pub rate: u32,
}

impl FareSchedule {
    pub const fn new(rate: u32) -> Self {
        Self { rate }
    }

    pub const fn fare(&self, distance: Distance) -> Fare {
        Fare::from_amount(distance.units() as u64 * self.rate as u64)
    }
}

impl Default for FareSchedule {
    fn default() -> Self {
        Self { rate: 5 }
    }
}
