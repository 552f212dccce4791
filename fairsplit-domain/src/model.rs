use indexmap::IndexMap;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use smol_str::SmolStr;
use std::{
    fmt,
    iter::Sum,
    ops::{Add, AddAssign, Neg, Sub, SubAssign},
};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub SmolStr);

        impl $name {
            pub fn new(value: impl AsRef<str>) -> Self {
                Self(SmolStr::new(value))
            }

            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

string_id!(
    /// Identity of a participant, unique within the storage layer.
    ParticipantId
);
string_id!(ActivityId);
string_id!(EventId);
string_id!(UserId);

/// Exact decimal amount in the event's base unit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// `Money::new(1234, 2)` is 12.34.
    pub fn new(num: i64, scale: u32) -> Self {
        Self(Decimal::new(num, scale))
    }

    pub fn from_i64(value: i64) -> Self {
        Self(Decimal::from(value))
    }

    pub fn from_decimal(value: Decimal) -> Self {
        Self(value)
    }

    pub fn as_decimal(self) -> Decimal {
        self.0
    }

    pub fn abs(self) -> Self {
        Self(self.0.abs())
    }

    pub fn min(self, other: Self) -> Self {
        Self(self.0.min(other.0))
    }

    pub fn is_zero(self) -> bool {
        self.0.is_zero()
    }

    pub fn is_positive(self) -> bool {
        self.0 > Decimal::ZERO
    }

    pub fn is_negative(self) -> bool {
        self.0 < Decimal::ZERO
    }

    /// `None` when the sum leaves the decimal range.
    pub fn checked_add(self, rhs: Self) -> Option<Self> {
        self.0.checked_add(rhs.0).map(Self)
    }

    pub fn checked_sub(self, rhs: Self) -> Option<Self> {
        self.0.checked_sub(rhs.0).map(Self)
    }

    pub fn round_dp_with_strategy(self, scale: u32, strategy: RoundingStrategy) -> Self {
        Self(self.0.round_dp_with_strategy(scale, strategy))
    }

    /// Splits the amount into `count` equal shares at full decimal precision.
    ///
    /// Returns `None` when `count` is zero.
    pub fn share_of(self, count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        self.0.checked_div(Decimal::from(count)).map(Self)
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.normalize())
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self(self.0 - rhs.0)
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: ParticipantId,
    pub event_id: EventId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

impl Participant {
    pub fn new(id: impl Into<ParticipantId>, event_id: impl Into<EventId>, name: &str) -> Self {
        Self {
            id: id.into(),
            event_id: event_id.into(),
            name: name.to_owned(),
            email: None,
            phone: None,
        }
    }
}

/// A single shared expense: `paid_by` fronted `amount`, split equally among
/// `participants`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub id: ActivityId,
    pub event_id: EventId,
    pub description: String,
    pub amount: Money,
    pub paid_by: ParticipantId,
    pub participants: Vec<ParticipantId>,
}

/// Net position per participant, iterated in the order participants were
/// first seen. Positive: owed money. Negative: owes money.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BalanceSheet {
    balances: IndexMap<ParticipantId, Money>,
}

impl BalanceSheet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_participants<'a, I>(ids: I) -> Self
    where
        I: IntoIterator<Item = &'a ParticipantId>,
    {
        let balances = ids
            .into_iter()
            .map(|id| (id.clone(), Money::ZERO))
            .collect();
        Self { balances }
    }

    pub fn contains(&self, id: &ParticipantId) -> bool {
        self.balances.contains_key(id)
    }

    pub fn get(&self, id: &ParticipantId) -> Option<Money> {
        self.balances.get(id).copied()
    }

    /// Adds `delta` to the participant's balance, appending a zero entry first
    /// when the id has not been seen yet. Returns the new balance, or `None`
    /// without touching the sheet when the sum overflows.
    pub fn adjust(&mut self, id: &ParticipantId, delta: Money) -> Option<Money> {
        match self.balances.get_mut(id) {
            Some(balance) => {
                *balance = balance.checked_add(delta)?;
                Some(*balance)
            }
            None => {
                self.balances.insert(id.clone(), delta);
                Some(delta)
            }
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ParticipantId, Money)> + '_ {
        self.balances.iter().map(|(id, money)| (id, *money))
    }

    pub fn total(&self) -> Money {
        self.balances.values().sum()
    }

    pub fn len(&self) -> usize {
        self.balances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl FromIterator<(ParticipantId, Money)> for BalanceSheet {
    fn from_iter<T: IntoIterator<Item = (ParticipantId, Money)>>(iter: T) -> Self {
        Self {
            balances: iter.into_iter().collect(),
        }
    }
}

/// `from` pays `to` the given amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settlement {
    pub from: ParticipantId,
    pub to: ParticipantId,
    pub amount: Money,
}
