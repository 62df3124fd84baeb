use num_bigint::BigInt;
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::{IntegerRange, RangeName};

#[derive(serde::Serialize)]
struct BoundsRef<'a> {
    start: &'a BigInt,
    stop: &'a BigInt,
    step: &'a BigInt,
}

#[derive(serde::Deserialize)]
struct Bounds {
    start: BigInt,
    stop: BigInt,
    step: BigInt,
}

impl<N: RangeName> Serialize for IntegerRange<N> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        BoundsRef {
            start: self.start(),
            stop: self.stop(),
            step: self.step(),
        }
        .serialize(serializer)
    }
}

/// Restores through the validating constructor, so a stored zero step is
/// rejected rather than producing an invalid range.
impl<'de, N: RangeName> Deserialize<'de> for IntegerRange<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let Bounds { start, stop, step } = Bounds::deserialize(deserializer)?;
        IntegerRange::checked(start, stop, step).map_err(de::Error::custom)
    }
}
