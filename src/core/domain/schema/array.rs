use crate::core::domain::{model::array::ArrayState, value_object::serde_helpers::NumberOrString};
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
pub(crate) struct ArrayQuery {
    pub array: ArrayRoot,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArrayRoot {
    pub state: ArrayState,
    pub capacity: ArrayCapacity,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ArrayCapacity {
    pub kilobytes: ArrayCapacityKilobytes,
}

// The server types these as strings.
#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ArrayCapacityKilobytes {
    #[serde_as(as = "NumberOrString")]
    pub free: u64,
    #[serde_as(as = "NumberOrString")]
    pub used: u64,
    #[serde_as(as = "NumberOrString")]
    pub total: u64,
}
