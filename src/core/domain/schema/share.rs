use crate::core::domain::value_object::serde_helpers::NumberOrString;
use serde::Deserialize;
use serde_with::serde_as;

#[derive(Debug, Deserialize)]
pub(crate) struct SharesQuery {
    pub shares: Vec<ShareEntry>,
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub(crate) struct ShareEntry {
    pub name: String,
    #[serde_as(as = "NumberOrString")]
    pub free: u64,
    #[serde_as(as = "NumberOrString")]
    pub used: u64,
    #[serde_as(as = "NumberOrString")]
    pub size: u64,
    pub allocator: String,
    pub floor: String,
}
