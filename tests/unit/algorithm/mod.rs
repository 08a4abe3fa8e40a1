pub mod bitset;
pub mod selection;
