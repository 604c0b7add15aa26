pub mod bmi323;
pub mod lsm6dsv;
